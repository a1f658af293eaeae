//! Submesh tint palette.
//!
//! Multi-submesh shaded previews tint each submesh so adjacent ranges stay
//! distinguishable. Hues step by the golden-ratio conjugate, which spreads
//! consecutive indices far apart on the hue wheel; index 0 stays neutral so
//! the base submesh keeps the material's own color.

/// Fractional part of the golden ratio, used as the hue increment.
const GOLDEN_RATIO_CONJUGATE: f64 = 0.618_033_988_749_895;

/// Saturation applied to every submesh after the first.
const TINT_SATURATION: f32 = 0.3;

/// Deterministic tint for a submesh index, as RGBA.
///
/// Pure and total over all indices: index 0 is neutral (saturation 0),
/// every other index gets saturation 0.3 at full value.
pub fn submesh_tint(index: usize) -> [f32; 4] {
    let hue = tint_hue(index);
    let saturation = if index == 0 { 0.0 } else { TINT_SATURATION };
    let (r, g, b) = hsv_to_rgb(hue, saturation, 1.0);
    [r, g, b, 1.0]
}

/// Hue assigned to a submesh index, in [0, 1).
fn tint_hue(index: usize) -> f32 {
    (index as f64 * GOLDEN_RATIO_CONJUGATE).fract() as f32
}

fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> (f32, f32, f32) {
    let h = (hue.fract() + 1.0).fract() * 6.0;
    let sector = h.floor();
    let f = h - sector;

    let p = value * (1.0 - saturation);
    let q = value * (1.0 - saturation * f);
    let t = value * (1.0 - saturation * (1.0 - f));

    match sector as u32 % 6 {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    }
}
