//! Material bindings for preview draws.
//!
//! Shaders are opaque to the inspector; a binding names one of the four
//! preview materials plus the integer parameters the multi-preview shader
//! exposes (a mode selector and a UV-channel selector) and the optional
//! checker texture with its tiling multiplier. The controller rebuilds the
//! binding on every display-mode transition.

/// The preview materials the host renderer provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreviewMaterial {
    /// Standard lit material for shaded previews.
    Shaded,
    /// Multi-purpose unlit preview material driven by the mode parameter
    /// (UV checker, flattened UVs, vertex color, normals, tangents).
    MultiPreview,
    /// Translucent overlay material for wireframe passes.
    Wireframe,
    /// Blended line material for the UV reference grid.
    Line,
}

/// Texture bound to the active material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundTexture {
    /// No texture bound.
    #[default]
    None,
    /// The shared checker pattern, tiled by the binding's texture scale.
    Checker,
}

/// Checker tiling multiplier bounds.
pub const CHECKER_TILING_RANGE: std::ops::RangeInclusive<u32> = 1..=30;

/// Default checker tiling multiplier.
pub const DEFAULT_CHECKER_TILING: u32 = 10;

/// The currently active material and its bound parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderBinding {
    /// Active material.
    pub material: PreviewMaterial,
    /// Integer mode selector consumed by the multi-preview shader.
    pub mode_param: i32,
    /// Integer UV-channel selector consumed by the multi-preview shader.
    pub uv_channel_param: i32,
    /// Bound texture.
    pub texture: BoundTexture,
    /// Checker tiling multiplier, meaningful when the checker is bound.
    pub texture_scale: u32,
}

impl RenderBinding {
    /// The default binding: shaded material, all parameters cleared.
    pub fn shaded() -> Self {
        Self {
            material: PreviewMaterial::Shaded,
            mode_param: 0,
            uv_channel_param: 0,
            texture: BoundTexture::None,
            texture_scale: DEFAULT_CHECKER_TILING,
        }
    }

    /// The binding used for wireframe overlay passes.
    pub fn wireframe_overlay() -> Self {
        Self {
            material: PreviewMaterial::Wireframe,
            mode_param: 0,
            uv_channel_param: 0,
            texture: BoundTexture::None,
            texture_scale: DEFAULT_CHECKER_TILING,
        }
    }

    /// Whether this binding samples the checker pattern.
    pub fn wants_checker(&self) -> bool {
        self.texture == BoundTexture::Checker
    }
}

impl Default for RenderBinding {
    fn default() -> Self {
        Self::shaded()
    }
}

/// Per-draw material property overrides.
///
/// The preview only overrides a tint color (submesh differentiation), but
/// the struct leaves room for more without changing the draw signature.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PropertyOverrides {
    /// RGBA tint multiplied into the material's base color.
    pub tint: Option<[f32; 4]>,
}

impl PropertyOverrides {
    /// Overrides carrying only a tint.
    pub fn tinted(tint: [f32; 4]) -> Self {
        Self { tint: Some(tint) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_binding_is_shaded_and_clear() {
        let binding = RenderBinding::default();
        assert_eq!(binding.material, PreviewMaterial::Shaded);
        assert_eq!(binding.mode_param, 0);
        assert_eq!(binding.uv_channel_param, 0);
        assert!(!binding.wants_checker());
    }

    #[test]
    fn checker_detection() {
        let mut binding = RenderBinding::shaded();
        binding.texture = BoundTexture::Checker;
        assert!(binding.wants_checker());
    }
}
