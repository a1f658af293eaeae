//! Input events delivered by the widget host.
//!
//! The host owns event capture and layout; the inspector only sees plain
//! data: pointer drag deltas and scroll events together with the display
//! rect the preview occupies on screen. The display rect can differ in
//! resolution from the offscreen render surface, so both sizes travel with
//! the events that need the conversion.

use glam::Vec2;

/// On-screen rectangle the preview is displayed in, in host points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayRect {
    /// Top-left corner.
    pub min: Vec2,
    /// Width and height (always positive for a visible rect).
    pub size: Vec2,
}

impl DisplayRect {
    /// Create a rect from origin and size.
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// A rect at the origin with the given size.
    pub fn from_size(width: f32, height: f32) -> Self {
        Self {
            min: Vec2::ZERO,
            size: Vec2::new(width, height),
        }
    }

    /// Rect width.
    pub fn width(&self) -> f32 {
        self.size.x
    }

    /// Rect height.
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Width over height, guarding against degenerate rects.
    pub fn aspect_ratio(&self) -> f32 {
        self.size.x / self.size.y.max(1.0)
    }
}

/// A pointer drag, in display-rect points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragInput {
    /// Pointer movement since the last event.
    pub delta: Vec2,
}

/// A scroll-wheel event over the preview.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollInput {
    /// Pointer position relative to the display rect's origin.
    pub pointer: Vec2,
    /// Device-normalized zoom increment (positive zooms in).
    pub zoom_delta: f32,
}

/// Input events the preview reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PreviewInput {
    /// Pointer drag: orbits in 3D modes, pans in flat-UV mode.
    Drag(DragInput),
    /// Scroll: zooms in flat-UV mode, ignored elsewhere.
    Scroll(ScrollInput),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_ratio_guards_zero_height() {
        let rect = DisplayRect::from_size(300.0, 0.0);
        assert_eq!(rect.aspect_ratio(), 300.0);

        let rect = DisplayRect::from_size(320.0, 240.0);
        assert!((rect.aspect_ratio() - 4.0 / 3.0).abs() < 1e-6);
    }
}
