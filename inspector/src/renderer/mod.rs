//! The external scene-renderer collaborator.
//!
//! The inspector core never talks to a GPU directly. Everything it needs
//! from the host engine is captured by [`SceneRenderer`]: offscreen
//! surfaces, texture upload for the checker pattern, per-frame camera and
//! lighting state, mesh and line draws, and explicit cleanup. Shaders stay
//! opaque; a draw call names a [`PreviewMaterial`](crate::preview::binding::PreviewMaterial)
//! and integer parameters, and the host maps those to whatever pipeline it
//! owns.
//!
//! [`recording::RecordingRenderer`] implements the trait without touching
//! hardware and records every call, which is how the preview logic is
//! tested.

pub mod recording;

use bitflags::bitflags;
use glam::{Mat4, Vec2};
use larkspur_core::MeshData;

use crate::error::InspectorError;
use crate::preview::binding::{PropertyOverrides, RenderBinding};

bitflags! {
    /// Capabilities a renderer reports once at startup.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct RendererCaps: u32 {
        /// Offscreen render targets are available. Without this the
        /// inspector shows a textual fallback instead of a preview.
        const OFFSCREEN_TARGET = 1 << 0;
    }
}

/// Handle to a renderer-owned offscreen surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(pub u64);

/// Handle to a renderer-owned texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u64);

/// CPU-side description of a texture to upload (tightly packed RGBA8).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureDescriptor {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 4` bytes of RGBA8 data.
    pub pixels: Vec<u8>,
    /// Optional debug label.
    pub label: Option<String>,
}

/// An image read back from an offscreen surface (tightly packed RGBA8).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 4` bytes of RGBA8 data.
    pub pixels: Vec<u8>,
}

/// Camera matrices for one preview frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraParams {
    /// World-to-camera matrix.
    pub view: Mat4,
    /// Camera-to-clip matrix.
    pub projection: Mat4,
}

/// Fixed two-light setup used for shaded preview modes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewLighting {
    /// Key light orientation as (pitch, yaw) Euler degrees.
    pub key_rotation: Vec2,
    /// Key light intensity.
    pub key_intensity: f32,
    /// Fill light intensity.
    pub fill_intensity: f32,
    /// Ambient color.
    pub ambient: [f32; 4],
}

impl Default for PreviewLighting {
    fn default() -> Self {
        Self {
            key_rotation: Vec2::new(40.0, 40.0),
            key_intensity: 1.4,
            fill_intensity: 1.4,
            ambient: [0.1, 0.1, 0.1, 0.0],
        }
    }
}

/// Everything a renderer needs to start one preview frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameDesc {
    /// Target surface.
    pub surface: SurfaceId,
    /// Camera matrices.
    pub camera: CameraParams,
    /// Lighting, absent for unlit (flat-UV) frames.
    pub lighting: Option<PreviewLighting>,
    /// Clear color, or `None` to draw over existing content.
    pub clear_color: Option<[f32; 4]>,
    /// Resolved checker texture for bindings that request it.
    pub checker: Option<TextureId>,
}

/// A colored line segment on the UV plane (z = 0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    /// Segment start.
    pub start: Vec2,
    /// Segment end.
    pub end: Vec2,
    /// RGBA color.
    pub color: [f32; 4],
}

impl LineSegment {
    /// Create a segment.
    pub fn new(start: Vec2, end: Vec2, color: [f32; 4]) -> Self {
        Self { start, end, color }
    }
}

/// The scene-renderer capability the inspector consumes.
///
/// Implementations are expected to be cheap to call; the inspector issues a
/// handful of calls per visible frame. All mutating calls happen from the
/// UI/render thread, serialized by the host.
pub trait SceneRenderer {
    /// Capabilities of this renderer.
    fn caps(&self) -> RendererCaps;

    /// Create an offscreen render surface.
    fn create_offscreen_surface(
        &mut self,
        width: u32,
        height: u32,
    ) -> Result<SurfaceId, InspectorError>;

    /// Destroy an offscreen surface.
    fn destroy_surface(&mut self, surface: SurfaceId);

    /// Upload a texture.
    fn create_texture(&mut self, desc: &TextureDescriptor) -> Result<TextureId, InspectorError>;

    /// Destroy a texture.
    fn destroy_texture(&mut self, texture: TextureId);

    /// Begin a frame on a surface: bind camera, lighting, and clear state.
    fn begin_frame(&mut self, frame: &FrameDesc) -> Result<(), InspectorError>;

    /// Draw one submesh of a mesh with the given binding.
    fn draw_mesh(
        &mut self,
        mesh: &MeshData,
        transform: Mat4,
        binding: &RenderBinding,
        submesh: usize,
        overrides: Option<&PropertyOverrides>,
    ) -> Result<(), InspectorError>;

    /// Draw colored line segments on the UV plane.
    fn draw_lines(&mut self, segments: &[LineSegment]) -> Result<(), InspectorError>;

    /// Toggle wireframe rasterization for subsequent mesh draws.
    fn set_wireframe(&mut self, enabled: bool);

    /// Set the ambient fog state, returning the previous value.
    fn set_fog(&mut self, enabled: bool) -> bool;

    /// Flush the frame to the surface.
    fn present(&mut self) -> Result<(), InspectorError>;

    /// Read an offscreen surface back as an image.
    fn read_image(&mut self, surface: SurfaceId) -> Result<PreviewImage, InspectorError>;

    /// Release any renderer-side state the inspector caused to exist.
    fn cleanup(&mut self);
}
