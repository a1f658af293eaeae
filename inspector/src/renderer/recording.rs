//! Recording renderer for tests and development.
//!
//! Implements [`SceneRenderer`] without touching hardware: every call is
//! appended to a command log that tests inspect. Capabilities and draw
//! failures are configurable so fallback and error-recovery paths can be
//! exercised.

use glam::Mat4;
use larkspur_core::MeshData;
use std::collections::HashMap;

use crate::error::InspectorError;
use crate::preview::binding::{PreviewMaterial, PropertyOverrides, RenderBinding};

use super::{
    FrameDesc, LineSegment, PreviewImage, RendererCaps, SceneRenderer, SurfaceId, TextureDescriptor,
    TextureId,
};

/// One recorded renderer call.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// `create_offscreen_surface`.
    CreateSurface {
        /// Assigned handle.
        surface: SurfaceId,
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// `destroy_surface`.
    DestroySurface(SurfaceId),
    /// `create_texture`.
    CreateTexture {
        /// Assigned handle.
        texture: TextureId,
        /// Uploaded width.
        width: u32,
        /// Uploaded height.
        height: u32,
    },
    /// `destroy_texture`.
    DestroyTexture(TextureId),
    /// `begin_frame`.
    BeginFrame {
        /// Target surface.
        surface: SurfaceId,
        /// Whether the frame clears the target.
        cleared: bool,
        /// Whether lighting was supplied.
        lit: bool,
        /// Checker texture resolved for the frame.
        checker: Option<TextureId>,
    },
    /// `draw_mesh`.
    DrawMesh {
        /// Material of the binding.
        material: PreviewMaterial,
        /// Mode parameter of the binding.
        mode_param: i32,
        /// UV-channel parameter of the binding.
        uv_channel_param: i32,
        /// Whether the binding requested the checker texture.
        checker: bool,
        /// Submesh index drawn.
        submesh: usize,
        /// Wireframe rasterization state at draw time.
        wireframe: bool,
        /// Tint override, if any.
        tint: Option<[f32; 4]>,
    },
    /// `draw_lines`.
    DrawLines {
        /// The submitted segments.
        segments: Vec<LineSegment>,
    },
    /// `set_wireframe`.
    SetWireframe(bool),
    /// `set_fog`.
    SetFog(bool),
    /// `present`.
    Present,
    /// `read_image`.
    ReadImage(SurfaceId),
    /// `cleanup`.
    Cleanup,
}

/// A [`SceneRenderer`] that records calls instead of rendering.
#[derive(Debug)]
pub struct RecordingRenderer {
    caps: RendererCaps,
    commands: Vec<RenderCommand>,
    surfaces: HashMap<SurfaceId, (u32, u32)>,
    fog: bool,
    wireframe: bool,
    next_id: u64,
    fail_draws: bool,
}

impl RecordingRenderer {
    /// A renderer with offscreen-target support.
    pub fn new() -> Self {
        Self {
            caps: RendererCaps::OFFSCREEN_TARGET,
            commands: Vec::new(),
            surfaces: HashMap::new(),
            fog: true,
            wireframe: false,
            next_id: 1,
            fail_draws: false,
        }
    }

    /// A renderer reporting no offscreen-target capability.
    pub fn without_offscreen_targets() -> Self {
        Self {
            caps: RendererCaps::empty(),
            ..Self::new()
        }
    }

    /// Make every subsequent draw call fail.
    pub fn with_failing_draws(mut self) -> Self {
        self.fail_draws = true;
        self
    }

    /// The recorded command log.
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Clear the command log (resource state is kept).
    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    /// Current fog state.
    pub fn fog_enabled(&self) -> bool {
        self.fog
    }

    /// Recorded mesh draws, in submission order.
    pub fn mesh_draws(&self) -> impl Iterator<Item = &RenderCommand> {
        self.commands
            .iter()
            .filter(|command| matches!(command, RenderCommand::DrawMesh { .. }))
    }

    /// Recorded line batches, in submission order.
    pub fn line_batches(&self) -> impl Iterator<Item = &[LineSegment]> {
        self.commands.iter().filter_map(|command| match command {
            RenderCommand::DrawLines { segments } => Some(segments.as_slice()),
            _ => None,
        })
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl Default for RecordingRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneRenderer for RecordingRenderer {
    fn caps(&self) -> RendererCaps {
        self.caps
    }

    fn create_offscreen_surface(
        &mut self,
        width: u32,
        height: u32,
    ) -> Result<SurfaceId, InspectorError> {
        if !self.caps.contains(RendererCaps::OFFSCREEN_TARGET) {
            return Err(InspectorError::FeatureNotSupported(
                "offscreen render targets".to_string(),
            ));
        }
        let surface = SurfaceId(self.next_id());
        self.surfaces.insert(surface, (width, height));
        self.commands.push(RenderCommand::CreateSurface {
            surface,
            width,
            height,
        });
        log::trace!("RecordingRenderer: created surface {surface:?} ({width}x{height})");
        Ok(surface)
    }

    fn destroy_surface(&mut self, surface: SurfaceId) {
        self.surfaces.remove(&surface);
        self.commands.push(RenderCommand::DestroySurface(surface));
    }

    fn create_texture(&mut self, desc: &TextureDescriptor) -> Result<TextureId, InspectorError> {
        if desc.pixels.len() != (desc.width * desc.height * 4) as usize {
            return Err(InspectorError::ResourceCreationFailed(format!(
                "texture {:?}: expected {} bytes, got {}",
                desc.label,
                desc.width * desc.height * 4,
                desc.pixels.len()
            )));
        }
        let texture = TextureId(self.next_id());
        self.commands.push(RenderCommand::CreateTexture {
            texture,
            width: desc.width,
            height: desc.height,
        });
        Ok(texture)
    }

    fn destroy_texture(&mut self, texture: TextureId) {
        self.commands.push(RenderCommand::DestroyTexture(texture));
    }

    fn begin_frame(&mut self, frame: &FrameDesc) -> Result<(), InspectorError> {
        self.commands.push(RenderCommand::BeginFrame {
            surface: frame.surface,
            cleared: frame.clear_color.is_some(),
            lit: frame.lighting.is_some(),
            checker: frame.checker,
        });
        Ok(())
    }

    fn draw_mesh(
        &mut self,
        _mesh: &MeshData,
        _transform: Mat4,
        binding: &RenderBinding,
        submesh: usize,
        overrides: Option<&PropertyOverrides>,
    ) -> Result<(), InspectorError> {
        if self.fail_draws {
            return Err(InspectorError::DrawFailed("injected failure".to_string()));
        }
        self.commands.push(RenderCommand::DrawMesh {
            material: binding.material,
            mode_param: binding.mode_param,
            uv_channel_param: binding.uv_channel_param,
            checker: binding.wants_checker(),
            submesh,
            wireframe: self.wireframe,
            tint: overrides.and_then(|o| o.tint),
        });
        Ok(())
    }

    fn draw_lines(&mut self, segments: &[LineSegment]) -> Result<(), InspectorError> {
        if self.fail_draws {
            return Err(InspectorError::DrawFailed("injected failure".to_string()));
        }
        self.commands.push(RenderCommand::DrawLines {
            segments: segments.to_vec(),
        });
        Ok(())
    }

    fn set_wireframe(&mut self, enabled: bool) {
        self.wireframe = enabled;
        self.commands.push(RenderCommand::SetWireframe(enabled));
    }

    fn set_fog(&mut self, enabled: bool) -> bool {
        let previous = self.fog;
        self.fog = enabled;
        self.commands.push(RenderCommand::SetFog(enabled));
        previous
    }

    fn present(&mut self) -> Result<(), InspectorError> {
        self.commands.push(RenderCommand::Present);
        Ok(())
    }

    fn read_image(&mut self, surface: SurfaceId) -> Result<PreviewImage, InspectorError> {
        self.commands.push(RenderCommand::ReadImage(surface));
        let (width, height) = self.surfaces.get(&surface).copied().ok_or_else(|| {
            InspectorError::Internal(format!("read_image on unknown surface {surface:?}"))
        })?;
        Ok(PreviewImage {
            width,
            height,
            pixels: vec![0; (width * height * 4) as usize],
        })
    }

    fn cleanup(&mut self) {
        self.commands.push(RenderCommand::Cleanup);
        self.surfaces.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_lifecycle() {
        let mut renderer = RecordingRenderer::new();
        let surface = renderer.create_offscreen_surface(64, 32).unwrap();
        let image = renderer.read_image(surface).unwrap();
        assert_eq!((image.width, image.height), (64, 32));
        assert_eq!(image.pixels.len(), 64 * 32 * 4);

        renderer.destroy_surface(surface);
        assert!(renderer.read_image(surface).is_err());
    }

    #[test]
    fn missing_caps_refuse_surfaces() {
        let mut renderer = RecordingRenderer::without_offscreen_targets();
        assert!(renderer.create_offscreen_surface(4, 4).is_err());
    }

    #[test]
    fn fog_returns_previous_state() {
        let mut renderer = RecordingRenderer::new();
        assert!(renderer.set_fog(false));
        assert!(!renderer.set_fog(true));
        assert!(renderer.fog_enabled());
    }

    #[test]
    fn texture_size_validated() {
        let mut renderer = RecordingRenderer::new();
        let bad = TextureDescriptor {
            width: 2,
            height: 2,
            pixels: vec![0; 3],
            label: None,
        };
        assert!(renderer.create_texture(&bad).is_err());
    }
}
