//! Frame assembly.
//!
//! [`PreviewOrchestrator`] turns the current controller/rig state into one
//! rendered frame: camera and lighting setup, the per-submesh shaded pass
//! (with automatic tints for unfiltered multi-submesh shaded previews), the
//! wireframe overlay pass, and the flat-UV special case. Both the
//! interactive preview and the static thumbnail path go through
//! [`PreviewOrchestrator::render_frame`].

use std::ops::{Deref, DerefMut};

use larkspur_core::MeshData;

use crate::error::InspectorError;
use crate::preview::binding::{PropertyOverrides, RenderBinding};
use crate::preview::camera::CameraRig;
use crate::preview::flat_uv;
use crate::preview::mode::{DisplayMode, DisplayModeController};
use crate::preview::palette;
use crate::renderer::{FrameDesc, PreviewLighting, SceneRenderer, SurfaceId, TextureId};

/// Clear color of the preview surface.
const CLEAR_COLOR: [f32; 4] = [0.055, 0.063, 0.078, 1.0];

/// Scoped fog override.
///
/// Fog is disabled for the duration of a preview frame; the previous state
/// is restored when the override drops, including on error paths that bail
/// out of the frame early.
struct FogOverride<'r, R: SceneRenderer + ?Sized> {
    renderer: &'r mut R,
    previous: bool,
}

impl<'r, R: SceneRenderer + ?Sized> FogOverride<'r, R> {
    fn disable(renderer: &'r mut R) -> Self {
        let previous = renderer.set_fog(false);
        Self { renderer, previous }
    }
}

impl<R: SceneRenderer + ?Sized> Deref for FogOverride<'_, R> {
    type Target = R;

    fn deref(&self) -> &R {
        self.renderer
    }
}

impl<R: SceneRenderer + ?Sized> DerefMut for FogOverride<'_, R> {
    fn deref_mut(&mut self) -> &mut R {
        self.renderer
    }
}

impl<R: SceneRenderer + ?Sized> Drop for FogOverride<'_, R> {
    fn drop(&mut self) {
        self.renderer.set_fog(self.previous);
    }
}

/// Coordinates one "render one frame" operation.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewOrchestrator {
    lighting: PreviewLighting,
}

impl PreviewOrchestrator {
    /// An orchestrator with the standard preview lighting.
    pub fn new() -> Self {
        Self {
            lighting: PreviewLighting::default(),
        }
    }

    /// The lighting bound for shaded frames.
    pub fn lighting(&self) -> &PreviewLighting {
        &self.lighting
    }

    /// Render one frame of the preview into `surface`.
    ///
    /// `submesh_filter` restricts drawing to a single submesh; out-of-range
    /// filters fall back to the whole mesh. In shaded mode with multiple
    /// submeshes and no filter, each submesh gets a deterministic tint so
    /// the ranges stay distinguishable.
    #[allow(clippy::too_many_arguments)]
    pub fn render_frame<R: SceneRenderer + ?Sized>(
        &self,
        renderer: &mut R,
        mesh: &MeshData,
        controller: &DisplayModeController,
        rig: &CameraRig,
        surface: SurfaceId,
        surface_size: (u32, u32),
        checker: Option<TextureId>,
        submesh_filter: Option<usize>,
    ) -> Result<(), InspectorError> {
        let bounds = mesh.bounds();
        let aspect = surface_size.0.max(1) as f32 / surface_size.1.max(1) as f32;
        let mode = controller.mode();

        let frame = FrameDesc {
            surface,
            camera: rig.camera_params(bounds, aspect),
            lighting: (mode != DisplayMode::FlatUv).then_some(self.lighting),
            clear_color: Some(CLEAR_COLOR),
            checker: if controller.binding().wants_checker() {
                checker
            } else {
                None
            },
        };
        let transform = rig.model_transform(bounds);

        let mut renderer = FogOverride::disable(renderer);
        renderer.begin_frame(&frame)?;

        // Flat UV never touches the 3D shaded/wireframe path.
        if mode == DisplayMode::FlatUv {
            flat_uv::render(&mut *renderer, mesh, transform, controller.binding())?;
            renderer.present()?;
            return Ok(());
        }

        let submesh_count = mesh.submesh_count();
        let scope: Vec<usize> = match submesh_filter {
            Some(filtered) if filtered < submesh_count => vec![filtered],
            _ => (0..submesh_count).collect(),
        };
        let auto_tint =
            mode == DisplayMode::Shaded && submesh_count > 1 && submesh_filter.is_none();

        for &submesh in &scope {
            let overrides =
                auto_tint.then(|| PropertyOverrides::tinted(palette::submesh_tint(submesh)));
            renderer.draw_mesh(
                mesh,
                transform,
                controller.binding(),
                submesh,
                overrides.as_ref(),
            )?;
        }

        if controller.wireframe_enabled() {
            let overlay = RenderBinding::wireframe_overlay();
            renderer.set_wireframe(true);
            let result = scope
                .iter()
                .filter(|&&submesh| {
                    // Points, lines, and line strips already read as wires.
                    mesh.submesh(submesh)
                        .is_some_and(|sub| !sub.topology.is_wire_like())
                })
                .try_for_each(|&submesh| {
                    renderer.draw_mesh(mesh, transform, &overlay, submesh, None)
                });
            renderer.set_wireframe(false);
            result?;
        }

        renderer.present()?;
        Ok(())
    }
}

impl Default for PreviewOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}
