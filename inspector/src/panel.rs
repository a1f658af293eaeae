//! The inspector panel surface.
//!
//! [`InspectorPanel`] is what the editor host talks to: it owns the
//! display-mode controller and camera rig for one inspected selection,
//! routes input events, produces statistics text and menu models, and
//! drives the orchestrator for interactive frames and static thumbnails.
//! The renderer is passed into each call rather than stored, matching how
//! the host threads its device through UI code.

use std::sync::Arc;

use larkspur_core::MeshData;

use crate::error::InspectorError;
use crate::input::{DisplayRect, PreviewInput};
use crate::menu::MenuModel;
use crate::preview::camera::CameraRig;
use crate::preview::mode::{DisplayMode, DisplayModeController};
use crate::preview::orchestrator::PreviewOrchestrator;
use crate::preview::resources::{PoolTicket, PreviewResourcePool};
use crate::renderer::{PreviewImage, RendererCaps, SceneRenderer};
use crate::stats;

/// Fallback text shown when offscreen render targets are unavailable.
pub const UNSUPPORTED_PREVIEW_MESSAGE: &str = "Mesh preview requires\nrender texture support";

/// Result of a render-triggering panel operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// A frame was rendered into the preview surface.
    Rendered,
    /// No mesh is selected; nothing was drawn.
    NothingSelected,
    /// The renderer cannot draw offscreen; show this text instead.
    Unsupported(&'static str),
}

struct PreviewState {
    controller: DisplayModeController,
    rig: CameraRig,
    orchestrator: PreviewOrchestrator,
    ticket: Option<PoolTicket>,
}

impl PreviewState {
    fn new(mesh: Option<&MeshData>) -> Self {
        let mut controller = DisplayModeController::new();
        controller.reload_mesh(mesh);
        Self {
            controller,
            rig: CameraRig::new(),
            orchestrator: PreviewOrchestrator::new(),
            ticket: None,
        }
    }
}

/// Inspector panel for a selection of meshes.
///
/// All mode/camera/UV-channel state is in-memory and reset whenever the
/// inspected selection changes; nothing persists across panels.
pub struct InspectorPanel {
    meshes: Vec<MeshData>,
    pool: Arc<PreviewResourcePool>,
    state: Option<PreviewState>,
}

impl InspectorPanel {
    /// A panel using the process-wide resource pool.
    pub fn new() -> Self {
        Self::with_pool(PreviewResourcePool::global())
    }

    /// A panel using an explicit resource pool (tests use private pools).
    pub fn with_pool(pool: Arc<PreviewResourcePool>) -> Self {
        Self {
            meshes: Vec::new(),
            pool,
            state: None,
        }
    }

    /// Replace the inspected selection, resetting preview state to
    /// defaults. Shared pool resources are kept.
    pub fn set_meshes(&mut self, meshes: Vec<MeshData>) {
        self.meshes = meshes;
        if let Some(state) = &mut self.state {
            let mut controller = DisplayModeController::new();
            controller.reload_mesh(self.meshes.first());
            state.controller = controller;
            state.rig = CameraRig::new();
        }
    }

    /// The inspected selection.
    pub fn meshes(&self) -> &[MeshData] {
        &self.meshes
    }

    /// The mesh the preview shows (the first of the selection).
    pub fn active_mesh(&self) -> Option<&MeshData> {
        self.meshes.first()
    }

    /// The active display mode.
    pub fn display_mode(&self) -> DisplayMode {
        self.state
            .as_ref()
            .map(|state| state.controller.mode())
            .unwrap_or(DisplayMode::Shaded)
    }

    /// The active UV channel.
    pub fn uv_channel(&self) -> usize {
        self.state
            .as_ref()
            .map(|state| state.controller.uv_channel())
            .unwrap_or(0)
    }

    /// Whether the wireframe overlay is enabled.
    pub fn wireframe_enabled(&self) -> bool {
        self.state
            .as_ref()
            .map(|state| state.controller.wireframe_enabled())
            .unwrap_or(true)
    }

    /// The checker tiling multiplier.
    pub fn checker_tiling(&self) -> u32 {
        self.state
            .as_ref()
            .map(|state| state.controller.checker_tiling())
            .unwrap_or(crate::preview::binding::DEFAULT_CHECKER_TILING)
    }

    /// Menu model for the display-mode popup.
    pub fn mode_menu(&self) -> MenuModel {
        match &self.state {
            Some(state) => state.controller.mode_menu(),
            None => PreviewState::new(self.active_mesh()).controller.mode_menu(),
        }
    }

    /// Menu model for the UV-channel popup.
    pub fn uv_channel_menu(&self) -> MenuModel {
        match &self.state {
            Some(state) => state.controller.uv_channel_menu(),
            None => PreviewState::new(self.active_mesh())
                .controller
                .uv_channel_menu(),
        }
    }

    /// Apply a display-mode menu pick. Out-of-range indices are ignored.
    pub fn select_mode(&mut self, index: i32) {
        self.ensure_state();
        if let Some(state) = &mut self.state {
            state.controller.set_mode_index(index, &mut state.rig);
        }
    }

    /// Apply a UV-channel menu pick. Out-of-range indices are ignored.
    pub fn select_uv_channel(&mut self, index: i32) {
        self.ensure_state();
        if let Some(state) = &mut self.state {
            state.controller.set_uv_channel(index);
        }
    }

    /// Toggle the wireframe overlay.
    pub fn set_wireframe(&mut self, enabled: bool) {
        self.ensure_state();
        if let Some(state) = &mut self.state {
            state.controller.set_wireframe(enabled);
        }
    }

    /// Set the checker tiling multiplier (clamped to 1..=30).
    pub fn set_checker_tiling(&mut self, tiling: u32) {
        self.ensure_state();
        if let Some(state) = &mut self.state {
            state.controller.set_checker_tiling(tiling);
        }
    }

    /// Route a pointer event from the widget host.
    ///
    /// Drags orbit in 3D modes and pan in flat-UV mode; scrolls zoom in
    /// flat-UV mode and are ignored elsewhere.
    pub fn handle_input(&mut self, input: PreviewInput, rect: DisplayRect) {
        let surface_size = self.pool.surface_size();
        self.ensure_state();
        let Some(state) = &mut self.state else {
            return;
        };

        let flat_uv = state.controller.mode() == DisplayMode::FlatUv;
        match input {
            PreviewInput::Drag(drag) => {
                if flat_uv {
                    state.rig.pan(drag.delta, rect, surface_size);
                } else {
                    state.rig.drag(drag.delta);
                }
            }
            PreviewInput::Scroll(scroll) => {
                if flat_uv {
                    state.rig.zoom(scroll.pointer, rect, scroll.zoom_delta);
                }
            }
        }
    }

    /// The information-panel text for the current selection.
    pub fn statistics_text(&self) -> String {
        match self.meshes.len() {
            0 => "No mesh selected.".to_string(),
            1 => stats::report(&self.meshes[0]),
            _ => stats::selection_report(&self.meshes),
        }
    }

    /// Render one interactive frame into the shared preview surface sized
    /// to `rect`.
    pub fn render_interactive_frame<R: SceneRenderer>(
        &mut self,
        renderer: &mut R,
        rect: DisplayRect,
    ) -> Result<FrameOutcome, InspectorError> {
        if !renderer.caps().contains(RendererCaps::OFFSCREEN_TARGET) {
            return Ok(FrameOutcome::Unsupported(UNSUPPORTED_PREVIEW_MESSAGE));
        }
        if self.meshes.is_empty() {
            return Ok(FrameOutcome::NothingSelected);
        }

        self.ensure_state();
        self.ensure_ticket(renderer)?;

        let width = rect.width().round().max(1.0) as u32;
        let height = rect.height().round().max(1.0) as u32;
        let surface = self.pool.ensure_surface(renderer, width, height)?;
        let surface_size = self.pool.surface_size();
        let checker = self.pool.checker();

        let Some(state) = &self.state else {
            return Err(InspectorError::Internal(
                "preview state missing after initialization".to_string(),
            ));
        };
        state.orchestrator.render_frame(
            renderer,
            &self.meshes[0],
            &state.controller,
            &state.rig,
            surface,
            surface_size,
            checker,
            None,
        )?;
        Ok(FrameOutcome::Rendered)
    }

    /// Render a static thumbnail into a fresh offscreen surface of the
    /// given dimensions and read it back.
    ///
    /// Returns `Ok(None)` when nothing can be drawn (no mesh, or no
    /// offscreen-target support).
    pub fn render_static_thumbnail<R: SceneRenderer>(
        &mut self,
        renderer: &mut R,
        width: u32,
        height: u32,
    ) -> Result<Option<PreviewImage>, InspectorError> {
        if !renderer.caps().contains(RendererCaps::OFFSCREEN_TARGET) {
            log::debug!("static preview skipped: offscreen render targets unsupported");
            return Ok(None);
        }
        if self.meshes.is_empty() {
            return Ok(None);
        }

        self.ensure_state();
        self.ensure_ticket(renderer)?;

        let width = width.max(1);
        let height = height.max(1);
        let surface = renderer.create_offscreen_surface(width, height)?;
        let checker = self.pool.checker();

        let Some(state) = &self.state else {
            return Err(InspectorError::Internal(
                "preview state missing after initialization".to_string(),
            ));
        };
        let result = state.orchestrator.render_frame(
            renderer,
            &self.meshes[0],
            &state.controller,
            &state.rig,
            surface,
            (width, height),
            checker,
            None,
        );
        let image = result.and_then(|_| renderer.read_image(surface));
        renderer.destroy_surface(surface);
        Ok(Some(image?))
    }

    /// Release shared resources and drop per-panel preview state.
    pub fn teardown<R: SceneRenderer>(&mut self, renderer: &mut R) {
        if let Some(mut state) = self.state.take() {
            if let Some(ticket) = state.ticket.take() {
                self.pool.release(renderer, ticket);
            }
        }
    }

    fn ensure_state(&mut self) {
        if self.state.is_none() {
            self.state = Some(PreviewState::new(self.meshes.first()));
        }
    }

    fn ensure_ticket<R: SceneRenderer>(&mut self, renderer: &mut R) -> Result<(), InspectorError> {
        let Some(state) = &mut self.state else {
            return Ok(());
        };
        if state.ticket.is_none() {
            state.ticket = Some(self.pool.acquire(renderer)?);
        }
        Ok(())
    }
}

impl Default for InspectorPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InspectorPanel {
    fn drop(&mut self) {
        if let Some(state) = &self.state {
            if state.ticket.is_some() {
                log::warn!("inspector panel dropped without teardown");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{DragInput, ScrollInput};
    use crate::renderer::recording::RecordingRenderer;
    use glam::Vec2;
    use larkspur_core::{SubMesh, VertexAttributeDescriptor};

    fn test_panel() -> InspectorPanel {
        InspectorPanel::with_pool(Arc::new(PreviewResourcePool::new()))
    }

    fn sample_mesh() -> MeshData {
        MeshData::new(12)
            .with_attribute(VertexAttributeDescriptor::position())
            .with_attribute(VertexAttributeDescriptor::normal())
            .with_attribute(VertexAttributeDescriptor::tex_coord(0))
            .with_submesh(SubMesh::triangles(0, 60))
    }

    #[test]
    fn unsupported_hardware_yields_fallback_text() {
        let mut panel = test_panel();
        panel.set_meshes(vec![sample_mesh()]);
        let mut renderer = RecordingRenderer::without_offscreen_targets();

        let outcome = panel
            .render_interactive_frame(&mut renderer, DisplayRect::from_size(128.0, 128.0))
            .unwrap();
        assert_eq!(
            outcome,
            FrameOutcome::Unsupported(UNSUPPORTED_PREVIEW_MESSAGE)
        );
        assert!(renderer.commands().is_empty());

        let thumbnail = panel
            .render_static_thumbnail(&mut renderer, 64, 64)
            .unwrap();
        assert!(thumbnail.is_none());
    }

    #[test]
    fn empty_selection_is_a_no_op() {
        let mut panel = test_panel();
        let mut renderer = RecordingRenderer::new();

        let outcome = panel
            .render_interactive_frame(&mut renderer, DisplayRect::from_size(128.0, 128.0))
            .unwrap();
        assert_eq!(outcome, FrameOutcome::NothingSelected);
        assert_eq!(panel.statistics_text(), "No mesh selected.");
    }

    #[test]
    fn interactive_frame_renders_and_reuses_surface() {
        let mut panel = test_panel();
        panel.set_meshes(vec![sample_mesh()]);
        let mut renderer = RecordingRenderer::new();
        let rect = DisplayRect::from_size(200.0, 100.0);

        assert_eq!(
            panel.render_interactive_frame(&mut renderer, rect).unwrap(),
            FrameOutcome::Rendered
        );
        let surface = panel.pool.surface().unwrap();
        assert_eq!(panel.pool.surface_size(), (200, 100));

        assert_eq!(
            panel.render_interactive_frame(&mut renderer, rect).unwrap(),
            FrameOutcome::Rendered
        );
        assert_eq!(panel.pool.surface(), Some(surface));

        panel.teardown(&mut renderer);
        assert_eq!(panel.pool.surface(), None);
        assert_eq!(panel.pool.refcount(), 0);
    }

    #[test]
    fn static_thumbnail_matches_requested_size() {
        let mut panel = test_panel();
        panel.set_meshes(vec![sample_mesh()]);
        let mut renderer = RecordingRenderer::new();

        let image = panel
            .render_static_thumbnail(&mut renderer, 96, 48)
            .unwrap()
            .unwrap();
        assert_eq!((image.width, image.height), (96, 48));

        panel.teardown(&mut renderer);
    }

    #[test]
    fn selection_change_resets_preview_state() {
        let mut panel = test_panel();
        panel.set_meshes(vec![sample_mesh()]);
        panel.select_mode(DisplayMode::FlatUv.index() as i32);
        panel.select_uv_channel(0);
        assert_eq!(panel.display_mode(), DisplayMode::FlatUv);

        panel.set_meshes(vec![sample_mesh(), sample_mesh()]);
        assert_eq!(panel.display_mode(), DisplayMode::Shaded);
        assert!(panel.wireframe_enabled());
    }

    #[test]
    fn input_routing_follows_mode() {
        let mut panel = test_panel();
        panel.set_meshes(vec![sample_mesh()]);
        let rect = DisplayRect::from_size(100.0, 100.0);

        panel.handle_input(
            PreviewInput::Drag(DragInput {
                delta: Vec2::new(30.0, -10.0),
            }),
            rect,
        );
        let state = panel.state.as_ref().unwrap();
        assert_eq!(state.rig.orbit_direction(), Some(Vec2::new(30.0, -10.0)));

        // Scroll is ignored outside flat UV.
        panel.handle_input(
            PreviewInput::Scroll(ScrollInput {
                pointer: Vec2::new(50.0, 50.0),
                zoom_delta: 10.0,
            }),
            rect,
        );
        let state = panel.state.as_ref().unwrap();
        assert!(!state.rig.is_ortho());

        panel.select_mode(DisplayMode::FlatUv.index() as i32);
        panel.handle_input(
            PreviewInput::Scroll(ScrollInput {
                pointer: Vec2::new(50.0, 50.0),
                zoom_delta: 10.0,
            }),
            rect,
        );
        let state = panel.state.as_ref().unwrap();
        let zoom = state.rig.ortho_state().unwrap().zoom;
        assert!(zoom > 1.0);
    }

    #[test]
    fn statistics_text_for_multi_selection() {
        let mut panel = test_panel();
        panel.set_meshes(vec![sample_mesh(), sample_mesh(), sample_mesh()]);
        assert_eq!(
            panel.statistics_text(),
            "3 meshes selected, 36 total vertices, 180 total indices"
        );
    }

    #[test]
    fn mode_menu_reflects_mesh_availability_before_first_frame() {
        let mut panel = test_panel();
        panel.set_meshes(vec![sample_mesh()]);
        let menu = panel.mode_menu();
        assert!(menu.items[DisplayMode::Normals.index()].enabled);
        assert!(!menu.items[DisplayMode::VertexColor.index()].enabled);
    }
}
