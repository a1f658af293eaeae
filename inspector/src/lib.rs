//! # Larkspur Mesh Inspector
//!
//! Editor-side inspector and preview renderer for mesh assets.
//!
//! This crate provides:
//! - [`panel::InspectorPanel`] - the surface the editor host embeds:
//!   statistics text, display-mode menus, input routing, interactive
//!   preview frames, and static thumbnails
//! - [`preview`] - the display-mode state machine, cameras, flat-UV
//!   visualization, and frame orchestration behind the panel
//! - [`stats`] - derived mesh statistics, queryable independently of the
//!   render loop
//! - [`renderer::SceneRenderer`] - the trait the host's renderer implements
//!   so the inspector never owns GPU state itself
//!
//! ## Example
//!
//! ```
//! use larkspur_inspector::input::DisplayRect;
//! use larkspur_inspector::panel::{FrameOutcome, InspectorPanel};
//! use larkspur_inspector::preview::PreviewResourcePool;
//! use larkspur_inspector::renderer::recording::RecordingRenderer;
//! use larkspur_core::{MeshData, SubMesh, VertexAttributeDescriptor};
//! use std::sync::Arc;
//!
//! let mut renderer = RecordingRenderer::new();
//! let mut panel = InspectorPanel::with_pool(Arc::new(PreviewResourcePool::new()));
//! panel.set_meshes(vec![
//!     MeshData::new(12)
//!         .with_attribute(VertexAttributeDescriptor::position())
//!         .with_submesh(SubMesh::triangles(0, 60)),
//! ]);
//!
//! let outcome = panel
//!     .render_interactive_frame(&mut renderer, DisplayRect::from_size(256.0, 256.0))
//!     .unwrap();
//! assert_eq!(outcome, FrameOutcome::Rendered);
//! panel.teardown(&mut renderer);
//! ```

pub mod error;
pub mod input;
pub mod menu;
pub mod panel;
pub mod preview;
pub mod renderer;
pub mod stats;

#[cfg(feature = "widget")]
pub mod widget;

pub use error::InspectorError;
pub use panel::{FrameOutcome, InspectorPanel, UNSUPPORTED_PREVIEW_MESSAGE};
pub use preview::{
    CameraRig, DisplayMode, DisplayModeController, PreviewOrchestrator, PreviewResourcePool,
};
pub use renderer::{RendererCaps, SceneRenderer};

/// Inspector library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
