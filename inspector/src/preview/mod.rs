//! Mesh preview rendering.
//!
//! The preview is split along its moving parts:
//! - [`mode`] - the display-mode state machine and availability gating
//! - [`binding`] - material/parameter bindings rebuilt on transitions
//! - [`camera`] - orbit and flat-UV cameras
//! - [`flat_uv`] - the UV-space grid and wireframe visualization
//! - [`palette`] - deterministic submesh tint colors
//! - [`resources`] - process-wide shared checker/surface pool
//! - [`orchestrator`] - assembling all of the above into one frame

pub mod binding;
pub mod camera;
pub mod flat_uv;
pub mod mode;
pub mod orchestrator;
pub mod palette;
pub mod resources;

pub use binding::{BoundTexture, PreviewMaterial, PropertyOverrides, RenderBinding};
pub use camera::{CameraRig, CameraState, OrbitState, OrthoState};
pub use mode::{DisplayMode, DisplayModeController, ModeAvailability};
pub use orchestrator::PreviewOrchestrator;
pub use resources::{PoolTicket, PreviewResourcePool};
