//! Preview cameras.
//!
//! [`CameraRig`] owns two mutually exclusive view states: an orbit camera
//! for the 3D display modes and a pan/zoom orthographic camera for flat-UV
//! mode. The orbit distance is derived from the active mesh's bounds every
//! frame, so switching between meshes of very different scale always keeps
//! the content framed.

use glam::{Mat4, Quat, Vec2, Vec3};
use larkspur_core::Bounds;

use crate::input::DisplayRect;
use crate::renderer::CameraParams;

/// Valid orthographic zoom factors.
pub const ZOOM_RANGE: std::ops::RangeInclusive<f32> = 0.1..=10.0;

/// Vertical field of view of the orbit camera, in degrees.
const FOV_Y_DEGREES: f32 = 30.0;
/// Near clip plane shared by both cameras.
const NEAR_PLANE: f32 = 0.0001;
/// Far clip plane shared by both cameras.
const FAR_PLANE: f32 = 1000.0;
/// Orbit distance as a multiple of the bounding-sphere radius.
const FRAME_DISTANCE_FACTOR: f32 = 4.0;
/// Fixed depth of the orthographic camera in front of the UV plane.
const ORTHO_CAMERA_DEPTH: f32 = -1.0;
/// Scale applied to the device-reported zoom increment.
const ZOOM_STEP_SCALE: f32 = 0.5 * 0.05;

/// Orbit view state: accumulated drag as (yaw, pitch) in degrees.
///
/// Unclamped; full rotational freedom is intentional.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrbitState {
    /// Accumulated (yaw, pitch) in degrees.
    pub direction: Vec2,
}

/// Orthographic view state for flat-UV mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthoState {
    /// Zoom factor (orthographic half-height), within [`ZOOM_RANGE`].
    pub zoom: f32,
    /// Camera position on the UV plane.
    pub pan: Vec2,
}

impl Default for OrthoState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: Vec2::ZERO,
        }
    }
}

/// The live view state, discriminated by display mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraState {
    /// 3D orbit camera.
    Orbit(OrbitState),
    /// 2D pan/zoom orthographic camera.
    Ortho2D(OrthoState),
}

/// Owns the preview view state and the math that turns input events and
/// mesh bounds into camera matrices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    state: CameraState,
}

impl CameraRig {
    /// A rig in the default orbit state.
    pub fn new() -> Self {
        Self {
            state: CameraState::Orbit(OrbitState::default()),
        }
    }

    /// The live view state.
    pub fn state(&self) -> &CameraState {
        &self.state
    }

    /// Whether the orthographic camera is live.
    pub fn is_ortho(&self) -> bool {
        matches!(self.state, CameraState::Ortho2D(_))
    }

    /// Reset to the default orbit state.
    pub fn reset_orbit(&mut self) {
        self.state = CameraState::Orbit(OrbitState::default());
    }

    /// Reset to the default orthographic state.
    pub fn reset_ortho(&mut self) {
        self.state = CameraState::Ortho2D(OrthoState::default());
    }

    /// Current orbit direction, if orbiting.
    pub fn orbit_direction(&self) -> Option<Vec2> {
        match &self.state {
            CameraState::Orbit(orbit) => Some(orbit.direction),
            CameraState::Ortho2D(_) => None,
        }
    }

    /// Current orthographic state, if live.
    pub fn ortho_state(&self) -> Option<OrthoState> {
        match &self.state {
            CameraState::Orbit(_) => None,
            CameraState::Ortho2D(ortho) => Some(*ortho),
        }
    }

    /// Accumulate a drag into the orbit direction. No clamping.
    ///
    /// Ignored while the orthographic camera is live; flat-UV drags go
    /// through [`CameraRig::pan`].
    pub fn drag(&mut self, delta: Vec2) {
        if let CameraState::Orbit(orbit) = &mut self.state {
            orbit.direction += delta;
        }
    }

    /// Zoom the orthographic camera around the pointer.
    ///
    /// `zoom_delta` is the device-reported "nice" increment. The point
    /// under the pointer stays under the pointer: zoom is pointer-centered,
    /// not camera-centered.
    pub fn zoom(&mut self, pointer: Vec2, rect: DisplayRect, zoom_delta: f32) {
        let CameraState::Ortho2D(state) = &mut self.state else {
            return;
        };
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return;
        }

        let delta = zoom_delta * ZOOM_STEP_SCALE;
        let new_zoom = (state.zoom + state.zoom * delta).clamp(*ZOOM_RANGE.start(), *ZOOM_RANGE.end());

        let half = Vec2::new(state.zoom * rect.aspect_ratio(), state.zoom);
        let view = Vec2::new(pointer.x / rect.width(), 1.0 - pointer.y / rect.height());
        let pointer_world = state.pan + (view - Vec2::splat(0.5)) * 2.0 * half;

        state.pan = pointer_world + (state.pan - pointer_world) * (new_zoom / state.zoom);
        state.zoom = new_zoom;
    }

    /// Pan the orthographic camera by a display-rect pointer delta.
    ///
    /// The delta is converted to render-target pixels first (the offscreen
    /// surface can differ in resolution from the on-screen rect), then to
    /// world units, with Y inverted relative to the screen delta.
    pub fn pan(&mut self, delta: Vec2, rect: DisplayRect, surface_size: (u32, u32)) {
        let CameraState::Ortho2D(state) = &mut self.state else {
            return;
        };
        let (surface_w, surface_h) = surface_size;
        if rect.width() <= 0.0 || rect.height() <= 0.0 || surface_w == 0 || surface_h == 0 {
            return;
        }

        let pixel_delta = Vec2::new(
            -delta.x * surface_w as f32 / rect.width(),
            delta.y * surface_h as f32 / rect.height(),
        );
        let world_per_pixel = Vec2::new(
            2.0 * state.zoom * rect.aspect_ratio() / surface_w as f32,
            2.0 * state.zoom / surface_h as f32,
        );
        state.pan += pixel_delta * world_per_pixel;
    }

    /// Camera matrices for the current state.
    ///
    /// The orbit distance is recomputed from `bounds` on every call rather
    /// than cached, so the camera always frames the active mesh.
    pub fn camera_params(&self, bounds: Bounds, aspect: f32) -> CameraParams {
        match &self.state {
            CameraState::Orbit(orbit) => {
                let distance = FRAME_DISTANCE_FACTOR * bounds.sphere_radius();
                let rotation = Quat::from_rotation_x(-orbit.direction.y.to_radians())
                    * Quat::from_rotation_y(-orbit.direction.x.to_radians());
                let position = rotation * Vec3::new(0.0, 0.0, -distance);
                CameraParams {
                    view: Mat4::from_rotation_translation(rotation, position).inverse(),
                    projection: Mat4::perspective_rh(
                        FOV_Y_DEGREES.to_radians(),
                        aspect,
                        NEAR_PLANE,
                        FAR_PLANE,
                    ),
                }
            }
            CameraState::Ortho2D(ortho) => {
                let half_w = ortho.zoom * aspect;
                let half_h = ortho.zoom;
                let position = Vec3::new(ortho.pan.x, ortho.pan.y, ORTHO_CAMERA_DEPTH);
                CameraParams {
                    view: Mat4::from_translation(-position),
                    projection: Mat4::orthographic_rh(
                        -half_w, half_w, -half_h, half_h, NEAR_PLANE, FAR_PLANE,
                    ),
                }
            }
        }
    }

    /// Model transform applied to the previewed mesh: re-centered on its
    /// bounds and counter-rotated by the orbit direction.
    pub fn model_transform(&self, bounds: Bounds) -> Mat4 {
        let direction = match &self.state {
            CameraState::Orbit(orbit) => orbit.direction,
            CameraState::Ortho2D(_) => Vec2::ZERO,
        };
        let rotation = Quat::from_rotation_x(direction.y.to_radians())
            * Quat::from_rotation_y(direction.x.to_radians());
        let translation = rotation * -bounds.center;
        Mat4::from_rotation_translation(rotation, translation)
    }

    /// Project a UV-plane point to display-rect coordinates through the
    /// orthographic camera. `None` while orbiting.
    pub fn ortho_screen_position(&self, world: Vec2, rect: DisplayRect) -> Option<Vec2> {
        let CameraState::Ortho2D(state) = &self.state else {
            return None;
        };
        let half = Vec2::new(state.zoom * rect.aspect_ratio(), state.zoom);
        let view = (world - state.pan) / (2.0 * half) + Vec2::splat(0.5);
        Some(Vec2::new(
            view.x * rect.width(),
            (1.0 - view.y) * rect.height(),
        ))
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECT: DisplayRect = DisplayRect {
        min: Vec2::ZERO,
        size: Vec2::new(200.0, 100.0),
    };

    #[test]
    fn drag_accumulates_without_clamping() {
        let mut rig = CameraRig::new();
        rig.drag(Vec2::new(400.0, -720.0));
        rig.drag(Vec2::new(400.0, 0.0));
        assert_eq!(rig.orbit_direction(), Some(Vec2::new(800.0, -720.0)));
    }

    #[test]
    fn drag_is_inert_in_ortho() {
        let mut rig = CameraRig::new();
        rig.reset_ortho();
        rig.drag(Vec2::new(10.0, 10.0));
        assert_eq!(rig.ortho_state(), Some(OrthoState::default()));
    }

    #[test]
    fn orbit_distance_tracks_bounds() {
        let rig = CameraRig::new();
        let bounds = Bounds::new(Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0));
        let params = rig.camera_params(bounds, 1.0);
        let position = params.view.inverse().w_axis.truncate();
        assert!((position.length() - 8.0).abs() < 1e-4);

        let bigger = Bounds::new(Vec3::ZERO, Vec3::new(20.0, 0.0, 0.0));
        let params = rig.camera_params(bigger, 1.0);
        let position = params.view.inverse().w_axis.truncate();
        assert!((position.length() - 80.0).abs() < 1e-3);
    }

    #[test]
    fn zoom_clamps_to_range() {
        let mut rig = CameraRig::new();
        rig.reset_ortho();
        for _ in 0..400 {
            rig.zoom(Vec2::new(100.0, 50.0), RECT, 40.0);
        }
        assert!((rig.ortho_state().unwrap().zoom - 10.0).abs() < 1e-6);

        for _ in 0..800 {
            rig.zoom(Vec2::new(100.0, 50.0), RECT, -40.0);
        }
        assert!((rig.ortho_state().unwrap().zoom - 0.1).abs() < 1e-6);
    }

    #[test]
    fn zoom_is_pointer_centered() {
        let mut rig = CameraRig::new();
        rig.reset_ortho();
        rig.pan(Vec2::new(13.0, -7.0), RECT, (400, 200));

        // Pick an arbitrary pointer position and find the world point under it.
        let pointer = Vec2::new(150.0, 30.0);
        let state = rig.ortho_state().unwrap();
        let half = Vec2::new(state.zoom * RECT.aspect_ratio(), state.zoom);
        let view = Vec2::new(pointer.x / RECT.width(), 1.0 - pointer.y / RECT.height());
        let world = state.pan + (view - Vec2::splat(0.5)) * 2.0 * half;

        let before = rig.ortho_screen_position(world, RECT).unwrap();
        rig.zoom(pointer, RECT, 12.0);
        let after = rig.ortho_screen_position(world, RECT).unwrap();
        assert!((before - after).length() < 1e-3);

        rig.zoom(pointer, RECT, -30.0);
        let after = rig.ortho_screen_position(world, RECT).unwrap();
        assert!((before - after).length() < 1e-3);
    }

    #[test]
    fn pan_converts_through_surface_resolution() {
        let mut rig = CameraRig::new();
        rig.reset_ortho();
        // Surface is twice the rect resolution; zoom 1, aspect 2.
        rig.pan(Vec2::new(10.0, 0.0), RECT, (400, 200));
        let pan = rig.ortho_state().unwrap().pan;
        // -10 points -> -20 px -> -20 * (2 * 1 * 2 / 400) world.
        assert!((pan.x + 0.2).abs() < 1e-6);
        assert_eq!(pan.y, 0.0);

        rig.pan(Vec2::new(0.0, 10.0), RECT, (400, 200));
        let pan = rig.ortho_state().unwrap().pan;
        // Y inverted relative to screen delta.
        assert!((pan.y - 0.2).abs() < 1e-6);
    }

    #[test]
    fn mode_resets_restore_defaults() {
        let mut rig = CameraRig::new();
        rig.drag(Vec2::new(45.0, 45.0));
        rig.reset_ortho();
        assert!(rig.is_ortho());
        rig.reset_orbit();
        assert_eq!(rig.orbit_direction(), Some(Vec2::ZERO));
    }
}
