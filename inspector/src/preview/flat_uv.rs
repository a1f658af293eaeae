//! Flat-UV visualization.
//!
//! The only mode that bypasses the 3D draw path: a procedural reference
//! grid in UV space, then the mesh's UV layout as a wireframe overlay with
//! the bound multi-preview material. Nothing here mutates mesh data.

use glam::{Mat4, Vec2};
use larkspur_core::{Bounds, MeshData};

use crate::error::InspectorError;
use crate::preview::binding::RenderBinding;
use crate::renderer::{LineSegment, SceneRenderer};

/// Color of minor grid lines (inside the unit square only).
pub const MINOR_LINE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 0.25];

/// Color of major grid lines (integer UV boundaries).
pub const MAJOR_LINE_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];

/// Grid spacing in UV units.
const GRID_STEP: f32 = 0.125;
/// Steps per whole UV unit.
const STEPS_PER_UNIT: i32 = 8;
/// First grid step (u = v = -2).
const GRID_MIN_STEP: i32 = -2 * STEPS_PER_UNIT;
/// Last grid step (u = v = +3).
const GRID_MAX_STEP: i32 = 3 * STEPS_PER_UNIT;

/// Build the UV reference grid, offset so it tracks the re-centered mesh.
///
/// Lines on integer coordinates are major and span the full grid range;
/// every other step line is minor and only drawn where both coordinates lie
/// inside the [0,1] unit square.
pub fn grid_segments(bounds: Bounds) -> Vec<LineSegment> {
    let offset = Vec2::new(-bounds.center.x, -bounds.center.y);
    let full_min = GRID_MIN_STEP as f32 * GRID_STEP;
    let full_max = GRID_MAX_STEP as f32 * GRID_STEP;

    let mut segments = Vec::new();
    for step in GRID_MIN_STEP..=GRID_MAX_STEP {
        let coord = step as f32 * GRID_STEP;
        if step % STEPS_PER_UNIT == 0 {
            segments.push(LineSegment::new(
                offset + Vec2::new(full_min, coord),
                offset + Vec2::new(full_max, coord),
                MAJOR_LINE_COLOR,
            ));
            segments.push(LineSegment::new(
                offset + Vec2::new(coord, full_min),
                offset + Vec2::new(coord, full_max),
                MAJOR_LINE_COLOR,
            ));
        } else if (0..STEPS_PER_UNIT).contains(&step) {
            segments.push(LineSegment::new(
                offset + Vec2::new(0.0, coord),
                offset + Vec2::new(1.0, coord),
                MINOR_LINE_COLOR,
            ));
            segments.push(LineSegment::new(
                offset + Vec2::new(coord, 0.0),
                offset + Vec2::new(coord, 1.0),
                MINOR_LINE_COLOR,
            ));
        }
    }
    segments
}

/// Draw the flat-UV frame: reference grid, then the mesh's UV wireframe
/// with the bound multi-preview material.
pub fn render<R: SceneRenderer + ?Sized>(
    renderer: &mut R,
    mesh: &MeshData,
    transform: Mat4,
    binding: &RenderBinding,
) -> Result<(), InspectorError> {
    renderer.draw_lines(&grid_segments(mesh.bounds()))?;

    renderer.set_wireframe(true);
    let result = (0..mesh.submesh_count())
        .try_for_each(|submesh| renderer.draw_mesh(mesh, transform, binding, submesh, None));
    renderer.set_wireframe(false);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn grid_has_expected_line_counts() {
        let segments = grid_segments(Bounds::default());
        let major: Vec<_> = segments
            .iter()
            .filter(|s| s.color == MAJOR_LINE_COLOR)
            .collect();
        let minor: Vec<_> = segments
            .iter()
            .filter(|s| s.color == MINOR_LINE_COLOR)
            .collect();

        // Integer lines at -2, -1, 0, 1, 2, 3 in both directions.
        assert_eq!(major.len(), 12);
        // Seven 0.125 steps strictly inside (0, 1) in both directions.
        assert_eq!(minor.len(), 14);
        assert_eq!(segments.len(), 26);
    }

    #[test]
    fn major_lines_span_full_range() {
        let segments = grid_segments(Bounds::default());
        for segment in segments.iter().filter(|s| s.color == MAJOR_LINE_COLOR) {
            let length = (segment.end - segment.start).length();
            assert!((length - 5.0).abs() < 1e-6);
        }
    }

    #[test]
    fn minor_lines_stay_inside_unit_square() {
        let segments = grid_segments(Bounds::default());
        for segment in segments.iter().filter(|s| s.color == MINOR_LINE_COLOR) {
            for point in [segment.start, segment.end] {
                assert!((0.0..=1.0).contains(&point.x), "{point:?}");
                assert!((0.0..=1.0).contains(&point.y), "{point:?}");
            }
            let length = (segment.end - segment.start).length();
            assert!((length - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn grid_follows_mesh_center() {
        let bounds = Bounds::new(Vec3::new(2.0, -1.0, 0.0), Vec3::ONE);
        let segments = grid_segments(bounds);
        let origin_major = segments
            .iter()
            .find(|s| s.color == MAJOR_LINE_COLOR && (s.start.y - 1.0).abs() < 1e-6);
        // The y = 0 major line lands at y = 1 after the (-2, 1) offset.
        assert!(origin_major.is_some());
    }
}
