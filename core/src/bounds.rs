//! Axis-aligned bounding volumes.

use glam::Vec3;

/// An axis-aligned bounding box stored as center + half-extents.
///
/// Preview cameras frame content from the bounding-sphere radius
/// ([`Bounds::sphere_radius`]), so extents are kept rather than min/max.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    /// Center of the box in local space.
    pub center: Vec3,
    /// Half-extents along each axis (always non-negative).
    pub extents: Vec3,
}

impl Bounds {
    /// Create bounds from a center and half-extents.
    pub fn new(center: Vec3, extents: Vec3) -> Self {
        Self {
            center,
            extents: extents.abs(),
        }
    }

    /// Compute the bounds of a point set. Empty input yields default bounds.
    pub fn from_points(points: &[Vec3]) -> Self {
        let Some(first) = points.first() else {
            return Self::default();
        };
        let mut min = *first;
        let mut max = *first;
        for p in &points[1..] {
            min = min.min(*p);
            max = max.max(*p);
        }
        Self {
            center: (min + max) * 0.5,
            extents: (max - min) * 0.5,
        }
    }

    /// Full size of the box (extents doubled).
    pub fn size(&self) -> Vec3 {
        self.extents * 2.0
    }

    /// Radius of the bounding sphere enclosing the box.
    pub fn sphere_radius(&self) -> f32 {
        self.extents.length()
    }

    /// Smallest bounds enclosing both inputs.
    pub fn union(&self, other: &Bounds) -> Bounds {
        let min = (self.center - self.extents).min(other.center - other.extents);
        let max = (self.center + self.extents).max(other.center + other.extents);
        Bounds {
            center: (min + max) * 0.5,
            extents: (max - min) * 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_points_encloses_input() {
        let bounds = Bounds::from_points(&[
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(3.0, 2.0, -2.0),
            Vec3::new(1.0, -2.0, 2.0),
        ]);
        assert_eq!(bounds.center, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(bounds.extents, Vec3::new(2.0, 2.0, 2.0));
    }

    #[test]
    fn sphere_radius_is_extents_length() {
        let bounds = Bounds::new(Vec3::ZERO, Vec3::new(3.0, 4.0, 0.0));
        assert_eq!(bounds.sphere_radius(), 5.0);
    }

    #[test]
    fn union_covers_both() {
        let a = Bounds::new(Vec3::ZERO, Vec3::ONE);
        let b = Bounds::new(Vec3::new(4.0, 0.0, 0.0), Vec3::ONE);
        let u = a.union(&b);
        assert_eq!(u.center, Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(u.extents, Vec3::new(3.0, 1.0, 1.0));
    }

    #[test]
    fn empty_points_yield_default() {
        assert_eq!(Bounds::from_points(&[]), Bounds::default());
    }
}
