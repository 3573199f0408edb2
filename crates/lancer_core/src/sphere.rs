//! Sphere primitive.

use lancer_math::Vec3;

use crate::error::{ensure_finite, SceneError, SceneResult};

/// A sphere given by its center and radius.
///
/// The radius is always positive and finite; construction fails otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32) -> SceneResult<Self> {
        ensure_finite("sphere center", center)?;
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(SceneError::InvalidRadius(radius));
        }

        Ok(Self { center, radius })
    }

    /// Get the sphere center.
    #[inline]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Get the sphere radius.
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Outward unit normal at a point on (or near) the surface.
    ///
    /// Returns zero if `p` is the center.
    #[inline]
    pub fn normal_at(&self, p: Vec3) -> Vec3 {
        (p - self.center).normalize_or_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_new() {
        let sphere = Sphere::new(Vec3::new(1.0, 2.0, 3.0), 4.0).unwrap();
        assert_eq!(sphere.center(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(sphere.radius(), 4.0);
    }

    #[test]
    fn test_sphere_rejects_bad_radius() {
        assert_eq!(
            Sphere::new(Vec3::ZERO, 0.0),
            Err(SceneError::InvalidRadius(0.0))
        );
        assert_eq!(
            Sphere::new(Vec3::ZERO, -2.0),
            Err(SceneError::InvalidRadius(-2.0))
        );
        assert!(Sphere::new(Vec3::ZERO, f32::NAN).is_err());
        assert!(Sphere::new(Vec3::ZERO, f32::INFINITY).is_err());
    }

    #[test]
    fn test_sphere_rejects_non_finite_center() {
        let err = Sphere::new(Vec3::new(f32::NAN, 0.0, 0.0), 1.0).unwrap_err();
        assert!(matches!(err, SceneError::NonFinite { what: "sphere center", .. }));
    }

    #[test]
    fn test_normal_at() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 10.0), 2.0).unwrap();
        let n = sphere.normal_at(Vec3::new(0.0, 0.0, 8.0));
        assert!((n - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);

        assert_eq!(sphere.normal_at(sphere.center()), Vec3::ZERO);
    }
}
