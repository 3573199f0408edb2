use crate::Vec3;

/// A ray in 3D space with an origin and a direction.
///
/// The direction does not have to be unit length for intersection tests,
/// but it must not be zero. Use [`Ray::try_new`] when the direction comes
/// from arbitrary input.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Create a ray, rejecting zero-length or non-finite directions.
    pub fn try_new(origin: Vec3, direction: Vec3) -> Option<Self> {
        let len_sq = direction.length_squared();
        if len_sq > 0.0 && len_sq.is_finite() {
            Some(Self::new(origin, direction))
        } else {
            None
        }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Same ray with a unit-length direction.
    ///
    /// A zero direction stays zero.
    #[inline]
    pub fn normalized(&self) -> Self {
        Self::new(self.origin, self.direction.normalize_or_zero())
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + direction * t
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_creation() {
        let origin = Vec3::new(1.0, 2.0, 3.0);
        let direction = Vec3::new(0.0, 1.0, 0.0);
        let ray = Ray::new(origin, direction);

        assert_eq!(ray.origin(), origin);
        assert_eq!(ray.direction(), direction);
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        assert_eq!(ray.at(0.0), Vec3::ZERO);
        assert_eq!(ray.at(1.0), Vec3::X);
        assert_eq!(ray.at(2.0), Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(ray.at(-1.0), Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_try_new_rejects_degenerate_direction() {
        assert!(Ray::try_new(Vec3::ONE, Vec3::ZERO).is_none());
        assert!(Ray::try_new(Vec3::ONE, Vec3::new(f32::NAN, 0.0, 1.0)).is_none());
        assert!(Ray::try_new(Vec3::ONE, Vec3::new(f32::INFINITY, 0.0, 0.0)).is_none());
        assert!(Ray::try_new(Vec3::ONE, Vec3::Z).is_some());
    }

    #[test]
    fn test_normalized() {
        let ray = Ray::new(Vec3::ONE, Vec3::new(0.0, 0.0, 10.0)).normalized();
        assert_eq!(ray.origin, Vec3::ONE);
        assert_eq!(ray.direction, Vec3::Z);

        let degenerate = Ray::new(Vec3::ONE, Vec3::ZERO).normalized();
        assert_eq!(degenerate.direction, Vec3::ZERO);
    }
}
