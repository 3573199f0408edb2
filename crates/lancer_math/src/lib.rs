// Re-export glam for convenience
pub use glam::*;

// Lancer math types
mod interval;
mod ray;
pub use interval::Interval;
pub use ray::Ray;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(a * b, Vec3::new(4.0, 10.0, 18.0));
        assert_eq!(a.dot(b), 32.0);
    }

    #[test]
    fn test_normalize_zero_length_is_zero() {
        // Every normalization in the pipeline goes through normalize_or_zero
        assert_eq!(Vec3::ZERO.normalize_or_zero(), Vec3::ZERO);
        assert_eq!(Vec3::new(0.0, 3.0, 4.0).length(), 5.0);
        assert!((Vec3::new(0.0, 3.0, 4.0).normalize_or_zero().length() - 1.0).abs() < 1e-6);
    }
}
