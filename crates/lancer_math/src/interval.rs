/// A closed range of f32 values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Returns true if x is within the interval [min, max] (inclusive).
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }

    /// Clamps x to be within the interval [min, max].
    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min, self.max)
    }

    /// Non-negative ray parameters: [0, +inf].
    pub const FORWARD: Interval = Interval::new(0.0, f32::INFINITY);

    /// 8-bit channel range.
    pub const CHANNEL: Interval = Interval::new(0.0, 255.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_contains() {
        let interval = Interval::new(0.0, 10.0);

        // Inclusive bounds
        assert!(interval.contains(0.0));
        assert!(interval.contains(10.0));
        assert!(interval.contains(5.0));

        // Outside bounds
        assert!(!interval.contains(-0.1));
        assert!(!interval.contains(10.1));
    }

    #[test]
    fn test_interval_clamp() {
        assert_eq!(Interval::CHANNEL.clamp(-5.0), 0.0);
        assert_eq!(Interval::CHANNEL.clamp(128.0), 128.0);
        assert_eq!(Interval::CHANNEL.clamp(300.0), 255.0);
    }

    #[test]
    fn test_forward_interval() {
        // Zero is a valid hit distance, negatives are behind the origin
        assert!(Interval::FORWARD.contains(0.0));
        assert!(Interval::FORWARD.contains(1e30));
        assert!(!Interval::FORWARD.contains(-1e-6));
        assert!(!Interval::FORWARD.contains(f32::NAN));
    }
}
