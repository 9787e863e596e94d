/// The allowed weight window for a single district.
///
/// The ideal district weight is the graph total divided by the number of
/// districts. A district is balanced when its weight differs from the ideal
/// by no more than a factor of `max_ratio`, i.e. lies in
/// `[ideal / max_ratio, ideal * max_ratio]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Limits {
    min: f64,
    max: f64,
}

impl Limits {
    /// Compute the weight window for partitioning `total_weight` into `num_parts`.
    pub fn new(total_weight: f64, num_parts: usize, max_ratio: f64) -> Self {
        assert!(num_parts > 0, "num_parts must be at least 1");
        assert!(max_ratio >= 1.0, "max_ratio must be at least 1.0");

        let ideal = total_weight / num_parts as f64;
        Self { min: ideal / max_ratio, max: ideal * max_ratio }
    }

    /// Get the smallest allowed district weight.
    #[inline] pub fn min(&self) -> f64 { self.min }

    /// Get the largest allowed district weight.
    #[inline] pub fn max(&self) -> f64 { self.max }

    /// Check if a district weight lies inside the window.
    #[inline] pub fn contains(&self, weight: f64) -> bool { self.min <= weight && weight <= self.max }

    /// Check if a running district weight has already overshot the window.
    /// Monotonic under non-negative node weights, so usable for pruning
    /// before a district is complete.
    #[inline] pub fn exceeds_max(&self, weight: f64) -> bool { weight > self.max }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_is_centered_on_the_ideal() {
        let limits = Limits::new(12.0, 3, 1.5);

        // ideal = 4.0
        assert_eq!(limits.min(), 4.0 / 1.5);
        assert_eq!(limits.max(), 6.0);
    }

    #[test]
    fn exact_ratio_admits_only_the_ideal() {
        let limits = Limits::new(4.0, 2, 1.0);

        assert!(limits.contains(2.0));
        assert!(!limits.contains(1.999));
        assert!(!limits.contains(2.001));
    }

    #[test]
    fn window_boundaries_are_inclusive_both_ways() {
        let limits = Limits::new(8.0, 2, 2.0);

        // ideal = 4.0, window = [2.0, 8.0]
        assert!(limits.contains(2.0));
        assert!(limits.contains(8.0));
        assert!(!limits.contains(1.999));
        assert!(!limits.contains(8.001));
    }

    #[test]
    fn overshoot_is_strict() {
        let limits = Limits::new(4.0, 2, 1.0);

        assert!(!limits.exceeds_max(2.0));
        assert!(limits.exceeds_max(2.0 + 1e-9));
    }

    #[test]
    fn zero_total_weight_collapses_the_window() {
        let limits = Limits::new(0.0, 3, 2.0);

        assert_eq!(limits.min(), 0.0);
        assert_eq!(limits.max(), 0.0);
        assert!(limits.contains(0.0));
        assert!(!limits.contains(0.1));
    }

    #[test]
    #[should_panic(expected = "num_parts must be at least 1")]
    fn zero_parts_panics() {
        Limits::new(1.0, 0, 1.0);
    }
}
