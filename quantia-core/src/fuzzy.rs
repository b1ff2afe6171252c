//! Tolerant floating-point comparison

/// Relative tolerance used by [`fuzzy_eq`].
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Absolute floor below which two values are considered equal regardless of scale.
const ABSOLUTE_FLOOR: f64 = 1e-300;

/// Compare two floats within [`DEFAULT_TOLERANCE`], relative to the larger magnitude.
pub fn fuzzy_eq(a: f64, b: f64) -> bool {
    fuzzy_eq_within(a, b, DEFAULT_TOLERANCE)
}

/// Compare two floats within a caller-supplied relative tolerance.
pub fn fuzzy_eq_within(a: f64, b: f64, tolerance: f64) -> bool {
    if a == b {
        return true;
    }
    if a.is_nan() || b.is_nan() || a.is_infinite() || b.is_infinite() {
        return false;
    }
    let diff = (a - b).abs();
    if diff < ABSOLUTE_FLOOR {
        return true;
    }
    diff <= tolerance * a.abs().max(b.abs())
}

/// Extension trait so comparisons read naturally at call sites.
pub trait FuzzyEq {
    fn fuzzy_eq(&self, other: &Self) -> bool;
}

impl FuzzyEq for f64 {
    fn fuzzy_eq(&self, other: &f64) -> bool {
        fuzzy_eq(*self, *other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact() {
        assert!(fuzzy_eq(1.5, 1.5));
        assert!(fuzzy_eq(0.0, -0.0));
    }

    #[test]
    fn test_within_tolerance() {
        assert!(fuzzy_eq(0.1 + 0.2, 0.3));
        assert!(fuzzy_eq(1e20, 1e20 * (1.0 + 1e-12)));
    }

    #[test]
    fn test_outside_tolerance() {
        assert!(!fuzzy_eq(1.0, 1.001));
        assert!(!fuzzy_eq(0.0, 1e-6));
    }

    #[test]
    fn test_special_values() {
        assert!(!fuzzy_eq(f64::NAN, f64::NAN));
        assert!(fuzzy_eq(f64::INFINITY, f64::INFINITY));
        assert!(!fuzzy_eq(f64::INFINITY, 1e308));
    }

    #[test]
    fn test_trait() {
        assert!(27.777777777777779_f64.fuzzy_eq(&(100_000.0 / 3600.0)));
    }
}
