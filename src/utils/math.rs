use nalgebra::Vector2;

/// Saturate every component of `v` to `[-bound, bound]`.
///
/// NaN components become zero; infinities saturate to the bound.
pub fn clamp_symmetric(v: Vector2<f64>, bound: f64) -> Vector2<f64> {
    v.map(|c| if c.is_nan() { 0.0 } else { c.clamp(-bound, bound) })
}

/// True when both components lie in `[-bound, bound]`.
pub fn within_bounds(v: &Vector2<f64>, bound: f64) -> bool {
    v.iter().all(|c| c.is_finite() && c.abs() <= bound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_symmetric_saturates() {
        let v = clamp_symmetric(Vector2::new(3.0, -0.5), 1.0);
        assert_eq!(v, Vector2::new(1.0, -0.5));

        let v = clamp_symmetric(Vector2::new(-7.0, 0.25), 2.0);
        assert_eq!(v, Vector2::new(-2.0, 0.25));
    }

    #[test]
    fn test_clamp_symmetric_non_finite() {
        let v = clamp_symmetric(Vector2::new(f64::NAN, f64::INFINITY), 1.5);
        assert_eq!(v, Vector2::new(0.0, 1.5));

        let v = clamp_symmetric(Vector2::new(f64::NEG_INFINITY, f64::NAN), 1.0);
        assert_eq!(v, Vector2::new(-1.0, 0.0));
    }

    #[test]
    fn test_within_bounds() {
        assert!(within_bounds(&Vector2::new(1.0, -1.0), 1.0));
        assert!(!within_bounds(&Vector2::new(1.0001, 0.0), 1.0));
        assert!(!within_bounds(&Vector2::new(f64::NAN, 0.0), 1.0));
    }
}
