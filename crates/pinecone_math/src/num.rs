//! Scalar helpers.

use crate::consts::EPSILON;

/// Linearly interpolates between `a` and `b` without restricting `t`.
#[inline]
pub fn lerp_unclamped(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Linearly interpolates between `a` and `b`, with `t` clamped to `[0, 1]`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    lerp_unclamped(a, b, clamp01(t))
}

/// Clamps `t` to `[0, 1]`.
#[inline]
pub fn clamp01(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Whether `a` and `b` differ by less than [`EPSILON`].
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_clamps_parameter() {
        assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
        assert_eq!(lerp(2.0, 4.0, -1.0), 2.0);
        assert_eq!(lerp(2.0, 4.0, 3.0), 4.0);
    }

    #[test]
    fn lerp_unclamped_extrapolates() {
        assert_eq!(lerp_unclamped(2.0, 4.0, 2.0), 6.0);
        assert_eq!(lerp_unclamped(2.0, 4.0, -1.0), 0.0);
    }

    #[test]
    fn approx_eq_uses_absolute_tolerance() {
        assert!(approx_eq(1.0, 1.0 + 5e-6));
        assert!(!approx_eq(1.0, 1.0 + 5e-5));
        assert!(!approx_eq(f32::NAN, f32::NAN));
    }
}
