//! Numerical tolerances shared by the value types.

/// Absolute per-component tolerance used for equality comparisons, and the
/// norm at or below which a vector is treated as having no direction.
pub const EPSILON: f32 = 1e-5;

/// Squared-norm threshold below which a projection target is considered
/// degenerate. This is the smallest positive normal `f32`, so only normals
/// whose squared norm underflows are rejected.
pub const NORMAL_EPSILON: f32 = f32::MIN_POSITIVE;

/// Threshold for the product of norms in the angle denominator. Below this
/// the angle between two vectors is reported as zero.
pub const ANGLE_EPSILON: f32 = 1e-15;
