//! Angle units.

use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use std::{
    f32::consts::{FRAC_1_PI, PI},
    fmt,
    ops::{Add, Div, Mul, Neg, Sub},
};

/// An angle in degrees.
#[repr(transparent)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Zeroable, Pod)]
pub struct Degrees(pub f32);

/// An angle in radians.
#[repr(transparent)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Zeroable, Pod)]
pub struct Radians(pub f32);

impl Degrees {
    /// The value of the angle in degrees.
    #[inline]
    pub const fn degrees(self) -> f32 {
        self.0
    }

    /// The value of the angle in radians.
    #[inline]
    pub fn radians(self) -> f32 {
        degrees_to_radians(self.0)
    }
}

impl Radians {
    /// The value of the angle in radians.
    #[inline]
    pub const fn radians(self) -> f32 {
        self.0
    }

    /// The value of the angle in degrees.
    #[inline]
    pub fn degrees(self) -> f32 {
        radians_to_degrees(self.0)
    }
}

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Self {
        Self(rad.degrees())
    }
}

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        Self(deg.radians())
    }
}

macro_rules! impl_angle_ops {
    ($unit:ident, $other:ident) => {
        impl Add for $unit {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Self(self.0 + rhs.0)
            }
        }

        impl Add<$other> for $unit {
            type Output = Self;
            fn add(self, rhs: $other) -> Self {
                Self(self.0 + Self::from(rhs).0)
            }
        }

        impl Sub for $unit {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                Self(self.0 - rhs.0)
            }
        }

        impl Sub<$other> for $unit {
            type Output = Self;
            fn sub(self, rhs: $other) -> Self {
                Self(self.0 - Self::from(rhs).0)
            }
        }

        impl Mul<f32> for $unit {
            type Output = Self;
            fn mul(self, rhs: f32) -> Self {
                Self(self.0 * rhs)
            }
        }

        impl Div<f32> for $unit {
            type Output = Self;
            fn div(self, rhs: f32) -> Self {
                Self(self.0 / rhs)
            }
        }

        impl Neg for $unit {
            type Output = Self;
            fn neg(self) -> Self {
                Self(-self.0)
            }
        }

        impl AbsDiffEq for $unit {
            type Epsilon = f32;

            fn default_epsilon() -> f32 {
                f32::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
                f32::abs_diff_eq(&self.0, &other.0, epsilon)
            }
        }

        impl RelativeEq for $unit {
            fn default_max_relative() -> f32 {
                f32::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
                f32::relative_eq(&self.0, &other.0, epsilon, max_relative)
            }
        }
    };
}

impl_angle_ops!(Degrees, Radians);
impl_angle_ops!(Radians, Degrees);

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

impl fmt::Display for Radians {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rad", self.0)
    }
}

pub fn radians_to_degrees(radians: f32) -> f32 {
    radians * (180.0 * FRAC_1_PI)
}

pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * (PI / 180.0)
}
