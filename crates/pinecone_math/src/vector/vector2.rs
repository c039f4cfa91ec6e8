//! 2-dimensional vectors.

use crate::{
    angle::{Degrees, Radians},
    consts::{ANGLE_EPSILON, EPSILON},
    num,
    vector::Vector3,
};
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use std::fmt;

/// A 2-dimensional vector.
///
/// Laid out as two consecutive `f32`s, `x` followed by `y`.
///
/// Equality is approximate: two vectors compare equal when every pair of
/// components differs by less than [`EPSILON`].
#[repr(C)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, Zeroable, Pod)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f32) -> Self {
        Self::new(value, value)
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::same(0.0)
    }

    /// Creates a new vector with all ones.
    #[inline]
    pub const fn ones() -> Self {
        Self::same(1.0)
    }

    #[inline]
    pub const fn infinity() -> Self {
        Self::same(f32::INFINITY)
    }

    #[inline]
    pub const fn neg_infinity() -> Self {
        Self::same(f32::NEG_INFINITY)
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0)
    }

    /// `(0, 1)`.
    #[inline]
    pub const fn up() -> Self {
        Self::unit_y()
    }

    /// `(0, -1)`.
    #[inline]
    pub const fn down() -> Self {
        Self::new(0.0, -1.0)
    }

    /// `(-1, 0)`.
    #[inline]
    pub const fn left() -> Self {
        Self::new(-1.0, 0.0)
    }

    /// `(1, 0)`.
    #[inline]
    pub const fn right() -> Self {
        Self::unit_x()
    }

    /// Converts the vector to 3D by appending the given z-component.
    #[inline]
    pub const fn extended(&self, z: f32) -> Vector3 {
        Vector3::new(self.x, self.y, z)
    }

    /// Computes the norm (length) of the vector.
    #[inline]
    pub fn norm(&self) -> f32 {
        self.norm_squared().sqrt()
    }

    /// Computes the square of the norm of the vector.
    #[inline]
    pub fn norm_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Computes the normalized version of the vector. If the norm does not
    /// exceed [`EPSILON`], the zero vector is returned instead.
    #[inline]
    pub fn normalized(&self) -> Self {
        let norm = self.norm();
        if norm > EPSILON {
            self / norm
        } else {
            pinecone_log::trace!("Normalizing degenerate vector {self} to zero");
            Self::zeros()
        }
    }

    /// Normalizes the vector in place. See [`Self::normalized`].
    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Multiplies each component in place by the corresponding component in
    /// another vector.
    #[inline]
    pub fn scale(&mut self, other: &Self) {
        self.x *= other.x;
        self.y *= other.y;
    }

    /// Multiplies each component by the corresponding component in another
    /// vector.
    #[inline]
    pub fn component_mul(&self, other: &Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y)
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Computes the z-component of the cross product of the two vectors
    /// extended to 3D with zero z-components.
    #[inline]
    pub fn perp_dot(&self, other: &Self) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Reflects this vector off the plane (line) with the given normal. The
    /// normal is expected to be normalized.
    #[inline]
    pub fn reflected(&self, normal: &Self) -> Self {
        self - normal * (2.0 * normal.dot(self))
    }

    /// Computes the unsigned angle between this vector and another, in the
    /// range `[0, 180]` degrees. If either vector is degenerate, the angle is
    /// zero.
    pub fn angle_to(&self, other: &Self) -> Degrees {
        let denominator = self.norm() * other.norm();
        if denominator < ANGLE_EPSILON {
            return Degrees(0.0);
        }
        let cos_angle = (self.dot(other) / denominator).clamp(-1.0, 1.0);
        Radians(cos_angle.acos()).into()
    }

    /// Computes the angle from this vector to another, negative when the
    /// rotation from this vector to the other is clockwise.
    pub fn signed_angle_to(&self, other: &Self) -> Degrees {
        let sign = if self.perp_dot(other) < 0.0 { -1.0 } else { 1.0 };
        self.angle_to(other) * sign
    }

    /// Computes the Euclidean distance between the points represented by this
    /// vector and another.
    #[inline]
    pub fn distance_to(&self, other: &Self) -> f32 {
        (self - other).norm()
    }

    /// Returns a copy of the vector rescaled to have the given norm if its
    /// norm exceeds it.
    #[inline]
    pub fn clamped_norm(&self, max_norm: f32) -> Self {
        if self.norm_squared() > max_norm * max_norm {
            self.normalized() * max_norm
        } else {
            *self
        }
    }

    /// Linearly interpolates from this vector to another, with `t` clamped
    /// to `[0, 1]`.
    #[inline]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        self.lerp_unclamped(other, num::clamp01(t))
    }

    /// Linearly interpolates (or extrapolates) from this vector to another.
    #[inline]
    pub fn lerp_unclamped(&self, other: &Self, t: f32) -> Self {
        Self::new(
            num::lerp_unclamped(self.x, other.x, t),
            num::lerp_unclamped(self.y, other.y, t),
        )
    }

    /// Returns a vector where each component is the minimum of the
    /// corresponding component in this and another vector.
    #[inline]
    pub fn component_min(&self, other: &Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Returns a vector where each component is the maximum of the
    /// corresponding component in this and another vector.
    #[inline]
    pub fn component_max(&self, other: &Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Returns a vector with the absolute value of each component.
    #[inline]
    pub fn component_abs(&self) -> Self {
        self.mapped(f32::abs)
    }

    /// Returns a vector with the given closure applied to each component.
    #[inline]
    pub fn mapped(&self, mut f: impl FnMut(f32) -> f32) -> Self {
        Self::new(f(self.x), f(self.y))
    }

    /// Returns the smallest component in the vector.
    #[inline]
    pub fn min_component(&self) -> f32 {
        self.x.min(self.y)
    }

    /// Returns the largest component in the vector.
    #[inline]
    pub fn max_component(&self) -> f32 {
        self.x.max(self.y)
    }

    /// Adds one to every component and returns the updated vector.
    #[inline]
    pub fn increment(&mut self) -> Self {
        *self += 1.0;
        *self
    }

    /// Subtracts one from every component and returns the updated vector.
    #[inline]
    pub fn decrement(&mut self) -> Self {
        *self -= 1.0;
        *self
    }

    /// Whether all components are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f32; 2]> for Vector2 {
    #[inline]
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2> for [f32; 2] {
    #[inline]
    fn from(vector: Vector2) -> Self {
        [vector.x, vector.y]
    }
}

impl_componentwise_ops!(Vector2, Vector2, [x, y]);

impl_scalar_ops!(Vector2, [x, y]);

impl_unary_op!(Neg, neg, Vector2, Vector2, |val| {
    Vector2::new(-val.x, -val.y)
});

impl_component_indexing!(Vector2, 2, [0 => x, 1 => y]);

impl_approx_partial_eq!(Vector2, [x, y]);

impl_abs_diff_eq!(Vector2, |a, b, epsilon| {
    a.x.abs_diff_eq(&b.x, epsilon) && a.y.abs_diff_eq(&b.y, epsilon)
});

impl_relative_eq!(Vector2, |a, b, epsilon, max_relative| {
    a.x.relative_eq(&b.x, epsilon, max_relative) && a.y.relative_eq(&b.y, epsilon, max_relative)
});

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( {}, {} )", self.x, self.y)
    }
}
