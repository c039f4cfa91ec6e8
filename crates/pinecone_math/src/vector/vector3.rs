//! 3-dimensional vectors.

use crate::{
    angle::{Degrees, Radians},
    consts::{ANGLE_EPSILON, EPSILON, NORMAL_EPSILON},
    num,
    vector::{Vector2, Vector4},
};
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use std::fmt;

/// A 3-dimensional vector.
///
/// Laid out as three consecutive `f32`s in `x`, `y`, `z` order.
///
/// Equality is approximate: two vectors compare equal when every pair of
/// components differs by less than [`EPSILON`].
#[repr(C)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, Zeroable, Pod)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f32) -> Self {
        Self::new(value, value, value)
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

    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    #[inline]
    pub const fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    #[inline]
    pub const fn up() -> Self {
        Self::unit_y()
    }

    #[inline]
    pub const fn down() -> Self {
        Self::new(0.0, -1.0, 0.0)
    }

    #[inline]
    pub const fn left() -> Self {
        Self::new(-1.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn right() -> Self {
        Self::unit_x()
    }

    /// `(0, 0, 1)`.
    #[inline]
    pub const fn forward() -> Self {
        Self::unit_z()
    }

    /// `(0, 0, -1)`.
    #[inline]
    pub const fn back() -> Self {
        Self::new(0.0, 0.0, -1.0)
    }

    /// Creates a vector from the given 2D vector and z-component.
    #[inline]
    pub const fn from_xy(xy: Vector2, z: f32) -> Self {
        Self::new(xy.x, xy.y, z)
    }

    /// The 2D vector containing the x- and y-components.
    #[inline]
    pub const fn xy(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    /// Overwrites the x- and y-components, leaving z untouched.
    #[inline]
    pub fn set_xy(&mut self, xy: Vector2) {
        self.x = xy.x;
        self.y = xy.y;
    }

    /// Converts the vector to 4D by appending the given w-component.
    #[inline]
    pub const fn extended(&self, w: f32) -> Vector4 {
        Vector4::new(self.x, self.y, self.z, w)
    }

    /// Computes the norm (length) of the vector.
    #[inline]
    pub fn norm(&self) -> f32 {
        self.norm_squared().sqrt()
    }

    /// Computes the square of the norm of the vector.
    #[inline]
    pub fn norm_squared(&self) -> f32 {
        self.dot(self)
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
        *self = self.component_mul(other);
    }

    /// Multiplies each component by the corresponding component in another
    /// vector.
    #[inline]
    pub fn component_mul(&self, other: &Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the cross product of this vector with another.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Reflects this vector off the plane with the given normal. The normal
    /// is expected to be normalized.
    #[inline]
    pub fn reflected(&self, normal: &Self) -> Self {
        self - normal * (2.0 * normal.dot(self))
    }

    /// Computes the projection of this vector onto the line spanned by
    /// `onto`. Projecting onto a vector whose squared norm underflows gives the
    /// zero vector.
    pub fn projected_onto(&self, onto: &Self) -> Self {
        let onto_norm_squared = onto.norm_squared();
        if onto_norm_squared < NORMAL_EPSILON {
            pinecone_log::trace!("Projecting {self} onto degenerate vector {onto}");
            return Self::zeros();
        }
        onto * (self.dot(onto) / onto_norm_squared)
    }

    /// Computes the projection of this vector onto the plane with the given
    /// normal. If the normal is (near) zero, the vector is returned
    /// unchanged.
    pub fn projected_onto_plane(&self, plane_normal: &Self) -> Self {
        let normal_norm_squared = plane_normal.norm_squared();
        if normal_norm_squared < NORMAL_EPSILON {
            pinecone_log::trace!("Projecting {self} onto plane with degenerate normal");
            return *self;
        }
        self - plane_normal * (self.dot(plane_normal) / normal_norm_squared)
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

    /// Computes the angle from this vector to another, signed by which side
    /// of the plane through the two vectors the given axis lies on.
    pub fn signed_angle_to(&self, other: &Self, axis: &Self) -> Degrees {
        let sign = if axis.dot(&self.cross(other)) < 0.0 {
            -1.0
        } else {
            1.0
        };
        self.angle_to(other) * sign
    }

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
            num::lerp_unclamped(self.z, other.z, t),
        )
    }

    #[inline]
    pub fn component_min(&self, other: &Self) -> Self {
        Self::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
        )
    }

    #[inline]
    pub fn component_max(&self, other: &Self) -> Self {
        Self::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
        )
    }

    #[inline]
    pub fn component_abs(&self) -> Self {
        self.mapped(f32::abs)
    }

    /// Returns a vector with the given closure applied to each component.
    #[inline]
    pub fn mapped(&self, mut f: impl FnMut(f32) -> f32) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }

    #[inline]
    pub fn min_component(&self) -> f32 {
        self.x.min(self.y).min(self.z)
    }

    #[inline]
    pub fn max_component(&self) -> f32 {
        self.x.max(self.y).max(self.z)
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

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f32; 3]> for Vector3 {
    #[inline]
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [f32; 3] {
    #[inline]
    fn from(vector: Vector3) -> Self {
        [vector.x, vector.y, vector.z]
    }
}

impl From<Vector2> for Vector3 {
    /// Pads the missing z-component with zero.
    #[inline]
    fn from(vector: Vector2) -> Self {
        vector.extended(0.0)
    }
}

impl_componentwise_ops!(Vector3, Vector3, [x, y, z]);

impl_scalar_ops!(Vector3, [x, y, z]);

impl_unary_op!(Neg, neg, Vector3, Vector3, |val| {
    Vector3::new(-val.x, -val.y, -val.z)
});

impl_component_indexing!(Vector3, 3, [0 => x, 1 => y, 2 => z]);

impl_approx_partial_eq!(Vector3, [x, y, z]);

impl_abs_diff_eq!(Vector3, |a, b, epsilon| {
    a.x.abs_diff_eq(&b.x, epsilon)
        && a.y.abs_diff_eq(&b.y, epsilon)
        && a.z.abs_diff_eq(&b.z, epsilon)
});

impl_relative_eq!(Vector3, |a, b, epsilon, max_relative| {
    a.x.relative_eq(&b.x, epsilon, max_relative)
        && a.y.relative_eq(&b.y, epsilon, max_relative)
        && a.z.relative_eq(&b.z, epsilon, max_relative)
});

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( {}, {}, {} )", self.x, self.y, self.z)
    }
}
