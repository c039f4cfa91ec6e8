//! 4-dimensional vectors.

use crate::{
    angle::{Degrees, Radians},
    consts::{ANGLE_EPSILON, EPSILON},
    num,
    vector::{Vector2, Vector3},
};
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use std::fmt;

/// A 4-dimensional vector.
///
/// Laid out as four consecutive `f32`s in `x`, `y`, `z`, `w` order. Used
/// both for homogeneous coordinates and for RGBA colors.
#[repr(C)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, Zeroable, Pod)]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vector4 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    #[inline]
    pub const fn zeros() -> Self {
        Self::same(0.0)
    }

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
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0, 0.0)
    }

    #[inline]
    pub const fn unit_w() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Creates a vector from the given 3D vector and w-component.
    #[inline]
    pub const fn from_xyz(xyz: Vector3, w: f32) -> Self {
        xyz.extended(w)
    }

    /// Creates the homogeneous representation of the given point
    /// (`w = 1`).
    #[inline]
    pub const fn from_point(point: Vector3) -> Self {
        Self::from_xyz(point, 1.0)
    }

    /// Creates the homogeneous representation of the given direction
    /// (`w = 0`).
    #[inline]
    pub const fn from_direction(direction: Vector3) -> Self {
        Self::from_xyz(direction, 0.0)
    }

    /// Converts from homogeneous coordinates by dividing the x-, y- and
    /// z-components by w. A zero w yields non-finite components.
    #[inline]
    pub fn to_cartesian(&self) -> Vector3 {
        self.xyz() / self.w
    }

    /// The 2D vector containing the x- and y-components.
    #[inline]
    pub const fn xy(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    /// The 3D vector containing the x-, y- and z-components.
    #[inline]
    pub const fn xyz(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Overwrites the x- and y-components, leaving z and w untouched.
    #[inline]
    pub fn set_xy(&mut self, xy: Vector2) {
        self.x = xy.x;
        self.y = xy.y;
    }

    /// Overwrites the x-, y- and z-components, leaving w untouched.
    #[inline]
    pub fn set_xyz(&mut self, xyz: Vector3) {
        self.x = xyz.x;
        self.y = xyz.y;
        self.z = xyz.z;
    }

    #[inline]
    pub fn norm(&self) -> f32 {
        self.norm_squared().sqrt()
    }

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

    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    #[inline]
    pub fn scale(&mut self, other: &Self) {
        *self *= other;
    }

    #[inline]
    pub fn component_mul(&self, other: &Self) -> Self {
        self * other
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Reflects this vector off the hyperplane with the given normal. The
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

    #[inline]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        self.lerp_unclamped(other, num::clamp01(t))
    }

    #[inline]
    pub fn lerp_unclamped(&self, other: &Self, t: f32) -> Self {
        Self::new(
            num::lerp_unclamped(self.x, other.x, t),
            num::lerp_unclamped(self.y, other.y, t),
            num::lerp_unclamped(self.z, other.z, t),
            num::lerp_unclamped(self.w, other.w, t),
        )
    }

    #[inline]
    pub fn component_min(&self, other: &Self) -> Self {
        Self::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
            self.w.min(other.w),
        )
    }

    #[inline]
    pub fn component_max(&self, other: &Self) -> Self {
        Self::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
            self.w.max(other.w),
        )
    }

    #[inline]
    pub fn component_abs(&self) -> Self {
        self.mapped(f32::abs)
    }

    #[inline]
    pub fn mapped(&self, mut f: impl FnMut(f32) -> f32) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z), f(self.w))
    }

    #[inline]
    pub fn min_component(&self) -> f32 {
        self.x.min(self.y).min(self.z).min(self.w)
    }

    #[inline]
    pub fn max_component(&self) -> f32 {
        self.x.max(self.y).max(self.z).max(self.w)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
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
}

impl From<[f32; 4]> for Vector4 {
    #[inline]
    fn from([x, y, z, w]: [f32; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl From<Vector4> for [f32; 4] {
    #[inline]
    fn from(vector: Vector4) -> Self {
        [vector.x, vector.y, vector.z, vector.w]
    }
}

impl From<Vector2> for Vector4 {
    /// Pads the missing z- and w-components with zero.
    #[inline]
    fn from(vector: Vector2) -> Self {
        Self::new(vector.x, vector.y, 0.0, 0.0)
    }
}

impl From<Vector3> for Vector4 {
    /// Pads the missing w-component with zero.
    #[inline]
    fn from(vector: Vector3) -> Self {
        Self::from_direction(vector)
    }
}

impl_componentwise_ops!(Vector4, Vector4, [x, y, z, w]);

impl_scalar_ops!(Vector4, [x, y, z, w]);

impl_unary_op!(Neg, neg, Vector4, Vector4, |val| {
    Vector4::new(-val.x, -val.y, -val.z, -val.w)
});

impl_component_indexing!(Vector4, 4, [0 => x, 1 => y, 2 => z, 3 => w]);

impl_approx_partial_eq!(Vector4, [x, y, z, w]);

impl_abs_diff_eq!(Vector4, |a, b, epsilon| {
    a.x.abs_diff_eq(&b.x, epsilon)
        && a.y.abs_diff_eq(&b.y, epsilon)
        && a.z.abs_diff_eq(&b.z, epsilon)
        && a.w.abs_diff_eq(&b.w, epsilon)
});

impl_relative_eq!(Vector4, |a, b, epsilon, max_relative| {
    a.x.relative_eq(&b.x, epsilon, max_relative)
        && a.y.relative_eq(&b.y, epsilon, max_relative)
        && a.z.relative_eq(&b.z, epsilon, max_relative)
        && a.w.relative_eq(&b.w, epsilon, max_relative)
});

impl fmt::Display for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( {}, {}, {}, {} )", self.x, self.y, self.z, self.w)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    prop_compose! {
        fn vector4_strategy(max_abs: f32)(
            x in -max_abs..max_abs,
            y in -max_abs..max_abs,
            z in -max_abs..max_abs,
            w in -max_abs..max_abs,
        ) -> Vector4 {
            Vector4::new(x, y, z, w)
        }
    }

    #[test]
    fn computing_vector4_norm_works() {
        let v = Vector4::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(v.norm(), 2.0);
        assert_eq!(v.norm_squared(), 4.0);
    }

    #[test]
    fn normalizing_vector4_works() {
        let normalized = Vector4::new(0.0, 0.0, 0.0, -3.0).normalized();
        assert_eq!(normalized, Vector4::new(0.0, 0.0, 0.0, -1.0));

        let mut tiny = Vector4::same(1e-6);
        tiny.normalize();
        assert_eq!(tiny.w, 0.0);
    }

    #[test]
    fn widening_vector2_and_vector3_pads_with_zeros() {
        assert_eq!(
            Vector4::from(Vector2::new(1.0, 2.0)),
            Vector4::new(1.0, 2.0, 0.0, 0.0)
        );
        assert_eq!(
            Vector4::from(Vector3::new(1.0, 2.0, 3.0)),
            Vector4::new(1.0, 2.0, 3.0, 0.0)
        );
    }

    #[test]
    fn homogeneous_point_roundtrips_through_cartesian() {
        let point = Vector3::new(1.0, -2.0, 3.0);
        let homogeneous = Vector4::from_point(point);
        assert_eq!(homogeneous.w, 1.0);
        assert_eq!(homogeneous.to_cartesian(), point);

        let scaled = homogeneous * 2.0;
        assert_eq!(scaled.to_cartesian(), point);
    }

    #[test]
    fn homogeneous_direction_has_zero_w() {
        let direction = Vector4::from_direction(Vector3::forward());
        assert_eq!(direction, Vector4::unit_z());
        assert!(direction.is_finite());
        assert!(!direction.to_cartesian().is_finite());
    }

    #[test]
    fn vector4_projection_accessors_work() {
        let mut v = Vector4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.xy(), Vector2::new(1.0, 2.0));
        assert_eq!(v.xyz(), Vector3::new(1.0, 2.0, 3.0));

        v.set_xy(Vector2::new(-1.0, -2.0));
        assert_eq!(v, Vector4::new(-1.0, -2.0, 3.0, 4.0));

        v.set_xyz(Vector3::zeros());
        assert_eq!(v, Vector4::new(0.0, 0.0, 0.0, 4.0));
    }

    #[test]
    fn vector4_arithmetic_operations_work() {
        let v1 = Vector4::new(1.0, 2.0, 3.0, 4.0);
        let v2 = Vector4::same(2.0);

        assert_eq!(&v1 + &v2, Vector4::new(3.0, 4.0, 5.0, 6.0));
        assert_eq!(&v1 - v2, Vector4::new(-1.0, 0.0, 1.0, 2.0));
        assert_eq!(v1 * &v2, Vector4::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(v1 / v2, Vector4::new(0.5, 1.0, 1.5, 2.0));
        assert_eq!(-v1, Vector4::new(-1.0, -2.0, -3.0, -4.0));
        assert_eq!(2.0 / v1, v1 / 2.0);
    }

    #[test]
    fn vector4_geometric_queries_work() {
        let a = Vector4::unit_x();
        let b = Vector4::unit_w();
        assert_eq!(a.dot(&b), 0.0);
        assert_abs_diff_eq!(a.angle_to(&b), Degrees(90.0), epsilon = 1e-4);
        assert_abs_diff_eq!(a.distance_to(&b), 2.0_f32.sqrt(), epsilon = 1e-6);
        assert_eq!(Vector4::new(1.0, 0.0, 0.0, -1.0).reflected(&b), Vector4::new(1.0, 0.0, 0.0, 1.0));
        assert_abs_diff_eq!(Vector4::same(10.0).clamped_norm(4.0).norm(), 4.0, epsilon = 1e-5);
    }

    #[test]
    fn vector4_component_operations_work() {
        let v1 = Vector4::new(1.0, 5.0, -2.0, 0.0);
        let v2 = Vector4::new(3.0, -5.0, -1.0, 0.5);

        assert_eq!(v1.component_min(&v2), Vector4::new(1.0, -5.0, -2.0, 0.0));
        assert_eq!(v1.component_max(&v2), Vector4::new(3.0, 5.0, -1.0, 0.5));
        assert_eq!(v1.min_component(), -2.0);
        assert_eq!(v1.max_component(), 5.0);
        assert_eq!(v1.component_mul(&v2), Vector4::new(3.0, -25.0, 2.0, 0.0));

        let mut scaled = v1;
        scaled.scale(&v2);
        assert_eq!(scaled, v1.component_mul(&v2));
    }

    #[test]
    fn vector4_component_abs_and_finiteness_work() {
        let v = Vector4::new(-1.0, 2.0, -0.5, -4.0);
        assert_eq!(v.component_abs(), Vector4::new(1.0, 2.0, 0.5, 4.0));
        assert!(v.is_finite());

        assert!(!Vector4::new(0.0, 0.0, 0.0, f32::NAN).is_finite());
        assert!(!Vector4::new(f32::NEG_INFINITY, 0.0, 0.0, 1.0).is_finite());
    }

    #[test]
    fn angle_between_huge_vector4s_does_not_overflow() {
        let a = Vector4::new(1e10, 0.0, 0.0, 1e10);
        assert_abs_diff_eq!(a.angle_to(&a), Degrees(0.0), epsilon = 0.1);
        assert_abs_diff_eq!(
            a.angle_to(&Vector4::new(0.0, 1e10, 1e10, 0.0)),
            Degrees(90.0),
            epsilon = 1e-4
        );
    }

    #[test]
    fn incrementing_vector4_returns_updated_value() {
        let mut color = Vector4::new(0.0, 0.5, 1.0, 1.0);
        assert_eq!(color.increment(), Vector4::new(1.0, 1.5, 2.0, 2.0));
        assert_eq!(color.decrement(), Vector4::new(0.0, 0.5, 1.0, 1.0));
    }

    #[test]
    fn vector4_indexing_works() {
        let mut v = Vector4::zeros();
        v[3] = 1.0;
        assert_eq!(v.get(3), Ok(1.0));
        assert!(v.get(4).is_err());
        assert!(v.set(7, 1.0).is_err());
    }

    #[test]
    #[should_panic]
    fn indexing_vector4_out_of_bounds_panics() {
        let v = Vector4::zeros();
        let _ = v[4];
    }

    #[test]
    fn vector4_displays_components() {
        assert_eq!(Vector4::new(1.0, 0.0, 0.25, 1.0).to_string(), "( 1, 0, 0.25, 1 )");
    }

    proptest! {
        #[test]
        fn vector4_dot_with_itself_is_norm_squared(v in vector4_strategy(1e2)) {
            prop_assert!((v.dot(&v) - v.norm_squared()).abs() < 1e-3);
        }

        #[test]
        fn vector4_lerp_hits_endpoints(
            a in vector4_strategy(10.0),
            b in vector4_strategy(10.0),
        ) {
            prop_assert_eq!(a.lerp(&b, 0.0), a);
            prop_assert_eq!(a.lerp(&b, 1.0), b);
        }
    }
}
