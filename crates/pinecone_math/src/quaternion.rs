//! Quaternions.

use crate::vector::{Vector3, Vector4};
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use std::fmt;

/// A quaternion `w + xi + yj + zk`, typically representing a rotation.
///
/// Laid out as four consecutive `f32`s in `w`, `x`, `y`, `z` order. Use
/// [`Self::to_vector4`] for the `x`, `y`, `z`, `w` ordering expected by
/// 4-vector based interfaces.
///
/// Nothing keeps the quaternion normalized; call [`Self::normalize`] before
/// treating it as a rotation if it may have drifted.
#[repr(C)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Zeroable, Pod)]
pub struct Quaternion {
    pub w: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Quaternion {
    /// Creates a new quaternion with the given real part `w` and imaginary
    /// parts `x`, `y` and `z`.
    #[inline]
    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self { w, x, y, z }
    }

    /// Creates a new quaternion with the same value for all components.
    #[inline]
    pub const fn same(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// The quaternion representing no rotation.
    #[inline]
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Creates the quaternion for the rotation given by the Euler angles (in
    /// radians) about the x-, y- and z-axes.
    pub fn from_euler_angles(euler_angles: &Vector3) -> Self {
        let (sx, cx) = (0.5 * euler_angles.x).sin_cos();
        let (sy, cy) = (0.5 * euler_angles.y).sin_cos();
        let (sz, cz) = (0.5 * euler_angles.z).sin_cos();

        Self::new(
            cx * cy * cz + sx * sy * sz,
            sx * cy * cz - cx * sy * sz,
            cx * sy * cz + sx * cy * sz,
            cx * cy * sz - sx * sy * cz,
        )
    }

    /// Creates the quaternion for a rotation of `angle` radians about the
    /// given axis. The axis is normalized first.
    pub fn from_axis_angle(axis: &Vector3, angle: f32) -> Self {
        let axis = axis.normalized();
        let (sin_half_angle, cos_half_angle) = (0.5 * angle).sin_cos();
        Self::new(
            cos_half_angle,
            axis.x * sin_half_angle,
            axis.y * sin_half_angle,
            axis.z * sin_half_angle,
        )
    }

    /// Returns the components as a 4-vector in `x`, `y`, `z`, `w` order.
    #[inline]
    pub const fn to_vector4(&self) -> Vector4 {
        Vector4::new(self.x, self.y, self.z, self.w)
    }

    /// The imaginary part as a 3-vector.
    #[inline]
    pub const fn imag(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn norm(&self) -> f32 {
        self.norm_squared().sqrt()
    }

    #[inline]
    pub fn norm_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Normalizes the quaternion in place. A quaternion with a norm of
    /// exactly zero is left as it is.
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm == 0.0 {
            pinecone_log::trace!("Skipping normalization of zero quaternion");
            return;
        }
        *self /= norm;
    }

    /// Returns a normalized copy of the quaternion. See [`Self::normalize`].
    #[inline]
    pub fn normalized(&self) -> Self {
        let mut normalized = *self;
        normalized.normalize();
        normalized
    }

    /// Returns the conjugate, which has the imaginary parts negated.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Returns the multiplicative inverse. For a unit quaternion this equals
    /// the conjugate. The inverse of the zero quaternion is non-finite.
    #[inline]
    pub fn inverse(&self) -> Self {
        self.conjugate() / self.dot(self)
    }

    /// Rotates the given vector by this quaternion, computed as
    /// `q * (0, v) * q⁻¹`.
    pub fn rotate_vector(&self, vector: &Vector3) -> Vector3 {
        let pure = Self::new(0.0, vector.x, vector.y, vector.z);
        (self * pure * self.inverse()).imag()
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<Vector4> for Quaternion {
    /// Interprets the vector as `(x, y, z, w)`.
    #[inline]
    fn from(vector: Vector4) -> Self {
        Self::new(vector.w, vector.x, vector.y, vector.z)
    }
}

impl From<Quaternion> for Vector4 {
    #[inline]
    fn from(quaternion: Quaternion) -> Self {
        quaternion.to_vector4()
    }
}

impl_binop!(Add, add, Quaternion, Quaternion, Quaternion, |a, b| {
    Quaternion::new(a.w + b.w, a.x + b.x, a.y + b.y, a.z + b.z)
});

impl_binop!(Sub, sub, Quaternion, Quaternion, Quaternion, |a, b| {
    Quaternion::new(a.w - b.w, a.x - b.x, a.y - b.y, a.z - b.z)
});

impl_binop!(Mul, mul, Quaternion, Quaternion, Quaternion, |a, b| {
    Quaternion::new(
        a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
        a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
        a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
        a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
    )
});

impl_binop!(Mul, mul, Quaternion, f32, Quaternion, |a, b| {
    Quaternion::new(a.w * b, a.x * b, a.y * b, a.z * b)
});

impl_binop!(Mul, mul, f32, Quaternion, Quaternion, |a, b| { b * a });

impl_binop!(Div, div, Quaternion, f32, Quaternion, |a, b| {
    Quaternion::new(a.w / b, a.x / b, a.y / b, a.z / b)
});

impl_binop_assign!(AddAssign, add_assign, Quaternion, Quaternion, |a, b| {
    *a = *a + b;
});

impl_binop_assign!(SubAssign, sub_assign, Quaternion, Quaternion, |a, b| {
    *a = *a - b;
});

impl_binop_assign!(MulAssign, mul_assign, Quaternion, Quaternion, |a, b| {
    *a = *a * b;
});

impl_binop_assign!(MulAssign, mul_assign, Quaternion, f32, |a, b| {
    *a = *a * b;
});

impl_binop_assign!(DivAssign, div_assign, Quaternion, f32, |a, b| {
    *a = *a / b;
});

impl_unary_op!(Neg, neg, Quaternion, Quaternion, |val| {
    Quaternion::new(-val.w, -val.x, -val.y, -val.z)
});

impl_component_indexing!(Quaternion, 4, [0 => w, 1 => x, 2 => y, 3 => z]);

impl_approx_partial_eq!(Quaternion, [w, x, y, z]);

impl_abs_diff_eq!(Quaternion, |a, b, epsilon| {
    a.w.abs_diff_eq(&b.w, epsilon)
        && a.x.abs_diff_eq(&b.x, epsilon)
        && a.y.abs_diff_eq(&b.y, epsilon)
        && a.z.abs_diff_eq(&b.z, epsilon)
});

impl_relative_eq!(Quaternion, |a, b, epsilon, max_relative| {
    a.w.relative_eq(&b.w, epsilon, max_relative)
        && a.x.relative_eq(&b.x, epsilon, max_relative)
        && a.y.relative_eq(&b.y, epsilon, max_relative)
        && a.z.relative_eq(&b.z, epsilon, max_relative)
});

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( {} {{ {}, {}, {} }} )", self.w, self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use crate::MathError;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    const TOLERANCE: f32 = 1e-6;

    prop_compose! {
        fn quaternion_strategy(max_abs: f32)(
            w in -max_abs..max_abs,
            x in -max_abs..max_abs,
            y in -max_abs..max_abs,
            z in -max_abs..max_abs,
        ) -> Quaternion {
            Quaternion::new(w, x, y, z)
        }
    }

    prop_compose! {
        fn axis_strategy()(
            x in -1.0_f32..1.0,
            y in -1.0_f32..1.0,
            z in -1.0_f32..1.0,
        ) -> Vector3 {
            Vector3::new(x, y, z)
        }
    }

    #[test]
    fn default_quaternion_is_identity() {
        assert_eq!(Quaternion::default(), Quaternion::new(1.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn same_broadcasts_to_all_components() {
        let q = Quaternion::same(2.0);
        assert_eq!([q.w, q.x, q.y, q.z], [2.0; 4]);
    }

    #[test]
    fn quaternion_from_euler_angle_about_single_axis_matches_axis_angle() {
        let angle = 0.7;
        assert_abs_diff_eq!(
            Quaternion::from_euler_angles(&Vector3::new(angle, 0.0, 0.0)),
            Quaternion::from_axis_angle(&Vector3::unit_x(), angle),
            epsilon = TOLERANCE
        );
        assert_abs_diff_eq!(
            Quaternion::from_euler_angles(&Vector3::new(0.0, angle, 0.0)),
            Quaternion::from_axis_angle(&Vector3::unit_y(), angle),
            epsilon = TOLERANCE
        );
        assert_abs_diff_eq!(
            Quaternion::from_euler_angles(&Vector3::new(0.0, 0.0, angle)),
            Quaternion::from_axis_angle(&Vector3::unit_z(), angle),
            epsilon = TOLERANCE
        );
    }

    #[test]
    fn quaternion_from_euler_angles_uses_exact_sign_pattern() {
        let (ex, ey, ez) = (0.3_f32, -1.1_f32, 2.0_f32);
        let (sx, cx) = (0.5 * ex).sin_cos();
        let (sy, cy) = (0.5 * ey).sin_cos();
        let (sz, cz) = (0.5 * ez).sin_cos();

        let q = Quaternion::from_euler_angles(&Vector3::new(ex, ey, ez));

        assert_abs_diff_eq!(q.w, cx * cy * cz + sx * sy * sz, epsilon = TOLERANCE);
        assert_abs_diff_eq!(q.x, sx * cy * cz - cx * sy * sz, epsilon = TOLERANCE);
        assert_abs_diff_eq!(q.y, cx * sy * cz + sx * cy * sz, epsilon = TOLERANCE);
        assert_abs_diff_eq!(q.z, cx * cy * sz - sx * sy * cz, epsilon = TOLERANCE);
        assert_abs_diff_eq!(q.norm(), 1.0, epsilon = TOLERANCE);
    }

    #[test]
    fn quaternion_from_axis_angle_normalizes_axis() {
        let q = Quaternion::from_axis_angle(&Vector3::new(0.0, 0.0, 5.0), PI);
        assert_abs_diff_eq!(q, Quaternion::new(0.0, 0.0, 0.0, 1.0), epsilon = TOLERANCE);
    }

    #[test]
    fn quaternion_from_axis_angle_with_zero_angle_is_identity() {
        let q = Quaternion::from_axis_angle(&Vector3::new(1.0, 2.0, 3.0), 0.0);
        assert_eq!(q, Quaternion::identity());
    }

    #[test]
    fn converting_between_quaternion_and_vector4_reorders_components() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let v = q.to_vector4();
        assert_eq!(v, Vector4::new(2.0, 3.0, 4.0, 1.0));
        assert_eq!(Vector4::from(q), v);
        assert_eq!(Quaternion::from(v), q);
    }

    #[test]
    fn computing_quaternion_norm_and_dot_works() {
        let q = Quaternion::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(q.norm(), 2.0);
        assert_eq!(q.norm_squared(), 4.0);
        assert_eq!(q.dot(&Quaternion::new(1.0, -1.0, 2.0, 0.5)), 2.5);
    }

    #[test]
    fn normalizing_quaternion_gives_unit_norm() {
        let mut q = Quaternion::new(0.0, 3.0, 0.0, 4.0);
        q.normalize();
        assert_abs_diff_eq!(q, Quaternion::new(0.0, 0.6, 0.0, 0.8), epsilon = TOLERANCE);
        assert_abs_diff_eq!(q.norm(), 1.0, epsilon = TOLERANCE);
    }

    #[test]
    fn normalizing_zero_quaternion_leaves_it_unchanged() {
        let mut q = Quaternion::same(0.0);
        q.normalize();
        assert_eq!([q.w, q.x, q.y, q.z], [0.0; 4]);
    }

    #[test]
    fn normalizing_tiny_quaternion_still_divides() {
        let normalized = Quaternion::new(1e-6, 0.0, 0.0, 0.0).normalized();
        assert_abs_diff_eq!(normalized.w, 1.0, epsilon = TOLERANCE);
    }

    #[test]
    fn conjugate_negates_imaginary_parts() {
        let q = Quaternion::new(1.0, 2.0, -3.0, 4.0);
        assert_eq!(q.conjugate(), Quaternion::new(1.0, -2.0, 3.0, -4.0));
    }

    #[test]
    fn multiplying_quaternion_with_inverse_gives_identity() {
        let q = Quaternion::new(2.0, -1.0, 0.5, 3.0);
        assert_abs_diff_eq!(q * q.inverse(), Quaternion::identity(), epsilon = 1e-5);
        assert_abs_diff_eq!(q.inverse() * q, Quaternion::identity(), epsilon = 1e-5);
    }

    #[test]
    fn inverse_of_unit_quaternion_is_conjugate() {
        let q = Quaternion::from_axis_angle(&Vector3::new(1.0, 1.0, 0.0), 1.2);
        assert_abs_diff_eq!(q.inverse(), q.conjugate(), epsilon = TOLERANCE);
    }

    #[test]
    fn hamilton_product_of_basis_elements_works() {
        let i = Quaternion::new(0.0, 1.0, 0.0, 0.0);
        let j = Quaternion::new(0.0, 0.0, 1.0, 0.0);
        let k = Quaternion::new(0.0, 0.0, 0.0, 1.0);

        assert_eq!(&i * &j, k);
        assert_eq!(&j * &k, i);
        assert_eq!(&k * &i, j);
        assert_eq!(j * i, -k);
        assert_eq!(i * i, Quaternion::new(-1.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn rotating_vector_about_z_axis_works() {
        let rotation = Quaternion::from_axis_angle(&Vector3::unit_z(), FRAC_PI_2);
        let rotated = rotation.rotate_vector(&Vector3::unit_x());
        assert_abs_diff_eq!(rotated, Vector3::unit_y(), epsilon = TOLERANCE);
    }

    #[test]
    fn composed_rotation_applies_right_operand_first() {
        let about_z = Quaternion::from_axis_angle(&Vector3::unit_z(), FRAC_PI_2);
        let about_x = Quaternion::from_axis_angle(&Vector3::unit_x(), FRAC_PI_2);

        let rotated = (about_x * about_z).rotate_vector(&Vector3::unit_x());
        assert_abs_diff_eq!(rotated, Vector3::unit_z(), epsilon = TOLERANCE);
    }

    #[test]
    fn quaternion_arithmetic_operations_work() {
        let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let b = Quaternion::same(1.0);

        assert_eq!(a + b, Quaternion::new(2.0, 3.0, 4.0, 5.0));
        assert_eq!(&a - &b, Quaternion::new(0.0, 1.0, 2.0, 3.0));
        assert_eq!(a * 2.0, Quaternion::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(a / 2.0, Quaternion::new(0.5, 1.0, 1.5, 2.0));

        let mut c = a;
        c += b;
        c -= a;
        c *= 3.0;
        c /= 3.0;
        assert_eq!(c, b);

        c *= Quaternion::identity();
        assert_eq!(c, b);
    }

    #[test]
    fn quaternion_indexing_follows_storage_order() {
        let mut q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q[0], 1.0);
        assert_eq!(q[3], 4.0);

        q[0] = 5.0;
        assert_eq!(q.w, 5.0);
        assert_eq!(
            q.get(4),
            Err(MathError::ComponentIndexOutOfBounds { index: 4, len: 4 })
        );
    }

    #[test]
    #[should_panic]
    fn indexing_quaternion_out_of_bounds_panics() {
        let q = Quaternion::identity();
        let _ = q[4];
    }

    #[test]
    fn quaternion_displays_real_part_first() {
        assert_eq!(
            Quaternion::new(1.0, 0.5, -2.0, 0.0).to_string(),
            "( 1 { 0.5, -2, 0 } )"
        );
    }

    proptest! {
        #[test]
        fn identity_is_neutral_for_multiplication(q in quaternion_strategy(1e2)) {
            prop_assert_eq!(Quaternion::identity() * q, q);
            prop_assert_eq!(q * Quaternion::identity(), q);
        }

        #[test]
        fn axis_angle_with_zero_angle_is_identity_for_any_axis(axis in axis_strategy()) {
            prop_assume!(axis.norm() > 1e-3);
            prop_assert_eq!(Quaternion::from_axis_angle(&axis, 0.0), Quaternion::identity());
        }

        #[test]
        fn rotation_preserves_vector_norm(
            axis in axis_strategy(),
            angle in -PI..PI,
            x in -10.0_f32..10.0,
            y in -10.0_f32..10.0,
            z in -10.0_f32..10.0,
        ) {
            prop_assume!(axis.norm() > 1e-3);
            let rotation = Quaternion::from_axis_angle(&axis, angle);
            let vector = Vector3::new(x, y, z);
            let rotated = rotation.rotate_vector(&vector);
            prop_assert!((rotated.norm() - vector.norm()).abs() < 1e-4);
        }
    }
}
