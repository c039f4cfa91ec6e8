//! Utility macros.

/// Implements a binary operator for all four combinations of owned and
/// borrowed operands, with the body written once in terms of references.
macro_rules! impl_binop {
    ($op:ident, $method:ident, $tl:ty, $tr:ty, $to:ty, |$lhs:ident, $rhs:ident| $body:block) => {
        impl<'a> ::std::ops::$op<&'a $tr> for &'a $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl ::std::ops::$op<$tr> for &$tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                self.$method(&rhs)
            }
        }

        impl<'a> ::std::ops::$op<&'a $tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                (&self).$method(rhs)
            }
        }

        impl ::std::ops::$op<$tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                (&self).$method(&rhs)
            }
        }
    };
}

macro_rules! impl_unary_op {
    ($op:ident, $method:ident, $t:ty, $to:ty, |$this:ident| $body:block) => {
        impl ::std::ops::$op for &$t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                let $this = self;
                $body
            }
        }

        impl ::std::ops::$op for $t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                (&self).$method()
            }
        }
    };
}

macro_rules! impl_binop_assign {
    ($op:ident, $method:ident, $tl:ty, $tr:ty, |$lhs:ident, $rhs:ident| $body:block) => {
        impl ::std::ops::$op<&$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: &$tr) {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl ::std::ops::$op<$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: $tr) {
                self.$method(&rhs);
            }
        }
    };
}

/// Implements `+`, `-`, `*` and `/` (and their assigning forms) between two
/// record types by combining the listed components. The result has the type
/// of the left operand, and any left-hand component not listed is passed
/// through untouched.
macro_rules! impl_componentwise_ops {
    ($tl:ident, $tr:ident, [$($c:ident),+]) => {
        impl_componentwise_ops!(@op Add, add, AddAssign, add_assign, +, $tl, $tr, [$($c),+]);
        impl_componentwise_ops!(@op Sub, sub, SubAssign, sub_assign, -, $tl, $tr, [$($c),+]);
        impl_componentwise_ops!(@op Mul, mul, MulAssign, mul_assign, *, $tl, $tr, [$($c),+]);
        impl_componentwise_ops!(@op Div, div, DivAssign, div_assign, /, $tl, $tr, [$($c),+]);
    };
    (@op $op:ident, $method:ident, $op_assign:ident, $method_assign:ident, $sym:tt,
        $tl:ident, $tr:ident, [$($c:ident),+]) => {
        impl_binop!($op, $method, $tl, $tr, $tl, |a, b| {
            let mut result = *a;
            $(result.$c = a.$c $sym b.$c;)+
            result
        });

        impl_binop_assign!($op_assign, $method_assign, $tl, $tr, |a, b| {
            $(a.$c = a.$c $sym b.$c;)+
        });
    };
}

/// Implements `+`, `-`, `*` and `/` between a record type and an `f32`
/// broadcast to every listed component.
///
/// The scalar-on-the-left forms delegate to the scalar-on-the-right forms
/// with the operands swapped, so `s - v` evaluates to `v - s` and `s / v` to
/// `v / s`.
macro_rules! impl_scalar_ops {
    ($t:ident, [$($c:ident),+]) => {
        impl_scalar_ops!(@op Add, add, AddAssign, add_assign, +, $t, [$($c),+]);
        impl_scalar_ops!(@op Sub, sub, SubAssign, sub_assign, -, $t, [$($c),+]);
        impl_scalar_ops!(@op Mul, mul, MulAssign, mul_assign, *, $t, [$($c),+]);
        impl_scalar_ops!(@op Div, div, DivAssign, div_assign, /, $t, [$($c),+]);
    };
    (@op $op:ident, $method:ident, $op_assign:ident, $method_assign:ident, $sym:tt,
        $t:ident, [$($c:ident),+]) => {
        impl_binop!($op, $method, $t, f32, $t, |a, b| {
            $t {
                $($c: a.$c $sym *b,)+
            }
        });

        impl_binop!($op, $method, f32, $t, $t, |a, b| {
            ::std::ops::$op::$method(b, a)
        });

        impl_binop_assign!($op_assign, $method_assign, $t, f32, |a, b| {
            $(a.$c = a.$c $sym *b;)+
        });
    };
}

/// Implements [`PartialEq`] as per-component approximate equality within
/// [`EPSILON`](crate::consts::EPSILON).
macro_rules! impl_approx_partial_eq {
    ($t:ident, [$($c:ident),+]) => {
        impl PartialEq for $t {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                true $(&& $crate::num::approx_eq(self.$c, other.$c))+
            }
        }
    };
}

/// Implements checked component access by index (`get`, `get_mut`, `set`)
/// together with panicking [`Index`](std::ops::Index) and
/// [`IndexMut`](std::ops::IndexMut).
macro_rules! impl_component_indexing {
    ($t:ident, $len:literal, [$($idx:literal => $c:ident),+]) => {
        impl $t {
            /// The number of components.
            pub const N_COMPONENTS: usize = $len;

            /// Returns the component at the given index.
            ///
            /// # Errors
            /// Returns [`MathError::ComponentIndexOutOfBounds`](crate::MathError)
            /// if the index does not address a component.
            #[inline]
            pub fn get(&self, index: usize) -> $crate::Result<f32> {
                self.get_ref(index).copied()
            }

            /// Returns a mutable reference to the component at the given
            /// index.
            ///
            /// # Errors
            /// Returns [`MathError::ComponentIndexOutOfBounds`](crate::MathError)
            /// if the index does not address a component.
            #[inline]
            pub fn get_mut(&mut self, index: usize) -> $crate::Result<&mut f32> {
                match index {
                    $($idx => Ok(&mut self.$c),)+
                    _ => Err($crate::component_index_error(index, $len)),
                }
            }

            /// Overwrites the component at the given index.
            ///
            /// # Errors
            /// Returns [`MathError::ComponentIndexOutOfBounds`](crate::MathError)
            /// if the index does not address a component.
            #[inline]
            pub fn set(&mut self, index: usize, value: f32) -> $crate::Result<()> {
                *self.get_mut(index)? = value;
                Ok(())
            }

            #[inline]
            fn get_ref(&self, index: usize) -> $crate::Result<&f32> {
                match index {
                    $($idx => Ok(&self.$c),)+
                    _ => Err($crate::component_index_error(index, $len)),
                }
            }
        }

        impl ::std::ops::Index<usize> for $t {
            type Output = f32;

            #[inline]
            fn index(&self, index: usize) -> &Self::Output {
                self.get_ref(index).unwrap_or_else(|err| panic!("{err}"))
            }
        }

        impl ::std::ops::IndexMut<usize> for $t {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                self.get_mut(index).unwrap_or_else(|err| panic!("{err}"))
            }
        }
    };
}

macro_rules! impl_abs_diff_eq {
    ($t:ty, |$arg1:ident, $arg2:ident, $arg3:ident| $body:block) => {
        impl ::approx::AbsDiffEq for $t {
            type Epsilon = f32;

            fn default_epsilon() -> Self::Epsilon {
                f32::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                let $arg1 = self;
                let $arg2 = other;
                let $arg3 = epsilon;
                $body
            }
        }
    };
}

macro_rules! impl_relative_eq {
    ($t:ty, |$arg1:ident, $arg2:ident, $arg3:ident, $arg4:ident| $body:block) => {
        impl ::approx::RelativeEq for $t {
            fn default_max_relative() -> Self::Epsilon {
                f32::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                let $arg1 = self;
                let $arg2 = other;
                let $arg3 = epsilon;
                let $arg4 = max_relative;
                $body
            }
        }
    };
}
