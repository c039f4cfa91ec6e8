//! Arithmetic between vectors of different dimensions.
//!
//! The result always has the dimension of the left operand. Only the
//! components present in both operands are combined; any further components
//! of the left operand are passed through and any further components of the
//! right operand are ignored.

use crate::vector::{Vector2, Vector3, Vector4};

impl_componentwise_ops!(Vector2, Vector3, [x, y]);
impl_componentwise_ops!(Vector2, Vector4, [x, y]);

impl_componentwise_ops!(Vector3, Vector2, [x, y]);
impl_componentwise_ops!(Vector3, Vector4, [x, y, z]);

impl_componentwise_ops!(Vector4, Vector2, [x, y]);
impl_componentwise_ops!(Vector4, Vector3, [x, y, z]);
