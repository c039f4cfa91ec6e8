//! Small-vector and quaternion math.
//!
//! The value types in this crate are plain `#[repr(C)]` records of `f32`
//! components, so they can be copied by value across a foreign call boundary
//! (see [`interop`]).

#[macro_use]
mod macros;

pub mod angle;
pub mod consts;
pub mod interop;
pub mod num;
pub mod quaternion;
pub mod vector;

pub use angle::{Degrees, Radians};
pub use quaternion::Quaternion;
pub use vector::{Vector2, Vector3, Vector4};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MathError>;

#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MathError {
    #[error("Component index {index} is out of bounds for a value with {len} components")]
    ComponentIndexOutOfBounds { index: usize, len: usize },

    #[error(
        "Buffer of {len} floats does not divide into records of {components} components"
    )]
    MisalignedComponentBuffer { len: usize, components: usize },
}

/// Creates the error for a rejected component index, logging the rejection.
pub(crate) fn component_index_error(index: usize, len: usize) -> MathError {
    pinecone_log::debug!("Rejected component index {index} for {len}-component value");
    MathError::ComponentIndexOutOfBounds { index, len }
}
