//! Marshalling of value records across a foreign call boundary.
//!
//! Every record is a `#[repr(C)]` sequence of `f32` components with no
//! padding, so a slice of records can be reinterpreted as a flat slice of
//! floats and back without copying.

use crate::{MathError, Quaternion, Result, Vector2, Vector3, Vector4};
use bytemuck::Pod;
use std::mem;

const _: () = assert!(mem::size_of::<Vector2>() == 8);
const _: () = assert!(mem::size_of::<Vector3>() == 12);
const _: () = assert!(mem::size_of::<Vector4>() == 16);
const _: () = assert!(mem::size_of::<Quaternion>() == 16);

const _: () = assert!(mem::align_of::<Vector2>() == 4);
const _: () = assert!(mem::align_of::<Vector3>() == 4);
const _: () = assert!(mem::align_of::<Vector4>() == 4);
const _: () = assert!(mem::align_of::<Quaternion>() == 4);

/// A record made up of a fixed number of consecutive `f32` components.
pub trait ComponentRecord: Pod {
    /// The number of `f32` components in the record.
    const N_COMPONENTS: usize;
}

impl ComponentRecord for Vector2 {
    const N_COMPONENTS: usize = Vector2::N_COMPONENTS;
}

impl ComponentRecord for Vector3 {
    const N_COMPONENTS: usize = Vector3::N_COMPONENTS;
}

impl ComponentRecord for Vector4 {
    const N_COMPONENTS: usize = Vector4::N_COMPONENTS;
}

/// Quaternion components are stored in `w`, `x`, `y`, `z` order.
impl ComponentRecord for Quaternion {
    const N_COMPONENTS: usize = Quaternion::N_COMPONENTS;
}

/// Views the given records as a flat slice of their components.
#[inline]
pub fn as_components<T: ComponentRecord>(records: &[T]) -> &[f32] {
    bytemuck::cast_slice(records)
}

/// Views the given records as a mutable flat slice of their components.
#[inline]
pub fn as_components_mut<T: ComponentRecord>(records: &mut [T]) -> &mut [f32] {
    bytemuck::cast_slice_mut(records)
}

/// Views the given flat slice of components as records.
///
/// # Errors
/// Returns [`MathError::MisalignedComponentBuffer`] if the number of
/// components is not a multiple of the record size.
pub fn from_components<T: ComponentRecord>(components: &[f32]) -> Result<&[T]> {
    check_component_count::<T>(components.len())?;
    bytemuck::try_cast_slice(components).map_err(|err| {
        pinecone_log::debug!("Failed to cast component buffer: {err}");
        misaligned::<T>(components.len())
    })
}

/// Views the given mutable flat slice of components as records.
///
/// # Errors
/// Returns [`MathError::MisalignedComponentBuffer`] if the number of
/// components is not a multiple of the record size.
pub fn from_components_mut<T: ComponentRecord>(components: &mut [f32]) -> Result<&mut [T]> {
    let len = components.len();
    check_component_count::<T>(len)?;
    bytemuck::try_cast_slice_mut(components).map_err(|err| {
        pinecone_log::debug!("Failed to cast component buffer: {err}");
        misaligned::<T>(len)
    })
}

fn check_component_count<T: ComponentRecord>(len: usize) -> Result<()> {
    if len % T::N_COMPONENTS == 0 {
        Ok(())
    } else {
        Err(misaligned::<T>(len))
    }
}

fn misaligned<T: ComponentRecord>(len: usize) -> MathError {
    MathError::MisalignedComponentBuffer {
        len,
        components: T::N_COMPONENTS,
    }
}
