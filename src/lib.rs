//! Growable contiguous arrays with shift-based editing.
//!
//! [`TypedArray`] stores elements of a single type in one allocation,
//! supporting insertion and removal at any index, front and back operations,
//! range insertion, sorted-position search and sorting. [`PtrArray`] layers
//! an optional per-handle destructor on top for arrays of owned pointers.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
#[macro_use]
extern crate std;

#[cfg(feature = "alloc")]
extern crate alloc as alloc_crate;

pub mod alloc;

pub mod array;

pub mod capacity;

pub(crate) mod error;

pub mod ptr_array;

pub(crate) mod storage;

pub use self::{
    array::TypedArray,
    error::{StorageError, UpdateError},
    ptr_array::{Destructor, PtrArray},
};

#[cfg(feature = "zeroize")]
pub use self::array::ZeroizingArray;
