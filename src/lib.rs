//! This crate provides [`GrowVec`], a contiguous growable array that manages its
//! own raw memory, and [`FixedArray`], a fixed-size inline array wrapper.
//!
//! ## Basic usage
//!
//! A `GrowVec` starts empty, without allocating.
//! Each append into a full buffer doubles its capacity.
//! ```rust
//! use grow_vec::GrowVec;
//!
//! let mut v = GrowVec::new();
//! assert_eq!(v.capacity(), 0);
//! v.push(0);
//! v.push(1);
//! v.push(2);
//! assert_eq!((v.len(), v.capacity()), (3, 4));
//! v.push(3);
//! assert_eq!((v.len(), v.capacity()), (4, 4));
//! v.push(4);
//! assert_eq!((v.len(), v.capacity()), (5, 8));
//! ```
//!
//! Capacity can also be controlled explicitly.
//! [`reserve`](GrowVec::reserve) and [`shrink_to`](GrowVec::shrink_to) take the
//! target *capacity* and allocate exactly that many slots:
//! ```rust
//! # use grow_vec::GrowVec;
//! let mut v: GrowVec<u32> = GrowVec::new();
//! v.reserve(128);
//! assert_eq!((v.len(), v.capacity()), (0, 128));
//! v.extend([1, 2, 3]);
//! v.shrink_to_fit();
//! assert_eq!(v.capacity(), 3);
//! ```
//!
//! ## Errors
//!
//! Contract violations (out-of-bounds checked access, `pop_back` on an empty
//! vector, ...) panic, and allocation failures abort the process.
//! Every such operation has a `try_` twin returning an [`Error`] instead:
//! ```rust
//! # use grow_vec::{GrowVec, Error};
//! let v: GrowVec<u8> = GrowVec::from([1, 2, 3]);
//! assert_eq!(v.try_at(10), Err(Error::IndexOutOfBounds { index: 10, len: 3 }));
//! ```
//!
//! ## Relocation
//!
//! When the buffer is reallocated, element types without drop glue are moved
//! with a single bulk copy. Other element types are moved one by one, so that
//! each value has exactly one live slot at any time. The vector never drops a
//! value twice and never drops an uninitialized slot.
//!
//! ## Logging
//!
//! Every reallocation is reported at the `trace` level through the [`log`] facade.
mod raw;
mod error;
pub mod vec;
pub mod array;

pub use error::Error;
pub use vec::{
	GrowVec,
	IntoIter
};
pub use array::FixedArray;
