use core::{
	alloc::Layout,
	marker::PhantomData,
	mem,
	ptr::{
		self,
		NonNull
	}
};
use std::alloc::{
	self as global,
	handle_alloc_error
};
use log::trace;
use crate::Error;

/// A low-level owning handle on a block of `capacity` element slots.
///
/// This type does not in anyway inspect the memory that it manages. When dropped it *will*
/// free its memory, but it *won't* try to drop its contents. It is up to the user of `RawBuf`
/// to track which slots hold live values and to drop them.
///
/// A capacity of zero means no allocation exists and the pointer is dangling.
/// Zero-sized element types never allocate, whatever the capacity.
pub(crate) struct RawBuf<T> {
	/// Start of the block (dangling if nothing is allocated).
	ptr: NonNull<T>,

	/// Number of element slots in the block.
	capacity: usize,

	/// The buffer logically owns values of type `T`.
	marker: PhantomData<T>
}

unsafe impl<T: Send> Send for RawBuf<T> {}
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> Drop for RawBuf<T> {
	fn drop(&mut self) {
		unsafe {
			deallocate(self.ptr, self.capacity)
		}
	}
}

impl<T> RawBuf<T> {
	/// Creates an empty handle. Does not allocate.
	#[inline]
	pub const fn new() -> Self {
		RawBuf {
			ptr: NonNull::dangling(),
			capacity: 0,
			marker: PhantomData
		}
	}

	/// Allocates a block of exactly `capacity` slots.
	///
	/// # Panics
	///
	/// Panics on capacity overflow. Aborts on allocation failure.
	#[inline]
	pub fn with_capacity(capacity: usize) -> Self {
		handle_reserve(Self::try_with_capacity(capacity))
	}

	/// The same as `with_capacity`, but returns on errors instead of panicking or aborting.
	pub fn try_with_capacity(capacity: usize) -> Result<Self, Error> {
		Ok(RawBuf {
			ptr: allocate(capacity)?,
			capacity,
			marker: PhantomData
		})
	}

	#[inline]
	pub fn capacity(&self) -> usize {
		self.capacity
	}

	#[inline]
	pub fn ptr(&self) -> *mut T {
		self.ptr.as_ptr()
	}

	/// Moves the first `len` slots into a freshly allocated block of exactly
	/// `new_capacity` slots and releases the old block.
	///
	/// On error nothing is changed: the old block and its contents are left untouched.
	///
	/// ## Safety
	///
	/// Slots `[0, len)` must hold live values, and `len <= new_capacity`.
	/// After the call those values live in slots `[0, len)` of the new block.
	pub unsafe fn try_reallocate(&mut self, len: usize, new_capacity: usize) -> Result<(), Error> {
		debug_assert!(len <= new_capacity);
		debug_assert!(len <= self.capacity);

		let new_ptr = allocate::<T>(new_capacity)?;
		trace!(
			"relocating {} element(s) of `{}`: capacity {} -> {}",
			len,
			core::any::type_name::<T>(),
			self.capacity,
			new_capacity
		);

		relocate(self.ptr.as_ptr(), new_ptr.as_ptr(), len);

		let old_ptr = mem::replace(&mut self.ptr, new_ptr);
		let old_capacity = mem::replace(&mut self.capacity, new_capacity);
		deallocate(old_ptr, old_capacity);
		Ok(())
	}

	/// Gives up the block without freeing it.
	///
	/// Used when ownership of the block moves to another `RawBuf`.
	#[inline]
	pub fn take(&mut self) -> RawBuf<T> {
		mem::replace(self, RawBuf::new())
	}
}

/// Moves `len` live values from `src` to `dst`.
///
/// Types without drop glue are relocated with a single bulk copy. Other types are moved
/// one slot at a time in ascending order: each source slot is read out (leaving it
/// logically uninitialized) and written to its destination before the next one is touched,
/// so each value has exactly one live home at any point.
///
/// ## Safety
///
/// `src` must hold `len` live values, `dst` must be valid for `len` writes and the two
/// ranges must not overlap.
unsafe fn relocate<T>(src: *mut T, dst: *mut T, len: usize) {
	if !mem::needs_drop::<T>() {
		ptr::copy_nonoverlapping(src, dst, len);
	} else {
		for i in 0..len {
			ptr::write(dst.add(i), ptr::read(src.add(i)));
		}
	}
}

/// Computes the layout of a block of `capacity` slots of `T`.
pub(crate) fn layout_for<T>(capacity: usize) -> Result<Layout, Error> {
	// `Layout::array` rejects anything above `isize::MAX` bytes.
	Layout::array::<T>(capacity).map_err(|_| Error::CapacityOverflow)
}

/// Allocates uninitialized memory for `capacity` slots of `T`, correctly aligned.
///
/// Zero-sized requests (either `capacity == 0` or a zero-sized `T`) do not touch the
/// allocator and return a dangling pointer.
pub(crate) fn allocate<T>(capacity: usize) -> Result<NonNull<T>, Error> {
	let layout = layout_for::<T>(capacity)?;

	if layout.size() == 0 {
		return Ok(NonNull::dangling())
	}

	// SAFETY: the layout has a non-zero size.
	let ptr = unsafe { global::alloc(layout) };
	NonNull::new(ptr.cast()).ok_or(Error::AllocFailed { layout })
}

/// Releases a block previously returned by [`allocate`] with the same `capacity`.
///
/// ## Safety
///
/// `ptr` must come from `allocate::<T>(capacity)` and must not be used afterwards.
pub(crate) unsafe fn deallocate<T>(ptr: NonNull<T>, capacity: usize) {
	let size = mem::size_of::<T>() * capacity;
	if size != 0 {
		let layout = Layout::from_size_align_unchecked(size, mem::align_of::<T>());
		global::dealloc(ptr.as_ptr().cast(), layout)
	}
}

// Central function for reserve error handling.
#[inline]
pub(crate) fn handle_reserve<R>(result: Result<R, Error>) -> R {
	match result {
		Ok(r) => r,
		Err(Error::CapacityOverflow) => capacity_overflow(),
		Err(Error::AllocFailed { layout }) => handle_alloc_error(layout),
		Err(e) => contract_violation(e)
	}
}

// One central function responsible for reporting capacity overflows. This'll
// ensure that the code generation related to these panics is minimal as there's
// only one location which panics rather than a bunch throughout the module.
pub(crate) fn capacity_overflow() -> ! {
	panic!("capacity overflow");
}

/// Reports a caller error and unwinds.
#[cold]
#[track_caller]
pub(crate) fn contract_violation(error: Error) -> ! {
	panic!("{}", error)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_buffer_does_not_allocate() {
		let buf = RawBuf::<u64>::new();
		assert_eq!(buf.capacity(), 0);
		assert_eq!(buf.ptr(), NonNull::<u64>::dangling().as_ptr());
	}

	#[test]
	fn zero_sized_types_are_never_allocated() {
		let buf = RawBuf::<()>::with_capacity(1024);
		assert_eq!(buf.capacity(), 1024);
		assert_eq!(buf.ptr(), NonNull::<()>::dangling().as_ptr());
	}

	#[test]
	fn allocation_is_aligned() {
		#[repr(align(64))]
		struct Wide(#[allow(dead_code)] u8);

		let buf = RawBuf::<Wide>::with_capacity(3);
		assert_eq!(buf.ptr() as usize % 64, 0);
	}

	#[test]
	fn overflowing_capacity_is_reported() {
		assert_eq!(
			RawBuf::<u64>::try_with_capacity(usize::MAX).err(),
			Some(Error::CapacityOverflow)
		);
	}

	#[test]
	#[should_panic(expected = "capacity overflow")]
	fn overflowing_capacity_panics() {
		let _ = RawBuf::<u32>::with_capacity(usize::MAX / 2);
	}

	#[test]
	fn reallocation_keeps_values() {
		let mut buf = RawBuf::<String>::with_capacity(2);
		unsafe {
			ptr::write(buf.ptr(), "a".to_string());
			ptr::write(buf.ptr().add(1), "b".to_string());
			buf.try_reallocate(2, 5).unwrap();
			assert_eq!(buf.capacity(), 5);
			assert_eq!(*buf.ptr(), "a");
			assert_eq!(*buf.ptr().add(1), "b");
			ptr::drop_in_place(ptr::slice_from_raw_parts_mut(buf.ptr(), 2));
		}
	}

	#[test]
	fn reallocation_to_zero_releases_the_block() {
		let mut buf = RawBuf::<u8>::with_capacity(16);
		unsafe { buf.try_reallocate(0, 0).unwrap() }
		assert_eq!(buf.capacity(), 0);
		assert_eq!(buf.ptr(), NonNull::<u8>::dangling().as_ptr());
	}
}
