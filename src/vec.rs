use core::{
	mem::MaybeUninit,
	ops::{
		Deref,
		DerefMut,
		Index,
		IndexMut,
		Range
	},
	ptr,
	slice::{
		self,
		SliceIndex
	},
	fmt,
	hash::{
		Hash,
		Hasher
	},
	iter::FusedIterator,
	cmp
};
use crate::{
	Error,
	raw::{
		RawBuf,
		handle_reserve,
		capacity_overflow,
		contract_violation
	}
};

/// Factor applied to the capacity each time an append finds the buffer full.
pub const GROWTH_FACTOR: usize = 2;

/// Capacity the growth factor is applied to when the buffer is still unallocated.
pub const MIN_GROWTH_BASE: usize = 1;

/// Contiguous growable array type.
///
/// A `GrowVec` owns a single heap block of `capacity` slots, of which the first `len`
/// hold live values. The remaining slots are uninitialized and are never read or dropped.
/// Appending to a full vector doubles its capacity (from an empty vector, the first
/// allocation has room for two elements), so `n` appends cost amortized `O(n)`.
///
/// Unlike `Vec`, capacity is always exactly what was asked for: [`reserve`](GrowVec::reserve)
/// and [`shrink_to`](GrowVec::shrink_to) take a target *capacity*, not an additional length,
/// and the resulting capacity is that exact target.
///
/// # Examples
///
/// ```
/// # use grow_vec::GrowVec;
/// let mut v = GrowVec::new();
/// v.push(0);
/// v.push(1);
/// v.push(2);
/// assert_eq!(v.len(), 3);
/// assert_eq!(v.capacity(), 4);
/// assert_eq!(v, [0, 1, 2]);
/// ```
pub struct GrowVec<T> {
	/// Backing storage.
	buf: RawBuf<T>,

	/// Number of live elements at the front of `buf`.
	len: usize
}

impl<T> Drop for GrowVec<T> {
	fn drop(&mut self) {
		unsafe {
			// `buf` frees the memory afterwards.
			ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.as_mut_ptr(), self.len))
		}
	}
}

impl<T> Default for GrowVec<T> {
	#[inline]
	fn default() -> Self {
		GrowVec::new()
	}
}

impl<T> GrowVec<T> {
	/// Constructs a new, empty `GrowVec<T>`.
	///
	/// The vector will not allocate until elements are pushed onto it.
	#[inline]
	pub const fn new() -> Self {
		GrowVec {
			buf: RawBuf::new(),
			len: 0
		}
	}

	/// Constructs a new, empty `GrowVec<T>` with exactly the given capacity.
	///
	/// # Panics
	///
	/// Panics if the capacity overflows `isize::MAX` bytes.
	/// Aborts if the allocation fails.
	#[inline]
	pub fn with_capacity(capacity: usize) -> Self {
		GrowVec {
			buf: RawBuf::with_capacity(capacity),
			len: 0
		}
	}

	/// The same as `with_capacity`, but returns on errors instead of panicking or aborting.
	#[inline]
	pub fn try_with_capacity(capacity: usize) -> Result<Self, Error> {
		Ok(GrowVec {
			buf: RawBuf::try_with_capacity(capacity)?,
			len: 0
		})
	}

	/// Returns the number of elements in the vector.
	#[inline]
	pub fn len(&self) -> usize {
		self.len
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Returns the number of elements the vector can hold without reallocating.
	#[inline]
	pub fn capacity(&self) -> usize {
		self.buf.capacity()
	}

	/// Forces the length of the vector to `len`.
	///
	/// ## Safety
	///
	/// `len` must be at most the capacity, and slots `[0, len)` must be initialized.
	#[inline]
	pub unsafe fn set_len(&mut self, len: usize) {
		debug_assert!(len <= self.capacity());
		self.len = len
	}

	/// Returns a raw pointer to the vector's buffer.
	///
	/// The caller must ensure that the vector outlives the pointer this
	/// function returns, or else it will end up pointing to garbage.
	/// Modifying the vector may cause its buffer to be reallocated,
	/// which would also make any pointers to it invalid.
	#[inline]
	pub fn as_ptr(&self) -> *const T {
		self.buf.ptr()
	}

	/// Returns an unsafe mutable pointer to the vector's buffer.
	#[inline]
	pub fn as_mut_ptr(&mut self) -> *mut T {
		self.buf.ptr()
	}

	/// Extracts a slice containing the entire vector.
	///
	/// Equivalent to `&s[..]`.
	#[inline]
	pub fn as_slice(&self) -> &[T] {
		unsafe {
			slice::from_raw_parts(self.as_ptr(), self.len)
		}
	}

	/// Extracts a mutable slice of the entire vector.
	///
	/// Equivalent to `&mut s[..]`.
	#[inline]
	pub fn as_mut_slice(&mut self) -> &mut [T] {
		unsafe {
			slice::from_raw_parts_mut(self.as_mut_ptr(), self.len)
		}
	}

	/// Returns the remaining spare capacity of the vector as a slice of
	/// `MaybeUninit<T>`.
	///
	/// The returned slice can be used to fill the vector with data before marking
	/// the data as initialized using the [`set_len`] method.
	///
	/// [`set_len`]: GrowVec::set_len
	#[inline]
	pub fn spare_capacity_mut(&mut self) -> &mut [MaybeUninit<T>] {
		let len = self.len;
		let spare = self.capacity() - len;
		unsafe {
			slice::from_raw_parts_mut(self.as_mut_ptr().add(len) as *mut MaybeUninit<T>, spare)
		}
	}

	/// Capacity reached by the next growth step.
	fn grown_capacity(&self) -> Result<usize, Error> {
		cmp::max(MIN_GROWTH_BASE, self.capacity())
			.checked_mul(GROWTH_FACTOR)
			.ok_or(Error::CapacityOverflow)
	}

	/// Makes room for one more element, growing geometrically if the buffer is full.
	#[inline]
	fn try_reserve_for_push(&mut self) -> Result<(), Error> {
		if self.len == self.capacity() {
			let capacity = self.grown_capacity()?;
			unsafe { self.buf.try_reallocate(self.len, capacity) }
		} else {
			Ok(())
		}
	}

	/// The same as `reserve`, but returns on errors instead of panicking or aborting.
	pub fn try_reserve(&mut self, capacity: usize) -> Result<(), Error> {
		if capacity <= self.capacity() {
			Ok(())
		} else {
			unsafe { self.buf.try_reallocate(self.len, capacity) }
		}
	}

	/// Ensures the capacity is at least `capacity`.
	///
	/// If the current capacity is smaller, a block of exactly `capacity` slots is
	/// allocated and the elements are moved into it. Otherwise this does nothing.
	/// The length and the elements are never changed.
	///
	/// # Panics
	///
	/// Panics if the new capacity overflows `isize::MAX` bytes.
	/// Aborts if the allocation fails.
	pub fn reserve(&mut self, capacity: usize) {
		handle_reserve(self.try_reserve(capacity))
	}

	/// Shrinks the capacity of the vector down to `capacity`.
	///
	/// The target is clamped to the length: live elements are never discarded
	/// by a shrink. Does nothing if the current capacity is not larger than the
	/// (clamped) target. Shrinking an empty vector to zero releases its allocation.
	pub fn shrink_to(&mut self, capacity: usize) {
		let capacity = cmp::max(capacity, self.len);
		if capacity < self.capacity() {
			handle_reserve(unsafe { self.buf.try_reallocate(self.len, capacity) })
		}
	}

	/// Shrinks the capacity of the vector to exactly its length.
	#[inline]
	pub fn shrink_to_fit(&mut self) {
		self.shrink_to(self.len)
	}

	/// Appends an element to the back of the vector.
	///
	/// # Panics
	///
	/// Panics if the new capacity overflows `isize::MAX` bytes.
	#[inline]
	pub fn push(&mut self, value: T) {
		handle_reserve(self.try_reserve_for_push());
		unsafe { self.push_unchecked(value) }
	}

	/// The same as `push`, but returns on errors instead of panicking or aborting.
	///
	/// On error, `value` is dropped and the vector is left unchanged.
	#[inline]
	pub fn try_push(&mut self, value: T) -> Result<(), Error> {
		self.try_reserve_for_push()?;
		unsafe { self.push_unchecked(value) }
		Ok(())
	}

	/// Constructs a new element in place at the back of the vector and returns
	/// a reference to it.
	///
	/// The buffer is grown (if needed) before `f` is called. If `f` panics the
	/// vector keeps its previous length.
	///
	/// # Example
	/// ```
	/// # use grow_vec::GrowVec;
	/// struct Point { x: i32, y: i32 }
	///
	/// let mut points = GrowVec::new();
	/// let p = points.push_with(|| Point { x: 1, y: 2 });
	/// p.y = 3;
	/// assert_eq!(points[0].y, 3);
	/// ```
	#[inline]
	pub fn push_with<F>(&mut self, f: F) -> &mut T where F: FnOnce() -> T {
		handle_reserve(self.try_reserve_for_push());
		unsafe {
			let end = self.as_mut_ptr().add(self.len);
			ptr::write(end, f());
			self.len += 1;
			&mut *end
		}
	}

	/// ## Safety
	///
	/// There must be at least one spare slot.
	#[inline]
	unsafe fn push_unchecked(&mut self, value: T) {
		debug_assert!(self.len < self.capacity());
		ptr::write(self.as_mut_ptr().add(self.len), value);
		self.len += 1;
	}

	/// Removes the last element from a vector and returns it, or [`None`] if it
	/// is empty.
	#[inline]
	pub fn pop(&mut self) -> Option<T> {
		if self.len == 0 {
			None
		} else {
			unsafe {
				self.len -= 1;
				Some(ptr::read(self.as_ptr().add(self.len)))
			}
		}
	}

	/// Drops the last element of the vector.
	///
	/// # Panics
	///
	/// Panics if the vector is empty.
	#[inline]
	#[track_caller]
	pub fn pop_back(&mut self) {
		if let Err(e) = self.try_pop_back() {
			contract_violation(e)
		}
	}

	/// The same as `pop_back`, but returns [`Error::Empty`] instead of panicking.
	pub fn try_pop_back(&mut self) -> Result<(), Error> {
		if self.len == 0 {
			return Err(Error::Empty)
		}

		unsafe {
			// The length goes down first so a panicking destructor cannot
			// cause the element to be dropped a second time.
			self.len -= 1;
			ptr::drop_in_place(self.as_mut_ptr().add(self.len));
		}

		Ok(())
	}

	/// Shortens the vector, keeping the first `len` elements and dropping
	/// the rest.
	///
	/// If `len` is greater than the vector's current length, this has no
	/// effect.
	///
	/// Note that this method has no effect on the allocated capacity
	/// of the vector.
	#[inline]
	pub fn truncate(&mut self, len: usize) {
		if len >= self.len {
			return;
		}

		unsafe {
			let remaining_len = self.len - len;
			let s = ptr::slice_from_raw_parts_mut(self.as_mut_ptr().add(len), remaining_len);
			self.len = len;
			ptr::drop_in_place(s);
		}
	}

	/// Clears the vector, removing all values.
	///
	/// Note that this method has no effect on the allocated capacity
	/// of the vector.
	#[inline]
	pub fn clear(&mut self) {
		self.truncate(0)
	}

	/// Returns a reference to the element at `index`.
	///
	/// # Panics
	///
	/// Panics if `index >= len`.
	#[inline]
	#[track_caller]
	pub fn at(&self, index: usize) -> &T {
		match self.try_at(index) {
			Ok(element) => element,
			Err(e) => contract_violation(e)
		}
	}

	/// Returns a mutable reference to the element at `index`.
	///
	/// # Panics
	///
	/// Panics if `index >= len`.
	#[inline]
	#[track_caller]
	pub fn at_mut(&mut self, index: usize) -> &mut T {
		match self.try_at_mut(index) {
			Ok(element) => element,
			Err(e) => contract_violation(e)
		}
	}

	#[inline]
	pub fn try_at(&self, index: usize) -> Result<&T, Error> {
		self.check_index(index)?;
		unsafe { Ok(self.get_unchecked(index)) }
	}

	#[inline]
	pub fn try_at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
		self.check_index(index)?;
		unsafe { Ok(self.get_unchecked_mut(index)) }
	}

	/// Returns a reference to the element at `index`, without bounds checking.
	///
	/// ## Safety
	///
	/// `index` must be smaller than the length.
	#[inline]
	pub unsafe fn get_unchecked(&self, index: usize) -> &T {
		debug_assert!(index < self.len);
		&*self.as_ptr().add(index)
	}

	/// Returns a mutable reference to the element at `index`, without bounds checking.
	///
	/// ## Safety
	///
	/// `index` must be smaller than the length.
	#[inline]
	pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
		debug_assert!(index < self.len);
		&mut *self.as_mut_ptr().add(index)
	}

	#[inline]
	fn check_index(&self, index: usize) -> Result<(), Error> {
		if index < self.len {
			Ok(())
		} else {
			Err(Error::IndexOutOfBounds { index, len: self.len })
		}
	}

	/// Inserts an element at position `index` within the vector, shifting all
	/// elements after it to the right.
	///
	/// # Panics
	///
	/// Panics if `index > len`.
	#[track_caller]
	pub fn insert(&mut self, index: usize, element: T) {
		handle_reserve(self.try_insert(index, element))
	}

	/// The same as `insert`, but returns on errors instead of panicking or aborting.
	///
	/// On error, `element` is dropped and the vector is left unchanged.
	pub fn try_insert(&mut self, index: usize, element: T) -> Result<(), Error> {
		let len = self.len;
		if index > len {
			return Err(Error::InsertOutOfBounds { index, len })
		}

		self.try_reserve_for_push()?;

		unsafe {
			let p = self.as_mut_ptr().add(index);
			// Shift everything over to make space. (Duplicating the
			// `index`th element into two consecutive places.)
			ptr::copy(p, p.add(1), len - index);
			// Write it in, overwriting the first copy of the `index`th
			// element.
			ptr::write(p, element);
			self.len = len + 1;
		}

		Ok(())
	}

	/// Removes and returns the element at position `index` within the vector,
	/// shifting all elements after it to the left.
	///
	/// # Panics
	///
	/// Panics if `index` is out of bounds.
	#[track_caller]
	pub fn remove(&mut self, index: usize) -> T {
		match self.try_remove(index) {
			Ok(element) => element,
			Err(e) => contract_violation(e)
		}
	}

	pub fn try_remove(&mut self, index: usize) -> Result<T, Error> {
		self.check_index(index)?;
		let len = self.len;

		unsafe {
			let p = self.as_mut_ptr().add(index);
			// copy it out, unsafely having a copy of the value on
			// the stack and in the vector at the same time.
			let ret = ptr::read(p);

			// Shift everything down to fill in that spot.
			ptr::copy(p.add(1), p, len - index - 1);
			self.len = len - 1;
			Ok(ret)
		}
	}

	/// Drops the element at position `index`, shifting all elements after it
	/// to the left.
	///
	/// # Panics
	///
	/// Panics if `index` is out of bounds.
	#[inline]
	#[track_caller]
	pub fn erase(&mut self, index: usize) {
		drop(self.remove(index))
	}

	/// Drops the elements in `range`, shifting all elements after it to the left.
	///
	/// # Panics
	///
	/// Panics if `range.start > range.end` or `range.end > len`.
	#[track_caller]
	pub fn erase_range(&mut self, range: Range<usize>) {
		let Range { start, end } = range;
		let len = self.len;
		if start > end || end > len {
			contract_violation(Error::InvalidRange { start, end, len })
		}

		unsafe {
			// Hide the erased range and the tail while dropping: if a destructor
			// panics the tail is leaked, never dropped twice.
			self.len = start;
			let base = self.as_mut_ptr();
			ptr::drop_in_place(ptr::slice_from_raw_parts_mut(base.add(start), end - start));
			ptr::copy(base.add(end), base.add(start), len - end);
			self.len = len - (end - start);
		}
	}

	/// Extend the vector by `n` values, using the given generator.
	///
	/// The capacity is raised to exactly `len + n` when it is insufficient.
	fn extend_with<E: ExtendWith<T>>(&mut self, n: usize, mut value: E) {
		self.reserve(self.required_len(n));

		unsafe {
			let mut ptr = self.as_mut_ptr().add(self.len);
			let mut local_len = SetLenOnDrop::new(&mut self.len);

			// Write all elements except the last one
			for _ in 1..n {
				ptr::write(ptr, value.next());
				ptr = ptr.add(1);
				// Increment the length in every step in case next() panics
				local_len.increment_len(1);
			}

			if n > 0 {
				// We can write the last element directly without cloning needlessly
				ptr::write(ptr, value.last());
				local_len.increment_len(1);
			}

			// len set by scope guard
		}
	}

	/// Grows the vector to `new_len`, filling new slots with values returned by `f`.
	///
	/// Does nothing if `new_len <= len`: this never shortens the vector
	/// (use [`truncate`](GrowVec::truncate) for that).
	pub fn resize_with<F>(&mut self, new_len: usize, f: F) where F: FnMut() -> T {
		if new_len > self.len {
			self.extend_with(new_len - self.len, ExtendFunc(f))
		}
	}

	/// Grows the vector to `new_len`, filling new slots with `T::default()`.
	///
	/// Does nothing if `new_len <= len`.
	pub fn resize_default(&mut self, new_len: usize) where T: Default {
		if new_len > self.len {
			self.extend_with(new_len - self.len, ExtendDefault)
		}
	}

	/// Grows the vector to `new_len`, filling new slots with clones of `value`.
	///
	/// Does nothing if `new_len <= len`.
	pub fn resize(&mut self, new_len: usize, value: T) where T: Clone {
		if new_len > self.len {
			self.extend_with(new_len - self.len, ExtendElement(value))
		}
	}

	/// Clones and appends all elements in a slice to the vector.
	///
	/// The capacity is raised to exactly `len + other.len()` when it is insufficient.
	pub fn extend_from_slice(&mut self, other: &[T]) where T: Clone {
		self.reserve(self.required_len(other.len()));

		unsafe {
			let ptr = self.as_mut_ptr().add(self.len);
			let mut local_len = SetLenOnDrop::new(&mut self.len);

			for (i, item) in other.iter().enumerate() {
				ptr::write(ptr.add(i), item.clone());
				// a panicking `clone` keeps what was already written
				local_len.increment_len(1);
			}
		}
	}

	/// Appends a copy of `other` with a single bulk memory copy.
	pub fn extend_from_copy_slice(&mut self, other: &[T]) where T: Copy {
		let required = self.required_len(other.len());
		self.reserve(required);

		unsafe {
			ptr::copy_nonoverlapping(other.as_ptr(), self.as_mut_ptr().add(self.len), other.len());
			self.len = required;
		}
	}

	/// `len + additional`, panicking on overflow.
	#[inline]
	fn required_len(&self, additional: usize) -> usize {
		match self.len.checked_add(additional) {
			Some(required) => required,
			None => capacity_overflow()
		}
	}

	/// Creates a vector holding a bitwise copy of `s`, with capacity `s.len()`.
	pub fn from_copy_slice(s: &[T]) -> Self where T: Copy {
		let mut v = GrowVec::with_capacity(s.len());
		v.extend_from_copy_slice(s);
		v
	}

	#[inline]
	pub fn iter(&self) -> slice::Iter<'_, T> {
		self.as_slice().iter()
	}

	#[inline]
	pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
		self.as_mut_slice().iter_mut()
	}
}

// Set the length of the vec when the `SetLenOnDrop` value goes out of scope.
//
// The idea is: The length field in SetLenOnDrop is a local variable
// that the optimizer will see does not alias with any stores through the Vec's data
// pointer. This is a workaround for alias analysis issue #32155
struct SetLenOnDrop<'a> {
	len: &'a mut usize,
	local_len: usize,
}

impl<'a> SetLenOnDrop<'a> {
	#[inline]
	fn new(len: &'a mut usize) -> Self {
		SetLenOnDrop { local_len: *len, len }
	}

	#[inline]
	fn increment_len(&mut self, increment: usize) {
		self.local_len += increment;
	}
}

impl Drop for SetLenOnDrop<'_> {
	#[inline]
	fn drop(&mut self) {
		*self.len = self.local_len;
	}
}

// This code generalizes `resize{_with,_default}` and `extend_from_slice`.
trait ExtendWith<T> {
	fn next(&mut self) -> T;
	fn last(self) -> T;
}

struct ExtendElement<T>(T);
impl<T: Clone> ExtendWith<T> for ExtendElement<T> {
	fn next(&mut self) -> T {
		self.0.clone()
	}
	fn last(self) -> T {
		self.0
	}
}

struct ExtendDefault;
impl<T: Default> ExtendWith<T> for ExtendDefault {
	fn next(&mut self) -> T {
		Default::default()
	}
	fn last(self) -> T {
		Default::default()
	}
}

struct ExtendFunc<F>(F);
impl<T, F: FnMut() -> T> ExtendWith<T> for ExtendFunc<F> {
	fn next(&mut self) -> T {
		(self.0)()
	}
	fn last(mut self) -> T {
		(self.0)()
	}
}

impl<T: Clone> Clone for GrowVec<T> {
	fn clone(&self) -> GrowVec<T> {
		let mut v = GrowVec::with_capacity(self.len);
		v.extend_from_slice(self);
		v
	}

	/// Drops the current elements, then clones the source's elements into the
	/// existing buffer (which only grows if it is too small).
	fn clone_from(&mut self, source: &Self) {
		self.clear();
		self.extend_from_slice(source);
	}
}

impl<T> Deref for GrowVec<T> {
	type Target = [T];

	#[inline]
	fn deref(&self) -> &[T] {
		self.as_slice()
	}
}

impl<T> DerefMut for GrowVec<T> {
	#[inline]
	fn deref_mut(&mut self) -> &mut [T] {
		self.as_mut_slice()
	}
}

impl<T, I: SliceIndex<[T]>> Index<I> for GrowVec<T> {
	type Output = I::Output;

	#[inline]
	fn index(&self, index: I) -> &Self::Output {
		Index::index(self.as_slice(), index)
	}
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for GrowVec<T> {
	#[inline]
	fn index_mut(&mut self, index: I) -> &mut Self::Output {
		IndexMut::index_mut(self.as_mut_slice(), index)
	}
}

impl<'v, T> IntoIterator for &'v GrowVec<T> {
	type Item = &'v T;
	type IntoIter = slice::Iter<'v, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<'v, T> IntoIterator for &'v mut GrowVec<T> {
	type Item = &'v mut T;
	type IntoIter = slice::IterMut<'v, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter_mut()
	}
}

/// An iterator that moves out of a vector.
///
/// Elements not yielded are dropped with the iterator.
pub struct IntoIter<T> {
	buf: RawBuf<T>,
	start: usize,
	end: usize
}

impl<T> IntoIter<T> {
	/// Returns the remaining items of this iterator as a slice.
	#[inline]
	pub fn as_slice(&self) -> &[T] {
		unsafe {
			slice::from_raw_parts(self.buf.ptr().add(self.start), self.end - self.start)
		}
	}
}

impl<T> Iterator for IntoIter<T> {
	type Item = T;

	#[inline]
	fn next(&mut self) -> Option<T> {
		if self.start == self.end {
			None
		} else {
			unsafe {
				let item = ptr::read(self.buf.ptr().add(self.start));
				self.start += 1;
				Some(item)
			}
		}
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		let len = self.end - self.start;
		(len, Some(len))
	}
}

impl<T> DoubleEndedIterator for IntoIter<T> {
	#[inline]
	fn next_back(&mut self) -> Option<T> {
		if self.start == self.end {
			None
		} else {
			unsafe {
				self.end -= 1;
				Some(ptr::read(self.buf.ptr().add(self.end)))
			}
		}
	}
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
	fn drop(&mut self) {
		unsafe {
			let remaining = ptr::slice_from_raw_parts_mut(self.buf.ptr().add(self.start), self.end - self.start);
			self.start = self.end;
			ptr::drop_in_place(remaining)
		}
	}
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
	}
}

impl<T> IntoIterator for GrowVec<T> {
	type Item = T;
	type IntoIter = IntoIter<T>;

	fn into_iter(mut self) -> Self::IntoIter {
		let end = self.len;
		// `self` is left empty and unallocated, so dropping it is a no-op.
		self.len = 0;
		IntoIter {
			buf: self.buf.take(),
			start: 0,
			end
		}
	}
}

impl<T> Extend<T> for GrowVec<T> {
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		for item in iter {
			self.push(item)
		}
	}
}

impl<'a, T: Copy + 'a> Extend<&'a T> for GrowVec<T> {
	fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
		for item in iter {
			self.push(*item)
		}
	}
}

impl<T> FromIterator<T> for GrowVec<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		let mut v = GrowVec::new();
		v.extend(iter);
		v
	}
}

impl<T: fmt::Debug> fmt::Debug for GrowVec<T> {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(self.as_slice(), f)
	}
}

impl<T: Hash> Hash for GrowVec<T> {
	#[inline]
	fn hash<H: Hasher>(&self, state: &mut H) {
		Hash::hash(self.as_slice(), state)
	}
}

impl<T> AsRef<[T]> for GrowVec<T> {
	#[inline]
	fn as_ref(&self) -> &[T] {
		self
	}
}

impl<T> AsMut<[T]> for GrowVec<T> {
	#[inline]
	fn as_mut(&mut self) -> &mut [T] {
		self
	}
}

impl<T> From<Vec<T>> for GrowVec<T> {
	fn from(v: Vec<T>) -> GrowVec<T> {
		let mut result = GrowVec::with_capacity(v.len());
		result.extend(v);
		result
	}
}

impl<T: Clone> From<&[T]> for GrowVec<T> {
	fn from(s: &[T]) -> GrowVec<T> {
		let mut v = GrowVec::with_capacity(s.len());
		v.extend_from_slice(s);
		v
	}
}

impl<T, const N: usize> From<[T; N]> for GrowVec<T> {
	fn from(array: [T; N]) -> GrowVec<T> {
		let mut v = GrowVec::with_capacity(N);
		v.extend(array);
		v
	}
}

impl<T> From<GrowVec<T>> for Vec<T> {
	fn from(v: GrowVec<T>) -> Vec<T> {
		v.into_iter().collect()
	}
}

macro_rules! impl_slice_eq1 {
	([$($vars:tt)*] $lhs:ty, $rhs:ty) => {
		impl<$($vars)*> PartialEq<$rhs> for $lhs where T: PartialEq<U> {
			#[inline]
			fn eq(&self, other: &$rhs) -> bool { self[..] == other[..] }
			#[inline]
			fn ne(&self, other: &$rhs) -> bool { self[..] != other[..] }
		}
	}
}

impl_slice_eq1! { [T, U] GrowVec<T>, GrowVec<U> }
impl_slice_eq1! { [T, U] GrowVec<T>, Vec<U> }
impl_slice_eq1! { [T, U] Vec<T>, GrowVec<U> }
impl_slice_eq1! { [T, U] GrowVec<T>, &[U] }
impl_slice_eq1! { [T, U] GrowVec<T>, &mut [U] }
impl_slice_eq1! { [T, U] &[T], GrowVec<U> }
impl_slice_eq1! { [T, U, const O: usize] GrowVec<T>, [U; O] }
impl_slice_eq1! { [T, U, const O: usize] GrowVec<T>, &[U; O] }
impl_slice_eq1! { [T, U, const O: usize] [T; O], GrowVec<U> }

impl<T: Eq> Eq for GrowVec<T> {}
