use core::{
	ops::{
		Deref,
		DerefMut,
		Index,
		IndexMut
	},
	slice::{
		self,
		SliceIndex
	},
	fmt
};
use crate::{
	Error,
	raw::contract_violation
};

/// Fixed-size array stored inline (on the stack when the value is).
///
/// A thin wrapper around `[T; N]` with the same checked access surface as
/// [`GrowVec`](crate::GrowVec). It never allocates.
///
/// ```
/// # use grow_vec::FixedArray;
/// let mut arr = FixedArray::new([0, 1, 2, 3, 4]);
/// arr[3] = 10;
/// assert_eq!(arr.iter().sum::<i32>(), 17);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedArray<T, const N: usize> {
	data: [T; N]
}

impl<T, const N: usize> FixedArray<T, N> {
	#[inline]
	pub const fn new(data: [T; N]) -> Self {
		FixedArray { data }
	}

	/// Always `N`.
	#[inline]
	pub const fn len(&self) -> usize {
		N
	}

	#[inline]
	pub const fn is_empty(&self) -> bool {
		N == 0
	}

	#[inline]
	pub fn as_ptr(&self) -> *const T {
		self.data.as_ptr()
	}

	#[inline]
	pub fn as_mut_ptr(&mut self) -> *mut T {
		self.data.as_mut_ptr()
	}

	#[inline]
	pub fn as_slice(&self) -> &[T] {
		&self.data
	}

	#[inline]
	pub fn as_mut_slice(&mut self) -> &mut [T] {
		&mut self.data
	}

	/// Returns a reference to the element at `index`.
	///
	/// # Panics
	///
	/// Panics if `index >= N`.
	#[inline]
	#[track_caller]
	pub fn at(&self, index: usize) -> &T {
		match self.data.get(index) {
			Some(element) => element,
			None => contract_violation(Error::IndexOutOfBounds { index, len: N })
		}
	}

	/// Returns a mutable reference to the element at `index`.
	///
	/// # Panics
	///
	/// Panics if `index >= N`.
	#[inline]
	#[track_caller]
	pub fn at_mut(&mut self, index: usize) -> &mut T {
		match self.data.get_mut(index) {
			Some(element) => element,
			None => contract_violation(Error::IndexOutOfBounds { index, len: N })
		}
	}

	#[inline]
	pub fn iter(&self) -> slice::Iter<'_, T> {
		self.data.iter()
	}

	#[inline]
	pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
		self.data.iter_mut()
	}

	/// Unwraps the underlying array.
	#[inline]
	pub fn into_inner(self) -> [T; N] {
		self.data
	}
}

impl<T: Default, const N: usize> Default for FixedArray<T, N> {
	fn default() -> Self {
		FixedArray {
			data: core::array::from_fn(|_| T::default())
		}
	}
}

impl<T, const N: usize> From<[T; N]> for FixedArray<T, N> {
	#[inline]
	fn from(data: [T; N]) -> Self {
		FixedArray { data }
	}
}

impl<T, const N: usize> Deref for FixedArray<T, N> {
	type Target = [T];

	#[inline]
	fn deref(&self) -> &[T] {
		&self.data
	}
}

impl<T, const N: usize> DerefMut for FixedArray<T, N> {
	#[inline]
	fn deref_mut(&mut self) -> &mut [T] {
		&mut self.data
	}
}

impl<T, I: SliceIndex<[T]>, const N: usize> Index<I> for FixedArray<T, N> {
	type Output = I::Output;

	#[inline]
	fn index(&self, index: I) -> &Self::Output {
		Index::index(self.as_slice(), index)
	}
}

impl<T, I: SliceIndex<[T]>, const N: usize> IndexMut<I> for FixedArray<T, N> {
	#[inline]
	fn index_mut(&mut self, index: I) -> &mut Self::Output {
		IndexMut::index_mut(self.as_mut_slice(), index)
	}
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedArray<T, N> {
	type Item = &'a T;
	type IntoIter = slice::Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<'a, T, const N: usize> IntoIterator for &'a mut FixedArray<T, N> {
	type Item = &'a mut T;
	type IntoIter = slice::IterMut<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter_mut()
	}
}

impl<T, const N: usize> IntoIterator for FixedArray<T, N> {
	type Item = T;
	type IntoIter = core::array::IntoIter<T, N>;

	fn into_iter(self) -> Self::IntoIter {
		self.data.into_iter()
	}
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for FixedArray<T, N> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(&self.data, f)
	}
}
