use std::alloc::Layout;
use thiserror::Error;

/// Errors reported by the fallible (`try_*`) operations of
/// [`GrowVec`](crate::GrowVec).
///
/// Each variant corresponds to one contract violation or resource failure.
/// The non-`try` twin of every operation turns the same condition into a panic
/// (or, for allocation failures, into [`std::alloc::handle_alloc_error`]).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
	/// Checked access, removal or erasure past the last live element.
	#[error("index out of bounds: the len is {len} but the index is {index}")]
	IndexOutOfBounds {
		/// Index that was requested.
		index: usize,
		/// Length of the container at the time of the request.
		len: usize
	},

	/// Insertion at an index greater than the length.
	#[error("insertion index (is {index}) should be <= len (is {len})")]
	InsertOutOfBounds {
		index: usize,
		len: usize
	},

	/// Removal from the end of an empty container.
	#[error("pop_back on an empty GrowVec")]
	Empty,

	/// `erase_range` called with `start > end` or `end > len`.
	#[error("invalid erase range {start}..{end} for len {len}")]
	InvalidRange {
		start: usize,
		end: usize,
		len: usize
	},

	/// The requested capacity does not fit in `isize::MAX` bytes.
	#[error("capacity overflow")]
	CapacityOverflow,

	/// The global allocator could not provide the requested block.
	#[error("memory allocation of {} bytes failed", layout.size())]
	AllocFailed {
		layout: Layout
	}
}
