#![allow(dead_code)]

use std::{
	cell::Cell,
	rc::Rc
};

/// Shared construction/destruction tally.
#[derive(Default)]
pub struct Counts {
	pub constructed: Cell<usize>,
	pub dropped: Cell<usize>
}

impl Counts {
	pub fn new() -> Rc<Counts> {
		Rc::new(Counts::default())
	}

	pub fn live(&self) -> usize {
		self.constructed.get() - self.dropped.get()
	}
}

/// Element type with no default value that records every construction
/// (including clones) and every drop.
pub struct Tracked {
	pub value: u32,
	counts: Rc<Counts>
}

impl Tracked {
	pub fn new(value: u32, counts: &Rc<Counts>) -> Tracked {
		counts.constructed.set(counts.constructed.get() + 1);
		Tracked {
			value,
			counts: counts.clone()
		}
	}
}

impl Clone for Tracked {
	fn clone(&self) -> Tracked {
		Tracked::new(self.value, &self.counts)
	}
}

impl Drop for Tracked {
	fn drop(&mut self) {
		let dropped = &self.counts.dropped;
		dropped.set(dropped.get() + 1);
	}
}

impl PartialEq for Tracked {
	fn eq(&self, other: &Tracked) -> bool {
		self.value == other.value
	}
}

impl std::fmt::Debug for Tracked {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Tracked({})", self.value)
	}
}
