//! Change notifications for capacity-bounded collections.
//!
//! Each collection owns an [`Observers`] registry. After a mutation has been
//! applied, the collection describes it as a [`ListChange`] or
//! [`TableChange`] and delivers it to every subscriber, synchronously and in
//! registration order, before the mutating call returns. Structural events
//! (insert/remove/replace/move) are always delivered before the length or
//! size property event of the same call.
//!
//! Subscribers are plain closures. Because mutators take `&mut self`, a
//! subscriber cannot re-enter the collection it is observing; it sees the
//! collection's final state through the event payload instead.
//!
//! # Examples
//!
//! ```
//! use wolfdata_collections::prelude::*;
//! use std::{cell::RefCell, rc::Rc};
//!
//! # fn main() -> Result<(), ValidationError> {
//! let mut list = CapacityList::new(CapacityPolicy::Unbounded, |_| 0u8);
//! let seen = Rc::new(RefCell::new(Vec::new()));
//!
//! let sink = Rc::clone(&seen);
//! list.subscribe(move |change| sink.borrow_mut().push(*change));
//!
//! list.push(7)?;
//! assert_eq!(
//!     *seen.borrow(),
//!     [
//!         ListChange::Inserted { index: 0, count: 1 },
//!         ListChange::LengthChanged { old: 0, new: 1 },
//!     ],
//! );
//! # Ok(())
//! # }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A change applied to a one-dimensional list.
///
/// Index ranges describe positions in the list *after* the change, except
/// for removals, where `index` is the position the elements used to occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListChange {
	/// `count` elements were inserted starting at `index`
	Inserted {
		/// First inserted position
		index: usize,
		/// Number of inserted elements
		count: usize,
	},
	/// `count` elements starting at `index` were removed
	Removed {
		/// Position the removed elements occupied
		index: usize,
		/// Number of removed elements
		count: usize,
	},
	/// `count` elements starting at `index` were replaced in place
	Replaced {
		/// First replaced position
		index: usize,
		/// Number of replaced elements
		count: usize,
	},
	/// A contiguous block of `count` elements moved from `from` to `to`
	Moved {
		/// Old position of the block's first element
		from: usize,
		/// New position of the block's first element
		to: usize,
		/// Number of moved elements
		count: usize,
	},
	/// The entire contents were replaced
	Reset {
		/// Length before the reset
		old_len: usize,
		/// Length after the reset
		new_len: usize,
	},
	/// Property event: the length changed (fired after the structural event)
	LengthChanged {
		/// Length before the mutation
		old: usize,
		/// Length after the mutation
		new: usize,
	},
}

/// A change applied to a two-dimensional table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableChange {
	/// `count` rows were inserted starting at row `index`
	RowsInserted {
		/// First inserted row
		index: usize,
		/// Number of inserted rows
		count: usize,
	},
	/// `count` rows starting at row `index` were removed
	RowsRemoved {
		/// Row the removed rows occupied
		index: usize,
		/// Number of removed rows
		count: usize,
	},
	/// `count` rows starting at row `index` were replaced in place
	RowsReplaced {
		/// First replaced row
		index: usize,
		/// Number of replaced rows
		count: usize,
	},
	/// A contiguous block of `count` rows moved from `from` to `to`
	RowsMoved {
		/// Old position of the block's first row
		from: usize,
		/// New position of the block's first row
		to: usize,
		/// Number of moved rows
		count: usize,
	},
	/// `count` columns were inserted starting at column `index`
	ColumnsInserted {
		/// First inserted column
		index: usize,
		/// Number of inserted columns
		count: usize,
	},
	/// `count` columns starting at column `index` were removed
	ColumnsRemoved {
		/// Column the removed columns occupied
		index: usize,
		/// Number of removed columns
		count: usize,
	},
	/// `count` columns starting at column `index` were replaced in place
	ColumnsReplaced {
		/// First replaced column
		index: usize,
		/// Number of replaced columns
		count: usize,
	},
	/// A contiguous block of `count` columns moved from `from` to `to`
	ColumnsMoved {
		/// Old position of the block's first column
		from: usize,
		/// New position of the block's first column
		to: usize,
		/// Number of moved columns
		count: usize,
	},
	/// A single cell was replaced
	CellReplaced {
		/// Row of the replaced cell
		row: usize,
		/// Column of the replaced cell
		column: usize,
	},
	/// The entire contents were replaced
	Reset {
		/// Row count before the reset
		old_rows: usize,
		/// Column count before the reset
		old_columns: usize,
		/// Row count after the reset
		new_rows: usize,
		/// Column count after the reset
		new_columns: usize,
	},
	/// Property event: the shape changed (fired after the structural events)
	SizeChanged {
		/// Row count before the mutation
		old_rows: usize,
		/// Column count before the mutation
		old_columns: usize,
		/// Row count after the mutation
		new_rows: usize,
		/// Column count after the mutation
		new_columns: usize,
	},
}

/// Handle returned by [`Observers::subscribe`], used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Registry of change subscribers for a single collection instance.
///
/// Delivery is synchronous and happens in subscription order. The registry
/// never buffers: an event is delivered during the mutating call that
/// produced it.
pub struct Observers<E> {
	subscribers: Vec<(SubscriptionId, Box<dyn FnMut(&E)>)>,
	next_id: u64,
}

impl<E> Observers<E> {
	/// Creates an empty registry
	pub fn new() -> Self {
		Self {
			subscribers: Vec::new(),
			next_id: 0,
		}
	}

	/// Registers a subscriber and returns its handle
	pub fn subscribe(&mut self, subscriber: impl FnMut(&E) + 'static) -> SubscriptionId {
		let id = SubscriptionId(self.next_id);
		self.next_id += 1;
		self.subscribers.push((id, Box::new(subscriber)));
		id
	}

	/// Removes a subscriber; returns `false` if the handle was unknown
	pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
		let before = self.subscribers.len();
		self.subscribers.retain(|(sid, _)| *sid != id);
		self.subscribers.len() != before
	}

	/// Number of registered subscribers
	pub fn len(&self) -> usize {
		self.subscribers.len()
	}

	/// Whether no subscriber is registered
	pub fn is_empty(&self) -> bool {
		self.subscribers.is_empty()
	}

	/// Delivers `event` to every subscriber in registration order
	pub(crate) fn emit(&mut self, event: &E)
	where
		E: fmt::Debug,
	{
		for (id, subscriber) in &mut self.subscribers {
			log::trace!("delivering {event:?} to subscriber {id:?}");
			subscriber(event);
		}
	}
}

impl<E> Default for Observers<E> {
	fn default() -> Self {
		Self::new()
	}
}

impl<E> fmt::Debug for Observers<E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Observers")
			.field("subscribers", &self.subscribers.len())
			.finish()
	}
}
