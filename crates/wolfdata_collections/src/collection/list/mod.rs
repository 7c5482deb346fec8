//! One-dimensional capacity-bounded list.
//!
//! [`CapacityList`] owns a `Vec<T>` and a [`CapacityPolicy`], and consults
//! the [`validate::line`](super::validate::line) rules before every
//! mutation. A rejected request returns a [`ValidationError`] and leaves the
//! list untouched; a successful one is reported to subscribers as one or two
//! [`ListChange`] events (the structural change, then `LengthChanged` when
//! the length moved).
//!
//! Growth never leaves a gap: whenever the list must synthesize elements
//! ([`CapacityList::new`], [`CapacityList::adjust_length`],
//! [`CapacityList::clear`]), it calls the default-item factory supplied at
//! construction with the index being filled.
//!
//! # Examples
//!
//! ```
//! use wolfdata_collections::prelude::*;
//!
//! # fn main() -> Result<(), ValidationError> {
//! // An event page holds 1 to 10 pages in the editor
//! let policy = CapacityPolicy::bounded(1, 10)?;
//! let mut pages = CapacityList::with_items(policy, vec!["page 1"], |_| "")?;
//!
//! pages.push("page 2")?;
//! pages.move_item(1, 0)?;
//! assert_eq!(pages.as_slice(), ["page 2", "page 1"]);
//!
//! // The last page cannot be removed
//! pages.remove_at(0)?;
//! assert!(pages.remove_at(0).is_err());
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::ops::{Index, IndexMut};
use std::rc::Rc;

use super::capacity::CapacityPolicy;
use super::error::ValidationError;
use super::notify::{ListChange, Observers, SubscriptionId};
use super::validate::{self, line};

/// Factory producing the element stored at a given index when the list grows.
pub type DefaultItem<T> = Rc<dyn Fn(usize) -> T>;

/// A list whose length is governed by a [`CapacityPolicy`].
///
/// Constructed with `Fixed(n)`, the list behaves like the editor's
/// hard-sized collections: `set`, `move` and full-length `reset` work, while
/// anything that would change the length fails with
/// [`ValidationError::CapacityViolation`]. With `Bounded` or `Unbounded`
/// policies the full mutation surface is available within bounds.
pub struct CapacityList<T> {
	items: Vec<T>,
	policy: CapacityPolicy,
	default_item: DefaultItem<T>,
	observers: Observers<ListChange>,
}

impl<T> CapacityList<T> {
	/// Creates a list filled to the policy's minimum length with
	/// factory-produced items.
	pub fn new(policy: CapacityPolicy, default_item: impl Fn(usize) -> T + 'static) -> Self {
		let default_item: DefaultItem<T> = Rc::new(default_item);
		let items = (0..policy.min_capacity()).map(|i| default_item(i)).collect();
		Self {
			items,
			policy,
			default_item,
			observers: Observers::new(),
		}
	}

	/// Creates a list from `items`, failing if their number violates the policy.
	pub fn with_items(
		policy: CapacityPolicy,
		items: Vec<T>,
		default_item: impl Fn(usize) -> T + 'static,
	) -> Result<Self, ValidationError> {
		line::reset(policy, items.len())?;
		Ok(Self {
			items,
			policy,
			default_item: Rc::new(default_item),
			observers: Observers::new(),
		})
	}

	/// Creates a list from a decoded batch that may contain absent entries,
	/// as produced by padded arrays in project files.
	///
	/// Fails with [`ValidationError::MissingItem`] on the first gap.
	pub fn with_decoded_items(
		policy: CapacityPolicy,
		items: Vec<Option<T>>,
		default_item: impl Fn(usize) -> T + 'static,
	) -> Result<Self, ValidationError> {
		let items = validate::collect_present("items", items)?;
		Self::with_items(policy, items, default_item)
	}

	/// Number of elements currently stored
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Whether the list holds no elements
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// The capacity policy this list was created with
	pub const fn policy(&self) -> CapacityPolicy {
		self.policy
	}

	/// Smallest length the policy allows
	pub const fn min_capacity(&self) -> usize {
		self.policy.min_capacity()
	}

	/// Largest length the policy allows
	pub const fn max_capacity(&self) -> usize {
		self.policy.max_capacity()
	}

	/// Returns a reference to the element at `index`, if it exists
	pub fn get(&self, index: usize) -> Option<&T> {
		self.items.get(index)
	}

	/// Returns a mutable reference to the element at `index`, if it exists.
	///
	/// Writing through it bypasses change notification; use
	/// [`CapacityList::set`] when observers must see the replacement.
	pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
		self.items.get_mut(index)
	}

	/// Returns `count` elements starting at `index` as a slice
	pub fn slice(&self, index: usize, count: usize) -> Result<&[T], ValidationError> {
		line::get(self.items.len(), index, count)?;
		Ok(&self.items[index..index + count])
	}

	/// All elements as a slice
	pub fn as_slice(&self) -> &[T] {
		self.items.as_slice()
	}

	/// Iterates over the elements
	pub fn iter(&self) -> std::slice::Iter<'_, T> {
		self.items.iter()
	}

	/// Consumes the list and returns its backing storage
	pub fn into_vec(self) -> Vec<T> {
		self.items
	}

	/// Registers a change subscriber; events arrive synchronously, in
	/// registration order, during each mutating call
	pub fn subscribe(&mut self, subscriber: impl FnMut(&ListChange) + 'static) -> SubscriptionId {
		self.observers.subscribe(subscriber)
	}

	/// Removes a change subscriber
	pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
		self.observers.unsubscribe(id)
	}

	/// Replaces the element at `index`
	pub fn set(&mut self, index: usize, item: T) -> Result<(), ValidationError> {
		line::set(self.items.len(), index, 1)?;
		self.items[index] = item;
		self.observers.emit(&ListChange::Replaced {
			index,
			count: 1,
		});
		Ok(())
	}

	/// Replaces `items.len()` elements in place starting at `index`
	pub fn set_range(&mut self, index: usize, items: Vec<T>) -> Result<(), ValidationError> {
		line::set(self.items.len(), index, items.len())?;
		let count = items.len();
		if count == 0 {
			return Ok(());
		}
		for (offset, item) in items.into_iter().enumerate() {
			self.items[index + offset] = item;
		}
		self.observers.emit(&ListChange::Replaced {
			index,
			count,
		});
		Ok(())
	}

	/// [`CapacityList::set_range`] over a decoded batch; fails with
	/// [`ValidationError::MissingItem`] before anything is written
	pub fn set_range_decoded(
		&mut self,
		index: usize,
		items: Vec<Option<T>>,
	) -> Result<(), ValidationError> {
		let items = validate::collect_present("items", items)?;
		self.set_range(index, items)
	}

	/// Appends one element at the tail
	pub fn push(&mut self, item: T) -> Result<(), ValidationError> {
		let index = self.items.len();
		self.insert_range(index, vec![item])
	}

	/// Appends a batch of elements at the tail
	pub fn extend_items(&mut self, items: Vec<T>) -> Result<(), ValidationError> {
		let index = self.items.len();
		self.insert_range(index, items)
	}

	/// Inserts one element at `index`
	pub fn insert(&mut self, index: usize, item: T) -> Result<(), ValidationError> {
		self.insert_range(index, vec![item])
	}

	/// Inserts a batch of elements at `index`
	pub fn insert_range(&mut self, index: usize, items: Vec<T>) -> Result<(), ValidationError> {
		line::insert(self.policy, self.items.len(), index, items.len())?;
		let count = items.len();
		if count == 0 {
			return Ok(());
		}
		let old_len = self.items.len();
		self.items.splice(index..index, items);
		self.observers.emit(&ListChange::Inserted {
			index,
			count,
		});
		self.emit_length(old_len);
		Ok(())
	}

	/// Writes a batch starting at `index`: elements within the current
	/// length are replaced, elements beyond it are appended
	pub fn overwrite(&mut self, index: usize, items: Vec<T>) -> Result<(), ValidationError> {
		line::overwrite(self.policy, self.items.len(), index, items.len())?;
		if items.is_empty() {
			return Ok(());
		}
		let old_len = self.items.len();
		let replaced = old_len.saturating_sub(index).min(items.len());
		let appended = items.len() - replaced;
		for (offset, item) in items.into_iter().enumerate() {
			if offset < replaced {
				self.items[index + offset] = item;
			} else {
				self.items.push(item);
			}
		}
		if replaced > 0 {
			self.observers.emit(&ListChange::Replaced {
				index,
				count: replaced,
			});
		}
		if appended > 0 {
			self.observers.emit(&ListChange::Inserted {
				index: old_len,
				count: appended,
			});
		}
		self.emit_length(old_len);
		Ok(())
	}

	/// Removes and returns the element at `index`
	pub fn remove_at(&mut self, index: usize) -> Result<T, ValidationError> {
		line::remove(self.policy, self.items.len(), index, 1)?;
		let old_len = self.items.len();
		let item = self.items.remove(index);
		self.observers.emit(&ListChange::Removed {
			index,
			count: 1,
		});
		self.emit_length(old_len);
		Ok(item)
	}

	/// Removes `count` elements starting at `index`
	pub fn remove_range(&mut self, index: usize, count: usize) -> Result<(), ValidationError> {
		line::remove(self.policy, self.items.len(), index, count)?;
		if count == 0 {
			return Ok(());
		}
		let old_len = self.items.len();
		self.items.drain(index..index + count);
		self.observers.emit(&ListChange::Removed {
			index,
			count,
		});
		self.emit_length(old_len);
		Ok(())
	}

	/// Removes the first element equal to `item`.
	///
	/// Returns `Ok(false)` when no element matches; fails without removing
	/// when removal would violate the minimum capacity.
	pub fn remove_item(&mut self, item: &T) -> Result<bool, ValidationError>
	where
		T: PartialEq,
	{
		let Some(index) = self.items.iter().position(|stored| stored == item) else {
			return Ok(false);
		};
		self.remove_at(index)?;
		Ok(true)
	}

	/// Moves the element at `old_index` to `new_index`
	pub fn move_item(&mut self, old_index: usize, new_index: usize) -> Result<(), ValidationError> {
		self.move_range(old_index, new_index, 1)
	}

	/// Moves a contiguous block of `count` elements so that it starts at
	/// `new_index`, preserving the block's internal order and the relative
	/// order of all other elements
	pub fn move_range(
		&mut self,
		old_index: usize,
		new_index: usize,
		count: usize,
	) -> Result<(), ValidationError> {
		line::move_range(self.items.len(), old_index, new_index, count)?;
		if count == 0 || old_index == new_index {
			return Ok(());
		}
		if old_index < new_index {
			self.items[old_index..new_index + count].rotate_left(count);
		} else {
			self.items[new_index..old_index + count].rotate_right(count);
		}
		self.observers.emit(&ListChange::Moved {
			from: old_index,
			to: new_index,
			count,
		});
		Ok(())
	}

	/// Grows or shrinks the list to exactly `new_len`.
	///
	/// Growth appends factory-produced items; shrinking truncates from the
	/// tail.
	pub fn adjust_length(&mut self, new_len: usize) -> Result<(), ValidationError> {
		line::adjust_length(self.policy, new_len)?;
		let old_len = self.items.len();
		if new_len == old_len {
			return Ok(());
		}
		if new_len > old_len {
			let factory = Rc::clone(&self.default_item);
			self.items.extend((old_len..new_len).map(|i| factory(i)));
			self.observers.emit(&ListChange::Inserted {
				index: old_len,
				count: new_len - old_len,
			});
		} else {
			self.items.truncate(new_len);
			self.observers.emit(&ListChange::Removed {
				index: new_len,
				count: old_len - new_len,
			});
		}
		self.emit_length(old_len);
		Ok(())
	}

	/// Replaces the entire contents with `items`
	pub fn reset(&mut self, items: Vec<T>) -> Result<(), ValidationError> {
		line::reset(self.policy, items.len())?;
		let old_len = self.items.len();
		self.items = items;
		self.observers.emit(&ListChange::Reset {
			old_len,
			new_len: self.items.len(),
		});
		self.emit_length(old_len);
		Ok(())
	}

	/// [`CapacityList::reset`] over a decoded batch; fails with
	/// [`ValidationError::MissingItem`] before anything is replaced
	pub fn reset_decoded(&mut self, items: Vec<Option<T>>) -> Result<(), ValidationError> {
		let items = validate::collect_present("items", items)?;
		self.reset(items)
	}

	/// Resets the list to its minimum length, filled with factory-produced
	/// items
	pub fn clear(&mut self) {
		let old_len = self.items.len();
		let factory = Rc::clone(&self.default_item);
		self.items = (0..self.policy.min_capacity()).map(|i| factory(i)).collect();
		self.observers.emit(&ListChange::Reset {
			old_len,
			new_len: self.items.len(),
		});
		self.emit_length(old_len);
	}

	fn emit_length(&mut self, old_len: usize) {
		let new_len = self.items.len();
		if new_len != old_len {
			self.observers.emit(&ListChange::LengthChanged {
				old: old_len,
				new: new_len,
			});
		}
	}
}

impl<T: fmt::Debug> fmt::Debug for CapacityList<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CapacityList")
			.field("items", &self.items)
			.field("policy", &self.policy)
			.field("observers", &self.observers)
			.finish()
	}
}

/// Clones items, policy, and the default-item factory. Subscriptions are
/// per-instance and do not carry over to the clone.
impl<T: Clone> Clone for CapacityList<T> {
	fn clone(&self) -> Self {
		Self {
			items: self.items.clone(),
			policy: self.policy,
			default_item: Rc::clone(&self.default_item),
			observers: Observers::new(),
		}
	}
}

impl<T: PartialEq> PartialEq for CapacityList<T> {
	fn eq(&self, other: &Self) -> bool {
		self.policy == other.policy && self.items == other.items
	}
}

impl<T: Eq> Eq for CapacityList<T> {}

impl<T> Index<usize> for CapacityList<T> {
	type Output = T;

	fn index(&self, index: usize) -> &Self::Output {
		&self.items[index]
	}
}

impl<T> IndexMut<usize> for CapacityList<T> {
	fn index_mut(&mut self, index: usize) -> &mut Self::Output {
		&mut self.items[index]
	}
}

impl<'a, T> IntoIterator for &'a CapacityList<T> {
	type Item = &'a T;
	type IntoIter = std::slice::Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.iter()
	}
}

impl<T> IntoIterator for CapacityList<T> {
	type Item = T;
	type IntoIter = std::vec::IntoIter<T>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.into_iter()
	}
}

#[cfg(test)]
mod tests;
