//! This crate provides the capacity-bounded collection framework for the `wolfdata-rs` project.
//!
//! Wolf RPG Editor project data is built almost entirely out of lists with hard
//! capacity rules: a map layer is a fixed-size grid of tile chips, a database
//! type holds between one and ten thousand rows, an event page carries at most
//! ten move-route commands, and so on. Rather than re-checking those rules in
//! every domain type, this crate centralizes them:
//!
//! - [`CapacityPolicy`] describes what lengths a collection may take
//!   (fixed, bounded, or unbounded).
//! - [`CapacityList`] is a one-dimensional list that validates every mutation
//!   against its policy before touching storage.
//! - [`Table`] is the two-dimensional counterpart with independent row and
//!   column policies and a uniform-width guarantee.
//! - [`collection::validate`] holds the pure validation rules shared by both,
//!   so boundary conditions can be tested without a live collection.
//! - Every successful mutation is reported to subscribed observers as a
//!   [`ListChange`] or [`TableChange`], synchronously and in registration
//!   order, so editor panes and file writers can stay consistent without
//!   polling.
//!
//! # Examples
//!
//! A database-column style list bounded to `1..=100` entries:
//!
//! ```
//! use wolfdata_collections::prelude::*;
//!
//! # fn main() -> Result<(), ValidationError> {
//! let policy = CapacityPolicy::bounded(1, 100)?;
//! let mut names = CapacityList::with_items(
//!     policy,
//!     vec!["Hero".to_string(), "Slime".to_string()],
//!     |_| String::new(),
//! )?;
//!
//! names.push("Boss".to_string())?;
//! assert_eq!(names.len(), 3);
//!
//! // Emptying the list would violate the lower bound.
//! assert!(names.remove_range(0, 3).is_err());
//! assert_eq!(names.len(), 3);
//! # Ok(())
//! # }
//! ```
//!
//! A map-layer style table, 20 columns wide and 15 rows tall, fixed:
//!
//! ```
//! use wolfdata_collections::prelude::*;
//!
//! # fn main() -> Result<(), ValidationError> {
//! let capacity = TableCapacity::new(CapacityPolicy::fixed(15), CapacityPolicy::fixed(20));
//! let mut layer = Table::new(capacity, |_, _| 0u32)?;
//!
//! assert_eq!(layer.row_count(), 15);
//! assert_eq!(layer.column_count(), 20);
//! layer.set_cell(0, 0, 42)?;
//!
//! // Fixed on both axes, so structural changes are rejected.
//! assert!(layer.remove_row(0).is_err());
//! # Ok(())
//! # }
//! ```

pub mod collection;

/// `use wolfdata_collections::prelude::*;` to import commonly used items.
pub mod prelude;

pub use collection::{
	CapacityList, CapacityPolicy, ListChange, Observers, SubscriptionId, Table, TableCapacity,
	TableChange, ValidationError,
};
