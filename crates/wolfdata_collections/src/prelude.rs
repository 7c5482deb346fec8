//! Prelude module for `wolfdata_collections`.
//!
//! This module provides a convenient way to import commonly used types in one line.
//!
//! # Examples
//!
//! ```
//! use wolfdata_collections::prelude::*;
//!
//! let commands: CapacityList<u8> = CapacityList::new(CapacityPolicy::Unbounded, |_| 0);
//! assert!(commands.is_empty());
//! ```

// Collection types
#[doc(inline)]
pub use crate::collection::{
	// Policies
	CapacityPolicy,
	TableCapacity,

	// Lists
	CapacityList,
	Table,

	// Notifications
	ListChange,
	Observers,
	SubscriptionId,
	TableChange,

	// Errors
	ValidationError,
};

// Re-export the collection module for advanced usage
#[doc(inline)]
pub use crate::collection;
