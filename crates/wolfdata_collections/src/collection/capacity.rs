//! Capacity policies for bounded collections.
//!
//! A policy is decided once, when a collection is created, and never changes
//! afterwards. The editor's data model leans on three shapes: hard-sized
//! collections like map layers (`Fixed`), collections with editor-enforced
//! limits like database rows (`Bounded`), and free-form ones like event
//! command scripts (`Unbounded`).

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::ValidationError;

/// Describes which lengths a one-dimensional collection may take.
///
/// # Examples
///
/// ```
/// use wolfdata_collections::CapacityPolicy;
///
/// let rows = CapacityPolicy::bounded(1, 10000).unwrap();
/// assert_eq!(rows.min_capacity(), 1);
/// assert_eq!(rows.max_capacity(), 10000);
/// assert!(rows.allows(500));
/// assert!(!rows.allows(0));
///
/// let chips = CapacityPolicy::fixed(300);
/// assert!(chips.is_fixed());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CapacityPolicy {
	/// The length never changes after construction
	Fixed(usize),
	/// The length stays within `min..=max`
	Bounded {
		/// Smallest allowed length
		min: usize,
		/// Largest allowed length
		max: usize,
	},
	/// Any length is allowed
	Unbounded,
}

impl CapacityPolicy {
	/// Creates a bounded policy, rejecting `min > max`
	pub fn bounded(min: usize, max: usize) -> Result<Self, ValidationError> {
		if min > max {
			return Err(ValidationError::capacity_violation("min", min, 0, max));
		}
		Ok(Self::Bounded {
			min,
			max,
		})
	}

	/// Creates a fixed-length policy
	pub const fn fixed(len: usize) -> Self {
		Self::Fixed(len)
	}

	/// Smallest length this policy allows
	pub const fn min_capacity(&self) -> usize {
		match self {
			Self::Fixed(n) => *n,
			Self::Bounded { min, .. } => *min,
			Self::Unbounded => 0,
		}
	}

	/// Largest length this policy allows (`usize::MAX` for [`CapacityPolicy::Unbounded`])
	pub const fn max_capacity(&self) -> usize {
		match self {
			Self::Fixed(n) => *n,
			Self::Bounded { max, .. } => *max,
			Self::Unbounded => usize::MAX,
		}
	}

	/// Whether the length is pinned to a single value
	pub const fn is_fixed(&self) -> bool {
		matches!(self, Self::Fixed(_))
	}

	/// Whether `len` satisfies this policy
	pub const fn allows(&self, len: usize) -> bool {
		self.min_capacity() <= len && len <= self.max_capacity()
	}
}

impl fmt::Display for CapacityPolicy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Fixed(n) => write!(f, "fixed({n})"),
			Self::Bounded { min, max } => write!(f, "bounded({min}..={max})"),
			Self::Unbounded => write!(f, "unbounded"),
		}
	}
}

/// Per-axis capacity for a two-dimensional collection.
///
/// # Examples
///
/// ```
/// use wolfdata_collections::{CapacityPolicy, TableCapacity};
///
/// let map = TableCapacity::new(
///     CapacityPolicy::bounded(20, 9999).unwrap(),
///     CapacityPolicy::bounded(20, 9999).unwrap(),
/// );
/// assert_eq!(map.row.min_capacity(), 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableCapacity {
	/// Policy for the number of rows
	pub row: CapacityPolicy,
	/// Policy for the number of columns
	pub column: CapacityPolicy,
}

impl TableCapacity {
	/// Creates a per-axis capacity from two policies
	pub const fn new(row: CapacityPolicy, column: CapacityPolicy) -> Self {
		Self {
			row,
			column,
		}
	}
}

impl fmt::Display for TableCapacity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "rows {}, columns {}", self.row, self.column)
	}
}
