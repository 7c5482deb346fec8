//! Error types for collection validation.

use thiserror::Error;

/// Errors raised when a requested collection operation violates the
/// collection's contract.
///
/// Every variant carries the offending parameter's name, its value, and the
/// bound it violated, so the message alone is enough to diagnose the call
/// site. All errors are raised before any mutation takes place; a failed
/// operation leaves the collection exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
	/// An index, count, or length argument falls outside the currently valid
	/// interval given the collection's size
	#[error("{param} out of range: got {value}, valid interval is {min}..={max}")]
	OutOfRange {
		/// Name of the offending parameter
		param: &'static str,
		/// Value that was passed
		value: usize,
		/// Smallest accepted value
		min: usize,
		/// Largest accepted value
		max: usize,
	},

	/// A decoded item batch contains no value where one is required
	#[error("{param} has no value at index {index}")]
	MissingItem {
		/// Name of the offending parameter
		param: &'static str,
		/// Index of the first absent element
		index: usize,
	},

	/// The requested resulting size falls outside the capacity bounds
	#[error("{param} would violate capacity: resulting size {value}, allowed interval is {min}..={max}")]
	CapacityViolation {
		/// Name of the offending parameter
		param: &'static str,
		/// Resulting size the request would produce
		value: usize,
		/// Smallest allowed size
		min: usize,
		/// Largest allowed size
		max: usize,
	},

	/// A supplied row or column batch disagrees with the table's uniform shape
	#[error("{param}[{index}] has length {actual}, expected {expected}")]
	ShapeMismatch {
		/// Name of the offending parameter
		param: &'static str,
		/// Position of the offending entry within the batch
		index: usize,
		/// Length required by the table's current shape
		expected: usize,
		/// Length that was actually supplied
		actual: usize,
	},
}

impl ValidationError {
	/// Creates an [`ValidationError::OutOfRange`] error
	pub fn out_of_range(param: &'static str, value: usize, min: usize, max: usize) -> Self {
		Self::OutOfRange {
			param,
			value,
			min,
			max,
		}
	}

	/// Creates a [`ValidationError::MissingItem`] error
	pub fn missing_item(param: &'static str, index: usize) -> Self {
		Self::MissingItem {
			param,
			index,
		}
	}

	/// Creates a [`ValidationError::CapacityViolation`] error
	pub fn capacity_violation(param: &'static str, value: usize, min: usize, max: usize) -> Self {
		Self::CapacityViolation {
			param,
			value,
			min,
			max,
		}
	}

	/// Creates a [`ValidationError::ShapeMismatch`] error
	pub fn shape_mismatch(
		param: &'static str,
		index: usize,
		expected: usize,
		actual: usize,
	) -> Self {
		Self::ShapeMismatch {
			param,
			index,
			expected,
			actual,
		}
	}

	/// Returns the name of the parameter that caused the error
	pub const fn param(&self) -> &'static str {
		match self {
			Self::OutOfRange { param, .. }
			| Self::MissingItem { param, .. }
			| Self::CapacityViolation { param, .. }
			| Self::ShapeMismatch { param, .. } => param,
		}
	}
}
