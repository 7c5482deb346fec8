//! Two-dimensional validation rules.
//!
//! Rules here compose the [`line`](super::line) rules per axis and add the
//! shape constraints specific to tables:
//!
//! - every supplied row must match the current column count (and every
//!   supplied column the current row count) exactly;
//! - a batch applied to an empty table establishes the cross-axis size
//!   instead, and that size must satisfy the cross-axis policy;
//! - an empty table is always `0×0`; one axis can never be zero while the
//!   other is not.
//!
//! Batches are validated as a unit before any storage is touched, which is
//! what gives table mutations their all-or-nothing behavior.

use super::super::capacity::{CapacityPolicy, TableCapacity};
use super::super::error::ValidationError;
use super::line;

/// Validates addressing a single cell.
pub fn cell(
	rows: usize,
	columns: usize,
	row: usize,
	column: usize,
) -> Result<(), ValidationError> {
	if row >= rows {
		return Err(ValidationError::out_of_range("row", row, 0, rows.saturating_sub(1)));
	}
	if column >= columns {
		return Err(ValidationError::out_of_range("column", column, 0, columns.saturating_sub(1)));
	}
	Ok(())
}

/// Validates addressing a single row.
pub fn row(rows: usize, row: usize) -> Result<(), ValidationError> {
	if row >= rows {
		return Err(ValidationError::out_of_range("row", row, 0, rows.saturating_sub(1)));
	}
	Ok(())
}

/// Validates addressing a single column.
pub fn column(columns: usize, column: usize) -> Result<(), ValidationError> {
	if column >= columns {
		return Err(ValidationError::out_of_range("column", column, 0, columns.saturating_sub(1)));
	}
	Ok(())
}

/// Checks that every entry of `batch` has exactly `expected` elements.
fn batch_shape<T>(
	param: &'static str,
	expected: usize,
	batch: &[Vec<T>],
) -> Result<(), ValidationError> {
	for (index, entry) in batch.iter().enumerate() {
		if entry.len() != expected {
			return Err(ValidationError::shape_mismatch(param, index, expected, entry.len()));
		}
	}
	Ok(())
}

/// Checks the in-axis count a batch establishes on an empty table against
/// that axis's own policy.
///
/// Incremental growth on a non-empty table only needs the maximum bound,
/// but a batch that takes the table from `0×0` to its first non-empty shape
/// must land within the full interval, minimum included.
fn established_count(
	param: &'static str,
	policy: CapacityPolicy,
	count: usize,
) -> Result<(), ValidationError> {
	if count > 0 && !policy.allows(count) {
		return Err(ValidationError::capacity_violation(
			param,
			count,
			policy.min_capacity(),
			policy.max_capacity(),
		));
	}
	Ok(())
}

/// Validates a batch applied to an empty table, whose first entry
/// establishes the cross-axis size.
///
/// The established size must be non-zero (an empty table is `0×0`, never
/// `n×0`) and satisfy `cross_policy`.
fn establish_cross_axis<T>(
	param: &'static str,
	cross_policy: CapacityPolicy,
	batch: &[Vec<T>],
) -> Result<(), ValidationError> {
	let Some(first) = batch.first() else {
		return Ok(());
	};
	let established = first.len();
	batch_shape(param, established, batch)?;
	if established == 0 {
		return Err(ValidationError::capacity_violation(
			param,
			0,
			cross_policy.min_capacity().max(1),
			cross_policy.max_capacity(),
		));
	}
	if !cross_policy.allows(established) {
		return Err(ValidationError::capacity_violation(
			param,
			established,
			cross_policy.min_capacity(),
			cross_policy.max_capacity(),
		));
	}
	Ok(())
}

/// Validates replacing `batch.len()` rows in place starting at row `index`.
pub fn set_rows<T>(
	rows: usize,
	columns: usize,
	index: usize,
	batch: &[Vec<T>],
) -> Result<(), ValidationError> {
	line::set(rows, index, batch.len())?;
	batch_shape("rows", columns, batch)
}

/// Validates inserting `batch` at row `index`.
pub fn insert_rows<T>(
	capacity: &TableCapacity,
	rows: usize,
	columns: usize,
	index: usize,
	batch: &[Vec<T>],
) -> Result<(), ValidationError> {
	line::insert(capacity.row, rows, index, batch.len())?;
	if rows == 0 {
		establish_cross_axis("rows", capacity.column, batch)
	} else {
		batch_shape("rows", columns, batch)
	}
}

/// Validates overwriting rows starting at row `index` (replace within the
/// current row count, append beyond it).
pub fn overwrite_rows<T>(
	capacity: &TableCapacity,
	rows: usize,
	columns: usize,
	index: usize,
	batch: &[Vec<T>],
) -> Result<(), ValidationError> {
	line::overwrite(capacity.row, rows, index, batch.len())?;
	if rows == 0 {
		establish_cross_axis("rows", capacity.column, batch)
	} else {
		batch_shape("rows", columns, batch)
	}
}

/// Validates removing `count` rows starting at row `index`.
pub fn remove_rows(
	capacity: &TableCapacity,
	rows: usize,
	index: usize,
	count: usize,
) -> Result<(), ValidationError> {
	line::remove(capacity.row, rows, index, count)
}

/// Validates moving `count` rows from `old_index` to `new_index`.
pub fn move_rows(
	rows: usize,
	old_index: usize,
	new_index: usize,
	count: usize,
) -> Result<(), ValidationError> {
	line::move_range(rows, old_index, new_index, count)
}

/// Validates replacing `batch.len()` columns in place starting at column
/// `index`. Each batch entry is one column, top to bottom.
pub fn set_columns<T>(
	rows: usize,
	columns: usize,
	index: usize,
	batch: &[Vec<T>],
) -> Result<(), ValidationError> {
	line::set(columns, index, batch.len())?;
	batch_shape("columns", rows, batch)
}

/// Validates inserting `batch` at column `index`.
///
/// Inserting into an empty table establishes the row count from the first
/// supplied column.
pub fn insert_columns<T>(
	capacity: &TableCapacity,
	rows: usize,
	columns: usize,
	index: usize,
	batch: &[Vec<T>],
) -> Result<(), ValidationError> {
	line::insert(capacity.column, columns, index, batch.len())?;
	if columns == 0 {
		establish_cross_axis("columns", capacity.row, batch)?;
		established_count("column_count", capacity.column, batch.len())
	} else {
		batch_shape("columns", rows, batch)
	}
}

/// Validates overwriting columns starting at column `index`.
pub fn overwrite_columns<T>(
	capacity: &TableCapacity,
	rows: usize,
	columns: usize,
	index: usize,
	batch: &[Vec<T>],
) -> Result<(), ValidationError> {
	line::overwrite(capacity.column, columns, index, batch.len())?;
	if columns == 0 {
		establish_cross_axis("columns", capacity.row, batch)?;
		established_count("column_count", capacity.column, batch.len())
	} else {
		batch_shape("columns", rows, batch)
	}
}

/// Validates removing `count` columns starting at column `index`.
///
/// Removing every column while rows remain would leave an `n×0` shape,
/// which is forbidden; emptying a table goes through row removal or
/// [`adjust_lengths`].
pub fn remove_columns(
	capacity: &TableCapacity,
	rows: usize,
	columns: usize,
	index: usize,
	count: usize,
) -> Result<(), ValidationError> {
	line::remove(capacity.column, columns, index, count)?;
	if count == columns && rows > 0 {
		return Err(ValidationError::capacity_violation(
			"column_count",
			0,
			capacity.column.min_capacity().max(1),
			capacity.column.max_capacity(),
		));
	}
	Ok(())
}

/// Validates moving `count` columns from `old_index` to `new_index`.
pub fn move_columns(
	columns: usize,
	old_index: usize,
	new_index: usize,
	count: usize,
) -> Result<(), ValidationError> {
	line::move_range(columns, old_index, new_index, count)
}

/// Validates resizing the table to `new_rows × new_columns` in one step.
///
/// Beyond per-axis bounds, the axes are coupled: one may be zero only if
/// both are. Column bounds apply only to non-empty shapes.
pub fn adjust_lengths(
	capacity: &TableCapacity,
	new_rows: usize,
	new_columns: usize,
) -> Result<(), ValidationError> {
	if new_rows == 0 && new_columns != 0 {
		return Err(ValidationError::capacity_violation("column_count", new_columns, 0, 0));
	}
	if new_columns == 0 && new_rows != 0 {
		return Err(ValidationError::capacity_violation("row_count", new_rows, 0, 0));
	}
	if !capacity.row.allows(new_rows) {
		return Err(ValidationError::capacity_violation(
			"row_count",
			new_rows,
			capacity.row.min_capacity(),
			capacity.row.max_capacity(),
		));
	}
	if new_rows > 0 && !capacity.column.allows(new_columns) {
		return Err(ValidationError::capacity_violation(
			"column_count",
			new_columns,
			capacity.column.min_capacity(),
			capacity.column.max_capacity(),
		));
	}
	Ok(())
}

/// Validates replacing the entire contents with `batch`.
///
/// An empty batch produces the `0×0` shape (the row policy must allow it);
/// otherwise the first row establishes the width.
pub fn reset<T>(capacity: &TableCapacity, batch: &[Vec<T>]) -> Result<(), ValidationError> {
	line::reset(capacity.row, batch.len())?;
	establish_cross_axis("rows", capacity.column, batch)
}
