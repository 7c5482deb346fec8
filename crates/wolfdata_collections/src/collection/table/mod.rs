//! Two-dimensional capacity-bounded list.
//!
//! [`Table`] stores its cells row-major in one contiguous `Vec<T>` and keeps
//! two invariants at every externally observable moment:
//!
//! - every row has the same column count (shape uniformity);
//! - the shape satisfies the per-axis [`TableCapacity`], and one axis is
//!   zero only when both are: the empty table is exactly `0×0`.
//!
//! Batch mutations (row batches, column batches, two-axis resizes) are
//! validated as a unit before any cell is touched, so a rejected batch
//! leaves the table bit-identical to before the call. Column operations are
//! the transposed analogs of the row operations: a column batch entry lists
//! the cells of one column, top to bottom.
//!
//! # Examples
//!
//! ```
//! use wolfdata_collections::prelude::*;
//!
//! # fn main() -> Result<(), ValidationError> {
//! let capacity = TableCapacity::new(
//!     CapacityPolicy::bounded(1, 9999)?,
//!     CapacityPolicy::bounded(1, 9999)?,
//! );
//! let mut chips = Table::with_rows(
//!     capacity,
//!     vec![vec![0u16; 4]; 3], // 3 rows × 4 columns
//!     |_, _| 0,
//! )?;
//!
//! chips.insert_row(1, vec![7, 7, 7, 7])?;
//! assert_eq!(chips.row_count(), 4);
//!
//! // A row of the wrong width is rejected atomically
//! assert!(chips.insert_row(0, vec![1, 2]).is_err());
//! assert_eq!(chips.row_count(), 4);
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::ops::{Index, IndexMut};
use std::rc::Rc;

use super::capacity::TableCapacity;
use super::error::ValidationError;
use super::notify::{Observers, SubscriptionId, TableChange};
use super::validate::table as validate;

/// Factory producing the cell stored at `(row, column)` when the table grows.
pub type DefaultCell<T> = Rc<dyn Fn(usize, usize) -> T>;

/// A row-major table whose shape is governed by a [`TableCapacity`].
pub struct Table<T> {
	cells: Vec<T>,
	rows: usize,
	columns: usize,
	capacity: TableCapacity,
	default_cell: DefaultCell<T>,
	observers: Observers<TableChange>,
}

impl<T> Table<T> {
	/// Creates a table at the capacity's minimum shape, filled with
	/// factory-produced cells.
	///
	/// The minimum shape is `row_min × max(column_min, 1)` (a non-empty
	/// table always has at least one column), or `0×0` when the row policy's
	/// minimum is zero. Fails when the column policy cannot accommodate that
	/// shape, which only happens for degenerate policies such as a zero
	/// column maximum combined with a non-zero row minimum.
	pub fn new(
		capacity: TableCapacity,
		default_cell: impl Fn(usize, usize) -> T + 'static,
	) -> Result<Self, ValidationError> {
		let rows = capacity.row.min_capacity();
		let columns = if rows == 0 { 0 } else { capacity.column.min_capacity().max(1) };
		validate::adjust_lengths(&capacity, rows, columns)?;

		let default_cell: DefaultCell<T> = Rc::new(default_cell);
		let mut cells = Vec::with_capacity(rows * columns);
		for row in 0..rows {
			cells.extend((0..columns).map(|column| default_cell(row, column)));
		}
		Ok(Self {
			cells,
			rows,
			columns,
			capacity,
			default_cell,
			observers: Observers::new(),
		})
	}

	/// Creates a table from a batch of rows, failing if the batch violates
	/// the capacity or is not uniform in width.
	pub fn with_rows(
		capacity: TableCapacity,
		rows: Vec<Vec<T>>,
		default_cell: impl Fn(usize, usize) -> T + 'static,
	) -> Result<Self, ValidationError> {
		validate::reset(&capacity, &rows)?;
		let row_count = rows.len();
		let column_count = rows.first().map_or(0, Vec::len);
		Ok(Self {
			cells: rows.into_iter().flatten().collect(),
			rows: row_count,
			columns: column_count,
			capacity,
			default_cell: Rc::new(default_cell),
			observers: Observers::new(),
		})
	}

	/// Number of rows
	pub const fn row_count(&self) -> usize {
		self.rows
	}

	/// Number of columns
	pub const fn column_count(&self) -> usize {
		self.columns
	}

	/// Total number of cells (`rows × columns`)
	pub fn cell_count(&self) -> usize {
		self.cells.len()
	}

	/// Whether the table is the empty `0×0` shape
	pub const fn is_empty(&self) -> bool {
		self.rows == 0
	}

	/// The per-axis capacity this table was created with
	pub const fn capacity(&self) -> TableCapacity {
		self.capacity
	}

	/// Returns a reference to the cell at `(row, column)`, if it exists
	pub fn get(&self, row: usize, column: usize) -> Option<&T> {
		if row < self.rows && column < self.columns {
			Some(&self.cells[row * self.columns + column])
		} else {
			None
		}
	}

	/// Returns a mutable reference to the cell at `(row, column)`, if it
	/// exists.
	///
	/// Writing through it bypasses change notification; use
	/// [`Table::set_cell`] when observers must see the replacement.
	pub fn get_mut(&mut self, row: usize, column: usize) -> Option<&mut T> {
		if row < self.rows && column < self.columns {
			Some(&mut self.cells[row * self.columns + column])
		} else {
			None
		}
	}

	/// Returns the cells of row `row` as a slice
	pub fn row(&self, row: usize) -> Result<&[T], ValidationError> {
		validate::row(self.rows, row)?;
		Ok(&self.cells[row * self.columns..(row + 1) * self.columns])
	}

	/// Returns `count` consecutive rows starting at `index`
	pub fn row_range(
		&self,
		index: usize,
		count: usize,
	) -> Result<impl Iterator<Item = &[T]>, ValidationError> {
		super::validate::line::get(self.rows, index, count)?;
		let width = self.columns.max(1);
		Ok(self.cells[index * self.columns..(index + count) * self.columns].chunks_exact(width))
	}

	/// Returns the cells of column `column`, top to bottom
	pub fn column(&self, column: usize) -> Result<impl Iterator<Item = &T>, ValidationError> {
		validate::column(self.columns, column)?;
		Ok(self.cells[column..].iter().step_by(self.columns))
	}

	/// Iterates over the rows as slices
	pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
		self.cells.chunks_exact(self.columns.max(1))
	}

	/// Copies the table out into per-row vectors
	pub fn to_rows(&self) -> Vec<Vec<T>>
	where
		T: Clone,
	{
		self.iter_rows().map(<[T]>::to_vec).collect()
	}

	/// Registers a change subscriber; events arrive synchronously, in
	/// registration order, during each mutating call
	pub fn subscribe(&mut self, subscriber: impl FnMut(&TableChange) + 'static) -> SubscriptionId {
		self.observers.subscribe(subscriber)
	}

	/// Removes a change subscriber
	pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
		self.observers.unsubscribe(id)
	}

	/// Replaces the cell at `(row, column)`
	pub fn set_cell(&mut self, row: usize, column: usize, item: T) -> Result<(), ValidationError> {
		validate::cell(self.rows, self.columns, row, column)?;
		self.cells[row * self.columns + column] = item;
		self.observers.emit(&TableChange::CellReplaced {
			row,
			column,
		});
		Ok(())
	}

	/// Replaces row `row` in place
	pub fn set_row(&mut self, row: usize, items: Vec<T>) -> Result<(), ValidationError> {
		self.set_rows(row, vec![items])
	}

	/// Replaces `batch.len()` rows in place starting at row `index`
	pub fn set_rows(&mut self, index: usize, batch: Vec<Vec<T>>) -> Result<(), ValidationError> {
		validate::set_rows(self.rows, self.columns, index, &batch)?;
		let count = batch.len();
		if count == 0 {
			return Ok(());
		}
		for (offset, row) in batch.into_iter().enumerate() {
			let start = (index + offset) * self.columns;
			for (column, item) in row.into_iter().enumerate() {
				self.cells[start + column] = item;
			}
		}
		self.observers.emit(&TableChange::RowsReplaced {
			index,
			count,
		});
		Ok(())
	}

	/// Inserts one row at row `index`
	pub fn insert_row(&mut self, index: usize, items: Vec<T>) -> Result<(), ValidationError> {
		self.insert_rows(index, vec![items])
	}

	/// Inserts a batch of rows at row `index`.
	///
	/// Inserting into an empty table establishes the column count from the
	/// first supplied row.
	pub fn insert_rows(&mut self, index: usize, batch: Vec<Vec<T>>) -> Result<(), ValidationError> {
		validate::insert_rows(&self.capacity, self.rows, self.columns, index, &batch)?;
		if batch.is_empty() {
			return Ok(());
		}
		let old = self.shape();
		if self.rows == 0 {
			self.columns = batch[0].len();
		}
		let count = batch.len();
		let at = index * self.columns;
		self.cells.splice(at..at, batch.into_iter().flatten());
		self.rows += count;
		self.observers.emit(&TableChange::RowsInserted {
			index,
			count,
		});
		self.emit_size(old);
		Ok(())
	}

	/// Writes a batch of rows starting at row `index`: rows within the
	/// current row count are replaced, rows beyond it are appended
	pub fn overwrite_rows(
		&mut self,
		index: usize,
		batch: Vec<Vec<T>>,
	) -> Result<(), ValidationError> {
		validate::overwrite_rows(&self.capacity, self.rows, self.columns, index, &batch)?;
		if batch.is_empty() {
			return Ok(());
		}
		let old = self.shape();
		if self.rows == 0 {
			self.columns = batch[0].len();
		}
		let replaced = self.rows.saturating_sub(index).min(batch.len());
		let appended = batch.len() - replaced;
		for (offset, row) in batch.into_iter().enumerate() {
			if offset < replaced {
				let start = (index + offset) * self.columns;
				for (column, item) in row.into_iter().enumerate() {
					self.cells[start + column] = item;
				}
			} else {
				self.cells.extend(row);
			}
		}
		self.rows += appended;
		if replaced > 0 {
			self.observers.emit(&TableChange::RowsReplaced {
				index,
				count: replaced,
			});
		}
		if appended > 0 {
			self.observers.emit(&TableChange::RowsInserted {
				index: old.0,
				count: appended,
			});
		}
		self.emit_size(old);
		Ok(())
	}

	/// Removes row `index`
	pub fn remove_row(&mut self, index: usize) -> Result<(), ValidationError> {
		self.remove_rows(index, 1)
	}

	/// Removes `count` rows starting at row `index`.
	///
	/// Removing the last row collapses the table to `0×0`.
	pub fn remove_rows(&mut self, index: usize, count: usize) -> Result<(), ValidationError> {
		validate::remove_rows(&self.capacity, self.rows, index, count)?;
		if count == 0 {
			return Ok(());
		}
		let old = self.shape();
		self.cells.drain(index * self.columns..(index + count) * self.columns);
		self.rows -= count;
		if self.rows == 0 {
			self.columns = 0;
		}
		self.observers.emit(&TableChange::RowsRemoved {
			index,
			count,
		});
		self.emit_size(old);
		Ok(())
	}

	/// Moves row `old_index` to `new_index`
	pub fn move_row(&mut self, old_index: usize, new_index: usize) -> Result<(), ValidationError> {
		self.move_rows(old_index, new_index, 1)
	}

	/// Moves a contiguous block of `count` rows so that it starts at
	/// `new_index`, preserving the block's internal order and the relative
	/// order of all other rows
	pub fn move_rows(
		&mut self,
		old_index: usize,
		new_index: usize,
		count: usize,
	) -> Result<(), ValidationError> {
		validate::move_rows(self.rows, old_index, new_index, count)?;
		if count == 0 || old_index == new_index {
			return Ok(());
		}
		let width = self.columns;
		if old_index < new_index {
			self.cells[old_index * width..(new_index + count) * width].rotate_left(count * width);
		} else {
			self.cells[new_index * width..(old_index + count) * width].rotate_right(count * width);
		}
		self.observers.emit(&TableChange::RowsMoved {
			from: old_index,
			to: new_index,
			count,
		});
		Ok(())
	}

	/// Replaces column `column` in place, top to bottom
	pub fn set_column(&mut self, column: usize, items: Vec<T>) -> Result<(), ValidationError> {
		self.set_columns(column, vec![items])
	}

	/// Replaces `batch.len()` columns in place starting at column `index`
	pub fn set_columns(&mut self, index: usize, batch: Vec<Vec<T>>) -> Result<(), ValidationError> {
		validate::set_columns(self.rows, self.columns, index, &batch)?;
		let count = batch.len();
		if count == 0 {
			return Ok(());
		}
		for (offset, column) in batch.into_iter().enumerate() {
			for (row, item) in column.into_iter().enumerate() {
				self.cells[row * self.columns + index + offset] = item;
			}
		}
		self.observers.emit(&TableChange::ColumnsReplaced {
			index,
			count,
		});
		Ok(())
	}

	/// Inserts one column at column `index`
	pub fn insert_column(&mut self, index: usize, items: Vec<T>) -> Result<(), ValidationError> {
		self.insert_columns(index, vec![items])
	}

	/// Inserts a batch of columns at column `index`.
	///
	/// Inserting into an empty table establishes the row count from the
	/// first supplied column.
	pub fn insert_columns(
		&mut self,
		index: usize,
		batch: Vec<Vec<T>>,
	) -> Result<(), ValidationError> {
		validate::insert_columns(&self.capacity, self.rows, self.columns, index, &batch)?;
		if batch.is_empty() {
			return Ok(());
		}
		let old = self.shape();
		if self.columns == 0 {
			self.rows = batch[0].len();
		}
		let count = batch.len();
		let mut rows = self.take_rows();
		for (row, fragment) in rows.iter_mut().zip(transpose(batch, self.rows)) {
			row.splice(index..index, fragment);
		}
		self.columns += count;
		self.cells = rows.into_iter().flatten().collect();
		self.observers.emit(&TableChange::ColumnsInserted {
			index,
			count,
		});
		self.emit_size(old);
		Ok(())
	}

	/// Writes a batch of columns starting at column `index`: columns within
	/// the current column count are replaced, columns beyond it are appended
	pub fn overwrite_columns(
		&mut self,
		index: usize,
		batch: Vec<Vec<T>>,
	) -> Result<(), ValidationError> {
		validate::overwrite_columns(&self.capacity, self.rows, self.columns, index, &batch)?;
		if batch.is_empty() {
			return Ok(());
		}
		let old = self.shape();
		if self.columns == 0 {
			self.rows = batch[0].len();
		}
		let replaced = self.columns.saturating_sub(index).min(batch.len());
		let appended = batch.len() - replaced;
		let mut rows = self.take_rows();
		for (row, fragment) in rows.iter_mut().zip(transpose(batch, self.rows)) {
			for (offset, item) in fragment.into_iter().enumerate() {
				if offset < replaced {
					row[index + offset] = item;
				} else {
					row.push(item);
				}
			}
		}
		self.columns += appended;
		self.cells = rows.into_iter().flatten().collect();
		if replaced > 0 {
			self.observers.emit(&TableChange::ColumnsReplaced {
				index,
				count: replaced,
			});
		}
		if appended > 0 {
			self.observers.emit(&TableChange::ColumnsInserted {
				index: old.1,
				count: appended,
			});
		}
		self.emit_size(old);
		Ok(())
	}

	/// Removes column `index`
	pub fn remove_column(&mut self, index: usize) -> Result<(), ValidationError> {
		self.remove_columns(index, 1)
	}

	/// Removes `count` columns starting at column `index`.
	///
	/// Removing every column of a non-empty table is rejected; emptying a
	/// table goes through [`Table::remove_rows`], [`Table::adjust_lengths`],
	/// or [`Table::reset`].
	pub fn remove_columns(&mut self, index: usize, count: usize) -> Result<(), ValidationError> {
		validate::remove_columns(&self.capacity, self.rows, self.columns, index, count)?;
		if count == 0 {
			return Ok(());
		}
		let old = self.shape();
		let mut rows = self.take_rows();
		for row in &mut rows {
			row.drain(index..index + count);
		}
		self.columns -= count;
		self.cells = rows.into_iter().flatten().collect();
		self.observers.emit(&TableChange::ColumnsRemoved {
			index,
			count,
		});
		self.emit_size(old);
		Ok(())
	}

	/// Moves column `old_index` to `new_index`
	pub fn move_column(
		&mut self,
		old_index: usize,
		new_index: usize,
	) -> Result<(), ValidationError> {
		self.move_columns(old_index, new_index, 1)
	}

	/// Moves a contiguous block of `count` columns so that it starts at
	/// `new_index`
	pub fn move_columns(
		&mut self,
		old_index: usize,
		new_index: usize,
		count: usize,
	) -> Result<(), ValidationError> {
		validate::move_columns(self.columns, old_index, new_index, count)?;
		if count == 0 || old_index == new_index {
			return Ok(());
		}
		let width = self.columns;
		for row in 0..self.rows {
			let cells = &mut self.cells[row * width..(row + 1) * width];
			if old_index < new_index {
				cells[old_index..new_index + count].rotate_left(count);
			} else {
				cells[new_index..old_index + count].rotate_right(count);
			}
		}
		self.observers.emit(&TableChange::ColumnsMoved {
			from: old_index,
			to: new_index,
			count,
		});
		Ok(())
	}

	/// Grows or shrinks both axes to `new_rows × new_columns` in one step.
	///
	/// Observers see only the final consistent shape: the column events (if
	/// any) are delivered first, then the row events, then `SizeChanged`.
	/// Growth synthesizes cells through the default-cell factory.
	pub fn adjust_lengths(
		&mut self,
		new_rows: usize,
		new_columns: usize,
	) -> Result<(), ValidationError> {
		validate::adjust_lengths(&self.capacity, new_rows, new_columns)?;
		let old = self.shape();
		if (new_rows, new_columns) == old {
			return Ok(());
		}
		let factory = Rc::clone(&self.default_cell);
		let mut rows = self.take_rows();
		for (index, row) in rows.iter_mut().enumerate() {
			if new_columns < row.len() {
				row.truncate(new_columns);
			} else {
				let start = row.len();
				row.extend((start..new_columns).map(|column| factory(index, column)));
			}
		}
		if new_rows < rows.len() {
			rows.truncate(new_rows);
		} else {
			for index in rows.len()..new_rows {
				rows.push((0..new_columns).map(|column| factory(index, column)).collect());
			}
		}
		self.rows = new_rows;
		self.columns = new_columns;
		self.cells = rows.into_iter().flatten().collect();

		if new_columns > old.1 {
			self.observers.emit(&TableChange::ColumnsInserted {
				index: old.1,
				count: new_columns - old.1,
			});
		} else if new_columns < old.1 {
			self.observers.emit(&TableChange::ColumnsRemoved {
				index: new_columns,
				count: old.1 - new_columns,
			});
		}
		if new_rows > old.0 {
			self.observers.emit(&TableChange::RowsInserted {
				index: old.0,
				count: new_rows - old.0,
			});
		} else if new_rows < old.0 {
			self.observers.emit(&TableChange::RowsRemoved {
				index: new_rows,
				count: old.0 - new_rows,
			});
		}
		self.emit_size(old);
		Ok(())
	}

	/// Grows or shrinks the row axis, keeping the current width.
	///
	/// Growing an empty table uses the column policy's minimum width (at
	/// least one column).
	pub fn adjust_row_count(&mut self, new_rows: usize) -> Result<(), ValidationError> {
		let new_columns = if new_rows == 0 {
			0
		} else if self.rows == 0 {
			self.capacity.column.min_capacity().max(1)
		} else {
			self.columns
		};
		self.adjust_lengths(new_rows, new_columns)
	}

	/// Grows or shrinks the column axis, keeping the current row count.
	///
	/// Growing an empty table uses the row policy's minimum height (at
	/// least one row).
	pub fn adjust_column_count(&mut self, new_columns: usize) -> Result<(), ValidationError> {
		let new_rows = if new_columns == 0 {
			0
		} else if self.rows == 0 {
			self.capacity.row.min_capacity().max(1)
		} else {
			self.rows
		};
		self.adjust_lengths(new_rows, new_columns)
	}

	/// Replaces the entire contents with a batch of rows
	pub fn reset(&mut self, batch: Vec<Vec<T>>) -> Result<(), ValidationError> {
		validate::reset(&self.capacity, &batch)?;
		let old = self.shape();
		self.rows = batch.len();
		self.columns = batch.first().map_or(0, Vec::len);
		self.cells = batch.into_iter().flatten().collect();
		self.observers.emit(&TableChange::Reset {
			old_rows: old.0,
			old_columns: old.1,
			new_rows: self.rows,
			new_columns: self.columns,
		});
		self.emit_size(old);
		Ok(())
	}

	/// Resets the table to its minimum shape, filled with factory-produced
	/// cells
	pub fn clear(&mut self) {
		let old = self.shape();
		let rows = self.capacity.row.min_capacity();
		let columns = if rows == 0 { 0 } else { self.capacity.column.min_capacity().max(1) };
		let factory = Rc::clone(&self.default_cell);
		let mut cells = Vec::with_capacity(rows * columns);
		for row in 0..rows {
			cells.extend((0..columns).map(|column| factory(row, column)));
		}
		self.cells = cells;
		self.rows = rows;
		self.columns = columns;
		self.observers.emit(&TableChange::Reset {
			old_rows: old.0,
			old_columns: old.1,
			new_rows: rows,
			new_columns: columns,
		});
		self.emit_size(old);
	}

	const fn shape(&self) -> (usize, usize) {
		(self.rows, self.columns)
	}

	/// Moves the cells out into per-row vectors, leaving `cells` empty.
	/// Callers rebuild `cells` before returning.
	fn take_rows(&mut self) -> Vec<Vec<T>> {
		let width = self.columns;
		let mut drained = std::mem::take(&mut self.cells).into_iter();
		(0..self.rows).map(|_| drained.by_ref().take(width).collect()).collect()
	}

	fn emit_size(&mut self, old: (usize, usize)) {
		if self.shape() != old {
			self.observers.emit(&TableChange::SizeChanged {
				old_rows: old.0,
				old_columns: old.1,
				new_rows: self.rows,
				new_columns: self.columns,
			});
		}
	}
}

/// Turns a column-major batch into row-major fragments of `height` rows.
fn transpose<T>(batch: Vec<Vec<T>>, height: usize) -> Vec<Vec<T>> {
	let mut columns: Vec<_> = batch.into_iter().map(Vec::into_iter).collect();
	(0..height)
		.map(|_| columns.iter_mut().filter_map(Iterator::next).collect())
		.collect()
}

impl<T: fmt::Debug> fmt::Debug for Table<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Table")
			.field("rows", &self.rows)
			.field("columns", &self.columns)
			.field("cells", &self.cells)
			.field("capacity", &self.capacity)
			.field("observers", &self.observers)
			.finish()
	}
}

/// Clones cells, shape, capacity, and the default-cell factory.
/// Subscriptions are per-instance and do not carry over to the clone.
impl<T: Clone> Clone for Table<T> {
	fn clone(&self) -> Self {
		Self {
			cells: self.cells.clone(),
			rows: self.rows,
			columns: self.columns,
			capacity: self.capacity,
			default_cell: Rc::clone(&self.default_cell),
			observers: Observers::new(),
		}
	}
}

impl<T: PartialEq> PartialEq for Table<T> {
	fn eq(&self, other: &Self) -> bool {
		self.rows == other.rows
			&& self.columns == other.columns
			&& self.capacity == other.capacity
			&& self.cells == other.cells
	}
}

impl<T: Eq> Eq for Table<T> {}

impl<T> Index<(usize, usize)> for Table<T> {
	type Output = T;

	fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
		&self.cells[row * self.columns + column]
	}
}

impl<T> IndexMut<(usize, usize)> for Table<T> {
	fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut Self::Output {
		&mut self.cells[row * self.columns + column]
	}
}
