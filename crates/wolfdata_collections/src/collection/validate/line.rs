//! One-dimensional validation rules.
//!
//! `len` is always the list's current length. Range-style rules check the
//! index arguments first and the capacity consequences second, so an
//! operation that is wrong in both ways reports the index problem.

use super::super::capacity::CapacityPolicy;
use super::super::error::ValidationError;

/// Validates reading `count` elements starting at `index`.
///
/// `index` must address an existing element even when `count` is zero.
pub fn get(len: usize, index: usize, count: usize) -> Result<(), ValidationError> {
	if index >= len {
		return Err(ValidationError::out_of_range("index", index, 0, len.saturating_sub(1)));
	}
	if count > len - index {
		return Err(ValidationError::out_of_range("count", count, 0, len - index));
	}
	Ok(())
}

/// Validates replacing `count` elements in place starting at `index`.
pub fn set(len: usize, index: usize, count: usize) -> Result<(), ValidationError> {
	get(len, index, count)
}

/// Validates inserting `count` elements at `index`.
///
/// `index == len` appends. The resulting length must stay within the
/// policy's maximum; for a fixed policy any non-empty insertion fails.
pub fn insert(
	policy: CapacityPolicy,
	len: usize,
	index: usize,
	count: usize,
) -> Result<(), ValidationError> {
	if index > len {
		return Err(ValidationError::out_of_range("index", index, 0, len));
	}
	let resulting = len.saturating_add(count);
	if resulting > policy.max_capacity() {
		return Err(ValidationError::capacity_violation(
			"items",
			resulting,
			policy.min_capacity(),
			policy.max_capacity(),
		));
	}
	Ok(())
}

/// Validates overwriting `count` elements starting at `index`.
///
/// Elements within the current length are replaced; elements beyond it are
/// appended, so the resulting length is `max(len, index + count)`.
pub fn overwrite(
	policy: CapacityPolicy,
	len: usize,
	index: usize,
	count: usize,
) -> Result<(), ValidationError> {
	if index > len {
		return Err(ValidationError::out_of_range("index", index, 0, len));
	}
	let resulting = len.max(index.saturating_add(count));
	if resulting > policy.max_capacity() {
		return Err(ValidationError::capacity_violation(
			"items",
			resulting,
			policy.min_capacity(),
			policy.max_capacity(),
		));
	}
	Ok(())
}

/// Validates moving a contiguous block of `count` elements from `old_index`
/// to `new_index`.
///
/// Both positions must address existing elements and leave room for the
/// whole block. The length never changes, so no capacity rule applies.
pub fn move_range(
	len: usize,
	old_index: usize,
	new_index: usize,
	count: usize,
) -> Result<(), ValidationError> {
	if old_index >= len {
		return Err(ValidationError::out_of_range("old_index", old_index, 0, len.saturating_sub(1)));
	}
	if new_index >= len {
		return Err(ValidationError::out_of_range("new_index", new_index, 0, len.saturating_sub(1)));
	}
	if count > len - old_index {
		return Err(ValidationError::out_of_range("count", count, 0, len - old_index));
	}
	if count > len - new_index {
		return Err(ValidationError::out_of_range("count", count, 0, len - new_index));
	}
	Ok(())
}

/// Validates removing `count` elements starting at `index`.
///
/// The resulting length must not fall below the policy's minimum; for a
/// fixed policy any non-empty removal fails.
pub fn remove(
	policy: CapacityPolicy,
	len: usize,
	index: usize,
	count: usize,
) -> Result<(), ValidationError> {
	get(len, index, count)?;
	let resulting = len - count;
	if resulting < policy.min_capacity() {
		return Err(ValidationError::capacity_violation(
			"count",
			resulting,
			policy.min_capacity(),
			policy.max_capacity(),
		));
	}
	Ok(())
}

/// Validates resizing the list to exactly `new_len`.
pub fn adjust_length(policy: CapacityPolicy, new_len: usize) -> Result<(), ValidationError> {
	if !policy.allows(new_len) {
		return Err(ValidationError::capacity_violation(
			"length",
			new_len,
			policy.min_capacity(),
			policy.max_capacity(),
		));
	}
	Ok(())
}

/// Validates replacing the entire contents with `count` elements.
pub fn reset(policy: CapacityPolicy, count: usize) -> Result<(), ValidationError> {
	if !policy.allows(count) {
		return Err(ValidationError::capacity_violation(
			"items",
			count,
			policy.min_capacity(),
			policy.max_capacity(),
		));
	}
	Ok(())
}
