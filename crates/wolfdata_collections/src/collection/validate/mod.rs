//! Pure validation rules for capacity-bounded collections.
//!
//! Every rule is a free function over a capacity policy and the collection's
//! current length(s). The functions are side-effect free: they either return
//! `Ok(())`, meaning the mutation is safe to apply, or a [`ValidationError`]
//! naming the parameter, its value, and the violated bound. They never touch
//! storage, which is what lets [`CapacityList`](super::CapacityList) and
//! [`Table`](super::Table) share one rule engine and lets tests enumerate
//! boundary cases without a live collection.
//!
//! [`line`] covers one-dimensional rules; [`table`] covers the
//! two-dimensional rules (per-axis bounds, uniform row width, and the
//! empty-shape coupling between the axes).

pub mod line;
pub mod table;

use super::error::ValidationError;

/// Unwraps a decoded item batch, rejecting the first absent element.
///
/// Binary project files pad optional slots with absent entries; a list can
/// never hold such a gap, so the batch is screened before any mutation.
///
/// # Examples
///
/// ```
/// use wolfdata_collections::collection::validate::collect_present;
///
/// let ok = collect_present("items", vec![Some(1), Some(2)]);
/// assert_eq!(ok.unwrap(), [1, 2]);
///
/// let err = collect_present("items", vec![Some(1), None, Some(3)]).unwrap_err();
/// assert_eq!(err.to_string(), "items has no value at index 1");
/// ```
pub fn collect_present<T>(
	param: &'static str,
	items: Vec<Option<T>>,
) -> Result<Vec<T>, ValidationError> {
	if let Some(index) = items.iter().position(Option::is_none) {
		return Err(ValidationError::missing_item(param, index));
	}
	Ok(items.into_iter().flatten().collect())
}
