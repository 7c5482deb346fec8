//! Unit tests for `CapacityList`

use std::{cell::RefCell, rc::Rc};

use super::super::capacity::CapacityPolicy;
use super::super::error::ValidationError;
use super::super::notify::ListChange;
use super::*;

fn bounded(min: usize, max: usize) -> CapacityPolicy {
	CapacityPolicy::bounded(min, max).unwrap()
}

fn numbered(policy: CapacityPolicy, items: Vec<u32>) -> CapacityList<u32> {
	CapacityList::with_items(policy, items, |i| i as u32).unwrap()
}

/// Subscribes a recorder and returns the shared event log.
fn record(list: &mut CapacityList<u32>) -> Rc<RefCell<Vec<ListChange>>> {
	let events = Rc::new(RefCell::new(Vec::new()));
	let sink = Rc::clone(&events);
	list.subscribe(move |change| sink.borrow_mut().push(*change));
	events
}

#[test]
fn test_new_fills_to_minimum() {
	let list = CapacityList::new(bounded(3, 10), |i| i * 10);
	assert_eq!(list.as_slice(), [0, 10, 20]);

	let list = CapacityList::new(CapacityPolicy::fixed(4), |_| 7u8);
	assert_eq!(list.len(), 4);

	let list: CapacityList<u8> = CapacityList::new(CapacityPolicy::Unbounded, |_| 0);
	assert!(list.is_empty());
}

#[test]
fn test_with_items_validates_count() {
	assert!(CapacityList::with_items(bounded(1, 3), vec![1, 2], |_| 0).is_ok());
	assert!(matches!(
		CapacityList::with_items(bounded(1, 3), Vec::<u32>::new(), |_| 0),
		Err(ValidationError::CapacityViolation { .. })
	));
	assert!(CapacityList::with_items(bounded(1, 3), vec![1, 2, 3, 4], |_| 0).is_err());
}

#[test]
fn test_with_decoded_items() {
	let list =
		CapacityList::with_decoded_items(CapacityPolicy::Unbounded, vec![Some(1), Some(2)], |_| 0)
			.unwrap();
	assert_eq!(list.as_slice(), [1, 2]);

	let err = CapacityList::with_decoded_items(
		CapacityPolicy::Unbounded,
		vec![Some(1), None, Some(3)],
		|_| 0,
	)
	.unwrap_err();
	assert_eq!(
		err,
		ValidationError::MissingItem {
			param: "items",
			index: 1
		}
	);
}

#[test]
fn test_insert_appends_within_bounds() {
	// Restricted list [min=1, max=10] at length 5
	let mut list = numbered(bounded(1, 10), vec![1, 2, 3, 4, 5]);
	list.insert_range(5, vec![6, 7]).unwrap();
	assert_eq!(list.as_slice(), [1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn test_insert_rejected_beyond_max() {
	let mut list = numbered(bounded(0, 6), vec![1, 2, 3, 4, 5]);
	assert!(list.insert_range(0, vec![8, 9]).is_err());
	assert_eq!(list.as_slice(), [1, 2, 3, 4, 5]);
}

#[test]
fn test_remove_respects_min() {
	// Restricted list length 5, min=1: removing all 5 fails, 4 succeeds
	let mut list = numbered(bounded(1, 10), vec![1, 2, 3, 4, 5]);
	assert!(matches!(
		list.remove_range(0, 5),
		Err(ValidationError::CapacityViolation { .. })
	));
	assert_eq!(list.len(), 5);

	list.remove_range(0, 4).unwrap();
	assert_eq!(list.as_slice(), [5]);
}

#[test]
fn test_fixed_list_rejects_structural_changes() {
	let mut list = numbered(CapacityPolicy::fixed(5), vec![1, 2, 3, 4, 5]);

	assert!(matches!(
		list.remove_range(0, 1),
		Err(ValidationError::CapacityViolation { .. })
	));
	assert!(list.push(6).is_err());
	assert!(list.insert(0, 0).is_err());
	assert!(list.adjust_length(4).is_err());
	assert_eq!(list.as_slice(), [1, 2, 3, 4, 5]);

	// Set, move, and full-length reset still work
	list.set(0, 10).unwrap();
	list.move_item(0, 4).unwrap();
	list.reset(vec![9, 8, 7, 6, 5]).unwrap();
	assert_eq!(list.as_slice(), [9, 8, 7, 6, 5]);
	assert!(list.adjust_length(5).is_ok());
}

#[test]
fn test_set_range() {
	let mut list = numbered(CapacityPolicy::Unbounded, vec![1, 2, 3, 4, 5]);
	list.set_range(1, vec![20, 30]).unwrap();
	assert_eq!(list.as_slice(), [1, 20, 30, 4, 5]);

	assert!(list.set_range(4, vec![0, 0]).is_err());
	assert_eq!(list.as_slice(), [1, 20, 30, 4, 5]);
}

#[test]
fn test_set_range_decoded_leaves_list_unchanged_on_gap() {
	let mut list = numbered(CapacityPolicy::Unbounded, vec![1, 2, 3, 4, 5]);
	let err = list.set_range_decoded(3, vec![Some(9), None]).unwrap_err();
	assert!(matches!(err, ValidationError::MissingItem { index: 1, .. }));
	assert_eq!(list.as_slice(), [1, 2, 3, 4, 5]);
}

#[test]
fn test_overwrite_replaces_then_appends() {
	let mut list = numbered(bounded(0, 8), vec![1, 2, 3, 4, 5]);
	// Indices 3..5 replaced, 5..7 appended
	list.overwrite(3, vec![40, 50, 60, 70]).unwrap();
	assert_eq!(list.as_slice(), [1, 2, 3, 40, 50, 60, 70]);

	// Entirely within bounds: pure replacement
	list.overwrite(0, vec![10]).unwrap();
	assert_eq!(list[0], 10);
}

#[test]
fn test_move_preserves_order() {
	let mut list = numbered(CapacityPolicy::Unbounded, vec![1, 2, 3, 4, 5, 6]);
	// Move block [2, 3] to start at index 3
	list.move_range(1, 3, 2).unwrap();
	assert_eq!(list.as_slice(), [1, 4, 5, 2, 3, 6]);

	// And back
	list.move_range(3, 1, 2).unwrap();
	assert_eq!(list.as_slice(), [1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_adjust_length_grows_with_factory() {
	let mut list = numbered(bounded(0, 10), vec![5, 5]);
	list.adjust_length(5).unwrap();
	assert_eq!(list.as_slice(), [5, 5, 2, 3, 4]);

	list.adjust_length(1).unwrap();
	assert_eq!(list.as_slice(), [5]);
}

#[test]
fn test_adjust_length_round_trip_restores_length() {
	let mut list = numbered(bounded(0, 10), vec![1, 2, 3]);
	list.adjust_length(7).unwrap();
	list.adjust_length(3).unwrap();
	assert_eq!(list.len(), 3);
}

#[test]
fn test_reset_is_idempotent() {
	let mut list = numbered(CapacityPolicy::Unbounded, vec![1, 2, 3]);
	list.reset(vec![7, 8]).unwrap();
	let after_once = list.as_slice().to_vec();
	list.reset(vec![7, 8]).unwrap();
	assert_eq!(list.as_slice(), after_once.as_slice());
}

#[test]
fn test_remove_item() {
	let mut list = numbered(CapacityPolicy::Unbounded, vec![1, 2, 3, 2]);
	assert!(list.remove_item(&2).unwrap());
	assert_eq!(list.as_slice(), [1, 3, 2]);
	assert!(!list.remove_item(&9).unwrap());
}

#[test]
fn test_clear_restores_minimum_defaults() {
	let mut list = numbered(bounded(2, 10), vec![7, 8, 9, 10]);
	list.clear();
	assert_eq!(list.as_slice(), [0, 1]);
}

#[test]
fn test_slice() {
	let list = numbered(CapacityPolicy::Unbounded, vec![1, 2, 3, 4, 5]);
	assert_eq!(list.slice(1, 3).unwrap(), [2, 3, 4]);
	assert!(list.slice(5, 0).is_err());
	assert!(list.slice(3, 3).is_err());
}

#[test]
fn test_event_sequence_for_insert() {
	let mut list = numbered(CapacityPolicy::Unbounded, vec![1, 2]);
	let events = record(&mut list);

	list.insert_range(1, vec![8, 9]).unwrap();

	assert_eq!(
		*events.borrow(),
		[
			ListChange::Inserted { index: 1, count: 2 },
			ListChange::LengthChanged { old: 2, new: 4 },
		],
	);
}

#[test]
fn test_event_sequence_for_overwrite() {
	let mut list = numbered(CapacityPolicy::Unbounded, vec![1, 2, 3]);
	let events = record(&mut list);

	list.overwrite(2, vec![30, 40]).unwrap();

	assert_eq!(
		*events.borrow(),
		[
			ListChange::Replaced { index: 2, count: 1 },
			ListChange::Inserted { index: 3, count: 1 },
			ListChange::LengthChanged { old: 3, new: 4 },
		],
	);
}

#[test]
fn test_event_sequence_for_move_and_set() {
	let mut list = numbered(CapacityPolicy::Unbounded, vec![1, 2, 3]);
	let events = record(&mut list);

	list.move_item(2, 0).unwrap();
	list.set(1, 9).unwrap();

	// No length event: the length never changed
	assert_eq!(
		*events.borrow(),
		[
			ListChange::Moved { from: 2, to: 0, count: 1 },
			ListChange::Replaced { index: 1, count: 1 },
		],
	);
}

#[test]
fn test_no_events_on_failed_mutation() {
	let mut list = numbered(CapacityPolicy::fixed(3), vec![1, 2, 3]);
	let events = record(&mut list);

	assert!(list.push(4).is_err());
	assert!(list.remove_at(0).is_err());

	assert!(events.borrow().is_empty());
}

#[test]
fn test_unsubscribe_stops_delivery() {
	let mut list = numbered(CapacityPolicy::Unbounded, vec![1]);
	let events = Rc::new(RefCell::new(Vec::new()));
	let sink = Rc::clone(&events);
	let id = list.subscribe(move |change| sink.borrow_mut().push(*change));

	list.push(2).unwrap();
	assert_eq!(events.borrow().len(), 2);

	assert!(list.unsubscribe(id));
	list.push(3).unwrap();
	assert_eq!(events.borrow().len(), 2);
}

#[test]
fn test_clone_drops_subscriptions() {
	let mut list = numbered(CapacityPolicy::Unbounded, vec![1, 2]);
	let events = record(&mut list);

	let mut cloned = list.clone();
	cloned.push(3).unwrap();

	assert!(events.borrow().is_empty());
	assert_eq!(cloned.as_slice(), [1, 2, 3]);
	assert_eq!(list.as_slice(), [1, 2]);
}

#[test]
fn test_iteration_and_indexing() {
	let list = numbered(CapacityPolicy::Unbounded, vec![1, 2, 3]);
	assert_eq!(list[2], 3);
	assert_eq!(list.iter().copied().sum::<u32>(), 6);
	assert_eq!((&list).into_iter().count(), 3);
	assert_eq!(list.into_vec(), [1, 2, 3]);
}
