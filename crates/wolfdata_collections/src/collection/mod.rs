//! Capacity-bounded collection support for `wolfdata-rs`.
//!
//! The module is split by concern:
//!
//! - `capacity`: the [`CapacityPolicy`] and [`TableCapacity`] value types
//!   that describe which lengths a collection may take.
//! - `error`: the [`ValidationError`] taxonomy shared by every operation.
//! - [`validate`]: pure validation rules, free functions over a policy and
//!   the collection's current length(s). They never mutate anything.
//! - [`notify`]: change events and the per-collection observer registry.
//! - [`list`]: [`CapacityList`], the one-dimensional list.
//! - [`table`]: [`Table`], the two-dimensional list with uniform-width rows.
//!
//! Every mutator follows the same discipline: validate the full request
//! first, apply it only if validation passed, then notify observers. A
//! rejected request leaves the collection untouched.

mod capacity;
mod error;

pub mod list;
pub mod notify;
pub mod table;
pub mod validate;

// Re-export the main collection types
pub use capacity::{CapacityPolicy, TableCapacity};
pub use error::ValidationError;
pub use list::CapacityList;
pub use notify::{ListChange, Observers, SubscriptionId, TableChange};
pub use table::Table;
