#![allow(clippy::single_component_path_imports)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `wolfdata-rs` is a data-access library for Wolf RPG Editor project files
//! (maps, databases, tilesets, and event command scripts).
//!
//! The crate currently ships the collection framework those formats are
//! built on: capacity-bounded lists and tables with validated mutation and
//! change notification, re-exported from [`wolfdata_collections`]. Format
//! codecs parameterize these collections with their element types and
//! capacity rules.
//!
//! # Examples
//!
//! ```
//! use wolfdata_rs::prelude::*;
//!
//! # fn main() -> Result<(), ValidationError> {
//! // A tileset's chip settings: at least one entry, at most 65535
//! let policy = CapacityPolicy::bounded(1, 65535)?;
//! let mut chips = CapacityList::with_items(policy, vec![0u8, 1, 2], |_| 0)?;
//! chips.push(3)?;
//! assert_eq!(chips.len(), 4);
//! # Ok(())
//! # }
//! ```

pub use wolfdata_collections::*;

#[doc(inline)]
pub use wolfdata_collections::prelude;
