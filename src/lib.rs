//! # Sortkeys
//!
//! `sortkeys` generates string keys ("sort keys") that keep a total order across
//! arbitrary insertions, before, after, or between existing items, without ever
//! renumbering the existing ones. An ordered list can then be persisted as a single
//! sortable column, as needed by drag-and-drop reordering or queue priorities.
//!
//! Keys are base-N fractions written in a configurable alphabet. A new key is the
//! arithmetic midpoint of its neighbours, computed on digit arrays of arbitrary
//! length, so plain code-point string comparison of keys always agrees with their
//! numeric order.
//!
//! ## Key Features
//!
//! - **Any Alphabet**: Any strictly ascending ASCII alphabet of two or more characters
//!   can be used as the digit set. Two are built in: [`BASE64_ALPHABET`] and
//!   [`DECIMAL_ALPHABET`].
//! - **Asymmetric Bounds**: [`SortKeys::lowest`] is a floor no generated key reaches;
//!   [`SortKeys::highest`] is only a default ceiling, as keys can always grow past it.
//! - **Gap Filling**: [`SortKeys::populate_missing`] assigns keys to the unkeyed
//!   entries of an already sorted column without touching the keyed ones.
//! - **Checked Results**: Every generated key is verified to lie strictly between its
//!   bounds before it is returned.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! ```rust
//! use sortkeys::SortKeys;
//!
//! let keys = SortKeys::decimal().unwrap();
//!
//! let first = keys.initial_item().unwrap();
//! assert_eq!(first, "4");
//!
//! let before = keys.first_before(&first).unwrap();
//! let after = keys.last_after(&first).unwrap();
//! assert_eq!((before.as_str(), after.as_str()), ("14", "64"));
//!
//! let between = keys.between(Some(first.as_str()), Some(after.as_str())).unwrap();
//! assert_eq!(between, "514");
//! ```
//!
//! ### Filling Gaps
//!
//! Missing entries are `None` (or the empty string):
//!
//! ```rust
//! use sortkeys::SortKeys;
//!
//! let keys = SortKeys::base64().unwrap();
//! let column = vec![Some("UV"), None, None, Some("jF")];
//!
//! let filled = keys.populate_missing(&column).unwrap();
//! assert_eq!(filled[0], "UV");
//! assert_eq!(filled[3], "jF");
//! assert!(filled.windows(2).all(|pair| pair[0] < pair[1]));
//! ```
//!
//! ## Performance Characteristics
//!
//! - Every operation is pure and allocation-light; cost is linear in the length of
//!   the longest key involved.
//! - Repeatedly inserting at the same spot grows keys by about one digit per call.
//!   Bounding key growth (e.g. periodic renumbering with [`SortKeys::keys_between`])
//!   is left to the caller.
//! - Stored keys must be compared by raw code-point (binary) order. Locale-aware
//!   collation in the storage layer breaks the ordering guarantee.

mod algo;
pub mod config;
pub mod core;
pub mod error;
pub mod provider;

pub use config::{AlphabetConfig, BASE64_ALPHABET, DECIMAL_ALPHABET};
pub use crate::core::{Alphabet, SortKeyAccessor, SortKeyItem};
pub use error::SortKeyError;
pub use provider::{SortKeys, compare_sort_keys};

/// Result type for sort key operations.
pub type Result<T> = std::result::Result<T, SortKeyError>;

pub mod prelude {
    pub use crate::config::AlphabetConfig;
    pub use crate::core::SortKeyAccessor;
    pub use crate::error::SortKeyError;
    pub use crate::provider::{SortKeys, compare_sort_keys};
}
