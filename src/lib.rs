//! Weak AVL (rank-balanced) order-statistic tree for Rust.
//!
//! This crate provides [`WavlTreeMap`], an ordered map backed by a WAVL tree
//! (Haeupler, Sen and Tarjan) whose nodes also track subtree sizes:
//!
//! - O(log n) [`get`](WavlTreeMap::get), [`insert`](WavlTreeMap::insert) and
//!   [`delete`](WavlTreeMap::delete), with amortized O(1) rebalancing
//! - O(1) [`min_value`](WavlTreeMap::min_value) and
//!   [`max_value`](WavlTreeMap::max_value) through cached extreme nodes
//! - O(log n) [`select`](WavlTreeMap::select) of the `i`-th smallest key and
//!   [`rank_of`](WavlTreeMap::rank_of) a key
//!
//! Keys are unique. Inserting a key that is already present fails with
//! [`Error::DuplicateKey`] and deleting a missing one with
//! [`Error::KeyNotFound`]; in both cases the map is left untouched. Successful
//! mutations report how many promotions, demotions and rotations they needed.
//!
//! # Example
//!
//! ```
//! use wavl_tree::{Error, Rank, WavlTreeMap};
//!
//! let mut map = WavlTreeMap::new();
//! for key in [10, 20, 5, 15, 25] {
//!     map.insert(key, key * 100).unwrap();
//! }
//!
//! assert_eq!(map.sorted_keys(), [&5, &10, &15, &20, &25]);
//! assert_eq!(map.select(3), Some(&1500));
//! assert_eq!(map[Rank(1)], 500);
//!
//! assert_eq!(map.insert(20, 0), Err(Error::DuplicateKey));
//! assert!(map.delete(&10).is_ok());
//! assert_eq!(map.delete(&10), Err(Error::KeyNotFound));
//!
//! assert_eq!(map.sorted_keys(), [&5, &15, &20, &25]);
//! assert_eq!(map.min_value(), Some(&500));
//! assert_eq!(map.max_value(), Some(&2500));
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`
//! - **`tracing`** - Emits `trace!` events for rotations and for the
//!   rebalancing cost of every insert and delete
//!
//! # Implementation
//!
//! Nodes live in an arena and refer to each other by index, so parent links
//! never own anything. An absent child stands for the external node, with rank
//! -1 and size 0.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod error;
mod order_statistic;
mod raw;

pub mod wavl_tree_map;

pub use error::Error;
pub use order_statistic::Rank;
pub use wavl_tree_map::WavlTreeMap;
