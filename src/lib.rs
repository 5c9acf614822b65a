//! Minimum-degree B-tree set for Rust.
//!
//! This crate provides [`BTree`], an ordered set stored in a B-tree whose
//! minimum degree `t` is chosen per instance and whose order is given by a
//! comparator supplied at construction:
//!
//! - [`insert`](BTree::insert) - Add an element, splitting full nodes on the way down
//! - [`get`](BTree::get) - Look up the stored element equal to a query
//! - [`remove`](BTree::remove) - Remove an element, filling minimal nodes on the way down
//!
//! # Example
//!
//! ```
//! use degree_btree::BTree;
//!
//! #[derive(Debug, PartialEq)]
//! struct User {
//!     id: u64,
//!     name: String,
//! }
//!
//! let mut users = BTree::with_degree_and_comparator(3, |a: &User, b: &User| a.id.cmp(&b.id))?;
//! for id in 1..=50 {
//!     users.insert(User { id, name: format!("user{id}") });
//! }
//!
//! let probe = User { id: 25, name: String::new() };
//! assert_eq!(users.get(&probe).map(|u| u.name.as_str()), Some("user25"));
//!
//! assert!(users.remove(&probe));
//! assert!(!users.contains(&probe));
//! assert_eq!(users.len(), 49);
//! # Ok::<(), degree_btree::Error>(())
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Per-instance degree** - Each tree fixes its own minimum degree; trees never share it
//! - **Pluggable order** - Any `Fn(&T, &T) -> Ordering`, or [`Natural`] for [`Ord`] types
//! - **Single-pass mutations** - No operation ever walks back up the tree
//!
//! # Implementation
//!
//! The set is a classic B-tree (elements live in internal nodes as well as
//! leaves). Every non-root node holds `t - 1..=2t - 1` elements. Insertion
//! splits any full node before descending into it, and removal borrows from a
//! sibling or merges with one before descending into a minimal node, so each
//! operation is one downward walk from the root. Nodes own their children
//! exclusively; a retired node is freed as soon as it is detached.

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
#[cfg(test)]
#[macro_use]
extern crate std;

mod compare;
mod error;
mod raw;

pub mod btree;

pub use btree::BTree;
pub use compare::{Compare, Natural};
pub use error::Error;
