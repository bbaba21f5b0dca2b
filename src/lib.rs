//! This crate provides a queue of strings backed by a doubly-linked list with
//! arena-owned nodes, implemented as a cyclic list, together with in-place
//! algorithms that reorder the queue by relinking nodes.
//!
//! The [`Queue`] owns a copy of every inserted value and supports head and
//! tail insertion and removal, middle and duplicate deletion, pairwise and
//! k-group reversal, stable merge sorts, monotonic filtering, and stable
//! merging of sorted queues.
//!
//! Here is a quick example showing how the queue works.
//!
//! ```
//! use cyclic_queue::{Queue, Error};
//! use std::iter::FromIterator;
//!
//! let mut queue = Queue::from_iter(["d", "a", "c", "a", "b"]);
//!
//! queue.sort(); // [a, a, b, c, d]
//! queue.delete_dup()?; // [b, c, d]
//! queue.insert_head("z")?; // [z, b, c, d]
//! queue.reverse_k(2)?; // [b, z, d, c]
//! assert!(queue.iter().eq(["b", "z", "d", "c"]));
//!
//! assert_eq!(queue.remove_tail().unwrap().value(), "c");
//! assert_eq!(queue.size(), 3);
//! # Ok::<(), Error>(())
//! ```
//!
//! # Memory Layout
//!
//! The generic [`List`] under the queue keeps its nodes in a slab and links
//! them by handle:
//! ```text
//!          ┌─────────────────────────────────────────────────────────────────────┐
//!          ↓                                                        (Ghost) link │
//!    ╔═══════════╗           ╔═══════════╗                        ┌───────────┐  │
//!    ║   next    ║ ────────→ ║   next    ║ ────────→ ┄┄ ────────→ │   next    │ ─┘
//!    ╟───────────╢           ╟───────────╢    slot 2, 3, ...      ├───────────┤
//! ┌─ ║   prev    ║ ←──────── ║   prev    ║ ←──────── ┄┄ ←──────── │   prev    │
//! │  ╟───────────╢           ╟───────────╢                        └───────────┘
//! │  ║ payload T ║           ║ payload T ║                          ↑   ↑
//! │  ╚═══════════╝           ╚═══════════╝                          │   │
//! │     slot 0                  slot 1                              │   │
//! └─────────────────────────────────────────────────────────────────┘   │
//! ╔═══════════════════════╗                                              │
//! ║ ghost (handle MAX)    ║ ─────────────────────────────────────────────┘
//! ╟───────────────────────╢
//! ║ nodes: Slab<Node<T>>  ║
//! ╟───────────────────────╢
//! ║ len                   ║
//! ╚═══════════════════════╝
//!            List
//! ```
//! The `List` contains:
//! - the links of the ghost node, which is addressed by a reserved handle
//!   that no slab slot ever takes;
//! - the slab of nodes, each holding `next` and `prev` handles and a payload;
//! - the length `len`.
//!
//! Initially, the ghost node's `next` and `prev` both point to itself. As
//! elements are inserted, `ghost.next` is the first element and `ghost.prev`
//! is the last. Relinking a node never moves its payload, and removing a node
//! frees its slot for reuse.
//!
//! Lists never share an arena, so moving elements between two lists (as
//! [`List::append`] does) moves the values themselves.
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IntoIter`] iterators. These
//! are double-ended iterators and iterate the list like an array (fused and
//! non-cyclic).
//!
//! ```
//! use cyclic_queue::List;
//! use std::iter::FromIterator;
//!
//! let list = List::from_iter([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next_back(), Some(&3));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // Fused and non-cyclic
//! ```
//!
//! # Cursors
//!
//! The cursors [`Cursor`] and [`CursorMut`] can move forward or backward over
//! the list. In a list with length *n*, there are *n* + 1 valid locations for
//! the cursor, the last being the ghost node. [`CursorMut`] can also edit the
//! list where it stands:
//! - [`insert`]: insert a new item before the cursor;
//! - [`remove`]: remove the item at the cursor, moving to the next one;
//! - [`backspace`]: remove the item before the cursor.
//!
//! ```
//! use cyclic_queue::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3, 4]);
//!
//! let mut cursor = list.cursor_start_mut();
//!
//! cursor.insert(5); // becomes [5, 1, 2, 3, 4], points to 1
//! assert_eq!(cursor.current(), Some(&1));
//!
//! assert!(cursor.seek_forward(2).is_ok());
//! assert_eq!(cursor.remove(), Some(3)); // becomes [5, 1, 2, 4], points to 4
//! assert_eq!(cursor.current(), Some(&4));
//!
//! assert_eq!(cursor.backspace(), Some(2)); // becomes [5, 1, 4], points to 4
//! assert_eq!(cursor.current(), Some(&4));
//!
//! assert_eq!(Vec::from_iter(list), vec![5, 1, 4]);
//! ```
//!
//! # Logging
//!
//! Queue operations emit [`tracing`] events: `trace` for bookkeeping and
//! `debug` for rejected operations. No subscriber is installed by this crate.
//!
//! [`insert`]: crate::CursorMut::insert
//! [`remove`]: crate::CursorMut::remove
//! [`backspace`]: crate::CursorMut::backspace

#[doc(inline)]
pub use config::{Collation, Config, SortStrategy};
#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use list::cursor::{Cursor, CursorMut};
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter};
#[doc(inline)]
pub use list::List;
#[doc(inline)]
pub use queue::{Element, Queue};

pub mod list;

mod config;
mod error;
mod queue;
