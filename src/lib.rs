//! This crate provides a circular doubly-linked list with a sentinel node and
//! index-based access.
//!
//! The [`CircularList`] inserts at the front and appends at the back in
//! constant time. Accessing, inserting or deleting at an index walks from
//! whichever end of the list is nearer, taking *O*(min(*i*, *n* - *i*)) time.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use circular_list::CircularList;
//!
//! let mut list = CircularList::new();
//!
//! assert!(list.insert(0, 20)); // [20]
//! assert!(list.append_last(10)); // [20, 10]
//! assert!(list.insert_first(30)); // [30, 20, 10]
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.get_data(1), Ok(&20));
//! assert_eq!(list.get_last_data(), Ok(&10));
//!
//! assert!(list.get_data(3).is_err()); // reads out of range fail hard
//! assert!(!list.insert(3, 40)); // insertions out of range fail soft
//! ```
//!
//! # Memory Layout
//!
//! The nodes of the list live in an arena and refer to each other by their
//! slot index. Slot 0 is the sentinel node:
//! ```text
//!          ┌─────────────────────────────────────────────────────────────────────┐
//!          ↓                                                      Sentinel (#0)  │
//!    ╔═══════════╗           ╔═══════════╗                        ┌───────────┐  │
//!    ║   next    ║ ────────→ ║   next    ║ ────────→ ┄┄ ────────→ │   next    │ ─┘
//!    ╟───────────╢           ╟───────────╢     Node 2, 3, ...     ├───────────┤
//! ┌─ ║   prev    ║ ←──────── ║   prev    ║ ←──────── ┄┄ ←──────── │   prev    │
//! │  ╟───────────╢           ╟───────────╢                        ├───────────┤
//! │  ║ payload T ║           ║ payload T ║                        ┊No payload ┊
//! │  ╚═══════════╝           ╚═══════════╝                        └╌╌╌╌╌╌╌╌╌╌╌┘
//! │      Node 0                  Node 1                                 ↑
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Initially there is only the sentinel, of which the `next` and `prev` links
//! point to itself. As elements are inserted, `sentinel.next` links the first
//! element and `sentinel.prev` links the last one.
//!
//! Both links are plain slot indices: the arena owns every node, so no link
//! owns its target. Slots vacated by deletions are reused by later insertions.
//!
//! # Error Handling
//!
//! - Indexed reads ([`get_data`], [`get_first_data`], [`get_last_data`]) return
//!   [`Error::IndexOutOfRange`] for an index outside the list.
//! - Insertions and deletions ([`insert`], [`delete`]) return `false` for a
//!   position they do not accept.
//!
//! Note that [`delete`] never accepts index 0 while [`insert`] does, and that
//! [`insert`] never accepts `index == len`; use [`append_last`] to append.
//!
//! [`CircularList`]: crate::CircularList
//! [`Error::IndexOutOfRange`]: crate::Error::IndexOutOfRange
//! [`get_data`]: crate::CircularList::get_data
//! [`get_first_data`]: crate::CircularList::get_first_data
//! [`get_last_data`]: crate::CircularList::get_last_data
//! [`insert`]: crate::CircularList::insert
//! [`delete`]: crate::CircularList::delete
//! [`append_last`]: crate::CircularList::append_last

#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use list::CircularList;

pub mod error;
pub mod list;
