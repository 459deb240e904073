//! This crate provides an indexed sequence, the [`List`], with live sublist
//! views and bidirectional cursors, built as a drop-in replacement for a
//! platform collection API that is unavailable in a constrained runtime.
//!
//! The [`List`] stores dynamically typed elements ([`Elem`]) and supports
//! positional insertion, removal and overwrite at any index. Contract
//! violations (bad index, null element, mutating a read-only view) are
//! reported as [`Error`] values, never as panics.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use view_list::{Elem, List};
//!
//! let list = List::of([1, 2, 3, 4]);
//!
//! list.insert(0, Elem::new(0)).unwrap(); // insert at the beginning
//! assert_eq!(list.len(), 5);
//!
//! list.remove(3).unwrap(); // remove the element at position 3
//! assert_eq!(list.to_vec(), List::of([0, 1, 2, 4]).to_vec());
//!
//! assert_eq!(list.index_of(&Elem::new(4)).unwrap(), Some(3));
//! ```
//!
//! # Sublist Views
//!
//! [`List::sub_list`] creates a *live view* over a contiguous range: a
//! window, not a snapshot.
//!
//! ```text
//!  root:                          [ a b c d e f g h ]
//!  sub   = root.sub_list(2, 6)        [ c d e f ]
//!  inner = sub.sub_list(1, 3)           [ d e ]
//! ```
//!
//! A view holds only a handle to its parent and an offset range; every
//! access translates the local position and delegates upward, bottoming out
//! at the root store. Structural changes made through a view resize the view
//! itself and every ancestor on its chain, so a mutation through any view is
//! immediately visible through the root and every other overlapping view.
//!
//! ```
//! use view_list::{Elem, List};
//!
//! let list = List::of(0..10);
//! let sub = list.sub_list(3, 8).unwrap();
//!
//! sub.insert(0, Elem::new(42)).unwrap();
//! assert_eq!(sub.len(), 6);
//! assert_eq!(list.len(), 11);
//! assert_eq!(list.get(3).unwrap(), Elem::new(42));
//!
//! sub.clear().unwrap(); // shrinks the root by exactly the cleared range
//! assert_eq!(list.len(), 5);
//! ```
//!
//! [`List::read_only`] derives a view that delegates reads and refuses every
//! mutation with [`Error::Unsupported`], the restriction used by the
//! key/value collections of the map collaborators built on this crate.
//!
//! # Cursors
//!
//! A [`Cursor`] traverses a view in both directions and can mutate it at the
//! traversal point. It sits *between* elements; [`Cursor::remove`] and
//! [`Cursor::set`] act on the element most recently yielded by
//! [`Cursor::next`] or [`Cursor::previous`], and [`Cursor::add`] inserts at
//! the cursor and invalidates that pending element.
//!
//! ```
//! use view_list::{Elem, List};
//!
//! let list = List::of(['a', 'b', 'c']);
//! let mut cursor = list.cursor();
//!
//! assert_eq!(cursor.next().unwrap(), Elem::new('a'));
//! cursor.set(Elem::new('z')).unwrap();
//! assert_eq!(cursor.next().unwrap(), Elem::new('b'));
//! cursor.remove().unwrap();
//!
//! assert_eq!(list.to_vec(), List::of(['z', 'c']).to_vec());
//! ```
//!
//! There is no modification counter: a structural edit made outside a cursor
//! is observed by that cursor only on its next positional access, and its
//! position is not auto-adjusted. See [`Cursor`] for the full protocol.
//!
//! # Elements
//!
//! Elements are [`Elem`] handles: cheaply clonable, dynamically typed, with
//! value equality and hashing that work across types (elements of different
//! runtime types are simply not equal). The null element ([`Elem::null`]) is
//! rejected at every insertion and query point with [`Error::NullElement`].
//!
//! # Sharing
//!
//! A `List` is an aliasing handle with reference semantics; clones, views
//! and cursors all observe the same storage. Handles are single-threaded by
//! construction (`!Send`/`!Sync`); there is no locking and no copy-on-write.

#[doc(inline)]
pub use elem::{Elem, Element};
#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use list::cursor::Cursor;
#[doc(inline)]
pub use list::iterator::Iter;
#[doc(inline)]
pub use list::{Collection, List};

pub mod elem;
pub mod error;
pub mod list;
