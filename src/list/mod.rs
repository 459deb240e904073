use std::cell::RefCell;
use std::fmt;
use std::fmt::{Debug, Formatter};
use std::rc::Rc;

use crate::elem::{Elem, Element};
use crate::error::{Error, Result};
use crate::list::cursor::Cursor;
use crate::list::iterator::Iter;

pub mod cursor;
pub mod iterator;

mod algorithms;

pub use algorithms::Collection;

/// An indexed sequence of dynamically typed elements, with live sublist
/// views and bidirectional cursors.
///
/// A `List` is an aliasing *handle*: cloning it yields another handle to the
/// same underlying view, the way object references behave on the platform
/// this crate replaces. The handle is either the root store itself or a live
/// window into a parent view created by [`sub_list`]; either way, every
/// overlapping handle observes a mutation immediately.
///
/// Elements are [`Elem`] values: cheap-to-clone, dynamically typed, never
/// null. All operations that accept an element reject [`Elem::null`] with
/// [`Error::NullElement`].
///
/// # Indexing
///
/// Positions are 0-based. Insertion positions range over `0..=len`; access
/// and removal positions over `0..len`. A position outside the valid
/// interval fails with [`Error::OutOfRange`]; no operation panics on a bad
/// index.
///
/// # Examples
///
/// ```
/// use view_list::{Elem, List};
///
/// let list = List::new();
/// list.add(Elem::new("a")).unwrap();
/// list.insert(1, Elem::new("b")).unwrap();
///
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.get(0).unwrap(), Elem::new("a"));
/// assert_eq!(list.get(1).unwrap(), Elem::new("b"));
/// ```
///
/// Sublist views write through to the backing list:
///
/// ```
/// use view_list::{Elem, List};
///
/// let list = List::of(0..10);
/// let sub = list.sub_list(3, 8).unwrap();
/// assert_eq!(sub.len(), 5);
///
/// sub.insert(0, Elem::new(42)).unwrap();
/// assert_eq!(sub.len(), 6);
/// assert_eq!(list.len(), 11);
/// assert_eq!(list.get(3).unwrap(), Elem::new(42));
/// ```
///
/// [`sub_list`]: List::sub_list
pub struct List {
    node: Shared,
}

type Shared = Rc<RefCell<Repr>>;

enum Repr {
    /// The root store owning the elements.
    Root(Vec<Elem>),
    /// A live window `[lo, hi)` into `parent`, in parent-local positions.
    ///
    /// No elements are copied; every access translates `lo + local` and
    /// delegates to `parent`. A structural change through this view adjusts
    /// `hi` here and recursively at every ancestor on the way to the root.
    Sub {
        parent: Shared,
        lo: usize,
        hi: usize,
    },
    /// Delegates reads to the inner view and refuses every mutation.
    Frozen(Shared),
}

fn length(node: &Shared) -> usize {
    match &*node.borrow() {
        Repr::Root(store) => store.len(),
        Repr::Sub { lo, hi, .. } => hi - lo,
        Repr::Frozen(inner) => length(inner),
    }
}

fn writable(node: &Shared) -> bool {
    match &*node.borrow() {
        Repr::Root(_) => true,
        Repr::Sub { parent, .. } => writable(parent),
        Repr::Frozen(_) => false,
    }
}

fn get_at(node: &Shared, index: usize) -> Result<Elem> {
    match &*node.borrow() {
        Repr::Root(store) => store.get(index).cloned().ok_or(Error::OutOfRange {
            index,
            len: store.len(),
        }),
        Repr::Sub { parent, lo, hi } => {
            let len = hi - lo;
            if index >= len {
                return Err(Error::OutOfRange { index, len });
            }
            get_at(parent, lo + index)
        }
        Repr::Frozen(inner) => get_at(inner, index),
    }
}

fn set_at(node: &Shared, index: usize, elem: Elem) -> Result<Elem> {
    match &mut *node.borrow_mut() {
        Repr::Root(store) => {
            let len = store.len();
            let slot = store
                .get_mut(index)
                .ok_or(Error::OutOfRange { index, len })?;
            Ok(std::mem::replace(slot, elem))
        }
        Repr::Sub { parent, lo, hi } => {
            let len = *hi - *lo;
            if index >= len {
                return Err(Error::OutOfRange { index, len });
            }
            set_at(parent, *lo + index, elem)
        }
        Repr::Frozen(_) => Err(Error::Unsupported("set")),
    }
}

fn insert_at(node: &Shared, index: usize, elem: Elem) -> Result<()> {
    match &mut *node.borrow_mut() {
        Repr::Root(store) => {
            if index > store.len() {
                return Err(Error::OutOfRange {
                    index,
                    len: store.len(),
                });
            }
            store.insert(index, elem);
            Ok(())
        }
        Repr::Sub { parent, lo, hi } => {
            let len = *hi - *lo;
            if index > len {
                return Err(Error::OutOfRange { index, len });
            }
            insert_at(parent, *lo + index, elem)?;
            *hi += 1;
            Ok(())
        }
        Repr::Frozen(_) => Err(Error::Unsupported("insert")),
    }
}

fn remove_at(node: &Shared, index: usize) -> Result<Elem> {
    match &mut *node.borrow_mut() {
        Repr::Root(store) => {
            if index >= store.len() {
                return Err(Error::OutOfRange {
                    index,
                    len: store.len(),
                });
            }
            Ok(store.remove(index))
        }
        Repr::Sub { parent, lo, hi } => {
            let len = *hi - *lo;
            if index >= len {
                return Err(Error::OutOfRange { index, len });
            }
            let removed = remove_at(parent, *lo + index)?;
            *hi -= 1;
            Ok(removed)
        }
        Repr::Frozen(_) => Err(Error::Unsupported("remove")),
    }
}

/// Remove `from..to` from the view as a single size-dropping removal.
///
/// The caller guarantees `from <= to <= length(node)`; the root still bounds
/// checks, because a view whose parent shrank underneath it can present a
/// stale range.
fn remove_range(node: &Shared, from: usize, to: usize) -> Result<()> {
    match &mut *node.borrow_mut() {
        Repr::Root(store) => {
            if to > store.len() {
                return Err(Error::OutOfRange {
                    index: to,
                    len: store.len(),
                });
            }
            store.drain(from..to);
            Ok(())
        }
        Repr::Sub { parent, lo, hi } => {
            remove_range(parent, *lo + from, *lo + to)?;
            *hi -= to - from;
            Ok(())
        }
        Repr::Frozen(_) => Err(Error::Unsupported("clear")),
    }
}

// Construction.
impl List {
    /// Create an empty `List`.
    ///
    /// # Examples
    /// ```
    /// use view_list::List;
    /// let list = List::new();
    /// assert!(list.is_empty());
    /// ```
    pub fn new() -> Self {
        List {
            node: Rc::new(RefCell::new(Repr::Root(Vec::new()))),
        }
    }

    /// Create a `List` holding the given plain values, in order.
    ///
    /// # Examples
    /// ```
    /// use view_list::{Elem, List};
    ///
    /// let list = List::of(["a", "b", "c"]);
    /// assert_eq!(list.len(), 3);
    /// assert_eq!(list.get(2).unwrap(), Elem::new("c"));
    /// ```
    pub fn of<T, I>(values: I) -> Self
    where
        T: Element,
        I: IntoIterator<Item = T>,
    {
        values.into_iter().map(Elem::new).collect()
    }

    fn from_node(node: Shared) -> Self {
        List { node }
    }

    fn require(elem: &Elem) -> Result<()> {
        if elem.is_null() {
            return Err(Error::NullElement);
        }
        Ok(())
    }

    pub(crate) fn ensure_writable(&self, op: &'static str) -> Result<()> {
        if !writable(&self.node) {
            return Err(Error::Unsupported(op));
        }
        Ok(())
    }
}

// Positional operations.
impl List {
    /// Returns the number of elements visible through this view.
    ///
    /// For a sublist this is the width of its window, kept in step with
    /// every structural change made through the view or its descendants.
    pub fn len(&self) -> usize {
        length(&self.node)
    }

    /// Returns `true` if the view contains no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// use view_list::{Elem, List};
    ///
    /// let list = List::of([1, 2, 3]);
    /// assert_eq!(list.get(1).unwrap(), Elem::new(2));
    /// assert!(list.get(3).is_err());
    /// ```
    pub fn get(&self, index: usize) -> Result<Elem> {
        get_at(&self.node, index)
    }

    /// Replace the element at `index`, returning the previous element.
    ///
    /// This is a pure overwrite, not a structural change: no view's size
    /// moves.
    ///
    /// # Errors
    ///
    /// [`Error::Unsupported`] through a read-only view,
    /// [`Error::NullElement`] if `elem` is null, [`Error::OutOfRange`] if
    /// `index >= len`.
    ///
    /// # Examples
    /// ```
    /// use view_list::{Elem, List};
    ///
    /// let list = List::of([1, 2, 3]);
    /// let old = list.set(0, Elem::new(9)).unwrap();
    /// assert_eq!(old, Elem::new(1));
    /// assert_eq!(list.get(0).unwrap(), Elem::new(9));
    /// ```
    pub fn set(&self, index: usize, elem: Elem) -> Result<Elem> {
        self.ensure_writable("set")?;
        Self::require(&elem)?;
        set_at(&self.node, index, elem)
    }

    /// Append an element to the end of the view.
    ///
    /// Equivalent to `insert(len, elem)`. Duplicates are allowed. Appending
    /// through a sublist inserts at the sublist's upper boundary inside the
    /// backing list.
    ///
    /// # Errors
    ///
    /// [`Error::Unsupported`] through a read-only view,
    /// [`Error::NullElement`] if `elem` is null.
    pub fn add(&self, elem: Elem) -> Result<()> {
        self.insert(self.len(), elem)
    }

    /// Insert an element at `index`, shifting `index..len` right by one.
    ///
    /// The size of this view grows by one, and so does the size of every
    /// ancestor view whose range covers the insertion point.
    ///
    /// # Errors
    ///
    /// [`Error::Unsupported`] through a read-only view,
    /// [`Error::NullElement`] if `elem` is null, [`Error::OutOfRange`] if
    /// `index > len`.
    ///
    /// # Examples
    /// ```
    /// use view_list::{Elem, List};
    ///
    /// let list = List::new();
    /// list.insert(0, Elem::new("a")).unwrap();
    /// list.insert(1, Elem::new("b")).unwrap();
    /// assert_eq!(list.to_vec(), vec![Elem::new("a"), Elem::new("b")]);
    ///
    /// assert!(list.insert(3, Elem::new("c")).is_err());
    /// ```
    pub fn insert(&self, index: usize, elem: Elem) -> Result<()> {
        self.ensure_writable("insert")?;
        Self::require(&elem)?;
        insert_at(&self.node, index, elem)
    }

    /// Remove and return the element at `index`, shifting the tail left.
    ///
    /// The size of this view shrinks by one, and so does the size of every
    /// ancestor view whose range covers the removal point.
    ///
    /// # Errors
    ///
    /// [`Error::Unsupported`] through a read-only view,
    /// [`Error::OutOfRange`] if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// use view_list::{Elem, List};
    ///
    /// let list = List::of([1, 2, 3]);
    /// assert_eq!(list.remove(1).unwrap(), Elem::new(2));
    /// assert_eq!(list.to_vec(), vec![Elem::new(1), Elem::new(3)]);
    /// ```
    pub fn remove(&self, index: usize) -> Result<Elem> {
        self.ensure_writable("remove")?;
        remove_at(&self.node, index)
    }

    /// Remove every element visible through this view, as one removal over
    /// the whole range.
    ///
    /// Clearing a sublist removes exactly its range from the backing list:
    /// each ancestor shrinks by the cleared range's length, and elements
    /// outside the range keep their relative order.
    ///
    /// # Errors
    ///
    /// [`Error::Unsupported`] through a read-only view.
    ///
    /// # Examples
    /// ```
    /// use view_list::List;
    ///
    /// let list = List::of(0..10);
    /// let sub = list.sub_list(3, 8).unwrap();
    ///
    /// sub.clear().unwrap();
    /// assert_eq!(sub.len(), 0);
    /// assert_eq!(list.len(), 5);
    /// ```
    pub fn clear(&self) -> Result<()> {
        self.ensure_writable("clear")?;
        remove_range(&self.node, 0, self.len())
    }
}

// Views.
impl List {
    /// Create a live view over the local range `from..to`.
    ///
    /// The sublist holds no copy: reads and writes translate positions by
    /// the view's offset and delegate to this list. Structural changes made
    /// through the sublist are immediately visible here (and vice versa,
    /// for positions the sublist still covers). Sibling views created over
    /// the same parent do not track each other's structural changes; their
    /// windows may drift, which is documented behavior.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] unless `from <= to <= len`.
    ///
    /// # Examples
    /// ```
    /// use view_list::{Elem, List};
    ///
    /// let list = List::of(0..10);
    /// let sub = list.sub_list(3, 8).unwrap();
    /// assert_eq!(sub.len(), 5);
    /// assert_eq!(sub.get(0).unwrap(), Elem::new(3));
    ///
    /// sub.add(Elem::new(99)).unwrap();
    /// assert_eq!(list.get(8).unwrap(), Elem::new(99));
    /// assert_eq!(list.len(), 11);
    /// ```
    pub fn sub_list(&self, from: usize, to: usize) -> Result<List> {
        let len = self.len();
        if to > len {
            return Err(Error::OutOfRange { index: to, len });
        }
        if from > to {
            return Err(Error::OutOfRange { index: from, len: to });
        }
        Ok(List::from_node(Rc::new(RefCell::new(Repr::Sub {
            parent: self.node.clone(),
            lo: from,
            hi: to,
        }))))
    }

    /// Create a read-only view aliasing this one.
    ///
    /// Reads pass through; every mutation fails with
    /// [`Error::Unsupported`], before any bounds or null check. This is the
    /// restriction used by derived views such as the key/value collections
    /// of the map collaborators.
    ///
    /// # Examples
    /// ```
    /// use view_list::{Elem, Error, List};
    ///
    /// let list = List::of([1, 2, 3]);
    /// let frozen = list.read_only();
    ///
    /// assert_eq!(frozen.get(0).unwrap(), Elem::new(1));
    /// assert_eq!(frozen.add(Elem::new(4)), Err(Error::Unsupported("insert")));
    ///
    /// // The backing list stays writable, and the view sees its changes.
    /// list.add(Elem::new(4)).unwrap();
    /// assert_eq!(frozen.len(), 4);
    /// ```
    pub fn read_only(&self) -> List {
        if matches!(&*self.node.borrow(), Repr::Frozen(_)) {
            return self.clone();
        }
        List::from_node(Rc::new(RefCell::new(Repr::Frozen(self.node.clone()))))
    }
}

// Snapshots and traversal.
impl List {
    /// Snapshot the view's elements into a fresh `Vec`.
    ///
    /// The copy is shallow: elements are shared handles.
    pub fn to_vec(&self) -> Vec<Elem> {
        self.iter().collect()
    }

    /// Snapshot the view's elements, reusing `dst` when it is large enough.
    ///
    /// If `dst.len() >= self.len()`, positions `0..len` of `dst` are
    /// overwritten and, when `dst` is strictly longer, a single
    /// [`Elem::null`] terminator is written at position `len`; positions
    /// past the terminator keep their old contents. Otherwise `dst` is
    /// dropped and a fresh exact-size snapshot is returned.
    ///
    /// # Examples
    /// ```
    /// use view_list::{Elem, List};
    ///
    /// let list = List::of([1, 2]);
    /// let buf = vec![Elem::new(0); 4];
    ///
    /// let out = list.to_vec_with(buf);
    /// assert_eq!(out[0], Elem::new(1));
    /// assert_eq!(out[1], Elem::new(2));
    /// assert!(out[2].is_null());
    /// assert_eq!(out[3], Elem::new(0));
    /// ```
    pub fn to_vec_with(&self, mut dst: Vec<Elem>) -> Vec<Elem> {
        let len = self.len();
        if dst.len() < len {
            return self.to_vec();
        }
        for (slot, elem) in dst.iter_mut().zip(self.iter()) {
            *slot = elem;
        }
        if dst.len() > len {
            dst[len] = Elem::null();
        }
        dst
    }

    /// Provide a forward-only iterator over the view.
    ///
    /// The iterator is live: it reads through the view on every step rather
    /// than snapshotting, and also exposes [`Iter::remove`] for deleting the
    /// element it last yielded.
    pub fn iter(&self) -> Iter {
        Iter::new(self.clone())
    }

    /// Provide a bidirectional cursor positioned before the first element.
    ///
    /// See [`Cursor`] for the traversal and mutation protocol.
    pub fn cursor(&self) -> Cursor {
        Cursor::new(self.clone(), 0)
    }

    /// Provide a bidirectional cursor positioned before `start`.
    ///
    /// `start` ranges over `0..=len`; the cursor's first `next` returns the
    /// element at `start`, its first `previous` the element at `start - 1`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `start > len`.
    pub fn cursor_at(&self, start: usize) -> Result<Cursor> {
        let len = self.len();
        if start > len {
            return Err(Error::OutOfRange { index: start, len });
        }
        Ok(Cursor::new(self.clone(), start))
    }

    pub(crate) fn same_view(&self, other: &List) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }
}

/// Another handle to the same view. Cloning never copies elements.
impl Clone for List {
    fn clone(&self) -> Self {
        List {
            node: self.node.clone(),
        }
    }
}

impl Default for List {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for List {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quickcheck_macros::quickcheck;

    use crate::elem::Elem;
    use crate::error::Error;
    use crate::list::List;

    #[test]
    fn new_list_is_empty() {
        let list = List::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn add_appends_in_order() {
        let list = List::new();
        list.add(Elem::new("a")).unwrap();
        list.add(Elem::new("b")).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0).unwrap(), Elem::new("a"));
        assert_eq!(list.get(1).unwrap(), Elem::new("b"));
    }

    #[test]
    fn duplicates_are_allowed() {
        let list = List::new();
        list.add(Elem::new(1)).unwrap();
        list.add(Elem::new(1)).unwrap();
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn insert_shifts_the_tail() {
        let list = List::of([0, 1, 2, 3]);
        list.insert(2, Elem::new(9)).unwrap();
        assert_eq!(list.to_vec(), List::of([0, 1, 9, 2, 3]).to_vec());
    }

    #[test]
    fn insert_at_len_appends() {
        let list = List::of(0..5);
        list.insert(list.len(), Elem::new(5)).unwrap();
        assert_eq!(list.get(5).unwrap(), Elem::new(5));
    }

    #[test]
    fn insert_grows_len_by_one_and_lands_at_index() {
        let list = List::of(0..5);
        for at in 0..=list.len() {
            let before = list.len();
            let marker = Elem::new(100 + at as i32);
            list.insert(at, marker.clone()).unwrap();
            assert_eq!(list.len(), before + 1);
            assert_eq!(list.get(at).unwrap(), marker);
        }
    }

    #[test]
    fn insert_past_len_is_out_of_range() {
        let list = List::of(0..5);
        assert_eq!(
            list.insert(6, Elem::new(9)),
            Err(Error::OutOfRange { index: 6, len: 5 })
        );
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn get_and_remove_past_end_are_out_of_range() {
        let list = List::of(0..3);
        assert!(list.get(3).is_err());
        assert!(list.remove(3).is_err());
        assert_eq!(list.remove(5), Err(Error::OutOfRange { index: 5, len: 3 }));
    }

    #[test]
    fn null_is_rejected_everywhere() {
        let list = List::of([1]);
        assert_eq!(list.add(Elem::null()), Err(Error::NullElement));
        assert_eq!(list.insert(0, Elem::null()), Err(Error::NullElement));
        assert_eq!(list.set(0, Elem::null()), Err(Error::NullElement));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn set_returns_previous_without_resizing() {
        let list = List::of([1, 2, 3]);
        let old = list.set(2, Elem::new(9)).unwrap();
        assert_eq!(old, Elem::new(3));
        assert_eq!(list.len(), 3);
        assert_eq!(list.get(2).unwrap(), Elem::new(9));
    }

    #[test]
    fn remove_shifts_left() {
        let list = List::of([0, 1, 2, 3]);
        assert_eq!(list.remove(1).unwrap(), Elem::new(1));
        assert_eq!(
            list.to_vec(),
            vec![Elem::new(0), Elem::new(2), Elem::new(3)]
        );
    }

    #[test]
    fn clear_empties_the_list() {
        let list = List::of(0..6);
        list.clear().unwrap();
        assert!(list.is_empty());
        list.add(Elem::new(1)).unwrap();
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn sublist_reads_through_the_parent() {
        let list = List::of(0..10);
        let sub = list.sub_list(3, 8).unwrap();
        assert_eq!(sub.len(), 5);
        for i in 0..5 {
            assert_eq!(sub.get(i).unwrap(), Elem::new(3 + i as i32));
        }
        assert!(sub.get(5).is_err());
    }

    #[test]
    fn sublist_insert_propagates_to_the_root() {
        let list = List::of(0..10);
        let sub = list.sub_list(3, 8).unwrap();

        let marker = Elem::new(99);
        sub.insert(0, marker.clone()).unwrap();

        assert_eq!(sub.len(), 6);
        assert_eq!(list.len(), 11);
        assert_eq!(list.get(3).unwrap(), marker);
        assert_eq!(sub.get(0).unwrap(), marker);
    }

    #[test]
    fn sublist_append_lands_at_its_upper_boundary() {
        let list = List::of(0..10);
        let sub = list.sub_list(3, 8).unwrap();

        let marker = Elem::new(99);
        sub.add(marker.clone()).unwrap();

        assert_eq!(list.len(), 11);
        assert_eq!(list.get(8).unwrap(), marker);
        assert_eq!(sub.get(5).unwrap(), marker);
    }

    #[test]
    fn nested_sublist_adjusts_every_ancestor() {
        let list = List::of(0..10);
        let sub = list.sub_list(2, 9).unwrap();
        let inner = sub.sub_list(1, 4).unwrap();
        assert_eq!(inner.to_vec(), List::of(3..6).to_vec());

        inner.insert(1, Elem::new(42)).unwrap();

        assert_eq!(inner.len(), 4);
        assert_eq!(sub.len(), 8);
        assert_eq!(list.len(), 11);
        assert_eq!(list.get(4).unwrap(), Elem::new(42));

        inner.remove(1).unwrap();
        assert_eq!(inner.len(), 3);
        assert_eq!(sub.len(), 7);
        assert_eq!(list.len(), 10);
    }

    #[test]
    fn sublist_clear_removes_exactly_its_range() {
        let list = List::of(0..10);
        let sub = list.sub_list(3, 8).unwrap();

        sub.clear().unwrap();

        assert_eq!(sub.len(), 0);
        assert_eq!(list.len(), 5);
        assert_eq!(
            list.to_vec(),
            vec![
                Elem::new(0),
                Elem::new(1),
                Elem::new(2),
                Elem::new(8),
                Elem::new(9),
            ]
        );
    }

    #[test]
    fn sibling_views_do_not_track_each_other() {
        let list = List::of(0..10);
        let left = list.sub_list(0, 4).unwrap();
        let right = list.sub_list(6, 10).unwrap();

        right.add(Elem::new(99)).unwrap();

        // The sibling keeps its window; the root grew.
        assert_eq!(left.len(), 4);
        assert_eq!(right.len(), 5);
        assert_eq!(list.len(), 11);
        assert_eq!(left.get(0).unwrap(), Elem::new(0));
    }

    #[test]
    fn empty_sublist_is_valid() {
        let list = List::of(0..4);
        let sub = list.sub_list(2, 2).unwrap();
        assert!(sub.is_empty());

        sub.add(Elem::new(9)).unwrap();
        assert_eq!(sub.len(), 1);
        assert_eq!(list.get(2).unwrap(), Elem::new(9));
    }

    #[test]
    fn sublist_bounds_are_checked() {
        let list = List::of(0..4);
        assert!(list.sub_list(0, 5).is_err());
        assert!(list.sub_list(3, 2).is_err());
        assert!(list.sub_list(4, 4).is_ok());
    }

    #[test]
    fn mutation_through_the_parent_is_visible_in_the_view() {
        let list = List::of(0..6);
        let sub = list.sub_list(1, 4).unwrap();
        assert_eq!(sub.get(0).unwrap(), Elem::new(1));

        list.set(1, Elem::new(77)).unwrap();
        assert_eq!(sub.get(0).unwrap(), Elem::new(77));
    }

    #[test]
    fn read_only_view_refuses_every_mutation() {
        let list = List::of([1, 2, 3]);
        let frozen = list.read_only();

        assert_eq!(frozen.add(Elem::new(4)), Err(Error::Unsupported("insert")));
        assert_eq!(
            frozen.insert(0, Elem::new(4)),
            Err(Error::Unsupported("insert"))
        );
        assert_eq!(frozen.set(0, Elem::new(4)), Err(Error::Unsupported("set")));
        assert_eq!(frozen.remove(0), Err(Error::Unsupported("remove")));
        assert_eq!(frozen.clear(), Err(Error::Unsupported("clear")));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn read_only_refusal_precedes_other_checks() {
        let frozen = List::of([1]).read_only();
        // A null element and a bad index would each fail on a writable
        // view; the read-only refusal wins.
        assert_eq!(
            frozen.insert(9, Elem::null()),
            Err(Error::Unsupported("insert"))
        );
    }

    #[test]
    fn sublist_of_read_only_view_is_read_only() {
        let list = List::of(0..6);
        let sub = list.read_only().sub_list(1, 4).unwrap();
        assert_eq!(sub.get(0).unwrap(), Elem::new(1));
        assert_eq!(sub.add(Elem::new(9)), Err(Error::Unsupported("insert")));
    }

    #[test]
    fn to_vec_snapshots() {
        let list = List::of([1, 2]);
        let snapshot = list.to_vec();
        list.add(Elem::new(3)).unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn to_vec_with_reuses_a_large_buffer() {
        let list = List::of([1, 2]);
        let out = list.to_vec_with(vec![Elem::new(7); 5]);
        assert_eq!(out.len(), 5);
        assert_eq!(out[0], Elem::new(1));
        assert_eq!(out[1], Elem::new(2));
        assert!(out[2].is_null());
        assert_eq!(out[3], Elem::new(7));
        assert_eq!(out[4], Elem::new(7));
    }

    #[test]
    fn to_vec_with_exact_buffer_has_no_terminator() {
        let list = List::of([1, 2]);
        let out = list.to_vec_with(vec![Elem::new(7); 2]);
        assert_eq!(out, vec![Elem::new(1), Elem::new(2)]);
    }

    #[test]
    fn to_vec_with_small_buffer_allocates() {
        let list = List::of([1, 2, 3]);
        let out = list.to_vec_with(Vec::new());
        assert_eq!(out.len(), 3);
        assert_eq!(out[2], Elem::new(3));
    }

    #[test]
    fn handles_alias_the_same_view() {
        let list = List::of([1]);
        let alias = list.clone();
        alias.add(Elem::new(2)).unwrap();
        assert_eq!(list.len(), 2);
    }

    #[quickcheck]
    fn model_matches_vec(ops: Vec<(u8, u8)>) -> bool {
        let list = List::new();
        let mut model: Vec<i32> = Vec::new();
        for (op, raw) in ops {
            let value = raw as i32;
            match op % 4 {
                0 => {
                    model.push(value);
                    list.add(Elem::new(value)).unwrap();
                }
                1 => {
                    let at = raw as usize % (model.len() + 1);
                    model.insert(at, value);
                    list.insert(at, Elem::new(value)).unwrap();
                }
                2 if !model.is_empty() => {
                    let at = raw as usize % model.len();
                    model.remove(at);
                    list.remove(at).unwrap();
                }
                3 if !model.is_empty() => {
                    let at = raw as usize % model.len();
                    model[at] = value;
                    list.set(at, Elem::new(value)).unwrap();
                }
                _ => {}
            }
        }
        list.len() == model.len()
            && model
                .iter()
                .enumerate()
                .all(|(i, v)| list.get(i).unwrap() == Elem::new(*v))
    }
}
