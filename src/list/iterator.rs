use std::iter::FromIterator;

use crate::elem::Elem;
use crate::error::Result;
use crate::list::cursor::Cursor;
use crate::list::List;

/// A forward-only iterator over a [`List`] view.
///
/// `Iter` is a thin adapter over a [`Cursor`] driven in one direction. It is
/// live, not a snapshot: every step reads through the view, so it observes
/// concurrent mutations of the list the same way its cursor would. For that
/// reason it is deliberately **not** a [`FusedIterator`]: after returning
/// `None` it can yield again if the view has grown.
///
/// Beyond the standard [`Iterator`] protocol it keeps the platform
/// iterator's [`remove`], which deletes the element most recently yielded.
///
/// # Examples
///
/// ```
/// use view_list::List;
///
/// let list = List::of([1, 2, 3]);
/// let doubled: Vec<i32> = list
///     .iter()
///     .map(|e| e.downcast_ref::<i32>().copied().unwrap() * 2)
///     .collect();
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
///
/// [`FusedIterator`]: std::iter::FusedIterator
/// [`remove`]: Iter::remove
#[derive(Debug)]
pub struct Iter {
    cursor: Cursor,
}

impl Iter {
    pub(crate) fn new(view: List) -> Self {
        Iter {
            cursor: view.cursor(),
        }
    }

    /// Returns `true` if another element is available.
    pub fn has_next(&self) -> bool {
        self.cursor.has_next()
    }

    /// Remove the element most recently yielded.
    ///
    /// # Errors
    ///
    /// [`Error::NoLastReturned`](crate::Error::NoLastReturned) if nothing
    /// has been yielded since the last removal;
    /// [`Error::Unsupported`](crate::Error::Unsupported) through a
    /// read-only view.
    ///
    /// # Examples
    /// ```
    /// use view_list::{Elem, List};
    ///
    /// let list = List::of(0..6);
    /// let mut iter = list.iter();
    /// while let Some(elem) = iter.next() {
    ///     if elem.downcast_ref::<i32>().unwrap() % 2 == 1 {
    ///         iter.remove().unwrap();
    ///     }
    /// }
    /// assert_eq!(list.to_vec(), vec![Elem::new(0), Elem::new(2), Elem::new(4)]);
    /// ```
    pub fn remove(&mut self) -> Result<()> {
        self.cursor.remove()
    }
}

impl Iterator for Iter {
    type Item = Elem;

    fn next(&mut self) -> Option<Elem> {
        self.cursor.next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .cursor
            .view()
            .len()
            .saturating_sub(self.cursor.next_index());
        (remaining, Some(remaining))
    }
}

impl IntoIterator for &List {
    type Item = Elem;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Collect elements into a fresh root list.
///
/// # Panics
///
/// Panics if an element is the null element.
impl FromIterator<Elem> for List {
    fn from_iter<I: IntoIterator<Item = Elem>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

/// Append elements to the end of the view.
///
/// # Panics
///
/// Panics if an element is the null element or the view is read-only; use
/// [`List::add`] to handle those as errors.
impl Extend<Elem> for List {
    fn extend<I: IntoIterator<Item = Elem>>(&mut self, iter: I) {
        for elem in iter {
            self.add(elem).expect("cannot extend list");
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::elem::Elem;
    use crate::list::List;

    #[test]
    fn collects_in_order() {
        let list = List::of([1, 2, 3]);
        let collected: Vec<Elem> = list.iter().collect();
        assert_eq!(collected, vec![Elem::new(1), Elem::new(2), Elem::new(3)]);
    }

    #[test]
    fn empty_list_yields_nothing() {
        let list = List::new();
        assert_eq!(list.iter().next(), None);
    }

    #[test]
    fn for_loop_over_a_reference() {
        let list = List::of(0..4);
        let mut seen = Vec::new();
        for elem in &list {
            seen.push(elem);
        }
        assert_eq!(seen, list.to_vec());
    }

    #[test]
    fn size_hint_tracks_progress() {
        let list = List::of(0..3);
        let mut iter = list.iter();
        assert_eq!(iter.size_hint(), (3, Some(3)));
        iter.next();
        assert_eq!(iter.size_hint(), (2, Some(2)));
    }

    #[test]
    fn remove_deletes_the_yielded_element() {
        let list = List::of(0..5);
        let mut iter = list.iter();
        iter.next().unwrap();
        iter.remove().unwrap();
        assert_eq!(list.len(), 4);
        assert_eq!(list.get(0).unwrap(), Elem::new(1));
    }

    #[test]
    fn remove_before_any_yield_is_illegal() {
        let list = List::of(0..5);
        let mut iter = list.iter();
        assert!(iter.remove().is_err());
    }

    #[test]
    fn from_iterator_round_trips() {
        let list = List::of(0..4);
        let copy: List = list.iter().collect();
        assert_eq!(copy, list);
    }

    #[test]
    fn extend_appends() {
        let mut list = List::of([1]);
        list.extend([Elem::new(2), Elem::new(3)]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.get(2).unwrap(), Elem::new(3));
    }

    #[test]
    fn live_iterator_sees_growth() {
        let list = List::of([1]);
        let mut iter = list.iter();
        iter.next().unwrap();
        assert_eq!(iter.next(), None);

        list.add(Elem::new(2)).unwrap();
        assert_eq!(iter.next(), Some(Elem::new(2)));
    }
}
