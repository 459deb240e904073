use crate::elem::Elem;
use crate::error::{Error, Result};
use crate::list::List;

/// Which call produced the element the cursor most recently yielded.
///
/// `remove` and `set` act on that element; `None` makes them illegal, so the
/// invalid combinations are unrepresentable.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum LastReturned {
    None,
    Forward,
    Backward,
}

/// A bidirectional cursor over a [`List`] view.
///
/// A `Cursor` sits *between* elements: in a view of length *n* there are
/// *n* + 1 positions, indexed 0 to *n*. [`next`] yields the element after
/// the position and advances; [`previous`] yields the element before it and
/// retreats. [`remove`] and [`set`] act on the most recently yielded
/// element and are only legal while one is pending; [`add`] (and a
/// completed `remove`) resets that pending state, forcing the caller to
/// re-synchronize through the cursor itself.
///
/// The cursor holds a handle to its view, not a borrow, so the view stays
/// usable while the cursor lives. There is no modification counter:
/// structural edits made through a different cursor or through direct list
/// calls are not detected. They become visible on this cursor's next
/// positional access, and this cursor's position is **not** auto-adjusted.
///
/// # Examples
///
/// ```
/// use view_list::{Elem, List};
///
/// let list = List::of(['a', 'b', 'c']);
/// let mut cursor = list.cursor();
///
/// assert_eq!(cursor.next_index(), 0);
/// assert_eq!(cursor.next().unwrap(), Elem::new('a'));
///
/// cursor.set(Elem::new('z')).unwrap(); // overwrite the element just yielded
/// assert_eq!(list.get(0).unwrap(), Elem::new('z'));
///
/// assert_eq!(cursor.next().unwrap(), Elem::new('b'));
/// cursor.remove().unwrap(); // delete the element just yielded
/// assert_eq!(list.len(), 2);
///
/// assert_eq!(cursor.previous().unwrap(), Elem::new('z'));
/// ```
///
/// [`next`]: Cursor::next
/// [`previous`]: Cursor::previous
/// [`remove`]: Cursor::remove
/// [`set`]: Cursor::set
/// [`add`]: Cursor::add
#[derive(Debug)]
pub struct Cursor {
    view: List,
    p: usize,
    last: LastReturned,
}

impl Cursor {
    pub(crate) fn new(view: List, start: usize) -> Self {
        Cursor {
            view,
            p: start,
            last: LastReturned::None,
        }
    }

    /// The view this cursor traverses.
    pub fn view(&self) -> &List {
        &self.view
    }

    /// Returns `true` if a forward step has an element to yield.
    pub fn has_next(&self) -> bool {
        self.p < self.view.len()
    }

    /// Returns `true` if a backward step has an element to yield.
    pub fn has_previous(&self) -> bool {
        self.p > 0
    }

    /// The position of the element a `next` call would yield.
    ///
    /// Equal to `len` when the cursor is at the end.
    pub fn next_index(&self) -> usize {
        self.p
    }

    /// The position of the element a `previous` call would yield, or `-1`
    /// when the cursor is at the start.
    pub fn previous_index(&self) -> isize {
        self.p as isize - 1
    }

    /// Yield the element after the cursor and advance past it.
    ///
    /// # Errors
    ///
    /// [`Error::Exhausted`] at the end of the view. The cursor does not
    /// move on failure.
    ///
    /// # Examples
    /// ```
    /// use view_list::{Elem, List};
    ///
    /// let list = List::of([1, 2]);
    /// let mut cursor = list.cursor();
    /// assert_eq!(cursor.next().unwrap(), Elem::new(1));
    /// assert_eq!(cursor.next().unwrap(), Elem::new(2));
    /// assert!(cursor.next().is_err());
    /// ```
    pub fn next(&mut self) -> Result<Elem> {
        if self.p >= self.view.len() {
            return Err(Error::Exhausted);
        }
        let elem = self.view.get(self.p)?;
        self.last = LastReturned::Forward;
        self.p += 1;
        Ok(elem)
    }

    /// Yield the element before the cursor and retreat before it.
    ///
    /// # Errors
    ///
    /// [`Error::Exhausted`] at the start of the view. The cursor does not
    /// move on failure.
    ///
    /// # Examples
    /// ```
    /// use view_list::{Elem, List};
    ///
    /// let list = List::of([1, 2]);
    /// let mut cursor = list.cursor_at(2).unwrap();
    /// assert_eq!(cursor.previous().unwrap(), Elem::new(2));
    /// assert_eq!(cursor.previous().unwrap(), Elem::new(1));
    /// assert!(cursor.previous().is_err());
    /// ```
    pub fn previous(&mut self) -> Result<Elem> {
        if self.p == 0 {
            return Err(Error::Exhausted);
        }
        let elem = self.view.get(self.p - 1)?;
        self.p -= 1;
        self.last = LastReturned::Backward;
        Ok(elem)
    }

    /// Insert an element at the cursor position and advance past it.
    ///
    /// The element lands between the cursor's neighbors: a following
    /// `previous` yields exactly the element just added, while the element
    /// that was next before the insertion stays next. Resets the pending
    /// element, so `remove`/`set` become illegal until the next yield.
    ///
    /// # Errors
    ///
    /// [`Error::Unsupported`] through a read-only view,
    /// [`Error::NullElement`] if `elem` is null. The cursor does not move
    /// on failure.
    ///
    /// # Examples
    /// ```
    /// use view_list::{Elem, List};
    ///
    /// let list = List::new();
    /// let mut cursor = list.cursor();
    ///
    /// cursor.add(Elem::new('x')).unwrap();
    /// assert_eq!(cursor.previous_index(), 0);
    /// assert_eq!(cursor.previous().unwrap(), Elem::new('x'));
    /// assert_eq!(cursor.previous_index(), -1);
    /// assert_eq!(cursor.next().unwrap(), Elem::new('x'));
    /// ```
    pub fn add(&mut self, elem: Elem) -> Result<()> {
        self.view.insert(self.p, elem)?;
        self.p += 1;
        self.last = LastReturned::None;
        Ok(())
    }

    /// Remove the element most recently yielded by `next` or `previous`.
    ///
    /// After a forward yield the cursor steps back onto the gap the element
    /// left; after a backward yield it is already there. Either way the
    /// pending element is consumed: a second `remove` (or a `set`) is
    /// illegal until the next yield.
    ///
    /// # Errors
    ///
    /// [`Error::NoLastReturned`] if nothing is pending (before the first
    /// yield, after a previous `remove`, or after an `add`);
    /// [`Error::Unsupported`] through a read-only view.
    ///
    /// # Examples
    /// ```
    /// use view_list::{Elem, List};
    ///
    /// let list = List::of([1, 2, 3]);
    /// let mut cursor = list.cursor();
    ///
    /// cursor.next().unwrap();
    /// cursor.remove().unwrap();
    /// assert_eq!(list.to_vec(), vec![Elem::new(2), Elem::new(3)]);
    ///
    /// assert!(cursor.remove().is_err()); // nothing pending any more
    /// ```
    pub fn remove(&mut self) -> Result<()> {
        let at = match self.last {
            LastReturned::None => return Err(Error::NoLastReturned),
            LastReturned::Forward => self.p - 1,
            LastReturned::Backward => self.p,
        };
        self.view.remove(at)?;
        if self.last == LastReturned::Forward {
            self.p -= 1;
        }
        self.last = LastReturned::None;
        Ok(())
    }

    /// Overwrite the element most recently yielded by `next` or `previous`.
    ///
    /// Neither the cursor position nor the pending element changes, so
    /// `set` may be repeated and may be followed by `remove`.
    ///
    /// # Errors
    ///
    /// [`Error::NoLastReturned`] if nothing is pending,
    /// [`Error::NullElement`] if `elem` is null, [`Error::Unsupported`]
    /// through a read-only view.
    ///
    /// # Examples
    /// ```
    /// use view_list::{Elem, List};
    ///
    /// let list = List::of(["a", "b"]);
    /// let mut cursor = list.cursor();
    ///
    /// cursor.next().unwrap();
    /// cursor.set(Elem::new("z")).unwrap();
    /// assert_eq!(list.get(0).unwrap(), Elem::new("z"));
    /// ```
    pub fn set(&mut self, elem: Elem) -> Result<()> {
        let at = match self.last {
            LastReturned::None => return Err(Error::NoLastReturned),
            LastReturned::Forward => self.p - 1,
            LastReturned::Backward => self.p,
        };
        self.view.set(at, elem)?;
        Ok(())
    }
}
