use std::hash::{Hash, Hasher};

use crate::elem::Elem;
use crate::error::Result;
use crate::list::List;

/// The capability this crate consumes from a collaborating collection.
///
/// The set and map adapters built on top of this list expose their key,
/// value and entry collections through this seam; [`List`] implements it
/// too, so lists compose with themselves. Only the read side is consumed
/// here: `size`, membership and a pass over the elements.
pub trait Collection {
    /// Number of elements.
    fn size(&self) -> usize;

    /// Whether a value-equal element is present.
    ///
    /// Rejects the null element like every other query point.
    fn contains(&self, elem: &Elem) -> Result<bool>;

    /// A pass over the elements in the collection's iteration order.
    fn iterate(&self) -> Box<dyn Iterator<Item = Elem> + '_>;
}

impl Collection for List {
    fn size(&self) -> usize {
        self.len()
    }

    fn contains(&self, elem: &Elem) -> Result<bool> {
        List::contains(self, elem)
    }

    fn iterate(&self) -> Box<dyn Iterator<Item = Elem> + '_> {
        Box::new(self.iter())
    }
}

// Searching.
impl List {
    /// The position of the first element value-equal to `elem`, or `None`.
    ///
    /// # Errors
    ///
    /// [`Error::NullElement`](crate::Error::NullElement) if `elem` is null.
    ///
    /// # Examples
    /// ```
    /// use view_list::{Elem, List};
    ///
    /// let list = List::of([1, 2, 1]);
    /// assert_eq!(list.index_of(&Elem::new(1)).unwrap(), Some(0));
    /// assert_eq!(list.index_of(&Elem::new(3)).unwrap(), None);
    /// ```
    pub fn index_of(&self, elem: &Elem) -> Result<Option<usize>> {
        Self::require(elem)?;
        Ok(self.iter().position(|e| e == *elem))
    }

    /// The position of the last element value-equal to `elem`, or `None`.
    ///
    /// # Errors
    ///
    /// [`Error::NullElement`](crate::Error::NullElement) if `elem` is null.
    pub fn last_index_of(&self, elem: &Elem) -> Result<Option<usize>> {
        Self::require(elem)?;
        let mut found = None;
        for (at, e) in self.iter().enumerate() {
            if e == *elem {
                found = Some(at);
            }
        }
        Ok(found)
    }

    /// Whether some element is value-equal to `elem`.
    ///
    /// An element of a different runtime type is simply not equal; it never
    /// raises an error.
    ///
    /// # Errors
    ///
    /// [`Error::NullElement`](crate::Error::NullElement) if `elem` is null.
    pub fn contains(&self, elem: &Elem) -> Result<bool> {
        Ok(self.index_of(elem)?.is_some())
    }

    /// Whether every element of `c` is contained here.
    pub fn contains_all(&self, c: &dyn Collection) -> Result<bool> {
        for elem in c.iterate() {
            if !self.contains(&elem)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

// Bulk mutation, built on the cursor and the positional primitives.
impl List {
    /// Append every element of `c`, in `c`'s iteration order.
    ///
    /// Returns `Ok(false)`, mutating nothing, when `c` is empty.
    ///
    /// Not atomic: an error raised part-way (a null element in `c`) leaves
    /// the elements already appended in place.
    ///
    /// # Errors
    ///
    /// [`Error::Unsupported`](crate::Error::Unsupported) through a
    /// read-only view.
    ///
    /// # Examples
    /// ```
    /// use view_list::List;
    ///
    /// let list = List::of([1]);
    /// let more = List::of([2, 3]);
    /// assert!(list.add_all(&more).unwrap());
    /// assert_eq!(list.to_vec(), List::of(1..4).to_vec());
    ///
    /// assert!(!list.add_all(&List::new()).unwrap());
    /// ```
    pub fn add_all(&self, c: &dyn Collection) -> Result<bool> {
        self.ensure_writable("add_all")?;
        let elems: Vec<Elem> = c.iterate().collect();
        if elems.is_empty() {
            return Ok(false);
        }
        for elem in elems {
            self.add(elem)?;
        }
        Ok(true)
    }

    /// Insert every element of `c` starting at `index`, in `c`'s iteration
    /// order.
    ///
    /// Returns `Ok(false)`, mutating nothing, when `c` is empty. Not
    /// atomic, like [`add_all`](List::add_all).
    ///
    /// # Errors
    ///
    /// [`Error::Unsupported`](crate::Error::Unsupported) through a
    /// read-only view, [`Error::OutOfRange`](crate::Error::OutOfRange) if
    /// `index > len`.
    ///
    /// # Examples
    /// ```
    /// use view_list::List;
    ///
    /// let list = List::of([1, 4]);
    /// list.insert_all(1, &List::of([2, 3])).unwrap();
    /// assert_eq!(list.to_vec(), List::of(1..5).to_vec());
    /// ```
    pub fn insert_all(&self, index: usize, c: &dyn Collection) -> Result<bool> {
        self.ensure_writable("insert_all")?;
        let mut cursor = self.cursor_at(index)?;
        let elems: Vec<Elem> = c.iterate().collect();
        if elems.is_empty() {
            return Ok(false);
        }
        for elem in elems {
            cursor.add(elem)?;
        }
        Ok(true)
    }

    /// Remove the first element value-equal to `elem`.
    ///
    /// Later duplicates, if any, remain. Returns whether a removal
    /// happened.
    ///
    /// # Errors
    ///
    /// [`Error::Unsupported`](crate::Error::Unsupported) through a
    /// read-only view, [`Error::NullElement`](crate::Error::NullElement)
    /// if `elem` is null.
    ///
    /// # Examples
    /// ```
    /// use view_list::{Elem, List};
    ///
    /// let list = List::of([1, 2, 1]);
    /// assert!(list.remove_item(&Elem::new(1)).unwrap());
    /// assert_eq!(list.to_vec(), vec![Elem::new(2), Elem::new(1)]);
    /// assert!(!list.remove_item(&Elem::new(3)).unwrap());
    /// ```
    pub fn remove_item(&self, elem: &Elem) -> Result<bool> {
        self.ensure_writable("remove_item")?;
        match self.index_of(elem)? {
            Some(at) => {
                self.remove(at)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove every element value-equal to some element of `c`.
    ///
    /// Returns whether anything was removed. Not atomic.
    ///
    /// # Errors
    ///
    /// [`Error::Unsupported`](crate::Error::Unsupported) through a
    /// read-only view.
    pub fn remove_all(&self, c: &dyn Collection) -> Result<bool> {
        self.ensure_writable("remove_all")?;
        let mut cursor = self.cursor();
        let mut modified = false;
        while cursor.has_next() {
            let elem = cursor.next()?;
            if c.contains(&elem)? {
                cursor.remove()?;
                modified = true;
            }
        }
        Ok(modified)
    }

    /// Remove every element *not* value-equal to some element of `c`.
    ///
    /// Returns whether anything was removed. Not atomic.
    ///
    /// # Errors
    ///
    /// [`Error::Unsupported`](crate::Error::Unsupported) through a
    /// read-only view.
    ///
    /// # Examples
    /// ```
    /// use view_list::List;
    ///
    /// let list = List::of(0..6);
    /// let keep = List::of([1, 3, 5]);
    /// assert!(list.retain_all(&keep).unwrap());
    /// assert_eq!(list.to_vec(), keep.to_vec());
    /// ```
    pub fn retain_all(&self, c: &dyn Collection) -> Result<bool> {
        self.ensure_writable("retain_all")?;
        let mut cursor = self.cursor();
        let mut modified = false;
        while cursor.has_next() {
            let elem = cursor.next()?;
            if !c.contains(&elem)? {
                cursor.remove()?;
                modified = true;
            }
        }
        Ok(modified)
    }
}

// Whole-list equality and hashing.
impl List {
    /// The order-sensitive content hash: `31 * acc + element_hash` over the
    /// elements in order, wrapping, starting from 1.
    ///
    /// Lists that compare equal hash identically, regardless of which view
    /// chain produced them.
    ///
    /// # Examples
    /// ```
    /// use view_list::List;
    ///
    /// let a = List::of([1, 2, 3]);
    /// let b = a.sub_list(0, 3).unwrap();
    /// assert_eq!(a.content_hash(), b.content_hash());
    /// assert_ne!(a.content_hash(), List::of([3, 2, 1]).content_hash());
    /// ```
    pub fn content_hash(&self) -> u64 {
        self.iter()
            .fold(1_u64, |acc, elem| {
                acc.wrapping_mul(31).wrapping_add(elem.raw_hash())
            })
    }
}

/// Content equality: same size and pairwise-equal elements in order.
///
/// Two handles to the same view are equal without an element walk.
impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        if self.same_view(other) {
            return true;
        }
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for List {}

impl Hash for List {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.content_hash());
    }
}
