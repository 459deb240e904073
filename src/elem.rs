use std::any::Any;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// The capability an element type must provide: identity-free equality and
/// hashing that work across a dynamically typed collection.
///
/// There is a blanket implementation for every `'static` type that is
/// `Eq + Hash + Debug`, so this trait is never implemented by hand.
/// Comparing elements of two different runtime types is not an error; they
/// are simply not equal.
pub trait Element: Any + Debug {
    fn as_any(&self) -> &dyn Any;
    fn dyn_eq(&self, other: &dyn Element) -> bool;
    fn dyn_hash(&self, state: &mut dyn Hasher);
}

impl<T: Any + Eq + Hash + Debug> Element for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn Element) -> bool {
        match other.as_any().downcast_ref::<T>() {
            Some(other) => self == other,
            None => false,
        }
    }

    fn dyn_hash(&self, mut state: &mut dyn Hasher) {
        self.hash(&mut state)
    }
}

/// The null element. Never stored in a list; see [`Elem::null`].
#[derive(PartialEq, Eq, Hash)]
struct Null;

impl Debug for Null {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("null")
    }
}

/// A dynamically typed list element with shared ownership.
///
/// An `Elem` is a cheap-to-clone handle; cloning never copies the underlying
/// value. Equality and hashing are dynamic: two elements are equal iff they
/// hold the same runtime type and equal values.
///
/// # Examples
///
/// ```
/// use view_list::Elem;
///
/// let a = Elem::new(42);
/// let b = Elem::new(42);
/// let c = Elem::new("42");
///
/// assert_eq!(a, b);
/// assert_ne!(a, c); // different runtime types are never equal
/// assert_eq!(a.downcast_ref::<i32>(), Some(&42));
/// ```
#[derive(Clone)]
pub struct Elem(Rc<dyn Element>);

impl Elem {
    /// Wrap a value as a list element.
    pub fn new<T: Element>(value: T) -> Self {
        Elem(Rc::new(value))
    }

    /// The distinguished null element.
    ///
    /// Lists reject it at every insertion and query point with
    /// [`Error::NullElement`](crate::Error::NullElement); it only appears as
    /// the terminator written by
    /// [`List::to_vec_with`](crate::List::to_vec_with).
    pub fn null() -> Self {
        Elem(Rc::new(Null))
    }

    /// Returns `true` if this is the null element.
    pub fn is_null(&self) -> bool {
        self.0.as_any().is::<Null>()
    }

    /// Borrow the underlying value if it has type `T`.
    pub fn downcast_ref<T: Element>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref()
    }

    /// The element's hash as a plain number, used by the list's
    /// order-sensitive content hash.
    pub(crate) fn raw_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.0.dyn_hash(&mut hasher);
        hasher.finish()
    }
}

impl PartialEq for Elem {
    fn eq(&self, other: &Self) -> bool {
        self.0.dyn_eq(other.0.as_ref())
    }
}

impl Eq for Elem {}

impl Hash for Elem {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.raw_hash());
    }
}

impl Debug for Elem {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
