//! Emptiness capability for content types.
//!
//! Lets a binder tell "loaded, but nothing to show" apart from "nothing loaded
//! yet". Only used for presentation; the state machine itself never looks at it.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};

/// A type with a canonical empty value.
pub trait Emptiable {
    /// The empty representation of the type.
    fn empty() -> Self;

    /// Whether this value is semantically empty.
    ///
    /// Types with `PartialEq` can delegate to [`is_empty_by_eq`].
    fn is_empty(&self) -> bool;
}

/// Emptiness as equality with [`Emptiable::empty`].
pub fn is_empty_by_eq<T: Emptiable + PartialEq>(value: &T) -> bool {
    *value == T::empty()
}

impl<T> Emptiable for Vec<T> {
    fn empty() -> Self {
        Vec::new()
    }

    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
}

impl<T> Emptiable for VecDeque<T> {
    fn empty() -> Self {
        VecDeque::new()
    }

    fn is_empty(&self) -> bool {
        VecDeque::is_empty(self)
    }
}

impl Emptiable for String {
    fn empty() -> Self {
        String::new()
    }

    fn is_empty(&self) -> bool {
        String::is_empty(self)
    }
}

impl<K, V, S: BuildHasher + Default> Emptiable for HashMap<K, V, S> {
    fn empty() -> Self {
        HashMap::default()
    }

    fn is_empty(&self) -> bool {
        HashMap::is_empty(self)
    }
}

impl<T: Eq + Hash, S: BuildHasher + Default> Emptiable for HashSet<T, S> {
    fn empty() -> Self {
        HashSet::default()
    }

    fn is_empty(&self) -> bool {
        HashSet::is_empty(self)
    }
}

impl<K, V> Emptiable for BTreeMap<K, V> {
    fn empty() -> Self {
        BTreeMap::new()
    }

    fn is_empty(&self) -> bool {
        BTreeMap::is_empty(self)
    }
}

impl<T> Emptiable for BTreeSet<T> {
    fn empty() -> Self {
        BTreeSet::new()
    }

    fn is_empty(&self) -> bool {
        BTreeSet::is_empty(self)
    }
}
