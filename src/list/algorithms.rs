use crate::list::{CircularList, Elements};
use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

impl<T: Debug> Debug for CircularList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(Elements::new(self)).finish()
    }
}

impl<T: PartialEq> PartialEq for CircularList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && Elements::new(self).eq(Elements::new(other))
    }
}

impl<T: Eq> Eq for CircularList<T> {}

impl<T: Hash> Hash for CircularList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Elements::new(self).for_each(|elt| elt.hash(state));
        self.len().hash(state);
    }
}

/// Clones the elements in list order into a compact arena, without the
/// vacant slots of `self`.
impl<T: Clone> Clone for CircularList<T> {
    fn clone(&self) -> Self {
        let mut list = CircularList::with_capacity(self.len());
        list.extend(Elements::new(self).cloned());
        list
    }
}

impl<T> FromIterator<T> for CircularList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for CircularList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|elt| {
            self.append_last(elt);
        });
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for CircularList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}
