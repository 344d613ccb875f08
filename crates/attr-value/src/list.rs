//! [`AttrList`] — ordered, index-addressed container.

use std::ops::Index;

use crate::Attr;

/// An ordered sequence of [`Attr`] nodes.
///
/// Index-taking mutators report out-of-range positions through their return
/// value instead of panicking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AttrList {
    items: Vec<Attr>,
}

impl AttrList {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Attr> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Attr> {
        self.items.get_mut(index)
    }

    /// Overwrites the element at `index`. Returns `false` when out of range.
    pub fn set(&mut self, index: usize, value: impl Into<Attr>) -> bool {
        match self.items.get_mut(index) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Inserts before `index`; `index == len()` appends.
    ///
    /// Returns `false` and leaves the list untouched when `index > len()`.
    pub fn insert(&mut self, index: usize, value: impl Into<Attr>) -> bool {
        if index > self.items.len() {
            return false;
        }
        self.items.insert(index, value.into());
        true
    }

    /// Removes and returns the element at `index`, shifting later elements
    /// down by one.
    pub fn remove_at(&mut self, index: usize) -> Option<Attr> {
        if index >= self.items.len() {
            return None;
        }
        Some(self.items.remove(index))
    }

    pub fn push(&mut self, value: impl Into<Attr>) {
        self.items.push(value.into());
    }

    pub fn pop(&mut self) -> Option<Attr> {
        self.items.pop()
    }

    pub fn last_mut(&mut self) -> Option<&mut Attr> {
        self.items.last_mut()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Attr> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Attr> {
        self.items.iter_mut()
    }

    pub fn as_slice(&self) -> &[Attr] {
        &self.items
    }
}

impl Index<usize> for AttrList {
    type Output = Attr;

    fn index(&self, index: usize) -> &Attr {
        &self.items[index]
    }
}

impl From<Vec<Attr>> for AttrList {
    fn from(items: Vec<Attr>) -> Self {
        Self { items }
    }
}

impl From<AttrList> for Vec<Attr> {
    fn from(list: AttrList) -> Self {
        list.items
    }
}

impl FromIterator<Attr> for AttrList {
    fn from_iter<I: IntoIterator<Item = Attr>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl Extend<Attr> for AttrList {
    fn extend<I: IntoIterator<Item = Attr>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl IntoIterator for AttrList {
    type Item = Attr;
    type IntoIter = std::vec::IntoIter<Attr>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a AttrList {
    type Item = &'a Attr;
    type IntoIter = std::slice::Iter<'a, Attr>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a mut AttrList {
    type Item = &'a mut Attr;
    type IntoIter = std::slice::IterMut<'a, Attr>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}
