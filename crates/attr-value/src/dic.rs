//! [`AttrDic`] — string-keyed container.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use indexmap::IndexMap;

use crate::Attr;

/// A map from string keys to [`Attr`] nodes.
///
/// Keys are unique; setting an existing key replaces its value in place.
/// Insertion order is kept so that serialization is deterministic, but it
/// takes no part in equality or hashing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttrDic {
    map: IndexMap<String, Attr>,
}

impl AttrDic {
    pub fn new() -> Self {
        Self {
            map: IndexMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Attr> {
        self.map.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Attr> {
        self.map.get_mut(key)
    }

    /// Sets `key`, returning the value it replaced.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Attr>) -> Option<Attr> {
        self.map.insert(key.into(), value.into())
    }

    /// Removes `key`, keeping the relative order of the remaining keys.
    pub fn remove(&mut self, key: &str) -> Option<Attr> {
        self.map.shift_remove(key)
    }

    /// Like [`remove`](Self::remove), also returning the position the key
    /// held.
    pub fn remove_full(&mut self, key: &str) -> Option<(usize, Attr)> {
        self.map.shift_remove_full(key).map(|(index, _, value)| (index, value))
    }

    /// Sets `key` at position `index`, shifting later keys back. Positions
    /// past the end append. An existing key is moved to `index`.
    pub fn insert_at(
        &mut self,
        index: usize,
        key: impl Into<String>,
        value: impl Into<Attr>,
    ) -> Option<Attr> {
        let key = key.into();
        let last = if self.map.contains_key(&key) {
            self.map.len() - 1
        } else {
            self.map.len()
        };
        self.map.shift_insert(index.min(last), key, value.into())
    }

    /// Returns the value at `key`, inserting `default()` first if absent.
    pub fn entry_or_insert(
        &mut self,
        key: impl Into<String>,
        default: impl FnOnce() -> Attr,
    ) -> &mut Attr {
        self.map.entry(key.into()).or_insert_with(default)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.map.keys().map(String::as_str)
    }

    pub fn values(&self) -> indexmap::map::Values<'_, String, Attr> {
        self.map.values()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Attr> {
        self.map.iter()
    }

    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, String, Attr> {
        self.map.iter_mut()
    }
}

impl Hash for AttrDic {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Entry hashes are summed so the result ignores key order.
        let mut acc: u64 = 0;
        for (key, value) in &self.map {
            let mut h = DefaultHasher::new();
            key.hash(&mut h);
            value.hash(&mut h);
            acc = acc.wrapping_add(h.finish());
        }
        self.map.len().hash(state);
        acc.hash(state);
    }
}

impl FromIterator<(String, Attr)> for AttrDic {
    fn from_iter<I: IntoIterator<Item = (String, Attr)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}

impl Extend<(String, Attr)> for AttrDic {
    fn extend<I: IntoIterator<Item = (String, Attr)>>(&mut self, iter: I) {
        self.map.extend(iter);
    }
}

impl IntoIterator for AttrDic {
    type Item = (String, Attr);
    type IntoIter = indexmap::map::IntoIter<String, Attr>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.into_iter()
    }
}

impl<'a> IntoIterator for &'a AttrDic {
    type Item = (&'a String, &'a Attr);
    type IntoIter = indexmap::map::Iter<'a, String, Attr>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}

impl<'a> IntoIterator for &'a mut AttrDic {
    type Item = (&'a String, &'a mut Attr);
    type IntoIter = indexmap::map::IterMut<'a, String, Attr>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hash_of(dic: &AttrDic) -> u64 {
        let mut h = DefaultHasher::new();
        dic.hash(&mut h);
        h.finish()
    }

    #[test]
    fn remove_full_and_insert_at_restore_order() {
        let mut d = AttrDic::new();
        d.set("a", 1);
        d.set("b", 2);
        d.set("c", 3);
        let (index, value) = d.remove_full("b").unwrap();
        assert_eq!((index, &value), (1, &Attr::Int(2)));
        assert_eq!(d.remove_full("b"), None);

        assert_eq!(d.insert_at(index, "b", value), None);
        assert_eq!(d.keys().collect::<Vec<_>>(), ["a", "b", "c"]);

        assert_eq!(d.insert_at(99, "a", 0), Some(Attr::Int(1)));
        assert_eq!(d.keys().collect::<Vec<_>>(), ["b", "c", "a"]);
    }

    #[test]
    fn set_replaces_existing_key() {
        let mut d = AttrDic::new();
        assert_eq!(d.set("a", 1), None);
        assert_eq!(d.set("a", 2), Some(Attr::Int(1)));
        assert_eq!(d.len(), 1);
        assert_eq!(d.get("a"), Some(&Attr::Int(2)));
    }

    #[test]
    fn equality_ignores_key_order() {
        let mut a = AttrDic::new();
        a.set("x", 1);
        a.set("y", 2);
        let mut b = AttrDic::new();
        b.set("y", 2);
        b.set("x", 1);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn remove_keeps_order() {
        let mut d = AttrDic::new();
        d.set("a", 1);
        d.set("b", 2);
        d.set("c", 3);
        assert_eq!(d.remove("b"), Some(Attr::Int(2)));
        assert_eq!(d.keys().collect::<Vec<_>>(), vec!["a", "c"]);
        assert_eq!(d.remove("b"), None);
    }

    #[test]
    fn entry_or_insert_creates_once() {
        let mut d = AttrDic::new();
        *d.entry_or_insert("n", || Attr::Int(0)) = Attr::Int(5);
        let n = d.entry_or_insert("n", || Attr::Int(0));
        assert_eq!(*n, Attr::Int(5));
    }
}
