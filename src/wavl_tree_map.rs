use core::borrow::Borrow;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::ops::Index;

use alloc::vec::Vec;

use crate::Error;
use crate::raw::{Link, RawWavlTree};

mod capacity;
mod order_statistic;

pub use crate::Rank;

/// An ordered map based on a [WAVL tree].
///
/// Given a key type with a [total order], the map stores its entries in key
/// order, one entry per key. Keys must implement [`Ord`].
///
/// Unlike `std::collections::BTreeMap`, an existing key is never overwritten:
/// [`insert`] rejects it with [`Error::DuplicateKey`], and [`delete`] of a
/// missing key fails with [`Error::KeyNotFound`]. Both failures leave the map
/// exactly as it was. On success they return the number of rebalancing steps
/// (promotions, demotions and rotations) the tree performed.
///
/// It is a logic error for a key to be modified in such a way that the key's
/// ordering relative to any other key changes while it is in the map. The
/// behavior resulting from such a logic error is not specified, but will be
/// encapsulated to the `WavlTreeMap` that observed it and not result in
/// undefined behavior.
///
/// # Examples
///
/// ```
/// use wavl_tree::{Error, WavlTreeMap};
///
/// let mut scores = WavlTreeMap::new();
/// scores.insert("Carol", 92).unwrap();
/// scores.insert("Alice", 100).unwrap();
/// scores.insert("Bob", 85).unwrap();
///
/// assert_eq!(scores.insert("Bob", 0), Err(Error::DuplicateKey));
/// assert_eq!(scores.get("Bob"), Some(&85));
///
/// // Order statistics are one-based.
/// assert_eq!(scores.select(2), Some(&85));
/// assert_eq!(scores.rank_of("Carol"), Some(3));
///
/// for (name, score) in &scores {
///     println!("{name}: {score}");
/// }
/// ```
///
/// # Background
///
/// Every node carries a rank, a relaxed version of its height. The tree keeps
/// the rank difference between each node and each of its children at 1 or 2,
/// with leaves at rank 0. Insertion alone produces exactly AVL trees;
/// deletion never needs more than two rotations and the amortized number of
/// rank changes per update is constant. Each node also stores the size of its
/// subtree, which lets [`select`] and [`rank_of`] run in O(log n).
///
/// [WAVL tree]: https://en.wikipedia.org/wiki/WAVL_tree
/// [total order]: https://en.wikipedia.org/wiki/Total_order
/// [`insert`]: WavlTreeMap::insert
/// [`delete`]: WavlTreeMap::delete
/// [`select`]: WavlTreeMap::select
/// [`rank_of`]: WavlTreeMap::rank_of
pub struct WavlTreeMap<K, V> {
    raw: RawWavlTree<K, V>,
}

/// An iterator over the entries of a `WavlTreeMap`, sorted by key.
///
/// This `struct` is created by the [`iter`] method on [`WavlTreeMap`].
///
/// # Examples
///
/// ```
/// use wavl_tree::WavlTreeMap;
///
/// let map = WavlTreeMap::from([(1, "a"), (2, "b")]);
/// let mut iter = map.iter();
/// assert_eq!(iter.next(), Some((&1, &"a")));
/// assert_eq!(iter.next_back(), Some((&2, &"b")));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`iter`]: WavlTreeMap::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V> {
    tree: &'a RawWavlTree<K, V>,
    front: Link,
    back: Link,
    remaining: usize,
}

/// An owning iterator over the entries of a `WavlTreeMap`, sorted by key.
///
/// This `struct` is created by the [`into_iter`] method on [`WavlTreeMap`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: IntoIterator::into_iter
pub struct IntoIter<K, V> {
    inner: alloc::vec::IntoIter<(K, V)>,
}

/// An iterator over the keys of a `WavlTreeMap`, in ascending order.
///
/// This `struct` is created by the [`keys`] method on [`WavlTreeMap`].
///
/// [`keys`]: WavlTreeMap::keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// An iterator over the values of a `WavlTreeMap`, in order by key.
///
/// This `struct` is created by the [`values`] method on [`WavlTreeMap`].
///
/// [`values`]: WavlTreeMap::values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<K, V> WavlTreeMap<K, V> {
    /// Makes a new, empty `WavlTreeMap`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use wavl_tree::WavlTreeMap;
    ///
    /// let mut map = WavlTreeMap::new();
    /// map.insert(1, "a").unwrap();
    /// ```
    #[must_use]
    pub const fn new() -> WavlTreeMap<K, V> {
        WavlTreeMap { raw: RawWavlTree::new() }
    }

    /// Clears the map, removing all entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use wavl_tree::WavlTreeMap;
    ///
    /// let mut a = WavlTreeMap::new();
    /// a.insert(1, "a").unwrap();
    /// a.clear();
    /// assert!(a.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns the number of entries in the map.
    ///
    /// # Complexity
    ///
    /// O(1), read from the root's subtree size.
    ///
    /// # Examples
    ///
    /// ```
    /// use wavl_tree::WavlTreeMap;
    ///
    /// let mut a = WavlTreeMap::new();
    /// assert_eq!(a.len(), 0);
    /// a.insert(1, "a").unwrap();
    /// assert_eq!(a.len(), 1);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the map contains no entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use wavl_tree::WavlTreeMap;
    ///
    /// let mut a = WavlTreeMap::new();
    /// assert!(a.is_empty());
    /// a.insert(1, "a").unwrap();
    /// assert!(!a.is_empty());
    /// ```
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the value of the smallest key, or `None` if the map is empty.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use wavl_tree::WavlTreeMap;
    ///
    /// let map = WavlTreeMap::from([(2, "b"), (1, "a")]);
    /// assert_eq!(map.min_value(), Some(&"a"));
    /// ```
    #[must_use]
    pub fn min_value(&self) -> Option<&V> {
        self.first_key_value().map(|(_, v)| v)
    }

    /// Returns the value of the largest key, or `None` if the map is empty.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use wavl_tree::WavlTreeMap;
    ///
    /// let map = WavlTreeMap::from([(2, "b"), (1, "a")]);
    /// assert_eq!(map.max_value(), Some(&"b"));
    /// ```
    #[must_use]
    pub fn max_value(&self) -> Option<&V> {
        self.last_key_value().map(|(_, v)| v)
    }

    /// Returns the first key-value pair in the map, whose key is the minimum.
    ///
    /// # Examples
    ///
    /// ```
    /// use wavl_tree::WavlTreeMap;
    ///
    /// let mut map = WavlTreeMap::new();
    /// assert_eq!(map.first_key_value(), None);
    /// map.insert(1, "b").unwrap();
    /// map.insert(2, "a").unwrap();
    /// assert_eq!(map.first_key_value(), Some((&1, &"b")));
    /// ```
    #[must_use]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.raw.first_key_value()
    }

    /// Returns the last key-value pair in the map, whose key is the maximum.
    ///
    /// # Examples
    ///
    /// ```
    /// use wavl_tree::WavlTreeMap;
    ///
    /// let mut map = WavlTreeMap::new();
    /// map.insert(1, "b").unwrap();
    /// map.insert(2, "a").unwrap();
    /// assert_eq!(map.last_key_value(), Some((&2, &"a")));
    /// ```
    #[must_use]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.raw.last_key_value()
    }

    /// Removes and returns the first entry in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use wavl_tree::WavlTreeMap;
    ///
    /// let mut map = WavlTreeMap::from([(1, "a"), (2, "b")]);
    /// assert_eq!(map.pop_first(), Some((1, "a")));
    /// assert_eq!(map.pop_first(), Some((2, "b")));
    /// assert_eq!(map.pop_first(), None);
    /// ```
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        self.raw.pop_first()
    }

    /// Removes and returns the last entry in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use wavl_tree::WavlTreeMap;
    ///
    /// let mut map = WavlTreeMap::from([(1, "a"), (2, "b")]);
    /// assert_eq!(map.pop_last(), Some((2, "b")));
    /// assert_eq!(map.pop_last(), Some((1, "a")));
    /// assert_eq!(map.pop_last(), None);
    /// ```
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        self.raw.pop_last()
    }

    /// Returns every key in ascending order.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use wavl_tree::WavlTreeMap;
    ///
    /// let map = WavlTreeMap::from([(3, 'c'), (1, 'a'), (2, 'b')]);
    /// assert_eq!(map.sorted_keys(), [&1, &2, &3]);
    /// ```
    #[must_use]
    pub fn sorted_keys(&self) -> Vec<&K> {
        self.raw.sorted_keys()
    }

    /// Returns every value, ordered by key. Position `i` holds the value of
    /// `sorted_keys()[i]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use wavl_tree::WavlTreeMap;
    ///
    /// let map = WavlTreeMap::from([(3, 'c'), (1, 'a'), (2, 'b')]);
    /// assert_eq!(map.sorted_values(), [&'a', &'b', &'c']);
    /// ```
    #[must_use]
    pub fn sorted_values(&self) -> Vec<&V> {
        self.raw.sorted_values()
    }

    /// Gets an iterator over the entries of the map, sorted by key.
    ///
    /// # Complexity
    ///
    /// O(1) to create the iterator; amortized O(1) per step by following
    /// parent links.
    ///
    /// # Examples
    ///
    /// ```
    /// use wavl_tree::WavlTreeMap;
    ///
    /// let map = WavlTreeMap::from([(3, "c"), (2, "b"), (1, "a")]);
    /// let (first_key, first_value) = map.iter().next().unwrap();
    /// assert_eq!((*first_key, *first_value), (1, "a"));
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            tree: &self.raw,
            front: self.raw.first(),
            back: self.raw.last(),
            remaining: self.raw.len(),
        }
    }

    /// Gets an iterator over the keys of the map, in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use wavl_tree::WavlTreeMap;
    ///
    /// let map = WavlTreeMap::from([(2, "b"), (1, "a")]);
    /// let keys: Vec<_> = map.keys().copied().collect();
    /// assert_eq!(keys, [1, 2]);
    /// ```
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Gets an iterator over the values of the map, in order by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use wavl_tree::WavlTreeMap;
    ///
    /// let map = WavlTreeMap::from([(1, "hello"), (2, "goodbye")]);
    /// let values: Vec<&str> = map.values().copied().collect();
    /// assert_eq!(values, ["hello", "goodbye"]);
    /// ```
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }
}

impl<K: Ord, V> WavlTreeMap<K, V> {
    /// Returns a reference to the value corresponding to the key, or `None`
    /// if it is absent.
    ///
    /// The key may be any borrowed form of the map's key type, but the ordering
    /// on the borrowed form *must* match the ordering on the key type.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use wavl_tree::WavlTreeMap;
    ///
    /// let mut map = WavlTreeMap::new();
    /// map.insert(1, "a").unwrap();
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get(key)
    }

    /// Returns the key-value pair corresponding to the supplied key.
    ///
    /// # Examples
    ///
    /// ```
    /// use wavl_tree::WavlTreeMap;
    ///
    /// let map = WavlTreeMap::from([(1, "a")]);
    /// assert_eq!(map.get_key_value(&1), Some((&1, &"a")));
    /// assert_eq!(map.get_key_value(&2), None);
    /// ```
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get_key_value(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use wavl_tree::WavlTreeMap;
    ///
    /// let mut map = WavlTreeMap::from([(1, "a")]);
    /// if let Some(x) = map.get_mut(&1) {
    ///     *x = "b";
    /// }
    /// assert_eq!(map[&1], "b");
    /// ```
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get_mut(key)
    }

    /// Returns `true` if the map contains a value for the specified key.
    ///
    /// # Examples
    ///
    /// ```
    /// use wavl_tree::WavlTreeMap;
    ///
    /// let map = WavlTreeMap::from([(1, "a")]);
    /// assert!(map.contains_key(&1));
    /// assert!(!map.contains_key(&2));
    /// ```
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.find(key).is_some()
    }

    /// Inserts a key-value pair and returns the number of rebalancing steps
    /// it took.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateKey`] if the key is already present. The
    /// stored value is kept and the map is not modified.
    ///
    /// # Complexity
    ///
    /// O(log n) to find the position; amortized O(1) rebalancing.
    ///
    /// # Examples
    ///
    /// ```
    /// use wavl_tree::{Error, WavlTreeMap};
    ///
    /// let mut map = WavlTreeMap::new();
    /// assert_eq!(map.insert(37, "a"), Ok(0));
    /// assert_eq!(map.insert(37, "b"), Err(Error::DuplicateKey));
    /// assert_eq!(map[&37], "a");
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Result<usize, Error> {
        self.raw.insert(key, value)
    }

    /// Removes a key from the map and returns the number of rebalancing steps
    /// it took.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key is absent; the map is not
    /// modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use wavl_tree::{Error, WavlTreeMap};
    ///
    /// let mut map = WavlTreeMap::from([(1, "a")]);
    /// assert_eq!(map.delete(&1), Ok(0));
    /// assert_eq!(map.delete(&1), Err(Error::KeyNotFound));
    /// ```
    pub fn delete<Q>(&mut self, key: &Q) -> Result<usize, Error>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.delete(key)
    }

    /// Removes a key from the map, returning its value if it was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use wavl_tree::WavlTreeMap;
    ///
    /// let mut map = WavlTreeMap::from([(1, "a")]);
    /// assert_eq!(map.remove(&1), Some("a"));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Removes a key from the map, returning the stored key and value if the
    /// key was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use wavl_tree::WavlTreeMap;
    ///
    /// let mut map = WavlTreeMap::from([(1, "a")]);
    /// assert_eq!(map.remove_entry(&1), Some((1, "a")));
    /// assert_eq!(map.remove_entry(&1), None);
    /// ```
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.remove_entry(key)
    }
}

impl<K: Clone, V: Clone> Clone for WavlTreeMap<K, V> {
    fn clone(&self) -> Self {
        WavlTreeMap { raw: self.raw.clone() }
    }
}

impl<K: Hash, V: Hash> Hash for WavlTreeMap<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for (k, v) in self {
            k.hash(state);
            v.hash(state);
        }
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for WavlTreeMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<K: Eq, V: Eq> Eq for WavlTreeMap<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for WavlTreeMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Default for WavlTreeMap<K, V> {
    fn default() -> Self {
        WavlTreeMap::new()
    }
}

/// Collects entries into a map. When a key repeats, the first occurrence is
/// kept and later ones are dropped.
impl<K: Ord, V> FromIterator<(K, V)> for WavlTreeMap<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = WavlTreeMap::new();
        map.extend(iter);
        map
    }
}

/// Inserts every entry whose key is not yet present; existing values are
/// never replaced.
impl<K: Ord, V> Extend<(K, V)> for WavlTreeMap<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            let _ = self.insert(k, v);
        }
    }
}

impl<'a, K, V> IntoIterator for &'a WavlTreeMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<K, V> IntoIterator for WavlTreeMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    /// Gets an owning iterator over the entries of the map, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use wavl_tree::WavlTreeMap;
    ///
    /// let map = WavlTreeMap::from([(2, "b"), (1, "a")]);
    /// let mut iter = map.into_iter();
    /// assert_eq!(iter.next(), Some((1, "a")));
    /// assert_eq!(iter.next_back(), Some((2, "b")));
    /// ```
    fn into_iter(self) -> IntoIter<K, V> {
        IntoIter {
            inner: self.raw.into_sorted_vec().into_iter(),
        }
    }
}

impl<K, Q, V> Index<&Q> for WavlTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: ?Sized + Ord,
{
    type Output = V;

    /// Returns a reference to the value corresponding to the supplied key.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the map.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for WavlTreeMap<K, V> {
    fn from(arr: [(K, V); N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<'a, K: 'a, V: 'a> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let h = self.front?;
        let tree = self.tree;
        self.front = tree.successor(h);
        self.remaining -= 1;
        let node = tree.node(h);
        Some((node.key(), node.value()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K: 'a, V: 'a> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let h = self.back?;
        let tree = self.tree;
        self.back = tree.predecessor(h);
        self.remaining -= 1;
        let node = tree.node(h);
        Some((node.key(), node.value()))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            tree: self.tree,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<(K, V)> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for IntoIter<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.as_slice()).finish()
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug, V> fmt::Debug for Keys<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Values<'_, K, V> {}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V: fmt::Debug> fmt::Debug for Values<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
