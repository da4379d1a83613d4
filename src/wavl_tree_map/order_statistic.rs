use core::borrow::Borrow;
use core::ops::{Index, IndexMut};

use super::WavlTreeMap;
use crate::Rank;

impl<K, V> WavlTreeMap<K, V> {
    /// Returns the value of the `rank`-th smallest key, counting from 1.
    ///
    /// `select(1)` is the value of the minimum and `select(map.len())` the
    /// value of the maximum. Returns `None` when `rank` is 0 or larger than
    /// the map.
    ///
    /// # Complexity
    ///
    /// O(log n). The walk starts at the cached minimum, so small ranks stay
    /// near the bottom of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use wavl_tree::WavlTreeMap;
    ///
    /// let mut map = WavlTreeMap::new();
    /// map.insert(30, "c").unwrap();
    /// map.insert(10, "a").unwrap();
    /// map.insert(20, "b").unwrap();
    ///
    /// assert_eq!(map.select(1), Some(&"a"));
    /// assert_eq!(map.select(3), Some(&"c"));
    /// assert_eq!(map.select(0), None);
    /// assert_eq!(map.select(4), None);
    /// ```
    #[must_use]
    pub fn select(&self, rank: usize) -> Option<&V> {
        self.select_key_value(rank).map(|(_, v)| v)
    }

    /// Returns the key-value pair of the `rank`-th smallest key, counting
    /// from 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use wavl_tree::WavlTreeMap;
    ///
    /// let mut map = WavlTreeMap::new();
    /// map.insert("b", 2).unwrap();
    /// map.insert("a", 1).unwrap();
    ///
    /// assert_eq!(map.select_key_value(2), Some((&"b", &2)));
    /// ```
    #[must_use]
    pub fn select_key_value(&self, rank: usize) -> Option<(&K, &V)> {
        self.raw.select_key_value(rank)
    }

    /// Returns the key and a mutable reference to the value of the `rank`-th
    /// smallest key, counting from 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use wavl_tree::WavlTreeMap;
    ///
    /// let mut map = WavlTreeMap::new();
    /// map.insert(10, "a").unwrap();
    /// map.insert(5, "b").unwrap();
    ///
    /// if let Some((key, value)) = map.select_mut(1) {
    ///     assert_eq!(*key, 5);
    ///     *value = "updated";
    /// }
    ///
    /// assert_eq!(map.get(&5), Some(&"updated"));
    /// ```
    #[must_use]
    pub fn select_mut(&mut self, rank: usize) -> Option<(&K, &mut V)> {
        self.raw.select_mut(rank)
    }

    /// Returns the one-based rank of `key`, or `None` if the key is not present.
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
    /// map.insert(10, "a").unwrap();
    /// map.insert(20, "b").unwrap();
    ///
    /// assert_eq!(map.rank_of(&10), Some(1));
    /// assert_eq!(map.rank_of(&15), None);
    /// ```
    #[must_use]
    pub fn rank_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.raw.rank_of(key)
    }
}

/// Indexes into the map by one-based rank.
///
/// # Panics
///
/// Panics if `rank` is 0 or larger than the map.
///
/// # Examples
///
/// ```
/// use wavl_tree::{Rank, WavlTreeMap};
///
/// let map = WavlTreeMap::from([("a", 1), ("b", 2)]);
/// assert_eq!(map[Rank(1)], 1);
/// ```
impl<K, V> Index<Rank> for WavlTreeMap<K, V> {
    type Output = V;

    fn index(&self, rank: Rank) -> &Self::Output {
        self.select(rank.0).expect("rank out of bounds")
    }
}

/// Mutably indexes into the map by one-based rank.
///
/// # Panics
///
/// Panics if `rank` is 0 or larger than the map.
///
/// # Examples
///
/// ```
/// use wavl_tree::{Rank, WavlTreeMap};
///
/// let mut map = WavlTreeMap::from([("a", 1), ("b", 2)]);
/// map[Rank(2)] = 5;
///
/// assert_eq!(map.get(&"b"), Some(&5));
/// ```
impl<K, V> IndexMut<Rank> for WavlTreeMap<K, V> {
    fn index_mut(&mut self, rank: Rank) -> &mut Self::Output {
        self.select_mut(rank.0).map(|(_, v)| v).expect("rank out of bounds")
    }
}
