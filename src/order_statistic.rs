/// A one-based position in the sorted order of a map: `Rank(1)` is the
/// smallest key and `Rank(map.len())` the largest.
///
/// # Examples
///
/// ```
/// use wavl_tree::{Rank, WavlTreeMap};
///
/// let mut map = WavlTreeMap::new();
/// map.insert("b", 20).unwrap();
/// map.insert("a", 10).unwrap();
///
/// assert_eq!(map[Rank(1)], 10);
/// assert_eq!(map[Rank(2)], 20);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);
