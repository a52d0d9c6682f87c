use std::{borrow::Borrow, cmp::Ordering};

/// Three-way comparison between a sequence element and a search key.
///
/// Every search operation in this crate is driven by a comparator. The
/// comparator must define a total order consistent with the order the
/// sequence is actually sorted in; the algorithms rely on this invariant
/// without verifying it.
///
/// The index of the probed element is passed to [`compare`] so that
/// comparators may break ties by position. Ordinary comparators don't need
/// it: any `Fn(&T, &Q) -> Ordering` closure (including `Ord::cmp` and
/// methods like [`Keyed::key_cmp`]) is a `Compare` through the blanket
/// implementation, which ignores the index.
///
/// [`compare`]: Compare::compare
pub trait Compare<T, Q: ?Sized = T> {
	fn compare(&self, element: &T, key: &Q, index: usize) -> Ordering;
}

impl<T, Q: ?Sized, F> Compare<T, Q> for F
where
	F: Fn(&T, &Q) -> Ordering,
{
	#[inline]
	fn compare(&self, element: &T, key: &Q, _index: usize) -> Ordering {
		self(element, key)
	}
}

/// An element carrying a pre-extracted sort key next to its value.
///
/// Useful when the sort key is expensive to derive or when a sequence is
/// built as an index over some other collection: the key is computed once
/// and the sequence is ordered by it, while [`key_cmp`] lets searches use a
/// bare key without constructing a whole element.
///
/// [`key_cmp`]: Keyed::key_cmp
#[derive(Debug, Clone)]
pub struct Keyed<K, V> {
	pub key: K,
	pub value: V,
}

impl<K, V> Keyed<K, V> {
	pub fn new(key: K, value: V) -> Self {
		Self { key, value }
	}

	pub fn key_cmp<Q>(&self, key: &Q) -> Ordering
	where
		K: Borrow<Q> + Ord,
		Q: Ord + ?Sized,
	{
		self.key.borrow().cmp(key)
	}
}

impl<K: PartialEq, V> PartialEq for Keyed<K, V> {
	fn eq(&self, other: &Self) -> bool {
		self.key == other.key
	}
}

impl<K: Eq, V> Eq for Keyed<K, V> {}

impl<K: PartialOrd, V> PartialOrd for Keyed<K, V> {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		self.key.partial_cmp(&other.key)
	}
}

impl<K: Ord, V> Ord for Keyed<K, V> {
	fn cmp(&self, other: &Self) -> Ordering {
		self.key.cmp(&other.key)
	}
}

impl<K: std::fmt::Display, V: std::fmt::Display> std::fmt::Display for Keyed<K, V> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "({}, {})", self.key, self.value)
	}
}
