//! Comparator-driven search over sorted sequences.
//!
//! This library locates things in a caller-owned sorted slice or `Vec`:
//! exact matches ([`search`]), the first or last of a run of duplicates
//! ([`first`], [`last`]), the closest position to a possibly absent key
//! ([`closest`], [`closest_with`]), sorted insertion points ([`insert`],
//! [`insert_unique`]) and inclusive sub-ranges bounded by two keys
//! ([`range`], [`range_values`]).
//!
//! Every operation takes a three-way [`Compare`] comparator, which lets a
//! sequence of `T` be searched with keys of a different type `Q`:
//!
//! ```
//! use sorted_search::{first, insert, last, search, Keyed};
//!
//! let seq = [1, 3, 3, 3, 5, 7];
//! assert_eq!(search(&seq, &5, i32::cmp), Some(4));
//! assert_eq!(first(&seq, &3, i32::cmp), Some(1));
//! assert_eq!(last(&seq, &3, i32::cmp), Some(3));
//!
//! let mut index = vec![Keyed::new("b", 2), Keyed::new("d", 4)];
//! insert(&mut index, Keyed::new("c", 3), Keyed::cmp);
//! assert_eq!(search(&index, &"c", Keyed::key_cmp), Some(1));
//! ```
//!
//! Absence is signaled with `None`, never a panic: an empty sequence or a
//! missing key is an ordinary answer. Comparators are trusted to agree
//! with the sequence's sort order; under an inconsistent comparator every
//! operation still terminates and stays in bounds, but the returned index
//! is meaningless.
mod compare;
mod search;

pub use compare::{Compare, Keyed};

use std::cmp::Ordering;

/// Options for [`closest_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClosestOptions {
	/// Converge on the last of a run of equal elements instead of the
	/// first, and prefer the neighbor above a missing key instead of the
	/// one below.
	pub end: bool,

	/// Only report exact matches; a missing key yields `None` instead of
	/// the nearest neighbor.
	pub exists: bool,
}

/// Search `sequence` for an element comparing equal to `key`.
///
/// Returns the index of an exact match, or `None` when the sequence is
/// empty or contains no such element. Among several equal elements the
/// returned index is unspecified; see [`first`] and [`last`].
#[inline]
pub fn search<T, Q: ?Sized>(sequence: &[T], key: &Q, cmp: impl Compare<T, Q>) -> Option<usize> {
	search::exact(sequence, key, &cmp)
}

/// Find the first element comparing equal to `key`.
#[inline]
pub fn first<T, Q: ?Sized>(sequence: &[T], key: &Q, cmp: impl Compare<T, Q>) -> Option<usize> {
	search::closest_in(sequence, key, false, true, &cmp)
}

/// Find the last element comparing equal to `key`.
#[inline]
pub fn last<T, Q: ?Sized>(sequence: &[T], key: &Q, cmp: impl Compare<T, Q>) -> Option<usize> {
	search::closest_in(sequence, key, true, true, &cmp)
}

/// Find the position closest to `key`, with default options.
///
/// When `key` is present this is the first of the equal elements; when it
/// is absent it is the nearest neighbor below it (or the boundary element
/// when the key falls outside the sequence). `None` only for an empty
/// sequence; a single-element sequence always answers `Some(0)`.
#[inline]
pub fn closest<T, Q: ?Sized>(sequence: &[T], key: &Q, cmp: impl Compare<T, Q>) -> Option<usize> {
	search::closest_in(sequence, key, false, false, &cmp)
}

/// Find the position closest to `key` under the given [`ClosestOptions`].
#[inline]
pub fn closest_with<T, Q: ?Sized>(
	sequence: &[T],
	key: &Q,
	options: ClosestOptions,
	cmp: impl Compare<T, Q>,
) -> Option<usize> {
	search::closest_in(sequence, key, options.end, options.exists, &cmp)
}

/// Insert `value` into the sorted `sequence`, keeping it sorted.
///
/// Returns the index at which the value now resides. A value equal to
/// existing elements is appended after the whole run of them, so equal
/// values keep their insertion order.
#[inline]
pub fn insert<T>(sequence: &mut Vec<T>, value: T, cmp: impl Compare<T>) -> usize {
	insert_inner(sequence, value, false, cmp)
}

/// Insert `value` into the sorted `sequence`, overwriting an equal element.
///
/// Like [`insert`], except that when an element comparing equal to `value`
/// already exists it is replaced in place and the sequence does not grow.
#[inline]
pub fn insert_unique<T>(sequence: &mut Vec<T>, value: T, cmp: impl Compare<T>) -> usize {
	insert_inner(sequence, value, true, cmp)
}

fn insert_inner<T, C: Compare<T>>(
	sequence: &mut Vec<T>,
	value: T,
	unique: bool,
	cmp: C,
) -> usize {
	if sequence.is_empty() {
		sequence.push(value);
		return 0;
	}

	// The sequence is non-empty, so a closest position always exists.
	let mut index = search::closest_in(sequence, &value, false, false, &cmp).unwrap_or(0);

	match cmp.compare(&sequence[index], &value, index) {
		Ordering::Less => {
			index += 1;
			sequence.insert(index, value);
		}
		Ordering::Greater => sequence.insert(index, value),
		Ordering::Equal if unique => sequence[index] = value,
		Ordering::Equal => {
			// Step past the run of equal elements so duplicates end up in
			// insertion order.
			while index < sequence.len() && cmp.compare(&sequence[index], &value, index).is_eq() {
				index += 1;
			}
			sequence.insert(index, value);
		}
	}

	index
}

/// Find the inclusive index range of the elements between `from` and `to`.
///
/// `from` must sort at or before `to` under the comparator. Returns
/// `Some((start, end))` spanning exactly the elements within the bounds,
/// or `None` when no element falls inside them (or the sequence is empty).
pub fn range<T, Q: ?Sized>(
	sequence: &[T],
	from: &Q,
	to: &Q,
	cmp: impl Compare<T, Q>,
) -> Option<(usize, usize)> {
	let mut start = search::closest_in(sequence, from, false, false, &cmp)?;
	let mut end = search::closest_in(sequence, to, true, false, &cmp)?;

	// The closest positions can land one element outside the requested
	// bounds; walk each end back inside, never letting them cross.
	// TODO: derive tight bounds from the convergence itself instead of
	// correcting linearly.
	while start <= end {
		if cmp.compare(&sequence[start], from, start).is_ge() {
			break;
		}
		start += 1;
	}

	while end >= start {
		if cmp.compare(&sequence[end], to, end).is_le() {
			break;
		}
		if end == start {
			return None;
		}
		end -= 1;
	}

	if start > end {
		return None;
	}

	Some((start, end))
}

/// Borrow the slice of elements between `from` and `to`, inclusive.
///
/// The value counterpart of [`range`]; an empty range yields an empty
/// slice.
pub fn range_values<'a, T, Q: ?Sized>(
	sequence: &'a [T],
	from: &Q,
	to: &Q,
	cmp: impl Compare<T, Q>,
) -> &'a [T] {
	match range(sequence, from, to, cmp) {
		Some((start, end)) => &sequence[start..=end],
		None => &[],
	}
}
