use std::cmp::Ordering;

use crate::Compare;

/// Classic binary search for an exact match.
///
/// Returns the index of an element comparing equal to `key`, or `None`.
/// When several elements compare equal, which index is returned is
/// unspecified; use the closest search with `exists` for first/last.
pub(crate) fn exact<T, Q: ?Sized, C: Compare<T, Q>>(
	sequence: &[T],
	key: &Q,
	cmp: &C,
) -> Option<usize> {
	let mut min = 0;
	let mut max = sequence.len();

	while min < max {
		let middle = min + (max - min) / 2;
		match cmp.compare(&sequence[middle], key, middle) {
			Ordering::Less => min = middle + 1,
			Ordering::Greater => max = middle,
			Ordering::Equal => return Some(middle),
		}
	}

	None
}

/// Locate the position closest to `key`.
///
/// Handles the degenerate lengths and clamps the converged position back
/// into `0..len` in case the neighbor adjustment drifted past an end.
///
/// With `exists` only exact matches are reported; `end` biases the search
/// toward the last of a run of equal elements instead of the first.
pub(crate) fn closest_in<T, Q: ?Sized, C: Compare<T, Q>>(
	sequence: &[T],
	key: &Q,
	end: bool,
	exists: bool,
	cmp: &C,
) -> Option<usize> {
	match sequence.len() {
		0 => None,
		// A single element is always the closest position, match or not.
		1 => Some(0),
		len => converge(sequence, key, end, !exists, cmp).map(|index| index.min(len - 1)),
	}
}

/// Converge a `min`/`max` window on the position of `key`.
///
/// Requires `sequence.len() >= 1`. When no element matches, `want_closest`
/// selects between the nearest neighbor and `None`.
///
/// The midpoint rounds up when `invert` is set and down otherwise, so the
/// branch that keeps the midpoint (`min = middle` / `max = middle`) still
/// shrinks the window. Each iteration therefore makes progress and the
/// loop runs at most `len` times, whatever the comparator answers.
fn converge<T, Q: ?Sized, C: Compare<T, Q>>(
	sequence: &[T],
	key: &Q,
	invert: bool,
	want_closest: bool,
	cmp: &C,
) -> Option<usize> {
	let mut min = 0;
	let mut max = sequence.len() - 1;

	while min < max {
		let middle = if invert {
			min + (max - min + 1) / 2
		} else {
			min + (max - min) / 2
		};

		let ord = cmp.compare(&sequence[middle], key, middle);
		if invert {
			// Seeking the last occurrence: everything above a greater
			// element is out; an equal or lesser midpoint stays in play.
			if ord.is_gt() {
				max = middle - 1;
			} else {
				min = middle;
			}
		} else if ord.is_lt() {
			min = middle + 1;
		} else {
			max = middle;
		}
	}

	let ord = cmp.compare(&sequence[min], key, min);
	if ord.is_eq() {
		return Some(min);
	}

	if !want_closest {
		return None;
	}

	// The key lies beyond either end of the sequence: the boundary element
	// is the closest there is.
	if min == sequence.len() - 1 && ord.is_lt() {
		return Some(min);
	}
	if min == 0 && ord.is_gt() {
		return Some(0);
	}

	// The converged element sits on the wrong side of the key; its neighbor
	// in the search direction is the closest position. The caller clamps
	// the result into range.
	Some(if invert { min + 1 } else { min.saturating_sub(1) })
}
