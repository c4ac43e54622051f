//! A module containing the set-algebra operations on [`IntervalSet`]s.
//!
//! Each binary operation is a single left-to-right sweep over the two
//! sorted interval lists. At every step the head interval with the larger
//! (or equal) `high` is popped and the other list is binary-searched for
//! the intervals before it and the intervals overlapping it. Swapping the
//! two lists so that the popped interval always comes from `y` halves the
//! number of cases. Individual points are never enumerated, so the cost
//! depends only on the number of intervals.
//!
//! The `*_into()` functions take the output set by value and the inputs by
//! reference, so the output storage can be reused but can never alias an
//! input. They are the building blocks of both the
//! [`IntervalSet`] methods and [`combine()`].

use core::cmp::Ordering;
use core::mem::swap;
use core::ops::{BitAnd, BitOr, BitXor, Sub};

use crate::utils::{append_interval, append_intervals, gaps};
use crate::{Interval, IntervalSet, PointType};

/// Computes the union of `x` and `y`, writing it into the storage of
/// `out`.
///
/// The previous contents of `out` are discarded.
///
/// # Examples
/// ```
/// use discrete_intervals::{ie, union_into, IntervalSet};
///
/// let x = IntervalSet::collect([ie(1, 4)]);
/// let y = IntervalSet::collect([ie(4, 8)]);
///
/// let scratch = IntervalSet::collect([ie(100, 200)]);
///
/// assert_eq!(union_into(scratch, &x, &y).as_slice(), [ie(1, 8)]);
/// ```
pub fn union_into<I>(
	out: IntervalSet<I>,
	x: &IntervalSet<I>,
	y: &IntervalSet<I>,
) -> IntervalSet<I>
where
	I: PointType,
{
	sweep_into(out, x, y, union_sweep)
}

/// Computes the intersection of `x` and `y`, writing it into the storage
/// of `out`.
///
/// The previous contents of `out` are discarded.
pub fn intersection_into<I>(
	out: IntervalSet<I>,
	x: &IntervalSet<I>,
	y: &IntervalSet<I>,
) -> IntervalSet<I>
where
	I: PointType,
{
	sweep_into(out, x, y, intersection_sweep)
}

/// Computes the difference `x - y`, writing it into the storage of `out`.
///
/// The previous contents of `out` are discarded.
pub fn difference_into<I>(
	out: IntervalSet<I>,
	x: &IntervalSet<I>,
	y: &IntervalSet<I>,
) -> IntervalSet<I>
where
	I: PointType,
{
	sweep_into(out, x, y, difference_sweep)
}

/// Computes the symmetric difference of `x` and `y`, writing it into the
/// storage of `out`.
///
/// The previous contents of `out` are discarded.
pub fn symmetric_difference_into<I>(
	out: IntervalSet<I>,
	x: &IntervalSet<I>,
	y: &IntervalSet<I>,
) -> IntervalSet<I>
where
	I: PointType,
{
	sweep_into(out, x, y, symmetric_difference_sweep)
}

/// Folds the binary operation `op` over `sets` from left to right.
///
/// `op` is usually one of [`union_into()`], [`intersection_into()`],
/// [`difference_into()`] or [`symmetric_difference_into()`]. Only two
/// result buffers are alive at any time and they swap roles after every
/// step, so the buffer being written is never one being read.
///
/// No sets gives the empty set and a single set gives a copy of it.
/// Since difference is not commutative, `combine(difference_into, [a, b,
/// c])` is `(a - b) - c`.
///
/// # Examples
/// ```
/// use discrete_intervals::{combine, ie, intersection_into, IntervalSet};
///
/// let multiples = |n: i32| {
/// 	(0..100)
/// 		.filter(|x| x % n == 0)
/// 		.map(|x| ie(x, x + 1))
/// 		.collect::<IntervalSet<i32>>()
/// };
///
/// let (x2, x3, x5) = (multiples(2), multiples(3), multiples(5));
///
/// assert_eq!(
/// 	combine(intersection_into, [&x2, &x3, &x5]).as_slice(),
/// 	[ie(0, 1), ie(30, 31), ie(60, 61), ie(90, 91)]
/// );
/// ```
pub fn combine<'a, I, F, S>(mut op: F, sets: S) -> IntervalSet<I>
where
	I: PointType + 'a,
	F: FnMut(IntervalSet<I>, &IntervalSet<I>, &IntervalSet<I>) -> IntervalSet<I>,
	S: IntoIterator<Item = &'a IntervalSet<I>>,
{
	let mut sets = sets.into_iter();

	let Some(first) = sets.next() else {
		return IntervalSet::new();
	};
	let Some(second) = sets.next() else {
		return first.clone();
	};

	let mut result = op(IntervalSet::new(), first, second);
	let mut scratch = IntervalSet::new();

	for set in sets {
		scratch = op(scratch, &result, set);
		swap(&mut result, &mut scratch);
	}

	result
}

fn sweep_into<I, F>(
	out: IntervalSet<I>,
	x: &IntervalSet<I>,
	y: &IntervalSet<I>,
	sweep: F,
) -> IntervalSet<I>
where
	I: PointType,
	F: FnOnce(&mut Vec<Interval<I>>, &[Interval<I>], &[Interval<I>]),
{
	let mut intervals = Vec::from(out);
	intervals.clear();

	sweep(&mut intervals, &x.intervals, &y.intervals);

	IntervalSet::from_canonical(intervals)
}

fn union_sweep<I>(
	out: &mut Vec<Interval<I>>,
	x: &[Interval<I>],
	y: &[Interval<I>],
) where
	I: PointType,
{
	let (mut x, mut y): (&[Interval<I>], &[Interval<I>]) = (x, y);

	loop {
		if x.is_empty() {
			swap(&mut x, &mut y);
		}
		if y.is_empty() {
			out.extend_from_slice(x);
			return;
		}
		if x[0].high > y[0].high {
			swap(&mut x, &mut y);
		}

		let mut current = y[0];
		y = &y[1..];

		// everything ending before current starts is untouched by it
		let before = x.partition_point(|s| s.high < current.low);
		out.extend_from_slice(&x[..before]);
		x = &x[before..];

		if let Some(first) = x.first() {
			if first.low < current.low {
				current.low = first.low;
			}
		}

		// keep absorbing from alternating sides until nothing touches the
		// end of current
		loop {
			let swallowed = x.partition_point(|s| s.high <= current.high);
			x = &x[swallowed..];

			match x.first() {
				Some(&next) if next.low <= current.high => {
					current.high = next.high;
					let rest = &x[1..];
					x = y;
					y = rest;
				}
				_ => break,
			}
		}

		out.push(current);
	}
}

fn intersection_sweep<I>(
	out: &mut Vec<Interval<I>>,
	x: &[Interval<I>],
	y: &[Interval<I>],
) where
	I: PointType,
{
	let (mut x, mut y): (&[Interval<I>], &[Interval<I>]) = (x, y);

	loop {
		if x.is_empty() {
			swap(&mut x, &mut y);
		}
		if y.is_empty() {
			return;
		}
		if x[0].high > y[0].high {
			swap(&mut x, &mut y);
		}

		let current = y[0];
		y = &y[1..];

		let before = x.partition_point(|s| s.high <= current.low);
		x = &x[before..];
		let mut overlapping = x.partition_point(|s| s.low < current.high);

		if overlapping > 0 {
			let start = out.len();
			out.extend_from_slice(&x[..overlapping]);

			let first = &mut out[start];
			if first.low < current.low {
				first.low = current.low;
			}

			if let Some(last) = out.last_mut() {
				if last.high > current.high {
					last.high = current.high;
					// the rest of it may still overlap the next y
					overlapping -= 1;
				}
			}

			x = &x[overlapping..];
		}
	}
}

fn difference_sweep<I>(
	out: &mut Vec<Interval<I>>,
	x: &[Interval<I>],
	y: &[Interval<I>],
) where
	I: PointType,
{
	let (mut x, mut y): (&[Interval<I>], &[Interval<I>]) = (x, y);

	// whether x currently holds the subtrahend
	let mut inverted = false;

	loop {
		if x.len() < y.len() {
			swap(&mut x, &mut y);
			inverted = !inverted;
		}
		if y.is_empty() {
			if !inverted {
				out.extend_from_slice(x);
			}
			return;
		}
		if x[0].high > y[0].high {
			swap(&mut x, &mut y);
			inverted = !inverted;
		}

		let mut current = y[0];
		y = &y[1..];

		let before = x.partition_point(|s| s.high <= current.low);
		if !inverted {
			out.extend_from_slice(&x[..before]);
		}
		x = &x[before..];

		loop {
			let overlapping = x.partition_point(|s| s.low < current.high);

			if overlapping == 0 {
				if inverted {
					out.push(current);
				}
				break;
			}

			let low = x[0].low;
			match low.cmp(&current.low) {
				Ordering::Less if !inverted => {
					out.push(Interval::new(low, current.low))
				}
				Ordering::Greater if inverted => {
					out.push(Interval::new(current.low, low))
				}
				_ => {}
			}

			if inverted {
				out.extend(gaps(&x[..overlapping]));
			}

			let high = x[overlapping - 1].high;
			x = &x[overlapping..];

			match high.cmp(&current.high) {
				Ordering::Less => {
					if inverted {
						out.push(Interval::new(high, current.high));
					}
					break;
				}
				Ordering::Equal => break,
				Ordering::Greater => {
					// the last overlapping interval sticks out past current,
					// so its remainder becomes the new current
					current = Interval::new(current.high, high);
					swap(&mut x, &mut y);
					inverted = !inverted;
				}
			}
		}
	}
}

fn symmetric_difference_sweep<I>(
	out: &mut Vec<Interval<I>>,
	x: &[Interval<I>],
	y: &[Interval<I>],
) where
	I: PointType,
{
	let (mut x, mut y): (&[Interval<I>], &[Interval<I>]) = (x, y);

	loop {
		if x.is_empty() {
			swap(&mut x, &mut y);
		}
		if y.is_empty() {
			append_intervals(out, x);
			return;
		}
		if x[0].high > y[0].high {
			swap(&mut x, &mut y);
		}

		let mut current = y[0];
		y = &y[1..];

		let before = x.partition_point(|s| s.high <= current.low);
		append_intervals(out, &x[..before]);
		x = &x[before..];

		loop {
			let overlapping = x.partition_point(|s| s.low < current.high);

			if overlapping == 0 {
				append_interval(out, current);
				break;
			}

			let low = x[0].low;
			match low.cmp(&current.low) {
				Ordering::Less => {
					append_interval(out, Interval::new(low, current.low))
				}
				Ordering::Greater => {
					append_interval(out, Interval::new(current.low, low))
				}
				Ordering::Equal => {}
			}

			out.extend(gaps(&x[..overlapping]));

			let high = x[overlapping - 1].high;
			x = &x[overlapping..];

			match high.cmp(&current.high) {
				Ordering::Less => {
					out.push(Interval::new(high, current.high));
					break;
				}
				Ordering::Equal => break,
				Ordering::Greater => {
					current = Interval::new(current.high, high);
					swap(&mut x, &mut y);
				}
			}
		}
	}
}

/// Returns `true` if every point of `x` is in `y`.
pub(crate) fn is_subset_sweep<'a, I>(
	mut x: &'a [Interval<I>],
	mut y: &'a [Interval<I>],
) -> bool
where
	I: PointType,
{
	// whether x currently holds the superset
	let mut inverted = false;

	loop {
		if x.len() < y.len() {
			swap(&mut x, &mut y);
			inverted = !inverted;
		}
		if y.is_empty() {
			return inverted || x.is_empty();
		}
		if x[0].high > y[0].high {
			swap(&mut x, &mut y);
			inverted = !inverted;
		}

		let current = y[0];
		y = &y[1..];

		if inverted {
			// current must sit inside a single superset interval
			let before = x.partition_point(|s| s.high <= current.low);
			x = &x[before..];

			match x.first() {
				Some(first)
					if first.low <= current.low
						&& first.high >= current.high =>
				{
					continue
				}
				_ => return false,
			}
		}

		// every subset interval up to current's end must sit inside current
		if x[0].low < current.low {
			return false;
		}

		let inside = x.partition_point(|s| s.low < current.high);
		if inside > 0 {
			if x[inside - 1].high > current.high {
				return false;
			}
			x = &x[inside..];
		}
	}
}

/// Returns `true` if `x` and `y` have a point in common.
pub(crate) fn overlaps_sweep<'a, I>(
	mut x: &'a [Interval<I>],
	mut y: &'a [Interval<I>],
) -> bool
where
	I: PointType,
{
	loop {
		if x.len() < y.len() {
			swap(&mut x, &mut y);
		}
		if y.is_empty() {
			return false;
		}
		if x[0].high > y[0].high {
			swap(&mut x, &mut y);
		}

		let current = y[0];
		y = &y[1..];

		let before = x.partition_point(|s| s.high <= current.low);
		x = &x[before..];

		if x.first().is_some_and(|first| first.low < current.high) {
			return true;
		}
	}
}

// Operator Impls ==========================

impl<I> BitOr<&IntervalSet<I>> for &IntervalSet<I>
where
	I: PointType,
{
	type Output = IntervalSet<I>;

	fn bitor(self, rhs: &IntervalSet<I>) -> IntervalSet<I> {
		self.union(rhs)
	}
}

impl<I> BitAnd<&IntervalSet<I>> for &IntervalSet<I>
where
	I: PointType,
{
	type Output = IntervalSet<I>;

	fn bitand(self, rhs: &IntervalSet<I>) -> IntervalSet<I> {
		self.intersection(rhs)
	}
}

impl<I> Sub<&IntervalSet<I>> for &IntervalSet<I>
where
	I: PointType,
{
	type Output = IntervalSet<I>;

	fn sub(self, rhs: &IntervalSet<I>) -> IntervalSet<I> {
		self.difference(rhs)
	}
}

impl<I> BitXor<&IntervalSet<I>> for &IntervalSet<I>
where
	I: PointType,
{
	type Output = IntervalSet<I>;

	fn bitxor(self, rhs: &IntervalSet<I>) -> IntervalSet<I> {
		self.symmetric_difference(rhs)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::ie;
	use crate::utils::is_canonical;

	fn set<const N: usize>(intervals: [(i32, i32); N]) -> IntervalSet<i32> {
		IntervalSet::collect(intervals.map(|(low, high)| ie(low, high)))
	}

	fn four() -> IntervalSet<i32> {
		set([(1, 5), (9, 13), (17, 21), (25, 29)])
	}

	type Op = fn(
		IntervalSet<i32>,
		&IntervalSet<i32>,
		&IntervalSet<i32>,
	) -> IntervalSet<i32>;

	fn assert_op<const N: usize>(
		op: Op,
		x: IntervalSet<i32>,
		y: IntervalSet<i32>,
		expected: [(i32, i32); N],
	) {
		let result = op(IntervalSet::new(), &x, &y);
		if result != set(expected) {
			dbg!(&x, &y);
			assert_eq!(result, set(expected));
		}
		assert!(is_canonical(&result.intervals));
	}

	#[test]
	fn union_tests() {
		let op: Op = union_into;
		assert_op(op, set([(5, 7)]), set([(1, 3)]), [(1, 3), (5, 7)]);
		assert_op(op, set([(3, 7)]), set([(1, 5)]), [(1, 7)]);
		assert_op(op, set([(1, 3)]), set([(3, 5)]), [(1, 5)]);
		assert_op(
			op,
			set([(3, 11), (13, 25)]),
			set([(1, 5), (9, 15), (19, 23)]),
			[(1, 25)],
		);
		assert_op(op, four(), set([(9, 21)]), [(1, 5), (9, 21), (25, 29)]);
		assert_op(op, four(), set([(5, 25)]), [(1, 29)]);
		assert_op(
			op,
			four(),
			set([(6, 8)]),
			[(1, 5), (6, 8), (9, 13), (17, 21), (25, 29)],
		);
		assert_op(op, set([]), set([]), []);
		assert_op(op, four(), set([]), [(1, 5), (9, 13), (17, 21), (25, 29)]);
	}

	#[test]
	fn intersection_tests() {
		let op: Op = intersection_into;
		assert_op(op, set([(5, 7)]), set([(1, 3)]), []);
		assert_op(op, set([(3, 7)]), set([(1, 5)]), [(3, 5)]);
		assert_op(
			op,
			set([(3, 11), (13, 25)]),
			set([(1, 5), (9, 15), (19, 23)]),
			[(3, 5), (9, 11), (13, 15), (19, 23)],
		);
		assert_op(op, four(), set([(9, 21)]), [(9, 13), (17, 21)]);
		assert_op(op, four(), set([(11, 19)]), [(11, 13), (17, 19)]);
		assert_op(op, four(), set([(5, 9)]), []);
		assert_op(op, set([]), set([]), []);
	}

	#[test]
	fn difference_tests() {
		let op: Op = difference_into;
		assert_op(op, set([(5, 7)]), set([(1, 3)]), [(5, 7)]);
		assert_op(op, set([(3, 7)]), set([(1, 5)]), [(5, 7)]);
		assert_op(
			op,
			set([(3, 11), (13, 25)]),
			set([(1, 5), (9, 15), (19, 23)]),
			[(5, 9), (15, 19), (23, 25)],
		);
		assert_op(op, four(), set([(9, 21)]), [(1, 5), (25, 29)]);
		assert_op(op, four(), set([(9, 19)]), [(1, 5), (19, 21), (25, 29)]);
		assert_op(op, four(), set([(9, 23)]), [(1, 5), (25, 29)]);
		assert_op(op, four(), set([(9, 25)]), [(1, 5), (25, 29)]);
		assert_op(op, four(), set([(5, 21)]), [(1, 5), (25, 29)]);
		assert_op(op, four(), set([(7, 21)]), [(1, 5), (25, 29)]);
		assert_op(op, four(), set([(11, 21)]), [(1, 5), (9, 11), (25, 29)]);
		assert_op(op, four(), set([(7, 23)]), [(1, 5), (25, 29)]);
		assert_op(op, four(), set([(5, 25)]), [(1, 5), (25, 29)]);
		assert_op(op, set([(9, 21)]), four(), [(13, 17)]);
		assert_op(op, set([]), set([]), []);
	}

	#[test]
	fn symmetric_difference_tests() {
		let op: Op = symmetric_difference_into;
		assert_op(op, set([(5, 7)]), set([(1, 3)]), [(1, 3), (5, 7)]);
		assert_op(op, set([(3, 7)]), set([(1, 5)]), [(1, 3), (5, 7)]);
		assert_op(
			op,
			set([(3, 11), (13, 25)]),
			set([(1, 5), (9, 15), (19, 23)]),
			[(1, 3), (5, 9), (11, 13), (15, 19), (23, 25)],
		);
		assert_op(op, four(), set([(9, 21)]), [(1, 5), (13, 17), (25, 29)]);
		assert_op(
			op,
			four(),
			set([(9, 19)]),
			[(1, 5), (13, 17), (19, 21), (25, 29)],
		);
		assert_op(
			op,
			four(),
			set([(9, 23)]),
			[(1, 5), (13, 17), (21, 23), (25, 29)],
		);
		assert_op(op, four(), set([(9, 25)]), [(1, 5), (13, 17), (21, 29)]);
		assert_op(op, four(), set([(5, 9)]), [(1, 13), (17, 21), (25, 29)]);
		assert_op(op, four(), four(), []);
		assert_op(op, set([]), set([]), []);
	}

	#[test]
	fn interleaved_runs_tests() {
		// every interval of each side spans the end of one on the other
		let x = set([(0, 2), (4, 6), (8, 10)]);
		let y = set([(1, 5), (7, 9)]);

		assert_op(union_into, x.clone(), y.clone(), [(0, 6), (7, 10)]);
		assert_op(
			intersection_into,
			x.clone(),
			y.clone(),
			[(1, 2), (4, 5), (8, 9)],
		);
		assert_op(
			difference_into,
			x.clone(),
			y.clone(),
			[(0, 1), (5, 6), (9, 10)],
		);
		assert_op(difference_into, y.clone(), x.clone(), [(2, 4), (7, 8)]);
		assert_op(
			symmetric_difference_into,
			x.clone(),
			y.clone(),
			[(0, 1), (2, 4), (5, 6), (7, 8), (9, 10)],
		);
		assert!(!x.is_subset_of(&y));
		assert!(x.overlaps(&y));

		let covered = set([(0, 1), (2, 3), (4, 5), (6, 7)]);
		let cover = set([(0, 3), (4, 8)]);
		assert!(covered.is_subset_of(&cover));
		assert!(!cover.is_subset_of(&covered));
		assert_op(
			difference_into,
			cover.clone(),
			covered.clone(),
			[(1, 2), (5, 6), (7, 8)],
		);
		assert_op(
			symmetric_difference_into,
			cover,
			covered,
			[(1, 2), (5, 6), (7, 8)],
		);
	}

	#[test]
	fn predicate_tests() {
		assert!(set([]).is_subset_of(&set([])));
		assert!(set([]).is_subset_of(&four()));
		assert!(!four().is_subset_of(&set([])));
		assert!(set([(3, 9)]).is_subset_of(&set([(1, 11)])));
		assert!(!set([(3, 9)]).is_subset_of(&set([(1, 5), (7, 11)])));
		assert!(four().is_subset_of(&set([(0, 30)])));
		assert!(set([(1, 2), (10, 12)]).is_subset_of(&four()));
		assert!(!set([(1, 2), (12, 14)]).is_subset_of(&four()));
		assert!(four().is_subset_of(&four()));

		assert!(!set([]).overlaps(&set([])));
		assert!(!four().overlaps(&set([])));
		assert!(four().overlaps(&set([(4, 5)])));
		assert!(!four().overlaps(&set([(5, 9), (13, 17)])));
		assert!(four().overlaps(&set([(5, 9), (13, 18)])));
		assert!(set([(5, 9), (28, 40)]).overlaps(&four()));
	}

	#[test]
	fn combine_tests() {
		let multiples = |n: i32| {
			(1..100)
				.filter(|x| x % n == 0)
				.map(|x| ie(x, x + 1))
				.collect::<IntervalSet<i32>>()
		};
		let (x2, x3, x5) = (multiples(2), multiples(3), multiples(5));

		assert_eq!(
			combine(intersection_into, [&x2, &x3, &x5]),
			set([(30, 31), (60, 61), (90, 91)])
		);
		assert_eq!(
			combine(difference_into, [&four(), &set([(1, 3)]), &set([(26, 28)])]),
			set([(3, 5), (9, 13), (17, 21), (25, 26), (28, 29)])
		);
		assert_eq!(
			combine(union_into, [&set([(1, 2)]), &set([(2, 3)]), &set([(3, 4)])]),
			set([(1, 4)])
		);
		assert_eq!(
			combine(symmetric_difference_into, [&four(), &four(), &four()]),
			four()
		);
		assert_eq!(combine(union_into, [&four()]), four());
		assert_eq!(combine(union_into, core::iter::empty::<&IntervalSet<i32>>()), set([]));
	}

	#[test]
	fn operator_tests() {
		let x = set([(1, 5), (9, 13)]);
		let y = set([(3, 10)]);
		assert_eq!(&x | &y, set([(1, 13)]));
		assert_eq!(&x & &y, set([(3, 5), (9, 10)]));
		assert_eq!(&x - &y, set([(1, 3), (10, 13)]));
		assert_eq!(&x ^ &y, set([(1, 3), (5, 9), (10, 13)]));
	}

	mod proptests {
		use proptest::prelude::*;

		use super::super::*;
		use crate::ie;
		use crate::utils::is_canonical;

		const DOMAIN: usize = 256;

		/// A set over `u8` built from a few wide random ranges, which often
		/// overlap and touch each other.
		fn wide_interval_set() -> impl Strategy<Value = IntervalSet<u8>> {
			prop::collection::vec((any::<u8>(), any::<u8>()), 0..8).prop_map(
				|ranges| {
					let mut set = IntervalSet::new();
					for (a, b) in ranges {
						set.insert_range(a.min(b), a.max(b));
					}
					set
				},
			)
		}

		/// A set over `u8` built from many short ranges, so that a single
		/// interval of one set regularly spans several of another.
		fn dense_interval_set() -> impl Strategy<Value = IntervalSet<u8>> {
			prop::collection::vec((0_u8..250, 1_u8..5), 0..40).prop_map(
				|ranges| {
					let mut set = IntervalSet::new();
					for (low, width) in ranges {
						set.insert_range(low, low + width);
					}
					set
				},
			)
		}

		fn interval_set() -> impl Strategy<Value = IntervalSet<u8>> {
			prop_oneof![wide_interval_set(), dense_interval_set()]
		}

		fn bitmap(set: &IntervalSet<u8>) -> [bool; DOMAIN] {
			let mut bits = [false; DOMAIN];
			for interval in set {
				for point in interval.low..interval.high {
					bits[usize::from(point)] = true;
				}
			}
			bits
		}

		fn from_bitmap(bits: [bool; DOMAIN]) -> IntervalSet<u8> {
			let mut intervals = Vec::new();
			let mut point = 0;
			while point < DOMAIN {
				if bits[point] {
					let low = point;
					while point < DOMAIN && bits[point] {
						point += 1;
					}
					// u8::MAX is never in a set so the run ends by 255
					intervals.push(ie(low as u8, point as u8));
				}
				point += 1;
			}
			IntervalSet::collect(intervals)
		}

		fn zip_bits(
			x: &IntervalSet<u8>,
			y: &IntervalSet<u8>,
			f: impl Fn(bool, bool) -> bool,
		) -> IntervalSet<u8> {
			let (x, y) = (bitmap(x), bitmap(y));
			let mut bits = [false; DOMAIN];
			for point in 0..DOMAIN {
				bits[point] = f(x[point], y[point]);
			}
			from_bitmap(bits)
		}

		proptest! {
			#[test]
			fn union_matches_bitmap(x in interval_set(), y in interval_set()) {
				prop_assert_eq!(x.union(&y), zip_bits(&x, &y, |a, b| a || b));
			}

			#[test]
			fn intersection_matches_bitmap(x in interval_set(), y in interval_set()) {
				prop_assert_eq!(x.intersection(&y), zip_bits(&x, &y, |a, b| a && b));
			}

			#[test]
			fn difference_matches_bitmap(x in interval_set(), y in interval_set()) {
				prop_assert_eq!(x.difference(&y), zip_bits(&x, &y, |a, b| a && !b));
			}

			#[test]
			fn symmetric_difference_matches_bitmap(x in interval_set(), y in interval_set()) {
				prop_assert_eq!(x.symmetric_difference(&y), zip_bits(&x, &y, |a, b| a != b));
			}

			#[test]
			fn insert_range_matches_bitmap(x in interval_set(), y in interval_set()) {
				let mut z = x.clone();
				z.insert_intervals(y.clone());
				prop_assert_eq!(z, zip_bits(&x, &y, |a, b| a || b));
			}

			#[test]
			fn remove_range_matches_bitmap(x in interval_set(), y in interval_set()) {
				let mut z = x.clone();
				z.remove_intervals(y.clone());
				prop_assert_eq!(z, zip_bits(&x, &y, |a, b| a && !b));
			}

			#[test]
			fn is_subset_of_matches_bitmap(x in interval_set(), y in interval_set()) {
				let (xs, ys) = (bitmap(&x), bitmap(&y));
				let expected = (0..DOMAIN).all(|point| !xs[point] || ys[point]);
				prop_assert_eq!(x.is_subset_of(&y), expected);
				prop_assert!(x.intersection(&y).is_subset_of(&x));
				prop_assert!(x.is_subset_of(&x.union(&y)));
			}

			#[test]
			fn overlaps_matches_bitmap(x in interval_set(), y in interval_set()) {
				let (xs, ys) = (bitmap(&x), bitmap(&y));
				let expected = (0..DOMAIN).any(|point| xs[point] && ys[point]);
				prop_assert_eq!(x.overlaps(&y), expected);
			}

			#[test]
			fn contains_matches_bitmap(x in interval_set(), low in any::<u8>(), high in any::<u8>()) {
				let bits = bitmap(&x);
				prop_assert_eq!(x.contains(low), bits[usize::from(low)]);

				let expected = low < high
					&& (usize::from(low)..usize::from(high)).all(|point| bits[point]);
				prop_assert_eq!(x.contains_range(low, high), expected);
			}

			#[test]
			fn mutations_stay_canonical(
				ops in prop::collection::vec((any::<bool>(), any::<u8>(), any::<u8>()), 0..32)
			) {
				let mut set = IntervalSet::new();
				for (insert, low, high) in ops {
					if insert {
						set.insert_range(low, high);
					} else {
						set.remove_range(low, high);
					}
					prop_assert!(is_canonical(&set.intervals));
				}
			}

			#[test]
			fn collect_is_order_independent(
				ranges in prop::collection::vec((any::<u8>(), any::<u8>()), 0..12)
			) {
				let intervals = ranges.iter().map(|&(low, high)| ie(low, high)).collect::<Vec<_>>();

				let mut expected = IntervalSet::new();
				expected.insert_intervals(intervals.iter().copied());

				let collected = IntervalSet::collect(intervals.iter().copied());
				prop_assert!(is_canonical(&collected.intervals));
				prop_assert_eq!(&collected, &expected);
				prop_assert_eq!(IntervalSet::collect(collected.clone()), collected);
			}

			#[test]
			fn algebraic_laws(x in interval_set(), y in interval_set(), z in interval_set()) {
				prop_assert_eq!(x.union(&y), y.union(&x));
				prop_assert_eq!(x.intersection(&y), y.intersection(&x));
				prop_assert_eq!(x.symmetric_difference(&y), y.symmetric_difference(&x));
				prop_assert_eq!(x.union(&y).union(&z), x.union(&y.union(&z)));
				prop_assert_eq!(
					x.intersection(&y).intersection(&z),
					x.intersection(&y.intersection(&z))
				);
				prop_assert_eq!(
					x.difference(&y),
					x.symmetric_difference(&x.intersection(&y))
				);
				prop_assert_eq!(
					x.symmetric_difference(&y),
					x.difference(&y).union(&y.difference(&x))
				);
			}

			#[test]
			fn combine_folds_left(x in interval_set(), y in interval_set(), z in interval_set()) {
				prop_assert_eq!(
					combine(difference_into, [&x, &y, &z]),
					x.difference(&y).difference(&z)
				);
				prop_assert_eq!(
					combine(union_into, [&x, &y, &z]),
					x.union(&y).union(&z)
				);
				prop_assert_eq!(
					combine(symmetric_difference_into, [&x, &y, &z, &x]),
					y.symmetric_difference(&z)
				);
			}
		}
	}
}
