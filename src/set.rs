//! A module containing [`IntervalSet`].

use core::fmt;
use core::iter::once;

use smallvec::SmallVec;

use crate::discrete::{Discrete, PointType};
use crate::ops::{
	difference_into, intersection_into, is_subset_sweep, overlaps_sweep,
	symmetric_difference_into, union_into,
};
use crate::utils::is_canonical;
use crate::Interval;

/// An ordered set of half-open intervals stored in a sorted [`Vec`].
///
/// `I` is the generic type parameter for the [`Ord`] point type the
/// intervals are over.
///
/// The intervals in the set are always kept canonical: sorted by `low`,
/// every interval non-empty, and no two intervals overlapping or touching
/// (touching intervals such as `[1, 4)` and `[4, 6)` are merged into
/// `[1, 6)`). This means two sets containing the same points are always
/// equal interval-for-interval.
///
/// # Examples
/// ```
/// use discrete_intervals::{ie, IntervalSet};
///
/// let mut set = IntervalSet::new();
///
/// set.insert_range(1, 4);
/// set.insert_range(9, 12);
/// set.insert_range(4, 9);
///
/// assert_eq!(set.as_slice(), [ie(1, 12)]);
///
/// set.remove(6);
///
/// assert_eq!(set.as_slice(), [ie(1, 6), ie(7, 12)]);
/// assert_eq!(set.contains(6), false);
/// assert_eq!(set.contains_range(7, 12), true);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IntervalSet<I> {
	pub(crate) intervals: Vec<Interval<I>>,
}

impl<I> IntervalSet<I> {
	/// Makes a new, empty `IntervalSet`.
	///
	/// # Examples
	/// ```
	/// use discrete_intervals::IntervalSet;
	///
	/// let set: IntervalSet<i8> = IntervalSet::new();
	/// ```
	pub const fn new() -> Self {
		IntervalSet {
			intervals: Vec::new(),
		}
	}

	/// Returns the number of intervals in the set.
	///
	/// # Examples
	/// ```
	/// use discrete_intervals::{ie, IntervalSet};
	///
	/// let set = IntervalSet::collect([ie(1, 4), ie(4, 6), ie(8, 9)]);
	///
	/// assert_eq!(set.len(), 2);
	/// ```
	pub fn len(&self) -> usize {
		self.intervals.len()
	}

	/// Returns `true` if the set contains no intervals, and `false` if it
	/// does.
	pub fn is_empty(&self) -> bool {
		self.intervals.is_empty()
	}

	/// Returns an iterator over every interval in the set in ascending
	/// order.
	pub fn iter(&self) -> core::slice::Iter<'_, Interval<I>> {
		self.intervals.iter()
	}

	/// Returns the intervals of the set as a sorted slice.
	pub fn as_slice(&self) -> &[Interval<I>] {
		&self.intervals
	}

	/// Returns the first interval in the set, if any.
	pub fn first(&self) -> Option<&Interval<I>> {
		self.intervals.first()
	}

	/// Returns the last interval in the set, if any.
	pub fn last(&self) -> Option<&Interval<I>> {
		self.intervals.last()
	}

	/// Removes every interval from the set, keeping the allocated
	/// storage.
	pub fn clear(&mut self) {
		self.intervals.clear();
	}
}

impl<I> IntervalSet<I>
where
	I: PointType,
{
	/// Wraps intervals which are already known to be canonical.
	pub(crate) fn from_canonical(intervals: Vec<Interval<I>>) -> Self {
		debug_assert!(is_canonical(&intervals));

		IntervalSet { intervals }
	}

	/// Makes a canonical set from intervals in any order, which may
	/// overlap or touch each other.
	///
	/// Empty and invalid intervals are skipped.
	///
	/// This is linear if the intervals are given sorted by `low`, and
	/// falls back to [`IntervalSet::insert_range()`] for each interval
	/// which starts before the previous one.
	///
	/// # Examples
	/// ```
	/// use discrete_intervals::{ie, IntervalSet};
	///
	/// let set = IntervalSet::collect([
	/// 	ie(9, 12),
	/// 	ie(1, 3),
	/// 	ie(2, 5),
	/// 	ie(7, 7),
	/// 	ie(5, 6),
	/// ]);
	///
	/// assert_eq!(set.as_slice(), [ie(1, 6), ie(9, 12)]);
	/// ```
	pub fn collect<T>(intervals: T) -> Self
	where
		T: IntoIterator<Item = Interval<I>>,
	{
		IntervalSet::collect_into(IntervalSet::new(), intervals)
	}

	/// Like [`IntervalSet::collect()`] but reuses the storage of `buffer`,
	/// whose previous contents are discarded.
	///
	/// # Examples
	/// ```
	/// use discrete_intervals::{ie, IntervalSet};
	///
	/// let buffer = IntervalSet::collect([ie(100, 200)]);
	/// let set = IntervalSet::collect_into(buffer, [ie(1, 3), ie(3, 5)]);
	///
	/// assert_eq!(set.as_slice(), [ie(1, 5)]);
	/// ```
	pub fn collect_into<T>(buffer: IntervalSet<I>, intervals: T) -> Self
	where
		T: IntoIterator<Item = Interval<I>>,
	{
		let mut set = buffer;
		set.clear();

		for interval in intervals {
			if interval.is_empty() {
				continue;
			}

			if let Some(last) = set.intervals.last_mut() {
				if interval.low < last.low {
					// out of order, take the slow path
					set.insert_range(interval.low, interval.high);
					continue;
				}
				if interval.low <= last.high {
					last.high = last.high.max(interval.high);
					continue;
				}
			}

			set.intervals.push(interval);
		}

		debug_assert!(is_canonical(&set.intervals));

		set
	}

	/// Adds the single point `point` to the set, merging it with any
	/// intervals it touches.
	///
	/// # Panics
	///
	/// Panics if `point` is the maximum value of its type, see
	/// [`Interval::unit()`].
	///
	/// # Examples
	/// ```
	/// use discrete_intervals::{ie, IntervalSet};
	///
	/// let mut set = IntervalSet::collect([ie(1, 4), ie(9, 12)]);
	///
	/// set.insert(6);
	/// assert_eq!(set.as_slice(), [ie(1, 4), ie(6, 7), ie(9, 12)]);
	///
	/// set.insert(10);
	/// assert_eq!(set.as_slice(), [ie(1, 4), ie(6, 7), ie(9, 12)]);
	/// ```
	pub fn insert(&mut self, point: I)
	where
		I: Discrete,
	{
		self.insert_interval(Interval::unit(point));
	}

	/// Adds the interval `[low, high)` to the set, merging it with every
	/// interval it overlaps or touches.
	///
	/// If `low >= high` the set is left unchanged.
	///
	/// # Examples
	/// ```
	/// use discrete_intervals::{ie, IntervalSet};
	///
	/// let mut set = IntervalSet::collect([ie(1, 4), ie(9, 12)]);
	///
	/// set.insert_range(5, 8);
	/// assert_eq!(set.as_slice(), [ie(1, 4), ie(5, 8), ie(9, 12)]);
	///
	/// set.insert_range(4, 9);
	/// assert_eq!(set.as_slice(), [ie(1, 12)]);
	/// ```
	pub fn insert_range(&mut self, low: I, high: I) {
		if low >= high {
			return;
		}

		let intervals = &mut self.intervals;

		let mut start = intervals.partition_point(|x| x.low <= low);
		let mut end = intervals.partition_point(|x| x.high <= high);

		if start > end {
			// [low, high) is already inside intervals[end]
			return;
		}

		let (mut low, mut high) = (low, high);

		if start > 0 && intervals[start - 1].high >= low {
			low = intervals[start - 1].low;
			start -= 1;
		}
		if end < intervals.len() && intervals[end].low <= high {
			high = intervals[end].high;
			end += 1;
		}

		let merged = Interval::new(low, high);

		if start == end {
			intervals.insert(start, merged);
		} else {
			intervals.splice(start..end, once(merged));
		}

		debug_assert!(is_canonical(intervals));
	}

	/// Adds `interval` to the set, see [`IntervalSet::insert_range()`].
	pub fn insert_interval(&mut self, interval: Interval<I>) {
		self.insert_range(interval.low, interval.high);
	}

	/// Adds every interval in `intervals` to the set, see
	/// [`IntervalSet::insert_range()`].
	pub fn insert_intervals<T>(&mut self, intervals: T)
	where
		T: IntoIterator<Item = Interval<I>>,
	{
		for interval in intervals {
			self.insert_interval(interval);
		}
	}

	/// Removes the single point `point` from the set, splitting the
	/// interval containing it if necessary.
	///
	/// # Panics
	///
	/// Panics if `point` is the maximum value of its type, see
	/// [`Interval::unit()`].
	///
	/// # Examples
	/// ```
	/// use discrete_intervals::{ie, IntervalSet};
	///
	/// let mut set = IntervalSet::collect([ie(1, 4), ie(7, 10), ie(13, 16)]);
	///
	/// set.remove(8);
	///
	/// assert_eq!(
	/// 	set.as_slice(),
	/// 	[ie(1, 4), ie(7, 8), ie(9, 10), ie(13, 16)]
	/// );
	/// ```
	pub fn remove(&mut self, point: I)
	where
		I: Discrete,
	{
		self.remove_interval(Interval::unit(point));
	}

	/// Removes every point in `[low, high)` from the set, truncating or
	/// splitting the intervals it partially overlaps.
	///
	/// If `low >= high` the set is left unchanged.
	///
	/// # Examples
	/// ```
	/// use discrete_intervals::{ie, IntervalSet};
	///
	/// let mut set = IntervalSet::collect([ie(1, 4), ie(7, 10), ie(13, 16)]);
	///
	/// set.remove_range(8, 10);
	/// assert_eq!(set.as_slice(), [ie(1, 4), ie(7, 8), ie(13, 16)]);
	///
	/// set.remove_range(2, 15);
	/// assert_eq!(set.as_slice(), [ie(1, 2), ie(15, 16)]);
	/// ```
	pub fn remove_range(&mut self, low: I, high: I) {
		if low >= high {
			return;
		}

		let intervals = &mut self.intervals;

		let start = intervals.partition_point(|x| x.high <= low);
		let end =
			start + intervals[start..].partition_point(|x| x.low < high);

		if start == end {
			return;
		}

		let first = intervals[start];
		let last = intervals[end - 1];

		let mut remainders = SmallVec::<[Interval<I>; 2]>::new();
		if first.low < low {
			remainders.push(Interval::new(first.low, low));
		}
		if last.high > high {
			remainders.push(Interval::new(high, last.high));
		}

		intervals.splice(start..end, remainders);

		debug_assert!(is_canonical(intervals));
	}

	/// Removes `interval` from the set, see [`IntervalSet::remove_range()`].
	pub fn remove_interval(&mut self, interval: Interval<I>) {
		self.remove_range(interval.low, interval.high);
	}

	/// Removes every interval in `intervals` from the set, see
	/// [`IntervalSet::remove_range()`].
	pub fn remove_intervals<T>(&mut self, intervals: T)
	where
		T: IntoIterator<Item = Interval<I>>,
	{
		for interval in intervals {
			self.remove_interval(interval);
		}
	}

	/// Returns `true` if the set contains `point`, and `false` if not.
	///
	/// # Examples
	/// ```
	/// use discrete_intervals::{ie, IntervalSet};
	///
	/// let set = IntervalSet::collect([ie(1, 3), ie(5, 7)]);
	///
	/// assert_eq!(set.contains(0), false);
	/// assert_eq!(set.contains(1), true);
	/// assert_eq!(set.contains(3), false);
	/// assert_eq!(set.contains(6), true);
	/// ```
	pub fn contains(&self, point: I) -> bool {
		let candidate = self.intervals.partition_point(|x| x.high <= point);

		self.intervals
			.get(candidate)
			.is_some_and(|x| x.low <= point)
	}

	/// Returns `true` if the set contains every point in `[low, high)`,
	/// and `false` if not.
	///
	/// Empty ranges (`low >= high`) are never contained.
	///
	/// # Examples
	/// ```
	/// use discrete_intervals::{ie, IntervalSet};
	///
	/// let set = IntervalSet::collect([ie(1, 3), ie(5, 7)]);
	///
	/// assert_eq!(set.contains_range(1, 3), true);
	/// assert_eq!(set.contains_range(3, 5), false);
	/// assert_eq!(set.contains_range(1, 7), false);
	/// assert_eq!(set.contains_range(2, 2), false);
	/// ```
	pub fn contains_range(&self, low: I, high: I) -> bool {
		if low >= high {
			return false;
		}

		let candidate = self.intervals.partition_point(|x| x.high <= low);

		self.intervals
			.get(candidate)
			.is_some_and(|x| x.low <= low && x.high >= high)
	}

	/// Returns `true` if the set contains every point in `interval`, see
	/// [`IntervalSet::contains_range()`].
	pub fn contains_interval(&self, interval: Interval<I>) -> bool {
		self.contains_range(interval.low, interval.high)
	}

	/// Returns the smallest interval containing every point in the set,
	/// or `None` if the set is empty.
	///
	/// Use `extent().unwrap_or_default()` to get the all-default sentinel
	/// interval (such as `[0, 0)`) for an empty set instead.
	///
	/// # Examples
	/// ```
	/// use discrete_intervals::{ie, IntervalSet};
	///
	/// let set = IntervalSet::collect([ie(1, 3), ie(5, 7)]);
	///
	/// assert_eq!(set.extent(), Some(ie(1, 7)));
	/// assert_eq!(IntervalSet::<u8>::new().extent(), None);
	/// assert_eq!(
	/// 	IntervalSet::<u8>::new().extent().unwrap_or_default(),
	/// 	ie(0, 0)
	/// );
	/// ```
	pub fn extent(&self) -> Option<Interval<I>> {
		match (self.intervals.first(), self.intervals.last()) {
			(Some(first), Some(last)) => {
				Some(Interval::new(first.low, last.high))
			}
			_ => None,
		}
	}

	/// Returns `true` if every point in `self` is also in `other`.
	///
	/// # Examples
	/// ```
	/// use discrete_intervals::{ie, IntervalSet};
	///
	/// let set = IntervalSet::collect([ie(3, 9)]);
	///
	/// assert!(set.is_subset_of(&IntervalSet::collect([ie(1, 11)])));
	/// assert!(!set.is_subset_of(&IntervalSet::collect([ie(1, 5), ie(7, 11)])));
	/// ```
	pub fn is_subset_of(&self, other: &IntervalSet<I>) -> bool {
		is_subset_sweep(&self.intervals, &other.intervals)
	}

	/// Returns `true` if `self` and `other` have at least one point in
	/// common.
	///
	/// # Examples
	/// ```
	/// use discrete_intervals::{ie, IntervalSet};
	///
	/// let set = IntervalSet::collect([ie(1, 4), ie(8, 10)]);
	///
	/// assert!(set.overlaps(&IntervalSet::collect([ie(3, 5)])));
	/// assert!(!set.overlaps(&IntervalSet::collect([ie(4, 8)])));
	/// ```
	pub fn overlaps(&self, other: &IntervalSet<I>) -> bool {
		overlaps_sweep(&self.intervals, &other.intervals)
	}

	/// Returns the set of points that are in `self`, or `other`, or both.
	///
	/// See [`union_into()`](crate::union_into) to reuse an existing
	/// allocation for the result.
	///
	/// # Examples
	/// ```
	/// use discrete_intervals::{ie, IntervalSet};
	///
	/// let x = IntervalSet::collect([ie(1, 4), ie(9, 12)]);
	/// let y = IntervalSet::collect([ie(3, 6), ie(12, 14)]);
	///
	/// assert_eq!(x.union(&y).as_slice(), [ie(1, 6), ie(9, 14)]);
	/// ```
	pub fn union(&self, other: &IntervalSet<I>) -> IntervalSet<I> {
		union_into(IntervalSet::new(), self, other)
	}

	/// Returns the set of points that are in both `self` and `other`.
	///
	/// # Examples
	/// ```
	/// use discrete_intervals::{ie, IntervalSet};
	///
	/// let x = IntervalSet::collect([ie(1, 4), ie(9, 12)]);
	/// let y = IntervalSet::collect([ie(3, 10)]);
	///
	/// assert_eq!(x.intersection(&y).as_slice(), [ie(3, 4), ie(9, 10)]);
	/// ```
	pub fn intersection(&self, other: &IntervalSet<I>) -> IntervalSet<I> {
		intersection_into(IntervalSet::new(), self, other)
	}

	/// Returns the set of points that are in `self` but not in `other`.
	///
	/// # Examples
	/// ```
	/// use discrete_intervals::{ie, IntervalSet};
	///
	/// let x = IntervalSet::collect([ie(3, 11), ie(13, 25)]);
	/// let y = IntervalSet::collect([ie(1, 5), ie(9, 15), ie(19, 23)]);
	///
	/// assert_eq!(
	/// 	x.difference(&y).as_slice(),
	/// 	[ie(5, 9), ie(15, 19), ie(23, 25)]
	/// );
	/// ```
	pub fn difference(&self, other: &IntervalSet<I>) -> IntervalSet<I> {
		difference_into(IntervalSet::new(), self, other)
	}

	/// Returns the set of points that are in exactly one of `self` and
	/// `other`.
	///
	/// # Examples
	/// ```
	/// use discrete_intervals::{ie, IntervalSet};
	///
	/// let x = IntervalSet::collect([ie(3, 7)]);
	/// let y = IntervalSet::collect([ie(1, 5)]);
	///
	/// assert_eq!(
	/// 	x.symmetric_difference(&y).as_slice(),
	/// 	[ie(1, 3), ie(5, 7)]
	/// );
	/// ```
	pub fn symmetric_difference(
		&self,
		other: &IntervalSet<I>,
	) -> IntervalSet<I> {
		symmetric_difference_into(IntervalSet::new(), self, other)
	}
}

// Trait Impls ==========================

impl<I> Default for IntervalSet<I> {
	fn default() -> Self {
		IntervalSet::new()
	}
}

impl<I> FromIterator<Interval<I>> for IntervalSet<I>
where
	I: PointType,
{
	fn from_iter<T: IntoIterator<Item = Interval<I>>>(iter: T) -> Self {
		IntervalSet::collect(iter)
	}
}

impl<I> Extend<Interval<I>> for IntervalSet<I>
where
	I: PointType,
{
	fn extend<T: IntoIterator<Item = Interval<I>>>(&mut self, iter: T) {
		self.insert_intervals(iter);
	}
}

impl<I> From<IntervalSet<I>> for Vec<Interval<I>> {
	fn from(set: IntervalSet<I>) -> Self {
		set.intervals
	}
}

impl<I> IntoIterator for IntervalSet<I> {
	type Item = Interval<I>;
	type IntoIter = IntoIter<I>;
	fn into_iter(self) -> Self::IntoIter {
		IntoIter {
			inner: self.intervals.into_iter(),
		}
	}
}

impl<'a, I> IntoIterator for &'a IntervalSet<I> {
	type Item = &'a Interval<I>;
	type IntoIter = core::slice::Iter<'a, Interval<I>>;
	fn into_iter(self) -> Self::IntoIter {
		self.intervals.iter()
	}
}

/// An owning iterator over the intervals of an [`IntervalSet`].
///
/// This `struct` is created by the [`into_iter`] method on
/// [`IntervalSet`] (provided by the [`IntoIterator`] trait). See
/// its documentation for more.
///
/// [`into_iter`]: IntoIterator::into_iter
/// [`IntoIterator`]: core::iter::IntoIterator
pub struct IntoIter<I> {
	inner: std::vec::IntoIter<Interval<I>>,
}
impl<I> Iterator for IntoIter<I> {
	type Item = Interval<I>;
	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next()
	}
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}
impl<I> DoubleEndedIterator for IntoIter<I> {
	fn next_back(&mut self) -> Option<Self::Item> {
		self.inner.next_back()
	}
}
impl<I> ExactSizeIterator for IntoIter<I> {}

impl<I> fmt::Display for IntervalSet<I>
where
	I: fmt::Display,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("{")?;
		for (index, interval) in self.intervals.iter().enumerate() {
			if index > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{interval}")?;
		}
		f.write_str("}")
	}
}
