//! A module containing [`Interval`] and it's constructor functions.

use core::fmt;
use core::ops::Range;

use crate::discrete::{Discrete, PointType};
use crate::IntervalSet;

/// A half-open interval, `low` is included and `high` is excluded.
///
/// An interval is only considered valid if it contains at least one
/// point, that is `low < high`, with the single exception of the
/// all-default interval (such as `[0, 0)` for integers) which is used as a
/// sentinel for "no interval". See [`Interval::is_valid()`].
///
/// Operations on [`IntervalSet`] never store invalid intervals, and
/// silently ignore invalid intervals passed to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Interval<I> {
	/// The start of the interval, inclusive.
	pub low: I,
	/// The end of the interval, exclusive.
	pub high: I,
}

/// The error returned when converting an invalid interval into an
/// [`IntervalSet`]. Contains the interval that was not converted.
#[derive(PartialEq, Debug)]
pub struct InvalidIntervalError<I> {
	/// The interval which was not converted, because it is invalid.
	pub interval: Interval<I>,
}

impl<I> Interval<I> {
	/// Makes the interval `[low, high)`, which may be invalid if
	/// `low >= high`.
	///
	/// # Examples
	/// ```
	/// use discrete_intervals::Interval;
	///
	/// let interval = Interval::new(1, 4);
	///
	/// assert_eq!(interval.low, 1);
	/// assert_eq!(interval.high, 4);
	/// ```
	pub const fn new(low: I, high: I) -> Self {
		Interval { low, high }
	}
}

impl<I> Interval<I>
where
	I: PointType,
{
	/// Makes the interval containing only `point`, that is
	/// `[point, successor(point))`.
	///
	/// # Panics
	///
	/// Panics if `point` is the maximum value of its type, since the
	/// exclusive end of the interval cannot be represented.
	///
	/// # Examples
	/// ```
	/// use discrete_intervals::Interval;
	///
	/// assert_eq!(Interval::unit(7_u8), Interval::new(7, 8));
	/// ```
	pub fn unit(point: I) -> Self
	where
		I: Discrete,
	{
		match point.successor() {
			Some(high) => Interval { low: point, high },
			None => panic!(
				"cannot make a unit interval at the maximum value of a type"
			),
		}
	}

	/// Returns `true` if the interval contains no points, that is
	/// `low >= high`.
	pub fn is_empty(&self) -> bool {
		self.low >= self.high
	}

	/// Returns `true` if the interval contains `point`.
	pub fn contains(&self, point: I) -> bool {
		self.low <= point && point < self.high
	}

	/// Returns `true` if the two intervals share at least one point.
	pub fn overlaps(&self, other: &Self) -> bool {
		self.low < other.high && other.low < self.high
	}

	/// Returns `true` if the interval is valid.
	///
	/// Valid intervals are those with `low < high` plus the all-default
	/// sentinel interval.
	///
	/// # Examples
	/// ```
	/// use discrete_intervals::Interval;
	///
	/// assert_eq!(Interval::new(1, 4).is_valid(), true);
	/// assert_eq!(Interval::new(0, 0).is_valid(), true);
	/// assert_eq!(Interval::new(4, 4).is_valid(), false);
	/// assert_eq!(Interval::new(9, 8).is_valid(), false);
	/// ```
	pub fn is_valid(&self) -> bool
	where
		I: Default,
	{
		self.low < self.high || self.is_sentinel()
	}

	fn is_sentinel(&self) -> bool
	where
		I: Default,
	{
		self.low == I::default() && self.high == I::default()
	}

	/// Converts the interval into an [`IntervalSet`].
	///
	/// The sentinel interval becomes the empty set, any other valid
	/// interval becomes a set of exactly that interval.
	///
	/// If the interval is invalid an [`InvalidIntervalError`] is returned.
	///
	/// # Examples
	/// ```
	/// use discrete_intervals::{Interval, InvalidIntervalError};
	///
	/// assert_eq!(
	/// 	Interval::new(1, 4).try_to_set().map(|set| set.len()),
	/// 	Ok(1)
	/// );
	/// assert_eq!(
	/// 	Interval::new(0, 0).try_to_set().map(|set| set.len()),
	/// 	Ok(0)
	/// );
	/// assert_eq!(
	/// 	Interval::new(4, 4).try_to_set(),
	/// 	Err(InvalidIntervalError {
	/// 		interval: Interval::new(4, 4)
	/// 	})
	/// );
	/// ```
	pub fn try_to_set(self) -> Result<IntervalSet<I>, InvalidIntervalError<I>>
	where
		I: Default,
	{
		if self.low < self.high {
			Ok(IntervalSet::from_canonical(vec![self]))
		} else if self.is_sentinel() {
			Ok(IntervalSet::new())
		} else {
			Err(InvalidIntervalError { interval: self })
		}
	}

	/// Converts the interval into an [`IntervalSet`].
	///
	/// See [`Interval::try_to_set()`] for the non-panicking version.
	///
	/// # Panics
	///
	/// Panics if the interval is invalid. See [`Interval::is_valid()`].
	///
	/// # Examples
	/// ```
	/// use discrete_intervals::Interval;
	///
	/// let set = Interval::new(1, 4).to_set();
	///
	/// assert_eq!(set.as_slice(), [Interval::new(1, 4)]);
	/// ```
	pub fn to_set(self) -> IntervalSet<I>
	where
		I: Default,
	{
		match self.try_to_set() {
			Ok(set) => set,
			Err(_) => panic!("invalid interval converted to a set"),
		}
	}
}

/// An included-excluded interval, shorthand for [`Interval::new()`].
pub fn ie<I>(low: I, high: I) -> Interval<I> {
	Interval { low, high }
}

impl<I> From<Range<I>> for Interval<I> {
	fn from(range: Range<I>) -> Self {
		Interval {
			low: range.start,
			high: range.end,
		}
	}
}

impl<I> From<Interval<I>> for Range<I> {
	fn from(interval: Interval<I>) -> Self {
		interval.low..interval.high
	}
}

impl<I> fmt::Display for Interval<I>
where
	I: fmt::Display,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[{}, {})", self.low, self.high)
	}
}
