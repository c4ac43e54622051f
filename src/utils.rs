use itertools::Itertools;

use crate::{Interval, PointType};

/// Returns `true` if the intervals are sorted, non-empty, non-overlapping
/// and non-touching.
pub(crate) fn is_canonical<I>(intervals: &[Interval<I>]) -> bool
where
	I: PointType,
{
	intervals.iter().all(|interval| interval.low < interval.high)
		&& intervals
			.iter()
			.tuple_windows()
			.all(|(first, second)| first.high < second.low)
}

/// Pushes `interval` onto `intervals`, merging it into the last interval
/// if the two touch.
pub(crate) fn append_interval<I>(
	intervals: &mut Vec<Interval<I>>,
	interval: Interval<I>,
) where
	I: PointType,
{
	if let Some(last) = intervals.last_mut() {
		if last.high == interval.low {
			last.high = interval.high;
			return;
		}
	}

	intervals.push(interval);
}

/// Extends `intervals` with an already sorted run, only the first of which
/// may touch the current last interval.
pub(crate) fn append_intervals<I>(
	intervals: &mut Vec<Interval<I>>,
	run: &[Interval<I>],
) where
	I: PointType,
{
	if let Some((first, rest)) = run.split_first() {
		append_interval(intervals, *first);
		intervals.extend_from_slice(rest);
	}
}

/// The gaps between consecutive intervals of a sorted run.
pub(crate) fn gaps<I>(
	run: &[Interval<I>],
) -> impl Iterator<Item = Interval<I>> + '_
where
	I: PointType,
{
	run.iter()
		.tuple_windows()
		.map(|(first, second)| Interval::new(first.high, second.low))
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::ie;

	#[test]
	fn is_canonical_tests() {
		let test_cases = [
			(vec![], true),
			(vec![ie(1, 4)], true),
			(vec![ie(1, 4), ie(5, 8)], true),
			(vec![ie(1, 4), ie(4, 8)], false),
			(vec![ie(1, 5), ie(4, 8)], false),
			(vec![ie(5, 8), ie(1, 4)], false),
			(vec![ie(4, 4)], false),
		];

		for (intervals, expected) in test_cases {
			if is_canonical(&intervals) != expected {
				dbg!(intervals);
				panic!("is_canonical() returned the wrong result");
			}
		}
	}

	#[test]
	fn append_interval_tests() {
		let mut intervals = vec![ie(1, 4)];

		append_interval(&mut intervals, ie(4, 6));
		assert_eq!(intervals, [ie(1, 6)]);

		append_interval(&mut intervals, ie(8, 9));
		assert_eq!(intervals, [ie(1, 6), ie(8, 9)]);

		append_intervals(&mut intervals, &[ie(9, 10), ie(12, 14)]);
		assert_eq!(intervals, [ie(1, 6), ie(8, 10), ie(12, 14)]);
	}

	#[test]
	fn gaps_tests() {
		assert_eq!(
			gaps(&[ie(1, 4), ie(6, 8), ie(9, 12)]).collect::<Vec<_>>(),
			[ie(4, 6), ie(8, 9)]
		);
		assert_eq!(gaps(&[ie(1, 4)]).count(), 0);
	}
}
