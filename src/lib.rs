//! This crate provides [`IntervalSet`], a Data Structure for storing sets
//! of half-open discrete intervals in a single sorted [`Vec`], along with
//! sweep-based set operations on them.
//!
//! ## Example
//!
//! ```rust
//! use discrete_intervals::{combine, ie, union_into, IntervalSet};
//!
//! let mut weekdays = IntervalSet::new();
//! weekdays.insert_range(0_u8, 5);
//!
//! let mut shifts = IntervalSet::collect([ie(4, 7), ie(9, 10)]);
//! shifts.remove(5);
//!
//! assert_eq!(shifts.as_slice(), [ie(4, 5), ie(6, 7), ie(9, 10)]);
//! assert_eq!(weekdays.overlaps(&shifts), true);
//! assert_eq!(
//! 	weekdays.difference(&shifts).as_slice(),
//! 	[ie(0, 4)]
//! );
//! assert_eq!(
//! 	combine(union_into, [&weekdays, &shifts]).as_slice(),
//! 	[ie(0, 5), ie(6, 7), ie(9, 10)]
//! );
//! ```
//!
//! ## Key Understandings and Philosophies:
//!
//! ### Half-Open Intervals
//!
//! Every interval in this crate is an [`Interval`] `[low, high)` which
//! includes `low` and excludes `high`. A consequence of this is that the
//! maximum value of a point type can never be inside a set, since no
//! interval can end after it.
//!
//! ### Discrete-ness
//!
//! Any [`Ord`] + [`Copy`] type can be used as the point type of a set,
//! see [`PointType`]. Only the single-point operations such as
//! [`IntervalSet::insert()`] need to know the next value after a point,
//! which is what the [`Discrete`] trait provides.
//!
//! ### Invalid Intervals
//!
//! An interval is only valid if it contains at least one point, that is
//! `low < high`. The all-default interval (such as `[0, 0)`) is also
//! considered valid as a sentinel for "no interval", see
//! [`Interval::is_valid()`].
//!
//! Inserting, removing or collecting invalid intervals does nothing.
//! Converting an invalid interval to a set with [`Interval::to_set()`]
//! panics.
//!
//! ### Overlap
//!
//! Two intervals are "overlapping" if there exists a point that is
//! contained within both intervals.
//!
//! ### Touching
//!
//! Two intervals are "touching" if they do not overlap and there exists
//! no value between them. For example, `[2, 4)` and `[4, 6)` are touching
//! but `[2, 4)` and `[5, 8)` are not, neither are `[2, 6)` and `[4, 8)`.
//!
//! ### Canonical-ness
//!
//! An [`IntervalSet`] always stores its intervals sorted, with every pair
//! of consecutive intervals neither overlapping nor touching. Overlapping
//! and touching intervals are merged when inserted, so two sets are equal
//! exactly when they contain the same points.
//!
//! ### Set Operations
//!
//! Union, intersection, difference and symmetric difference are each
//! computed by a single sweep over the two sets, in time proportional to
//! the number of intervals rather than the number of points. The
//! `*_into()` variants such as [`union_into()`] write into an existing
//! set's storage and [`combine()`] folds any of them over many sets.
//!
//! # Similar Crates
//!
//! - <https://docs.rs/nodit>
//!   BTreeMap-based discrete interval maps and sets with inclusive
//!   intervals.
//! - <https://docs.rs/rangemap>
//!   Maps and sets of `Range`s and `RangeInclusive`s.

#![allow(clippy::tabs_in_doc_comments)]
#![allow(clippy::needless_return)]

pub(crate) mod utils;

pub mod discrete;
pub mod interval;
pub mod ops;
pub mod set;

pub use crate::discrete::{Discrete, PointType};
pub use crate::interval::{ie, Interval, InvalidIntervalError};
pub use crate::ops::{
	combine, difference_into, intersection_into, symmetric_difference_into,
	union_into,
};
pub use crate::set::IntervalSet;
