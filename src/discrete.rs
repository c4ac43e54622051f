//! A module containing the [`PointType`] and [`Discrete`] traits and
//! trait impls for the primitive integer datatypes, `char`, durations,
//! system times and IP addresses.

use core::time::Duration;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::time::SystemTime;

/// The marker trait for valid point types, a blanket implementation is
/// provided for all types which implement this traits' super-traits so you
/// shouldn't need to implement this yourself.
///
/// The total order of the point type is given by [`Ord`], which is all
/// that is required to store ranges of points in an
/// [`IntervalSet`](crate::IntervalSet) and to combine sets with each
/// other.
pub trait PointType: Ord + Copy {}
impl<I> PointType for I where I: Ord + Copy {}

/// A trait for point types which can be enumerated, that is, every value
/// (bar the maximum) has a well defined next value.
///
/// This is only needed for the single-point convenience operations such
/// as [`Interval::unit()`](crate::Interval::unit) and
/// [`IntervalSet::insert()`](crate::IntervalSet::insert), everything else
/// works on explicit `[low, high)` ranges.
pub trait Discrete {
	/// The smallest value greater than `self` if one exists.
	///
	/// Returns `None` for the maximum representable value.
	fn successor(self) -> Option<Self>
	where
		Self: Sized;
}

macro_rules! discrete_integer {
	() => {};
	($ident:ident, $($t:tt)*) => {
		impl Discrete for $ident {
			fn successor(self) -> Option<Self> {
				self.checked_add(1)
			}
		}

		discrete_integer!($($t)*);
	};
}

discrete_integer!(
	u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, usize, isize,
);

impl Discrete for char {
	fn successor(self) -> Option<Self> {
		match self {
			char::MAX => None,
			// jump over the surrogate range
			'\u{D7FF}' => Some('\u{E000}'),
			c => char::from_u32(c as u32 + 1),
		}
	}
}

impl Discrete for Duration {
	fn successor(self) -> Option<Self> {
		self.checked_add(Duration::from_nanos(1))
	}
}

impl Discrete for SystemTime {
	fn successor(self) -> Option<Self> {
		self.checked_add(Duration::from_nanos(1))
	}
}

impl Discrete for Ipv4Addr {
	fn successor(self) -> Option<Self> {
		u32::from(self).successor().map(Ipv4Addr::from)
	}
}

impl Discrete for Ipv6Addr {
	fn successor(self) -> Option<Self> {
		u128::from(self).successor().map(Ipv6Addr::from)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn integer_successor_tests() {
		assert_eq!(0_u8.successor(), Some(1));
		assert_eq!(u8::MAX.successor(), None);
		assert_eq!((-1_i32).successor(), Some(0));
		assert_eq!(i64::MAX.successor(), None);
		assert_eq!(41_usize.successor(), Some(42));
	}

	#[test]
	fn char_successor_tests() {
		assert_eq!('a'.successor(), Some('b'));
		assert_eq!('\u{D7FF}'.successor(), Some('\u{E000}'));
		assert_eq!(char::MAX.successor(), None);
	}

	#[test]
	fn time_successor_tests() {
		assert_eq!(
			Duration::ZERO.successor(),
			Some(Duration::from_nanos(1))
		);
		assert_eq!(Duration::MAX.successor(), None);

		let epoch = SystemTime::UNIX_EPOCH;
		assert_eq!(
			epoch.successor(),
			Some(epoch + Duration::from_nanos(1))
		);
	}

	#[test]
	fn ip_successor_tests() {
		assert_eq!(
			Ipv4Addr::new(127, 0, 0, 1).successor(),
			Some(Ipv4Addr::new(127, 0, 0, 2))
		);
		assert_eq!(
			Ipv4Addr::new(10, 0, 0, 255).successor(),
			Some(Ipv4Addr::new(10, 0, 1, 0))
		);
		assert_eq!(Ipv4Addr::BROADCAST.successor(), None);

		assert_eq!(
			Ipv6Addr::LOCALHOST.successor(),
			"::2".parse::<Ipv6Addr>().ok()
		);
		assert_eq!(Ipv6Addr::from(u128::MAX).successor(), None);
	}
}
