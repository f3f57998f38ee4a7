//! A module containing [`Interval`], it's [`IntervalBounds`] and the
//! shorthand constructor functions.
//!
//! The shorthand functions are named after the kind of each bound, `i`
//! for included and `e` for excluded, so [`ie`] makes an
//! included-excluded (right-open) interval.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Range, RangeInclusive};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::DiscreteFinite;

/// The marker trait for valid point types, a blanket implementation is provided for all types
/// which implement this traits' super-traits so you shouln't need to implement this yourself.
pub trait PointType: Ord + Copy + DiscreteFinite {}
impl<I> PointType for I where I: Ord + Copy + DiscreteFinite {}

/// The openness of the two bounds of an [`Interval`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IntervalBounds {
	/// Both bounds are included, `[lower, upper]`.
	Closed,
	/// Both bounds are excluded, `(lower, upper)`.
	Open,
	/// Only the lower bound is excluded, `(lower, upper]`.
	LeftOpen,
	/// Only the upper bound is excluded, `[lower, upper)`.
	RightOpen,
}

impl IntervalBounds {
	/// Makes the bounds from whether each side is included.
	///
	/// # Examples
	/// ```
	/// use discrete_icl::IntervalBounds;
	///
	/// assert_eq!(
	/// 	IntervalBounds::from_sides(true, false),
	/// 	IntervalBounds::RightOpen
	/// );
	/// ```
	pub fn from_sides(left_closed: bool, right_closed: bool) -> Self {
		match (left_closed, right_closed) {
			(true, true) => IntervalBounds::Closed,
			(false, false) => IntervalBounds::Open,
			(false, true) => IntervalBounds::LeftOpen,
			(true, false) => IntervalBounds::RightOpen,
		}
	}

	/// Returns `true` if the lower bound is included.
	pub fn is_left_closed(self) -> bool {
		matches!(self, IntervalBounds::Closed | IntervalBounds::RightOpen)
	}

	/// Returns `true` if the upper bound is included.
	pub fn is_right_closed(self) -> bool {
		matches!(self, IntervalBounds::Closed | IntervalBounds::LeftOpen)
	}
}

/// A contiguous range of a discrete point type with independently open or
/// closed bounds.
///
/// Any pair of bounds makes an `Interval`. Those which contain no points,
/// such as `(3, 3)` or `[5, 2]`, are empty intervals and every container
/// in this crate treats them as a no-op.
///
/// Two intervals are equal if they contain exactly the same points, so the
/// raw bounds are only kept for [`Interval::lower()`],
/// [`Interval::upper()`] and display purposes.
///
/// # Examples
/// ```
/// use discrete_icl::Interval;
///
/// let interval = Interval::open(1, 4);
///
/// assert_eq!(interval.lower(), 1);
/// assert_eq!(interval.contains(1), false);
/// assert_eq!(interval.contains(2), true);
/// assert_eq!(interval, Interval::closed(2, 3));
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Interval<I> {
	lower: I,
	upper: I,
	bounds: IntervalBounds,
}

impl<I> Interval<I> {
	/// Makes a new interval from it's raw bounds and their openness.
	pub fn new(lower: I, upper: I, bounds: IntervalBounds) -> Self {
		Interval {
			lower,
			upper,
			bounds,
		}
	}
	/// Makes a new `[lower, upper]` interval.
	pub fn closed(lower: I, upper: I) -> Self {
		Interval::new(lower, upper, IntervalBounds::Closed)
	}
	/// Makes a new `(lower, upper)` interval.
	pub fn open(lower: I, upper: I) -> Self {
		Interval::new(lower, upper, IntervalBounds::Open)
	}
	/// Makes a new `(lower, upper]` interval.
	pub fn left_open(lower: I, upper: I) -> Self {
		Interval::new(lower, upper, IntervalBounds::LeftOpen)
	}
	/// Makes a new `[lower, upper)` interval.
	pub fn right_open(lower: I, upper: I) -> Self {
		Interval::new(lower, upper, IntervalBounds::RightOpen)
	}

	/// The openness of the bounds the interval was made with.
	pub fn bounds(&self) -> IntervalBounds {
		self.bounds
	}
}

impl<I> Interval<I>
where
	I: Copy,
{
	/// Makes the interval containing only `point`.
	pub fn point(point: I) -> Self {
		Interval::closed(point, point)
	}

	/// The raw lower bound the interval was made with.
	pub fn lower(&self) -> I {
		self.lower
	}
	/// The raw upper bound the interval was made with.
	pub fn upper(&self) -> I {
		self.upper
	}

	/// The lower bound and whether it is included.
	pub(crate) fn lower_endpoint(&self) -> (I, bool) {
		(self.lower, self.bounds.is_left_closed())
	}
	/// The upper bound and whether it is included.
	pub(crate) fn upper_endpoint(&self) -> (I, bool) {
		(self.upper, self.bounds.is_right_closed())
	}
	pub(crate) fn from_endpoints(lower: (I, bool), upper: (I, bool)) -> Self {
		Interval::new(
			lower.0,
			upper.0,
			IntervalBounds::from_sides(lower.1, upper.1),
		)
	}
}

impl<I> Interval<I>
where
	I: PointType,
{
	/// The interval containing every point of `I`.
	pub fn full() -> Self {
		Interval::closed(I::MIN, I::MAX)
	}

	/// The first and last points contained in the interval, if it is
	/// not empty.
	pub(crate) fn span(&self) -> Option<(I, I)> {
		let first = if self.bounds.is_left_closed() {
			self.lower
		} else {
			self.lower.up()?
		};
		let last = if self.bounds.is_right_closed() {
			self.upper
		} else {
			self.upper.down()?
		};

		(first <= last).then_some((first, last))
	}

	/// The smallest point contained in the interval, if any.
	///
	/// # Examples
	/// ```
	/// use discrete_icl::Interval;
	///
	/// assert_eq!(Interval::left_open(1, 3).first(), Some(2));
	/// assert_eq!(Interval::open(1, 2).first(), None);
	/// ```
	pub fn first(&self) -> Option<I> {
		self.span().map(|(first, _)| first)
	}

	/// The largest point contained in the interval, if any.
	///
	/// # Examples
	/// ```
	/// use discrete_icl::Interval;
	///
	/// assert_eq!(Interval::right_open(1, 3).last(), Some(2));
	/// assert_eq!(Interval::closed(4, 3).last(), None);
	/// ```
	pub fn last(&self) -> Option<I> {
		self.span().map(|(_, last)| last)
	}

	/// Returns `true` if the interval contains no points.
	pub fn is_empty(&self) -> bool {
		self.span().is_none()
	}

	/// Returns `true` if `point` satisfies both bounds of the interval.
	///
	/// # Examples
	/// ```
	/// use discrete_icl::Interval;
	///
	/// let interval = Interval::left_open(1, 3);
	///
	/// assert_eq!(interval.contains(1), false);
	/// assert_eq!(interval.contains(3), true);
	/// ```
	pub fn contains(&self, point: I) -> bool {
		self.span()
			.is_some_and(|(first, last)| point >= first && point <= last)
	}

	/// Returns `true` if every point of `other` is also in `self`.
	///
	/// The empty interval is contained in every interval.
	pub fn contains_interval(&self, other: &Self) -> bool {
		match other.span() {
			Some((first, last)) => self.contains(first) && self.contains(last),
			None => true,
		}
	}

	/// Returns `true` if there is a point contained in both intervals.
	///
	/// # Examples
	/// ```
	/// use discrete_icl::Interval;
	///
	/// assert_eq!(Interval::closed(1, 3).overlaps(&Interval::open(2, 5)), true);
	/// assert_eq!(Interval::right_open(1, 3).overlaps(&Interval::closed(3, 5)), false);
	/// ```
	pub fn overlaps(&self, other: &Self) -> bool {
		match (self.span(), other.span()) {
			(Some((first1, last1)), Some((first2, last2))) => {
				first1 <= last2 && first2 <= last1
			}
			_ => false,
		}
	}

	/// Returns `true` if the intervals do not overlap and there is no
	/// point between them.
	///
	/// # Examples
	/// ```
	/// use discrete_icl::Interval;
	///
	/// assert_eq!(Interval::right_open(1, 3).touches(&Interval::closed(3, 5)), true);
	/// assert_eq!(Interval::closed(1, 3).touches(&Interval::closed(3, 5)), false);
	/// ```
	pub fn touches(&self, other: &Self) -> bool {
		match (self.span(), other.span()) {
			(Some((first1, last1)), Some((first2, last2))) => {
				last1.up() == Some(first2) || last2.up() == Some(first1)
			}
			_ => false,
		}
	}

	/// Returns the points contained in both intervals, if there are any.
	///
	/// # Examples
	/// ```
	/// use discrete_icl::Interval;
	///
	/// assert_eq!(
	/// 	Interval::closed(1, 5).intersection(&Interval::open(3, 8)),
	/// 	Some(Interval::left_open(3, 5))
	/// );
	/// assert_eq!(Interval::closed(1, 2).intersection(&Interval::closed(3, 4)), None);
	/// ```
	pub fn intersection(&self, other: &Self) -> Option<Self> {
		let (first1, last1) = self.span()?;
		let (first2, last2) = other.span()?;

		if first1 > last2 || first2 > last1 {
			return None;
		}

		let lower = if first1 >= first2 {
			self.lower_endpoint()
		} else {
			other.lower_endpoint()
		};
		let upper = if last1 <= last2 {
			self.upper_endpoint()
		} else {
			other.upper_endpoint()
		};

		Some(Interval::from_endpoints(lower, upper))
	}

	/// Returns the smallest interval containing both intervals.
	///
	/// If one interval is empty the other is returned.
	///
	/// # Examples
	/// ```
	/// use discrete_icl::Interval;
	///
	/// assert_eq!(
	/// 	Interval::closed(1, 3).hull(&Interval::open(2, 5)),
	/// 	Interval::right_open(1, 5)
	/// );
	/// ```
	pub fn hull(&self, other: &Self) -> Self {
		let ((first1, last1), (first2, last2)) =
			match (self.span(), other.span()) {
				(Some(a), Some(b)) => (a, b),
				(Some(_), None) => return *self,
				(None, _) => return *other,
			};

		let lower = if first1 <= first2 {
			self.lower_endpoint()
		} else {
			other.lower_endpoint()
		};
		let upper = if last1 >= last2 {
			self.upper_endpoint()
		} else {
			other.upper_endpoint()
		};

		Interval::from_endpoints(lower, upper)
	}
}

impl<I> PartialEq for Interval<I>
where
	I: PointType,
{
	fn eq(&self, other: &Self) -> bool {
		self.span() == other.span()
	}
}
impl<I> Eq for Interval<I> where I: PointType {}

impl<I> Hash for Interval<I>
where
	I: PointType + Hash,
{
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.span().hash(state);
	}
}

impl<I> fmt::Display for Interval<I>
where
	I: fmt::Display,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let left = if self.bounds.is_left_closed() { '[' } else { '(' };
		let right = if self.bounds.is_right_closed() { ']' } else { ')' };
		write!(f, "{left}{},{}{right}", self.lower, self.upper)
	}
}

impl<I> From<Range<I>> for Interval<I> {
	fn from(range: Range<I>) -> Self {
		Interval::right_open(range.start, range.end)
	}
}
impl<I> From<RangeInclusive<I>> for Interval<I> {
	fn from(range: RangeInclusive<I>) -> Self {
		let (start, end) = range.into_inner();
		Interval::closed(start, end)
	}
}

/// An included-included interval
pub fn ii<I>(lower: I, upper: I) -> Interval<I> {
	Interval::closed(lower, upper)
}
/// An included-excluded interval
pub fn ie<I>(lower: I, upper: I) -> Interval<I> {
	Interval::right_open(lower, upper)
}
/// An excluded-included interval
pub fn ei<I>(lower: I, upper: I) -> Interval<I> {
	Interval::left_open(lower, upper)
}
/// An excluded-excluded interval
pub fn ee<I>(lower: I, upper: I) -> Interval<I> {
	Interval::open(lower, upper)
}
