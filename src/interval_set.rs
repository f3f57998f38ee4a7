//! A module containing [`IntervalSet`], [`SeparateIntervalSet`] and
//! [`SplitIntervalSet`].
//!
//! The three sets store the same points for the same sequence of
//! [`add()`](IntervalSet::add)s, they differ in how they store the
//! intervals making them up:
//!
//! | set                     | overlapping intervals | touching intervals |
//! | ----------------------- | --------------------- | ------------------ |
//! | [`IntervalSet`]         | joined                | joined             |
//! | [`SeparateIntervalSet`] | joined                | kept separate      |
//! | [`SplitIntervalSet`]    | split at every border | kept separate      |

use core::fmt;

use btree_monstrousity::btree_map::IntoIter as BTreeMapIntoIter;

use crate::segment_map::{Segment, SegmentMap};
use crate::{Interval, PointType};

/// A set of points stored as intervals which never overlap or touch.
///
/// Adding an interval joins it with every stored interval it overlaps or
/// touches.
///
/// # Examples
/// ```
/// use discrete_icl::interval::{ee, ie, ii};
/// use discrete_icl::IntervalSet;
///
/// let mut set = IntervalSet::new();
///
/// set.add(ii(1, 3));
/// set.add(ee(2, 5));
/// assert_eq!(set.iter().collect::<Vec<_>>(), [ie(1, 5)]);
///
/// set.add(ii(5, 7));
/// assert_eq!(set.iter().collect::<Vec<_>>(), [ii(1, 7)]);
/// ```
pub struct IntervalSet<I> {
	inner: SegmentMap<I, ()>,
}

/// A set of points stored as intervals which never overlap.
///
/// Adding an interval joins it with every stored interval it overlaps,
/// intervals which only touch are kept separate.
///
/// # Examples
/// ```
/// use discrete_icl::interval::{ie, ii};
/// use discrete_icl::SeparateIntervalSet;
///
/// let mut set = SeparateIntervalSet::new();
///
/// set.add(ie(1, 3));
/// set.add(ii(3, 5));
/// assert_eq!(set.iter().collect::<Vec<_>>(), [ie(1, 3), ii(3, 5)]);
///
/// set.add(ii(2, 4));
/// assert_eq!(set.iter().collect::<Vec<_>>(), [ii(1, 5)]);
/// ```
pub struct SeparateIntervalSet<I> {
	inner: SegmentMap<I, ()>,
}

/// A set of points stored as intervals which never overlap, split at the
/// borders of every interval added.
///
/// Adding an interval never joins anything, so the number of stored
/// intervals never goes down.
///
/// # Examples
/// ```
/// use discrete_icl::interval::ie;
/// use discrete_icl::SplitIntervalSet;
///
/// let mut set = SplitIntervalSet::new();
///
/// set.add(ie(1, 3));
/// set.add(ie(2, 5));
/// assert_eq!(
/// 	set.iter().collect::<Vec<_>>(),
/// 	[ie(1, 2), ie(2, 3), ie(3, 5)]
/// );
/// ```
pub struct SplitIntervalSet<I> {
	inner: SegmentMap<I, ()>,
}

impl<I> IntervalSet<I>
where
	I: PointType,
{
	/// Adds every point of `interval` to the set, joining it with the
	/// stored intervals it overlaps or touches.
	///
	/// Adding an empty interval does nothing.
	pub fn add(&mut self, interval: Interval<I>) {
		if let Some(segment) = Segment::new(interval) {
			self.inner.insert_merge_touching_or_overlapping(segment, ());
		}
	}
}

impl<I> SeparateIntervalSet<I>
where
	I: PointType,
{
	/// Adds every point of `interval` to the set, joining it with the
	/// stored intervals it overlaps.
	///
	/// Adding an empty interval does nothing.
	pub fn add(&mut self, interval: Interval<I>) {
		if let Some(segment) = Segment::new(interval) {
			self.inner.insert_merge_overlapping(segment, ());
		}
	}
}

impl<I> SplitIntervalSet<I>
where
	I: PointType,
{
	/// Adds every point of `interval` to the set, splitting the stored
	/// intervals it overlaps at it's borders.
	///
	/// Adding an empty interval does nothing.
	pub fn add(&mut self, interval: Interval<I>) {
		let Some(segment) = Segment::new(interval) else {
			return;
		};

		let gaps = self.inner.gaps(segment);
		let inside = self.inner.cut(segment);

		for (piece, ()) in inside {
			self.inner.insert_unchecked(piece, ());
		}
		for gap in gaps {
			self.inner.insert_unchecked(gap, ());
		}
	}
}

macro_rules! impl_interval_set {
	($set:ident) => {
		impl<I> $set<I>
		where
			I: PointType,
		{
			/// Removes every point of `interval` from the set, splitting
			/// the stored intervals at it's borders.
			pub fn subtract(&mut self, interval: Interval<I>) {
				if let Some(segment) = Segment::new(interval) {
					let _ = self.inner.cut(segment);
				}
			}

			/// Returns `true` if every point of `interval` is in the set.
			///
			/// The empty interval is contained in every set.
			pub fn contains(&self, interval: Interval<I>) -> bool {
				match Segment::new(interval) {
					Some(segment) => self.inner.contains_segment(segment),
					None => true,
				}
			}

			/// Returns `true` if `point` is in the set.
			pub fn contains_point(&self, point: I) -> bool {
				self.inner.contains_point(point)
			}

			/// Returns `true` if any point of `interval` is in the set.
			pub fn overlaps(&self, interval: Interval<I>) -> bool {
				Segment::new(interval)
					.is_some_and(|segment| self.inner.overlaps(segment))
			}

			/// Returns an iterator over the stored intervals which overlap
			/// `interval`, in ascending order.
			pub fn overlapping(
				&self,
				interval: Interval<I>,
			) -> impl Iterator<Item = Interval<I>> + '_ {
				Segment::new(interval)
					.into_iter()
					.flat_map(move |segment| self.inner.overlapping(segment))
					.map(|(segment, _)| segment.interval)
			}

			/// Returns an iterator over the parts of `interval` which are
			/// not in the set, in ascending order.
			pub fn gaps(
				&self,
				interval: Interval<I>,
			) -> impl Iterator<Item = Interval<I>> + '_ {
				Segment::new(interval)
					.into_iter()
					.flat_map(move |segment| self.inner.gaps(segment))
					.map(|segment| segment.interval)
			}

			/// Returns the points in both `self` and `other`.
			pub fn intersection(&self, other: &Self) -> Self {
				let mut result = Self::new();
				for interval in self.iter() {
					for overlapping in other.overlapping(interval) {
						result.extend(interval.intersection(&overlapping));
					}
				}
				result
			}

			/// Returns the points in `self` but not in `other`.
			pub fn difference(&self, other: &Self) -> Self {
				let mut result = self.clone();
				for interval in other.iter() {
					result.subtract(interval);
				}
				result
			}
		}

		impl<I> $set<I> {
			/// Makes a new, empty set.
			pub fn new() -> Self {
				Self::default()
			}

			/// Returns the number of stored intervals.
			pub fn len(&self) -> usize {
				self.inner.len()
			}

			/// Returns `true` if the set contains no points.
			pub fn is_empty(&self) -> bool {
				self.inner.is_empty()
			}
		}

		impl<I> $set<I>
		where
			I: Copy,
		{
			/// Returns an iterator over every stored interval in ascending
			/// order.
			pub fn iter(
				&self,
			) -> impl DoubleEndedIterator<Item = Interval<I>> + '_ {
				self.inner.iter().map(|(segment, _)| segment.interval)
			}

			/// Returns the first stored interval, if any.
			pub fn first(&self) -> Option<Interval<I>> {
				self.inner
					.first_key_value()
					.map(|(segment, _)| segment.interval)
			}

			/// Returns the last stored interval, if any.
			pub fn last(&self) -> Option<Interval<I>> {
				self.inner
					.last_key_value()
					.map(|(segment, _)| segment.interval)
			}
		}

		impl<I> Default for $set<I> {
			fn default() -> Self {
				$set {
					inner: SegmentMap::new(),
				}
			}
		}

		impl<I> Clone for $set<I>
		where
			I: Clone,
		{
			fn clone(&self) -> Self {
				$set {
					inner: self.inner.clone(),
				}
			}
		}

		impl<I> PartialEq for $set<I>
		where
			I: PartialEq,
		{
			fn eq(&self, other: &Self) -> bool {
				self.inner == other.inner
			}
		}
		impl<I> Eq for $set<I> where I: Eq {}

		impl<I> fmt::Debug for $set<I>
		where
			I: Copy + fmt::Debug,
		{
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.debug_set().entries(self.iter()).finish()
			}
		}

		impl<I> FromIterator<Interval<I>> for $set<I>
		where
			I: PointType,
		{
			fn from_iter<T>(iter: T) -> Self
			where
				T: IntoIterator<Item = Interval<I>>,
			{
				let mut set = $set::new();
				set.extend(iter);
				set
			}
		}

		impl<I> Extend<Interval<I>> for $set<I>
		where
			I: PointType,
		{
			fn extend<T>(&mut self, iter: T)
			where
				T: IntoIterator<Item = Interval<I>>,
			{
				for interval in iter {
					self.add(interval);
				}
			}
		}

		impl<I> From<Interval<I>> for $set<I>
		where
			I: PointType,
		{
			fn from(interval: Interval<I>) -> Self {
				let mut set = $set::new();
				set.add(interval);
				set
			}
		}

		impl<I> IntoIterator for $set<I> {
			type Item = Interval<I>;
			type IntoIter = IntoIter<I>;
			fn into_iter(self) -> Self::IntoIter {
				IntoIter {
					inner: self.inner.into_iter(),
				}
			}
		}
	};
}

impl_interval_set!(IntervalSet);
impl_interval_set!(SeparateIntervalSet);
impl_interval_set!(SplitIntervalSet);

/// An owning iterator over the intervals of any of the interval sets.
///
/// This `struct` is created by the [`into_iter`] method on the sets
/// (provided by the [`IntoIterator`] trait). See its documentation for
/// more.
///
/// [`into_iter`]: IntoIterator::into_iter
/// [`IntoIterator`]: core::iter::IntoIterator
pub struct IntoIter<I> {
	inner: BTreeMapIntoIter<Segment<I>, ()>,
}
impl<I> Iterator for IntoIter<I> {
	type Item = Interval<I>;
	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next().map(|(segment, ())| segment.interval)
	}
}

impl<I> From<SeparateIntervalSet<I>> for IntervalSet<I>
where
	I: PointType,
{
	fn from(set: SeparateIntervalSet<I>) -> Self {
		set.into_iter().collect()
	}
}
impl<I> From<SplitIntervalSet<I>> for IntervalSet<I>
where
	I: PointType,
{
	fn from(set: SplitIntervalSet<I>) -> Self {
		set.into_iter().collect()
	}
}

#[cfg(feature = "serde")]
mod serde {
	use core::marker::PhantomData;

	use serde::de::{SeqAccess, Visitor};
	use serde::ser::SerializeSeq;
	use serde::{Deserialize, Deserializer, Serialize, Serializer};

	use super::{IntervalSet, SeparateIntervalSet, SplitIntervalSet};
	use crate::{Interval, PointType};

	macro_rules! impl_serde {
		($set:ident) => {
			impl<I> Serialize for $set<I>
			where
				I: Copy + Serialize,
			{
				fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
				where
					S: Serializer,
				{
					let mut seq = serializer.serialize_seq(Some(self.len()))?;
					for interval in self.iter() {
						seq.serialize_element(&interval)?;
					}
					seq.end()
				}
			}

			impl<'de, I> Deserialize<'de> for $set<I>
			where
				I: PointType + Deserialize<'de>,
			{
				fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
				where
					D: Deserializer<'de>,
				{
					deserializer.deserialize_seq(IntervalSetVisitor {
						phantom: PhantomData,
					})
				}
			}
		};
	}

	impl_serde!(IntervalSet);
	impl_serde!(SeparateIntervalSet);
	impl_serde!(SplitIntervalSet);

	struct IntervalSetVisitor<S, I> {
		phantom: PhantomData<fn() -> (S, I)>,
	}

	impl<'de, S, I> Visitor<'de> for IntervalSetVisitor<S, I>
	where
		I: PointType + Deserialize<'de>,
		S: Default + Extend<Interval<I>>,
	{
		type Value = S;

		fn expecting(
			&self,
			formatter: &mut alloc::fmt::Formatter,
		) -> alloc::fmt::Result {
			formatter.write_str("an interval set")
		}

		fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
		where
			A: SeqAccess<'de>,
		{
			let mut set = S::default();
			while let Some(interval) = access.next_element::<Interval<I>>()? {
				set.extend(Some(interval));
			}
			Ok(set)
		}
	}
}
