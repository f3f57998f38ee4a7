//! A module containing [`IntervalMap`] and it's related types.
//!
//! An [`IntervalMap`] aggregates values over intervals: adding a value
//! over points which already hold one combines the two values with the
//! map's [`Combiner`], and the map's [`Policy`] decides what happens to
//! values equal to the combiner's identity.

use core::fmt;
use core::marker::PhantomData;

use btree_monstrousity::btree_map::IntoIter as BTreeMapIntoIter;

use crate::combiner::{Combiner, Inverse, Plus};
use crate::policy::{PartialAbsorber, Policy};
use crate::segment_map::{Segment, SegmentMap};
use crate::{Interval, IntervalSet, PointType};

/// An ordered map of non-overlapping intervals to values which aggregates
/// values on overlap.
///
/// `C` is the [`Combiner`] used to aggregate values, [`Plus`] by default,
/// and `P` is the [`Policy`] used for identity values, [`PartialAbsorber`]
/// by default.
///
/// After every operation the stored intervals are disjoint and no two
/// touching intervals hold equal values.
///
/// # Examples
/// ```
/// use discrete_icl::interval::ii;
/// use discrete_icl::IntervalMap;
///
/// let mut map: IntervalMap<i8, i8> = IntervalMap::new();
///
/// map.add(ii(6, 8), 1);
/// map.add(ii(7, 9), 2);
///
/// let entries: Vec<_> = map
/// 	.iter()
/// 	.map(|(interval, value)| format!("{interval}->{value}"))
/// 	.collect();
///
/// assert_eq!(entries, ["[6,7)->1", "[7,8]->3", "(8,9]->2"]);
/// ```
pub struct IntervalMap<I, V, C = Plus, P = PartialAbsorber> {
	inner: SegmentMap<I, V>,
	phantom: PhantomData<fn() -> (C, P)>,
}

/// The error returned when inserting an interval that overlaps another interval when
/// it should not have. Contains the value that was not inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("the interval overlaps an interval already in the map")]
pub struct OverlapError<V> {
	/// The value which was not inserted, because of the overlap error.
	pub value: V,
}

impl<I, V, C, P> IntervalMap<I, V, C, P>
where
	I: PointType,
	V: Clone + PartialEq,
	C: Combiner<V>,
	P: Policy,
{
	/// Adds `value` over every point of `interval`.
	///
	/// Points which already hold a value get that value combined with
	/// `value`, points which held nothing get the combiner's identity
	/// combined with `value`. Under an absorbing policy adding the identity
	/// does nothing.
	///
	/// Adding an empty interval does nothing.
	///
	/// # Examples
	/// ```
	/// use discrete_icl::interval::{ie, ii};
	/// use discrete_icl::IntervalMap;
	///
	/// let mut map: IntervalMap<u8, u32> = IntervalMap::new();
	///
	/// map.add(ie(0, 10), 1);
	/// map.add(ii(5, 5), 3);
	///
	/// assert_eq!(map.get_at_point(4), Some(&1));
	/// assert_eq!(map.get_at_point(5), Some(&4));
	/// assert_eq!(map.len(), 3);
	/// ```
	pub fn add(&mut self, interval: Interval<I>, value: V) {
		let Some(segment) = Segment::new(interval) else {
			return;
		};
		if P::ABSORBS_IDENTITIES && value == C::identity() {
			return;
		}

		let mut fresh = C::identity();
		C::combine(&mut fresh, &value);

		self.update(
			segment,
			|existing| C::combine(existing, &value),
			Some(fresh),
		);
	}

	/// Takes `value` back out of every point of `interval`.
	///
	/// Points which hold a value get `value` uncombined from it. In a total
	/// map points which held nothing get `value` uncombined from the
	/// identity, in a partial map they are left alone.
	///
	/// # Examples
	/// ```
	/// use discrete_icl::interval::{ei, ie, ii};
	/// use discrete_icl::IntervalMap;
	///
	/// let mut map: IntervalMap<u8, i32> = IntervalMap::new();
	///
	/// map.add(ii(1, 10), 5);
	/// map.subtract(ii(3, 4), 5);
	///
	/// assert_eq!(
	/// 	map.iter().collect::<Vec<_>>(),
	/// 	[(ie(1, 3), &5), (ei(4, 10), &5)]
	/// );
	/// ```
	pub fn subtract(&mut self, interval: Interval<I>, value: V)
	where
		C: Inverse<V>,
	{
		let Some(segment) = Segment::new(interval) else {
			return;
		};
		if P::ABSORBS_IDENTITIES && value == C::identity() {
			return;
		}

		let fresh = P::IS_TOTAL.then(|| {
			let mut fresh = C::identity();
			C::uncombine(&mut fresh, &value);
			fresh
		});

		self.update(segment, |existing| C::uncombine(existing, &value), fresh);
	}

	/// Stores `value` over the parts of `interval` which hold nothing,
	/// existing values are left untouched.
	///
	/// # Examples
	/// ```
	/// use discrete_icl::interval::{ei, ii};
	/// use discrete_icl::IntervalMap;
	///
	/// let mut map: IntervalMap<u8, u8> = IntervalMap::new();
	///
	/// map.insert(ii(1, 5), 1);
	/// map.insert(ii(3, 8), 2);
	///
	/// assert_eq!(
	/// 	map.iter().collect::<Vec<_>>(),
	/// 	[(ii(1, 5), &1), (ei(5, 8), &2)]
	/// );
	/// ```
	pub fn insert(&mut self, interval: Interval<I>, value: V) {
		let Some(segment) = Segment::new(interval) else {
			return;
		};

		for gap in self.inner.gaps(segment) {
			self.store(gap, value.clone());
		}

		self.inner.merge_touching_if_values_equal(segment);
	}

	/// Stores `value` over every point of `interval`, overwriting whatever
	/// was there before.
	///
	/// # Examples
	/// ```
	/// use discrete_icl::interval::{ei, ie, ii};
	/// use discrete_icl::IntervalMap;
	///
	/// let mut map: IntervalMap<u8, u8> = IntervalMap::new();
	///
	/// map.add(ii(1, 8), 1);
	/// map.set(ii(4, 6), 9);
	///
	/// assert_eq!(
	/// 	map.iter().collect::<Vec<_>>(),
	/// 	[(ie(1, 4), &1), (ii(4, 6), &9), (ei(6, 8), &1)]
	/// );
	/// ```
	pub fn set(&mut self, interval: Interval<I>, value: V) {
		let Some(segment) = Segment::new(interval) else {
			return;
		};

		let _ = self.inner.cut(segment);
		self.store(segment, value);

		self.inner.merge_touching_if_values_equal(segment);
	}

	/// Inserts an entry only if `interval` overlaps nothing already in the
	/// map.
	///
	/// If it does overlap an [`OverlapError`] containing `value` is
	/// returned and the map is not updated. Inserting an empty interval
	/// always succeeds and does nothing.
	///
	/// # Examples
	/// ```
	/// use discrete_icl::interval::ie;
	/// use discrete_icl::{IntervalMap, OverlapError};
	///
	/// let mut map: IntervalMap<u8, u8> = IntervalMap::new();
	///
	/// assert_eq!(map.insert_strict(ie(5, 10), 9), Ok(()));
	/// assert_eq!(
	/// 	map.insert_strict(ie(5, 10), 2),
	/// 	Err(OverlapError { value: 2 })
	/// );
	/// assert_eq!(map.len(), 1);
	/// ```
	pub fn insert_strict(
		&mut self,
		interval: Interval<I>,
		value: V,
	) -> Result<(), OverlapError<V>> {
		let Some(segment) = Segment::new(interval) else {
			return Ok(());
		};
		if P::ABSORBS_IDENTITIES && value == C::identity() {
			return match self.inner.overlaps(segment) {
				true => Err(OverlapError { value }),
				false => Ok(()),
			};
		}

		self.inner.insert_strict(segment, value)?;
		self.inner.merge_touching_if_values_equal(segment);

		Ok(())
	}

	/// Returns the value at `point`, reading unstored points of a total
	/// map as the combiner's identity.
	///
	/// # Examples
	/// ```
	/// use discrete_icl::interval::ii;
	/// use discrete_icl::policy::TotalAbsorber;
	/// use discrete_icl::{IntervalMap, Plus};
	///
	/// let mut total: IntervalMap<u8, u8, Plus, TotalAbsorber> =
	/// 	IntervalMap::new();
	/// let mut partial: IntervalMap<u8, u8> = IntervalMap::new();
	///
	/// total.add(ii(1, 2), 4);
	/// partial.add(ii(1, 2), 4);
	///
	/// assert_eq!(total.value_at(1), Some(4));
	/// assert_eq!(total.value_at(9), Some(0));
	/// assert_eq!(partial.value_at(9), None);
	/// ```
	pub fn value_at(&self, point: I) -> Option<V> {
		match self.get_at_point(point) {
			Some(value) => Some(value.clone()),
			None => P::IS_TOTAL.then(C::identity),
		}
	}

	fn update<F>(
		&mut self,
		segment: Segment<I>,
		mut on_stored: F,
		on_gaps: Option<V>,
	) where
		F: FnMut(&mut V),
	{
		let gaps = self.inner.gaps(segment);

		for (piece, mut value) in self.inner.cut(segment) {
			on_stored(&mut value);
			self.store(piece, value);
		}

		if let Some(value) = on_gaps {
			for gap in gaps {
				self.store(gap, value.clone());
			}
		}

		self.inner.merge_touching_if_values_equal(segment);
	}

	///requires that `segment` overlaps nothing in the map
	fn store(&mut self, segment: Segment<I>, value: V) {
		if P::ABSORBS_IDENTITIES && value == C::identity() {
			return;
		}
		self.inner.insert_unchecked(segment, value);
	}
}

impl<I, V, C, P> IntervalMap<I, V, C, P>
where
	I: PointType,
	V: Clone,
{
	/// Removes every value over `interval`, splitting the stored intervals
	/// at it's borders.
	///
	/// # Examples
	/// ```
	/// use discrete_icl::interval::{ei, ie, ii};
	/// use discrete_icl::IntervalMap;
	///
	/// let mut map: IntervalMap<u8, u8> = IntervalMap::new();
	///
	/// map.add(ii(1, 5), 1);
	/// map.erase(ii(2, 3));
	///
	/// assert_eq!(
	/// 	map.iter().collect::<Vec<_>>(),
	/// 	[(ie(1, 2), &1), (ei(3, 5), &1)]
	/// );
	/// ```
	pub fn erase(&mut self, interval: Interval<I>) {
		if let Some(segment) = Segment::new(interval) {
			let _ = self.inner.cut(segment);
		}
	}
}

impl<I, V, C, P> IntervalMap<I, V, C, P>
where
	I: PointType,
{
	/// Returns a reference to the value stored at `point`, if any.
	///
	/// # Examples
	/// ```
	/// use discrete_icl::interval::ie;
	/// use discrete_icl::IntervalMap;
	///
	/// let mut map: IntervalMap<u8, u8> = IntervalMap::new();
	///
	/// map.add(ie(1, 4), 2);
	///
	/// assert_eq!(map.get_at_point(3), Some(&2));
	/// assert_eq!(map.get_at_point(4), None);
	/// ```
	pub fn get_at_point(&self, point: I) -> Option<&V> {
		self.inner
			.get_key_value_at_point(point)
			.map(|(_, value)| value)
	}

	/// Returns `true` if the map stores a value at `point`.
	pub fn contains_point(&self, point: I) -> bool {
		self.inner.contains_point(point)
	}

	/// Returns `true` if any stored interval overlaps `interval`.
	pub fn overlaps(&self, interval: Interval<I>) -> bool {
		Segment::new(interval)
			.is_some_and(|segment| self.inner.overlaps(segment))
	}

	/// Returns an iterator over every entry which overlaps `interval`, in
	/// ascending order.
	///
	/// # Examples
	/// ```
	/// use discrete_icl::interval::{ie, ii};
	/// use discrete_icl::IntervalMap;
	///
	/// let mut map: IntervalMap<u8, u8> = IntervalMap::new();
	///
	/// map.add(ie(1, 3), 1);
	/// map.add(ii(5, 7), 2);
	/// map.add(ii(9, 9), 3);
	///
	/// assert_eq!(
	/// 	map.overlapping(ii(2, 5)).collect::<Vec<_>>(),
	/// 	[(ie(1, 3), &1), (ii(5, 7), &2)]
	/// );
	/// ```
	pub fn overlapping(
		&self,
		interval: Interval<I>,
	) -> impl Iterator<Item = (Interval<I>, &V)> {
		Segment::new(interval)
			.into_iter()
			.flat_map(move |segment| self.inner.overlapping(segment))
			.map(|(segment, value)| (segment.interval, value))
	}

	/// The points covered by the map, as an [`IntervalSet`].
	///
	/// # Examples
	/// ```
	/// use discrete_icl::interval::{ie, ii};
	/// use discrete_icl::IntervalMap;
	///
	/// let mut map: IntervalMap<u8, u8> = IntervalMap::new();
	///
	/// map.add(ie(1, 3), 1);
	/// map.add(ii(3, 5), 2);
	///
	/// assert_eq!(map.domain().iter().collect::<Vec<_>>(), [ii(1, 5)]);
	/// ```
	pub fn domain(&self) -> IntervalSet<I> {
		self.iter().map(|(interval, _)| interval).collect()
	}
}

impl<I, V, C, P> IntervalMap<I, V, C, P> {
	/// Makes a new, empty `IntervalMap`.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the number of stored intervals.
	pub fn len(&self) -> usize {
		self.inner.len()
	}

	/// Returns `true` if the map stores nothing.
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	/// Returns an iterator over every entry in ascending order.
	pub fn iter(&self) -> impl DoubleEndedIterator<Item = (Interval<I>, &V)>
	where
		I: Copy,
	{
		self.inner
			.iter()
			.map(|(segment, value)| (segment.interval, value))
	}
}

impl<I, V, C, P> Default for IntervalMap<I, V, C, P> {
	fn default() -> Self {
		IntervalMap {
			inner: SegmentMap::default(),
			phantom: PhantomData,
		}
	}
}

impl<I, V, C, P> Clone for IntervalMap<I, V, C, P>
where
	I: Clone,
	V: Clone,
{
	fn clone(&self) -> Self {
		IntervalMap {
			inner: self.inner.clone(),
			phantom: PhantomData,
		}
	}
}

impl<I, V, C, P> PartialEq for IntervalMap<I, V, C, P>
where
	I: PartialEq,
	V: PartialEq,
{
	fn eq(&self, other: &Self) -> bool {
		self.inner == other.inner
	}
}
impl<I, V, C, P> Eq for IntervalMap<I, V, C, P>
where
	I: Eq,
	V: Eq,
{
}

impl<I, V, C, P> fmt::Debug for IntervalMap<I, V, C, P>
where
	I: Copy + fmt::Debug,
	V: fmt::Debug,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_map().entries(self.iter()).finish()
	}
}

impl<I, V, C, P> FromIterator<(Interval<I>, V)> for IntervalMap<I, V, C, P>
where
	I: PointType,
	V: Clone + PartialEq,
	C: Combiner<V>,
	P: Policy,
{
	fn from_iter<T: IntoIterator<Item = (Interval<I>, V)>>(iter: T) -> Self {
		let mut map = IntervalMap::new();
		map.extend(iter);
		map
	}
}

impl<I, V, C, P> Extend<(Interval<I>, V)> for IntervalMap<I, V, C, P>
where
	I: PointType,
	V: Clone + PartialEq,
	C: Combiner<V>,
	P: Policy,
{
	fn extend<T: IntoIterator<Item = (Interval<I>, V)>>(&mut self, iter: T) {
		for (interval, value) in iter {
			self.add(interval, value);
		}
	}
}

impl<I, V, C, P> IntoIterator for IntervalMap<I, V, C, P> {
	type Item = (Interval<I>, V);
	type IntoIter = IntoIter<I, V>;
	fn into_iter(self) -> Self::IntoIter {
		IntoIter {
			inner: self.inner.into_iter(),
		}
	}
}

/// An owning iterator over the entries of an [`IntervalMap`].
///
/// This `struct` is created by the [`into_iter`] method on
/// [`IntervalMap`] (provided by the [`IntoIterator`] trait). See its
/// documentation for more.
///
/// [`into_iter`]: IntoIterator::into_iter
/// [`IntoIterator`]: core::iter::IntoIterator
pub struct IntoIter<I, V> {
	inner: BTreeMapIntoIter<Segment<I>, V>,
}
impl<I, V> Iterator for IntoIter<I, V> {
	type Item = (Interval<I>, V);
	fn next(&mut self) -> Option<Self::Item> {
		self.inner
			.next()
			.map(|(segment, value)| (segment.interval, value))
	}
}

#[cfg(feature = "serde")]
mod serde {
	use core::marker::PhantomData;

	use serde::de::{SeqAccess, Visitor};
	use serde::ser::SerializeSeq;
	use serde::{Deserialize, Deserializer, Serialize, Serializer};

	use crate::{Combiner, Interval, IntervalMap, PointType, Policy};

	impl<I, V, C, P> Serialize for IntervalMap<I, V, C, P>
	where
		I: Copy + Serialize,
		V: Serialize,
	{
		fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
		where
			S: Serializer,
		{
			let mut seq = serializer.serialize_seq(Some(self.len()))?;
			for (interval, value) in self.iter() {
				seq.serialize_element(&(interval, value))?;
			}
			seq.end()
		}
	}

	impl<'de, I, V, C, P> Deserialize<'de> for IntervalMap<I, V, C, P>
	where
		I: PointType + Deserialize<'de>,
		V: Clone + PartialEq + Deserialize<'de>,
		C: Combiner<V>,
		P: Policy,
	{
		fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
		where
			D: Deserializer<'de>,
		{
			deserializer.deserialize_seq(IntervalMapVisitor {
				phantom: PhantomData,
			})
		}
	}

	struct IntervalMapVisitor<I, V, C, P> {
		phantom: PhantomData<fn() -> (I, V, C, P)>,
	}

	impl<'de, I, V, C, P> Visitor<'de> for IntervalMapVisitor<I, V, C, P>
	where
		I: PointType + Deserialize<'de>,
		V: Clone + PartialEq + Deserialize<'de>,
		C: Combiner<V>,
		P: Policy,
	{
		type Value = IntervalMap<I, V, C, P>;

		fn expecting(
			&self,
			formatter: &mut alloc::fmt::Formatter,
		) -> alloc::fmt::Result {
			formatter.write_str("an IntervalMap")
		}

		fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
		where
			A: SeqAccess<'de>,
		{
			let mut map = IntervalMap::new();
			while let Some((interval, value)) =
				access.next_element::<(Interval<I>, V)>()?
			{
				map.insert_strict(interval, value)
					.or(Err(serde::de::Error::custom("intervals overlap")))?;
			}
			Ok(map)
		}
	}
}

#[cfg(test)]
mod tests {
	use alloc::collections::BTreeSet;

	use pretty_assertions::assert_eq;

	use super::*;
	use crate::combiner::{Max, Union};
	use crate::interval::{ee, ei, ie, ii};
	use crate::policy::{PartialEnricher, TotalAbsorber, TotalEnricher};

	fn entries<V, C, P>(
		map: &IntervalMap<i8, V, C, P>,
	) -> Vec<(Interval<i8>, V)>
	where
		V: Clone,
	{
		map.iter()
			.map(|(interval, value)| (interval, value.clone()))
			.collect()
	}
	fn display<V, C, P>(map: &IntervalMap<i8, V, C, P>) -> Vec<String>
	where
		V: fmt::Display,
	{
		map.iter()
			.map(|(interval, value)| format!("{interval}->{value}"))
			.collect()
	}

	fn assert_disjoint_and_maximal<V, C, P>(map: &IntervalMap<i8, V, C, P>)
	where
		V: PartialEq + fmt::Debug,
	{
		let all = map.iter().collect::<Vec<_>>();
		for pair in all.windows(2) {
			let (first, first_value) = pair[0];
			let (second, second_value) = pair[1];
			assert!(first.last() < second.first());
			if first.touches(&second) {
				assert_ne!(first_value, second_value);
			}
		}
	}

	#[test]
	fn add_aggregates_on_overlap() {
		let mut map: IntervalMap<i8, i8> = IntervalMap::new();
		map.add(ii(6, 8), 1);
		map.add(ii(7, 9), 2);

		assert_eq!(
			entries(&map),
			[(ie(6, 7), 1), (ii(7, 8), 3), (ei(8, 9), 2)]
		);
		assert_eq!(display(&map), ["[6,7)->1", "[7,8]->3", "(8,9]->2"]);
		assert_disjoint_and_maximal(&map);
	}

	#[test]
	fn add_merges_touching_equal_values() {
		let mut map: IntervalMap<i8, i8> = IntervalMap::new();
		map.add(ie(1, 3), 1);
		map.add(ii(3, 5), 1);
		assert_eq!(display(&map), ["[1,5]->1"]);

		map.add(ee(5, 8), 1);
		assert_eq!(display(&map), ["[1,8)->1"]);

		map.add(ii(6, 6), 1);
		assert_eq!(display(&map), ["[1,6)->1", "[6,6]->2", "(6,8)->1"]);
		map.add(ii(6, 6), -1);
		assert_eq!(display(&map), ["[1,8)->1"]);
	}

	#[test]
	fn absorbers_drop_identities() {
		let mut map: IntervalMap<i8, i8> = IntervalMap::new();
		map.add(ii(1, 3), 0);
		assert!(map.is_empty());

		map.add(ii(1, 3), 2);
		map.add(ii(2, 3), -2);
		assert_eq!(display(&map), ["[1,2)->2"]);
		assert_eq!(map.get_at_point(2), None);

		map.add(ii(1, 10), 0);
		assert_eq!(display(&map), ["[1,2)->2"]);
	}

	#[test]
	fn enrichers_keep_identities() {
		let mut map: IntervalMap<i8, i8, Plus, PartialEnricher> =
			IntervalMap::new();
		map.add(ii(1, 10), 0);
		map.add(ii(3, 5), 1);
		map.add(ii(8, 10), 3);

		assert_eq!(
			display(&map),
			["[1,3)->0", "[3,5]->1", "(5,8)->0", "[8,10]->3"]
		);
		assert_disjoint_and_maximal(&map);

		let mut map: IntervalMap<i8, i8> = IntervalMap::new();
		map.add(ii(1, 10), 0);
		map.add(ii(3, 5), 1);
		map.add(ii(8, 10), 3);

		assert_eq!(display(&map), ["[3,5]->1", "[8,10]->3"]);
	}

	#[test]
	fn value_at_tests() {
		let mut partial: IntervalMap<i8, i8> = IntervalMap::new();
		let mut total: IntervalMap<i8, i8, Plus, TotalAbsorber> =
			IntervalMap::new();
		let mut total_enricher: IntervalMap<i8, i8, Plus, TotalEnricher> =
			IntervalMap::new();

		partial.add(ii(1, 3), 4);
		total.add(ii(1, 3), 4);
		total_enricher.add(ii(1, 3), 4);

		assert_eq!(partial.value_at(2), Some(4));
		assert_eq!(partial.value_at(0), None);
		assert_eq!(total.value_at(2), Some(4));
		assert_eq!(total.value_at(0), Some(0));
		assert_eq!(total_enricher.value_at(0), Some(0));

		assert_eq!(total.get_at_point(0), None);
		assert!(!total.contains_point(0));
		assert!(total.contains_point(3));
	}

	#[test]
	fn subtract_tests() {
		let mut map: IntervalMap<i8, i8> = IntervalMap::new();
		map.add(ii(1, 10), 5);
		map.subtract(ii(3, 4), 5);
		assert_eq!(display(&map), ["[1,3)->5", "(4,10]->5"]);

		// partial maps leave uncovered points alone
		map.subtract(ii(20, 30), 1);
		assert_eq!(map.len(), 2);

		map.subtract(ii(1, 10), 2);
		assert_eq!(display(&map), ["[1,3)->3", "(4,10]->3"]);

		let mut total: IntervalMap<i8, i8, Plus, TotalAbsorber> =
			IntervalMap::new();
		total.add(ii(18, 20), 1);
		total.subtract(ii(20, 22), 1);
		assert_eq!(display(&total), ["[18,20)->1", "(20,22]->-1"]);
		assert_eq!(total.value_at(20), Some(0));
		assert_eq!(total.value_at(21), Some(-1));
	}

	#[test]
	fn union_combiner() {
		let mut map: IntervalMap<i8, BTreeSet<char>, Union> =
			IntervalMap::new();
		map.add(ii(1, 5), BTreeSet::from(['a']));
		map.add(ii(3, 8), BTreeSet::from(['b']));

		assert_eq!(
			entries(&map),
			[
				(ie(1, 3), BTreeSet::from(['a'])),
				(ii(3, 5), BTreeSet::from(['a', 'b'])),
				(ei(5, 8), BTreeSet::from(['b'])),
			]
		);

		map.subtract(ii(1, 8), BTreeSet::from(['a']));
		assert_eq!(entries(&map), [(ii(3, 8), BTreeSet::from(['b']))]);
	}

	#[test]
	fn max_combiner() {
		let mut map: IntervalMap<i8, u8, Max> = IntervalMap::new();
		map.add(ii(1, 5), 3);
		map.add(ii(3, 8), 7);
		assert_eq!(display(&map), ["[1,3)->3", "[3,8]->7"]);

		map.add(ii(1, 8), 5);
		assert_eq!(display(&map), ["[1,3)->5", "[3,8]->7"]);
	}

	#[test]
	fn insert_set_and_erase() {
		let mut map: IntervalMap<i8, i8> = IntervalMap::new();
		map.insert(ii(1, 5), 1);
		map.insert(ii(3, 8), 2);
		assert_eq!(display(&map), ["[1,5]->1", "(5,8]->2"]);

		map.set(ii(4, 6), 9);
		assert_eq!(display(&map), ["[1,4)->1", "[4,6]->9", "(6,8]->2"]);

		map.set(ii(4, 8), 1);
		assert_eq!(display(&map), ["[1,8]->1"]);

		map.erase(ii(2, 3));
		assert_eq!(display(&map), ["[1,2)->1", "(3,8]->1"]);

		map.erase(ee(0, 0));
		map.insert(ii(9, 2), 4);
		map.set(ie(5, 5), 4);
		assert_eq!(map.len(), 2);
	}

	#[test]
	fn insert_strict_tests() {
		let mut map: IntervalMap<i8, i8> = IntervalMap::new();
		assert_eq!(map.insert_strict(ii(1, 5), 1), Ok(()));
		assert_eq!(
			map.insert_strict(ii(5, 6), 2),
			Err(OverlapError { value: 2 })
		);
		assert_eq!(map.insert_strict(ei(5, 6), 1), Ok(()));
		assert_eq!(display(&map), ["[1,6]->1"]);
		assert_eq!(map.insert_strict(ee(3, 3), 1), Ok(()));
	}

	#[test]
	fn overlapping_tests() {
		let map: IntervalMap<i8, i8> =
			[(ie(1, 3), 1), (ii(5, 7), 2), (ii(9, 9), 3)]
				.into_iter()
				.collect();

		assert_eq!(
			map.overlapping(ii(2, 5)).collect::<Vec<_>>(),
			[(ie(1, 3), &1), (ii(5, 7), &2)]
		);
		assert_eq!(map.overlapping(ii(3, 4)).count(), 0);
		assert_eq!(map.overlapping(ee(5, 5)).count(), 0);
		assert!(map.overlaps(ii(0, 1)));
		assert!(!map.overlaps(ie(3, 5)));
	}

	#[test]
	fn domain_and_into_iter() {
		let map: IntervalMap<i8, i8> =
			[(ie(1, 3), 1), (ii(3, 5), 2), (ii(8, 9), 1)]
				.into_iter()
				.collect();

		assert_eq!(
			map.domain().iter().collect::<Vec<_>>(),
			[ii(1, 5), ii(8, 9)]
		);
		assert_eq!(
			map.clone().into_iter().collect::<Vec<_>>(),
			[(ie(1, 3), 1), (ii(3, 5), 2), (ii(8, 9), 1)]
		);
		assert_eq!(map, map.clone());
	}

	#[test]
	fn interleaved_adds_stay_disjoint_and_maximal() {
		let mut map: IntervalMap<i8, i8> = IntervalMap::new();
		for (i, interval) in [
			ii(0, 10),
			ee(2, 6),
			ie(4, 8),
			ei(1, 3),
			ii(9, 12),
			ie(3, 4),
			ii(5, 5),
		]
		.into_iter()
		.enumerate()
		{
			map.add(interval, i as i8 % 3 - 1);
			assert_disjoint_and_maximal(&map);
		}
	}
}
