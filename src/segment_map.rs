//! The ordered map of non-overlapping segments every container in this
//! crate is built on.

use alloc::vec::Vec;

use btree_monstrousity::btree_map::{
	IntoIter as BTreeMapIntoIter, SearchBoundCustom,
};
use btree_monstrousity::BTreeMap;
use itertools::Itertools;
use smallvec::SmallVec;

use crate::utils::{
	cut_segment, flip_endpoint, overlapping_comp, starts_comp,
	touching_end_comp, touching_start_comp,
};
use crate::{Interval, OverlapError, PointType};

/// A non-empty [`Interval`] stored alongside the first and last points it
/// contains.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Segment<I> {
	pub(crate) start: I,
	pub(crate) end: I,
	pub(crate) interval: Interval<I>,
}

impl<I> Segment<I>
where
	I: PointType,
{
	/// Returns `None` for empty intervals.
	pub(crate) fn new(interval: Interval<I>) -> Option<Self> {
		let (start, end) = interval.span()?;
		Some(Segment {
			start,
			end,
			interval,
		})
	}
	///requires that `start <= end`
	pub(crate) fn closed(start: I, end: I) -> Self {
		Segment {
			start,
			end,
			interval: Interval::closed(start, end),
		}
	}

	pub(crate) fn contains_point(&self, point: I) -> bool {
		point >= self.start && point <= self.end
	}
	pub(crate) fn overlaps(&self, other: &Self) -> bool {
		self.start <= other.end && other.start <= self.end
	}
	///requires that self comes before other and they don't overlap
	pub(crate) fn touches_ordered(&self, other: &Self) -> bool {
		self.end.up() == Some(other.start)
	}
	pub(crate) fn hull(&self, other: &Self) -> Self {
		Segment {
			start: self.start.min(other.start),
			end: self.end.max(other.end),
			interval: self.interval.hull(&other.interval),
		}
	}
}

impl<I> PartialEq for Segment<I>
where
	I: PartialEq,
{
	fn eq(&self, other: &Self) -> bool {
		self.start == other.start && self.end == other.end
	}
}
impl<I> Eq for Segment<I> where I: Eq {}

/// An ordered map of non-overlapping [`Segment`]s based on [`BTreeMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SegmentMap<I, V> {
	inner: BTreeMap<Segment<I>, V>,
}

impl<I, V> SegmentMap<I, V>
where
	I: PointType,
{
	pub(crate) fn overlaps(&self, segment: Segment<I>) -> bool {
		self.overlapping(segment).next().is_some()
	}

	pub(crate) fn overlapping(
		&self,
		segment: Segment<I>,
	) -> impl DoubleEndedIterator<Item = (&Segment<I>, &V)> {
		self.inner.range(
			overlapping_comp(segment.start),
			SearchBoundCustom::Included,
			overlapping_comp(segment.end),
			SearchBoundCustom::Included,
		)
	}

	pub(crate) fn get_key_value_at_point(
		&self,
		point: I,
	) -> Option<(&Segment<I>, &V)> {
		self.inner.get_key_value(overlapping_comp(point))
	}

	pub(crate) fn contains_point(&self, point: I) -> bool {
		self.inner.contains_key(overlapping_comp(point))
	}

	/// Removes every entry overlapping `segment`, in ascending order.
	pub(crate) fn remove_overlapping(
		&mut self,
		segment: Segment<I>,
	) -> impl Iterator<Item = (Segment<I>, V)> {
		let mut result = Vec::new();

		let mut cursor = self.inner.lower_bound_mut(
			overlapping_comp(segment.start),
			SearchBoundCustom::Included,
		);

		while cursor
			.key()
			.is_some_and(|inner_segment| segment.overlaps(inner_segment))
		{
			result.extend(cursor.remove_current());
		}

		result.into_iter()
	}

	/// Cuts `segment` out of the map and returns the full or partial
	/// entries that were inside it, in ascending order.
	pub(crate) fn cut(&mut self, segment: Segment<I>) -> Vec<(Segment<I>, V)>
	where
		V: Clone,
	{
		let mut result = Vec::new();

		let mut cursor = self.inner.lower_bound_mut(
			overlapping_comp(segment.start),
			SearchBoundCustom::Included,
		);

		while let Some(key) = cursor.key() {
			if !key.overlaps(&segment) {
				break;
			}

			let Some((key, value)) = cursor.remove_current() else {
				break;
			};

			let cut_result = cut_segment(key, segment);

			if let Some(before_cut) = cut_result.before_cut {
				cursor.insert_before(before_cut, value.clone());
			}
			if let Some(after_cut) = cut_result.after_cut {
				cursor.insert_before(after_cut, value.clone());
			}

			result.extend(cut_result.inside_cut.map(|inside| (inside, value)));
		}

		result
	}

	/// Returns the parts of `segment` not covered by any entry, in
	/// ascending order.
	///
	/// Each gap borrows it's bounds from the neighbouring entries, flipped,
	/// or from `segment` itself at the ends.
	pub(crate) fn gaps(&self, segment: Segment<I>) -> Vec<Segment<I>> {
		let mut gaps = Vec::new();
		let mut lower = segment.interval.lower_endpoint();

		for (inner_segment, _) in self.overlapping(segment) {
			gaps.extend(Segment::new(Interval::from_endpoints(
				lower,
				flip_endpoint(inner_segment.interval.lower_endpoint()),
			)));
			lower = flip_endpoint(inner_segment.interval.upper_endpoint());
		}

		gaps.extend(Segment::new(Interval::from_endpoints(
			lower,
			segment.interval.upper_endpoint(),
		)));

		gaps
	}

	pub(crate) fn contains_segment(&self, segment: Segment<I>) -> bool {
		self.gaps(segment).is_empty()
	}

	pub(crate) fn insert_strict(
		&mut self,
		segment: Segment<I>,
		value: V,
	) -> Result<(), OverlapError<V>> {
		if self.overlaps(segment) {
			return Err(OverlapError { value });
		}

		self.insert_unchecked(segment, value);

		Ok(())
	}
	///requires that `segment` overlaps nothing in the map
	pub(crate) fn insert_unchecked(&mut self, segment: Segment<I>, value: V) {
		self.inner.insert(segment, value, starts_comp());
	}

	fn insert_merge_with_comps<G1, G2, R1, R2>(
		&mut self,
		segment: Segment<I>,
		value: V,
		get_start: G1,
		get_end: G2,
		remove_start: R1,
		remove_end: R2,
	) -> Segment<I>
	where
		G1: FnOnce(&Self) -> Option<Segment<I>>,
		G2: FnOnce(&Self) -> Option<Segment<I>>,
		R1: FnOnce(&mut Self),
		R2: FnOnce(&mut Self),
	{
		let matching_start = get_start(self);
		let matching_end = get_end(self);

		let returning = matching_start
			.into_iter()
			.chain(matching_end)
			.fold(segment, |merged, matching| merged.hull(&matching));

		let _ = self.remove_overlapping(segment);

		remove_start(self);
		remove_end(self);

		self.insert_unchecked(returning, value);

		returning
	}

	/// Adds a new entry and merges into it every entry which overlaps it.
	///
	/// The merged entry takes the given value.
	pub(crate) fn insert_merge_overlapping(
		&mut self,
		segment: Segment<I>,
		value: V,
	) -> Segment<I> {
		self.insert_merge_with_comps(
			segment,
			value,
			|selfy| {
				selfy
					.inner
					.get_key_value(overlapping_comp(segment.start))
					.map(|(key, _)| key)
					.copied()
			},
			|selfy| {
				selfy
					.inner
					.get_key_value(overlapping_comp(segment.end))
					.map(|(key, _)| key)
					.copied()
			},
			|_| {},
			|_| {},
		)
	}

	/// Adds a new entry and merges into it every entry which touches or
	/// overlaps it.
	///
	/// The merged entry takes the given value.
	pub(crate) fn insert_merge_touching_or_overlapping(
		&mut self,
		segment: Segment<I>,
		value: V,
	) -> Segment<I> {
		self.insert_merge_with_comps(
			segment,
			value,
			|selfy| {
				selfy
					.inner
					.get_key_value(touching_start_comp(segment.start))
					.or(selfy
						.inner
						.get_key_value(overlapping_comp(segment.start)))
					.map(|(key, _)| key)
					.copied()
			},
			|selfy| {
				selfy
					.inner
					.get_key_value(touching_end_comp(segment.end))
					.or(selfy
						.inner
						.get_key_value(overlapping_comp(segment.end)))
					.map(|(key, _)| key)
					.copied()
			},
			|selfy| {
				selfy.inner.remove(touching_start_comp(segment.start));
			},
			|selfy| {
				selfy.inner.remove(touching_end_comp(segment.end));
			},
		)
	}

	/// Merges the entries overlapping or touching `segment` into each
	/// other wherever two touching entries hold equal values.
	pub(crate) fn merge_touching_if_values_equal(&mut self, segment: Segment<I>)
	where
		V: PartialEq,
	{
		let reach = Segment::closed(
			segment.start.down().unwrap_or(segment.start),
			segment.end.up().unwrap_or(segment.end),
		);

		let merged: SmallVec<[(Segment<I>, V); 4]> = self
			.remove_overlapping(reach)
			.coalesce(|(first, first_value), (second, second_value)| {
				if first.touches_ordered(&second) && first_value == second_value
				{
					Ok((first.hull(&second), first_value))
				} else {
					Err(((first, first_value), (second, second_value)))
				}
			})
			.collect();

		for (merged_segment, value) in merged {
			self.insert_unchecked(merged_segment, value);
		}
	}
}

impl<I, V> SegmentMap<I, V> {
	pub(crate) fn new() -> Self {
		Self::default()
	}

	pub(crate) fn len(&self) -> usize {
		self.inner.len()
	}

	pub(crate) fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	pub(crate) fn iter(
		&self,
	) -> impl DoubleEndedIterator<Item = (&Segment<I>, &V)> {
		self.inner.iter()
	}

	pub(crate) fn first_key_value(&self) -> Option<(&Segment<I>, &V)> {
		self.inner.first_key_value()
	}

	pub(crate) fn last_key_value(&self) -> Option<(&Segment<I>, &V)> {
		self.inner.last_key_value()
	}
}

impl<I, V> IntoIterator for SegmentMap<I, V> {
	type Item = (Segment<I>, V);
	type IntoIter = BTreeMapIntoIter<Segment<I>, V>;
	fn into_iter(self) -> Self::IntoIter {
		self.inner.into_iter()
	}
}

impl<I, V> Default for SegmentMap<I, V> {
	fn default() -> Self {
		SegmentMap {
			inner: BTreeMap::default(),
		}
	}
}
