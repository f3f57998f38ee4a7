use core::cmp::Ordering;

use crate::segment_map::Segment;
use crate::{Interval, PointType};

pub(crate) fn cmp_point_with_segment<I>(
	point: I,
	segment: &Segment<I>,
) -> Ordering
where
	I: PointType,
{
	if point < segment.start {
		Ordering::Less
	} else if point > segment.end {
		Ordering::Greater
	} else {
		Ordering::Equal
	}
}

pub(crate) fn overlapping_comp<I>(
	point: I,
) -> impl FnMut(&Segment<I>) -> Ordering
where
	I: PointType,
{
	move |inner_segment: &Segment<I>| {
		cmp_point_with_segment(point, inner_segment)
	}
}
pub(crate) fn touching_start_comp<I>(
	start: I,
) -> impl FnMut(&Segment<I>) -> Ordering
where
	I: PointType,
{
	move |inner_segment: &Segment<I>| match inner_segment.end.up() {
		Some(touching_position) => start.cmp(&touching_position),
		None => Ordering::Less,
	}
}
pub(crate) fn touching_end_comp<I>(
	end: I,
) -> impl FnMut(&Segment<I>) -> Ordering
where
	I: PointType,
{
	move |inner_segment: &Segment<I>| match inner_segment.start.down() {
		Some(touching_position) => end.cmp(&touching_position),
		None => Ordering::Greater,
	}
}
pub(crate) fn starts_comp<I>() -> impl FnMut(&Segment<I>, &Segment<I>) -> Ordering
where
	I: PointType,
{
	|inner_segment: &Segment<I>, new_segment: &Segment<I>| {
		new_segment.start.cmp(&inner_segment.start)
	}
}

#[derive(Debug, PartialEq)]
pub(crate) enum Config {
	LeftFirstNonOverlapping,
	LeftFirstPartialOverlap,
	LeftContainsRight,

	RightFirstNonOverlapping,
	RightFirstPartialOverlap,
	RightContainsLeft,
}
pub(crate) fn config<I>(a: &Segment<I>, b: &Segment<I>) -> Config
where
	I: PointType,
{
	if a.start < b.start {
		match (a.contains_point(b.start), a.contains_point(b.end)) {
			(false, false) => Config::LeftFirstNonOverlapping,
			(true, false) => Config::LeftFirstPartialOverlap,
			(true, true) => Config::LeftContainsRight,
			(false, true) => unreachable!(),
		}
	} else {
		match (b.contains_point(a.start), b.contains_point(a.end)) {
			(false, false) => Config::RightFirstNonOverlapping,
			(true, false) => Config::RightFirstPartialOverlap,
			(true, true) => Config::RightContainsLeft,
			(false, true) => unreachable!(),
		}
	}
}

/// Turns the bound on one side of a cut into the bound on the other side
/// of it.
pub(crate) fn flip_endpoint<I>((point, included): (I, bool)) -> (I, bool) {
	(point, !included)
}

#[derive(Debug)]
pub(crate) struct CutResult<I> {
	pub(crate) before_cut: Option<Segment<I>>,
	pub(crate) inside_cut: Option<Segment<I>>,
	pub(crate) after_cut: Option<Segment<I>>,
}
/// Splits `base` at the borders of `cut`.
///
/// The pieces keep the bound style of whichever interval their bounds came
/// from, a piece ending where the cut begins gets the cut's lower bound
/// flipped, so `[6,8]` cut by `[7,9]` leaves `[6,7)` behind.
pub(crate) fn cut_segment<I>(base: Segment<I>, cut: Segment<I>) -> CutResult<I>
where
	I: PointType,
{
	let base_lower = base.interval.lower_endpoint();
	let base_upper = base.interval.upper_endpoint();
	let cut_lower = cut.interval.lower_endpoint();
	let cut_upper = cut.interval.upper_endpoint();

	let piece = |lower, upper| {
		Segment::new(Interval::from_endpoints(lower, upper))
	};

	let mut result = CutResult {
		before_cut: None,
		inside_cut: None,
		after_cut: None,
	};

	match config(&base, &cut) {
		Config::LeftFirstNonOverlapping => {
			result.before_cut = Some(base);
		}
		Config::LeftFirstPartialOverlap => {
			result.before_cut = piece(base_lower, flip_endpoint(cut_lower));
			result.inside_cut = piece(cut_lower, base_upper);
		}
		Config::LeftContainsRight => {
			result.before_cut = piece(base_lower, flip_endpoint(cut_lower));
			result.inside_cut = Some(cut);
			result.after_cut = piece(flip_endpoint(cut_upper), base_upper);
		}

		Config::RightFirstNonOverlapping => {
			result.after_cut = Some(base);
		}
		Config::RightFirstPartialOverlap => {
			result.inside_cut = piece(base_lower, cut_upper);
			result.after_cut = piece(flip_endpoint(cut_upper), base_upper);
		}
		Config::RightContainsLeft => {
			result.inside_cut = Some(base);
		}
	}

	result
}
