//! Worked examples of the interval containers through the public API.

use std::collections::BTreeSet;

use discrete_icl::interval::{ee, ei, ie, ii};
use discrete_icl::{
	Interval, IntervalBounds, IntervalMap, IntervalSet, Max, Min, OverlapError,
	PartialEnricher, Plus, SaturatingPlus, SeparateIntervalSet,
	SplitIntervalSet, TotalAbsorber, TotalEnricher, Union,
};
use pretty_assertions::assert_eq;

fn shown<T>(items: impl Iterator<Item = T>) -> Vec<String>
where
	T: std::fmt::Display,
{
	items.map(|item| item.to_string()).collect()
}
fn shown_map<V, C, P>(map: &IntervalMap<i32, V, C, P>) -> Vec<String>
where
	V: std::fmt::Display,
{
	map.iter()
		.map(|(interval, value)| format!("{interval}->{value}"))
		.collect()
}

#[test]
fn intervals_have_four_kinds_of_bounds() {
	let closed = Interval::closed(1, 3);
	let open = Interval::open(1, 3);
	let left_open = Interval::left_open(1, 3);
	let right_open = Interval::right_open(1, 3);

	assert_eq!(closed.bounds(), IntervalBounds::Closed);
	assert_eq!(open.bounds(), IntervalBounds::Open);
	assert_eq!(left_open.bounds(), IntervalBounds::LeftOpen);
	assert_eq!(right_open.bounds(), IntervalBounds::RightOpen);

	assert_eq!(
		shown([closed, open, left_open, right_open].into_iter()),
		["[1,3]", "(1,3)", "(1,3]", "[1,3)"]
	);

	assert!(closed.contains(1) && closed.contains(3));
	assert!(!open.contains(1) && open.contains(2) && !open.contains(3));
	assert!(!left_open.contains(1) && left_open.contains(3));
	assert!(right_open.contains(1) && !right_open.contains(3));

	assert_eq!(open.first(), Some(2));
	assert_eq!(open.last(), Some(2));
	assert_eq!(Interval::from(1..4), ii(1, 3));
	assert_eq!(Interval::from(1..=4), ie(1, 5));
	assert_eq!(Interval::point(7), ii(7, 7));
}

#[test]
fn empty_intervals_are_equal_and_ignored() {
	assert!(ee(3, 3).is_empty());
	assert!(ii(5, 2).is_empty());
	assert_eq!(ee(3, 3), ie(9, 9));
	assert_eq!(ee(3, 4).first(), None);

	let mut set = IntervalSet::new();
	set.add(ee(3, 4));
	assert!(set.is_empty());
	assert!(set.contains(ee(3, 3)));

	let mut map: IntervalMap<i32, i32> = IntervalMap::new();
	map.add(ii(5, 2), 1);
	map.insert(ee(1, 2), 1);
	assert!(map.is_empty());
}

#[test]
fn joining_set_example() {
	let mut set = IntervalSet::new();
	set.add(ii(1, 3));
	set.add(ee(2, 5));
	assert_eq!(shown(set.iter()), ["[1,5)"]);
	set.add(ii(5, 7));
	assert_eq!(shown(set.iter()), ["[1,7]"]);
	assert_eq!(set.len(), 1);
}

#[test]
fn separating_set_example() {
	let mut set = SeparateIntervalSet::new();
	set.add(ie(1, 3));
	set.add(ii(3, 5));
	assert_eq!(shown(set.iter()), ["[1,3)", "[3,5]"]);
	set.add(ii(2, 4));
	assert_eq!(shown(set.iter()), ["[1,5]"]);
}

#[test]
fn splitting_set_example() {
	let mut set = SplitIntervalSet::new();
	set.add(ie(1, 3));
	set.add(ie(2, 5));
	assert_eq!(shown(set.iter()), ["[1,2)", "[2,3)", "[3,5)"]);

	let joined = IntervalSet::from(set);
	assert_eq!(shown(joined.iter()), ["[1,5)"]);
}

#[test]
fn set_algebra_over_points() {
	let a: IntervalSet<i32> =
		[1, 2, 3].map(Interval::point).into_iter().collect();
	let b: IntervalSet<i32> =
		[2, 3, 4, 5].map(Interval::point).into_iter().collect();

	let points = |set: &IntervalSet<i32>| {
		(0..10).filter(|x| set.contains_point(*x)).collect::<Vec<_>>()
	};

	assert_eq!(points(&a.difference(&b)), [1]);
	assert_eq!(points(&b.difference(&a)), [4, 5]);
	assert_eq!(points(&a.intersection(&b)), [2, 3]);
}

#[test]
fn map_aggregates_on_overlap() {
	let mut map: IntervalMap<i32, i32> = IntervalMap::new();
	map.add(ii(6, 8), 1);
	map.add(ii(7, 9), 2);
	assert_eq!(shown_map(&map), ["[6,7)->1", "[7,8]->3", "(8,9]->2"]);

	assert_eq!(map.get_at_point(7), Some(&3));
	assert_eq!(map.get_at_point(10), None);
	assert_eq!(map.domain().iter().collect::<Vec<_>>(), [ii(6, 9)]);
}

#[test]
fn enricher_keeps_identity_entries() {
	let mut map: IntervalMap<i32, i32, Plus, PartialEnricher> =
		IntervalMap::new();
	map.add(ii(1, 10), 0);
	map.add(ii(3, 5), 1);
	map.add(ii(8, 10), 3);
	assert_eq!(
		shown_map(&map),
		["[1,3)->0", "[3,5]->1", "(5,8)->0", "[8,10]->3"]
	);
}

#[test]
fn total_maps_read_unstored_points_as_the_identity() {
	let mut absorber: IntervalMap<i32, i32, Plus, TotalAbsorber> =
		IntervalMap::new();
	absorber.add(ii(1, 3), 2);
	absorber.subtract(ii(2, 5), 2);
	assert_eq!(shown_map(&absorber), ["[1,2)->2", "(3,5]->-2"]);
	assert_eq!(absorber.value_at(3), Some(0));
	assert_eq!(absorber.value_at(100), Some(0));

	let mut enricher: IntervalMap<i32, i32, Plus, TotalEnricher> =
		IntervalMap::new();
	enricher.add(ii(1, 3), 2);
	enricher.subtract(ii(2, 5), 2);
	assert_eq!(shown_map(&enricher), ["[1,2)->2", "[2,3]->0", "(3,5]->-2"]);
	assert_eq!(enricher.value_at(100), Some(0));
}

#[test]
fn other_combiners() {
	let mut highest: IntervalMap<i32, u8, Max> = IntervalMap::new();
	highest.add(ie(0, 10), 4);
	highest.add(ie(5, 15), 2);
	assert_eq!(shown_map(&highest), ["[0,10)->4", "[10,15)->2"]);

	let mut lowest: IntervalMap<i32, u8, Min> = IntervalMap::new();
	lowest.add(ie(0, 10), 4);
	lowest.add(ie(5, 15), 2);
	assert_eq!(shown_map(&lowest), ["[0,5)->4", "[5,15)->2"]);

	let mut people: IntervalMap<i32, BTreeSet<&str>, Union> =
		IntervalMap::new();
	people.add(ii(1, 4), BTreeSet::from(["ann"]));
	people.add(ii(3, 6), BTreeSet::from(["bob"]));
	assert_eq!(people.get_at_point(2), Some(&BTreeSet::from(["ann"])));
	assert_eq!(people.get_at_point(4), Some(&BTreeSet::from(["ann", "bob"])));
	assert_eq!(people.len(), 3);
}

#[test]
fn saturating_sums_stop_at_the_edges() {
	let mut map: IntervalMap<i32, u8, SaturatingPlus> = IntervalMap::new();
	map.add(ie(0, 10), 200);
	map.add(ie(5, 15), 200);
	map.add(ie(8, 9), 1);
	assert_eq!(shown_map(&map), ["[0,5)->200", "[5,15)->255"]);
}

#[test]
fn char_sets_join_across_the_surrogates() {
	let mut set = IntervalSet::new();
	set.add(ii('a', 'c'));
	set.add(ee('c', 'e'));
	set.add(ii('e', 'f'));
	assert_eq!(set.iter().collect::<Vec<_>>(), [ii('a', 'f')]);

	let mut set = IntervalSet::new();
	set.add(ii('\u{D700}', '\u{D7FF}'));
	set.add(ii('\u{E000}', '\u{E0FF}'));
	assert_eq!(set.len(), 1);
	assert!(set.contains_point('\u{E000}'));
	assert_eq!(set.gaps(ii('\u{D700}', '\u{E0FF}')).count(), 0);
}

#[test]
fn strict_insertion_reports_overlaps() {
	let mut map: IntervalMap<i32, u32> = IntervalMap::new();
	assert_eq!(map.insert_strict(ie(0, 5), 1), Ok(()));

	let error = map.insert_strict(ii(4, 6), 2).unwrap_err();
	assert_eq!(error, OverlapError { value: 2 });
	assert_eq!(
		error.to_string(),
		"the interval overlaps an interval already in the map"
	);
	assert_eq!(map.insert_strict(ei(4, 6), 2), Ok(()));
	assert_eq!(map.len(), 2);
}

#[test]
fn optional_values() {
	let mut value: Option<i32> = None;
	assert!(value.is_none());
	value = Some(42);
	assert!(value.is_some());
	assert_eq!(value.unwrap(), 42);

	let map: IntervalMap<i32, i32> = [(ii(1, 2), 5)].into_iter().collect();
	assert_eq!(map.value_at(1), Some(5));
	assert_eq!(map.value_at(3), None);
}

#[test]
#[should_panic]
fn reading_an_absent_optional_panics() {
	let value: Option<i32> = None;
	let _ = value.unwrap();
}
