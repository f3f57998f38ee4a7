//! Reading and writing the containers with `serde_json`.

use discrete_icl::interval::{ie, ii};
use discrete_icl::{
	IntervalMap, IntervalSet, SeparateIntervalSet, SplitIntervalSet,
};
use pretty_assertions::assert_eq;

#[test]
fn maps_round_trip_through_json() {
	let mut map: IntervalMap<u8, u32> = IntervalMap::new();
	map.add(ii(6, 8), 1);
	map.add(ii(7, 9), 2);

	let json = serde_json::to_string(&map).unwrap();
	let back: IntervalMap<u8, u32> = serde_json::from_str(&json).unwrap();

	assert_eq!(back, map);
	assert_eq!(
		back.iter()
			.map(|(interval, value)| format!("{interval}->{value}"))
			.collect::<Vec<_>>(),
		["[6,7)->1", "[7,8]->3", "(8,9]->2"]
	);
}

#[test]
fn overlapping_map_entries_are_rejected() {
	let json = r#"[
		[{"lower":1,"upper":5,"bounds":"Closed"},1],
		[{"lower":4,"upper":6,"bounds":"Closed"},2]
	]"#;
	let result = serde_json::from_str::<IntervalMap<u8, u32>>(json);
	assert!(result.unwrap_err().to_string().contains("intervals overlap"));
}

#[test]
fn sets_are_re_added_when_read() {
	let json = r#"[
		{"lower":1,"upper":3,"bounds":"RightOpen"},
		{"lower":2,"upper":5,"bounds":"RightOpen"}
	]"#;

	let joined: IntervalSet<u8> = serde_json::from_str(json).unwrap();
	assert_eq!(joined.iter().collect::<Vec<_>>(), [ie(1, 5)]);

	let split: SplitIntervalSet<u8> = serde_json::from_str(json).unwrap();
	assert_eq!(split.len(), 3);

	let json = serde_json::to_string(&joined).unwrap();
	assert_eq!(json, r#"[{"lower":1,"upper":5,"bounds":"RightOpen"}]"#);
}

#[test]
fn separate_sets_are_read_one_interval_at_a_time() {
	let json = r#"[
		{"lower":1,"upper":3,"bounds":"RightOpen"},
		{"lower":3,"upper":5,"bounds":"Closed"},
		{"lower":9,"upper":9,"bounds":"Open"}
	]"#;

	let separate: SeparateIntervalSet<u8> = serde_json::from_str(json).unwrap();
	assert_eq!(separate.iter().collect::<Vec<_>>(), [ie(1, 3), ii(3, 5)]);

	let back: SeparateIntervalSet<u8> =
		serde_json::from_str(&serde_json::to_string(&separate).unwrap())
			.unwrap();
	assert_eq!(back, separate);
}

#[test]
fn sets_must_be_read_from_a_sequence() {
	let error = serde_json::from_str::<IntervalSet<u8>>(r#"{"lower":1}"#)
		.unwrap_err()
		.to_string();
	assert!(error.contains("an interval set"));
}
