//! This crate provides interval containers over discrete point types:
//! [`IntervalSet`], [`SeparateIntervalSet`], [`SplitIntervalSet`] and the
//! aggregating [`IntervalMap`], all built on top of [`BTreeMap`].
//!
//! ## Example using an aggregating map
//!
//! ```rust
//! use discrete_icl::interval::{ei, ie, ii};
//! use discrete_icl::IntervalMap;
//!
//! let mut guests: IntervalMap<u8, u32> = IntervalMap::new();
//!
//! // two guests stay from the 6th to the 8th, one from the 7th to the 9th
//! guests.add(ii(6, 8), 2);
//! guests.add(ii(7, 9), 1);
//!
//! assert_eq!(
//! 	guests.iter().collect::<Vec<_>>(),
//! 	[(ie(6, 7), &2), (ii(7, 8), &3), (ei(8, 9), &1)]
//! );
//! assert_eq!(guests.get_at_point(7), Some(&3));
//! assert_eq!(guests.get_at_point(10), None);
//! ```
//!
//! ## Example using the three interval sets
//!
//! ```rust
//! use discrete_icl::interval::{ie, ii};
//! use discrete_icl::{IntervalSet, SeparateIntervalSet, SplitIntervalSet};
//!
//! let intervals = [ie(1, 3), ii(3, 5), ie(2, 4)];
//!
//! let joined: IntervalSet<u8> = intervals.into_iter().collect();
//! let separate: SeparateIntervalSet<u8> = intervals.into_iter().collect();
//! let split: SplitIntervalSet<u8> = intervals.into_iter().collect();
//!
//! assert_eq!(joined.len(), 1);
//! assert_eq!(separate.len(), 1);
//! assert_eq!(split.len(), 4);
//! ```
//!
//! # Key Understandings and Philosophies
//!
//! ## Discrete-ness
//!
//! This crate is designed to work with [`Discrete`] types as compared to
//! [`Continuous`] types. For example, `u8` is a `Discrete` type, but
//! `String` is a `Continuous` if you try to parse it as a decimal value.
//!
//! Because every point has a next and a previous point (see
//! [`DiscreteFinite`]) every interval can be stored as the first and last
//! point it contains, no matter if it's bounds were open or closed. This
//! is why `[1, 4)` and `[1, 3]` are equal intervals and why `(3, 4)` is
//! empty.
//!
//! ## Empty Intervals
//!
//! Any pair of bounds makes an [`Interval`], those which contain no
//! points are empty intervals. Adding, inserting or erasing an empty
//! interval does nothing.
//!
//! ## Combiners and Policies
//!
//! An [`IntervalMap`] is configured with a [`Combiner`], which decides how
//! the values of overlapping intervals are aggregated, and a [`Policy`],
//! which decides what happens to values equal to the combiner's identity.
//! The defaults are [`Plus`] and [`PartialAbsorber`].
//!
//! # Features
//!
//! This crate currently has the following features:
//!
//! - `serde`: Implements `Serialize` and `Deserialize` for the containers
//!   and [`Interval`]
//!
//! [`btreemap`]: https://doc.rust-lang.org/std/collections/struct.BTreeMap.html
//! [`discrete`]: https://en.wikipedia.org/wiki/Discrete_mathematics
//! [`continuous`]: https://en.wikipedia.org/wiki/List_of_continuity-related_mathematical_topics

#![cfg_attr(not(test), no_std)]
#![allow(clippy::tabs_in_doc_comments)]
#![allow(clippy::needless_return)]

extern crate alloc;

pub(crate) mod segment_map;
pub(crate) mod utils;

pub mod combiner;
pub mod discrete_finite;
pub mod interval;
pub mod interval_map;
pub mod interval_set;
pub mod policy;

pub use crate::combiner::{
	Combiner, Inverse, Max, Min, Plus, SaturatingPlus, Union,
};
pub use crate::discrete_finite::DiscreteFinite;
pub use crate::interval::{Interval, IntervalBounds, PointType};
pub use crate::interval_map::{IntervalMap, OverlapError};
pub use crate::interval_set::{
	IntervalSet, SeparateIntervalSet, SplitIntervalSet,
};
pub use crate::policy::{
	PartialAbsorber, PartialEnricher, Policy, TotalAbsorber, TotalEnricher,
};
