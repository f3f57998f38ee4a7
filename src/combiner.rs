//! A module containing the [`Combiner`] and [`Inverse`] traits along with
//! the combiners provided by this crate.
//!
//! A combiner decides what happens to the values of an
//! [`IntervalMap`](crate::IntervalMap) when a new value is added over
//! points which already hold one. The value already stored is combined
//! with the one being added, and points which held nothing are treated as
//! holding the combiner's identity.

use alloc::collections::BTreeSet;
use core::ops::{AddAssign, SubAssign};

use crate::PointType;

/// An associative and commutative operation over values of type `V`
/// with an identity element.
pub trait Combiner<V> {
	/// The value which leaves any other value unchanged when combined
	/// with it.
	fn identity() -> V;

	/// Combines `value` into `existing`.
	fn combine(existing: &mut V, value: &V);
}

/// A [`Combiner`] whose combinations can be undone.
pub trait Inverse<V>: Combiner<V> {
	/// Takes `value` back out of `existing`.
	fn uncombine(existing: &mut V, value: &V);
}

/// Combines values with `+=`, the identity is [`Default::default()`].
///
/// This is the combiner used by [`IntervalMap`](crate::IntervalMap) unless
/// another one is given.
///
/// For the primitive integers `+=` panics on overflow in debug builds and
/// wraps in release builds, so the sum of every value added over a point
/// must fit in `V`. Use [`SaturatingPlus`] when it might not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Plus;

impl<V> Combiner<V> for Plus
where
	V: AddAssign + Clone + Default,
{
	fn identity() -> V {
		V::default()
	}

	fn combine(existing: &mut V, value: &V) {
		*existing += value.clone();
	}
}
impl<V> Inverse<V> for Plus
where
	V: AddAssign + SubAssign + Clone + Default,
{
	fn uncombine(existing: &mut V, value: &V) {
		*existing -= value.clone();
	}
}

/// Combines primitive integers with saturating addition, the identity is
/// zero.
///
/// Sums which would overflow stop at `V::MAX` (or `V::MIN`) instead. Such
/// a sum can no longer be undone, so this combiner has no [`Inverse`].
///
/// ```rust
/// use discrete_icl::interval::ii;
/// use discrete_icl::{IntervalMap, SaturatingPlus};
///
/// let mut map: IntervalMap<u8, i8, SaturatingPlus> = IntervalMap::new();
/// map.add(ii(1, 4), 100);
/// map.add(ii(3, 6), 100);
///
/// assert_eq!(map.get_at_point(2), Some(&100));
/// assert_eq!(map.get_at_point(3), Some(&i8::MAX));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaturatingPlus;

macro_rules! impl_saturating_plus {
	($($ident:ident),* $(,)?) => {
		$(
			impl Combiner<$ident> for SaturatingPlus {
				fn identity() -> $ident {
					0
				}

				fn combine(existing: &mut $ident, value: &$ident) {
					*existing = existing.saturating_add(*value);
				}
			}
		)*
	};
}

impl_saturating_plus!(
	u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, usize, isize,
);

/// Combines sets by taking their union, the identity is the empty set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Union;

impl<T> Combiner<BTreeSet<T>> for Union
where
	T: Ord + Clone,
{
	fn identity() -> BTreeSet<T> {
		BTreeSet::new()
	}

	fn combine(existing: &mut BTreeSet<T>, value: &BTreeSet<T>) {
		existing.extend(value.iter().cloned());
	}
}
impl<T> Inverse<BTreeSet<T>> for Union
where
	T: Ord + Clone,
{
	fn uncombine(existing: &mut BTreeSet<T>, value: &BTreeSet<T>) {
		existing.retain(|x| !value.contains(x));
	}
}

/// Keeps the largest value, the identity is the smallest value of `V`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Max;

impl<V> Combiner<V> for Max
where
	V: PointType,
{
	fn identity() -> V {
		V::MIN
	}

	fn combine(existing: &mut V, value: &V) {
		*existing = (*existing).max(*value);
	}
}

/// Keeps the smallest value, the identity is the largest value of `V`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Min;

impl<V> Combiner<V> for Min
where
	V: PointType,
{
	fn identity() -> V {
		V::MAX
	}

	fn combine(existing: &mut V, value: &V) {
		*existing = (*existing).min(*value);
	}
}
