//! A module containing the [`DiscreteFinite`] trait and trait impls for the
//! primitive integer datatypes and [`char`].
//!
//! Interval sets and maps step open bounds inwards with
//! [`DiscreteFinite::up()`] and [`DiscreteFinite::down()`] to find the first
//! and last point of every interval.
//!
//! ```rust
//! use discrete_icl::DiscreteFinite;
//!
//! assert_eq!(7_u8.up(), Some(8));
//! assert_eq!(u8::MAX.up(), None);
//!
//! // chars skip over the surrogate code points
//! assert_eq!('\u{D7FF}'.up(), Some('\u{E000}'));
//! assert_eq!('\u{E000}'.down(), Some('\u{D7FF}'));
//! ```

/// A trait for things which are both discrete and finite datatypes. See the
/// top-level module documentation for more detailed descriptions on
/// discrete-ness and finite-ness.
pub trait DiscreteFinite {
	/// The minimum value of the type.
	const MIN: Self;
	/// The maximum value of the type.
	const MAX: Self;

	/// The smallest value greater than `self` if one exists.
	fn up(self) -> Option<Self>
	where
		Self: Sized;
	/// The greatest value smaller than `self` if one exists.
	fn down(self) -> Option<Self>
	where
		Self: Sized;
}

macro_rules! impl_discrete_finite {
	() => {};
	($ident:ident, $($t:tt)*) => {
		impl DiscreteFinite for $ident {
			const MIN: Self = $ident::MIN;
			const MAX: Self = $ident::MAX;

			fn up(self) -> Option<Self> {
				self.checked_add(1)
			}
			fn down(self) -> Option<Self> {
				self.checked_sub(1)
			}
		}

		impl_discrete_finite!($($t)*);
	};
}

impl_discrete_finite!(
	u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, usize, isize,
);

const BEFORE_SURROGATES: char = '\u{D7FF}';
const AFTER_SURROGATES: char = '\u{E000}';

impl DiscreteFinite for char {
	const MIN: Self = '\0';
	const MAX: Self = char::MAX;

	fn up(self) -> Option<Self> {
		match self {
			BEFORE_SURROGATES => Some(AFTER_SURROGATES),
			char::MAX => None,
			_ => char::from_u32(u32::from(self) + 1),
		}
	}
	fn down(self) -> Option<Self> {
		match self {
			AFTER_SURROGATES => Some(BEFORE_SURROGATES),
			'\0' => None,
			_ => char::from_u32(u32::from(self) - 1),
		}
	}
}
