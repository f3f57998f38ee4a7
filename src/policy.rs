//! A module containing the [`Policy`] trait and the four policies an
//! [`IntervalMap`](crate::IntervalMap) can be configured with.
//!
//! | policy              | identity values stored | unstored points read as |
//! | ------------------- | ---------------------- | ----------------------- |
//! | [`PartialAbsorber`] | NO                     | absent                  |
//! | [`PartialEnricher`] | YES                    | absent                  |
//! | [`TotalAbsorber`]   | NO                     | identity                |
//! | [`TotalEnricher`]   | YES                    | identity                |

/// Configures how an [`IntervalMap`](crate::IntervalMap) treats the
/// identity element of it's [`Combiner`](crate::Combiner).
pub trait Policy {
	/// If `true`, entries whose value is the identity are never stored.
	const ABSORBS_IDENTITIES: bool;
	/// If `true`, points without an entry are read as holding the
	/// identity rather than being absent.
	const IS_TOTAL: bool;
}

/// Identity values are dropped and unstored points are absent.
///
/// This is the policy used by [`IntervalMap`](crate::IntervalMap) unless
/// another one is given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartialAbsorber;
impl Policy for PartialAbsorber {
	const ABSORBS_IDENTITIES: bool = true;
	const IS_TOTAL: bool = false;
}

/// Identity values are stored and unstored points are absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartialEnricher;
impl Policy for PartialEnricher {
	const ABSORBS_IDENTITIES: bool = false;
	const IS_TOTAL: bool = false;
}

/// Identity values are dropped and unstored points hold the identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TotalAbsorber;
impl Policy for TotalAbsorber {
	const ABSORBS_IDENTITIES: bool = true;
	const IS_TOTAL: bool = true;
}

/// Identity values are stored and unstored points hold the identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TotalEnricher;
impl Policy for TotalEnricher {
	const ABSORBS_IDENTITIES: bool = false;
	const IS_TOTAL: bool = true;
}
