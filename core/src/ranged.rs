use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use int_kind::IntKind;
use num::Zero;

use crate::error::Op;
use crate::traits::{IntValue, Repr, Widened};
use crate::verify::{verify, verify_as};
use crate::Result;

/// An integer value annotated with the inclusive range `MIN..=MAX`, stored
/// in the narrowest native representation able to hold the range.
///
/// The storage primitive `I` is fixed by kind selection; instantiations are
/// normally materialized through the `create_ranged_int!` macro, which picks
/// `I` automatically and rejects invalid bounds at the macro call site.
/// Construction and casting validate against the native bounds of the
/// storage kind, so an out-of-range numeral can never be observed.
///
/// Values with different declared bounds are distinct types, but remain
/// comparable as long as their storage kinds share a sign family.
#[repr(transparent)]
#[derive(Clone, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Ranged<I, const MIN: i128, const MAX: i128>
where
    I: Repr,
{
    value: I,
}

impl<I, const MIN: i128, const MAX: i128> Ranged<I, MIN, MAX>
where
    I: Repr,
{
    /// The representation kind backing this instantiation.
    ///
    /// Resolution fails to compile when the range is empty, when no native
    /// kind up to 32 bits holds it, or when `I` is not the kind selection
    /// picks for `MIN..=MAX`.
    pub const KIND: IntKind = {
        assert!(MIN <= MAX, "ranged value bounds are empty");
        match IntKind::select(MIN, MAX) {
            Some(kind) => {
                assert!(
                    kind as u8 == I::KIND as u8,
                    "storage primitive does not match the selected representation kind"
                );
                kind
            }
            None => panic!("no native integer kind can represent the bounds"),
        }
    };

    /// Validated construction from any primitive integer value.
    ///
    /// The input is verified against the native bounds of the storage kind;
    /// out-of-range values are reported as failed `initialize` operations
    /// and never truncated into range.
    pub fn new<V: IntValue>(value: V) -> Result<Self> {
        let widened = value.widen();
        verify(Self::KIND, widened, Op::Initialize)?;
        Ok(Self {
            value: I::from_widened(widened),
        })
    }

    /// The stored numeral at its own storage kind. Verification already
    /// happened at construction, so reading cannot fail.
    pub fn get(self) -> I {
        self.value
    }

    /// Validated cast of the stored numeral to any primitive integer kind.
    ///
    /// The numeral is widened to its own sign family and verified against
    /// the native bounds of `T`; failures are reported as `cast` operations.
    /// A target whose range contains the storage kind's range accepts every
    /// value.
    pub fn cast<T: IntValue>(self) -> Result<T> {
        let widened = self.value.widen();
        verify_as::<T>(widened, Op::Cast)?;
        Ok(T::from_widened(widened))
    }

    /// Smallest value of the declared range, at the storage kind.
    pub fn min_value() -> I {
        Self::narrow_bound(MIN)
    }

    /// Largest value of the declared range, at the storage kind.
    pub fn max_value() -> I {
        Self::narrow_bound(MAX)
    }

    // Declared bounds are representable in `I` whenever kind resolution
    // succeeds, so narrowing them cannot lose value.
    fn narrow_bound(bound: i128) -> I {
        let _ = Self::KIND;
        I::from_widened(Widened::Signed(bound))
    }
}

impl<I, const MIN: i128, const MAX: i128> Default for Ranged<I, MIN, MAX>
where
    I: Repr,
{
    /// Zero, stored without runtime verification. Instantiations whose
    /// declared range excludes zero have no default and fail to compile.
    fn default() -> Self {
        const { assert!(MIN <= 0 && 0 <= MAX, "default requires the range to contain zero") };
        let _ = Self::KIND;
        Self { value: I::zero() }
    }
}

impl<A, B, const AMIN: i128, const AMAX: i128, const BMIN: i128, const BMAX: i128>
    PartialEq<Ranged<B, BMIN, BMAX>> for Ranged<A, AMIN, AMAX>
where
    A: Repr,
    B: Repr<Family = A::Family>,
{
    fn eq(&self, other: &Ranged<B, BMIN, BMAX>) -> bool {
        self.value.to_wide() == other.value.to_wide()
    }
}

impl<A, B, const AMIN: i128, const AMAX: i128, const BMIN: i128, const BMAX: i128>
    PartialOrd<Ranged<B, BMIN, BMAX>> for Ranged<A, AMIN, AMAX>
where
    A: Repr,
    B: Repr<Family = A::Family>,
{
    fn partial_cmp(&self, other: &Ranged<B, BMIN, BMAX>) -> Option<Ordering> {
        Some(self.value.to_wide().cmp(&other.value.to_wide()))
    }
}

impl<I, const MIN: i128, const MAX: i128> Eq for Ranged<I, MIN, MAX> where I: Repr {}

impl<I, const MIN: i128, const MAX: i128> Ord for Ranged<I, MIN, MAX>
where
    I: Repr,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.to_wide().cmp(&other.value.to_wide())
    }
}

// Hash over the widened numeral, consistent with cross-width equality
// inside a sign family.
impl<I, const MIN: i128, const MAX: i128> Hash for Ranged<I, MIN, MAX>
where
    I: Repr,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.to_wide().hash(state);
    }
}

impl<I, const MIN: i128, const MAX: i128> fmt::Debug for Ranged<I, MIN, MAX>
where
    I: Repr + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl<I, const MIN: i128, const MAX: i128> fmt::Display for Ranged<I, MIN, MAX>
where
    I: Repr + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}
