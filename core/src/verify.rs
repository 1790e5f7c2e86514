use int_kind::IntKind;

use crate::error::{Op, RangeError};
use crate::traits::{IntValue, Widened};

/// Whether `value` is representable in a target with the given signedness
/// and native bounds.
///
/// The three sign pairings are branched on explicitly; a widened value never
/// leaves its own sign family, so the unsigned 32-bit kind needs no wider
/// signed type to be compared against.
fn check_range(signed: bool, min: i128, max: u128, value: Widened) -> bool {
    match (signed, value) {
        // Same signedness: inclusive test against both native bounds. The
        // unsigned native minimum is zero, which an unsigned value cannot
        // undershoot.
        (true, Widened::Signed(v)) => min <= v && v <= max as i128,
        (false, Widened::Unsigned(v)) => v <= max,

        // Unsigned target, signed value: reject negatives, then compare the
        // magnitude as unsigned.
        (false, Widened::Signed(v)) => 0 <= v && v as u128 <= max,

        // Signed target, unsigned value: the target maximum reinterpreted as
        // unsigned; the lower bound cannot apply.
        (true, Widened::Unsigned(v)) => v <= max,
    }
}

/// Verifies `value` against the native bounds of `kind`.
pub(crate) fn verify(kind: IntKind, value: Widened, op: Op) -> Result<(), RangeError> {
    if check_range(kind.is_signed(), kind.min_value(), kind.max_value(), value) {
        Ok(())
    } else {
        Err(RangeError::new(op, kind.name(), value))
    }
}

/// Verifies `value` against the native bounds of the primitive `T`.
pub(crate) fn verify_as<T: IntValue>(value: Widened, op: Op) -> Result<(), RangeError> {
    if check_range(T::SIGNED, T::MIN, T::MAX, value) {
        Ok(())
    } else {
        Err(RangeError::new(op, T::NAME, value))
    }
}
