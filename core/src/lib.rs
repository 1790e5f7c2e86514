//! Building blocks for ranged integer value types: the storage traits, the
//! range verification algorithm, and the generic [`Ranged`] value holder.
//!
//! Most users should go through the `ranged_engine` crate, which re-exports
//! this one and provides the materialization macro.

mod error;
mod ranged;
mod traits;
mod verify;

pub use error::{Op, RangeError};
pub use ranged::Ranged;
pub use traits::{IntValue, Repr, SignFamily, Signed, Unsigned, Widened};

pub use int_kind::IntKind;

/// Result alias for the fallible ranged operations.
///
/// Used by the proc macro output through `ranged_engine`.
pub type Result<T> = core::result::Result<T, RangeError>;
