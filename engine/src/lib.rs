//! `ranged_engine` provides a procedural macro to automatically generate
//! integer value types constrained to a compile-time inclusive range,
//! backed by the narrowest native representation able to hold the range.
//!
//! ```
//! use ranged_engine::prelude::*;
//!
//! create_ranged_int! {
//!     name: Percent,
//!     min: 0,
//!     max: 100,
//! }
//!
//! fn main() -> ranged_engine::Result<()> {
//!     let score = Percent::new(42)?;
//!     assert_eq!(score.get(), 42);
//!     assert_eq!(Percent::KIND, IntKind::U8);
//!
//!     assert!(Percent::new(300).is_err());
//!     Ok(())
//! }
//! ```
//!
//! To generate a type, we provide a name and the inclusive bounds of the
//! range. A negative lower bound selects the narrowest fitting signed kind,
//! a non-negative lower bound the narrowest fitting unsigned kind; bounds no
//! kind up to 32 bits can hold are rejected at the macro call site. In the
//! example above, `Percent` is backed by a `u8` because `0..=100` fits in
//! the unsigned 8-bit kind.
//!
//! Values of different ranged types can be compared whenever their storage
//! kinds share a sign family, and the stored numeral can be extracted at any
//! primitive integer kind through a validated cast:
//!
//! ```
//! use ranged_engine::prelude::*;
//!
//! create_ranged_int! {
//!     name: Offset,
//!     min: -10,
//!     max: 30,
//! }
//!
//! let offset = Offset::new(-2)?;
//!
//! // A negative numeral never casts to an unsigned kind.
//! assert!(offset.cast::<u32>().is_err());
//! assert_eq!(offset.cast::<i8>()?, -2);
//! # Ok::<(), ranged_engine::RangeError>(())
//! ```
#![deny(missing_docs)]

/// Include this at the top of the file when materializing or using ranged
/// integer types.
pub mod prelude {
    pub use ranged_derive::create_ranged_int;

    pub use ranged_core::{IntKind, IntValue, Op, RangeError, Ranged, Repr};
}

pub use ranged_core::{Op, RangeError, Result};

#[doc(hidden)]
pub use ranged_core as private;
