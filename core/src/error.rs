use core::fmt;

use thiserror::Error;

use crate::traits::Widened;

/// The operation a range verification was guarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Verification ran while constructing a ranged value.
    Initialize,
    /// Verification ran while casting a ranged value out to another kind.
    Cast,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Op::Initialize => "initialize",
            Op::Cast => "cast",
        })
    }
}

/// Failure produced when a value cannot be represented in a target kind.
///
/// Carries the operation that failed, the name of the target kind, and the
/// offending value; the value is never truncated or wrapped into range.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("failed to {op}: value {value} is out of range for {target}")]
pub struct RangeError {
    op: Op,
    target: &'static str,
    value: Widened,
}

impl RangeError {
    pub(crate) fn new(op: Op, target: &'static str, value: Widened) -> Self {
        Self { op, target, value }
    }

    /// The operation that failed.
    pub fn op(&self) -> Op {
        self.op
    }

    /// Name of the kind the value did not fit in.
    pub fn target(&self) -> &'static str {
        self.target
    }

    /// The offending value, widened to its own sign family.
    pub fn value(&self) -> Widened {
        self.value
    }
}
