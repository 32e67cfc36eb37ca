//! Error type for pure Vedic calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from the pure-math layer.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum VedicError {
    /// Input outside the documented domain.
    InvalidInput(&'static str),
    /// The bounded dasha search exhausted its iteration budget. The
    /// 120-year cycle guarantees termination for any query inside the
    /// cycle, so hitting this is an internal-invariant violation, not
    /// bad user input.
    DashaOverrun(&'static str),
}

impl Display for VedicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::DashaOverrun(msg) => write!(f, "dasha cycle overrun: {msg}"),
        }
    }
}

impl Error for VedicError {}
