//! Error type for ephemeris provider failures.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::body::Body;

/// Errors an [`crate::Ephemeris`] implementation may report.
///
/// The chart engine propagates these unchanged; a chart computation is
/// deterministic, so there is nothing to retry.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The provider cannot serve this body.
    BodyUnavailable(Body),
    /// The query epoch is outside the provider's usable range.
    EpochOutOfRange(f64),
    /// Provider-internal failure (kernel read, interpolation, transport).
    Provider(String),
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BodyUnavailable(body) => write!(f, "body unavailable: {}", body.name()),
            Self::EpochOutOfRange(jd) => write!(f, "epoch out of range: JD {jd}"),
            Self::Provider(msg) => write!(f, "ephemeris provider error: {msg}"),
        }
    }
}

impl Error for EphemerisError {}
