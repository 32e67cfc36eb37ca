//! Error type for chart orchestration.

use jatak_eph::EphemerisError;
use jatak_vedic::VedicError;

/// Errors surfaced by chart computation.
#[derive(Debug)]
#[non_exhaustive]
pub enum ChartError {
    /// Birth date or time string could not be parsed into an instant.
    /// Rejected up front so a garbage value never reaches the
    /// trigonometry downstream.
    InvalidInstant(&'static str),
    /// The ephemeris provider failed; propagated unchanged, no retry.
    Ephemeris(EphemerisError),
    /// A pure-math Vedic computation reported an invariant violation.
    Vedic(VedicError),
}

impl std::fmt::Display for ChartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartError::InvalidInstant(msg) => write!(f, "invalid birth instant: {msg}"),
            ChartError::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
            ChartError::Vedic(e) => write!(f, "vedic computation error: {e}"),
        }
    }
}

impl std::error::Error for ChartError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ChartError::Ephemeris(e) => Some(e),
            ChartError::Vedic(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EphemerisError> for ChartError {
    fn from(e: EphemerisError) -> Self {
        ChartError::Ephemeris(e)
    }
}

impl From<VedicError> for ChartError {
    fn from(e: VedicError) -> Self {
        ChartError::Vedic(e)
    }
}
