//! Ephemeris adapter seam and time plumbing for the jatak chart engine.
//!
//! This crate defines the contract an external ephemeris provider must
//! satisfy ([`Ephemeris`]) together with the small amount of shared
//! machinery every consumer needs: the supported [`Body`] set, cartesian
//! [`Vec3`] math, equatorial/ecliptic frame rotation at the fixed mean
//! obliquity, and the [`UtcTime`] calendar type with Julian Date
//! conversion.
//!
//! No ephemeris is implemented here. The chart engine is written purely
//! against the trait; providers (JPL-kernel backed, VSOP-based, remote)
//! live outside this workspace.

pub mod body;
pub mod error;
pub mod frame;
pub mod provider;
pub mod time;
pub mod vector;

pub use body::{ALL_BODIES, Body};
pub use error::EphemerisError;
pub use frame::{OBLIQUITY_DEG, OBLIQUITY_RAD, ecliptic_to_equatorial, equatorial_to_ecliptic};
pub use provider::Ephemeris;
pub use time::{J2000_JD, UtcTime, advance_jd};
pub use vector::Vec3;
