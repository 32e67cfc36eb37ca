//! Pure-math Vedic chart calculations: sidereal conversion, sign and
//! nakshatra decomposition, dignity classification, whole-sign houses,
//! the Vimshottari dasha timeline, and dosha rule checks.
//!
//! Nothing in this crate performs I/O or queries an ephemeris; every
//! function is a deterministic mapping from longitudes and epochs to
//! values. Orchestration against the ephemeris adapter lives in
//! `jatak_chart`.

pub mod ayanamsha;
pub mod dasha;
pub mod dignity;
pub mod dosha;
pub mod error;
pub mod graha;
pub mod house;
pub mod nakshatra;
pub mod rashi;
pub mod util;

pub use ayanamsha::{ayanamsha_deg, sidereal_from_tropical};
pub use dasha::{
    DAYS_PER_YEAR, VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_TOTAL_YEARS, VimshottariSnapshot,
    birth_balance, vimshottari_snapshot,
};
pub use dignity::{Dignity, dignity_for, rashi_lord};
pub use dosha::{Dosha, DoshaSeverity, kalsarpa_dosha, mangal_dosha};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha};
pub use house::whole_sign_house;
pub use nakshatra::{ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, nakshatra_from_longitude};
pub use rashi::{ALL_RASHIS, Element, Rashi, degree_in_sign, sign_number};
pub use util::normalize_360;
