//! Output value objects of a chart computation.
//!
//! A [`Chart`] is built once per request and never mutated afterwards;
//! all fields are plain values safe to hand to rendering or storage
//! layers.

use jatak_vedic::{Dignity, Dosha, Element, Graha, Nakshatra, VimshottariSnapshot};

use crate::transit::TransitEntry;

/// One graha's placement in the birth chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetPosition {
    pub graha: Graha,
    /// Sidereal ecliptic longitude, degrees in [0, 360).
    pub sidereal_longitude: f64,
    /// 1-based sign, [1, 12].
    pub sign: u8,
    /// Degrees into the sign, [0, 30).
    pub degree_in_sign: f64,
    /// Whole-sign house from the ascendant, [1, 12].
    pub house: u8,
    /// Placeholder shadbala heuristic, [0, 100]. Nodes are fixed at 100.
    pub strength: f64,
    pub dignity: Dignity,
    pub nakshatra: Nakshatra,
    /// Not computed yet; always `false`.
    pub retrograde: bool,
}

/// Elemental summary derived from the ascendant sign. Quality, gem and
/// color are fixed placeholders pending a real mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bio {
    pub element: Element,
    pub quality: &'static str,
    pub lucky_gem: &'static str,
    pub lucky_color: &'static str,
}

/// Complete computed chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    /// Sidereal ascendant longitude, degrees.
    pub ascendant_longitude: f64,
    /// 1-based ascendant sign.
    pub ascendant_sign: u8,
    /// The Moon's nakshatra.
    pub nakshatra: Nakshatra,
    /// Active dasha periods as of the query instant.
    pub dasha: VimshottariSnapshot,
    /// Placeholder tag list; no pattern matcher runs yet.
    pub yogas: Vec<&'static str>,
    /// All 9 grahas in chart order (Sun..Saturn, Rahu, Ketu).
    pub planets: [PlanetPosition; 9],
    pub doshas: Vec<Dosha>,
    pub bio: Bio,
    /// Transit state of the 7 physical bodies at the query instant.
    pub transits: Vec<TransitEntry>,
}
