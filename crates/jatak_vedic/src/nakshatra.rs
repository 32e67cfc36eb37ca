//! Nakshatra (lunar mansion) mapping.
//!
//! The ecliptic is divided into 27 equal segments of 13 deg 20 min
//! (360/27 deg). The Moon's nakshatra drives the Vimshottari dasha
//! timeline; every planet's nakshatra is also reported for display.

use crate::util::normalize_360;

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishta,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini .. 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishta,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishta => "Dhanishta",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini = 0 .. Revati = 26).
    pub fn index(self) -> u8 {
        ALL_NAKSHATRAS
            .iter()
            .position(|n| *n == self)
            .unwrap_or(0) as u8
    }
}

/// Nakshatra a sidereal longitude falls in.
///
/// The index is clamped to 26 so a longitude arbitrarily close to 360
/// still maps to Revati rather than walking off the table.
pub fn nakshatra_from_longitude(sidereal_lon: f64) -> Nakshatra {
    let lon = normalize_360(sidereal_lon);
    let idx = ((lon / NAKSHATRA_SPAN).floor() as usize).min(26);
    ALL_NAKSHATRAS[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_is_exact() {
        assert!((NAKSHATRA_SPAN * 27.0 - 360.0).abs() < 1e-12);
    }

    #[test]
    fn first_and_last_segments() {
        assert_eq!(nakshatra_from_longitude(0.0), Nakshatra::Ashwini);
        assert_eq!(nakshatra_from_longitude(13.0), Nakshatra::Ashwini);
        assert_eq!(nakshatra_from_longitude(359.99), Nakshatra::Revati);
    }

    #[test]
    fn rohini_at_40_degrees() {
        // Rohini spans [40, 53.33)
        assert_eq!(nakshatra_from_longitude(40.0), Nakshatra::Rohini);
        assert_eq!(nakshatra_from_longitude(53.0), Nakshatra::Rohini);
        assert_eq!(nakshatra_from_longitude(53.34), Nakshatra::Mrigashira);
    }

    #[test]
    fn negative_longitude_wraps_to_revati() {
        assert_eq!(nakshatra_from_longitude(-1.0), Nakshatra::Revati);
    }

    #[test]
    fn index_matches_table_position() {
        for (i, nak) in ALL_NAKSHATRAS.iter().enumerate() {
            assert_eq!(nak.index() as usize, i);
        }
    }
}
