//! Rashi (zodiac sign) decomposition and elemental classification.
//!
//! The ecliptic is divided into 12 equal signs of 30 degrees starting
//! from Aries at 0 deg sidereal. Chart output uses 1-based sign numbers
//! (1 = Aries .. 12 = Pisces), so the helpers here work on that scale.

use crate::util::normalize_360;

/// The 12 zodiac signs, Aries first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rashi {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in zodiac order.
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Aries,
    Rashi::Taurus,
    Rashi::Gemini,
    Rashi::Cancer,
    Rashi::Leo,
    Rashi::Virgo,
    Rashi::Libra,
    Rashi::Scorpio,
    Rashi::Sagittarius,
    Rashi::Capricorn,
    Rashi::Aquarius,
    Rashi::Pisces,
];

/// Elemental classification of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Air => "Air",
            Self::Water => "Water",
        }
    }
}

impl Rashi {
    /// English name of the sign.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// Sanskrit name of the sign.
    pub const fn sanskrit_name(self) -> &'static str {
        match self {
            Self::Aries => "Mesha",
            Self::Taurus => "Vrishabha",
            Self::Gemini => "Mithuna",
            Self::Cancer => "Karka",
            Self::Leo => "Simha",
            Self::Virgo => "Kanya",
            Self::Libra => "Tula",
            Self::Scorpio => "Vrischika",
            Self::Sagittarius => "Dhanu",
            Self::Capricorn => "Makara",
            Self::Aquarius => "Kumbha",
            Self::Pisces => "Meena",
        }
    }

    /// 1-based sign number (Aries = 1 .. Pisces = 12).
    pub const fn number(self) -> u8 {
        match self {
            Self::Aries => 1,
            Self::Taurus => 2,
            Self::Gemini => 3,
            Self::Cancer => 4,
            Self::Leo => 5,
            Self::Virgo => 6,
            Self::Libra => 7,
            Self::Scorpio => 8,
            Self::Sagittarius => 9,
            Self::Capricorn => 10,
            Self::Aquarius => 11,
            Self::Pisces => 12,
        }
    }

    /// Sign from a 1-based number; numbers outside [1,12] wrap modulo 12.
    pub fn from_number(number: u8) -> Self {
        let idx = ((number as i32 - 1).rem_euclid(12)) as usize;
        ALL_RASHIS[idx]
    }

    /// Classical element of the sign (fire/earth/air/water triplicity).
    pub const fn element(self) -> Element {
        match self {
            Self::Aries | Self::Leo | Self::Sagittarius => Element::Fire,
            Self::Taurus | Self::Virgo | Self::Capricorn => Element::Earth,
            Self::Gemini | Self::Libra | Self::Aquarius => Element::Air,
            Self::Cancer | Self::Scorpio | Self::Pisces => Element::Water,
        }
    }
}

/// 1-based sign number [1,12] of a sidereal longitude.
pub fn sign_number(sidereal_lon: f64) -> u8 {
    let lon = normalize_360(sidereal_lon);
    ((lon / 30.0).floor() as u8).min(11) + 1
}

/// Degree within the sign, [0, 30).
pub fn degree_in_sign(sidereal_lon: f64) -> f64 {
    normalize_360(sidereal_lon) % 30.0
}
