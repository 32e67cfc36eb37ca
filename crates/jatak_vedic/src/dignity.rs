//! Dignity classification: exaltation, debilitation, sign lordship, and
//! the simplified friend/enemy relationship table.
//!
//! The relationship table is deliberately asymmetric in places (the Moon
//! has no enemies; Mercury counts the Moon as an enemy while the Moon
//! counts Mercury as a friend). That asymmetry is the traditional table,
//! not a bug.

use crate::graha::Graha;
use crate::rashi::Rashi;

/// Six-state dignity of a sign placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dignity {
    Exalted,
    OwnSign,
    Friendly,
    Neutral,
    Enemy,
    Debilitated,
}

impl Dignity {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Exalted => "Exalted",
            Self::OwnSign => "Own Sign",
            Self::Friendly => "Friendly",
            Self::Neutral => "Neutral",
            Self::Enemy => "Enemy",
            Self::Debilitated => "Debilitated",
        }
    }
}

/// Exaltation sign (1-based) for each graha.
///
/// The nodes carry conventional exaltation signs (Rahu in Taurus, Ketu
/// in Scorpio) even though they have no physical disc.
pub const fn exaltation_sign(graha: Graha) -> u8 {
    match graha {
        Graha::Sun => 1,      // Aries
        Graha::Moon => 2,     // Taurus
        Graha::Mars => 10,    // Capricorn
        Graha::Mercury => 6,  // Virgo
        Graha::Jupiter => 4,  // Cancer
        Graha::Venus => 12,   // Pisces
        Graha::Saturn => 7,   // Libra
        Graha::Rahu => 2,     // Taurus
        Graha::Ketu => 8,     // Scorpio
    }
}

/// Debilitation sign: always 180 degrees (6 signs) from exaltation.
pub const fn debilitation_sign(graha: Graha) -> u8 {
    let e = exaltation_sign(graha);
    if e > 6 { e - 6 } else { e + 6 }
}

/// Ruling graha of a sign.
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    match rashi {
        Rashi::Aries | Rashi::Scorpio => Graha::Mars,
        Rashi::Taurus | Rashi::Libra => Graha::Venus,
        Rashi::Gemini | Rashi::Virgo => Graha::Mercury,
        Rashi::Cancer => Graha::Moon,
        Rashi::Leo => Graha::Sun,
        Rashi::Sagittarius | Rashi::Pisces => Graha::Jupiter,
        Rashi::Capricorn | Rashi::Aquarius => Graha::Saturn,
    }
}

/// Natural friends of a graha (simplified table).
pub fn friends(graha: Graha) -> &'static [Graha] {
    use Graha::*;
    match graha {
        Sun => &[Moon, Mars, Jupiter],
        Moon => &[Sun, Mercury],
        Mars => &[Sun, Moon, Jupiter],
        Mercury => &[Sun, Venus],
        Jupiter => &[Sun, Moon, Mars],
        Venus => &[Mercury, Saturn],
        Saturn => &[Mercury, Venus],
        Rahu => &[Venus, Saturn],
        Ketu => &[Mars, Venus],
    }
}

/// Natural enemies of a graha (simplified table).
///
/// The Moon's list is empty by convention.
pub fn enemies(graha: Graha) -> &'static [Graha] {
    use Graha::*;
    match graha {
        Sun => &[Venus, Saturn],
        Moon => &[],
        Mars => &[Mercury],
        Mercury => &[Moon],
        Jupiter => &[Mercury, Venus],
        Venus => &[Sun, Moon],
        Saturn => &[Sun, Moon, Mars],
        Rahu => &[Sun, Moon],
        Ketu => &[Sun, Moon],
    }
}

/// Classify a graha's placement in a sign.
///
/// Resolution order: exaltation, debilitation, own sign, then the
/// relationship of the graha to the sign's lord.
pub fn dignity_for(graha: Graha, sign: u8) -> Dignity {
    if exaltation_sign(graha) == sign {
        return Dignity::Exalted;
    }
    if debilitation_sign(graha) == sign {
        return Dignity::Debilitated;
    }

    let lord = rashi_lord(Rashi::from_number(sign));
    if lord == graha {
        return Dignity::OwnSign;
    }
    if friends(graha).contains(&lord) {
        return Dignity::Friendly;
    }
    if enemies(graha).contains(&lord) {
        return Dignity::Enemy;
    }
    Dignity::Neutral
}
