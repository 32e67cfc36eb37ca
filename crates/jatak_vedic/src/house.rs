//! Whole-sign house assignment.
//!
//! Each house spans exactly one sign, counted from the ascendant's sign
//! as house 1.

/// House [1,12] of a planet's sign relative to the ascendant sign.
///
/// Both arguments are 1-based sign numbers.
pub fn whole_sign_house(ascendant_sign: u8, planet_sign: u8) -> u8 {
    let mut house = planet_sign as i32 - ascendant_sign as i32 + 1;
    if house <= 0 {
        house += 12;
    }
    house as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascendant_sign_is_first_house() {
        for asc in 1..=12u8 {
            assert_eq!(whole_sign_house(asc, asc), 1);
        }
    }

    #[test]
    fn wraps_below_ascendant() {
        // Ascendant Pisces (12), planet Aries (1) -> house 2
        assert_eq!(whole_sign_house(12, 1), 2);
        // Ascendant Leo (5), planet Aries (1) -> house 9
        assert_eq!(whole_sign_house(5, 1), 9);
    }

    #[test]
    fn always_in_range() {
        for asc in 1..=12u8 {
            for sign in 1..=12u8 {
                let h = whole_sign_house(asc, sign);
                assert!((1..=12).contains(&h), "asc {asc} sign {sign} -> {h}");
            }
        }
    }

    #[test]
    fn each_house_hit_exactly_once_per_ascendant() {
        for asc in 1..=12u8 {
            let mut seen = [false; 13];
            for sign in 1..=12u8 {
                seen[whole_sign_house(asc, sign) as usize] = true;
            }
            assert!(seen[1..].iter().all(|&s| s));
        }
    }
}
