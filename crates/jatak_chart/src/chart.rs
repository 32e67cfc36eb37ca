//! Chart assembly: one synchronous pass from birth details to the
//! finished [`Chart`].

use jatak_eph::Ephemeris;
use jatak_vedic::{
    ALL_GRAHAS, Rashi, ayanamsha_deg, degree_in_sign, dignity_for, kalsarpa_dosha, mangal_dosha,
    nakshatra_from_longitude, sign_number, vimshottari_snapshot, whole_sign_house,
};

use crate::ascendant::{ascendant_sign, sidereal_ascendant};
use crate::chart_types::{Bio, Chart, PlanetPosition};
use crate::error::ChartError;
use crate::input::BirthInput;
use crate::positions::graha_sidereal_longitudes;
use crate::transit::transit_snapshot;

/// Placeholder shadbala heuristic; lunar nodes are pinned at 100.
fn placeholder_strength(sidereal_lon: f64) -> f64 {
    50.0 + sidereal_lon % 20.0
}

/// Compute the full chart for `input`, with dasha progress and transit
/// state evaluated at `now`.
///
/// `now` is an explicit parameter so identical inputs always produce
/// identical charts; nothing here reads the wall clock.
pub fn compute_chart<E: Ephemeris + ?Sized>(
    eph: &E,
    input: &BirthInput,
    now: jatak_eph::UtcTime,
) -> Result<Chart, ChartError> {
    let birth = input.birth_instant()?;
    let birth_jd = birth.to_jd();
    let now_jd = now.to_jd();
    let ayanamsha = ayanamsha_deg(birth_jd);

    let longitudes = graha_sidereal_longitudes(eph, birth_jd)?;

    let ascendant_longitude = sidereal_ascendant(
        eph,
        birth_jd,
        input.latitude_deg,
        input.longitude_deg,
        ayanamsha,
    );
    let asc_sign = ascendant_sign(ascendant_longitude);

    let planets = ALL_GRAHAS.map(|graha| {
        let lon = longitudes[graha.index() as usize];
        let sign = sign_number(lon);
        PlanetPosition {
            graha,
            sidereal_longitude: lon,
            sign,
            degree_in_sign: degree_in_sign(lon),
            house: whole_sign_house(asc_sign, sign),
            strength: if graha.is_node() {
                100.0
            } else {
                placeholder_strength(lon)
            },
            dignity: dignity_for(graha, sign),
            nakshatra: nakshatra_from_longitude(lon),
            retrograde: false,
        }
    });

    let mars = &planets[jatak_vedic::Graha::Mars.index() as usize];
    let doshas = vec![mangal_dosha(mars.house), kalsarpa_dosha()];

    let moon_lon = longitudes[jatak_vedic::Graha::Moon.index() as usize];
    let dasha = vimshottari_snapshot(birth_jd, moon_lon, now_jd)?;

    Ok(Chart {
        ascendant_longitude,
        ascendant_sign: asc_sign,
        nakshatra: nakshatra_from_longitude(moon_lon),
        dasha,
        yogas: vec!["Vipreet Raj Yoga"],
        planets,
        doshas,
        bio: Bio {
            element: Rashi::from_number(asc_sign).element(),
            quality: "Cardinal",
            lucky_gem: "Ruby",
            lucky_color: "Red",
        },
        transits: transit_snapshot(eph, now_jd)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strength_heuristic_stays_in_band() {
        for lon in [0.0, 7.3, 19.99, 20.0, 125.0, 359.9] {
            let s = placeholder_strength(lon);
            assert!((50.0..70.0).contains(&s), "strength {s} for lon {lon}");
        }
    }
}
