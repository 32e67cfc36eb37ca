//! Linear Lahiri ayanamsha model and sidereal conversion.
//!
//! The ayanamsha is the angular offset between the tropical zodiac
//! (anchored to the equinox) and the sidereal zodiac (anchored to the
//! fixed stars). This engine uses a linear approximation: the Lahiri
//! value at J2000.0 plus the mean annual precession rate. Good to a few
//! arcminutes over a human lifetime, which matches the accuracy of the
//! rest of the pipeline.

use jatak_eph::J2000_JD;

use crate::util::normalize_360;

/// Lahiri ayanamsha at J2000.0, degrees.
const LAHIRI_J2000_DEG: f64 = 23.85;

/// Mean annual precession in longitude, arcseconds per Julian year.
const ANNUAL_PRECESSION_ARCSEC: f64 = 50.29;

/// Ayanamsha in degrees at a Julian Date.
pub fn ayanamsha_deg(jd: f64) -> f64 {
    let years = (jd - J2000_JD) / 365.25;
    LAHIRI_J2000_DEG + years * (ANNUAL_PRECESSION_ARCSEC / 3600.0)
}

/// Sidereal longitude from a tropical longitude, [0, 360).
pub fn sidereal_from_tropical(tropical_lon: f64, ayanamsha: f64) -> f64 {
    normalize_360(tropical_lon - ayanamsha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_reference_value() {
        assert!((ayanamsha_deg(J2000_JD) - 23.85).abs() < 1e-12);
    }

    #[test]
    fn one_year_adds_one_precession_step() {
        let a0 = ayanamsha_deg(J2000_JD);
        let a1 = ayanamsha_deg(J2000_JD + 365.25);
        assert!((a1 - a0 - 50.29 / 3600.0).abs() < 1e-12);
    }

    #[test]
    fn grows_into_the_past_and_future() {
        // ~24.2 deg around 2025, ~23.5 deg around 1975
        let a2025 = ayanamsha_deg(J2000_JD + 25.0 * 365.25);
        let a1975 = ayanamsha_deg(J2000_JD - 25.0 * 365.25);
        assert!(a2025 > 24.1 && a2025 < 24.3, "a2025 = {a2025}");
        assert!(a1975 > 23.4 && a1975 < 23.6, "a1975 = {a1975}");
    }

    #[test]
    fn sidereal_conversion_wraps() {
        // Tropical 10 deg minus ~24 deg ayanamsha lands near 346 deg
        let sid = sidereal_from_tropical(10.0, 24.0);
        assert!((sid - 346.0).abs() < 1e-12);
        assert!((0.0..360.0).contains(&sid));
    }
}
