//! Sidereal ascendant (lagna) from sidereal time and geographic
//! coordinates.

use jatak_eph::{Ephemeris, OBLIQUITY_RAD};
use jatak_vedic::normalize_360;

/// Sidereal ascendant longitude, degrees in [0, 360).
///
/// Greenwich sidereal time comes from the provider; local sidereal
/// time adds longitude/15h, and the Right Ascension of the Meridian is
/// that in degrees. The ascendant follows from the standard horizon
/// formula at the fixed mean obliquity, then the ayanamsa shifts it
/// into the sidereal frame.
///
/// At latitudes approaching the poles the tangent term diverges and
/// accuracy degrades; that is an accepted limitation, not an error.
pub fn sidereal_ascendant<E: Ephemeris + ?Sized>(
    eph: &E,
    jd: f64,
    latitude_deg: f64,
    longitude_deg: f64,
    ayanamsha: f64,
) -> f64 {
    let gst_hours = eph.sidereal_time_hours(jd);
    let lst_hours = gst_hours + longitude_deg / 15.0;
    let ramc = normalize_360(lst_hours * 15.0).to_radians();
    let lat = latitude_deg.to_radians();

    let num = -ramc.cos();
    let den = ramc.sin() * OBLIQUITY_RAD.cos() + lat.tan() * OBLIQUITY_RAD.sin();
    let tropical = normalize_360(num.atan2(den).to_degrees());
    normalize_360(tropical - ayanamsha)
}

/// 1-based sign of an ascendant longitude.
pub fn ascendant_sign(ascendant_deg: f64) -> u8 {
    ((ascendant_deg / 30.0).floor() as u8 % 12) + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use jatak_eph::{Body, EphemerisError, Vec3};

    /// Provider with a pinned Greenwich sidereal time.
    struct FixedGst(f64);

    impl Ephemeris for FixedGst {
        fn geocentric_vector(&self, body: Body, _jd: f64) -> Result<Vec3, EphemerisError> {
            Err(EphemerisError::BodyUnavailable(body))
        }

        fn sidereal_time_hours(&self, _jd: f64) -> f64 {
            self.0
        }
    }

    #[test]
    fn equator_ramc_zero_rises_at_270() {
        // RAMC = 0 at the equator: atan2(-1, 0) = -90 deg -> 270.
        let asc = sidereal_ascendant(&FixedGst(0.0), 0.0, 0.0, 0.0, 0.0);
        assert!((asc - 270.0).abs() < 1e-9, "asc = {asc}");
    }

    #[test]
    fn longitude_shifts_local_sidereal_time() {
        // +15 deg east is exactly one sidereal hour ahead.
        let west = sidereal_ascendant(&FixedGst(3.0), 0.0, 10.0, 0.0, 0.0);
        let east = sidereal_ascendant(&FixedGst(2.0), 0.0, 10.0, 15.0, 0.0);
        assert!((west - east).abs() < 1e-9);
    }

    #[test]
    fn ayanamsha_shifts_result_backward() {
        let tropical = sidereal_ascendant(&FixedGst(7.5), 0.0, 40.0, -75.0, 0.0);
        let sidereal = sidereal_ascendant(&FixedGst(7.5), 0.0, 40.0, -75.0, 24.0);
        assert!((normalize_360(tropical - sidereal) - 24.0).abs() < 1e-9);
    }

    #[test]
    fn result_always_normalized_with_valid_sign() {
        for gst in [0.0, 5.9, 11.3, 17.0, 23.9] {
            for lat in [-66.0, -30.0, 0.0, 45.0, 66.0] {
                let asc = sidereal_ascendant(&FixedGst(gst), 0.0, lat, 77.2, 23.85);
                assert!((0.0..360.0).contains(&asc));
                let sign = ascendant_sign(asc);
                assert!((1..=12).contains(&sign));
            }
        }
    }
}
