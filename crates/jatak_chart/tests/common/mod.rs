//! Deterministic mock ephemeris for integration tests.
//!
//! Every body moves uniformly near its mean geocentric rate; the Moon
//! rides a circular orbit inclined 5.145 deg to the ecliptic with a
//! fixed ascending node, so the true-node solver has a known answer.

use jatak_eph::{Body, Ephemeris, EphemerisError, J2000_JD, Vec3, ecliptic_to_equatorial};

/// Ascending node of the mock Moon's orbit, tropical degrees.
pub const MOCK_MOON_NODE_DEG: f64 = 125.04;

pub struct ClockworkSky;

impl ClockworkSky {
    fn base_and_rate(body: Body) -> (f64, f64) {
        match body {
            Body::Sun => (280.46, 0.9856),
            Body::Moon => (0.0, 13.176), // argument along the orbit, not longitude
            Body::Mars => (100.0, 0.524),
            Body::Mercury => (150.0, 1.2),
            Body::Jupiter => (34.35, 0.083),
            Body::Venus => (181.98, 1.2),
            Body::Saturn => (50.08, 0.034),
        }
    }
}

impl Ephemeris for ClockworkSky {
    fn geocentric_vector(&self, body: Body, jd: f64) -> Result<Vec3, EphemerisError> {
        let (base, rate) = Self::base_and_rate(body);
        let angle = (base + rate * (jd - J2000_JD)).to_radians();
        let ecl = if body == Body::Moon {
            let i = 5.145_f64.to_radians();
            let om = MOCK_MOON_NODE_DEG.to_radians();
            let (a, b, c) = (angle.cos(), angle.sin() * i.cos(), angle.sin() * i.sin());
            Vec3::new(om.cos() * a - om.sin() * b, om.sin() * a + om.cos() * b, c)
        } else {
            Vec3::new(angle.cos(), angle.sin(), 0.0)
        };
        Ok(ecliptic_to_equatorial(ecl))
    }

    fn sidereal_time_hours(&self, jd: f64) -> f64 {
        let hours = 18.697_374_558 + 24.065_709_824_419_08 * (jd - J2000_JD);
        hours.rem_euclid(24.0)
    }
}
