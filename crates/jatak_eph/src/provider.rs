//! The ephemeris adapter contract.

use crate::body::Body;
use crate::error::EphemerisError;
use crate::vector::Vec3;

/// External ephemeris provider the chart engine is written against.
///
/// Epochs are Julian Dates (UTC-scale is fine: the downstream linear
/// ayanamsa model swamps the TDB/UTC offset).
pub trait Ephemeris {
    /// Geocentric position vector of `body` at `jd`, equatorial frame.
    fn geocentric_vector(&self, body: Body, jd: f64) -> Result<Vec3, EphemerisError>;

    /// Greenwich sidereal time at `jd`, in hours [0, 24).
    fn sidereal_time_hours(&self, jd: f64) -> f64;

    /// Ecliptic longitude and latitude (degrees) of an equatorial-frame
    /// position vector. Longitude in [0, 360), latitude in [-90, 90].
    ///
    /// Providers with their own coordinate pipeline may override; the
    /// default rotates by the fixed mean obliquity.
    fn ecliptic_lon_lat(&self, v: Vec3) -> (f64, f64) {
        let ecl = crate::frame::equatorial_to_ecliptic(v);
        let lon = ecl.y.atan2(ecl.x).to_degrees();
        let lon = if lon < 0.0 { lon + 360.0 } else { lon };
        let r = ecl.norm();
        let lat = if r > 0.0 {
            (ecl.z / r).asin().to_degrees()
        } else {
            0.0
        };
        (lon, lat)
    }
}
