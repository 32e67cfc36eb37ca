//! True (osculating) lunar node from the Moon's instantaneous orbit.
//!
//! The node is derived from the orbit's angular-momentum vector rather
//! than a mean-element polynomial: sample the Moon's position twice,
//! one minute apart, finite-difference a velocity, and intersect the
//! resulting orbital plane with the ecliptic.

use jatak_eph::{Body, Ephemeris, EphemerisError, equatorial_to_ecliptic};
use jatak_vedic::normalize_360;

/// Finite-difference step for the velocity estimate: one minute.
const NODE_DELTA_DAYS: f64 = 1.0 / 1440.0;

/// Sidereal longitudes of the two lunar nodes, degrees in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodePair {
    pub rahu: f64,
    pub ketu: f64,
}

/// Compute the true ascending node (Rahu) and its opposite (Ketu) at
/// `jd`, shifted into the sidereal frame by `ayanamsha`.
pub fn true_node_sidereal<E: Ephemeris + ?Sized>(
    eph: &E,
    jd: f64,
    ayanamsha: f64,
) -> Result<NodePair, EphemerisError> {
    let p0 = eph.geocentric_vector(Body::Moon, jd)?;
    let p1 = eph.geocentric_vector(Body::Moon, jd + NODE_DELTA_DAYS)?;
    let v = p1.sub(p0);

    // Orbit normal in the equatorial frame, then rotated to ecliptic.
    let h = equatorial_to_ecliptic(p0.cross(v));

    // Ascending-node direction = z-hat x h = (-h_y, h_x, 0).
    let node_tropical = normalize_360(h.x.atan2(-h.y).to_degrees());

    let rahu = normalize_360(node_tropical - ayanamsha);
    let ketu = normalize_360(rahu + 180.0);
    Ok(NodePair { rahu, ketu })
}
