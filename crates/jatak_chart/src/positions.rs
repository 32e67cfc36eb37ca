//! Sidereal longitudes of all 9 grahas from the ephemeris adapter.

use jatak_eph::{Body, Ephemeris, EphemerisError};
use jatak_vedic::{ALL_GRAHAS, Graha, ayanamsha_deg, sidereal_from_tropical};

use crate::node::true_node_sidereal;

/// Map a graha to the provider body it is queried as. Nodes are
/// computed, not queried.
pub fn graha_to_body(graha: Graha) -> Option<Body> {
    match graha {
        Graha::Sun => Some(Body::Sun),
        Graha::Moon => Some(Body::Moon),
        Graha::Mars => Some(Body::Mars),
        Graha::Mercury => Some(Body::Mercury),
        Graha::Jupiter => Some(Body::Jupiter),
        Graha::Venus => Some(Body::Venus),
        Graha::Saturn => Some(Body::Saturn),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Sidereal ecliptic longitude of one physical body at `jd`.
pub fn body_sidereal_longitude<E: Ephemeris + ?Sized>(
    eph: &E,
    body: Body,
    jd: f64,
) -> Result<f64, EphemerisError> {
    let v = eph.geocentric_vector(body, jd)?;
    let (tropical_lon, _lat) = eph.ecliptic_lon_lat(v);
    Ok(sidereal_from_tropical(tropical_lon, ayanamsha_deg(jd)))
}

/// Sidereal longitudes of all 9 grahas, indexed by [`Graha::index`].
///
/// The 7 physical bodies come from the provider; Rahu/Ketu from the
/// true-node solver.
pub fn graha_sidereal_longitudes<E: Ephemeris + ?Sized>(
    eph: &E,
    jd: f64,
) -> Result<[f64; 9], EphemerisError> {
    let nodes = true_node_sidereal(eph, jd, ayanamsha_deg(jd))?;
    let mut longitudes = [0.0f64; 9];
    for graha in ALL_GRAHAS {
        let idx = graha.index() as usize;
        longitudes[idx] = match graha {
            Graha::Rahu => nodes.rahu,
            Graha::Ketu => nodes.ketu,
            _ => {
                let body = graha_to_body(graha).ok_or(EphemerisError::Provider(String::from(
                    "node treated as physical body",
                )))?;
                body_sidereal_longitude(eph, body, jd)?
            }
        };
    }
    Ok(longitudes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_covers_physical_bodies_only() {
        assert_eq!(graha_to_body(Graha::Sun), Some(Body::Sun));
        assert_eq!(graha_to_body(Graha::Moon), Some(Body::Moon));
        assert_eq!(graha_to_body(Graha::Mars), Some(Body::Mars));
        assert_eq!(graha_to_body(Graha::Mercury), Some(Body::Mercury));
        assert_eq!(graha_to_body(Graha::Jupiter), Some(Body::Jupiter));
        assert_eq!(graha_to_body(Graha::Venus), Some(Body::Venus));
        assert_eq!(graha_to_body(Graha::Saturn), Some(Body::Saturn));
        assert_eq!(graha_to_body(Graha::Rahu), None);
        assert_eq!(graha_to_body(Graha::Ketu), None);
    }
}
