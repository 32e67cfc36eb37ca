//! Forward search for each body's next sidereal sign ingress.
//!
//! This is an approximate marching search, not a root-finder: jump
//! most of the way using a mean-motion estimate, then step forward in
//! fixed increments until the sign changes. The reported days are
//! accurate to within one refinement step.

use jatak_eph::{Body, Ephemeris, advance_jd};
use jatak_vedic::{Rashi, degree_in_sign, sign_number};

use crate::error::ChartError;
use crate::positions::body_sidereal_longitude;

/// Bodies covered by transit prediction, in report order.
pub const TRANSIT_BODIES: [Body; 7] = [
    Body::Sun,
    Body::Moon,
    Body::Mars,
    Body::Mercury,
    Body::Jupiter,
    Body::Venus,
    Body::Saturn,
];

/// Tuning for the ingress search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitConfig {
    /// Fraction of the mean-motion estimate jumped before refining.
    pub jump_fraction: f64,
    /// Refinement-step bound; exhausting it yields an unresolved
    /// ingress, not an error.
    pub max_refine_steps: usize,
}

impl Default for TransitConfig {
    fn default() -> Self {
        Self {
            jump_fraction: 0.8,
            max_refine_steps: 1000,
        }
    }
}

/// Approximate mean daily motion, degrees/day, for the initial jump.
fn mean_daily_motion(body: Body) -> f64 {
    match body {
        Body::Sun => 1.0,
        Body::Moon => 13.2,
        Body::Mercury => 1.2,
        Body::Venus => 1.2,
        Body::Mars => 0.5,
        Body::Jupiter => 0.083,
        Body::Saturn => 0.034,
    }
}

/// Refinement step size, days. Finer for fast movers.
fn refine_step_days(body: Body) -> f64 {
    match body {
        Body::Moon => 0.2,
        Body::Jupiter => 5.0,
        Body::Saturn => 10.0,
        _ => 1.0,
    }
}

/// One body's transit state at the query instant.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitEntry {
    pub body: Body,
    /// Current sidereal sign.
    pub sign: Rashi,
    /// Degrees into the sign, [0, 30).
    pub degree_in_sign: f64,
    /// Percent of the sign traversed, [0, 100).
    pub progress: f64,
    /// Estimated days until the next sign ingress; `None` when the
    /// search exhausted its iteration bound.
    pub days_to_ingress: Option<f64>,
    pub description: String,
}

/// Transit state of all [`TRANSIT_BODIES`] at `now_jd`, with default
/// search tuning.
pub fn transit_snapshot<E: Ephemeris + ?Sized>(
    eph: &E,
    now_jd: f64,
) -> Result<Vec<TransitEntry>, ChartError> {
    transit_snapshot_with(eph, now_jd, &TransitConfig::default())
}

/// Transit state of all [`TRANSIT_BODIES`] at `now_jd`.
pub fn transit_snapshot_with<E: Ephemeris + ?Sized>(
    eph: &E,
    now_jd: f64,
    config: &TransitConfig,
) -> Result<Vec<TransitEntry>, ChartError> {
    TRANSIT_BODIES
        .iter()
        .map(|&body| transit_for_body(eph, body, now_jd, config))
        .collect()
}

fn transit_for_body<E: Ephemeris + ?Sized>(
    eph: &E,
    body: Body,
    now_jd: f64,
    config: &TransitConfig,
) -> Result<TransitEntry, ChartError> {
    let lon = body_sidereal_longitude(eph, body, now_jd)?;
    let sign_num = sign_number(lon);
    let degree = degree_in_sign(lon);
    let sign = Rashi::from_number(sign_num);

    let days_to_ingress = days_to_next_ingress(eph, body, now_jd, sign_num, degree, config)?;

    Ok(TransitEntry {
        body,
        sign,
        degree_in_sign: degree,
        progress: degree / 30.0 * 100.0,
        days_to_ingress,
        description: format!("Transiting {}", sign.name()),
    })
}

/// March forward from `now_jd` until the body leaves `start_sign`.
fn days_to_next_ingress<E: Ephemeris + ?Sized>(
    eph: &E,
    body: Body,
    now_jd: f64,
    start_sign: u8,
    degree: f64,
    config: &TransitConfig,
) -> Result<Option<f64>, ChartError> {
    // Jump most of the mean-motion estimate to save iterations.
    let est_days = (30.0 - degree) / mean_daily_motion(body);
    let mut days = (est_days * config.jump_fraction).floor().max(0.0);
    let step = refine_step_days(body);

    for _ in 0..config.max_refine_steps {
        let lon = body_sidereal_longitude(eph, body, advance_jd(now_jd, days))?;
        if sign_number(lon) != start_sign {
            return Ok(Some(days));
        }
        days += step;
    }
    Ok(None)
}
