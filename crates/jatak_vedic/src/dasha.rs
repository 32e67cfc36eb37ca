//! Vimshottari dasha: the 120-year cyclic timeline of planetary
//! rulership periods, anchored to the Moon's nakshatra position at birth.
//!
//! Two bounded loops locate the active periods for a query instant:
//! first the mahadasha (advancing whole lord-periods from the birth
//! balance, at most one full 9-lord pass), then its 9 proportional
//! antardasha sub-periods. Exhausting either bound is an internal
//! invariant violation and reported as [`VedicError::DashaOverrun`],
//! never silently returned as stale data.

use crate::error::VedicError;
use crate::graha::Graha;
use crate::nakshatra::NAKSHATRA_SPAN;
use crate::util::normalize_360;

/// Year length for dasha arithmetic, days.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Full Vimshottari cycle length in years.
pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

/// The 9 dasha lords in cyclic order with their period lengths in years.
/// The years sum to exactly 120.
pub const VIMSHOTTARI_SEQUENCE: [(Graha, f64); 9] = [
    (Graha::Ketu, 7.0),
    (Graha::Venus, 20.0),
    (Graha::Sun, 6.0),
    (Graha::Moon, 10.0),
    (Graha::Mars, 7.0),
    (Graha::Rahu, 18.0),
    (Graha::Jupiter, 16.0),
    (Graha::Saturn, 19.0),
    (Graha::Mercury, 17.0),
];

/// The active two-level period at a query instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VimshottariSnapshot {
    /// Lord of the active mahadasha.
    pub mahadasha: Graha,
    /// Lord of the active antardasha.
    pub antardasha: Graha,
    /// Start of the active antardasha window (JD).
    pub start_jd: f64,
    /// End of the active antardasha window (JD, exclusive).
    pub end_jd: f64,
    /// Lord of the following antardasha.
    pub next_antardasha: Graha,
    /// Start of the following antardasha (JD).
    pub next_start_jd: f64,
    /// Percent elapsed of the active antardasha, clamped to [0, 100].
    pub progress: f64,
}

/// Birth balance from the Moon's sidereal longitude.
///
/// Returns `(lord_index, balance_days)`: the index into
/// [`VIMSHOTTARI_SEQUENCE`] of the lord ruling at birth, and the days
/// remaining in that lord's mahadasha. The balance is the unelapsed
/// fraction of the Moon's nakshatra scaled by the lord's full period.
pub fn birth_balance(moon_sidereal_lon: f64) -> (usize, f64) {
    let lon = normalize_360(moon_sidereal_lon);
    let nak_idx = ((lon / NAKSHATRA_SPAN).floor() as usize).min(26);
    let lord_idx = nak_idx % 9;
    let elapsed_fraction = (lon - nak_idx as f64 * NAKSHATRA_SPAN) / NAKSHATRA_SPAN;
    let lord_years = VIMSHOTTARI_SEQUENCE[lord_idx].1;
    let balance_days = lord_years * (1.0 - elapsed_fraction) * DAYS_PER_YEAR;
    (lord_idx, balance_days)
}

/// Locate the active mahadasha and antardasha at `query_jd`.
///
/// If the query falls inside the birth-balance window (including any
/// query before birth), the birth lord is returned for both levels and
/// the window is the balance itself; no sub-period refinement is done
/// for that span.
pub fn vimshottari_snapshot(
    birth_jd: f64,
    moon_sidereal_lon: f64,
    query_jd: f64,
) -> Result<VimshottariSnapshot, VedicError> {
    let (birth_lord_idx, balance_days) = birth_balance(moon_sidereal_lon);
    let balance_end = birth_jd + balance_days;

    if query_jd < balance_end {
        let (lord, _) = VIMSHOTTARI_SEQUENCE[birth_lord_idx];
        let (next, _) = VIMSHOTTARI_SEQUENCE[(birth_lord_idx + 1) % 9];
        let progress = if balance_days > 0.0 {
            ((query_jd - birth_jd) / balance_days * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };
        return Ok(VimshottariSnapshot {
            mahadasha: lord,
            antardasha: lord,
            start_jd: birth_jd,
            end_jd: balance_end,
            next_antardasha: next,
            next_start_jd: balance_end,
            progress,
        });
    }

    // One full pass of the remaining 9 lords spans the whole 120-year
    // cycle past the balance, which bounds any in-cycle query.
    let mut md_idx = birth_lord_idx;
    let mut cursor = balance_end;
    let mut found: Option<(usize, f64, f64)> = None;
    for _ in 0..9 {
        md_idx = (md_idx + 1) % 9;
        let md_days = VIMSHOTTARI_SEQUENCE[md_idx].1 * DAYS_PER_YEAR;
        let md_end = cursor + md_days;
        if query_jd < md_end {
            found = Some((md_idx, cursor, md_end));
            break;
        }
        cursor = md_end;
    }
    let (md_idx, md_start, md_end) = found.ok_or(VedicError::DashaOverrun(
        "query beyond one full Vimshottari cycle from birth",
    ))?;
    let md_years = VIMSHOTTARI_SEQUENCE[md_idx].1;

    // Subdivide the mahadasha into 9 antardashas starting from its own
    // lord; the last sub-period end is snapped to the mahadasha end to
    // absorb floating-point drift.
    let mut ad_start = md_start;
    for i in 0..9 {
        let ad_idx = (md_idx + i) % 9;
        let ad_years = VIMSHOTTARI_SEQUENCE[ad_idx].1;
        let ad_days = md_years * ad_years / VIMSHOTTARI_TOTAL_YEARS * DAYS_PER_YEAR;
        let ad_end = if i == 8 { md_end } else { ad_start + ad_days };

        if query_jd < ad_end {
            let duration = ad_end - ad_start;
            let progress = if duration > 0.0 {
                ((query_jd - ad_start) / duration * 100.0).clamp(0.0, 100.0)
            } else {
                0.0
            };
            return Ok(VimshottariSnapshot {
                mahadasha: VIMSHOTTARI_SEQUENCE[md_idx].0,
                antardasha: VIMSHOTTARI_SEQUENCE[ad_idx].0,
                start_jd: ad_start,
                end_jd: ad_end,
                next_antardasha: VIMSHOTTARI_SEQUENCE[(ad_idx + 1) % 9].0,
                next_start_jd: ad_end,
                progress,
            });
        }
        ad_start = ad_end;
    }

    // query < md_end, and the snapped sub-periods tile [md_start, md_end).
    Err(VedicError::DashaOverrun(
        "antardasha subdivision failed to cover its mahadasha",
    ))
}
