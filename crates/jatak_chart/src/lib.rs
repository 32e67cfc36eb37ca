//! Chart orchestration: queries the ephemeris adapter and assembles a
//! complete sidereal birth chart.
//!
//! The pipeline runs in one synchronous pass: parse the birth instant,
//! query graha positions (Rahu/Ketu via the true-node solver), solve
//! the ascendant, assign whole-sign houses, annotate dignity and
//! nakshatra, locate the active Vimshottari periods, screen doshas and
//! attach transit-ingress predictions. The query instant is always an
//! explicit parameter; results are deterministic for identical inputs.
//!
//! Pure-math building blocks live in `jatak_vedic`; the adapter
//! contract in `jatak_eph`.

pub mod ascendant;
pub mod chart;
pub mod chart_types;
pub mod error;
pub mod input;
pub mod node;
pub mod positions;
pub mod transit;

pub use ascendant::{ascendant_sign, sidereal_ascendant};
pub use chart::compute_chart;
pub use chart_types::{Bio, Chart, PlanetPosition};
pub use error::ChartError;
pub use input::{BirthInput, Gender};
pub use node::{NodePair, true_node_sidereal};
pub use positions::{body_sidereal_longitude, graha_sidereal_longitudes, graha_to_body};
pub use transit::{
    TRANSIT_BODIES, TransitConfig, TransitEntry, transit_snapshot, transit_snapshot_with,
};
