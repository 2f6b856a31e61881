//! Adapter from the NASA near-Earth comet catalog record shape to the
//! canonical [`OrbitalElements`] set.
//!
//! The catalog (`data.nasa.gov`, dataset `b67r-rgxc`) parameterizes each comet
//! by perihelion distance and time of perihelion passage instead of a mean
//! anomaly, and serves every field as an optional string. All of that
//! heterogeneity is absorbed here, outside the numeric core: fetching and
//! JSON-decoding the catalog stay with the caller, and the core never sees a
//! record with missing or malformed fields.

use serde::Deserialize;

use crate::constants::{DAYS_PER_CENTURY, DAYS_PER_YEAR, DPI, RADEG, T2000};
use crate::elements::OrbitalElements;
use crate::heliopos_errors::HelioposError;
use crate::kepler::{check_eccentricity, principal_angle};

/// One row of the comet catalog, as served by the API.
///
/// Every field is an optional string; the dataset routinely omits fields for
/// poorly observed objects. [`CometRecord::to_elements`] decides which ones
/// are required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CometRecord {
    /// Object designation, e.g. `"P/2004 R1 (McNaught)"`
    pub object: Option<String>,
    /// Epoch of the osculating elements (MJD, TDB scale)
    pub epoch_tdb: Option<String>,
    /// Time of perihelion passage (Julian date, TDB scale)
    pub tp_tdb: Option<String>,
    /// Eccentricity
    pub e: Option<String>,
    /// Inclination (degrees)
    pub i_deg: Option<String>,
    /// Argument of perihelion (degrees)
    pub w_deg: Option<String>,
    /// Longitude of the ascending node (degrees)
    pub node_deg: Option<String>,
    /// Perihelion distance (AU)
    pub q_au_1: Option<String>,
    /// Aphelion distance (AU)
    pub q_au_2: Option<String>,
    /// Orbital period (years)
    pub p_yr: Option<String>,
    /// Minimum orbit intersection distance with Earth (AU)
    pub moid_au: Option<String>,
}

fn numeric_field(value: &Option<String>, field: &'static str) -> Result<f64, HelioposError> {
    let raw = value
        .as_deref()
        .ok_or(HelioposError::MissingCatalogField(field))?;
    raw.trim()
        .parse::<f64>()
        .map_err(|source| HelioposError::MalformedCatalogField {
            field,
            value: raw.to_string(),
            source,
        })
}

impl CometRecord {
    /// Object designation, or a placeholder when the catalog omits it.
    pub fn name(&self) -> &str {
        self.object.as_deref().unwrap_or("unnamed comet")
    }

    /// Map the perihelion parameterization onto the canonical mean-anomaly
    /// element set.
    ///
    /// The required fields are `q_au_1`, `e`, `i_deg`, `w_deg`, `node_deg`
    /// and `tp_tdb`; a record lacking any of them is rejected rather than
    /// patched with defaults, so callers can filter invalid rows explicitly.
    /// Hyperbolic and parabolic records (`e ≥ 1`) are rejected as well since
    /// the closed-ellipse solver does not cover them.
    ///
    /// Mapping:
    /// * `a = q / (1 - e)`
    /// * mean motion `n = 2π / (365.25 · a^{3/2})` rad/day (Kepler's third law
    ///   in solar units)
    /// * mean anomaly at J2000 `M₀ = n · (T2000 - T_p)`
    /// * the epoch mean longitude is then chosen so that the engine's fixed
    ///   one-turn-per-century advance reproduces `M₀` at `t = T2000`
    pub fn to_elements(&self) -> Result<OrbitalElements, HelioposError> {
        let perihelion_distance = numeric_field(&self.q_au_1, "q_au_1")?;
        let eccentricity = numeric_field(&self.e, "e")?;
        let inclination = numeric_field(&self.i_deg, "i_deg")?;
        let perihelion_argument = numeric_field(&self.w_deg, "w_deg")?;
        let node_longitude = numeric_field(&self.node_deg, "node_deg")?;
        let perihelion_passage = numeric_field(&self.tp_tdb, "tp_tdb")?;

        check_eccentricity(eccentricity)?;
        if !perihelion_distance.is_finite() || perihelion_distance <= 0.0 {
            return Err(HelioposError::InvalidPerihelionDistance(perihelion_distance));
        }

        let semi_major_axis = perihelion_distance / (1.0 - eccentricity);
        let period_days = DAYS_PER_YEAR * semi_major_axis.powf(1.5);
        let mean_motion = DPI / period_days;
        let mean_anomaly_j2000 = principal_angle(mean_motion * (T2000 - perihelion_passage));

        // The engine advances L by 2π per Julian century of raw Julian date;
        // subtract that built-in advance at T2000 so mean_anomaly_at(T2000)
        // lands on M₀.
        let epoch_advance = DPI * (T2000 / DAYS_PER_CENTURY);
        let mean_longitude =
            principal_angle(mean_anomaly_j2000 + perihelion_argument * RADEG - epoch_advance);

        OrbitalElements::new(
            semi_major_axis,
            eccentricity,
            inclination * RADEG,
            node_longitude * RADEG,
            perihelion_argument * RADEG,
            mean_longitude,
        )
    }
}
