use thiserror::Error;

#[derive(Error, Debug)]
pub enum HelioposError {
    #[error("eccentricity {0} is outside the closed-ellipse range [0, 1)")]
    InvalidEccentricity(f64),

    #[error("perihelion distance must be strictly positive, got {0}")]
    InvalidPerihelionDistance(f64),

    #[error("orbital element `{field}` is not finite: {value}")]
    NonFiniteElement { field: &'static str, value: f64 },

    #[error("Kepler solver did not converge after {iterations} iterations (last step {last_step:e} rad)")]
    KeplerNotConverged { iterations: usize, last_step: f64 },

    #[error("comet catalog record is missing required field `{0}`")]
    MissingCatalogField(&'static str),

    #[error("comet catalog field `{field}` holds a malformed number: {value:?}")]
    MalformedCatalogField {
        field: &'static str,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("invalid date string: {0}")]
    InvalidDate(String),
}

impl PartialEq for HelioposError {
    fn eq(&self, other: &Self) -> bool {
        use HelioposError::*;
        match (self, other) {
            (InvalidEccentricity(a), InvalidEccentricity(b)) => a == b,
            (InvalidPerihelionDistance(a), InvalidPerihelionDistance(b)) => a == b,
            (
                NonFiniteElement { field: f1, .. },
                NonFiniteElement { field: f2, .. },
            ) => f1 == f2,
            (
                KeplerNotConverged { iterations: i1, .. },
                KeplerNotConverged { iterations: i2, .. },
            ) => i1 == i2,
            (MissingCatalogField(a), MissingCatalogField(b)) => a == b,
            (
                MalformedCatalogField {
                    field: f1,
                    value: v1,
                    ..
                },
                MalformedCatalogField {
                    field: f2,
                    value: v2,
                    ..
                },
            ) => f1 == f2 && v1 == v2,
            (InvalidDate(a), InvalidDate(b)) => a == b,
            _ => false,
        }
    }
}
