use crate::constants::{Radian, DPI, KEPLER_MAX_ITER};
use crate::heliopos_errors::HelioposError;

/// Returns the principal value of an angle in radians, in [0, 2π).
pub fn principal_angle(a: f64) -> f64 {
    a.rem_euclid(DPI)
}

/// Reject an eccentricity outside the closed-ellipse domain of the solver.
///
/// The Newton iteration of [`solve_kepler`] is only valid for bound elliptical
/// orbits: `e` must be finite and in `[0, 1)`. Parabolic and hyperbolic values
/// make the iteration diverge and are refused up front.
pub(crate) fn check_eccentricity(e: f64) -> Result<(), HelioposError> {
    if !e.is_finite() {
        return Err(HelioposError::NonFiniteElement {
            field: "eccentricity",
            value: e,
        });
    }
    if !(0.0..1.0).contains(&e) {
        return Err(HelioposError::InvalidEccentricity(e));
    }
    Ok(())
}

/// Solve Kepler's equation `M = E - e·sin(E)` for the eccentric anomaly `E`.
///
/// Newton–Raphson iteration seeded at `E₀ = M`, with each step computing
/// `ΔE = (M - (E - e·sin E)) / (1 - e·cos E)`. The mean anomaly is reduced
/// into `[0, 2π)` before iterating. A circular orbit (`e = 0`) converges on
/// the first step with `E = M` exactly.
///
/// Arguments
/// ---------
/// * `mean_anomaly`: mean anomaly `M` in radians
/// * `eccentricity`: orbital eccentricity, finite and in `[0, 1)`
/// * `tolerance`: convergence threshold on `|ΔE|`, in radians
///   (see [`KEPLER_TOLERANCE`](crate::constants::KEPLER_TOLERANCE) for the crate default)
///
/// Return
/// ------
/// * `Ok(E)` such that `|M - (E - e·sin E)| < tolerance` to first order
/// * `Err(HelioposError::InvalidEccentricity)` or `Err(HelioposError::NonFiniteElement)`
///   when the inputs are rejected before iterating
/// * `Err(HelioposError::KeplerNotConverged)` when the iteration cap
///   ([`KEPLER_MAX_ITER`]) is hit, e.g. for near-parabolic inputs
pub fn solve_kepler(
    mean_anomaly: Radian,
    eccentricity: f64,
    tolerance: f64,
) -> Result<Radian, HelioposError> {
    check_eccentricity(eccentricity)?;
    if !mean_anomaly.is_finite() {
        return Err(HelioposError::NonFiniteElement {
            field: "mean_anomaly",
            value: mean_anomaly,
        });
    }

    let m = principal_angle(mean_anomaly);
    let mut ecc_anomaly = m;
    let mut delta = f64::INFINITY;

    for _ in 0..KEPLER_MAX_ITER {
        delta = (m - (ecc_anomaly - eccentricity * ecc_anomaly.sin()))
            / (1.0 - eccentricity * ecc_anomaly.cos());
        ecc_anomaly += delta;
        if delta.abs() <= tolerance {
            return Ok(ecc_anomaly);
        }
    }

    Err(HelioposError::KeplerNotConverged {
        iterations: KEPLER_MAX_ITER,
        last_step: delta.abs(),
    })
}
