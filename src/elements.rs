use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::constants::{
    AstronomicalUnit, Degree, JulianDate, Radian, DAYS_PER_CENTURY, DPI, KEPLER_TOLERANCE,
    ORBIT_PATH_STEPS, RADEG,
};
use crate::heliopos_errors::HelioposError;
use crate::kepler::{check_eccentricity, principal_angle, solve_kepler};

/// Keplerian orbital elements of a heliocentric body.
///
/// Units:
/// * `semi_major_axis`: AU (Astronomical Units)
/// * `eccentricity`: unitless, in `[0, 1)`
/// * `inclination`: radians
/// * `ascending_node_longitude`: radians
/// * `periapsis_longitude`: radians (longitude of periapsis ϖ, the table
///   convention of planetary element sets; it is also the in-plane rotation
///   angle of the ecliptic transform)
/// * `mean_longitude`: radians (mean longitude `L` at the reference epoch)
///
/// An element set is immutable for the lifetime of a body: the simulation
/// clock is *not* stored here but passed explicitly to [`position_at`], so
/// every operation on this type is pure and deterministic.
///
/// [`position_at`]: OrbitalElements::position_at
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    pub semi_major_axis: AstronomicalUnit,
    pub eccentricity: f64,
    pub inclination: Radian,
    pub ascending_node_longitude: Radian,
    pub periapsis_longitude: Radian,
    pub mean_longitude: Radian,
}

impl OrbitalElements {
    /// Build an element set from angles already expressed in radians.
    ///
    /// All values must be finite and the eccentricity must describe a closed
    /// ellipse (`0 ≤ e < 1`); anything else is rejected here rather than
    /// surfacing later as a solver failure.
    pub fn new(
        semi_major_axis: AstronomicalUnit,
        eccentricity: f64,
        inclination: Radian,
        ascending_node_longitude: Radian,
        periapsis_longitude: Radian,
        mean_longitude: Radian,
    ) -> Result<Self, HelioposError> {
        let elements = Self {
            semi_major_axis,
            eccentricity,
            inclination,
            ascending_node_longitude,
            periapsis_longitude,
            mean_longitude,
        };
        elements.validate()?;
        Ok(elements)
    }

    /// Build an element set from the degree-based convention of planetary
    /// tables and catalogs.
    ///
    /// The degree → radian conversion happens exactly once, here at the
    /// boundary; the rest of the crate works in radians only, so callers
    /// cannot double-convert.
    pub fn from_degrees(
        semi_major_axis: AstronomicalUnit,
        eccentricity: f64,
        inclination: Degree,
        ascending_node_longitude: Degree,
        periapsis_longitude: Degree,
        mean_longitude: Degree,
    ) -> Result<Self, HelioposError> {
        Self::new(
            semi_major_axis,
            eccentricity,
            inclination * RADEG,
            ascending_node_longitude * RADEG,
            periapsis_longitude * RADEG,
            mean_longitude * RADEG,
        )
    }

    fn validate(&self) -> Result<(), HelioposError> {
        for (field, value) in [
            ("semi_major_axis", self.semi_major_axis),
            ("inclination", self.inclination),
            ("ascending_node_longitude", self.ascending_node_longitude),
            ("periapsis_longitude", self.periapsis_longitude),
            ("mean_longitude", self.mean_longitude),
        ] {
            if !value.is_finite() {
                return Err(HelioposError::NonFiniteElement { field, value });
            }
        }
        check_eccentricity(self.eccentricity)
    }

    /// Mean anomaly at Julian date `t`, reduced into `[0, 2π)`.
    ///
    /// The epoch mean longitude is advanced by one full turn per Julian
    /// century of raw Julian date (`M = (L - ϖ) + 2π·(t / 36525)`), the
    /// radian form of the degree-domain `normalize360((L - ϖ) + 360·t/36525)`.
    /// The position is recomputed in closed form from this value each call;
    /// nothing is integrated incrementally.
    pub fn mean_anomaly_at(&self, t: JulianDate) -> Radian {
        principal_angle(
            (self.mean_longitude - self.periapsis_longitude) + DPI * (t / DAYS_PER_CENTURY),
        )
    }

    /// Heliocentric ecliptic position at Julian date `t`, in AU.
    ///
    /// Any display scaling is the caller's concern; the returned vector lives
    /// in the same distance units as the semi-major axis.
    pub fn position_at(&self, t: JulianDate) -> Result<Vector3<f64>, HelioposError> {
        self.position_from_mean_anomaly(self.mean_anomaly_at(t))
    }

    /// Closed polyline tracing the full orbit, with the default sampling of
    /// [`ORBIT_PATH_STEPS`] points (1° mean-anomaly increments).
    ///
    /// The path depends only on the element set, never on the simulation
    /// clock, so it needs recomputing only when the elements change. The
    /// first and last points coincide.
    pub fn orbit_path(&self) -> Result<Vec<Vector3<f64>>, HelioposError> {
        self.orbit_path_with(ORBIT_PATH_STEPS)
    }

    /// Closed polyline tracing the full orbit with a caller-chosen sample
    /// count.
    ///
    /// The mean anomaly is swept directly from the epoch mean longitude
    /// through one full revolution in `steps` samples; `steps` below 2 cannot
    /// close a loop and is clamped to 2.
    pub fn orbit_path_with(&self, steps: usize) -> Result<Vec<Vector3<f64>>, HelioposError> {
        let steps = steps.max(2);
        let sweep = DPI / (steps - 1) as f64;
        (0..steps)
            .map(|i| {
                self.position_from_mean_anomaly(principal_angle(
                    self.mean_longitude + sweep * i as f64,
                ))
            })
            .collect()
    }

    /// Shared solve-and-rotate step of [`position_at`] and [`orbit_path`]:
    /// eccentric anomaly, orbital-plane coordinates, rigid rotation into the
    /// ecliptic frame.
    ///
    /// [`position_at`]: OrbitalElements::position_at
    /// [`orbit_path`]: OrbitalElements::orbit_path
    fn position_from_mean_anomaly(
        &self,
        mean_anomaly: Radian,
    ) -> Result<Vector3<f64>, HelioposError> {
        let ecc_anomaly = solve_kepler(mean_anomaly, self.eccentricity, KEPLER_TOLERANCE)?;

        // At E = 0 the body sits at periapsis: (a(1-e), 0).
        let x_orb = self.semi_major_axis * (ecc_anomaly.cos() - self.eccentricity);
        let y_orb = self.semi_major_axis
            * (1.0 - self.eccentricity.powi(2)).sqrt()
            * ecc_anomaly.sin();

        Ok(self.orbital_to_ecliptic() * Vector3::new(x_orb, y_orb, 0.0))
    }

    /// Rotation from the orbital plane into the heliocentric ecliptic frame:
    /// in-plane periapsis rotation, inclination tilt, then node rotation
    /// about the ecliptic pole, composed in closed form.
    fn orbital_to_ecliptic(&self) -> Matrix3<f64> {
        let (sin_node, cos_node) = self.ascending_node_longitude.sin_cos();
        let (sin_incl, cos_incl) = self.inclination.sin_cos();
        let (sin_peri, cos_peri) = self.periapsis_longitude.sin_cos();

        Matrix3::new(
            cos_node * cos_peri - sin_node * sin_peri * cos_incl,
            -cos_node * sin_peri - sin_node * cos_peri * cos_incl,
            sin_node * sin_incl,
            sin_node * cos_peri + cos_node * sin_peri * cos_incl,
            -sin_node * sin_peri + cos_node * cos_peri * cos_incl,
            -cos_node * sin_incl,
            sin_peri * sin_incl,
            cos_peri * sin_incl,
            cos_incl,
        )
    }
}

#[cfg(test)]
mod elements_test {
    use super::*;
    use crate::constants::T2000;
    use approx::assert_abs_diff_eq;

    fn tilted_elements() -> OrbitalElements {
        OrbitalElements::from_degrees(1.5, 0.3, 17.0, 45.0, 30.0, 30.0).unwrap()
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            OrbitalElements::new(1.0, 1.2, 0.0, 0.0, 0.0, 0.0),
            Err(HelioposError::InvalidEccentricity(1.2))
        );
        assert!(matches!(
            OrbitalElements::new(f64::NAN, 0.1, 0.0, 0.0, 0.0, 0.0),
            Err(HelioposError::NonFiniteElement {
                field: "semi_major_axis",
                ..
            })
        ));
        assert!(matches!(
            OrbitalElements::from_degrees(1.0, 0.1, f64::INFINITY, 0.0, 0.0, 0.0),
            Err(HelioposError::NonFiniteElement {
                field: "inclination",
                ..
            })
        ));
    }

    #[test]
    fn test_from_degrees_matches_radians() {
        let deg = OrbitalElements::from_degrees(0.387, 0.205, 7.0, 48.33, 77.45, 252.25).unwrap();
        let rad = OrbitalElements::new(
            0.387,
            0.205,
            7.0 * RADEG,
            48.33 * RADEG,
            77.45 * RADEG,
            252.25 * RADEG,
        )
        .unwrap();
        assert_eq!(deg, rad);
    }

    #[test]
    fn test_mean_anomaly_matches_degree_pipeline() {
        // The radian computation must agree with the reference degree-domain
        // formula normalize360((L - ϖ) + 360·T/36525) converted once.
        let elements = tilted_elements();
        let t = 2_460_000.25;

        let m_deg = (30.0 - 30.0 + 360.0 * (t / DAYS_PER_CENTURY)).rem_euclid(360.0);
        assert_abs_diff_eq!(
            elements.mean_anomaly_at(t),
            m_deg * RADEG,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_periapsis_placement() {
        // L = ϖ at t = 0 gives M = 0, hence E = 0 and an orbital-plane point
        // (a(1-e), 0) whose norm survives the rotation.
        let elements = tilted_elements();
        assert_eq!(elements.mean_anomaly_at(0.0), 0.0);

        let position = elements.position_at(0.0).unwrap();
        let periapsis_distance = 1.5 * (1.0 - 0.3);
        assert_abs_diff_eq!(position.norm(), periapsis_distance, epsilon = 1e-12);
    }

    #[test]
    fn test_rotation_is_rigid() {
        // |r| in the orbital plane equals |r| in the ecliptic frame for any
        // (I, ω, Ω) triple.
        for (incl, peri, node) in [
            (0.0, 0.0, 0.0),
            (7.0, 77.45, 48.33),
            (162.3, 111.33, 58.42),
            (89.9, 359.9, 0.1),
        ] {
            let elements =
                OrbitalElements::from_degrees(2.77, 0.08, incl, node, peri, 153.9).unwrap();
            let t = T2000 + 1234.5;

            let ecc_anomaly = solve_kepler(
                elements.mean_anomaly_at(t),
                elements.eccentricity,
                KEPLER_TOLERANCE,
            )
            .unwrap();
            let x_orb = elements.semi_major_axis * (ecc_anomaly.cos() - elements.eccentricity);
            let y_orb = elements.semi_major_axis
                * (1.0 - elements.eccentricity.powi(2)).sqrt()
                * ecc_anomaly.sin();
            let plane_radius = (x_orb * x_orb + y_orb * y_orb).sqrt();

            let position = elements.position_at(t).unwrap();
            assert_abs_diff_eq!(position.norm(), plane_radius, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_radius_matches_conic_equation() {
        // Spec scenario: zero inclination/rotation Mercury-like orbit at J2000
        // must satisfy r = a(1 - e·cos E).
        let elements = OrbitalElements::from_degrees(0.387, 0.205, 0.0, 0.0, 0.0, 252.25).unwrap();
        let position = elements.position_at(T2000).unwrap();

        let ecc_anomaly = solve_kepler(
            elements.mean_anomaly_at(T2000),
            elements.eccentricity,
            KEPLER_TOLERANCE,
        )
        .unwrap();
        let expected = 0.387 * (1.0 - 0.205 * ecc_anomaly.cos());
        assert_abs_diff_eq!(position.norm(), expected, epsilon = 1e-9);

        // Zero inclination keeps the body in the ecliptic plane.
        assert_eq!(position.z, 0.0);
    }

    #[test]
    fn test_position_is_deterministic() {
        let elements = tilted_elements();
        let t = T2000 + 4321.0;
        let first = elements.position_at(t).unwrap();
        let second = elements.position_at(t).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_orbit_path_is_closed() {
        let elements = tilted_elements();
        let path = elements.orbit_path().unwrap();

        assert_eq!(path.len(), ORBIT_PATH_STEPS);
        let first = path.first().unwrap();
        let last = path.last().unwrap();
        assert_abs_diff_eq!((first - last).norm(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_orbit_path_stays_on_ellipse() {
        let elements = tilted_elements();
        let (a, e) = (elements.semi_major_axis, elements.eccentricity);
        for point in elements.orbit_path().unwrap() {
            let r = point.norm();
            assert!(r >= a * (1.0 - e) - 1e-9, "r = {r} below periapsis");
            assert!(r <= a * (1.0 + e) + 1e-9, "r = {r} above apoapsis");
        }
    }

    #[test]
    fn test_orbit_path_step_clamp() {
        let elements = tilted_elements();
        assert_eq!(elements.orbit_path_with(0).unwrap().len(), 2);
        assert_eq!(elements.orbit_path_with(73).unwrap().len(), 73);
    }
}
