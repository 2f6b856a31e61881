//! Static J2000 orbital elements and fact-sheet data for the major planets.
//!
//! Element values follow the JPL approximate-element table for the J2000
//! epoch, in the degree-based convention of [`OrbitalElements::from_degrees`]
//! (`periapsis_longitude` is the longitude of perihelion ϖ). Each renderable
//! body owns its element set directly; nothing is looked up by name at frame
//! time.

use serde::{Deserialize, Serialize};

use crate::constants::RADEG;
use crate::elements::OrbitalElements;

/// A major planet of the solar system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Planet {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Planet {
    /// All planets in increasing distance from the Sun.
    pub const ALL: [Planet; 8] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Earth,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Earth => "Earth",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
            Planet::Uranus => "Uranus",
            Planet::Neptune => "Neptune",
        }
    }

    /// Keplerian elements at the J2000 epoch.
    ///
    /// Table rows are `(a [AU], e, I [deg], L [deg], ϖ [deg], Ω [deg])`. The
    /// values are fixed and known-valid, so the record is built directly
    /// without going through the validating constructor.
    pub fn elements(&self) -> OrbitalElements {
        let (a, e, incl, mean_lon, peri_lon, node_lon) = match self {
            Planet::Mercury => (0.38710, 0.20563, 7.00487, 252.25084, 77.45645, 48.33167),
            Planet::Venus => (0.72333, 0.00677, 3.39471, 181.97973, 131.53298, 76.68069),
            Planet::Earth => (1.00000, 0.01671, 0.00005, 100.46435, 102.94719, -11.26064),
            Planet::Mars => (1.52366, 0.09341, 1.85061, 355.45332, 336.04084, 49.57854),
            Planet::Jupiter => (5.20336, 0.04839, 1.30530, 34.40438, 14.75385, 100.55615),
            Planet::Saturn => (9.53707, 0.05415, 2.48446, 49.94432, 92.43194, 113.71504),
            Planet::Uranus => (19.19126, 0.04717, 0.76986, 313.23218, 170.96424, 74.22988),
            Planet::Neptune => (30.06896, 0.00859, 1.76917, 304.88003, 44.97135, 131.72169),
        };

        OrbitalElements {
            semi_major_axis: a,
            eccentricity: e,
            inclination: incl * RADEG,
            ascending_node_longitude: node_lon * RADEG,
            periapsis_longitude: peri_lon * RADEG,
            mean_longitude: mean_lon * RADEG,
        }
    }

    /// Equatorial diameter in kilometers (NASA fact sheet).
    pub fn diameter_km(&self) -> f64 {
        match self {
            Planet::Mercury => 4_879.0,
            Planet::Venus => 12_104.0,
            Planet::Earth => 12_756.0,
            Planet::Mars => 6_792.0,
            Planet::Jupiter => 142_984.0,
            Planet::Saturn => 120_536.0,
            Planet::Uranus => 51_118.0,
            Planet::Neptune => 49_528.0,
        }
    }

    /// Mean distance from the Sun in millions of kilometers (NASA fact sheet).
    pub fn mean_distance_gm(&self) -> f64 {
        match self {
            Planet::Mercury => 57.9,
            Planet::Venus => 108.2,
            Planet::Earth => 149.6,
            Planet::Mars => 227.9,
            Planet::Jupiter => 778.6,
            Planet::Saturn => 1_433.5,
            Planet::Uranus => 2_872.5,
            Planet::Neptune => 4_495.1,
        }
    }
}
