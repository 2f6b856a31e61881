//! # heliopos
//!
//! Heliocentric orbital position engine: converts classical Keplerian orbital
//! elements into time-varying 3D positions in the heliocentric ecliptic
//! frame, for placing and animating solar-system bodies.
//!
//! The crate is a pure, synchronous computation layer. It owns no clock, no
//! I/O and no rendering state: an external animation driver passes the
//! simulation time into every call, and consumes the returned positions.
//!
//! - [`OrbitalElements`]: canonical element record, with
//!   [`position_at`](OrbitalElements::position_at) for a single epoch and
//!   [`orbit_path`](OrbitalElements::orbit_path) for a closed full-orbit
//!   polyline.
//! - [`kepler`]: bounded Newton–Raphson solver for Kepler's equation.
//! - [`planets`]: static J2000 element table for the eight major planets.
//! - [`catalog`]: adapter mapping the NASA comet-catalog record shape
//!   (perihelion parameterization) onto [`OrbitalElements`].
//! - [`time`]: calendar ⇄ Julian-date helpers for callers driving the clock.

pub mod catalog;
pub mod constants;
mod elements;
pub mod heliopos_errors;
pub mod kepler;
pub mod planets;
pub mod time;

pub use elements::OrbitalElements;
pub use heliopos_errors::HelioposError;
