//! # Constants and type definitions for heliopos
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **common type
//! definitions** used throughout the `heliopos` library.
//!
//! ## Overview
//!
//! - Reference epoch and time-scale factors (Julian days, Julian centuries)
//! - Unit conversions (degrees ↔ radians)
//! - Solver and sampler defaults
//! - Core type aliases used across the crate
//!
//! These definitions are shared by the Kepler solver, the element records, the planet table
//! and the comet catalog adapter.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Julian date of the J2000.0 reference epoch (2000-01-01 12:00:00 TT)
pub const T2000: f64 = 2_451_545.0;

/// Conversion factor between Julian Date and Modified Julian Date
pub const JDTOMJD: f64 = 2_400_000.5;

/// Number of days in a Julian century
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Number of days in a Julian year
pub const DAYS_PER_YEAR: f64 = 365.25;

// -------------------------------------------------------------------------------------------------
// Solver and sampler defaults
// -------------------------------------------------------------------------------------------------

/// Default convergence tolerance of the Kepler solver, in radians
pub const KEPLER_TOLERANCE: f64 = 1e-6;

/// Hard cap on Newton iterations of the Kepler solver
pub const KEPLER_MAX_ITER: usize = 100;

/// Default number of samples of a closed orbit polyline (1° increments, endpoints coinciding)
pub const ORBIT_PATH_STEPS: usize = 361;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in astronomical units
pub type AstronomicalUnit = f64;
/// Julian Date (days)
pub type JulianDate = f64;
/// Modified Julian Date (days)
pub type MJD = f64;
