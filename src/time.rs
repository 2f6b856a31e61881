use hifitime::Epoch;
use std::str::FromStr;

use crate::constants::{JulianDate, DAYS_PER_CENTURY, JDTOMJD, MJD, T2000};
use crate::heliopos_errors::HelioposError;

/// Transformation from a date in the format YYYY-MM-ddTHH:mm:ss to a Julian date (JD)
///
/// Argument
/// --------
/// * `date`: a date string in the format YYYY-MM-ddTHH:mm:ss
///
/// Return
/// ------
/// * the corresponding Julian date, suitable as the simulation clock value
///   consumed by [`OrbitalElements::position_at`](crate::OrbitalElements::position_at)
pub fn date_to_jd(date: &str) -> Result<JulianDate, HelioposError> {
    let epoch =
        Epoch::from_str(date).map_err(|err| HelioposError::InvalidDate(err.to_string()))?;
    Ok(epoch.to_jde_utc_days())
}

/// Transformation from julian date (JD) to modified julian date (MJD)
pub fn jd_to_mjd(jd: JulianDate) -> MJD {
    jd - JDTOMJD
}

/// Transformation from modified julian date (MJD) to julian date (JD)
pub fn mjd_to_jd(mjd: MJD) -> JulianDate {
    mjd + JDTOMJD
}

/// Number of Julian centuries elapsed between the J2000 epoch and `jd`
pub fn centuries_since_j2000(jd: JulianDate) -> f64 {
    (jd - T2000) / DAYS_PER_CENTURY
}

#[cfg(test)]
mod time_test {
    use super::*;

    #[test]
    fn test_date_to_jd() {
        let jd = date_to_jd("2000-01-01T12:00:00").unwrap();
        assert!((jd - T2000).abs() < 1e-6, "J2000 noon, got {jd}");

        let jd = date_to_jd("2024-10-05T00:00:00").unwrap();
        assert!((jd - 2_460_588.5).abs() < 1e-6, "got {jd}");
    }

    #[test]
    fn test_date_to_jd_rejects_garbage() {
        assert!(matches!(
            date_to_jd("not a date"),
            Err(HelioposError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_jd_mjd_roundtrip() {
        assert_eq!(jd_to_mjd(T2000), 51_544.5);
        assert_eq!(mjd_to_jd(51_544.5), T2000);
        assert_eq!(mjd_to_jd(jd_to_mjd(2_460_588.5)), 2_460_588.5);
    }

    #[test]
    fn test_centuries_since_j2000() {
        assert_eq!(centuries_since_j2000(T2000), 0.0);
        assert_eq!(centuries_since_j2000(T2000 + DAYS_PER_CENTURY), 1.0);
        assert_eq!(centuries_since_j2000(T2000 - 36_525.0 / 2.0), -0.5);
    }
}
