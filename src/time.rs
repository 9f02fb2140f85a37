//! Epoch utilities: conversions between wall-clock time and the Julian Date
//! scale consumed by the orbit geometry engine.

use hifitime::Epoch;
use std::str::FromStr;

use crate::constants::{JulianDate, DAYS_PER_CENTURY, J2000_JD, MILLIS_PER_DAY, UNIX_EPOCH_JD};
use crate::orrery_errors::OrreryError;

/// Julian Date for a Unix timestamp in milliseconds.
///
/// Arguments
/// ---------
/// * `unix_millis`: milliseconds since 1970-01-01 00:00:00 UTC.
///
/// Return
/// ------
/// * The corresponding Julian Date.
pub fn unix_millis_to_jd(unix_millis: f64) -> JulianDate {
    unix_millis / MILLIS_PER_DAY + UNIX_EPOCH_JD
}

/// Inverse of [`unix_millis_to_jd`].
pub fn jd_to_unix_millis(jd: JulianDate) -> f64 {
    (jd - UNIX_EPOCH_JD) * MILLIS_PER_DAY
}

/// Julian Date for a calendar date in the format `YYYY-MM-ddTHH:mm:ss` (UTC).
///
/// Arguments
/// ---------
/// * `date`: the date string, e.g. `"2021-01-01T00:00:00"`.
///
/// Return
/// ------
/// * The corresponding Julian Date, or [`OrreryError::InvalidDateFormat`] if
///   the string does not parse.
pub fn date_to_jd(date: &str) -> Result<JulianDate, OrreryError> {
    Epoch::from_str(date)
        .map(|epoch| epoch.to_jde_utc_days())
        .map_err(|e| OrreryError::InvalidDateFormat(format!("{date}: {e}")))
}

/// Number of Julian centuries elapsed between the J2000 epoch and `jd`.
/// Negative before J2000. This is the time variable of the linear element
/// drift in [`crate::orbital_elements::OrbitalElements::propagate`].
pub fn centuries_since_j2000(jd: JulianDate) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}
