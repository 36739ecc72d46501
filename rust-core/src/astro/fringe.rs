//! Interferometer fringe period
//!
//! For an east-west baseline the fringe spacing on the sky is λ/B radians.
//! A source on the celestial equator drifts 1° every 240 s; away from the
//! equator it drifts slower by cos(δ).

use crate::error::{check_finite, check_rate, ConfigError};

/// Speed of light used for the wavelength, in m/s
pub const SPEED_OF_LIGHT: f64 = 299_792_000.0;

/// Sidereal drift time per degree of hour angle on the celestial equator
pub const SECONDS_PER_DEGREE: f64 = 4.0 * 60.0;

/// Below this |cos δ| the source is treated as sitting on a pole
const COS_DECLINATION_FLOOR: f64 = 1e-12;

/// Fringe period of a two-element interferometer
///
/// # Arguments
/// * `frequency` - Observing frequency in Hz
/// * `baseline` - Baseline length in metres
/// * `declination` - Source declination in degrees
/// * `latitude` - Observer latitude in degrees. Accepted but not used.
///
/// # Returns
/// Fringe period in seconds
///
/// # Errors
/// [`ConfigError`] for non-positive frequency or baseline, for declinations
/// outside [-90°, 90°], and for declinations at (or numerically at) ±90°.
pub fn fringe_period(
    frequency: f64,
    baseline: f64,
    declination: f64,
    _latitude: f64,
) -> Result<f64, ConfigError> {
    let frequency = check_rate("frequency", frequency)?;
    if !(baseline.is_finite() && baseline > 0.0) {
        return Err(ConfigError::NonPositiveBaseline(baseline));
    }
    let declination = check_finite("declination", declination)?;
    if declination.abs() > 90.0 {
        return Err(ConfigError::DeclinationOutOfRange(declination));
    }

    let cos_dec = declination.to_radians().cos();
    if cos_dec.abs() < COS_DECLINATION_FLOOR {
        return Err(ConfigError::DegenerateDeclination(declination));
    }

    let wavelength = SPEED_OF_LIGHT / frequency;

    // Fringe spacing in degrees, then seconds of drift at the equator
    let spacing_deg = wavelength.to_degrees() / baseline;
    let period = spacing_deg * SECONDS_PER_DEGREE / cos_dec;

    Ok(period)
}
