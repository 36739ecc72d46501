//! Error types for the toolbox
//!
//! Two failure families exist: bad static parameters, and an ephemeris
//! provider that could not produce a reading. Neither is retried.

use thiserror::Error;

/// Invalid static parameters handed to one of the calculators
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a positive, finite number of Hz (got {value})")]
    NonPositiveRate { name: &'static str, value: f64 },

    #[error("baseline must be a positive, finite length in metres (got {0})")]
    NonPositiveBaseline(f64),

    #[error("FFT size must be a positive even number of bins (got {0})")]
    InvalidFftSize(usize),

    #[error("declination must lie in [-90, 90] degrees (got {0})")]
    DeclinationOutOfRange(f64),

    #[error("declination {0}° puts the source at a celestial pole; the fringe period is unbounded")]
    DegenerateDeclination(f64),

    #[error("filter alpha must lie in (0, 1] (got {0})")]
    InvalidAlpha(f64),

    #[error("{name} must be finite (got {value})")]
    NonFinite { name: &'static str, value: f64 },
}

/// Failures reported by (or while talking to) an ephemeris provider
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EphemerisError {
    #[error("Failed to read the current time: {0}")]
    Clock(String),

    #[error("Ephemeris returned a malformed sidereal time: {0:?}")]
    MalformedSiderealTime(String),
}

/// Crate-wide error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    #[error(transparent)]
    ExternalProvider(#[from] EphemerisError),
}

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    ExternalProvider,
}

impl ErrorKind {
    /// Process exit code for a command-line wrapper.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorKind::Configuration => 2,
            ErrorKind::ExternalProvider => 3,
        }
    }
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Configuration(_) => ErrorKind::Configuration,
            Error::ExternalProvider(_) => ErrorKind::ExternalProvider,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Reject non-positive or non-finite rates.
pub(crate) fn check_rate(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::NonPositiveRate { name, value })
    }
}

pub(crate) fn check_finite(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NonFinite { name, value })
    }
}
