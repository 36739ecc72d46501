//! Ephemeris provider abstraction
//!
//! The sidereal-time formatter only needs three things from an ephemeris: the
//! current time, the julian date for an observer, and the observer's local
//! sidereal time as an `H:MM:SS.ss` string. Anything implementing
//! [`EphemerisProvider`] can stand in, which keeps the wall clock out of
//! tests.

use crate::error::{check_finite, ConfigError, EphemerisError};
use hifitime::{Duration, Epoch};
use marlu::precession::get_lmst;
use std::f64::consts::TAU;
use std::fmt;

/// Observer longitude in whole degrees and minutes, rendered `DD:MM:00`
///
/// East is positive. Arc-minutes are truncated, not rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SexagesimalLongitude {
    negative: bool,
    degrees: u32,
    minutes: u32,
}

impl SexagesimalLongitude {
    pub fn from_degrees(longitude: f64) -> Result<Self, ConfigError> {
        let longitude = check_finite("longitude", longitude)?;
        let magnitude = longitude.abs();
        let degrees = magnitude.trunc();
        let minutes = ((magnitude - degrees) * 60.0).trunc();

        Ok(Self {
            // -0.5° keeps its sign even though the degree field reads 00
            negative: longitude < 0.0 && (degrees > 0.0 || minutes > 0.0),
            degrees: degrees as u32,
            minutes: minutes as u32,
        })
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn degrees(&self) -> u32 {
        self.degrees
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Signed decimal degrees after truncation to whole arc-minutes
    pub fn to_degrees(&self) -> f64 {
        let magnitude = self.degrees as f64 + self.minutes as f64 / 60.0;
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }
}

impl fmt::Display for SexagesimalLongitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        write!(f, "{sign}{:02}:{:02}:00", self.degrees, self.minutes)
    }
}

/// Where and when the sky is observed from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    pub longitude: SexagesimalLongitude,
    pub date: Epoch,
}

/// Source of time and sidereal-time readings
pub trait EphemerisProvider {
    /// Current date and time
    fn now(&self) -> Result<Epoch, EphemerisError>;

    /// Julian date of the observer's epoch
    fn julian_date(&self, observer: &Observer) -> f64;

    /// Local sidereal time at the observer, formatted `H:MM:SS.ss`
    fn sidereal_time(&self, observer: &Observer) -> Result<String, EphemerisError>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Clock {
    System,
    Fixed(Epoch),
}

/// Ephemeris backed by `hifitime` timestamps and `marlu` precession
///
/// Local mean sidereal time comes from [`get_lmst`], with UT1 = UTC + `dut1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarluEphemeris {
    clock: Clock,
    dut1: Duration,
}

impl MarluEphemeris {
    /// Read the system clock on every call to [`EphemerisProvider::now`]
    pub fn system() -> Self {
        Self {
            clock: Clock::System,
            dut1: Duration::from_seconds(0.0),
        }
    }

    /// Always report `epoch` as the current time
    pub fn fixed(epoch: Epoch) -> Self {
        Self {
            clock: Clock::Fixed(epoch),
            dut1: Duration::from_seconds(0.0),
        }
    }

    /// Use `dut1` (UT1 - UTC) when computing sidereal time
    pub fn with_dut1(self, dut1: Duration) -> Self {
        Self { dut1, ..self }
    }

    pub fn dut1(&self) -> Duration {
        self.dut1
    }

    /// Local mean sidereal time at the observer in radians, [0, 2π)
    pub fn lmst_radians(&self, observer: &Observer) -> f64 {
        get_lmst(
            observer.longitude.to_degrees().to_radians(),
            observer.date,
            self.dut1,
        )
        .rem_euclid(TAU)
    }
}

impl Default for MarluEphemeris {
    fn default() -> Self {
        Self::system()
    }
}

impl EphemerisProvider for MarluEphemeris {
    fn now(&self) -> Result<Epoch, EphemerisError> {
        match self.clock {
            Clock::System => Epoch::now().map_err(|e| EphemerisError::Clock(e.to_string())),
            Clock::Fixed(epoch) => Ok(epoch),
        }
    }

    fn julian_date(&self, observer: &Observer) -> f64 {
        observer.date.to_jde_utc_days()
    }

    fn sidereal_time(&self, observer: &Observer) -> Result<String, EphemerisError> {
        let lmst = self.lmst_radians(observer);
        if !lmst.is_finite() {
            return Err(EphemerisError::MalformedSiderealTime(format!(
                "non-finite LMST at {}",
                observer.date
            )));
        }

        let hours = lmst.to_degrees() / 15.0;

        // Work in whole centiseconds so 23:59:59.999 can't render as 24:00:00
        const CENTIS_PER_DAY: u64 = 24 * 3600 * 100;
        let centis = (hours * 3600.0 * 100.0).floor() as u64 % CENTIS_PER_DAY;
        let h = centis / 360_000;
        let m = (centis / 6000) % 60;
        let s = centis % 6000;

        Ok(format!("{h}:{m:02}:{:02}.{:02}", s / 100, s % 100))
    }
}
