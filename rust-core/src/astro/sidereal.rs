//! Local sidereal time as `HH,MM,SS`

use super::ephemeris::{EphemerisProvider, Observer, SexagesimalLongitude};
use crate::error::{EphemerisError, Result};
use log::debug;
use std::fmt;

/// Local sidereal time truncated to whole seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SiderealTime {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl SiderealTime {
    /// Parse an ephemeris `H:MM:SS[.fff]` reading, truncating the seconds
    pub fn from_ephemeris_str(reading: &str) -> Result<Self, EphemerisError> {
        let malformed = || EphemerisError::MalformedSiderealTime(reading.to_string());

        let mut tokens = reading.trim().split(':');
        let (Some(h), Some(m), Some(s), None) =
            (tokens.next(), tokens.next(), tokens.next(), tokens.next())
        else {
            return Err(malformed());
        };

        let hours: u8 = h.trim().parse().map_err(|_| malformed())?;
        let minutes: u8 = m.trim().parse().map_err(|_| malformed())?;
        let seconds: f64 = s.trim().parse().map_err(|_| malformed())?;

        if hours > 23 || minutes > 59 || !(0.0..60.0).contains(&seconds) {
            return Err(malformed());
        }

        Ok(Self {
            hours,
            minutes,
            seconds: seconds.trunc() as u8,
        })
    }
}

impl fmt::Display for SiderealTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02},{:02},{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// Current local sidereal time at `longitude` (decimal degrees, east positive)
pub fn local_sidereal_time<P>(provider: &P, longitude: f64) -> Result<SiderealTime>
where
    P: EphemerisProvider + ?Sized,
{
    let observer = Observer {
        longitude: SexagesimalLongitude::from_degrees(longitude)?,
        date: provider.now()?,
    };

    let jd = provider.julian_date(&observer);
    debug!("Observer at {} on JD {jd}", observer.longitude);

    let reading = provider.sidereal_time(&observer)?;
    Ok(SiderealTime::from_ephemeris_str(&reading)?)
}

/// Current local sidereal time at `longitude` formatted `HH,MM,SS`
pub fn cur_sidereal<P>(provider: &P, longitude: f64) -> Result<String>
where
    P: EphemerisProvider + ?Sized,
{
    local_sidereal_time(provider, longitude).map(|lst| lst.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::astro::ephemeris::MarluEphemeris;
    use crate::error::{ConfigError, Error, ErrorKind};
    use hifitime::Epoch;
    use std::cell::RefCell;

    /// Replays a canned reading and records what it was asked for
    struct MockEphemeris {
        reading: Result<String, EphemerisError>,
        clock: Result<Epoch, EphemerisError>,
        seen: RefCell<Vec<String>>,
    }

    impl MockEphemeris {
        fn reading(reading: &str) -> Self {
            Self {
                reading: Ok(reading.to_string()),
                clock: Ok(Epoch::from_gregorian_utc_hms(2024, 3, 20, 3, 6, 0)),
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl EphemerisProvider for MockEphemeris {
        fn now(&self) -> Result<Epoch, EphemerisError> {
            self.clock.clone()
        }

        fn julian_date(&self, observer: &Observer) -> f64 {
            observer.date.to_jde_utc_days()
        }

        fn sidereal_time(&self, observer: &Observer) -> Result<String, EphemerisError> {
            self.seen.borrow_mut().push(observer.longitude.to_string());
            self.reading.clone()
        }
    }

    #[test]
    fn test_formats_and_truncates() {
        let provider = MockEphemeris::reading("7:05:09.99");
        assert_eq!(cur_sidereal(&provider, 0.0).unwrap(), "07,05,09");
    }

    #[test]
    fn test_passes_sexagesimal_longitude() {
        let provider = MockEphemeris::reading("12:00:00.00");
        cur_sidereal(&provider, -71.9875).unwrap();
        assert_eq!(provider.seen.borrow().as_slice(), &["-71:59:00".to_string()]);
    }

    #[test]
    fn test_output_shape() {
        for reading in ["0:00:00.00", "23:59:59.99", "9:30:05", "18:41:50.55"] {
            let provider = MockEphemeris::reading(reading);
            let out = cur_sidereal(&provider, 10.0).unwrap();
            assert_eq!(out.matches(',').count(), 2, "{out}");
            assert_eq!(out.chars().filter(|c| c.is_ascii_digit()).count(), 6, "{out}");
            assert_eq!(out.len(), 8);
        }
    }

    #[test]
    fn test_malformed_reading() {
        for reading in ["", "12:00", "25:00:00", "12:60:00", "12:00:61", "a:b:c", "1:2:3:4"] {
            let provider = MockEphemeris::reading(reading);
            let err = cur_sidereal(&provider, 0.0).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ExternalProvider, "{reading:?}");
        }
    }

    #[test]
    fn test_clock_failure_propagates() {
        let mut provider = MockEphemeris::reading("1:00:00");
        provider.clock = Err(EphemerisError::Clock("clock unavailable".into()));
        assert_eq!(
            local_sidereal_time(&provider, 0.0),
            Err(Error::ExternalProvider(EphemerisError::Clock(
                "clock unavailable".into()
            )))
        );
        assert!(provider.seen.borrow().is_empty());
    }

    #[test]
    fn test_bad_longitude() {
        let provider = MockEphemeris::reading("1:00:00");
        assert_eq!(
            local_sidereal_time(&provider, f64::INFINITY),
            Err(Error::Configuration(ConfigError::NonFinite {
                name: "longitude",
                value: f64::INFINITY,
            }))
        );
    }

    #[test]
    fn test_with_marlu_provider() {
        let epoch = Epoch::from_gregorian_utc_hms(2000, 1, 1, 12, 0, 0);
        let provider = MarluEphemeris::fixed(epoch);

        // LMST at Greenwich is 18h 41m 50s to within a second or so
        let lst = local_sidereal_time(&provider, 0.0).unwrap();
        assert_eq!((lst.hours, lst.minutes), (18, 41));
        assert!((48..=51).contains(&lst.seconds), "{lst}");

        // 15° east is one hour later
        let east = cur_sidereal(&provider, 15.0).unwrap();
        assert_eq!(east, format!("19,41,{:02}", lst.seconds));
    }

    #[test]
    fn test_ranges_over_a_day() {
        let start = Epoch::from_gregorian_utc_hms(2024, 6, 1, 0, 0, 0);
        for step in 0..48 {
            let epoch = start + hifitime::Duration::from_seconds(step as f64 * 1799.0);
            let provider = MarluEphemeris::fixed(epoch);
            let lst = local_sidereal_time(&provider, 116.67).unwrap();
            assert!(lst.hours <= 23 && lst.minutes <= 59 && lst.seconds <= 59);
        }
    }
}
