//! Positional astronomy helpers

pub mod ephemeris;
pub mod fringe;
pub mod sidereal;

pub use ephemeris::{EphemerisProvider, MarluEphemeris, Observer, SexagesimalLongitude};
pub use fringe::fringe_period;
pub use sidereal::{cur_sidereal, local_sidereal_time, SiderealTime};
