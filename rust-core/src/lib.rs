//! Radio Toolbox - Small Numeric Helpers for Radio Astronomy DSP
//! 
//! Fringe period, single-pole filter coefficients, local sidereal time and
//! RFI masks for split-ordered FFT output, with optional Python bindings.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![allow(non_local_definitions)]

pub mod astro;
pub mod error;
pub mod filters;
pub mod spectrum;
#[cfg(feature = "python")]
pub mod python_bindings;

pub use astro::{cur_sidereal, fringe_period, EphemerisProvider, MarluEphemeris};
pub use error::{ConfigError, EphemerisError, Error, ErrorKind, Result};
pub use filters::{get_alpha, SinglePoleLowpass};
pub use spectrum::{rfi_mask, Mask, MaskConfig, RfiMask};
