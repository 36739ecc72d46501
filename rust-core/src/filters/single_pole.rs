//! Single-pole IIR low-pass (exponential smoothing)
//!
//! `y[n] = α·x[n] + (1-α)·y[n-1]`, with α derived from a corner frequency:
//! `α = 1 - exp(-ALPHA_ANGULAR_SCALE · corner / sample_rate)`

use crate::error::{check_rate, ConfigError};
use std::f64::consts::TAU;

/// Scale applied to `corner / sample_rate` before exponentiation.
///
/// 2π converts the corner frequency to angular frequency, which makes
/// `corner` the -3 dB point of the filter for `corner << sample_rate`.
pub const ALPHA_ANGULAR_SCALE: f64 = TAU;

/// Smoothing coefficient for a single-pole IIR low-pass
///
/// # Arguments
/// * `corner_frequency` - Desired corner frequency in Hz
/// * `sample_rate` - Sample rate in Hz
///
/// # Returns
/// α in (0, 1)
pub fn get_alpha(corner_frequency: f64, sample_rate: f64) -> Result<f64, ConfigError> {
    let corner = check_rate("corner frequency", corner_frequency)?;
    let srate = check_rate("sample rate", sample_rate)?;

    // exp_m1 keeps precision when corner/srate is tiny
    Ok(-(-ALPHA_ANGULAR_SCALE * corner / srate).exp_m1())
}

/// Real-valued single-pole low-pass filter
#[derive(Debug, Clone)]
pub struct SinglePoleLowpass {
    alpha: f64,

    /// Previous output y[n-1]
    state: f64,
}

impl SinglePoleLowpass {
    /// Create from a smoothing coefficient
    ///
    /// α must lie in (0, 1]; α = 1 passes the input through unchanged.
    pub fn new(alpha: f64) -> Result<Self, ConfigError> {
        if !(alpha > 0.0 && alpha <= 1.0) {
            return Err(ConfigError::InvalidAlpha(alpha));
        }

        Ok(Self { alpha, state: 0.0 })
    }

    /// Create from a corner frequency and sample rate, both in Hz
    pub fn from_corner(corner_frequency: f64, sample_rate: f64) -> Result<Self, ConfigError> {
        Self::new(get_alpha(corner_frequency, sample_rate)?)
    }

    /// Process single sample
    #[inline]
    pub fn process_sample(&mut self, input: f64) -> f64 {
        self.state += self.alpha * (input - self.state);
        self.state
    }

    /// Process a block of samples
    pub fn process_block(&mut self, input: &[f64]) -> Vec<f64> {
        input.iter().map(|&x| self.process_sample(x)).collect()
    }

    /// Process a block in-place
    pub fn process_block_inplace(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.process_sample(*sample);
        }
    }

    /// Reset filter state
    pub fn reset(&mut self) {
        self.state = 0.0;
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Current output y[n-1]
    pub fn state(&self) -> f64 {
        self.state
    }

    /// Corner frequency this filter was designed for at `sample_rate`
    pub fn corner_frequency(&self, sample_rate: f64) -> f64 {
        // Inverse of get_alpha
        -sample_rate * (-self.alpha).ln_1p() / ALPHA_ANGULAR_SCALE
    }
}
