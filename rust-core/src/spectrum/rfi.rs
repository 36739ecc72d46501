//! RFI mask generation
//!
//! Maps absolute interference frequencies onto bins of an FFT taken around a
//! centre frequency. The transform is stored split: non-negative offsets
//! first (indices `0..n/2`), negative offsets after them. A negative offset
//! `k` is placed at `k + n/2`.

use super::mask::{Mask, MaskElement, MaskKind, RfiMask};
use crate::error::{check_finite, check_rate, ConfigError, Result};
use log::{debug, trace};
use num_complex::Complex64;

/// Acquisition parameters a mask is built for
///
/// Only [`MaskConfig::new`] and [`Default`] hand one out, so every config
/// seen by [`MaskConfig::build`] has been validated.
///
/// ```compile_fail
/// use radio_toolbox::MaskConfig;
///
/// let config = MaskConfig {
///     sample_rate: -1000.0,
///     center_frequency: 10000.0,
///     fft_size: 7,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaskConfig {
    /// Sample rate in Hz; the spectrum spans `centre ± sample_rate/2`
    sample_rate: f64,

    /// Centre (DC bin) frequency in Hz
    center_frequency: f64,

    /// Number of FFT bins (positive, even)
    fft_size: usize,
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            sample_rate: 2.048e6,
            center_frequency: 1420.4058e6,
            fft_size: 2048,
        }
    }
}

impl MaskConfig {
    /// Create a validated configuration
    ///
    /// # Errors
    /// [`ConfigError`] if the sample rate is not positive, the centre
    /// frequency is not finite, or `fft_size` is zero or odd.
    pub fn new(
        sample_rate: f64,
        center_frequency: f64,
        fft_size: usize,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            sample_rate,
            center_frequency,
            fft_size,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        check_rate("sample rate", self.sample_rate)?;
        check_finite("centre frequency", self.center_frequency)?;
        if self.fft_size == 0 || self.fft_size % 2 != 0 {
            return Err(ConfigError::InvalidFftSize(self.fft_size));
        }
        Ok(())
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    pub fn center_frequency(&self) -> f64 {
        self.center_frequency
    }

    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    /// Width of one bin in Hz
    pub fn bin_width(&self) -> f64 {
        self.sample_rate / self.fft_size as f64
    }

    /// Lower and upper edge of the acquired span in Hz
    pub fn span(&self) -> (f64, f64) {
        let half = self.sample_rate / 2.0;
        (self.center_frequency - half, self.center_frequency + half)
    }

    /// Whether `frequency` lies inside the span, edges included
    pub fn contains(&self, frequency: f64) -> bool {
        let (low, high) = self.span();
        frequency >= low && frequency <= high
    }

    /// Mask index of the bin holding `frequency`, or `None` outside the span
    pub fn bin_index(&self, frequency: f64) -> Option<usize> {
        if !self.contains(frequency) {
            return None;
        }

        let half = (self.fft_size / 2) as i64;

        // Truncate toward zero, as the bin offset is signed
        let offset = ((frequency - self.center_frequency) / self.bin_width()).trunc() as i64;

        // The upper edge computes to +n/2, which is the same physical bin as
        // -n/2 (Nyquist). Rounding can't push it further, but keep it pinned.
        let offset = offset.clamp(-half, half);

        let index = if offset < 0 { offset + half } else { offset };
        debug_assert!((0..self.fft_size as i64).contains(&index));

        Some(index as usize)
    }

    /// Build a mask blocking every in-span frequency of `rfi_list`
    ///
    /// Entries are processed in order; duplicates and out-of-span entries are
    /// harmless.
    pub fn build<T: MaskElement>(&self, rfi_list: &[f64]) -> RfiMask<T> {
        let mut mask = RfiMask::all_pass(self.fft_size);

        for &rfi in rfi_list {
            match self.bin_index(rfi) {
                Some(index) => {
                    trace!("Blocking bin {index} for RFI at {rfi} Hz");
                    mask.block(index);
                }
                None => {
                    let (low, high) = self.span();
                    debug!("Ignoring RFI at {rfi} Hz, outside [{low}, {high}] Hz");
                }
            }
        }

        mask
    }

    /// Build a mask with the element type chosen at runtime
    pub fn build_kind(&self, kind: MaskKind, rfi_list: &[f64]) -> Mask {
        match kind {
            MaskKind::Real => Mask::Real(self.build::<f64>(rfi_list)),
            MaskKind::Complex => Mask::Complex(self.build::<Complex64>(rfi_list)),
        }
    }
}

/// Build an RFI mask in split FFT order
///
/// # Arguments
/// * `sample_rate` - Sample rate in Hz
/// * `center_frequency` - Centre frequency of the spectrum in Hz
/// * `rfi_list` - Absolute frequencies (Hz) to block
/// * `fft_size` - Number of FFT bins (positive, even)
/// * `is_complex` - Build a complex mask for raw FFT output instead of a real one
///
/// # Returns
/// A mask of `fft_size` elements, `1` everywhere except the RFI bins
pub fn rfi_mask(
    sample_rate: f64,
    center_frequency: f64,
    rfi_list: &[f64],
    fft_size: usize,
    is_complex: bool,
) -> Result<Mask> {
    let config = MaskConfig::new(sample_rate, center_frequency, fft_size)?;
    Ok(config.build_kind(MaskKind::from_is_complex(is_complex), rfi_list))
}
