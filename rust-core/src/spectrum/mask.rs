//! Pass/block masks laid out like an FFT result
//!
//! A mask is multiplied element-wise against a spectrum, so its element type
//! must match the spectrum: `f64` for post-|X|² power spectra and
//! [`Complex64`] for raw transform output.

use ndarray::Array1;
use num_complex::Complex64;
use std::fmt::Debug;

/// Element type a mask can hold
pub trait MaskElement: Copy + PartialEq + Debug + 'static {
    /// Multiplicative identity; leaves the bin untouched
    const PASS: Self;

    /// Multiplicative zero; removes the bin
    const BLOCK: Self;
}

impl MaskElement for f64 {
    const PASS: Self = 1.0;
    const BLOCK: Self = 0.0;
}

impl MaskElement for Complex64 {
    const PASS: Self = Complex64::new(1.0, 0.0);
    const BLOCK: Self = Complex64::new(0.0, 0.0);
}

/// Which element type to build a mask with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaskKind {
    /// Real-valued mask for power spectra
    #[default]
    Real,

    /// Complex-valued mask for raw FFT output
    Complex,
}

impl MaskKind {
    pub fn from_is_complex(is_complex: bool) -> Self {
        if is_complex {
            MaskKind::Complex
        } else {
            MaskKind::Real
        }
    }
}

/// Fixed-length mask whose elements are all either pass or block
#[derive(Debug, Clone, PartialEq)]
pub struct RfiMask<T: MaskElement> {
    bins: Array1<T>,
}

impl<T: MaskElement> RfiMask<T> {
    /// All-pass mask of `len` bins
    pub fn all_pass(len: usize) -> Self {
        Self {
            bins: Array1::from_elem(len, T::PASS),
        }
    }

    /// Only the generator writes to a mask; callers get it read-only.
    pub(crate) fn block(&mut self, index: usize) {
        if let Some(bin) = self.bins.get_mut(index) {
            *bin = T::BLOCK;
        }
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<T> {
        self.bins.get(index).copied()
    }

    pub fn is_blocked(&self, index: usize) -> bool {
        self.get(index) == Some(T::BLOCK)
    }

    /// Indices of every blocked bin, ascending
    pub fn blocked_indices(&self) -> Vec<usize> {
        self.bins
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == T::BLOCK)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn as_slice(&self) -> &[T] {
        // Array1::from_elem is always contiguous in standard order
        self.bins.as_slice().unwrap_or(&[])
    }

    pub fn as_array(&self) -> &Array1<T> {
        &self.bins
    }

    pub fn into_array(self) -> Array1<T> {
        self.bins
    }

    pub fn into_vec(self) -> Vec<T> {
        self.bins.into_raw_vec()
    }
}

/// A mask whose element type was chosen at runtime
#[derive(Debug, Clone, PartialEq)]
pub enum Mask {
    Real(RfiMask<f64>),
    Complex(RfiMask<Complex64>),
}

impl Mask {
    pub fn kind(&self) -> MaskKind {
        match self {
            Mask::Real(_) => MaskKind::Real,
            Mask::Complex(_) => MaskKind::Complex,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Mask::Real(m) => m.len(),
            Mask::Complex(m) => m.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_blocked(&self, index: usize) -> bool {
        match self {
            Mask::Real(m) => m.is_blocked(index),
            Mask::Complex(m) => m.is_blocked(index),
        }
    }

    pub fn blocked_indices(&self) -> Vec<usize> {
        match self {
            Mask::Real(m) => m.blocked_indices(),
            Mask::Complex(m) => m.blocked_indices(),
        }
    }

    pub fn as_real(&self) -> Option<&RfiMask<f64>> {
        match self {
            Mask::Real(m) => Some(m),
            Mask::Complex(_) => None,
        }
    }

    pub fn as_complex(&self) -> Option<&RfiMask<Complex64>> {
        match self {
            Mask::Complex(m) => Some(m),
            Mask::Real(_) => None,
        }
    }
}

impl From<RfiMask<f64>> for Mask {
    fn from(mask: RfiMask<f64>) -> Self {
        Mask::Real(mask)
    }
}

impl From<RfiMask<Complex64>> for Mask {
    fn from(mask: RfiMask<Complex64>) -> Self {
        Mask::Complex(mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_pass() {
        let mask = RfiMask::<f64>::all_pass(16);
        assert_eq!(mask.len(), 16);
        assert!(mask.as_slice().iter().all(|&v| v == 1.0));
        assert!(mask.blocked_indices().is_empty());
    }

    #[test]
    fn test_block_complex() {
        let mut mask = RfiMask::<Complex64>::all_pass(8);
        mask.block(5);
        mask.block(5);
        assert_eq!(mask.get(5), Some(Complex64::new(0.0, 0.0)));
        assert_eq!(mask.get(4), Some(Complex64::new(1.0, 0.0)));
        assert_eq!(mask.blocked_indices(), vec![5]);
    }

    #[test]
    fn test_block_out_of_range_is_ignored() {
        let mut mask = RfiMask::<f64>::all_pass(4);
        mask.block(4);
        assert_eq!(mask, RfiMask::all_pass(4));
    }

    #[test]
    fn test_apply_to_spectrum() {
        let mut mask = RfiMask::<f64>::all_pass(6);
        mask.block(1);
        mask.block(4);

        let spectrum = Array1::from(vec![3.0, 5.0, 7.0, 11.0, 13.0, 17.0]);
        let cleaned = &spectrum * mask.as_array();
        assert_eq!(cleaned.to_vec(), vec![3.0, 0.0, 7.0, 11.0, 0.0, 17.0]);
        assert_eq!(mask.as_array().len(), 6);

        assert_eq!(mask.into_vec(), vec![1.0, 0.0, 1.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_tagged_mask() {
        let mask: Mask = RfiMask::<Complex64>::all_pass(4).into();
        assert_eq!(mask.kind(), MaskKind::Complex);
        assert!(mask.as_real().is_none());
        assert_eq!(mask.as_complex().map(|m| m.len()), Some(4));
        assert_eq!(MaskKind::from_is_complex(false), MaskKind::Real);
    }
}
