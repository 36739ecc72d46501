//! Frequency-domain masks for FFT output

pub mod mask;
pub mod rfi;

pub use mask::{Mask, MaskElement, MaskKind, RfiMask};
pub use rfi::{rfi_mask, MaskConfig};
