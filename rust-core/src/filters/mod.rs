//! Single-pole IIR smoothing

pub mod single_pole;

pub use single_pole::{get_alpha, SinglePoleLowpass, ALPHA_ANGULAR_SCALE};
