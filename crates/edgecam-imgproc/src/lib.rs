#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// frame differencing module.
pub mod diff;

/// utilities to draw on images.
pub mod draw;

/// image gradient module.
pub mod gradient;

/// module containing parallelization utilities.
pub mod parallel;
