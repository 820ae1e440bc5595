#![deny(missing_docs)]
//! Image buffer types for embedded camera pipelines

/// image representation for camera frames.
pub mod image;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
