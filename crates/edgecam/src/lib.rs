#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use edgecam_image as image;

#[doc(inline)]
pub use edgecam_imgproc as imgproc;
