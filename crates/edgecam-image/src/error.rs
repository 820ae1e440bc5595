/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ImageError {
    /// Error when the data length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the source and destination image sizes do not match.
    #[error("Source image size ({0}x{1}) does not match destination image size ({2}x{3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when the image dimensions are too small for the requested operation.
    #[error("Image dimensions ({0}x{1}) are too small; expected at least ({2}x{3})")]
    InvalidDimensions(usize, usize, usize, usize),

    /// Error when a pixel index is out of bounds.
    #[error("Pixel index ({0}, {1}) is out of bounds for image size ({2}x{3})")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when a channel index is out of bounds.
    #[error("Channel index ({0}) is out of bounds for ({1}) channels")]
    ChannelIndexOutOfBounds(usize, usize),
}
