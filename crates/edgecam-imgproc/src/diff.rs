use edgecam_image::{Image, ImageError};

use crate::parallel;

/// Difference-weighted motion estimate produced by [`motion_centroid`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MotionCentroid {
    /// x-coordinate of the centroid in pixels.
    pub x: usize,
    /// y-coordinate of the centroid in pixels.
    pub y: usize,
    /// Number of pixels whose difference exceeded the threshold.
    pub pixels: usize,
}

/// Compute the per-pixel absolute difference between two grayscale frames.
///
/// # Arguments
///
/// * `prev` - The previous grayscale frame.
/// * `curr` - The current grayscale frame, same size as `prev`.
/// * `dst` - The destination difference image, same size as `prev`.
///
/// # Errors
///
/// Returns an error if the image sizes do not match.
///
/// # Examples
///
/// ```
/// use edgecam_image::{Image, ImageSize};
/// use edgecam_imgproc::diff::frame_diff;
///
/// let size = ImageSize { width: 2, height: 1 };
/// let prev = Image::<u8, 1>::new(size, vec![10, 200]).unwrap();
/// let curr = Image::<u8, 1>::new(size, vec![30, 100]).unwrap();
///
/// let mut diff = Image::from_size_val(size, 0u8).unwrap();
/// frame_diff(&prev, &curr, &mut diff).unwrap();
///
/// assert_eq!(diff.as_slice(), &[20, 100]);
/// ```
pub fn frame_diff(
    prev: &Image<u8, 1>,
    curr: &Image<u8, 1>,
    dst: &mut Image<u8, 1>,
) -> Result<(), ImageError> {
    if prev.size() != curr.size() {
        return Err(ImageError::InvalidImageSize(
            prev.cols(),
            prev.rows(),
            curr.cols(),
            curr.rows(),
        ));
    }

    if prev.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            prev.cols(),
            prev.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows_val_two(prev, curr, dst, |prev_pixel, curr_pixel, dst_pixel| {
        *dst_pixel = curr_pixel.abs_diff(*prev_pixel);
    });

    Ok(())
}

/// Locate motion in a difference image as a difference-weighted centroid.
///
/// Pixels whose difference exceeds `threshold` contribute their coordinates
/// weighted by the difference value. Returns `None` when fewer than
/// `min_pixels` pixels moved.
///
/// # Arguments
///
/// * `diff` - A difference image, typically produced by [`frame_diff`].
/// * `threshold` - Minimum difference for a pixel to count as motion.
/// * `min_pixels` - Minimum number of moving pixels for a valid estimate.
pub fn motion_centroid(
    diff: &Image<u8, 1>,
    threshold: u8,
    min_pixels: usize,
) -> Option<MotionCentroid> {
    let cols = diff.cols();

    let mut total = 0u64;
    let mut weighted_x = 0u64;
    let mut weighted_y = 0u64;
    let mut pixels = 0usize;

    for (i, &d) in diff.as_slice().iter().enumerate() {
        if d > threshold {
            let weight = d as u64;
            weighted_x += (i % cols) as u64 * weight;
            weighted_y += (i / cols) as u64 * weight;
            total += weight;
            pixels += 1;
        }
    }

    if pixels < min_pixels || total == 0 {
        return None;
    }

    Some(MotionCentroid {
        x: (weighted_x / total) as usize,
        y: (weighted_y / total) as usize,
        pixels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use edgecam_image::ImageSize;

    #[test]
    fn frame_diff_identical_frames() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 4,
            height: 3,
        };
        let frame = Image::<u8, 1>::from_size_val(size, 99u8)?;

        let mut diff = Image::from_size_val(size, 0u8)?;
        frame_diff(&frame, &frame, &mut diff)?;

        assert!(diff.as_slice().iter().all(|&d| d == 0));
        assert_eq!(motion_centroid(&diff, 0, 1), None);

        Ok(())
    }

    #[test]
    fn frame_diff_rejects_size_mismatch() -> Result<(), ImageError> {
        let prev = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 4,
                height: 3,
            },
            0u8,
        )?;
        let curr = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 3,
                height: 4,
            },
            0u8,
        )?;
        let mut diff = Image::from_size_val(prev.size(), 0u8)?;

        assert_eq!(
            frame_diff(&prev, &curr, &mut diff),
            Err(ImageError::InvalidImageSize(4, 3, 3, 4))
        );

        Ok(())
    }

    #[test]
    fn motion_centroid_of_moved_block() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 16,
            height: 16,
        };
        let prev = Image::<u8, 1>::from_size_val(size, 0u8)?;

        // bright 4x4 block with its top-left corner at (10, 6)
        let mut curr_data = vec![0u8; 16 * 16];
        for y in 6..10 {
            for x in 10..14 {
                curr_data[y * 16 + x] = 200;
            }
        }
        let curr = Image::<u8, 1>::new(size, curr_data)?;

        let mut diff = Image::from_size_val(size, 0u8)?;
        frame_diff(&prev, &curr, &mut diff)?;

        let centroid = motion_centroid(&diff, 25, 4).expect("motion expected");
        assert_eq!(centroid.pixels, 16);
        assert!((10..14).contains(&centroid.x));
        assert!((6..10).contains(&centroid.y));

        Ok(())
    }

    #[test]
    fn motion_centroid_respects_gates() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 8,
            height: 8,
        };
        let mut data = vec![0u8; 64];
        data[0] = 50;
        let diff = Image::<u8, 1>::new(size, data)?;

        // below threshold
        assert_eq!(motion_centroid(&diff, 50, 1), None);
        // above threshold but not enough pixels
        assert_eq!(motion_centroid(&diff, 25, 2), None);
        // one pixel is enough
        assert_eq!(
            motion_centroid(&diff, 25, 1),
            Some(MotionCentroid {
                x: 0,
                y: 0,
                pixels: 1
            })
        );

        Ok(())
    }
}
