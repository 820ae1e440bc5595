use edgecam_image::{Image, ImageError};
use rayon::prelude::*;

/// Compute the Roberts Cross gradient magnitude of a grayscale image.
///
/// For every pixel with a full 2x2 neighborhood
///
/// ```text
/// P1 P2
/// P3 P4
/// ```
///
/// the two diagonal differences `gx = P1 - P4` and `gy = P2 - P3` are taken
/// in widened signed arithmetic and combined as `|gx| + |gy|`, saturated to
/// the 8-bit range. The L1 norm stands in for the Euclidean magnitude so the
/// whole pass stays in integer arithmetic.
///
/// The last row and last column have no 2x2 neighborhood and are written as
/// zero.
///
/// # Arguments
///
/// * `src` - The source grayscale image.
/// * `dst` - The destination edge magnitude image, same size as `src`.
///
/// # Errors
///
/// Returns an error if `src` is smaller than 2x2 pixels or if the sizes of
/// `src` and `dst` do not match.
///
/// # Examples
///
/// ```
/// use edgecam_image::{Image, ImageSize};
/// use edgecam_imgproc::gradient::roberts_cross;
///
/// let image = Image::<u8, 1>::new(
///     ImageSize { width: 3, height: 3 },
///     vec![10, 20, 30, 40, 50, 60, 70, 80, 90],
/// ).unwrap();
///
/// let mut edges = Image::from_size_val(image.size(), 0u8).unwrap();
///
/// roberts_cross(&image, &mut edges).unwrap();
/// assert_eq!(edges.as_slice(), &[60, 60, 0, 60, 60, 0, 0, 0, 0]);
/// ```
pub fn roberts_cross(src: &Image<u8, 1>, dst: &mut Image<u8, 1>) -> Result<(), ImageError> {
    if src.width() < 2 || src.height() < 2 {
        return Err(ImageError::InvalidDimensions(
            src.width(),
            src.height(),
            2,
            2,
        ));
    }

    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    let cols = src.cols();
    let src_data = src.as_slice();

    let (dst_rows, dst_last) = dst.as_slice_mut().split_at_mut((src.rows() - 1) * cols);
    for (r, dst_row) in dst_rows.chunks_exact_mut(cols).enumerate() {
        let row = &src_data[r * cols..(r + 1) * cols];
        let row_below = &src_data[(r + 1) * cols..(r + 2) * cols];
        roberts_cross_row(row, row_below, dst_row);
    }

    // no 2x2 neighborhood on the bottom row
    dst_last.fill(0);

    Ok(())
}

/// Compute the Roberts Cross gradient magnitude with row-parallel execution.
///
/// Same contract and bit-identical output as [`roberts_cross`]; output rows
/// are distributed over the global thread pool. Every output row depends only
/// on two read-only input rows, so the bands need no synchronization.
///
/// # Arguments
///
/// * `src` - The source grayscale image.
/// * `dst` - The destination edge magnitude image, same size as `src`.
///
/// # Errors
///
/// Returns an error if `src` is smaller than 2x2 pixels or if the sizes of
/// `src` and `dst` do not match.
pub fn roberts_cross_parallel(
    src: &Image<u8, 1>,
    dst: &mut Image<u8, 1>,
) -> Result<(), ImageError> {
    if src.width() < 2 || src.height() < 2 {
        return Err(ImageError::InvalidDimensions(
            src.width(),
            src.height(),
            2,
            2,
        ));
    }

    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    let cols = src.cols();
    let rows = src.rows();
    let src_data = src.as_slice();

    dst.as_slice_mut()
        .par_chunks_exact_mut(cols)
        .enumerate()
        .for_each(|(r, dst_row)| {
            if r == rows - 1 {
                dst_row.fill(0);
                return;
            }
            let row = &src_data[r * cols..(r + 1) * cols];
            let row_below = &src_data[(r + 1) * cols..(r + 2) * cols];
            roberts_cross_row(row, row_below, dst_row);
        });

    Ok(())
}

/// Compute one output row from a pair of adjacent input rows.
///
/// The caller guarantees `row`, `row_below` and `dst_row` have equal length
/// of at least 2.
#[inline]
fn roberts_cross_row(row: &[u8], row_below: &[u8], dst_row: &mut [u8]) {
    let cols = dst_row.len();
    for c in 0..cols - 1 {
        // i16 holds both the [-255, 255] differences and the [0, 510] sum
        let p1 = row[c] as i16;
        let p2 = row[c + 1] as i16;
        let p3 = row_below[c] as i16;
        let p4 = row_below[c + 1] as i16;

        let gx = p1 - p4;
        let gy = p2 - p3;

        let magnitude = gx.abs() + gy.abs();
        dst_row[c] = magnitude.min(255) as u8;
    }

    // no 2x2 neighborhood on the last column
    dst_row[cols - 1] = 0;
}
