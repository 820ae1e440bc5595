use edgecam_image::Image;

/// Helper function to set a pixel's color, handling bounds checking.
#[inline]
fn set_pixel<const C: usize>(img: &mut Image<u8, C>, x: i64, y: i64, color: [u8; C]) {
    if x >= 0 && x < img.cols() as i64 && y >= 0 && y < img.rows() as i64 {
        let start = (y as usize * img.cols() + x as usize) * C;
        img.as_slice_mut()[start..start + C].copy_from_slice(&color);
    }
}

/// Draws a line on an image inplace using a standard Bresenham's line algorithm.
///
/// Pixels that fall outside the image are clipped.
///
/// # Arguments
///
/// * `img` - The image to draw on.
/// * `p0` - The start point of the line as a tuple of (x, y).
/// * `p1` - The end point of the line as a tuple of (x, y).
/// * `color` - The color of the line as an array of `C` elements.
pub fn draw_line<const C: usize>(
    img: &mut Image<u8, C>,
    p0: (i64, i64),
    p1: (i64, i64),
    color: [u8; C],
) {
    let (mut x0, mut y0) = p0;
    let (x1, y1) = p1;

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };

    let mut err = dx - dy;

    loop {
        set_pixel(img, x0, y0, color);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x0 += sx;
        }
        if e2 < dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Draws a crosshair centered at a point.
///
/// One horizontal and one vertical line of half-length `size`, clipped at the
/// image border.
///
/// # Arguments
///
/// * `img` - The image to draw on.
/// * `center` - The center of the crosshair as a tuple of (x, y).
/// * `size` - The half-length of the crosshair arms in pixels.
/// * `color` - The color of the crosshair as an array of `C` elements.
pub fn draw_crosshair<const C: usize>(
    img: &mut Image<u8, C>,
    center: (i64, i64),
    size: i64,
    color: [u8; C],
) {
    let (cx, cy) = center;
    draw_line(img, (cx - size, cy), (cx + size, cy), color);
    draw_line(img, (cx, cy - size), (cx, cy + size), color);
}

/// Draws a circle outline using the midpoint circle algorithm.
///
/// Plots all eight octants per step; pixels outside the image are clipped.
///
/// # Arguments
///
/// * `img` - The image to draw on.
/// * `center` - The center of the circle as a tuple of (x, y).
/// * `radius` - The radius of the circle in pixels.
/// * `color` - The color of the circle as an array of `C` elements.
pub fn draw_circle<const C: usize>(
    img: &mut Image<u8, C>,
    center: (i64, i64),
    radius: i64,
    color: [u8; C],
) {
    let (cx, cy) = center;

    let mut x = 0;
    let mut y = radius;
    let mut d = 3 - 2 * radius;

    while x <= y {
        for (px, py) in [
            (cx + x, cy + y),
            (cx - x, cy + y),
            (cx + x, cy - y),
            (cx - x, cy - y),
            (cx + y, cy + x),
            (cx - y, cy + x),
            (cx + y, cy - x),
            (cx - y, cy - x),
        ] {
            set_pixel(img, px, py, color);
        }

        if d < 0 {
            d += 4 * x + 6;
        } else {
            d += 4 * (x - y) + 10;
            y -= 1;
        }
        x += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edgecam_image::{ImageError, ImageSize};

    fn blank(width: usize, height: usize) -> Result<Image<u8, 1>, ImageError> {
        Image::from_size_val(ImageSize { width, height }, 0u8)
    }

    #[test]
    fn draw_line_horizontal() -> Result<(), ImageError> {
        let mut img = blank(5, 3)?;
        draw_line(&mut img, (0, 1), (4, 1), [255]);

        for x in 0..5 {
            assert_eq!(img.get_pixel(x, 1, 0)?, &255);
        }
        assert_eq!(img.get_pixel(2, 0, 0)?, &0);
        assert_eq!(img.get_pixel(2, 2, 0)?, &0);

        Ok(())
    }

    #[test]
    fn draw_crosshair_marks_center() -> Result<(), ImageError> {
        let mut img = blank(9, 9)?;
        draw_crosshair(&mut img, (4, 4), 2, [200]);

        assert_eq!(img.get_pixel(4, 4, 0)?, &200);
        assert_eq!(img.get_pixel(2, 4, 0)?, &200);
        assert_eq!(img.get_pixel(6, 4, 0)?, &200);
        assert_eq!(img.get_pixel(4, 2, 0)?, &200);
        assert_eq!(img.get_pixel(4, 6, 0)?, &200);
        // arms stop at the configured size
        assert_eq!(img.get_pixel(1, 4, 0)?, &0);
        assert_eq!(img.get_pixel(4, 7, 0)?, &0);

        Ok(())
    }

    #[test]
    fn draw_crosshair_clips_at_border() -> Result<(), ImageError> {
        let mut img = blank(4, 4)?;
        draw_crosshair(&mut img, (0, 0), 3, [255]);

        assert_eq!(img.get_pixel(0, 0, 0)?, &255);
        assert_eq!(img.get_pixel(3, 0, 0)?, &255);
        assert_eq!(img.get_pixel(0, 3, 0)?, &255);
        // off-image arms are dropped without touching other rows
        assert_eq!(img.get_pixel(1, 1, 0)?, &0);

        Ok(())
    }

    #[test]
    fn draw_circle_stays_on_radius() -> Result<(), ImageError> {
        let mut img = blank(11, 11)?;
        draw_circle(&mut img, (5, 5), 3, [255]);

        // cardinal points of the circle
        assert_eq!(img.get_pixel(8, 5, 0)?, &255);
        assert_eq!(img.get_pixel(2, 5, 0)?, &255);
        assert_eq!(img.get_pixel(5, 8, 0)?, &255);
        assert_eq!(img.get_pixel(5, 2, 0)?, &255);
        // center stays untouched
        assert_eq!(img.get_pixel(5, 5, 0)?, &0);

        Ok(())
    }
}
