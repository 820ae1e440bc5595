use argh::FromArgs;

use edgecam::image::{Image, ImageSize};
use edgecam::imgproc::diff::{frame_diff, motion_centroid};
use edgecam::imgproc::draw::draw_crosshair;
use edgecam::imgproc::gradient::{roberts_cross, roberts_cross_parallel};

#[derive(FromArgs)]
/// Detect motion and edges on a synthetic two-frame scene
struct Args {
    /// frame width in pixels
    #[argh(option, default = "320")]
    width: usize,

    /// frame height in pixels
    #[argh(option, default = "240")]
    height: usize,

    /// minimum per-pixel difference to count as motion
    #[argh(option, default = "25")]
    threshold: u8,

    /// use the row-parallel edge kernel
    #[argh(switch)]
    parallel: bool,
}

/// A horizontal brightness ramp with a bright disc at `disc_center`.
fn synthetic_frame(
    size: ImageSize,
    disc_center: (i64, i64),
    disc_radius: i64,
) -> Result<Image<u8, 1>, Box<dyn std::error::Error>> {
    let (cx, cy) = disc_center;

    let mut data = Vec::with_capacity(size.width * size.height);
    for y in 0..size.height as i64 {
        for x in 0..size.width as i64 {
            let dx = x - cx;
            let dy = y - cy;
            if dx * dx + dy * dy <= disc_radius * disc_radius {
                data.push(230u8);
            } else {
                data.push((x * 160 / size.width as i64) as u8);
            }
        }
    }

    Ok(Image::new(size, data)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();
    let size = ImageSize {
        width: args.width,
        height: args.height,
    };

    let radius = (size.height / 8) as i64;
    let start = (size.width as i64 / 3, size.height as i64 / 2);
    let moved = (start.0 + radius, start.1);

    let prev = synthetic_frame(size, start, radius)?;
    let curr = synthetic_frame(size, moved, radius)?;

    let mut diff = Image::from_size_val(size, 0u8)?;
    frame_diff(&prev, &curr, &mut diff)?;

    let centroid = motion_centroid(&diff, args.threshold, 16);
    match centroid {
        Some(c) => log::info!(
            "motion centroid at ({}, {}) from {} moving pixels",
            c.x,
            c.y,
            c.pixels
        ),
        None => log::info!("no motion detected"),
    }

    let mut edges = Image::from_size_val(size, 0u8)?;
    if args.parallel {
        roberts_cross_parallel(&curr, &mut edges)?;
    } else {
        roberts_cross(&curr, &mut edges)?;
    }

    let edge_pixels = edges.as_slice().iter().filter(|&&m| m > 0).count();
    let max_magnitude = edges.as_slice().iter().copied().max().unwrap_or(0);
    log::info!(
        "edge map {}: {} nonzero pixels, max magnitude {}",
        edges.size(),
        edge_pixels,
        max_magnitude
    );

    if let Some(c) = centroid {
        draw_crosshair(&mut edges, (c.x as i64, c.y as i64), 8, [255]);
        log::info!("crosshair drawn at the motion centroid");
    }

    Ok(())
}
