//! Glitch-art GIF generation
//!
//! Builds an animated GIF from a single source image by shifting its
//! color channels by a random offset per frame. The red channel moves
//! horizontally, green vertically, blue horizontally in the opposite
//! direction, all with wrap-around. Each frame also gets a saturation
//! boost to push the separated channels further apart visually.

use crate::gif::{flatten_alpha, write_gif};
use crate::output::OutputError;
use image::{Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Per-frame delay of glitch GIFs, in milliseconds.
pub const FRAME_DELAY_MS: u32 = 100;

/// Error when generating a glitch GIF.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GlitchError {
    /// The source image failed to load
    #[error("failed to load '{path}': {source}")]
    Load {
        path: PathBuf,
        source: image::ImageError,
    },
    /// Encoding or writing the GIF failed
    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Render glitch frames from a source image.
///
/// Each frame picks an offset `d` in `[-displacement, displacement)`
/// from a deterministic generator, shifts the color channels by it,
/// flattens transparency, and boosts saturation by `1.0 + intensity`.
/// The same seed always yields the same frames.
pub fn glitch_frames(
    source: &RgbaImage,
    frames: u32,
    displacement: u32,
    intensity: f32,
    seed: u64,
) -> Vec<RgbaImage> {
    let mut state = seed;
    let span = 2 * displacement as i64;
    let factor = 1.0 + intensity;

    (0..frames)
        .map(|_| {
            let d = if span == 0 {
                0
            } else {
                pseudo_random(&mut state) as i64 % span - displacement as i64
            };
            let shifted = shift_channels(source, d);
            boost_saturation(&flatten_alpha(shifted), factor)
        })
        .collect()
}

/// Generate a glitch GIF from an image file.
///
/// Returns the number of frames written.
pub fn glitch_gif(
    input: &Path,
    output: &Path,
    frames: u32,
    displacement: u32,
    intensity: f32,
    seed: u64,
) -> Result<usize, GlitchError> {
    let source = match image::open(input) {
        Ok(img) => img.to_rgba8(),
        Err(err) => {
            return Err(GlitchError::Load {
                path: input.to_path_buf(),
                source: err,
            })
        }
    };

    let rendered = glitch_frames(&source, frames, displacement, intensity, seed);
    write_gif(&rendered, FRAME_DELAY_MS, output)?;
    Ok(rendered.len())
}

/// Shift the color channels of an image by `d` pixels with wrap-around.
///
/// Red moves right by `d`, green moves down by `d`, blue moves left by
/// `d`. Alpha stays in place.
fn shift_channels(source: &RgbaImage, d: i64) -> RgbaImage {
    let (width, height) = source.dimensions();
    let w = width as i64;
    let h = height as i64;

    let mut out = RgbaImage::new(width, height);
    for (x, y, pixel) in out.enumerate_pixels_mut() {
        let xi = x as i64;
        let yi = y as i64;
        let r = source.get_pixel((xi - d).rem_euclid(w) as u32, y)[0];
        let g = source.get_pixel(x, (yi - d).rem_euclid(h) as u32)[1];
        let b = source.get_pixel((xi + d).rem_euclid(w) as u32, y)[2];
        let a = source.get_pixel(x, y)[3];
        *pixel = Rgba([r, g, b, a]);
    }
    out
}

/// Scale color saturation by `factor`, pivoting around per-pixel luma.
///
/// Factor 1.0 is a no-op, 0.0 is grayscale, above 1.0 over-saturates.
fn boost_saturation(image: &RgbaImage, factor: f32) -> RgbaImage {
    let mut out = image.clone();
    for pixel in out.pixels_mut() {
        let r = pixel[0];
        let g = pixel[1];
        let b = pixel[2];
        // ITU-R 601-2 luma, fixed point
        let luma =
            ((r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000) >> 16) as f32;
        let adjust = |c: u8| -> u8 {
            let v = luma + factor * (c as f32 - luma);
            v.round().clamp(0.0, 255.0) as u8
        };
        pixel[0] = adjust(r);
        pixel[1] = adjust(g);
        pixel[2] = adjust(b);
    }
    out
}

/// Simple deterministic pseudo-random number generator for frame
/// offsets.
fn pseudo_random(seed: &mut u64) -> i32 {
    *seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
    (*seed % 2147483648) as i32
}
