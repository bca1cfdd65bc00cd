//! Animated GIF building
//!
//! Builds looping GIFs from still images. Every frame is normalized to
//! the size of the first frame and flattened to full opacity before
//! encoding, since GIF transparency is 1-bit and partial alpha would
//! come out wrong.

use crate::output::{ensure_parent, OutputError};
use image::codecs::gif::{GifEncoder, Repeat};
use image::imageops::FilterType;
use image::{imageops, Frame, RgbaImage};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error when building a GIF from input images.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GifError {
    /// The input list was empty
    #[error("no input frames supplied")]
    NoFrames,
    /// A frame image failed to load
    #[error("failed to load frame '{path}': {source}")]
    Frame {
        path: PathBuf,
        source: image::ImageError,
    },
    /// Encoding or writing the GIF failed
    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Build an animated GIF from a list of image files.
///
/// The first image fixes the frame size; later images are resized to
/// match. Frames are shown for `duration_ms` each and the animation
/// loops forever. Returns the number of frames written.
pub fn build_gif(
    inputs: &[PathBuf],
    output: &Path,
    duration_ms: u32,
) -> Result<usize, GifError> {
    if inputs.is_empty() {
        return Err(GifError::NoFrames);
    }

    let mut frames = Vec::with_capacity(inputs.len());
    for path in inputs {
        let image = match image::open(path) {
            Ok(img) => img.to_rgba8(),
            Err(source) => {
                return Err(GifError::Frame {
                    path: path.clone(),
                    source,
                })
            }
        };
        frames.push(image);
    }

    let (width, height) = frames[0].dimensions();
    let frames: Vec<RgbaImage> = frames
        .into_iter()
        .map(|frame| {
            let frame = if frame.dimensions() == (width, height) {
                frame
            } else {
                imageops::resize(&frame, width, height, FilterType::Lanczos3)
            };
            flatten_alpha(frame)
        })
        .collect();

    write_gif(&frames, duration_ms, output)?;
    Ok(frames.len())
}

/// Encode a sequence of frames as an infinitely looping GIF.
///
/// An empty frame list is a no-op and writes nothing. Delays saturate
/// at the format's maximum of 655,350 ms per frame.
pub fn write_gif(frames: &[RgbaImage], duration_ms: u32, path: &Path) -> Result<(), OutputError> {
    if frames.is_empty() {
        return Ok(());
    }

    ensure_parent(path)?;

    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let mut encoder = GifEncoder::new(writer);
    encoder.set_repeat(Repeat::Infinite)?;

    // GIF uses centiseconds (1/100th of a second) for delays
    // Convert milliseconds to centiseconds (divide by 10); the delay
    // field is u16, so oversized durations clamp to its max
    let delay_cs = (duration_ms / 10).clamp(1, u16::MAX as u32) as u16;

    for rgba_image in frames {
        let delay = image::Delay::from_numer_denom_ms(delay_cs as u32 * 10, 1);
        let frame = Frame::from_parts(rgba_image.clone(), 0, 0, delay);
        encoder.encode_frame(frame)?;
    }

    Ok(())
}

/// Force every pixel fully opaque.
pub(crate) fn flatten_alpha(mut image: RgbaImage) -> RgbaImage {
    for pixel in image.pixels_mut() {
        pixel[3] = 255;
    }
    image
}
