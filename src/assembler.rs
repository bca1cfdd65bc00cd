//! Character assembly - layering trait images over a background
//!
//! Takes an ordered trait list, resolves each trait to a PNG under the
//! asset tree, and composites the layers bottom to top onto the
//! background. Output lands in `generated_images/<id>.png` inside the
//! asset tree.

use crate::models::{Trait, BACKGROUND_TYPE};
use crate::output::{save_png, OutputError};
use image::imageops::FilterType;
use image::{imageops, Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A warning generated while assembling one character
#[derive(Debug, Clone, PartialEq)]
pub struct Warning {
    pub message: String,
}

impl Warning {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error when assembling a character.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AssembleError {
    /// The trait list has no background trait
    #[error("character '{0}': no background trait present")]
    MissingBackground(String),
    /// An image file failed to load
    #[error("failed to load '{path}': {source}")]
    Load {
        path: PathBuf,
        source: image::ImageError,
    },
    /// Writing the composed image failed
    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Result of assembling one character.
#[derive(Debug)]
pub struct AssembleOutcome {
    /// Where the composed PNG was written
    pub path: PathBuf,
    /// Non-fatal problems encountered along the way
    pub warnings: Vec<Warning>,
}

/// Assemble one character image from its ordered trait list.
///
/// Trait images live at `<assets>/<trait_type>/<value>.png`. The
/// background trait is drawn first and fixes the canvas size; every
/// other trait is composited over it in list order. Duplicate trait
/// types collapse to a single layer: the first occurrence fixes the
/// layer's position in the stack, the last occurrence supplies the
/// value. Layers whose image file is missing are skipped with a
/// warning; a missing background is an error and nothing is written.
pub fn assemble_character(
    assets: &Path,
    id: &str,
    traits: &[Trait],
) -> Result<AssembleOutcome, AssembleError> {
    let mut warnings = Vec::new();

    let mut background_value: Option<&str> = None;
    let mut layers: Vec<(&str, &str)> = Vec::new();
    for t in traits {
        if t.trait_type == BACKGROUND_TYPE {
            background_value = Some(&t.value);
            continue;
        }
        match layers.iter().position(|(ty, _)| *ty == t.trait_type) {
            Some(idx) => layers[idx].1 = t.value.as_str(),
            None => layers.push((t.trait_type.as_str(), t.value.as_str())),
        }
    }

    let background_value = match background_value {
        Some(value) => value,
        None => return Err(AssembleError::MissingBackground(id.to_string())),
    };

    let background_path = trait_image_path(assets, BACKGROUND_TYPE, background_value);
    let mut canvas = load_layer(&background_path)?;
    let (width, height) = canvas.dimensions();

    for (trait_type, value) in layers {
        let layer_path = trait_image_path(assets, trait_type, value);
        if !layer_path.is_file() {
            warnings.push(Warning::new(format!(
                "trait image not found: {}",
                layer_path.display()
            )));
            continue;
        }
        let mut layer = load_layer(&layer_path)?;
        if layer.dimensions() != (width, height) {
            layer = imageops::resize(&layer, width, height, FilterType::CatmullRom);
        }
        composite_over(&mut canvas, &layer);
    }

    let out_path = assets.join("generated_images").join(format!("{}.png", id));
    save_png(&canvas, &out_path)?;

    Ok(AssembleOutcome {
        path: out_path,
        warnings,
    })
}

/// Path of the image for one trait: `<assets>/<trait_type>/<value>.png`
pub fn trait_image_path(assets: &Path, trait_type: &str, value: &str) -> PathBuf {
    assets.join(trait_type).join(format!("{}.png", value))
}

fn load_layer(path: &Path) -> Result<RgbaImage, AssembleError> {
    match image::open(path) {
        Ok(img) => Ok(img.to_rgba8()),
        Err(source) => Err(AssembleError::Load {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Composite `layer` over `canvas` in place using alpha blending.
///
/// Both images must have the same dimensions.
pub fn composite_over(canvas: &mut RgbaImage, layer: &RgbaImage) {
    debug_assert_eq!(canvas.dimensions(), layer.dimensions());

    for (x, y, src) in layer.enumerate_pixels() {
        if src[3] == 0 {
            // Fully transparent, skip
            continue;
        } else if src[3] == 255 {
            // Fully opaque, overwrite
            canvas.put_pixel(x, y, *src);
        } else {
            // Partial transparency, blend
            let dst = canvas.get_pixel(x, y);
            let blended = alpha_blend(src, dst);
            canvas.put_pixel(x, y, blended);
        }
    }
}

/// Alpha blend source over destination
fn alpha_blend(src: &Rgba<u8>, dst: &Rgba<u8>) -> Rgba<u8> {
    let src_a = src[3] as f32 / 255.0;
    let dst_a = dst[3] as f32 / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);

    if out_a == 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let blend = |s: u8, d: u8| -> u8 {
        let s_f = s as f32 / 255.0;
        let d_f = d as f32 / 255.0;
        let out = (s_f * src_a + d_f * dst_a * (1.0 - src_a)) / out_a;
        (out * 255.0).round() as u8
    };

    Rgba([
        blend(src[0], dst[0]),
        blend(src[1], dst[1]),
        blend(src[2], dst[2]),
        (out_a * 255.0).round() as u8,
    ])
}
