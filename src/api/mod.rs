//! High-level, ergonomic library API: crop an image file to a JPEG on disk or
//! to an in-memory buffer. Prefer these entrypoints over the low-level
//! `core` and `io` modules when integrating rcrop.
use std::path::{Path, PathBuf};

use image::GenericImageView;
use tracing::info;

use crate::core::params::CropParams;
use crate::core::processing::crop_image;
use crate::error::Result;
use crate::io::reader::decode_image;
use crate::io::writers::jpeg::{encode_image_jpeg, write_jpeg_atomic};
use crate::types::JpegColor;

/// Result of in-memory processing
#[derive(Debug, Clone)]
pub struct CroppedImage {
    pub width: u32,
    pub height: u32,
    pub color: JpegColor,
    pub jpeg: Vec<u8>, // encoded JFIF stream
}

/// Crop `input` with the stock rect and quality and write `r<name>.jpg` next to it.
/// Returns the output path.
pub fn process(input: &Path) -> Result<PathBuf> {
    process_with_params(&CropParams::for_input(input))
}

/// Decode, crop and encode according to `params` (no disk write)
pub fn process_to_buffer(params: &CropParams) -> Result<CroppedImage> {
    params.validate()?;

    let img = decode_image(&params.input_path)?;
    let cropped = crop_image(&img, params.rect())?;
    drop(img);

    let (width, height) = cropped.dimensions();
    let (color, jpeg) = encode_image_jpeg(&cropped, params.jpeg_quality)?;

    Ok(CroppedImage {
        width,
        height,
        color,
        jpeg,
    })
}

/// Full run: decode, crop, encode and write to `params.output_path()`.
/// Nothing is written unless every earlier step succeeds.
pub fn process_with_params(params: &CropParams) -> Result<PathBuf> {
    let output = params.output_path();
    info!("Processing: {:?} -> {:?}", params.input_path, output);

    let cropped = process_to_buffer(params)?;
    write_jpeg_atomic(&output, &cropped.jpeg)?;

    info!(
        "Wrote {}x{} JPEG ({} bytes) to {:?}",
        cropped.width,
        cropped.height,
        cropped.jpeg.len(),
        output
    );
    Ok(output)
}
