//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Covers the full failure taxonomy of a crop run: unreadable input, undecodable
//! content, crop rectangles that do not fit the source, and unwritable output.
use std::path::PathBuf;

use thiserror::Error;

use crate::types::CropRect;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Cannot open input {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot decode image {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Crop rectangle {rect} exceeds source image bounds {width}x{height}")]
    CropOutOfBounds { rect: CropRect, width: u32, height: u32 },

    #[error("Invalid crop rectangle {rect}: right/bottom must be greater than left/top")]
    InvalidCropRect { rect: CropRect },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("JPEG encoding error: {0}")]
    Encode(#[from] jpeg_encoder::EncodingError),

    #[error("Cannot write output {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid crop parameters: {0}")]
    Config(#[from] serde_json::Error),
}
