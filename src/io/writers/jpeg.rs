use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::{DynamicImage, GenericImageView};
use jpeg_encoder::{ColorType, Encoder};
use tempfile::{Builder, NamedTempFile};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::JpegColor;

/// Flatten `img` into 8-bit samples in the layout the encoder expects.
/// Grayscale sources stay single-channel; everything else becomes RGB, alpha dropped.
pub fn jpeg_samples(img: &DynamicImage) -> (JpegColor, Vec<u8>) {
    if img.color().has_color() {
        (JpegColor::Rgb, img.to_rgb8().into_raw())
    } else {
        (JpegColor::Luma, img.to_luma8().into_raw())
    }
}

fn jpeg_dimension(arg: &'static str, value: u32) -> Result<u16> {
    u16::try_from(value).map_err(|_| Error::InvalidArgument {
        arg,
        value: value.to_string(),
    })
}

pub fn encode_jpeg(
    data: &[u8],
    cols: u32,
    rows: u32,
    color: JpegColor,
    quality: u8,
) -> Result<Vec<u8>> {
    let width = jpeg_dimension("width", cols)?;
    let height = jpeg_dimension("height", rows)?;
    let color_type = match color {
        JpegColor::Luma => ColorType::Luma,
        JpegColor::Rgb => ColorType::Rgb,
    };

    let mut buf = Vec::new();
    let encoder = Encoder::new(&mut buf, quality);
    encoder.encode(data, width, height, color_type)?;
    debug!(
        "Encoded {}x{} {} JPEG at quality {}: {} bytes",
        cols,
        rows,
        color,
        quality,
        buf.len()
    );
    Ok(buf)
}

/// Encode a decoded image at `quality`, picking the color model from its pixel type.
pub fn encode_image_jpeg(img: &DynamicImage, quality: u8) -> Result<(JpegColor, Vec<u8>)> {
    let (cols, rows) = img.dimensions();
    let (color, samples) = jpeg_samples(img);
    let bytes = encode_jpeg(&samples, cols, rows, color, quality)?;
    Ok((color, bytes))
}

// Same creation mode as `File::create` (0666 minus umask), not tempfile's 0600.
fn create_output_temp(dir: &Path) -> std::io::Result<NamedTempFile> {
    Builder::new().make_in(dir, |path| {
        File::options().write(true).create_new(true).open(path)
    })
}

/// Write `bytes` to `output` through a temp file in the same directory.
/// The output either appears complete or not at all.
pub fn write_jpeg_atomic(output: &Path, bytes: &[u8]) -> Result<()> {
    let write_err = |source: std::io::Error| Error::Write {
        path: output.to_path_buf(),
        source,
    };

    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let tmp = create_output_temp(dir).map_err(write_err)?;
    {
        let mut writer = BufWriter::new(tmp.as_file());
        writer.write_all(bytes).map_err(write_err)?;
        writer.flush().map_err(write_err)?;
    }
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(output).map_err(|e| write_err(e.error))?;
    Ok(())
}
