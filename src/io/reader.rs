use std::path::Path;

use image::{DynamicImage, GenericImageView, ImageReader};
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Decode the image at `path`. The format is taken from the file content,
/// so a PNG named `image.ppm` still decodes.
pub fn decode_image(path: &Path) -> Result<DynamicImage> {
    let open_err = |source: std::io::Error| Error::Open {
        path: path.to_path_buf(),
        source,
    };

    let reader = ImageReader::open(path)
        .map_err(open_err)?
        .with_guessed_format()
        .map_err(open_err)?;
    debug!("Detected format {:?} for {:?}", reader.format(), path);

    let img = reader.decode().map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let (width, height) = img.dimensions();
    info!(
        "Decoded {:?}: {}x{} {:?}",
        path,
        width,
        height,
        img.color()
    );
    Ok(img)
}
