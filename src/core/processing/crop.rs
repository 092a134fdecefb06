use image::{DynamicImage, GenericImageView};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::types::CropRect;

/// Copy the `rect` region out of `img`.
///
/// Fails with `CropOutOfBounds` when the rect reaches past the source edges
/// instead of letting the image library clamp it.
pub fn crop_image(img: &DynamicImage, rect: CropRect) -> Result<DynamicImage> {
    if !rect.is_valid() {
        return Err(Error::InvalidCropRect { rect });
    }

    let (width, height) = img.dimensions();
    if !rect.fits_within(width, height) {
        return Err(Error::CropOutOfBounds {
            rect,
            width,
            height,
        });
    }

    debug!("Cropping {}x{} source to {}", width, height, rect);
    let cropped = img.crop_imm(rect.left, rect.top, rect.width(), rect.height());
    info!("Cropped to {}x{}", cropped.width(), cropped.height());

    Ok(cropped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn gradient(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
        }))
    }

    #[test]
    fn crops_stock_rect_to_477_square() {
        let img = gradient(640, 480);
        let out = crop_image(&img, CropRect::new(81, 2, 558, 479)).unwrap();
        assert_eq!(out.dimensions(), (477, 477));
    }

    #[test]
    fn keeps_pixels_at_offset() {
        let img = gradient(640, 480);
        let out = crop_image(&img, CropRect::new(81, 2, 558, 479)).unwrap();
        assert_eq!(out.get_pixel(0, 0), img.get_pixel(81, 2));
        assert_eq!(out.get_pixel(476, 476), img.get_pixel(557, 478));
    }

    #[test]
    fn exact_fit_is_allowed() {
        let img = gradient(558, 479);
        assert!(crop_image(&img, CropRect::new(81, 2, 558, 479)).is_ok());
    }

    #[test]
    fn too_narrow_source_is_rejected() {
        let img = gradient(557, 480);
        match crop_image(&img, CropRect::new(81, 2, 558, 479)) {
            Err(Error::CropOutOfBounds { width, height, .. }) => {
                assert_eq!((width, height), (557, 480));
            }
            other => panic!("expected CropOutOfBounds, got {:?}", other.map(|i| i.dimensions())),
        }
    }

    #[test]
    fn too_short_source_is_rejected() {
        let img = gradient(640, 478);
        assert!(matches!(
            crop_image(&img, CropRect::new(81, 2, 558, 479)),
            Err(Error::CropOutOfBounds { .. })
        ));
    }

    #[test]
    fn empty_rect_is_rejected() {
        let img = gradient(64, 64);
        assert!(matches!(
            crop_image(&img, CropRect::new(10, 10, 10, 20)),
            Err(Error::InvalidCropRect { .. })
        ));
    }
}
