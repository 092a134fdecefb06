#![doc = r#"
rcrop: crop a fixed pixel rectangle out of an image and save it as a JPEG.

The stock run decodes `image.ppm` (any format the `image` crate can sniff from the
content), keeps the region with corners (81, 2) and (558, 479), and writes a
477x477 baseline JPEG at quality 92 to `rimage.ppm.jpg` next to the input.

Quick start: stock crop
-----------------------
```rust,no_run
use std::path::Path;

fn main() -> rcrop::Result<()> {
    let output = rcrop::process(Path::new("image.ppm"))?;
    assert_eq!(output, Path::new("rimage.ppm.jpg"));
    Ok(())
}
```

Overriding the parameters
-------------------------
```rust,no_run
use rcrop::{process_to_buffer, CropParams};

fn main() -> rcrop::Result<()> {
    let params = CropParams {
        crop_right: 320,
        crop_bottom: 240,
        jpeg_quality: 80,
        ..CropParams::for_input("frame.png")
    };

    let img = process_to_buffer(&params)?;
    println!("{}x{} {} JPEG, {} bytes", img.width, img.height, img.color, img.jpeg.len());
    Ok(())
}
```

Error handling
--------------
All public functions return `rcrop::Result<T>`; match on `rcrop::Error` to handle
specific cases. The crop rectangle is checked against the decoded image and
reported as `Error::CropOutOfBounds` rather than silently clamped.

```rust,no_run
use std::path::Path;
use rcrop::{process, Error};

fn main() {
    match process(Path::new("image.ppm")) {
        Ok(out) => println!("wrote {out:?}"),
        Err(Error::Open { path, .. }) => eprintln!("missing input {path:?}"),
        Err(Error::CropOutOfBounds { width, height, .. }) => {
            eprintln!("source too small: {width}x{height}")
        }
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level entry points.
- [`types`] — `CropRect` and `JpegColor`.
- [`io`] — image decoding and JPEG writers.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::{
    CropParams, DEFAULT_CROP_RECT, DEFAULT_INPUT_PATH, DEFAULT_JPEG_QUALITY, output_path_for,
};
pub use error::{Error, Result};
pub use types::{CropRect, JpegColor};

// Building blocks
pub use crate::core::processing::crop_image;
pub use io::reader::decode_image;

// High-level API re-exports
pub use api::{CroppedImage, process, process_to_buffer, process_with_params};
