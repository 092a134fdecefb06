use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::CropRect;

pub const DEFAULT_INPUT_PATH: &str = "image.ppm";
pub const DEFAULT_CROP_RECT: CropRect = CropRect::new(81, 2, 558, 479);
pub const DEFAULT_JPEG_QUALITY: u8 = 92;

const OUTPUT_PREFIX: &str = "r";
const OUTPUT_SUFFIX: &str = ".jpg";

/// Crop parameters suitable for config files and library presets.
/// `Default` reproduces the stock run: `image.ppm`, (81,2)-(558,479), quality 92.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropParams {
    pub input_path: PathBuf,
    pub crop_left: u32,
    pub crop_top: u32,
    /// Exclusive
    pub crop_right: u32,
    /// Exclusive
    pub crop_bottom: u32,
    /// 1..=100, higher is better fidelity
    pub jpeg_quality: u8,
}

impl Default for CropParams {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            crop_left: DEFAULT_CROP_RECT.left,
            crop_top: DEFAULT_CROP_RECT.top,
            crop_right: DEFAULT_CROP_RECT.right,
            crop_bottom: DEFAULT_CROP_RECT.bottom,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl CropParams {
    /// Stock parameters applied to a different input file.
    pub fn for_input(input: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input.into(),
            ..Self::default()
        }
    }

    pub fn rect(&self) -> CropRect {
        CropRect::new(self.crop_left, self.crop_top, self.crop_right, self.crop_bottom)
    }

    pub fn output_path(&self) -> PathBuf {
        output_path_for(&self.input_path)
    }

    pub fn validate(&self) -> Result<()> {
        if self.input_path.as_os_str().is_empty() {
            return Err(Error::InvalidArgument {
                arg: "input_path",
                value: String::new(),
            });
        }
        let rect = self.rect();
        if !rect.is_valid() {
            return Err(Error::InvalidCropRect { rect });
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(Error::InvalidArgument {
                arg: "jpeg_quality",
                value: self.jpeg_quality.to_string(),
            });
        }
        Ok(())
    }

    /// Parse params from JSON. Absent fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let params: CropParams = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Output location for `input`: same directory, file name prefixed with `r`
/// and suffixed with `.jpg` (`image.ppm` -> `rimage.ppm.jpg`).
pub fn output_path_for(input: &Path) -> PathBuf {
    let name = input.file_name().unwrap_or(input.as_os_str());
    let mut out = OsString::with_capacity(name.len() + OUTPUT_PREFIX.len() + OUTPUT_SUFFIX.len());
    out.push(OUTPUT_PREFIX);
    out.push(name);
    out.push(OUTPUT_SUFFIX);
    input.with_file_name(out)
}
