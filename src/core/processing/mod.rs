pub mod crop;

pub use crop::crop_image;
