pub mod jpeg;

pub use jpeg::{encode_image_jpeg, encode_jpeg, write_jpeg_atomic};
