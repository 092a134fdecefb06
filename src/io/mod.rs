//! I/O layer: content-sniffing image decoding (`reader`) and JPEG `writers`
//! with atomic output.
pub mod reader;
pub use reader::decode_image;

pub mod writers;
