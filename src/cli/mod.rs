//! Binary-side layer for rcrop.
//!
//! The program takes no arguments: `runner` installs logging and runs the
//! stock crop of `image.ppm` into `rimage.ppm.jpg` in the working directory.
//!
//! If you are embedding rcrop into another application, prefer using the
//! library API (`rcrop::api`) instead of calling the CLI code.
pub mod runner;

pub use runner::run;
