//! rcrop entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: crop `image.ppm` to
//! `rimage.ppm.jpg` and exit with a non-zero status on any failure.
//! For programmatic use, prefer the library API (`rcrop::api`).

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    cli::run()
}
