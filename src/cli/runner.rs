use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;

use rcrop::DEFAULT_INPUT_PATH;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let input = Path::new(DEFAULT_INPUT_PATH);
    let output = rcrop::process(input)?;
    info!("Successfully processed: {:?} -> {:?}", input, output);

    Ok(())
}
