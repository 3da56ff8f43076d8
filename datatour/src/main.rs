use std::io::{self, Write};

use datatour::{TourConfig, TourError};
use tracing::Level;

fn main() -> Result<(), TourError> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(Level::INFO)
        .init();

    let config = TourConfig::default();
    let mut out = io::stdout().lock();
    datatour::run(&config, &mut out)?;
    out.flush()?;
    Ok(())
}
