/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Main executable for phonon-dsf

use clap::Parser;
use phonon_dsf::cli::{self, Cli};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();
    log::info!("phonon-dsf v{}", phonon_dsf::VERSION);

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    cli::run(cli, &mut stdout.lock())?;

    Ok(())
}
