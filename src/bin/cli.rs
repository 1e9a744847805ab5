// src/bin/cli.rs
use income_explorer::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let _guard = log::init();
    cli::run()
}
