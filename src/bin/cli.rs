// src/bin/cli.rs
use booth_scout::cli;
use color_eyre::eyre::eyre;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    // logging starts once `--store` is known
    cli::run().map_err(|e| eyre!("{e}"))
}
