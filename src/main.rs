mod app;
mod cli;
mod domain;
mod infra;
#[cfg(test)]
mod test_support;
mod ui;
mod usecases;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    ui::terminal::install_panic_hook();

    let cli = cli::Cli::parse();
    app::run(cli)
}
