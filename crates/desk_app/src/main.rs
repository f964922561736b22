mod app;
mod cli;
mod effects;
mod persistence;
mod render;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    app::run(cli)
}
