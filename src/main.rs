mod app;
mod cli;
mod config;
mod consts;
mod error;
mod metadata;
mod record;
mod report;
mod scan;
mod utils;

use clap::Parser;

use cli::Cli;
use config::Config;

fn main() {
    let cli = Cli::parse().with_config(&Config::load_quiet());

    if let Err(err) = app::run(&cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
