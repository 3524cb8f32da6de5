//! flatcat binary entry point

use clap::Parser;
use std::process;

use flatcat_cli::Cli;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = cli.execute() {
        eprintln!("{err:#}");
        process::exit(1);
    }
}
