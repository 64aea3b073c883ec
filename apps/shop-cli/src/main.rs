//! `shop` binary entry point. See [`shop_cli`] for the run sequence.

use clap::Parser;
use shop_cli::cli::Cli;

fn main() -> std::process::ExitCode {
    shop_cli::run(Cli::parse())
}
