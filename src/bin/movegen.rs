//! Movement Practice Binary
//!
//! Random sequences, focus-move combinations, and optional notes recording.
//!
//! Commands: sequence, focus <MOVE>, moves

use clap::Parser;
use movegen::cli::Cli;

fn main() {
    let cli = Cli::parse();
    movegen::log(cli.level());
    if let Err(e) = cli.run() {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}
