//! Tipper Maint - periodic maintenance tracking for mine-site tipper fleets

use clap::Parser;
use tipper_maint::cli::Cli;
use tipper_maint::commands;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
