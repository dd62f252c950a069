mod cli;
mod commands;

use clap::Parser;
use cli::Cli;

fn main() -> miette::Result<()> {
    let Cli {
        type_name,
        package,
        dest,
        verbose,
    } = Cli::parse();
    commands::generate::run(package, type_name, dest, verbose)
}
