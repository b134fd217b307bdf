//! compforge - game engine build workflow companion
//!
//! A command line tool for component-based game engine build workflows:
//! packs files and directories into release archives, and scaffolds the
//! header/implementation/binding boilerplate for new engine components.

use clap::Parser;

mod archive;
mod cli;
mod commands;
mod error;
mod scaffold;
mod transaction;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Pack(args) => commands::pack::run(cli.directory, args),
        Commands::New(args) => commands::new::run(cli.directory, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
