use clap::Parser;
use std::path::PathBuf;

/// Arguments for the pack command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Pack a release directory:\n    compforge pack release.zip dist\n\n\
                   Pack a mix of files and directories:\n    compforge pack release.zip game.bin assets docs/README.md")]
pub struct PackArgs {
    /// Destination archive path (created or overwritten)
    pub archive: PathBuf,

    /// Files or directories to add; directories are added recursively
    #[arg(required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,
}
