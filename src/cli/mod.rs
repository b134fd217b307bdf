//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - pack: Archive command arguments
//! - new: Component scaffold command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod new;
pub mod pack;

pub use completions::CompletionsArgs;
pub use new::NewArgs;
pub use pack::PackArgs;

/// compforge - game engine build workflow companion
///
/// Packs release archives and scaffolds component boilerplate for
/// component-based game engines.
#[derive(Parser, Debug)]
#[command(
    name = "compforge",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Build-workflow companion for component-based game engines",
    long_about = "compforge bundles the repetitive parts of a component-based game engine's \
                  build workflow: packing files and directories into release archives, and \
                  scaffolding the header/implementation/binding boilerplate for new components.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  compforge pack release.zip assets game.bin \x1b[90m# Pack files and directories\x1b[0m\n   \
                  compforge new HealthComponent             \x1b[90m# Scaffold into comp/\x1b[0m\n   \
                  compforge new Hud ui                      \x1b[90m# Scaffold into ui/\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Run as if invoked from this directory
    #[arg(
        long = "directory",
        short = 'C',
        global = true,
        env = "COMPFORGE_DIR",
        value_name = "DIR"
    )]
    pub directory: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Pack files and directories into a compressed archive
    Pack(PackArgs),

    /// Scaffold the source files for a new component
    New(NewArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
