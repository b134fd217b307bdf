use clap::Parser;

/// Arguments for the new (component scaffold) command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Scaffold into the default comp/ directory:\n    compforge new HealthComponent\n\n\
                   Scaffold into another directory:\n    compforge new HudOverlay ui")]
pub struct NewArgs {
    /// Component class name (e.g. HealthComponent)
    pub name: String,

    /// Output directory for the header and implementation files
    #[arg(default_value = "comp")]
    pub dir: String,
}
