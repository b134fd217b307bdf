//! Pack command implementation

use std::path::PathBuf;

use console::style;

use crate::archive;
use crate::cli::PackArgs;
use crate::error::Result;

/// Run pack command
pub fn run(directory: Option<PathBuf>, args: PackArgs) -> Result<()> {
    let base = directory.unwrap_or_else(|| PathBuf::from("."));
    let summary = archive::create_archive(&base, &args.archive, &args.inputs)?;

    println!(
        "Created {} ({} entr{})",
        style(args.archive.display()).bold(),
        summary.entries,
        if summary.entries == 1 { "y" } else { "ies" }
    );

    Ok(())
}
