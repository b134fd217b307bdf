//! New (component scaffold) command implementation

use std::path::PathBuf;

use crate::cli::NewArgs;
use crate::error::Result;
use crate::scaffold::{ComponentSpec, ScaffoldPlan};

/// Run new command.
///
/// Prints the build-variable append lines for the paths that were (or would
/// be) generated, then writes the scaffold. The report comes first so the
/// lines are available for build-file integration even when the run aborts
/// on pre-existing files.
pub fn run(directory: Option<PathBuf>, args: NewArgs) -> Result<()> {
    let base = directory.unwrap_or_else(|| PathBuf::from("."));

    let spec = ComponentSpec::new(&args.name, &args.dir)?;
    let plan = ScaffoldPlan::for_spec(&spec);

    for file in plan.files() {
        println!("{:<17} += {}", file.kind.build_var(), file.path);
    }

    plan.write(&base)
}
