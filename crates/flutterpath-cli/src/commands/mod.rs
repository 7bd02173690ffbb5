//! Command dispatch and handler modules.

mod doctor;
mod resolve;
mod settings;

use std::path::{Path, PathBuf};

use miette::Result;

use flutterpath_core::errors::FlutterPathError;
use flutterpath_core::{resolver, LOCAL_PROPERTIES};

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Resolve {
            properties,
            gradle,
            format,
        } => resolve::exec(properties.as_deref(), gradle, &format),
        Command::Doctor { properties } => doctor::exec(properties.as_deref()),
        Command::Settings { format } => settings::exec(&format),
    }
}

/// Pick the properties store to read: an explicit `--properties` path, or the
/// nearest `local.properties` above the working directory.
fn store_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().map_err(FlutterPathError::Io)?;
    let project_dir = resolver::find_project_dir(&cwd).unwrap_or(cwd);
    let path = project_dir.join(LOCAL_PROPERTIES);
    tracing::debug!("using properties store {}", path.display());
    Ok(path)
}
