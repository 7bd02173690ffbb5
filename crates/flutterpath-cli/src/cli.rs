//! CLI argument definitions for flutterpath.
//!
//! Uses `clap` derive macros to define the full command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "flutterpath",
    version,
    about = "Locate the Flutter SDK configured for a Flutter Android build",
    long_about = "flutterpath resolves the Flutter SDK path a Flutter Android project declares \
                  via the flutter.sdk entry in local.properties, and diagnoses the usual \
                  misconfigurations (missing file, malformed file, unset property)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve and print the Flutter SDK path
    Resolve {
        /// Read this properties file instead of searching for local.properties
        #[arg(long)]
        properties: Option<PathBuf>,
        /// Print the flutter_tools Gradle project path instead of the SDK root
        #[arg(long)]
        gradle: bool,
        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Diagnose the SDK configuration step by step
    Doctor {
        /// Read this properties file instead of searching for local.properties
        #[arg(long)]
        properties: Option<PathBuf>,
    },

    /// Show the plugin registrations and module includes the build wires up
    Settings {
        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
