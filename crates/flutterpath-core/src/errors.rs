use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all flutterpath operations.
#[derive(Debug, Error, Diagnostic)]
pub enum FlutterPathError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The local.properties store does not exist.
    #[error("{} not found", .path.display())]
    #[diagnostic(help(
        "Create the file and set the Flutter SDK location, e.g.\n  flutter.sdk=/opt/flutter"
    ))]
    StoreNotFound { path: PathBuf },

    /// The store exists but could not be read or parsed.
    #[error("Failed to load {}: {message}", .path.display())]
    StoreUnreadable { path: PathBuf, message: String },

    /// The store is present but the required property is missing or blank.
    #[error("{key} property not set in {}", .path.display())]
    #[diagnostic(help("Add a line like `flutter.sdk=/opt/flutter` pointing at your Flutter SDK"))]
    PropertyNotSet { key: String, path: PathBuf },

    /// The resolved SDK directory does not look like a Flutter SDK.
    #[error("Flutter SDK error: {message}")]
    Sdk { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type FlutterPathResult<T> = miette::Result<T>;
