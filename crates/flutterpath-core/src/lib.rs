//! Flutter SDK location for Android builds.
//!
//! This crate resolves the Flutter SDK path that a Flutter Android project
//! declares in its `local.properties` file, with fail-fast diagnostics when
//! the file or the `flutter.sdk` entry is missing. It also models the Gradle
//! settings that consume the resolved path (plugin registrations and module
//! includes) so tooling can report on them without touching Gradle.

pub mod errors;
pub mod fs;
pub mod properties;
pub mod resolver;
pub mod settings;

pub use errors::FlutterPathError;
pub use properties::LocalProperties;
pub use resolver::FlutterSdk;

/// Name of the developer-local, version-control-excluded properties file.
pub const LOCAL_PROPERTIES: &str = "local.properties";

/// Key in `local.properties` holding the Flutter SDK installation path.
pub const FLUTTER_SDK_KEY: &str = "flutter.sdk";
