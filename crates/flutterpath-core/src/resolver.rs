//! Flutter SDK path resolution from `local.properties`.
//!
//! The resolution contract is a three-step guard chain: the store file must
//! exist, it must parse, and it must bind a non-blank `flutter.sdk` value.
//! Every failure is fatal and carries guidance for the developer; the store
//! is never written.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::errors::FlutterPathError;
use crate::properties::LocalProperties;
use crate::{fs, FLUTTER_SDK_KEY, LOCAL_PROPERTIES};

/// Paths into a resolved Flutter SDK installation.
#[derive(Debug, Clone, Serialize)]
pub struct FlutterSdk {
    pub root: PathBuf,
    pub flutter_tools_gradle_dir: PathBuf,
    pub flutter_bin: PathBuf,
    pub dart_bin: PathBuf,
}

impl FlutterSdk {
    /// Build paths from the SDK root directory.
    ///
    /// `flutter_tools_gradle_dir` is the Gradle project the Android build
    /// registers via `includeBuild`; the binaries live under `bin/`.
    pub fn from_root(root: PathBuf) -> Self {
        let flutter_tools_gradle_dir = root
            .join("packages")
            .join("flutter_tools")
            .join("gradle");
        let bin = root.join("bin");
        let (flutter, dart) = if cfg!(windows) {
            ("flutter.bat", "dart.bat")
        } else {
            ("flutter", "dart")
        };
        let flutter_bin = bin.join(flutter);
        let dart_bin = bin.join(dart);

        Self {
            root,
            flutter_tools_gradle_dir,
            flutter_bin,
            dart_bin,
        }
    }
}

/// Resolve the Flutter SDK for the project rooted at `project_dir`.
///
/// Reads `project_dir/local.properties` and returns the SDK paths bound to
/// its `flutter.sdk` entry.
pub fn resolve(project_dir: &Path) -> Result<FlutterSdk, FlutterPathError> {
    resolve_from_store(&project_dir.join(LOCAL_PROPERTIES))
}

/// Resolve the Flutter SDK from an explicit properties file.
pub fn resolve_from_store(store_path: &Path) -> Result<FlutterSdk, FlutterPathError> {
    let store = LocalProperties::load(store_path)?;

    let sdk_path = store
        .get(FLUTTER_SDK_KEY)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| FlutterPathError::PropertyNotSet {
            key: FLUTTER_SDK_KEY.to_string(),
            path: store_path.to_path_buf(),
        })?;

    tracing::debug!(
        "resolved {FLUTTER_SDK_KEY}={sdk_path} from {}",
        store_path.display()
    );
    Ok(FlutterSdk::from_root(PathBuf::from(sdk_path)))
}

/// Walk up from `start` to find the directory holding `local.properties`.
///
/// Lets the CLI run from anywhere inside the Android project tree.
pub fn find_project_dir(start: &Path) -> Option<PathBuf> {
    fs::find_ancestor_with(start, LOCAL_PROPERTIES)
}

/// Health inventory of a resolved SDK root.
#[derive(Debug, Clone, Serialize)]
pub struct SdkReport {
    pub root_exists: bool,
    pub flutter_bin_exists: bool,
    pub flutter_tools_gradle_exists: bool,
    pub version: Option<String>,
}

impl SdkReport {
    /// True when the root looks like a usable Flutter SDK checkout.
    pub fn is_healthy(&self) -> bool {
        self.root_exists && self.flutter_bin_exists && self.flutter_tools_gradle_exists
    }
}

/// Inspect the directory a resolution points at.
///
/// Purely informational: resolution itself never requires the SDK to exist,
/// matching the original consumer, which hands the path straight to Gradle.
pub fn inspect(sdk: &FlutterSdk) -> SdkReport {
    let root_exists = sdk.root.is_dir();
    let flutter_bin_exists = sdk.flutter_bin.is_file();
    let flutter_tools_gradle_exists = sdk.flutter_tools_gradle_dir.is_dir();

    // Flutter checkouts carry their release number in a top-level `version` file.
    let version = std::fs::read_to_string(sdk.root.join("version"))
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    if !root_exists {
        tracing::warn!("flutter.sdk points at {}, which does not exist", sdk.root.display());
    }

    SdkReport {
        root_exists,
        flutter_bin_exists,
        flutter_tools_gradle_exists,
        version,
    }
}
