//! Static model of the Gradle settings that consume the resolved SDK path.
//!
//! The Android embedding's `settings.gradle.kts` registers a fixed set of
//! plugins, repositories, and one included module. None of that is behavior
//! this crate executes; it is declarative data mirrored here so the CLI can
//! report what the build wires up.

use serde::Serialize;

/// A Gradle plugin registration from the `plugins {}` block.
#[derive(Debug, Clone, Serialize)]
pub struct PluginSpec {
    pub id: String,
    pub version: String,
    /// `apply false` plugins are declared for the classpath but activated by
    /// individual modules.
    pub apply: bool,
}

impl PluginSpec {
    fn new(id: &str, version: &str, apply: bool) -> Self {
        Self {
            id: id.to_string(),
            version: version.to_string(),
            apply,
        }
    }
}

/// The declarative content of a Flutter Android `settings.gradle.kts`.
#[derive(Debug, Clone, Serialize)]
pub struct SettingsModel {
    pub plugins: Vec<PluginSpec>,
    pub includes: Vec<String>,
    pub repositories: Vec<String>,
}

impl SettingsModel {
    /// The settings scaffolded by the Flutter Android embedding template,
    /// including the FlutterFire Google Services registration.
    pub fn flutter_android() -> Self {
        Self {
            plugins: vec![
                PluginSpec::new("dev.flutter.flutter-plugin-loader", "1.0.0", true),
                PluginSpec::new("com.android.application", "8.9.1", false),
                PluginSpec::new("com.google.gms.google-services", "4.3.15", false),
                PluginSpec::new("org.jetbrains.kotlin.android", "2.1.0", false),
            ],
            includes: vec![":app".to_string()],
            repositories: vec![
                "google".to_string(),
                "mavenCentral".to_string(),
                "gradlePluginPortal".to_string(),
            ],
        }
    }
}
