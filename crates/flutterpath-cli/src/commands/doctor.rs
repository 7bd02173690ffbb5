use std::path::Path;

use console::Style;
use miette::Result;

use flutterpath_core::errors::FlutterPathError;
use flutterpath_core::{resolver, LocalProperties, FLUTTER_SDK_KEY};

fn ok(message: &str) {
    let green = Style::new().green().bold();
    println!("  {} {message}", green.apply_to("ok"));
}

fn fail(message: &str) {
    let red = Style::new().red().bold();
    println!("  {} {message}", red.apply_to("!!"));
}

pub fn exec(properties: Option<&Path>) -> Result<()> {
    let store_path = super::store_path(properties)?;
    println!("Checking Flutter SDK configuration");

    if !store_path.is_file() {
        fail(&format!("{} not found", store_path.display()));
        return Err(FlutterPathError::StoreNotFound { path: store_path }.into());
    }
    ok(&format!("store located: {}", store_path.display()));

    let store = LocalProperties::load(&store_path).inspect_err(|_| {
        fail("store could not be parsed");
    })?;
    ok(&format!("store parsed ({} entries)", store.len()));

    let sdk = resolver::resolve_from_store(&store_path).inspect_err(|_| {
        fail(&format!("{FLUTTER_SDK_KEY} not set"));
    })?;
    ok(&format!("{FLUTTER_SDK_KEY} = {}", sdk.root.display()));

    let report = resolver::inspect(&sdk);
    if report.root_exists {
        ok("SDK root exists");
    } else {
        fail(&format!("SDK root {} does not exist", sdk.root.display()));
    }
    if report.flutter_bin_exists {
        ok(&format!("flutter binary: {}", sdk.flutter_bin.display()));
    } else {
        fail(&format!("flutter binary missing: {}", sdk.flutter_bin.display()));
    }
    if report.flutter_tools_gradle_exists {
        ok(&format!(
            "flutter_tools Gradle project: {}",
            sdk.flutter_tools_gradle_dir.display()
        ));
    } else {
        fail(&format!(
            "flutter_tools Gradle project missing: {}",
            sdk.flutter_tools_gradle_dir.display()
        ));
    }
    if let Some(version) = &report.version {
        ok(&format!("Flutter {version}"));
    }

    if report.is_healthy() {
        println!("No problems found.");
        Ok(())
    } else {
        Err(FlutterPathError::Sdk {
            message: format!(
                "{} does not look like a Flutter SDK checkout",
                sdk.root.display()
            ),
        }
        .into())
    }
}
