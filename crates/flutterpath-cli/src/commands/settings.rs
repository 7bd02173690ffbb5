use miette::Result;

use flutterpath_core::errors::FlutterPathError;
use flutterpath_core::settings::SettingsModel;

pub fn exec(format: &str) -> Result<()> {
    let model = SettingsModel::flutter_android();

    match format {
        "text" => {
            println!("Plugins:");
            for plugin in &model.plugins {
                let apply = if plugin.apply { "" } else { " (apply false)" };
                println!("  {} {}{apply}", plugin.id, plugin.version);
            }
            println!("Includes:");
            for module in &model.includes {
                println!("  {module}");
            }
            println!("Plugin repositories:");
            for repo in &model.repositories {
                println!("  {repo}");
            }
        }
        "json" => {
            let json = serde_json::to_string_pretty(&model).map_err(|e| {
                FlutterPathError::Generic {
                    message: format!("Failed to serialize settings: {e}"),
                }
            })?;
            println!("{json}");
        }
        other => {
            return Err(FlutterPathError::Generic {
                message: format!("Unknown format '{other}' (expected text or json)"),
            }
            .into());
        }
    }
    Ok(())
}
