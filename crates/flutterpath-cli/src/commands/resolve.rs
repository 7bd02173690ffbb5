use std::path::Path;

use miette::Result;

use flutterpath_core::errors::FlutterPathError;
use flutterpath_core::resolver;

pub fn exec(properties: Option<&Path>, gradle: bool, format: &str) -> Result<()> {
    let store = super::store_path(properties)?;
    let sdk = resolver::resolve_from_store(&store)?;

    match format {
        "text" => {
            let path = if gradle {
                &sdk.flutter_tools_gradle_dir
            } else {
                &sdk.root
            };
            println!("{}", path.display());
        }
        "json" => {
            let json = serde_json::to_string_pretty(&sdk).map_err(|e| {
                FlutterPathError::Generic {
                    message: format!("Failed to serialize SDK paths: {e}"),
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
