use crate::config::Config;
use crate::config::migrate::fill_missing_fields;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, info, success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
        println!("📄 Current configuration ({}):\n", path.display());
        println!("{}", yaml);
        Ok(())
    }

    pub fn check(path: &Path) -> AppResult<()> {
        let added = fill_missing_fields(path)?;
        if added.is_empty() {
            success("Configuration file is complete.");
        } else {
            warning(format!(
                "Added missing configuration fields: {}",
                added.join(", ")
            ));
        }
        Ok(())
    }

    /// Open the config file with the requested editor, falling back to
    /// $EDITOR / $VISUAL / the platform default.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        if !path.exists() {
            Config::default().save(path)?;
        }

        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&editor_to_use).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited successfully using '{}'",
                    editor_to_use
                ));
                return Ok(());
            }
            _ if editor_to_use == default_editor => {
                error(format!("Failed to edit configuration file using '{}'", editor_to_use));
                return Err(AppError::Config(format!(
                    "no usable editor (tried '{}')",
                    editor_to_use
                )));
            }
            _ => warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                editor_to_use, default_editor
            )),
        }

        match Command::new(&default_editor).arg(path).status() {
            Ok(s) if s.success() => {
                info(format!(
                    "Configuration file edited successfully using fallback '{}'",
                    default_editor
                ));
                Ok(())
            }
            _ => {
                error(format!(
                    "Failed to edit configuration file using fallback '{}'",
                    default_editor
                ));
                Err(AppError::Config(format!(
                    "no usable editor (tried '{}' and '{}')",
                    editor_to_use, default_editor
                )))
            }
        }
    }
}
