use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_start")]
    pub default_start: String,
    #[serde(default = "default_report_title")]
    pub report_title: String,
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
    #[serde(default = "default_file_stem")]
    pub file_stem: String,
    #[serde(default = "default_format")]
    pub default_format: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_start() -> String {
    "06:15 AM".to_string()
}
fn default_report_title() -> String {
    "Time Difference Report".to_string()
}
fn default_export_dir() -> String {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .to_string_lossy()
        .to_string()
}
fn default_file_stem() -> String {
    "time_difference_report".to_string()
}
fn default_format() -> String {
    "pdf".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_start: default_start(),
            report_title: default_report_title(),
            export_dir: default_export_dir(),
            file_stem: default_file_stem(),
            default_format: default_format(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimediff")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rtimediff")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimediff.conf")
    }

    /// Config file to use: the `--config` override or the standard location
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        match custom {
            Some(p) => crate::utils::path::expand_tilde(p),
            None => Self::config_file(),
        }
    }

    /// First char of `separator_char`, used to underline table headers
    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content).map_err(|e| {
            AppError::Config(format!("cannot parse '{}': {}", path.display(), e))
        })
    }

    /// Write this configuration to `path`, creating the parent directory.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Initialize the configuration file with defaults (existing files are kept).
    pub fn init_all(path: &Path, is_test: bool) -> AppResult<()> {
        if path.exists() {
            if !is_test {
                success(format!("Config file already present: {}", path.display()));
            }
            return Ok(());
        }

        Config::default().save(path)?;

        if !is_test {
            success(format!("Config file: {}", path.display()));
        }

        Ok(())
    }
}
