use crate::config::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Compare the YAML file at `path` with the default configuration and add
/// every missing key with its default value. Unknown keys are left alone.
///
/// Returns the names of the keys that were added (empty → nothing to do).
pub fn fill_missing_fields(path: &Path) -> AppResult<Vec<String>> {
    if !path.exists() {
        Config::default().save(path)?;
        return Ok(default_mapping()?
            .keys()
            .filter_map(|k| k.as_str().map(str::to_string))
            .collect());
    }

    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let mut current: Value = if content.trim().is_empty() {
        Value::Mapping(Mapping::new())
    } else {
        serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))?
    };

    let map = current.as_mapping_mut().ok_or_else(|| {
        AppError::Config(format!("'{}' is not a YAML mapping", path.display()))
    })?;

    let mut added = Vec::new();
    for (key, value) in default_mapping()? {
        if !map.contains_key(&key) {
            if let Some(name) = key.as_str() {
                added.push(name.to_string());
            }
            map.insert(key, value);
        }
    }

    if !added.is_empty() {
        let yaml = serde_yaml::to_string(&current).map_err(|_| AppError::ConfigSave)?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)?;
    }

    Ok(added)
}

fn default_mapping() -> AppResult<Mapping> {
    match serde_yaml::to_value(Config::default()) {
        Ok(Value::Mapping(m)) => Ok(m),
        Ok(_) => Err(AppError::Config("default configuration is not a mapping".into())),
        Err(e) => Err(AppError::Config(e.to_string())),
    }
}
