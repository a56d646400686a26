//! ConfigStore - Local Configuration Storage

use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::{de::DeserializeOwned, Serialize};

use crate::helpers::get_or_create_config_dir;

/// Load a JSON config file from `dir`; a missing file yields `None`
pub fn load_config_from<T: DeserializeOwned>(dir: &Path, filename: &str) -> Result<Option<T>> {
    let path = dir.join(filename);

    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)?;
    let config: T = serde_json::from_str(&content)?;
    Ok(Some(config))
}

/// Save a JSON config file into `dir` without blocking the caller's thread
pub async fn save_config_to_async<T: Serialize>(dir: &Path, filename: &str, config: &T) -> Result<()> {
    let path = dir.join(filename);
    let content = serde_json::to_string_pretty(config)?;
    smol::fs::write(&path, content).await?;
    Ok(())
}

/// Load a JSON config file from the application config directory
pub fn load_config<T: DeserializeOwned>(filename: &str) -> Result<Option<T>> {
    let dir = get_or_create_config_dir()?;
    load_config_from(&dir, filename)
}

/// Save a JSON config file into the application config directory asynchronously
pub async fn save_config_async<T: Serialize>(filename: &str, config: &T) -> Result<()> {
    let dir = get_or_create_config_dir()?;
    save_config_to_async(&dir, filename, config).await
}
