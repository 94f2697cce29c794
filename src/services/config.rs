use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONTACTS_FILE: &str = "contacts.json";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub contacts_file: Option<PathBuf>,
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Settings {
    /// `--file` beats the config file, which beats `./contacts.json`.
    pub fn contacts_file(&self, flag: Option<&Path>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .or_else(|| self.contacts_file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONTACTS_FILE))
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

pub fn config_path() -> Option<PathBuf> {
    let home = std::env::var_os("HOME")?;
    Some(PathBuf::from(home).join(".config/rolodex/config.toml"))
}

pub fn load_settings() -> anyhow::Result<Settings> {
    match config_path() {
        Some(path) => load_settings_from(&path),
        None => Ok(Settings::default()),
    }
}

pub fn load_settings_from(path: &Path) -> anyhow::Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let raw = std::fs::read_to_string(path)?;
    toml::from_str(&raw).map_err(|e| anyhow::anyhow!("invalid config {}: {}", path.display(), e))
}
