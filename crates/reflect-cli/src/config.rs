use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{APP_DIR, JOURNAL_FILE};

#[derive(Debug, Serialize, Deserialize)]
pub struct ReflectConfig {
    pub journal: JournalSection,
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JournalSection {
    pub path: String,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct UiSection {
    #[serde(default)]
    pub date_format: DateFormat,
}

/// How entry timestamps are rendered in human output.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DateFormat {
    Full,
    #[default]
    Short,
}

impl DateFormat {
    pub fn render(self, millis: i64) -> String {
        match self {
            DateFormat::Full => reflect_core::format::format_full(millis),
            DateFormat::Short => reflect_core::format::format_short(millis),
        }
    }
}

impl ReflectConfig {
    pub fn new(journal_path: PathBuf) -> Self {
        Self {
            journal: JournalSection {
                path: journal_path.to_string_lossy().to_string(),
            },
            ui: UiSection::default(),
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_journal_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join(JOURNAL_FILE))
}

pub fn read_config(path: &Path) -> anyhow::Result<ReflectConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn write_config(path: &Path, config: &ReflectConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    xdg_dir("XDG_CONFIG_HOME", &[".config"])
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    xdg_dir("XDG_DATA_HOME", &[".local", "share"])
}

fn xdg_dir(var: &str, fallback: &[&str]) -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var(var) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join(APP_DIR));
        }
    }
    let mut dir = home_dir()?;
    for part in fallback {
        dir.push(part);
    }
    Ok(dir.join(APP_DIR))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_section_is_optional() {
        let config: ReflectConfig = toml::from_str("[journal]\npath = \"/tmp/j.db\"\n").unwrap();
        assert_eq!(config.journal.path, "/tmp/j.db");
        assert_eq!(config.ui.date_format, DateFormat::Short);
    }

    #[test]
    fn test_date_format_parses() {
        let config: ReflectConfig =
            toml::from_str("[journal]\npath = \"j.db\"\n\n[ui]\ndate_format = \"full\"\n").unwrap();
        assert_eq!(config.ui.date_format, DateFormat::Full);
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        write_config(&path, &ReflectConfig::new(PathBuf::from("/data/journal.db"))).unwrap();

        let loaded = read_config(&path).unwrap();
        assert_eq!(loaded.journal.path, "/data/journal.db");
    }
}
