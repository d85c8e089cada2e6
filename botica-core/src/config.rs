//! Configuration management
//!
//! Compatible with the desktop app's settings.json format:
//! ```json
//! {
//!   "app": { "demoMode": false },
//!   "ingest": { "delimiter": ";" },
//!   "headerAliases": { "transactions": { "date": ["FECHA"] }, "categories": {} }
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::result::Result;
use crate::schema::{HeaderAliases, Schema};

pub const SETTINGS_FILE: &str = "settings.json";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
    #[serde(default)]
    ingest: IngestSettings,
    #[serde(default)]
    header_aliases: HeaderAliases,
    /// Sections other frontends manage; preserved verbatim on save
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default)]
    demo_mode: bool,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IngestSettings {
    /// Column separator override; exports default to ";"
    #[serde(default)]
    delimiter: Option<String>,
}

/// Botica configuration (simplified view of settings)
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub demo_mode: bool,
    pub delimiter: Option<String>,
    pub header_aliases: HeaderAliases,
}

impl Config {
    /// Load config from the data directory
    ///
    /// Demo mode can be enabled via:
    /// 1. Settings file (botica demo on)
    /// 2. Environment variable BOTICA_DEMO_MODE (for CI/testing)
    pub fn load(data_dir: &Path) -> Result<Self> {
        let settings_path = data_dir.join(SETTINGS_FILE);

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        let demo_mode = match std::env::var("BOTICA_DEMO_MODE").ok().as_deref() {
            Some("true" | "1" | "yes" | "TRUE" | "YES") => true,
            Some("false" | "0" | "no" | "FALSE" | "NO") => false,
            _ => raw.app.demo_mode,
        };

        Ok(Self {
            demo_mode,
            delimiter: raw.ingest.delimiter,
            header_aliases: raw.header_aliases,
        })
    }

    /// Save config to the data directory, preserving settings the CLI does
    /// not manage
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        let settings_path = data_dir.join(SETTINGS_FILE);

        let mut settings = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str::<SettingsFile>(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        settings.app.demo_mode = self.demo_mode;
        settings.ingest.delimiter = self.delimiter.clone();
        settings.header_aliases = self.header_aliases.clone();

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }

    /// Enable demo mode
    pub fn enable_demo_mode(&mut self) {
        self.demo_mode = true;
    }

    /// Disable demo mode
    pub fn disable_demo_mode(&mut self) {
        self.demo_mode = false;
    }

    /// Configured column separator as a byte, ";" when unset.
    ///
    /// Multi-character values fall back to the first byte; the exports never
    /// use multi-byte separators.
    pub fn delimiter_byte(&self) -> u8 {
        self.delimiter
            .as_deref()
            .and_then(|s| s.bytes().next())
            .unwrap_or(b';')
    }

    /// The header schema with configured aliases applied
    pub fn schema(&self) -> Schema {
        Schema::standard().with_aliases(&self.header_aliases)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_missing_settings_load_as_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert!(!config.demo_mode);
        assert!(config.delimiter.is_none());
        assert_eq!(config.delimiter_byte(), b';');
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::load(dir.path()).unwrap();
        config.enable_demo_mode();
        config.delimiter = Some(",".to_string());
        config.save(dir.path()).unwrap();

        let reloaded = Config::load(dir.path()).unwrap();
        assert!(reloaded.demo_mode);
        assert_eq!(reloaded.delimiter_byte(), b',');
    }

    #[test]
    fn test_save_preserves_unmanaged_sections() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(SETTINGS_FILE),
            r#"{ "app": { "demoMode": false, "theme": "dark" }, "dashboard": { "layout": "wide" } }"#,
        )
        .unwrap();

        let mut config = Config::load(dir.path()).unwrap();
        config.enable_demo_mode();
        config.save(dir.path()).unwrap();

        let content = std::fs::read_to_string(dir.path().join(SETTINGS_FILE)).unwrap();
        assert!(content.contains("\"theme\""));
        assert!(content.contains("\"dashboard\""));
        assert!(content.contains("\"demoMode\": true"));
    }

    #[test]
    fn test_corrupt_settings_fall_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(SETTINGS_FILE), "{ nope").unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert!(!config.demo_mode);
    }

    #[test]
    fn test_header_aliases_feed_the_schema() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(SETTINGS_FILE),
            r#"{ "headerAliases": { "transactions": { "date": ["FECHA"] } } }"#,
        )
        .unwrap();

        let config = Config::load(dir.path()).unwrap();
        let schema = config.schema();
        let row = [("FECHA".to_string(), "01/03/2025".to_string())]
            .into_iter()
            .collect();
        assert!(schema.is_transactions(&row));
    }
}
