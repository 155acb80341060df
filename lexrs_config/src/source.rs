//! Parameter sources the configuration is read from.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::info;

/// Read-only key-value contract of the external parameter store.
///
/// Keys are flat slash-separated paths. A `None` means the key is absent;
/// optional keys then take their documented defaults.
pub trait ParameterSource {
    fn read_string(&self, key: &str) -> Option<String>;
    fn read_int(&self, key: &str) -> Option<i64>;
}

/// Parameter source backed by a flat JSON object on disk.
///
/// The file lives at `~/lexrs/config.json` and maps parameter keys directly
/// to string or integer values.
pub struct FileParameterSource {
    values: serde_json::Map<String, Value>,
}

impl FileParameterSource {
    /// Load the config file from the default location.
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_dir()?.join("config.json");

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'lexrs init' to create config.",
                config_path.display()
            );
        }

        Self::from_path(&config_path)
    }

    /// Load a config file from an explicit path.
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let values: serde_json::Map<String, Value> = serde_json::from_str(&content)?;

        info!("Loaded {} parameters from {}", values.len(), path.display());
        Ok(Self { values })
    }

    fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("lexrs"))
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    /// Write the starter config template, refusing to overwrite an existing one.
    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        let config_template = r#"{
  "lex_configuration/user_id": "your-user-id",
  "lex_configuration/bot_name": "your-bot-name",
  "lex_configuration/bot_alias": "your-bot-alias",
  "aws_client_configuration/region": "us-east-1",
  "aws_client_configuration/connect_timeout_ms": 9000,
  "aws_client_configuration/request_timeout_ms": 9000
}"#;

        std::fs::write(&config_path, config_template)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Edit the config file and set your bot name, alias and user id");
        println!("   2. Run 'lexrs chat' to start a conversation");
        println!();
        println!("🔧 Optional keys:");
        println!("   - lex_configuration/content_type: request content type");
        println!("   - lex_configuration/accept_type: response accept type");
        println!("   - aws_client_configuration/region: runtime endpoint region");
        Ok(())
    }
}

impl ParameterSource for FileParameterSource {
    fn read_string(&self, key: &str) -> Option<String> {
        self.values
            .get(key)
            .and_then(Value::as_str)
            .map(ToString::to_string)
    }

    fn read_int(&self, key: &str) -> Option<i64> {
        self.values.get(key).and_then(Value::as_i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source_from_json(json: &str) -> FileParameterSource {
        let values: serde_json::Map<String, Value> =
            serde_json::from_str(json).unwrap_or_default();
        FileParameterSource { values }
    }

    #[test]
    fn reads_string_and_int_values() {
        let source = source_from_json(
            r#"{"lex_configuration/user_id": "u1", "aws_client_configuration/connect_timeout_ms": 1500}"#,
        );

        assert_eq!(
            source.read_string("lex_configuration/user_id"),
            Some("u1".to_string())
        );
        assert_eq!(
            source.read_int("aws_client_configuration/connect_timeout_ms"),
            Some(1500)
        );
    }

    #[test]
    fn mistyped_values_read_as_absent() {
        let source = source_from_json(
            r#"{"lex_configuration/user_id": 42, "aws_client_configuration/region": true}"#,
        );

        assert_eq!(source.read_string("lex_configuration/user_id"), None);
        assert_eq!(source.read_string("aws_client_configuration/region"), None);
        assert_eq!(source.read_int("lex_configuration/user_id"), Some(42));
    }

    #[test]
    fn missing_keys_read_as_absent() {
        let source = source_from_json("{}");

        assert_eq!(source.read_string("lex_configuration/bot_name"), None);
        assert_eq!(
            source.read_int("aws_client_configuration/request_timeout_ms"),
            None
        );
    }
}
