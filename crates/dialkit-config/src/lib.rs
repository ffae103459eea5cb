//! dialkit configuration and color parsing.
//!
//! Provides the hex color parser used by every control, plus TOML-based
//! configuration with validation. All config sections use sensible
//! defaults so partial configs work out of the box.

pub mod colors;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use colors::{parse_hex, try_parse_hex, validate_hex};
pub use schema::{DialkitConfig, CONFIG_SCHEMA_VERSION};

use dialkit_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path and validate it.
///
/// Creates a default `config.toml` if none exists.
pub fn load_config() -> Result<DialkitConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load and validate config from an explicit path.
pub fn load_config_from(path: &Path) -> Result<DialkitConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &DialkitConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&DialkitConfig::default());
        assert!(json.contains("\"colors\""));
        assert!(json.contains("\"slider\""));
        assert!(json.contains("\"carousel\""));
        assert!(json.contains("\"picker\""));
        assert!(json.contains("\"logging\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let json = config_to_json(&DialkitConfig::default());
        let parsed: DialkitConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.colors.tint, "#FF2D55");
        assert_eq!(parsed.picker.debounce_ms, 1000);
    }

    #[test]
    fn load_config_from_rejects_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[slider]\nlower = 1.0\nupper = 1.0\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }
}
