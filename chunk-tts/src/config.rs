//! chunk-tts configuration management.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tts_text::RuleSet;
use tts_text::rules::{default_discourse_markers, default_subordinators};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkTtsConfig {
    /// Maximum characters per chunk
    #[serde(default = "default_max_len")]
    pub max_len: usize,

    /// Override the built-in subordinator word list
    #[serde(default)]
    pub subordinators: Option<Vec<String>>,

    /// Override the built-in discourse-marker word list
    #[serde(default)]
    pub discourse_markers: Option<Vec<String>>,
}

fn default_max_len() -> usize {
    tts_text::DEFAULT_CHUNK_LIMIT
}

impl Default for ChunkTtsConfig {
    fn default() -> Self {
        Self {
            max_len: default_max_len(),
            subordinators: None,
            discourse_markers: None,
        }
    }
}

impl ChunkTtsConfig {
    /// Get the config file path: ~/.config/cli-programs/chunk-tts.toml
    pub fn config_path() -> Result<PathBuf> {
        let home = std::env::var("HOME").or_else(|_| std::env::var("USERPROFILE"))?;
        Ok(PathBuf::from(home)
            .join(".config")
            .join("cli-programs")
            .join("chunk-tts.toml"))
    }

    /// Load config from file, returning default if file doesn't exist
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: ChunkTtsConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Build the effective rule set: configured word lists where present,
    /// built-in lists otherwise.
    pub fn rule_set(&self) -> RuleSet {
        if self.subordinators.is_none() && self.discourse_markers.is_none() {
            return RuleSet::builtin().clone();
        }
        RuleSet::new(
            self.subordinators
                .clone()
                .unwrap_or_else(default_subordinators),
            self.discourse_markers
                .clone()
                .unwrap_or_else(default_discourse_markers),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ChunkTtsConfig::default();
        assert_eq!(config.max_len, 200);
        assert!(config.subordinators.is_none());
        assert!(config.discourse_markers.is_none());
    }

    #[test]
    fn test_config_path() {
        let path = ChunkTtsConfig::config_path();
        assert!(path.is_ok());
        let path = path.unwrap();
        assert!(path.ends_with("cli-programs/chunk-tts.toml"));
    }

    #[test]
    fn test_parse_config() {
        let toml_str = r#"
max_len = 150
subordinators = ["when", "while"]
"#;
        let config: ChunkTtsConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.max_len, 150);
        assert_eq!(
            config.subordinators,
            Some(vec!["when".to_string(), "while".to_string()])
        );
        assert!(config.discourse_markers.is_none());
    }

    #[test]
    fn test_parse_empty_config() {
        let config: ChunkTtsConfig = toml::from_str("").unwrap();
        assert_eq!(config.max_len, 200);
    }

    #[test]
    fn test_rule_set_uses_overrides() {
        let config = ChunkTtsConfig {
            max_len: 200,
            subordinators: Some(vec!["nachdem".to_string()]),
            discourse_markers: None,
        };
        let rules = config.rule_set();
        assert!(rules.subordinators().any(|w| w == "nachdem"));
        assert!(!rules.subordinators().any(|w| w == "when"));
        // built-in discourse markers are kept
        assert!(rules.discourse_markers().any(|w| w == "particularly"));
    }
}
