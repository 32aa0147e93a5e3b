use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::session::engine::{DEFAULT_PREVIEW_WORDS, DEFAULT_SESSION_SECS};
use crate::session::{ExhaustionPolicy, SessionConfig};
use crate::store::leaderboard::DEFAULT_DISPLAY_LIMIT;
use crate::vocabulary::Tier;

const SESSION_SECS_RANGE: (u32, u32) = (5, 600);
const PREVIEW_WORDS_RANGE: (usize, usize) = (1, 50);
const LEADERBOARD_SIZE_RANGE: (usize, usize) = (1, 100);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tier: Tier,
    #[serde(default = "default_session_secs")]
    pub session_secs: u32,
    #[serde(default = "default_preview_words")]
    pub preview_words: usize,
    #[serde(default = "default_leaderboard_size")]
    pub leaderboard_size: usize,
    #[serde(default)]
    pub exhaustion_policy: ExhaustionPolicy,
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Last name typed into the save-score dialog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_name: Option<String>,
}

fn default_session_secs() -> u32 {
    DEFAULT_SESSION_SECS
}
fn default_preview_words() -> usize {
    DEFAULT_PREVIEW_WORDS
}
fn default_leaderboard_size() -> usize {
    DEFAULT_DISPLAY_LIMIT
}
fn default_theme() -> String {
    "terminal-default".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tier: Tier::default(),
            session_secs: default_session_secs(),
            preview_words: default_preview_words(),
            leaderboard_size: default_leaderboard_size(),
            exhaustion_policy: ExhaustionPolicy::default(),
            theme: default_theme(),
            player_name: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::default_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        config.validate();
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("keyrush")
            .join("config.toml")
    }

    /// Pull out-of-range numbers back into range and drop a blank name.
    pub fn validate(&mut self) {
        self.session_secs = self
            .session_secs
            .clamp(SESSION_SECS_RANGE.0, SESSION_SECS_RANGE.1);
        self.preview_words = self
            .preview_words
            .clamp(PREVIEW_WORDS_RANGE.0, PREVIEW_WORDS_RANGE.1);
        self.leaderboard_size = self
            .leaderboard_size
            .clamp(LEADERBOARD_SIZE_RANGE.0, LEADERBOARD_SIZE_RANGE.1);
        if self.theme.trim().is_empty() {
            self.theme = default_theme();
        }
        if self
            .player_name
            .as_deref()
            .is_some_and(|n| n.trim().is_empty())
        {
            self.player_name = None;
        }
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            duration_secs: self.session_secs,
            preview_words: self.preview_words,
            exhaustion_policy: self.exhaustion_policy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_serde_defaults_from_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.session_secs, 60);
        assert_eq!(config.preview_words, 15);
        assert_eq!(config.leaderboard_size, 10);
        assert_eq!(config.tier, Tier::Medium);
        assert_eq!(config.exhaustion_policy, ExhaustionPolicy::Reshuffle);
    }

    #[test]
    fn test_config_partial_file_keeps_other_defaults() {
        let toml_str = r#"
tier = "hard"
theme = "amber"
exhaustion_policy = "end_session"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.tier, Tier::Hard);
        assert_eq!(config.theme, "amber");
        assert_eq!(config.exhaustion_policy, ExhaustionPolicy::EndSession);
        assert_eq!(config.session_secs, 60);
        assert_eq!(config.player_name, None);
    }

    #[test]
    fn test_validate_clamps_out_of_range_values() {
        let mut config = Config {
            session_secs: 0,
            preview_words: 500,
            leaderboard_size: 0,
            theme: "  ".to_string(),
            player_name: Some(" ".to_string()),
            ..Config::default()
        };
        config.validate();
        assert_eq!(config.session_secs, 5);
        assert_eq!(config.preview_words, 50);
        assert_eq!(config.leaderboard_size, 1);
        assert_eq!(config.theme, "terminal-default");
        assert_eq!(config.player_name, None);
    }

    #[test]
    fn test_save_and_load_round_trip_on_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = Config {
            tier: Tier::Easy,
            session_secs: 30,
            player_name: Some("ada".to_string()),
            ..Config::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "tier = [").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_unknown_tier_is_an_error() {
        assert!(toml::from_str::<Config>(r#"tier = "expert""#).is_err());
    }

    #[test]
    fn test_session_config_mirrors_fields() {
        let config = Config {
            session_secs: 90,
            preview_words: 8,
            ..Config::default()
        };
        let session = config.session_config();
        assert_eq!(session.duration_secs, 90);
        assert_eq!(session.preview_words, 8);
    }
}
