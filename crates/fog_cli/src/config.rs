//! Optional TOML configuration for the command-line driver.
//!
//! ```toml
//! [selfplay]
//! num_games = 20
//! max_moves = 300
//! seed = 42
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::match_runner::MatchConfig;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub selfplay: MatchConfig,
}

impl CliConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, String> {
        toml::from_str(contents).map_err(|e| format!("Failed to parse config: {}", e))
    }

    pub fn load(path: &Path) -> Result<Self, String> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        Self::from_toml_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let cfg = CliConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, CliConfig::default());
    }

    #[test]
    fn test_selfplay_section() {
        let cfg = CliConfig::from_toml_str(
            r#"
            [selfplay]
            num_games = 4
            seed = 9
            alternate_colors = false
            "#,
        )
        .unwrap();
        assert_eq!(cfg.selfplay.num_games, 4);
        assert_eq!(cfg.selfplay.seed, Some(9));
        assert!(!cfg.selfplay.alternate_colors);
        assert_eq!(cfg.selfplay.max_moves, 200);
    }

    #[test]
    fn test_bad_config_is_an_error() {
        assert!(CliConfig::from_toml_str("[selfplay]\nnum_games = \"many\"").is_err());
        assert!(CliConfig::load(Path::new("/nonexistent/fog.toml")).is_err());
    }
}
