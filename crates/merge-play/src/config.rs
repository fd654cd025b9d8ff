use std::path::Path;

use anyhow::{Context, Result};
use merge_engine::Direction;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub board: BoardConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct BoardConfig {
    #[serde(default = "defaults::rows")]
    pub rows: usize,
    #[serde(default = "defaults::cols")]
    pub cols: usize,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct SessionConfig {
    #[serde(default = "defaults::seed")]
    pub seed: u64,
    /// Upper bound on requested moves, effective or not.
    #[serde(default = "defaults::max_moves")]
    pub max_moves: usize,
    /// Directions to play in order. Empty cycles through all four.
    #[serde(default)]
    pub script: Vec<Direction>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: defaults::rows(),
            cols: defaults::cols(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: defaults::seed(),
            max_moves: defaults::max_moves(),
            script: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let cfg: Self = toml::from_str(contents)?;
        Ok(cfg)
    }
}

mod defaults {
    pub fn rows() -> usize {
        4
    }

    pub fn cols() -> usize {
        4
    }

    pub fn seed() -> u64 {
        42
    }

    pub fn max_moves() -> usize {
        1_000
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn loads_full_config_from_file() {
        let td = tempdir().unwrap();
        let path = td.path().join("play.toml");
        std::fs::write(
            &path,
            r#"
[board]
rows = 5
cols = 3

[session]
seed = 7
max_moves = 12
script = ["left", "u", "right", "down"]
"#,
        )
        .unwrap();

        let cfg = Config::from_toml(&path).expect("config parses");
        assert_eq!(cfg.board, BoardConfig { rows: 5, cols: 3 });
        assert_eq!(cfg.session.seed, 7);
        assert_eq!(cfg.session.max_moves, 12);
        assert_eq!(
            cfg.session.script,
            vec![Direction::Left, Direction::Up, Direction::Right, Direction::Down]
        );
    }

    #[test]
    fn missing_sections_use_defaults() {
        let cfg = Config::from_toml_str("[session]\nseed = 9\n").unwrap();
        assert_eq!(cfg.board, BoardConfig::default());
        assert_eq!(cfg.session.seed, 9);
        assert_eq!(cfg.session.max_moves, 1_000);
        assert!(cfg.session.script.is_empty());
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn rejects_unknown_direction() {
        let err = Config::from_toml_str("[session]\nscript = [\"north\"]\n").unwrap_err();
        assert!(err.to_string().contains("north"), "{err}");
    }

    #[test]
    fn missing_file_reports_path() {
        let td = tempdir().unwrap();
        let path = td.path().join("absent.toml");
        let err = Config::from_toml(&path).unwrap_err();
        assert!(err.to_string().contains("absent.toml"), "{err}");
    }
}
