//! Experiment configuration.
//!
//! Resolution order (highest priority first):
//! 1. CLI flags (applied via `apply_overrides`)
//! 2. Config file (`--config`, or `regender.toml` when present)
//! 3. Compiled defaults

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    error::{ConfigError, Error},
    read::FileReader,
};

pub const DEFAULT_CONFIG_FILE: &str = "regender.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Prefix of the transformed table name. Default: "twitter_".
    pub table_prefix: Option<String>,
    /// Column holding the one-word features. Default: "feat".
    pub feature_column: Option<String>,
    /// Column holding the message id. Default: "group_id".
    pub group_column: Option<String>,
    pub paths: PathsConfig,
    pub selection: SelectionConfig,
    pub scorer: ScorerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PathsConfig {
    /// 1-gram feature table of the original messages.
    pub features: Option<PathBuf>,
    /// Category feature table used to pick the messages under study.
    pub categories: Option<PathBuf>,
    /// Lexicon scores of the original messages.
    pub original_scores: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SelectionConfig {
    /// Category feature a message must carry to be selected. Default: "SHEHE".
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ScorerConfig {
    /// Shell command template. Placeholders: `{table}`, `{features}`, `{scores}`.
    pub command: Option<String>,
    /// File name template of the score table the scorer produces.
    /// Default: "{table}_lex.csv".
    pub scores: Option<String>,
}

/// CLI values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub features: Option<PathBuf>,
    pub original_scores: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub scorer_command: Option<String>,
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|error| ConfigError::Parse(error.to_string()))
    }

    /// Loads `path` if given, otherwise `regender.toml` in the working
    /// directory when it exists, otherwise the defaults.
    pub async fn load(path: Option<&Path>) -> Result<Self, Error> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !tokio::fs::try_exists(&fallback).await.unwrap_or(false) {
                    tracing::debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
                fallback
            }
        };

        let mut reader = FileReader::new();
        let mut buffer = String::new();

        reader.open(&path).await.map_err(|error| match error {
            Error::Io(io) => ConfigError::File {
                path: path.clone(),
                kind: io.kind(),
            }
            .into(),
            other => other,
        })?;
        reader.read_into(&mut buffer).await?;

        tracing::info!(path = %path.display(), "loaded config");
        Ok(Self::from_toml(&buffer)?)
    }

    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(features) = &overrides.features {
            self.paths.features = Some(features.clone());
        }
        if let Some(scores) = &overrides.original_scores {
            self.paths.original_scores = Some(scores.clone());
        }
        if let Some(dir) = &overrides.output_dir {
            self.paths.output_dir = Some(dir.clone());
        }
        if let Some(command) = &overrides.scorer_command {
            self.scorer.command = Some(command.clone());
        }
    }

    pub fn effective_table_prefix(&self) -> &str {
        self.table_prefix.as_deref().unwrap_or("twitter_")
    }

    pub fn effective_feature_column(&self) -> &str {
        self.feature_column.as_deref().unwrap_or("feat")
    }

    pub fn effective_group_column(&self) -> &str {
        self.group_column.as_deref().unwrap_or("group_id")
    }

    pub fn effective_category(&self) -> &str {
        self.selection.category.as_deref().unwrap_or("SHEHE")
    }

    pub fn effective_features(&self) -> PathBuf {
        self.paths
            .features
            .clone()
            .unwrap_or_else(|| PathBuf::from("feat_1gram.csv"))
    }

    pub fn effective_original_scores(&self) -> PathBuf {
        self.paths
            .original_scores
            .clone()
            .unwrap_or_else(|| PathBuf::from("original_scores.csv"))
    }

    pub fn effective_output_dir(&self) -> PathBuf {
        self.paths
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn effective_scores_template(&self) -> &str {
        self.scorer.scores.as_deref().unwrap_or("{table}_lex.csv")
    }

    /// Name of the transformed table for `operation`.
    pub fn table_name(&self, operation: &str) -> String {
        format!("{}{operation}", self.effective_table_prefix())
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::{Config, Overrides};
    use crate::error::{ConfigError, Error};

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.effective_table_prefix(), "twitter_");
        assert_eq!(config.effective_feature_column(), "feat");
        assert_eq!(config.effective_group_column(), "group_id");
        assert_eq!(config.effective_category(), "SHEHE");
        assert_eq!(config.effective_scores_template(), "{table}_lex.csv");
        assert_eq!(config.table_name("swap"), "twitter_swap");
        assert!(config.scorer.command.is_none());
    }

    #[test]
    fn test_config_from_toml() {
        let config = Config::from_toml(
            r#"
            table_prefix = "reddit_"

            [paths]
            features = "data/1gram.csv"

            [scorer]
            command = "score {features} > {scores}"
            "#,
        )
        .unwrap();

        assert_eq!(config.table_name("m2f"), "reddit_m2f");
        assert_eq!(config.effective_features(), PathBuf::from("data/1gram.csv"));
        assert_eq!(
            config.scorer.command.as_deref(),
            Some("score {features} > {scores}")
        );
        assert_eq!(config.effective_feature_column(), "feat");
    }

    #[test]
    fn test_config_invalid_toml() {
        let result = Config::from_toml("table_prefix = [");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_config_overrides() {
        let mut config = Config::from_toml("[paths]\nfeatures = \"a.csv\"\n").unwrap();
        config.apply_overrides(&Overrides {
            features: Some(PathBuf::from("b.csv")),
            output_dir: Some(PathBuf::from("out")),
            ..Default::default()
        });

        assert_eq!(config.effective_features(), PathBuf::from("b.csv"));
        assert_eq!(config.effective_output_dir(), PathBuf::from("out"));
        assert_eq!(
            config.effective_original_scores(),
            PathBuf::from("original_scores.csv")
        );
    }

    #[tokio::test]
    async fn test_config_load_missing_file() {
        let result = Config::load(Some(Path::new("does/not/exist.toml"))).await;
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::File { .. }))
        ));
    }
}
