use std::path::{Path, PathBuf};

use tokio::process::Command;

use crate::error::{Error, ScorerError};

/// Runs the external lexicon scorer over a transformed feature table.
#[derive(Clone, Debug)]
pub struct Scorer {
    template: String,
}

impl Scorer {
    pub fn new<S: Into<String>>(template: S) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Fills `{table}`, `{features}` and `{scores}` in the command template.
    pub fn render(&self, table: &str, features: &Path, scores: &Path) -> String {
        self.template
            .replace("{table}", table)
            .replace("{features}", &features.display().to_string())
            .replace("{scores}", &scores.display().to_string())
    }

    /// Runs the scorer through `sh -c` and returns the score table path once
    /// the command exits successfully.
    pub async fn run(&self, table: &str, features: &Path, scores: &Path) -> Result<PathBuf, Error> {
        let command = self.render(table, features, scores);
        tracing::info!(%command, "running scorer");

        let output = Command::new("sh")
            .arg("-c")
            .arg(&command)
            .output()
            .await
            .map_err(|error| ScorerError::Spawn(error.kind()))?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        stdout.lines().for_each(|line| tracing::debug!(target: "scorer", "{line}"));
        stderr.lines().for_each(|line| tracing::debug!(target: "scorer", "{line}"));

        if !output.status.success() {
            return Err(ScorerError::Failed {
                code: output.status.code().unwrap_or(-1),
                message: stderr.lines().last().unwrap_or("unknown error").to_string(),
            }
            .into());
        }

        Ok(scores.to_path_buf())
    }
}

/// Fills `{table}` in a file name template.
pub fn scores_file_name(template: &str, table: &str) -> String {
    template.replace("{table}", table)
}
