use std::path::{Path, PathBuf};

use regender::Gender;
use serde::Serialize;

use crate::{
    config::Config,
    error::{ConfigError, Error},
    read::{read_file, write_file},
    score::{compare, scores_from_csv, Comparison},
    scorer::{scores_file_name, Scorer},
    table::{BaseTable, FeatureTable, Remap},
};

/// One pronoun-swap run: transform the feature table, re-score it and
/// compare against the original scores.
#[derive(Debug)]
pub struct Experiment {
    config: Config,
    operation: String,
    from: Gender,
    to: Gender,
    swap: bool,
    skip_scoring: bool,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Summary {
    pub operation: String,
    pub table: String,
    pub from: String,
    pub to: String,
    pub messages: usize,
    pub rows: usize,
    pub rewritten: usize,
    pub compared: usize,
    pub average: f64,
    pub scores: PathBuf,
}

/// Output of the transform step.
#[derive(Debug)]
pub struct Transformed {
    pub base: Option<BaseTable>,
    pub features: FeatureTable,
    pub rewritten: usize,
    pub path: PathBuf,
}

impl Experiment {
    pub fn new<S: Into<String>>(config: Config, operation: S, from: Gender, to: Gender) -> Self {
        Self {
            config,
            operation: operation.into(),
            from,
            to,
            swap: false,
            skip_scoring: false,
        }
    }

    /// Exchange pronouns in both directions instead of `from` -> `to` only.
    pub fn swap(mut self, swap: bool) -> Self {
        self.swap = swap;
        self
    }

    /// Reuse an existing transformed score table instead of running the scorer.
    pub fn skip_scoring(mut self, skip: bool) -> Self {
        self.skip_scoring = skip;
        self
    }

    pub fn table_name(&self) -> String {
        self.config.table_name(&self.operation)
    }

    fn output(&self, suffix: &str) -> PathBuf {
        self.config
            .effective_output_dir()
            .join(format!("{}{suffix}", self.table_name()))
    }

    fn remap(&self) -> Remap {
        if self.swap {
            Remap::Swap {
                a: self.from,
                b: self.to,
            }
        } else {
            Remap::Replace {
                from: self.from,
                to: self.to,
            }
        }
    }

    pub async fn run(&self) -> Result<Summary, Error> {
        let table = self.table_name();
        tracing::info!(%table, from = %self.from, to = %self.to, swap = self.swap, "starting experiment");

        let transformed = self.transform().await?;
        let scores = self.calculate_transformed_scores(&transformed.path).await?;
        let comparison = self.compare_transform_effect(&scores).await?;
        let average = comparison.average()?;

        tracing::info!(%table, average, compared = comparison.len(), "experiment finished");

        Ok(Summary {
            operation: self.operation.clone(),
            table,
            from: self.from.to_string(),
            to: self.to.to_string(),
            messages: transformed
                .base
                .as_ref()
                .map_or_else(|| distinct(&transformed.features, &self.config), BaseTable::len),
            rows: transformed.features.len(),
            rewritten: transformed.rewritten,
            compared: comparison.len(),
            average,
            scores: self.output("_scores.csv"),
        })
    }

    /// Loads the 1-gram table, restricts it to the selected messages and
    /// rewrites its feature column.
    pub async fn transform(&self) -> Result<Transformed, Error> {
        let group_column = self.config.effective_group_column();
        let feature_column = self.config.effective_feature_column();

        let text = read_file(self.config.effective_features()).await?;
        let mut features = FeatureTable::from_csv(&text)?;
        tracing::debug!(rows = features.len(), "loaded features");

        let base = match &self.config.paths.categories {
            Some(path) => {
                let categories = FeatureTable::from_csv(&read_file(path).await?)?;
                let base = categories.group_ids_with(
                    group_column,
                    feature_column,
                    self.config.effective_category(),
                )?;

                let base_path = self.output("_base.csv");
                write_file(&base_path, &base.to_csv()?).await?;
                tracing::info!(messages = base.len(), path = %base_path.display(), "created base table");

                features.select_groups(group_column, &base)?;
                Some(base)
            }
            None => None,
        };

        let rewritten = features.remap(feature_column, self.remap())?;
        tracing::info!(rows = features.len(), rewritten, "transformed features");
        if rewritten == 0 {
            tracing::warn!("no feature matched the pronoun table");
        }

        let path = self.output("_features.csv");
        write_file(&path, &features.to_csv()?).await?;

        Ok(Transformed {
            base,
            features,
            rewritten,
            path,
        })
    }

    /// Runs the configured scorer over the transformed features, or locates
    /// the existing score table when scoring is skipped.
    pub async fn calculate_transformed_scores(
        &self,
        features: &Path,
    ) -> Result<PathBuf, Error> {
        let table = self.table_name();
        let scores = self
            .config
            .effective_output_dir()
            .join(scores_file_name(self.config.effective_scores_template(), &table));

        if self.skip_scoring {
            tracing::info!(path = %scores.display(), "skipping scorer");
            return Ok(scores);
        }

        let command = self
            .config
            .scorer
            .command
            .as_deref()
            .ok_or(ConfigError::MissingScorer)?;

        Scorer::new(command).run(&table, features, &scores).await
    }

    /// Joins original and transformed scores and writes the per-message
    /// differences.
    pub async fn compare_transform_effect(&self, scores: &Path) -> Result<Comparison, Error> {
        let original = scores_from_csv(&read_file(self.config.effective_original_scores()).await?)?;
        let transformed = scores_from_csv(&read_file(scores).await?)?;

        let comparison = compare(&original, &transformed);
        if comparison.len() < original.len() {
            tracing::warn!(
                original = original.len(),
                compared = comparison.len(),
                "some messages have no transformed score"
            );
        }

        let path = self.output("_scores.csv");
        write_file(&path, &comparison.to_csv()?).await?;

        Ok(comparison)
    }
}

fn distinct(features: &FeatureTable, config: &Config) -> usize {
    features
        .values(config.effective_group_column())
        .map(|ids| ids.into_iter().collect::<hashbrown::HashSet<_>>().len())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use regender::Gender;

    use super::Experiment;
    use crate::{
        config::Config,
        error::{ConfigError, Error},
        table::Remap,
    };

    #[test]
    fn test_experiment_remap_mode() {
        let experiment = Experiment::new(Config::default(), "m2f", Gender::Male, Gender::Female);
        assert_eq!(
            experiment.remap(),
            Remap::Replace {
                from: Gender::Male,
                to: Gender::Female
            }
        );

        let experiment = experiment.swap(true);
        assert_eq!(
            experiment.remap(),
            Remap::Swap {
                a: Gender::Male,
                b: Gender::Female
            }
        );
        assert_eq!(experiment.table_name(), "twitter_m2f");
    }

    #[tokio::test]
    async fn test_experiment_requires_scorer() {
        let experiment = Experiment::new(Config::default(), "m2n", Gender::Male, Gender::Neutral);
        let result = experiment
            .calculate_transformed_scores(Path::new("features.csv"))
            .await;

        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingScorer))
        ));
    }
}
