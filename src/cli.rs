extern crate clap;

use std::path::PathBuf;

use clap::Parser;

use crate::config::Overrides;

/// Swap gendered pronouns in a message feature table and measure how the
/// lexicon score moves.
#[derive(Debug, Parser)]
#[command(name = "regender-bin", version)]
pub struct Cli {
    /// Name of the run; the transformed table is `<table_prefix><operation>`.
    pub operation: String,

    /// Gender whose pronouns are replaced: male, female or neutral.
    pub from: String,

    /// Gender the pronouns are replaced with.
    pub to: String,

    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    #[arg(long, short = 'f')]
    pub features: Option<PathBuf>,

    #[arg(long)]
    pub original_scores: Option<PathBuf>,

    #[arg(long, short = 'o')]
    pub output_dir: Option<PathBuf>,

    /// Overrides `scorer.command` from the config file.
    #[arg(long)]
    pub scorer: Option<String>,

    /// Exchange pronouns in both directions.
    #[arg(long)]
    pub swap: bool,

    /// Use an existing transformed score table instead of running the scorer.
    #[arg(long)]
    pub skip_scoring: bool,

    /// Print the summary as JSON.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            features: self.features.clone(),
            original_scores: self.original_scores.clone(),
            output_dir: self.output_dir.clone(),
            scorer_command: self.scorer.clone(),
        }
    }
}
