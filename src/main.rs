use std::process::ExitCode;

use clap::Parser;
use regender::Gender;
use regender_repo::{cli::Cli, config::Config, error::Error, experiment::Experiment};

fn resolve(name: &str) -> Gender {
    if !Gender::is_exact_name(name) {
        tracing::warn!(name, "unrecognized gender name, using neutral");
    }
    Gender::resolve(name)
}

async fn run(cli: Cli) -> Result<(), Error> {
    let mut config = Config::load(cli.config.as_deref()).await?;
    config.apply_overrides(&cli.overrides());

    let experiment = Experiment::new(config, &cli.operation, resolve(&cli.from), resolve(&cli.to))
        .swap(cli.swap)
        .skip_scoring(cli.skip_scoring);

    let summary = experiment.run().await?;

    if cli.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{json}"),
            Err(error) => tracing::error!(%error, "failed to serialize summary"),
        }
    } else {
        println!("The average score difference was {}", summary.average);
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("{error}");
            ExitCode::FAILURE
        }
    }
}
