use anyhow::Context;
use clap::Parser;
use prime_search::Settings;
use prime_search::cli::commands::{init, query};
use prime_search::cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Commands::Init { force } = cli.command {
        init::run_init(force);
        return;
    }

    let mut config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    };

    // CLI flags take precedence over file and env
    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
    }
    if cli.strict {
        config.client.strict_input = true;
    }

    prime_search::logging::init_with_config(&config.logging);

    if let Some((endpoint, raw)) = cli.command.query() {
        if let Err(e) = query::run(endpoint, raw, &config).await {
            tracing::debug!("[main] {endpoint} failed: {e:?}");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        return;
    }

    if let Commands::Config = cli.command {
        init::run_config(&config);
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Settings> {
    let settings = match &cli.config {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("config file not found: {}", path.display());
            }
            Settings::load_from(path)
                .with_context(|| format!("failed to load {}", path.display()))?
        }
        None => Settings::load().context("failed to load settings")?,
    };
    Ok(settings)
}
