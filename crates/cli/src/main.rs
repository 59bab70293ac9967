//! Command Line Interface for the LoopLab leveraged loop simulator.

mod args;
mod config;
mod output;

use anyhow::{Context, Result};
use args::{PointsArgs, StrategyArgs};
use clap::{Parser, Subcommand};
use config::CliConfig;
use dotenv::dotenv;
use looplab_data::providers::{MarketSnapshotSource, StaticMarketCatalog};
use looplab_data::repositories::{
    JsonFileRepository, SnapshotRepository, export_snapshot, find_by_id, import_snapshot,
    save_points, save_strategy,
};
use looplab_domain::entities::{Market, StrategyInput};
use looplab_domain::enums::{Network, ProviderName};
use looplab_domain::value_objects::{StrategyResult, StressResult};
use looplab_optimization::simulate_and_compare;
use looplab_simulation::prelude::*;
use rust_decimal::Decimal;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "looplab")]
#[command(about = "Leveraged lending loop simulator", long_about = None)]
struct Cli {
    /// Snapshot store file (overrides LOOPLAB_STORE_PATH)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog markets
    Markets {
        #[arg(short, long)]
        network: Option<Network>,

        #[arg(short, long)]
        provider: Option<ProviderName>,
    },
    /// Show a market's assets and parameters
    Assets {
        market_id: String,
    },
    /// Simulate a loop strategy
    Simulate {
        #[command(flatten)]
        strategy: StrategyArgs,

        /// Print JSON instead of tables
        #[arg(long)]
        json: bool,

        /// Save the strategy to the store
        #[arg(long)]
        save: bool,
    },
    /// Run the price and borrow-rate stress scenarios
    Stress {
        #[command(flatten)]
        strategy: StrategyArgs,

        #[arg(long)]
        json: bool,
    },
    /// Borrow APY at which the loop's net ROE is zero
    BreakEven {
        #[command(flatten)]
        strategy: StrategyArgs,

        #[arg(long)]
        json: bool,
    },
    /// Simulate and rank every saved strategy
    Compare {
        #[arg(long)]
        json: bool,
    },
    /// Project a points campaign's airdrop value
    Points {
        #[command(flatten)]
        model: PointsArgs,

        #[arg(long)]
        json: bool,

        /// Save the points model to the store
        #[arg(long)]
        save: bool,
    },
    /// Maintain the snapshot store
    Store {
        #[command(subcommand)]
        command: StoreCommand,
    },
}

#[derive(Subcommand)]
enum StoreCommand {
    /// Write the store as JSON to a file or stdout
    Export {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Replace the store with a JSON export
    Import { file: PathBuf },
    /// List saved strategies and points models
    List,
    /// Show one saved strategy or points model by id
    Show { id: String },
}

#[derive(Serialize)]
struct SimulationReport<'a> {
    strategy: &'a StrategyInput,
    result: &'a StrategyResult,
    alerts: &'a [RiskAlert],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BreakEvenReport<'a> {
    market_id: &'a str,
    borrow_apy: Decimal,
    break_even_borrow_apy: Option<Decimal>,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn filter_markets(
    catalog: &StaticMarketCatalog,
    network: Option<Network>,
    provider: Option<ProviderName>,
) -> Vec<Market> {
    match (network, provider) {
        (Some(network), Some(provider)) => catalog.list_markets(network, provider),
        _ => catalog
            .markets()
            .filter(|m| network.is_none_or(|n| m.network == n))
            .filter(|m| provider.is_none_or(|p| m.provider == p))
            .cloned()
            .collect(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = CliConfig::from_env();
    if let Some(path) = cli.store {
        config = config.with_store_path(path);
    }
    let catalog = StaticMarketCatalog::new();
    let repo = JsonFileRepository::new(config.store_path.clone());

    match cli.command {
        Commands::Markets { network, provider } => {
            output::print_markets(&filter_markets(&catalog, network, provider));
        }
        Commands::Assets { market_id } => {
            let snapshot = catalog.snapshot(&market_id)?;
            output::print_assets(&market_id, &catalog.list_assets(&market_id));
            output::print_market(&snapshot);
        }
        Commands::Simulate {
            strategy,
            json,
            save,
        } => {
            let (input, snapshot) = strategy.resolve(&catalog, &config)?;
            let result = simulate_strategy(&input, &snapshot)?;
            let alerts = risk_alerts(&result);

            if json {
                print_json(&SimulationReport {
                    strategy: &input,
                    result: &result,
                    alerts: &alerts,
                })?;
            } else {
                output::print_simulation(&input, &result, &alerts);
            }

            if save {
                save_strategy(&repo, input)
                    .await
                    .with_context(|| format!("saving to {}", repo.path().display()))?;
                info!(path = %repo.path().display(), "Strategy saved");
            }
        }
        Commands::Stress { strategy, json } => {
            let (input, snapshot) = strategy.resolve(&catalog, &config)?;
            let results: Vec<StressResult> = stress_tests(&input, &snapshot)?;
            if json {
                print_json(&results)?;
            } else {
                output::print_stress(&results);
            }
        }
        Commands::BreakEven { strategy, json } => {
            let (input, snapshot) = strategy.resolve(&catalog, &config)?;
            let rate = break_even_borrow_rate(&input, &snapshot)?;
            if json {
                print_json(&BreakEvenReport {
                    market_id: &snapshot.market_id,
                    borrow_apy: snapshot.borrow_apy,
                    break_even_borrow_apy: rate,
                })?;
            } else {
                output::print_break_even(&snapshot, rate);
            }
        }
        Commands::Compare { json } => {
            let saved = repo
                .load()
                .await
                .with_context(|| format!("loading {}", repo.path().display()))?;
            if saved.strategies.is_empty() {
                warn!(path = %repo.path().display(), "No saved strategies to compare");
                return Ok(());
            }
            let rows = simulate_and_compare(&saved.strategies, |id| catalog.snapshot(id).ok())?;
            if json {
                print_json(&rows)?;
            } else {
                output::print_comparison(&rows);
            }
        }
        Commands::Points { model, json, save } => {
            let model = model.to_model()?;
            let projection = project_airdrop(&model)?;
            if json {
                print_json(&projection)?;
            } else {
                output::print_points(&model, &projection);
            }
            if save {
                save_points(&repo, model)
                    .await
                    .with_context(|| format!("saving to {}", repo.path().display()))?;
                info!(path = %repo.path().display(), "Points model saved");
            }
        }
        Commands::Store { command } => match command {
            StoreCommand::Export { output } => {
                let exported = export_snapshot(&repo).await?;
                match output {
                    Some(path) => {
                        tokio::fs::write(&path, exported)
                            .await
                            .with_context(|| format!("writing {}", path.display()))?;
                        info!(path = %path.display(), "Snapshot exported");
                    }
                    None => println!("{exported}"),
                }
            }
            StoreCommand::Import { file } => {
                let raw = tokio::fs::read_to_string(&file)
                    .await
                    .with_context(|| format!("reading {}", file.display()))?;
                let imported = import_snapshot(&repo, &raw)
                    .await
                    .with_context(|| format!("importing {}", file.display()))?;
                info!(
                    strategies = imported.strategies.len(),
                    points = imported.points.len(),
                    "Snapshot imported"
                );
            }
            StoreCommand::List => {
                output::print_store(&repo.load().await?);
            }
            StoreCommand::Show { id } => {
                output::print_entry(&find_by_id(&repo, &id).await?);
            }
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use looplab_domain::enums::RiskTarget;
    use rust_decimal_macros::dec;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_simulate() {
        let cli = Cli::try_parse_from([
            "looplab",
            "simulate",
            "--market",
            "arb-aave-usdc",
            "--capital",
            "10000",
            "--risk-target",
            "35%",
            "--slippage",
            "0.2",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Simulate { strategy, json, save } => {
                assert!(json);
                assert!(!save);
                assert_eq!(strategy.capital, dec!(10000));
                assert_eq!(strategy.risk_target, RiskTarget::Drawdown35);
                assert_eq!(strategy.overrides.slippage, Some(dec!(0.2)));
            }
            _ => panic!("expected simulate"),
        }
    }

    #[test]
    fn test_unknown_risk_target_is_rejected() {
        assert!(
            Cli::try_parse_from(["looplab", "stress", "--capital", "1000", "--risk-target", "20"])
                .is_err()
        );
    }

    #[test]
    fn test_parse_store_show() {
        let cli = Cli::try_parse_from(["looplab", "store", "show", "abc-123"]).unwrap();
        match cli.command {
            Commands::Store {
                command: StoreCommand::Show { id },
            } => assert_eq!(id, "abc-123"),
            _ => panic!("expected store show"),
        }
        assert!(Cli::try_parse_from(["looplab", "store", "show"]).is_err());
    }

    #[test]
    fn test_market_filters() {
        let catalog = StaticMarketCatalog::new();
        assert_eq!(filter_markets(&catalog, None, None).len(), 4);
        assert_eq!(filter_markets(&catalog, None, Some(ProviderName::AaveV3)).len(), 2);
        let base = filter_markets(&catalog, Some(Network::Base), Some(ProviderName::Custom));
        assert_eq!(base.len(), 1);
        assert_eq!(base[0].id, "base-custom-usdbc");
    }
}
