use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sweetshop_core::config::Settings;
use sweetshop_core::domain::contract::RecommendProductsRequest;
use sweetshop_core::domain::recommendation::ProductId;
use sweetshop_core::forecast::Forecaster;
use sweetshop_core::recommend::pool::StaticCandidatePool;
use sweetshop_core::recommend::Recommender;

mod input;

#[derive(Debug, Parser)]
#[command(name = "sweetshop_cli")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Pretty-print the JSON result.
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Forecast daily sales from an exported history file.
    Forecast {
        /// JSON file: a /predict-sales request body or a bare array of {date, amount} rows.
        #[arg(long)]
        input: PathBuf,

        /// Days to forecast; overrides days_to_predict in the file.
        #[arg(long, allow_negative_numbers = true)]
        days: Option<i64>,
    },
    /// Recommend products for a cart, using the configured candidate pool.
    Recommend {
        /// Product ids already in the cart (comma separated).
        #[arg(long, value_delimiter = ',')]
        cart: Vec<ProductId>,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    // stdout carries the JSON result.
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();

    let result = run(&settings, &args);
    if let Err(err) = &result {
        sentry_anyhow::capture_anyhow(err);
        tracing::error!(error = %err, "command failed");
    }
    result
}

fn run(settings: &Settings, args: &Args) -> anyhow::Result<()> {
    match &args.command {
        Command::Forecast { input, days } => {
            let request = input::read_forecast_request(input, *days)?;
            let forecaster = Forecaster::new().with_max_horizon(settings.forecast_max_days);
            let response = forecaster.predict_sales(&request)?;
            tracing::info!(
                observations = request.historical_data.len(),
                horizon = request.days_to_predict,
                points = response.forecast.len(),
                "forecast complete"
            );
            print_json(&response, args.pretty)
        }
        Command::Recommend { cart } => {
            let pool = StaticCandidatePool::new(settings.candidate_pool.iter().copied());
            let recommender = Recommender::new(Arc::new(pool));
            let response = recommender.recommend_products(&RecommendProductsRequest {
                cart_product_ids: cart.clone(),
            });
            print_json(&response, args.pretty)
        }
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}

fn init_sentry(settings: &Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_recommend_cart_list() {
        let args = Args::try_parse_from(["sweetshop_cli", "recommend", "--cart", "1,2,7"]).unwrap();
        match args.command {
            Command::Recommend { cart } => assert_eq!(cart, vec![1, 2, 7]),
            other => panic!("unexpected command {other:?}"),
        }
        assert!(!args.pretty);
    }

    #[test]
    fn parses_forecast_with_negative_days() {
        let args = Args::try_parse_from([
            "sweetshop_cli",
            "forecast",
            "--input",
            "history.json",
            "--days",
            "-2",
            "--pretty",
        ])
        .unwrap();
        match args.command {
            Command::Forecast { input, days } => {
                assert_eq!(input, PathBuf::from("history.json"));
                assert_eq!(days, Some(-2));
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert!(args.pretty);
    }

    #[test]
    fn recommend_without_cart_is_empty() {
        let args = Args::try_parse_from(["sweetshop_cli", "recommend"]).unwrap();
        match args.command {
            Command::Recommend { cart } => assert!(cart.is_empty()),
            other => panic!("unexpected command {other:?}"),
        }
    }
}
