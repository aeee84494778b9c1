/// main.rs — TradeWizard Entry Point
///
///   1. Parse arguments
///   2. Load defaults from .env
///   3. Validate inputs and run the selected calculator
///   4. Print a table or JSON
mod cli;
mod i18n;
mod reporting;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use i18n::Lang;
use trade_calc::config::AppConfig;
use trade_calc::{calculate_futures_with_policy, calculate_spot, CommissionPolicy};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging ──────────────────────────────────────────────────────────
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // ── Config ───────────────────────────────────────────────────────────
    let cfg = AppConfig::from_env().context("loading configuration")?;
    debug!(?cfg, "config loaded");

    let output = run(&cli, &cfg)?;
    println!("{output}");
    Ok(())
}

fn resolve_lang(cli: &Cli, cfg: &AppConfig) -> Result<Lang> {
    match cli.lang {
        Some(lang) => Ok(lang),
        None => Lang::from_str(&cfg.lang, true)
            .map_err(|e| anyhow!("Config key TRADEWIZARD_LANG: {e}")),
    }
}

/// Run the selected calculator and return the rendered output.
fn run(cli: &Cli, cfg: &AppConfig) -> Result<String> {
    let lang = resolve_lang(cli, cfg)?;

    match &cli.command {
        Commands::Spot(args) => {
            let input = args.to_input();
            input.validate().context("invalid spot input")?;
            info!(buy = input.buy_price, sell = input.sell_price, qty = input.quantity, "spot trade");

            let result = calculate_spot(&input);
            if cli.json {
                reporting::spot_json(&input, &result)
            } else {
                Ok(reporting::render_spot(&result, lang))
            }
        }
        Commands::Futures(args) => {
            let input = args.to_input(cfg);
            input
                .validate_with_max_leverage(cfg.max_leverage)
                .context("invalid futures input")?;

            let policy = if args.round_trip_commission {
                CommissionPolicy::RoundTrip
            } else {
                cfg.commission_policy
            };
            info!(
                entry = input.entry_price,
                direction = %input.direction,
                leverage = input.leverage,
                ?policy,
                "futures position"
            );

            let result = calculate_futures_with_policy(&input, policy);
            if cli.json {
                reporting::futures_json(&input, &result, policy)
            } else {
                Ok(reporting::render_futures(&input, &result, lang))
            }
        }
    }
}
