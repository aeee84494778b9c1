/// cli.rs — Command-line front end
///
/// Collects raw numbers, converts percentage flags to fractional rates and
/// builds the typed calculator inputs.
///
/// Usage:
///   trade_wizard spot --buy-price 100 --quantity 2 --sell-price 110 --buy-fee-pct 0.1 --sell-fee-pct 0.1
///   trade_wizard --lang tr futures --entry-price 100 --direction long --margin 50 --leverage 10 \
///       --stop-loss 95 --take-profit 110
use clap::{Args, Parser, Subcommand};
use trade_calc::config::AppConfig;
use trade_calc::{Direction, FuturesInput, SpotInput};

use crate::i18n::Lang;

#[derive(Parser, Debug)]
#[command(name = "trade_wizard")]
#[command(about = "Quick PnL, risk and funding analysis for spot and futures trades")]
#[command(version)]
pub struct Cli {
    /// Output language (defaults to TRADEWIZARD_LANG, then en)
    #[arg(long, global = true, value_enum)]
    pub lang: Option<Lang>,

    /// Print the result as JSON instead of a table
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Buy-then-sell spot trade
    Spot(SpotArgs),
    /// Leveraged futures position
    Futures(FuturesArgs),
}

#[derive(Args, Debug)]
pub struct SpotArgs {
    #[arg(long)]
    pub buy_price: f64,

    #[arg(long)]
    pub quantity: f64,

    #[arg(long)]
    pub sell_price: f64,

    /// Buy commission in percent (0.1 = 0.1%)
    #[arg(long, default_value_t = 0.0)]
    pub buy_fee_pct: f64,

    /// Sell commission in percent
    #[arg(long, default_value_t = 0.0)]
    pub sell_fee_pct: f64,
}

#[derive(Args, Debug)]
pub struct FuturesArgs {
    #[arg(long)]
    pub entry_price: f64,

    /// long or short
    #[arg(short, long)]
    pub direction: Direction,

    #[arg(short, long)]
    pub margin: f64,

    /// Leverage multiplier (defaults to DEFAULT_LEVERAGE)
    #[arg(short, long)]
    pub leverage: Option<u32>,

    /// Commission in percent of position size
    #[arg(long, default_value_t = 0.0)]
    pub fee_pct: f64,

    /// Funding rate in percent per hour
    #[arg(long, default_value_t = 0.0)]
    pub funding_pct: f64,

    /// Holding period in hours (defaults to DEFAULT_DURATION_HOURS)
    #[arg(long)]
    pub duration_hours: Option<u32>,

    /// Account balance used for position sizing
    #[arg(long, default_value_t = 0.0)]
    pub balance: f64,

    /// Share of balance risked per trade, in percent
    #[arg(long, default_value_t = 0.0)]
    pub risk_pct: f64,

    #[arg(long)]
    pub stop_loss: f64,

    #[arg(long)]
    pub take_profit: f64,

    /// Charge commission on both the opening and closing leg
    #[arg(long)]
    pub round_trip_commission: bool,
}

pub fn pct_to_fraction(pct: f64) -> f64 {
    pct / 100.0
}

impl SpotArgs {
    pub fn to_input(&self) -> SpotInput {
        SpotInput {
            buy_price: self.buy_price,
            quantity: self.quantity,
            sell_price: self.sell_price,
            buy_fee_rate: pct_to_fraction(self.buy_fee_pct),
            sell_fee_rate: pct_to_fraction(self.sell_fee_pct),
        }
    }
}

impl FuturesArgs {
    pub fn to_input(&self, cfg: &AppConfig) -> FuturesInput {
        FuturesInput {
            entry_price: self.entry_price,
            direction: self.direction,
            margin: self.margin,
            leverage: self.leverage.unwrap_or(cfg.default_leverage),
            funding_rate: pct_to_fraction(self.funding_pct),
            duration_hours: self.duration_hours.unwrap_or(cfg.default_duration_hours) as f64,
            fee_rate: pct_to_fraction(self.fee_pct),
            account_balance: self.balance,
            risk_fraction: pct_to_fraction(self.risk_pct),
            stop_loss_price: self.stop_loss,
            take_profit_price: self.take_profit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spot_percents_become_fractions() {
        let cli = Cli::try_parse_from([
            "trade_wizard", "spot",
            "--buy-price", "100", "--quantity", "2", "--sell-price", "110",
            "--buy-fee-pct", "0.1", "--sell-fee-pct", "0.1",
        ])
        .unwrap();

        let Commands::Spot(args) = cli.command else {
            panic!("Expected spot command");
        };
        let input = args.to_input();
        assert!((input.buy_fee_rate - 0.001).abs() < 1e-12);
        assert!((input.sell_fee_rate - 0.001).abs() < 1e-12);
        assert_eq!(input.quantity, 2.0);
    }

    #[test]
    fn futures_defaults_come_from_config() {
        let cli = Cli::try_parse_from([
            "trade_wizard", "--lang", "tr", "futures",
            "--entry-price", "100", "--direction", "Short", "--margin", "50",
            "--stop-loss", "105", "--take-profit", "90", "--risk-pct", "2",
        ])
        .unwrap();
        assert_eq!(cli.lang, Some(Lang::Tr));

        let Commands::Futures(args) = cli.command else {
            panic!("Expected futures command");
        };
        assert!(!args.round_trip_commission);

        let cfg = AppConfig::default();
        let input = args.to_input(&cfg);
        assert_eq!(input.direction, Direction::Short);
        assert_eq!(input.leverage, 1);
        assert_eq!(input.duration_hours, 24.0);
        assert!((input.risk_fraction - 0.02).abs() < 1e-12);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "trade_wizard", "futures",
            "--entry-price", "100", "-d", "long", "-m", "50", "-l", "10",
            "--stop-loss", "95", "--take-profit", "110", "--json",
        ])
        .unwrap();
        assert!(cli.json);
    }

    #[test]
    fn rejects_unknown_direction() {
        let res = Cli::try_parse_from([
            "trade_wizard", "futures",
            "--entry-price", "100", "--direction", "up", "--margin", "50",
            "--stop-loss", "95", "--take-profit", "110",
        ]);
        assert!(res.is_err());
    }
}
