use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Side of a leveraged position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Long,
    Short,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Long => "long",
            Direction::Short => "short",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "long" => Ok(Direction::Long),
            "short" => Ok(Direction::Short),
            _ => Err(InputError::UnknownDirection(s.to_owned())),
        }
    }
}

/// How trading commission is charged on a futures position.
///
/// `SingleSided` charges `position_size × fee_rate` once (opening leg only).
/// `RoundTrip` charges it for both the opening and the closing leg.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CommissionPolicy {
    #[default]
    SingleSided,
    RoundTrip,
}

impl CommissionPolicy {
    /// Number of fee legs charged.
    pub fn legs(&self) -> f64 {
        match self {
            CommissionPolicy::SingleSided => 1.0,
            CommissionPolicy::RoundTrip => 2.0,
        }
    }
}

impl FromStr for CommissionPolicy {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" | "single_sided" => Ok(CommissionPolicy::SingleSided),
            "round_trip" | "roundtrip" => Ok(CommissionPolicy::RoundTrip),
            _ => Err(InputError::UnknownCommissionPolicy(s.to_owned())),
        }
    }
}

/// Buy-then-sell spot trade. Fee rates are fractions (0.001 = 0.1%).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpotInput {
    pub buy_price:     f64,
    pub quantity:      f64,
    pub sell_price:    f64,
    pub buy_fee_rate:  f64,
    pub sell_fee_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpotResult {
    /// Buy notional plus buy fee
    pub total_cost:       f64,
    /// Sell notional minus sell fee
    pub net_proceeds:     f64,
    pub pnl:              f64,
    /// PnL as a percentage of total cost (0 when cost is 0)
    pub percent_pnl:      f64,
    /// Fee-inclusive cost per unit (0 when quantity is 0)
    pub break_even_price: f64,
}

/// Leveraged futures position with its stop-loss / take-profit scenario.
///
/// All rates are fractions: `funding_rate` is per hour, `risk_fraction` is the
/// share of `account_balance` the trader is willing to lose at the stop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuturesInput {
    pub entry_price:       f64,
    pub direction:         Direction,
    pub margin:            f64,
    pub leverage:          u32,
    pub funding_rate:      f64,
    pub duration_hours:    f64,
    pub fee_rate:          f64,
    pub account_balance:   f64,
    pub risk_fraction:     f64,
    pub stop_loss_price:   f64,
    pub take_profit_price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuturesResult {
    /// Notional exposure: margin × leverage
    pub position_size:             f64,
    pub liquidation_price:         f64,
    /// PnL if the stop is hit, net of commission and funding
    pub pnl_at_stop_loss:          f64,
    /// PnL if the target is hit, net of commission and funding
    pub pnl_at_take_profit:        f64,
    /// Price-move PnL at the stop, before costs
    pub gross_pnl_at_stop_loss:    f64,
    /// Price-move PnL at the target, before costs
    pub gross_pnl_at_take_profit:  f64,
    pub risk_reward_ratio:         f64,
    /// Balance × risk fraction
    pub max_risk_amount:           f64,
    /// Quote-currency notional whose loss at the stop equals `max_risk_amount`
    pub suggested_position_size:   f64,
    pub funding_cost:              f64,
    pub commission:                f64,
    /// Gross take-profit PnL as a percentage of margin
    pub return_on_equity:          f64,
}
