/// futures.rs — Leveraged Futures Position Analysis
///
/// ─────────────────────────────────────────────────────────────────────────
/// POSITION
///   Size      = Margin × L
///
/// SCENARIO PnL at price P  (E = entry)
///   Long:   (P − E) × Size / E
///   Short:  (E − P) × Size / E
///
/// LIQUIDATION (isolated, no maintenance margin)
///   Long:   E × (1 − 1/L)
///   Short:  E × (1 + 1/L)
///
/// COSTS
///   Funding     = Size × r_funding × hours
///   Commission  = Size × f × legs       (legs = 1 single-sided, 2 round-trip)
///   Net PnL     = Gross PnL − Commission − Funding
///
/// RISK
///   R/R         = |PnL_TP| / |PnL_SL|
///   ROE         = PnL_TP / Margin × 100
///   Suggested   = Balance × risk × E / |SL − E|
/// ─────────────────────────────────────────────────────────────────────────
///
/// Every zero denominator (L, E, Margin, |PnL_SL|, |SL − E|) resolves to 0.
use tracing::{debug, trace};

use crate::models::{CommissionPolicy, Direction, FuturesInput, FuturesResult};
use crate::risk::{max_risk_amount, risk_reward_ratio, suggested_position_size};

/// Analyse a futures position with single-sided commission.
///
/// Commission is charged once on the position notional. Use
/// [`calculate_futures_with_policy`] with [`CommissionPolicy::RoundTrip`] to
/// charge both the opening and closing leg.
pub fn calculate_futures(input: &FuturesInput) -> FuturesResult {
    calculate_futures_with_policy(input, CommissionPolicy::SingleSided)
}

/// Analyse a futures position under an explicit commission policy.
pub fn calculate_futures_with_policy(input: &FuturesInput, policy: CommissionPolicy) -> FuturesResult {
    let position_size = input.margin * input.leverage as f64;

    let gross_pnl_at_stop_loss = directional_pnl(
        input.direction, input.entry_price, input.stop_loss_price, position_size,
    );
    let gross_pnl_at_take_profit = directional_pnl(
        input.direction, input.entry_price, input.take_profit_price, position_size,
    );

    let liquidation_price = liquidation_price(input.direction, input.entry_price, input.leverage);

    let risk_reward_ratio = risk_reward_ratio(gross_pnl_at_stop_loss, gross_pnl_at_take_profit);
    let max_risk_amount = max_risk_amount(input.account_balance, input.risk_fraction);
    let suggested_position_size =
        suggested_position_size(max_risk_amount, input.entry_price, input.stop_loss_price);

    let funding_cost = position_size * input.funding_rate * input.duration_hours;
    let commission = position_size * input.fee_rate * policy.legs();

    let pnl_at_stop_loss = gross_pnl_at_stop_loss - commission - funding_cost;
    let pnl_at_take_profit = gross_pnl_at_take_profit - commission - funding_cost;

    let return_on_equity = if input.margin != 0.0 {
        gross_pnl_at_take_profit / input.margin * 100.0
    } else {
        trace!("futures: margin is zero, ROE set to 0");
        0.0
    };

    debug!(
        direction = %input.direction,
        ?policy,
        position_size,
        liquidation_price,
        pnl_at_stop_loss,
        pnl_at_take_profit,
        risk_reward_ratio,
        "futures calculated"
    );

    FuturesResult {
        position_size,
        liquidation_price,
        pnl_at_stop_loss,
        pnl_at_take_profit,
        gross_pnl_at_stop_loss,
        gross_pnl_at_take_profit,
        risk_reward_ratio,
        max_risk_amount,
        suggested_position_size,
        funding_cost,
        commission,
        return_on_equity,
    }
}

/// Price-move PnL of `position_size` notional opened at `entry_price` and
/// closed at `exit_price`, before any costs.
pub fn directional_pnl(direction: Direction, entry_price: f64, exit_price: f64, position_size: f64) -> f64 {
    if entry_price == 0.0 {
        return 0.0;
    }
    let price_move = match direction {
        Direction::Long => exit_price - entry_price,
        Direction::Short => entry_price - exit_price,
    };
    price_move * position_size / entry_price
}

/// Price at which the posted margin is fully consumed. 0 for leverage 0.
pub fn liquidation_price(direction: Direction, entry_price: f64, leverage: u32) -> f64 {
    if leverage == 0 {
        trace!("futures: leverage is zero, liquidation price set to 0");
        return 0.0;
    }
    let margin_frac = 1.0 / leverage as f64;
    match direction {
        Direction::Long => entry_price * (1.0 - margin_frac),
        Direction::Short => entry_price * (1.0 + margin_frac),
    }
}
