/// spot.rs — Spot Trade PnL
///
/// ─────────────────────────────────────────────────────────────────────────
///   TotalCost    = P_buy  × Q × (1 + f_buy)
///   NetProceeds  = P_sell × Q × (1 − f_sell)
///   PnL          = NetProceeds − TotalCost
///   PnL%         = PnL / TotalCost × 100          (0 if TotalCost = 0)
///   BreakEven    = TotalCost / Q                  (0 if Q = 0)
/// ─────────────────────────────────────────────────────────────────────────
use tracing::{debug, trace};

use crate::models::{SpotInput, SpotResult};

/// Compute cost, proceeds and PnL for a buy-then-sell spot trade.
///
/// Zero denominators yield 0 rather than an error.
pub fn calculate_spot(input: &SpotInput) -> SpotResult {
    let total_cost   = input.buy_price * input.quantity * (1.0 + input.buy_fee_rate);
    let net_proceeds = input.sell_price * input.quantity * (1.0 - input.sell_fee_rate);
    let pnl = net_proceeds - total_cost;

    let percent_pnl = if total_cost != 0.0 {
        pnl / total_cost * 100.0
    } else {
        trace!("spot: total cost is zero, percent PnL set to 0");
        0.0
    };

    let break_even_price = if input.quantity != 0.0 {
        total_cost / input.quantity
    } else {
        trace!("spot: quantity is zero, break-even set to 0");
        0.0
    };

    debug!(total_cost, net_proceeds, pnl, percent_pnl, break_even_price, "spot calculated");

    SpotResult {
        total_cost,
        net_proceeds,
        pnl,
        percent_pnl,
        break_even_price,
    }
}
