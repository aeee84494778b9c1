use tracing::trace;

/// Amount of the account the trader is willing to lose on one trade.
pub fn max_risk_amount(account_balance: f64, risk_fraction: f64) -> f64 {
    account_balance * risk_fraction
}

/// Position notional (quote currency) whose loss at the stop equals `max_risk`.
///
///   size = max_risk × entry / |stop − entry|
///
/// The stop distance is absolute, so the result is a notional value, not a
/// base-asset quantity. Returns 0 when the stop sits on the entry price.
pub fn suggested_position_size(max_risk: f64, entry_price: f64, stop_loss_price: f64) -> f64 {
    let stop_distance = (stop_loss_price - entry_price).abs();
    if stop_distance == 0.0 {
        trace!("stop loss equals entry, no suggested size");
        return 0.0;
    }
    max_risk * entry_price / stop_distance
}

/// Reward magnitude over risk magnitude; 0 when there is nothing at risk.
pub fn risk_reward_ratio(pnl_at_stop_loss: f64, pnl_at_take_profit: f64) -> f64 {
    let risk_amount = pnl_at_stop_loss.abs();
    let reward_amount = pnl_at_take_profit.abs();
    if risk_amount == 0.0 {
        return 0.0;
    }
    reward_amount / risk_amount
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggested_size_loses_exactly_max_risk_at_stop() {
        let max_risk = max_risk_amount(10_000.0, 0.01);
        assert!((max_risk - 100.0).abs() < 1e-9);

        let size = suggested_position_size(max_risk, 50_000.0, 49_000.0);
        // 100 × 50000 / 1000
        assert!((size - 5_000.0).abs() < 1e-9);

        // loss on that notional when price moves to the stop
        let loss = size * (50_000.0 - 49_000.0) / 50_000.0;
        assert!((loss - max_risk).abs() < 1e-9);
    }

    #[test]
    fn suggested_size_symmetric_for_stop_above_entry() {
        let below = suggested_position_size(50.0, 200.0, 190.0);
        let above = suggested_position_size(50.0, 200.0, 210.0);
        assert_eq!(below, above);
    }

    #[test]
    fn suggested_size_zero_when_stop_on_entry() {
        assert_eq!(suggested_position_size(100.0, 123.45, 123.45), 0.0);
    }

    #[test]
    fn risk_reward_uses_magnitudes() {
        assert!((risk_reward_ratio(-25.0, 50.0) - 2.0).abs() < 1e-12);
        assert!((risk_reward_ratio(25.0, -50.0) - 2.0).abs() < 1e-12);
        assert_eq!(risk_reward_ratio(0.0, 50.0), 0.0);
    }
}
