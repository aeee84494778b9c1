/// reporting.rs — Result rendering
///
/// Text output uses fixed-point formatting:
/// - money amounts and sizes: 4 decimals
/// - liquidation price: 8 decimals (small-cap pairs)
/// - percentages and ratios: 2 decimals
///
/// JSON output wraps the typed input and result records.
use std::fmt::Write;

use anyhow::Result;
use serde::Serialize;
use trade_calc::{CommissionPolicy, FuturesInput, FuturesResult, SpotInput, SpotResult};

use crate::i18n::{Label, Lang};

const RULE: &str = "════════════════════════════════════════════";

/// Serializable envelope for `--json` output.
#[derive(Debug, Serialize)]
pub struct CalculationReport<'a, I: Serialize, R: Serialize> {
    pub market: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commission_policy: Option<CommissionPolicy>,
    pub input: &'a I,
    pub result: &'a R,
}

pub fn spot_json(input: &SpotInput, result: &SpotResult) -> Result<String> {
    let report = CalculationReport {
        market: "spot",
        commission_policy: None,
        input,
        result,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

pub fn futures_json(
    input: &FuturesInput,
    result: &FuturesResult,
    policy: CommissionPolicy,
) -> Result<String> {
    let report = CalculationReport {
        market: "futures",
        commission_policy: Some(policy),
        input,
        result,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

fn line(out: &mut String, lang: Lang, label: Label, value: String) {
    // writing into a String cannot fail
    let _ = writeln!(out, "  {:<22}: {}", lang.text(label), value);
}

pub fn render_spot(result: &SpotResult, lang: Lang) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "  {}", lang.text(Label::SpotResults));
    let _ = writeln!(out, "{RULE}");
    line(&mut out, lang, Label::TotalCost, format!("{:.4}", result.total_cost));
    line(&mut out, lang, Label::NetProceeds, format!("{:.4}", result.net_proceeds));
    line(&mut out, lang, Label::Pnl, format!("{:.4}", result.pnl));
    line(&mut out, lang, Label::PercentPnl, format!("{:.2}%", result.percent_pnl));
    line(&mut out, lang, Label::BreakEven, format!("{:.4}", result.break_even_price));
    out.push_str(RULE);
    out
}

pub fn render_futures(input: &FuturesInput, result: &FuturesResult, lang: Lang) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "  {}", lang.text(Label::FuturesResults));
    let _ = writeln!(out, "{RULE}");
    line(
        &mut out, lang, Label::Direction,
        format!("{} {}x", input.direction.as_str().to_uppercase(), input.leverage),
    );
    line(&mut out, lang, Label::PositionSize, format!("{:.4}", result.position_size));
    line(&mut out, lang, Label::Liquidation, format!("{:.8}", result.liquidation_price));
    line(&mut out, lang, Label::PnlAtStopLoss, format!("{:.4}", result.pnl_at_stop_loss));
    line(&mut out, lang, Label::PnlAtTakeProfit, format!("{:.4}", result.pnl_at_take_profit));
    line(&mut out, lang, Label::RiskReward, format!("{:.2}", result.risk_reward_ratio));
    line(&mut out, lang, Label::MaxRisk, format!("{:.4}", result.max_risk_amount));
    line(&mut out, lang, Label::SuggestedPosition, format!("{:.4}", result.suggested_position_size));
    line(&mut out, lang, Label::FundingCost, format!("{:.4}", result.funding_cost));
    line(&mut out, lang, Label::Commission, format!("{:.4}", result.commission));
    line(&mut out, lang, Label::Roe, format!("{:.2}%", result.return_on_equity));
    out.push_str(RULE);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use trade_calc::{calculate_futures, calculate_spot, Direction};

    fn spot() -> (SpotInput, SpotResult) {
        let input = SpotInput {
            buy_price: 100.0,
            quantity: 2.0,
            sell_price: 110.0,
            buy_fee_rate: 0.001,
            sell_fee_rate: 0.001,
        };
        (input, calculate_spot(&input))
    }

    fn futures() -> (FuturesInput, FuturesResult) {
        let input = FuturesInput {
            entry_price: 100.0,
            direction: Direction::Long,
            margin: 50.0,
            leverage: 10,
            funding_rate: 0.0,
            duration_hours: 0.0,
            fee_rate: 0.0,
            account_balance: 0.0,
            risk_fraction: 0.0,
            stop_loss_price: 95.0,
            take_profit_price: 110.0,
        };
        (input, calculate_futures(&input))
    }

    #[test]
    fn spot_text_uses_fixed_point() {
        let (_, r) = spot();
        let text = render_spot(&r, Lang::En);
        assert!(text.contains("Total Cost"));
        assert!(text.contains("200.2000"));
        assert!(text.contains("219.7800"));
        assert!(text.contains("9.78%"));
        assert!(text.contains("100.1000"));
    }

    #[test]
    fn futures_text_in_turkish() {
        let (i, r) = futures();
        let text = render_futures(&i, &r, Lang::Tr);
        assert!(text.contains("Vadeli Sonuçları"));
        assert!(text.contains("LONG 10x"));
        assert!(text.contains("90.00000000"));
        assert!(text.contains("-25.0000"));
        assert!(text.contains("2.00"));
        assert!(text.contains("100.00%"));
    }

    #[test]
    fn json_envelope_carries_market_and_policy() {
        let (i, r) = futures();
        let json: serde_json::Value =
            serde_json::from_str(&futures_json(&i, &r, CommissionPolicy::RoundTrip).unwrap()).unwrap();
        assert_eq!(json["market"], "futures");
        assert_eq!(json["commission_policy"], "round_trip");
        assert_eq!(json["input"]["direction"], "long");
        assert_eq!(json["result"]["position_size"], 500.0);

        let (i, r) = spot();
        let json: serde_json::Value = serde_json::from_str(&spot_json(&i, &r).unwrap()).unwrap();
        assert_eq!(json["market"], "spot");
        assert!(json.get("commission_policy").is_none());
    }
}
