//! Input checks for callers that collect raw numbers from a user.
//!
//! The calculators accept anything and resolve singularities to 0; these
//! checks are for the layer in front of them.

use crate::error::InputError;
use crate::models::{FuturesInput, SpotInput};

/// Upper leverage bound used when the caller does not configure one.
pub const DEFAULT_MAX_LEVERAGE: u32 = 1000;

fn non_negative(field: &'static str, value: f64) -> Result<(), InputError> {
    if !value.is_finite() {
        return Err(InputError::NonFinite { field });
    }
    if value < 0.0 {
        return Err(InputError::Negative { field, value });
    }
    Ok(())
}

fn fraction(field: &'static str, value: f64) -> Result<(), InputError> {
    non_negative(field, value)?;
    if value > 1.0 {
        return Err(InputError::FractionOutOfRange { field, value });
    }
    Ok(())
}

impl SpotInput {
    pub fn validate(&self) -> Result<(), InputError> {
        non_negative("buy_price", self.buy_price)?;
        non_negative("quantity", self.quantity)?;
        non_negative("sell_price", self.sell_price)?;
        fraction("buy_fee_rate", self.buy_fee_rate)?;
        fraction("sell_fee_rate", self.sell_fee_rate)?;
        Ok(())
    }
}

impl FuturesInput {
    /// Validate with the default leverage cap.
    pub fn validate(&self) -> Result<(), InputError> {
        self.validate_with_max_leverage(DEFAULT_MAX_LEVERAGE)
    }

    pub fn validate_with_max_leverage(&self, max_leverage: u32) -> Result<(), InputError> {
        non_negative("entry_price", self.entry_price)?;
        non_negative("margin", self.margin)?;
        if self.leverage == 0 || self.leverage > max_leverage {
            return Err(InputError::LeverageOutOfRange { value: self.leverage, max: max_leverage });
        }
        non_negative("funding_rate", self.funding_rate)?;
        non_negative("duration_hours", self.duration_hours)?;
        fraction("fee_rate", self.fee_rate)?;
        non_negative("account_balance", self.account_balance)?;
        fraction("risk_fraction", self.risk_fraction)?;
        non_negative("stop_loss_price", self.stop_loss_price)?;
        non_negative("take_profit_price", self.take_profit_price)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Direction;

    fn futures() -> FuturesInput {
        FuturesInput {
            entry_price: 30_000.0,
            direction: Direction::Short,
            margin: 250.0,
            leverage: 20,
            funding_rate: 0.0001,
            duration_hours: 24.0,
            fee_rate: 0.0004,
            account_balance: 5_000.0,
            risk_fraction: 0.01,
            stop_loss_price: 30_600.0,
            take_profit_price: 28_500.0,
        }
    }

    #[test]
    fn accepts_sane_input() {
        assert_eq!(futures().validate(), Ok(()));
        let spot = SpotInput {
            buy_price: 1.5,
            quantity: 1_000.0,
            sell_price: 1.7,
            buy_fee_rate: 0.001,
            sell_fee_rate: 0.001,
        };
        assert_eq!(spot.validate(), Ok(()));
    }

    #[test]
    fn rejects_leverage_outside_bounds() {
        let mut i = futures();
        i.leverage = 0;
        assert_eq!(
            i.validate(),
            Err(InputError::LeverageOutOfRange { value: 0, max: DEFAULT_MAX_LEVERAGE })
        );
        i.leverage = 125;
        assert!(i.validate_with_max_leverage(100).is_err());
        assert!(i.validate_with_max_leverage(125).is_ok());
    }

    #[test]
    fn rejects_negative_and_nan() {
        let mut i = futures();
        i.margin = -1.0;
        assert_eq!(i.validate(), Err(InputError::Negative { field: "margin", value: -1.0 }));

        let mut i = futures();
        i.stop_loss_price = f64::NAN;
        assert_eq!(i.validate(), Err(InputError::NonFinite { field: "stop_loss_price" }));

        let spot = SpotInput {
            buy_price: 1.0,
            quantity: -3.0,
            sell_price: 1.0,
            buy_fee_rate: 0.0,
            sell_fee_rate: 0.0,
        };
        assert!(matches!(spot.validate(), Err(InputError::Negative { field: "quantity", .. })));
    }

    #[test]
    fn rejects_risk_fraction_above_one() {
        let mut i = futures();
        i.risk_fraction = 1.5;
        assert_eq!(
            i.validate(),
            Err(InputError::FractionOutOfRange { field: "risk_fraction", value: 1.5 })
        );
    }
}
