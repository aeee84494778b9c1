pub mod config;
pub mod error;
pub mod futures;
pub mod models;
pub mod risk;
pub mod spot;
pub mod validate;

pub use error::InputError;
pub use futures::{calculate_futures, calculate_futures_with_policy};
pub use models::*;
pub use spot::calculate_spot;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_parses_case_insensitively() {
        assert_eq!("LONG".parse::<Direction>(), Ok(Direction::Long));
        assert_eq!(" short ".parse::<Direction>(), Ok(Direction::Short));
        assert_eq!(
            "sideways".parse::<Direction>(),
            Err(InputError::UnknownDirection("sideways".into()))
        );
    }

    #[test]
    fn results_serialize_with_named_fields() {
        let r = calculate_spot(&SpotInput {
            buy_price: 10.0,
            quantity: 1.0,
            sell_price: 12.0,
            buy_fee_rate: 0.0,
            sell_fee_rate: 0.0,
        });
        let json = serde_json::to_value(r).unwrap();
        assert_eq!(json["pnl"], 2.0);
        assert_eq!(json["break_even_price"], 10.0);

        let d = serde_json::to_string(&Direction::Short).unwrap();
        assert_eq!(d, "\"short\"");
    }
}
