//! Tax calculators: social contribution, income tax and overtime.
//!
//! All calculators are pure functions over [`Decimal`] values, parameterized
//! by the tables in [`crate::models::CountryConfig`]. They never fail: inputs
//! outside the configured tables yield zero amounts and zero rates.

pub mod inss;
pub mod irrf;
pub mod overtime;

pub use inss::{BracketContribution, calculate_contribution};
pub use irrf::{IncomeTax, calculate_income_tax};
pub use overtime::{
    DEFAULT_OVERTIME_MULTIPLIER, MONTHLY_HOURS, OvertimePay, calculate_overtime,
};

use rust_decimal::{Decimal, RoundingStrategy};

/// Round to two decimal places, half away from zero.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Round to whole currency units, half away from zero.
pub fn round_unit(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_money_midpoint_goes_up() {
        assert_eq!(round_money(dec!(123.455)), dec!(123.46));
        assert_eq!(round_money(dec!(123.454)), dec!(123.45));
        assert_eq!(round_money(dec!(0.005)), dec!(0.01));
    }

    #[test]
    fn test_round_unit_matches_display_rounding() {
        assert_eq!(round_unit(dec!(150.00)), dec!(150));
        assert_eq!(round_unit(dec!(150.50)), dec!(151));
        assert_eq!(round_unit(dec!(150.49)), dec!(150));
    }
}
