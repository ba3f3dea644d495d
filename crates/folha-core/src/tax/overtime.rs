//! Hourly-rate derivation and overtime pay.

use rust_decimal::Decimal;

use super::round_money;

/// Statutory monthly-hours divisor for a full-time contract.
pub const MONTHLY_HOURS: Decimal = Decimal::from_parts(220, 0, 0, false, 0);

/// Statutory overtime multiplier applied when the input carries none.
pub const DEFAULT_OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Derived hourly rate and the overtime pay for the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OvertimePay {
    pub hourly_rate: Decimal,
    pub overtime_pay: Decimal,
}

/// Compute overtime pay from the gross salary and hours worked.
///
/// The hourly rate is the gross salary over the fixed monthly divisor. Pay
/// is computed from the unrounded rate and rounded once at the end, so the
/// published `hourly_rate` may differ from `overtime_pay / hours` by a cent.
pub fn calculate_overtime(
    gross_salary: Decimal,
    overtime_hours: Decimal,
    multiplier: Option<Decimal>,
) -> OvertimePay {
    let multiplier = multiplier.unwrap_or(DEFAULT_OVERTIME_MULTIPLIER);
    let hourly_rate = gross_salary / MONTHLY_HOURS;
    let overtime_pay = overtime_hours * hourly_rate * multiplier;

    OvertimePay {
        hourly_rate: round_money(hourly_rate),
        overtime_pay: round_money(overtime_pay),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_hourly_rate_uses_fixed_divisor() {
        let result = calculate_overtime(dec!(2200), Decimal::ZERO, None);

        assert_eq!(result.hourly_rate, dec!(10.00));
        assert_eq!(result.overtime_pay, Decimal::ZERO);
    }

    #[test]
    fn test_default_multiplier_is_fifty_percent_premium() {
        let result = calculate_overtime(dec!(2200), dec!(10), None);

        assert_eq!(result.overtime_pay, dec!(150.00));
    }

    #[test]
    fn test_explicit_multiplier_overrides_default() {
        let result = calculate_overtime(dec!(2200), dec!(10), Some(dec!(2)));

        assert_eq!(result.overtime_pay, dec!(200.00));
    }

    #[test]
    fn test_pay_is_rounded_from_unrounded_rate() {
        let result = calculate_overtime(dec!(3000), dec!(10), None);

        // 3000 / 220 = 13.6363..., shown as 13.64
        assert_eq!(result.hourly_rate, dec!(13.64));
        // 10 * 13.6363... * 1.5 = 204.5454...
        assert_eq!(result.overtime_pay, dec!(204.55));
    }

    #[test]
    fn test_default_constants() {
        assert_eq!(MONTHLY_HOURS, dec!(220));
        assert_eq!(DEFAULT_OVERTIME_MULTIPLIER, dec!(1.5));
    }
}
