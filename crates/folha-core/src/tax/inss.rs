//! Flat-rate social contribution (INSS).

use rust_decimal::Decimal;

use crate::models::SalaryBracket;

use super::round_money;

/// Result of a bracket lookup: the withheld amount and the matched rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketContribution {
    pub contribution: Decimal,
    pub rate: Decimal,
}

impl BracketContribution {
    fn zero() -> Self {
        Self {
            contribution: Decimal::ZERO,
            rate: Decimal::ZERO,
        }
    }
}

/// Compute the social contribution for a gross salary.
///
/// Brackets are tried in array order and the first one containing the salary
/// wins, even when ranges overlap. The whole salary is multiplied by that
/// bracket's flat rate; this is not a layered marginal computation. A salary
/// outside every bracket yields a zero contribution and a zero rate, so
/// tables that want full coverage must end in an unbounded bracket.
pub fn calculate_contribution(
    gross_salary: Decimal,
    brackets: &[SalaryBracket],
) -> BracketContribution {
    match brackets.iter().find(|bracket| bracket.contains(gross_salary)) {
        Some(bracket) => BracketContribution {
            contribution: round_money(gross_salary * bracket.rate),
            rate: bracket.rate,
        },
        None => BracketContribution::zero(),
    }
}
