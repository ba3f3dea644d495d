//! Progressive income tax (IRRF).

use rust_decimal::Decimal;

use crate::models::IncomeTaxTier;

use super::round_money;

/// Result of an income-tax calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncomeTax {
    pub irrf: Decimal,
    pub rate: Decimal,
}

impl IncomeTax {
    fn zero() -> Self {
        Self {
            irrf: Decimal::ZERO,
            rate: Decimal::ZERO,
        }
    }
}

/// Compute the income tax withheld for a month.
///
/// The tax base is the gross salary minus the social contribution minus one
/// per-dependent deduction for each declared dependent. The first tier whose
/// boundary covers the base applies: `irrf = base * rate - deduction`,
/// floored at zero. The published tables express the exempt range as a tier
/// with a zero rate, so a base below the first boundary pays nothing.
pub fn calculate_income_tax(
    gross_salary: Decimal,
    inss_contribution: Decimal,
    dependents: u32,
    per_dependent_deduction: Decimal,
    tiers: &[IncomeTaxTier],
) -> IncomeTax {
    let dependent_deduction = Decimal::from(dependents) * per_dependent_deduction;
    let tax_base = gross_salary - inss_contribution - dependent_deduction;

    match tiers.iter().find(|tier| tier.covers(tax_base)) {
        Some(tier) => {
            let raw = tax_base * tier.rate - tier.deduction;
            IncomeTax {
                irrf: round_money(raw.max(Decimal::ZERO)),
                rate: tier.rate,
            }
        }
        None => IncomeTax::zero(),
    }
}
