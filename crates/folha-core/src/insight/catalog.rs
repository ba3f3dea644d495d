//! Optimization opportunity templates.
//!
//! The catalog is a fixed list of candidate generators. Each template
//! carries its own eligibility predicate; today every template is eligible
//! for every input, and the predicate slot is where a future gate (an income
//! threshold for the PJ migration, say) belongs, so that a change in output
//! is visible here and not buried in generator code.

use rust_decimal::Decimal;

use crate::models::{OptimizationOpportunity, UserSalaryInput};
use crate::tax::round_unit;

/// One opportunity template: identity, copy, savings rule and eligibility.
pub struct OpportunityTemplate {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Fraction of the gross salary claimed as estimated monthly savings.
    pub savings_rate: Decimal,
    /// Eligibility predicate over the calculation input.
    pub eligible: fn(&UserSalaryInput) -> bool,
}

impl OpportunityTemplate {
    fn generate(&self, input: &UserSalaryInput) -> OptimizationOpportunity {
        OptimizationOpportunity {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            potential_savings: round_unit(input.gross_salary * self.savings_rate),
        }
    }
}

fn always(_input: &UserSalaryInput) -> bool {
    true
}

/// The opportunity catalog, in emission order.
pub const CATALOG: [OpportunityTemplate; 2] = [
    OpportunityTemplate {
        id: "benefits_optimization",
        title: "Otimização de benefícios",
        description: "Redirecionar parte da remuneração para benefícios como \
                      vale-refeição e previdência privada pode reduzir a base \
                      tributável.",
        savings_rate: Decimal::from_parts(5, 0, 0, false, 2),
        eligible: always,
    },
    OpportunityTemplate {
        id: "fiscal_regime_change",
        title: "Mudança de regime fiscal",
        description: "Dependendo do seu perfil profissional, migrar para um \
                      regime de contratação PJ pode aumentar a renda líquida \
                      mensal.",
        savings_rate: Decimal::from_parts(8, 0, 0, false, 2),
        eligible: always,
    },
];

/// Generate the opportunities an input is eligible for, in catalog order.
pub fn generate_opportunities(input: &UserSalaryInput) -> Vec<OptimizationOpportunity> {
    CATALOG
        .iter()
        .filter(|template| (template.eligible)(input))
        .map(|template| template.generate(input))
        .collect()
}
