//! Salary insight generation.
//!
//! Aggregates the three calculators into one immutable snapshot, then
//! attaches advisory recommendations and the opportunity catalog. Pure and
//! synchronous; every call allocates a fresh result.

pub mod catalog;

pub use catalog::{CATALOG, OpportunityTemplate, generate_opportunities};

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::models::{
    CountryConfig, EmploymentType, Recommendation, RecommendationCategory, SalaryInsightResult,
    UserSalaryInput,
};
use crate::tax::{calculate_contribution, calculate_income_tax, calculate_overtime, round_money};

/// Net-to-gross ratio below which the fiscal structure deserves review.
const LOW_RATIO_THRESHOLD: Decimal = Decimal::from_parts(70, 0, 0, false, 2);

/// Monthly benefits below this are considered under market for salaried work.
const LOW_BENEFITS_THRESHOLD: Decimal = Decimal::from_parts(500, 0, 0, false, 0);

/// Run the full salary calculation for one input against one country table.
pub fn generate_insight(input: &UserSalaryInput, config: &CountryConfig) -> SalaryInsightResult {
    let overtime = calculate_overtime(
        input.gross_salary,
        input.overtime_hours,
        input.overtime_rate,
    );
    let contribution = calculate_contribution(input.gross_salary, &config.salary_brackets);
    let income_tax = calculate_income_tax(
        input.gross_salary,
        contribution.contribution,
        input.dependents,
        config.dependent_deduction,
        &config.income_tax_tiers,
    );

    let total_earnings = round_money(input.gross_salary + input.benefits + overtime.overtime_pay);
    let total_deductions =
        round_money(contribution.contribution + income_tax.irrf + input.other_deductions);
    let net_salary = total_earnings - total_deductions;

    let net_to_gross_ratio = if input.gross_salary > Decimal::ZERO {
        round_ratio(net_salary / input.gross_salary)
    } else {
        Decimal::ZERO
    };

    debug!(
        "insight for gross {}: net {} (ratio {})",
        input.gross_salary, net_salary, net_to_gross_ratio
    );

    SalaryInsightResult {
        gross_salary: input.gross_salary,
        total_earnings,
        inss_contribution: contribution.contribution,
        inss_rate: contribution.rate,
        irrf: income_tax.irrf,
        irrf_rate: income_tax.rate,
        other_deductions: input.other_deductions,
        total_deductions,
        net_salary,
        net_to_gross_ratio,
        recommendations: build_recommendations(input, net_to_gross_ratio),
        optimization_opportunities: generate_opportunities(input),
    }
}

/// Evaluate the recommendation rules; any subset may fire.
///
/// Rules are independent of one another, so emission order carries no
/// meaning beyond stable output.
fn build_recommendations(input: &UserSalaryInput, ratio: Decimal) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if ratio < LOW_RATIO_THRESHOLD {
        recommendations.push(Recommendation {
            category: RecommendationCategory::FiscalStructure,
            message: "Sua relação líquido/bruto está abaixo de 70%. Vale revisar a \
                      estrutura fiscal e os descontos recorrentes."
                .to_string(),
        });
    }

    if input.dependents > 0 {
        recommendations.push(Recommendation {
            category: RecommendationCategory::Dependents,
            message: "Confirme se todos os dependentes estão declarados junto ao \
                      empregador; cada dependente reduz a base do IRRF."
                .to_string(),
        });
    }

    if input.employment_type == EmploymentType::Salaried && input.benefits < LOW_BENEFITS_THRESHOLD
    {
        recommendations.push(Recommendation {
            category: RecommendationCategory::Benefits,
            message: "Seu pacote de benefícios está abaixo do praticado no mercado; \
                      negociar vale-refeição ou plano de saúde pode elevar a \
                      remuneração total."
                .to_string(),
        });
    }

    recommendations
}

fn round_ratio(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero)
}
