//! Input and output models for the salary calculation pipeline.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Employment relationship declared by the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    /// Standard employment contract (CLT).
    #[default]
    Salaried,
    /// Service contract through a legal entity (PJ).
    Contractor,
    /// Internship contract.
    Intern,
}

impl EmploymentType {
    /// Parse an employment type from a loose string.
    ///
    /// Accepts the Brazilian contract names and their English counterparts;
    /// anything unrecognized falls back to the salaried default.
    pub fn from_str(s: &str) -> Self {
        let s = s.trim().to_lowercase();

        if s.contains("pj") || s.contains("jur") || s.contains("contractor") {
            EmploymentType::Contractor
        } else if s.contains("estag") || s.contains("estág") || s.contains("intern") {
            EmploymentType::Intern
        } else {
            EmploymentType::Salaried
        }
    }
}

/// One salary calculation request.
///
/// Constructed per call and never persisted by the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSalaryInput {
    /// Monthly gross salary.
    pub gross_salary: Decimal,

    /// Declared income-tax dependents.
    #[serde(default)]
    pub dependents: u32,

    /// Dependents under fourteen, a subset of `dependents`.
    #[serde(default)]
    pub dependents_under_14: u32,

    /// Monthly benefit amounts (meal/transport vouchers and similar).
    #[serde(default)]
    pub benefits: Decimal,

    /// Overtime hours worked in the month.
    #[serde(default)]
    pub overtime_hours: Decimal,

    /// Overtime multiplier; when absent the statutory default applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overtime_rate: Option<Decimal>,

    /// Other monthly deductions (union dues, loans, pension plans).
    #[serde(default)]
    pub other_deductions: Decimal,

    /// Employment relationship.
    #[serde(default)]
    pub employment_type: EmploymentType,
}

impl UserSalaryInput {
    /// A salaried input with the given gross salary and everything else zero.
    pub fn new(gross_salary: Decimal) -> Self {
        Self {
            gross_salary,
            dependents: 0,
            dependents_under_14: 0,
            benefits: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
            overtime_rate: None,
            other_deductions: Decimal::ZERO,
            employment_type: EmploymentType::Salaried,
        }
    }
}

/// Category of an advisory recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationCategory {
    /// Net-to-gross ratio suggests the fiscal structure deserves review.
    FiscalStructure,
    /// Declared dependents affect the income-tax deduction.
    Dependents,
    /// Benefit package looks below market for the employment type.
    Benefits,
}

/// One advisory recommendation attached to a calculation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Machine-readable category.
    pub category: RecommendationCategory,

    /// Human-readable message, in the country's language.
    pub message: String,
}

/// One optimization opportunity attached to a calculation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationOpportunity {
    /// Stable identifier for the opportunity template.
    pub id: String,

    /// Short title, in the country's language.
    pub title: String,

    /// Explanation of the opportunity, in the country's language.
    pub description: String,

    /// Estimated monthly savings, rounded to whole currency units.
    pub potential_savings: Decimal,
}

/// Immutable snapshot of one salary calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryInsightResult {
    /// Gross salary as supplied.
    pub gross_salary: Decimal,

    /// Gross salary plus benefits plus overtime pay.
    pub total_earnings: Decimal,

    /// Social contribution withheld (INSS).
    pub inss_contribution: Decimal,

    /// Flat rate of the matched contribution bracket.
    pub inss_rate: Decimal,

    /// Income tax withheld (IRRF).
    pub irrf: Decimal,

    /// Rate of the matched income-tax tier.
    pub irrf_rate: Decimal,

    /// Other deductions as supplied.
    pub other_deductions: Decimal,

    /// Sum of contribution, income tax and other deductions.
    pub total_deductions: Decimal,

    /// Total earnings minus total deductions.
    pub net_salary: Decimal,

    /// Net over gross, or zero when gross is zero.
    pub net_to_gross_ratio: Decimal,

    /// Advisory recommendations; any subset of the rule catalog may fire.
    pub recommendations: Vec<Recommendation>,

    /// Optimization opportunities from the template catalog.
    pub optimization_opportunities: Vec<OptimizationOpportunity>,
}
