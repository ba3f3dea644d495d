//! Payslip document models produced by the extraction pipeline.
//!
//! A [`PayslipDocument`] is assembled once per scan and never mutated;
//! re-scanning the same upload produces a new, independent document. Field
//! names serialize in camelCase because the documents cross into a JS host.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One OCR line in reading order, as delivered by the OCR provider.
///
/// The provider reports approximate reading order, not true column geometry;
/// the table parser treats the sequence as authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcrLine {
    /// Recognized text content of the line.
    pub text: String,
}

impl OcrLine {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl From<&str> for OcrLine {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for OcrLine {
    fn from(text: String) -> Self {
        Self { text }
    }
}

/// The structured result of parsing a payslip's OCR output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayslipDocument {
    /// Employer identification.
    pub company: Company,

    /// Employee identification.
    pub employee: Employee,

    /// The payroll body: reference month, line items, totals and bases.
    pub payroll: Payroll,

    /// Full normalized OCR text, retained for audit.
    pub raw_text: String,
}

/// Employer block of a payslip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// Legal or trade name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Employer tax id (CNPJ).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
}

impl Company {
    /// Check whether nothing was extracted for the employer.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.tax_id.is_none()
    }
}

/// Employee block of a payslip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Employee full name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Employee tax id (CPF).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,

    /// Job title as printed (cargo/função).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Admission date as printed; formatting is owned by the UI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admission_date: Option<String>,
}

impl Employee {
    /// Check whether nothing was extracted for the employee.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.tax_id.is_none()
            && self.role.is_none()
            && self.admission_date.is_none()
    }
}

/// Payroll body of a payslip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payroll {
    /// Reference month as printed (competência), e.g. `Janeiro/2025` or `01/2025`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_month: Option<String>,

    /// Earnings/deductions table rows, possibly empty.
    pub items: Vec<LineItem>,

    /// Aggregate totals. Absent values are coerced to zero at assembly.
    pub totals: PayrollTotals,

    /// Calculation bases. Absent values stay absent.
    pub bases: PayrollBases,
}

/// Aggregate totals printed in the payslip footer.
///
/// `net_salary` is stored as read and is *not* reconciled against
/// `total_earnings - total_deductions`: OCR noise can make the printed
/// figures inconsistent and the document records what the paper says.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollTotals {
    /// Total earnings (total de vencimentos).
    pub total_earnings: Decimal,

    /// Total deductions (total de descontos).
    pub total_deductions: Decimal,

    /// Net salary (valor líquido).
    pub net_salary: Decimal,
}

/// Calculation bases printed in the payslip footer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollBases {
    /// Social-contribution base (salário de contribuição INSS).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contribution_base: Option<Decimal>,

    /// Severance-fund base (base de cálculo FGTS).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severance_base: Option<Decimal>,

    /// Severance-fund amount deposited for the month (FGTS do mês).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severance_value: Option<Decimal>,

    /// Income-tax base (base de cálculo IRRF).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_base: Option<Decimal>,
}

/// One row of the earnings/deductions table.
///
/// Absent amounts stay `None`, which is distinct from an explicit zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Event code, when the row carries one (e.g. `001`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Row description.
    pub description: String,

    /// Rate/reference column, kept verbatim (e.g. `50%`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Earning amount (vencimentos column).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earning_amount: Option<Decimal>,

    /// Deduction amount (descontos column).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deduction_amount: Option<Decimal>,
}

impl LineItem {
    /// Proportional/informational row: a rate was printed but no amounts.
    pub fn is_informational(&self) -> bool {
        self.reference.is_some()
            && self.earning_amount.is_none()
            && self.deduction_amount.is_none()
    }
}
