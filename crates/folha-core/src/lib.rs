//! Core library for Brazilian payslip analysis.
//!
//! This crate provides:
//! - Payslip field extraction from OCR text (employer, employee, totals)
//! - Earnings/deductions table parsing over OCR line arrays
//! - Net-salary calculation (INSS, IRRF, overtime) from country tables
//! - Rule-based recommendations and optimization opportunities

pub mod error;
pub mod insight;
pub mod models;
pub mod payslip;
pub mod tax;

pub use error::{FolhaError, Result};
pub use insight::generate_insight;
pub use models::{
    CountryConfig, EmploymentType, LineItem, OcrLine, PayslipDocument, SalaryInsightResult,
    UserSalaryInput,
};
pub use payslip::PayslipParser;
