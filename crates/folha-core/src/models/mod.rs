//! Data models shared across the extraction and calculation pipelines.

pub mod config;
pub mod insight;
pub mod payslip;

pub use config::{CountryConfig, IncomeTaxTier, SalaryBracket};
pub use insight::{
    EmploymentType, OptimizationOpportunity, Recommendation, RecommendationCategory,
    SalaryInsightResult, UserSalaryInput,
};
pub use payslip::{
    Company, Employee, LineItem, OcrLine, Payroll, PayrollBases, PayrollTotals, PayslipDocument,
};
