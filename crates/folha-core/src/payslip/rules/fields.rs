//! Identity field extraction for Brazilian payslips.
//!
//! Every field is looked up through an ordered candidate list from
//! [`super::patterns`]; the first pattern that matches wins and a miss
//! leaves the field unset. Extraction never fails.

use super::first_match;
use super::patterns::{
    ADMISSION_DATE, COLUMN_GAP, COMPANY_NAME, COMPANY_TAX_ID, EMPLOYEE_NAME, EMPLOYEE_ROLE,
    EMPLOYEE_TAX_ID, REFERENCE_MONTH,
};

/// Scalar identity fields extracted from payslip text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedFields {
    pub company_name: Option<String>,
    pub company_tax_id: Option<String>,
    pub employee_name: Option<String>,
    pub employee_tax_id: Option<String>,
    pub employee_role: Option<String>,
    pub admission_date: Option<String>,
    pub reference_month: Option<String>,
}

/// Extract all labeled identity fields from normalized payslip text.
pub fn extract_fields(text: &str) -> ExtractedFields {
    ExtractedFields {
        company_name: first_match(&COMPANY_NAME, text).and_then(clean_label_capture),
        company_tax_id: first_match(&COMPANY_TAX_ID, text),
        employee_name: first_match(&EMPLOYEE_NAME, text).and_then(clean_label_capture),
        employee_tax_id: first_match(&EMPLOYEE_TAX_ID, text),
        employee_role: first_match(&EMPLOYEE_ROLE, text).and_then(clean_label_capture),
        admission_date: first_match(&ADMISSION_DATE, text),
        reference_month: first_match(&REFERENCE_MONTH, text),
    }
}

/// Cut a rest-of-line capture at the first wide column gap and trim.
///
/// Labeled values often share a visual row with the next column
/// (`EMPRESA EXEMPLO LTDA   CNPJ: ...`); only the first column belongs
/// to the label.
fn clean_label_capture(raw: String) -> Option<String> {
    let cleaned = COLUMN_GAP.splitn(&raw, 2).next().unwrap_or("").trim();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}
