//! Common regex patterns for Brazilian payslip extraction.
//!
//! Field and totals lookups are ordered candidate lists: patterns are tried
//! in priority order and the first match wins. Accent tolerance is uneven on
//! purpose; it mirrors the phrasings observed in real payslips, where OCR
//! sometimes drops diacritics and sometimes keeps them.

use lazy_static::lazy_static;
use regex::Regex;

/// A candidate pattern with its priority in the fallback order.
///
/// Lower priority values are tried first. Lists below are declared in
/// ascending priority and evaluated front to back.
#[derive(Debug)]
pub struct FieldPattern {
    pub priority: u8,
    pub regex: Regex,
}

impl FieldPattern {
    fn new(priority: u8, pattern: &str) -> Self {
        Self {
            priority,
            regex: Regex::new(pattern).unwrap(),
        }
    }
}

lazy_static! {
    // Employer identification
    pub static ref COMPANY_NAME: Vec<FieldPattern> = vec![
        FieldPattern::new(1, r"(?i)raz[ãa]o\s+social[\s:]+(.+?)(?:\n|$)"),
        FieldPattern::new(2, r"(?i)empregador[\s:]+(.+?)(?:\n|$)"),
        FieldPattern::new(3, r"(?i)empresa[\s:]+(.+?)(?:\n|$)"),
    ];

    pub static ref COMPANY_TAX_ID: Vec<FieldPattern> = vec![
        FieldPattern::new(1, r"(?i)CNPJ[\s.:]*(\d{2}\.?\d{3}\.?\d{3}/?\d{4}-?\d{2})"),
        FieldPattern::new(2, r"\b(\d{2}\.\d{3}\.\d{3}/\d{4}-\d{2})\b"),
    ];

    // Employee identification
    pub static ref EMPLOYEE_NAME: Vec<FieldPattern> = vec![
        FieldPattern::new(1, r"(?i)nome\s+do\s+funcionário[\s:]+(.+?)(?:\n|$)"),
        FieldPattern::new(2, r"(?i)funcion[áa]rio(?:\s*\(a\))?[\s:]+(.+?)(?:\n|$)"),
        FieldPattern::new(3, r"(?i)empregado[\s:]+(.+?)(?:\n|$)"),
        FieldPattern::new(4, r"(?i)nome[\s:]+(.+?)(?:\n|$)"),
    ];

    pub static ref EMPLOYEE_TAX_ID: Vec<FieldPattern> = vec![
        FieldPattern::new(1, r"(?i)CPF[\s.:]*(\d{3}\.?\d{3}\.?\d{3}-?\d{2})"),
        FieldPattern::new(2, r"\b(\d{3}\.\d{3}\.\d{3}-\d{2})\b"),
    ];

    pub static ref EMPLOYEE_ROLE: Vec<FieldPattern> = vec![
        FieldPattern::new(1, r"(?i)cargo[\s:]+(.+?)(?:\n|$)"),
        FieldPattern::new(2, r"(?i)fun[çc][ãa]o[\s:]+(.+?)(?:\n|$)"),
    ];

    pub static ref ADMISSION_DATE: Vec<FieldPattern> = vec![
        FieldPattern::new(1, r"(?i)(?:data\s+de\s+)?admiss[ãa]o[\s:]*(\d{1,2}/\d{1,2}/\d{4})"),
        FieldPattern::new(2, r"(?i)admitido\s+em[\s:]*(\d{1,2}/\d{1,2}/\d{4})"),
    ];

    pub static ref REFERENCE_MONTH: Vec<FieldPattern> = vec![
        FieldPattern::new(1, r"(?i)compet[êe]ncia[\s:]*((?:\d{1,2}|[A-Za-zÀ-ÖØ-öø-ÿ]+)[/\-]\d{4})"),
        FieldPattern::new(2, r"(?i)refer[êe]ncia[\s:]*((?:\d{1,2}|[A-Za-zÀ-ÖØ-öø-ÿ]+)[/\-]\d{4})"),
        FieldPattern::new(3, r"(?i)m[êe]s/ano[\s:]*(\d{1,2}[/\-]\d{4})"),
    ];

    // Footer totals (amounts in Brazilian format: 1.234,56)
    pub static ref TOTAL_EARNINGS: Vec<FieldPattern> = vec![
        FieldPattern::new(1, r"(?i)total\s+de\s+vencimentos[\s:]*(\d{1,3}(?:\.\d{3})*,\d{2})"),
        FieldPattern::new(2, r"(?i)total\s+(?:de\s+)?proventos[\s:]*(\d{1,3}(?:\.\d{3})*,\d{2})"),
        FieldPattern::new(3, r"(?i)total\s+vencimentos[\s:]*(\d{1,3}(?:\.\d{3})*,\d{2})"),
    ];

    pub static ref TOTAL_DEDUCTIONS: Vec<FieldPattern> = vec![
        FieldPattern::new(1, r"(?i)total\s+de\s+descontos[\s:]*(\d{1,3}(?:\.\d{3})*,\d{2})"),
        FieldPattern::new(2, r"(?i)total\s+descontos[\s:]*(\d{1,3}(?:\.\d{3})*,\d{2})"),
    ];

    pub static ref NET_SALARY: Vec<FieldPattern> = vec![
        FieldPattern::new(1, r"(?i)valor\s+l[íi]quido[\s:]*(?:R\$\s*)?(\d{1,3}(?:\.\d{3})*,\d{2})"),
        FieldPattern::new(2, r"(?i)l[íi]quido\s+a\s+receber[\s:]*(?:R\$\s*)?(\d{1,3}(?:\.\d{3})*,\d{2})"),
        FieldPattern::new(3, r"(?i)total\s+l[íi]quido[\s:]*(?:R\$\s*)?(\d{1,3}(?:\.\d{3})*,\d{2})"),
    ];

    // Footer calculation bases
    pub static ref CONTRIBUTION_BASE: Vec<FieldPattern> = vec![
        FieldPattern::new(1, r"(?i)sal[áa]rio\s+(?:de\s+)?contribui[çc][ãa]o(?:\s+INSS)?[\s:]*(\d{1,3}(?:\.\d{3})*,\d{2})"),
        FieldPattern::new(2, r"(?i)sal\.?\s+contr\.?\s+INSS[\s:]*(\d{1,3}(?:\.\d{3})*,\d{2})"),
        FieldPattern::new(3, r"(?i)base\s+INSS[\s:]*(\d{1,3}(?:\.\d{3})*,\d{2})"),
    ];

    pub static ref SEVERANCE_BASE: Vec<FieldPattern> = vec![
        FieldPattern::new(1, r"(?i)base\s+c[áa]lc\.?\s+FGTS[\s:]*(\d{1,3}(?:\.\d{3})*,\d{2})"),
        FieldPattern::new(2, r"(?i)base\s+de\s+c[áa]lculo\s+(?:do\s+)?FGTS[\s:]*(\d{1,3}(?:\.\d{3})*,\d{2})"),
        FieldPattern::new(3, r"(?i)base\s+FGTS[\s:]*(\d{1,3}(?:\.\d{3})*,\d{2})"),
    ];

    pub static ref SEVERANCE_VALUE: Vec<FieldPattern> = vec![
        FieldPattern::new(1, r"(?i)FGTS\s+do\s+mês[\s:]*(\d{1,3}(?:\.\d{3})*,\d{2})"),
        FieldPattern::new(2, r"(?i)valor\s+(?:do\s+)?FGTS[\s:]*(\d{1,3}(?:\.\d{3})*,\d{2})"),
    ];

    pub static ref TAX_BASE: Vec<FieldPattern> = vec![
        FieldPattern::new(1, r"(?i)base\s+c[áa]lc\.?\s+IRRF[\s:]*(\d{1,3}(?:\.\d{3})*,\d{2})"),
        FieldPattern::new(2, r"(?i)base\s+de\s+c[áa]lculo\s+(?:do\s+)?IRRF[\s:]*(\d{1,3}(?:\.\d{3})*,\d{2})"),
        FieldPattern::new(3, r"(?i)base\s+IRRF[\s:]*(\d{1,3}(?:\.\d{3})*,\d{2})"),
    ];

    // Earnings/deductions table
    pub static ref TABLE_HEADER: Regex = Regex::new(
        r"(?i)\bdescri[çc][ãa]o\b"
    ).unwrap();

    pub static ref TABLE_TERMINATOR: Regex = Regex::new(
        r"(?i)total\s+(?:de\s+)?vencimentos|total\s+(?:de\s+)?descontos|valor\s+l[íi]quido|l[íi]quido\s+a\s+receber|base\s+(?:de\s+)?c[áa]lc"
    ).unwrap();

    pub static ref TABLE_ROW: Regex = Regex::new(
        r"^(?:(\d+)\s+)?([A-Za-zÀ-ÖØ-öø-ÿ][A-Za-zÀ-ÖØ-öø-ÿ\s()%\-]*?)(?:\s+(\d[\d.,]*%?))?(?:\s+(\d[\d.,]*%?))?\s*$"
    ).unwrap();

    // Layout: a wide whitespace run separates columns on the same visual row
    pub static ref COLUMN_GAP: Regex = Regex::new(
        r"\s{3,}"
    ).unwrap();
}
