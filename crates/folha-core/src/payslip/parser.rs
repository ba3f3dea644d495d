//! Payslip parser orchestrating field, table and totals extraction.

use tracing::{debug, info};

use crate::models::{
    Company, Employee, LineItem, OcrLine, Payroll, PayrollBases, PayrollTotals, PayslipDocument,
};

use super::rules::{ExtractedTotals, extract_fields, extract_totals, parse_line_items};

/// Rule-based payslip parser.
///
/// Stateless and infallible: noisy OCR degrades individual fields to their
/// defaults instead of failing the whole document.
pub struct PayslipParser;

impl PayslipParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a payslip from its OCR text and ordered line array.
    pub fn parse(&self, text: &str, lines: &[OcrLine]) -> PayslipDocument {
        let normalized = normalize_text(text);

        info!(
            "parsing payslip from {} characters and {} lines",
            normalized.len(),
            lines.len()
        );

        let fields = extract_fields(&normalized);
        let items = parse_line_items(lines);
        let totals = extract_totals(&normalized);

        debug!(
            "extracted {} line items, net salary {:?}",
            items.len(),
            totals.net_salary
        );

        let company = Company {
            name: fields.company_name,
            tax_id: fields.company_tax_id,
        };
        let employee = Employee {
            name: fields.employee_name,
            tax_id: fields.employee_tax_id,
            role: fields.employee_role,
            admission_date: fields.admission_date,
        };

        assemble(
            company,
            employee,
            fields.reference_month,
            items,
            totals,
            normalized,
        )
    }

    /// Parse from raw text alone, treating each text line as an OCR line.
    ///
    /// Useful when the OCR provider returns no line records; column geometry
    /// is then only as good as the line breaks in the text.
    pub fn parse_text(&self, text: &str) -> PayslipDocument {
        let lines: Vec<OcrLine> = text.lines().map(OcrLine::from).collect();
        self.parse(text, &lines)
    }
}

impl Default for PayslipParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Assemble a [`PayslipDocument`] from extraction outputs.
///
/// Pure and deterministic. The three printed totals default to zero when
/// absent; the four calculation bases stay optional. Printed figures are
/// recorded as-is, with no cross-field reconciliation.
pub fn assemble(
    company: Company,
    employee: Employee,
    reference_month: Option<String>,
    items: Vec<LineItem>,
    totals: ExtractedTotals,
    raw_text: String,
) -> PayslipDocument {
    PayslipDocument {
        company,
        employee,
        payroll: Payroll {
            reference_month,
            items,
            totals: PayrollTotals {
                total_earnings: totals.total_earnings.unwrap_or_default(),
                total_deductions: totals.total_deductions.unwrap_or_default(),
                net_salary: totals.net_salary.unwrap_or_default(),
            },
            bases: PayrollBases {
                contribution_base: totals.contribution_base,
                severance_base: totals.severance_base,
                severance_value: totals.severance_value,
                tax_base: totals.tax_base,
            },
        },
        raw_text,
    }
}

/// Normalize OCR text for matching: line endings and non-breaking spaces.
pub fn normalize_text(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\u{00a0}', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    const SAMPLE: &str = "RAZÃO SOCIAL: PADARIA DOIS IRMÃOS LTDA\nCNPJ: 12.345.678/0001-90\nFUNCIONÁRIO: JOSÉ CARLOS PEREIRA\nCPF: 123.456.789-09\nCARGO: PADEIRO\nADMISSÃO: 10/03/2018\nCOMPETÊNCIA: 01/2025\nCÓD DESCRIÇÃO VENCIMENTOS DESCONTOS\n001 SALARIO BASE 2.500,00\n105 HORAS EXTRAS 312,50\n201 INSS 224,43\nTOTAL DE VENCIMENTOS 2.812,50\nTOTAL DE DESCONTOS 224,43\nVALOR LÍQUIDO 2.588,07\nBASE CÁLC. FGTS 2.812,50";

    fn sample_lines() -> Vec<OcrLine> {
        SAMPLE.lines().map(OcrLine::from).collect()
    }

    #[test]
    fn test_parse_full_document() {
        let parser = PayslipParser::new();
        let doc = parser.parse(SAMPLE, &sample_lines());

        assert_eq!(
            doc.company.name.as_deref(),
            Some("PADARIA DOIS IRMÃOS LTDA")
        );
        assert_eq!(doc.company.tax_id.as_deref(), Some("12.345.678/0001-90"));
        assert_eq!(doc.employee.name.as_deref(), Some("JOSÉ CARLOS PEREIRA"));
        assert_eq!(doc.employee.role.as_deref(), Some("PADEIRO"));
        assert_eq!(doc.payroll.reference_month.as_deref(), Some("01/2025"));

        assert_eq!(doc.payroll.items.len(), 3);
        assert_eq!(doc.payroll.items[1].description, "HORAS EXTRAS");
        assert_eq!(doc.payroll.items[1].earning_amount, Some(dec!(312.50)));

        assert_eq!(doc.payroll.totals.total_earnings, dec!(2812.50));
        assert_eq!(doc.payroll.totals.total_deductions, dec!(224.43));
        assert_eq!(doc.payroll.totals.net_salary, dec!(2588.07));
        assert_eq!(doc.payroll.bases.severance_base, Some(dec!(2812.50)));
        assert_eq!(doc.payroll.bases.tax_base, None);
        assert_eq!(doc.raw_text, SAMPLE);
    }

    #[test]
    fn test_missing_totals_default_to_zero() {
        let doc = assemble(
            Company::default(),
            Employee::default(),
            None,
            Vec::new(),
            ExtractedTotals::default(),
            String::new(),
        );

        assert_eq!(doc.payroll.totals.total_earnings, Decimal::ZERO);
        assert_eq!(doc.payroll.totals.total_deductions, Decimal::ZERO);
        assert_eq!(doc.payroll.totals.net_salary, Decimal::ZERO);
        assert_eq!(doc.payroll.bases.contribution_base, None);
        assert_eq!(doc.payroll.bases.severance_value, None);
    }

    #[test]
    fn test_printed_net_is_not_reconciled() {
        // The printed net disagrees with earnings minus deductions; the
        // document keeps what the paper says.
        let text = "TOTAL DE VENCIMENTOS 3.000,00\nTOTAL DE DESCONTOS 500,00\nVALOR LÍQUIDO 9.999,99";
        let doc = PayslipParser::new().parse_text(text);

        assert_eq!(doc.payroll.totals.net_salary, dec!(9999.99));
    }

    #[test]
    fn test_rescan_yields_equal_document() {
        let parser = PayslipParser::new();
        let first = parser.parse(SAMPLE, &sample_lines());
        let second = parser.parse(SAMPLE, &sample_lines());

        assert_eq!(first, second);
    }

    #[test]
    fn test_garbage_text_yields_empty_document() {
        let doc = PayslipParser::new().parse_text("@@@@ ###### @@@@");

        assert!(doc.company.is_empty());
        assert!(doc.employee.is_empty());
        assert!(doc.payroll.items.is_empty());
        assert_eq!(doc.payroll.totals.net_salary, Decimal::ZERO);
    }

    #[test]
    fn test_normalize_text_line_endings() {
        assert_eq!(normalize_text("a\r\nb\rc"), "a\nb\nc");
        assert_eq!(normalize_text("x\u{00a0}y"), "x y");
    }
}
