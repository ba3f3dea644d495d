//! Footer totals and calculation-base extraction.
//!
//! Each value is looked up independently over the full normalized text, so a
//! footer mangled by OCR degrades one lookup at a time. Nothing here is
//! coerced: absent values stay `None` and the assembler decides which ones
//! default to zero.

use rust_decimal::Decimal;

use super::first_match;
use super::money::parse_money;
use super::patterns::{
    CONTRIBUTION_BASE, NET_SALARY, SEVERANCE_BASE, SEVERANCE_VALUE, TAX_BASE, TOTAL_DEDUCTIONS,
    TOTAL_EARNINGS,
};

/// Raw footer values, before any defaulting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedTotals {
    pub total_earnings: Option<Decimal>,
    pub total_deductions: Option<Decimal>,
    pub net_salary: Option<Decimal>,
    pub contribution_base: Option<Decimal>,
    pub severance_base: Option<Decimal>,
    pub severance_value: Option<Decimal>,
    pub tax_base: Option<Decimal>,
}

/// Extract footer totals and bases from normalized payslip text.
pub fn extract_totals(text: &str) -> ExtractedTotals {
    ExtractedTotals {
        total_earnings: lookup_amount(&TOTAL_EARNINGS, text),
        total_deductions: lookup_amount(&TOTAL_DEDUCTIONS, text),
        net_salary: lookup_amount(&NET_SALARY, text),
        contribution_base: lookup_amount(&CONTRIBUTION_BASE, text),
        severance_base: lookup_amount(&SEVERANCE_BASE, text),
        severance_value: lookup_amount(&SEVERANCE_VALUE, text),
        tax_base: lookup_amount(&TAX_BASE, text),
    }
}

fn lookup_amount(patterns: &[super::patterns::FieldPattern], text: &str) -> Option<Decimal> {
    first_match(patterns, text).and_then(|raw| parse_money(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    const FOOTER: &str = r#"
        TOTAL DE VENCIMENTOS 2.812,50
        TOTAL DE DESCONTOS 224,43
        VALOR LÍQUIDO R$ 2.588,07
        SALÁRIO CONTRIBUIÇÃO INSS 2.812,50
        BASE CÁLC. FGTS 2.812,50
        FGTS DO MÊS 225,00
        BASE CÁLC. IRRF 2.588,07
    "#;

    #[test]
    fn test_extracts_full_footer() {
        let totals = extract_totals(FOOTER);

        assert_eq!(totals.total_earnings, Some(dec!(2812.50)));
        assert_eq!(totals.total_deductions, Some(dec!(224.43)));
        assert_eq!(totals.net_salary, Some(dec!(2588.07)));
        assert_eq!(totals.contribution_base, Some(dec!(2812.50)));
        assert_eq!(totals.severance_base, Some(dec!(2812.50)));
        assert_eq!(totals.severance_value, Some(dec!(225.00)));
        assert_eq!(totals.tax_base, Some(dec!(2588.07)));
    }

    #[test]
    fn test_each_lookup_is_independent() {
        let totals = extract_totals("VALOR LÍQUIDO 925,00");

        assert_eq!(totals.net_salary, Some(dec!(925.00)));
        assert_eq!(totals.total_earnings, None);
        assert_eq!(totals.total_deductions, None);
        assert_eq!(totals.tax_base, None);
    }

    #[test]
    fn test_empty_text_extracts_nothing() {
        assert_eq!(extract_totals(""), ExtractedTotals::default());
    }

    #[test]
    fn test_synonymous_phrasings() {
        let totals = extract_totals("TOTAL DE PROVENTOS 3.000,00\nLIQUIDO A RECEBER 2.611,44");

        assert_eq!(totals.total_earnings, Some(dec!(3000.00)));
        assert_eq!(totals.net_salary, Some(dec!(2611.44)));
    }

    #[test]
    fn test_primary_phrasing_wins_over_fallback() {
        let text = "TOTAL LÍQUIDO 1.111,11\nVALOR LÍQUIDO 2.222,22";
        let totals = extract_totals(text);

        assert_eq!(totals.net_salary, Some(dec!(2222.22)));
    }
}
