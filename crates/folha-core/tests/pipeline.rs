//! End-to-end tests over the public API: OCR text in, document and
//! insight out.

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use folha_core::models::RecommendationCategory;
use folha_core::{
    CountryConfig, EmploymentType, OcrLine, PayslipParser, UserSalaryInput, generate_insight,
};

const HOLERITE: &str = "\
EMPREGADOR: TRANSPORTES VELOZ SA
CNPJ: 98.765.432/0001-10
RECIBO DE PAGAMENTO DE SALÁRIO
COMPETÊNCIA: 03/2025
FUNCIONÁRIO: ANA LUCIA FERREIRA
CPF: 321.654.987-00
CARGO: MOTORISTA
ADMISSÃO: 02/05/2019
CÓD DESCRIÇÃO REFERÊNCIA VENCIMENTOS DESCONTOS
001 SALARIO BASE 3.100,00
102 HORA EXTRA 50%
201 INSS 372,00
202 IRRF 35,16
TOTAL DE VENCIMENTOS 3.100,00
TOTAL DE DESCONTOS 407,16
VALOR LÍQUIDO 2.692,84
SALÁRIO CONTRIBUIÇÃO INSS 3.100,00
BASE CÁLC. FGTS 3.100,00
FGTS DO MÊS 248,00
BASE CÁLC. IRRF 2.728,00";

fn holerite_lines() -> Vec<OcrLine> {
    HOLERITE.lines().map(OcrLine::from).collect()
}

#[test]
fn test_scanned_payslip_becomes_structured_document() {
    let parser = PayslipParser::new();
    let document = parser.parse(HOLERITE, &holerite_lines());

    assert_eq!(document.company.name.as_deref(), Some("TRANSPORTES VELOZ SA"));
    assert_eq!(
        document.company.tax_id.as_deref(),
        Some("98.765.432/0001-10")
    );
    assert_eq!(
        document.employee.name.as_deref(),
        Some("ANA LUCIA FERREIRA")
    );
    assert_eq!(document.employee.tax_id.as_deref(), Some("321.654.987-00"));
    assert_eq!(document.employee.role.as_deref(), Some("MOTORISTA"));
    assert_eq!(document.employee.admission_date.as_deref(), Some("02/05/2019"));
    assert_eq!(document.payroll.reference_month.as_deref(), Some("03/2025"));

    // Four rows between header and terminator; the 50% row is informational.
    assert_eq!(document.payroll.items.len(), 4);
    assert_eq!(document.payroll.items[0].description, "SALARIO BASE");
    assert_eq!(document.payroll.items[0].earning_amount, Some(dec!(3100.00)));
    assert_eq!(document.payroll.items[1].reference.as_deref(), Some("50%"));
    assert!(document.payroll.items[1].is_informational());
    assert_eq!(document.payroll.items[2].description, "INSS");
    assert_eq!(document.payroll.items[2].earning_amount, Some(dec!(372.00)));

    assert_eq!(document.payroll.totals.total_earnings, dec!(3100.00));
    assert_eq!(document.payroll.totals.total_deductions, dec!(407.16));
    assert_eq!(document.payroll.totals.net_salary, dec!(2692.84));
    assert_eq!(
        document.payroll.bases.contribution_base,
        Some(dec!(3100.00))
    );
    assert_eq!(document.payroll.bases.severance_base, Some(dec!(3100.00)));
    assert_eq!(document.payroll.bases.severance_value, Some(dec!(248.00)));
    assert_eq!(document.payroll.bases.tax_base, Some(dec!(2728.00)));
}

#[test]
fn test_document_survives_json_round_trip() {
    let document = PayslipParser::new().parse(HOLERITE, &holerite_lines());

    let json = serde_json::to_string(&document).unwrap();
    let back: folha_core::PayslipDocument = serde_json::from_str(&json).unwrap();

    assert_eq!(document, back);
    assert!(json.contains("\"referenceMonth\""));
    assert!(json.contains("\"earningAmount\""));
    assert!(json.contains("\"severanceValue\""));
}

#[test]
fn test_salary_insight_for_mid_income() {
    let config = CountryConfig::brazil();
    let result = generate_insight(&UserSalaryInput::new(dec!(3000)), &config);

    assert_eq!(result.inss_contribution, dec!(360.00));
    assert_eq!(result.inss_rate, dec!(0.12));
    assert_eq!(result.irrf, dec!(28.56));
    assert_eq!(result.total_deductions, dec!(388.56));
    assert_eq!(result.net_salary, dec!(2611.44));
    assert_eq!(result.net_to_gross_ratio, dec!(0.8705));
    assert!(
        !result
            .recommendations
            .iter()
            .any(|r| r.category == RecommendationCategory::FiscalStructure)
    );
}

#[test]
fn test_salary_insight_for_exempt_income() {
    let config = CountryConfig::brazil();
    let result = generate_insight(&UserSalaryInput::new(dec!(1000)), &config);

    assert_eq!(result.inss_contribution, dec!(75.00));
    assert_eq!(result.irrf, Decimal::ZERO);
    assert_eq!(result.net_salary, dec!(925.00));
    assert_eq!(result.net_to_gross_ratio, dec!(0.925));
}

#[test]
fn test_heavy_deductions_flag_fiscal_structure() {
    let config = CountryConfig::brazil();
    let mut input = UserSalaryInput::new(dec!(3000));
    input.other_deductions = dec!(900);

    let result = generate_insight(&input, &config);

    assert_eq!(result.net_salary, dec!(1711.44));
    assert!(result.net_to_gross_ratio < dec!(0.70));
    assert!(
        result
            .recommendations
            .iter()
            .any(|r| r.category == RecommendationCategory::FiscalStructure)
    );
}

#[test]
fn test_opportunities_are_always_two_fixed_fractions() {
    let config = CountryConfig::brazil();

    for gross in [dec!(0), dec!(1200), dec!(3000), dec!(8000), dec!(30000)] {
        let result = generate_insight(&UserSalaryInput::new(gross), &config);
        let opportunities = &result.optimization_opportunities;

        assert_eq!(opportunities.len(), 2);
        assert_eq!(
            opportunities[0].potential_savings,
            (gross * dec!(0.05)).round()
        );
        assert_eq!(
            opportunities[1].potential_savings,
            (gross * dec!(0.08)).round()
        );
    }
}

#[test]
fn test_insight_result_serializes_for_the_dashboard() {
    let config = CountryConfig::brazil();
    let mut input = UserSalaryInput::new(dec!(3000));
    input.employment_type = EmploymentType::Contractor;

    let json = serde_json::to_string(&generate_insight(&input, &config)).unwrap();

    assert!(json.contains("\"netToGrossRatio\""));
    assert!(json.contains("\"inssContribution\""));
    assert!(json.contains("\"optimizationOpportunities\""));
    assert!(json.contains("\"potentialSavings\""));
}

#[test]
fn test_custom_config_file_drives_the_calculators() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.json");

    let mut config = CountryConfig::brazil();
    config.salary_brackets.truncate(1);
    config.salary_brackets[0].max = None;
    config.salary_brackets[0].rate = dec!(0.10);
    config.save(&path).unwrap();

    let loaded = CountryConfig::from_file(&path).unwrap();
    let result = generate_insight(&UserSalaryInput::new(dec!(5000)), &loaded);

    assert_eq!(result.inss_contribution, dec!(500.00));
    assert_eq!(result.inss_rate, dec!(0.10));
}

#[test]
fn test_parse_then_calculate_round_trip() {
    // Extract the printed gross from the document and run it through the
    // calculators, the way the dashboard flow does.
    let document = PayslipParser::new().parse(HOLERITE, &holerite_lines());
    let gross = document.payroll.totals.total_earnings;

    let result = generate_insight(&UserSalaryInput::new(gross), &CountryConfig::brazil());

    assert_eq!(result.gross_salary, dec!(3100.00));
    assert_eq!(result.inss_contribution, dec!(372.00));
    assert_eq!(result.net_salary, dec!(2692.84));
}
