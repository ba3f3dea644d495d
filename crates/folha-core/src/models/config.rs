//! Country-level tax and payroll configuration.
//!
//! A [`CountryConfig`] bundles everything the calculators need for one
//! country/year: the social-contribution bracket table, the income-tax tier
//! table, the per-dependent deduction and a few presentation hints. Configs
//! are immutable value types, loaded externally and passed by value; the
//! built-in [`CountryConfig::brazil`] table carries the published 2025
//! figures.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::error::{FolhaError, Result};

/// One social-contribution salary bracket.
///
/// Brackets are evaluated in array order and the first match wins, so the
/// table owner is responsible for keeping ranges non-overlapping. An absent
/// `max` means the bracket is unbounded above.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryBracket {
    /// Inclusive lower bound.
    pub min: Decimal,

    /// Inclusive upper bound; `None` means unbounded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<Decimal>,

    /// Flat rate applied to the whole salary.
    pub rate: Decimal,
}

impl SalaryBracket {
    /// Check whether `salary` falls inside this bracket.
    pub fn contains(&self, salary: Decimal) -> bool {
        salary >= self.min && self.max.is_none_or(|max| salary <= max)
    }
}

/// One progressive income-tax tier.
///
/// Tiers use the published rate/constant technique: the tax for a base in
/// this tier is `base * rate - deduction`, which approximates marginal
/// taxation without iterating the lower tiers. The exempt range is a regular
/// tier with a zero rate and a zero deduction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeTaxTier {
    /// Inclusive upper boundary of the tax base; `None` means unbounded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub up_to: Option<Decimal>,

    /// Tier rate.
    pub rate: Decimal,

    /// Subtraction constant (parcela a deduzir).
    pub deduction: Decimal,
}

impl IncomeTaxTier {
    /// Check whether `tax_base` falls at or below this tier's boundary.
    pub fn covers(&self, tax_base: Decimal) -> bool {
        self.up_to.is_none_or(|boundary| tax_base <= boundary)
    }
}

/// Tax and payroll parameters for one country/year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryConfig {
    /// ISO 3166-1 alpha-2 country code.
    pub country_code: String,

    /// ISO 4217 currency code.
    pub currency: String,

    /// Date format hint for the UI, e.g. `DD/MM/YYYY`.
    pub date_format: String,

    /// Ordered social-contribution brackets (first match wins).
    pub salary_brackets: Vec<SalaryBracket>,

    /// Ordered income-tax tiers (ascending boundary, unbounded tier last).
    pub income_tax_tiers: Vec<IncomeTaxTier>,

    /// Monthly income-tax deduction per declared dependent.
    pub dependent_deduction: Decimal,

    /// Benefit providers commonly seen on payslips for this country.
    #[serde(default)]
    pub benefit_providers: Vec<String>,

    /// Contract types commonly seen on payslips for this country.
    #[serde(default)]
    pub contract_types: Vec<String>,
}

impl CountryConfig {
    /// Built-in Brazilian configuration with the published 2025 tables.
    pub fn brazil() -> Self {
        Self {
            country_code: "BR".to_string(),
            currency: "BRL".to_string(),
            date_format: "DD/MM/YYYY".to_string(),
            salary_brackets: vec![
                SalaryBracket {
                    min: dec!(0),
                    max: Some(dec!(1518.00)),
                    rate: dec!(0.075),
                },
                SalaryBracket {
                    min: dec!(1518.01),
                    max: Some(dec!(2793.88)),
                    rate: dec!(0.09),
                },
                SalaryBracket {
                    min: dec!(2793.89),
                    max: Some(dec!(4190.83)),
                    rate: dec!(0.12),
                },
                SalaryBracket {
                    min: dec!(4190.84),
                    max: Some(dec!(8157.41)),
                    rate: dec!(0.14),
                },
            ],
            income_tax_tiers: vec![
                IncomeTaxTier {
                    up_to: Some(dec!(2259.20)),
                    rate: dec!(0),
                    deduction: dec!(0),
                },
                IncomeTaxTier {
                    up_to: Some(dec!(2826.65)),
                    rate: dec!(0.075),
                    deduction: dec!(169.44),
                },
                IncomeTaxTier {
                    up_to: Some(dec!(3751.05)),
                    rate: dec!(0.15),
                    deduction: dec!(381.44),
                },
                IncomeTaxTier {
                    up_to: Some(dec!(4664.68)),
                    rate: dec!(0.225),
                    deduction: dec!(662.77),
                },
                IncomeTaxTier {
                    up_to: None,
                    rate: dec!(0.275),
                    deduction: dec!(896.00),
                },
            ],
            dependent_deduction: dec!(189.59),
            benefit_providers: vec![
                "Alelo".to_string(),
                "Sodexo".to_string(),
                "VR Beneficios".to_string(),
                "Ticket".to_string(),
                "Flash".to_string(),
            ],
            contract_types: vec![
                "CLT".to_string(),
                "PJ".to_string(),
                "Estagio".to_string(),
            ],
        }
    }

    /// Load a configuration from a JSON file.
    ///
    /// Fails on unreadable files, malformed JSON and negative money values,
    /// which would break every downstream calculation. Table-shape concerns
    /// (ordering, overlap, coverage) stay loadable because first-match-wins
    /// keeps them well defined; [`CountryConfig::validate`] reports them.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config: Self = serde_json::from_reader(reader)?;
        config.check_values()?;
        Ok(config)
    }

    /// Save this configuration to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Reject negative rates, bounds and deductions.
    fn check_values(&self) -> Result<()> {
        for bracket in &self.salary_brackets {
            if bracket.min < Decimal::ZERO {
                return Err(FolhaError::Config(format!(
                    "bracket minimum {} is negative",
                    bracket.min
                )));
            }
            if bracket.rate < Decimal::ZERO {
                return Err(FolhaError::Config(format!(
                    "bracket rate {} is negative",
                    bracket.rate
                )));
            }
        }

        for tier in &self.income_tax_tiers {
            if tier.rate < Decimal::ZERO {
                return Err(FolhaError::Config(format!(
                    "tier rate {} is negative",
                    tier.rate
                )));
            }
            if tier.deduction < Decimal::ZERO {
                return Err(FolhaError::Config(format!(
                    "tier deduction {} is negative",
                    tier.deduction
                )));
            }
        }

        if self.dependent_deduction < Decimal::ZERO {
            return Err(FolhaError::Config(format!(
                "dependent deduction {} is negative",
                self.dependent_deduction
            )));
        }

        Ok(())
    }

    /// Check table shape and coverage.
    ///
    /// Returns human-readable issues: ordering, overlaps, coverage gaps and
    /// bounded top entries. These never fail a load; overlapping or
    /// out-of-order tables keep the documented first-match-wins behavior,
    /// and salaries outside every bracket withhold zero.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();
        let cent = Decimal::new(1, 2);

        if self.salary_brackets.is_empty() {
            issues.push("Salary bracket table is empty; every salary withholds zero".to_string());
        }

        for bracket in &self.salary_brackets {
            if let Some(max) = bracket.max {
                if max < bracket.min {
                    issues.push(format!(
                        "Salary bracket [{}, {}] is inverted",
                        bracket.min, max
                    ));
                }
            }
        }

        for pair in self.salary_brackets.windows(2) {
            if pair[1].min < pair[0].min {
                issues.push(format!(
                    "Salary brackets are not in ascending order near {}",
                    pair[1].min
                ));
            }
            match pair[0].max {
                Some(max) if pair[1].min <= max => {
                    issues.push(format!(
                        "Salary brackets [{}, {}] and [{}, ...] overlap; the first match wins",
                        pair[0].min, max, pair[1].min
                    ));
                }
                Some(max) if pair[1].min > max + cent => {
                    issues.push(format!(
                        "Coverage gap between {} and {}; salaries in between withhold zero",
                        max, pair[1].min
                    ));
                }
                Some(_) => {}
                None => {
                    issues.push(format!(
                        "Salary bracket starting at {} is unreachable behind an unbounded bracket",
                        pair[1].min
                    ));
                }
            }
        }

        if let Some(max) = self.salary_brackets.last().and_then(|bracket| bracket.max) {
            issues.push(format!(
                "Top salary bracket is bounded at {}; higher salaries withhold zero",
                max
            ));
        }

        if self.income_tax_tiers.is_empty() {
            issues.push("Income tax tier table is empty; no income tax is withheld".to_string());
        }

        for pair in self.income_tax_tiers.windows(2) {
            match (pair[0].up_to, pair[1].up_to) {
                (Some(lower), Some(upper)) if upper <= lower => {
                    issues.push(format!(
                        "Income tax tiers are not in ascending order near {}",
                        upper
                    ));
                }
                (None, _) => {
                    issues.push(
                        "Income tax tiers after an unbounded tier are unreachable".to_string(),
                    );
                }
                _ => {}
            }
        }

        if let Some(up_to) = self.income_tax_tiers.last().and_then(|tier| tier.up_to) {
            issues.push(format!(
                "Top income tax tier is bounded at {}; higher tax bases are untaxed",
                up_to
            ));
        }

        issues
    }
}

impl Default for CountryConfig {
    fn default() -> Self {
        Self::brazil()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_brazil_tables() {
        let config = CountryConfig::brazil();
        assert_eq!(config.salary_brackets.len(), 4);
        assert_eq!(config.income_tax_tiers.len(), 5);
        assert_eq!(config.dependent_deduction, dec!(189.59));

        // The published INSS table stops at the contribution ceiling, so the
        // lint reports that one caveat and nothing else.
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].contains("8157.41"));
    }

    #[test]
    fn test_bracket_contains_boundaries() {
        let config = CountryConfig::brazil();
        let first = &config.salary_brackets[0];
        let second = &config.salary_brackets[1];

        assert!(first.contains(dec!(1518.00)));
        assert!(!first.contains(dec!(1518.01)));
        assert!(second.contains(dec!(1518.01)));
        assert!(second.contains(dec!(2793.88)));
    }

    #[test]
    fn test_unbounded_bracket() {
        let bracket = SalaryBracket {
            min: dec!(8157.42),
            max: None,
            rate: dec!(0.14),
        };
        assert!(bracket.contains(dec!(1000000)));
        assert!(!bracket.contains(dec!(8157.41)));
    }

    #[test]
    fn test_tier_covers() {
        let config = CountryConfig::brazil();
        assert!(config.income_tax_tiers[0].covers(dec!(2259.20)));
        assert!(!config.income_tax_tiers[0].covers(dec!(2259.21)));
        assert!(config.income_tax_tiers[4].covers(dec!(99999)));
    }

    #[test]
    fn test_validate_flags_inverted_bracket() {
        let mut config = CountryConfig::brazil();
        config.salary_brackets[1].max = Some(dec!(100));
        let issues = config.validate();

        assert!(issues.iter().any(|issue| issue.contains("inverted")));
    }

    #[test]
    fn test_validate_flags_overlap_and_gap() {
        let mut config = CountryConfig::brazil();
        config.salary_brackets[1].min = dec!(1000);
        let issues = config.validate();
        assert!(issues.iter().any(|issue| issue.contains("overlap")));

        config.salary_brackets[1].min = dec!(2000);
        let issues = config.validate();
        assert!(issues.iter().any(|issue| issue.contains("gap")));
    }

    #[test]
    fn test_validate_flags_unreachable_tiers() {
        let mut config = CountryConfig::brazil();
        config.income_tax_tiers[1].up_to = None;
        let issues = config.validate();

        assert!(issues.iter().any(|issue| issue.contains("unreachable")));
    }

    #[test]
    fn test_unbounded_top_bracket_quiets_the_lint() {
        let mut config = CountryConfig::brazil();
        config.salary_brackets[3].max = None;

        assert_eq!(config.validate(), Vec::<String>::new());
    }

    #[test]
    fn test_from_file_rejects_negative_rate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");

        let mut config = CountryConfig::brazil();
        config.salary_brackets[0].rate = dec!(-0.075);
        config.save(&path).unwrap();

        let error = CountryConfig::from_file(&path).unwrap_err();
        assert!(error.to_string().contains("negative"));
    }

    #[test]
    fn test_config_round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("br.json");

        let config = CountryConfig::brazil();
        config.save(&path).unwrap();
        let loaded = CountryConfig::from_file(&path).unwrap();

        assert_eq!(config, loaded);
    }

    #[test]
    fn test_config_serializes_camel_case() {
        let json = serde_json::to_string(&CountryConfig::brazil()).unwrap();
        assert!(json.contains("\"countryCode\":\"BR\""));
        assert!(json.contains("\"salaryBrackets\""));
        assert!(json.contains("\"incomeTaxTiers\""));
        assert!(json.contains("\"dependentDeduction\""));
        assert!(json.contains("\"upTo\""));
    }
}
