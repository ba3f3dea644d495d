//! Rule-based extraction for Brazilian payslips.

pub mod fields;
pub mod items;
pub mod money;
pub mod patterns;
pub mod totals;

pub use fields::{ExtractedFields, extract_fields};
pub use items::parse_line_items;
pub use money::{format_money, parse_money};
pub use totals::{ExtractedTotals, extract_totals};

use patterns::FieldPattern;

/// Evaluate an ordered candidate list; the first pattern that matches wins.
///
/// Candidates are tried in declared priority order regardless of where in
/// the text they match. An empty capture falls through to the next
/// candidate, so a sloppy match cannot shadow a better phrasing.
pub fn first_match(patterns: &[FieldPattern], text: &str) -> Option<String> {
    patterns.iter().find_map(|candidate| {
        let caps = candidate.regex.captures(text)?;
        let value = caps.get(1)?.as_str().trim();
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::patterns::*;
    use super::*;

    fn assert_ascending(list: &[FieldPattern]) {
        for pair in list.windows(2) {
            assert!(
                pair[0].priority < pair[1].priority,
                "candidate list out of order: {} before {}",
                pair[0].priority,
                pair[1].priority
            );
        }
    }

    #[test]
    fn test_candidate_lists_are_priority_ordered() {
        assert_ascending(&COMPANY_NAME);
        assert_ascending(&COMPANY_TAX_ID);
        assert_ascending(&EMPLOYEE_NAME);
        assert_ascending(&EMPLOYEE_TAX_ID);
        assert_ascending(&EMPLOYEE_ROLE);
        assert_ascending(&ADMISSION_DATE);
        assert_ascending(&REFERENCE_MONTH);
        assert_ascending(&TOTAL_EARNINGS);
        assert_ascending(&TOTAL_DEDUCTIONS);
        assert_ascending(&NET_SALARY);
        assert_ascending(&CONTRIBUTION_BASE);
        assert_ascending(&SEVERANCE_BASE);
        assert_ascending(&SEVERANCE_VALUE);
        assert_ascending(&TAX_BASE);
    }

    #[test]
    fn test_first_match_respects_priority_not_position() {
        // The higher-priority phrasing appears later in the text and still wins.
        let text = "EMPRESA: SEGUNDA OPCAO\nRAZÃO SOCIAL: PRIMEIRA OPCAO";
        let value = first_match(&COMPANY_NAME, text);

        assert_eq!(value.as_deref(), Some("PRIMEIRA OPCAO"));
    }

    #[test]
    fn test_first_match_none_when_nothing_matches() {
        assert_eq!(first_match(&COMPANY_NAME, "linha qualquer"), None);
    }
}
