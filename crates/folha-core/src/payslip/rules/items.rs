//! Earnings/deductions table parsing.
//!
//! The OCR provider reports lines in approximate reading order, so the table
//! is scanned with an explicit three-state machine instead of index
//! arithmetic: seek the header, consume rows until a terminator, then ignore
//! the rest. Rows that fail the row pattern are skipped silently; malformed
//! OCR output degrades to fewer items, never to an error.

use crate::models::{LineItem, OcrLine};

use super::money::parse_money;
use super::patterns::{TABLE_HEADER, TABLE_ROW, TABLE_TERMINATOR};

/// Scanner state for the line-item table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Looking for the localized header row.
    SeekingHeader,
    /// Inside the table, consuming rows.
    InTable,
    /// Terminator seen; remaining lines belong to the footer.
    Done,
}

/// Parse the earnings/deductions table out of an ordered OCR line array.
///
/// Returns an empty list when no header is found; a payslip without a
/// recognizable table is not an error.
pub fn parse_line_items(lines: &[OcrLine]) -> Vec<LineItem> {
    let mut items = Vec::new();
    let mut state = ScanState::SeekingHeader;

    for line in lines {
        let text = line.text.trim();
        match state {
            ScanState::SeekingHeader => {
                if is_table_header(text) {
                    state = ScanState::InTable;
                }
            }
            ScanState::InTable => {
                if is_table_terminator(text) {
                    state = ScanState::Done;
                } else if let Some(item) = parse_table_row(text) {
                    items.push(item);
                }
            }
            ScanState::Done => break,
        }
    }

    items
}

/// Check whether a line is the localized table header.
fn is_table_header(line: &str) -> bool {
    TABLE_HEADER.is_match(line)
}

/// Check whether a line ends the table (totals, net value or base phrasing).
fn is_table_terminator(line: &str) -> bool {
    TABLE_TERMINATOR.is_match(line)
}

/// Try to read one table row: optional code, description, up to two tokens.
///
/// A `%` in the first trailing token marks a proportional/informational row:
/// the token is kept verbatim as `reference` and both amounts stay unset.
/// Otherwise the first token is the earning and the second the deduction.
fn parse_table_row(line: &str) -> Option<LineItem> {
    let caps = TABLE_ROW.captures(line)?;

    let code = caps.get(1).map(|m| m.as_str().to_string());
    let description = caps.get(2)?.as_str().trim().to_string();
    let first = caps.get(3).map(|m| m.as_str());
    let second = caps.get(4).map(|m| m.as_str());

    let (reference, earning_amount, deduction_amount) = match first {
        Some(token) if token.contains('%') => (Some(token.to_string()), None, None),
        _ => (
            None,
            first.and_then(parse_money),
            second.and_then(parse_money),
        ),
    };

    Some(LineItem {
        code,
        description,
        reference,
        earning_amount,
        deduction_amount,
    })
}
