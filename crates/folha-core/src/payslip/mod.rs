//! Payslip extraction pipeline: regex rules, table scanning and assembly.

pub mod parser;
pub mod rules;

pub use parser::{PayslipParser, assemble, normalize_text};
