//! Parse command - extract a structured document from an OCR dump.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use serde::Deserialize;
use tracing::{debug, info};

use folha_core::payslip::rules::format_money;
use folha_core::{OcrLine, PayslipDocument, PayslipParser};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input file (JSON OCR dump or plain text)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

/// OCR dump as delivered by the document-analysis provider.
#[derive(Deserialize)]
struct OcrDump {
    /// Full recognized text.
    text: String,

    /// Ordered line records; derived from the text when absent.
    #[serde(default)]
    lines: Vec<OcrLine>,
}

pub fn run(args: ParseArgs) -> anyhow::Result<()> {
    // Check input file exists
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let extension = args
        .input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    info!("Parsing OCR dump: {}", args.input.display());

    let content = fs::read_to_string(&args.input)?;
    let dump = match extension.as_str() {
        "json" => serde_json::from_str::<OcrDump>(&content)?,
        "txt" | "text" => OcrDump {
            text: content,
            lines: Vec::new(),
        },
        _ => anyhow::bail!("Unsupported file format: {}", extension),
    };

    // A plain-text dump carries no line records; reading order is then only
    // as good as the line breaks in the text.
    let lines = if dump.lines.is_empty() {
        dump.text.lines().map(OcrLine::from).collect()
    } else {
        dump.lines
    };

    debug!("Dump carries {} lines", lines.len());

    let document = PayslipParser::new().parse(&dump.text, &lines);

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&document)?,
        OutputFormat::Text => format_text(&document),
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn format_text(document: &PayslipDocument) -> String {
    let mut output = String::new();

    if let Some(month) = &document.payroll.reference_month {
        output.push_str(&format!("Reference month: {}\n", month));
        output.push_str("\n");
    }

    output.push_str("Company:\n");
    output.push_str(&format!(
        "  {}\n",
        document.company.name.as_deref().unwrap_or("(not found)")
    ));
    if let Some(tax_id) = &document.company.tax_id {
        output.push_str(&format!("  CNPJ: {}\n", tax_id));
    }
    output.push_str("\n");

    output.push_str("Employee:\n");
    output.push_str(&format!(
        "  {}\n",
        document.employee.name.as_deref().unwrap_or("(not found)")
    ));
    if let Some(tax_id) = &document.employee.tax_id {
        output.push_str(&format!("  CPF: {}\n", tax_id));
    }
    if let Some(role) = &document.employee.role {
        output.push_str(&format!("  Role: {}\n", role));
    }
    if let Some(date) = &document.employee.admission_date {
        output.push_str(&format!("  Admitted: {}\n", date));
    }
    output.push_str("\n");

    if !document.payroll.items.is_empty() {
        output.push_str("Items:\n");
        for item in &document.payroll.items {
            let mut row = String::new();
            if let Some(code) = &item.code {
                row.push_str(&format!("{} ", code));
            }
            row.push_str(&item.description);
            if let Some(reference) = &item.reference {
                row.push_str(&format!(" ({})", reference));
            }
            if let Some(amount) = item.earning_amount {
                row.push_str(&format!("  +{}", format_money(amount)));
            }
            if let Some(amount) = item.deduction_amount {
                row.push_str(&format!("  -{}", format_money(amount)));
            }
            output.push_str(&format!("  {}\n", row));
        }
        output.push_str("\n");
    }

    output.push_str("Totals:\n");
    output.push_str(&format!(
        "  Earnings:   {}\n",
        format_money(document.payroll.totals.total_earnings)
    ));
    output.push_str(&format!(
        "  Deductions: {}\n",
        format_money(document.payroll.totals.total_deductions)
    ));
    output.push_str(&format!(
        "  Net:        {}\n",
        format_money(document.payroll.totals.net_salary)
    ));

    let bases = &document.payroll.bases;
    if bases.contribution_base.is_some()
        || bases.severance_base.is_some()
        || bases.severance_value.is_some()
        || bases.tax_base.is_some()
    {
        output.push_str("\nBases:\n");
        if let Some(base) = bases.contribution_base {
            output.push_str(&format!("  INSS base:  {}\n", format_money(base)));
        }
        if let Some(base) = bases.severance_base {
            output.push_str(&format!("  FGTS base:  {}\n", format_money(base)));
        }
        if let Some(value) = bases.severance_value {
            output.push_str(&format!("  FGTS month: {}\n", format_money(value)));
        }
        if let Some(base) = bases.tax_base {
            output.push_str(&format!("  IRRF base:  {}\n", format_money(base)));
        }
    }

    output
}
