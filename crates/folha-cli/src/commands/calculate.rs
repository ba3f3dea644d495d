//! Calculate command - net-salary breakdown and insights from a salary input.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use rust_decimal::Decimal;
use tracing::info;

use folha_core::payslip::rules::format_money;
use folha_core::{
    CountryConfig, EmploymentType, SalaryInsightResult, UserSalaryInput, generate_insight,
};

/// Arguments for the calculate command.
#[derive(Args)]
pub struct CalculateArgs {
    /// Salary input file (JSON)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: super::parse::OutputFormat,

    /// Override the employment type from the input file (e.g. "clt", "pj")
    #[arg(long)]
    employment_type: Option<String>,
}

pub fn run(args: CalculateArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    // Load configuration
    let config = if let Some(path) = config_path {
        let config = CountryConfig::from_file(Path::new(path))?;
        let issues = config.validate();
        if !issues.is_empty() {
            eprintln!("{}", style("Configuration issues:").yellow());
            for issue in &issues {
                eprintln!("  - {}", issue);
            }
        }
        config
    } else {
        CountryConfig::brazil()
    };

    // Check input file exists
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let content = fs::read_to_string(&args.input)?;
    let mut input: UserSalaryInput = serde_json::from_str(&content)?;

    if let Some(raw) = &args.employment_type {
        input.employment_type = EmploymentType::from_str(raw);
    }

    info!(
        "Calculating insights for gross salary {}",
        input.gross_salary
    );

    let result = generate_insight(&input, &config);

    let output = match args.format {
        super::parse::OutputFormat::Json => serde_json::to_string_pretty(&result)?,
        super::parse::OutputFormat::Text => format_text(&result, &config.currency),
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

fn format_text(result: &SalaryInsightResult, currency: &str) -> String {
    let mut output = String::new();

    output.push_str("Earnings:\n");
    output.push_str(&format!(
        "  Gross salary:     {} {}\n",
        format_money(result.gross_salary),
        currency
    ));
    output.push_str(&format!(
        "  Total earnings:   {} {}\n",
        format_money(result.total_earnings),
        currency
    ));
    output.push_str("\n");

    output.push_str("Deductions:\n");
    output.push_str(&format!(
        "  INSS ({}):      {} {}\n",
        format_rate(result.inss_rate),
        format_money(result.inss_contribution),
        currency
    ));
    output.push_str(&format!(
        "  IRRF ({}):      {} {}\n",
        format_rate(result.irrf_rate),
        format_money(result.irrf),
        currency
    ));
    output.push_str(&format!(
        "  Other:            {} {}\n",
        format_money(result.other_deductions),
        currency
    ));
    output.push_str(&format!(
        "  Total deductions: {} {}\n",
        format_money(result.total_deductions),
        currency
    ));
    output.push_str("\n");

    output.push_str(&format!(
        "Net salary: {} {} ({} of gross)\n",
        format_money(result.net_salary),
        currency,
        format_rate(result.net_to_gross_ratio)
    ));

    if !result.recommendations.is_empty() {
        output.push_str("\nRecommendations:\n");
        for recommendation in &result.recommendations {
            output.push_str(&format!("  - {}\n", recommendation.message));
        }
    }

    if !result.optimization_opportunities.is_empty() {
        output.push_str("\nOptimization opportunities:\n");
        for opportunity in &result.optimization_opportunities {
            output.push_str(&format!(
                "  - {}: ~{} {}/month\n",
                opportunity.title,
                format_money(opportunity.potential_savings),
                currency
            ));
        }
    }

    output
}

fn format_rate(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}
