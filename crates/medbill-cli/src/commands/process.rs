//! Process command - extract structured data from one OCR text dump.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::{debug, info};

use medbill_core::models::config::MedbillConfig;
use medbill_core::models::record::InvoiceRecord;
use medbill_core::InvoicePipeline;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input text file: recognized OCR fragments, one per line
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also write the line items as a CSV table to this path
    #[arg(long)]
    items_csv: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV line item table
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    // Load configuration
    let config = if let Some(path) = config_path {
        MedbillConfig::from_file(std::path::Path::new(path))?
    } else {
        MedbillConfig::default()
    };

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let text = fs::read_to_string(&args.input)?;
    let pipeline = InvoicePipeline::with_config(&config.extraction);
    let result = pipeline.process_text(&text);

    for warning in &result.warnings {
        eprintln!("{} {}", style("!").yellow(), warning);
    }

    // Format output
    let output = format_record(&result.record, args.format)?;

    // Write output
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

    // Items table for spreadsheet tools
    if let Some(csv_path) = &args.items_csv {
        fs::write(csv_path, items_csv(&result.record)?)?;
        println!(
            "{} Items saved to {}",
            style("✓").green(),
            csv_path.display()
        );
    }

    debug!("Extraction took {}ms", result.processing_time_ms);

    Ok(())
}

fn format_record(record: &InvoiceRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Csv => items_csv(record),
        OutputFormat::Text => format_text(record),
    }
}

/// Render the items as a table with columns
/// `description, quantity, rate, total`, one row per item.
fn items_csv(record: &InvoiceRecord) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["description", "quantity", "rate", "total"])?;

    for item in &record.items {
        wtr.write_record([
            item.description.clone(),
            item.quantity.map(|q| q.to_string()).unwrap_or_default(),
            item.rate.to_string(),
            item.total.to_string(),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(record: &InvoiceRecord) -> anyhow::Result<String> {
    let mut output = String::new();

    output.push_str(&format!("Hospital: {}\n", record.header.hospital_name));
    output.push_str(&format!("Location: {}\n", record.header.location));
    output.push_str(&format!("Invoice:  {}", record.header.invoice_number));
    output.push_str(&format!(" ({})\n", record.header.invoice_date));
    output.push_str(&format!("Patient:  {}\n", record.header.patient_name));
    output.push_str(&format!(
        "Stay:     {} to {}\n",
        record.header.admission_date, record.header.discharge_date
    ));
    output.push('\n');

    output.push_str(&format!("Items ({}):\n", record.items.len()));
    for item in &record.items {
        let quantity = item
            .quantity
            .map(|q| q.to_string())
            .unwrap_or_else(|| "-".to_string());
        output.push_str(&format!(
            "  {:<40} {:>5} {:>8} {:>10}\n",
            item.description, quantity, item.rate, item.total
        ));
    }
    output.push('\n');

    match record.grand_total.amount() {
        Some(amount) => {
            output.push_str(&format!("Grand total: {} {}\n", amount, record.currency))
        }
        None => output.push_str("Grand total: Not Found\n"),
    }

    Ok(output)
}
