//! Process command - extract data from a single invoice file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use finvoice_core::models::config::FinvoiceConfig;
use finvoice_core::models::invoice::InvoiceData;
use finvoice_core::pipeline::InvoicePipeline;

#[cfg(feature = "tesseract")]
type Backend = finvoice_core::ocr::TesseractBackend;
#[cfg(not(feature = "tesseract"))]
type Backend = ocr_disabled::DisabledBackend;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (PDF or image)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Skip OCR and use only PDF embedded text
    #[arg(long)]
    text_only: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = if let Some(path) = config_path {
        FinvoiceConfig::from_file(Path::new(path))?
    } else {
        FinvoiceConfig::default()
    };

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap(),
    );

    pb.set_message("Loading file...");
    let buffer = fs::read(&args.input)?;

    let pipeline = build_pipeline(config);
    let data = if args.text_only {
        pb.set_message("Extracting PDF text...");
        pipeline.process_text_only(&buffer)?
    } else {
        pb.set_message("Processing document...");
        pipeline.process_document(&buffer).await?
    };
    pipeline.cleanup().await;
    pb.finish_with_message("Done");

    let output = format_invoice(&data, args.format)?;

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

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

#[cfg(feature = "tesseract")]
fn build_pipeline(config: FinvoiceConfig) -> InvoicePipeline<Backend> {
    InvoicePipeline::with_tesseract(config)
}

#[cfg(not(feature = "tesseract"))]
fn build_pipeline(config: FinvoiceConfig) -> InvoicePipeline<Backend> {
    InvoicePipeline::new(config, |_config| {
        Err(finvoice_core::error::OcrError::Init(
            "OCR support is not compiled in. Rebuild with --features tesseract, \
             or use --text-only with a text-based PDF."
                .to_string(),
        ))
    })
}

#[cfg(not(feature = "tesseract"))]
mod ocr_disabled {
    use finvoice_core::error::OcrError;
    use finvoice_core::ocr::OcrBackend;

    /// Placeholder backend for builds without native OCR. Never actually
    /// constructed; the pipeline factory fails first.
    pub struct DisabledBackend;

    impl OcrBackend for DisabledBackend {
        fn recognize(&mut self, _image: &[u8]) -> Result<String, OcrError> {
            Err(OcrError::Recognition(
                "OCR support is not compiled in".to_string(),
            ))
        }
    }
}

fn format_invoice(data: &InvoiceData, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(data)?),
        OutputFormat::Text => Ok(format_text(data)),
    }
}

fn format_text(data: &InvoiceData) -> String {
    let mut output = String::new();

    let or_dash = |v: Option<String>| v.unwrap_or_else(|| "-".to_string());

    output.push_str(&format!(
        "Invoice: {}\n",
        or_dash(data.invoice_number.clone())
    ));
    output.push_str(&format!(
        "Vendor:  {}\n",
        or_dash(data.vendor.clone())
    ));
    output.push_str(&format!(
        "Date:    {}\n",
        or_dash(data.date.map(|d| d.to_string()))
    ));
    output.push_str(&format!(
        "Total:   {}\n",
        or_dash(data.total_amount.map(|t| t.to_string()))
    ));

    if !data.line_items.is_empty() {
        output.push_str("\nLine items:\n");
        for item in &data.line_items {
            output.push_str(&format!(
                "  {} x {} @ {} = {}\n",
                item.quantity, item.description, item.unit_price, item.line_total
            ));
        }
    }

    output
}
