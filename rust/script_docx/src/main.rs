use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use script_docx::{convert_file, ConvertSummary, DocumentStyleConfig, ErrorKind};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Script to convert (defaults to input_script.txt).
    #[arg(long)]
    input: Option<PathBuf>,

    /// Output .docx path (defaults to output_document.docx).
    #[arg(long)]
    out: Option<PathBuf>,
}

fn config_from_args(args: Args) -> DocumentStyleConfig {
    let mut config = DocumentStyleConfig::default();
    if let Some(input) = args.input {
        config = config.with_input_path(input);
    }
    if let Some(out) = args.out {
        config = config.with_output_path(out);
    }
    config
}

fn run(config: &DocumentStyleConfig) -> Result<ConvertSummary> {
    let summary = convert_file(config)
        .with_context(|| format!("convert {}", config.input_path.display()))?;
    Ok(summary)
}

fn report_failure(err: &anyhow::Error, config: &DocumentStyleConfig) {
    let kind = err
        .downcast_ref::<script_docx::Error>()
        .map(script_docx::Error::kind)
        .unwrap_or(ErrorKind::ProcessingOrWriteFailure);

    error!("{err:#}");
    match kind {
        ErrorKind::InputNotFound => {
            info!(
                "Tip: save your script as '{}' next to this program",
                config.input_path.display()
            );
        }
        ErrorKind::ProcessingOrWriteFailure => {
            info!("Troubleshooting tips:");
            info!("1. Check that the input file exists");
            info!("2. Make sure the file is UTF-8 encoded");
            info!(
                "3. Make sure '{}' is not open in another program",
                config.output_path.display()
            );
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = config_from_args(Args::parse());

    info!("═══════════════════════════════════════");
    info!("  Hindi Script to Word Converter");
    info!("═══════════════════════════════════════");

    match run(&config) {
        Ok(summary) => {
            info!("SUCCESS!");
            info!("Document created: {}", summary.output_path.display());
            info!("Total paragraphs: {}", summary.paragraphs);
            info!("Total sections: {}", summary.sections);
        }
        Err(err) => {
            report_failure(&err, &config);
            std::process::exit(1);
        }
    }
}
