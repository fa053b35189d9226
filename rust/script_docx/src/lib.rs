//! Converts sectioned Hindi text-to-speech scripts into formatted Word documents.
//!
//! A script starts with a header block that ends at the line containing
//! `Text-to-Speech`. After it, lines such as `=== भाग 1 ===` open sections and every
//! other non-empty line becomes a body paragraph:
//!
//! ```text
//! मेरी कहानी: भाग एक
//! (एक प्रेम कथा)
//! Text-to-Speech Script
//!
//! === भाग 1 ===
//! पहली पंक्ति
//! [समाप्त]
//! ```

pub mod assemble;
pub mod block;
pub mod config;
pub mod docx;
pub mod error;
pub mod script;
pub mod title;

pub use assemble::{assemble, AssembledDocument};
pub use block::FormattedBlock;
pub use config::{DocumentStyleConfig, ScriptMarkers};
pub use error::{Error, ErrorKind, Result};
pub use script::{parse_script, ParsedScript, ScriptBlock};
pub use title::{extract_title, TitleInfo};

use log::info;
use std::path::PathBuf;

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    pub output_path: PathBuf,
    /// Every block in the document, including title and closing pages.
    pub paragraphs: usize,
    pub sections: usize,
}

/// Builds the document for already-loaded script text.
pub fn build_document(text: &str, config: &DocumentStyleConfig) -> AssembledDocument {
    info!("Processing script...");
    let parsed = parse_script(text, &config.markers);
    info!("Processed {} sections", parsed.sections);

    info!("Creating title page...");
    let title = extract_title(text, &config.markers);
    assemble(&parsed, &title, config)
}

/// Reads the configured input, converts it and writes the configured output.
///
/// Nothing is written unless the whole package was serialized first.
pub fn convert_file(config: &DocumentStyleConfig) -> Result<ConvertSummary> {
    info!("Reading input file...");
    let input = &config.input_path;
    if !input.exists() {
        return Err(Error::InputNotFound(input.clone()));
    }
    let text = std::fs::read_to_string(input).map_err(|source| Error::Read {
        path: input.clone(),
        source,
    })?;

    let doc = build_document(&text, config);

    info!("Creating Word document...");
    let bytes = docx::to_docx_bytes(&doc, config)?;

    info!("Saving document...");
    docx::write_docx(&config.output_path, &bytes)?;

    Ok(ConvertSummary {
        output_path: config.output_path.clone(),
        paragraphs: doc.blocks.len(),
        sections: doc.sections,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_document_reports_its_sections() {
        let text = "कहानी\nText-to-Speech\n=== भाग 1 ===\nपाठ\n=== भाग 2 ===\n";
        let doc = build_document(text, &DocumentStyleConfig::default());
        assert_eq!(doc.sections, 2);
        assert_eq!(doc.title, "कहानी");
        assert_eq!(doc.blocks.len(), 9);
    }
}
