use crate::block::{Alignment, FormattedBlock, ParagraphFormat, RunFormat, StyledText};
use crate::config::{DocumentStyleConfig, TextStyle};
use crate::script::{ParsedScript, ScriptBlock};
use crate::title::TitleInfo;

pub const HEADING_STYLE_ID: &str = "Heading1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledDocument {
    /// Title as shown on the title page, also written to the package metadata.
    pub title: String,
    pub blocks: Vec<FormattedBlock>,
    /// Section markers found in the script body.
    pub sections: usize,
}

fn centered(before: Option<u32>, after: u32) -> ParagraphFormat {
    ParagraphFormat {
        alignment: Alignment::Center,
        spacing_before: before,
        spacing_after: Some(after),
        style_id: None,
    }
}

fn run(style: &TextStyle, bold: bool, italic: bool) -> RunFormat {
    RunFormat {
        bold,
        italic,
        size: style.size,
        color: Some(style.color.clone()),
    }
}

fn styled(text: &str, paragraph: ParagraphFormat, run: RunFormat) -> StyledText {
    StyledText {
        text: text.to_string(),
        paragraph,
        run,
    }
}

fn section_heading(text: &str, config: &DocumentStyleConfig) -> FormattedBlock {
    let paragraph = ParagraphFormat {
        alignment: Alignment::Left,
        spacing_before: Some(config.heading_spacing_before),
        spacing_after: Some(config.heading_spacing_after),
        style_id: Some(HEADING_STYLE_ID),
    };
    FormattedBlock::SectionHeading(styled(text, paragraph, run(&config.heading, true, false)))
}

fn body_paragraph(text: &str, config: &DocumentStyleConfig) -> FormattedBlock {
    let paragraph = ParagraphFormat {
        spacing_after: Some(config.paragraph_spacing),
        ..ParagraphFormat::default()
    };
    let run = RunFormat {
        size: config.body_size,
        ..RunFormat::default()
    };
    FormattedBlock::BodyParagraph(styled(text, paragraph, run))
}

/// Lays out title page, script content and closing page as one ordered block list.
pub fn assemble(
    parsed: &ParsedScript,
    title: &TitleInfo,
    config: &DocumentStyleConfig,
) -> AssembledDocument {
    let title_text = title.title.as_deref().unwrap_or(&config.fallback_title);
    let subtitle_text = title
        .subtitle
        .as_deref()
        .unwrap_or(&config.fallback_subtitle);

    let mut blocks = Vec::with_capacity(parsed.blocks.len() + 6);

    blocks.push(FormattedBlock::Title(styled(
        title_text,
        centered(Some(240), 120),
        run(&config.title, true, false),
    )));
    blocks.push(FormattedBlock::Subtitle(styled(
        subtitle_text,
        centered(None, 120),
        run(&config.subtitle, true, false),
    )));
    blocks.push(FormattedBlock::Caption(styled(
        &config.caption_text,
        centered(None, 480),
        run(&config.caption, false, false),
    )));

    for block in &parsed.blocks {
        blocks.push(match block {
            ScriptBlock::SectionHeading(text) => section_heading(text, config),
            ScriptBlock::Paragraph(text) => body_paragraph(text, config),
            ScriptBlock::PageBreak => FormattedBlock::PageBreak,
        });
    }

    blocks.push(FormattedBlock::PageBreak);
    blocks.push(FormattedBlock::ClosingHeading(styled(
        &config.closing_heading_text,
        centered(Some(480), 240),
        run(&config.closing_heading, true, false),
    )));
    blocks.push(FormattedBlock::ClosingQuote(styled(
        &config.closing_quote_text,
        centered(None, 120),
        run(&config.closing_quote, false, true),
    )));

    AssembledDocument {
        title: title_text.to_string(),
        blocks,
        sections: parsed.sections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(blocks: Vec<ScriptBlock>, sections: usize) -> ParsedScript {
        ParsedScript { blocks, sections }
    }

    #[test]
    fn wraps_content_with_title_and_closing_pages() {
        let config = DocumentStyleConfig::default();
        let script = parsed(
            vec![
                ScriptBlock::SectionHeading("भाग 1".into()),
                ScriptBlock::Paragraph("पाठ".into()),
            ],
            1,
        );
        let title = TitleInfo {
            title: Some("मेरी कहानी".into()),
            subtitle: Some("एक प्रेम कथा".into()),
        };
        let doc = assemble(&script, &title, &config);

        assert_eq!(doc.title, "मेरी कहानी");
        assert_eq!(doc.sections, 1);
        assert_eq!(doc.blocks.len(), 8);
        assert!(matches!(doc.blocks[0], FormattedBlock::Title(_)));
        assert_eq!(doc.blocks[1].text(), Some("एक प्रेम कथा"));
        assert_eq!(doc.blocks[2].text(), Some("Text-to-Speech स्क्रिप्ट"));
        assert!(matches!(doc.blocks[3], FormattedBlock::SectionHeading(_)));
        assert!(matches!(doc.blocks[4], FormattedBlock::BodyParagraph(_)));
        assert_eq!(doc.blocks[5], FormattedBlock::PageBreak);
        assert_eq!(doc.blocks[6].text(), Some("समाप्त"));
        assert_eq!(doc.blocks[7].text(), Some("\"धन्यवाद!\""));
    }

    #[test]
    fn missing_title_falls_back_to_defaults() {
        let config = DocumentStyleConfig::default();
        let doc = assemble(&ParsedScript::default(), &TitleInfo::default(), &config);
        assert_eq!(doc.title, "Hindi Script");
        assert_eq!(doc.blocks[0].text(), Some("Hindi Script"));
        assert_eq!(doc.blocks[1].text(), Some("TTS Document"));
        assert_eq!(doc.blocks.len(), 6);
    }

    #[test]
    fn applies_per_block_styles() {
        let config = DocumentStyleConfig::default();
        let script = parsed(
            vec![
                ScriptBlock::SectionHeading("भाग 1".into()),
                ScriptBlock::Paragraph("पाठ".into()),
            ],
            1,
        );
        let doc = assemble(&script, &TitleInfo::default(), &config);

        let title = doc.blocks[0].styled_text().unwrap();
        assert!(title.run.bold);
        assert_eq!(title.run.size, 52);
        assert_eq!(title.run.color.as_deref(), Some("FF6F00"));
        assert_eq!(title.paragraph.alignment, Alignment::Center);
        assert_eq!(title.paragraph.spacing_before, Some(240));

        let heading = doc.blocks[3].styled_text().unwrap();
        assert_eq!(heading.paragraph.style_id, Some(HEADING_STYLE_ID));
        assert_eq!(heading.paragraph.spacing_before, Some(360));
        assert_eq!(heading.paragraph.spacing_after, Some(240));
        assert_eq!(heading.run.color.as_deref(), Some("1565C0"));

        let body = doc.blocks[4].styled_text().unwrap();
        assert!(!body.run.bold);
        assert_eq!(body.run.size, 24);
        assert_eq!(body.run.color, None);
        assert_eq!(body.paragraph.spacing_after, Some(140));

        let quote = doc.blocks.last().and_then(|b| b.styled_text()).unwrap();
        assert!(quote.run.italic);
        assert_eq!(quote.run.color.as_deref(), Some("D84315"));
    }

    #[test]
    fn empty_extracted_title_is_kept() {
        let config = DocumentStyleConfig::default();
        let title = TitleInfo {
            title: Some(String::new()),
            subtitle: None,
        };
        let doc = assemble(&ParsedScript::default(), &title, &config);
        assert_eq!(doc.blocks[0].text(), Some(""));
        assert_eq!(doc.blocks[1].text(), Some("TTS Document"));
    }
}
