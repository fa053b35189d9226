#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
}

/// Paragraph-level formatting. Spacing is in twentieths of a point.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParagraphFormat {
    pub alignment: Alignment,
    pub spacing_before: Option<u32>,
    pub spacing_after: Option<u32>,
    /// Id of a paragraph style defined in `word/styles.xml`.
    pub style_id: Option<&'static str>,
}

/// Character formatting for the single run in a block. Size is in half-points.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunFormat {
    pub bold: bool,
    pub italic: bool,
    pub size: u32,
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledText {
    pub text: String,
    pub paragraph: ParagraphFormat,
    pub run: RunFormat,
}

/// One styled unit of the output document, in reading order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormattedBlock {
    Title(StyledText),
    Subtitle(StyledText),
    Caption(StyledText),
    SectionHeading(StyledText),
    BodyParagraph(StyledText),
    PageBreak,
    ClosingHeading(StyledText),
    ClosingQuote(StyledText),
}

impl FormattedBlock {
    pub fn styled_text(&self) -> Option<&StyledText> {
        match self {
            FormattedBlock::Title(t)
            | FormattedBlock::Subtitle(t)
            | FormattedBlock::Caption(t)
            | FormattedBlock::SectionHeading(t)
            | FormattedBlock::BodyParagraph(t)
            | FormattedBlock::ClosingHeading(t)
            | FormattedBlock::ClosingQuote(t) => Some(t),
            FormattedBlock::PageBreak => None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.styled_text().map(|t| t.text.as_str())
    }
}
