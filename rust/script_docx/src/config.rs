use std::path::PathBuf;

/// Line markers that give a script its structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptMarkers {
    /// Substring of the line that closes the header block.
    pub header_marker: String,
    /// A trimmed line equal to this is skipped.
    pub end_sentinel: String,
    /// Prefix of a section marker line; every occurrence is removed from the heading text.
    pub section_delimiter: String,
    /// A section marker line must also contain this keyword.
    pub section_keyword: String,
}

impl Default for ScriptMarkers {
    fn default() -> Self {
        Self {
            header_marker: "Text-to-Speech".to_string(),
            end_sentinel: "[समाप्त]".to_string(),
            section_delimiter: "===".to_string(),
            section_keyword: "भाग".to_string(),
        }
    }
}

/// Color and size for one kind of text. Sizes are in half-points (24 = 12pt).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextStyle {
    pub color: String,
    pub size: u32,
}

impl TextStyle {
    fn new(color: &str, size: u32) -> Self {
        Self {
            color: color.to_string(),
            size,
        }
    }
}

/// Immutable settings for one conversion run.
#[derive(Debug, Clone)]
pub struct DocumentStyleConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub markers: ScriptMarkers,

    pub font: String,
    pub title: TextStyle,
    pub subtitle: TextStyle,
    pub heading: TextStyle,
    pub body_size: u32,
    pub caption: TextStyle,
    pub closing_heading: TextStyle,
    pub closing_quote: TextStyle,

    pub caption_text: String,
    pub closing_heading_text: String,
    pub closing_quote_text: String,
    pub fallback_title: String,
    pub fallback_subtitle: String,

    // Spacing values are in twentieths of a point.
    pub paragraph_spacing: u32,
    pub heading_spacing_before: u32,
    pub heading_spacing_after: u32,
    /// Page margin on every side, in twips.
    pub page_margin: u32,
}

impl Default for DocumentStyleConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("input_script.txt"),
            output_path: PathBuf::from("output_document.docx"),
            markers: ScriptMarkers::default(),

            font: "Arial".to_string(),
            title: TextStyle::new("FF6F00", 52),
            subtitle: TextStyle::new("1565C0", 32),
            heading: TextStyle::new("1565C0", 32),
            body_size: 24,
            caption: TextStyle::new("757575", 24),
            closing_heading: TextStyle::new("2E7D32", 48),
            closing_quote: TextStyle::new("D84315", 32),

            caption_text: "Text-to-Speech स्क्रिप्ट".to_string(),
            closing_heading_text: "समाप्त".to_string(),
            closing_quote_text: "\"धन्यवाद!\"".to_string(),
            fallback_title: "Hindi Script".to_string(),
            fallback_subtitle: "TTS Document".to_string(),

            paragraph_spacing: 140,
            heading_spacing_before: 360,
            heading_spacing_after: 240,
            page_margin: 1440,
        }
    }
}

impl DocumentStyleConfig {
    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_working_directory_files() {
        let config = DocumentStyleConfig::default();
        assert_eq!(config.input_path, PathBuf::from("input_script.txt"));
        assert_eq!(config.output_path, PathBuf::from("output_document.docx"));
        assert_eq!(config.page_margin, 1440);
        assert_eq!(config.body_size, 24);
    }

    #[test]
    fn path_overrides_keep_styling() {
        let config = DocumentStyleConfig::default()
            .with_input_path("a.txt")
            .with_output_path("out/b.docx");
        assert_eq!(config.input_path, PathBuf::from("a.txt"));
        assert_eq!(config.output_path, PathBuf::from("out/b.docx"));
        assert_eq!(config.title.color, "FF6F00");
    }
}
