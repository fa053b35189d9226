use crate::config::ScriptMarkers;
use log::debug;

/// Content produced from the script body, before styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptBlock {
    SectionHeading(String),
    Paragraph(String),
    PageBreak,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedScript {
    pub blocks: Vec<ScriptBlock>,
    pub sections: usize,
}

// A section heading gets a page break only once this many blocks are already present.
const PAGE_BREAK_MIN_BLOCKS: usize = 4;

/// Trims the characters JavaScript's `String.prototype.trim` removes: Unicode whitespace
/// other than NEL (U+0085), plus the byte-order mark.
pub(crate) fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}')
}

pub(crate) fn is_section_marker(line: &str, markers: &ScriptMarkers) -> bool {
    line.starts_with(markers.section_delimiter.as_str())
        && line.contains(markers.section_keyword.as_str())
}

/// Classifies every line after the header block into headings, paragraphs and page breaks.
///
/// Input that never contains the header marker yields no blocks at all.
pub fn parse_script(text: &str, markers: &ScriptMarkers) -> ParsedScript {
    let mut parsed = ParsedScript::default();
    let mut in_header = true;

    for (index, raw) in text.split('\n').enumerate() {
        let line = trim_line(raw);

        if in_header {
            if line.contains(markers.header_marker.as_str()) {
                debug!("header block ends at line {}", index + 1);
                in_header = false;
            }
            continue;
        }

        if line.is_empty() || line == markers.end_sentinel {
            continue;
        }

        if is_section_marker(line, markers) {
            parsed.sections += 1;
            if parsed.blocks.len() >= PAGE_BREAK_MIN_BLOCKS {
                parsed.blocks.push(ScriptBlock::PageBreak);
            }
            let heading = line.replace(markers.section_delimiter.as_str(), "");
            let heading = trim_line(&heading);
            debug!("section {} at line {}: {heading}", parsed.sections, index + 1);
            parsed.blocks.push(ScriptBlock::SectionHeading(heading.to_string()));
            continue;
        }

        parsed.blocks.push(ScriptBlock::Paragraph(line.to_string()));
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> ParsedScript {
        parse_script(text, &ScriptMarkers::default())
    }

    fn heading(s: &str) -> ScriptBlock {
        ScriptBlock::SectionHeading(s.to_string())
    }

    fn para(s: &str) -> ScriptBlock {
        ScriptBlock::Paragraph(s.to_string())
    }

    #[test]
    fn counts_headings_and_paragraphs_in_order() {
        let text = "मेरी कहानी: भाग एक\n(एक प्रेम कथा)\nText-to-Speech Script\n\n\
                    === भाग 1 ===\nपहली पंक्ति\nदूसरी पंक्ति\n\n\
                    === भाग 2 ===\nतीसरी पंक्ति\n[समाप्त]\n";
        let parsed = parse(text);
        assert_eq!(parsed.sections, 2);
        assert_eq!(
            parsed.blocks,
            vec![
                heading("भाग 1"),
                para("पहली पंक्ति"),
                para("दूसरी पंक्ति"),
                heading("भाग 2"),
                para("तीसरी पंक्ति"),
            ]
        );
    }

    #[test]
    fn page_break_needs_four_blocks_before_heading() {
        let text = "Text-to-Speech\n=== भाग 1 ===\na\nb\nc\n=== भाग 2 ===\nd\n";
        let parsed = parse(text);
        assert_eq!(
            parsed.blocks,
            vec![
                heading("भाग 1"),
                para("a"),
                para("b"),
                para("c"),
                ScriptBlock::PageBreak,
                heading("भाग 2"),
                para("d"),
            ]
        );
    }

    #[test]
    fn no_page_break_with_three_blocks() {
        let text = "Text-to-Speech\n=== भाग 1 ===\na\nb\n=== भाग 2 ===\n";
        let parsed = parse(text);
        assert!(!parsed.blocks.contains(&ScriptBlock::PageBreak));
        assert_eq!(parsed.sections, 2);
    }

    #[test]
    fn missing_header_marker_consumes_everything() {
        let text = "=== भाग 1 ===\nकुछ पाठ\n=== भाग 2 ===\nऔर पाठ\n";
        let parsed = parse(text);
        assert!(parsed.blocks.is_empty());
        assert_eq!(parsed.sections, 0);
    }

    #[test]
    fn end_sentinel_is_skipped_but_not_terminal() {
        let text = "Text-to-Speech\nपहले\n  [समाप्त]  \nबाद में\n";
        let parsed = parse(text);
        assert_eq!(parsed.blocks, vec![para("पहले"), para("बाद में")]);
    }

    #[test]
    fn delimiter_without_keyword_is_body_text() {
        let text = "Text-to-Speech\n=== Intro ===\nभाग without delimiter\n";
        let parsed = parse(text);
        assert_eq!(parsed.sections, 0);
        assert_eq!(
            parsed.blocks,
            vec![para("=== Intro ==="), para("भाग without delimiter")]
        );
    }

    #[test]
    fn next_line_character_is_not_trimmed() {
        let parsed = parse("Text-to-Speech\n\u{85}\n\u{a0}\u{3000}\n");
        assert_eq!(parsed.blocks, vec![para("\u{85}")]);
    }

    #[test]
    fn handles_crlf_and_bom() {
        let text = "\u{feff}Title\r\nText-to-Speech\r\n===भाग 3===\r\n  line  \r\n";
        let parsed = parse(text);
        assert_eq!(parsed.blocks, vec![heading("भाग 3"), para("line")]);
    }
}
