use crate::config::ScriptMarkers;
use crate::script::trim_line;

// Only the opening lines of a script are considered for the title page.
const TITLE_SCAN_LINES: usize = 5;

/// Title page text found in the script, if any. Defaults are applied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleInfo {
    pub title: Option<String>,
    pub subtitle: Option<String>,
}

/// Picks a title and subtitle from the first lines of the raw script.
///
/// The first non-empty line that is not the header marker gives the title (text before
/// the first `:`). The next one gives the subtitle, unless it is a section marker, in
/// which case scanning stops with no subtitle.
pub fn extract_title(text: &str, markers: &ScriptMarkers) -> TitleInfo {
    let mut info = TitleInfo::default();

    for raw in text.split('\n').take(TITLE_SCAN_LINES) {
        let line = trim_line(raw);
        if line.is_empty() || line.contains(markers.header_marker.as_str()) {
            continue;
        }

        if info.title.is_none() {
            let before_colon = line.split(':').next().unwrap_or(line);
            info.title = Some(trim_line(before_colon).to_string());
            continue;
        }

        if let Some(inner) = line.strip_prefix('(').and_then(|l| l.strip_suffix(')')) {
            info.subtitle = Some(inner.to_string());
        } else if !line.starts_with(markers.section_delimiter.as_str()) {
            info.subtitle = Some(line.to_string());
        }
        break;
    }

    info
}
