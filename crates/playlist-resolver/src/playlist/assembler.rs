use chrono::NaiveDateTime;

use super::entry::ResolvedEntry;

pub const PLAYLIST_MARKER: &str = "#EXTM3U";
/// `2026-01-31 07:05 PM`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %I:%M %p";

const RULE: &str = "#=================================";
const CLOSING_RULE: &str = "#==================================";

/// Comment block written under the playlist marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    /// Lines shown above the timestamp.
    pub attribution: Vec<String>,
    /// Lines shown below the timestamp.
    pub disclaimer: Vec<String>,
}

impl Default for Banner {
    fn default() -> Self {
        Self {
            attribution: vec!["Generated By: m3u-refresh".to_string()],
            disclaimer: vec![
                "Disclaimer:".to_string(),
                "This tool does NOT host any content.".to_string(),
                "It aggregates publicly available data for informational purposes only."
                    .to_string(),
                "For any issues or concerns, please contact the developer.".to_string(),
            ],
        }
    }
}

impl Banner {
    fn lines(&self, generated_at: &NaiveDateTime) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.attribution.len() + self.disclaimer.len() + 3);
        lines.push(RULE.to_string());
        lines.extend(self.attribution.iter().map(|l| format!("# {l}")));
        lines.push(format!(
            "# Last Updated: {}",
            generated_at.format(TIMESTAMP_FORMAT)
        ));
        lines.extend(self.disclaimer.iter().map(|l| format!("# {l}")));
        lines.push(CLOSING_RULE.to_string());
        lines
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlaylistAssembler {
    banner: Banner,
}

impl PlaylistAssembler {
    pub fn new(banner: Banner) -> Self {
        Self { banner }
    }

    /// Renders the output playlist. Lines are joined with `\n` and the text
    /// does not end with a newline.
    pub fn assemble(&self, entries: &[ResolvedEntry], generated_at: &NaiveDateTime) -> String {
        let mut lines = vec![PLAYLIST_MARKER.to_string()];
        lines.extend(self.banner.lines(generated_at));
        for entry in entries {
            lines.push(entry.label.clone());
            lines.push(entry.stream_url.clone());
        }
        lines.join("\n")
    }
}
