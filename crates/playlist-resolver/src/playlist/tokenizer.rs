use super::entry::PlaylistEntry;

pub const DIRECTIVE_MARKER: &str = "#EXTINF";
pub const ADDRESS_MARKER: &str = "http";

/// Splits M3U text into entries, pairing each address line with the most
/// recent directive line before it.
///
/// Lines are trimmed; anything that is neither a directive nor an address
/// (`#EXTM3U`, comments, player options) is skipped.
pub fn parse_entries(content: &str) -> Vec<PlaylistEntry> {
    let mut entries = Vec::new();
    let mut pending_label: Option<&str> = None;

    for line in content.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if line.starts_with(DIRECTIVE_MARKER) {
            pending_label = Some(line);
        } else if line.starts_with(ADDRESS_MARKER) {
            entries.push(PlaylistEntry {
                index: entries.len() + 1,
                label: pending_label.take().map(str::to_string),
                source_url: line.to_string(),
            });
        }
    }

    entries
}
