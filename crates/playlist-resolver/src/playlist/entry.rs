use std::borrow::Cow;

/// One address line of the source playlist together with the directive that
/// preceded it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistEntry {
    /// 1-based position among the address lines of the source playlist.
    pub index: usize,
    pub label: Option<String>,
    pub source_url: String,
}

impl PlaylistEntry {
    /// The directive line to emit for this entry, synthesized when the source
    /// had none.
    pub fn label_line(&self) -> Cow<'_, str> {
        match &self.label {
            Some(label) => Cow::Borrowed(label),
            None => Cow::Owned(format!("#EXTINF:-1,Channel {}", self.index)),
        }
    }

    /// Pairs this entry with the outcome of its resolution, keeping it only if
    /// a stream was found.
    pub fn into_resolved(self, stream_url: Option<String>) -> Option<ResolvedEntry> {
        let stream_url = stream_url?;
        let label = self.label_line().into_owned();
        Some(ResolvedEntry { label, stream_url })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntry {
    pub label: String,
    pub stream_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_line() {
        let labelled = PlaylistEntry {
            index: 4,
            label: Some("#EXTINF:-1 tvg-id=\"max\",Sony Max".to_string()),
            source_url: "https://a/max.php".to_string(),
        };
        assert_eq!(labelled.label_line(), "#EXTINF:-1 tvg-id=\"max\",Sony Max");

        let bare = PlaylistEntry {
            index: 4,
            label: None,
            source_url: "https://a/max.php".to_string(),
        };
        assert_eq!(bare.label_line(), "#EXTINF:-1,Channel 4");
    }

    #[test]
    fn test_into_resolved() {
        let entry = PlaylistEntry {
            index: 1,
            label: None,
            source_url: "https://a/one.php".to_string(),
        };
        assert_eq!(entry.clone().into_resolved(None), None);

        let resolved = entry.into_resolved(Some("https://cdn/one.m3u8".to_string()));
        assert_eq!(
            resolved,
            Some(ResolvedEntry {
                label: "#EXTINF:-1,Channel 1".to_string(),
                stream_url: "https://cdn/one.m3u8".to_string(),
            })
        );
    }
}
