use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use tracing::debug;

static CHANNEL_DATA_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"const channelData\s*=\s*(\{.*?\});").unwrap());

// the scheme separator may be escaped as well (`https:\/\/`)
static INLINE_M3U8_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""m3u8":"(https?:\\?/\\?/[^"]+)""#).unwrap());

/// Which extraction strategy produced a stream address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// The `m3u8` field of the `const channelData = {...};` object.
    ChannelData,
    /// A bare `"m3u8":"..."` pair anywhere in the page.
    InlineM3u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub stream_url: String,
    pub strategy: Strategy,
}

/// Extracts the direct stream address from an intermediary page body.
///
/// The `channelData` object is tried first; when it is missing, malformed or
/// has no `m3u8` key the raw text is searched instead. An `m3u8` key that is
/// present but empty means the page has no stream.
pub fn extract_stream_url(body: &str) -> Option<Extraction> {
    match from_channel_data(body) {
        ChannelData::Found(stream_url) => {
            return Some(Extraction {
                stream_url,
                strategy: Strategy::ChannelData,
            });
        }
        ChannelData::Unusable => return None,
        ChannelData::Absent => {}
    }

    from_inline_m3u8(body).map(|stream_url| Extraction {
        stream_url,
        strategy: Strategy::InlineM3u8,
    })
}

/// Outcome of looking at the `channelData` object.
enum ChannelData {
    /// No object, or one that is not valid JSON or has no `m3u8` key.
    Absent,
    /// The `m3u8` key exists but holds no address.
    Unusable,
    Found(String),
}

fn from_channel_data(body: &str) -> ChannelData {
    let Some(json_str) = CHANNEL_DATA_REGEX
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
    else {
        return ChannelData::Absent;
    };

    let data: Value = match serde_json::from_str(json_str) {
        Ok(data) => data,
        Err(e) => {
            debug!("channelData is not valid json: {e}");
            return ChannelData::Absent;
        }
    };

    match data.get("m3u8") {
        None => ChannelData::Absent,
        Some(Value::String(url)) if !url.is_empty() => ChannelData::Found(url.clone()),
        Some(other) => {
            debug!("channelData m3u8 field holds no address: {other}");
            ChannelData::Unusable
        }
    }
}

fn from_inline_m3u8(body: &str) -> Option<String> {
    INLINE_M3U8_REGEX
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().replace("\\/", "/"))
}
