use serde::Deserialize;

// the subset of yt-dlp's `-j` output that stream selection looks at.
// unknown keys are ignored on deserialization.
#[derive(Debug, Deserialize)]
pub struct MediaDescriptor {
  // present when yt-dlp already committed to a single format
  // under its format expression
  pub url: Option<String>,
  #[serde(default)]
  pub formats: Vec<FormatRecord>,
}

#[derive(Debug, Deserialize, Default)]
pub struct FormatRecord {
  pub url: Option<String>,
  pub protocol: Option<String>,
  // absent for audio-only formats
  pub height: Option<u32>,
}

impl FormatRecord {
  // a record without a url cannot be played and is skipped during scans
  pub fn is_usable(&self) -> bool {
    self.url.as_deref().is_some_and(|u| !u.is_empty())
  }

  pub fn is_hls(&self) -> bool {
    matches!(self.protocol.as_deref(), Some("m3u8" | "m3u8_native"))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  // trimmed-down shape of a real `yt-dlp -j` payload
  const SAMPLE: &str = r#"{
    "id": "XDThHUawq6E",
    "title": "a live stream",
    "formats": [
      {"format_id": "233", "url": "https://cdn/audio.m3u8", "protocol": "m3u8_native", "ext": "mp4"},
      {"format_id": "94", "url": "https://cdn/480.m3u8", "protocol": "m3u8_native", "height": 480, "ext": "mp4"},
      {"format_id": "95", "url": "https://cdn/720.m3u8", "protocol": "m3u8_native", "height": 720, "ext": "mp4"}
    ],
    "url": "https://cdn/720.m3u8",
    "protocol": "m3u8_native"
  }"#;

  #[test]
  fn test_deserialize_descriptor() {
    let descriptor: MediaDescriptor = serde_json::from_str(SAMPLE).unwrap();

    assert_eq!(descriptor.url.as_deref(), Some("https://cdn/720.m3u8"));
    assert_eq!(descriptor.formats.len(), 3);

    let audio = &descriptor.formats[0];
    assert!(audio.is_usable());
    assert!(audio.is_hls());
    assert_eq!(audio.height, None);
  }

  #[test]
  fn test_missing_formats_key() {
    let descriptor: MediaDescriptor =
      serde_json::from_str(r#"{"url": "https://cdn/x.m3u8"}"#).unwrap();

    assert!(descriptor.formats.is_empty());
  }

  #[test]
  fn test_hls_protocols() {
    let record = |protocol: Option<&str>| FormatRecord {
      protocol: protocol.map(String::from),
      ..Default::default()
    };

    assert!(record(Some("m3u8")).is_hls());
    assert!(record(Some("m3u8_native")).is_hls());
    assert!(!record(Some("https")).is_hls());
    assert!(!record(None).is_hls());
  }
}
