use crate::media::MediaDescriptor;

// pick a single stream url out of a resolved descriptor.
//
// precedence, first applicable rule wins:
// 1. the url yt-dlp already committed to
// 2. the highest-resolution hls format
// 3. the first format that carries a url at all
//
// an empty string means no usable stream was found. the caller decides
// whether that is fatal.
pub fn select_stream_url(descriptor: &MediaDescriptor) -> String {
  if let Some(url) = descriptor.url.as_deref() {
    if !url.is_empty() {
      return url.to_string();
    }
  }

  let best_hls = descriptor
    .formats
    .iter()
    .filter(|f| f.is_usable() && f.is_hls() && f.height.is_some())
    .max_by_key(|f| f.height);

  if let Some(format) = best_hls {
    return format.url.clone().unwrap_or_default();
  }

  // last resort: no ranking applied, just the first record that is playable
  descriptor
    .formats
    .iter()
    .find(|f| f.is_usable())
    .and_then(|f| f.url.clone())
    .unwrap_or_default()
}
