use std::sync::LazyLock;

// read ytdlp proxy from environment variable (YTDLP_PROXY) and return it.
static YTDLP_PROXY: LazyLock<Option<String>> =
  LazyLock::new(|| std::env::var("YTDLP_PROXY").ok());

pub fn ytdlp_proxy() -> Option<&'static str> {
  YTDLP_PROXY.as_deref()
}
