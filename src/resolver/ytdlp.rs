use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use tokio::process::Command;
use tracing::debug;

use crate::media::MediaDescriptor;
use crate::util::ytdlp_proxy;
use crate::{Error, Result};

use super::Resolver;

// run yt-dlp command line to resolve a video page into its formats.
// requires yt-dlp executable to be in PATH.
pub struct Ytdlp;

// prefer the best hls format, fall back to the overall best
const FORMAT_EXPR: &str = "best[ext=m3u8]/best";

impl Ytdlp {
  pub fn new() -> Self {
    Self
  }
}

#[async_trait]
impl Resolver for Ytdlp {
  async fn resolve(&self, url: &str) -> Result<MediaDescriptor> {
    let mut cmd = Command::new("yt-dlp");
    cmd
      // emit the resolved metadata as json instead of downloading
      .arg("-j")
      .arg("-f")
      .arg(FORMAT_EXPR)
      .arg("--no-warnings")
      .arg(url);

    if let Some(proxy) = ytdlp_proxy() {
      // used to remove cred info from proxy url before printing
      static AUTH_REGEX: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"//[^:]+(:[^@]+)@").unwrap());
      debug!("using proxy: {}", AUTH_REGEX.replace(proxy, "//<REDACTED>@"));
      cmd.arg("--proxy").arg(proxy);
    }

    debug!("running yt-dlp for {}", url);
    let output = cmd.output().await?;

    if !output.status.success() {
      detect_error(&output.stderr)?;
      return Err(Error::Resolution(format!(
        "yt-dlp exited with {}",
        output.status
      )));
    }

    let descriptor = serde_json::from_slice(&output.stdout)?;
    Ok(descriptor)
  }
}

fn detect_error(bytes: &[u8]) -> Result<()> {
  let s = String::from_utf8_lossy(bytes);
  if let Some(line) = s.lines().find(|l| l.contains("ERROR:")) {
    return Err(Error::Resolution(line.to_string()));
  }
  Ok(())
}
