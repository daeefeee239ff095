use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
  #[error("failed to run yt-dlp: {0}")]
  IO(#[from] std::io::Error),

  #[error("failed to parse yt-dlp output: {0}")]
  Parse(#[from] serde_json::Error),

  #[error("resolution failed: {0}")]
  Resolution(String),
}
