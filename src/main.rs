use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod error;
mod media;
mod resolver;
mod selector;
mod util;

pub use error::{Error, Result};

use resolver::{Resolver, Ytdlp};
use selector::select_stream_url;

/// Resolve a video page url into a direct media stream url.
#[derive(Parser, Debug)]
#[command(name = "streamurl")]
struct Cli {
  /// video page url to resolve (e.g. a youtube watch url)
  url: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
  // stdout is reserved for the resolved url, diagnostics go to stderr
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info")),
    )
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();

  let descriptor = Ytdlp::new().resolve(&cli.url).await?;
  let stream_url = select_stream_url(&descriptor);

  if stream_url.is_empty() {
    warn!("no usable stream found for {}", cli.url);
  } else {
    info!("stream url: {}", stream_url);
  }

  println!("{stream_url}");

  Ok(())
}
