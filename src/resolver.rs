mod ytdlp;

use async_trait::async_trait;

use crate::media::MediaDescriptor;
use crate::Result;

pub use ytdlp::Ytdlp;

#[async_trait]
pub trait Resolver {
  async fn resolve(&self, url: &str) -> Result<MediaDescriptor>;
}
