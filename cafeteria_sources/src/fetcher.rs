use async_trait::async_trait;
use shared_kernel::http_client::HttpClient;
use url::Url;

/// Retrieval collaborator. Retries and timeouts live behind this seam.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_text(&self, url: Url) -> anyhow::Result<String>;
}

pub struct HttpPageFetcher;

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_text(&self, url: Url) -> anyhow::Result<String> {
        HttpClient::get_text(url).await
    }
}
