use halte::gtfs::{self, TableSource};
use reqwest::Client;
use std::sync::Arc;
use tokio::runtime::Handle;
use tracing::debug;

/// Fetches feed tables over HTTP, relative to a base url.
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl TableSource for HttpSource {
    async fn fetch(&self, path: &str) -> Result<String, gtfs::Error> {
        let url = self.url(path);
        debug!("Fetching {url}");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| gtfs::Error::Transport(err.to_string()))?;

        if !response.status().is_success() {
            return Err(gtfs::Error::Transport(format!(
                "{url} answered {}",
                response.status()
            )));
        }

        response
            .text()
            .await
            .map_err(|err| gtfs::Error::Transport(err.to_string()))
    }
}

/// Runs a file-backed source on the blocking pool so disk reads do not
/// stall the request workers.
pub struct BlockingSource<S> {
    inner: Arc<S>,
}

impl<S> BlockingSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }
}

impl<S> TableSource for BlockingSource<S>
where
    S: TableSource + 'static,
{
    async fn fetch(&self, path: &str) -> Result<String, gtfs::Error> {
        let inner = self.inner.clone();
        let path = path.to_string();
        tokio::task::spawn_blocking(move || Handle::current().block_on(inner.fetch(&path)))
            .await
            .map_err(|err| gtfs::Error::Transport(err.to_string()))?
    }
}
