//! HTTP client for the tile server.

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use crate::error::{MapError, Result};
use crate::tile::{TileId, TileSource};

/// User agent sent with tile requests. The OpenStreetMap usage policy
/// requires an identifying agent.
const USER_AGENT_VALUE: &str = concat!(
    "campus-essentials/",
    env!("CARGO_PKG_VERSION"),
    " (campus information desktop app)"
);

/// Async tile fetcher bound to one [`TileSource`].
#[derive(Debug, Clone)]
pub struct TileClient {
    client: reqwest::Client,
    source: TileSource,
}

impl TileClient {
    pub fn new(source: TileSource) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| MapError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, source })
    }

    pub fn source(&self) -> &TileSource {
        &self.source
    }

    /// Download the encoded image of one tile.
    pub async fn fetch(&self, tile: TileId) -> Result<Vec<u8>> {
        let url = self.source.url_for(tile);

        tracing::debug!(%tile, %url, "fetching tile");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(MapError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}
