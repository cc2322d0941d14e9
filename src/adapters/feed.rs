use crate::domain::model::{EarthquakeFeature, FeedDocument};
use crate::utils::error::{MapError, Result};
use reqwest::Client;
use std::time::Duration;

/// Where the GeoJSON document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSource {
    Remote(String),
    Local(String),
}

impl FeedSource {
    pub fn parse(source: &str) -> Self {
        if source.starts_with("http://") || source.starts_with("https://") {
            FeedSource::Remote(source.to_string())
        } else {
            FeedSource::Local(source.to_string())
        }
    }

}

impl std::fmt::Display for FeedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedSource::Remote(url) => write!(f, "{}", url),
            FeedSource::Local(path) => write!(f, "file {}", path),
        }
    }
}

pub struct FeedReader {
    client: Client,
}

impl FeedReader {
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Reads the raw feed bytes. A single attempt; no retry.
    pub async fn fetch(&self, source: &FeedSource) -> Result<Vec<u8>> {
        match source {
            FeedSource::Remote(url) => {
                tracing::debug!("Requesting feed: {}", url);
                let response = self.client.get(url).send().await?;
                let status = response.status();
                tracing::debug!("Feed response status: {}", status);

                if !status.is_success() {
                    return Err(MapError::FeedError {
                        message: format!("{} returned HTTP status {}", url, status),
                    });
                }

                Ok(response.bytes().await?.to_vec())
            }
            FeedSource::Local(path) => {
                tracing::debug!("Reading feed file: {}", path);
                Ok(tokio::fs::read(path).await?)
            }
        }
    }

    pub async fn read_features(&self, source: &FeedSource) -> Result<Vec<EarthquakeFeature>> {
        let bytes = self.fetch(source).await?;
        decode_feed(&bytes)
    }
}

/// Decodes a FeatureCollection. Features that are not points, or have
/// fewer than two coordinates, are skipped since they cannot be placed.
pub fn decode_feed(bytes: &[u8]) -> Result<Vec<EarthquakeFeature>> {
    let FeedDocument::FeatureCollection { features } =
        serde_json::from_slice(bytes).map_err(|e| MapError::FeedError {
            message: format!("not a GeoJSON FeatureCollection: {}", e),
        })?;

    let total = features.len();
    let placed: Vec<EarthquakeFeature> = features
        .into_iter()
        .filter_map(EarthquakeFeature::from_geojson)
        .collect();

    if placed.len() < total {
        tracing::debug!(
            "Skipped {} non-point or unplaceable features",
            total - placed.len()
        );
    }

    Ok(placed)
}
