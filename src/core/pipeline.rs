use crate::adapters::feed::{FeedReader, FeedSource};
use crate::adapters::html::render_map_page;
use crate::core::{ConfigProvider, EarthquakeFeature, Pipeline, RenderResult, Storage};
use crate::domain::adapter::adapt;
use crate::domain::legend::build_legend;
use crate::utils::error::Result;
use std::time::Duration;

/// Feed → markers → map page.
pub struct QuakeMapPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    reader: FeedReader,
}

impl<S: Storage, C: ConfigProvider> QuakeMapPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        let reader = FeedReader::new(config.timeout_seconds().map(Duration::from_secs))?;
        Ok(Self {
            storage,
            config,
            reader,
        })
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for QuakeMapPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<EarthquakeFeature>> {
        let source = FeedSource::parse(self.config.feed_source());
        tracing::info!("Fetching earthquake feed from {}", source);

        let features = self.reader.read_features(&source).await?;
        tracing::debug!("Decoded {} earthquake features", features.len());
        Ok(features)
    }

    async fn transform(&self, features: Vec<EarthquakeFeature>) -> Result<RenderResult> {
        let markers = features.iter().map(adapt).collect();

        Ok(RenderResult {
            markers,
            legend: build_legend(),
        })
    }

    async fn load(&self, result: RenderResult) -> Result<String> {
        let page = render_map_page(&self.config.map_settings(), &result)?;

        tracing::debug!(
            "Writing map page ({} bytes, {} markers) to storage",
            page.len(),
            result.markers.len()
        );
        self.storage
            .write_file(self.config.output_file(), page.as_bytes())
            .await?;

        Ok(format!(
            "{}/{}",
            self.config.output_path(),
            self.config.output_file()
        ))
    }
}
