use crate::domain::model::{EarthquakeFeature, MapSettings, RenderResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn feed_source(&self) -> &str;
    fn output_path(&self) -> &str;
    fn output_file(&self) -> &str;
    fn map_settings(&self) -> MapSettings;
    fn timeout_seconds(&self) -> Option<u64>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<EarthquakeFeature>>;
    async fn transform(&self, features: Vec<EarthquakeFeature>) -> Result<RenderResult>;
    async fn load(&self, result: RenderResult) -> Result<String>;
}
