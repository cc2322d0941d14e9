use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct MapEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> MapEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// Runs one extract → transform → load pass. An error in any phase
    /// aborts the run before the page is written.
    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting map build...");

        let features = self.pipeline.extract().await?;
        tracing::info!("Extracted {} earthquakes", features.len());
        self.monitor.log_phase("Extract");

        let result = self.pipeline.transform(features).await?;
        tracing::info!("Built {} markers", result.markers.len());
        self.monitor.log_phase("Transform");

        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Map page saved to: {}", output_path);
        self.monitor.log_phase("Load");

        self.monitor.log_final();
        Ok(output_path)
    }
}
