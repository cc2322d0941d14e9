pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

/// All earthquakes of the last 30 days; the default feed.
pub const QUERY_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_month.geojson";

/// Local one-week snapshot. Not wired into the defaults; pass it to `--feed`
/// to render offline.
pub const LOCAL_FEED_URL: &str = "data/all_week.geojson";

pub const DEFAULT_OUTPUT_PATH: &str = "./output";
pub const DEFAULT_OUTPUT_FILE: &str = "index.html";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, clap::Parser)]
#[command(name = "quake-map")]
#[command(about = "Render a GeoJSON earthquake feed onto an interactive Leaflet map")]
pub struct CliConfig {
    /// TOML configuration file; flags below override its values
    #[arg(short, long)]
    pub config: Option<String>,

    /// Feed URL or local GeoJSON file [default: USGS all_month feed]
    #[arg(long)]
    pub feed: Option<String>,

    /// Output directory [default: ./output]
    #[arg(long)]
    pub output_path: Option<String>,

    /// Output page file name [default: index.html]
    #[arg(long)]
    pub output_file: Option<String>,

    /// Page title
    #[arg(long)]
    pub title: Option<String>,

    /// Feed request timeout in seconds
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,

    /// Log CPU and memory usage per phase
    #[arg(long)]
    pub monitor: bool,

    /// Show the resolved configuration without fetching anything
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the TOML file (or defaults) and applies the command-line overrides.
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut TomlConfig) {
        if let Some(feed) = &self.feed {
            config.feed.source = feed.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            config.feed.timeout_seconds = Some(timeout);
        }
        if let Some(path) = &self.output_path {
            config.output.path = path.clone();
        }
        if let Some(file) = &self.output_file {
            config.output.filename = file.clone();
        }
        if let Some(title) = &self.title {
            config.map.title = title.clone();
        }
        if self.monitor {
            config.monitoring.enabled = true;
        }
    }
}
