use clap::Parser;
use quake_map::adapters::feed::FeedSource;
use quake_map::core::ConfigProvider;
use quake_map::domain::basemap::{BASE_LAYERS, OVERLAY_NAME};
use quake_map::utils::error::ErrorSeverity;
use quake_map::utils::{logger, validation::Validate};
use quake_map::{CliConfig, LocalStorage, MapEngine, QuakeMapPipeline, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入配置檔並套用命令列覆蓋
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose, config.log_level());
    }

    tracing::info!("Starting quake-map");
    tracing::debug!("Resolved config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if cli.dry_run {
        display_config_summary(&config);
        return Ok(());
    }

    let monitor_enabled = config.monitoring_enabled();
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new(config.output_path());
    let pipeline = QuakeMapPipeline::new(storage, config)?;
    let engine = MapEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            println!("✅ Map page written to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Map build failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 依錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig) {
    let source = FeedSource::parse(config.feed_source());

    println!("📋 Configuration Summary:");
    println!("  Feed: {}", source);
    if let Some(timeout) = config.timeout_seconds() {
        println!("  Timeout: {}s", timeout);
    }
    println!("  Output: {}/{}", config.output_path(), config.output_file());
    println!("  Title: {}", config.map.title);
    println!(
        "  View: center [{}, {}], zoom {}",
        config.map.center[0], config.map.center[1], config.map.zoom
    );

    let layers: Vec<&str> = BASE_LAYERS.iter().map(|layer| layer.name).collect();
    println!("  Base layers: {}", layers.join(", "));
    println!("  Overlay: {}", OVERLAY_NAME);
    println!("  Monitoring: {}", config.monitoring_enabled());
    println!();
    println!("🔍 Dry run - nothing was fetched or written.");
}
