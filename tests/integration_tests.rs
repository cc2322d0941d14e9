use httpmock::prelude::*;
use quake_map::config::toml_config::TomlConfig;
use quake_map::{LocalStorage, MapEngine, MapError, QuakeMapPipeline};
use tempfile::TempDir;

fn usgs_feed() -> serde_json::Value {
    serde_json::json!({
        "type": "FeatureCollection",
        "metadata": {"generated": 1700000000000_i64, "title": "USGS All Earthquakes, Past Month", "count": 5},
        "features": [
            {
                "type": "Feature",
                "properties": {"mag": 4.0, "place": "12 km SW of Ridgecrest, CA", "time": 0, "type": "earthquake"},
                "geometry": {"type": "Point", "coordinates": [-117.7, 35.5, 45.0]},
                "id": "ci0001"
            },
            {
                "type": "Feature",
                "properties": {"mag": 1.2, "place": "5 km N of Anchorage, Alaska", "time": 1700000000000_i64},
                "geometry": {"type": "Point", "coordinates": [-149.9, 61.3, 10.0]},
                "id": "ak0002"
            },
            {
                "type": "Feature",
                "properties": {"mag": 5.1, "place": "Fiji region", "time": 1700000500000_i64},
                "geometry": {"type": "Point", "coordinates": [178.0, -18.0, 550.0]},
                "id": "us0003"
            },
            {
                "type": "Feature",
                "properties": {"mag": 2.2, "place": "Unlocated", "time": 1700000600000_i64},
                "geometry": null,
                "id": "xx0004"
            },
            {
                "type": "Feature",
                "properties": {"mag": 6.0, "place": "Rupture outline", "time": 1700000700000_i64},
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[-117.8, 35.4], [-117.6, 35.4], [-117.6, 35.6], [-117.8, 35.4]]]
                },
                "id": "xx0005"
            }
        ]
    })
}

fn config_for(feed: &str, output_path: &str) -> TomlConfig {
    let mut config = TomlConfig::default();
    config.feed.source = feed.to_string();
    config.output.path = output_path.to_string();
    config
}

#[tokio::test]
async fn test_end_to_end_map_build() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/summary/all_month.geojson");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(usgs_feed());
    });

    let config = config_for(&server.url("/summary/all_month.geojson"), &output_path);
    let storage = LocalStorage::new(output_path.clone());
    let pipeline = QuakeMapPipeline::new(storage, config).unwrap();
    let engine = MapEngine::new(pipeline);

    let result = engine.run().await;

    api_mock.assert();
    let output_file_path = result.unwrap();
    assert!(output_file_path.ends_with("index.html"));

    let page = std::fs::read_to_string(temp_dir.path().join("index.html")).unwrap();

    // 沒有點幾何的 feature 被略過
    assert_eq!(page.matches("\"popupText\"").count(), 3);
    assert!(page.contains("12 km SW of Ridgecrest, CA"));
    assert!(page.contains("Fiji region"));
    assert!(!page.contains("Unlocated"));
    assert!(!page.contains("Rupture outline"));

    assert!(page.contains("\"radius\":12.0,\"fillColor\":\"Tan\""));
    assert!(page.contains("\"fillColor\":\"GreenYellow\""));
    assert!(page.contains("\"fillColor\":\"Red\""));
    assert!(page.contains("Earthquake Magnitude: 4<\\/li><li>Earthquake Depth: 45<\\/li>"));
    assert!(page.contains("Thu Jan 01 1970 00:00:00 UTC"));

    assert_eq!(page.matches("<li style='background:").count(), 6);
    assert!(page.contains("\"Street Map\""));
    assert!(page.contains("\"Topographic Map\""));
    assert!(page.contains("\"Dark Map\""));
    assert!(page.contains("position: \"bottomright\""));
}

#[tokio::test]
async fn test_end_to_end_with_feed_failure() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/failed");
        then.status(500);
    });

    let config = config_for(&server.url("/failed"), &output_path);
    let storage = LocalStorage::new(output_path.clone());
    let pipeline = QuakeMapPipeline::new(storage, config).unwrap();
    let engine = MapEngine::new(pipeline);

    let result = engine.run().await;

    api_mock.assert();
    assert!(matches!(result, Err(MapError::FeedError { .. })));
    assert!(!temp_dir.path().join("index.html").exists());
}

#[tokio::test]
async fn test_end_to_end_with_malformed_feed() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/garbage");
        then.status(200).body("<html>maintenance</html>");
    });

    let config = config_for(&server.url("/garbage"), &output_path);
    let pipeline = QuakeMapPipeline::new(LocalStorage::new(output_path.clone()), config).unwrap();
    let result = MapEngine::new(pipeline).run().await;

    api_mock.assert();
    assert!(result.is_err());
    assert!(!temp_dir.path().join("index.html").exists());
}

#[tokio::test]
async fn test_end_to_end_from_local_file_with_monitoring() {
    let temp_dir = TempDir::new().unwrap();
    let feed_path = temp_dir.path().join("all_week.geojson");
    tokio::fs::write(&feed_path, serde_json::to_vec(&usgs_feed()).unwrap())
        .await
        .unwrap();

    let output_dir = temp_dir.path().join("site");
    let mut config = config_for(feed_path.to_str().unwrap(), output_dir.to_str().unwrap());
    config.output.filename = "quakes.html".to_string();
    config.map.title = "Weekly Earthquakes".to_string();

    let pipeline = QuakeMapPipeline::new(LocalStorage::new(output_dir.clone()), config).unwrap();
    let engine = MapEngine::new_with_monitoring(pipeline, true);

    let output_file_path = engine.run().await.unwrap();
    assert!(output_file_path.ends_with("quakes.html"));

    let page = std::fs::read_to_string(output_dir.join("quakes.html")).unwrap();
    assert!(page.contains("<title>Weekly Earthquakes</title>"));
    assert_eq!(page.matches("\"popupText\"").count(), 3);
}

#[tokio::test]
async fn test_end_to_end_with_empty_feed() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/empty");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"type": "FeatureCollection", "features": []}));
    });

    let config = config_for(&server.url("/empty"), &output_path);
    let pipeline = QuakeMapPipeline::new(LocalStorage::new(output_path.clone()), config).unwrap();
    MapEngine::new(pipeline).run().await.unwrap();

    let page = std::fs::read_to_string(temp_dir.path().join("index.html")).unwrap();
    assert!(page.contains("var markers = [];"));
    assert_eq!(page.matches("<li style='background:").count(), 6);
}
