use crate::domain::classifier::depth_color;
use crate::domain::model::{EarthquakeFeature, MarkerSpec};
use chrono::DateTime;

pub const RADIUS_SCALE: f64 = 3.0;
pub const STROKE_COLOR: &str = "black";
pub const STROKE_WEIGHT: f64 = 0.2;
pub const STROKE_OPACITY: f64 = 0.8;
pub const FILL_OPACITY: f64 = 0.8;

const UNKNOWN: &str = "unknown";

/// Builds the circle marker for one earthquake.
///
/// The radius is not clamped: zero or negative magnitudes give a zero or
/// negative radius. A missing magnitude gives radius 0.
pub fn adapt(feature: &EarthquakeFeature) -> MarkerSpec {
    MarkerSpec {
        latitude: feature.latitude,
        longitude: feature.longitude,
        radius: feature.mag.unwrap_or(0.0) * RADIUS_SCALE,
        fill_color: depth_color(feature.depth.unwrap_or(f64::NAN)),
        popup_text: popup_text(feature),
        color: STROKE_COLOR,
        weight: STROKE_WEIGHT,
        opacity: STROKE_OPACITY,
        fill_opacity: FILL_OPACITY,
    }
}

pub fn popup_text(feature: &EarthquakeFeature) -> String {
    let place = feature
        .place
        .as_deref()
        .map(handlebars::html_escape)
        .unwrap_or_else(|| UNKNOWN.to_string());

    format!(
        "<h3>{}</h3><hr><p>{}</p><ul><li>Earthquake Magnitude: {}</li><li>Earthquake Depth: {}</li></ul>",
        place,
        format_time(feature.time),
        format_number(feature.mag),
        format_number(feature.depth),
    )
}

/// Renders epoch milliseconds as a UTC date, e.g. `Thu Jan 01 1970 00:00:00 UTC`.
/// Out-of-range timestamps fall back to the raw value.
pub fn format_time(time: Option<i64>) -> String {
    match time {
        Some(ms) => DateTime::from_timestamp_millis(ms)
            .map(|dt| dt.format("%a %b %d %Y %H:%M:%S UTC").to_string())
            .unwrap_or_else(|| ms.to_string()),
        None => UNKNOWN.to_string(),
    }
}

fn format_number(value: Option<f64>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| UNKNOWN.to_string())
}
