use serde::{Deserialize, Serialize};

/// One row of the depth category table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DepthCategory {
    pub label: &'static str,
    pub color: &'static str,
}

/// Depth bands in index order. The lower bound of each band is exclusive,
/// see [`crate::domain::classifier::classify`].
pub const CATEGORY_TABLE: [DepthCategory; 6] = [
    DepthCategory { label: "-10-10", color: "GreenYellow" },
    DepthCategory { label: "10-30", color: "Cyan" },
    DepthCategory { label: "30-50", color: "Tan" },
    DepthCategory { label: "50-70", color: "Salmon" },
    DepthCategory { label: "70-90", color: "Orange" },
    DepthCategory { label: "90+", color: "Red" },
];

// GeoJSON wire format. Only the fields the map reads are modelled; serde
// ignores the rest of the USGS properties.

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum FeedDocument {
    FeatureCollection { features: Vec<GeoJsonFeature> },
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeoJsonFeature {
    #[serde(default)]
    pub properties: Option<QuakeProperties>,
    pub geometry: Option<Geometry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuakeProperties {
    pub place: Option<String>,
    /// Epoch milliseconds. Some feeds write it as a float.
    pub time: Option<f64>,
    pub mag: Option<f64>,
}

/// Only points are placed on the map; every other geometry type is kept
/// as [`Geometry::Other`] so it can be skipped without failing the feed.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    /// `[longitude, latitude, depth]`
    Point {
        #[serde(default)]
        coordinates: Vec<f64>,
    },
    #[serde(other)]
    Other,
}

/// A single earthquake event, as consumed by the feature adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct EarthquakeFeature {
    pub place: Option<String>,
    /// Epoch milliseconds.
    pub time: Option<i64>,
    pub mag: Option<f64>,
    /// Kilometres, may be negative.
    pub depth: Option<f64>,
    pub longitude: f64,
    pub latitude: f64,
}

impl EarthquakeFeature {
    /// Returns `None` when the feature has no placeable point geometry.
    pub fn from_geojson(feature: GeoJsonFeature) -> Option<Self> {
        let coordinates = match feature.geometry? {
            Geometry::Point { coordinates } if coordinates.len() >= 2 => coordinates,
            _ => return None,
        };
        let properties = feature.properties.unwrap_or_default();

        Some(Self {
            place: properties.place,
            time: properties.time.map(|ms| ms.trunc() as i64),
            mag: properties.mag,
            depth: coordinates.get(2).copied(),
            longitude: coordinates[0],
            latitude: coordinates[1],
        })
    }
}

/// Rendering parameters for one circle marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerSpec {
    pub latitude: f64,
    pub longitude: f64,
    pub radius: f64,
    pub fill_color: &'static str,
    pub popup_text: String,
    pub color: &'static str,
    pub weight: f64,
    pub opacity: f64,
    pub fill_opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub color: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Legend {
    pub entries: Vec<LegendEntry>,
}

#[derive(Debug, Clone)]
pub struct RenderResult {
    pub markers: Vec<MarkerSpec>,
    pub legend: Legend,
}

/// Initial map viewport and page title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapSettings {
    pub title: String,
    pub center: [f64; 2],
    pub zoom: u8,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            title: "Earthquakes - Last 30 Days".to_string(),
            center: [37.09, -95.71],
            zoom: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_table_labels_in_order() {
        let labels: Vec<&str> = CATEGORY_TABLE.iter().map(|c| c.label).collect();
        assert_eq!(labels, vec!["-10-10", "10-30", "30-50", "50-70", "70-90", "90+"]);
    }

    #[test]
    fn test_decode_usgs_feature() {
        let json = serde_json::json!({
            "type": "FeatureCollection",
            "metadata": {"count": 1},
            "features": [{
                "type": "Feature",
                "properties": {"mag": 2.5, "place": "10 km N of Somewhere", "time": 1700000000000_i64, "tsunami": 0},
                "geometry": {"type": "Point", "coordinates": [-117.5, 35.1, 7.8]},
                "id": "ci123"
            }]
        });

        let FeedDocument::FeatureCollection { features } = serde_json::from_value(json).unwrap();
        let feature = EarthquakeFeature::from_geojson(features[0].clone()).unwrap();

        assert_eq!(feature.place.as_deref(), Some("10 km N of Somewhere"));
        assert_eq!(feature.time, Some(1_700_000_000_000));
        assert_eq!(feature.mag, Some(2.5));
        assert_eq!(feature.depth, Some(7.8));
        assert_eq!(feature.longitude, -117.5);
        assert_eq!(feature.latitude, 35.1);
    }

    #[test]
    fn test_null_magnitude_and_missing_depth() {
        let json = serde_json::json!({
            "properties": {"mag": null, "place": "X", "time": 0},
            "geometry": {"type": "Point", "coordinates": [1.0, 2.0]}
        });

        let feature: GeoJsonFeature = serde_json::from_value(json).unwrap();
        let feature = EarthquakeFeature::from_geojson(feature).unwrap();

        assert_eq!(feature.mag, None);
        assert_eq!(feature.depth, None);
    }

    #[test]
    fn test_feature_without_geometry_is_skipped() {
        let json = serde_json::json!({"properties": {"place": "X"}, "geometry": null});
        let feature: GeoJsonFeature = serde_json::from_value(json).unwrap();
        assert!(EarthquakeFeature::from_geojson(feature).is_none());

        let json = serde_json::json!({"properties": {}, "geometry": {"type": "Point", "coordinates": [1.0]}});
        let feature: GeoJsonFeature = serde_json::from_value(json).unwrap();
        assert!(EarthquakeFeature::from_geojson(feature).is_none());
    }

    #[test]
    fn test_non_point_geometry_is_skipped() {
        let json = serde_json::json!({
            "properties": {"place": "Fault zone"},
            "geometry": {"type": "Polygon", "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]}
        });
        let feature: GeoJsonFeature = serde_json::from_value(json).unwrap();
        assert!(EarthquakeFeature::from_geojson(feature).is_none());
    }

    #[test]
    fn test_null_properties_and_float_time() {
        let json = serde_json::json!({
            "properties": null,
            "geometry": {"type": "Point", "coordinates": [1.0, 2.0, 3.0]}
        });
        let feature: GeoJsonFeature = serde_json::from_value(json).unwrap();
        let feature = EarthquakeFeature::from_geojson(feature).unwrap();
        assert_eq!(feature.place, None);
        assert_eq!(feature.time, None);
        assert_eq!(feature.depth, Some(3.0));

        let json = serde_json::json!({
            "properties": {"time": 1.7e12},
            "geometry": {"type": "Point", "coordinates": [1.0, 2.0]}
        });
        let feature: GeoJsonFeature = serde_json::from_value(json).unwrap();
        let feature = EarthquakeFeature::from_geojson(feature).unwrap();
        assert_eq!(feature.time, Some(1_700_000_000_000));
    }

    #[test]
    fn test_non_collection_document_is_rejected() {
        let json = serde_json::json!({"type": "Feature", "properties": {}, "geometry": null});
        assert!(serde_json::from_value::<FeedDocument>(json).is_err());
    }
}
