use serde::Serialize;

/// A named tile source offered in the base-layer switcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseLayer {
    pub name: &'static str,
    pub url_template: &'static str,
    pub attribution: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subdomains: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_zoom: Option<u8>,
}

/// The first entry is visible when the page loads.
pub const BASE_LAYERS: [BaseLayer; 3] = [
    BaseLayer {
        name: "Street Map",
        url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
        attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors",
        subdomains: None,
        max_zoom: None,
    },
    BaseLayer {
        name: "Topographic Map",
        url_template: "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png",
        attribution: "Map data: &copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors, <a href=\"http://viewfinderpanoramas.org\">SRTM</a> | Map style: &copy; <a href=\"https://opentopomap.org\">OpenTopoMap</a> (<a href=\"https://creativecommons.org/licenses/by-sa/3.0/\">CC-BY-SA</a>)",
        subdomains: None,
        max_zoom: None,
    },
    BaseLayer {
        name: "Dark Map",
        url_template: "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png",
        attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors &copy; <a href=\"https://carto.com/attributions\">CARTO</a>",
        subdomains: Some("abcd"),
        max_zoom: Some(20),
    },
];

pub const OVERLAY_NAME: &str = "Earthquakes";

pub const LEGEND_POSITION: &str = "bottomright";
