use crate::domain::basemap::{BASE_LAYERS, LEGEND_POSITION, OVERLAY_NAME};
use crate::domain::model::{MapSettings, RenderResult};
use crate::utils::error::Result;
use handlebars::Handlebars;
use serde::Serialize;
use serde_json::json;

pub const LEAFLET_VERSION: &str = "1.9.4";

/// Host page for the map. Values in `<script>` are pre-serialized JSON
/// and use triple-stash so handlebars does not HTML-escape them.
pub const MAP_PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">

<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{title}}</title>

  <link rel="stylesheet" href="https://unpkg.com/leaflet@{{leaflet_version}}/dist/leaflet.css" />
  <script src="https://unpkg.com/leaflet@{{leaflet_version}}/dist/leaflet.js"></script>

  <style>
    html, body { height: 100%; margin: 0; padding: 0; }
    #map { height: 100%; width: 100%; }
    .info {
      padding: 6px 8px;
      font: 14px/16px Arial, Helvetica, sans-serif;
      background: white;
      background: rgba(255, 255, 255, 0.8);
      box-shadow: 0 0 15px rgba(0, 0, 0, 0.2);
      border-radius: 5px;
    }
    .legend { line-height: 18px; color: #555; }
    .legend li {
      list-style: none;
      float: left;
      width: 18px;
      height: 18px;
      margin-right: 8px;
      opacity: 0.8;
    }
  </style>
</head>

<body>
  <div id="map"></div>

  <script>
    var markers = {{{markers}}};
    var baseLayerSpecs = {{{base_layers}}};

    var baseMaps = {};
    var startLayer = null;
    baseLayerSpecs.forEach(function (spec) {
      var options = { attribution: spec.attribution };
      if (spec.subdomains) { options.subdomains = spec.subdomains; }
      if (spec.maxZoom) { options.maxZoom = spec.maxZoom; }
      var layer = L.tileLayer(spec.urlTemplate, options);
      if (startLayer === null) { startLayer = layer; }
      baseMaps[spec.name] = layer;
    });

    var earthquakes = L.layerGroup(markers.map(function (m) {
      return L.circleMarker([m.latitude, m.longitude], {
        radius: m.radius,
        fillColor: m.fillColor,
        color: m.color,
        weight: m.weight,
        opacity: m.opacity,
        fillOpacity: m.fillOpacity
      }).bindPopup(m.popupText);
    }));

    var overlayMaps = {};
    overlayMaps[{{{overlay_name}}}] = earthquakes;

    var map = L.map("map", {
      center: {{{center}}},
      zoom: {{zoom}},
      layers: [startLayer, earthquakes]
    });

    var legend = L.control({ position: {{{legend_position}}} });
    legend.onAdd = function () {
      var div = L.DomUtil.create('div', 'info legend');
      div.innerHTML = {{{legend_html}}};
      return div;
    };
    legend.addTo(map);

    L.control.layers(baseMaps, overlayMaps, {
      collapsed: false
    }).addTo(map);
  </script>
</body>

</html>
"##;

/// Serializes `value` for inline use in a `<script>` block.
pub fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

pub fn render_map_page(settings: &MapSettings, result: &RenderResult) -> Result<String> {
    let handlebars = Handlebars::new();

    let page = handlebars.render_template(
        MAP_PAGE_TEMPLATE,
        &json!({
            "title": settings.title,
            "leaflet_version": LEAFLET_VERSION,
            "markers": script_json(&result.markers)?,
            "base_layers": script_json(&BASE_LAYERS)?,
            "overlay_name": script_json(OVERLAY_NAME)?,
            "center": script_json(&settings.center)?,
            "zoom": settings.zoom,
            "legend_position": script_json(LEGEND_POSITION)?,
            "legend_html": script_json(&result.legend.to_html())?,
        }),
    )?;

    Ok(page)
}
