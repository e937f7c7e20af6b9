//! Layer plumbing for the campus map, kept free of the live map object so
//! the insertion logic and layer definitions are testable on their own.

use serde::Deserialize;
use serde_json::{json, Map as JsonMap, Value};

/// Page element the map binds to.
pub const MAP_CONTAINER_ID: &str = "map";
/// Base style for the campus view.
pub const MAP_STYLE: &str = "mapbox://styles/mapbox/light-v9?optimize=true";
/// Norman Hall, University of Florida (lon, lat).
pub const MAP_CENTER: (f64, f64) = (-82.3379, 29.6472);
pub const MAP_ZOOM: f64 = 15.0;
pub const MAP_PITCH: f64 = 45.0;

pub const MARKER_TITLE: &str = "Norman Hall";
pub const MARKER_ICON: &str = "marker";

pub const BUILDINGS_LAYER_ID: &str = "3d-buildings";
pub const MARKER_LAYER_ID: &str = "points";

/// The slice of a style layer the insertion search needs. Everything else in
/// the style snapshot is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct StyleLayer {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub layout: JsonMap<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct StyleSnapshot {
    #[serde(default)]
    pub layers: Vec<StyleLayer>,
}

/// Id of the first symbol layer that renders text. New layers go in below it
/// so the base style's place labels stay visually on top. `None` means no
/// such layer exists and insertions fall back to appending at the top of the
/// stack; callers must pass the absent id through unchanged.
pub fn label_layer_id(layers: &[StyleLayer]) -> Option<String> {
    layers
        .iter()
        .find(|layer| layer.kind == "symbol" && is_set(layer.layout.get("text-field")))
        .map(|layer| layer.id.clone())
}

// JS truthiness for a layout value: absent, null, false, 0, and "" all read
// as unset.
fn is_set(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(number)) => number.as_f64() != Some(0.0),
        Some(Value::String(text)) => !text.is_empty(),
        Some(_) => true,
    }
}

/// Constructor options for the map view.
pub fn map_options() -> Value {
    json!({
        "container": MAP_CONTAINER_ID,
        "style": MAP_STYLE,
        "center": [MAP_CENTER.0, MAP_CENTER.1],
        "zoom": MAP_ZOOM,
        "pitch": MAP_PITCH,
    })
}

/// Building extrusions from the style's composite source. Height and base
/// ramp from flat at zoom 15 to their data-driven values at 15.05 so the
/// buildings rise in instead of popping.
pub fn building_extrusion_layer() -> Value {
    json!({
        "id": BUILDINGS_LAYER_ID,
        "source": "composite",
        "source-layer": "building",
        "filter": ["==", "extrude", "true"],
        "type": "fill-extrusion",
        "minzoom": 14,
        "paint": {
            "fill-extrusion-color": "#aaa",
            "fill-extrusion-height": [
                "interpolate", ["linear"], ["zoom"],
                15, 0,
                15.05, ["get", "height"],
            ],
            "fill-extrusion-base": [
                "interpolate", ["linear"], ["zoom"],
                15, 0,
                15.05, ["get", "min_height"],
            ],
            "fill-extrusion-opacity": 0.6,
        },
    })
}

/// The single embedded point feature, as an inline GeoJSON source.
pub fn marker_source() -> Value {
    json!({
        "type": "geojson",
        "data": {
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": {
                    "type": "Point",
                    "coordinates": [MAP_CENTER.0, MAP_CENTER.1],
                },
                "properties": {
                    "title": MARKER_TITLE,
                    "icon": MARKER_ICON,
                },
            }],
        },
    })
}

/// Icon plus a text label offset below it, anchored at its top edge.
pub fn marker_layer() -> Value {
    json!({
        "id": MARKER_LAYER_ID,
        "type": "symbol",
        "source": marker_source(),
        "layout": {
            "icon-image": "{icon}-15",
            "text-field": "{title}",
            "text-font": ["Open Sans Semibold"],
            "text-offset": [0, 0.6],
            "text-anchor": "top",
        },
    })
}

/// One layer insertion: definition plus optional before-id.
pub struct LayerInsert {
    pub layer: Value,
    pub before: Option<String>,
}

/// What the load handler adds, in order: extrusions below the label layer
/// (or appended when there is none), then the marker on top.
pub fn layer_plan(label_layer: Option<String>) -> Vec<LayerInsert> {
    vec![
        LayerInsert {
            layer: building_extrusion_layer(),
            before: label_layer,
        },
        LayerInsert {
            layer: marker_layer(),
            before: None,
        },
    ]
}
