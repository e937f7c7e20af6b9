mod ffi;
pub mod style;

use serde::Serialize;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;

use crate::config;

/// Constructs the campus map and registers the one-shot load handler that
/// adds the building extrusions, the marker, and the navigation control.
/// A missing container or token skips the widget; the rest of the page
/// keeps working.
pub fn mount(window: &Window) {
    let Some(document) = window.document() else {
        return;
    };
    let Some(container) = document.get_element_by_id(style::MAP_CONTAINER_ID) else {
        web_sys::console::error_1(
            &format!("#{} not found; skipping map widget", style::MAP_CONTAINER_ID).into(),
        );
        return;
    };

    let Some(token) = config::mapbox_token(window) else {
        web_sys::console::error_1(&"Mapbox token not configured; skipping map widget".into());
        container.set_text_content(Some("Map is unavailable: no access token configured."));
        return;
    };

    if let Err(error) = init(&token) {
        web_sys::console::error_1(&error);
        container.set_text_content(Some("Map failed to initialize."));
    }
}

fn init(token: &str) -> Result<(), JsValue> {
    ffi::set_access_token(token)?;

    let map = ffi::Map::new(&to_js(&style::map_options())?);

    let handler = {
        let map = map.clone();
        Closure::once_into_js(move || {
            if let Err(error) = add_layers(map.unchecked_ref()) {
                web_sys::console::error_1(&error);
            }
        })
    };
    map.on("load", handler.unchecked_ref());

    Ok(())
}

// Fires once, after the style resource resolves.
fn add_layers(map: &ffi::Map) -> Result<(), JsValue> {
    let snapshot: style::StyleSnapshot =
        serde_wasm_bindgen::from_value(map.get_style()).map_err(JsValue::from)?;
    let target = style::label_layer_id(&snapshot.layers);

    for insert in style::layer_plan(target) {
        map.add_layer(&to_js(&insert.layer)?, insert.before.as_deref());
    }

    map.add_control(&ffi::NavigationControl::new());
    Ok(())
}

// Plain JS objects, not the ES Map values serde-wasm-bindgen emits by
// default; Mapbox GL rejects the latter.
fn to_js(value: &serde_json::Value) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(JsValue::from)
}
