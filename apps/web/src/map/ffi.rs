//! Thin bindings to the Mapbox GL JS global. No state, no logic.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// `mapboxgl.Map`
    #[wasm_bindgen(js_namespace = mapboxgl)]
    pub type Map;

    #[wasm_bindgen(constructor, js_namespace = mapboxgl)]
    pub fn new(options: &JsValue) -> Map;

    #[wasm_bindgen(method)]
    pub fn on(this: &Map, event: &str, handler: &js_sys::Function);

    #[wasm_bindgen(method, js_name = getStyle)]
    pub fn get_style(this: &Map) -> JsValue;

    /// A `None` before-id appends the layer at the top of the stack.
    #[wasm_bindgen(method, js_name = addLayer)]
    pub fn add_layer(this: &Map, layer: &JsValue, before_id: Option<&str>);

    #[wasm_bindgen(method, js_name = addControl)]
    pub fn add_control(this: &Map, control: &NavigationControl);
}

#[wasm_bindgen]
extern "C" {
    /// `mapboxgl.NavigationControl`
    #[wasm_bindgen(js_namespace = mapboxgl)]
    pub type NavigationControl;

    #[wasm_bindgen(constructor, js_namespace = mapboxgl)]
    pub fn new() -> NavigationControl;
}

/// Assigns `mapboxgl.accessToken`. Must run before the first `Map` is
/// constructed or the style request goes out unauthorized.
pub fn set_access_token(token: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let namespace = js_sys::Reflect::get(window.as_ref(), &JsValue::from_str("mapboxgl"))?;
    if namespace.is_undefined() {
        return Err(JsValue::from_str("mapboxgl is not loaded"));
    }
    js_sys::Reflect::set(
        &namespace,
        &JsValue::from_str("accessToken"),
        &JsValue::from_str(token),
    )?;
    Ok(())
}
