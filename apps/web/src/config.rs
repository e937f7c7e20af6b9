use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::Window;

const TOKEN_GLOBAL: &str = "MAPBOX_TOKEN";
const TOKEN_META_SELECTOR: &str = "meta[name=\"mapbox-token\"]";

/// Resolves the Mapbox access token injected by the page: a
/// `window.MAPBOX_TOKEN` global first, then a `<meta name="mapbox-token">`
/// tag. The token is deployment configuration, never a source literal.
pub fn mapbox_token(window: &Window) -> Option<String> {
    if let Ok(value) = Reflect::get(window.as_ref(), &JsValue::from_str(TOKEN_GLOBAL)) {
        if let Some(token) = value.as_string() {
            if !token.is_empty() {
                return Some(token);
            }
        }
    }

    let document = window.document()?;
    let meta = document.query_selector(TOKEN_META_SELECTOR).ok()??;
    let content = meta.get_attribute("content")?;
    if content.is_empty() {
        None
    } else {
        Some(content)
    }
}
