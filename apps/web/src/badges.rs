use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, Element, Request, RequestInit, RequestMode, Response};

use crate::labels::{self, Badge, Label};

/// Page element the badge list mounts into.
pub const CONTAINER_ID: &str = "gitlabels";
/// Id of the `<ul>` created inside the container.
pub const LIST_ID: &str = "gl_newlist";

const BADGE_CLASS: &str =
    "IssueLabel--big d-inline-block v-align-top lh-condensed js-label-link gitlabel";

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request could not be constructed")]
    Request,
    #[error("network request failed")]
    Network,
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("response body could not be read")]
    Body,
    #[error("malformed label payload: {0}")]
    Parse(String),
}

/// Creates the badge list and starts the label fetch. The list element is in
/// place before the request is issued, so a slow response still lands in a
/// stable container.
pub fn mount(document: &Document) {
    let Some(container) = document.get_element_by_id(CONTAINER_ID) else {
        web_sys::console::error_1(
            &format!("#{CONTAINER_ID} not found; skipping label badges").into(),
        );
        return;
    };

    let list = match create_list(document, &container) {
        Ok(list) => list,
        Err(error) => {
            web_sys::console::error_1(&error);
            return;
        }
    };

    let document = document.clone();
    spawn_local(async move {
        populate(&document, &list).await;
    });
}

fn create_list(document: &Document, container: &Element) -> Result<Element, JsValue> {
    let list = document.create_element("ul")?;
    list.set_id(LIST_ID);
    container.append_child(&list)?;
    Ok(list)
}

async fn populate(document: &Document, list: &Element) {
    match fetch_labels(labels::LABELS_URL).await {
        Ok(records) => {
            if let Err(error) = render_badges(document, list, &labels::badges(&records)) {
                web_sys::console::error_1(&error);
            }
        }
        Err(error) => {
            web_sys::console::error_1(&format!("label fetch failed: {error}").into());
            if let Err(error) = render_fallback(document, list) {
                web_sys::console::error_1(&error);
            }
        }
    }
}

async fn fetch_labels(url: &str) -> Result<Vec<Label>, FetchError> {
    let window = web_sys::window().ok_or(FetchError::Request)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request =
        Request::new_with_str_and_init(url, &opts).map_err(|_| FetchError::Request)?;

    let response_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| FetchError::Network)?;
    let response: Response = response_value.dyn_into().map_err(|_| FetchError::Body)?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let body = response.json().map_err(|_| FetchError::Body)?;
    let json = JsFuture::from(body).await.map_err(|_| FetchError::Body)?;

    serde_wasm_bindgen::from_value(json).map_err(|error| FetchError::Parse(error.to_string()))
}

/// Appends one `<li><span>` per badge, in badge order.
fn render_badges(document: &Document, list: &Element, badges: &[Badge]) -> Result<(), JsValue> {
    for badge in badges {
        let item = document.create_element("li")?;
        let span = document.create_element("span")?;
        span.set_attribute("class", BADGE_CLASS)?;
        span.set_attribute(
            "style",
            &format!(
                "background-color: {}; color: {};",
                badge.background, badge.text_color
            ),
        )?;
        span.set_text_content(Some(&badge.name));
        item.append_child(&span)?;
        list.append_child(&item)?;
    }
    Ok(())
}

// Visible degradation instead of a silently empty list.
fn render_fallback(document: &Document, list: &Element) -> Result<(), JsValue> {
    let item = document.create_element("li")?;
    item.set_text_content(Some("Labels are unavailable right now."));
    list.append_child(&item)?;
    Ok(())
}
