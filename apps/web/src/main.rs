mod badges;
mod config;
mod labels;
mod map;

// Both widgets run once per page load and are independent: a failure in one
// never blocks the other.
fn main() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        web_sys::console::error_1(&"no document; nothing to mount".into());
        return;
    };

    badges::mount(&document);
    map::mount(&window);
}
