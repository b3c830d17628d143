//! Helpers shared by the in-browser test modules.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent, KeyboardEventInit};

use crate::dom;

/// A fresh container appended to the page body.
pub fn mount_point() -> Element {
    let host = dom::document().unwrap().create_element("div").unwrap();
    dom::body().unwrap().append_child(&host).unwrap();
    host
}

/// Lets queued renders, effects and listeners run.
pub async fn settle() {
    TimeoutFuture::new(30).await;
}

pub fn find(root: &Element, selector: &str) -> HtmlElement {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("nothing matches {}", selector))
        .dyn_into()
        .unwrap()
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

pub fn press_key(key: &str) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    dom::document().unwrap().dispatch_event(&event).unwrap();
}
