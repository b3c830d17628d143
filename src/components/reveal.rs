use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::{REVEAL_CLASS, REVEAL_ROOT_MARGIN, REVEAL_SELECTOR, REVEAL_THRESHOLD};
use crate::dom::{self, DomError};

type RevealCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe_reveals() -> Result<(IntersectionObserver, RevealCallback), DomError> {
    let callback: RevealCallback = Closure::new(|entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if entry.is_intersecting() {
                let target = entry.target();
                let _ = target.class_list().add_1(REVEAL_CLASS);
                // Revealed elements stay revealed.
                observer.unobserve(&target);
            }
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

    let targets = dom::document()?.query_selector_all(REVEAL_SELECTOR)?;
    for i in 0..targets.length() {
        if let Some(element) = targets.get(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            observer.observe(&element);
        }
    }
    debug!("observing {} elements for reveal", targets.length());

    Ok((observer, callback))
}

/// Adds the reveal class to page regions the first time they scroll into view.
#[hook]
pub fn use_reveal_on_scroll() {
    use_effect_with_deps(
        move |_| {
            let observed = match observe_reveals() {
                Ok(observed) => Some(observed),
                Err(e) => {
                    warn!("scroll reveal disabled: {}", e);
                    None
                }
            };
            move || {
                if let Some((observer, _callback)) = observed {
                    observer.disconnect();
                }
            }
        },
        (),
    );
}
