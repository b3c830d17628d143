use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, Node};
use yew::prelude::*;

use crate::dom;
use crate::state::lightbox::{Lightbox, LightboxAction};

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    pub captions: &'static [&'static str],
}

fn set_page_overflow(overflow: &str) {
    match dom::body() {
        Ok(body) => {
            if let Err(e) = body.style().set_property("overflow", overflow) {
                warn!("page overflow not set to {}: {:?}", overflow, e);
            }
        }
        Err(e) => debug!("cannot set page overflow: {}", e),
    }
}

/// Keyboard controls, installed only while the lightbox is open.
#[hook]
fn use_lightbox_keys(is_open: bool, dispatch: UseReducerDispatcher<Lightbox>) {
    use_effect_with_deps(
        move |is_open| {
            let destructor: Box<dyn FnOnce()> = match (*is_open, dom::document()) {
                (true, Ok(document)) => {
                    let listener = Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                        if let Some(action) = LightboxAction::from_key(&e.key()) {
                            dispatch.dispatch(action);
                        }
                    });
                    if let Err(e) = document
                        .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())
                    {
                        warn!("lightbox keys unavailable: {:?}", e);
                    }
                    Box::new(move || {
                        let _ = document.remove_event_listener_with_callback(
                            "keydown",
                            listener.as_ref().unchecked_ref(),
                        );
                    })
                }
                _ => Box::new(|| ()),
            };
            move || destructor()
        },
        is_open,
    );
}

#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
    let captions = props.captions;
    let lightbox = use_reducer(|| Lightbox::new(captions.len()));
    let is_open = lightbox.is_open();
    // Kept across renders so a missing caption leaves the previous text in place.
    let shown_caption = use_mut_ref(String::new);
    let modal_ref = use_node_ref();

    use_lightbox_keys(is_open, lightbox.dispatcher());

    // The page style is only touched while open; closing restores scrolling.
    use_effect_with_deps(
        move |is_open| {
            let locked = *is_open;
            if locked {
                set_page_overflow("hidden");
            }
            move || {
                if locked {
                    set_page_overflow("auto");
                }
            }
        },
        is_open,
    );

    if let Some(caption) = lightbox.caption(captions) {
        if *shown_caption.borrow() != caption {
            *shown_caption.borrow_mut() = caption.to_string();
        }
    }

    let on_close = {
        let lightbox = lightbox.clone();
        Callback::from(move |_: MouseEvent| lightbox.dispatch(LightboxAction::Close))
    };

    let on_backdrop = {
        let lightbox = lightbox.clone();
        let modal_ref = modal_ref.clone();
        Callback::from(move |e: MouseEvent| {
            // Only clicks on the overlay itself, not on its content.
            let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
            if target.is_some() && target == modal_ref.cast::<Node>() {
                lightbox.dispatch(LightboxAction::Close);
            }
        })
    };

    html! {
        <>
            <div class="gallery-grid">
                { for captions.iter().enumerate().map(|(index, caption)| {
                    let onclick = {
                        let lightbox = lightbox.clone();
                        Callback::from(move |_: MouseEvent| lightbox.dispatch(LightboxAction::Open(index)))
                    };
                    html! {
                        <div class="gallery-item" {onclick}>
                            <div class="gallery-placeholder">
                                <span class="gallery-number">{index + 1}</span>
                            </div>
                            <div class="gallery-overlay">
                                <p>{*caption}</p>
                            </div>
                        </div>
                    }
                }) }
            </div>
            <div
                id="gallery-modal"
                class="modal"
                style={if is_open { "display: block;" } else { "display: none;" }}
                onclick={on_backdrop}
                ref={modal_ref}
            >
                <div class="modal-content">
                    <span class="modal-close" onclick={on_close}>{"×"}</span>
                    <div class="modal-placeholder">
                        <span class="gallery-number">{lightbox.current_index() + 1}</span>
                    </div>
                    <p class="modal-caption">{shown_caption.borrow().clone()}</p>
                </div>
            </div>
        </>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::browser_support::{find, mount_point, press_key, settle};
    use crate::captions::CAPTIONS;
    use web_sys::{Element, HtmlElement};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount() -> (Element, yew::AppHandle<Gallery>) {
        let host = mount_point();
        let app = yew::Renderer::<Gallery>::with_root_and_props(
            host.clone(),
            GalleryProps { captions: CAPTIONS.as_slice() },
        )
        .render();
        (host, app)
    }

    fn modal_display(host: &Element) -> String {
        find(host, "#gallery-modal").style().get_property_value("display").unwrap()
    }

    fn caption(host: &Element) -> String {
        find(host, ".modal-caption").text_content().unwrap_or_default()
    }

    fn item(host: &Element, index: usize) -> HtmlElement {
        host.query_selector_all(".gallery-item")
            .unwrap()
            .get(index as u32)
            .unwrap()
            .dyn_into()
            .unwrap()
    }

    fn body_overflow() -> String {
        dom::body().unwrap().style().get_property_value("overflow").unwrap()
    }

    #[wasm_bindgen_test(async)]
    async fn keys_only_act_while_open() {
        let (host, app) = mount();
        settle().await;

        press_key("ArrowRight");
        press_key("Escape");
        settle().await;
        assert_eq!(modal_display(&host), "none");

        item(&host, 5).click();
        settle().await;
        assert_eq!(modal_display(&host), "block");
        assert_eq!(caption(&host), CAPTIONS[5]);

        press_key("ArrowRight");
        settle().await;
        assert_eq!(caption(&host), CAPTIONS[0]);

        press_key("ArrowLeft");
        press_key("ArrowLeft");
        settle().await;
        assert_eq!(caption(&host), CAPTIONS[4]);

        press_key("Escape");
        settle().await;
        assert_eq!(modal_display(&host), "none");

        // Closed again: arrows must not move the index.
        press_key("ArrowRight");
        settle().await;
        assert_eq!(caption(&host), CAPTIONS[4]);

        app.destroy();
        host.remove();
    }

    #[wasm_bindgen_test(async)]
    async fn backdrop_click_closes_but_content_click_does_not() {
        let (host, app) = mount();
        settle().await;

        item(&host, 2).click();
        settle().await;
        assert_eq!(caption(&host), CAPTIONS[2]);

        find(&host, ".modal-content").click();
        settle().await;
        assert_eq!(modal_display(&host), "block");

        find(&host, "#gallery-modal").click();
        settle().await;
        assert_eq!(modal_display(&host), "none");

        app.destroy();
        host.remove();
    }

    #[wasm_bindgen_test(async)]
    async fn page_overflow_only_changes_around_open() {
        let body = dom::body().unwrap();
        body.style().set_property("overflow", "scroll").unwrap();

        let (host, app) = mount();
        settle().await;
        assert_eq!(body_overflow(), "scroll");

        item(&host, 0).click();
        settle().await;
        assert_eq!(body_overflow(), "hidden");

        find(&host, ".modal-close").click();
        settle().await;
        assert_eq!(modal_display(&host), "none");
        assert_eq!(body_overflow(), "auto");

        app.destroy();
        host.remove();
        body.style().remove_property("overflow").unwrap();
    }
}
