use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent, Node};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::dom;
use crate::state::menu::{MenuAction, MenuState};
use crate::state::scroll::{active_section, NavbarAppearance, NavbarScroll, SectionBounds};

/// In-page links shown in the header, as (section id, label).
pub const NAV_LINKS: [(&str, &str); 6] = [
    ("home", "Home"),
    ("about", "About"),
    ("shows", "Shows"),
    ("team", "Team"),
    ("gallery", "Gallery"),
    ("contact", "Contact"),
];

fn section_bounds() -> Vec<SectionBounds> {
    let Ok(document) = dom::document() else {
        return Vec::new();
    };
    let Ok(sections) = document.query_selector_all("section[id]") else {
        return Vec::new();
    };
    (0..sections.length())
        .filter_map(|i| sections.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|section| SectionBounds {
            id: section.id(),
            top: section.offset_top() as f64,
            height: section.offset_height() as f64,
        })
        .collect()
}

#[hook]
fn use_active_section() -> Option<String> {
    let active = use_state(|| None::<String>);
    {
        let active = active.clone();
        use_event_with_window("scroll", move |_: Event| {
            let sections = section_bounds();
            if let Some(id) = active_section(dom::scroll_y(), &sections) {
                if active.as_deref() != Some(id) {
                    active.set(Some(id.to_string()));
                }
            }
        });
    }
    (*active).clone()
}

#[hook]
fn use_navbar_scroll() -> NavbarAppearance {
    let tracker = use_mut_ref(|| NavbarScroll::new(dom::scroll_y()));
    let appearance = use_state(NavbarAppearance::default);
    {
        let appearance = appearance.clone();
        use_event_with_window("scroll", move |_: Event| {
            let next = tracker.borrow_mut().sample(dom::scroll_y());
            if *appearance != next {
                appearance.set(next);
            }
        });
    }
    *appearance
}

fn is_inside(container: &NodeRef, target: Option<&Node>) -> bool {
    container
        .cast::<Node>()
        .map(|node| node.contains(target))
        .unwrap_or(false)
}

/// Closes the menu on clicks landing outside both the trigger and the menu.
#[hook]
fn use_close_on_outside_click(
    hamburger: NodeRef,
    menu: NodeRef,
    dispatch: UseReducerDispatcher<MenuState>,
) {
    use_effect_with_deps(
        move |_| {
            let destructor: Box<dyn FnOnce()> = if let Ok(document) = dom::document() {
                let listener = Closure::<dyn Fn(MouseEvent)>::new(move |e: MouseEvent| {
                    let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
                    if !is_inside(&hamburger, target.as_ref()) && !is_inside(&menu, target.as_ref()) {
                        dispatch.dispatch(MenuAction::Close);
                    }
                });
                if let Err(e) = document
                    .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
                {
                    warn!("outside-click listener not installed: {:?}", e);
                }
                Box::new(move || {
                    let _ = document
                        .remove_event_listener_with_callback("click", listener.as_ref().unchecked_ref());
                })
            } else {
                Box::new(|| ())
            };
            move || destructor()
        },
        (),
    );
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu = use_reducer(MenuState::default);
    let hamburger_ref = use_node_ref();
    let menu_ref = use_node_ref();
    let active = use_active_section();
    let appearance = use_navbar_scroll();

    use_close_on_outside_click(hamburger_ref.clone(), menu_ref.clone(), menu.dispatcher());

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.dispatch(MenuAction::Toggle))
    };

    // Takes the clicked link's href; every link closes the menu.
    let follow_link = {
        let menu = menu.clone();
        Callback::from(move |href: String| {
            match dom::fragment_id(&href) {
                Some(id) => {
                    if let Err(e) = dom::scroll_to_section(id) {
                        debug!("not scrolling for {}: {}", href, e);
                    }
                }
                None => debug!("link without fragment: {:?}", href),
            }
            menu.dispatch(MenuAction::Close);
        })
    };
    let link_onclick = move |href: String| {
        let follow_link = follow_link.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            follow_link.emit(href.clone());
        })
    };

    let open_class = menu.is_open().then(|| "active");

    html! {
        <nav
            id="navbar"
            class={classes!("navbar", appearance.scrolled.then(|| "scrolled"))}
            style={format!("transform: {};", appearance.transform())}
        >
            <div class="nav-container">
                <a href="#home" class="nav-logo" onclick={link_onclick("#home".to_string())}>{"IMPROV.AE"}</a>
                <ul id="nav-menu" class={classes!("nav-menu", open_class)} ref={menu_ref}>
                    { for NAV_LINKS.iter().map(|(id, label)| {
                        let is_active = active.as_deref() == Some(*id);
                        let href = format!("#{}", id);
                        html! {
                            <li class="nav-item">
                                <a
                                    href={href.clone()}
                                    class={classes!("nav-link", is_active.then(|| "active"))}
                                    onclick={link_onclick(href)}
                                >
                                    {*label}
                                </a>
                            </li>
                        }
                    }) }
                </ul>
                <button
                    id="nav-hamburger"
                    class={classes!("nav-hamburger", open_class)}
                    onclick={toggle_menu}
                    ref={hamburger_ref}
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </div>
        </nav>
    }
}
