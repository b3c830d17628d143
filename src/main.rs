use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, warn};

mod captions;
mod config;
mod dom;
mod state {
    pub mod lightbox;
    pub mod menu;
    pub mod scroll;
}
mod components {
    pub mod contact;
    pub mod gallery;
    pub mod nav;
    pub mod notification;
    pub mod reveal;
}
mod pages {
    pub mod home;
}
#[cfg(all(test, target_arch = "wasm32"))]
mod browser_support;

use components::nav::Nav;
use components::notification::Notifier;
use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Properties, PartialEq)]
struct ShellProps {
    notifier: Option<Notifier>,
}

#[function_component(Shell)]
fn shell(props: &ShellProps) -> Html {
    let notifier = props.notifier.clone();
    let switch = move |route: Route| match route {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home notifier={notifier.clone()} /> }
        }
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    };

    html! { <Switch<Route> render={switch} /> }
}

#[function_component]
fn App() -> Html {
    // Notifications go straight into the page body, outside the component tree.
    let notifier = use_memo(
        |_| match dom::body() {
            Ok(body) => Some(Notifier::new(body)),
            Err(e) => {
                warn!("notifications disabled: {}", e);
                None
            }
        },
        (),
    );

    html! {
        <BrowserRouter>
            <Nav />
            <Shell notifier={(*notifier).clone()} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting site");
    yew::Renderer::<App>::new().render();
}
