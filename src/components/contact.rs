use gloo_timers::future::TimeoutFuture;
use log::{debug, info, warn};
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;

use crate::components::notification::{NotificationKind, Notifier};
use crate::config::{SUBMIT_BUSY_LABEL, SUBMIT_DELAY_MS, SUBMIT_LABEL, SUBMIT_SUCCESS_MESSAGE};

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    fn from_form(form: &HtmlFormElement) -> Self {
        let Ok(data) = FormData::new_with_form(form) else {
            return Self::default();
        };
        let field = |name: &str| data.get(name).as_string().unwrap_or_default();
        Self {
            name: field("name"),
            email: field("email"),
            subject: field("subject"),
            message: field("message"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Sending,
}

impl SubmitState {
    pub fn label(self) -> &'static str {
        match self {
            SubmitState::Idle => SUBMIT_LABEL,
            SubmitState::Sending => SUBMIT_BUSY_LABEL,
        }
    }

    pub fn is_sending(self) -> bool {
        self == SubmitState::Sending
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    /// Where the confirmation shows up; without one the form still resets.
    pub notifier: Option<Notifier>,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let state = use_state(SubmitState::default);
    let form_ref = use_node_ref();

    let onsubmit = {
        let state = state.clone();
        let form_ref = form_ref.clone();
        let notifier = props.notifier.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if state.is_sending() {
                return;
            }
            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                warn!("contact form is not mounted");
                return;
            };

            let message = ContactMessage::from_form(&form);
            match serde_json::to_string(&message) {
                Ok(json) => debug!("contact form submitted: {}", json),
                Err(e) => debug!("contact form submitted (unserializable: {})", e),
            }
            state.set(SubmitState::Sending);

            let state = state.clone();
            let notifier = notifier.clone();
            spawn_local(async move {
                // No transport yet; stands in for the request round trip.
                TimeoutFuture::new(SUBMIT_DELAY_MS).await;
                form.reset();
                state.set(SubmitState::Idle);
                info!("contact message from {} accepted", message.email);
                if let Some(notifier) = notifier {
                    notifier.show(SUBMIT_SUCCESS_MESSAGE, NotificationKind::Success);
                }
            });
        })
    };

    html! {
        <form id="contact-form" class="contact-form" novalidate={true} {onsubmit} ref={form_ref}>
            <div class="form-group">
                <input type="text" name="name" placeholder="Your Name" />
            </div>
            <div class="form-group">
                <input type="email" name="email" placeholder="Your Email" />
            </div>
            <div class="form-group">
                <input type="text" name="subject" placeholder="Subject" />
            </div>
            <div class="form-group">
                <textarea name="message" rows="5" placeholder="Your Message"></textarea>
            </div>
            <button type="submit" class="form-submit" disabled={state.is_sending()}>
                {state.label()}
            </button>
        </form>
    }
}
