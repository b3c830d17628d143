use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::config::{NOTIFICATION_ENTER_DELAY_MS, NOTIFICATION_EXIT_MS, NOTIFICATION_LIFETIME_MS};
use crate::dom::DomError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
}

impl NotificationKind {
    pub fn class_name(self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            NotificationKind::Info => "#3B82F6",
            NotificationKind::Success => "#10B981",
        }
    }
}

const HIDDEN: &str = "translateX(100%)";
const SHOWN: &str = "translateX(0)";

fn panel_style(kind: NotificationKind) -> String {
    format!(
        "position: fixed; top: 20px; right: 20px; background: {}; color: white; \
         padding: 1rem 1.5rem; border-radius: 8px; box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15); \
         z-index: 3000; transform: {}; transition: transform 0.3s ease;",
        kind.background(),
        HIDDEN
    )
}

fn slide(panel: &HtmlElement, transform: &str) {
    if let Err(e) = panel.style().set_property("transform", transform) {
        warn!("notification transform not applied: {:?}", e);
    }
}

/// Milliseconds after creation at which the panel leaves the page.
pub const fn removal_at_ms() -> u32 {
    NOTIFICATION_LIFETIME_MS + NOTIFICATION_EXIT_MS
}

/// Pushes transient message panels into `host`.
#[derive(Clone, Debug, PartialEq)]
pub struct Notifier {
    host: HtmlElement,
}

impl Notifier {
    pub fn new(host: HtmlElement) -> Self {
        Self { host }
    }

    pub fn show(&self, message: &str, kind: NotificationKind) {
        if let Err(e) = self.try_show(message, kind) {
            warn!("could not show notification: {}", e);
        }
    }

    fn try_show(&self, message: &str, kind: NotificationKind) -> Result<(), DomError> {
        let document = self.host.owner_document().ok_or(DomError::NoDocument)?;
        let panel = document
            .create_element("div")?
            .dyn_into::<HtmlElement>()
            .map_err(|_| DomError::Js("div is not an HtmlElement".to_string()))?;
        panel.set_class_name(&format!("notification {}", kind.class_name()));
        panel.set_text_content(Some(message));
        panel.set_attribute("style", &panel_style(kind))?;
        self.host.append_child(&panel)?;
        debug!("notification shown for {}ms: {:?} {}", removal_at_ms(), kind, message);

        {
            let panel = panel.clone();
            Timeout::new(NOTIFICATION_ENTER_DELAY_MS, move || {
                slide(&panel, SHOWN);
            })
            .forget();
        }

        Timeout::new(NOTIFICATION_LIFETIME_MS, move || {
            slide(&panel, HIDDEN);
            Timeout::new(NOTIFICATION_EXIT_MS, move || {
                // Already detached panels make this a no-op.
                panel.remove();
            })
            .forget();
        })
        .forget();

        Ok(())
    }
}
