//! Server message banners. `FlashProvider` loads the messages the host page
//! embedded, dismisses them after a few seconds and exposes a context so form
//! inputs can clear them as soon as the user starts typing again.

use crate::components::{Alert, AlertKind};
use crate::features::flash::{AUTO_DISMISS_MS, FlashMessage, MESSAGES_ELEMENT_ID, parse_messages};
use leptos::leptos_dom::helpers::set_timeout_with_handle;
use leptos::prelude::*;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Clone, Copy)]
pub struct FlashContext {
    messages: RwSignal<Vec<FlashMessage>>,
}

impl FlashContext {
    fn new(messages: Vec<FlashMessage>) -> Self {
        Self {
            messages: RwSignal::new(messages),
        }
    }

    /// Removes every banner. No-op once empty or after teardown.
    pub fn clear(self) {
        let has_messages = self
            .messages
            .try_with_untracked(|messages| !messages.is_empty())
            .unwrap_or(false);
        if has_messages {
            debug!("dismissing server messages");
            self.messages.try_set(Vec::new());
        }
    }
}

/// Returns the flash context, or an empty one outside a provider.
pub fn use_flash() -> FlashContext {
    use_context::<FlashContext>().unwrap_or_else(|| FlashContext::new(Vec::new()))
}

fn embedded_messages() -> Vec<FlashMessage> {
    let Some(text) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(MESSAGES_ELEMENT_ID))
        .and_then(|element| element.text_content())
    else {
        return Vec::new();
    };

    parse_messages(&text).unwrap_or_else(|err| {
        warn!(error = %err, "ignoring server messages");
        Vec::new()
    })
}

#[component]
pub fn FlashProvider(children: Children) -> impl IntoView {
    let flash = FlashContext::new(embedded_messages());
    provide_context(flash);

    let dismiss = set_timeout_with_handle(
        move || flash.clear(),
        Duration::from_millis(AUTO_DISMISS_MS.into()),
    )
    .ok();
    on_cleanup(move || {
        if let Some(handle) = dismiss {
            handle.clear();
        }
    });

    children()
}

/// Renders the current banners.
#[component]
pub fn ServerMessages() -> impl IntoView {
    let flash = use_flash();

    view! {
        <div class="messages space-y-2">
            {move || {
                flash
                    .messages
                    .get()
                    .into_iter()
                    .map(|message| {
                        view! { <Alert kind=AlertKind::from(message.level) message=message.text /> }
                    })
                    .collect_view()
            }}
        </div>
    }
}
