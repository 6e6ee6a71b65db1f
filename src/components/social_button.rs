//! Google and Discord sign-in buttons shared by both auth forms.

use crate::app_lib::config::AppConfig;
use crate::components::Spinner;
use crate::features::auth::social::{
    CONNECTING_LABEL, REDIRECT_FALLBACK_MS, SocialButtonState, SocialProvider,
};
use leptos::ev::MouseEvent;
use leptos::leptos_dom::helpers::{TimeoutHandle, set_timeout_with_handle};
use leptos::prelude::*;
use std::time::Duration;
use tracing::{info, warn};

/// Sends the page to the provider's login route. The button stays disabled
/// while the browser navigates and comes back if the page is still here after
/// the fallback delay.
#[component]
pub fn SocialButton(provider: SocialProvider) -> impl IntoView {
    let url = provider.login_url(&AppConfig::load()).to_string();
    let state = RwSignal::new(SocialButtonState::default());
    let fallback = StoredValue::new(None::<TimeoutHandle>);

    on_cleanup(move || {
        if let Some(handle) = fallback.try_write_value().and_then(|mut stored| stored.take()) {
            handle.clear();
        }
    });

    let on_click = move |event: MouseEvent| {
        event.prevent_default();
        if !state.try_update(SocialButtonState::press).unwrap_or(false) {
            return;
        }

        info!(provider = provider.as_str(), "redirecting to identity provider");
        let navigated = web_sys::window()
            .is_some_and(|window| window.location().set_href(&url).is_ok());
        if !navigated {
            warn!(provider = provider.as_str(), "unable to start provider redirect");
        }

        let scheduled = set_timeout_with_handle(
            move || {
                state.try_update(SocialButtonState::restore);
            },
            Duration::from_millis(REDIRECT_FALLBACK_MS.into()),
        );
        match scheduled {
            Ok(handle) => {
                if let Some(mut stored) = fallback.try_write_value() {
                    *stored = Some(handle);
                }
            }
            Err(_) => warn!("unable to schedule social button fallback"),
        }
    };

    let connecting = move || state.with(|state| state.is_connecting());

    view! {
        <button
            type="button"
            class=format!("btn-social {}", provider.as_str())
            disabled=connecting
            on:click=on_click
        >
            {move || {
                if connecting() {
                    view! { <Spinner /> " " {CONNECTING_LABEL} }.into_any()
                } else {
                    view! { <i class=provider.icon()></i> " " {provider.label()} }.into_any()
                }
            }}
        </button>
    }
}

/// Divider plus one button per provider.
#[component]
pub fn SocialSignIn() -> impl IntoView {
    view! {
        <div class="social-login space-y-3">
            <div class="divider text-center text-xs text-slate-400">
                <span>"or continue with"</span>
            </div>
            <div class="social-buttons flex gap-2">
                {SocialProvider::ALL
                    .into_iter()
                    .map(|provider| view! { <SocialButton provider=provider /> })
                    .collect_view()}
            </div>
        </div>
    }
}
