//! Combined sign-in / sign-up page. Both forms stay mounted so switching tabs
//! keeps whatever the user already typed; the card heading follows the tab.

use crate::{
    app_lib::config::AppConfig,
    components::AuthCard,
    features::auth::mode::AuthMode,
    routes::{login::LoginForm, signup::SignupForm},
};
use leptos::prelude::*;
use tracing::debug;

/// `mode` pins the initial tab; otherwise the host page's marker decides.
#[component]
pub fn JoinPage(#[prop(optional)] mode: Option<AuthMode>) -> impl IntoView {
    let initial = mode.unwrap_or_else(|| AppConfig::load().initial_mode);
    let (active, set_active) = signal(initial);

    let select = move |mode: AuthMode| {
        if active.get_untracked() != mode {
            debug!(tab = mode.as_str(), "switching auth tab");
            set_active.set(mode);
        }
    };

    let tabs = [(AuthMode::Login, "Sign In"), (AuthMode::Signup, "Sign Up")]
        .into_iter()
        .map(|(mode, label)| {
            view! {
                <button
                    type="button"
                    class="tab-btn flex-1 py-2 text-sm font-medium"
                    class:active=move || active.get() == mode
                    data-tab=mode.as_str()
                    on:click=move |_| select(mode)
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    view! {
        <AuthCard
            title=Signal::derive(move || active.get().heading())
            subtitle=Signal::derive(move || active.get().subheading())
        >
            <div class="auth-tabs flex gap-2">{tabs}</div>
            <LoginForm active=Signal::derive(move || active.get() == AuthMode::Login) />
            <SignupForm active=Signal::derive(move || active.get() == AuthMode::Signup) />
        </AuthCard>
    }
}
