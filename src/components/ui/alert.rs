//! Alert banners for server messages. Messages come from the host page and are
//! rendered as text, never as markup.

use crate::features::flash::FlashLevel;
use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Supported alert styles.
pub enum AlertKind {
    Error,
    Success,
    Info,
}

impl From<FlashLevel> for AlertKind {
    fn from(level: FlashLevel) -> Self {
        match level {
            FlashLevel::Success => Self::Success,
            FlashLevel::Error => Self::Error,
            FlashLevel::Info => Self::Info,
        }
    }
}

/// Renders a styled alert banner.
#[component]
pub fn Alert(kind: AlertKind, message: String) -> impl IntoView {
    let (class, icon) = match kind {
        AlertKind::Error => (
            "alert alert-error rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700",
            "fas fa-exclamation-circle",
        ),
        AlertKind::Success => (
            "alert alert-success rounded-lg border border-emerald-200 bg-emerald-50 px-4 py-3 text-sm text-emerald-700",
            "fas fa-check-circle",
        ),
        AlertKind::Info => (
            "alert alert-info rounded-lg border border-blue-200 bg-blue-50 px-4 py-3 text-sm text-blue-700",
            "fas fa-info-circle",
        ),
    };

    view! {
        <div class=class role="alert">
            <i class=icon></i>
            " "
            {message}
        </div>
    }
}

/// Interrupts the user with the browser's modal alert.
pub fn blocking_alert(message: &str) {
    let shown = web_sys::window().is_some_and(|window| window.alert_with_message(message).is_ok());
    if !shown {
        tracing::warn!("unable to show alert");
    }
}
