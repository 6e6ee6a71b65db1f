use crate::features::auth::csrf::{CSRF_FIELD_NAME, csrf_token};
use leptos::html;
use leptos::prelude::*;
use secrecy::ExposeSecret;
use tracing::warn;

/// Hidden anti-forgery input for native form posts.
#[component]
pub fn CsrfField() -> impl IntoView {
    let token = match csrf_token() {
        Ok(token) => token.expose_secret().to_string(),
        Err(err) => {
            warn!(error = %err, "form rendered without a security token");
            String::new()
        }
    };

    view! { <input type="hidden" name=CSRF_FIELD_NAME value=token /> }
}

/// Posts `form` natively. `submit()` does not re-dispatch the submit event.
pub fn submit_form(form: NodeRef<html::Form>) {
    match form.get_untracked() {
        Some(form) => {
            if form.submit().is_err() {
                warn!("native form submission failed");
            }
        }
        None => warn!("form is not mounted"),
    }
}
