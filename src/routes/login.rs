//! Login form. Fields validate on input and blur; a clean submit disables the
//! button and posts the form natively to the configured login route, where
//! the server checks credentials and continues with the one-time code.

use crate::{
    app_lib::config::AppConfig,
    components::{
        Button, CsrfField, FormField, FormHandle, SocialSignIn, blocking_alert, submit_form,
    },
    features::{
        auth::forms::{FormValidator, SubmitDecision},
        validation::FieldId,
    },
    routes::paths,
};
use leptos::{ev::SubmitEvent, html, prelude::*};
use leptos_router::components::A;

#[component]
pub fn LoginForm(#[prop(into)] active: Signal<bool>) -> impl IntoView {
    let config = AppConfig::load();
    let form = FormHandle::new(FormValidator::login());
    let form_ref = NodeRef::<html::Form>::new();

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        match form.submit(false) {
            SubmitDecision::Proceed => submit_form(form_ref),
            SubmitDecision::Blocked(message) => blocking_alert(message),
            SubmitDecision::Rejected => {}
        }
    };

    view! {
        <form
            id="loginForm"
            class="auth-form space-y-4"
            class:hidden=move || !active.get()
            method="post"
            action=config.login_url
            novalidate
            node_ref=form_ref
            on:submit=on_submit
        >
            <CsrfField />
            <FormField
                form=form
                field=FieldId::LoginIdentifier
                label="Username or Email"
                placeholder="Enter your username or email"
                autocomplete="username"
                icon="fas fa-user"
            />
            <FormField
                form=form
                field=FieldId::LoginPassword
                label="Password"
                input_type="password"
                placeholder="Enter your password"
                autocomplete="current-password"
                icon="fas fa-lock"
            />
            <div class="form-options flex items-center justify-between text-sm">
                <label class="checkbox-label">
                    <input type="checkbox" id="rememberMe" name="remember_me" />
                    " Remember me"
                </label>
                <A href=paths::RESET_REQUEST>"Forgot password?"</A>
            </div>
            <Button
                id="loginBtn"
                button_type="submit"
                busy=Signal::derive(move || form.is_submitting())
                busy_label=form.busy_label()
            >
                {form.idle_label()}
            </Button>
            <SocialSignIn />
        </form>
    }
}
