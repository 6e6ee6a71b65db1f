//! Signup form. Same validation flow as login plus the terms checkbox, which
//! blocks submission with an alert, and a live password strength meter.

use crate::{
    app_lib::config::AppConfig,
    components::{
        Button, CsrfField, FormField, FormHandle, SocialSignIn, StrengthMeter, blocking_alert,
        submit_form,
    },
    features::{
        auth::forms::{FormValidator, SubmitDecision},
        validation::{FieldId, strength::PasswordStrength},
    },
};
use leptos::{ev::SubmitEvent, html, prelude::*};

#[component]
pub fn SignupForm(#[prop(into)] active: Signal<bool>) -> impl IntoView {
    let config = AppConfig::load();
    let form = FormHandle::new(FormValidator::signup());
    let form_ref = NodeRef::<html::Form>::new();
    let (agreed, set_agreed) = signal(false);

    let strength = Signal::derive(move || {
        let password = form.value(FieldId::SignupPassword);
        let password = password.trim();
        (!password.is_empty()).then(|| PasswordStrength::effective(password))
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        match form.submit(agreed.get_untracked()) {
            SubmitDecision::Proceed => submit_form(form_ref),
            SubmitDecision::Blocked(message) => blocking_alert(message),
            SubmitDecision::Rejected => {}
        }
    };

    view! {
        <form
            id="signupForm"
            class="auth-form space-y-4"
            class:hidden=move || !active.get()
            method="post"
            action=config.signup_url
            novalidate
            node_ref=form_ref
            on:submit=on_submit
        >
            <CsrfField />
            <FormField
                form=form
                field=FieldId::SignupUsername
                label="Username"
                placeholder="Choose a username"
                autocomplete="username"
                icon="fas fa-user"
            />
            <FormField
                form=form
                field=FieldId::SignupEmail
                label="Email"
                input_type="email"
                placeholder="Enter your email"
                autocomplete="email"
                icon="fas fa-envelope"
            />
            <FormField
                form=form
                field=FieldId::SignupPassword
                label="Password"
                input_type="password"
                placeholder="Create a password"
                autocomplete="new-password"
                icon="fas fa-lock"
            />
            <StrengthMeter strength=strength />
            <FormField
                form=form
                field=FieldId::SignupConfirmPassword
                label="Confirm Password"
                input_type="password"
                placeholder="Confirm your password"
                autocomplete="new-password"
                icon="fas fa-lock"
            />
            <label class="checkbox-label text-sm">
                <input
                    type="checkbox"
                    id="agreeTerms"
                    name="agree_terms"
                    on:change=move |event| set_agreed.set(event_target_checked(&event))
                />
                " I agree to the Terms of Service"
            </label>
            <Button
                id="signupBtn"
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
