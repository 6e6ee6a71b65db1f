//! Password reset pages. The request page asks for an email and posts it; the
//! confirm page collects the new password for the token in the URL, with a
//! live requirement checklist and strength meter.

use crate::{
    app_lib::config::AppConfig,
    components::{
        AuthCard, Button, CsrfField, StrengthMeter, VisibilityToggle, blocking_alert, submit_form,
    },
    features::{
        auth::forms::reset_submission,
        validation::{FieldId, strength::ResetRequirements},
    },
    routes::paths,
};
use leptos::{ev::SubmitEvent, html, prelude::*};
use leptos_router::{components::A, hooks::use_params, params::Params};
use tracing::{info, warn};

#[derive(Params, PartialEq, Clone)]
struct ResetParams {
    token: Option<String>,
}

#[component]
pub fn ResetRequestPage() -> impl IntoView {
    let config = AppConfig::load();
    let (sending, set_sending) = signal(false);

    // The post continues natively; only the button changes.
    let on_submit = move |_: SubmitEvent| set_sending.set(true);

    view! {
        <AuthCard title="Reset Password" subtitle="Enter your email and we'll send you a reset link">
            <form
                id="resetRequestForm"
                class="space-y-4"
                method="post"
                action=config.reset_request_url
                on:submit=on_submit
            >
                <CsrfField />
                <div class="form-group">
                    <label for=FieldId::ResetEmail.dom_id()>"Email"</label>
                    <div class="input-wrapper">
                        <i class="fas fa-envelope"></i>
                        <input
                            id=FieldId::ResetEmail.dom_id()
                            name=FieldId::ResetEmail.form_name()
                            type="email"
                            placeholder="Enter your email"
                            autocomplete="email"
                            required
                        />
                    </div>
                </div>
                <Button button_type="submit" busy=sending busy_label="Sending...">
                    "Send Reset Link"
                </Button>
            </form>
            <p class="text-center text-sm">
                <A href=paths::JOIN>"Back to sign in"</A>
            </p>
        </AuthCard>
    }
}

#[component]
pub fn ResetConfirmPage() -> impl IntoView {
    let config = AppConfig::load();
    let params = use_params::<ResetParams>();
    let token = params
        .get_untracked()
        .ok()
        .and_then(|params| params.token)
        .unwrap_or_default();
    if token.trim().is_empty() {
        warn!("reset page opened without a token");
    }
    let action = config.reset_confirm_action(&token);

    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let show_confirm = RwSignal::new(false);
    let (resetting, set_resetting) = signal(false);
    let form_ref = NodeRef::<html::Form>::new();

    let requirements = Signal::derive(move || password.with(|value| ResetRequirements::check(value)));
    let strength = Signal::derive(move || {
        password.with(|value| (!value.is_empty()).then(|| ResetRequirements::check(value).strength()))
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if resetting.get_untracked() {
            return;
        }
        let verdict = password
            .with_untracked(|password| confirm.with_untracked(|confirm| reset_submission(password, confirm)));
        match verdict {
            Ok(()) => {
                info!("submitting new password");
                set_resetting.set(true);
                submit_form(form_ref);
            }
            Err(message) => blocking_alert(message),
        }
    };

    let requirement = move |label: &'static str, check: fn(&ResetRequirements) -> bool| {
        let met = move || requirements.with(check);
        view! {
            <li class="requirement" class:met=met>
                <i class=move || if met() { "fas fa-check-circle" } else { "fas fa-circle" }></i>
                " "
                {label}
            </li>
        }
    };

    view! {
        <AuthCard title="Set New Password" subtitle="Choose a strong password for your account">
            <form
                id="resetConfirmForm"
                class="space-y-4"
                method="post"
                action=action
                novalidate
                node_ref=form_ref
                on:submit=on_submit
            >
                <CsrfField />
                <div class="form-group">
                    <label for=FieldId::ResetPassword.dom_id()>"New Password"</label>
                    <div class="input-wrapper">
                        <i class="fas fa-lock"></i>
                        <input
                            id=FieldId::ResetPassword.dom_id()
                            name=FieldId::ResetPassword.form_name()
                            type=move || if show_password.get() { "text" } else { "password" }
                            placeholder="Enter new password"
                            autocomplete="new-password"
                            prop:value=move || password.get()
                            on:input=move |event| password.set(event_target_value(&event))
                        />
                        <VisibilityToggle visible=show_password />
                    </div>
                </div>
                <StrengthMeter strength=strength />
                <ul class="password-requirements text-sm">
                    {requirement("At least 8 characters", |r| r.length)}
                    {requirement("One uppercase letter", |r| r.uppercase)}
                    {requirement("One lowercase letter", |r| r.lowercase)}
                    {requirement("One number", |r| r.number)}
                    {requirement("One special character", |r| r.special)}
                </ul>
                <div class="form-group">
                    <label for=FieldId::ResetConfirmPassword.dom_id()>"Confirm Password"</label>
                    <div class="input-wrapper">
                        <i class="fas fa-lock"></i>
                        <input
                            id=FieldId::ResetConfirmPassword.dom_id()
                            name=FieldId::ResetConfirmPassword.form_name()
                            type=move || if show_confirm.get() { "text" } else { "password" }
                            placeholder="Confirm new password"
                            autocomplete="new-password"
                            prop:value=move || confirm.get()
                            on:input=move |event| confirm.set(event_target_value(&event))
                        />
                        <VisibilityToggle visible=show_confirm />
                    </div>
                </div>
                <Button button_type="submit" busy=resetting busy_label="Resetting...">
                    "Reset Password"
                </Button>
            </form>
        </AuthCard>
    }
}
