//! Second-factor page. The six digits are joined into the hidden `otp` field
//! and posted natively; the submit button unlocks only when all six are
//! present and stays locked once the post starts.

use crate::{
    app_lib::config::AppConfig,
    components::{AuthCard, Button, CsrfField, OtpEntry, ResendControl, submit_form},
    features::otp::OtpState,
};
use leptos::{ev::SubmitEvent, html, prelude::*};
use tracing::info;

#[component]
pub fn VerifyOtpPage() -> impl IntoView {
    let config = AppConfig::load();
    let state = RwSignal::new(OtpState::new());
    let form_ref = NodeRef::<html::Form>::new();

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if state.try_update(OtpState::begin_submit).unwrap_or(false) {
            info!("submitting verification code");
            submit_form(form_ref);
        }
    };

    view! {
        <AuthCard title="Verify Your Identity" subtitle="Enter the 6-digit code sent to your email">
            <form
                id="otpForm"
                class="space-y-4"
                method="post"
                action=config.verify_otp_url
                node_ref=form_ref
                on:submit=on_submit
            >
                <CsrfField />
                <OtpEntry state=state />
                <input
                    type="hidden"
                    id="otpValue"
                    name="otp"
                    prop:value=move || state.with(OtpState::joined)
                />
                <Button
                    id="verifyBtn"
                    button_type="submit"
                    disabled=Signal::derive(move || !state.with(OtpState::is_complete))
                    busy=Signal::derive(move || state.with(OtpState::is_submitting))
                    busy_label="Verifying..."
                >
                    "Verify"
                </Button>
            </form>
            <ResendControl code=state />
        </AuthCard>
    }
}
