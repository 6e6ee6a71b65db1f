//! One-time code widgets: six single-digit inputs bound to an `OtpState`, and
//! the resend control with its cooldown. Timers are cleared when the view is
//! torn down so nothing fires against disposed signals.

use crate::components::Spinner;
use crate::features::auth::client;
use crate::features::otp::resend::{ResendPhase, ResendTimer, SENT_DWELL_MS, TICK_MS};
use crate::features::otp::{OTP_LENGTH, OtpState, SlotInput};
use leptos::html;
use leptos::leptos_dom::helpers::{
    IntervalHandle, TimeoutHandle, set_interval_with_handle, set_timeout_with_handle,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::time::Duration;
use tracing::{debug, warn};

/// Digit boxes. Typing advances focus, backspace on an empty box goes back,
/// and pasting a complete code fills every box.
#[component]
pub fn OtpEntry(state: RwSignal<OtpState>) -> impl IntoView {
    let inputs: [NodeRef<html::Input>; OTP_LENGTH] = std::array::from_fn(|_| NodeRef::new());
    let focus = move |index: usize| {
        if let Some(input) = inputs.get(index).and_then(|input| input.get_untracked()) {
            if input.focus().is_err() {
                debug!(slot = index, "unable to focus code input");
            }
        }
    };

    let slots = (0..OTP_LENGTH)
        .map(|index| {
            view! {
                <input
                    type="text"
                    class="otp-input"
                    inputmode="numeric"
                    maxlength="1"
                    autocomplete="one-time-code"
                    aria-label=format!("Digit {}", index + 1)
                    node_ref=inputs[index]
                    prop:value=move || state.with(|state| state.slot(index))
                    on:input=move |event| {
                        let raw = event_target_value(&event);
                        match state.try_update(|state| state.input(index, &raw)) {
                            Some(SlotInput::Accepted { focus: Some(next) }) => focus(next),
                            Some(SlotInput::Rejected) => {
                                if let Some(input) = inputs[index].get_untracked() {
                                    input.set_value(&state.with_untracked(|state| state.slot(index)));
                                }
                            }
                            _ => {}
                        }
                    }
                    on:keydown=move |event| {
                        if event.key() == "Backspace" {
                            if let Some(previous) = state.with_untracked(|state| state.backspace(index)) {
                                focus(previous);
                            }
                        }
                    }
                    on:paste=move |event| {
                        event.prevent_default();
                        let text = event
                            .clipboard_data()
                            .and_then(|data| data.get_data("text").ok())
                            .unwrap_or_default();
                        if let Some(Some(last)) = state.try_update(|state| state.paste(&text)) {
                            focus(last);
                        }
                    }
                />
            }
        })
        .collect_view();

    view! { <div class="otp-inputs flex gap-2 justify-center">{slots}</div> }
}

/// "Resend Code" button with its countdown. The cooldown starts on mount and
/// again after every successful resend, which also empties `code` since the
/// digits already typed belong to the old code.
#[component]
pub fn ResendControl(code: RwSignal<OtpState>) -> impl IntoView {
    let timer = RwSignal::new(ResendTimer::new());
    let interval = StoredValue::new(None::<IntervalHandle>);
    let dwell = StoredValue::new(None::<TimeoutHandle>);

    let stop_countdown = move || {
        if let Some(handle) = interval.try_write_value().and_then(|mut stored| stored.take()) {
            handle.clear();
        }
    };

    let start_countdown = move || {
        stop_countdown();
        let started = set_interval_with_handle(
            move || {
                let finished = timer.try_update(ResendTimer::tick).unwrap_or(true);
                if finished {
                    stop_countdown();
                }
            },
            Duration::from_millis(TICK_MS.into()),
        );
        match started {
            Ok(handle) => {
                if let Some(mut stored) = interval.try_write_value() {
                    *stored = Some(handle);
                }
            }
            Err(_) => warn!("unable to start resend countdown"),
        }
    };

    start_countdown();

    on_cleanup(move || {
        stop_countdown();
        if let Some(handle) = dwell.try_write_value().and_then(|mut stored| stored.take()) {
            handle.clear();
        }
        debug!("resend timers released");
    });

    let on_resend = move |_| {
        if !timer.try_update(ResendTimer::request).unwrap_or(false) {
            return;
        }
        spawn_local(async move {
            let succeeded = client::resend_otp().await.is_ok();
            if timer.try_update(|timer| timer.complete(succeeded)).is_none() || !succeeded {
                return;
            }
            if code.try_update(OtpState::clear) == Some(true) {
                debug!("cleared digits of the previous code");
            }
            let scheduled = set_timeout_with_handle(
                move || {
                    if timer.try_update(ResendTimer::dwell_elapsed).unwrap_or(false) {
                        start_countdown();
                    }
                },
                Duration::from_millis(SENT_DWELL_MS.into()),
            );
            match scheduled {
                Ok(handle) => {
                    if let Some(mut stored) = dwell.try_write_value() {
                        *stored = Some(handle);
                    }
                }
                Err(_) => warn!("unable to schedule resend cooldown"),
            }
        });
    };

    let icon = move || match timer.with(ResendTimer::phase) {
        ResendPhase::Sending => view! { <Spinner /> }.into_any(),
        ResendPhase::Sent => view! { <i class="fas fa-check"></i> }.into_any(),
        ResendPhase::Failed => view! { <i class="fas fa-times"></i> }.into_any(),
        ResendPhase::Cooling { .. } | ResendPhase::Ready => {
            view! { <i class="fas fa-redo"></i> }.into_any()
        }
    };

    view! {
        <div class="resend-section text-center text-sm">
            <span>"Didn't receive the code? "</span>
            <button
                type="button"
                id="resendBtn"
                class="resend-btn"
                disabled=move || !timer.with(ResendTimer::resend_enabled)
                on:click=on_resend
            >
                {icon}
                " "
                {move || timer.with(ResendTimer::label)}
            </button>
            <span id="timer" class="timer" class:hidden=move || !timer.with(ResendTimer::is_cooling)>
                {move || timer.with(ResendTimer::countdown_text)}
            </span>
        </div>
    }
}
