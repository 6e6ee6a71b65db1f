//! Validated text inputs for the login and signup forms. A `FormHandle` keeps
//! the raw values and the form's `FormValidator` in signals; each `FormField`
//! feeds keystrokes and blur into it and renders the field's latest verdict.

use crate::components::server_messages::{FlashContext, use_flash};
use crate::features::auth::forms::{FormValidator, SubmitDecision};
use crate::features::validation::{FieldId, FieldValues, ValidationResult};
use leptos::prelude::*;

/// Reactive state for one validated form. Cheap to copy into handlers.
#[derive(Clone, Copy)]
pub struct FormHandle {
    values: RwSignal<FieldValues>,
    validator: RwSignal<FormValidator>,
    flash: FlashContext,
}

impl FormHandle {
    pub fn new(validator: FormValidator) -> Self {
        Self {
            values: RwSignal::new(FieldValues::new()),
            validator: RwSignal::new(validator),
            flash: use_flash(),
        }
    }

    /// Raw value of `field`, tracked.
    pub fn value(self, field: FieldId) -> String {
        self.values.with(|values| values.get(field).to_string())
    }

    /// Records a keystroke, dismisses server banners and re-validates.
    pub fn input(self, field: FieldId, value: String) {
        self.flash.clear();
        self.values.update(|values| values.set(field, value));
        let values = self.values.get_untracked();
        self.validator.update(|validator| {
            validator.on_input(field, &values);
        });
    }

    pub fn blur(self, field: FieldId) {
        let values = self.values.get_untracked();
        self.validator.update(|validator| {
            validator.on_blur(field, &values);
        });
    }

    /// Runs the submit gate; a disposed form never proceeds.
    pub fn submit(self, agreed_to_terms: bool) -> SubmitDecision {
        let values = self.values.get_untracked();
        self.validator
            .try_update(|validator| validator.on_submit(&values, agreed_to_terms))
            .unwrap_or(SubmitDecision::Rejected)
    }

    pub fn status(self, field: FieldId) -> Option<ValidationResult> {
        self.validator
            .with(|validator| validator.result(field).cloned())
    }

    pub fn is_submitting(self) -> bool {
        self.validator.with(FormValidator::is_submitting)
    }

    pub fn idle_label(self) -> &'static str {
        self.validator.with_untracked(FormValidator::idle_label)
    }

    pub fn busy_label(self) -> &'static str {
        self.validator.with_untracked(FormValidator::busy_label)
    }
}

/// Eye button that flips a password input between hidden and plain text.
#[component]
pub fn VisibilityToggle(visible: RwSignal<bool>) -> impl IntoView {
    view! {
        <button
            type="button"
            class="toggle-password"
            aria-label=move || if visible.get() { "Hide password" } else { "Show password" }
            on:click=move |event| {
                event.prevent_default();
                visible.update(|visible| *visible = !*visible);
            }
        >
            <i class=move || {
                if visible.get() { "fas fa-eye-slash" } else { "fas fa-eye" }
            }></i>
        </button>
    }
}

/// Labeled input bound to one field of a `FormHandle`. Password fields get a
/// visibility toggle.
#[component]
pub fn FormField(
    form: FormHandle,
    field: FieldId,
    label: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] icon: Option<&'static str>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or("text");
    let is_password = input_type == "password";
    let visible = RwSignal::new(false);
    let effective_type = move || {
        if is_password && !visible.get() {
            "password"
        } else if is_password {
            "text"
        } else {
            input_type
        }
    };

    let status = move || form.status(field);
    let failed = move || status().is_some_and(|result| !result.is_valid());
    let passed = move || status().is_some_and(|result| result.is_valid());
    let message = move || {
        status()
            .and_then(|result| result.message().map(str::to_string))
            .unwrap_or_default()
    };

    view! {
        <div class="form-group" class:error=failed class:success=passed>
            <label for=field.dom_id()>{label}</label>
            <div class="input-wrapper">
                {icon.map(|icon| view! { <i class=icon></i> })}
                <input
                    id=field.dom_id()
                    name=field.form_name()
                    type=effective_type
                    placeholder=placeholder
                    autocomplete=autocomplete
                    prop:value=move || form.value(field)
                    on:input=move |event| form.input(field, event_target_value(&event))
                    on:blur=move |_| form.blur(field)
                />
                {is_password.then(|| view! { <VisibilityToggle visible=visible /> })}
            </div>
            <span class="error-message" class:hidden=move || !failed()>
                {message}
            </span>
        </div>
    }
}
