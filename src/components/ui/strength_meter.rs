use crate::features::validation::strength::PasswordStrength;
use leptos::prelude::*;

/// Bar and caption for a password's strength. Hidden while `strength` is `None`.
#[component]
pub fn StrengthMeter(#[prop(into)] strength: Signal<Option<PasswordStrength>>) -> impl IntoView {
    let class = move || {
        strength.get().map_or_else(
            || "strength-bar".to_string(),
            |strength| format!("strength-bar {}", strength.as_str()),
        )
    };

    view! {
        <div class="password-strength" class:hidden=move || strength.get().is_none()>
            <div class=class></div>
            <span class="strength-text">
                {move || strength.get().map(PasswordStrength::label).unwrap_or_default()}
            </span>
        </div>
    }
}
