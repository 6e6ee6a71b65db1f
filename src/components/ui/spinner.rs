use leptos::prelude::*;

/// Inline spinner for controls that wait on a `fetch`.
#[component]
pub fn Spinner() -> impl IntoView {
    view! { <i class="fas fa-spinner fa-spin" role="status" aria-live="polite" aria-label="Loading"></i> }
}
