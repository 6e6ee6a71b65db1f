//! Fallback for unknown portal paths.

use crate::{components::AuthCard, routes::paths};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AuthCard title="Page not found" subtitle="The page you requested does not exist.">
            <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                <A
                    href=paths::JOIN
                    {..}
                    class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800 focus:ring-4 focus:outline-none focus:ring-blue-300 transition-all"
                >
                    "Go to sign in"
                </A>
                <button
                    type="button"
                    on:click=move |_| {
                        let went_back = web_sys::window()
                            .and_then(|window| window.history().ok())
                            .is_some_and(|history| history.back().is_ok());
                        if !went_back {
                            tracing::debug!("no history to go back to");
                        }
                    }
                    class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-gray-900 bg-white border border-gray-200 rounded-lg hover:bg-gray-100 transition-all"
                >
                    "Go Back"
                </button>
            </div>
        </AuthCard>
    }
}
