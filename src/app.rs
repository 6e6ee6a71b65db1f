use crate::components::FlashProvider;
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <FlashProvider>
            <Router>
                <AppRoutes />
            </Router>
        </FlashProvider>
    }
}
