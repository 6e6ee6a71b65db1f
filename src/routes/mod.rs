mod join;
mod login;
mod not_found;
mod password_reset;
mod signup;
mod verify_otp;

pub(crate) use join::JoinPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use password_reset::{ResetConfirmPage, ResetRequestPage};
pub(crate) use verify_otp::VerifyOtpPage;

use crate::features::auth::mode::AuthMode;
use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

/// Client-side paths. Form posts go to the server routes in `AppConfig`.
pub(crate) mod paths {
    pub const JOIN: &str = "/";
    pub const RESET_REQUEST: &str = "/reset-password";
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=|| view! { <JoinPage /> } />
            <Route path=path!("/join") view=|| view! { <JoinPage /> } />
            <Route path=path!("/login") view=|| view! { <JoinPage mode=AuthMode::Login /> } />
            <Route path=path!("/signup") view=|| view! { <JoinPage mode=AuthMode::Signup /> } />
            <Route path=path!("/verify-otp") view=VerifyOtpPage />
            <Route path=path!("/reset-password") view=ResetRequestPage />
            <Route path=path!("/reset-password/:token") view=ResetConfirmPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
