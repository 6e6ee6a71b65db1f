use crate::app_lib::build_info::{footer_label, git_commit_hash};
use crate::components::server_messages::ServerMessages;
use leptos::prelude::*;

/// Centered card shared by every portal page: heading, server banners, the
/// page body, then a footer with the build commit.
#[component]
pub fn AuthCard(
    #[prop(into)] title: Signal<&'static str>,
    #[prop(into)] subtitle: Signal<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="auth-page min-h-screen flex items-center justify-center px-6 py-10">
            <div class="auth-card w-full max-w-md rounded-2xl border border-slate-200 bg-white/90 p-6 shadow-lg backdrop-blur sm:p-8">
                <div class="auth-header space-y-2 text-center">
                    <h1 class="text-2xl font-semibold text-slate-900">{move || title.get()}</h1>
                    <p class="text-sm text-slate-500">{move || subtitle.get()}</p>
                </div>
                <div class="mt-4">
                    <ServerMessages />
                </div>
                <div class="mt-6 space-y-4">{children()}</div>
                <p class="mt-6 text-center text-[11px] text-slate-400">
                    {footer_label(git_commit_hash())}
                </p>
            </div>
        </div>
    }
}
