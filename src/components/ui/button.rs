use leptos::prelude::*;

/// Primary submit button. While `busy` it is disabled and swaps its children
/// for a spinner and `busy_label`.
#[component]
pub fn Button(
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional)] id: Option<&'static str>,
    #[prop(optional, into, default = Signal::from(false))] disabled: Signal<bool>,
    #[prop(optional, into, default = Signal::from(false))] busy: Signal<bool>,
    #[prop(optional)] busy_label: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let button_type = button_type.unwrap_or("submit");
    let busy_label = busy_label.unwrap_or("Please wait...");
    let blocked = move || disabled.get() || busy.get();

    view! {
        <button
            type=button_type
            id=id
            class="btn-primary text-white bg-blue-700 hover:bg-blue-800 focus:ring-4 focus:outline-none focus:ring-blue-300 font-medium rounded-lg text-sm w-full px-5 py-2.5 text-center"
            class:cursor-not-allowed=blocked
            class:opacity-70=blocked
            disabled=blocked
        >
            <span class:hidden=move || busy.get()>{children()}</span>
            <span class:hidden=move || !busy.get()>
                <i class="fas fa-spinner fa-spin"></i>
                " "
                {busy_label}
            </span>
        </button>
    }
}
