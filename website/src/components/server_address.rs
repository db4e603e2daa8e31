use gateway_landing_core::Phrase;
use leptos::prelude::*;

use super::endpoint_wheel::EndpointWheel;
use super::icons::Copy;
use super::size_class;
use crate::state::use_page;

/// Read-only base URL field with the endpoint wheel, copy button and the
/// transient copy status underneath
#[component]
pub fn ServerAddress() -> impl IntoView {
    let page = use_page();
    let address = page.server_address();

    view! {
        <div class="flex flex-col md:flex-row items-center justify-center gap-4 w-full mt-4 md:mt-6 max-w-md">
            <div class=move || format!(
                "flex flex-1 items-center gap-2 w-full rounded-full border border-slate-700 bg-slate-900 {}",
                size_class(page.primary_size()),
            )>
                <input
                    readonly=true
                    prop:value=address
                    class="flex-1 min-w-0 bg-transparent text-slate-200 outline-none"
                />
                <EndpointWheel />
                <button
                    on:click=move |_| page.copy_server_address()
                    title=move || page.text(Phrase::CopyButton)
                    aria-label=move || page.text(Phrase::CopyButton)
                    class="p-2 rounded-full bg-blue-600 text-white hover:bg-blue-500 transition-colors"
                >
                    <Copy class="w-4 h-4" />
                </button>
            </div>
            {move || {
                page.snapshot().status_message().map(|message| view! {
                    <span class="text-xs text-slate-400">{message}</span>
                })
            }}
        </div>
    }
}
