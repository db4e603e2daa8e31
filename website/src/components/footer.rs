use leptos::prelude::*;

use crate::state::use_page;
use gateway_landing_core::ExternalLink;

#[component]
pub fn Footer() -> impl IntoView {
    let page = use_page();

    view! {
        <footer class="border-t border-slate-900 bg-slate-950 py-12 mt-auto">
            <div class="max-w-7xl mx-auto px-6 flex flex-col md:flex-row justify-between items-center text-slate-500 text-sm">
                <p>"\u{00A9} 2025 QuantumNous. AGPL-3.0 License."</p>
                <button
                    on:click=move |_| page.open(ExternalLink::Source)
                    class="mt-4 md:mt-0 hover:text-white transition-colors"
                >
                    "GitHub"
                </button>
            </div>
        </footer>
    }
}
