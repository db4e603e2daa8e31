use gateway_landing_core::Phrase;
use leptos::prelude::*;

use super::icons::Languages;
use super::size_class;
use crate::state::use_page;

#[component]
pub fn LanguageToggle() -> impl IntoView {
    let page = use_page();

    view! {
        <div class="flex justify-end px-4 pt-8 md:pt-10 lg:pt-12">
            <button
                on:click=move |_| page.toggle_locale()
                class=move || format!(
                    "flex items-center gap-2 rounded-full border border-slate-700 text-slate-200 hover:bg-slate-800 transition-colors {}",
                    size_class(page.toggle_size()),
                )
            >
                <Languages class="w-4 h-4" />
                {move || page.text(Phrase::ToggleLanguage)}
            </button>
        </div>
    }
}
