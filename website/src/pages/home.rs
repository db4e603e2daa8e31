use gateway_landing_core::{ExternalLink, Phrase};
use leptos::prelude::*;

use crate::components::badge::{Badge, BadgeTone};
use crate::components::icons::{FileText, Github, Play};
use crate::components::language_toggle::LanguageToggle;
use crate::components::server_address::ServerAddress;
use crate::components::size_class;
use crate::data::{providers, MORE_PROVIDERS};
use crate::state::use_page;

#[component]
pub fn Home() -> impl IntoView {
    let page = use_page();

    view! {
        <div class="w-full overflow-x-hidden">
            <div class="w-full border-b border-slate-800 min-h-[520px] md:min-h-[600px] lg:min-h-[700px] relative overflow-x-hidden">
                <div class="absolute top-0 left-1/2 -translate-x-1/2 w-[800px] h-[500px] bg-indigo-600/10 blur-[120px] rounded-full pointer-events-none"></div>

                <LanguageToggle />

                // Hero Section
                <section class="flex items-center justify-center h-full px-4 pb-16 md:pb-20 lg:pb-24">
                    <div class="flex flex-col items-center justify-center text-center max-w-4xl mx-auto mt-6 md:mt-10 relative z-10">
                        <div class="flex flex-col items-center justify-center mb-6 md:mb-8">
                            <h1 class=move || {
                                let tracking = if page.locale().is_chinese() { " tracking-wide md:tracking-wider" } else { "" };
                                format!("text-4xl md:text-5xl lg:text-6xl xl:text-7xl font-bold text-white leading-tight{tracking}")
                            }>
                                {move || page.text(Phrase::HeadlineLead)}
                                <br />
                                <span class="text-transparent bg-clip-text bg-gradient-to-r from-indigo-400 to-teal-400">
                                    {move || page.text(Phrase::HeadlineAccent)}
                                </span>
                            </h1>
                            <p class="text-base md:text-lg lg:text-xl text-slate-400 mt-4 md:mt-6 max-w-xl">
                                {move || page.text(Phrase::Tagline)}
                            </p>
                            <ServerAddress />
                        </div>

                        <Actions />

                        // Providers
                        <div class="mt-12 md:mt-16 lg:mt-20 w-full">
                            <div class="flex items-center mb-6 md:mb-8 justify-center">
                                <p class="text-lg md:text-xl lg:text-2xl font-light text-slate-500">
                                    {move || page.text(Phrase::ProvidersHeading)}
                                </p>
                            </div>
                            <div class="flex flex-wrap items-center justify-center gap-3 sm:gap-4 md:gap-6 max-w-5xl mx-auto px-4">
                                {providers().into_iter().map(|name| view! { <Badge>{name}</Badge> }).collect_view()}
                                <Badge tone=BadgeTone::Emphasis>{MORE_PROVIDERS}</Badge>
                            </div>
                        </div>
                    </div>
                </section>
            </div>
        </div>
    }
}

/// Call-to-action buttons, each opening an external link
#[component]
fn Actions() -> impl IntoView {
    let page = use_page();

    view! {
        <div class="flex flex-row gap-4 justify-center items-center flex-wrap">
            {ExternalLink::ALL.into_iter().map(|link| {
                let style = if link.is_primary() {
                    "bg-white text-black hover:bg-slate-200"
                } else {
                    "bg-slate-800 text-white border border-slate-700 hover:bg-slate-700"
                };
                view! {
                    <button
                        on:click=move |_| page.open(link)
                        class=move || format!(
                            "flex items-center gap-2 font-bold rounded-3xl transition-colors {style} {}",
                            size_class(page.primary_size()),
                        )
                    >
                        {match link {
                            ExternalLink::GetStarted => view! { <Play class="w-5 h-5" /> }.into_any(),
                            ExternalLink::Docs => view! { <FileText class="w-5 h-5" /> }.into_any(),
                            ExternalLink::Source => view! { <Github class="w-5 h-5" /> }.into_any(),
                        }}
                        {move || page.text(link.label())}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
