pub mod clipboard;
pub mod components;
pub mod data;
pub mod logging;
pub mod pages;
pub mod platform;
pub mod site_config;
pub mod state;

use components::footer::Footer;
use gateway_landing_core::{Phrase, SiteConfig};
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use pages::home::Home;
use state::PageHandle;

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    provide_meta_context();
    let page = PageHandle::mount(config);
    provide_context(page);

    view! {
        <Title text=move || page.text(Phrase::PageTitle) />
        <DocumentLang />
        <Router>
            <div class="min-h-screen bg-slate-950 text-slate-200 selection:bg-indigo-500/30 font-sans flex flex-col">
                <Routes fallback=|| "Page not found.">
                    <Route path=path!("/") view=Home />
                </Routes>
                <Footer />
            </div>
        </Router>
    }
}

/// Keeps `<html lang>` in step with the active locale
#[component]
fn DocumentLang() -> impl IntoView {
    let page = state::use_page();

    Effect::new(move || {
        let lang = page.locale().html_lang();
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        let Some(root) = root else {
            log::warn!("No document element to set lang={lang}");
            return;
        };
        if let Err(e) = root.set_attribute("lang", lang) {
            log::warn!("Failed to set lang={lang}: {}", platform::describe(&e));
        }
    });

    ()
}
