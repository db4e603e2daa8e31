//! Reactive bridge between [`LandingPage`] and the view tree
//!
//! The page controller keeps its own `Rc`-owned state, so it lives in a
//! local [`StoredValue`]. A [`Trigger`] is notified on every controller
//! change and tracked by each reactive read, which re-runs exactly the
//! closures that read page state.

use gateway_landing_core::{
    ControlSize, ExternalLink, LandingPage, Locale, PageSnapshot, Phrase, SiteConfig,
    NEW_CONTEXT_FEATURES, NEW_CONTEXT_TARGET,
};
use leptos::prelude::*;

use crate::clipboard::browser_clipboard;
use crate::platform::{describe, BrowserEnvironment, BrowserScheduler};

pub type WebPage = LandingPage<BrowserEnvironment, BrowserScheduler>;

fn mount_page(config: SiteConfig) -> WebPage {
    match LandingPage::mount(config, BrowserEnvironment, BrowserScheduler, browser_clipboard()) {
        Ok(page) => page,
        Err(e) => {
            log::error!("Site configuration rejected, using defaults: {e}");
            LandingPage::mount(
                SiteConfig::default(),
                BrowserEnvironment,
                BrowserScheduler,
                browser_clipboard(),
            )
            .expect("default site configuration is valid")
        }
    }
}

/// Copyable handle shared with every component through context
#[derive(Clone, Copy)]
pub struct PageHandle {
    page: StoredValue<WebPage, LocalStorage>,
    changed: Trigger,
}

impl PageHandle {
    /// Mount the page for the current reactive owner and unmount it when
    /// the owner is cleaned up
    pub fn mount(config: SiteConfig) -> Self {
        let page = mount_page(config);
        let changed = Trigger::new();
        page.on_change(move || changed.notify());

        let handle = Self {
            page: StoredValue::new_local(page),
            changed,
        };
        on_cleanup(move || {
            handle.page.try_with_value(|page| page.unmount());
        });
        handle
    }

    /// Current state; tracks the change trigger
    pub fn snapshot(&self) -> PageSnapshot {
        self.changed.track();
        self.page.with_value(|page| page.snapshot())
    }

    pub fn locale(&self) -> Locale {
        self.changed.track();
        self.page.with_value(|page| page.locale())
    }

    /// Localized text for `phrase` in the current locale
    pub fn text(&self, phrase: Phrase) -> &'static str {
        phrase.text(self.locale())
    }

    pub fn toggle_size(&self) -> ControlSize {
        ControlSize::toggle_button(self.snapshot().viewport)
    }

    pub fn primary_size(&self) -> ControlSize {
        ControlSize::primary_control(self.snapshot().viewport)
    }

    pub fn endpoint_window(&self, radius: usize) -> Vec<(usize, String)> {
        self.changed.track();
        self.page.with_value(|page| page.endpoint_window(radius))
    }

    pub fn server_address(&self) -> String {
        self.page.with_value(|page| page.server_address().to_string())
    }

    pub fn toggle_locale(&self) {
        self.page.with_value(|page| page.toggle_locale());
    }

    pub fn select_endpoint(&self, index: usize) {
        self.page.with_value(|page| page.select_endpoint(index));
    }

    /// Start a copy of the server address; the outcome arrives as status
    pub fn copy_server_address(&self) {
        let page = self.page.get_value();
        leptos::task::spawn_local(async move {
            let _ = page.copy_server_address().await;
        });
    }

    /// Open `link` in a new browsing context
    pub fn open(&self, link: ExternalLink) {
        let url = self
            .page
            .with_value(|page| link.url(&page.config().links).to_string());
        let Some(window) = web_sys::window() else {
            log::warn!("No window to open {url}");
            return;
        };
        if let Err(e) =
            window.open_with_url_and_target_and_features(&url, NEW_CONTEXT_TARGET, NEW_CONTEXT_FEATURES)
        {
            log::warn!("Failed to open {url}: {}", describe(&e));
        }
    }
}

/// Handle provided by [`crate::App`]
pub fn use_page() -> PageHandle {
    expect_context::<PageHandle>()
}
