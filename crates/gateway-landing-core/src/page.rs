//! Landing page controller
//!
//! Owns the four pieces of client state for one page instance and every
//! timer or subscription they need. All mutation happens on the single UI
//! thread, so state lives in `RefCell`s behind one `Rc`. Scheduled callbacks
//! hold only a `Weak` reference and check the mounted flag, which makes any
//! late event after [`LandingPage::unmount`] a no-op.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use tracing::{debug, error, info, warn};

use crate::carousel::EndpointCarousel;
use crate::clipboard::ClipboardChain;
use crate::config::SiteConfig;
use crate::environment::{resolve_server_address, Environment};
use crate::error::{CopyResult, Result};
use crate::locale::Locale;
use crate::scheduler::Scheduler;
use crate::status::{CopyStatus, StatusSlot};
use crate::viewport::{ResponsiveState, ViewportClass};

/// Read-only view of the page state for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSnapshot {
    pub locale: Locale,
    pub viewport: ViewportClass,
    pub endpoint_index: usize,
    pub endpoint: String,
    pub status: Option<CopyStatus>,
    status_text: Option<&'static str>,
    pub server_address: String,
}

impl PageSnapshot {
    /// Copy status text in the locale that was active when it was set
    pub fn status_message(&self) -> Option<&'static str> {
        self.status_text
    }
}

#[derive(Debug)]
struct PageState {
    locale: Locale,
    responsive: ResponsiveState,
    carousel: EndpointCarousel,
    status: StatusSlot,
}

struct Resources<H, L> {
    carousel_timer: Option<H>,
    status_timer: Option<H>,
    resize: Option<L>,
}

impl<H, L> Default for Resources<H, L> {
    fn default() -> Self {
        Self {
            carousel_timer: None,
            status_timer: None,
            resize: None,
        }
    }
}

struct Inner<E: Environment, S: Scheduler> {
    env: E,
    scheduler: S,
    clipboard: ClipboardChain,
    config: SiteConfig,
    server_address: String,
    state: RefCell<PageState>,
    resources: RefCell<Resources<S::Handle, E::Subscription>>,
    mounted: Cell<bool>,
    on_change: RefCell<Option<Rc<dyn Fn()>>>,
}

impl<E: Environment, S: Scheduler> Inner<E, S> {
    fn release(&self) {
        let resources = std::mem::take(&mut *self.resources.borrow_mut());
        if let Some(handle) = resources.carousel_timer {
            self.scheduler.cancel(handle);
        }
        if let Some(handle) = resources.status_timer {
            self.scheduler.cancel(handle);
        }
        if let Some(subscription) = resources.resize {
            self.env.unsubscribe_resize(subscription);
        }
    }
}

impl<E: Environment, S: Scheduler> Drop for Inner<E, S> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Handle to a mounted landing page. Clones share the same instance.
pub struct LandingPage<E: Environment, S: Scheduler> {
    inner: Rc<Inner<E, S>>,
}

impl<E: Environment, S: Scheduler> Clone for LandingPage<E, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<E, S> LandingPage<E, S>
where
    E: Environment + 'static,
    S: Scheduler + 'static,
{
    /// Resolve the initial state from the environment and start the
    /// carousel timer and resize subscription.
    ///
    /// Fails only for an invalid configuration. A platform that refuses a
    /// timer or listener leaves the page static, which is logged.
    pub fn mount(config: SiteConfig, env: E, scheduler: S, clipboard: ClipboardChain) -> Result<Self> {
        config.validate()?;

        let locale = Locale::detect(env.language().as_deref());
        let responsive = ResponsiveState::new(env.viewport_width(), config.narrow_breakpoint);
        let server_address =
            resolve_server_address(env.origin(), &config.fallback_server_address);
        let carousel = EndpointCarousel::new(config.endpoints.clone())?;

        info!(
            "Mounting landing page: locale={}, narrow={}, server={}, clipboard={:?}",
            locale,
            responsive.is_narrow(),
            server_address,
            clipboard
        );

        let page = Self {
            inner: Rc::new(Inner {
                env,
                scheduler,
                clipboard,
                config,
                server_address,
                state: RefCell::new(PageState {
                    locale,
                    responsive,
                    carousel,
                    status: StatusSlot::default(),
                }),
                resources: RefCell::new(Resources::default()),
                mounted: Cell::new(true),
                on_change: RefCell::new(None),
            }),
        };

        page.start_carousel();
        page.subscribe_resize();
        Ok(page)
    }

    fn weak(&self) -> Weak<Inner<E, S>> {
        Rc::downgrade(&self.inner)
    }

    fn upgrade(weak: &Weak<Inner<E, S>>) -> Option<Self> {
        weak.upgrade().map(|inner| Self { inner })
    }

    fn start_carousel(&self) {
        let weak = self.weak();
        let callback = Box::new(move || {
            if let Some(page) = Self::upgrade(&weak) {
                page.tick();
            }
        });
        match self
            .inner
            .scheduler
            .set_interval(self.inner.config.carousel_interval(), callback)
        {
            Ok(handle) => self.inner.resources.borrow_mut().carousel_timer = Some(handle),
            Err(e) => warn!("Endpoint carousel will not rotate: {}", e),
        }
    }

    fn subscribe_resize(&self) {
        let weak = self.weak();
        let callback = Box::new(move || {
            if let Some(page) = Self::upgrade(&weak) {
                page.handle_resize();
            }
        });
        match self.inner.env.subscribe_resize(callback) {
            Ok(subscription) => self.inner.resources.borrow_mut().resize = Some(subscription),
            Err(e) => warn!("Viewport class will not track resizes: {}", e),
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Event handlers
    // ─────────────────────────────────────────────────────────────

    fn tick(&self) {
        if !self.is_mounted() {
            return;
        }
        self.inner.state.borrow_mut().carousel.tick();
        self.notify();
    }

    /// Swap between Chinese and English
    pub fn toggle_locale(&self) {
        if !self.is_mounted() {
            return;
        }
        let locale = {
            let mut state = self.inner.state.borrow_mut();
            state.locale = state.locale.toggle();
            state.locale
        };
        debug!("Locale switched to {}", locale);
        self.notify();
    }

    /// Show endpoint `index` immediately. The tick cadence is unaffected.
    pub fn select_endpoint(&self, index: usize) {
        if !self.is_mounted() {
            return;
        }
        self.inner.state.borrow_mut().carousel.select(index);
        self.notify();
    }

    /// Re-read the viewport width; re-renders only if the class changed
    pub fn handle_resize(&self) {
        if !self.is_mounted() {
            return;
        }
        let width = self.inner.env.viewport_width();
        let changed = self.inner.state.borrow_mut().responsive.update(width);
        if changed {
            debug!("Viewport class changed (width {:?})", width);
            self.notify();
        }
    }

    /// Copy the server address and show the localized outcome
    pub async fn copy_server_address(&self) -> CopyResult<()> {
        let text = self.inner.server_address.clone();
        self.copy_text(&text).await
    }

    /// Copy `text` and show the localized outcome.
    ///
    /// The error is returned for callers that care, but it has already been
    /// logged and surfaced as a status message.
    pub async fn copy_text(&self, text: &str) -> CopyResult<()> {
        let result = self.inner.clipboard.copy(text).await;

        if !self.is_mounted() {
            debug!("Copy finished after unmount, dropping outcome");
            return result;
        }

        let status = match &result {
            Ok(()) => {
                debug!("Copied {} to clipboard", text);
                CopyStatus::Succeeded
            }
            Err(e) => {
                error!("Copy failed: {}", e);
                CopyStatus::Failed
            }
        };
        self.show_status(status);
        result
    }

    fn show_status(&self, status: CopyStatus) {
        let generation = {
            let mut state = self.inner.state.borrow_mut();
            let locale = state.locale;
            state.status.set(status, locale)
        };

        let previous = self.inner.resources.borrow_mut().status_timer.take();
        if let Some(handle) = previous {
            self.inner.scheduler.cancel(handle);
        }

        let weak = self.weak();
        let callback = Box::new(move || {
            if let Some(page) = Self::upgrade(&weak) {
                page.clear_status(generation);
            }
        });
        match self
            .inner
            .scheduler
            .set_timeout(self.inner.config.status_clear_delay(), callback)
        {
            Ok(handle) => self.inner.resources.borrow_mut().status_timer = Some(handle),
            Err(e) => warn!("Copy status will not auto-clear: {}", e),
        }

        self.notify();
    }

    fn clear_status(&self, generation: u64) {
        if !self.is_mounted() {
            return;
        }
        let cleared = self.inner.state.borrow_mut().status.clear(generation);
        if cleared {
            self.inner.resources.borrow_mut().status_timer = None;
            self.notify();
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────

    /// Register the re-render hook invoked after every state change
    pub fn on_change(&self, callback: impl Fn() + 'static) {
        *self.inner.on_change.borrow_mut() = Some(Rc::new(callback));
    }

    fn notify(&self) {
        let callback = self.inner.on_change.borrow().clone();
        if let Some(callback) = callback {
            callback();
        }
    }

    /// Cancel all timers, drop the resize subscription and ignore any
    /// in-flight clipboard completion. Safe to call more than once.
    pub fn unmount(&self) {
        if !self.inner.mounted.replace(false) {
            return;
        }
        self.inner.release();
        self.inner.on_change.borrow_mut().take();
        info!("Landing page unmounted");
    }

    // ─────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────

    pub fn is_mounted(&self) -> bool {
        self.inner.mounted.get()
    }

    pub fn snapshot(&self) -> PageSnapshot {
        let state = self.inner.state.borrow();
        PageSnapshot {
            locale: state.locale,
            viewport: state.responsive.class(),
            endpoint_index: state.carousel.index(),
            endpoint: state.carousel.current().to_string(),
            status: state.status.get(),
            status_text: state.status.message(),
            server_address: self.inner.server_address.clone(),
        }
    }

    pub fn locale(&self) -> Locale {
        self.inner.state.borrow().locale
    }

    pub fn server_address(&self) -> &str {
        &self.inner.server_address
    }

    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// `(index, path)` pairs around the current endpoint for the picker
    pub fn endpoint_window(&self, radius: usize) -> Vec<(usize, String)> {
        self.inner
            .state
            .borrow()
            .carousel
            .window(radius)
            .into_iter()
            .map(|(i, path)| (i, path.to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{FakeClipboard, FakeEnvironment, VirtualScheduler};

    fn mount_with(
        env: FakeEnvironment,
        clipboard: ClipboardChain,
    ) -> (LandingPage<FakeEnvironment, VirtualScheduler>, VirtualScheduler) {
        let scheduler = VirtualScheduler::new();
        let page = LandingPage::mount(SiteConfig::default(), env, scheduler.clone(), clipboard)
            .expect("mount");
        (page, scheduler)
    }

    fn working_chain() -> ClipboardChain {
        ClipboardChain::new().with(FakeClipboard::working("async"))
    }

    #[test]
    fn test_initial_state_from_environment() {
        let env = FakeEnvironment::new()
            .with_language("zh-CN")
            .with_width(375)
            .with_origin("https://foo.test");
        let (page, _) = mount_with(env, working_chain());

        let snap = page.snapshot();
        assert_eq!(snap.locale, Locale::Zh);
        assert_eq!(snap.viewport, ViewportClass::Narrow);
        assert_eq!(snap.endpoint_index, 0);
        assert_eq!(snap.endpoint, "/v1/chat/completions");
        assert_eq!(snap.status, None);
        assert_eq!(snap.server_address, "https://foo.test");
    }

    #[test]
    fn test_bare_environment_defaults() {
        let (page, _) = mount_with(FakeEnvironment::new(), working_chain());
        let snap = page.snapshot();
        assert_eq!(snap.locale, Locale::En);
        assert_eq!(snap.viewport, ViewportClass::Wide);
        assert_eq!(snap.server_address, "https://api.example.com");
    }

    #[test]
    fn test_invalid_config_fails_mount() {
        let config = SiteConfig {
            endpoints: Vec::new(),
            ..SiteConfig::default()
        };
        let result = LandingPage::mount(
            config,
            FakeEnvironment::new(),
            VirtualScheduler::new(),
            ClipboardChain::new(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_toggle_locale_notifies() {
        let (page, _) = mount_with(FakeEnvironment::new(), working_chain());
        let renders = Rc::new(Cell::new(0));
        let counter = Rc::clone(&renders);
        page.on_change(move || counter.set(counter.get() + 1));

        page.toggle_locale();
        assert_eq!(page.locale(), Locale::Zh);
        page.toggle_locale();
        assert_eq!(page.locale(), Locale::En);
        assert_eq!(renders.get(), 2);
    }

    #[test]
    fn test_carousel_ticks_every_interval() {
        let (page, scheduler) = mount_with(FakeEnvironment::new(), working_chain());

        scheduler.advance(2999);
        assert_eq!(page.snapshot().endpoint_index, 0);
        scheduler.advance(1);
        assert_eq!(page.snapshot().endpoint_index, 1);
        scheduler.advance(3000 * 11);
        assert_eq!(page.snapshot().endpoint_index, 0, "wrapped after 12 ticks");
    }

    #[test]
    fn test_manual_selection_keeps_tick_cadence() {
        let (page, scheduler) = mount_with(FakeEnvironment::new(), working_chain());

        scheduler.advance(3000);
        assert_eq!(page.snapshot().endpoint_index, 1);

        scheduler.advance(1000);
        page.select_endpoint(7);
        assert_eq!(page.snapshot().endpoint, "/v1/images/edits");

        // next tick is due at 6000, not 4000 + 3000
        scheduler.advance(1999);
        assert_eq!(page.snapshot().endpoint_index, 7);
        scheduler.advance(1);
        assert_eq!(page.snapshot().endpoint_index, 8);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "endpoint index out of range")]
    fn test_select_endpoint_out_of_range_asserts_in_debug() {
        let (page, _) = mount_with(FakeEnvironment::new(), working_chain());
        page.select_endpoint(12);
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_select_endpoint_out_of_range_is_ignored_in_release() {
        let (page, scheduler) = mount_with(FakeEnvironment::new(), working_chain());
        page.select_endpoint(4);
        page.select_endpoint(12);
        assert_eq!(page.snapshot().endpoint_index, 4);

        scheduler.advance(3000);
        assert_eq!(page.snapshot().endpoint_index, 5);
    }

    #[test]
    fn test_resize_only_notifies_on_class_change() {
        let env = FakeEnvironment::new().with_width(1280);
        let (page, _) = mount_with(env.clone(), working_chain());
        let renders = Rc::new(Cell::new(0));
        let counter = Rc::clone(&renders);
        page.on_change(move || counter.set(counter.get() + 1));

        env.resize_to(1000);
        assert_eq!(renders.get(), 0);
        env.resize_to(767);
        assert_eq!(page.snapshot().viewport, ViewportClass::Narrow);
        assert_eq!(renders.get(), 1);
        env.resize_to(768);
        assert_eq!(page.snapshot().viewport, ViewportClass::Wide);
        assert_eq!(renders.get(), 2);
    }

    #[test]
    fn test_copy_success_sets_and_clears_status() {
        let (page, scheduler) = mount_with(FakeEnvironment::new(), working_chain());

        tokio_test::block_on(page.copy_server_address()).unwrap();
        assert_eq!(page.snapshot().status_message(), Some("Copied to clipboard"));

        scheduler.advance(1799);
        assert!(page.snapshot().status.is_some());
        scheduler.advance(1);
        assert!(page.snapshot().status.is_none());
    }

    #[test]
    fn test_copy_success_message_in_chinese() {
        let env = FakeEnvironment::new().with_language("zh-TW");
        let (page, _) = mount_with(env, working_chain());

        tokio_test::block_on(page.copy_server_address()).unwrap();
        assert_eq!(page.snapshot().status_message(), Some("已复制到剪贴板"));
    }

    #[test]
    fn test_copy_writes_server_address() {
        let clipboard = FakeClipboard::working("async");
        let writes = clipboard.writes();
        let env = FakeEnvironment::new().with_origin("https://gateway.test");
        let (page, _) = mount_with(env, ClipboardChain::new().with(clipboard));

        tokio_test::block_on(page.copy_server_address()).unwrap();
        assert_eq!(*writes.borrow(), vec!["https://gateway.test".to_string()]);
    }

    #[test]
    fn test_unavailable_clipboard_sets_failure_status() {
        let (page, _) = mount_with(FakeEnvironment::new(), ClipboardChain::new());

        let result = tokio_test::block_on(page.copy_server_address());
        assert_eq!(result, Err(crate::error::CopyError::Unavailable));
        assert_eq!(page.snapshot().status, Some(CopyStatus::Failed));
        assert_eq!(page.snapshot().status_message(), Some("Failed to copy"));
    }

    #[test]
    fn test_second_copy_restarts_clear_timer() {
        let (page, scheduler) = mount_with(FakeEnvironment::new(), working_chain());

        tokio_test::block_on(page.copy_server_address()).unwrap();
        scheduler.advance(1000);
        tokio_test::block_on(page.copy_server_address()).unwrap();

        scheduler.advance(800);
        assert!(page.snapshot().status.is_some(), "still showing at 1800");
        scheduler.advance(999);
        assert!(page.snapshot().status.is_some(), "still showing at 2799");
        scheduler.advance(1);
        assert!(page.snapshot().status.is_none(), "cleared at 2800");
    }

    #[test]
    fn test_newer_failure_replaces_success() {
        let failing = ClipboardChain::new().with(FakeClipboard::failing("async", "denied"));
        let (page, _) = mount_with(FakeEnvironment::new(), failing);

        let _ = tokio_test::block_on(page.copy_text("x"));
        assert_eq!(page.snapshot().status, Some(CopyStatus::Failed));
    }

    #[test]
    fn test_unmount_cancels_everything() {
        let env = FakeEnvironment::new().with_width(1280);
        let (page, scheduler) = mount_with(env.clone(), working_chain());
        tokio_test::block_on(page.copy_server_address()).unwrap();
        assert_eq!(scheduler.pending(), 2);
        assert_eq!(env.listener_count(), 1);

        page.unmount();
        assert!(!page.is_mounted());
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(env.listener_count(), 0);

        let before = page.snapshot();
        scheduler.advance(10_000);
        assert_eq!(page.snapshot(), before);

        page.unmount();
    }

    #[test]
    fn test_events_after_unmount_are_ignored() {
        let (page, _) = mount_with(FakeEnvironment::new(), working_chain());
        page.unmount();

        page.toggle_locale();
        page.select_endpoint(4);
        assert_eq!(page.locale(), Locale::En);
        assert_eq!(page.snapshot().endpoint_index, 0);
    }

    #[test]
    fn test_dropping_page_cancels_timers() {
        let (page, scheduler) = mount_with(FakeEnvironment::new(), working_chain());
        assert_eq!(scheduler.pending(), 1);
        drop(page);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_endpoint_window_follows_selection() {
        let (page, _) = mount_with(FakeEnvironment::new(), working_chain());
        page.select_endpoint(5);
        let indices: Vec<usize> = page.endpoint_window(1).into_iter().map(|(i, _)| i).collect();
        assert_eq!(indices, vec![4, 5, 6]);
    }
}
