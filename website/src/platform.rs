//! Browser implementations of the environment and timer capabilities

use std::time::Duration;

use gateway_landing_core::{Environment, Error, Result, Scheduler};
use leptos::leptos_dom::helpers::{
    set_interval_with_handle, set_timeout_with_handle, IntervalHandle, TimeoutHandle,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// Reads `window.navigator`, `window.innerWidth` and `window.location`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserEnvironment;

/// Registered `resize` listener; dropping it frees the JS closure
pub struct ResizeSubscription {
    closure: Closure<dyn Fn()>,
}

impl Environment for BrowserEnvironment {
    type Subscription = ResizeSubscription;

    fn language(&self) -> Option<String> {
        web_sys::window()?.navigator().language()
    }

    fn viewport_width(&self) -> Option<u32> {
        let width = web_sys::window()?.inner_width().ok()?.as_f64()?;
        (width.is_finite() && width >= 0.0).then_some(width as u32)
    }

    fn origin(&self) -> Option<String> {
        web_sys::window()?.location().origin().ok()
    }

    fn subscribe_resize(&self, callback: Box<dyn Fn()>) -> Result<ResizeSubscription> {
        let window = web_sys::window().ok_or_else(|| Error::unsupported("window"))?;
        let closure = Closure::wrap(callback);
        window
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
            .map_err(|e| Error::listener(describe(&e)))?;
        Ok(ResizeSubscription { closure })
    }

    fn unsubscribe_resize(&self, subscription: ResizeSubscription) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "resize",
                subscription.closure.as_ref().unchecked_ref(),
            );
        }
    }
}

/// `setInterval` / `setTimeout` on the browser event loop
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

pub enum BrowserTimer {
    Interval(IntervalHandle),
    Timeout(TimeoutHandle),
}

impl Scheduler for BrowserScheduler {
    type Handle = BrowserTimer;

    fn set_interval(&self, period: Duration, callback: Box<dyn Fn()>) -> Result<BrowserTimer> {
        set_interval_with_handle(move || callback(), period)
            .map(BrowserTimer::Interval)
            .map_err(|e| Error::timer(describe(&e)))
    }

    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Result<BrowserTimer> {
        set_timeout_with_handle(move || callback(), delay)
            .map(BrowserTimer::Timeout)
            .map_err(|e| Error::timer(describe(&e)))
    }

    fn cancel(&self, handle: BrowserTimer) {
        match handle {
            BrowserTimer::Interval(handle) => handle.clear(),
            BrowserTimer::Timeout(handle) => handle.clear(),
        }
    }
}

/// Human-readable form of a thrown JS value
pub(crate) fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
