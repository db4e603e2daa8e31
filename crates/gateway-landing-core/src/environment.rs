//! Environment signals the page reads at mount and on resize

use crate::error::Result;

/// Server address used when the page origin cannot be determined
pub const FALLBACK_SERVER_ADDRESS: &str = "https://api.example.com";

/// Read access to the browsing environment.
///
/// Every method degrades to `None` instead of failing so that the page can
/// render outside a browser.
pub trait Environment {
    /// Token returned by [`Environment::subscribe_resize`]
    type Subscription;

    /// Preferred language tag, e.g. `zh-CN`
    fn language(&self) -> Option<String>;

    /// Current viewport width in CSS pixels
    fn viewport_width(&self) -> Option<u32>;

    /// Origin the page is served from, e.g. `https://gateway.test`
    fn origin(&self) -> Option<String>;

    /// Invoke `callback` on every window resize
    fn subscribe_resize(&self, callback: Box<dyn Fn()>) -> Result<Self::Subscription>;

    fn unsubscribe_resize(&self, subscription: Self::Subscription);
}

/// Pick the copyable server address from the page origin.
///
/// Empty origins and the opaque origin `"null"` (file:// pages, sandboxed
/// frames) are treated as unavailable.
pub fn resolve_server_address(origin: Option<String>, fallback: &str) -> String {
    match origin {
        Some(origin) if !origin.is_empty() && origin != "null" => origin,
        _ => fallback.to_string(),
    }
}
