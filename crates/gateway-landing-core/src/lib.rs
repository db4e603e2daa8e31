//! # gateway-landing-core - Landing Page State
//!
//! Target-independent core of the API gateway landing page. Everything
//! that has a state machine, a timer or an environment-dependent branch
//! lives here; the `website` crate only supplies browser implementations of
//! the capability traits and the markup.
//!
//! ## Public API
//!
//! ### State holders
//! - [`Locale`] - Display language, detected from the browser language tag
//! - [`ResponsiveState`], [`ViewportClass`], [`ControlSize`] - Narrow/wide presentation
//! - [`EndpointCarousel`] - Rotating endpoint path with manual selection
//! - [`CopyStatus`], [`StatusSlot`] - Transient copy outcome
//!
//! ### Capabilities (`environment`, `scheduler`, `clipboard`)
//! - [`Environment`] - Language, viewport width, origin and resize events
//! - [`Scheduler`] - Intervals and timeouts with cancellation
//! - [`ClipboardStrategy`], [`ClipboardChain`] - Ordered copy strategies
//!
//! ### Page (`page`)
//! - [`LandingPage`] - Owns one page instance from mount to unmount
//! - [`PageSnapshot`] - Render-ready copy of the current state
//!
//! ### Configuration and text
//! - [`SiteConfig`], [`Links`] - Embedded `site.toml`
//! - [`Phrase`] - zh/en phrase catalog
//! - [`ExternalLink`] - Outbound navigation targets
//!
//! ### Error Handling (`error`)
//! - [`Error`], [`Result`] - Configuration and platform errors
//! - [`CopyError`], [`CopyResult`] - Clipboard failures

pub mod carousel;
pub mod clipboard;
pub mod config;
pub mod environment;
pub mod error;
pub mod i18n;
pub mod locale;
pub mod navigation;
pub mod page;
pub mod scheduler;
pub mod status;
pub mod viewport;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

/// Prelude for common imports used by the website crate
pub mod prelude {
    pub use super::error::{CopyError, CopyResult, Error, Result};
    pub use tracing::{debug, error, info, trace, warn};
}

pub use carousel::{EndpointCarousel, DEFAULT_ENDPOINTS};
pub use clipboard::{ClipboardChain, ClipboardStrategy};
pub use config::{Links, SiteConfig, DEFAULT_CAROUSEL_INTERVAL_MS, DEFAULT_STATUS_CLEAR_MS};
pub use environment::{resolve_server_address, Environment, FALLBACK_SERVER_ADDRESS};
pub use error::{CopyError, CopyResult, Error, Result};
pub use i18n::Phrase;
pub use locale::Locale;
pub use navigation::{ExternalLink, NEW_CONTEXT_FEATURES, NEW_CONTEXT_TARGET};
pub use page::{LandingPage, PageSnapshot};
pub use scheduler::Scheduler;
pub use status::{CopyStatus, StatusSlot};
pub use viewport::{ControlSize, ResponsiveState, ViewportClass, DEFAULT_NARROW_BREAKPOINT};
