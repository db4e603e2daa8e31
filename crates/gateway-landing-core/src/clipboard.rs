//! Layered copy-to-clipboard
//!
//! Strategies are probed in order; the first one that reports itself
//! available performs the write and its outcome is final. Failure of an
//! attempted strategy does not fall through to the next one. When no
//! strategy is available the chain fails with [`CopyError::Unavailable`].

use futures_util::future::LocalBoxFuture;
use tracing::debug;

use crate::error::{CopyError, CopyResult};

/// One way of placing text on the system clipboard
pub trait ClipboardStrategy {
    /// Short name used in log output
    fn name(&self) -> &'static str;

    /// Whether the capability exists in the current environment
    fn is_available(&self) -> bool;

    /// Write `text`. Any error raised along the way is a failure.
    fn write<'a>(&'a self, text: &'a str) -> LocalBoxFuture<'a, CopyResult<()>>;
}

/// Ordered list of [`ClipboardStrategy`] attempts
#[derive(Default)]
pub struct ClipboardChain {
    strategies: Vec<Box<dyn ClipboardStrategy>>,
}

impl std::fmt::Debug for ClipboardChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.strategies.iter().map(|s| s.name()))
            .finish()
    }
}

impl ClipboardChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a strategy with lower priority than those already added
    pub fn with(mut self, strategy: impl ClipboardStrategy + 'static) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    /// Name of the strategy that would handle the next copy, if any
    pub fn active_strategy(&self) -> Option<&'static str> {
        self.strategies
            .iter()
            .find(|s| s.is_available())
            .map(|s| s.name())
    }

    pub async fn copy(&self, text: &str) -> CopyResult<()> {
        let Some(strategy) = self.strategies.iter().find(|s| s.is_available()) else {
            return Err(CopyError::Unavailable);
        };
        debug!("Copying {} bytes via {}", text.len(), strategy.name());
        strategy.write(text).await
    }
}
