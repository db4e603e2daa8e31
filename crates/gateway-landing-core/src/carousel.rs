//! Rotating display of supported API endpoint paths
//!
//! A single index with two writers: the periodic tick and the user's
//! selection in the wheel picker. Whichever wrote last wins. Selection never
//! touches the tick cadence; that is owned by the scheduler interval.

use tracing::warn;

use crate::error::{Error, Result};

/// Endpoint paths shown when the configuration does not override them
pub const DEFAULT_ENDPOINTS: [&str; 12] = [
    "/v1/chat/completions",
    "/v1/responses",
    "/v1/messages",
    "/v1beta/models",
    "/v1/embeddings",
    "/v1/rerank",
    "/v1/images/generations",
    "/v1/images/edits",
    "/v1/images/variations",
    "/v1/audio/speech",
    "/v1/audio/transcriptions",
    "/v1/audio/translations",
];

#[derive(Debug, Clone)]
pub struct EndpointCarousel {
    endpoints: Vec<String>,
    index: usize,
}

impl Default for EndpointCarousel {
    fn default() -> Self {
        Self {
            endpoints: DEFAULT_ENDPOINTS.iter().map(|s| s.to_string()).collect(),
            index: 0,
        }
    }
}

impl EndpointCarousel {
    /// Create a carousel positioned on the first endpoint.
    ///
    /// Fails if `endpoints` is empty, since no index would be valid.
    pub fn new(endpoints: Vec<String>) -> Result<Self> {
        if endpoints.is_empty() {
            return Err(Error::config_invalid("endpoint list must not be empty"));
        }
        Ok(Self {
            endpoints,
            index: 0,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &str {
        &self.endpoints[self.index]
    }

    /// Advance to the next endpoint, wrapping at the end
    pub fn tick(&mut self) {
        self.index = (self.index + 1) % self.endpoints.len();
    }

    /// Jump directly to `index`.
    ///
    /// Callers only emit indices taken from [`EndpointCarousel::window`], so
    /// an out-of-range value is a bug: it panics in debug builds and is
    /// logged and ignored in release builds.
    pub fn select(&mut self, index: usize) {
        let accepted = self.try_select(index);
        debug_assert!(accepted, "endpoint index out of range");
    }

    fn try_select(&mut self, index: usize) -> bool {
        if index >= self.endpoints.len() {
            warn!(
                "Ignoring endpoint selection {} (only {} endpoints)",
                index,
                self.endpoints.len()
            );
            return false;
        }
        self.index = index;
        true
    }

    /// Cyclic neighbourhood of the current index, `radius` entries either side.
    ///
    /// Returned as `(index, path)` pairs ordered top to bottom, with the
    /// current endpoint in the middle. The radius is capped so that no
    /// endpoint appears twice.
    pub fn window(&self, radius: usize) -> Vec<(usize, &str)> {
        let len = self.endpoints.len();
        let radius = radius.min((len - 1) / 2);
        (0..=2 * radius)
            .map(|offset| {
                let idx = (self.index + len - radius + offset) % len;
                (idx, self.endpoints[idx].as_str())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel() -> EndpointCarousel {
        EndpointCarousel::default()
    }

    #[test]
    fn test_starts_at_first_endpoint() {
        let c = carousel();
        assert_eq!(c.index(), 0);
        assert_eq!(c.current(), "/v1/chat/completions");
        assert_eq!(c.endpoints.len(), 12);
    }

    #[test]
    fn test_tick_count_is_modular() {
        for n in [0usize, 1, 5, 11, 12, 13, 24, 100] {
            let mut c = carousel();
            for _ in 0..n {
                c.tick();
            }
            assert_eq!(c.index(), n % 12, "after {n} ticks");
        }
    }

    #[test]
    fn test_select_then_tick() {
        for i in 0..12 {
            let mut c = carousel();
            c.tick();
            c.tick();
            c.tick();
            c.select(i);
            assert_eq!(c.index(), i);
            c.tick();
            assert_eq!(c.index(), (i + 1) % 12);
        }
    }

    #[test]
    fn test_last_endpoint_wraps() {
        let mut c = carousel();
        c.select(11);
        assert_eq!(c.current(), "/v1/audio/translations");
        c.tick();
        assert_eq!(c.current(), "/v1/chat/completions");
    }

    #[test]
    fn test_new_rejects_empty_list() {
        assert!(EndpointCarousel::new(Vec::new()).is_err());
    }

    #[test]
    fn test_window_wraps_around_start() {
        let c = carousel();
        let window = c.window(1);
        assert_eq!(
            window,
            vec![
                (11, "/v1/audio/translations"),
                (0, "/v1/chat/completions"),
                (1, "/v1/responses"),
            ]
        );
    }

    #[test]
    fn test_window_radius_is_capped() {
        let c = EndpointCarousel::new(vec!["/a".into(), "/b".into(), "/c".into()]).unwrap();
        let indices: Vec<usize> = c.window(5).into_iter().map(|(i, _)| i).collect();
        assert_eq!(indices, vec![2, 0, 1]);

        let single = EndpointCarousel::new(vec!["/only".into()]).unwrap();
        assert_eq!(single.window(2), vec![(0, "/only")]);
    }

    #[test]
    fn test_out_of_range_selection_keeps_index() {
        let mut c = carousel();
        assert!(c.try_select(3));
        assert!(!c.try_select(12));
        assert!(!c.try_select(usize::MAX));
        assert_eq!(c.index(), 3);
        assert_eq!(c.current(), "/v1beta/models");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "endpoint index out of range")]
    fn test_select_out_of_range_asserts_in_debug() {
        let mut c = carousel();
        c.select(12);
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_select_out_of_range_is_ignored_in_release() {
        let mut c = carousel();
        c.select(3);
        c.select(12);
        assert_eq!(c.index(), 3);
    }
}
