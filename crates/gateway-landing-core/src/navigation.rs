//! Outbound links opened from the call-to-action buttons

use crate::config::Links;
use crate::i18n::Phrase;

/// Browsing-context target and window features for outbound links
pub const NEW_CONTEXT_TARGET: &str = "_blank";
pub const NEW_CONTEXT_FEATURES: &str = "noopener,noreferrer";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalLink {
    GetStarted,
    Docs,
    Source,
}

impl ExternalLink {
    /// Button order on the page
    pub const ALL: [ExternalLink; 3] = [
        ExternalLink::GetStarted,
        ExternalLink::Docs,
        ExternalLink::Source,
    ];

    pub fn url(self, links: &Links) -> &str {
        match self {
            ExternalLink::GetStarted => &links.get_started,
            ExternalLink::Docs => &links.docs,
            ExternalLink::Source => &links.source,
        }
    }

    pub fn label(self) -> Phrase {
        match self {
            ExternalLink::GetStarted => Phrase::GetStarted,
            ExternalLink::Docs => Phrase::Documentation,
            ExternalLink::Source => Phrase::Source,
        }
    }

    /// The primary action is rendered solid, the rest outlined
    pub fn is_primary(self) -> bool {
        self == ExternalLink::GetStarted
    }
}
