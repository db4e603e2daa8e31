//! Transient copy status message

use crate::i18n::Phrase;
use crate::locale::Locale;

/// Outcome shown under the server address field after a copy attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyStatus {
    Succeeded,
    Failed,
}

impl CopyStatus {
    pub fn phrase(self) -> Phrase {
        match self {
            CopyStatus::Succeeded => Phrase::CopySucceeded,
            CopyStatus::Failed => Phrase::CopyFailed,
        }
    }

    /// Localized message text
    pub fn message(self, locale: Locale) -> &'static str {
        self.phrase().text(locale)
    }
}

/// Holder for the current status with a generation counter.
///
/// The message text is fixed in the locale active when the status was set.
/// Every `set` bumps the generation; a clear request carrying an older
/// generation is stale and does nothing, so a late clear can never wipe a
/// newer message even if timer cancellation raced with it.
#[derive(Debug, Default, Clone)]
pub struct StatusSlot {
    status: Option<(CopyStatus, Locale)>,
    generation: u64,
}

impl StatusSlot {
    pub fn get(&self) -> Option<CopyStatus> {
        self.status.map(|(status, _)| status)
    }

    /// Message text in the locale captured by `set`
    pub fn message(&self) -> Option<&'static str> {
        self.status.map(|(status, locale)| status.message(locale))
    }

    /// Replace the status, returning the generation a clear must present
    pub fn set(&mut self, status: CopyStatus, locale: Locale) -> u64 {
        self.generation += 1;
        self.status = Some((status, locale));
        self.generation
    }

    /// Clear if `generation` is still current. Returns true if cleared.
    pub fn clear(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.status.is_none() {
            return false;
        }
        self.status = None;
        true
    }
}
