//! Display language selection

use std::fmt;

/// Active display language of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    Zh,
    #[default]
    En,
}

impl Locale {
    /// Resolve the initial locale from the environment's language tag.
    ///
    /// Any tag starting with `zh` (case-insensitive) selects Chinese;
    /// everything else, including a missing or empty tag, selects English.
    pub fn detect(tag: Option<&str>) -> Self {
        match tag {
            Some(tag) if tag.to_lowercase().starts_with("zh") => Locale::Zh,
            _ => Locale::En,
        }
    }

    /// The other locale
    pub fn toggle(self) -> Self {
        match self {
            Locale::Zh => Locale::En,
            Locale::En => Locale::Zh,
        }
    }

    pub fn is_chinese(self) -> bool {
        self == Locale::Zh
    }

    /// Short code used in the page state
    pub fn code(self) -> &'static str {
        match self {
            Locale::Zh => "zh",
            Locale::En => "en",
        }
    }

    /// BCP 47 tag for the document `lang` attribute
    pub fn html_lang(self) -> &'static str {
        match self {
            Locale::Zh => "zh-CN",
            Locale::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_chinese_tags() {
        for tag in ["zh", "zh-CN", "zh-TW", "ZH-hk", "Zh-Hans-CN", "zh_SG"] {
            assert_eq!(Locale::detect(Some(tag)), Locale::Zh, "tag {tag}");
        }
    }

    #[test]
    fn test_detect_other_tags_fall_back_to_english() {
        for tag in ["en-US", "en", "ja-JP", "fr", "", " zh", "x-zh"] {
            assert_eq!(Locale::detect(Some(tag)), Locale::En, "tag {tag:?}");
        }
    }

    #[test]
    fn test_detect_missing_tag() {
        assert_eq!(Locale::detect(None), Locale::En);
    }

    #[test]
    fn test_toggle_is_involution() {
        for locale in [Locale::Zh, Locale::En] {
            assert_ne!(locale.toggle(), locale);
            assert_eq!(locale.toggle().toggle(), locale);
        }
    }

    #[test]
    fn test_codes() {
        assert_eq!(Locale::Zh.to_string(), "zh");
        assert_eq!(Locale::En.to_string(), "en");
        assert_eq!(Locale::Zh.html_lang(), "zh-CN");
        assert!(Locale::Zh.is_chinese());
        assert!(!Locale::En.is_chinese());
    }
}
