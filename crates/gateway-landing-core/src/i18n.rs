//! Fixed zh/en phrase pairs for every locale-dependent string on the page

use crate::locale::Locale;

/// A piece of locale-dependent page text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phrase {
    /// Caption of the language toggle; names the language it switches to
    ToggleLanguage,
    HeadlineLead,
    HeadlineAccent,
    Tagline,
    CopySucceeded,
    CopyFailed,
    CopyButton,
    EndpointPicker,
    GetStarted,
    Documentation,
    Source,
    ProvidersHeading,
    PageTitle,
}

impl Phrase {
    pub const ALL: [Phrase; 13] = [
        Phrase::ToggleLanguage,
        Phrase::HeadlineLead,
        Phrase::HeadlineAccent,
        Phrase::Tagline,
        Phrase::CopySucceeded,
        Phrase::CopyFailed,
        Phrase::CopyButton,
        Phrase::EndpointPicker,
        Phrase::GetStarted,
        Phrase::Documentation,
        Phrase::Source,
        Phrase::ProvidersHeading,
        Phrase::PageTitle,
    ];

    pub fn text(self, locale: Locale) -> &'static str {
        let (zh, en) = self.pair();
        match locale {
            Locale::Zh => zh,
            Locale::En => en,
        }
    }

    fn pair(self) -> (&'static str, &'static str) {
        match self {
            Phrase::ToggleLanguage => ("Switch to English", "切换到中文"),
            Phrase::HeadlineLead => ("统一的", "The Unified"),
            Phrase::HeadlineAccent => ("大模型接口网关", "LLMs API Gateway"),
            Phrase::Tagline => (
                "更好的价格，更好的稳定性，只需要将模型基址替换为：",
                "Better pricing and stability\u{2014}simply replace your model base URL with:",
            ),
            Phrase::CopySucceeded => ("已复制到剪贴板", "Copied to clipboard"),
            Phrase::CopyFailed => ("复制失败，请重试", "Failed to copy"),
            Phrase::CopyButton => ("复制基址", "Copy base URL"),
            Phrase::EndpointPicker => ("接口路径", "API endpoint"),
            Phrase::GetStarted => ("立即开始", "Get Started"),
            Phrase::Documentation => ("查看文档", "Documentation"),
            Phrase::Source => ("GitHub", "GitHub"),
            Phrase::ProvidersHeading => (
                "支持众多的大模型供应商",
                "Supports a wide range of AI providers",
            ),
            Phrase::PageTitle => ("大模型接口网关", "LLMs API Gateway"),
        }
    }
}
