/// Model providers shown under the hero, in display order
pub fn providers() -> Vec<&'static str> {
    vec![
        "Moonshot",
        "OpenAI",
        "xAI",
        "Zhipu",
        "Volcengine",
        "Cohere",
        "Claude",
        "Gemini",
        "Suno",
        "MiniMax",
        "Wenxin",
        "Spark",
        "Qingyan",
        "DeepSeek",
        "Qwen",
        "Midjourney",
        "Grok",
        "Azure AI",
        "Hunyuan",
        "Xinference",
    ]
}

/// Shown after the provider list
pub const MORE_PROVIDERS: &str = "30+";
