#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsSource {
    pub name: String,
    /// Default sources cannot be removed, only disabled.
    pub is_default: bool,
    pub enabled: bool,
}

impl NewsSource {
    pub fn custom(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_default: false,
            enabled: true,
        }
    }

    fn builtin(name: &str) -> Self {
        Self {
            name: name.to_string(),
            is_default: true,
            enabled: true,
        }
    }
}

pub fn default_sources() -> Vec<NewsSource> {
    vec![
        NewsSource::builtin("Business Standard"),
        NewsSource::builtin("Economic Times"),
        NewsSource::builtin("Mint"),
    ]
}
