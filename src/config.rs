pub const DEFAULT_MESSAGE_TIMEOUT_MS: u32 = 5_000;

// <meta name="activity-board-api-base" content="https://..."> in index.html
const API_BASE_META: &str = "activity-board-api-base";

#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    /// Prefix for every API path. Empty means same origin.
    pub api_base: String,
    /// How long a status message stays visible.
    pub message_timeout_ms: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            message_timeout_ms: DEFAULT_MESSAGE_TIMEOUT_MS,
        }
    }
}

impl BoardConfig {
    pub fn with_api_base(api_base: &str) -> Self {
        Self {
            api_base: api_base.trim().trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    /// Reads overrides from the host page, falling back to defaults.
    pub fn from_document() -> Self {
        let selector = format!("meta[name=\"{}\"]", API_BASE_META);
        let api_base = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(&selector).ok().flatten())
            .and_then(|meta| meta.get_attribute("content"));

        match api_base {
            Some(base) => {
                web_sys::console::log_1(&format!("Using activities API at {}", base).into());
                Self::with_api_base(&base)
            }
            None => Self::default(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}
