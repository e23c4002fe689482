use std::env;

const DEFAULT_GENAI_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_GENAI_MODEL: &str = "gemini-2.0-flash";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,

    // Generative model backend (optional — flows run in simulated mode
    // when no API key is configured)
    pub genai_api_key: Option<String>,
    pub genai_api_url: String,
    pub genai_model: String,

    // Live chart ticker
    pub candle_symbol: String,
    pub candle_interval_secs: u64,

    // Telegram trade alerts (optional)
    pub telegram_bot_token: Option<String>,
    pub telegram_chat_id: Option<String>,
    pub notifications_enabled: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()?,

            genai_api_key: env::var("GENAI_API_KEY").ok().filter(|k| !k.is_empty()),
            genai_api_url: env::var("GENAI_API_URL")
                .unwrap_or_else(|_| DEFAULT_GENAI_URL.into()),
            genai_model: env::var("GENAI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GENAI_MODEL.into()),

            candle_symbol: env::var("CANDLE_SYMBOL").unwrap_or_else(|_| "BTC".into()),
            candle_interval_secs: env::var("CANDLE_INTERVAL_SECS")
                .unwrap_or_else(|_| "5".into())
                .parse()
                .unwrap_or(5),

            telegram_bot_token: env::var("TELEGRAM_BOT_TOKEN").ok(),
            telegram_chat_id: env::var("TELEGRAM_CHAT_ID").ok(),
            notifications_enabled: env::var("NOTIFICATIONS_ENABLED")
                .unwrap_or_else(|_| "false".into())
                .parse()
                .unwrap_or(false),
        })
    }

    /// Returns true if a live model backend is configured.
    pub fn has_genai(&self) -> bool {
        self.genai_api_key.is_some()
    }

    /// Returns true if Telegram alert credentials are configured.
    pub fn has_telegram(&self) -> bool {
        self.telegram_bot_token.is_some() && self.telegram_chat_id.is_some()
    }
}
