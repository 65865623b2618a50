use std::env;
use std::path::PathBuf;

/// Default model used for abstractive summaries when `OPENAI_MODEL` is unset.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai_api_key: Option<String>,
    pub openai_model: Option<String>,
    pub data_dir: PathBuf,
}

impl AppConfig {
    /// Build the configuration from the environment.
    ///
    /// The OpenAI key is optional; without it only the abstractive path is
    /// unavailable, and the failure is surfaced when a generation is requested.
    pub fn from_env() -> Result<Self, String> {
        let data_dir = match env::var("CONDENSE_DATA_DIR") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => dirs::data_dir()
                .map(|d| d.join("condense"))
                .ok_or_else(|| "could not determine a data directory; set CONDENSE_DATA_DIR".to_string())?,
        };

        Ok(Self {
            openai_api_key: env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty()),
            openai_model: env::var("OPENAI_MODEL").ok().filter(|m| !m.is_empty()),
            data_dir,
        })
    }

    /// Model name for abstractive summaries.
    pub fn model_name(&self) -> String {
        self.openai_model
            .clone()
            .unwrap_or_else(|| DEFAULT_MODEL.to_string())
    }
}
