use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub openrouter_api_key: Option<String>,
    pub openrouter_api_base: String,
    pub openrouter_model: String,
    pub database_path: String,
    pub concurrency_limit: usize,
}

impl Config {
    pub fn from_env() -> Self {
        let openrouter_api_key = env::var("OPENROUTER_API_KEY").ok().filter(|k| !k.is_empty());

        let openrouter_api_base = env::var("OPENROUTER_API_BASE")
            .unwrap_or_else(|_| "https://openrouter.ai/api/v1".to_string());

        let openrouter_model = env::var("OPENROUTER_MODEL")
            .unwrap_or_else(|_| "qwen/qwen2.5-vl-72b-instruct:free".to_string());

        let database_path = env::var("DATABASE_PATH")
            .unwrap_or_else(|_| "foliogen.db".to_string());

        let concurrency_limit = env::var("CONCURRENCY_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(4);

        Self {
            openrouter_api_key,
            openrouter_api_base,
            openrouter_model,
            database_path,
            concurrency_limit,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub enhance: bool,
    pub concurrency_limit: usize,
}

impl From<&Config> for PipelineConfig {
    fn from(config: &Config) -> Self {
        Self {
            enhance: false,
            concurrency_limit: config.concurrency_limit,
        }
    }
}
