pub mod config;
pub mod error;
pub mod models;
pub mod extract;
pub mod llm;
pub mod pipeline;
pub mod storage;

pub use config::{Config, PipelineConfig};
pub use error::{Error, Result};
pub use extract::extract_resume;
pub use llm::{LlmProvider, OpenRouterProvider};
pub use pipeline::PortfolioPipeline;
pub use storage::Storage;
