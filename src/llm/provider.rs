use async_trait::async_trait;

use crate::error::Result;
use crate::llm::prompts::EnhanceRequest;
use crate::models::ResumeRecord;

#[async_trait]
pub trait LlmProvider: Send + Sync {
    async fn enhance_resume(&self, request: EnhanceRequest) -> Result<ResumeRecord>;
    fn name(&self) -> &str;
}
