use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::Semaphore;

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::extract::extract_resume;
use crate::llm::{EnhanceRequest, LlmProvider};
use crate::models::ResumeRecord;
use crate::storage::Storage;

pub struct PortfolioPipeline {
    llm: Option<Arc<dyn LlmProvider>>,
    storage: Storage,
    config: PipelineConfig,
}

impl PortfolioPipeline {
    pub fn new(
        llm: Option<Arc<dyn LlmProvider>>,
        storage: Storage,
        config: PipelineConfig,
    ) -> Self {
        Self {
            llm,
            storage,
            config,
        }
    }

    /// Convert a single resume file and persist the result, under the given
    /// key or one derived from the file name. Failing to read the file fails
    /// the whole operation; everything after the read degrades instead of
    /// failing.
    pub async fn process_file(&self, path: &Path, key: Option<&str>) -> Result<ResumeRecord> {
        let key = key.map(str::to_string).unwrap_or_else(|| record_key(path));
        let record = self.convert(path).await?;

        self.storage.save_record(&key, &record)?;
        tracing::info!("Record saved under key: {}", key);

        Ok(record)
    }

    /// Convert several resumes with bounded concurrency, then persist the
    /// successful ones. Per-file failures are reported alongside the key
    /// rather than aborting the batch.
    pub async fn process_files(
        &self,
        paths: &[PathBuf],
    ) -> Result<Vec<(String, Result<ResumeRecord>)>> {
        let semaphore = Arc::new(Semaphore::new(self.config.concurrency_limit));

        let pb = ProgressBar::new(paths.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} resumes")
                .unwrap()
                .progress_chars("#>-"),
        );

        let mut conversions = Vec::new();
        for path in paths {
            let sem = semaphore.clone();
            let pb_clone = pb.clone();

            conversions.push(async move {
                let _permit = sem.acquire().await.ok()?;
                let record = self.convert(path).await;
                pb_clone.inc(1);
                Some((record_key(path), record))
            });
        }

        let results = join_all(conversions).await;
        pb.finish_with_message("Processed all resumes");

        let mut processed = Vec::new();
        for item in results.into_iter().flatten() {
            if let (key, Ok(record)) = &item {
                self.storage.save_record(key, record)?;
            }
            processed.push(item);
        }

        Ok(processed)
    }

    pub fn stored_record(&self, key: &str) -> Result<Option<crate::storage::StoredRecord>> {
        self.storage.get_record(key)
    }

    async fn convert(&self, path: &Path) -> Result<ResumeRecord> {
        tracing::info!("Reading resume: {}", path.display());
        let text = tokio::fs::read_to_string(path).await?;

        let record = extract_resume(&text);
        tracing::info!(
            "Extracted {} experience, {} education, {} projects, {} skill groups",
            record.experience.len(),
            record.education.len(),
            record.projects.len(),
            record.skills.len()
        );

        if !self.config.enhance {
            return Ok(record);
        }

        let Some(llm) = &self.llm else {
            return Ok(record);
        };

        match llm.enhance_resume(EnhanceRequest::new(record.clone())).await {
            Ok(enhanced) => {
                tracing::info!("Record enhanced via {}", llm.name());
                Ok(enhanced)
            }
            Err(e) => {
                tracing::warn!("Enhancement failed, keeping extracted record: {}", e);
                Ok(record)
            }
        }
    }
}

/// Storage key for a resume file: its lowercased stem.
pub fn record_key(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("resume")
        .to_lowercase()
        .replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_pipeline() -> PortfolioPipeline {
        PortfolioPipeline::new(
            None,
            Storage::in_memory().unwrap(),
            PipelineConfig {
                enhance: false,
                concurrency_limit: 2,
            },
        )
    }

    #[tokio::test]
    async fn test_process_file_extracts_and_persists() {
        let path = std::env::temp_dir().join("foliogen-pipeline-test.txt");
        std::fs::write(
            &path,
            "Jane Doe\nExperience\nEngineer at Acme\n2019 - 2020\n• Built X",
        )
        .unwrap();

        let pipeline = test_pipeline();
        let record = pipeline.process_file(&path, None).await.unwrap();
        assert_eq!(record.experience.len(), 1);

        let stored = pipeline
            .stored_record("foliogen-pipeline-test")
            .unwrap()
            .unwrap();
        assert_eq!(stored.record, record);

        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn test_unreadable_file_is_fatal() {
        let pipeline = test_pipeline();
        let result = pipeline
            .process_file(Path::new("/nonexistent/resume.txt"), None)
            .await;
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn test_record_key_from_stem() {
        assert_eq!(record_key(Path::new("/tmp/Jane Doe Resume.txt")), "jane-doe-resume");
        assert_eq!(record_key(Path::new("cv.TXT")), "cv");
    }
}
