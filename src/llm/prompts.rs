use crate::error::Result;
use crate::models::ResumeRecord;

pub const SYSTEM_PROMPT: &str = r#"You are a career coach preparing resume data for a personal portfolio website.
You receive a resume as JSON and must respond with an enhanced resume in the exact same JSON shape:
{
    "personal": {
        "name": "string",
        "title": "string",
        "summary": "string",
        "email": "string",
        "phone": "string",
        "location": "string",
        "socialLinks": {"linkedin": "url", "github": "url", "twitter": "url", "instagram": "url"}
    },
    "experience": [{"title": "string", "company": "string", "startDate": "string", "endDate": "string", "description": "string"}],
    "education": [{"degree": "string", "institution": "string", "startDate": "string", "endDate": "string", "description": "string"}],
    "projects": [{"name": "string", "technologies": "string", "link": "url", "description": "string"}],
    "skills": [{"category": "string", "items": ["string"]}],
    "certifications": [{"name": "string", "description": "string"}]
}

Guidelines:
- Keep every factual detail; never invent employers, schools or dates
- Leave a field empty rather than guessing a value the resume does not support
- Respond with the JSON object only"#;

#[derive(Debug, Clone)]
pub struct EnhanceRequest {
    pub record: ResumeRecord,
}

impl EnhanceRequest {
    pub fn new(record: ResumeRecord) -> Self {
        Self { record }
    }

    pub fn to_prompt(&self) -> Result<String> {
        let json = serde_json::to_string(&self.record)?;

        Ok(format!(
            "I have a resume in JSON format: {json}\n\n\
             Please analyze this resume and enhance it by:\n\
             1. Improving the professional summary to be more compelling. If no summary is present, write one from the available information.\n\
             2. Enhancing job and project descriptions to highlight achievements and skills.\n\
             3. Standardizing date formats (e.g., MM/YYYY).\n\
             4. Filling in missing fields that would be valuable for a portfolio, where the rest of the resume supports them.\n\
             5. Organizing skills into categories (e.g., languages, tools, practices).\n\n\
             Return the enhanced resume in the same JSON format."
        ))
    }

    pub fn estimate_tokens(&self) -> usize {
        // Rough estimate: ~4 characters per token
        serde_json::to_string(&self.record)
            .map(|json| json.len() / 4)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PersonalInfo;

    #[test]
    fn test_prompt_embeds_record_json() {
        let record = ResumeRecord {
            personal: PersonalInfo {
                name: "Jane Doe".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };

        let prompt = EnhanceRequest::new(record).to_prompt().unwrap();
        assert!(prompt.contains("\"name\":\"Jane Doe\""));
        assert!(prompt.contains("same JSON format"));
    }
}
