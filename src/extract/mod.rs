pub(crate) mod lines;

mod certifications;
mod education;
mod experience;
mod personal;
mod projects;
mod skills;

use crate::models::ResumeRecord;

/// Scan resume text and build a best-effort [`ResumeRecord`]. Each section
/// scanner makes its own pass over the same line sequence; a section whose
/// patterns never match simply contributes an empty collection. This function
/// has no failure mode.
pub fn extract_resume(text: &str) -> ResumeRecord {
    let lines = lines::split_lines(text);

    ResumeRecord {
        personal: personal::extract(&lines),
        experience: experience::extract(&lines),
        education: education::extract(&lines),
        projects: projects::extract(&lines),
        skills: skills::extract(&lines),
        certifications: certifications::extract(&lines),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Jane Doe
jane.doe@example.com | 555-123-4567
Austin, Texas, USA
linkedin.com/in/jane-doe

Summary
Backend engineer focused on data pipelines.

Experience
2019 - 2021
Software Engineer at Acme Corp
• Built ingestion services
• Cut processing time in half

Education
Bachelor of Science in Computer Science
State University
2015 - 2019

Projects
Portfolio Site | React, Node.js
• Personal site with switchable themes
https://portfolio.example.com

Skills
Languages:
• Go, Rust, TypeScript

Certifications
• AWS Certified: Solutions Architect
";

    #[test]
    fn test_extracts_every_section() {
        let record = extract_resume(SAMPLE);

        assert_eq!(record.personal.name, "Jane Doe");
        assert_eq!(record.personal.email, "jane.doe@example.com");
        assert_eq!(
            record.personal.summary,
            "Backend engineer focused on data pipelines."
        );

        assert_eq!(record.experience.len(), 1);
        assert_eq!(record.experience[0].company, "Acme Corp");
        assert_eq!(record.experience[0].start_date, "2019");

        assert_eq!(record.education.len(), 1);
        assert_eq!(record.education[0].institution, "State University");

        assert_eq!(record.projects.len(), 1);
        assert_eq!(
            record.projects[0].link.as_deref(),
            Some("https://portfolio.example.com")
        );

        assert_eq!(record.skills.len(), 1);
        assert_eq!(record.skills[0].items, vec!["Go", "Rust", "TypeScript"]);

        assert_eq!(record.certifications.len(), 1);
        assert_eq!(record.certifications[0].name, "AWS Certified");
    }

    #[test]
    fn test_unrecognized_text_yields_empty_record() {
        let record = extract_resume("https://nothing.example.com\n12345\n+1 234");

        assert!(record.personal.name.is_empty());
        assert!(record.personal.summary.is_empty());
        assert!(record.experience.is_empty());
        assert!(record.education.is_empty());
        assert!(record.projects.is_empty());
        assert!(record.skills.is_empty());
        assert!(record.certifications.is_empty());
    }

    #[test]
    fn test_empty_input_yields_default_record() {
        assert_eq!(extract_resume(""), ResumeRecord::default());
    }
}
