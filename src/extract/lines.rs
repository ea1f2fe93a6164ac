use once_cell::sync::Lazy;
use regex::Regex;

static DATE_RANGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d{4})\s*[-–]\s*(\d{4}|present)").unwrap());

static BULLET_STRIP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[•\-–]\s*").unwrap());

const SECTION_KEYWORDS: [&str; 8] = [
    "education",
    "experience",
    "skills",
    "projects",
    "certifications",
    "interests",
    "summary",
    "profile",
];

/// Split raw resume text into trimmed lines. Empty lines are kept; the
/// scanners rely on them to close off accumulating blocks.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(|line| line.trim().to_string()).collect()
}

/// Shared section-boundary rule: a line starts a new section if it equals a
/// known heading, or carries it in `heading:` form, case-insensitively.
pub fn is_new_section(line: &str) -> bool {
    let lower = line.to_lowercase();
    SECTION_KEYWORDS
        .iter()
        .any(|keyword| lower == *keyword || lower.contains(&format!("{keyword}:")))
}

pub fn is_bullet(line: &str) -> bool {
    line.starts_with('•') || line.starts_with('-')
}

pub fn strip_bullet(line: &str) -> String {
    BULLET_STRIP_RE.replace(line, "").to_string()
}

#[derive(Debug, Clone, PartialEq)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

/// Match a `YYYY - YYYY|present` range anywhere in the line. "present" in any
/// case is normalized to "Present".
pub fn parse_date_range(line: &str) -> Option<DateRange> {
    let captures = DATE_RANGE_RE.captures(line)?;
    let start = captures[1].to_string();
    let raw_end = &captures[2];
    let end = if raw_end.eq_ignore_ascii_case("present") {
        "Present".to_string()
    } else {
        raw_end.to_string()
    };
    Some(DateRange { start, end })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_new_section_exact_and_colon_forms() {
        assert!(is_new_section("Education"));
        assert!(is_new_section("SKILLS"));
        assert!(is_new_section("Experience:"));
        assert!(is_new_section("Technical Skills: overview"));
        assert!(!is_new_section("Software Engineer at Acme Corp"));
        assert!(!is_new_section("Experienced team lead"));
    }

    #[test]
    fn test_parse_date_range() {
        assert_eq!(
            parse_date_range("2019 - 2021"),
            Some(DateRange {
                start: "2019".to_string(),
                end: "2021".to_string()
            })
        );
        assert_eq!(
            parse_date_range("Acme Corp 2020 – present"),
            Some(DateRange {
                start: "2020".to_string(),
                end: "Present".to_string()
            })
        );
        assert_eq!(parse_date_range("no dates here"), None);
    }

    #[test]
    fn test_bullet_helpers() {
        assert!(is_bullet("• Built the pipeline"));
        assert!(is_bullet("- Led the team"));
        assert!(!is_bullet("Plain prose"));
        assert_eq!(strip_bullet("• Built the pipeline"), "Built the pipeline");
        assert_eq!(strip_bullet("– Shipped v2"), "Shipped v2");
    }

    #[test]
    fn test_split_lines_trims_and_keeps_blanks() {
        let lines = split_lines("  Jane Doe  \n\n Engineer ");
        assert_eq!(lines, vec!["Jane Doe", "", "Engineer"]);
    }
}
