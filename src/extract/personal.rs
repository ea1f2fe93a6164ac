use once_cell::sync::Lazy;
use regex::Regex;

use crate::extract::lines::is_new_section;
use crate::models::PersonalInfo;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\+\d{1,3}[-.\s]?)?\d{3}[-.\s]?\d{3}[-.\s]?\d{4}").unwrap());

static LINKEDIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"linkedin\.com/in/[a-zA-Z0-9-]+").unwrap());

static PHONE_PREFIX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?\d").unwrap());

static LOCATION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(.*),\s*(.*),\s*(.*)").unwrap());

pub(crate) fn extract(lines: &[String]) -> PersonalInfo {
    let mut personal = PersonalInfo::default();

    // Name is usually among the first few lines
    for line in lines.iter().take(5) {
        if !line.is_empty()
            && !line.contains('@')
            && !line.contains("http")
            && !PHONE_PREFIX_RE.is_match(line)
        {
            personal.name = line.clone();
            break;
        }
    }

    for line in lines {
        if let Some(m) = EMAIL_RE.find(line) {
            personal.email = m.as_str().to_string();
            break;
        }
    }

    for line in lines {
        if let Some(m) = PHONE_RE.find(line) {
            personal.phone = m.as_str().to_string();
            break;
        }
    }

    for line in lines {
        if let Some(m) = LINKEDIN_RE.find(line) {
            personal.social_links.linkedin = Some(format!("https://www.{}", m.as_str()));
            break;
        }
    }

    personal.summary = extract_summary(lines);

    for line in lines {
        if LOCATION_RE.is_match(line) && !line.contains('@') {
            personal.location = line.clone();
            break;
        }
    }

    personal
}

fn extract_summary(lines: &[String]) -> String {
    let heading = lines.iter().position(|line| {
        let lower = line.to_lowercase();
        lower.contains("summary") || lower.contains("profile") || lower.contains("about")
    });
    let Some(heading) = heading else {
        return String::new();
    };

    let mut summary = String::new();
    for line in lines.iter().skip(heading + 1) {
        if line.is_empty() || is_new_section(line) {
            break;
        }
        summary.push_str(line);
        summary.push(' ');
    }
    summary.trim().to_string()
}
