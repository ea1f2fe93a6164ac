use once_cell::sync::Lazy;
use regex::Regex;

use crate::extract::lines::{is_bullet, is_new_section, parse_date_range, strip_bullet};
use crate::models::ExperienceEntry;

static TITLE_COMPANY_SPLIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:at|for|in)\b").unwrap());

pub(crate) fn extract(lines: &[String]) -> Vec<ExperienceEntry> {
    let mut experience = Vec::new();
    let mut current = ExperienceEntry::default();
    let mut description_lines: Vec<String> = Vec::new();
    let mut in_section = false;

    for line in lines {
        if line.to_lowercase().contains("experience") && !line.contains("years") {
            in_section = true;
            continue;
        }

        if !in_section || line.is_empty() {
            continue;
        }

        if is_new_section(line) {
            in_section = false;
            continue;
        }

        if let Some(range) = parse_date_range(line) {
            // A titled entry without dates absorbs the range; otherwise the
            // range delimits entries.
            if !current.title.is_empty() && current.start_date.is_empty() {
                current.start_date = range.start;
                current.end_date = range.end;
            } else {
                if !current.title.is_empty() {
                    current.description = description_lines.join(" ").trim().to_string();
                    experience.push(std::mem::take(&mut current));
                }
                current = ExperienceEntry {
                    start_date: range.start,
                    end_date: range.end,
                    ..Default::default()
                };
                description_lines.clear();
            }
            continue;
        }

        if is_bullet(line) {
            description_lines.push(strip_bullet(line));
        } else {
            let parts: Vec<&str> = TITLE_COMPANY_SPLIT_RE.splitn(line, 2).collect();
            if parts.len() > 1 {
                current.title = parts[0].trim().to_string();
                current.company = parts[1].trim().to_string();
            } else if current.title.is_empty() {
                current.title = line.clone();
            }
        }
    }

    if !current.title.is_empty() {
        current.description = description_lines.join(" ").trim().to_string();
        experience.push(current);
    }

    experience
}
