use once_cell::sync::Lazy;
use regex::Regex;

use crate::extract::lines::{is_new_section, strip_bullet};
use crate::models::ProjectEntry;

static NAME_TECH_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(.*?)\s*\|\s*(.*)").unwrap());

static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://[^\s]+").unwrap());

pub(crate) fn extract(lines: &[String]) -> Vec<ProjectEntry> {
    let mut projects = Vec::new();
    let mut current = ProjectEntry::default();
    let mut description_lines: Vec<String> = Vec::new();
    let mut in_section = false;

    for line in lines {
        // Exact heading match only; "My Projects" does not open the section
        if line.to_lowercase() == "projects" {
            in_section = true;
            continue;
        }

        if !in_section || line.is_empty() {
            continue;
        }

        if is_new_section(line) {
            if !current.name.is_empty() {
                current.description = description_lines.join(" ").trim().to_string();
                projects.push(std::mem::take(&mut current));
            }
            in_section = false;
            continue;
        }

        // `name | technologies` lines delimit projects
        if let Some(captures) = NAME_TECH_RE.captures(line) {
            if !current.name.is_empty() {
                current.description = description_lines.join(" ").trim().to_string();
                projects.push(std::mem::take(&mut current));
                description_lines.clear();
            }
            current = ProjectEntry {
                name: captures[1].trim().to_string(),
                technologies: captures[2].trim().to_string(),
                ..Default::default()
            };
            continue;
        }

        if let Some(m) = URL_RE.find(line) {
            current.link = Some(m.as_str().to_string());
            continue;
        }

        if line.starts_with('•') || line.starts_with('-') || line.starts_with('–') {
            description_lines.push(strip_bullet(line));
        } else if !starts_with_year(line) {
            description_lines.push(line.clone());
        }
    }

    if !current.name.is_empty() {
        current.description = description_lines.join(" ").trim().to_string();
        projects.push(current);
    }

    projects
}

fn starts_with_year(line: &str) -> bool {
    line.len() >= 4 && line.chars().take(4).all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::lines::split_lines;

    #[test]
    fn test_full_project_entry() {
        let lines = split_lines(
            "Projects\nPortfolio Site | React, Node.js\n• Personal site with themes\nhttps://portfolio.example.com",
        );
        let projects = extract(&lines);
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name, "Portfolio Site");
        assert_eq!(projects[0].technologies, "React, Node.js");
        assert_eq!(projects[0].description, "Personal site with themes");
        assert_eq!(
            projects[0].link.as_deref(),
            Some("https://portfolio.example.com")
        );
    }

    #[test]
    fn test_second_entry_closes_first() {
        let lines = split_lines(
            "Projects\nPortfolio Site | React\n• Personal site\nWeather App | Flutter\n• Live forecasts",
        );
        let projects = extract(&lines);
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].name, "Portfolio Site");
        assert_eq!(projects[0].description, "Personal site");
        assert_eq!(projects[1].name, "Weather App");
        assert_eq!(projects[1].description, "Live forecasts");
    }

    #[test]
    fn test_heading_must_match_exactly() {
        let projects = extract(&split_lines("My Projects\nPortfolio Site | React"));
        assert!(projects.is_empty());

        let projects = extract(&split_lines("PROJECTS\nPortfolio Site | React"));
        assert_eq!(projects.len(), 1);
    }

    #[test]
    fn test_prose_joins_description_and_year_lines_skipped() {
        let lines = split_lines(
            "Projects\nCrawler | Rust\nDistributed fetcher.\n2023\n– Handles retries",
        );
        let projects = extract(&lines);
        assert_eq!(projects.len(), 1);
        assert_eq!(
            projects[0].description,
            "Distributed fetcher. Handles retries"
        );
    }
}
