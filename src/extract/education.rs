use once_cell::sync::Lazy;
use regex::Regex;

use crate::extract::lines::{is_new_section, parse_date_range};
use crate::models::EducationEntry;

static DEGREE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(Bachelor|Master|PhD|BSc|MSc|BA|MA|BCA|MCA|B\.Tech|M\.Tech)").unwrap()
});

pub(crate) fn extract(lines: &[String]) -> Vec<EducationEntry> {
    let mut education = Vec::new();
    let mut current = EducationEntry::default();
    let mut in_section = false;

    for line in lines {
        if line.to_lowercase().contains("education") {
            in_section = true;
            continue;
        }

        if !in_section || line.is_empty() {
            continue;
        }

        if is_new_section(line) {
            if !current.is_empty() {
                education.push(std::mem::take(&mut current));
            }
            in_section = false;
            continue;
        }

        // A degree-pattern line starts a new entry with the full line
        if DEGREE_RE.is_match(line) {
            if !current.is_empty() {
                education.push(std::mem::take(&mut current));
            }
            current.degree = line.clone();
            continue;
        }

        if let Some(range) = parse_date_range(line) {
            if current.start_date.is_empty() {
                current.start_date = range.start;
                current.end_date = range.end;
            }
        } else if current.institution.is_empty() && !starts_with_digit(line) {
            current.institution = line.clone();
        }
    }

    if !current.is_empty() {
        education.push(current);
    }

    education
}

fn starts_with_digit(line: &str) -> bool {
    line.chars().next().map(|c| c.is_ascii_digit()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::lines::split_lines;

    #[test]
    fn test_degree_institution_dates() {
        let lines = split_lines("Education\nBachelor of Science\nState University\n2015 - 2019");
        let education = extract(&lines);
        assert_eq!(education.len(), 1);
        assert_eq!(education[0].degree, "Bachelor of Science");
        assert_eq!(education[0].institution, "State University");
        assert_eq!(education[0].start_date, "2015");
        assert_eq!(education[0].end_date, "2019");
    }

    #[test]
    fn test_dates_before_institution() {
        let lines = split_lines("Education\nMaster of Engineering\n2019 - 2021\nTech Institute");
        let education = extract(&lines);
        assert_eq!(education.len(), 1);
        assert_eq!(education[0].institution, "Tech Institute");
        assert_eq!(education[0].start_date, "2019");
    }

    #[test]
    fn test_second_degree_closes_entry() {
        let lines = split_lines(
            "Education\nBachelor of Science\nState University\n2011 - 2015\nMSc Computer Science\nOther University\n2015 - 2017",
        );
        let education = extract(&lines);
        assert_eq!(education.len(), 2);
        assert_eq!(education[0].degree, "Bachelor of Science");
        assert_eq!(education[1].degree, "MSc Computer Science");
        assert_eq!(education[1].institution, "Other University");
    }

    #[test]
    fn test_section_exit_pushes_entry() {
        let lines = split_lines("Education\nB.Tech in Computer Science\nSkills\n• Rust");
        let education = extract(&lines);
        assert_eq!(education.len(), 1);
        assert_eq!(education[0].degree, "B.Tech in Computer Science");
    }

    #[test]
    fn test_no_heading_yields_nothing() {
        let education = extract(&split_lines("Bachelor of Science\nState University"));
        assert!(education.is_empty());
    }
}
