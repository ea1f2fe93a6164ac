use crate::extract::lines::{is_bullet, is_new_section, strip_bullet};
use crate::models::SkillGroup;

pub(crate) fn extract(lines: &[String]) -> Vec<SkillGroup> {
    let mut skills: Vec<SkillGroup> = Vec::new();
    let mut current_category = String::new();
    let mut in_section = false;

    for line in lines {
        let lower = line.to_lowercase();
        if lower.contains("skills") && !lower.contains("soft") {
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

        // `Label:` lines name the category for the bullets that follow
        if let Some(label) = line.strip_suffix(':') {
            current_category = label.trim().to_string();
            continue;
        }

        if is_bullet(line) {
            let skill_line = strip_bullet(line);
            let category = if current_category.is_empty() {
                "General"
            } else {
                current_category.as_str()
            };

            let index = match skills.iter().position(|group| group.category == category) {
                Some(index) => index,
                None => {
                    skills.push(SkillGroup {
                        category: category.to_string(),
                        items: Vec::new(),
                    });
                    skills.len() - 1
                }
            };

            skills[index].items.extend(
                skill_line
                    .split(|c| c == ',' || c == ';')
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .map(String::from),
            );
        }
    }

    skills
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::lines::split_lines;

    #[test]
    fn test_category_groups_items() {
        let lines = split_lines("Skills\nLanguages:\n• Go, Rust, TypeScript");
        let skills = extract(&lines);
        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].category, "Languages");
        assert_eq!(skills[0].items, vec!["Go", "Rust", "TypeScript"]);
    }

    #[test]
    fn test_uncategorized_bullets_fall_into_general() {
        let lines = split_lines("Skills\n• Docker; Kubernetes");
        let skills = extract(&lines);
        assert_eq!(skills[0].category, "General");
        assert_eq!(skills[0].items, vec!["Docker", "Kubernetes"]);
    }

    #[test]
    fn test_items_accumulate_per_category_in_order() {
        let lines = split_lines(
            "Skills\nLanguages:\n• Go\nTools:\n• Docker\nLanguages:\n• Rust",
        );
        let skills = extract(&lines);
        assert_eq!(skills.len(), 2);
        assert_eq!(skills[0].category, "Languages");
        assert_eq!(skills[0].items, vec!["Go", "Rust"]);
        assert_eq!(skills[1].category, "Tools");
        assert_eq!(skills[1].items, vec!["Docker"]);
    }

    #[test]
    fn test_soft_skills_heading_does_not_open_section() {
        let skills = extract(&split_lines("Soft Skills\n• Communication"));
        assert!(skills.is_empty());
    }

    #[test]
    fn test_next_section_terminates_scan() {
        let lines = split_lines("Skills\n• Rust\nProjects\nSite | React");
        let skills = extract(&lines);
        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].items, vec!["Rust"]);
    }
}
