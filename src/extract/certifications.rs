use crate::extract::lines::{is_bullet, is_new_section, strip_bullet};
use crate::models::Certification;

pub(crate) fn extract(lines: &[String]) -> Vec<Certification> {
    let mut certifications = Vec::new();
    let mut in_section = false;

    for line in lines {
        if line.to_lowercase().contains("certifications") {
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

        if is_bullet(line) {
            let cert_line = strip_bullet(line);
            match cert_line.split_once(':') {
                Some((name, description)) => certifications.push(Certification {
                    name: name.trim().to_string(),
                    description: Some(description.trim().to_string()),
                }),
                None => certifications.push(Certification {
                    name: cert_line.trim().to_string(),
                    description: None,
                }),
            }
        }
    }

    certifications
}
