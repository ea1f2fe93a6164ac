use crate::error::{Error, Result};
use crate::models::ResumeRecord;

/// Pull a resume record out of a chat-model reply. Models wrap the JSON in
/// markdown fences or surrounding prose often enough that we cannot feed the
/// reply to serde directly.
pub fn parse_record_response(response: &str) -> Result<ResumeRecord> {
    let json = extract_json(response)
        .ok_or_else(|| Error::ParseError("No JSON object found in LLM response".to_string()))?;

    serde_json::from_str(json)
        .map_err(|e| Error::ParseError(format!("LLM response is not a resume record: {e}")))
}

fn extract_json(text: &str) -> Option<&str> {
    if let Some(inner) = fenced_block(text, "```json").or_else(|| fenced_block(text, "```")) {
        if let Some(object) = balanced_object(inner) {
            return Some(object);
        }
    }

    balanced_object(text)
}

fn fenced_block<'a>(text: &'a str, fence: &str) -> Option<&'a str> {
    let start = text.find(fence)? + fence.len();
    let body = &text[start..];
    let end = body.find("```")?;
    Some(&body[..end])
}

/// First balanced `{...}` in the text, tracking string literals and escapes.
fn balanced_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text[start..].char_indices() {
        if escaped {
            escaped = false;
            continue;
        }

        match c {
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + i + 1]);
                }
            }
            _ => {}
        }
    }

    None
}
