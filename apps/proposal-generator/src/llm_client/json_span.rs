//! Locates a JSON object inside free-form model output.
//!
//! Models routinely wrap the requested object in prose ("Here is the data: {...}")
//! or code fences. These helpers never touch the network and are the only place
//! that decides what counts as "the JSON in this response".

use serde_json::Value;

use super::LlmError;

/// Returns the first balanced `{...}` span in `text`.
///
/// Braces inside JSON string literals (including escaped quotes) do not count
/// toward the balance. Returns `None` when there is no `{` or the first object
/// never closes.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=start + offset]);
                }
            }
            _ => {}
        }
    }

    None
}

/// Parses the first balanced JSON object embedded in `text`.
pub fn parse_json_object(text: &str) -> Result<Value, LlmError> {
    let span = extract_json_object(text).ok_or(LlmError::NoJsonObject)?;
    Ok(serde_json::from_str::<Value>(span)?)
}
