use crate::consts::UNKNOWN;

use super::table::ModelTable;

/// Family keywords checked in order when the side table has no entry
const FAMILIES: [(&str, &str); 3] = [("opus", "Opus"), ("sonnet", "Sonnet"), ("haiku", "Haiku")];

const VENDOR_PREFIX: &str = "claude-";
const FALLBACK_WIDTH: usize = 8;

/// Short label for the model segment.
///
/// Precedence: missing/sentinel -> "Unknown", exact side-table entry,
/// family keyword, then a trimmed title-cased first word.
pub(crate) fn resolve_label(model: Option<&str>, table: &ModelTable) -> String {
    let Some(model) = model.filter(|m| !m.is_empty() && *m != UNKNOWN) else {
        return UNKNOWN.to_string();
    };

    if let Ok(name) = table.display_name(model) {
        return name.to_string();
    }

    let model_lower = model.to_lowercase();
    if let Some((_, label)) = FAMILIES
        .iter()
        .find(|(keyword, _)| model_lower.contains(keyword))
    {
        return (*label).to_string();
    }

    fallback_label(model)
}

fn fallback_label(model: &str) -> String {
    let stripped = model.replace(VENDOR_PREFIX, "");
    let first: String = stripped
        .split('-')
        .next()
        .unwrap_or_default()
        .chars()
        .take(FALLBACK_WIDTH)
        .collect();
    if first.is_empty() {
        return UNKNOWN.to_string();
    }
    title_case(&first)
}

/// Upper-case every letter that starts a run of letters, lower-case the rest ("gpt4o" -> "Gpt4O")
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn empty() -> ModelTable {
        ModelTable::default()
    }

    #[test]
    fn missing_and_sentinel_are_unknown() {
        assert_eq!(resolve_label(None, &empty()), "Unknown");
        assert_eq!(resolve_label(Some(""), &empty()), "Unknown");
        assert_eq!(resolve_label(Some("Unknown"), &empty()), "Unknown");
    }

    #[test]
    fn side_table_wins_over_family_keyword() {
        let table = ModelTable::from_json(&json!({
            "models": {"claude-sonnet-4-20250514": {"name": "Sonnet 4"}}
        }));
        assert_eq!(
            resolve_label(Some("claude-sonnet-4-20250514"), &table),
            "Sonnet 4"
        );
    }

    #[test]
    fn nameless_table_entry_beats_family_keyword() {
        let table = ModelTable::from_json(&json!({
            "models": {"claude-opus-4-custom": {"input": 15.0}}
        }));
        assert_eq!(
            resolve_label(Some("claude-opus-4-custom"), &table),
            "claude-opus-4-custom"
        );
    }

    #[test]
    fn family_keywords_are_case_insensitive() {
        assert_eq!(resolve_label(Some("claude-sonnet-4-20250514"), &empty()), "Sonnet");
        assert_eq!(resolve_label(Some("Claude-OPUS-4-1"), &empty()), "Opus");
        assert_eq!(resolve_label(Some("claude-3-5-haiku"), &empty()), "Haiku");
    }

    #[test]
    fn first_family_in_list_order_wins() {
        assert_eq!(resolve_label(Some("haiku-opus-blend"), &empty()), "Opus");
    }

    #[test]
    fn generic_fallback_strips_prefix_and_truncates() {
        assert_eq!(resolve_label(Some("claude-instant-1"), &empty()), "Instant");
        assert_eq!(resolve_label(Some("gpt-5-codex"), &empty()), "Gpt");
        assert_eq!(resolve_label(Some("mistralextralarge-2"), &empty()), "Mistrale");
        assert_eq!(resolve_label(Some("gpt4o"), &empty()), "Gpt4O");
    }

    #[test]
    fn generic_fallback_never_yields_empty_label() {
        assert_eq!(resolve_label(Some("claude-"), &empty()), "Unknown");
        assert_eq!(resolve_label(Some("-x"), &empty()), "Unknown");
    }

    #[test]
    fn title_case_lowers_inner_letters() {
        assert_eq!(title_case("LLAMA"), "Llama");
        assert_eq!(title_case("o3"), "O3");
    }
}
