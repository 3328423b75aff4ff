use std::collections::HashMap;
use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::consts::APP_NAME;
use crate::error::Unavailable;

const TABLE_FILE_NAME: &str = "prices.json";

/// Model identifier to display name, read from the optional side file
#[derive(Debug, Default)]
pub(crate) struct ModelTable {
    names: HashMap<String, String>,
}

impl ModelTable {
    /// Load the first side file found. Missing or malformed files give an empty table.
    pub(crate) fn load(explicit: Option<&Path>) -> Self {
        for path in candidate_paths(explicit) {
            if !path.exists() {
                continue;
            }
            match read_json(&path) {
                Some(raw) => {
                    let table = Self::from_json(&raw);
                    debug!(path = %path.display(), models = table.names.len(), "loaded model table");
                    return table;
                }
                None => {
                    debug!(path = %path.display(), "model table unreadable, ignoring");
                    return Self::default();
                }
            }
        }
        debug!("no model table found");
        Self::default()
    }

    /// Accepts the price-file layout (`{"models": {...}}`) or a bare id map.
    /// An entry without a usable `name` is listed under its own id; non-object
    /// entries are skipped.
    pub(crate) fn from_json(raw: &serde_json::Value) -> Self {
        let map = raw
            .get("models")
            .and_then(|m| m.as_object())
            .or_else(|| raw.as_object());

        let names = map
            .into_iter()
            .flatten()
            .filter_map(|(id, entry)| {
                let entry = entry.as_object()?;
                let name = match entry.get("name") {
                    Some(serde_json::Value::String(name)) => name.clone(),
                    Some(serde_json::Value::Number(n)) => n.to_string(),
                    _ => id.clone(),
                };
                Some((id.clone(), name))
            })
            .collect();

        Self { names }
    }

    /// Exact-identifier lookup
    pub(crate) fn display_name(&self, model_id: &str) -> Result<&str, Unavailable> {
        self.names
            .get(model_id)
            .map(String::as_str)
            .ok_or(Unavailable)
    }

    pub(crate) fn len(&self) -> usize {
        self.names.len()
    }
}

fn read_json(path: &Path) -> Option<serde_json::Value> {
    let file = File::open(path).ok()?;
    serde_json::from_reader(file).ok()
}

fn candidate_paths(explicit: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. --model-table / config `model_table`
    if let Some(path) = explicit {
        paths.push(path.to_path_buf());
    }

    // 2. Next to the installed binary
    if let Ok(exe) = std::env::current_exe()
        && let Some(dir) = exe.parent()
    {
        paths.push(dir.join(TABLE_FILE_NAME));
    }

    // 3. ~/.config/claude-statusline/prices.json (or the platform config dir)
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join(APP_NAME).join(TABLE_FILE_NAME));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_price_file_layout() {
        let raw = json!({
            "models": {
                "claude-opus-4-1-20250805": {"name": "Opus 4.1", "input": 15.0},
                "claude-sonnet-4-20250514": {"name": "Sonnet 4"}
            }
        });
        let table = ModelTable::from_json(&raw);
        assert_eq!(table.len(), 2);
        assert_eq!(table.display_name("claude-opus-4-1-20250805"), Ok("Opus 4.1"));
    }

    #[test]
    fn reads_bare_id_map() {
        let raw = json!({"gpt-5": {"name": "GPT-5"}});
        let table = ModelTable::from_json(&raw);
        assert_eq!(table.display_name("gpt-5"), Ok("GPT-5"));
    }

    #[test]
    fn entry_without_name_shows_its_id() {
        let raw = json!({"models": {"a": {"input": 1.0}, "b": {"name": 3}, "c": {"name": "C"}}});
        let table = ModelTable::from_json(&raw);
        assert_eq!(table.len(), 3);
        assert_eq!(table.display_name("a"), Ok("a"));
        assert_eq!(table.display_name("b"), Ok("3"));
        assert_eq!(table.display_name("c"), Ok("C"));
    }

    #[test]
    fn non_object_entries_are_skipped() {
        let raw = json!({"models": {"a": 15.0, "b": {"name": "B"}}});
        let table = ModelTable::from_json(&raw);
        assert_eq!(table.len(), 1);
        assert_eq!(table.display_name("a"), Err(Unavailable));
    }

    #[test]
    fn lookup_is_exact() {
        let raw = json!({"claude-opus-4": {"name": "Opus 4"}});
        let table = ModelTable::from_json(&raw);
        assert_eq!(table.display_name("CLAUDE-OPUS-4"), Err(Unavailable));
        assert_eq!(table.display_name("claude-opus-4-1"), Err(Unavailable));
    }

    #[test]
    fn load_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("names.json");
        std::fs::write(&path, r#"{"models":{"m1":{"name":"Model One"}}}"#).unwrap();

        let table = ModelTable::load(Some(&path));
        assert_eq!(table.display_name("m1"), Ok("Model One"));
    }

    #[test]
    fn malformed_file_gives_empty_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("names.json");
        std::fs::write(&path, "{ this is not json").unwrap();

        let table = ModelTable::load(Some(&path));
        assert_eq!(table.len(), 0);
    }

    #[test]
    fn explicit_path_is_searched_first() {
        let explicit = PathBuf::from("/tmp/explicit.json");
        let paths = candidate_paths(Some(&explicit));
        assert_eq!(paths.first(), Some(&explicit));
    }
}
