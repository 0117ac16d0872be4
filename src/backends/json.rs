use anyhow::Result;

use super::{ThemeBackend, ThemeEntry};

/// Pretty-printed JSON: a single object for one image, an array otherwise.
pub struct JsonBackend;

impl ThemeBackend for JsonBackend {
    fn name(&self) -> &str {
        "JSON"
    }

    fn serialize(&self, entries: &[ThemeEntry]) -> Result<String> {
        let mut out = match entries {
            [single] => serde_json::to_string_pretty(single)?,
            _ => serde_json::to_string_pretty(entries)?,
        };
        out.push('\n');
        Ok(out)
    }
}
