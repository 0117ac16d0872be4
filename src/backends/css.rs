use std::fmt::Write;

use anyhow::Result;

use super::{ThemeBackend, ThemeEntry};

/// CSS custom properties, one rule per image keyed by `data-image`.
pub struct CssBackend;

impl ThemeBackend for CssBackend {
    fn name(&self) -> &str {
        "CSS"
    }

    fn serialize(&self, entries: &[ThemeEntry]) -> Result<String> {
        let mut out = String::new();
        for (i, entry) in entries.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let p = &entry.palette;
            writeln!(out, "[data-image=\"{}\"] {{", escape(&entry.name))?;
            writeln!(out, "  --primary: {};", p.primary)?;
            writeln!(out, "  --secondary: {};", p.secondary)?;
            writeln!(out, "  --background: {};", p.background)?;
            writeln!(out, "  --surface: {};", p.surface)?;
            writeln!(out, "  --text: {};", p.text)?;
            writeln!(out, "  --text-secondary: {};", p.text_secondary)?;
            writeln!(out, "  --accent: {};", p.accent)?;
            let scheme = if p.is_dark { "dark" } else { "light" };
            writeln!(out, "  color-scheme: {scheme};")?;
            out.push_str("}\n");
        }
        Ok(out)
    }
}

/// Escape a value for use inside a double-quoted CSS string.
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            '\n' => out.push_str("\\a "),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ColorPalette;

    fn entry(name: &str) -> ThemeEntry {
        ThemeEntry {
            name: name.to_string(),
            palette: ColorPalette::DEFAULT,
        }
    }

    #[test]
    fn contains_all_custom_properties() {
        let out = CssBackend.serialize(&[entry("sunset")]).unwrap();
        for key in [
            "--primary: #8b5cf6;",
            "--secondary: #3b82f6;",
            "--background: #0f172a;",
            "--surface: #1e293b;",
            "--text: #f8fafc;",
            "--text-secondary: #cbd5e1;",
            "--accent: #ec4899;",
            "color-scheme: dark;",
        ] {
            assert!(out.contains(key), "missing '{key}' in:\n{out}");
        }
    }

    #[test]
    fn selector_embeds_image_name() {
        let out = CssBackend.serialize(&[entry("my-photo")]).unwrap();
        assert!(out.starts_with("[data-image=\"my-photo\"] {\n"));
        assert!(out.ends_with("}\n"));
    }

    #[test]
    fn one_rule_per_entry() {
        let out = CssBackend.serialize(&[entry("a"), entry("b")]).unwrap();
        assert_eq!(out.matches("[data-image=").count(), 2);
        assert!(out.contains("}\n\n[data-image=\"b\"]"));
    }

    #[test]
    fn quotes_in_names_are_escaped() {
        assert_eq!(escape(r#"a"b\c"#), r#"a\"b\\c"#);
    }
}
