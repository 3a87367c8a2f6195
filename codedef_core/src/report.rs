//! Markdown reference of every family table.
//!
//! `cargo run --bin gen-codes` writes the output to
//! `codedef_core/DESIGN_CODES.md`.

use crate::codes::CodeFamily;
use crate::registry::DesignCodeRegistry;

/// Render every family as a markdown table (id, key, full name, short name).
///
/// Names come from `registry`, so a registry with a locale produces a
/// localized reference.
///
/// # Example
///
/// ```rust
/// use codedef_core::registry::DesignCodeRegistry;
/// use codedef_core::report::generate_codes_markdown;
///
/// let markdown = generate_codes_markdown(DesignCodeRegistry::global());
/// assert!(markdown.contains("Design Code Reference"));
/// assert!(markdown.contains("| 2 | `AiscLrfd93` | AISC-LRFD93 | AISC-LRFD93 |"));
/// ```
pub fn generate_codes_markdown(registry: &DesignCodeRegistry) -> String {
    let mut output = String::with_capacity(64_000);

    output.push_str(
        r#"# Design Code Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-codes`

Every family reserves id 0 for "no code selected". Ids are stored in project
files and never change; new codes are only ever appended.

"#,
    );

    if let Some(locale) = registry.locale() {
        output.push_str(&format!("Names shown for locale `{}`.\n\n", locale));
    }

    output.push_str("| Family | Key | Codes |\n");
    output.push_str("|--------|-----|-------|\n");
    for family in CodeFamily::ALL {
        output.push_str(&format!(
            "| [{}](#{}) | `{}` | {} |\n",
            family.display_name(),
            anchor(family.display_name()),
            family.key(),
            family.variant_count()
        ));
    }
    output.push_str("\n---\n\n");

    for family in CodeFamily::ALL {
        output.push_str(&format!("## {}\n\n", family.display_name()));
        output.push_str("| Id | Key | Full name | Short name |\n");
        output.push_str("|----|-----|-----------|------------|\n");

        for entry in family.entries().iter().filter(|entry| !entry.is_unset()) {
            let id = i64::from(entry.id);
            let full = registry.full_name(family, id).unwrap_or(entry.full);
            let short = registry.short_name(family, id).unwrap_or(entry.short);
            output.push_str(&format!(
                "| {} | `{}` | {} | {} |\n",
                entry.id,
                entry.key,
                escape(full),
                escape(short)
            ));
        }
        output.push('\n');
    }

    output
}

/// GitHub-style heading anchor
fn anchor(heading: &str) -> String {
    heading
        .to_lowercase()
        .chars()
        .filter_map(|c| match c {
            ' ' => Some('-'),
            c if c.is_alphanumeric() || c == '-' => Some(c),
            _ => None,
        })
        .collect()
}

fn escape(text: &str) -> String {
    text.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_codes_markdown() {
        let markdown = generate_codes_markdown(DesignCodeRegistry::global());

        assert!(markdown.contains("# Design Code Reference"), "Missing title");
        assert!(markdown.contains("Auto-generated from source code"), "Missing auto-gen notice");

        for family in CodeFamily::ALL {
            assert!(
                markdown.contains(&format!("## {}\n", family.display_name())),
                "Missing section for {}",
                family
            );
        }

        assert!(markdown.contains("| 1 | `Ssrc79` | SSRC79 | SSRC79 |"));
        assert!(markdown.contains("| 33 | `UserType` | User Type | USER TYPE |"));
        assert!(!markdown.contains("`Unset`"), "Sentinel should not be listed");
    }

    #[test]
    fn test_localized_markdown() {
        let registry = DesignCodeRegistry::new().with_locale("ru");
        let markdown = generate_codes_markdown(&registry);
        assert!(markdown.contains("Names shown for locale `ru`."));
        assert!(markdown.contains("| 84 | `Sp16_13330_2017` | СП 16.13330.2017 | СП 16.13330.2017 |"));
    }

    #[test]
    fn test_anchor() {
        assert_eq!(anchor("Steel-Reinforced Concrete"), "steel-reinforced-concrete");
        assert_eq!(anchor("PSC Rating"), "psc-rating");
    }
}
