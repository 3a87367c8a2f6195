//! # Locale Overrides
//!
//! Replacement display text for individual codes, keyed by locale tag.
//! Overrides only ever change text; the numeric id of a code is fixed by
//! its family table.
//!
//! Built-in locale data ships inside the binary (`data/locales/*.toml`).
//! Deployments can layer their own files on top with the same format:
//!
//! ```toml
//! locale = "ru"
//!
//! [[entry]]
//! family = "steel"
//! code = "Sp16_13330_2017"     # variant key, or `id = 84`
//! full = "СП 16.13330.2017"
//! short = "СП16-2017"          # optional, defaults to `full`
//! ```
//!
//! ## Example
//!
//! ```rust
//! use codedef_core::codes::CodeFamily;
//! use codedef_core::locale::TextOverrides;
//!
//! let text = r#"
//! locale = "de"
//!
//! [[entry]]
//! family = "steel"
//! id = 4
//! full = "Eurocode 3 (DIN EN 1993)"
//! "#;
//!
//! let overrides = TextOverrides::from_toml_str("inline", text).unwrap();
//! let entry = overrides.get("de-AT", CodeFamily::Steel, 4).unwrap();
//! assert_eq!(entry.short, "Eurocode 3 (DIN EN 1993)");
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};

use crate::codes::CodeFamily;
use crate::errors::{CodeError, CodeResult};

#[derive(Embed)]
#[folder = "data/locales/"]
struct LocaleAssets;

// Embedded data ships with the crate and must always parse.
static BUILTIN: Lazy<TextOverrides> = Lazy::new(|| {
    let overrides = load_embedded().unwrap_or_else(|e| panic!("built-in locale data is invalid: {}", e));
    tracing::debug!(entries = overrides.len(), "loaded built-in locale data");
    overrides
});

/// Replacement full/short text for one code in one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub full: String,
    pub short: String,
}

/// Locale override table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextOverrides {
    by_locale: BTreeMap<String, HashMap<(CodeFamily, u16), LocalizedText>>,
}

/// On-disk form of an override file
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct OverrideFile {
    locale: String,
    #[serde(default, rename = "entry")]
    entries: Vec<OverrideEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct OverrideEntry {
    family: String,
    id: Option<u16>,
    code: Option<String>,
    full: String,
    short: Option<String>,
}

impl TextOverrides {
    /// Empty override table
    pub fn new() -> Self {
        Self::default()
    }

    /// Locale data compiled into the library
    pub fn builtin() -> &'static TextOverrides {
        &BUILTIN
    }

    /// Parse an override file.
    ///
    /// `source_name` is only used in error messages.
    pub fn from_toml_str(source_name: &str, text: &str) -> CodeResult<Self> {
        let file: OverrideFile = toml::from_str(text)
            .map_err(|e| CodeError::invalid_override(source_name, e.to_string()))?;

        let locale = normalize_locale(&file.locale);
        if locale.is_empty() {
            return Err(CodeError::invalid_override(source_name, "locale tag is empty"));
        }

        let mut overrides = TextOverrides::new();
        for (index, entry) in file.entries.into_iter().enumerate() {
            let family = CodeFamily::from_str_flexible(&entry.family).map_err(|e| {
                CodeError::invalid_override(source_name, format!("entry {}: {}", index + 1, e))
            })?;
            let id = resolve_entry_id(family, entry.id, entry.code.as_deref())
                .map_err(|reason| {
                    CodeError::invalid_override(source_name, format!("entry {}: {}", index + 1, reason))
                })?;
            let short = match entry.short {
                Some(short) => short,
                None => default_short(family, id, &entry.full),
            };
            let text = LocalizedText {
                short,
                full: entry.full,
            };
            overrides
                .insert_from(source_name, &locale, family, id, text)
                .map_err(|e| match e {
                    CodeError::InvalidOverride { reason, .. } => CodeError::invalid_override(
                        source_name,
                        format!("entry {}: {}", index + 1, reason),
                    ),
                    other => other,
                })?;
        }

        Ok(overrides)
    }

    /// Load an override file from disk
    pub fn load(path: &Path) -> CodeResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            CodeError::file_error("read overrides", path.display().to_string(), e.to_string())
        })?;
        let overrides = Self::from_toml_str(&path.display().to_string(), &text)?;
        tracing::debug!(path = %path.display(), entries = overrides.len(), "loaded locale overrides");
        Ok(overrides)
    }

    /// Add or replace the text of one code.
    ///
    /// Returns the text that was replaced, if any.
    pub fn insert(
        &mut self,
        locale: &str,
        family: CodeFamily,
        id: u16,
        text: LocalizedText,
    ) -> CodeResult<Option<LocalizedText>> {
        self.insert_from("insert", locale, family, id, text)
    }

    fn insert_from(
        &mut self,
        source_name: &str,
        locale: &str,
        family: CodeFamily,
        id: u16,
        text: LocalizedText,
    ) -> CodeResult<Option<LocalizedText>> {
        let locale = normalize_locale(locale);
        if locale.is_empty() {
            return Err(CodeError::invalid_override(source_name, "locale tag is empty"));
        }
        if id == 0 {
            return Err(CodeError::invalid_override(
                source_name,
                format!("{} id 0 is the unset sentinel and cannot be renamed", family),
            ));
        }
        if family.entry(i64::from(id)).is_none() {
            return Err(CodeError::invalid_override(
                source_name,
                format!("{} has no code with id {}", family, id),
            ));
        }
        if text.full.trim().is_empty() || text.short.trim().is_empty() {
            return Err(CodeError::invalid_override(
                source_name,
                format!("{} id {} has an empty name", family, id),
            ));
        }

        Ok(self
            .by_locale
            .entry(locale)
            .or_default()
            .insert((family, id), text))
    }

    /// Layer `other` on top of this table; entries in `other` win.
    pub fn merge(&mut self, other: &TextOverrides) {
        for (locale, entries) in &other.by_locale {
            let target = self.by_locale.entry(locale.clone()).or_default();
            for (&(family, id), text) in entries {
                if let Some(previous) = target.insert((family, id), text.clone()) {
                    if previous != *text {
                        tracing::warn!(
                            locale = %locale,
                            family = family.key(),
                            id,
                            replaced = %previous.full,
                            "locale override replaced earlier text"
                        );
                    }
                }
            }
        }
    }

    /// Text for a code in `locale`.
    ///
    /// Tries the exact tag first, then its primary subtag
    /// (`"ru-RU"` falls back to `"ru"`).
    pub fn get(&self, locale: &str, family: CodeFamily, id: u16) -> Option<&LocalizedText> {
        let locale = normalize_locale(locale);
        let exact = self
            .by_locale
            .get(&locale)
            .and_then(|entries| entries.get(&(family, id)));
        if exact.is_some() {
            return exact;
        }
        let primary = locale.split('-').next()?;
        if primary == locale {
            return None;
        }
        self.by_locale
            .get(primary)
            .and_then(|entries| entries.get(&(family, id)))
    }

    /// All overrides for `locale` and `family`, sorted by id
    pub fn entries_for(&self, locale: &str, family: CodeFamily) -> Vec<(u16, &LocalizedText)> {
        let mut entries: Vec<_> = family
            .entries()
            .iter()
            .filter_map(|entry| self.get(locale, family, entry.id).map(|text| (entry.id, text)))
            .collect();
        entries.sort_by_key(|(id, _)| *id);
        entries
    }

    /// Total number of overridden codes across all locales
    pub fn len(&self) -> usize {
        self.by_locale.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Locale tags with at least one override
    pub fn locales(&self) -> Vec<&str> {
        self.by_locale
            .iter()
            .filter(|(_, entries)| !entries.is_empty())
            .map(|(locale, _)| locale.as_str())
            .collect()
    }
}

/// Lowercase a locale tag and use `-` as the subtag separator
pub fn normalize_locale(tag: &str) -> String {
    tag.trim().to_lowercase().replace('_', "-")
}

fn resolve_entry_id(family: CodeFamily, id: Option<u16>, code: Option<&str>) -> Result<u16, String> {
    match (id, code) {
        (None, None) => Err("either `id` or `code` is required".to_string()),
        (Some(id), None) => Ok(id),
        (None, Some(key)) => family
            .entries()
            .iter()
            .find(|entry| !entry.is_unset() && entry.key.eq_ignore_ascii_case(key))
            .map(|entry| entry.id)
            .ok_or_else(|| format!("{} has no code '{}'", family, key)),
        (Some(id), Some(key)) => match family.entry(i64::from(id)) {
            Some(entry) if entry.key.eq_ignore_ascii_case(key) => Ok(id),
            Some(entry) => Err(format!(
                "id {} is '{}' in {}, not '{}'",
                id, entry.key, family, key
            )),
            None => Err(format!("{} has no code with id {}", family, id)),
        },
    }
}

/// Short text for an override that only names `full`.
///
/// Codes published with a single name take the new full text as their short
/// name too; codes with a distinct short name keep it.
fn default_short(family: CodeFamily, id: u16, full: &str) -> String {
    match family.entry(i64::from(id)) {
        Some(code) if code.short != code.full => code.short.to_string(),
        _ => full.to_string(),
    }
}

fn load_embedded() -> CodeResult<TextOverrides> {
    let mut names: Vec<_> = LocaleAssets::iter()
        .filter(|name| name.ends_with(".toml"))
        .collect();
    names.sort();

    let files = names.into_iter().filter_map(|name| {
        LocaleAssets::get(&name).map(|file| (name.to_string(), file.data.into_owned()))
    });
    parse_locale_files(files)
}

/// Parse and merge `(name, bytes)` locale files in order
fn parse_locale_files(files: impl IntoIterator<Item = (String, Vec<u8>)>) -> CodeResult<TextOverrides> {
    let mut overrides = TextOverrides::new();
    for (name, data) in files {
        let text = std::str::from_utf8(&data)
            .map_err(|e| CodeError::invalid_override(name.as_str(), e.to_string()))?;
        overrides.merge(&TextOverrides::from_toml_str(&name, text)?);
    }
    Ok(overrides)
}
