//! # Design Code Registry
//!
//! Lookup of display names by `(family, id)`, the operations a persisted
//! project needs to turn stored identifiers back into text.
//!
//! The free functions ([`full_name`], [`short_name`], [`list_variants`],
//! [`is_valid`]) use the shared default registry, which returns the
//! default (Latin) text. Build a [`DesignCodeRegistry`] with a locale to get
//! localized names.
//!
//! ## Sentinel
//!
//! Id 0 is the "no code selected" value of every family. It is valid, it
//! resolves to `"None"` for both names, and it is left out of
//! [`list_variants`] unless explicitly requested.
//!
//! ## Example
//!
//! ```rust
//! use codedef_core::codes::CodeFamily;
//! use codedef_core::registry::{self, DesignCodeRegistry};
//!
//! assert_eq!(registry::short_name(CodeFamily::Steel, 2).unwrap(), "AISC-LRFD93");
//! assert!(registry::is_valid(CodeFamily::Steel, 0));
//! assert!(!registry::is_valid(CodeFamily::Steel, -1));
//!
//! let ru = DesignCodeRegistry::new().with_locale("ru");
//! assert_eq!(ru.full_name(CodeFamily::Steel, 84).unwrap(), "СП 16.13330.2017");
//! assert_eq!(ru.full_name(CodeFamily::Steel, 2).unwrap(), "AISC-LRFD93");
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::codes::{CodeEntry, CodeFamily, DesignCode};
use crate::config::RegistryConfig;
use crate::errors::{CodeError, CodeResult};
use crate::locale::{normalize_locale, TextOverrides};

static GLOBAL: Lazy<DesignCodeRegistry> = Lazy::new(DesignCodeRegistry::new);

/// Owned, serializable view of one code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeDescription {
    pub family: CodeFamily,
    pub id: u16,
    /// Variant identifier, e.g. `"AiscLrfd93"`
    pub key: String,
    pub full_name: String,
    pub short_name: String,
}

/// Name lookup over every family, with optional locale overrides.
#[derive(Debug, Clone)]
pub struct DesignCodeRegistry {
    overrides: TextOverrides,
    locale: Option<String>,
}

impl Default for DesignCodeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl DesignCodeRegistry {
    /// Registry with the built-in locale data and no active locale
    pub fn new() -> Self {
        DesignCodeRegistry {
            overrides: TextOverrides::builtin().clone(),
            locale: None,
        }
    }

    /// Shared default registry
    pub fn global() -> &'static DesignCodeRegistry {
        &GLOBAL
    }

    /// Build from a deployment config: built-in text, then each override
    /// file in order, then the configured locale.
    pub fn from_config(config: &RegistryConfig) -> CodeResult<Self> {
        let mut registry = Self::new();
        for path in &config.override_files {
            let overrides = TextOverrides::load(path)?;
            registry.overrides.merge(&overrides);
        }
        if let Some(locale) = &config.locale {
            registry = registry.with_locale(locale);
        }
        tracing::debug!(
            locale = ?registry.locale,
            override_files = config.override_files.len(),
            overrides = registry.overrides.len(),
            "built design code registry"
        );
        Ok(registry)
    }

    /// Display names in `locale`; an empty tag clears the locale
    pub fn with_locale(mut self, locale: &str) -> Self {
        let locale = normalize_locale(locale);
        self.locale = if locale.is_empty() { None } else { Some(locale) };
        self
    }

    /// Layer extra overrides on top of the current ones
    pub fn with_overrides(mut self, overrides: &TextOverrides) -> Self {
        self.overrides.merge(overrides);
        self
    }

    /// Active locale tag (normalized)
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    pub fn overrides(&self) -> &TextOverrides {
        &self.overrides
    }

    /// True iff `id` is declared for `family` (id 0 included)
    pub fn is_valid(&self, family: CodeFamily, id: i64) -> bool {
        family.entry(id).is_some()
    }

    /// Table row for `(family, id)`
    pub fn entry(&self, family: CodeFamily, id: i64) -> CodeResult<&'static CodeEntry> {
        family
            .entry(id)
            .ok_or_else(|| CodeError::unknown_code(family, id))
    }

    /// Verbose name of a code, localized when an override exists
    pub fn full_name(&self, family: CodeFamily, id: i64) -> CodeResult<&str> {
        let entry = self.entry(family, id)?;
        Ok(self.text(family, entry).0)
    }

    /// Compact name of a code, localized when an override exists
    pub fn short_name(&self, family: CodeFamily, id: i64) -> CodeResult<&str> {
        let entry = self.entry(family, id)?;
        Ok(self.text(family, entry).1)
    }

    /// Short or full name depending on `prefer_short`
    pub fn display_name(&self, family: CodeFamily, id: i64, prefer_short: bool) -> CodeResult<&str> {
        if prefer_short {
            self.short_name(family, id)
        } else {
            self.full_name(family, id)
        }
    }

    /// `(id, short name)` pairs in declaration order.
    ///
    /// The `Unset` sentinel leads the list only when `include_unset` is set.
    pub fn list_variants(&self, family: CodeFamily, include_unset: bool) -> Vec<(u16, &str)> {
        family
            .entries()
            .iter()
            .filter(|entry| include_unset || !entry.is_unset())
            .map(|entry| (entry.id, self.text(family, entry).1))
            .collect()
    }

    /// Find a code by variant key, full name or short name.
    ///
    /// Matching ignores case and surrounding whitespace, and also considers
    /// the localized text of the active locale. The first match in
    /// declaration order wins.
    pub fn find(&self, family: CodeFamily, text: &str) -> Option<u16> {
        let needle = text.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        family
            .entries()
            .iter()
            .find(|entry| {
                let (full, short) = self.text(family, entry);
                [entry.key, entry.full, entry.short, full, short]
                    .iter()
                    .any(|candidate| candidate.to_lowercase() == needle)
            })
            .map(|entry| entry.id)
    }

    /// Resolve user input that is either a numeric id or a name
    pub fn resolve(&self, family: CodeFamily, text: &str) -> CodeResult<u16> {
        if let Ok(id) = text.trim().parse::<i64>() {
            return self.entry(family, id).map(|entry| entry.id);
        }
        self.find(family, text)
            .ok_or_else(|| CodeError::unknown_name(family, text.trim()))
    }

    /// Owned record of one code for reports and serialization
    pub fn describe(&self, family: CodeFamily, id: i64) -> CodeResult<CodeDescription> {
        let entry = self.entry(family, id)?;
        let (full, short) = self.text(family, entry);
        Ok(CodeDescription {
            family,
            id: entry.id,
            key: entry.key.to_string(),
            full_name: full.to_string(),
            short_name: short.to_string(),
        })
    }

    /// Full name of a typed code
    pub fn full_name_of<C: DesignCode>(&self, code: C) -> &str {
        self.text(C::FAMILY, code.entry()).0
    }

    /// Short name of a typed code
    pub fn short_name_of<C: DesignCode>(&self, code: C) -> &str {
        self.text(C::FAMILY, code.entry()).1
    }

    fn text<'a>(&'a self, family: CodeFamily, entry: &CodeEntry) -> (&'a str, &'a str) {
        if entry.is_unset() {
            return (entry.full, entry.short);
        }
        match self
            .locale
            .as_deref()
            .and_then(|locale| self.overrides.get(locale, family, entry.id))
        {
            Some(text) => (text.full.as_str(), text.short.as_str()),
            None => (entry.full, entry.short),
        }
    }
}

/// Full name from the default registry
pub fn full_name(family: CodeFamily, id: i64) -> CodeResult<&'static str> {
    DesignCodeRegistry::global().entry(family, id).map(|entry| entry.full)
}

/// Short name from the default registry
pub fn short_name(family: CodeFamily, id: i64) -> CodeResult<&'static str> {
    DesignCodeRegistry::global().entry(family, id).map(|entry| entry.short)
}

/// Selectable `(id, short name)` pairs in declaration order, without `Unset`
pub fn list_variants(family: CodeFamily) -> Vec<(u16, &'static str)> {
    family
        .entries()
        .iter()
        .filter(|entry| !entry.is_unset())
        .map(|entry| (entry.id, entry.short))
        .collect()
}

/// True iff `id` is declared for `family`
pub fn is_valid(family: CodeFamily, id: i64) -> bool {
    DesignCodeRegistry::global().is_valid(family, id)
}
