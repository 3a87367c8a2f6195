//! # Code Settings
//!
//! The design codes a project has selected, one id per family, plus how
//! their names should be displayed. This is the part of a project file that
//! stores code identifiers, so it only ever holds the stable numeric ids.
//!
//! ## Structure
//!
//! ```text
//! CodeSettings
//! ├── version, created, modified
//! ├── display: DisplaySettings (locale, prefer_short_names)
//! └── selections: BTreeMap<CodeFamily, u16>
//! ```
//!
//! ## Example
//!
//! ```rust
//! use codedef_core::codes::{CodeFamily, SteelCode, ConcreteCode};
//! use codedef_core::settings::CodeSettings;
//!
//! let mut settings = CodeSettings::new();
//! settings.select_code(SteelCode::AiscLrfd10);
//! settings.select(CodeFamily::Concrete, 1).unwrap();
//!
//! assert_eq!(settings.selected::<SteelCode>(), SteelCode::AiscLrfd10);
//! assert_eq!(settings.selected::<ConcreteCode>(), ConcreteCode::Aci318_89);
//!
//! // Families never configured read back as Unset
//! assert!(settings.selected_id(CodeFamily::Aluminum) == 0);
//!
//! // Stored as `"steel": 50`
//! let json = serde_json::to_string(&settings).unwrap();
//! assert!(json.contains("\"steel\":50"));
//! ```

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::codes::{CodeFamily, DesignCode};
use crate::errors::{CodeError, CodeResult};
use crate::registry::{CodeDescription, DesignCodeRegistry};

/// Current schema version for settings files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Persisted design code selections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeSettings {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// When the settings were created
    pub created: DateTime<Utc>,

    /// When the settings were last modified
    pub modified: DateTime<Utc>,

    /// How code names are shown
    #[serde(default)]
    pub display: DisplaySettings,

    /// Selected code id per family; absent means Unset
    #[serde(default)]
    pub selections: BTreeMap<CodeFamily, u16>,
}

/// Display preferences for code names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Locale tag for localized names (e.g. "ru")
    pub locale: Option<String>,

    /// Show short names instead of full names
    pub prefer_short_names: bool,
}

impl CodeSettings {
    /// Create settings with no code selected
    pub fn new() -> Self {
        let now = Utc::now();
        CodeSettings {
            version: SCHEMA_VERSION.to_string(),
            created: now,
            modified: now,
            display: DisplaySettings::default(),
            selections: BTreeMap::new(),
        }
    }

    /// Select a code by id. Selecting 0 clears the family.
    pub fn select(&mut self, family: CodeFamily, id: i64) -> CodeResult<()> {
        let entry = family
            .entry(id)
            .ok_or_else(|| CodeError::unknown_code(family, id))?;
        if entry.is_unset() {
            self.selections.remove(&family);
        } else {
            self.selections.insert(family, entry.id);
        }
        self.touch();
        Ok(())
    }

    /// Select a typed code
    pub fn select_code<C: DesignCode>(&mut self, code: C) {
        if code.id() == 0 {
            self.selections.remove(&C::FAMILY);
        } else {
            self.selections.insert(C::FAMILY, code.id());
        }
        self.touch();
    }

    /// Remove the selection for a family, returning the old id
    pub fn clear(&mut self, family: CodeFamily) -> Option<u16> {
        let removed = self.selections.remove(&family);
        if removed.is_some() {
            self.touch();
        }
        removed
    }

    /// Selected id for a family, 0 when none
    pub fn selected_id(&self, family: CodeFamily) -> u16 {
        self.selections.get(&family).copied().unwrap_or(0)
    }

    /// Selected code as its typed enum, `Unset` when none
    pub fn selected<C: DesignCode>(&self) -> C {
        C::from_id(self.selected_id(C::FAMILY)).unwrap_or(C::UNSET)
    }

    /// Check every stored id against its family table
    pub fn validate(&self) -> CodeResult<()> {
        for (&family, &id) in &self.selections {
            if family.entry(i64::from(id)).is_none() {
                return Err(CodeError::unknown_code(family, i64::from(id)));
            }
        }
        Ok(())
    }

    /// Describe every selected code, in family order
    pub fn resolve(&self, registry: &DesignCodeRegistry) -> CodeResult<Vec<CodeDescription>> {
        self.selections
            .iter()
            .map(|(&family, &id)| registry.describe(family, i64::from(id)))
            .collect()
    }

    /// Name of the selected code, short or full per the display settings
    pub fn display_name<'a>(&self, registry: &'a DesignCodeRegistry, family: CodeFamily) -> CodeResult<&'a str> {
        registry.display_name(
            family,
            i64::from(self.selected_id(family)),
            self.display.prefer_short_names,
        )
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.modified = Utc::now();
    }
}

impl Default for CodeSettings {
    fn default() -> Self {
        CodeSettings::new()
    }
}
