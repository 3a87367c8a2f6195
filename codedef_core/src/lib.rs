//! # codedef_core - Structural Design Code Registry
//!
//! `codedef_core` names the design code standards a structural analysis
//! project can be set to: steel, concrete, cold-formed steel, SRC, bridge
//! girder and rating codes, wind and seismic load codes, and material
//! standards. Every code has a stable numeric id, a full display name and a
//! short display name.
//!
//! ## Design Philosophy
//!
//! - **Stable ids**: Ids are persisted in project files; tables only grow at the end
//! - **Typed and untyped access**: Enums per family, plus `(family, id)` lookups
//! - **JSON-First**: Settings and descriptions implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use codedef_core::{CodeFamily, DesignCodeRegistry};
//! use codedef_core::codes::SrcCode;
//!
//! let registry = DesignCodeRegistry::global();
//!
//! assert_eq!(registry.short_name(CodeFamily::Steel, 2).unwrap(), "AISC-LRFD93");
//! assert!(registry.is_valid(CodeFamily::Steel, 0));
//!
//! let first = registry.list_variants(CodeFamily::SteelReinforcedConcrete, false)[0];
//! assert_eq!(first, (SrcCode::Ssrc79.id(), "SSRC79"));
//! ```
//!
//! ## Modules
//!
//! - [`codes`] - Code families and their tables
//! - [`registry`] - Name lookup by `(family, id)`
//! - [`locale`] - Localized display text
//! - [`settings`] - Persisted code selections
//! - [`config`] - Registry configuration
//! - [`file_io`] - Settings files with atomic saves
//! - [`report`] - Markdown reference generation
//! - [`errors`] - Structured error types

pub mod codes;
pub mod config;
pub mod errors;
pub mod file_io;
pub mod locale;
pub mod registry;
pub mod report;
pub mod settings;

// Re-export commonly used types at crate root for convenience
pub use codes::{CodeEntry, CodeFamily, DesignCode};
pub use config::RegistryConfig;
pub use errors::{CodeError, CodeResult};
pub use file_io::{load_settings, save_settings};
pub use locale::{LocalizedText, TextOverrides};
pub use registry::{CodeDescription, DesignCodeRegistry};
pub use settings::CodeSettings;
