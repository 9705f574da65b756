//! Template expansion and site scaffolding
//!
//! This module provides:
//! - The literal token substitution engine
//! - The token vocabulary shared with the template tree
//! - Language table fragments for the region and deploy units
//! - The template layout (built-in or from `template.yaml`)
//! - The scaffolder that writes a new site tree
//! - Version compatibility checking for layout manifests

pub mod expand;
pub mod language_table;
pub mod layout;
pub mod scaffolder;
pub mod tokens;
pub mod version;

pub use expand::{expand, TokenMap};
pub use language_table::{DefaultLanguage, LanguageTable, FALLBACK_DIRECTION};
pub use layout::{PlatformFile, TemplateLayout, UnitKind, UnitLayout};
pub use scaffolder::{scaffold, Scaffolder};
pub use version::check_compatibility;
