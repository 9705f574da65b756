//! Solas Core - scaffolding and maintenance for Solas Drupal sites
//!
//! The library scaffolds a new multi-language site from a template tree and
//! carries two auxiliary operations on existing projects: mounting a remote
//! environment's file share locally and listing unclean features.
//!
//! # Architecture
//!
//! - **Configuration** - `SiteConfig` answers, validators, and the collector
//!   that asks for them through a `Prompter`
//! - **Templates** - the pure token substitution engine, the language table
//!   builder, and the scaffolder that writes each unit
//! - **Drupal operations** - remote file mounts and feature status, run
//!   through the external process runner in `runtime`
//! - **TUI** - cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompts and interactive entry point
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use solas_core::templates::{scaffold, LanguageTable};
//!
//! let site: solas_core::SiteConfig = serde_yaml::from_str(&answers)?;
//! site.validate()?;
//! let table = LanguageTable::build(&site.languages);
//! scaffold(&site, &table, template_root, project_root).await?;
//! ```

pub mod config;
pub mod drupal;
pub mod project;
pub mod runtime;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::{Direction, Homepage, LanguageEntry, Prompter, SiteConfig};
pub use project::{LocalApplication, ProjectContext, SelectedProject};
pub use runtime::{ExternalCommand, ProcessError, DEFAULT_PROCESS_TIMEOUT};
pub use templates::{expand, LanguageTable, Scaffolder, TemplateLayout, TokenMap};

#[cfg(feature = "tui")]
pub use tui::run_new;

/// Upgrade command shown in template version warnings
pub const UPGRADE_COMMAND: &str = "cargo install solas-tools --force";
