//! Site configuration: data model, validation, collection and summary

pub mod collector;
pub mod site;
pub mod summary;
mod timezones;
pub mod validate;

pub use collector::{collect_answers, confirm_site, duplicate_language_warning, Prompter};
pub use site::{Direction, Homepage, LanguageEntry, SiteConfig};
pub use summary::render_summary;
pub use validate::ValidationError;
