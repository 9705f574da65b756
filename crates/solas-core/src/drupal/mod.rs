//! Operations against a project's Drupal applications

pub mod features;
pub mod mount;

pub use features::{filter_unclean, report_unclean_features, unclean_features};
pub use mount::{mount_app, mount_files, MountOutcome};
