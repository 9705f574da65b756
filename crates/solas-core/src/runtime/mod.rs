//! External tools: detection, process execution and mount state

pub mod check;
pub mod mounts;
pub mod tool;

pub use check::{check_drush, check_sshfs, check_tool, ToolInfo};
pub use mounts::MountTable;
pub use tool::{ExternalCommand, ProcessError, ProcessOutput, DEFAULT_PROCESS_TIMEOUT};
