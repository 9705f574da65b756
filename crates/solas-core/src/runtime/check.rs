//! Detection of the external tools the Drupal commands shell out to

use std::process::Command;

/// Tool detection result
#[derive(Debug, Clone)]
pub struct ToolInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

/// Check whether `name` answers `version_arg` successfully
pub fn check_tool(name: &'static str, version_arg: &str) -> ToolInfo {
    let output = Command::new(name).arg(version_arg).output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout)
                .lines()
                .next()
                .unwrap_or_default()
                .trim()
                .to_string();
            ToolInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => ToolInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Check that sshfs is available for mounting remote files
pub fn check_sshfs() -> ToolInfo {
    check_tool("sshfs", "--version")
}

/// Check that drush is available for feature status reports
pub fn check_drush() -> ToolInfo {
    check_tool("drush", "--version")
}
