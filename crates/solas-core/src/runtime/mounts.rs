//! Mount table lookup

use anyhow::{Context, Result};
use std::path::Path;

/// Kernel mount table on Linux
pub const PROC_MOUNTS: &str = "/proc/mounts";

/// Snapshot of the mount table, one entry per line
#[derive(Debug, Clone, Default)]
pub struct MountTable {
    lines: Vec<String>,
}

impl MountTable {
    pub fn parse(content: &str) -> Self {
        Self {
            lines: content.lines().map(str::to_string).collect(),
        }
    }

    pub async fn read(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read mount table {}", path.display()))?;
        Ok(Self::parse(&content))
    }

    /// Read the system mount table
    pub async fn system() -> Result<Self> {
        Self::read(Path::new(PROC_MOUNTS)).await
    }

    /// True when a mount's source is `<user>@...`
    ///
    /// Only the user part is compared, so `abc-main--site` never matches a
    /// mount of `abc-main--site2`.
    pub fn has_user_mount(&self, user: &str) -> bool {
        let prefix = format!("{}@", user);
        self.lines.iter().any(|line| {
            line.split_whitespace()
                .next()
                .is_some_and(|source| source.starts_with(&prefix))
        })
    }
}
