//! Mount an environment's remote file share into the local checkout via SSHFS

use crate::project::{LocalApplication, ProjectContext};
use crate::runtime::{ExternalCommand, MountTable};
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Options passed to every sshfs mount
const SSHFS_OPTIONS: &[&str] = &[
    "allow_other",
    "workaround=all",
    "nonempty",
    "reconnect",
    "umask=0000",
];

/// Result of mounting one application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountOutcome {
    AlreadyMounted,
    Mounted,
}

/// SSH identity of an application in an environment: `<project>-<env>--<app>`
pub fn mount_id(project_id: &str, environment: &str, app_id: &str) -> String {
    format!("{}-{}--{}", project_id, environment, app_id)
}

/// Local directory the application's files are mounted on
pub fn local_mount_point(project_root: &Path, app_id: &str) -> PathBuf {
    project_root
        .join(".platform/local/shared")
        .join(app_id)
        .join("files")
}

/// Build the sshfs command for one application
pub fn sshfs_command<P: ProjectContext>(
    project: &P,
    environment: &str,
    app: &LocalApplication,
    timeout: Duration,
) -> ExternalCommand {
    let id = mount_id(project.id(), environment, &app.id);
    let remote = format!(
        "{}@ssh.{}.platform.sh:/app/{}/sites/default/files",
        id,
        project.region(),
        app.document_root
    );
    let local = local_mount_point(project.root_dir(), &app.id);

    let mut command = ExternalCommand::new("sshfs")
        .arg(remote)
        .arg(local.display().to_string())
        .timeout(timeout);
    for option in SSHFS_OPTIONS {
        command = command.arg("-o").arg(*option);
    }
    command
}

/// Mount one application unless the mount table already has it
pub async fn mount_app<P: ProjectContext>(
    project: &P,
    environment: &str,
    app: &LocalApplication,
    mounts: &MountTable,
    timeout: Duration,
) -> Result<MountOutcome> {
    let id = mount_id(project.id(), environment, &app.id);
    if mounts.has_user_mount(&id) {
        return Ok(MountOutcome::AlreadyMounted);
    }

    let local = local_mount_point(project.root_dir(), &app.id);
    tokio::fs::create_dir_all(&local)
        .await
        .with_context(|| format!("Failed to create mount point {}", local.display()))?;

    eprintln!(
        "Mounting files from environment {} to {}.",
        id.green(),
        format!("{}-local--{}", project.id(), app.id).green()
    );
    sshfs_command(project, environment, app, timeout).run().await?;
    Ok(MountOutcome::Mounted)
}

/// Mount every given application, continuing past failures
///
/// Returns the number of applications that failed.
pub async fn mount_files<P: ProjectContext>(
    project: &P,
    environment: &str,
    apps: &[&LocalApplication],
    mounts: &MountTable,
    timeout: Duration,
) -> usize {
    let mut failed = 0;
    for app in apps {
        match mount_app(project, environment, app, mounts, timeout).await {
            Ok(MountOutcome::Mounted) => {}
            Ok(MountOutcome::AlreadyMounted) => {
                eprintln!(
                    "Project {} already has remote files mounted to {}",
                    project.id(),
                    "local".green()
                );
            }
            Err(e) => {
                eprintln!("{:#}", e);
                failed += 1;
            }
        }
    }
    failed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::SelectedProject;

    fn app() -> LocalApplication {
        LocalApplication {
            id: "site".to_string(),
            root: PathBuf::from("/work/p/site"),
            flavor: Some("drupal".to_string()),
            document_root: "public".to_string(),
        }
    }

    fn project(root: PathBuf) -> SelectedProject {
        SelectedProject::new("abc123", root).with_region("eu-2")
    }

    #[test]
    fn test_sshfs_command() {
        let project = project(PathBuf::from("/work/p"));
        let cmd = sshfs_command(&project, "main", &app(), Duration::from_secs(60));
        assert_eq!(
            cmd.command_line(),
            "sshfs abc123-main--site@ssh.eu-2.platform.sh:/app/public/sites/default/files \
             /work/p/.platform/local/shared/site/files \
             -o allow_other -o workaround=all -o nonempty -o reconnect -o umask=0000"
        );
    }

    #[tokio::test]
    async fn test_already_mounted_skips_command() {
        let dir = tempfile::TempDir::new().unwrap();
        let project = project(dir.path().to_path_buf());
        let mounts = MountTable::parse(
            "abc123-main--site@ssh.eu-2.platform.sh:/app/public/sites/default/files /x fuse.sshfs rw 0 0\n",
        );

        let outcome = mount_app(&project, "main", &app(), &mounts, Duration::from_secs(1))
            .await
            .unwrap();
        assert_eq!(outcome, MountOutcome::AlreadyMounted);
        assert!(!local_mount_point(dir.path(), "site").exists());
    }

    #[tokio::test]
    async fn test_other_environment_is_not_mounted() {
        let mounts = MountTable::parse("abc123-staging--site@ssh /x fuse.sshfs rw 0 0\n");
        assert!(!mounts.has_user_mount(&mount_id("abc123", "main", "site")));
    }

    #[tokio::test]
    async fn test_failed_mount_does_not_stop_batch() {
        let dir = tempfile::TempDir::new().unwrap();
        let project = project(dir.path().to_path_buf());

        // a plain file where the mount point directory would go
        let shared = dir.path().join(".platform/local/shared");
        std::fs::create_dir_all(&shared).unwrap();
        std::fs::write(shared.join("broken"), "").unwrap();
        std::fs::write(shared.join("blocked"), "").unwrap();

        let broken = LocalApplication {
            id: "broken".to_string(),
            ..app()
        };
        let blocked = LocalApplication {
            id: "blocked".to_string(),
            ..app()
        };
        let site = app();
        let mounts = MountTable::parse(
            "abc123-main--site@ssh.eu-2.platform.sh:/app/public/sites/default/files /x fuse.sshfs rw 0 0\n",
        );

        let failed = mount_files(
            &project,
            "main",
            &[&broken, &site, &blocked],
            &mounts,
            Duration::from_secs(1),
        )
        .await;
        assert_eq!(failed, 2);
    }

    #[tokio::test]
    async fn test_mount_point_error_names_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let project = project(dir.path().to_path_buf());
        let shared = dir.path().join(".platform/local/shared");
        std::fs::create_dir_all(&shared).unwrap();
        std::fs::write(shared.join("site"), "").unwrap();

        let err = mount_app(&project, "main", &app(), &MountTable::default(), Duration::from_secs(1))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Failed to create mount point"));
    }
}
