//! Report features that are overridden or need review

use crate::project::{LocalApplication, ProjectContext};
use crate::runtime::ExternalCommand;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::time::Duration;

/// Feature states that count as unclean (matched case-insensitively)
pub const UNCLEAN_STATES: &[&str] = &["overridden", "needs review"];

/// `drush fl` output is wider than the default process terminal and gets
/// wrapped unless the column count is raised
const DRUSH_COLUMNS: &str = "512";

/// Local drush alias of an application: the last component of its document root
pub fn drush_alias(project_dir: &Path, app: &LocalApplication) -> Result<String> {
    let root = project_dir
        .canonicalize()
        .with_context(|| format!("Failed to resolve {}", project_dir.display()))?
        .join(&app.document_root);
    root.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .with_context(|| format!("No drush alias can be derived from {}", root.display()))
}

pub fn drush_command(alias: &str, timeout: Duration) -> ExternalCommand {
    ExternalCommand::new("drush")
        .arg(format!("@{}._local", alias))
        .args(["fl", "--status=enabled"])
        .env("COLUMNS", DRUSH_COLUMNS)
        .timeout(timeout)
}

/// Lines of a feature list that report an unclean state
pub fn filter_unclean(output: &str) -> Vec<&str> {
    output
        .lines()
        .filter(|line| {
            let line = line.to_lowercase();
            UNCLEAN_STATES.iter().any(|state| line.contains(state))
        })
        .collect()
}

/// Run the feature list for one application and keep the unclean lines
pub async fn unclean_features(
    project_dir: &Path,
    app: &LocalApplication,
    timeout: Duration,
) -> Result<Vec<String>> {
    let alias = drush_alias(project_dir, app)?;
    let output = drush_command(&alias, timeout).run().await?;
    Ok(filter_unclean(&output.stdout)
        .into_iter()
        .map(str::to_string)
        .collect())
}

/// Heading printed for an application's report
pub fn report_heading<P: ProjectContext>(project: &P, count: usize) -> String {
    if count > 0 {
        format!(
            "{} {} unclean features found for {} ({})",
            "[*]".green(),
            count,
            project.title().green(),
            project.id()
        )
    } else {
        format!(
            "{} No unclean features found for {} ({}).",
            "[*]".green(),
            project.title().green(),
            project.id()
        )
    }
}

/// Report unclean features for every given application, continuing past failures
///
/// Returns the number of applications whose report could not be produced.
pub async fn report_unclean_features<P: ProjectContext>(
    project: &P,
    project_dir: &Path,
    apps: &[&LocalApplication],
    timeout: Duration,
) -> usize {
    let mut failed = 0;
    for app in apps {
        match unclean_features(project_dir, app, timeout).await {
            Ok(lines) => {
                eprintln!("{}", report_heading(project, lines.len()));
                for line in &lines {
                    eprintln!("{}", line);
                }
            }
            Err(e) => {
                eprintln!("{:#}", e);
                failed += 1;
            }
        }
    }
    failed
}
