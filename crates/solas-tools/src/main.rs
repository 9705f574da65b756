//! Solas CLI - Site scaffolding and Drupal maintenance for Solas projects

use anyhow::Result;
use clap::{Parser, Subcommand};
use solas_core::project::select_drupal_apps;
use solas_core::runtime::{check_drush, check_sshfs, MountTable};
use solas_core::tui::NewArgs;
use solas_core::{drupal, LocalApplication, SelectedProject};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "solas")]
#[command(about = "CLI for scaffolding Solas sites and inspecting their Drupal environments")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the initial site configuration files for a Solas project
    #[command(alias = "new-solas")]
    New(CliNewArgs),
    /// Mount files from a remote environment (via SSHFS)
    #[command(alias = "mount")]
    MountFiles(MountFilesArgs),
    /// Show a list of unclean features
    UncleanFeatures(UncleanFeaturesArgs),
}

#[derive(Parser, Debug)]
pub struct CliNewArgs {
    /// Root of the site template tree
    #[arg(long = "template-dir", env = "SOLAS_TEMPLATE_DIR")]
    pub template_dir: PathBuf,

    /// Project root to write the site into
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// YAML file with pre-filled answers (non-interactive mode)
    #[arg(long)]
    pub answers: Option<PathBuf>,

    /// Skip the final confirmation when using --answers
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliNewArgs> for NewArgs {
    fn from(args: CliNewArgs) -> Self {
        NewArgs {
            template_dir: args.template_dir,
            directory: args.directory,
            answers: args.answers,
            yes: args.yes,
        }
    }
}

#[derive(Parser, Debug)]
pub struct ProjectArgs {
    /// Project directory
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Project ID
    #[arg(short, long, env = "PLATFORM_PROJECT")]
    pub project: String,

    /// Project title used in reports (defaults to the project ID)
    #[arg(long, env = "PLATFORM_PROJECT_TITLE")]
    pub title: Option<String>,

    /// Application(s) to act on (defaults to every Drupal application)
    #[arg(long = "app")]
    pub apps: Vec<String>,

    /// Timeout for external processes, in seconds
    #[arg(long, env = "SOLAS_PROCESS_TIMEOUT", default_value_t = solas_core::DEFAULT_PROCESS_TIMEOUT.as_secs())]
    pub timeout: u64,
}

impl ProjectArgs {
    fn project(&self) -> SelectedProject {
        let project = SelectedProject::new(self.project.clone(), self.directory.clone());
        match &self.title {
            Some(title) => project.with_title(title.clone()),
            None => project,
        }
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

#[derive(Parser, Debug)]
pub struct MountFilesArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Environment ID
    #[arg(short, long, env = "PLATFORM_ENVIRONMENT")]
    pub environment: String,

    /// Project region, e.g. eu-2
    #[arg(long, env = "PLATFORM_REGION")]
    pub region: String,
}

#[derive(Parser, Debug)]
pub struct UncleanFeaturesArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}

fn discover_apps(directory: &Path) -> Result<Vec<LocalApplication>> {
    let apps = LocalApplication::discover(directory)?;
    if apps.is_empty() {
        anyhow::bail!("No applications found in {}", directory.display());
    }
    Ok(apps)
}

async fn mount_files(args: MountFilesArgs) -> Result<usize> {
    let tool = check_sshfs();
    if !tool.available {
        anyhow::bail!("{} is not installed", tool.name);
    }

    let project = args.project.project().with_region(args.region.clone());
    let apps = discover_apps(&args.project.directory)?;
    let selected = select_drupal_apps(&apps, &args.project.apps);
    let mounts = MountTable::system().await?;

    Ok(drupal::mount_files(
        &project,
        &args.environment,
        &selected,
        &mounts,
        args.project.timeout(),
    )
    .await)
}

async fn unclean_features(args: UncleanFeaturesArgs) -> Result<usize> {
    let tool = check_drush();
    if !tool.available {
        anyhow::bail!("{} is not installed", tool.name);
    }

    let project = args.project.project();
    let apps = discover_apps(&args.project.directory)?;
    let selected = select_drupal_apps(&apps, &args.project.apps);

    Ok(drupal::report_unclean_features(
        &project,
        &args.project.directory,
        &selected,
        args.project.timeout(),
    )
    .await)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    let failed = match args.command {
        Command::New(new_args) => {
            let result = solas_core::run_new(new_args.into(), CLI_VERSION).await;

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            return result;
        }
        Command::MountFiles(mount_args) => mount_files(mount_args).await?,
        Command::UncleanFeatures(features_args) => unclean_features(features_args).await?,
    };

    if failed > 0 {
        std::process::exit(1);
    }

    Ok(())
}
