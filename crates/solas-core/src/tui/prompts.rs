//! Charm-style CLI prompts using cliclack

use crate::config::{
    collect_answers, confirm_site, duplicate_language_warning, render_summary, Prompter,
    SiteConfig, ValidationError,
};
use crate::templates::{check_compatibility, LanguageTable, Scaffolder, TemplateLayout};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// CLI arguments for the new-site command
#[derive(Debug, Clone, Default)]
pub struct NewArgs {
    /// Root of the site template tree
    pub template_dir: PathBuf,

    /// Project root to write into (defaults to the current directory)
    pub directory: Option<PathBuf>,

    /// YAML file with pre-filled answers
    pub answers: Option<PathBuf>,

    /// Skip the confirmation when answers come from a file
    pub yes: bool,
}

/// Prompter backed by cliclack
#[derive(Debug, Default)]
pub struct CliclackPrompter;

impl Prompter for CliclackPrompter {
    fn input(&mut self, prompt: &str) -> Result<String> {
        let answer: String = cliclack::input(prompt).required(false).interact()?;
        Ok(answer)
    }

    fn select(&mut self, prompt: &str, options: &[&str], default: usize) -> Result<usize> {
        let mut select = cliclack::select(prompt);
        for (idx, option) in options.iter().enumerate() {
            select = select.item(idx, option, "");
        }
        Ok(select.initial_value(default).interact()?)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        Ok(cliclack::confirm(prompt).initial_value(default).interact()?)
    }

    fn invalid(&mut self, error: &ValidationError) -> Result<()> {
        cliclack::log::error(error.to_string())?;
        Ok(())
    }

    fn info(&mut self, message: &str) -> Result<()> {
        cliclack::log::info(message)?;
        Ok(())
    }

    fn success(&mut self, message: &str) -> Result<()> {
        cliclack::log::success(message)?;
        Ok(())
    }

    fn warn(&mut self, message: &str) -> Result<()> {
        cliclack::log::warning(message)?;
        Ok(())
    }

    fn summary(&mut self, summary: &str) -> Result<()> {
        cliclack::note("Site details", summary)?;
        Ok(())
    }
}

/// Run the new-site flow: collect answers, confirm, then write the tree
pub async fn run_new(args: NewArgs, cli_version: &str) -> Result<()> {
    cliclack::intro("New Solas installation")?;

    let template_root = args.template_dir.clone();
    if !template_root.is_dir() {
        anyhow::bail!("Template directory not found: {}", template_root.display());
    }
    let project_root = resolve_directory(args.directory.as_deref())?;

    let layout = TemplateLayout::load(&template_root).await?;
    if let Some(template_version) = &layout.version {
        if let Some(warning) =
            check_compatibility(cli_version, template_version, crate::UPGRADE_COMMAND)
        {
            cliclack::log::warning(warning)?;
        }
    }

    let scaffolder = Scaffolder::new(layout, template_root, project_root);
    let mut prompter = CliclackPrompter;
    if create_site(&mut prompter, &scaffolder, args.answers.as_deref(), args.yes).await? {
        cliclack::outro("Initial site setup complete.")?;
    } else {
        cliclack::outro("Aborting.")?;
    }

    Ok(())
}

/// Gather answers, then write the site once the operator goes ahead
///
/// Answers come from `answers` when given and are confirmed unless `yes`.
/// Returns false without touching the target root when the operator declines.
async fn create_site<P: Prompter>(
    prompter: &mut P,
    scaffolder: &Scaffolder,
    answers: Option<&Path>,
    yes: bool,
) -> Result<bool> {
    let site = match answers {
        Some(path) => {
            let (site, replaced) = load_answers(path).await?;
            prompter.info(&format!("Using answers from {}", path.display()))?;
            for code in replaced {
                prompter.warn(&duplicate_language_warning(&code))?;
            }
            if yes {
                prompter.summary(&render_summary(&site))?;
                Some(site)
            } else {
                confirm_site(prompter, site)?
            }
        }
        None => collect_answers(prompter)?,
    };

    let Some(site) = site else {
        return Ok(false);
    };

    prompter.info(&format!("Root dir = {}", scaffolder.target_root().display()))?;
    prompter.info(&format!("Template dir = {}", scaffolder.source_root().display()))?;

    let table = LanguageTable::build(&site.languages);
    let copied = scaffolder.prepare().await?;
    prompter.success(&format!("Copied {} platform files", copied.len()))?;

    for unit in &scaffolder.layout().units {
        let name = unit.kind.display_name();
        prompter.info(&format!("Writing {} module.", name))?;
        let written = scaffolder.write_unit(unit, &site, &table).await?;
        prompter.success(&format!("{} done ({} files).", name, written.len()))?;
    }

    Ok(true)
}

/// Resolve the project root against the current directory
fn resolve_directory(directory: Option<&Path>) -> Result<PathBuf> {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let path = match directory {
        Some(dir) if dir.is_absolute() => dir.to_path_buf(),
        Some(dir) => current_dir.join(dir),
        None => current_dir,
    };

    if !path.is_dir() {
        anyhow::bail!("Project directory does not exist: {}", path.display());
    }

    Ok(path)
}

/// Read and validate a YAML answers file
///
/// Also returns the language codes whose later entry replaced an earlier one.
async fn load_answers(path: &Path) -> Result<(SiteConfig, Vec<String>)> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let mut site: SiteConfig = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse answers file {}", path.display()))?;
    site.validate()
        .with_context(|| format!("Invalid answers in {}", path.display()))?;
    let replaced = site.normalize();
    Ok((site, replaced))
}
