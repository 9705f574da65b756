//! Writes a new site tree from the template root
//!
//! Platform files are copied as they are; every unit file is read, expanded
//! with that unit's tokens and written under the project root with the site
//! code in place of the placeholder. Nothing is rolled back on failure:
//! files written before an error stay on disk.

use super::expand::{expand, TokenMap};
use super::language_table::LanguageTable;
use super::layout::{TemplateLayout, UnitKind, UnitLayout};
use super::tokens;
use crate::config::SiteConfig;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Tokens shared by every unit
pub fn global_tokens(site: &SiteConfig) -> TokenMap {
    TokenMap::new()
        .with(tokens::COUNTRY_NAME_ENGLISH, site.site_name.as_str())
        .with(tokens::COUNTRY_NAME_LOWERCASE, site.site_code.as_str())
        .with(tokens::PLACEHOLDER, site.site_code.as_str())
        .with(tokens::COUNTRY_LIVE_FQDN, site.fqdn.as_str())
        .with(tokens::COUNTRY_TIMEZONE, site.timezone.as_str())
        .with(tokens::COUNTRY_DEFAULT, site.iso_country_code.as_str())
}

/// Full token map for one unit's files
pub fn unit_tokens(kind: UnitKind, site: &SiteConfig, table: &LanguageTable) -> TokenMap {
    let mut map = global_tokens(site);
    match kind {
        UnitKind::Deploy => {
            map.insert(tokens::HOMEPAGE, site.homepage.as_str());
            map.insert(tokens::LANGUAGES_NAME_SLOGAN, table.name_slogan.as_str());
        }
        UnitKind::GeneralSettings => {}
        UnitKind::Region => map.extend(table.region_tokens()),
    }
    map
}

/// Writes one site into a project root
#[derive(Debug, Clone)]
pub struct Scaffolder {
    layout: TemplateLayout,
    source_root: PathBuf,
    target_root: PathBuf,
}

impl Scaffolder {
    pub fn new(layout: TemplateLayout, source_root: PathBuf, target_root: PathBuf) -> Self {
        Self {
            layout,
            source_root,
            target_root,
        }
    }

    pub fn layout(&self) -> &TemplateLayout {
        &self.layout
    }

    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    pub fn target_root(&self) -> &Path {
        &self.target_root
    }

    /// Create the fixed directories and copy the platform files
    pub async fn prepare(&self) -> Result<Vec<PathBuf>> {
        for dir in &self.layout.directories {
            let path = self.target_root.join(dir);
            fs::create_dir_all(&path)
                .await
                .with_context(|| format!("Failed to create directory: {}", path.display()))?;
        }

        let mut written = Vec::new();
        for file in &self.layout.platform_files {
            let source = self.source_root.join(&file.source);
            let target = self.target_root.join(file.destination());
            ensure_parent(&target).await?;
            fs::copy(&source, &target).await.with_context(|| {
                format!(
                    "Failed to copy {} to {}",
                    source.display(),
                    target.display()
                )
            })?;
            written.push(target);
        }

        Ok(written)
    }

    /// Expand and write every file of one unit
    pub async fn write_unit(
        &self,
        unit: &UnitLayout,
        site: &SiteConfig,
        table: &LanguageTable,
    ) -> Result<Vec<PathBuf>> {
        let names = TokenMap::new().with(tokens::PLACEHOLDER, site.site_code.as_str());
        let map = unit_tokens(unit.kind, site, table);

        let source_dir = self.source_root.join(&unit.source_dir);
        let target_dir = self.target_root.join(expand(&unit.target_dir, &names));
        fs::create_dir_all(&target_dir)
            .await
            .with_context(|| format!("Failed to create directory: {}", target_dir.display()))?;

        let mut written = Vec::with_capacity(unit.files.len());
        for file_name in &unit.files {
            let source = source_dir.join(file_name);
            let target = target_dir.join(expand(file_name, &names));

            let template = fs::read_to_string(&source)
                .await
                .with_context(|| format!("Failed to read template: {}", source.display()))?;
            fs::write(&target, expand(&template, &map))
                .await
                .with_context(|| format!("Failed to write file: {}", target.display()))?;

            written.push(target);
        }

        Ok(written)
    }

    /// Prepare the tree, then write every unit in layout order
    pub async fn scaffold(&self, site: &SiteConfig, table: &LanguageTable) -> Result<Vec<PathBuf>> {
        let mut written = self.prepare().await?;
        for unit in &self.layout.units {
            written.extend(self.write_unit(unit, site, table).await?);
        }
        Ok(written)
    }
}

/// Scaffold `site` from `source_root` into `target_root` using the root's layout
pub async fn scaffold(
    site: &SiteConfig,
    table: &LanguageTable,
    source_root: &Path,
    target_root: &Path,
) -> Result<Vec<PathBuf>> {
    let layout = TemplateLayout::load(source_root).await?;
    Scaffolder::new(layout, source_root.to_path_buf(), target_root.to_path_buf())
        .scaffold(site, table)
        .await
}

async fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    Ok(())
}
