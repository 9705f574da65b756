//! Template tree layout: what is copied, what is expanded, and where it goes
//!
//! The built-in layout matches the stock Solas site template. A template
//! root may carry its own `template.yaml` to override it.

use super::tokens::PLACEHOLDER;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

/// Manifest file name looked up in the template root
pub const MANIFEST_FILE: &str = "template.yaml";

/// The generated modules, in the order they are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitKind {
    /// Deployment hooks module (`sc_deploy`)
    Deploy,
    /// General settings feature module
    GeneralSettings,
    /// Region and locale feature module
    Region,
}

impl UnitKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            UnitKind::Deploy => "sc_deploy",
            UnitKind::GeneralSettings => "general settings",
            UnitKind::Region => "region",
        }
    }
}

/// A file copied verbatim from the template root into the project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformFile {
    /// Source path relative to the template root
    pub source: String,

    /// Destination relative to the project root (defaults to source)
    #[serde(default)]
    pub dest: Option<String>,
}

impl PlatformFile {
    fn new(source: &str, dest: &str) -> Self {
        Self {
            source: source.to_string(),
            dest: Some(dest.to_string()),
        }
    }

    pub fn destination(&self) -> &str {
        self.dest.as_deref().unwrap_or(&self.source)
    }
}

/// One generated module
///
/// Directory and file names may contain the site code placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitLayout {
    pub kind: UnitKind,

    /// Template directory relative to the template root
    pub source_dir: String,

    /// Output directory relative to the project root
    pub target_dir: String,

    /// Template file names inside `source_dir`
    pub files: Vec<String>,
}

/// Full description of a site template tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateLayout {
    /// Minimum CLI version the template was written for
    #[serde(default)]
    pub version: Option<String>,

    /// Files copied unmodified before any unit is written
    #[serde(default)]
    pub platform_files: Vec<PlatformFile>,

    /// Directories always created under the project root
    #[serde(default)]
    pub directories: Vec<String>,

    pub units: Vec<UnitLayout>,
}

impl Default for TemplateLayout {
    fn default() -> Self {
        let feature = |suffix: &str| -> Vec<String> {
            suffix
                .split(' ')
                .map(|ext| format!("solas_{}_{}", PLACEHOLDER, ext))
                .collect()
        };

        Self {
            version: None,
            platform_files: vec![
                PlatformFile::new(".platform/routes.yaml", ".platform/routes.yaml"),
                PlatformFile::new(".platform/services.yaml", ".platform/services.yaml"),
                PlatformFile::new(".platform.app.yaml", "site/.platform.app.yaml"),
                PlatformFile::new("project.make", "site/project.make"),
            ],
            directories: vec![
                ".platform".to_string(),
                "site/modules/custom".to_string(),
                "site/modules/features".to_string(),
            ],
            units: vec![
                UnitLayout {
                    kind: UnitKind::Deploy,
                    source_dir: "modules/custom/sc_deploy".to_string(),
                    target_dir: "site/modules/custom/sc_deploy".to_string(),
                    files: vec![
                        "sc_deploy.info".to_string(),
                        "sc_deploy.module".to_string(),
                        "sc_deploy.install".to_string(),
                    ],
                },
                UnitLayout {
                    kind: UnitKind::GeneralSettings,
                    source_dir: format!("modules/features/solas_{}_general_settings", PLACEHOLDER),
                    target_dir: format!("site/modules/features/solas_{}_general_settings", PLACEHOLDER),
                    files: feature(
                        "general_settings.info general_settings.module \
                         general_settings.features.inc general_settings.strongarm.inc",
                    ),
                },
                UnitLayout {
                    kind: UnitKind::Region,
                    source_dir: format!("modules/features/solas_{}_region", PLACEHOLDER),
                    target_dir: format!("site/modules/features/solas_{}_region", PLACEHOLDER),
                    files: feature(
                        "region.info region.module region.strongarm.inc \
                         region.features.inc region.features.language.inc",
                    ),
                },
            ],
        }
    }
}

impl TemplateLayout {
    /// Read `template.yaml` from the template root, or use the built-in layout
    pub async fn load(template_root: &Path) -> Result<Self> {
        let manifest_path = template_root.join(MANIFEST_FILE);
        if !fs::try_exists(&manifest_path).await.unwrap_or(false) {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&manifest_path)
            .await
            .with_context(|| format!("Failed to read {}", manifest_path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse {}", manifest_path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let layout: TemplateLayout = serde_yaml::from_str(content)?;
        if layout.units.is_empty() {
            anyhow::bail!("Template layout defines no units");
        }
        Ok(layout)
    }

    pub fn unit(&self, kind: UnitKind) -> Option<&UnitLayout> {
        self.units.iter().find(|u| u.kind == kind)
    }
}
