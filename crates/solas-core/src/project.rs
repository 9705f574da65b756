//! Selected remote project and the local applications it contains
//!
//! Resolving which project and environment are selected is left to the
//! caller; the Drupal commands only see this narrow interface.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Application config file name
pub const APP_CONFIG_FILE: &str = ".platform.app.yaml";

/// Document root used when an application does not declare one
pub const DEFAULT_DOCUMENT_ROOT: &str = "public";

/// Directories never searched for application configs
const SKIPPED_DIRS: &[&str] = &[".git", "node_modules", "vendor", "local"];

/// Identity of the remote project the commands act on
pub trait ProjectContext {
    /// Project id, as used in SSH usernames
    fn id(&self) -> &str;

    /// Human-readable project title
    fn title(&self) -> &str;

    /// Region host prefix, e.g. `eu-2`
    fn region(&self) -> &str;

    /// Local checkout of the project
    fn root_dir(&self) -> &Path;
}

/// Project identity resolved from command-line flags
#[derive(Debug, Clone)]
pub struct SelectedProject {
    pub id: String,
    pub title: String,
    pub region: String,
    pub root_dir: PathBuf,
}

impl SelectedProject {
    pub fn new(id: impl Into<String>, root_dir: PathBuf) -> Self {
        let id = id.into();
        Self {
            title: id.clone(),
            id,
            region: String::new(),
            root_dir,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }
}

impl ProjectContext for SelectedProject {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn region(&self) -> &str {
        &self.region
    }

    fn root_dir(&self) -> &Path {
        &self.root_dir
    }
}

#[derive(Debug, Deserialize)]
struct AppConfig {
    name: String,
    #[serde(default)]
    build: BuildConfig,
    #[serde(default)]
    web: WebConfig,
}

#[derive(Debug, Default, Deserialize)]
struct BuildConfig {
    #[serde(default)]
    flavor: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct WebConfig {
    #[serde(default)]
    document_root: Option<String>,
    #[serde(default)]
    locations: BTreeMap<String, LocationConfig>,
}

#[derive(Debug, Deserialize)]
struct LocationConfig {
    #[serde(default)]
    root: Option<String>,
}

/// An application found in the local checkout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalApplication {
    pub id: String,
    /// Directory holding the application's config file
    pub root: PathBuf,
    pub flavor: Option<String>,
    /// Document root relative to the application, without slashes at either end
    pub document_root: String,
}

impl LocalApplication {
    /// Parse one application config file
    pub fn from_config(root: PathBuf, content: &str) -> Result<Self> {
        let config: AppConfig = serde_yaml::from_str(content)?;

        let document_root = config
            .web
            .locations
            .get("/")
            .and_then(|l| l.root.clone())
            .or(config.web.document_root)
            .map(|r| r.trim_matches('/').to_string())
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| DEFAULT_DOCUMENT_ROOT.to_string());

        Ok(Self {
            id: config.name,
            root,
            flavor: config.build.flavor,
            document_root,
        })
    }

    pub fn is_drupal(&self) -> bool {
        self.flavor.as_deref() == Some("drupal")
    }

    /// Find every application config under `project_root`, sorted by id
    pub fn discover(project_root: &Path) -> Result<Vec<Self>> {
        let mut apps = Vec::new();

        let walker = WalkDir::new(project_root).into_iter().filter_entry(|e| {
            !(e.file_type().is_dir()
                && e.depth() > 0
                && SKIPPED_DIRS.contains(&e.file_name().to_string_lossy().as_ref()))
        });

        for entry in walker {
            let entry = entry
                .with_context(|| format!("Failed to scan {}", project_root.display()))?;
            if !entry.file_type().is_file() || entry.file_name() != APP_CONFIG_FILE {
                continue;
            }

            let path = entry.path();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let root = path.parent().unwrap_or(project_root).to_path_buf();
            let app = Self::from_config(root, &content)
                .with_context(|| format!("Failed to parse {}", path.display()))?;
            apps.push(app);
        }

        apps.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(apps)
    }
}

/// Drupal applications, restricted to `only` when it is non-empty
pub fn select_drupal_apps<'a>(
    apps: &'a [LocalApplication],
    only: &[String],
) -> Vec<&'a LocalApplication> {
    apps.iter()
        .filter(|app| only.is_empty() || only.contains(&app.id))
        .filter(|app| app.is_drupal())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_document_root_sources() {
        let app = LocalApplication::from_config(
            PathBuf::from("site"),
            "name: site\nbuild: {flavor: drupal}\nweb: {document_root: /public/}\n",
        )
        .unwrap();
        assert_eq!(app.document_root, "public");
        assert!(app.is_drupal());

        let app = LocalApplication::from_config(
            PathBuf::from("site"),
            "name: site\nweb:\n  locations:\n    '/':\n      root: web\n",
        )
        .unwrap();
        assert_eq!(app.document_root, "web");
        assert!(!app.is_drupal());

        let app = LocalApplication::from_config(
            PathBuf::from("site"),
            "name: site\nweb:\n  document_root: public\n  locations:\n    '/':\n      root: web\n",
        )
        .unwrap();
        assert_eq!(app.document_root, "web");

        let app = LocalApplication::from_config(PathBuf::from("api"), "name: api\n").unwrap();
        assert_eq!(app.document_root, DEFAULT_DOCUMENT_ROOT);
    }

    #[test]
    fn test_discover_and_select() {
        let dir = TempDir::new().unwrap();
        let write = |rel: &str, content: &str| {
            let path = dir.path().join(rel);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(path, content).unwrap();
        };
        write("site/.platform.app.yaml", "name: site\nbuild: {flavor: drupal}\n");
        write("api/.platform.app.yaml", "name: api\nbuild: {flavor: composer}\n");
        write("blog/.platform.app.yaml", "name: blog\nbuild: {flavor: drupal}\n");
        write(
            "site/vendor/pkg/.platform.app.yaml",
            "name: ignored\nbuild: {flavor: drupal}\n",
        );

        let apps = LocalApplication::discover(dir.path()).unwrap();
        let ids: Vec<&str> = apps.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["api", "blog", "site"]);
        assert_eq!(apps[2].root, dir.path().join("site"));

        let drupal: Vec<&str> = select_drupal_apps(&apps, &[])
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(drupal, vec!["blog", "site"]);

        let only = select_drupal_apps(&apps, &["site".to_string(), "api".to_string()]);
        assert_eq!(only.len(), 1);
        assert_eq!(only[0].id, "site");
    }

    #[test]
    fn test_selected_project_defaults_title_to_id() {
        let project = SelectedProject::new("abc123", PathBuf::from("/tmp/p")).with_region("eu-2");
        assert_eq!(project.title(), "abc123");
        assert_eq!(project.region(), "eu-2");
    }
}
