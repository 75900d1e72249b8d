//! Host collaborators.
//!
//! The builder does not know how a host lays out its templates. It asks a
//! [`TemplateHost`] for the owner key, the destination of each block and
//! whether templates must be rebuilt. [`ProjectHost`] is the directory-based
//! implementation used by the CLI.

use std::path::{Component, Path, PathBuf};

use crate::config::{IftConfig, DEFAULT_VIEW_ROOT};
use crate::error::Result;

/// Contract between the template builder and the host framework.
pub trait TemplateHost {
    /// Stable identity used as the ledger key (e.g. a controller name).
    fn owner_key(&self) -> String;

    /// Absolute destination path for a block name.
    fn path_for(&self, name: &str) -> PathBuf;

    /// Whether templates must be rebuilt even if already generated.
    fn should_rebuild(&self) -> bool;

    /// Register extra template search roots before files are written.
    fn prepare_roots(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Host resolving block names against project directories.
///
/// Routing rules:
///
/// - a name whose directory part is a suffix of the stylesheets root goes to
///   the stylesheets root (`public/stylesheets/app.css`, `stylesheets/app.css`)
/// - likewise for the javascripts root
/// - a bare name goes under `<view root>/<template dir>/`
/// - any other name with a `/` goes under `<view root>/` as given
/// - a leading `/` is ignored, so no name escapes its root
///
/// ```
/// use ift::config::IftConfig;
/// use ift::templates::{ProjectHost, TemplateHost};
/// use std::path::{Path, PathBuf};
///
/// let host = ProjectHost::new("products", &IftConfig::default(), Path::new("/srv/app"));
/// assert_eq!(
///     host.path_for("index.html.erb"),
///     PathBuf::from("/srv/app/app/views/products/index.html.erb")
/// );
/// assert_eq!(
///     host.path_for("stylesheets/app.css"),
///     PathBuf::from("/srv/app/public/stylesheets/app.css")
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ProjectHost {
    owner: String,
    template_dir: PathBuf,
    view_root: PathBuf,
    stylesheets_root: PathBuf,
    javascripts_root: PathBuf,
    custom_view_root: Option<PathBuf>,
    reload: bool,
    search_roots: Vec<PathBuf>,
}

impl ProjectHost {
    /// Create a host for an owner. The template directory defaults to the
    /// owner key.
    pub fn new(owner: impl Into<String>, config: &IftConfig, project_root: &Path) -> Self {
        let owner = owner.into();
        let anchor = |p: PathBuf| normalize_path(&project_root.join(p));
        let view_root = anchor(config.view_dir());

        Self {
            template_dir: PathBuf::from(&owner),
            owner,
            search_roots: vec![anchor(PathBuf::from(DEFAULT_VIEW_ROOT))],
            view_root,
            stylesheets_root: anchor(config.stylesheets_dir()),
            javascripts_root: anchor(config.javascripts_dir()),
            custom_view_root: config.view_root.clone().map(anchor),
            reload: config.reload_templates,
        }
    }

    /// Set the owner's template directory, relative to the view root.
    pub fn with_template_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.template_dir = dir.into();
        self
    }

    /// Force rebuilding on every render.
    pub fn with_reload(mut self, reload: bool) -> Self {
        self.reload = reload;
        self
    }

    /// Template search roots, highest priority first.
    pub fn search_roots(&self) -> &[PathBuf] {
        &self.search_roots
    }

    /// Owner's template directory, relative to the view root.
    pub fn template_dir(&self) -> &Path {
        &self.template_dir
    }

    /// Check if a block name designates a stylesheet.
    pub fn is_stylesheet(&self, name: &str) -> bool {
        routes_to(&self.stylesheets_root, name)
    }

    /// Check if a block name designates a javascript file.
    pub fn is_javascript(&self, name: &str) -> bool {
        routes_to(&self.javascripts_root, name)
    }
}

impl TemplateHost for ProjectHost {
    fn owner_key(&self) -> String {
        self.owner.clone()
    }

    fn path_for(&self, name: &str) -> PathBuf {
        let relative = relative_name(name);
        let base_name = || relative.file_name().map(PathBuf::from).unwrap_or_default();

        let path = if self.is_stylesheet(name) {
            self.stylesheets_root.join(base_name())
        } else if self.is_javascript(name) {
            self.javascripts_root.join(base_name())
        } else if name.contains('/') {
            self.view_root.join(&relative)
        } else {
            self.view_root.join(&self.template_dir).join(&relative)
        };

        normalize_path(&path)
    }

    fn should_rebuild(&self) -> bool {
        self.reload
    }

    fn prepare_roots(&mut self) -> Result<()> {
        if let Some(root) = &self.custom_view_root {
            if self.search_roots.first() != Some(root) {
                tracing::debug!("Registering template root {}", root.display());
                self.search_roots.insert(0, root.clone());
            }
        }
        Ok(())
    }
}

/// Block name with root and prefix components dropped, so joining it never
/// replaces the base directory.
fn relative_name(name: &str) -> PathBuf {
    Path::new(name)
        .components()
        .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
        .collect()
}

/// Check if the directory part of `name` is a trailing part of `root`.
fn routes_to(root: &Path, name: &str) -> bool {
    let relative = relative_name(name);
    let dir = match relative.parent() {
        Some(dir) => normalize_path(dir),
        None => return false,
    };
    if dir.as_os_str().is_empty() {
        return false;
    }
    root.ends_with(dir)
}

/// Lexically resolve `.` and `..` components.
pub(crate) fn normalize_path(path: &Path) -> PathBuf {
    let mut components: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => components.push(component),
            },
            c => components.push(c),
        }
    }

    components.iter().collect()
}
