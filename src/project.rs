//! Project-tree path resolution.

use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::naming::package_to_dir;
use crate::request::ActivityRequest;

/// The settings file droidgen keeps at the project root.
pub const SETTINGS_FILE: &str = ".droidgen.toml";

/// Logical role of a shared file the generator may touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceRole {
    Strings,
    Dimens,
    Colors,
    Styles,
    Attrs,
    Manifest,
    BuildDescriptor,
}

impl ResourceRole {
    /// The `res/values/` roles, in the fixed order merges are applied.
    pub const VALUES: [ResourceRole; 5] = [
        ResourceRole::Strings,
        ResourceRole::Dimens,
        ResourceRole::Colors,
        ResourceRole::Styles,
        ResourceRole::Attrs,
    ];

    /// Path relative to the project root, fixed by Android convention.
    pub fn relative_path(&self) -> &'static str {
        match self {
            ResourceRole::Strings => "app/src/main/res/values/strings.xml",
            ResourceRole::Dimens => "app/src/main/res/values/dimens.xml",
            ResourceRole::Colors => "app/src/main/res/values/colors.xml",
            ResourceRole::Styles => "app/src/main/res/values/styles.xml",
            ResourceRole::Attrs => "app/src/main/res/values/attrs.xml",
            ResourceRole::Manifest => "app/src/main/AndroidManifest.xml",
            ResourceRole::BuildDescriptor => "app/build.gradle",
        }
    }

    /// XML element fragments for this role are inserted into, if any.
    /// The build descriptor is line-oriented and has no container tag.
    pub fn container(&self) -> Option<&'static str> {
        match self {
            ResourceRole::Manifest => Some("application"),
            ResourceRole::BuildDescriptor => None,
            _ => Some("resources"),
        }
    }
}

/// Represents an Android project tree rooted at a given directory.
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
}

impl Project {
    /// Create a project instance for the given root directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a project instance for the current directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether an `app/` module already exists under this root.
    pub fn has_app_module(&self) -> bool {
        self.root.join("app").exists()
    }

    /// Absolute path of a shared file by role.
    pub fn resource_path(&self, role: ResourceRole) -> PathBuf {
        self.root.join(role.relative_path())
    }

    pub fn settings_path(&self) -> PathBuf {
        self.root.join(SETTINGS_FILE)
    }

    /// Root-relative path of the new activity source file.
    pub fn activity_source_rel(request: &ActivityRequest) -> String {
        format!(
            "app/src/main/java/{}/{}.java",
            package_to_dir(&request.activity_package),
            request.activity_name
        )
    }

    /// Root-relative path of the new layout file.
    pub fn layout_rel(request: &ActivityRequest) -> String {
        format!("app/src/main/res/layout/{}.xml", request.layout_name)
    }

    pub fn activity_source_path(&self, request: &ActivityRequest) -> PathBuf {
        self.root.join(Self::activity_source_rel(request))
    }

    pub fn layout_path(&self, request: &ActivityRequest) -> PathBuf {
        self.root.join(Self::layout_rel(request))
    }
}
