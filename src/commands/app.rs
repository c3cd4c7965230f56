//! App command: one-time project-skeleton deployment.

use std::fs;
use std::path::Path;

use minijinja::context;

use crate::error::AppError;
use crate::naming::package_to_dir;
use crate::project::Project;
use crate::settings::{AppSettings, Settings};
use crate::templates;

/// Configuration for a new project skeleton.
#[derive(Debug, Clone)]
pub struct AppRequest {
    pub app_name: String,
    pub app_package: String,
    pub target_sdk: u32,
    pub min_sdk: u32,
}

/// Deploy the embedded project skeleton into the project root.
///
/// Returns the root-relative paths of the files written, in deterministic
/// order. Refuses to run when an `app/` module already exists.
pub fn execute(project: &Project, request: &AppRequest) -> Result<Vec<String>, AppError> {
    if project.has_app_module() {
        return Err(AppError::ProjectExists);
    }

    let package_dir = package_to_dir(&request.app_package);
    let dirs = [
        format!("app/src/main/java/{package_dir}"),
        "app/src/main/res/layout".to_string(),
        "app/src/main/assets".to_string(),
        "app/libs".to_string(),
    ];
    for dir in &dirs {
        fs::create_dir_all(project.root().join(dir))?;
    }

    let ctx = context! {
        app_name => &request.app_name,
        app_package => &request.app_package,
        target_sdk => request.target_sdk,
        min_sdk => request.min_sdk,
    };

    let mut created = Vec::new();
    for file in templates::skeleton_files() {
        let (dest_rel, content) = match template_basename(&file.path) {
            Some(stripped) => (stripped, templates::render(file.content, ctx.clone())?),
            None => (dotfile_name(&file.path), file.content.to_string()),
        };

        let dest = project.root().join(&dest_rel);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&dest, content)?;
        created.push(dest_rel);
    }

    let settings = Settings {
        app: AppSettings {
            name: Some(request.app_name.clone()),
            package: Some(request.app_package.clone()),
            target_sdk: Some(request.target_sdk),
            min_sdk: Some(request.min_sdk),
        },
    };
    settings.save(&project.settings_path())?;

    Ok(created)
}

/// An `_`-prefixed basename marks a file for template rendering; the
/// underscore is stripped from the destination.
fn template_basename(path: &str) -> Option<String> {
    let name = Path::new(path).file_name()?.to_str()?;
    let stripped = name.strip_prefix('_')?;
    Some(match Path::new(path).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            format!("{}/{stripped}", parent.to_string_lossy())
        }
        _ => stripped.to_string(),
    })
}

/// A `gitignore` basename is written as `.gitignore` (embedded bundles keep
/// the dot off so the file is not treated as hidden).
fn dotfile_name(path: &str) -> String {
    match Path::new(path).file_name().and_then(|n| n.to_str()) {
        Some("gitignore") => match Path::new(path).parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                format!("{}/.gitignore", parent.to_string_lossy())
            }
            _ => ".gitignore".to_string(),
        },
        _ => path.to_string(),
    }
}
