//! Activity command: the writing/install pipeline.
//!
//! Stage order is fixed: conflict guard, new-file generation, resource-file
//! merges, manifest injection, build-descriptor injection. The guard is
//! evaluated exactly once before any file is touched; on conflict the run is
//! fully skipped. Later per-file failures downgrade to warnings so the rest
//! of the run continues (there is no rollback across target files).

use std::fs;

use minijinja::context;

use crate::catalog::{self, Fragment};
use crate::error::AppError;
use crate::gradle;
use crate::manifest;
use crate::merge::{self, MergeError};
use crate::project::{Project, ResourceRole};
use crate::request::ActivityRequest;
use crate::templates;

/// Everything a run did (or refused to do), for reporting.
///
/// Replaces a run-wide mutable "proceed" flag: the guard's verdict is the
/// `conflicts` list, and callers inspect the outcome instead of an exit code.
#[derive(Debug, Default)]
pub struct ActivityOutcome {
    /// Root-relative paths that already existed; non-empty means nothing was
    /// written.
    pub conflicts: Vec<String>,
    /// New files generated from templates.
    pub created: Vec<String>,
    /// Shared files that were modified.
    pub updated: Vec<String>,
    /// Per-file problems that were skipped over.
    pub warnings: Vec<String>,
}

impl ActivityOutcome {
    pub fn proceeded(&self) -> bool {
        self.conflicts.is_empty()
    }
}

/// Execute the activity generation pipeline against a project tree.
pub fn execute(project: &Project, request: &ActivityRequest) -> Result<ActivityOutcome, AppError> {
    let mut outcome = ActivityOutcome::default();

    // Conflict guard: both destination paths, checked once, up front.
    let activity_rel = Project::activity_source_rel(request);
    let layout_rel = Project::layout_rel(request);
    if project.activity_source_path(request).exists() {
        outcome.conflicts.push(activity_rel.clone());
    }
    if project.layout_path(request).exists() {
        outcome.conflicts.push(layout_rel.clone());
    }
    if !outcome.proceeded() {
        return Ok(outcome);
    }

    write_new_files(project, request, &mut outcome)?;
    merge_resources(project, request, &mut outcome);
    inject_manifest(project, request, &mut outcome);
    inject_build_descriptor(project, request, &mut outcome);

    Ok(outcome)
}

/// Render the activity source and layout templates into new files.
fn write_new_files(
    project: &Project,
    request: &ActivityRequest,
    outcome: &mut ActivityOutcome,
) -> Result<(), AppError> {
    let variant = templates::variant_templates(request.activity_type);
    let ctx = context! {
        activity_name => &request.activity_name,
        activity_package => &request.activity_package,
        layout_name => &request.layout_name,
        app_package => &request.app_package,
    };

    let activity_path = project.activity_source_path(request);
    if let Some(parent) = activity_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&activity_path, templates::render(variant.activity_source, ctx.clone())?)?;
    outcome.created.push(Project::activity_source_rel(request));

    let layout_path = project.layout_path(request);
    if let Some(parent) = layout_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&layout_path, templates::render(variant.layout, ctx)?)?;
    outcome.created.push(Project::layout_rel(request));

    Ok(())
}

/// Merge catalog fragments into the shared `res/values/` files, one
/// read-modify-write per file. Failures are independent per file.
fn merge_resources(project: &Project, request: &ActivityRequest, outcome: &mut ActivityOutcome) {
    let fragments = catalog::fragments_for(request);

    for role in ResourceRole::VALUES {
        let for_role: Vec<Fragment> =
            fragments.iter().filter(|f| f.role == role).cloned().collect();
        if for_role.is_empty() {
            continue;
        }

        let container = role.container().unwrap_or("resources");
        match merge::merge_fragments(&project.resource_path(role), container, &for_role) {
            Ok(true) => outcome.updated.push(role.relative_path().to_string()),
            Ok(false) => {}
            Err(err) => outcome
                .warnings
                .push(format!("skipped {}: {}", role.relative_path(), err)),
        }
    }
}

fn inject_manifest(project: &Project, request: &ActivityRequest, outcome: &mut ActivityOutcome) {
    let path = project.resource_path(ResourceRole::Manifest);
    match manifest::inject_activity(&path, request) {
        Ok(injection) => {
            if injection.modified {
                outcome.updated.push(ResourceRole::Manifest.relative_path().to_string());
            }
            if injection.launcher_skipped {
                outcome
                    .warnings
                    .push("manifest already contains an activity with launcher intent".to_string());
            }
        }
        Err(MergeError::AnchorMissing(_)) => {
            // Nothing to attach to; a well-formed skeleton always has one.
        }
        Err(err) => outcome
            .warnings
            .push(format!("skipped {}: {}", ResourceRole::Manifest.relative_path(), err)),
    }
}

fn inject_build_descriptor(
    project: &Project,
    request: &ActivityRequest,
    outcome: &mut ActivityOutcome,
) {
    if !request.activity_type.needs_design_library() {
        return;
    }

    let path = project.resource_path(ResourceRole::BuildDescriptor);
    match gradle::inject_design_library(&path) {
        Ok(true) => {
            outcome.updated.push(ResourceRole::BuildDescriptor.relative_path().to_string());
        }
        Ok(false) => {}
        Err(err) => outcome
            .warnings
            .push(format!("skipped {}: {}", ResourceRole::BuildDescriptor.relative_path(), err)),
    }
}
