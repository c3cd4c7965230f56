//! Embedded template content for project and activity generation.

use include_dir::{Dir, DirEntry, include_dir};
use minijinja::{Environment, UndefinedBehavior};

use crate::request::ActivityType;

static SKELETON_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/skeleton");

/// A file embedded in the project-skeleton bundle.
///
/// Bundle conventions: a basename starting with `_` means "render through
/// the template engine and strip the underscore"; a `gitignore` basename is
/// written as `.gitignore`. Everything else is copied verbatim.
#[derive(Debug, Clone)]
pub struct SkeletonFile {
    /// Path relative to the skeleton root.
    pub path: String,
    /// File content as UTF-8 text.
    pub content: &'static str,
}

/// Returns all skeleton files (relative to `src/skeleton/`).
pub fn skeleton_files() -> Vec<SkeletonFile> {
    let mut files = Vec::new();
    collect_files(&SKELETON_DIR, &mut files);

    files.sort_by(|a, b| a.path.cmp(&b.path));
    files
}

fn collect_files(dir: &'static Dir, files: &mut Vec<SkeletonFile>) {
    for entry in dir.entries() {
        match entry {
            DirEntry::File(file) => {
                if let Some(content) = file.contents_utf8() {
                    files.push(SkeletonFile {
                        path: file.path().to_string_lossy().to_string(),
                        content,
                    });
                }
            }
            DirEntry::Dir(subdir) => collect_files(subdir, files),
        }
    }
}

/// The pair of templates emitted for one activity variant.
#[derive(Debug, Clone)]
pub struct VariantTemplates {
    pub activity_type: ActivityType,
    pub activity_source: &'static str,
    pub layout: &'static str,
}

static VARIANT_TEMPLATES: [VariantTemplates; 4] = [
    VariantTemplates {
        activity_type: ActivityType::Empty,
        activity_source: include_str!("templates/activities/EmptyActivity.java"),
        layout: include_str!("templates/layouts/activity_empty.xml"),
    },
    VariantTemplates {
        activity_type: ActivityType::Blank,
        activity_source: include_str!("templates/activities/BlankActivity.java"),
        layout: include_str!("templates/layouts/activity_blank.xml"),
    },
    VariantTemplates {
        activity_type: ActivityType::Fullscreen,
        activity_source: include_str!("templates/activities/FullscreenActivity.java"),
        layout: include_str!("templates/layouts/activity_fullscreen.xml"),
    },
    VariantTemplates {
        activity_type: ActivityType::Login,
        activity_source: include_str!("templates/activities/LoginActivity.java"),
        layout: include_str!("templates/layouts/activity_login.xml"),
    },
];

/// Lookup the templates for a variant.
pub fn variant_templates(activity_type: ActivityType) -> &'static VariantTemplates {
    match activity_type {
        ActivityType::Empty => &VARIANT_TEMPLATES[0],
        ActivityType::Blank => &VARIANT_TEMPLATES[1],
        ActivityType::Fullscreen => &VARIANT_TEMPLATES[2],
        ActivityType::Login => &VARIANT_TEMPLATES[3],
    }
}

/// Render a template with the given context. Undefined variables are hard
/// errors so a template/context drift is caught immediately.
pub fn render(template: &str, ctx: minijinja::Value) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.render_str(template, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn skeleton_includes_gradle_files() {
        let files = skeleton_files();
        assert!(files.iter().any(|f| f.path == "build.gradle"));
        assert!(files.iter().any(|f| f.path == "settings.gradle"));
        assert!(files.iter().any(|f| f.path == "app/_build.gradle"));
    }

    #[test]
    fn skeleton_includes_manifest_and_values() {
        let files = skeleton_files();
        assert!(files.iter().any(|f| f.path == "app/src/main/_AndroidManifest.xml"));
        for name in ["_strings.xml", "dimens.xml", "colors.xml", "styles.xml", "attrs.xml"] {
            assert!(
                files.iter().any(|f| f.path == format!("app/src/main/res/values/{name}")),
                "missing values skeleton {name}"
            );
        }
    }

    #[test]
    fn all_variants_have_nonempty_templates() {
        for variant in ActivityType::ALL {
            let templates = variant_templates(variant);
            assert_eq!(templates.activity_type, variant);
            assert!(!templates.activity_source.is_empty());
            assert!(!templates.layout.is_empty());
        }
    }

    #[test]
    fn activity_templates_render_with_request_context() {
        for variant in ActivityType::ALL {
            let templates = variant_templates(variant);
            let ctx = context! {
                activity_name => "MainActivity",
                activity_package => "com.example.app.view.activities",
                layout_name => "activity_main",
                app_package => "com.example.app",
            };
            let rendered = render(templates.activity_source, ctx).expect("render activity source");
            assert!(rendered.contains("class MainActivity"));
            assert!(rendered.contains("package com.example.app.view.activities;"));
            assert!(rendered.contains("R.layout.activity_main"));
        }
    }

    #[test]
    fn manifest_skeleton_renders_app_package() {
        let files = skeleton_files();
        let manifest = files
            .iter()
            .find(|f| f.path == "app/src/main/_AndroidManifest.xml")
            .expect("manifest skeleton");
        let rendered = render(
            manifest.content,
            context! { app_name => "Demo", app_package => "com.example.demo", target_sdk => 23, min_sdk => 17 },
        )
        .expect("render manifest");
        assert!(rendered.contains("package=\"com.example.demo\""));
        assert!(rendered.contains("</application>"));
    }

    #[test]
    fn strict_rendering_rejects_unknown_variables() {
        assert!(render("hello {{ missing }}", context! {}).is_err());
    }
}
