//! droidgen: scaffold Android application source trees and generate new
//! activity screens, idempotently merging resource fragments into shared
//! project files.

pub mod catalog;
pub mod commands;
pub mod error;
pub mod gradle;
pub mod manifest;
pub mod merge;
pub mod naming;
pub mod project;
mod prompts;
pub mod request;
pub mod settings;
pub mod templates;

pub use commands::activity::ActivityOutcome;
pub use commands::app::AppRequest;
pub use error::AppError;
pub use request::{ActivityRequest, ActivityType};

use naming::default_layout_name;
use project::Project;
use settings::Settings;

/// CLI arguments for the activity command, all optional; anything omitted is
/// prompted for with a computed default.
#[derive(Debug, Default, Clone)]
pub struct ActivityArgs {
    pub activity_type: Option<String>,
    pub activity_name: Option<String>,
    pub activity_package: Option<String>,
    pub layout_name: Option<String>,
    /// The literal strings `"true"` / `"false"`.
    pub launcher: Option<String>,
    pub app_package: Option<String>,
}

/// Generate a new activity in the project rooted at the current directory.
///
/// Prints a per-file report. A destination conflict is reported but is not a
/// hard failure; callers inspect the returned outcome, not the exit code.
pub fn activity(args: ActivityArgs) -> Result<ActivityOutcome, AppError> {
    let project = Project::current()?;
    let settings = Settings::load(&project.settings_path())?;

    let request = resolve_request(args, &settings)?;
    let outcome = commands::activity::execute(&project, &request)?;
    report(&outcome);
    Ok(outcome)
}

/// Scaffold a new Android project skeleton in the current directory.
pub fn app(
    app_name: Option<&str>,
    app_package: Option<&str>,
    target_sdk: u32,
    min_sdk: u32,
) -> Result<(), AppError> {
    let project = Project::current()?;

    let app_name = match app_name {
        Some(name) => name.to_string(),
        None => prompts::input_with_default("What are you calling your app?", "My Application")?,
    };
    let app_package = match app_package {
        Some(package) => package.to_string(),
        None => prompts::input_with_default(
            "What package will you be publishing the app under?",
            "com.example.app",
        )?,
    };

    let request = AppRequest { app_name, app_package, target_sdk, min_sdk };
    let created = commands::app::execute(&project, &request)?;
    for path in &created {
        println!("   create {path}");
    }
    Ok(())
}

/// Resolve CLI arguments into a complete request, prompting for gaps.
fn resolve_request(args: ActivityArgs, settings: &Settings) -> Result<ActivityRequest, AppError> {
    let activity_type = match args.activity_type.as_deref() {
        Some(name) => {
            ActivityType::parse(name).ok_or_else(|| AppError::InvalidActivityType(name.to_string()))?
        }
        None => prompts::select_activity_type()?,
    };

    let activity_name = match args.activity_name {
        Some(name) => name,
        None => prompts::input_with_default(
            "What are you calling your activity?",
            &activity_type.default_activity_name(),
        )?,
    };

    let app_package = match args.app_package {
        Some(package) => package,
        None => match &settings.app.package {
            Some(package) => package.clone(),
            None => prompts::input_with_default(
                "What package is the app published under?",
                "com.example.app",
            )?,
        },
    };

    let activity_package = match args.activity_package {
        Some(package) => package,
        None => prompts::input_with_default(
            "Under which package do you want to create the activity?",
            &format!("{app_package}.view.activities"),
        )?,
    };

    let layout_name = match args.layout_name {
        Some(layout) => layout,
        None => prompts::input_with_default(
            "What are you calling the corresponding layout?",
            &default_layout_name(&activity_name),
        )?,
    };

    let is_launcher = match args.launcher.as_deref() {
        Some("true") => true,
        Some("false") => false,
        Some(other) => {
            return Err(AppError::config_error(format!(
                "Invalid launcher flag '{other}': must be \"true\" or \"false\""
            )));
        }
        None => prompts::confirm_launcher()?,
    };

    Ok(ActivityRequest {
        activity_type,
        activity_name,
        activity_package,
        layout_name,
        is_launcher,
        app_package,
    })
}

/// Yeoman-style per-file report on stdout.
fn report(outcome: &ActivityOutcome) {
    for path in &outcome.conflicts {
        println!("    error {path} already exists");
    }
    for path in &outcome.created {
        println!("   create {path}");
    }
    for path in &outcome.updated {
        println!("   update {path}");
    }
    for warning in &outcome.warnings {
        println!("     warn {warning}");
    }
}
