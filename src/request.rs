//! The configuration model for a single activity-generation run.

use crate::naming::{capitalize_first, strip_activity_suffix};

/// The four supported activity variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityType {
    Empty,
    Blank,
    Fullscreen,
    Login,
}

impl ActivityType {
    pub const ALL: [ActivityType; 4] = [
        ActivityType::Empty,
        ActivityType::Blank,
        ActivityType::Fullscreen,
        ActivityType::Login,
    ];

    /// Parse a CLI argument into a variant.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "empty" => Some(ActivityType::Empty),
            "blank" => Some(ActivityType::Blank),
            "fullscreen" => Some(ActivityType::Fullscreen),
            "login" => Some(ActivityType::Login),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Empty => "empty",
            ActivityType::Blank => "blank",
            ActivityType::Fullscreen => "fullscreen",
            ActivityType::Login => "login",
        }
    }

    /// Human-readable name used in the selection prompt.
    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityType::Empty => "empty activity",
            ActivityType::Blank => "blank activity",
            ActivityType::Fullscreen => "fullscreen activity",
            ActivityType::Login => "login activity",
        }
    }

    /// Default class name offered for this variant, e.g. `BlankActivity`.
    pub fn default_activity_name(&self) -> String {
        format!("{}Activity", capitalize_first(self.as_str()))
    }

    /// Whether this variant needs the design support library wired into the
    /// build descriptor.
    pub fn needs_design_library(&self) -> bool {
        matches!(self, ActivityType::Login)
    }
}

/// Immutable record of the user's choices for one run.
///
/// Constructed once (from CLI arguments and prompts) before the writing
/// phase begins; read-only for the rest of the pipeline.
#[derive(Debug, Clone)]
pub struct ActivityRequest {
    pub activity_type: ActivityType,
    /// Java class name, e.g. `MainActivity`.
    pub activity_name: String,
    /// Dotted package the activity class lives in.
    pub activity_package: String,
    /// Layout resource name, snake_case by convention.
    pub layout_name: String,
    /// Whether the activity should be registered as the launcher.
    pub is_launcher: bool,
    /// The application's root package.
    pub app_package: String,
}

impl ActivityRequest {
    /// The title string value for this activity. Login screens are titled
    /// "Sign in"; everything else uses the de-suffixed class name.
    pub fn title(&self) -> String {
        match self.activity_type {
            ActivityType::Login => "Sign in".to_string(),
            _ => strip_activity_suffix(&self.activity_name).to_string(),
        }
    }

    /// The `name="…"` key of the title string resource.
    pub fn title_key(&self) -> String {
        format!("title_{}", self.layout_name)
    }
}
