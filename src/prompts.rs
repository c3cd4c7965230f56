//! Interactive prompts for arguments omitted on the command line.
//!
//! When stdin/stdout are not terminals (CI, piped input) each prompt falls
//! back to reading a single line from stdin, empty input meaning "take the
//! default".

use std::io::{BufRead, IsTerminal, Write};

use dialoguer::{Input, Select};

use crate::error::AppError;
use crate::request::ActivityType;

fn interactive() -> bool {
    std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
}

/// Select one of the four activity variants.
pub fn select_activity_type() -> Result<ActivityType, AppError> {
    if interactive() {
        let items: Vec<&str> = ActivityType::ALL.iter().map(|t| t.display_name()).collect();
        let selection = Select::new()
            .with_prompt("Which type of activity would you like to create?")
            .items(&items)
            .default(0)
            .interact()
            .map_err(|e| AppError::config_error(format!("Activity type selection failed: {e}")))?;
        return Ok(ActivityType::ALL[selection]);
    }

    let input = read_stdin_line("activity type")?;
    let trimmed = input.trim();

    // Accept a 1-based index or a variant name.
    if let Ok(index) = trimmed.parse::<usize>()
        && index >= 1
        && index <= ActivityType::ALL.len()
    {
        return Ok(ActivityType::ALL[index - 1]);
    }
    ActivityType::parse(trimmed).ok_or_else(|| AppError::InvalidActivityType(trimmed.to_string()))
}

/// Free-text prompt with a computed default.
pub fn input_with_default(prompt: &str, default: &str) -> Result<String, AppError> {
    if interactive() {
        return Input::<String>::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .interact_text()
            .map_err(|e| AppError::config_error(format!("Prompt '{prompt}' failed: {e}")));
    }

    let input = read_stdin_line(prompt)?;
    let trimmed = input.trim();
    if trimmed.is_empty() { Ok(default.to_string()) } else { Ok(trimmed.to_string()) }
}

/// Ask whether the activity should be started on launch. Defaults to no.
pub fn confirm_launcher() -> Result<bool, AppError> {
    if interactive() {
        let selection = Select::new()
            .with_prompt("Should this activity be started on launch?")
            .items(&["Yes", "No"])
            .default(1)
            .interact()
            .map_err(|e| AppError::config_error(format!("Launcher selection failed: {e}")))?;
        return Ok(selection == 0);
    }

    let input = read_stdin_line("launcher")?;
    Ok(matches!(input.trim(), "true" | "yes" | "y" | "Yes"))
}

fn read_stdin_line(what: &str) -> Result<String, AppError> {
    if interactive() {
        print!("{what}: ");
        std::io::stdout().flush().ok();
    }

    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .map_err(|e| AppError::config_error(format!("Failed to read {what}: {e}")))?;
    Ok(input)
}
