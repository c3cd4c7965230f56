//! Text helpers for Java/Android naming conventions.

/// Convert CamelCase (or dotted CamelCase) to snake_case.
pub fn camel_to_snake(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    for c in input.chars() {
        if c == '.' {
            continue;
        }
        if c.is_uppercase() {
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Uppercase the first character.
pub fn capitalize_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Strip a trailing `Activity` from a class name, if present.
pub fn strip_activity_suffix(input: &str) -> &str {
    input.strip_suffix("Activity").unwrap_or(input)
}

/// Convert a dotted Java package to a relative directory path.
pub fn package_to_dir(package: &str) -> String {
    package.replace('.', "/")
}

/// Default layout name for an activity: `activity_` + snake-cased,
/// suffix-stripped class name.
pub fn default_layout_name(activity_name: &str) -> String {
    format!("activity_{}", camel_to_snake(strip_activity_suffix(activity_name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_to_snake_splits_words() {
        assert_eq!(camel_to_snake("MainMenu"), "main_menu");
        assert_eq!(camel_to_snake("Login"), "login");
        assert_eq!(camel_to_snake("already_snake"), "already_snake");
    }

    #[test]
    fn camel_to_snake_ignores_dots() {
        assert_eq!(camel_to_snake("Sign.In"), "sign_in");
    }

    #[test]
    fn capitalize_first_handles_empty() {
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("empty"), "Empty");
    }

    #[test]
    fn strip_activity_suffix_only_strips_trailing() {
        assert_eq!(strip_activity_suffix("MainActivity"), "Main");
        assert_eq!(strip_activity_suffix("ActivityFeed"), "ActivityFeed");
        assert_eq!(strip_activity_suffix("Main"), "Main");
    }

    #[test]
    fn package_to_dir_replaces_dots() {
        assert_eq!(package_to_dir("com.example.app"), "com/example/app");
    }

    #[test]
    fn default_layout_name_strips_and_snakes() {
        assert_eq!(default_layout_name("MainActivity"), "activity_main");
        assert_eq!(default_layout_name("SignInFlowActivity"), "activity_sign_in_flow");
    }
}
