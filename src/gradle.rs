//! Build-descriptor injection for variants that need the design library.

use std::fs;
use std::path::Path;

use crate::merge::MergeError;

/// Start-of-dependency-block sentinel in `app/build.gradle`.
pub const DEPENDENCIES_ANCHOR: &str = "dependencies {";

/// Dependency line required by the login variant.
pub const DESIGN_LIBRARY: &str = "compile 'com.android.support:design:23.1.1'";

/// Presence marker for the design library, independent of version.
const DESIGN_MARKER: &str = "com.android.support:design";

/// Insert the design-library dependency as the first line of the
/// `dependencies` block.
///
/// Returns whether the file was modified. An absent block is "nothing to
/// attach to", not an error, and an already-present dependency leaves the
/// file untouched.
pub fn inject_design_library(path: &Path) -> Result<bool, MergeError> {
    if !path.exists() {
        return Err(MergeError::FileMissing(path.display().to_string()));
    }

    let build = fs::read_to_string(path)?;
    if build.contains(DESIGN_MARKER) {
        return Ok(false);
    }
    let Some(idx) = build.find(DEPENDENCIES_ANCHOR) else {
        return Ok(false);
    };

    let insert_at = idx + DEPENDENCIES_ANCHOR.len();
    let mut updated = String::with_capacity(build.len() + DESIGN_LIBRARY.len() + 8);
    updated.push_str(&build[..insert_at]);
    updated.push_str("\n    ");
    updated.push_str(DESIGN_LIBRARY);
    updated.push_str(&build[insert_at..]);
    fs::write(path, updated)?;

    Ok(true)
}
