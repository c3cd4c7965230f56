//! Manifest injection: registering the new activity, optionally as launcher.

use std::fs;
use std::path::Path;

use crate::merge::{MergeError, insert_before_closing};
use crate::request::ActivityRequest;

/// Sentinel meaning "a launcher activity already exists" anywhere in the
/// manifest text.
pub const LAUNCHER_CATEGORY: &str = "android.intent.category.LAUNCHER";

/// Result of a manifest injection.
#[derive(Debug, Clone, Copy)]
pub struct ManifestInjection {
    pub modified: bool,
    /// The request asked for a launcher but one already existed; the
    /// activity was added without an intent-filter.
    pub launcher_skipped: bool,
}

/// Inject an `<activity>` declaration into the manifest's `application`
/// element.
///
/// When `is_launcher` is set and no launcher sentinel is present, the block
/// carries a MAIN/LAUNCHER intent-filter. When a launcher already exists the
/// plain block is injected instead so the manifest never ends up with two
/// launcher declarations; existing declarations are never altered.
pub fn inject_activity(
    path: &Path,
    request: &ActivityRequest,
) -> Result<ManifestInjection, MergeError> {
    if !path.exists() {
        return Err(MergeError::FileMissing(path.display().to_string()));
    }

    let manifest = fs::read_to_string(path)?;
    let launcher_present = manifest.contains(LAUNCHER_CATEGORY);

    let wire_as_launcher = request.is_launcher && !launcher_present;
    let block = if wire_as_launcher { launcher_block(request) } else { plain_block(request) };

    let updated = insert_before_closing(&manifest, "application", &block)
        .ok_or_else(|| MergeError::AnchorMissing("application".to_string()))?;
    fs::write(path, updated)?;

    Ok(ManifestInjection {
        modified: true,
        launcher_skipped: request.is_launcher && launcher_present,
    })
}

/// Manifest-relative class name: dot-relative when the activity package sits
/// under the app package, fully qualified otherwise.
fn manifest_activity_name(request: &ActivityRequest) -> String {
    if let Some(rest) = request.activity_package.strip_prefix(&request.app_package)
        && (rest.is_empty() || rest.starts_with('.'))
    {
        return format!("{rest}.{}", request.activity_name);
    }
    format!("{}.{}", request.activity_package, request.activity_name)
}

fn plain_block(request: &ActivityRequest) -> String {
    format!(
        "\n        <activity\n            android:name=\"{name}\"\n            android:label=\"@string/{title}\" />\n",
        name = manifest_activity_name(request),
        title = request.title_key(),
    )
}

fn launcher_block(request: &ActivityRequest) -> String {
    format!(
        concat!(
            "\n        <activity\n",
            "            android:name=\"{name}\"\n",
            "            android:label=\"@string/{title}\">\n",
            "            <intent-filter>\n",
            "                <action android:name=\"android.intent.action.MAIN\" />\n",
            "                <category android:name=\"android.intent.category.LAUNCHER\" />\n",
            "            </intent-filter>\n",
            "        </activity>\n",
        ),
        name = manifest_activity_name(request),
        title = request.title_key(),
    )
}
