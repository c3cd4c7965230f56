//! The variant fragment catalog.
//!
//! A pure lookup from activity variant to the ordered fragments each shared
//! resource file must contain for that variant. Markers are the
//! fully-qualified opening tag of the element a fragment introduces, so a
//! plain substring test decides "already applied" without false negatives.

use crate::project::ResourceRole;
use crate::request::{ActivityRequest, ActivityType};

/// One idempotently-mergeable piece of a shared resource file.
#[derive(Debug, Clone)]
pub struct Fragment {
    /// Which shared file this fragment belongs to.
    pub role: ResourceRole,
    /// Exact substring whose presence means the fragment is already applied.
    /// Reusing a marker for two different fragments is a catalog authoring
    /// error.
    pub marker: String,
    /// Literal text inserted into the file's root container when absent.
    pub content: String,
}

impl Fragment {
    fn new(role: ResourceRole, marker: impl Into<String>, content: impl Into<String>) -> Self {
        Self { role, marker: marker.into(), content: content.into() }
    }

    fn string(name: &str, value: &str) -> Self {
        Fragment::new(
            ResourceRole::Strings,
            format!("<string name=\"{name}\">"),
            format!("    <string name=\"{name}\">{value}</string>\n"),
        )
    }

    fn dimen(name: &str, value: &str) -> Self {
        Fragment::new(
            ResourceRole::Dimens,
            format!("<dimen name=\"{name}\">"),
            format!("    <dimen name=\"{name}\">{value}</dimen>\n"),
        )
    }
}

/// Fragments the selected variant requires, in deterministic catalog order.
pub fn fragments_for(request: &ActivityRequest) -> Vec<Fragment> {
    let mut fragments = vec![Fragment::string(&request.title_key(), &request.title())];

    match request.activity_type {
        ActivityType::Empty | ActivityType::Blank => {
            fragments.extend(margin_fragments());
        }
        ActivityType::Fullscreen => {
            fragments.push(Fragment::string("dummy_content", "DUMMY\\nCONTENT"));
            fragments.push(Fragment::string("dummy_button", "Dummy Button"));
            fragments.push(Fragment::new(
                ResourceRole::Colors,
                "<color name=\"black_overlay\">",
                "    <color name=\"black_overlay\">#66000000</color>\n",
            ));
            fragments.push(Fragment::new(
                ResourceRole::Styles,
                "<style name=\"FullscreenTheme\" parent=\"@android:style/Theme.Holo.Light\">",
                concat!(
                    "    <style name=\"FullscreenTheme\" parent=\"@android:style/Theme.Holo.Light\">\n",
                    "        <item name=\"android:actionBarStyle\">@style/FullscreenActionBarStyle</item>\n",
                    "        <item name=\"android:windowActionBarOverlay\">true</item>\n",
                    "        <item name=\"android:windowBackground\">@null</item>\n",
                    "        <item name=\"metaButtonBarStyle\">?android:attr/buttonBarStyle</item>\n",
                    "        <item name=\"metaButtonBarButtonStyle\">?android:attr/buttonBarButtonStyle</item>\n",
                    "    </style>\n",
                ),
            ));
            fragments.push(Fragment::new(
                ResourceRole::Styles,
                "<style name=\"FullscreenActionBarStyle\" parent=\"android:Widget.Holo.ActionBar\">",
                concat!(
                    "    <style name=\"FullscreenActionBarStyle\" parent=\"android:Widget.Holo.ActionBar\">\n",
                    "        <item name=\"android:background\">@color/black_overlay</item>\n",
                    "    </style>\n",
                ),
            ));
            fragments.push(Fragment::new(
                ResourceRole::Attrs,
                "<declare-styleable name=\"ButtonBarContainerTheme\">",
                concat!(
                    "    <declare-styleable name=\"ButtonBarContainerTheme\">\n",
                    "        <attr name=\"metaButtonBarStyle\" format=\"reference\" />\n",
                    "        <attr name=\"metaButtonBarButtonStyle\" format=\"reference\" />\n",
                    "    </declare-styleable>\n",
                ),
            ));
        }
        ActivityType::Login => {
            fragments.push(Fragment::new(
                ResourceRole::Strings,
                "<!-- Strings related to login -->",
                "\n    <!-- Strings related to login -->\n",
            ));
            fragments.push(Fragment::string("prompt_email", "Email"));
            fragments.push(Fragment::string("prompt_password", "Password (optional)"));
            fragments.push(Fragment::string("action_sign_in", "Sign in or register"));
            fragments.push(Fragment::string("action_sign_in_short", "Sign in"));
            fragments.push(Fragment::string("error_invalid_email", "This email address is invalid"));
            fragments.push(Fragment::string("error_invalid_password", "This password is too short"));
            fragments
                .push(Fragment::string("error_incorrect_password", "This password is incorrect"));
            fragments.push(Fragment::string("error_field_required", "This field is required"));
            fragments.push(Fragment::string(
                "permission_rationale",
                "\"Contacts permissions are needed for providing email completions.\"",
            ));
            fragments.extend(margin_fragments());
        }
    }

    fragments
}

fn margin_fragments() -> [Fragment; 2] {
    [
        Fragment::dimen("activity_horizontal_margin", "16dp"),
        Fragment::dimen("activity_vertical_margin", "16dp"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn request(activity_type: ActivityType) -> ActivityRequest {
        ActivityRequest {
            activity_type,
            activity_name: "MainActivity".to_string(),
            activity_package: "com.example.app.view.activities".to_string(),
            layout_name: "activity_main".to_string(),
            is_launcher: false,
            app_package: "com.example.app".to_string(),
        }
    }

    #[test]
    fn markers_are_unique_within_every_variant() {
        for variant in ActivityType::ALL {
            let fragments = fragments_for(&request(variant));
            let markers: HashSet<&str> = fragments.iter().map(|f| f.marker.as_str()).collect();
            assert_eq!(markers.len(), fragments.len(), "duplicate marker in {variant:?} catalog");
        }
    }

    #[test]
    fn every_fragment_contains_its_own_marker() {
        for variant in ActivityType::ALL {
            for fragment in fragments_for(&request(variant)) {
                assert!(
                    fragment.content.contains(&fragment.marker),
                    "fragment content for {:?} does not embed marker {:?}",
                    fragment.role,
                    fragment.marker
                );
            }
        }
    }

    #[test]
    fn title_fragment_interpolates_layout_and_name() {
        let fragments = fragments_for(&request(ActivityType::Blank));
        assert_eq!(fragments[0].marker, "<string name=\"title_activity_main\">");
        assert!(fragments[0].content.contains(">Main</string>"));
    }

    #[test]
    fn empty_and_blank_carry_margin_dimens() {
        for variant in [ActivityType::Empty, ActivityType::Blank] {
            let fragments = fragments_for(&request(variant));
            assert_eq!(fragments.len(), 3);
            let dimens: Vec<_> =
                fragments.iter().filter(|f| f.role == ResourceRole::Dimens).collect();
            assert_eq!(dimens.len(), 2);
            assert!(dimens.iter().all(|f| f.content.contains("16dp")));
        }
    }

    #[test]
    fn fullscreen_touches_four_resource_files() {
        let roles: HashSet<ResourceRole> =
            fragments_for(&request(ActivityType::Fullscreen)).iter().map(|f| f.role).collect();
        assert_eq!(
            roles,
            HashSet::from([
                ResourceRole::Strings,
                ResourceRole::Colors,
                ResourceRole::Styles,
                ResourceRole::Attrs
            ])
        );
    }

    #[test]
    fn login_titles_sign_in_and_keeps_margins() {
        let fragments = fragments_for(&request(ActivityType::Login));
        assert!(fragments[0].content.contains(">Sign in</string>"));
        assert!(fragments.iter().any(|f| f.marker == "<!-- Strings related to login -->"));
        assert_eq!(fragments.iter().filter(|f| f.role == ResourceRole::Dimens).count(), 2);
        // title + comment + nine login strings + two dimens
        assert_eq!(fragments.len(), 13);
    }
}
