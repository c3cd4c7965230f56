mod common;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn app_scaffold_creates_project_tree() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["app", "Demo App", "com.example.demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("create app/src/main/AndroidManifest.xml"));

    for rel in [
        "build.gradle",
        "settings.gradle",
        "gradle.properties",
        ".gitignore",
        "README.md",
        "app/.gitignore",
        "app/build.gradle",
        "app/proguard-rules.pro",
        "app/src/main/AndroidManifest.xml",
        "app/src/main/res/values/strings.xml",
        "app/src/main/res/values/dimens.xml",
        "app/src/main/res/values/colors.xml",
        "app/src/main/res/values/styles.xml",
        "app/src/main/res/values/attrs.xml",
        ".droidgen.toml",
    ] {
        assert!(ctx.exists(rel), "{rel} should exist after app scaffold");
    }
    assert!(ctx.exists("app/src/main/java/com/example/demo"));
    assert!(ctx.exists("app/src/main/res/layout"));

    let manifest = ctx.read("app/src/main/AndroidManifest.xml");
    assert!(manifest.contains("package=\"com.example.demo\""));

    let readme = ctx.read("README.md");
    assert!(readme.contains("# Demo App"));
}

#[test]
fn app_scaffold_respects_sdk_flags() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["app", "Demo", "com.example.demo", "--target-sdk", "25", "--min-sdk", "19"])
        .assert()
        .success();

    let build = ctx.read("app/build.gradle");
    assert!(build.contains("targetSdkVersion 25"));
    assert!(build.contains("minSdkVersion 19"));
}

#[test]
fn app_scaffold_refuses_existing_project() {
    let ctx = TestContext::new();

    ctx.cli().args(["app", "Demo", "com.example.demo"]).assert().success();

    ctx.cli()
        .args(["app", "Demo", "com.example.demo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn activity_reads_app_package_from_settings() {
    let ctx = TestContext::new();
    ctx.scaffold_app("Demo", "com.example.demo");

    // App package omitted; the saved settings supply it.
    ctx.cli()
        .args([
            "activity",
            "blank",
            "MainActivity",
            "com.example.demo.view.activities",
            "activity_main",
            "false",
        ])
        .assert()
        .success();

    let manifest = ctx.read("app/src/main/AndroidManifest.xml");
    assert!(manifest.contains("android:name=\".view.activities.MainActivity\""));
}
