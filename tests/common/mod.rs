//! Shared fixtures for template-helper integration tests.
//!
//! Templates are built in-test as zip archives laid out like the inventory
//! stores them: entries rooted at the project directory.

#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use zip::write::FileOptions;

pub const DEMO_MANIFEST: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<manifest xmlns:android="http://schemas.android.com/apk/res/android"
    package="com.example.demo"
    android:versionCode="3">
    <application
        android:icon="@drawable/legacy_icon"
        android:label="@string/app_name"
        android:theme="@style/Theme.DemoProject">
        <activity android:name=".MainActivity" />
    </application>
</manifest>
"#;

/// One archive entry: a directory when `content` is `None`.
pub struct Entry<'a> {
    pub name: &'a str,
    pub content: Option<&'a [u8]>,
    pub mode: u32,
}

impl<'a> Entry<'a> {
    pub fn dir(name: &'a str) -> Self {
        Self {
            name,
            content: None,
            mode: 0o755,
        }
    }

    pub fn file(name: &'a str, content: &'a str) -> Self {
        Self {
            name,
            content: Some(content.as_bytes()),
            mode: 0o644,
        }
    }

    pub fn bytes(name: &'a str, content: &'a [u8]) -> Self {
        Self {
            name,
            content: Some(content),
            mode: 0o644,
        }
    }

    pub fn mode(mut self, mode: u32) -> Self {
        self.mode = mode;
        self
    }
}

/// Writes `entries` in order into a zip at `path`.
pub fn write_zip(path: &Path, entries: &[Entry]) {
    let file = fs::File::create(path).unwrap();
    let mut zip = zip::ZipWriter::new(file);

    for entry in entries {
        let options = FileOptions::default().unix_permissions(entry.mode);
        match entry.content {
            None => zip.add_directory(entry.name, options).unwrap(),
            Some(content) => {
                zip.start_file(entry.name, options).unwrap();
                zip.write_all(content).unwrap();
            }
        }
    }

    zip.finish().unwrap();
}

/// Entries of a small Gradle Android project named `DemoProject`.
pub fn demo_entries() -> Vec<Entry<'static>> {
    vec![
        Entry::dir("app/"),
        Entry::file(
            "settings.gradle",
            "rootProject.name = 'DemoProject'\ninclude ':app'\n",
        ),
        Entry::file(
            "app/build.gradle",
            "android {\n    namespace 'com.example.demo'\n    defaultConfig {\n        applicationId \"com.example.demo\"\n    }\n}\n",
        ),
        Entry::dir("app/src/main/"),
        Entry::file("app/src/main/AndroidManifest.xml", DEMO_MANIFEST),
        Entry::file(
            "app/src/main/res/values/strings.xml",
            "<resources>\n    <string name=\"app_name\">BLE APP</string>\n</resources>\n",
        ),
        Entry::file(
            "app/src/main/res/values/themes.xml",
            "<style name=\"Theme.DemoProject\" />\n",
        ),
        Entry::dir("app/src/main/java/com/example/demo/"),
        Entry::file(
            "app/src/main/java/com/example/demo/MainActivity.kt",
            "package com.example.demo\n\n// DemoProject demoproject DEMOPROJECT\nclass MainActivity\n",
        ),
        Entry::file(
            "app/src/main/java/com/example/demo/ui/Theme.kt",
            "package com.example.demo.ui\n\nimport com.example.demo.MainActivity\n",
        ),
        Entry::file("gradlew", "#!/bin/sh\necho DemoProject\n").mode(0o755),
    ]
}

/// Writes the demo template as `DemoProject.zip` into `dir`.
pub fn demo_template(dir: &Path) -> PathBuf {
    let path = dir.join("DemoProject.zip");
    write_zip(&path, &demo_entries());
    path
}

/// Writes a square PNG of `edge` pixels at `path`.
pub fn write_png(path: &Path, edge: u32) {
    let img = image::RgbaImage::from_pixel(edge, edge, image::Rgba([200, 40, 40, 255]));
    img.save(path).unwrap();
}

pub fn read(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap()
}

/// Runs the binary with a throwaway templates directory.
#[allow(unused)]
pub fn run_cli(templates_dir: &Path, args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("template-helper");
    cmd.arg("--templates-dir")
        .arg(templates_dir)
        .args(args)
        .env_remove("TEMPLATE_HELPER_DIR");

    cmd.assert()
}

#[allow(unused)]
pub fn temp() -> TempDir {
    TempDir::new().unwrap()
}
