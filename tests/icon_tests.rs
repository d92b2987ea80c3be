//! Launcher icon generation and manifest icon attributes

mod common;

use common::*;

use std::fs;
use template_helper::command::generate::generate_project;
use template_helper::{TemplateError, ensure_manifest_icons, generate_icons};

const RES: &str = "app/src/main/res";

const DENSITIES: [(&str, u32); 5] = [
    ("mipmap-mdpi", 48),
    ("mipmap-hdpi", 72),
    ("mipmap-xhdpi", 96),
    ("mipmap-xxhdpi", 144),
    ("mipmap-xxxhdpi", 192),
];

#[test]
fn test_writes_every_density() {
    let temp = temp();
    let project = temp.path().join("project");
    let icon = temp.path().join("icon.png");
    write_png(&icon, 512);

    let report = generate_icons(&project, &icon).unwrap();

    assert_eq!(report.written.len(), 10);
    for (dir, edge) in DENSITIES {
        for name in ["ic_launcher.png", "ic_launcher_round.png"] {
            let path = project.join(RES).join(dir).join(name);
            assert_eq!(image::image_dimensions(&path).unwrap(), (edge, edge), "{}", path.display());
        }
    }
}

#[test]
fn test_small_source_is_upscaled() {
    let temp = temp();
    let project = temp.path().join("project");
    let icon = temp.path().join("tiny.png");
    write_png(&icon, 16);

    generate_icons(&project, &icon).unwrap();

    let largest = project.join(RES).join("mipmap-xxxhdpi/ic_launcher_round.png");
    assert_eq!(image::image_dimensions(largest).unwrap(), (192, 192));
}

#[test]
fn test_shadowing_files_removed() {
    let temp = temp();
    let project = temp.path().join("project");
    let res = project.join(RES);
    for rel in [
        "mipmap-hdpi/ic_launcher.webp",
        "mipmap-xxhdpi/ic_launcher_round.webp",
        "mipmap-anydpi-v26/ic_launcher.xml",
        "mipmap-anydpi-v26/ic_launcher_round.xml",
        "drawable/ic_launcher.xml",
        "drawable/ic_launcher_background.xml",
        "mipmap-hdpi/other.webp",
    ] {
        let path = res.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"placeholder").unwrap();
    }
    let icon = temp.path().join("icon.png");
    write_png(&icon, 64);

    let report = generate_icons(&project, &icon).unwrap();

    assert_eq!(report.removed.len(), 5);
    assert!(!res.join("mipmap-hdpi/ic_launcher.webp").exists());
    assert!(!res.join("mipmap-xxhdpi/ic_launcher_round.webp").exists());
    assert!(!res.join("mipmap-anydpi-v26/ic_launcher.xml").exists());
    assert!(!res.join("drawable/ic_launcher.xml").exists());
    assert!(res.join("drawable/ic_launcher_background.xml").exists());
    assert!(res.join("mipmap-hdpi/other.webp").exists());
}

#[test]
fn test_undecodable_image_fails() {
    let temp = temp();
    let project = temp.path().join("project");
    let icon = temp.path().join("icon.png");
    fs::write(&icon, b"definitely not a png").unwrap();

    let err = generate_icons(&project, &icon).unwrap_err();

    assert!(matches!(err, TemplateError::Image(_)));
    assert!(!project.join(RES).exists());
}

#[test]
fn test_manifest_icons_idempotent() {
    let temp = temp();
    let manifest = temp.path().join("AndroidManifest.xml");
    fs::write(
        &manifest,
        "<manifest>\n    <application android:label=\"App\">\n    </application>\n</manifest>\n",
    )
    .unwrap();

    assert!(ensure_manifest_icons(&manifest).unwrap());
    let once = fs::read(&manifest).unwrap();
    assert!(!ensure_manifest_icons(&manifest).unwrap());
    let twice = fs::read(&manifest).unwrap();

    assert_eq!(once, twice);
    let text = String::from_utf8(twice).unwrap();
    assert_eq!(text.matches("android:icon=").count(), 1);
    assert_eq!(text.matches("android:roundIcon=").count(), 1);
}

#[test]
fn test_generate_with_icon() {
    let temp = temp();
    let archive = demo_template(temp.path());
    let icon = temp.path().join("logo.png");
    write_png(&icon, 256);
    let dest = temp.path().join("MyApp");

    let report = generate_project(&archive, &dest, "MyApp", "com.myapp", Some(&icon)).unwrap();

    let icons = report.icons.unwrap();
    assert_eq!(icons.written.len(), 10);
    assert!(dest.join(RES).join("mipmap-mdpi/ic_launcher.png").is_file());
}
