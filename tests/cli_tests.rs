//! End-to-end tests of the `template-helper` binary

mod common;

use common::*;

use predicates::prelude::*;
use std::fs;

#[test]
fn test_list_empty_inventory() {
    let temp = temp();

    run_cli(&temp.path().join("templates"), &["templates", "list"])
        .success()
        .stdout(predicate::str::contains("No templates found"));
}

#[test]
fn test_list_shows_template_names() {
    let temp = temp();
    let templates = temp.path().join("templates");
    fs::create_dir_all(&templates).unwrap();
    demo_template(&templates);
    fs::write(templates.join("notes.txt"), "not a template").unwrap();

    run_cli(&templates, &["templates", "list"])
        .success()
        .stdout(predicate::str::contains("DemoProject"))
        .stdout(predicate::str::contains("notes").not());
}

#[test]
fn test_add_then_remove_template() {
    let temp = temp();
    let templates = temp.path().join("templates");
    let project = temp.path().join("Starter");
    fs::create_dir_all(project.join("app")).unwrap();
    fs::write(project.join("settings.gradle"), "rootProject.name = 'Starter'\n").unwrap();

    run_cli(&templates, &["templates", "add", project.to_str().unwrap()])
        .success()
        .stdout(predicate::str::contains("Starter"));
    assert!(templates.join("Starter.zip").is_file());

    run_cli(&templates, &["templates", "add", project.to_str().unwrap()])
        .failure()
        .stderr(predicate::str::contains("already exists"));

    run_cli(&templates, &["templates", "remove", "Starter", "--yes"]).success();
    assert!(!templates.join("Starter.zip").exists());
}

#[test]
fn test_remove_missing_template() {
    let temp = temp();

    run_cli(temp.path(), &["templates", "remove", "Ghost", "-y"])
        .failure()
        .stderr(predicate::str::contains("Template 'Ghost' not found"));
}

#[test]
fn test_remove_without_terminal_is_cancelled() {
    let temp = temp();
    demo_template(temp.path());

    run_cli(temp.path(), &["templates", "remove", "DemoProject"])
        .failure()
        .stderr(predicate::str::contains("cancelled"));
    assert!(temp.path().join("DemoProject.zip").is_file());
}

#[test]
fn test_detect_prints_identifiers() {
    let temp = temp();
    demo_template(temp.path());

    run_cli(temp.path(), &["detect", "DemoProject"])
        .success()
        .stdout(predicate::str::contains("DemoProject"))
        .stdout(predicate::str::contains("com.example.demo"))
        .stdout(predicate::str::contains("BLE APP"));
}

#[test]
fn test_detect_unknown_template() {
    let temp = temp();

    run_cli(temp.path(), &["detect", "Nope"])
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_generate_into_dest() {
    let temp = temp();
    let templates = temp.path().join("templates");
    fs::create_dir_all(&templates).unwrap();
    demo_template(&templates);
    let dest = temp.path().join("MyApp");

    run_cli(
        &templates,
        &[
            "generate",
            "DemoProject",
            "--name",
            "MyApp",
            "--package",
            "com.myapp",
            "--dest",
            dest.to_str().unwrap(),
        ],
    )
    .success()
    .stdout(predicate::str::contains("Successfully generated"));

    assert!(dest.join("app/src/main/java/com/myapp/MainActivity.kt").is_file());
    assert!(read(&dest, "settings.gradle").contains("'MyApp'"));
}

#[test]
fn test_generate_from_archive_path() {
    let temp = temp();
    let archive = demo_template(temp.path());
    let dest = temp.path().join("out");

    run_cli(
        &temp.path().join("unused"),
        &[
            "generate",
            archive.to_str().unwrap(),
            "-n",
            "Other",
            "-p",
            "org.other",
            "--dest",
            dest.to_str().unwrap(),
        ],
    )
    .success();

    assert!(dest.join("app/src/main/java/org/other/ui/Theme.kt").is_file());
}

#[test]
fn test_generate_refuses_non_empty_dest() {
    let temp = temp();
    demo_template(temp.path());
    let dest = temp.path().join("busy");
    fs::create_dir_all(&dest).unwrap();
    fs::write(dest.join("keep.txt"), "mine").unwrap();
    let args = [
        "generate",
        "DemoProject",
        "--name",
        "MyApp",
        "--package",
        "com.myapp",
        "--dest",
        dest.to_str().unwrap(),
    ];

    run_cli(temp.path(), &args)
        .failure()
        .stderr(predicate::str::contains("already exists"));
    assert!(!dest.join("settings.gradle").exists());

    let mut forced = args.to_vec();
    forced.push("--force");
    run_cli(temp.path(), &forced).success();
    assert!(dest.join("settings.gradle").is_file());
    assert_eq!(read(&dest, "keep.txt"), "mine");
}

#[test]
fn test_generate_rejects_bad_package() {
    let temp = temp();
    demo_template(temp.path());
    let dest = temp.path().join("out");

    run_cli(
        temp.path(),
        &[
            "generate",
            "DemoProject",
            "--name",
            "MyApp",
            "--package",
            "com.1bad",
            "--dest",
            dest.to_str().unwrap(),
        ],
    )
    .failure()
    .stderr(predicate::str::contains("Invalid name"));
    assert!(!dest.exists());
}

#[test]
fn test_generate_with_missing_icon() {
    let temp = temp();
    demo_template(temp.path());
    let dest = temp.path().join("out");
    let icon = temp.path().join("missing.png");

    run_cli(
        temp.path(),
        &[
            "generate",
            "DemoProject",
            "-n",
            "MyApp",
            "-p",
            "com.myapp",
            "--icon",
            icon.to_str().unwrap(),
            "--dest",
            dest.to_str().unwrap(),
        ],
    )
    .failure();
    assert!(!dest.exists());
}
