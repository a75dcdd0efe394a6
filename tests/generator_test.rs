mod common;

use deck_subtheme::copier::EntryKind;
use deck_subtheme::error::Error;
use deck_subtheme::generator::generate;
use deck_subtheme::request::GenerationRequest;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use walkdir::WalkDir;

async fn generate_test_theme(root: &Path) -> deck_subtheme::generator::GenerationReport {
    let request = GenerationRequest::new("Test").unwrap();
    generate(&request, root).await.unwrap()
}

#[test_log::test(tokio::test)]
async fn test_creates_core_files() {
    let temp_dir = TempDir::new().unwrap();
    common::create_starter_kit(temp_dir.path());

    let report = generate_test_theme(temp_dir.path()).await;
    let theme = common::theme_dir(temp_dir.path(), "test");

    assert_eq!(report.destination, theme);
    assert_eq!(report.machine_name, "test");
    assert!(theme.join("test.info.yml").is_file());
    assert!(theme.join("test.libraries.yml").is_file());
    assert!(theme.join("test.theme").is_file());

    for entry in WalkDir::new(&theme) {
        let entry = entry.unwrap();
        let name = entry.file_name().to_string_lossy();
        assert!(!name.contains("SUBTHEME"), "placeholder left in {name}");
        assert!(!name.ends_with(".yml.tpl"), "template suffix left in {name}");
    }
}

#[tokio::test]
async fn test_replaces_placeholders_in_core_files() {
    let temp_dir = TempDir::new().unwrap();
    common::create_starter_kit(temp_dir.path());

    generate_test_theme(temp_dir.path()).await;
    let theme = common::theme_dir(temp_dir.path(), "test");

    let info = fs::read_to_string(theme.join("test.info.yml")).unwrap();
    assert!(info.contains("name: Test"));
    assert!(info.contains("description: Theme for Test."));
    assert!(!info.contains("{{ SUBTHEME }}"));

    let theme_file = fs::read_to_string(theme.join("test.theme")).unwrap();
    assert!(theme_file.contains("Functions to support the Test theme."));
    assert!(!theme_file.contains("{{ SUBTHEME }}"));
}

#[tokio::test]
async fn test_display_name_goes_into_content_and_slug_into_paths() {
    let temp_dir = TempDir::new().unwrap();
    common::create_starter_kit(temp_dir.path());

    let request = GenerationRequest::new("Crème Brûlée").unwrap();
    generate(&request, temp_dir.path()).await.unwrap();
    let theme = common::theme_dir(temp_dir.path(), "creme-brulee");

    let info = fs::read_to_string(theme.join("creme-brulee.info.yml")).unwrap();
    assert!(info.contains("name: Crème Brûlée"));
}

#[tokio::test]
async fn test_creates_the_assets_directories() {
    let temp_dir = TempDir::new().unwrap();
    let kit = common::create_starter_kit(temp_dir.path());

    generate_test_theme(temp_dir.path()).await;
    let theme = common::theme_dir(temp_dir.path(), "test");

    assert!(theme.join("assets/src").is_dir());
    assert!(theme.join("assets/src/sass/main.scss").is_file());
    assert!(theme.join("assets/src/js/.gitkeep").is_file());
    assert!(theme.join("assets/src/fonts/.gitkeep").is_file());
    assert!(!dir_diff::is_different(kit.join("assets"), theme.join("assets")).unwrap());
}

#[tokio::test]
async fn test_reproduces_empty_asset_directories() {
    let temp_dir = TempDir::new().unwrap();
    let kit = common::create_starter_kit(temp_dir.path());
    fs::create_dir_all(kit.join("assets/src/images")).unwrap();

    generate_test_theme(temp_dir.path()).await;
    let theme = common::theme_dir(temp_dir.path(), "test");

    assert!(theme.join("assets/src/images").is_dir());
}

#[tokio::test]
async fn test_copies_dotfiles() {
    let temp_dir = TempDir::new().unwrap();
    let kit = common::create_starter_kit(temp_dir.path());

    generate_test_theme(temp_dir.path()).await;
    let theme = common::theme_dir(temp_dir.path(), "test");

    for name in [".gitignore", ".eslintrc"] {
        assert_eq!(
            fs::read(theme.join(name)).unwrap(),
            fs::read(kit.join(name)).unwrap(),
            "{name} differs from the starter kit"
        );
    }
}

#[tokio::test]
async fn test_copies_hooks() {
    let temp_dir = TempDir::new().unwrap();
    common::create_starter_kit(temp_dir.path());

    generate_test_theme(temp_dir.path()).await;
    let theme = common::theme_dir(temp_dir.path(), "test");

    assert_eq!(
        fs::read_to_string(theme.join("hooks/preprocess/page.inc")).unwrap(),
        "<?php"
    );
}

#[tokio::test]
async fn test_copies_the_package_json() {
    let temp_dir = TempDir::new().unwrap();
    common::create_starter_kit(temp_dir.path());

    generate_test_theme(temp_dir.path()).await;
    let theme = common::theme_dir(temp_dir.path(), "test");

    assert_eq!(fs::read_to_string(theme.join("package.json")).unwrap(), "{}");
}

#[tokio::test]
async fn test_report_lists_every_file() {
    let temp_dir = TempDir::new().unwrap();
    common::create_starter_kit(temp_dir.path());

    let report = generate_test_theme(temp_dir.path()).await;

    // 3 core files, 3 assets, 2 dotfiles, 1 hook, 1 manifest.
    assert_eq!(report.file_count(), 10);
    let rendered = report
        .entries
        .iter()
        .filter(|e| e.kind == EntryKind::Rendered)
        .count();
    assert_eq!(rendered, 3);

    let mut targets: Vec<_> = report.entries.iter().map(|e| e.target.clone()).collect();
    let sorted = {
        let mut copy = targets.clone();
        copy.sort();
        copy
    };
    assert_eq!(targets, sorted);
    targets.dedup();
    assert_eq!(targets.len(), report.entries.len());
}

#[tokio::test]
async fn test_generation_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    common::create_starter_kit(temp_dir.path());
    let theme = common::theme_dir(temp_dir.path(), "test");

    generate_test_theme(temp_dir.path()).await;
    let first_count = common::count_entries(&theme);
    fs::write(theme.join("test.info.yml"), "edited").unwrap();

    generate_test_theme(temp_dir.path()).await;

    assert_eq!(common::count_entries(&theme), first_count);
    let info = fs::read_to_string(theme.join("test.info.yml")).unwrap();
    assert!(info.contains("name: Test"));
}

#[test]
fn test_empty_name_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    common::create_starter_kit(temp_dir.path());

    for result in [
        GenerationRequest::new(""),
        GenerationRequest::from_arg(None),
        GenerationRequest::from_arg(Some("   ")),
    ] {
        assert!(matches!(result, Err(Error::InvalidName(_))));
    }
    assert_eq!(common::count_entries(&temp_dir.path().join("themes/custom")), 0);
}

#[tokio::test]
async fn test_missing_starter_kit_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("themes/contrib/emptyDir")).unwrap();
    let request = GenerationRequest::new("Test").unwrap();

    let result = generate(&request, temp_dir.path()).await;

    match result {
        Err(err @ Error::TemplateNotFound { .. }) => {
            assert!(err.to_string().starts_with("Deck was not found"))
        }
        other => panic!("Expected TemplateNotFound, got {other:?}"),
    }
    assert!(!temp_dir.path().join("themes/custom").exists());
}

#[tokio::test]
async fn test_copy_failure_surfaces_after_other_jobs_finish() {
    let temp_dir = TempDir::new().unwrap();
    common::create_starter_kit(temp_dir.path());
    let theme = common::theme_dir(temp_dir.path(), "test");
    fs::create_dir_all(&theme).unwrap();
    // A file where the assets directory should go blocks only the assets job.
    fs::write(theme.join("assets"), "in the way").unwrap();

    let request = GenerationRequest::new("Test").unwrap();
    let result = generate(&request, temp_dir.path()).await;

    match result {
        Err(Error::CopyIo { path, .. }) => assert!(path.starts_with(theme.join("assets"))),
        other => panic!("Expected CopyIo, got {other:?}"),
    }
    assert!(theme.join("test.info.yml").is_file());
    assert!(theme.join("hooks/preprocess/page.inc").is_file());
    assert!(theme.join("package.json").is_file());
}

#[tokio::test]
async fn test_non_utf8_core_file_is_a_copy_error() {
    let temp_dir = TempDir::new().unwrap();
    let kit = common::create_starter_kit(temp_dir.path());
    fs::write(kit.join("SUBTHEME.breakpoints.yml"), [0xff, 0xfe, 0x00]).unwrap();

    let request = GenerationRequest::new("Test").unwrap();
    let result = generate(&request, temp_dir.path()).await;

    match result {
        Err(Error::CopyIo { path, .. }) => {
            assert_eq!(path, kit.join("SUBTHEME.breakpoints.yml"))
        }
        other => panic!("Expected CopyIo, got {other:?}"),
    }
}
