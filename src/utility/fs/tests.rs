// fyp-build: Game/Server Build Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::copy::copy_dir_contents_async;
use super::remove::{recreate_dir, remove_dir_if_exists, remove_file_if_exists};
use super::walk::{WalkOptions, find_files};
use crate::error::FsError;
use std::path::Path;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn relative_names(root: &Path, files: &[std::path::PathBuf]) -> String {
    files
        .iter()
        .map(|p| {
            p.strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn test_find_files_by_extension() {
    let temp = temp_dir();
    let root = temp.path();
    std::fs::create_dir_all(root.join("cmd/server")).unwrap();
    std::fs::create_dir_all(root.join("internal/net")).unwrap();
    std::fs::write(root.join("cmd/server/main.go"), "").unwrap();
    std::fs::write(root.join("internal/net/conn.go"), "").unwrap();
    std::fs::write(root.join("internal/net/README.md"), "").unwrap();
    std::fs::write(root.join("go.mod"), "").unwrap();

    let files = find_files(root, "go", &WalkOptions::default()).unwrap();
    insta::assert_snapshot!(
        relative_names(root, &files),
        @"cmd/server/main.go internal/net/conn.go"
    );
}

#[test]
fn test_find_files_skips_vendor_and_hidden() {
    let temp = temp_dir();
    let root = temp.path();
    std::fs::create_dir_all(root.join("vendor/lib")).unwrap();
    std::fs::create_dir_all(root.join(".cache")).unwrap();
    std::fs::write(root.join("vendor/lib/lib.go"), "").unwrap();
    std::fs::write(root.join(".cache/gen.go"), "").unwrap();
    std::fs::write(root.join("game.go"), "").unwrap();

    let files = find_files(root, "go", &WalkOptions::for_go_sources()).unwrap();
    insta::assert_snapshot!(relative_names(root, &files), @"game.go");
}

#[test]
fn test_go_sources_include_gitignored_files() {
    let temp = temp_dir();
    let root = temp.path();
    std::fs::create_dir_all(root.join(".git")).unwrap();
    std::fs::create_dir_all(root.join("resources")).unwrap();
    std::fs::write(root.join(".gitignore"), "resources/resources_*.go\n").unwrap();
    std::fs::write(root.join("resources/resources_images.go"), "").unwrap();
    std::fs::write(root.join("resources/resources_gen.go"), "").unwrap();

    let respecting = find_files(root, "go", &WalkOptions::default()).unwrap();
    insta::assert_snapshot!(relative_names(root, &respecting), @"");

    let files = find_files(root, "go", &WalkOptions::for_go_sources()).unwrap();
    insta::assert_snapshot!(
        relative_names(root, &files),
        @"resources/resources_gen.go resources/resources_images.go"
    );
}

#[test]
fn test_find_files_max_depth() {
    let temp = temp_dir();
    let root = temp.path();
    std::fs::create_dir_all(root.join("a/b")).unwrap();
    std::fs::write(root.join("top.go"), "").unwrap();
    std::fs::write(root.join("a/b/deep.go"), "").unwrap();

    let options = WalkOptions::builder().with_max_depth(1).build();
    let files = find_files(root, "go", &options).unwrap();
    insta::assert_snapshot!(relative_names(root, &files), @"top.go");
}

#[test]
fn test_find_files_missing_root() {
    let temp = temp_dir();
    let err = find_files(temp.path().join("nope"), "go", &WalkOptions::default()).unwrap_err();
    assert!(matches!(err, FsError::NotFound(_)));
}

#[tokio::test]
async fn test_copy_dir_contents_async() {
    let temp = temp_dir();
    let src = temp.path().join("resources");
    let dst = temp.path().join("dist/resources");
    std::fs::create_dir_all(src.join("sprites")).unwrap();
    std::fs::write(src.join("sprites/player.png"), "png").unwrap();
    std::fs::write(src.join("font.ttf"), "ttf").unwrap();

    copy_dir_contents_async(&src, &dst).await.unwrap();

    assert_eq!(std::fs::read_to_string(dst.join("sprites/player.png")).unwrap(), "png");
    assert_eq!(std::fs::read_to_string(dst.join("font.ttf")).unwrap(), "ttf");
}

#[cfg(unix)]
#[tokio::test]
async fn test_copy_does_not_follow_directory_links() {
    let temp = temp_dir();
    let src = temp.path().join("resources");
    let dst = temp.path().join("dist/resources");
    std::fs::create_dir_all(src.join("sprites")).unwrap();
    std::fs::write(src.join("sprites/player.png"), "png").unwrap();
    std::os::unix::fs::symlink("..", src.join("sprites/loop")).unwrap();
    std::os::unix::fs::symlink("sprites/player.png", src.join("hero.png")).unwrap();
    std::os::unix::fs::symlink("missing.png", src.join("dangling.png")).unwrap();

    tokio::time::timeout(
        std::time::Duration::from_secs(10),
        copy_dir_contents_async(&src, &dst),
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(std::fs::read_to_string(dst.join("sprites/player.png")).unwrap(), "png");
    assert!(!dst.join("sprites/loop").exists());
    assert!(!dst.join("dangling.png").exists());
    let hero = dst.join("hero.png");
    assert!(!hero.symlink_metadata().unwrap().file_type().is_symlink());
    assert_eq!(std::fs::read_to_string(hero).unwrap(), "png");
}

#[tokio::test]
async fn test_copy_missing_source_names_path() {
    let temp = temp_dir();
    let src = temp.path().join("missing");
    let err = copy_dir_contents_async(&src, &temp.path().join("out"))
        .await
        .unwrap_err();
    assert!(matches!(err, FsError::NotFound(ref p) if p.ends_with("missing")));
}

#[tokio::test]
async fn test_remove_helpers_tolerate_absence() {
    let temp = temp_dir();
    let file = temp.path().join("game");
    let dir = temp.path().join("build");

    assert!(!remove_file_if_exists(&file).await.unwrap());
    assert!(!remove_dir_if_exists(&dir).await.unwrap());

    std::fs::write(&file, "").unwrap();
    std::fs::create_dir_all(dir.join("linux")).unwrap();
    assert!(remove_file_if_exists(&file).await.unwrap());
    assert!(remove_dir_if_exists(&dir).await.unwrap());
    assert!(!file.exists());
    assert!(!dir.exists());
}

#[tokio::test]
async fn test_recreate_dir_clears_contents() {
    let temp = temp_dir();
    let dist = temp.path().join("dist");
    std::fs::create_dir_all(dist.join("resources")).unwrap();
    std::fs::write(dist.join("stale.txt"), "").unwrap();

    recreate_dir(&dist).await.unwrap();

    assert!(dist.is_dir());
    assert_eq!(std::fs::read_dir(&dist).unwrap().count(), 0);
}
