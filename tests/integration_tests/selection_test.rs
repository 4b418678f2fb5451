// tests/integration_tests/selection_test.rs
use super::common::setup_test_repo;
use anyhow::Result;
use std::collections::HashSet;
use std::path::PathBuf;
use verify_boilerplate::{ReferenceStore, SKIPPED_PATHS, is_skipped, select_files};

fn known_keys(root: &std::path::Path) -> Result<HashSet<String>> {
    let store = ReferenceStore::load(&root.join("hack/boilerplate"))?;
    Ok(store.keys().map(str::to_owned).collect())
}

#[test]
fn test_walk_selects_known_keys_outside_skipped_dirs() -> Result<()> {
    let temp_dir = setup_test_repo()?;
    let root = temp_dir.path();

    let files = select_files(root, &[], SKIPPED_PATHS, &known_keys(root)?, None)?;
    let mut names: Vec<String> = files
        .iter()
        .filter_map(|f| f.strip_prefix(root).ok())
        .map(|f| f.to_string_lossy().replace('\\', "/"))
        .collect();
    names.sort();

    assert_eq!(
        names,
        vec![
            "Makefile",
            "build/Dockerfile",
            "hack/build.sh",
            "main.py",
            "pkg/bad.go",
            "pkg/good.go",
        ]
    );
    Ok(())
}

#[test]
fn test_explicit_vendor_path_is_excluded() -> Result<()> {
    let temp_dir = setup_test_repo()?;
    let root = temp_dir.path();
    let explicit = vec![
        PathBuf::from("vendor/github.com/dep/dep.go"),
        PathBuf::from("main.py"),
    ];

    let files = select_files(root, &explicit, SKIPPED_PATHS, &known_keys(root)?, None)?;
    assert_eq!(files, vec![root.join("main.py")]);
    Ok(())
}

#[test]
fn test_every_skip_fragment_excludes_paths() {
    let root = std::path::Path::new("/repo");
    for fragment in SKIPPED_PATHS {
        let path = root.join("src").join(fragment).join("file.py");
        assert!(
            is_skipped(&path, SKIPPED_PATHS),
            "{} should be skipped",
            path.display()
        );
    }
}
