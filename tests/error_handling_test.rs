use relabel::{
    list_files, rename_files, Error, ErrorKind, ExtensionFilter, RenameOptions, TargetExtension,
};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn touch(dir: &Path, name: &str) {
    std::fs::write(dir.join(name), b"contents").unwrap();
}

fn options(dir: &Path) -> RenameOptions {
    RenameOptions {
        source_dir: dir.to_path_buf(),
        ..RenameOptions::default()
    }
}

#[test]
fn test_empty_filter_rejects_renaming() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    touch(root, "a.txt");

    let opts = options(root);
    let err = rename_files(&opts, &TargetExtension::Keep, None).unwrap_err();

    assert!(matches!(err, Error::NoExtensions));
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert!(root.join("a.txt").is_file());
}

#[test]
fn test_empty_directory_passes_with_an_empty_filter() {
    let temp_dir = TempDir::new().unwrap();

    let opts = options(temp_dir.path());
    let outcome = rename_files(&opts, &TargetExtension::Keep, None).unwrap();

    assert!(outcome.mappings.is_empty());
    assert_eq!(outcome.applied, 0);
}

#[test]
fn test_missing_source_directory_fails_everywhere() {
    let missing = PathBuf::from("/nonexistent/relabel-integration");

    let err = list_files(&missing, &ExtensionFilter::all(), false).unwrap_err();
    assert!(matches!(err, Error::InvalidSource { .. }));

    let opts = RenameOptions {
        source_dir: missing,
        filter: ExtensionFilter::all(),
        ..RenameOptions::default()
    };
    let err = rename_files(&opts, &TargetExtension::Keep, None).unwrap_err();
    assert!(matches!(err, Error::InvalidSource { .. }));
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn test_invalid_extension_aborts_and_keeps_earlier_renames() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    touch(root, "a.txt");
    touch(root, "b.x ");
    touch(root, "c.txt");

    let opts = RenameOptions {
        filter: ExtensionFilter::all(),
        prefix: "img_".to_string(),
        renumber: true,
        ..options(root)
    };
    let err = rename_files(&opts, &TargetExtension::Keep, None).unwrap_err();

    assert!(matches!(
        err,
        Error::InvalidExtension { character: ' ', ref file } if file == "b.x "
    ));
    assert_eq!(err.kind(), ErrorKind::Validation);

    // The pass is not transactional: a.txt was already renamed when the
    // trailing space was hit, and everything after it was left alone.
    assert!(root.join("img_1.txt").is_file());
    assert!(!root.join("a.txt").exists());
    assert!(root.join("b.x ").is_file());
    assert!(root.join("c.txt").is_file());
}

#[test]
fn test_replacement_ending_in_a_dot_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    touch(root, "a.txt");

    let opts = RenameOptions {
        filter: ExtensionFilter::new(["txt"]),
        ..options(root)
    };
    let err = rename_files(&opts, &TargetExtension::Replace("bak.".to_string()), None).unwrap_err();

    assert!(matches!(
        err,
        Error::InvalidExtension { character: '.', .. }
    ));
    assert!(root.join("a.txt").is_file());
}

#[test]
fn test_conflicting_listing_filter_names_the_first_entry() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "a.txt");

    let err = list_files(
        temp_dir.path(),
        &ExtensionFilter::new(["txt", "*"]),
        false,
    )
    .unwrap_err();

    assert!(matches!(err, Error::ConflictingFilter { ref entry } if entry == "txt"));
    assert_eq!(err.kind(), ErrorKind::Configuration);
}
