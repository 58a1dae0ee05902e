use cobertura_review::Error;
use cobertura_review::changes::ChangedFiles;
use git2::{Repository, Signature};
use rstest::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const KEEP_CONTENT: &str = "def keep():\n    return 1\n\n\ndef also_keep():\n    return 2\n";

fn stage(repo: &Repository, paths: &[&str]) {
    let mut index = repo.index().unwrap();
    for path in paths {
        index.add_path(Path::new(path)).unwrap();
    }
    index.write().unwrap();
}

fn unstage_removed(repo: &Repository, path: &str) {
    let mut index = repo.index().unwrap();
    index.remove_path(Path::new(path)).unwrap();
    index.write().unwrap();
}

/// Repository with one commit holding `a.py`, `gone.py` and `old_name.py`
#[fixture]
fn repo_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let repo = Repository::init(dir.path()).unwrap();

    fs::write(dir.path().join("a.py"), "print('a')\n").unwrap();
    fs::write(dir.path().join("gone.py"), "print('gone')\n").unwrap();
    fs::write(dir.path().join("old_name.py"), KEEP_CONTENT).unwrap();
    stage(&repo, &["a.py", "gone.py", "old_name.py"]);

    let tree_id = repo.index().unwrap().write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let signature = Signature::now("Test", "test@example.com").unwrap();
    repo.commit(Some("HEAD"), &signature, &signature, "initial", &tree, &[])
        .unwrap();

    dir
}

#[rstest]
fn test_from_git_without_changes(repo_dir: TempDir) {
    let changes = ChangedFiles::from_git(repo_dir.path(), "HEAD").unwrap();

    assert!(changes.is_empty());
}

#[rstest]
fn test_from_git_modified_and_added(repo_dir: TempDir) {
    // Setup test data
    let repo = Repository::open(repo_dir.path()).unwrap();
    fs::write(repo_dir.path().join("a.py"), "print('changed')\n").unwrap();
    fs::write(repo_dir.path().join("café.py"), "print('accent')\n").unwrap();
    fs::write(repo_dir.path().join("my file.py"), "print('space')\n").unwrap();
    stage(&repo, &["café.py", "my file.py"]);

    // Execute
    let changes = ChangedFiles::from_git(repo_dir.path(), "HEAD").unwrap();

    // Verify
    assert_eq!(changes.modified, vec!["a.py"]);
    let mut added = changes.added.clone();
    added.sort();
    assert_eq!(added, vec!["café.py", "my file.py"]);
}

#[rstest]
fn test_from_git_skips_deletions_and_renames_as_modified(repo_dir: TempDir) {
    let repo = Repository::open(repo_dir.path()).unwrap();
    fs::remove_file(repo_dir.path().join("gone.py")).unwrap();
    unstage_removed(&repo, "gone.py");
    fs::rename(
        repo_dir.path().join("old_name.py"),
        repo_dir.path().join("new_name.py"),
    )
    .unwrap();
    unstage_removed(&repo, "old_name.py");
    stage(&repo, &["new_name.py"]);

    let changes = ChangedFiles::from_git(repo_dir.path(), "HEAD").unwrap();

    assert_eq!(changes.modified, vec!["new_name.py"]);
    assert!(changes.added.is_empty());
}

#[rstest]
fn test_from_git_discovers_repo_from_subdirectory(repo_dir: TempDir) {
    let repo = Repository::open(repo_dir.path()).unwrap();
    let nested = repo_dir.path().join("pkg");
    fs::create_dir_all(&nested).unwrap();
    fs::write(nested.join("mod.py"), "x = 1\n").unwrap();
    stage(&repo, &["pkg/mod.py"]);

    let changes = ChangedFiles::from_git(&nested, "HEAD").unwrap();

    // Paths stay relative to the repository root
    assert_eq!(changes.added, vec!["pkg/mod.py"]);
}

#[rstest]
fn test_from_git_unknown_base(repo_dir: TempDir) {
    let result = ChangedFiles::from_git(repo_dir.path(), "no-such-branch");

    assert!(matches!(result, Err(Error::Git(_))));
}

#[test]
fn test_from_git_outside_repository() {
    let dir = tempfile::tempdir().unwrap();

    let result = ChangedFiles::from_git(dir.path(), "HEAD");

    assert!(matches!(result, Err(Error::Git(_))));
}

#[test]
fn test_union_of_modified_and_added() {
    let mut changes = ChangedFiles::new(vec!["a.py".to_string()], vec!["b.py".to_string()]);
    changes.extend(ChangedFiles::new(vec!["a.py".to_string()], vec![]));

    let union = changes.union();

    assert_eq!(union.len(), 2);
    assert!(union.contains("a.py"));
    assert!(union.contains("b.py"));
}
