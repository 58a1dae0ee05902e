use crate::types::errors::Error;
use git2::{Delta, Diff, DiffFindOptions, DiffOptions, Repository};
use std::collections::HashSet;
use std::path::Path;

/// Files touched by the change under review
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ChangedFiles {
    pub modified: Vec<String>,
    pub added: Vec<String>,
}

impl ChangedFiles {
    pub fn new(modified: Vec<String>, added: Vec<String>) -> Self {
        Self { modified, added }
    }

    /// Modified and added files between `base` and the working tree (index included)
    /// of the repository containing `repo`
    pub fn from_git(repo: &Path, base: &str) -> Result<Self, Error> {
        let repo = Repository::discover(repo)?;
        let base_tree = repo.revparse_single(base)?.peel_to_tree()?;

        let mut diff_opts = DiffOptions::new();
        let mut diff =
            repo.diff_tree_to_workdir_with_index(Some(&base_tree), Some(&mut diff_opts))?;
        diff.find_similar(Some(DiffFindOptions::new().renames(true)))?;

        let changes = Self::from_diff(&diff);
        log::debug!(
            "git reports {} modified and {} added files since {}",
            changes.modified.len(),
            changes.added.len(),
            base
        );
        Ok(changes)
    }

    /// Sort diff entries into modified and added paths.
    ///
    /// Renamed and copied files count as modified under their new path.
    /// Deletions are skipped.
    pub fn from_diff(diff: &Diff<'_>) -> Self {
        let mut changes = ChangedFiles::default();

        for delta in diff.deltas() {
            let Some(path) = delta.new_file().path() else {
                continue;
            };
            let path = path.to_string_lossy().to_string();
            match delta.status() {
                Delta::Modified | Delta::Typechange | Delta::Renamed | Delta::Copied => {
                    changes.modified.push(path)
                }
                Delta::Added => changes.added.push(path),
                _ => {}
            }
        }

        changes
    }

    pub fn is_empty(&self) -> bool {
        self.modified.is_empty() && self.added.is_empty()
    }

    /// Union of modified and added paths
    pub fn union(&self) -> HashSet<String> {
        self.modified.iter().chain(&self.added).cloned().collect()
    }

    /// Merge another change set into this one
    pub fn extend(&mut self, other: ChangedFiles) {
        self.modified.extend(other.modified);
        self.added.extend(other.added);
    }
}
