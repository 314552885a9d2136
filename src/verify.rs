//! Tree-wide permission audit
//!
//! Dispatch and completion silently skip anything that isn't readable and
//! executable, which is the right behavior on the hot path but makes a
//! half-broken tree hard to notice. The audit walks everything once and
//! reports every offender instead of stopping at the first.

use std::path::PathBuf;

use serde::Serialize;
use walkdir::WalkDir;

use crate::tree::{CommandTree, readable_executable};

/// Paths under the root that fail their permission requirements.
#[derive(Debug, Default, Serialize)]
pub struct VerifyReport {
    /// Directories missing read or execute permission.
    pub bad_dirs: Vec<PathBuf>,
    /// Files that are not runnable regular files.
    pub bad_files: Vec<PathBuf>,
}

impl VerifyReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.bad_dirs.is_empty() && self.bad_files.is_empty()
    }
}

impl CommandTree {
    /// Audit every directory and file under the root.
    ///
    /// Directories need read and execute permission, files need to be
    /// runnable regular files. Probe failures are recorded as offenders
    /// rather than raised; the walk always completes.
    #[must_use]
    pub fn verify(&self) -> VerifyReport {
        let mut report = VerifyReport::default();
        for entry in WalkDir::new(self.root()) {
            match entry {
                Ok(entry) => {
                    let Ok(meta) = entry.metadata() else {
                        report.bad_files.push(entry.into_path());
                        continue;
                    };
                    if meta.is_dir() {
                        if !readable_executable(&meta) {
                            report.bad_dirs.push(entry.into_path());
                        }
                    } else if !meta.is_file() || !readable_executable(&meta) {
                        report.bad_files.push(entry.into_path());
                    }
                }
                // typically a directory the walker couldn't descend into
                Err(err) => {
                    if let Some(path) = err.path() {
                        report.bad_dirs.push(path.to_path_buf());
                    }
                }
            }
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{chmod, fixture_root, write_script};
    use crate::name::NamePolicy;
    use crate::tree::DRIVER_NAME;

    fn clean_tree(base: &std::path::Path) -> CommandTree {
        let root = base.join("myapp");
        std::fs::create_dir(&root).unwrap();
        write_script(&root.join(DRIVER_NAME), "#!/bin/sh\nexit 0\n");
        let group = root.join("group");
        std::fs::create_dir(&group).unwrap();
        write_script(&group.join(DRIVER_NAME), "#!/bin/sh\nexit 0\n");
        write_script(&group.join("leaf"), "#!/bin/sh\nexit 0\n");
        CommandTree::new(root, NamePolicy::default()).unwrap()
    }

    #[test]
    fn test_clean_tree_reports_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let tree = clean_tree(dir.path());
        let report = tree.verify();
        assert!(report.is_clean(), "{report:?}");
    }

    #[test]
    fn test_offenders_are_accumulated() {
        let dir = tempfile::tempdir().unwrap();
        let tree = clean_tree(dir.path());
        let bad_leaf = tree.root().join("group").join("leaf");
        chmod(&bad_leaf, 0o644);
        let bad_driver = tree.root().join("group").join(DRIVER_NAME);
        chmod(&bad_driver, 0o000);

        let mut report = tree.verify();
        report.bad_files.sort();
        assert!(report.bad_dirs.is_empty());
        assert_eq!(report.bad_files, [bad_driver, bad_leaf]);
    }

    #[test]
    fn test_fixture_tree_flags_the_bad_driver() {
        let dir = tempfile::tempdir().unwrap();
        let root = fixture_root(dir.path());
        let tree = CommandTree::new(root, NamePolicy::default()).unwrap();
        let report = tree.verify();
        assert_eq!(
            report.bad_files,
            [tree.root().join("hasbaddriver").join(DRIVER_NAME)]
        );
    }

    #[test]
    fn test_report_serializes() {
        let report = VerifyReport {
            bad_dirs: vec![PathBuf::from("/t/dir")],
            bad_files: vec![PathBuf::from("/t/file")],
        };
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"bad_dirs":["/t/dir"],"bad_files":["/t/file"]}"#);
    }
}
