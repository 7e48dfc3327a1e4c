//! Directory and default-file provisioning.
//!
//! Responsibilities:
//! - Create every declared directory that is missing.
//! - Copy the declared default for every file that is missing.
//!
//! Does NOT handle:
//! - Deciding what must exist (see `paths::EnsureSpec`).
//! - Creating missing parents: directories are created one level at a time.
//!
//! Invariants:
//! - Entries are processed in declaration order.
//! - Existing entries are never touched, so both operations are idempotent.
//! - The first failure aborts the remaining work.

use std::path::PathBuf;

use crate::error::EnvError;
use crate::fs::FileSystem;
use crate::paths::EnsureSpec;

/// Creates each missing directory of `spec`, in order.
///
/// Returns the directories that were created.
pub fn ensure_directories<F: FileSystem + ?Sized>(
    fs: &F,
    spec: &EnsureSpec,
) -> Result<Vec<PathBuf>, EnvError> {
    let mut created = Vec::new();
    for dir in &spec.dirs {
        if fs.exists(dir) {
            continue;
        }
        fs.create_dir(dir)
            .map_err(|source| EnvError::DirectoryCreation {
                path: dir.clone(),
                source,
            })?;
        tracing::info!(path = %dir.display(), "Created directory");
        created.push(dir.clone());
    }
    Ok(created)
}

/// Copies the default for each missing file of `spec`, in order.
///
/// Returns the files that were provisioned.
pub fn ensure_files<F: FileSystem + ?Sized>(
    fs: &F,
    spec: &EnsureSpec,
) -> Result<Vec<PathBuf>, EnvError> {
    let mut created = Vec::new();
    for entry in &spec.files {
        if fs.exists(&entry.target) {
            continue;
        }
        let source_path = spec.default_source(entry);
        fs.copy(&source_path, &entry.target)
            .map_err(|source| EnvError::FileProvision {
                source_path: source_path.clone(),
                target: entry.target.clone(),
                source,
            })?;
        tracing::info!(
            source = %source_path.display(),
            target = %entry.target.display(),
            "Provisioned default file"
        );
        created.push(entry.target.clone());
    }
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::{MockFileSystem, RealFs};
    use crate::paths::HoboPaths;
    use mockall::Sequence;
    use std::io;
    use std::path::Path;
    use tempfile::TempDir;

    fn spec() -> EnsureSpec {
        HoboPaths::new("/home/u/.hobo")
            .with_defaults_root("/opt/hobo")
            .ensure_spec()
    }

    #[test]
    fn test_existing_directories_are_not_created() {
        let spec = spec();
        let mut fs = MockFileSystem::new();
        fs.expect_exists()
            .times(spec.dirs.len())
            .returning(|_| true);
        fs.expect_create_dir().never();

        let created = ensure_directories(&fs, &spec).unwrap();
        assert!(created.is_empty());
    }

    #[test]
    fn test_missing_directories_are_created_in_order() {
        let spec = spec();
        let mut fs = MockFileSystem::new();
        let mut seq = Sequence::new();

        for dir in spec.dirs.clone() {
            let checked = dir.clone();
            fs.expect_exists()
                .withf(move |p| p == checked)
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_| false);
            fs.expect_create_dir()
                .withf(move |p| p == dir)
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_| Ok(()));
        }

        let created = ensure_directories(&fs, &spec).unwrap();
        assert_eq!(created, spec.dirs);
    }

    #[test]
    fn test_only_missing_directories_are_created() {
        let spec = spec();
        let keys = spec.dirs[1].clone();
        let mut fs = MockFileSystem::new();
        let missing = keys.clone();
        fs.expect_exists().returning(move |p| p != missing);
        let expected = keys.clone();
        fs.expect_create_dir()
            .withf(move |p| p == expected)
            .times(1)
            .returning(|_| Ok(()));

        let created = ensure_directories(&fs, &spec).unwrap();
        assert_eq!(created, vec![keys]);
    }

    #[test]
    fn test_directory_failure_aborts_remaining() {
        let spec = spec();
        let mut fs = MockFileSystem::new();
        fs.expect_exists().times(1).returning(|_| false);
        fs.expect_create_dir()
            .times(1)
            .returning(|_| Err(io::Error::from(io::ErrorKind::PermissionDenied)));

        let err = ensure_directories(&fs, &spec).unwrap_err();
        match err {
            EnvError::DirectoryCreation { path, .. } => assert_eq!(path, spec.dirs[0]),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_existing_files_are_not_copied() {
        let spec = spec();
        let mut fs = MockFileSystem::new();
        fs.expect_exists()
            .times(spec.files.len())
            .returning(|_| true);
        fs.expect_copy().never();

        let created = ensure_files(&fs, &spec).unwrap();
        assert!(created.is_empty());
    }

    #[test]
    fn test_missing_files_are_copied_from_defaults_in_order() {
        let spec = spec();
        let mut fs = MockFileSystem::new();
        let mut seq = Sequence::new();

        for entry in spec.files.clone() {
            let checked = entry.target.clone();
            fs.expect_exists()
                .withf(move |p| p == checked)
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_| false);
            let source = Path::new("/opt/hobo").join(&entry.default);
            let target = entry.target.clone();
            fs.expect_copy()
                .withf(move |from, to| from == source && to == target)
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_, _| Ok(1));
        }

        let created = ensure_files(&fs, &spec).unwrap();
        let targets: Vec<PathBuf> = spec.files.iter().map(|f| f.target.clone()).collect();
        assert_eq!(created, targets);
    }

    #[test]
    fn test_file_failure_names_both_paths() {
        let spec = spec();
        let mut fs = MockFileSystem::new();
        fs.expect_exists().times(1).returning(|_| false);
        fs.expect_copy()
            .times(1)
            .returning(|_, _| Err(io::Error::from(io::ErrorKind::NotFound)));

        let err = ensure_files(&fs, &spec).unwrap_err();
        match err {
            EnvError::FileProvision {
                source_path,
                target,
                ..
            } => {
                assert_eq!(source_path, PathBuf::from("/opt/hobo/defaults/config.yaml"));
                assert_eq!(target, PathBuf::from("/home/u/.hobo/config.yaml"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_real_fs_provisioning_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let spec = HoboPaths::new(temp.path().join(".hobo")).ensure_spec();

        let dirs = ensure_directories(&RealFs, &spec).unwrap();
        let files = ensure_files(&RealFs, &spec).unwrap();
        assert_eq!(dirs.len(), 3);
        assert_eq!(files.len(), 2);

        let config = &spec.files[0];
        assert_eq!(
            std::fs::read(&config.target).unwrap(),
            std::fs::read(spec.default_source(config)).unwrap()
        );

        assert!(ensure_directories(&RealFs, &spec).unwrap().is_empty());
        assert!(ensure_files(&RealFs, &spec).unwrap().is_empty());
    }

    #[test]
    fn test_real_fs_keeps_user_edits() {
        let temp = TempDir::new().unwrap();
        let spec = HoboPaths::new(temp.path().join(".hobo")).ensure_spec();
        ensure_directories(&RealFs, &spec).unwrap();
        std::fs::write(&spec.files[0].target, "dotfile_name: .mine\n").unwrap();

        let created = ensure_files(&RealFs, &spec).unwrap();

        assert_eq!(created, vec![spec.files[1].target.clone()]);
        assert_eq!(
            std::fs::read_to_string(&spec.files[0].target).unwrap(),
            "dotfile_name: .mine\n"
        );
    }

    #[test]
    fn test_real_fs_treats_any_existing_path_as_present() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join(".hobo");
        std::fs::create_dir(&root).unwrap();
        std::fs::write(root.join("keys"), "not a dir").unwrap();
        let spec = HoboPaths::new(&root).ensure_spec();

        // `keys` exists (as a file), so it is left alone; the walk goes on to `cache`.
        let created = ensure_directories(&RealFs, &spec).unwrap();
        assert_eq!(created, vec![root.join("cache")]);
    }
}
