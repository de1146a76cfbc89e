use std::collections::HashSet;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;

use crate::model::{self, PITCHED_INTERMEDIATE, SLOWED_INTERMEDIATE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderStatus {
    Existing,
    Created,
    Failed(String),
}

/// Files directly inside `folder`, sorted. Symlinks to files count; names are
/// kept as the OS returns them.
pub fn list_entries(folder: &Path) -> io::Result<Vec<OsString>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(folder)? {
        let entry = entry?;
        if entry.path().is_file() {
            names.push(entry.file_name());
        }
    }
    names.sort();
    Ok(names)
}

/// Source entries that have no `SaR_` counterpart in `destination`. The
/// comparison is exact and case-sensitive.
pub fn find_differences(source: &Path, destination: &Path) -> io::Result<Vec<OsString>> {
    let sources = list_entries(source)?;
    let processed: HashSet<Vec<u8>> = list_entries(destination)?
        .iter()
        .map(|name| model::strip_marker(name).to_vec())
        .collect();

    Ok(sources
        .into_iter()
        .filter(|name| !processed.contains(name.as_encoded_bytes()))
        .collect())
}

pub fn ensure_folder(folder: &Path) -> FolderStatus {
    if folder.is_dir() {
        log::info!("{} already exists.", folder.display());
        return FolderStatus::Existing;
    }
    match fs::create_dir_all(folder) {
        Ok(()) => {
            log::info!("Created {} successfully", folder.display());
            FolderStatus::Created
        }
        Err(e) => {
            log::error!("Failed to create {}: {}", folder.display(), e);
            FolderStatus::Failed(e.to_string())
        }
    }
}

pub fn remove_intermediates(folder: &Path) -> io::Result<usize> {
    let mut removed = 0;
    for name in [SLOWED_INTERMEDIATE, PITCHED_INTERMEDIATE] {
        match fs::remove_file(folder.join(name)) {
            Ok(()) => removed += 1,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e),
        }
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").unwrap();
    }

    fn folders() -> (TempDir, std::path::PathBuf, std::path::PathBuf) {
        let root = TempDir::new().unwrap();
        let source = root.path().join("2024-01-01");
        let destination = root.path().join("2024-01-01SaR");
        fs::create_dir(&source).unwrap();
        fs::create_dir(&destination).unwrap();
        (root, source, destination)
    }

    #[test]
    fn lists_files_only() {
        let (_root, source, _) = folders();
        touch(&source, "b.mp3");
        touch(&source, "a.mp3");
        fs::create_dir(source.join("nested")).unwrap();

        assert_eq!(list_entries(&source).unwrap(), vec!["a.mp3", "b.mp3"]);
    }

    #[test]
    fn differences_exclude_processed_files() {
        let (_root, source, destination) = folders();
        touch(&source, "one.mp3");
        touch(&source, "two.mp3");
        touch(&source, "three.mp3");
        touch(&destination, "SaR_two.mp3");

        assert_eq!(
            find_differences(&source, &destination).unwrap(),
            vec!["one.mp3", "three.mp3"]
        );
    }

    #[test]
    fn differences_are_case_sensitive() {
        let (_root, source, destination) = folders();
        touch(&source, "Song.mp3");
        touch(&destination, "SaR_song.mp3");

        assert_eq!(find_differences(&source, &destination).unwrap(), vec!["Song.mp3"]);
    }

    #[test]
    fn extra_destination_files_do_not_matter() {
        let (_root, source, destination) = folders();
        touch(&source, "one.mp3");
        touch(&destination, "SaR_unrelated.mp3");
        touch(&destination, "notes.txt");

        assert_eq!(find_differences(&source, &destination).unwrap(), vec!["one.mp3"]);
    }

    #[test]
    fn empty_source_has_no_differences() {
        let (_root, source, destination) = folders();
        touch(&destination, "SaR_old.mp3");
        assert!(find_differences(&source, &destination).unwrap().is_empty());
    }

    #[test]
    fn processing_every_difference_empties_the_set() {
        let (_root, source, destination) = folders();
        touch(&source, "one.mp3");
        touch(&source, "two.mp3");

        for name in find_differences(&source, &destination).unwrap() {
            fs::write(destination.join(model::output_name(&name)), b"").unwrap();
        }
        assert!(find_differences(&source, &destination).unwrap().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_files_are_listed() {
        let (root, source, destination) = folders();
        touch(root.path(), "real.mp3");
        std::os::unix::fs::symlink(root.path().join("real.mp3"), source.join("linked.mp3")).unwrap();
        std::os::unix::fs::symlink(root.path().join("gone.mp3"), source.join("dangling.mp3")).unwrap();

        assert_eq!(list_entries(&source).unwrap(), vec!["linked.mp3"]);
        assert_eq!(find_differences(&source, &destination).unwrap(), vec!["linked.mp3"]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn non_utf8_names_survive_listing() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let (_root, source, destination) = folders();
        let name = OsStr::from_bytes(b"caf\xe9.mp3");
        fs::write(source.join(name), b"").unwrap();

        let found = find_differences(&source, &destination).unwrap();
        assert_eq!(found, vec![name.to_os_string()]);
        assert!(source.join(&found[0]).is_file());

        fs::write(destination.join(model::output_name(name)), b"").unwrap();
        assert!(find_differences(&source, &destination).unwrap().is_empty());
    }

    #[test]
    fn missing_destination_is_an_error() {
        let (root, source, _) = folders();
        assert!(find_differences(&source, &root.path().join("absent")).is_err());
    }

    #[test]
    fn ensure_folder_is_idempotent() {
        let root = TempDir::new().unwrap();
        let target = root.path().join("a").join("b");

        assert_eq!(ensure_folder(&target), FolderStatus::Created);
        assert_eq!(ensure_folder(&target), FolderStatus::Existing);
        assert!(target.is_dir());
    }

    #[test]
    fn ensure_folder_reports_failure() {
        let root = TempDir::new().unwrap();
        touch(root.path(), "plain");

        let status = ensure_folder(&root.path().join("plain").join("child"));
        assert!(matches!(status, FolderStatus::Failed(_)));
    }

    #[test]
    fn remove_intermediates_tolerates_missing_files() {
        let root = TempDir::new().unwrap();
        touch(root.path(), SLOWED_INTERMEDIATE);
        touch(root.path(), "SaR_song.mp3");

        assert_eq!(remove_intermediates(root.path()).unwrap(), 1);
        assert_eq!(remove_intermediates(root.path()).unwrap(), 0);
        assert_eq!(list_entries(root.path()).unwrap(), vec!["SaR_song.mp3"]);
    }
}
