//! Directory listing helpers for dataset roots.
//!
//! Results are sorted so callers see a stable order across platforms.

use crate::error::Result;
use crate::utils::expand_home;
use std::path::Path;

/// List the directories directly under `root`.
///
/// Returns bare names, or full paths when `with_prefix` is set. Names are
/// sorted.
pub fn list_subdirectories(root: impl AsRef<Path>, with_prefix: bool) -> Result<Vec<String>> {
    list_entries(root.as_ref(), with_prefix, |path, _| path.is_dir())
}

/// List the regular files directly under `root` whose name ends with any of
/// `suffixes`.
///
/// Returns bare names, or full paths when `with_prefix` is set. Names are
/// sorted.
pub fn list_files_with_suffix(
    root: impl AsRef<Path>,
    suffixes: &[&str],
    with_prefix: bool,
) -> Result<Vec<String>> {
    list_entries(root.as_ref(), with_prefix, |path, name| {
        path.is_file() && suffixes.iter().any(|suffix| name.ends_with(suffix))
    })
}

fn list_entries(
    root: &Path,
    with_prefix: bool,
    keep: impl Fn(&Path, &str) -> bool,
) -> Result<Vec<String>> {
    let root = expand_home(root);
    let mut names = Vec::new();
    for entry in std::fs::read_dir(&root)? {
        let entry = entry?;
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        if keep(&path, &name) {
            names.push(name);
        }
    }
    names.sort();

    if with_prefix {
        names = names
            .into_iter()
            .map(|name| root.join(name).to_string_lossy().into_owned())
            .collect();
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LabelNoiseError;
    use std::fs;
    use tempfile::tempdir;

    fn fixture() -> tempfile::TempDir {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("train")).unwrap();
        fs::create_dir(dir.path().join("test")).unwrap();
        fs::write(dir.path().join("a.png"), b"").unwrap();
        fs::write(dir.path().join("b.jpg"), b"").unwrap();
        fs::write(dir.path().join("c.txt"), b"").unwrap();
        dir
    }

    #[test]
    fn test_list_subdirectories() {
        let dir = fixture();
        let names = list_subdirectories(dir.path(), false).unwrap();
        assert_eq!(names, vec!["test", "train"]);
    }

    #[test]
    fn test_list_subdirectories_with_prefix() {
        let dir = fixture();
        let paths = list_subdirectories(dir.path(), true).unwrap();
        assert_eq!(
            paths,
            vec![
                dir.path().join("test").to_string_lossy().into_owned(),
                dir.path().join("train").to_string_lossy().into_owned(),
            ]
        );
    }

    #[test]
    fn test_list_files_single_suffix() {
        let dir = fixture();
        let names = list_files_with_suffix(dir.path(), &[".png"], false).unwrap();
        assert_eq!(names, vec!["a.png"]);
    }

    #[test]
    fn test_list_files_multiple_suffixes() {
        let dir = fixture();
        let names = list_files_with_suffix(dir.path(), &[".jpg", ".png"], false).unwrap();
        assert_eq!(names, vec!["a.png", "b.jpg"]);
    }

    #[test]
    fn test_list_files_skips_directories() {
        let dir = fixture();
        fs::create_dir(dir.path().join("dir.png")).unwrap();
        let names = list_files_with_suffix(dir.path(), &[".png"], false).unwrap();
        assert_eq!(names, vec!["a.png"]);
    }

    #[test]
    fn test_missing_root_is_io_error() {
        let dir = tempdir().unwrap();
        let result = list_subdirectories(dir.path().join("missing"), false);
        assert!(matches!(result, Err(LabelNoiseError::IoError(_))));
    }
}
