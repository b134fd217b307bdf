//! Release archive creation
//!
//! Walks a list of input paths (files or directory roots) and writes them
//! into a single deflate-compressed ZIP archive. Entry names are the input
//! paths as given, including leading directory components, normalized to
//! `/` separators.
//!
//! Inputs are validated up front: a missing input aborts before the
//! destination file is created, so a failed run never leaves an archive
//! behind. Duplicate entry names (overlapping inputs) are written once,
//! first occurrence wins. Directory walks do not follow symlinked
//! directories, so link cycles cannot loop the walk.

use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::{self, CompforgeError, Result};

/// Outcome of a successful archive run, for the command layer to report
#[derive(Debug)]
pub struct ArchiveSummary {
    /// Resolved path of the written archive
    pub archive: PathBuf,
    /// Number of entries written (files and directories)
    pub entries: usize,
}

/// Create a deflate-compressed ZIP archive at `destination` from `inputs`.
///
/// Relative paths resolve against `base`; entry names stay relative. The
/// destination is created or overwritten.
pub fn create_archive(
    base: &Path,
    destination: &Path,
    inputs: &[PathBuf],
) -> Result<ArchiveSummary> {
    if inputs.is_empty() {
        return Err(CompforgeError::ArchiveNoInputs);
    }

    // All inputs must exist before the destination is touched
    for input in inputs {
        if !base.join(input).exists() {
            return Err(error::input_missing(input.display().to_string()));
        }
    }

    let dest = base.join(destination);
    let file = File::create(&dest).map_err(|e| {
        error::archive_create_failed(destination.display().to_string(), e.to_string())
    })?;

    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut seen = BTreeSet::new();
    let mut entries = 0usize;

    for input in inputs {
        let full = base.join(input);
        if full.is_dir() {
            add_directory_tree(&mut writer, input, &full, options, &mut seen, &mut entries)?;
        } else {
            add_file(&mut writer, &full, input, options, &mut seen, &mut entries)?;
        }
    }

    writer.finish().map_err(|e| {
        error::archive_write_failed(destination.display().to_string(), e.to_string())
    })?;

    Ok(ArchiveSummary {
        archive: dest,
        entries,
    })
}

/// Recursively add every file and subdirectory beneath `root`.
///
/// `input` is the path as given on the command line and forms the leading
/// components of each entry name.
fn add_directory_tree(
    writer: &mut ZipWriter<File>,
    input: &Path,
    root: &Path,
    options: SimpleFileOptions,
    seen: &mut BTreeSet<String>,
    entries: &mut usize,
) -> Result<()> {
    for walked in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let walked = walked
            .map_err(|e| error::file_read_failed(input.display().to_string(), e.to_string()))?;

        let rel = match walked.path().strip_prefix(root) {
            Ok(suffix) => input.join(suffix),
            Err(_) => walked.path().to_path_buf(),
        };

        // Symlinked directories are recorded as directory entries but never
        // descended into, so a link cycle cannot loop the walk.
        let is_dir_entry = walked.file_type().is_dir()
            || (walked.file_type().is_symlink() && walked.path().is_dir());

        if is_dir_entry {
            let name = format!("{}/", entry_name(&rel));
            if seen.insert(name.clone()) {
                writer
                    .add_directory(name, options)
                    .map_err(|e| archive_entry_error(&rel, e))?;
                *entries += 1;
            }
        } else {
            add_file(writer, walked.path(), &rel, options, seen, entries)?;
        }
    }

    Ok(())
}

/// Add a single file under its relative path
fn add_file(
    writer: &mut ZipWriter<File>,
    source: &Path,
    rel: &Path,
    options: SimpleFileOptions,
    seen: &mut BTreeSet<String>,
    entries: &mut usize,
) -> Result<()> {
    let name = entry_name(rel);
    if !seen.insert(name.clone()) {
        return Ok(());
    }

    let bytes = fs::read(source)
        .map_err(|e| error::file_read_failed(rel.display().to_string(), e.to_string()))?;

    writer
        .start_file(name, options)
        .map_err(|e| archive_entry_error(rel, e))?;
    writer
        .write_all(&bytes)
        .map_err(|e| archive_entry_error(rel, e))?;

    *entries += 1;
    Ok(())
}

/// Archive-internal entry name: normal path components joined with `/`.
///
/// `.` segments and any root prefix are dropped so entry names stay relative
/// on every platform.
fn entry_name(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn archive_entry_error(rel: &Path, err: impl std::fmt::Display) -> CompforgeError {
    error::archive_write_failed(rel.display().to_string(), err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use tempfile::TempDir;
    use zip::ZipArchive;

    fn read_entry(archive: &Path, name: &str) -> Vec<u8> {
        let mut zip = ZipArchive::new(File::open(archive).unwrap()).unwrap();
        let mut entry = zip.by_name(name).unwrap();
        let mut bytes = Vec::new();
        entry.read_to_end(&mut bytes).unwrap();
        bytes
    }

    fn entry_names(archive: &Path) -> Vec<String> {
        let zip = ZipArchive::new(File::open(archive).unwrap()).unwrap();
        zip.file_names().map(str::to_string).collect()
    }

    #[test]
    fn test_single_file_round_trip() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("readme.txt"), b"hello archive").unwrap();

        let summary = create_archive(
            temp.path(),
            Path::new("out.zip"),
            &[PathBuf::from("readme.txt")],
        )
        .unwrap();

        assert_eq!(summary.entries, 1);
        assert_eq!(
            read_entry(&temp.path().join("out.zip"), "readme.txt"),
            b"hello archive"
        );
    }

    #[test]
    fn test_directory_includes_all_files() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("assets/maps")).unwrap();
        fs::write(temp.path().join("assets/logo.png"), b"png bytes").unwrap();
        fs::write(temp.path().join("assets/maps/level1.tmx"), b"<map/>").unwrap();

        create_archive(temp.path(), Path::new("out.zip"), &[PathBuf::from("assets")]).unwrap();

        let names = entry_names(&temp.path().join("out.zip"));
        assert!(names.contains(&"assets/logo.png".to_string()));
        assert!(names.contains(&"assets/maps/".to_string()));
        assert!(names.contains(&"assets/maps/level1.tmx".to_string()));
        assert_eq!(
            read_entry(&temp.path().join("out.zip"), "assets/maps/level1.tmx"),
            b"<map/>"
        );
    }

    #[test]
    fn test_mixed_file_and_directory_inputs() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("data")).unwrap();
        fs::write(temp.path().join("data/config.lua"), b"return {}").unwrap();
        fs::write(temp.path().join("game.bin"), b"\x7fELF").unwrap();

        let summary = create_archive(
            temp.path(),
            Path::new("release.zip"),
            &[PathBuf::from("game.bin"), PathBuf::from("data")],
        )
        .unwrap();

        assert_eq!(summary.entries, 2);
        let names = entry_names(&temp.path().join("release.zip"));
        assert!(names.contains(&"game.bin".to_string()));
        assert!(names.contains(&"data/config.lua".to_string()));
    }

    #[test]
    fn test_missing_input_writes_no_archive() {
        let temp = TempDir::new().unwrap();

        let result = create_archive(
            temp.path(),
            Path::new("out.zip"),
            &[PathBuf::from("nonexistent")],
        );

        assert!(matches!(
            result.unwrap_err(),
            CompforgeError::ArchiveInputMissing { .. }
        ));
        assert!(!temp.path().join("out.zip").exists());
    }

    #[test]
    fn test_empty_inputs_rejected() {
        let temp = TempDir::new().unwrap();
        let result = create_archive(temp.path(), Path::new("out.zip"), &[]);
        assert!(matches!(
            result.unwrap_err(),
            CompforgeError::ArchiveNoInputs
        ));
    }

    #[test]
    fn test_duplicate_inputs_first_occurrence_wins() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), b"once").unwrap();

        let summary = create_archive(
            temp.path(),
            Path::new("out.zip"),
            &[PathBuf::from("a.txt"), PathBuf::from("a.txt")],
        )
        .unwrap();

        assert_eq!(summary.entries, 1);
        assert_eq!(entry_names(&temp.path().join("out.zip")).len(), 1);
    }

    #[test]
    fn test_overlapping_directory_inputs_deduplicated() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("assets")).unwrap();
        fs::write(temp.path().join("assets/logo.png"), b"png").unwrap();

        create_archive(
            temp.path(),
            Path::new("out.zip"),
            &[PathBuf::from("assets"), PathBuf::from("assets/logo.png")],
        )
        .unwrap();

        let names = entry_names(&temp.path().join("out.zip"));
        assert_eq!(
            names
                .iter()
                .filter(|n| n.as_str() == "assets/logo.png")
                .count(),
            1
        );
    }

    #[test]
    fn test_overwrites_existing_archive() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), b"fresh").unwrap();
        fs::write(temp.path().join("out.zip"), b"stale bytes").unwrap();

        create_archive(temp.path(), Path::new("out.zip"), &[PathBuf::from("a.txt")]).unwrap();

        assert_eq!(read_entry(&temp.path().join("out.zip"), "a.txt"), b"fresh");
    }

    #[test]
    fn test_entry_name_normalizes_separators() {
        assert_eq!(entry_name(Path::new("assets/maps/level1.tmx")), "assets/maps/level1.tmx");
        assert_eq!(entry_name(Path::new("./assets/logo.png")), "assets/logo.png");
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directory_not_followed() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("tree")).unwrap();
        fs::write(temp.path().join("tree/file.txt"), b"data").unwrap();
        // A link back to the parent inside the walked tree
        std::os::unix::fs::symlink(temp.path(), temp.path().join("tree/loop")).unwrap();

        let summary =
            create_archive(temp.path(), Path::new("out.zip"), &[PathBuf::from("tree")]).unwrap();

        // The walk terminates; the link itself is recorded but not descended
        assert_eq!(summary.entries, 2);
        let names = entry_names(&temp.path().join("out.zip"));
        assert!(names.contains(&"tree/file.txt".to_string()));
        assert!(names.contains(&"tree/loop/".to_string()));
        assert!(!names.iter().any(|n| n.contains("loop/tree")));
    }
}
