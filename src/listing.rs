use crate::errors::{Error, Result};
use crate::filter::{ExtensionFilter, ALL_FILES, HIDDEN_ONLY};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Split a file name at the last dot, the way the rest of the crate treats
/// extensions. `photo.jpg` splits into `("photo", Some("jpg"))`,
/// `archive.tar.gz` into `("archive.tar", Some("gz"))`, `.gitignore` into
/// `("", Some("gitignore"))` and `name.` into `("name", Some(""))`. A name
/// without any dot has no extension.
pub fn split_basename(name: &str) -> (&str, Option<&str>) {
    match name.rfind('.') {
        Some(idx) => (&name[..idx], Some(&name[idx + 1..])),
        None => (name, None),
    }
}

/// A regular file found directly inside the source directory.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub path: PathBuf,
    pub name: String,
    pub hidden: bool,
}

impl FileEntry {
    pub fn stem(&self) -> &str {
        split_basename(&self.name).0
    }

    pub fn extension(&self) -> Option<&str> {
        split_basename(&self.name).1
    }
}

/// Collect the regular files directly inside `dir`, split into hidden and
/// non-hidden groups, each sorted by file name. Subdirectories are ignored;
/// symlinks count as the file they point at, and dangling symlinks are
/// skipped.
pub(crate) fn partition_entries(dir: &Path) -> Result<(Vec<FileEntry>, Vec<FileEntry>)> {
    let mut hidden = Vec::new();
    let mut normal = Vec::new();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            // A source directory that cannot be read fails the walk.
            // Entry-level errors do not.
            Err(e) if e.depth() == 0 => {
                return Err(Error::io("read directory", dir, e.into()));
            },
            Err(_) => continue,
        };
        // Stat through symlinks; a dangling link has no metadata and is
        // not a file.
        let Ok(metadata) = fs::metadata(entry.path()) else {
            continue;
        };
        if !metadata.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        let is_hidden = name.starts_with('.');
        let file = FileEntry {
            path: entry.into_path(),
            name,
            hidden: is_hidden,
        };
        if is_hidden {
            hidden.push(file);
        } else {
            normal.push(file);
        }
    }

    Ok((hidden, normal))
}

/// List the regular files directly inside `source_dir` that match `filter`.
///
/// The filter is normalized first (see [`ExtensionFilter::normalized`]).
/// Hidden files are only considered when the normalized filter does not lead
/// with `"*"`; a considered file is listed when the filter carries an "all
/// files" sentinel, when its extension is one of the entries, or when the
/// filter contains `"."` and the file is hidden. Hidden files come first,
/// then non-hidden, each group in file-name order.
///
/// Paths are bare file names unless `full_path` is set, in which case they
/// are joined onto `source_dir`.
pub fn list_files(
    source_dir: &Path,
    filter: &ExtensionFilter,
    full_path: bool,
) -> Result<Vec<PathBuf>> {
    if !source_dir.is_dir() {
        return Err(Error::InvalidSource {
            path: source_dir.to_path_buf(),
        });
    }

    let filter = filter.normalized()?;
    let (hidden, normal) = partition_entries(source_dir)?;

    let pool_hidden = filter.first() != Some(ALL_FILES);
    let pool: Vec<&FileEntry> = if pool_hidden {
        hidden.iter().chain(normal.iter()).collect()
    } else {
        normal.iter().collect()
    };

    let mut files = Vec::new();
    for entry in pool {
        let included = filter.matches_all()
            || filter.contains_extension(entry.extension())
            || (filter.contains(HIDDEN_ONLY) && entry.hidden);
        if included {
            files.push(if full_path {
                source_dir.join(&entry.name)
            } else {
                PathBuf::from(&entry.name)
            });
        }
    }

    Ok(files)
}
