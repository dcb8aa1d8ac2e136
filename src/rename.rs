use crate::errors::{Error, Result};
use crate::filter::{ExtensionFilter, ALL_WITH_HIDDEN, HIDDEN_ONLY};
use crate::listing::{partition_entries, split_basename, FileEntry};
use crate::natural;
use crate::sanitize::{replace_whitespace, sanitize_name};
use crate::session::SessionStore;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Characters that must not end a computed extension or candidate name.
pub const INVALID_EXTENSION_CHARS: &[char] = &['*', ':', '?', '|', '.', ' '];

/// Rules for one rename pass over a directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameOptions {
    /// Directory whose files are renamed. Must exist.
    pub source_dir: PathBuf,
    /// Accepted input extensions. The first entry decides whether hidden
    /// files are part of the working set. An empty filter rejects renaming.
    pub filter: ExtensionFilter,
    /// Prepended to the counter when `renumber` is set. Not applied
    /// otherwise.
    pub prefix: String,
    /// First counter value; 0 is treated as 1. The counter advances for
    /// every file in the working set, eligible or not.
    pub start_counter: u32,
    /// Replace runs of whitespace in computed names with this character.
    pub space_replacement: Option<char>,
    /// Reduce computed names to `[0-9A-Za-z_]`.
    pub sanitize: bool,
    /// Replace each base name with `prefix + counter`.
    pub renumber: bool,
    /// Compute the mapping without touching the filesystem.
    pub view_only: bool,
}

impl Default for RenameOptions {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("."),
            filter: ExtensionFilter::default(),
            prefix: String::new(),
            start_counter: 1,
            space_replacement: None,
            sanitize: false,
            renumber: false,
            view_only: false,
        }
    }
}

/// What extension renamed files receive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetExtension {
    /// Each file keeps its original extension.
    #[default]
    Keep,
    /// Every renamed file gets this extension (no leading dot).
    Replace(String),
}

/// Where live renames are recorded so they can be reversed later.
pub struct UndoSession<'a> {
    store: &'a mut dyn SessionStore,
    session: &'a str,
}

impl<'a> UndoSession<'a> {
    pub fn new(store: &'a mut dyn SessionStore, session: &'a str) -> Self {
        Self { store, session }
    }
}

/// Result of one rename pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameOutcome {
    /// Old→new pairs for every eligible file, in processing order. Files
    /// whose new path equals the old one are included.
    pub mappings: Vec<(PathBuf, PathBuf)>,
    /// Renames performed on the filesystem. Always 0 in view-only mode.
    pub applied: usize,
    /// Mappings skipped because old and new paths match case-insensitively.
    pub unchanged: usize,
    /// Whether the pass ran in view-only mode.
    pub view_only: bool,
}

/// Rename the files of `options.source_dir` that match `options.filter`.
///
/// Files are processed in natural order of their path, with a counter
/// starting at `options.start_counter` and advancing once per file. Each
/// eligible file's new name is derived from the renumbering, whitespace and
/// sanitization rules, given the extension `target` dictates, and validated
/// against [`INVALID_EXTENSION_CHARS`]. Unless `options.view_only` is set,
/// each mapping whose new path differs from the old one (case-insensitively)
/// is applied with [`fs::rename`], after recording it into `undo` when one
/// is given.
///
/// A validation or filesystem failure aborts the call at the offending file.
/// Renames already performed in the same call are not rolled back; this
/// pass is not transactional.
pub fn rename_files(
    options: &RenameOptions,
    target: &TargetExtension,
    undo: Option<UndoSession<'_>>,
) -> Result<RenameOutcome> {
    if !options.source_dir.is_dir() {
        return Err(Error::InvalidSource {
            path: options.source_dir.clone(),
        });
    }

    let filter = &options.filter;
    let first = filter.first().unwrap_or("");
    let (hidden, normal) = partition_entries(&options.source_dir)?;

    let mut files: Vec<FileEntry> = if matches!(first, HIDDEN_ONLY | ALL_WITH_HIDDEN) {
        hidden
    } else {
        Vec::new()
    };

    // With several hidden files in play, renaming them all to one computed
    // base would collide; each keeps its own name pattern instead.
    let mut hidden_patterns: HashMap<PathBuf, String> = HashMap::new();
    if files.len() > 1 {
        for (index, entry) in files.iter().enumerate() {
            let (stem, ext) = split_basename(&entry.name);
            let ext = ext.unwrap_or("");
            let pattern = if stem.is_empty() && ext.is_empty() {
                index.to_string()
            } else {
                format!("{stem}.{ext}")
            };
            hidden_patterns.insert(entry.path.clone(), pattern);
        }
    }

    if first != HIDDEN_ONLY {
        files.extend(normal);
    }

    files.sort_by(|a, b| natural::compare(&a.path.to_string_lossy(), &b.path.to_string_lossy()));

    if filter.is_empty() && !files.is_empty() {
        return Err(Error::NoExtensions);
    }

    let mut undo = undo;
    let mut mappings: Vec<(PathBuf, PathBuf)> = Vec::new();
    let mut applied = 0;
    let mut unchanged = 0;
    // Widened so advancing past a maximal start value cannot wrap.
    let mut counter = u64::from(options.start_counter).max(1);

    for entry in &files {
        let original_ext = entry.extension();
        let eligible =
            filter.contains_extension(original_ext) || filter.is_single_sentinel();
        if !eligible {
            counter += 1;
            continue;
        }

        let file_ext = match target {
            TargetExtension::Keep => original_ext.unwrap_or(""),
            TargetExtension::Replace(ext) => ext.as_str(),
        };

        let mut base = if options.renumber {
            format!("{}{}", options.prefix, counter)
        } else {
            entry.stem().to_string()
        };
        if let Some(ch) = options.space_replacement {
            base = replace_whitespace(&base, ch);
        }
        if options.sanitize {
            base = sanitize_name(&base);
        }

        let mut new_path = options.source_dir.join(format!("{base}.{file_ext}"));

        if let Some(pattern) = hidden_patterns.get(&entry.path) {
            let mut name = pattern.clone();
            if options.renumber {
                name.push_str(&counter.to_string());
            }
            if !file_ext.is_empty() && split_basename(&name).1 != Some(file_ext) {
                name.push('.');
                name.push_str(file_ext);
            }
            if let Some(last) = name.chars().last() {
                if INVALID_EXTENSION_CHARS.contains(&last) {
                    return Err(Error::InvalidExtension {
                        character: last,
                        file: entry.name.clone(),
                    });
                }
            }
            new_path = options.source_dir.join(name);
        }

        if let Some(last) = file_ext.chars().last() {
            if INVALID_EXTENSION_CHARS.contains(&last) {
                return Err(Error::InvalidExtension {
                    character: last,
                    file: entry.name.clone(),
                });
            }
        }

        mappings.push((entry.path.clone(), new_path.clone()));

        let same = entry.path.to_string_lossy().to_lowercase()
            == new_path.to_string_lossy().to_lowercase();
        if same {
            unchanged += 1;
        } else if !options.view_only {
            if let Some(undo) = undo.as_mut() {
                undo.store.append(undo.session, &entry.path, &new_path)?;
            }
            fs::rename(&entry.path, &new_path)
                .map_err(|e| Error::io("rename", &entry.path, e))?;
            applied += 1;
        }

        counter += 1;
    }

    Ok(RenameOutcome {
        mappings,
        applied,
        unchanged,
        view_only: options.view_only,
    })
}
