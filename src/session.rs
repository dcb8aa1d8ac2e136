use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Key-value store recording old→new rename mappings under a caller-chosen
/// session identifier. The rename pipeline appends to it during live runs;
/// [`reverse_session`](crate::undo::reverse_session) consumes and clears it.
/// The store is injected state: the core never owns or creates one on its
/// own.
pub trait SessionStore {
    /// Record one mapping under `session`.
    fn append(&mut self, session: &str, old: &Path, new: &Path) -> Result<()>;

    /// All mappings recorded under `session`, in recorded order.
    fn mappings(&self, session: &str) -> Vec<(PathBuf, PathBuf)>;

    /// Drop every mapping recorded under `session`.
    fn clear(&mut self, session: &str) -> Result<()>;
}

/// Process-local store for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    sessions: HashMap<String, Vec<(PathBuf, PathBuf)>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn append(&mut self, session: &str, old: &Path, new: &Path) -> Result<()> {
        self.sessions
            .entry(session.to_string())
            .or_default()
            .push((old.to_path_buf(), new.to_path_buf()));
        Ok(())
    }

    fn mappings(&self, session: &str) -> Vec<(PathBuf, PathBuf)> {
        self.sessions.get(session).cloned().unwrap_or_default()
    }

    fn clear(&mut self, session: &str) -> Result<()> {
        self.sessions.remove(session);
        Ok(())
    }
}

/// One session's recorded renames.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Timestamp of the session's first recorded mapping.
    pub created_at: String,
    /// Recorded old→new pairs, in recording order.
    pub mappings: Vec<(PathBuf, PathBuf)>,
}

/// Store backed by a single pretty-printed JSON file mapping session
/// identifiers to their records. Every mutation rewrites the file.
#[derive(Debug)]
pub struct JsonSessionStore {
    path: PathBuf,
    sessions: HashMap<String, SessionRecord>,
}

impl JsonSessionStore {
    /// Load a store from `path`. A missing file is an empty store; a file
    /// that exists but does not parse is a store-format error.
    pub fn load(path: &Path) -> Result<Self> {
        let sessions = if path.exists() {
            let file = File::open(path).map_err(|e| Error::io("open session store", path, e))?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).map_err(|e| Error::StoreFormat {
                path: path.to_path_buf(),
                source: e,
            })?
        } else {
            HashMap::new()
        };

        Ok(Self {
            path: path.to_path_buf(),
            sessions,
        })
    }

    /// The stored record for `session`, if any mappings were recorded.
    pub fn session(&self, session: &str) -> Option<&SessionRecord> {
        self.sessions.get(session)
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| Error::io("create session store directory", parent, e))?;
            }
        }

        let body = serde_json::to_string_pretty(&self.sessions).map_err(|e| Error::StoreFormat {
            path: self.path.clone(),
            source: e,
        })?;
        fs::write(&self.path, body).map_err(|e| Error::io("write session store", &self.path, e))
    }
}

impl SessionStore for JsonSessionStore {
    fn append(&mut self, session: &str, old: &Path, new: &Path) -> Result<()> {
        let record = self
            .sessions
            .entry(session.to_string())
            .or_insert_with(|| SessionRecord {
                created_at: chrono::Local::now().to_rfc3339(),
                mappings: Vec::new(),
            });
        record.mappings.push((old.to_path_buf(), new.to_path_buf()));
        self.save()
    }

    fn mappings(&self, session: &str) -> Vec<(PathBuf, PathBuf)> {
        self.sessions
            .get(session)
            .map(|record| record.mappings.clone())
            .unwrap_or_default()
    }

    fn clear(&mut self, session: &str) -> Result<()> {
        if self.sessions.remove(session).is_some() {
            self.save()?;
        }
        Ok(())
    }
}
