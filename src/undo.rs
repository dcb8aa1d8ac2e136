use crate::errors::Result;
use crate::session::SessionStore;
use std::fs;
use std::path::PathBuf;

/// Reverse every mapping recorded under `session` and clear the session.
///
/// Pairs are walked in recorded order. When a regular file still exists at
/// the recorded new path it is reported as restored and renamed back to its
/// old path; entries whose file was moved or deleted out-of-band are skipped
/// silently, as are individual rename failures. The session is cleared
/// afterwards whenever anything had been recorded, even if some entries
/// could not be restored. Reversing an empty or unknown session is a no-op.
pub fn reverse_session(store: &mut dyn SessionStore, session: &str) -> Result<Vec<PathBuf>> {
    let mappings = store.mappings(session);
    let mut restored = Vec::new();

    for (old, new) in &mappings {
        if new.is_file() {
            restored.push(new.clone());
            let _ = fs::rename(new, old);
        }
    }

    if !mappings.is_empty() {
        store.clear(session)?;
    }

    Ok(restored)
}
