//! Reloadable roster snapshot

use crate::error::BpResult;
use crate::loader::load_roster;
use crate::model::Roster;
use log::{info, warn};
use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The roster currently in effect, backed by its source file.
///
/// Readers take an `Arc` snapshot and compute without holding the lock.
/// `reload` builds a complete new roster before swapping it in, so a
/// snapshot never changes underneath its holder.
pub struct RosterStore {
    path: PathBuf,
    current: RwLock<Arc<Roster>>,
}

impl RosterStore {
    pub fn open(path: impl Into<PathBuf>) -> BpResult<Self> {
        let path = path.into();
        let roster = load_roster(&path)?;
        Ok(Self {
            path,
            current: RwLock::new(Arc::new(roster)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn snapshot(&self) -> Arc<Roster> {
        Arc::clone(&self.current.read())
    }

    /// Re-read the source file; on failure the current roster stays in place
    pub fn reload(&self) -> BpResult<Arc<Roster>> {
        let roster = match load_roster(&self.path) {
            Ok(roster) => Arc::new(roster),
            Err(e) => {
                warn!("Reload of {:?} failed, keeping previous roster: {}", self.path, e);
                return Err(e);
            }
        };

        *self.current.write() = Arc::clone(&roster);
        info!("Roster reloaded: {} players", roster.len());
        Ok(roster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_reload_swaps_snapshot() {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), "Player,Deck,Other\nKai,Box,3\n").unwrap();

        let store = RosterStore::open(file.path()).unwrap();
        let before = store.snapshot();
        assert_eq!(before.len(), 1);

        fs::write(file.path(), "Player,Deck,Other\nKai,Box,3\nMio,Box,4\n").unwrap();
        let reloaded = store.reload().unwrap();

        assert_eq!(reloaded.len(), 2);
        assert_eq!(store.snapshot().len(), 2);
        assert_eq!(before.len(), 1);
    }

    #[test]
    fn test_failed_reload_keeps_previous() {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), "Player,Deck,Other\nKai,Box,3\n").unwrap();
        let store = RosterStore::open(file.path()).unwrap();

        fs::write(file.path(), "Player,Deck,Other\nKai,Box,three\n").unwrap();
        assert!(store.reload().is_err());
        assert_eq!(store.snapshot().players()[0].fallback(), Some(3));
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(RosterStore::open(dir.path().join("absent.csv")).is_err());
    }
}
