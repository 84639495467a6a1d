//! Bearer token persistence
//!
//! At most one token is authoritative at a time. Presence of a token does
//! not guarantee validity; the backend is the source of truth.

use crate::error::Result;
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

/// Storage for the session's bearer token
///
/// Read before every outgoing request and written only by session-mutating
/// operations (login, register, logout, hydration failure, refresh failure,
/// account deletion). Implementations must be safe to share across tasks.
pub trait TokenStore: Send + Sync {
    /// Current token, if one is stored. Unreadable storage counts as absent.
    fn get(&self) -> Option<String>;

    /// Persist a new token, replacing any previous one
    fn set(&self, token: &str) -> Result<()>;

    /// Remove the stored token. Removing an absent token is not an error.
    fn remove(&self) -> Result<()>;
}

/// Token store backed by a single file (default `~/.robolearn/token`)
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Option<String> {
        let content = fs::read_to_string(&self.path).ok()?;
        let token = content.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    fn set(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)?;

        // The token grants full account access, keep it private
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))?;
        }

        Ok(())
    }

    fn remove(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory token store for tests and embedding
#[derive(Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store, for simulating an existing session
    pub fn with_token(token: &str) -> Self {
        Self {
            token: RwLock::new(Some(token.to_string())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.read().ok()?.clone()
    }

    fn set(&self, token: &str) -> Result<()> {
        if let Ok(mut guard) = self.token.write() {
            *guard = Some(token.to_string());
        }
        Ok(())
    }

    fn remove(&self) -> Result<()> {
        if let Ok(mut guard) = self.token.write() {
            *guard = None;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryTokenStore::new();
        assert!(store.get().is_none());

        store.set("tok123").unwrap();
        assert_eq!(store.get().as_deref(), Some("tok123"));

        store.remove().unwrap();
        assert!(store.get().is_none());
    }

    #[test]
    fn test_memory_store_overwrites() {
        let store = MemoryTokenStore::with_token("old");
        store.set("new").unwrap();
        assert_eq!(store.get().as_deref(), Some("new"));
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("token"));

        assert!(store.get().is_none());
        store.set("tok456").unwrap();
        assert_eq!(store.get().as_deref(), Some("tok456"));

        store.remove().unwrap();
        assert!(store.get().is_none());
    }

    #[test]
    fn test_file_store_remove_absent_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("missing"));
        assert!(store.remove().is_ok());
    }

    #[test]
    fn test_file_store_ignores_whitespace() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        fs::write(&path, "tok789\n").unwrap();

        let store = FileTokenStore::new(path);
        assert_eq!(store.get().as_deref(), Some("tok789"));
    }

    #[cfg(unix)]
    #[test]
    fn test_file_store_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("token"));
        store.set("secret").unwrap();

        let mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
