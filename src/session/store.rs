use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::fs::atomic_write;
use crate::paths;

const SESSION_FILE: &str = "session_id";

/// Durable key-value slot holding the session identifier.
///
/// Only touched while the session is being initialized.
pub trait SessionStore {
    /// Reads the stored identifier, if any.
    fn load(&self) -> Result<Option<String>>;

    /// Replaces the stored identifier.
    fn save(&self, session_id: &str) -> Result<()>;
}

/// Stores the identifier as the sole content of a file.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Uses `$XDG_STATE_HOME/chatloop/session_id`.
    pub fn new() -> Result<Self> {
        Ok(Self {
            path: paths::state_dir()?.join(SESSION_FILE),
        })
    }

    pub const fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let trimmed = contents.trim();
                Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| {
                format!("Failed to read session file: {}", self.path.display())
            }),
        }
    }

    fn save(&self, session_id: &str) -> Result<()> {
        atomic_write(&self.path, session_id)
            .with_context(|| format!("Failed to save session file: {}", self.path.display()))
    }
}

/// In-memory store, for tests and for embedding without a filesystem.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    value: Mutex<Option<String>>,
    writes: AtomicUsize,
}

impl MemorySessionStore {
    pub fn with_value(value: &str) -> Self {
        Self {
            value: Mutex::new(Some(value.to_string())),
            writes: AtomicUsize::new(0),
        }
    }

    /// Number of `save` calls so far.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<String>> {
        let value = self
            .value
            .lock()
            .map_err(|_| anyhow::anyhow!("session store lock poisoned"))?;
        Ok(value.clone())
    }

    fn save(&self, session_id: &str) -> Result<()> {
        let mut value = self
            .value
            .lock()
            .map_err(|_| anyhow::anyhow!("session store lock poisoned"))?;
        *value = Some(session_id.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
