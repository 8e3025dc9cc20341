//! Session storage for request/response shells.
//!
//! Every request loads the store file, rehydrates one game snapshot, applies
//! a single operation, and writes the store back. Snapshots are validated on
//! access, so a hand-edited entry that breaks a session or tally invariant is
//! rejected on its own while the other sessions stay usable. Writes go to a
//! sibling temp file that is renamed over the store.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::GameError;
use crate::game::GameSnapshot;

/// Errors raised while loading, querying, or saving a [`SessionStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store file exists but could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The store file could not be written.
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The store file is not valid JSON for a store.
    #[error("cannot parse {}: {source}", .path.display())]
    Parse {
        /// File that failed.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
    /// The store could not be encoded.
    #[error("cannot encode sessions: {0}")]
    Encode(#[source] serde_json::Error),
    /// No session matches the given id.
    #[error("no session matches '{0}'")]
    UnknownSession(String),
    /// More than one session id starts with the given prefix.
    #[error("session id '{0}' is ambiguous")]
    AmbiguousSession(String),
    /// No id was given and no session is current.
    #[error("no current session (start one with `monty new`)")]
    NoCurrentSession,
    /// A stored session violates the game invariants.
    #[error("session {id} is corrupt: {source}")]
    CorruptSession {
        /// Offending session.
        id: SessionId,
        /// The violated invariant.
        source: GameError,
    },
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Opaque identifier of a stored session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// A fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The first eight hex digits, for compact listings.
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }

    fn matches_prefix(&self, prefix: &str) -> bool {
        self.0.simple().to_string().starts_with(prefix)
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// One persisted game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSession {
    /// Session id.
    pub id: SessionId,
    /// Persisted game state.
    pub game: GameSnapshot,
    /// When the session was created.
    pub created_at: DateTime<Utc>,
    /// When the session was last written.
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    current: Option<SessionId>,
    sessions: Vec<StoredSession>,
}

/// A JSON file holding every session plus a pointer to the current one.
#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    file: StoreFile,
}

impl SessionStore {
    /// Load the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let file = match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).map_err(|source| StoreError::Parse {
                path: path.clone(),
                source,
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => StoreFile::default(),
            Err(source) => return Err(StoreError::Read { path, source }),
        };
        Ok(Self { path, file })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Add a new session and make it current.
    pub fn create(&mut self, game: GameSnapshot) -> SessionId {
        let now = Utc::now();
        let id = SessionId::new();
        self.file.sessions.push(StoredSession {
            id,
            game,
            created_at: now,
            updated_at: now,
        });
        self.file.current = Some(id);
        tracing::debug!(%id, "session created");
        id
    }

    /// Resolve a full id or unique id prefix. Prefixes may be written with
    /// or without hyphens. `None` means the current session.
    pub fn resolve(&self, query: Option<&str>) -> StoreResult<SessionId> {
        let Some(query) = query else {
            return self.file.current.ok_or(StoreError::NoCurrentSession);
        };

        if let Ok(id) = query.parse::<SessionId>() {
            return if self.file.sessions.iter().any(|s| s.id == id) {
                Ok(id)
            } else {
                Err(StoreError::UnknownSession(query.to_string()))
            };
        }

        let needle: String = query
            .chars()
            .filter(|c| *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let mut matches = self
            .file
            .sessions
            .iter()
            .filter(|s| s.id.matches_prefix(&needle));
        match (matches.next(), matches.next()) {
            (Some(found), None) => Ok(found.id),
            (Some(_), Some(_)) => Err(StoreError::AmbiguousSession(query.to_string())),
            (None, _) => Err(StoreError::UnknownSession(query.to_string())),
        }
    }

    /// The validated snapshot of a session.
    pub fn get(&self, id: SessionId) -> StoreResult<&GameSnapshot> {
        let stored = self.entry(id)?;
        stored
            .game
            .validate()
            .map_err(|source| StoreError::CorruptSession { id, source })?;
        Ok(&stored.game)
    }

    /// Replace a session's snapshot.
    pub fn put(&mut self, id: SessionId, game: GameSnapshot) -> StoreResult<()> {
        let stored = self
            .file
            .sessions
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| StoreError::UnknownSession(id.to_string()))?;
        stored.game = game;
        stored.updated_at = Utc::now();
        Ok(())
    }

    /// Delete a session. Clears the current pointer if it pointed there.
    pub fn remove(&mut self, id: SessionId) -> StoreResult<StoredSession> {
        let pos = self
            .file
            .sessions
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| StoreError::UnknownSession(id.to_string()))?;
        if self.file.current == Some(id) {
            self.file.current = None;
        }
        Ok(self.file.sessions.remove(pos))
    }

    /// Make `id` the current session.
    pub fn set_current(&mut self, id: SessionId) -> StoreResult<()> {
        self.entry(id)?;
        self.file.current = Some(id);
        Ok(())
    }

    /// The current session id, if any.
    pub fn current(&self) -> Option<SessionId> {
        self.file.current
    }

    /// All sessions in creation order.
    pub fn sessions(&self) -> &[StoredSession] {
        &self.file.sessions
    }

    /// Number of stored sessions.
    pub fn len(&self) -> usize {
        self.file.sessions.len()
    }

    /// Whether the store holds no sessions.
    pub fn is_empty(&self) -> bool {
        self.file.sessions.is_empty()
    }

    /// Write the store back to disk, creating parent directories. The new
    /// content is written to a sibling temp file and renamed into place, so
    /// a failed write leaves the previous store intact.
    pub fn save(&self) -> StoreResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let content = serde_json::to_string_pretty(&self.file).map_err(StoreError::Encode)?;
        let temp_path = self.temp_path();
        std::fs::write(&temp_path, content).map_err(|source| StoreError::Write {
            path: temp_path.clone(),
            source,
        })?;
        if let Err(source) = std::fs::rename(&temp_path, &self.path) {
            let _ = std::fs::remove_file(&temp_path);
            return Err(StoreError::Write {
                path: self.path.clone(),
                source,
            });
        }
        tracing::info!(
            path = %self.path.display(),
            sessions = self.file.sessions.len(),
            "session store saved"
        );
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn entry(&self, id: SessionId) -> StoreResult<&StoredSession> {
        self.file
            .sessions
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| StoreError::UnknownSession(id.to_string()))
    }
}
