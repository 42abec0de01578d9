//! Snapshot persistence for the Session Record.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Context, Error, Result, record::SessionRecord, state::Step};

/// Writes the Session Record as indented JSON to a fixed path.
#[derive(Debug, Clone)]
pub struct SessionPersister {
    path: PathBuf,
}

impl SessionPersister {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize `record`, overwriting any existing snapshot.
    ///
    /// Creates parent directories if needed. Returns the path written to.
    pub fn save(&self, record: &SessionRecord) -> Result<PathBuf> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(record)?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("write {}", self.path.display()))?;
        debug!(path = %self.path.display(), step = record.current_step, "saved session");
        Ok(self.path.clone())
    }

    /// Read a previously saved snapshot. A missing file is `Ok(None)`.
    pub fn load(&self) -> Result<Option<SessionRecord>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let record: SessionRecord = serde_json::from_str(&raw)?;
        let after_last = Step::LAST.number() + 1;
        if !(Step::FIRST.number()..=after_last).contains(&record.current_step) {
            return Err(Error::message(format!(
                "{}: current_step {} is outside 1..={after_last}",
                self.path.display(),
                record.current_step
            )));
        }
        debug!(path = %self.path.display(), step = record.current_step, "loaded session");
        Ok(Some(record))
    }
}
