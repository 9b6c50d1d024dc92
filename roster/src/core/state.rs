//! Per-session dashboard state
//!
//! Each browser session owns at most one record store, replaced wholesale
//! on every upload. The registry keys sessions by id so concurrent users
//! never see each other's rosters.

use std::collections::HashMap;

use shared::{DashboardData, LoadError, RecordStore};
use tracing::{debug, info};
use uuid::Uuid;

use crate::core::aggregate::{gender_aggregate, team_aggregate};
use crate::core::classifier::GenderClassifier;
use crate::core::loader::load_from_bytes;

/// State of a single dashboard session
#[derive(Debug, Default)]
pub struct DashboardSession {
    store: Option<RecordStore>,
}

impl DashboardSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an uploaded workbook and make it the session's store
    ///
    /// The previous store is dropped before parsing, so a failed upload
    /// leaves the session empty rather than showing stale rows.
    pub fn load_workbook(&mut self, bytes: &[u8]) -> Result<&RecordStore, LoadError> {
        self.store = None;
        let store = load_from_bytes(bytes)?;
        info!(rows = store.len(), "session store replaced");
        Ok(self.store.insert(store))
    }

    /// Current store, if an upload has succeeded
    pub fn store(&self) -> Option<&RecordStore> {
        self.store.as_ref()
    }

    /// Compute everything the dashboard renders in one pass
    ///
    /// `None` until a workbook has been loaded.
    pub fn dashboard_data(&self, classifier: &GenderClassifier) -> Option<DashboardData> {
        let store = self.store.as_ref()?;
        Some(DashboardData {
            row_count: store.len(),
            teams: team_aggregate(store),
            genders: gender_aggregate(store, classifier),
        })
    }
}

/// All live dashboard sessions, keyed by session id
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: HashMap<Uuid, DashboardSession>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session for the given id, created empty on first access
    pub fn session(&mut self, id: Uuid) -> &mut DashboardSession {
        self.sessions.entry(id).or_default()
    }

    /// Drop a session and whatever store it held
    pub fn remove(&mut self, id: Uuid) {
        if self.sessions.remove(&id).is_some() {
            debug!(session = %id, "session removed");
        }
    }

    /// Number of live sessions
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}
