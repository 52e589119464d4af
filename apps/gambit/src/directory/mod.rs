//! Session directory: the multi-keyed index over live sessions and the
//! primary store of per-session lock slots.
//!
//! Cross-session operations proceed concurrently through the sharded maps;
//! mutation of one session is serialized by the `tokio::sync::Mutex` in its
//! slot, which a move-processing chain holds across external-call awaits
//! until it completes or fails.

pub mod signature;

#[cfg(test)]
mod tests_props;

use std::collections::BTreeSet;
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::{Session, SessionId};
use crate::errors::domain::{ConflictKind, ValidationKind};
use crate::errors::DomainError;
pub use signature::{index_keys, participant_signature, IndexKey};

/// Per-session slot handed out by the primary store.
pub type SessionSlot = Arc<Mutex<Session>>;

/// In-memory directory of live sessions. Constructed once per process and
/// passed by reference to the components that need it; state does not
/// outlive the process.
#[derive(Default)]
pub struct SessionDirectory {
    index: DashMap<IndexKey, BTreeSet<SessionId>>,
    primary: DashMap<SessionId, SessionSlot>,
}

impl SessionDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session ids matching the key tuple, in stable (sorted) order. A key
    /// that was never inserted yields an empty list, not an error.
    pub fn lookup(
        &self,
        tenant_id: &str,
        conversation_id: &str,
        contacts: &[String],
        kind: Option<&str>,
    ) -> Vec<SessionId> {
        let key = IndexKey::new(
            tenant_id,
            conversation_id,
            participant_signature(contacts),
            kind.map(str::to_lowercase),
        );
        self.index
            .get(&key)
            .map(|ids| ids.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Insert a session: writes every index entry the key tuple owns plus
    /// the primary record, and returns the session's lock slot.
    ///
    /// The full-set-plus-kind key is claimed first, under its entry lock,
    /// and an already occupied claim fails with a session-exists conflict.
    /// Two racing inserts for the same tuple therefore serialize on that
    /// entry and exactly one wins; the loser has written nothing.
    ///
    /// Fails with a validation error when the tenant, conversation,
    /// participant set or kind is missing. That is a programming-contract
    /// violation, not a user mistake.
    pub fn insert(&self, session: Session) -> Result<SessionSlot, DomainError> {
        if session.tenant_id.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::MissingField,
                "session tenant id is empty",
            ));
        }
        if session.conversation_id.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::MissingField,
                "session conversation id is empty",
            ));
        }
        if session.participants.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::MissingField,
                "session participant set is empty",
            ));
        }
        if session.kind.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::MissingField,
                "session game kind is unset",
            ));
        }

        let id = session.id.clone();
        let keys = index_keys(
            &session.tenant_id,
            &session.conversation_id,
            &session.contacts(),
            &session.kind,
        );
        let claim = IndexKey::new(
            &session.tenant_id,
            &session.conversation_id,
            participant_signature(&session.contacts()),
            Some(session.kind.to_lowercase()),
        );
        // The entry guard must be dropped before touching other keys; two
        // keys may share a shard.
        match self.index.entry(claim.clone()) {
            Entry::Occupied(mut occupied) => {
                if !occupied.get().is_empty() {
                    return Err(DomainError::conflict(
                        ConflictKind::SessionExists,
                        format!(
                            "a session already holds the {} / {} key",
                            claim.signature, session.kind
                        ),
                    ));
                }
                occupied.get_mut().insert(id.clone());
            }
            Entry::Vacant(vacant) => {
                vacant.insert(BTreeSet::from([id.clone()]));
            }
        }
        for key in keys {
            if key == claim {
                continue;
            }
            self.index.entry(key).or_default().insert(id.clone());
        }

        debug!(session_id = %id, kind = %session.kind, "session indexed");
        let slot: SessionSlot = Arc::new(Mutex::new(session));
        self.primary.insert(id, Arc::clone(&slot));
        Ok(slot)
    }

    /// Remove a session: deletes exactly the index entries `insert` created
    /// for the key tuple and the primary record. A key whose id set becomes
    /// empty is deleted outright; removing a non-existent entry is a no-op.
    pub fn remove(
        &self,
        tenant_id: &str,
        conversation_id: &str,
        contacts: &[String],
        kind: &str,
        id: &SessionId,
    ) {
        for key in index_keys(tenant_id, conversation_id, contacts, kind) {
            let now_empty = match self.index.get_mut(&key) {
                Some(mut ids) => {
                    ids.remove(id);
                    ids.is_empty()
                }
                None => false,
            };
            if now_empty {
                // Re-checked under the entry lock; empty sets are deleted,
                // never kept as tombstones.
                self.index.remove_if(&key, |_, ids| ids.is_empty());
            }
        }
        if self.primary.remove(id).is_some() {
            debug!(session_id = %id, "session removed");
        }
    }

    /// The lock slot for a session id, when the session is still live.
    pub fn get(&self, id: &SessionId) -> Option<SessionSlot> {
        self.primary.get(id).map(|slot| Arc::clone(slot.value()))
    }

    /// Number of live sessions in the primary store.
    pub fn session_count(&self) -> usize {
        self.primary.len()
    }

    /// Total index entries across all keys. A live session with `n`
    /// distinct participants owns exactly `2 * (n + 1)` of them.
    pub fn entry_count(&self) -> usize {
        self.index.iter().map(|entry| entry.value().len()).sum()
    }
}
