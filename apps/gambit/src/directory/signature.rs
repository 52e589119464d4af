//! Index keys over tenant, conversation, participant-set signature and kind.

/// Lookup tuple for the session index. `kind: None` is the wildcard entry
/// matching any game kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IndexKey {
    pub tenant_id: String,
    pub conversation_id: String,
    pub signature: String,
    pub kind: Option<String>,
}

impl IndexKey {
    pub fn new(
        tenant_id: impl Into<String>,
        conversation_id: impl Into<String>,
        signature: impl Into<String>,
        kind: Option<String>,
    ) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            conversation_id: conversation_id.into(),
            signature: signature.into(),
            kind,
        }
    }
}

/// Canonical participant-set signature: sorted, deduplicated, comma-joined
/// identities. Computed identically for a full participant set and for a
/// single participant, so a session is reachable both by "all of these
/// players" and by "any session this one player is in".
pub fn participant_signature<S: AsRef<str>>(contacts: &[S]) -> String {
    let mut ids: Vec<&str> = contacts.iter().map(AsRef::as_ref).collect();
    ids.sort_unstable();
    ids.dedup();
    ids.join(",")
}

/// Every index key a live session owns: full-set and per-participant
/// signatures, each with and without the kind. Exactly
/// 2 x (participants + 1) keys for distinct participant identities.
pub fn index_keys(
    tenant_id: &str,
    conversation_id: &str,
    contacts: &[String],
    kind: &str,
) -> Vec<IndexKey> {
    let mut signatures = vec![participant_signature(contacts)];
    for contact in contacts {
        let single = participant_signature(std::slice::from_ref(contact));
        if !signatures.contains(&single) {
            signatures.push(single);
        }
    }

    let mut keys = Vec::with_capacity(signatures.len() * 2);
    for signature in signatures {
        keys.push(IndexKey::new(tenant_id, conversation_id, signature.clone(), None));
        keys.push(IndexKey::new(
            tenant_id,
            conversation_id,
            signature,
            Some(kind.to_lowercase()),
        ));
    }
    keys
}
