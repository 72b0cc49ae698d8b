//! Caller identity and guest detection.

use serde::{Deserialize, Serialize};

use crate::config::GuestConfig;

/// Resolved identity of the authenticated principal.
///
/// The invoking request handler supplies this fully resolved; the engine
/// never consults an identity store. A `None` identity at the engine call
/// site, or a missing `user_entity_ref`, means the request is
/// unauthenticated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallerIdentity {
    /// Stable entity reference of the principal, e.g. `user:default/alice`.
    #[serde(default)]
    pub user_entity_ref: Option<String>,
    /// User/group references the caller is a member or owner of. Order and
    /// duplicates are immaterial; these become ownership claims verbatim.
    #[serde(default)]
    pub ownership_entity_refs: Vec<String>,
}

impl CallerIdentity {
    /// Identity with a user ref and no ownership claims.
    pub fn new(user_entity_ref: impl Into<String>) -> Self {
        Self {
            user_entity_ref: Some(user_entity_ref.into()),
            ownership_entity_refs: Vec::new(),
        }
    }

    /// Attach ownership claims.
    #[must_use]
    pub fn with_ownership<I, S>(mut self, refs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ownership_entity_refs = refs.into_iter().map(Into::into).collect();
        self
    }
}

/// Check an entity reference against the guest deny list.
///
/// A ref is a guest if it equals one of the configured exact refs, or if its
/// lowercase form contains any configured substring (`/guest` by default).
/// The substring rule is deliberately broad and carried over verbatim from
/// the observed system; see DESIGN.md.
pub fn is_guest_ref(user_ref: &str, config: &GuestConfig) -> bool {
    if config.exact_refs.iter().any(|r| r == user_ref) {
        return true;
    }
    let lowered = user_ref.to_lowercase();
    config.substrings.iter().any(|s| lowered.contains(s.as_str()))
}
