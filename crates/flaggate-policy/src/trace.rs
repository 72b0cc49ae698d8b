//! Structured decision traces.
//!
//! The engine itself performs no logging; each evaluation returns the
//! events describing which rule fired, and the caller decides whether to
//! emit them (audit logs, request-scoped diagnostics, or nothing).

use serde::Serialize;

/// One step of a policy evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraceEvent {
    /// Read access is granted to every caller, including anonymous ones.
    ReadAllowed { permission: String },
    /// A write permission was requested; ownership rules apply from here.
    WriteRequested { permission: String },
    /// No resolved identity accompanied a write request.
    UnauthenticatedDenied,
    /// The caller's user ref matched the guest deny list.
    GuestDenied { user_entity_ref: String },
    /// Final say handed to the external ownership rule evaluator.
    OwnershipDeferred { resource_ref: String, claim_count: usize },
    /// Write request carried no resource scope.
    UnscopedWriteDenied,
    /// Permission outside the plugin namespace; not ours to restrict.
    PassthroughAllowed { permission: String },
}

impl TraceEvent {
    /// Log this event at debug level.
    pub fn emit(&self) {
        match self {
            Self::ReadAllowed { permission } => {
                tracing::debug!(%permission, "read permission allowed");
            }
            Self::WriteRequested { permission } => {
                tracing::debug!(%permission, "write permission requested");
            }
            Self::UnauthenticatedDenied => {
                tracing::debug!("write denied: unauthenticated caller");
            }
            Self::GuestDenied { user_entity_ref } => {
                tracing::debug!(%user_entity_ref, "write denied: guest identity");
            }
            Self::OwnershipDeferred { resource_ref, claim_count } => {
                tracing::debug!(%resource_ref, claim_count, "deferred to ownership rule");
            }
            Self::UnscopedWriteDenied => {
                tracing::debug!("write denied: no resource scope");
            }
            Self::PassthroughAllowed { permission } => {
                tracing::debug!(%permission, "permission outside namespace, allowed");
            }
        }
    }
}
