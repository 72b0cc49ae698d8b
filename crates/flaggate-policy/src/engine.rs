//! Permission decision engine.
//!
//! Evaluates permission requests against a fixed rule order (first match
//! wins). Pure and total: every input maps to a decision, nothing is
//! cached, and no I/O happens on the evaluation path.

use serde::{Deserialize, Serialize};

use crate::config::GuestConfig;
use crate::identity::{CallerIdentity, is_guest_ref};
use crate::permission::FlagPermission;
use crate::trace::TraceEvent;

/// Resource kind for conditional decisions handed to the rule evaluator.
pub const RESOURCE_KIND_CATALOG_ENTITY: &str = "catalog-entity";
/// Rule name the external evaluator resolves ownership with.
pub const RULE_IS_ENTITY_OWNER: &str = "IS_ENTITY_OWNER";

/// A single permission check, constructed per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionRequest {
    /// The permission being exercised.
    pub permission: FlagPermission,
    /// Target resource, present only for resource-scoped checks.
    #[serde(default)]
    pub resource_ref: Option<String>,
}

impl PermissionRequest {
    /// Request for a permission by wire name, unscoped.
    pub fn new(permission_name: &str) -> Self {
        Self {
            permission: FlagPermission::from_name(permission_name),
            resource_ref: None,
        }
    }

    /// Scope the request to a resource.
    #[must_use]
    pub fn with_resource(mut self, resource_ref: impl Into<String>) -> Self {
        self.resource_ref = Some(resource_ref.into());
        self
    }
}

/// Parameters handed to the external ownership rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleParams {
    /// The caller's ownership claims, verbatim.
    pub claims: Vec<String>,
}

/// Outcome of a policy evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "camelCase")]
pub enum PolicyDecision {
    /// The action proceeds unconditionally.
    Allow,
    /// The action is refused.
    Deny,
    /// Provisionally allowed; a downstream rule evaluator compares the
    /// supplied claims against the resource's declared owner.
    #[serde(rename_all = "camelCase")]
    Conditional {
        resource_kind: String,
        rule: String,
        rule_params: RuleParams,
    },
}

impl PolicyDecision {
    fn ownership_condition(claims: Vec<String>) -> Self {
        Self::Conditional {
            resource_kind: RESOURCE_KIND_CATALOG_ENTITY.to_string(),
            rule: RULE_IS_ENTITY_OWNER.to_string(),
            rule_params: RuleParams { claims },
        }
    }
}

/// A decision together with the trace of rules that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub decision: PolicyDecision,
    pub trace: Vec<TraceEvent>,
}

impl Evaluation {
    fn new(decision: PolicyDecision, trace: Vec<TraceEvent>) -> Self {
        Self { decision, trace }
    }

    /// Log every trace event at debug level. Calling this is the caller's
    /// choice; evaluation itself never logs.
    pub fn emit(&self) {
        for event in &self.trace {
            event.emit();
        }
    }
}

/// Policy engine for feature-flag permission checks.
#[derive(Debug, Clone, Default)]
pub struct PolicyEngine {
    guests: GuestConfig,
}

impl PolicyEngine {
    /// Engine with the built-in guest deny list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with a custom guest deny list.
    pub fn with_guest_config(guests: GuestConfig) -> Self {
        Self { guests }
    }

    /// Evaluate a permission request, returning the decision and its trace.
    ///
    /// Rule order, first match wins:
    /// 1. read permission: allow, anonymous viewing included
    /// 2. write permission: deny unauthenticated, deny guests, defer
    ///    resource-scoped requests to the ownership rule, deny unscoped
    /// 3. anything outside the plugin namespace: allow
    pub fn evaluate(
        &self,
        request: &PermissionRequest,
        caller: Option<&CallerIdentity>,
    ) -> Evaluation {
        let permission = request.permission.name().to_string();

        if request.permission == FlagPermission::Read {
            return Evaluation::new(
                PolicyDecision::Allow,
                vec![TraceEvent::ReadAllowed { permission }],
            );
        }

        if request.permission.is_write() {
            let mut trace = vec![TraceEvent::WriteRequested { permission }];

            let Some(user_ref) = caller.and_then(|c| c.user_entity_ref.as_deref()) else {
                trace.push(TraceEvent::UnauthenticatedDenied);
                return Evaluation::new(PolicyDecision::Deny, trace);
            };
            if is_guest_ref(user_ref, &self.guests) {
                trace.push(TraceEvent::GuestDenied { user_entity_ref: user_ref.to_string() });
                return Evaluation::new(PolicyDecision::Deny, trace);
            }

            return match &request.resource_ref {
                Some(resource_ref) => {
                    let claims = caller
                        .map(|c| c.ownership_entity_refs.clone())
                        .unwrap_or_default();
                    trace.push(TraceEvent::OwnershipDeferred {
                        resource_ref: resource_ref.clone(),
                        claim_count: claims.len(),
                    });
                    Evaluation::new(PolicyDecision::ownership_condition(claims), trace)
                }
                // A write with no resource scope has no safe default.
                None => {
                    trace.push(TraceEvent::UnscopedWriteDenied);
                    Evaluation::new(PolicyDecision::Deny, trace)
                }
            };
        }

        Evaluation::new(
            PolicyDecision::Allow,
            vec![TraceEvent::PassthroughAllowed { permission }],
        )
    }

    /// Evaluate and discard the trace.
    pub fn decide(
        &self,
        request: &PermissionRequest,
        caller: Option<&CallerIdentity>,
    ) -> PolicyDecision {
        self.evaluate(request, caller).decision
    }
}
