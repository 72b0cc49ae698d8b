//! Tests for the permission decision engine.

use serde_json::json;

use crate::config::GuestConfig;
use crate::engine::{
    Evaluation, PermissionRequest, PolicyDecision, PolicyEngine, RULE_IS_ENTITY_OWNER,
    RESOURCE_KIND_CATALOG_ENTITY, RuleParams,
};
use crate::identity::CallerIdentity;
use crate::permission::{FLAG_READ, FLAG_TOGGLE, VARIANT_MANAGE};
use crate::trace::TraceEvent;

fn init_test_tracing() {
    // Ignore the error when a previous test already installed a subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

fn alice() -> CallerIdentity {
    CallerIdentity::new("user:default/alice").with_ownership(["group:default/owners"])
}

#[test]
fn read_is_allowed_for_everyone() {
    let engine = PolicyEngine::new();
    let request = PermissionRequest::new(FLAG_READ);

    assert_eq!(engine.decide(&request, None), PolicyDecision::Allow);
    assert_eq!(engine.decide(&request, Some(&alice())), PolicyDecision::Allow);

    let guest = CallerIdentity::new("user:default/guest");
    assert_eq!(engine.decide(&request, Some(&guest)), PolicyDecision::Allow);
}

#[test]
fn write_denied_when_unauthenticated() {
    let engine = PolicyEngine::new();
    let request = PermissionRequest::new(FLAG_TOGGLE).with_resource("component:default/example");

    assert_eq!(engine.decide(&request, None), PolicyDecision::Deny);
}

#[test]
fn write_denied_when_identity_has_no_user_ref() {
    let engine = PolicyEngine::new();
    let request = PermissionRequest::new(FLAG_TOGGLE).with_resource("component:default/example");
    let anonymous = CallerIdentity::default();

    assert_eq!(engine.decide(&request, Some(&anonymous)), PolicyDecision::Deny);
}

#[test]
fn write_denied_for_guest_identities() {
    let engine = PolicyEngine::new();
    let request = PermissionRequest::new(FLAG_TOGGLE).with_resource("component:default/example");

    for guest_ref in [
        "user:default/guest",
        "user:development/guest",
        "user:Acme/Guest",
        "user:other/guest-demo",
    ] {
        let guest = CallerIdentity::new(guest_ref).with_ownership(["group:default/owners"]);
        assert_eq!(
            engine.decide(&request, Some(&guest)),
            PolicyDecision::Deny,
            "expected deny for {guest_ref}"
        );
    }
}

#[test]
fn resource_scoped_write_defers_to_ownership_rule() {
    let engine = PolicyEngine::new();
    let request = PermissionRequest::new(VARIANT_MANAGE).with_resource("component:default/example");

    let decision = engine.decide(&request, Some(&alice()));
    assert_eq!(
        decision,
        PolicyDecision::Conditional {
            resource_kind: RESOURCE_KIND_CATALOG_ENTITY.to_string(),
            rule: RULE_IS_ENTITY_OWNER.to_string(),
            rule_params: RuleParams { claims: vec!["group:default/owners".to_string()] },
        }
    );
}

#[test]
fn conditional_claims_empty_when_caller_owns_nothing() {
    let engine = PolicyEngine::new();
    let request = PermissionRequest::new(FLAG_TOGGLE).with_resource("component:default/example");
    let caller = CallerIdentity::new("user:default/bob");

    match engine.decide(&request, Some(&caller)) {
        PolicyDecision::Conditional { rule_params, .. } => {
            assert!(rule_params.claims.is_empty());
        }
        other => panic!("expected conditional decision, got {other:?}"),
    }
}

#[test]
fn unscoped_write_is_denied() {
    let engine = PolicyEngine::new();
    let request = PermissionRequest::new(FLAG_TOGGLE);

    assert_eq!(engine.decide(&request, Some(&alice())), PolicyDecision::Deny);
}

#[test]
fn unrelated_permission_passes_through() {
    let engine = PolicyEngine::new();
    let request = PermissionRequest::new("catalog.entity.read");

    assert_eq!(engine.decide(&request, None), PolicyDecision::Allow);
    assert_eq!(engine.decide(&request, Some(&alice())), PolicyDecision::Allow);

    let guest = CallerIdentity::new("user:default/guest");
    assert_eq!(engine.decide(&request, Some(&guest)), PolicyDecision::Allow);
}

#[test]
fn custom_guest_config_extends_deny_list() {
    let config = GuestConfig {
        exact_refs: vec!["user:demo/anonymous".to_string()],
        substrings: vec!["/guest".to_string(), "/demo-".to_string()],
    };
    let engine = PolicyEngine::with_guest_config(config);
    let request = PermissionRequest::new(FLAG_TOGGLE).with_resource("component:default/example");

    let anon = CallerIdentity::new("user:demo/anonymous");
    assert_eq!(engine.decide(&request, Some(&anon)), PolicyDecision::Deny);

    let demo = CallerIdentity::new("user:acme/Demo-Runner");
    assert_eq!(engine.decide(&request, Some(&demo)), PolicyDecision::Deny);

    // The default engine would let this one through to the ownership rule.
    assert!(matches!(
        PolicyEngine::new().decide(&request, Some(&demo)),
        PolicyDecision::Conditional { .. }
    ));
}

#[test]
fn trace_records_the_rule_that_fired() {
    init_test_tracing();
    let engine = PolicyEngine::new();

    let read = engine.evaluate(&PermissionRequest::new(FLAG_READ), None);
    assert_eq!(
        read.trace,
        vec![TraceEvent::ReadAllowed { permission: FLAG_READ.to_string() }]
    );
    read.emit();

    let guest = CallerIdentity::new("user:default/guest");
    let denied = engine.evaluate(
        &PermissionRequest::new(FLAG_TOGGLE).with_resource("component:default/example"),
        Some(&guest),
    );
    assert_eq!(
        denied.trace,
        vec![
            TraceEvent::WriteRequested { permission: FLAG_TOGGLE.to_string() },
            TraceEvent::GuestDenied { user_entity_ref: "user:default/guest".to_string() },
        ]
    );
    denied.emit();

    let deferred = engine.evaluate(
        &PermissionRequest::new(VARIANT_MANAGE).with_resource("component:default/example"),
        Some(&alice()),
    );
    assert_eq!(
        deferred.trace,
        vec![
            TraceEvent::WriteRequested { permission: VARIANT_MANAGE.to_string() },
            TraceEvent::OwnershipDeferred {
                resource_ref: "component:default/example".to_string(),
                claim_count: 1,
            },
        ]
    );
    deferred.emit();
}

#[test]
fn evaluation_is_stateless_and_repeatable() {
    let engine = PolicyEngine::new();
    let request = PermissionRequest::new(FLAG_TOGGLE).with_resource("component:default/example");
    let caller = alice();

    let first: Evaluation = engine.evaluate(&request, Some(&caller));
    let second: Evaluation = engine.evaluate(&request, Some(&caller));
    assert_eq!(first, second);
}

#[test]
fn conditional_decision_serializes_for_the_rule_evaluator() {
    let engine = PolicyEngine::new();
    let request = PermissionRequest::new(FLAG_TOGGLE).with_resource("component:default/example");

    let decision = engine.decide(&request, Some(&alice()));
    let value = serde_json::to_value(&decision).unwrap();
    assert_eq!(
        value,
        json!({
            "result": "conditional",
            "resourceKind": "catalog-entity",
            "rule": "IS_ENTITY_OWNER",
            "ruleParams": { "claims": ["group:default/owners"] },
        })
    );

    let allow = serde_json::to_value(PolicyDecision::Allow).unwrap();
    assert_eq!(allow, json!({ "result": "allow" }));
}
