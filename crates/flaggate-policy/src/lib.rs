//! Flaggate Policy Library
//!
//! Permission decisions for feature-flag actions:
//! - Closed permission catalog (read / toggle / variant-manage)
//! - Rule-ordered decision engine (first match wins)
//! - Guest-identity detection with a configurable deny list
//! - Structured decision traces, logged only if the caller asks

pub mod config;
pub mod engine;
pub mod error;
pub mod identity;
pub mod permission;
pub mod trace;

#[cfg(test)]
mod engine_tests;

pub use config::GuestConfig;
pub use engine::{Evaluation, PermissionRequest, PolicyDecision, PolicyEngine, RuleParams};
pub use error::{Error, Result};
pub use identity::CallerIdentity;
pub use permission::FlagPermission;
pub use trace::TraceEvent;
