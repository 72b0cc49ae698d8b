//! Rollout variant model.
//!
//! Mirrors the Unleash admin API wire shape: the normalized list is sent
//! verbatim as the JSON body of `PUT .../variants`, so field names and the
//! `"fix"`/`"variable"` weight-type strings must match the upstream API.

use serde::{Deserialize, Serialize};

/// How a variant's weight is managed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum WeightType {
    /// Weight set explicitly by the user; never altered by normalization.
    #[serde(rename = "fix")]
    Fixed,
    /// Weight auto-balanced from the remaining permille budget.
    #[default]
    #[serde(rename = "variable")]
    Variable,
}

/// Optional payload delivered to clients that receive this variant.
///
/// Pass-through for normalization; never inspected or modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantPayload {
    #[serde(rename = "type")]
    pub payload_type: String,
    pub value: String,
}

/// One weighted branch of a rollout strategy.
///
/// Weights are permille (1000 = 100.0%), declared in `[0, 1000]`. The field
/// is signed: when fixed weights overspend the budget, normalization pushes
/// negative shares onto variable variants rather than clamping or failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub name: String,
    pub weight: i32,
    pub weight_type: WeightType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stickiness: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<VariantPayload>,
}

impl Variant {
    /// New auto-balanced variant with no weight assigned yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            weight: 0,
            weight_type: WeightType::Variable,
            stickiness: None,
            payload: None,
        }
    }

    /// New variant with an explicit, pinned weight.
    pub fn fixed(name: impl Into<String>, weight: i32) -> Self {
        Self {
            name: name.into(),
            weight,
            weight_type: WeightType::Fixed,
            stickiness: None,
            payload: None,
        }
    }
}
