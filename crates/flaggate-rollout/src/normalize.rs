//! Variant weight normalization.
//!
//! Keeps a non-empty variant list summing to the full permille budget:
//! fixed variants keep their declared weight, variable variants evenly
//! split whatever remains. The first variant in original order absorbs the
//! rounding remainder, a deliberate tie-break that keeps the sum exact for
//! any list length.

use crate::variant::{Variant, WeightType};

/// Full rollout budget in permille (1000 = 100.0%).
pub const TOTAL_WEIGHT: i32 = 1000;

/// Rewrite weights in place so the list sums to [`TOTAL_WEIGHT`].
///
/// Order, length and non-weight fields are untouched. Rules:
/// - empty list: unchanged
/// - no fixed variants: even split of the full budget, and every entry is
///   (re)marked variable
/// - fixed variants only: unchanged, even when their sum misses the budget
///   (surfacing that is the caller's concern, never silently overridden)
/// - mixed: fixed weights stand; variable variants split the remaining
///   budget, which may be negative and is deliberately not clamped
///
/// Splits use floor division, so the remainder handed to the first variable
/// variant is always non-negative and the sum stays exact.
pub fn normalize(variants: &mut [Variant]) {
    if variants.is_empty() {
        return;
    }

    let has_fixed = variants.iter().any(|v| v.weight_type == WeightType::Fixed);
    if !has_fixed {
        let count = variants.len() as i32;
        let even = TOTAL_WEIGHT.div_euclid(count);
        let remainder = TOTAL_WEIGHT - even * count;
        for (i, variant) in variants.iter_mut().enumerate() {
            variant.weight = if i == 0 { even + remainder } else { even };
            variant.weight_type = WeightType::Variable;
        }
        return;
    }

    let fixed_total: i32 = variants
        .iter()
        .filter(|v| v.weight_type == WeightType::Fixed)
        .map(|v| v.weight)
        .sum();
    let variable_count = variants
        .iter()
        .filter(|v| v.weight_type == WeightType::Variable)
        .count() as i32;
    if variable_count == 0 {
        return;
    }

    // May be negative when fixed weights overspend the budget; the negative
    // share lands on the variable variants unclamped.
    let remaining = TOTAL_WEIGHT - fixed_total;
    let even = remaining.div_euclid(variable_count);
    let remainder = remaining - even * variable_count;

    let mut first_variable = true;
    for variant in variants.iter_mut().filter(|v| v.weight_type == WeightType::Variable) {
        variant.weight = if first_variable {
            first_variable = false;
            even + remainder
        } else {
            even
        };
    }
}

/// By-value convenience around [`normalize`].
pub fn normalized(mut variants: Vec<Variant>) -> Vec<Variant> {
    normalize(&mut variants);
    variants
}
