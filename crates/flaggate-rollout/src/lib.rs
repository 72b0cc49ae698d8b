//! Flaggate Rollout Library
//!
//! Rollout variants for feature-flag strategies:
//! - Variant model in the Unleash admin wire shape
//! - Weight normalization (permille budget, fixed/variable split)
//! - Strategy editor that renormalizes after every mutation

pub mod editor;
pub mod error;
pub mod normalize;
pub mod variant;


pub use editor::StrategyEditor;
pub use error::{Error, Result};
pub use normalize::{TOTAL_WEIGHT, normalize, normalized};
pub use variant::{Variant, VariantPayload, WeightType};
