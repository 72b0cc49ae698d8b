//! Strategy editor session.
//!
//! In-process model of the variant edit loop: every mutation renormalizes
//! before returning, so the permille budget invariant holds after each
//! operation and the current state can be sent upstream verbatim at any
//! point.

use crate::error::{Error, Result};
use crate::normalize::normalize;
use crate::variant::{Variant, WeightType};

/// Owned, always-normalized variant list for one strategy being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrategyEditor {
    variants: Vec<Variant>,
}

impl StrategyEditor {
    /// Empty editor session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing variant list (e.g. fetched from upstream),
    /// normalizing it immediately.
    pub fn from_variants(mut variants: Vec<Variant>) -> Self {
        normalize(&mut variants);
        Self { variants }
    }

    /// Append a new auto-balanced variant. Variant names are unique per
    /// strategy.
    pub fn add_variant(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        if self.position(&name).is_some() {
            return Err(Error::DuplicateVariant(name));
        }
        tracing::debug!(variant = %name, "adding variant");
        self.variants.push(Variant::new(name));
        normalize(&mut self.variants);
        Ok(())
    }

    /// Remove a variant by name.
    pub fn remove_variant(&mut self, name: &str) -> Result<()> {
        let index = self.position(name).ok_or_else(|| Error::UnknownVariant(name.to_string()))?;
        tracing::debug!(variant = %name, "removing variant");
        self.variants.remove(index);
        normalize(&mut self.variants);
        Ok(())
    }

    /// Pin a variant to an explicit weight. Touching the weight marks the
    /// variant fixed, matching the editing surface.
    pub fn set_weight(&mut self, name: &str, weight: i32) -> Result<()> {
        let variant = self.find_mut(name)?;
        variant.weight = weight;
        variant.weight_type = WeightType::Fixed;
        normalize(&mut self.variants);
        Ok(())
    }

    /// Reclassify a variant between fixed and variable.
    pub fn set_weight_type(&mut self, name: &str, weight_type: WeightType) -> Result<()> {
        self.find_mut(name)?.weight_type = weight_type;
        normalize(&mut self.variants);
        Ok(())
    }

    /// The current, normalized variant list.
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    /// Consume the session, yielding the list to send upstream.
    pub fn into_variants(self) -> Vec<Variant> {
        self.variants
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.variants.iter().position(|v| v.name == name)
    }

    fn find_mut(&mut self, name: &str) -> Result<&mut Variant> {
        self.variants
            .iter_mut()
            .find(|v| v.name == name)
            .ok_or_else(|| Error::UnknownVariant(name.to_string()))
    }
}
