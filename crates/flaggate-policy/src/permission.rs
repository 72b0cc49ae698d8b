//! Permission catalog for the feature-flag plugin namespace.
//!
//! The catalog is a closed enumeration: the engine special-cases its own
//! read and write permissions and treats every other name as a passthrough.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire name of the read permission (universally allowed).
pub const FLAG_READ: &str = "unleash.flag.read";
/// Wire name of the flag-toggle write permission.
pub const FLAG_TOGGLE: &str = "unleash.flag.toggle";
/// Wire name of the variant-management write permission.
pub const VARIANT_MANAGE: &str = "unleash.variant.manage";

/// A permission identifier, parsed into the plugin's closed catalog.
///
/// Parsing is total: names outside the catalog land in `Other` and are
/// handled by the engine's default-allow rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlagPermission {
    /// View flags, runs and drift data.
    Read,
    /// Enable or disable a feature flag.
    Toggle,
    /// Create, edit or delete rollout variants and strategies.
    ManageVariants,
    /// Any permission outside this plugin's namespace.
    Other(String),
}

impl FlagPermission {
    /// Parse a wire permission name. Unknown names map to `Other`.
    pub fn from_name(name: &str) -> Self {
        match name {
            FLAG_READ => Self::Read,
            FLAG_TOGGLE => Self::Toggle,
            VARIANT_MANAGE => Self::ManageVariants,
            other => Self::Other(other.to_string()),
        }
    }

    /// The wire name this permission was parsed from.
    pub fn name(&self) -> &str {
        match self {
            Self::Read => FLAG_READ,
            Self::Toggle => FLAG_TOGGLE,
            Self::ManageVariants => VARIANT_MANAGE,
            Self::Other(name) => name,
        }
    }

    /// Whether this is one of the plugin's mutating permissions.
    pub fn is_write(&self) -> bool {
        matches!(self, Self::Toggle | Self::ManageVariants)
    }
}

impl fmt::Display for FlagPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for FlagPermission {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_catalog_names() {
        assert_eq!(FlagPermission::from_name(FLAG_READ), FlagPermission::Read);
        assert_eq!(FlagPermission::from_name(FLAG_TOGGLE), FlagPermission::Toggle);
        assert_eq!(
            FlagPermission::from_name(VARIANT_MANAGE),
            FlagPermission::ManageVariants
        );
    }

    #[test]
    fn unknown_name_is_other() {
        let perm = FlagPermission::from_name("catalog.entity.read");
        assert_eq!(perm, FlagPermission::Other("catalog.entity.read".into()));
        assert_eq!(perm.name(), "catalog.entity.read");
    }

    #[test]
    fn write_classification() {
        assert!(!FlagPermission::Read.is_write());
        assert!(FlagPermission::Toggle.is_write());
        assert!(FlagPermission::ManageVariants.is_write());
        assert!(!FlagPermission::Other("x".into()).is_write());
    }

    #[test]
    fn display_round_trips_wire_name() {
        assert_eq!(FlagPermission::Toggle.to_string(), FLAG_TOGGLE);
    }
}
