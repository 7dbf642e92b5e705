//! # Taxation Categories
//!
//! The ICMS taxation category a company declares once at registration.
//! This is the single definition used across the stack; every `match` on
//! [`Taxation`] is exhaustive, so adding a category is a compile-time-visible
//! change for every consumer — in particular for the state-registration rule,
//! whose policy table must cover all categories.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;

/// How a company relates to ICMS, the state-level goods and services tax.
///
/// The category governs the state-registration (Inscrição Estadual) field:
/// contributors must present one, exempt companies carry the `ISENTO`
/// sentinel, and non-contributors carry no registration at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Taxation {
    /// The company collects ICMS and holds a state registration.
    IcmsContributor,
    /// The company is formally exempt from ICMS.
    Exempt,
    /// The company is outside the ICMS regime entirely.
    NonContributor,
}

/// Total number of taxation categories. Used for exhaustiveness assertions.
pub const TAXATION_COUNT: usize = 3;

impl Taxation {
    /// Returns all taxation categories in canonical order.
    pub fn all() -> &'static [Taxation] {
        &[Self::IcmsContributor, Self::Exempt, Self::NonContributor]
    }

    /// Returns the snake_case string identifier for this category.
    ///
    /// This matches the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IcmsContributor => "icms_contributor",
            Self::Exempt => "exempt",
            Self::NonContributor => "non_contributor",
        }
    }

    /// True when this category makes the state registration mandatory.
    pub fn requires_state_registration(&self) -> bool {
        matches!(self, Self::IcmsContributor)
    }
}

impl std::fmt::Display for Taxation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Taxation {
    type Err = ValidationError;

    /// Parse a taxation category from its snake_case identifier.
    ///
    /// Accepts the same identifiers produced by [`Taxation::as_str()`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "icms_contributor" => Ok(Self::IcmsContributor),
            "exempt" => Ok(Self::Exempt),
            "non_contributor" => Ok(Self::NonContributor),
            other => Err(ValidationError::InvalidTaxation(other.to_string())),
        }
    }
}
