//! # Person Classification
//!
//! Brazilian law distinguishes the natural person (pessoa física, taxed via
//! CPF) from the legal entity (pessoa jurídica, taxed via CNPJ). Checkout
//! branches on this distinction, so it is a closed enum rather than a flag
//! inferred from which document happens to be present.
//!
//! [`Gender`] covers the declaration options offered on natural-person
//! registration forms. Declaring is optional; the default is
//! [`Gender::Undisclosed`].

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;

/// Legal classification of a registered customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonType {
    /// Natural person. Identified by CPF.
    Fisica,
    /// Legal entity. Identified by CNPJ.
    Juridica,
}

impl PersonType {
    /// Returns all person types.
    pub fn all() -> &'static [PersonType] {
        &[Self::Fisica, Self::Juridica]
    }

    /// Returns the canonical identifier for this person type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fisica => "fisica",
            Self::Juridica => "juridica",
        }
    }
}

impl std::fmt::Display for PersonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PersonType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fisica" => Ok(Self::Fisica),
            "juridica" => Ok(Self::Juridica),
            other => Err(ValidationError::InvalidPersonType(other.to_string())),
        }
    }
}

/// Gender declaration on a natural-person registration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// No declaration made.
    #[default]
    Undisclosed,
    /// Masculine.
    Male,
    /// Feminine.
    Female,
    /// Any declaration outside the binary options.
    Other,
}

impl Gender {
    /// Returns all gender options.
    pub fn all() -> &'static [Gender] {
        &[Self::Undisclosed, Self::Male, Self::Female, Self::Other]
    }

    /// Returns the canonical identifier for this option.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Undisclosed => "undisclosed",
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "undisclosed" => Ok(Self::Undisclosed),
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            unknown => Err(ValidationError::InvalidGender(unknown.to_string())),
        }
    }
}
