//! # Federative Units
//!
//! The 27 Brazilian federative units (26 states plus the Distrito Federal),
//! keyed by their two-letter codes. Checkout address forms select the unit
//! from this closed set, so a typed enum replaces the free-form region
//! string: an address with an unknown UF cannot be constructed.
//!
//! Order follows the conventional listing, alphabetical by unit name.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;

/// A Brazilian federative unit, identified by its two-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Uf {
    /// Acre.
    Ac,
    /// Alagoas.
    Al,
    /// Amapá.
    Ap,
    /// Amazonas.
    Am,
    /// Bahia.
    Ba,
    /// Ceará.
    Ce,
    /// Distrito Federal.
    Df,
    /// Espírito Santo.
    Es,
    /// Goiás.
    Go,
    /// Maranhão.
    Ma,
    /// Mato Grosso.
    Mt,
    /// Mato Grosso do Sul.
    Ms,
    /// Minas Gerais.
    Mg,
    /// Pará.
    Pa,
    /// Paraíba.
    Pb,
    /// Paraná.
    Pr,
    /// Pernambuco.
    Pe,
    /// Piauí.
    Pi,
    /// Rio de Janeiro.
    Rj,
    /// Rio Grande do Norte.
    Rn,
    /// Rio Grande do Sul.
    Rs,
    /// Rondônia.
    Ro,
    /// Roraima.
    Rr,
    /// Santa Catarina.
    Sc,
    /// São Paulo.
    Sp,
    /// Sergipe.
    Se,
    /// Tocantins.
    To,
}

/// Total number of federative units. Used for exhaustiveness assertions.
pub const UF_COUNT: usize = 27;

impl Uf {
    /// Returns all federative units in canonical order.
    pub fn all() -> &'static [Uf] {
        &[
            Self::Ac,
            Self::Al,
            Self::Ap,
            Self::Am,
            Self::Ba,
            Self::Ce,
            Self::Df,
            Self::Es,
            Self::Go,
            Self::Ma,
            Self::Mt,
            Self::Ms,
            Self::Mg,
            Self::Pa,
            Self::Pb,
            Self::Pr,
            Self::Pe,
            Self::Pi,
            Self::Rj,
            Self::Rn,
            Self::Rs,
            Self::Ro,
            Self::Rr,
            Self::Sc,
            Self::Sp,
            Self::Se,
            Self::To,
        ]
    }

    /// Returns the two-letter code for this unit.
    ///
    /// This matches the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ac => "AC",
            Self::Al => "AL",
            Self::Ap => "AP",
            Self::Am => "AM",
            Self::Ba => "BA",
            Self::Ce => "CE",
            Self::Df => "DF",
            Self::Es => "ES",
            Self::Go => "GO",
            Self::Ma => "MA",
            Self::Mt => "MT",
            Self::Ms => "MS",
            Self::Mg => "MG",
            Self::Pa => "PA",
            Self::Pb => "PB",
            Self::Pr => "PR",
            Self::Pe => "PE",
            Self::Pi => "PI",
            Self::Rj => "RJ",
            Self::Rn => "RN",
            Self::Rs => "RS",
            Self::Ro => "RO",
            Self::Rr => "RR",
            Self::Sc => "SC",
            Self::Sp => "SP",
            Self::Se => "SE",
            Self::To => "TO",
        }
    }

    /// Returns the full unit name, accents included.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ac => "Acre",
            Self::Al => "Alagoas",
            Self::Ap => "Amapá",
            Self::Am => "Amazonas",
            Self::Ba => "Bahia",
            Self::Ce => "Ceará",
            Self::Df => "Distrito Federal",
            Self::Es => "Espírito Santo",
            Self::Go => "Goiás",
            Self::Ma => "Maranhão",
            Self::Mt => "Mato Grosso",
            Self::Ms => "Mato Grosso do Sul",
            Self::Mg => "Minas Gerais",
            Self::Pa => "Pará",
            Self::Pb => "Paraíba",
            Self::Pr => "Paraná",
            Self::Pe => "Pernambuco",
            Self::Pi => "Piauí",
            Self::Rj => "Rio de Janeiro",
            Self::Rn => "Rio Grande do Norte",
            Self::Rs => "Rio Grande do Sul",
            Self::Ro => "Rondônia",
            Self::Rr => "Roraima",
            Self::Sc => "Santa Catarina",
            Self::Sp => "São Paulo",
            Self::Se => "Sergipe",
            Self::To => "Tocantins",
        }
    }
}

impl std::fmt::Display for Uf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Uf {
    type Err = ValidationError;

    /// Parse a federative unit from its two-letter code.
    ///
    /// Codes are canonical uppercase; `"sp"` does not parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AC" => Ok(Self::Ac),
            "AL" => Ok(Self::Al),
            "AP" => Ok(Self::Ap),
            "AM" => Ok(Self::Am),
            "BA" => Ok(Self::Ba),
            "CE" => Ok(Self::Ce),
            "DF" => Ok(Self::Df),
            "ES" => Ok(Self::Es),
            "GO" => Ok(Self::Go),
            "MA" => Ok(Self::Ma),
            "MT" => Ok(Self::Mt),
            "MS" => Ok(Self::Ms),
            "MG" => Ok(Self::Mg),
            "PA" => Ok(Self::Pa),
            "PB" => Ok(Self::Pb),
            "PR" => Ok(Self::Pr),
            "PE" => Ok(Self::Pe),
            "PI" => Ok(Self::Pi),
            "RJ" => Ok(Self::Rj),
            "RN" => Ok(Self::Rn),
            "RS" => Ok(Self::Rs),
            "RO" => Ok(Self::Ro),
            "RR" => Ok(Self::Rr),
            "SC" => Ok(Self::Sc),
            "SP" => Ok(Self::Sp),
            "SE" => Ok(Self::Se),
            "TO" => Ok(Self::To),
            other => Err(ValidationError::InvalidUf(other.to_string())),
        }
    }
}
