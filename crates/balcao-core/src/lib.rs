#![deny(missing_docs)]

//! # balcao-core — Brazilian Document Primitives
//!
//! This crate defines the national identifiers and closed vocabularies that
//! every other crate in the workspace depends on. It has no internal crate
//! dependencies — only `serde` and `thiserror` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Newtype wrappers for validated documents.** [`Cpf`], [`Cnpj`] and
//!    [`Phone`] can only be constructed through validation. A function taking
//!    a `Cpf` never re-checks its digits.
//!
//! 2. **Digits are the canonical form.** Every validator strips punctuation
//!    first via [`only_digits`], so `"111.444.777-35"` and `"11144477735"`
//!    are the same document. Newtypes store and serialize bare digits;
//!    [`Cpf::formatted`] and friends re-punctuate for display.
//!
//! 3. **Closed enums for legal vocabularies.** [`Taxation`], [`Uf`],
//!    [`PersonType`] and [`Gender`] are exhaustive `match` everywhere. No
//!    stringly-typed regime or state codes that can drift.
//!
//! 4. **[`ValidationError`] hierarchy.** Structured errors with `thiserror` —
//!    no `Box<dyn Error>`, no `.unwrap()` outside tests.

pub mod cnpj;
pub mod cpf;
pub mod digits;
pub mod error;
pub mod person;
pub mod phone;
pub mod taxation;
pub mod uf;

// Re-export primary types at crate root for ergonomic imports.
pub use cnpj::{is_valid_cnpj, validate_cnpj, Cnpj, CNPJ_LEN};
pub use cpf::{is_valid_cpf, validate_cpf, Cpf, CPF_LEN};
pub use digits::only_digits;
pub use error::ValidationError;
pub use person::{Gender, PersonType};
pub use phone::{
    is_valid_phone, is_valid_phone_optional, validate_phone, validate_phone_optional, Phone,
};
pub use taxation::{Taxation, TAXATION_COUNT};
pub use uf::{Uf, UF_COUNT};
