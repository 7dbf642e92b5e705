//! # balcao-checkout — Registration Records and Business Rules
//!
//! Connects the document primitives (`balcao-core`) to the records a
//! Brazilian checkout collects. This crate provides:
//!
//! - [`ValidationReport`] and [`check_field`]: whole-record validation that
//!   reports every field failure at once, driven by explicit rule function
//!   references.
//!
//! - [`resolve_ie`]: the state-registration rule. What gets recorded as a
//!   company's Inscrição Estadual follows from its ICMS taxation category,
//!   not from the submitted value alone.
//!
//! - [`PersonRegistration`] / [`CompanyRegistration`]: the two customer
//!   registration records, natural person and legal entity.
//!
//! - [`Address`]: the delivery address in the Brazilian layout, with its
//!   label rendering.
//!
//! ## Architecture
//!
//! ```text
//! balcao-core (primitives)  -->  balcao-checkout (records + rules)
//!   validate_cpf / validate_cnpj     PersonRegistration / CompanyRegistration
//!   validate_phone*                  Address
//!   Taxation / Uf / Gender           resolve_ie, ValidationReport
//! ```
//!
//! The records here are plain data carriers for the validation rules. Form
//! binding, persistence and checkout flow belong to the host platform.

pub mod address;
pub mod company;
pub mod ie;
pub mod person;
pub mod report;

pub use address::{Address, HOME_COUNTRY};
pub use company::{CompanyRegistration, CompanyValidation};
pub use ie::{resolve_ie, IeResolution, IE_ISENTO};
pub use person::PersonRegistration;
pub use report::{check_field, FieldError, FieldRule, ValidationReport};
