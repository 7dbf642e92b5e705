//! # Natural-Person Registration
//!
//! The registration record of a pessoa física customer: full name, CPF,
//! optional RG identity card, birth date, and gender declaration.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use balcao_core::{validate_cpf, Gender};

use crate::report::{check_field, ValidationReport};

/// A natural-person registration submission.
///
/// Documents are carried as submitted, punctuation included; validation
/// strips it. `rg` has no national checksum scheme (each state issues its
/// own format), so it is carried free-form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRegistration {
    /// Full name.
    pub name: String,
    /// CPF, bare digits or punctuated.
    pub cpf: String,
    /// RG identity-card number. Free-form, optional.
    pub rg: String,
    /// Date of birth.
    pub birth_date: Option<NaiveDate>,
    /// Gender declaration.
    pub gender: Gender,
}

impl PersonRegistration {
    /// Validate the submission field by field.
    ///
    /// `name`, `cpf` and `birth_date` are required; the CPF must carry valid
    /// check digits. Every failure is reported, not just the first.
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        check_field(&mut report, "name", &self.name, true, &[]);
        check_field(&mut report, "cpf", &self.cpf, true, &[validate_cpf]);
        if self.birth_date.is_none() {
            report.add("birth_date", "this field is required");
        }
        report
    }
}
