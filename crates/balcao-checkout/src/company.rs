//! # Company Registration
//!
//! The registration record of a pessoa jurídica customer: company name,
//! CNPJ, state and municipal registrations, ICMS taxation category, and the
//! responsible person. Validation combines the per-field checks with the
//! whole-record state-registration rule from [`crate::ie`].

use serde::{Deserialize, Serialize};

use balcao_core::{validate_cnpj, Taxation};

use crate::ie::resolve_ie;
use crate::report::{check_field, ValidationReport};

/// A company registration submission.
///
/// `im` (inscrição municipal) is municipal and has no national format, so
/// it is carried free-form. `ie` is carried as submitted; what gets recorded
/// is decided by [`resolve_ie`] during validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRegistration {
    /// Legal company name (razão social).
    pub name: String,
    /// CNPJ, bare digits or punctuated.
    pub cnpj: String,
    /// State registration (inscrição estadual) as submitted.
    pub ie: String,
    /// Municipal registration (inscrição municipal). Free-form, optional.
    pub im: String,
    /// Declared ICMS taxation category.
    pub taxation: Taxation,
    /// Full name of the person responsible for the account.
    pub responsible: String,
}

/// Outcome of validating a company registration.
///
/// Carries the resolved state registration alongside the report because the
/// taxation rule may rewrite the submitted value even when nothing failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyValidation {
    /// Field-level failures, in check order.
    pub report: ValidationReport,
    /// The state registration value to record.
    pub ie: String,
}

impl CompanyRegistration {
    /// Validate the submission field by field, then apply the
    /// state-registration rule.
    ///
    /// `name`, `cnpj` and `responsible` are required; the CNPJ must carry
    /// valid check digits. The state-registration rule runs last and its
    /// failure, if any, is attached to the `ie` field of the same report.
    pub fn validate(&self) -> CompanyValidation {
        let mut report = ValidationReport::new();
        check_field(&mut report, "name", &self.name, true, &[]);
        check_field(&mut report, "cnpj", &self.cnpj, true, &[validate_cnpj]);
        check_field(&mut report, "responsible", &self.responsible, true, &[]);

        let resolution = resolve_ie(self.taxation, &self.ie);
        if let Some(error) = resolution.error {
            report.push(error);
        }

        CompanyValidation {
            report,
            ie: resolution.value,
        }
    }
}
