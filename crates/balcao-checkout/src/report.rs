//! # Field-Level Validation Report
//!
//! Records validate as a whole: every field is checked and every failure is
//! collected, so a submission with three problems reports all three at once.
//! [`ValidationReport`] is the accumulator, [`FieldError`] the unit entry.
//!
//! Per-field checks are driven by [`check_field`] over explicit
//! [`FieldRule`] function references. The rule set applied to a field is
//! visible at the call site; there is no registry or dynamic dispatch to
//! chase.

use serde::Serialize;

use balcao_core::ValidationError;

// ---------------------------------------------------------------------------
// Error entries
// ---------------------------------------------------------------------------

/// A validation failure attached to a named record field.
///
/// Field identifiers are the snake_case names of the record fields they
/// belong to, known at compile time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Identifier of the field the failure belongs to.
    pub field: &'static str,
    /// Human-readable description of the failure.
    pub message: String,
}

impl FieldError {
    /// Create a failure entry for the given field.
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// Accumulated validation failures for one record.
///
/// Entries keep submission order: the order fields were checked in, then the
/// order rules fired for each field. An empty report means the record is
/// valid.
///
/// Each `validate()` produces its own report; callers combine reports from
/// related records with [`merge`](Self::merge). No record writes into
/// another record's report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no failures were recorded.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Record a failure for the given field.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    /// Record an already-built failure entry.
    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    /// True when at least one failure was recorded for the given field.
    pub fn error_on(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// All recorded failures, in the order they were recorded.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Append every failure from `other`, preserving order.
    pub fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
    }
}

// ---------------------------------------------------------------------------
// Per-field validation step
// ---------------------------------------------------------------------------

/// A single per-field validation rule.
///
/// Plain function references keep the rule set for each field explicit at
/// the call site. The core validators (`validate_cpf`, `validate_cnpj`,
/// `validate_phone`, …) all fit this signature.
pub type FieldRule = fn(&str) -> Result<(), ValidationError>;

/// Check one field value against its rule set and record failures.
///
/// Emptiness is judged after trimming surrounding whitespace, matching how
/// text inputs arrive from a form layer. A required empty value records a
/// single "required" failure and runs no rules; an optional empty value is
/// silently accepted. A non-empty value is passed (trimmed) through every
/// rule in order, and each failure is recorded under `field`.
pub fn check_field(
    report: &mut ValidationReport,
    field: &'static str,
    value: &str,
    required: bool,
    rules: &[FieldRule],
) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        if required {
            report.add(field, "this field is required");
        }
        return;
    }
    for rule in rules {
        if let Err(err) = rule(trimmed) {
            report.add(field, err.to_string());
        }
    }
}
