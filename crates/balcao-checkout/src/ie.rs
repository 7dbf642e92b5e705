//! # State Registration Rule
//!
//! The Inscrição Estadual (IE) is the state-level registration of companies
//! that collect ICMS, the state goods-and-services tax. Whether a company
//! must, may, or must not carry one follows from its declared taxation
//! category, so the IE field cannot be validated on its own: the rule reads
//! the category and the submitted value together and decides what to record.
//!
//! [`resolve_ie`] is that decision as a pure function. It never mutates the
//! submission; it returns the value to record plus an optional failure for
//! the caller to attach to its report.

use serde::Serialize;

use balcao_core::Taxation;

use crate::report::FieldError;

/// Sentinel recorded as the state registration of an ICMS-exempt company.
pub const IE_ISENTO: &str = "ISENTO";

/// Outcome of applying the state-registration rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IeResolution {
    /// The state registration value to record.
    pub value: String,
    /// The failure to attach to the `ie` field, if any.
    pub error: Option<FieldError>,
}

/// Decide the state registration to record for a company.
///
/// Emptiness of `submitted` is judged after trimming surrounding whitespace;
/// a blank-padded input is not a provided registration. The decision table:
///
/// | Category          | submitted empty     | submitted non-empty |
/// |-------------------|---------------------|---------------------|
/// | `IcmsContributor` | failure on `ie`     | kept as submitted   |
/// | `Exempt`          | `"ISENTO"`          | `"ISENTO"`          |
/// | `NonContributor`  | `""`                | `""`                |
///
/// For `Exempt` and `NonContributor` the outcome ignores the submission
/// entirely, so feeding the resolved value back in resolves to the same
/// value again.
pub fn resolve_ie(taxation: Taxation, submitted: &str) -> IeResolution {
    let submitted = submitted.trim();
    match taxation {
        Taxation::IcmsContributor => {
            if submitted.is_empty() {
                IeResolution {
                    value: submitted.to_string(),
                    error: Some(FieldError::new(
                        "ie",
                        "state registration is required for ICMS contributors",
                    )),
                }
            } else {
                IeResolution {
                    value: submitted.to_string(),
                    error: None,
                }
            }
        }
        Taxation::Exempt => {
            if submitted != IE_ISENTO {
                tracing::debug!(%submitted, "recording exemption sentinel as state registration");
            }
            IeResolution {
                value: IE_ISENTO.to_string(),
                error: None,
            }
        }
        Taxation::NonContributor => {
            if !submitted.is_empty() {
                tracing::debug!(%submitted, "discarding state registration of a non-contributor");
            }
            IeResolution {
                value: String::new(),
                error: None,
            }
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_taxation() -> impl Strategy<Value = Taxation> {
        prop::sample::select(Taxation::all())
    }

    proptest! {
        /// Resolution never fails for the rewriting categories, whatever was
        /// submitted.
        #[test]
        fn rewriting_categories_never_fail(submitted in ".*") {
            for taxation in [Taxation::Exempt, Taxation::NonContributor] {
                let resolution = resolve_ie(taxation, &submitted);
                prop_assert!(resolution.error.is_none());
            }
        }

        /// Resolving the resolved value again is a fixed point for every
        /// category where resolution succeeded.
        #[test]
        fn successful_resolution_is_a_fixed_point(
            taxation in any_taxation(),
            submitted in ".*",
        ) {
            let once = resolve_ie(taxation, &submitted);
            if once.error.is_none() {
                let twice = resolve_ie(taxation, &once.value);
                prop_assert_eq!(once, twice);
            }
        }

        /// The resolved value is never blank-padded.
        #[test]
        fn resolved_value_is_trimmed(taxation in any_taxation(), submitted in ".*") {
            let resolution = resolve_ie(taxation, &submitted);
            prop_assert_eq!(resolution.value.trim(), resolution.value.as_str());
        }
    }
}
