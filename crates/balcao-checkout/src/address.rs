//! # Delivery Address
//!
//! A delivery address in the Brazilian layout. Generic street1/street2
//! address shapes have no slot for the street number, the neighborhood
//! (bairro), or the courier reference point, so those are first-class fields
//! here.
//!
//! [`Address::as_string_list`] renders the display lines used on labels and
//! order summaries. The neighborhood is validated but not displayed; it
//! exists for carrier routing, not for the label.

use serde::{Deserialize, Serialize};

use balcao_core::{validate_phone, validate_phone_optional, Uf};

use crate::report::{check_field, ValidationReport};

/// Country code of the home market. Addresses in this country omit the
/// country line when displayed.
pub const HOME_COUNTRY: &str = "BR";

/// A delivery address.
///
/// `country` is an ISO 3166-1 alpha-2 code; codes compare exactly, no
/// territory-name lookup is involved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Recipient full name.
    pub recipient: String,
    /// Primary contact phone.
    pub phone: String,
    /// Mobile phone. Optional.
    pub cel: String,
    /// Postal code (CEP).
    pub cep: String,
    /// Street name (logradouro).
    pub street: String,
    /// Street number, or `"s/n"` when the street has none.
    pub numero: String,
    /// Complement: apartment, block, suite. Optional.
    pub complemento: String,
    /// Neighborhood (bairro).
    pub bairro: String,
    /// City name.
    pub city: String,
    /// Federative unit.
    pub uf: Uf,
    /// ISO 3166-1 alpha-2 country code.
    pub country: String,
    /// Reference point for the courier. Optional.
    pub ponto_ref: String,
}

impl Address {
    /// Validate the address field by field.
    ///
    /// Everything except `cel`, `complemento` and `ponto_ref` is required.
    /// The primary phone must be 10 or 11 digits; the mobile may be absent
    /// but must be well-formed when present.
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        check_field(&mut report, "recipient", &self.recipient, true, &[]);
        check_field(&mut report, "phone", &self.phone, true, &[validate_phone]);
        check_field(&mut report, "cel", &self.cel, false, &[validate_phone_optional]);
        check_field(&mut report, "cep", &self.cep, true, &[]);
        check_field(&mut report, "street", &self.street, true, &[]);
        check_field(&mut report, "numero", &self.numero, true, &[]);
        check_field(&mut report, "bairro", &self.bairro, true, &[]);
        check_field(&mut report, "city", &self.city, true, &[]);
        check_field(&mut report, "country", &self.country, true, &[]);
        report
    }

    /// Render the address as display lines.
    ///
    /// Line order: recipient; `street, numero`; complement; reference point;
    /// CEP; `city UF`; country code. The country line appears only when the
    /// code differs from `home_country`. Every line is trimmed, and lines of
    /// one character or less are dropped (an address without a complement
    /// loses that line instead of showing a blank).
    pub fn as_string_list(&self, home_country: &str) -> Vec<String> {
        let country_line = if self.country == home_country {
            String::new()
        } else {
            self.country.clone()
        };
        let lines = [
            self.recipient.clone(),
            format!("{}, {}", self.street, self.numero),
            self.complemento.clone(),
            self.ponto_ref.clone(),
            self.cep.clone(),
            format!("{} {}", self.city, self.uf),
            country_line,
        ];
        lines
            .into_iter()
            .map(|line| line.trim().to_string())
            .filter(|line| line.chars().count() > 1)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_address() -> Address {
        Address {
            recipient: "Maria da Silva".to_string(),
            phone: "(43) 5210-3521".to_string(),
            cel: "(11) 98765-4321".to_string(),
            cep: "86020-121".to_string(),
            street: "Avenida Paulista".to_string(),
            numero: "1578".to_string(),
            complemento: "Apto 42".to_string(),
            bairro: "Bela Vista".to_string(),
            city: "São Paulo".to_string(),
            uf: Uf::Sp,
            country: "BR".to_string(),
            ponto_ref: "Em frente ao MASP".to_string(),
        }
    }

    // -- validate --

    #[test]
    fn complete_address_is_valid() {
        assert!(sample_address().validate().is_valid());
    }

    #[test]
    fn optional_fields_may_be_empty() {
        let mut address = sample_address();
        address.cel = String::new();
        address.complemento = String::new();
        address.ponto_ref = String::new();
        assert!(address.validate().is_valid());
    }

    #[test]
    fn missing_required_fields_are_all_reported() {
        let mut address = sample_address();
        address.recipient = String::new();
        address.cep = String::new();
        address.bairro = String::new();
        let report = address.validate();
        assert!(report.error_on("recipient"));
        assert!(report.error_on("cep"));
        assert!(report.error_on("bairro"));
        assert_eq!(report.errors().len(), 3);
    }

    #[test]
    fn short_phone_is_reported() {
        let mut address = sample_address();
        address.phone = "5210-3521".to_string();
        let report = address.validate();
        assert!(report.error_on("phone"));
    }

    #[test]
    fn malformed_mobile_is_reported() {
        let mut address = sample_address();
        address.cel = "9876".to_string();
        let report = address.validate();
        assert!(report.error_on("cel"));
    }

    // -- as_string_list --

    #[test]
    fn home_address_renders_without_country_line() {
        let lines = sample_address().as_string_list(HOME_COUNTRY);
        assert_eq!(
            lines,
            [
                "Maria da Silva",
                "Avenida Paulista, 1578",
                "Apto 42",
                "Em frente ao MASP",
                "86020-121",
                "São Paulo SP",
            ]
        );
    }

    #[test]
    fn foreign_address_keeps_the_country_line() {
        let mut address = sample_address();
        address.country = "PT".to_string();
        let lines = address.as_string_list(HOME_COUNTRY);
        assert_eq!(lines.last().map(String::as_str), Some("PT"));
    }

    #[test]
    fn empty_optional_lines_are_dropped() {
        let mut address = sample_address();
        address.complemento = String::new();
        address.ponto_ref = "   ".to_string();
        let lines = address.as_string_list(HOME_COUNTRY);
        assert_eq!(
            lines,
            [
                "Maria da Silva",
                "Avenida Paulista, 1578",
                "86020-121",
                "São Paulo SP",
            ]
        );
    }

    #[test]
    fn bairro_is_not_displayed() {
        let lines = sample_address().as_string_list(HOME_COUNTRY);
        assert!(lines.iter().all(|line| !line.contains("Bela Vista")));
    }

    #[test]
    fn degenerate_street_line_is_dropped() {
        let mut address = sample_address();
        address.street = String::new();
        address.numero = String::new();
        let lines = address.as_string_list(HOME_COUNTRY);
        // "{street}, {numero}" collapses to "," which is too short to keep.
        assert!(lines.iter().all(|line| line != ","));
    }

    #[test]
    fn lines_are_trimmed() {
        let mut address = sample_address();
        address.recipient = "  Maria da Silva  ".to_string();
        let lines = address.as_string_list(HOME_COUNTRY);
        assert_eq!(lines[0], "Maria da Silva");
    }

    #[test]
    fn serde_round_trip_preserves_uf_code() {
        let address = sample_address();
        let json = serde_json::to_string(&address).unwrap();
        assert!(json.contains("\"SP\""));
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, address);
    }
}
