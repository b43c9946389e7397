use chrono::NaiveDate;
use utoipa::ToSchema;
use validator::Validate;

use crate::core::error::{AppError, Result};

/// Expected wire format for `invoiceDate`
pub const INVOICE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Registration form request DTO for OpenAPI documentation
/// Note: This struct is for Swagger UI documentation only.
/// The actual handler uses axum's Multipart extractor directly.
#[derive(Debug, ToSchema)]
#[schema(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct RegisterProductForm {
    /// Product category
    #[schema(example = "Laptop")]
    pub category: String,
    /// Product model
    #[schema(example = "X1")]
    pub model: String,
    /// Serial number printed on the product
    #[schema(example = "SN123")]
    pub serial_number: String,
    /// Invoice date, YYYY-MM-DD
    #[schema(example = "2024-01-01")]
    pub invoice_date: String,
    /// Proof-of-purchase attachment
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub file_upload: String,
}

/// One attachment pulled out of the multipart stream
#[derive(Debug, Clone)]
pub struct AttachmentUpload {
    pub original_filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// Raw text fields as collected from the multipart form, before validation
#[derive(Debug, Default)]
pub struct RegistrationFields {
    pub category: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub invoice_date: Option<String>,
}

/// Validated registration input, decoupled from the persisted record type
#[derive(Debug, Clone, Validate)]
pub struct RegisterProductDto {
    #[validate(length(min = 1, max = 255, message = "category must be 1-255 characters"))]
    pub category: String,

    #[validate(length(min = 1, max = 255, message = "model must be 1-255 characters"))]
    pub model: String,

    #[validate(length(min = 1, max = 255, message = "serialNumber must be 1-255 characters"))]
    pub serial_number: String,

    pub invoice_date: NaiveDate,
}

impl RegistrationFields {
    /// Check presence of every text field and parse the invoice date.
    ///
    /// Field names in error messages use the wire (camelCase) spelling.
    pub fn validate_into_dto(self) -> Result<RegisterProductDto> {
        let category = require_field(self.category, "category")?;
        let model = require_field(self.model, "model")?;
        let serial_number = require_field(self.serial_number, "serialNumber")?;
        let raw_date = require_field(self.invoice_date, "invoiceDate")?;

        let invoice_date = NaiveDate::parse_from_str(raw_date.trim(), INVOICE_DATE_FORMAT)
            .map_err(|_| {
                AppError::Validation(format!(
                    "invoiceDate must be a valid date in YYYY-MM-DD format, got '{}'",
                    raw_date
                ))
            })?;

        let dto = RegisterProductDto {
            category,
            model,
            serial_number,
            invoice_date,
        };
        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        Ok(dto)
    }
}

fn require_field(value: Option<String>, name: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::Validation(format!("{} is required", name))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_fields() -> RegistrationFields {
        RegistrationFields {
            category: Some("Laptop".to_string()),
            model: Some("X1".to_string()),
            serial_number: Some("SN123".to_string()),
            invoice_date: Some("2024-01-01".to_string()),
        }
    }

    #[test]
    fn complete_form_validates() {
        let dto = complete_fields().validate_into_dto().unwrap();
        assert_eq!(dto.category, "Laptop");
        assert_eq!(dto.model, "X1");
        assert_eq!(dto.serial_number, "SN123");
        assert_eq!(
            dto.invoice_date,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }

    #[test]
    fn missing_field_is_rejected_with_wire_name() {
        let mut fields = complete_fields();
        fields.serial_number = None;

        let err = fields.validate_into_dto().unwrap_err();
        assert!(matches!(err, AppError::Validation(ref msg) if msg == "serialNumber is required"));
    }

    #[test]
    fn whitespace_only_field_counts_as_missing() {
        let mut fields = complete_fields();
        fields.category = Some("   ".to_string());

        let err = fields.validate_into_dto().unwrap_err();
        assert!(matches!(err, AppError::Validation(ref msg) if msg == "category is required"));
    }

    #[test]
    fn malformed_date_is_rejected() {
        let mut fields = complete_fields();
        fields.invoice_date = Some("01/02/2024".to_string());

        let err = fields.validate_into_dto().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn impossible_calendar_date_is_rejected() {
        let mut fields = complete_fields();
        fields.invoice_date = Some("2024-02-30".to_string());

        assert!(fields.validate_into_dto().is_err());
    }

    #[test]
    fn date_with_surrounding_whitespace_parses() {
        let mut fields = complete_fields();
        fields.invoice_date = Some(" 2024-01-01 ".to_string());

        let dto = fields.validate_into_dto().unwrap();
        assert_eq!(
            dto.invoice_date,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }
}
