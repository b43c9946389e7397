use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a product registration record.
///
/// Created exactly once per successful submission and never updated or
/// deleted afterwards. `file_upload` holds the stored attachment path and
/// is never null; the timestamps are assigned by the database on insert.
#[derive(Debug, Clone, FromRow)]
pub struct ProductRegistration {
    pub id: Uuid,
    pub category: String,
    pub model: String,
    pub serial_number: String,
    pub invoice_date: NaiveDate,
    pub file_upload: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
