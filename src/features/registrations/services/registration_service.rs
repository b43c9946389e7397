use std::sync::Arc;

use sqlx::PgPool;
use tracing::info;

use crate::core::error::{AppError, Result};
use crate::features::registrations::dtos::{AttachmentUpload, RegisterProductDto};
use crate::features::registrations::models::ProductRegistration;
use crate::modules::storage::DiskStorage;

/// Service for product registration submissions
pub struct RegistrationService {
    pool: PgPool,
    storage: Arc<DiskStorage>,
}

impl RegistrationService {
    pub fn new(pool: PgPool, storage: Arc<DiskStorage>) -> Self {
        Self { pool, storage }
    }

    /// Store the attachment, then persist the registration record.
    ///
    /// The attachment is durable on disk before the insert starts. There is
    /// no compensating delete if the insert fails: the file stays in the
    /// upload directory and the failure is logged with its path.
    pub async fn register(
        &self,
        dto: RegisterProductDto,
        attachment: AttachmentUpload,
    ) -> Result<ProductRegistration> {
        let file_upload = self
            .storage
            .store(&attachment.original_filename, &attachment.data)
            .await?;

        let record = sqlx::query_as::<_, ProductRegistration>(
            r#"
            INSERT INTO product_registrations (category, model, serial_number, invoice_date, file_upload)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, category, model, serial_number, invoice_date, file_upload, created_at, updated_at
            "#,
        )
        .bind(&dto.category)
        .bind(&dto.model)
        .bind(&dto.serial_number)
        .bind(dto.invoice_date)
        .bind(&file_upload)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to insert registration (attachment kept at {}): {:?}",
                file_upload,
                e
            );
            AppError::Database(e)
        })?;

        info!(
            "Product registration created: id={}, serial={}, file={}",
            record.id, record.serial_number, record.file_upload
        );

        Ok(record)
    }
}
