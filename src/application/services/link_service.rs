//! Administrative link creation, listing and deletion.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, normalize_code, validate_custom_code};
use crate::utils::url_normalizer::normalize_url;

/// Service behind the tenant-scoped admin endpoints.
///
/// All operations are single-statement inserts, selects or deletes against the
/// LinkStore. Usage events are never touched.
pub struct LinkService {
    links: Arc<dyn LinkRepository>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(links: Arc<dyn LinkRepository>) -> Self {
        Self { links }
    }

    /// Creates a short link for `tenant`.
    ///
    /// # Code Selection
    ///
    /// - If `custom_code` is provided it is lowercased, validated and used as-is;
    ///   the `(tenant, code)` constraint rejects duplicates
    /// - Otherwise a random code is generated that no tenant uses yet, retrying
    ///   up to 10 times on collision
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL or custom code is invalid.
    /// Returns [`AppError::Conflict`] if the tenant already owns the code.
    /// Returns [`AppError::Persistence`] on database errors or when no free
    /// random code was found.
    pub async fn create_short_link(
        &self,
        tenant: &str,
        destination: &str,
        custom_code: Option<&str>,
        expiry: Option<DateTime<Utc>>,
    ) -> Result<ShortLink, AppError> {
        let destination = normalize_url(destination).map_err(|e| {
            AppError::bad_request("Invalid destination URL", json!({ "reason": e.to_string() }))
        })?;

        let code = match custom_code {
            Some(custom) => {
                let code = normalize_code(custom);
                validate_custom_code(&code)?;
                code
            }
            None => self.generate_unique_code().await?,
        };

        let link = self
            .links
            .create(NewShortLink {
                tenant: tenant.to_string(),
                code,
                destination,
                expiry,
            })
            .await
            .map_err(|e| match e {
                AppError::Conflict { .. } => AppError::conflict(
                    "Short link already exists for this tenant",
                    json!({ "tenant": tenant }),
                ),
                other => other,
            })?;

        tracing::info!(tenant, code = %link.code, "Short link created");

        Ok(link)
    }

    /// Lists the codes owned by `tenant`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors.
    pub async fn list_codes(&self, tenant: &str) -> Result<Vec<String>, AppError> {
        let links = self.links.list_by_tenant(tenant).await?;
        Ok(links.into_iter().map(|l| l.code).collect())
    }

    /// Deletes `tenant`'s link for `code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the tenant owns no such code.
    /// Returns [`AppError::Persistence`] on database errors.
    pub async fn delete_short_link(&self, tenant: &str, code: &str) -> Result<(), AppError> {
        let code = normalize_code(code);

        if !self.links.delete(tenant, &code).await? {
            return Err(AppError::not_found(
                "Short link not found",
                json!({ "code": code }),
            ));
        }

        tracing::info!(tenant, code = %code, "Short link deleted");

        Ok(())
    }

    /// Confirms the LinkStore is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] if it is not.
    pub async fn check_store(&self) -> Result<(), AppError> {
        self.links.ping().await
    }

    /// Generates a code not used by any tenant, with collision retry.
    async fn generate_unique_code(&self) -> Result<String, AppError> {
        const MAX_ATTEMPTS: usize = 10;

        for _ in 0..MAX_ATTEMPTS {
            let code = generate_code();

            if !self.links.code_exists(&code).await? {
                return Ok(code);
            }
        }

        Err(AppError::persistence(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions" }),
        ))
    }
}
