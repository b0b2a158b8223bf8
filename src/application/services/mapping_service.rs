//! Short code creation, resolution and rebinding.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info, warn};

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::MappingStore;
use crate::error::AppError;
use crate::utils::code_generator::{CodeGenerator, RandomCodeGenerator};

/// What `create_random` does when the URL already has a mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CreatePolicy {
    /// Return the existing mapping unchanged. Repeated requests for the same
    /// URL yield the same short code.
    #[default]
    Reuse,
    /// Delete the existing mapping and always mint a fresh code.
    Replace,
}

impl FromStr for CreatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "reuse" => Ok(Self::Reuse),
            "replace" => Ok(Self::Replace),
            other => Err(format!(
                "unknown create policy '{}', expected 'reuse' or 'replace'",
                other
            )),
        }
    }
}

impl fmt::Display for CreatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reuse => f.write_str("reuse"),
            Self::Replace => f.write_str("replace"),
        }
    }
}

/// Service maintaining the short code ↔ original URL mappings.
///
/// Holds no mutable state: all coordination goes through the store, whose
/// single-key operations are the only atomic ones. Existence checks followed
/// by writes are therefore check-then-act races between concurrent callers,
/// resolved by last-write-wins in the backend.
pub struct MappingService<S: MappingStore + ?Sized> {
    store: Arc<S>,
    generator: Arc<dyn CodeGenerator>,
    policy: CreatePolicy,
}

impl<S: MappingStore + ?Sized> MappingService<S> {
    /// Creates a mapping service with an explicit code generator and policy.
    pub fn new(store: Arc<S>, generator: Arc<dyn CodeGenerator>, policy: CreatePolicy) -> Self {
        Self {
            store,
            generator,
            policy,
        }
    }

    /// Creates a mapping service using random codes and the given policy.
    pub fn with_policy(store: Arc<S>, policy: CreatePolicy) -> Self {
        Self::new(store, Arc::new(RandomCodeGenerator), policy)
    }

    /// Returns the configured create policy.
    pub fn policy(&self) -> CreatePolicy {
        self.policy
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Shortens a URL with a generated code.
    ///
    /// # Existing mappings
    ///
    /// Under [`CreatePolicy::Reuse`] an existing mapping for `original_url` is
    /// returned as-is, provided its forward entry still points back at the URL.
    /// A reverse entry whose forward entry has expired or moved is treated as
    /// absent and overwritten by the new mapping.
    ///
    /// Under [`CreatePolicy::Replace`] the existing mapping is deleted first.
    /// A stale reverse entry is never followed into a delete, so a code since
    /// reassigned to another URL is left alone.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store failures.
    pub async fn create_random(&self, original_url: String) -> Result<UrlMapping, AppError> {
        if let Some(existing) = self.lookup_by_original(&original_url).await? {
            match self.policy {
                CreatePolicy::Reuse => {
                    debug!(
                        "Reusing {} for {}",
                        existing.short_url, existing.original_url
                    );
                    return Ok(existing);
                }
                CreatePolicy::Replace => {
                    debug!("Dropping {} for {}", existing.short_url, original_url);
                    self.store.delete(&existing.short_url).await?;
                }
            }
        }

        let code = self.generate_unique_code().await?;
        let mapping = UrlMapping::new(original_url, code);
        self.store.put(&mapping).await?;

        info!("Created {} -> {}", mapping.short_url, mapping.original_url);
        Ok(mapping)
    }

    /// Shortens a URL with a caller-supplied code.
    ///
    /// The code is accepted verbatim. The reverse index is not consulted: a URL
    /// may end up reachable through several codes, and its reverse entry points
    /// at whichever was written last.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code is already in use; nothing is
    /// written in that case.
    pub async fn create_specific(
        &self,
        original_url: String,
        short_code: String,
    ) -> Result<UrlMapping, AppError> {
        if self.store.exists(&short_code).await? {
            return Err(AppError::conflict(
                "Short code already in use",
                json!({ "shortUrl": short_code }),
            ));
        }

        let mapping = UrlMapping::new(original_url, short_code);
        self.store.put(&mapping).await?;

        info!("Created {} -> {}", mapping.short_url, mapping.original_url);
        Ok(mapping)
    }

    /// Resolves a short code to its original URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown or expired.
    pub async fn resolve(&self, short_code: &str) -> Result<String, AppError> {
        self.store.get_forward(short_code).await?.ok_or_else(|| {
            AppError::not_found("Short URL not found", json!({ "shortUrl": short_code }))
        })
    }

    /// Rebinds the URL behind `old_code` to `new_code`.
    ///
    /// The old mapping is deleted before the new one is written, with no
    /// rollback: a failure in between leaves the URL without a code until the
    /// caller retries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if `old_code` does not resolve.
    /// Returns [`AppError::Conflict`] if `new_code` is already in use (including
    /// `new_code == old_code`).
    pub async fn replace(&self, old_code: &str, new_code: String) -> Result<UrlMapping, AppError> {
        let original_url = self.store.get_forward(old_code).await?.ok_or_else(|| {
            AppError::not_found("Old short URL not found", json!({ "oldShortUrl": old_code }))
        })?;

        if self.store.exists(&new_code).await? {
            return Err(AppError::conflict(
                "Short code already in use",
                json!({ "newShortUrl": new_code }),
            ));
        }

        self.store.delete(old_code).await?;

        let mapping = UrlMapping::new(original_url, new_code);
        self.store.put(&mapping).await?;

        info!(
            "Replaced {} with {} -> {}",
            old_code, mapping.short_url, mapping.original_url
        );
        Ok(mapping)
    }

    /// Deletes the mapping for a short code. Unknown codes are a no-op.
    pub async fn delete(&self, short_code: &str) -> Result<(), AppError> {
        self.store.delete(short_code).await?;
        debug!("Deleted {}", short_code);
        Ok(())
    }

    /// Finds the live mapping recorded for an original URL, if any.
    pub async fn lookup_by_original(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlMapping>, AppError> {
        match self.store.get_reverse(original_url).await? {
            Some(code) => self.live_mapping(original_url, code).await,
            None => Ok(None),
        }
    }

    /// Confirms that `code` still resolves to `original_url`.
    async fn live_mapping(
        &self,
        original_url: &str,
        code: String,
    ) -> Result<Option<UrlMapping>, AppError> {
        match self.store.get_forward(&code).await? {
            Some(target) if target == original_url => Ok(Some(UrlMapping::new(target, code))),
            _ => {
                warn!("Stale reverse entry {} -> {}", original_url, code);
                Ok(None)
            }
        }
    }

    /// Draws candidates until one is not in use. There is no attempt limit.
    async fn generate_unique_code(&self) -> Result<String, AppError> {
        loop {
            let candidate = self.generator.generate();

            if !self.store.exists(&candidate).await? {
                return Ok(candidate);
            }

            debug!("Short code collision on {}, retrying", candidate);
        }
    }
}
