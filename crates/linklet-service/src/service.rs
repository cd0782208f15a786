use crate::error::{Result, ServiceError};
use crate::generator::CodeGenerator;
use crate::linker::Linker;
use async_trait::async_trait;
use linklet_core::{LinkRecord, LinkStore, ShortCode, StoreError};
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, error, trace, warn};
use url::Url;

/// How many candidate codes a create draws before giving up.
///
/// At 62^7 candidates this bound is statistically unreachable; hitting
/// it means the code space is nearly saturated and deserves alerting.
const MAX_GENERATE_ATTEMPTS: u32 = 5;

/// How many times a transient store failure is retried per operation.
const MAX_STORE_ATTEMPTS: u32 = 3;

/// Orchestrates the code generator and the link store to implement the
/// create/resolve/stats/delete use cases.
///
/// The generator is a pure candidate source; uniqueness comes from the
/// store's atomic create-if-absent, which the create loop drives until
/// it wins or the attempt bound is hit.
#[derive(Debug, Clone)]
pub struct LinkService<S, G> {
    store: Arc<S>,
    generator: Arc<G>,
}

impl<S: LinkStore, G: CodeGenerator> LinkService<S, G> {
    /// Creates a new `LinkService` over a store and a code generator.
    pub fn new(store: S, generator: G) -> Self {
        Self {
            store: Arc::new(store),
            generator: Arc::new(generator),
        }
    }
}

#[async_trait]
impl<S: LinkStore, G: CodeGenerator> Linker for LinkService<S, G> {
    async fn create(&self, target_url: &str) -> Result<LinkRecord> {
        validate_url(target_url)?;

        for attempt in 1..=MAX_GENERATE_ATTEMPTS {
            let candidate = self.generator.generate();
            let created = with_store_retries("create_if_absent", || {
                self.store.create_if_absent(&candidate, target_url)
            })
            .await?;

            match created {
                Some(record) => {
                    debug!(code = %record.code, attempt, "short link created");
                    return Ok(record);
                }
                None => {
                    trace!(code = %candidate, attempt, "candidate code taken, redrawing");
                }
            }
        }

        error!(
            attempts = MAX_GENERATE_ATTEMPTS,
            "short code generation exhausted, code space may be saturated"
        );
        Err(ServiceError::GenerationExhausted(MAX_GENERATE_ATTEMPTS))
    }

    async fn resolve(&self, code: &ShortCode) -> Result<LinkRecord> {
        trace!(code = %code, "resolving short code");

        let record = with_store_retries("increment_click", || self.store.increment_click(code))
            .await?
            .ok_or(ServiceError::NotFound)?;

        debug!(
            code = %code,
            url = %record.target_url,
            clicks = record.click_count,
            "resolved short code"
        );
        Ok(record)
    }

    async fn stats(&self, code: &ShortCode) -> Result<LinkRecord> {
        with_store_retries("get", || self.store.get(code))
            .await?
            .ok_or(ServiceError::NotFound)
    }

    async fn delete(&self, code: &ShortCode) -> Result<bool> {
        let deleted = with_store_retries("delete", || self.store.delete(code)).await?;
        debug!(code = %code, deleted, "delete requested");
        Ok(deleted)
    }
}

/// Checks that the input is a well-formed absolute URL with an http or
/// https scheme and a host.
fn validate_url(raw: &str) -> Result<()> {
    let parsed =
        Url::parse(raw).map_err(|e| ServiceError::InvalidUrl(format!("'{raw}': {e}")))?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ServiceError::InvalidUrl(format!(
                "scheme must be http or https, got '{other}'"
            )));
        }
    }

    if parsed.host().is_none() {
        return Err(ServiceError::InvalidUrl(format!("'{raw}': missing host")));
    }

    Ok(())
}

/// Runs a store call, retrying transient failures up to the attempt
/// bound before surfacing the last error as `StorageUnavailable`.
async fn with_store_retries<T, F, Fut>(op: &'static str, call: F) -> Result<T>
where
    F: Fn() -> Fut,
    Fut: Future<Output = std::result::Result<T, StoreError>>,
{
    let mut attempt = 0;
    loop {
        attempt += 1;
        match call().await {
            Ok(value) => return Ok(value),
            Err(err) if attempt < MAX_STORE_ATTEMPTS => {
                warn!(op, attempt, error = %err, "transient store failure, retrying");
            }
            Err(err) => {
                warn!(op, attempt, error = %err, "store failure persisted, giving up");
                return Err(ServiceError::from(err));
            }
        }
    }
}
