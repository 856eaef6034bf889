use async_trait::async_trait;
use lru::LruCache;
use reqwest::Client;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::{debug, info, warn};

use super::errors::{CepError, CepResult};
use super::types::ViaCepResponse;
use crate::features::contact::CepAddress;
use crate::services::config::LookupConfig;

/// Postal-code lookup used by the contact form
#[async_trait(?Send)] // Allow non-Send futures for WASM compatibility
pub trait CepLookup {
    async fn lookup(&self, cep: &str) -> CepResult<CepAddress>;
}

/// Reduce a typed CEP ("01001-000", " 01001000 ") to its 8 digits
pub fn normalize_cep(cep: &str) -> CepResult<String> {
    let digits: String = cep
        .chars()
        .filter(|c| !matches!(c, '-' | '.' | ' '))
        .collect();

    if digits.len() == 8 && digits.chars().all(|c| c.is_ascii_digit()) {
        Ok(digits)
    } else {
        Err(CepError::InvalidCep {
            cep: cep.to_string(),
        })
    }
}

/// Map a ViaCEP reply to an address: non-2xx is `UnexpectedStatus`, an
/// undecodable body `JsonParseError` and `{"erro": true}` `NotFound`
pub fn decode_response(digits: &str, status: u16, body: &str) -> CepResult<CepAddress> {
    if !(200..300).contains(&status) {
        return Err(CepError::UnexpectedStatus {
            status,
            cep: digits.to_string(),
        });
    }

    let response: ViaCepResponse =
        serde_json::from_str(body).map_err(|e| CepError::JsonParseError {
            error: e.to_string(),
        })?;

    if response.is_error() {
        return Err(CepError::NotFound {
            cep: digits.to_string(),
        });
    }

    Ok(response.into_address())
}

/// ViaCEP client with an in-memory cache of resolved addresses
#[derive(Clone)]
pub struct ViaCepClient {
    http_client: Client,
    base_url: String,
    cache: Arc<Mutex<LruCache<String, CepAddress>>>,
    timeout: Duration,
}

impl ViaCepClient {
    pub fn try_new(config: &LookupConfig) -> CepResult<Self> {
        let http_client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| CepError::ClientBuild {
                error: e.to_string(),
            })?;
        let capacity = NonZeroUsize::new(config.cache_capacity).unwrap_or(NonZeroUsize::MIN);

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            cache: Arc::new(Mutex::new(LruCache::new(capacity))),
            timeout: Duration::from_millis(config.timeout_ms),
        })
    }

    /// Endpoint for an already normalised CEP
    pub fn lookup_url(&self, digits: &str) -> String {
        format!("{}/{}/json/", self.base_url, digits)
    }

    async fn fetch(&self, digits: &str) -> CepResult<CepAddress> {
        let url = self.lookup_url(digits);
        info!("Looking up CEP {} via {}", digits, url);

        let response = self
            .http_client
            .get(&url)
            .header("accept", "application/json")
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| CepError::HttpRequestFailed {
                error: e.to_string(),
            })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| CepError::HttpRequestFailed {
                error: e.to_string(),
            })?;

        decode_response(digits, status, &body)
    }

    fn check_cache(&self, digits: &str) -> Option<CepAddress> {
        self.cache
            .lock()
            .ok()
            .and_then(|mut cache| cache.get(digits).cloned())
    }

    fn store(&self, digits: &str, address: &CepAddress) {
        if let Ok(mut cache) = self.cache.lock() {
            cache.put(digits.to_string(), address.clone());
        }
    }
}

#[async_trait(?Send)]
impl CepLookup for ViaCepClient {
    async fn lookup(&self, cep: &str) -> CepResult<CepAddress> {
        let digits = normalize_cep(cep)?;

        if let Some(address) = self.check_cache(&digits) {
            debug!("CEP cache hit for {}", digits);
            return Ok(address);
        }

        match self.fetch(&digits).await {
            Ok(address) => {
                self.store(&digits, &address);
                Ok(address)
            }
            Err(e) => {
                warn!("CEP lookup failed for {}: {}", digits, e);
                Err(e)
            }
        }
    }
}
