//! Request body helpers.

use salvo::Request;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::errors::ApiError;

/// Parse JSON bodies so that every failure still renders as an [`ApiError`].
pub(crate) trait RequestExt {
    /// Deserialize the body, treating an empty body as `T::default()`.
    ///
    /// Unreadable or malformed bodies become a 400 carrying `invalid`.
    async fn json_or_default<T>(&mut self, invalid: &'static str) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Default;
}

impl RequestExt for Request {
    async fn json_or_default<T>(&mut self, invalid: &'static str) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Default,
    {
        let payload = self.payload().await.map_err(|source| {
            warn!("failed to read request body: {source}");

            ApiError::bad_request(invalid)
        })?;

        if payload.iter().all(u8::is_ascii_whitespace) {
            return Ok(T::default());
        }

        serde_json::from_slice(payload).map_err(|source| {
            warn!("malformed request body: {source}");

            ApiError::bad_request(invalid)
        })
    }
}
