use std::fmt;

pub const API_KEY_PREFIX: &str = "sk-";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiKeyError {
    #[error("api key must start with \"sk-\"")]
    InvalidFormat,
}

/// Provider credential for a single request.
///
/// The secret is only reachable through [`ApiKey::expose`]; formatting prints a
/// redacted form. The buffer is overwritten with zeros when the key is dropped,
/// so callers should take it by value and let it fall out of scope once the
/// request finishes.
pub struct ApiKey(String);

impl ApiKey {
    /// Checks the provider prefix without contacting any service.
    pub fn parse(raw: impl Into<String>) -> Result<Self, ApiKeyError> {
        let raw = raw.into();
        if raw.starts_with(API_KEY_PREFIX) {
            Ok(Self(raw))
        } else {
            drop(Self(raw));
            Err(ApiKeyError::InvalidFormat)
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    fn wipe(&mut self) {
        let mut bytes = std::mem::take(&mut self.0).into_bytes();
        bytes.fill(0);
        std::hint::black_box(&bytes);
    }
}

impl Drop for ApiKey {
    fn drop(&mut self) {
        self.wipe();
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&"sk-[REDACTED]").finish()
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("sk-[REDACTED]")
    }
}
