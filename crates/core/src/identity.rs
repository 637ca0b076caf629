//! Resolution of the caller's identity.
//!
//! There is no authentication yet: [`FixedIdentity`] answers every request
//! with the same handle. Swap in a real resolver here once sessions exist.

use async_trait::async_trait;

use crate::error::CoreError;
use crate::types::Handle;

/// Handle used when nothing else is configured.
pub const DEFAULT_USER_HANDLE: &str = "andrewbrown";

/// The identity a request acts on behalf of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub handle: Handle,
}

#[async_trait]
pub trait IdentityResolver: Send + Sync {
    /// Resolve the caller. `credentials` is whatever the transport carried
    /// (e.g. an `Authorization` header value), if anything.
    async fn resolve(&self, credentials: Option<&str>) -> Result<CurrentUser, CoreError>;
}

/// Placeholder resolver that ignores credentials and returns one handle.
#[derive(Debug, Clone)]
pub struct FixedIdentity {
    handle: Handle,
}

impl FixedIdentity {
    pub fn new(handle: impl Into<Handle>) -> Self {
        Self {
            handle: handle.into(),
        }
    }
}

impl Default for FixedIdentity {
    fn default() -> Self {
        Self::new(DEFAULT_USER_HANDLE)
    }
}

#[async_trait]
impl IdentityResolver for FixedIdentity {
    async fn resolve(&self, _credentials: Option<&str>) -> Result<CurrentUser, CoreError> {
        if self.handle.is_empty() {
            return Err(CoreError::Unauthorized("no current user configured".into()));
        }
        Ok(CurrentUser {
            handle: self.handle.clone(),
        })
    }
}
