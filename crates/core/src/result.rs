//! The `{data, errors}` shape every conventional service returns.

use serde::Serialize;

/// Outcome of a single service call.
///
/// `errors` wins: when it is non-empty the call failed and `data` must be
/// ignored by the caller, even if the service chose to echo its input there.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceResult<T> {
    pub data: Option<T>,
    pub errors: Vec<String>,
}

impl<T> ServiceResult<T> {
    /// A successful result carrying `data`.
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            errors: Vec::new(),
        }
    }

    /// A failed result carrying validation codes in the order they were raised.
    pub fn invalid(errors: Vec<String>) -> Self {
        Self { data: None, errors }
    }

    /// Attach a payload to a result without touching its errors.
    pub fn with_data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Collapse into the branch the dispatcher acts on.
    pub fn into_outcome(self) -> Result<Option<T>, Vec<String>> {
        if self.has_errors() {
            Err(self.errors)
        } else {
            Ok(self.data)
        }
    }
}
