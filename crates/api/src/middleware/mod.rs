//! Request extractors and guards.
//!
//! - [`identity`] -- Resolves the [`CurrentUser`](cruddur_core::identity::CurrentUser) for a request.
//! - [`origin`] -- Rejects cross-origin callers outside the allow-list.

pub mod identity;
pub mod origin;
