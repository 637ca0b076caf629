//! Domain layer for the Cruddur API.
//!
//! Holds the feed entities, the `{data, errors}` result shape returned by
//! every service, the [`services::Service`] seam, and the current-user
//! collaborator. Nothing in here knows about HTTP.

pub mod activity;
pub mod error;
pub mod identity;
pub mod message;
pub mod result;
pub mod services;
pub mod ttl;
pub mod types;
pub mod validation;
