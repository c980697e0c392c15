//! Mattermost notification provider for herald.
//!
//! Bridges platform events ("invoice overdue", "ticket opened", ...) to a
//! Mattermost channel via the `/api/v4` REST API: settings validation,
//! live channel discovery for the per-rule selector, and one formatted
//! post per triggered event.

pub mod api;
pub mod config;
pub mod directory;
pub mod dispatch;
pub mod provider;
pub mod validate;

pub use {
    api::{ApiError, MattermostClient},
    config::ConnectionSettings,
    provider::MattermostProvider,
};
