//! Notification provider system.
//!
//! Each delivery target (Mattermost, and whatever comes next) implements the
//! [`NotificationProvider`] trait: a settings schema for the host UI, a
//! connection test, dynamic option resolution for per-rule fields, and a
//! single-event dispatch operation.

pub mod error;
pub mod event;
pub mod provider;
pub mod registry;
pub mod schema;

pub use {
    error::{Error, Result},
    event::{NotificationAttribute, NotificationEvent},
    provider::NotificationProvider,
    registry::ProviderRegistry,
    schema::{DynamicOption, FieldKind, FieldSpec},
};
