use async_trait::async_trait;

use crate::{
    error::Result,
    event::NotificationEvent,
    schema::{DynamicOption, FieldSpec},
};

/// Core notification provider trait. Each messaging platform implements this.
///
/// The host passes stored settings as loosely typed [`serde_json::Value`]
/// maps; each provider deserializes them into its own config type. Every
/// operation is a pure function of its inputs plus network effects — no
/// state is kept between invocations, and a failure is terminal for that
/// single operation.
#[async_trait]
pub trait NotificationProvider: Send + Sync {
    /// Provider identifier (e.g. "mattermost").
    fn id(&self) -> &str;

    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Logo asset filename shipped with the provider.
    fn logo_file_name(&self) -> &str;

    /// Connection settings shown when the operator configures the provider.
    fn settings(&self) -> Vec<FieldSpec>;

    /// Per-rule settings shown when the operator configures a notification.
    fn notification_settings(&self) -> Vec<FieldSpec>;

    /// Verify that the supplied connection settings are usable.
    ///
    /// Invoked before the host persists settings submitted via its UI.
    async fn test_connection(&self, settings: &serde_json::Value) -> Result<()>;

    /// Resolve the live option list for a dynamic field.
    ///
    /// Unrecognized field names resolve to an empty list without error, so
    /// hosts may probe fields added in later versions.
    async fn dynamic_field(
        &self,
        field_name: &str,
        settings: &serde_json::Value,
    ) -> Result<Vec<DynamicOption>>;

    /// Deliver one event using stored provider and rule settings.
    async fn send(
        &self,
        settings: &serde_json::Value,
        rule_settings: &serde_json::Value,
        event: &NotificationEvent,
    ) -> Result<()>;
}
