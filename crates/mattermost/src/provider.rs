//! Host-facing adapter implementing [`NotificationProvider`] for Mattermost.

use {
    async_trait::async_trait,
    herald_notify::{
        DynamicOption, FieldKind, FieldSpec, NotificationEvent, NotificationProvider, Result,
    },
};

use crate::{config::ConnectionSettings, directory, dispatch, validate};

/// Mattermost notification provider.
pub struct MattermostProvider;

impl MattermostProvider {
    fn parse_settings(settings: &serde_json::Value) -> Result<ConnectionSettings> {
        Ok(serde_json::from_value(settings.clone())?)
    }
}

#[async_trait]
impl NotificationProvider for MattermostProvider {
    fn id(&self) -> &str {
        "mattermost"
    }

    fn name(&self) -> &str {
        "Mattermost"
    }

    fn logo_file_name(&self) -> &str {
        "logo.png"
    }

    fn settings(&self) -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("domain", "Mattermost Domain", FieldKind::Text)
                .with_description(
                    "Supply your Mattermost domain name without protocols or slashes.",
                )
                .required(),
            FieldSpec::new("bot_username", "Mattermost Bot Username", FieldKind::Text)
                .with_description("Enter the bot username. In most cases this should be whmcs.")
                .with_placeholder("whmcs")
                .required(),
            FieldSpec::new("bot_token", "Mattermost Bot Access Token", FieldKind::Password)
                .with_description("Can be generated in the Integrations tab of Mattermost.")
                .required(),
        ]
    }

    fn notification_settings(&self) -> Vec<FieldSpec> {
        vec![
            FieldSpec::new(directory::CHANNEL_FIELD, "Channel", FieldKind::Dynamic)
                .with_description("Select the desired channel for notification delivery.")
                .required(),
        ]
    }

    async fn test_connection(&self, settings: &serde_json::Value) -> Result<()> {
        let settings = Self::parse_settings(settings)?;
        validate::test_connection(&settings).await
    }

    async fn dynamic_field(
        &self,
        field_name: &str,
        settings: &serde_json::Value,
    ) -> Result<Vec<DynamicOption>> {
        // Unrecognized fields resolve to an empty list without touching the
        // network, so newer hosts can probe fields this version predates.
        if field_name != directory::CHANNEL_FIELD {
            return Ok(Vec::new());
        }
        let settings = Self::parse_settings(settings)?;
        directory::list_channels(&settings).await
    }

    async fn send(
        &self,
        settings: &serde_json::Value,
        rule_settings: &serde_json::Value,
        event: &NotificationEvent,
    ) -> Result<()> {
        let settings = Self::parse_settings(settings)?;
        let selection = rule_settings
            .get(directory::CHANNEL_FIELD)
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default();
        dispatch::send(&settings, selection, event).await
    }
}
