//! Connection-settings validation, run when an operator saves the provider
//! configuration.

use {herald_notify::Result, tracing::info};

use crate::{api::MattermostClient, config::ConnectionSettings};

/// Verify the settings are complete and the configured bot account exists.
///
/// Incomplete settings fail before any client is built. Otherwise one
/// `GET users/username/{bot_username}` is issued; any 2xx response with a
/// parseable body passes, and the returned user object is not inspected
/// further.
pub async fn test_connection(settings: &ConnectionSettings) -> Result<()> {
    settings.require_complete()?;
    let client = MattermostClient::connect(settings)?;
    check_bot_account(&client, &settings.bot_username).await
}

pub(crate) async fn check_bot_account(client: &MattermostClient, username: &str) -> Result<()> {
    client.get(&format!("users/username/{username}")).await?;
    info!(username, "mattermost bot account verified");
    Ok(())
}
