//! Channel discovery for the per-rule channel selector.

use {
    herald_notify::{DynamicOption, Result},
    tracing::debug,
};

use crate::{
    api::{Channel, MattermostClient, User},
    config::ConnectionSettings,
};

/// Name of the dynamic rule field whose options this module resolves.
pub const CHANNEL_FIELD: &str = "channelId";

/// List the channels the configured bot account is a member of.
///
/// Two sequential calls: resolve the bot's internal id, then fetch its
/// channel memberships. Direct-message conversations carry an empty
/// `display_name` and are filtered out; service ordering is preserved and
/// nothing is cached between invocations.
pub async fn list_channels(settings: &ConnectionSettings) -> Result<Vec<DynamicOption>> {
    settings.require_complete()?;
    let client = MattermostClient::connect(settings)?;
    channel_options(&client, &settings.bot_username).await
}

pub(crate) async fn channel_options(
    client: &MattermostClient,
    username: &str,
) -> Result<Vec<DynamicOption>> {
    let bot: User = serde_json::from_value(
        client.get(&format!("users/username/{username}")).await?,
    )?;
    let channels: Vec<Channel> =
        serde_json::from_value(client.get(&format!("users/{}/channels", bot.id)).await?)?;

    let options: Vec<DynamicOption> = channels
        .into_iter()
        .filter(|c| !c.display_name.is_empty())
        .map(|c| DynamicOption {
            id: c.id,
            name: c.display_name,
            description: c.purpose,
        })
        .collect();
    debug!(count = options.len(), "resolved channel options");
    Ok(options)
}
