//! Message delivery for one triggered notification event.

use {
    herald_notify::{Error, NotificationEvent, Result},
    tracing::info,
};

use crate::{
    api::{Attachment, AttachmentField, MattermostClient, PostProps, PostRequest},
    config::ConnectionSettings,
};

/// Extract the channel id from a stored selection value.
///
/// The host UI stores selections as `id|label`; only the part before the
/// first `'|'` is the channel id. A value without the delimiter is used
/// as-is.
pub fn selected_channel_id(selection: &str) -> &str {
    match selection.find('|') {
        Some(idx) => &selection[..idx],
        None => selection,
    }
}

/// Post one formatted message for `event` to the selected channel.
///
/// An empty selection aborts before any network call. Exactly one
/// `POST posts` is issued; the response body is unused.
pub async fn send(
    settings: &ConnectionSettings,
    channel_selection: &str,
    event: &NotificationEvent,
) -> Result<()> {
    if channel_selection.is_empty() {
        return Err(Error::no_target(
            "No (existing) channel selected for notification delivery.",
        ));
    }
    settings.require_complete()?;
    let client = MattermostClient::connect(settings)?;
    post_event(&client, selected_channel_id(channel_selection), event).await
}

pub(crate) async fn post_event(
    client: &MattermostClient,
    channel_id: &str,
    event: &NotificationEvent,
) -> Result<()> {
    let post = PostRequest {
        channel_id: channel_id.to_string(),
        message: event.message.clone(),
        props: PostProps {
            attachments: vec![Attachment {
                title: event.title.clone(),
                title_link: event.url.clone(),
                fields: event
                    .attributes
                    .iter()
                    .map(|a| AttachmentField {
                        title: a.label.clone(),
                        value: a.value.clone(),
                    })
                    .collect(),
            }],
        },
    };

    client.post("posts", &serde_json::to_value(&post)?).await?;
    info!(channel_id, title = %event.title, "notification delivered");
    Ok(())
}
