use serde::{Deserialize, Serialize};

/// One labelled key/value attribute attached to a notification event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationAttribute {
    pub label: String,
    pub value: String,
}

impl NotificationAttribute {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A platform event handed to a provider for delivery.
///
/// Constructed by the host per dispatch and discarded after the call
/// returns; providers treat it as read-only. Attribute order is
/// meaningful and must be preserved in the delivered message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationEvent {
    /// Short headline, e.g. "Invoice #42 Overdue".
    pub title: String,

    /// Deep link back into the platform, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Body text of the notification.
    pub message: String,

    /// Ordered label/value pairs describing the event.
    #[serde(default)]
    pub attributes: Vec<NotificationAttribute>,
}
