use serde::{Deserialize, Serialize};

/// How a settings field is rendered and captured by the host UI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Plain single-line text input.
    #[default]
    Text,
    /// Masked input for credentials.
    Password,
    /// Dropdown whose options are resolved live via
    /// [`NotificationProvider::dynamic_field`](crate::NotificationProvider::dynamic_field).
    Dynamic,
}

/// Declaration of a single configuration field.
///
/// Providers return these from `settings()` and `notification_settings()`;
/// the host renders the form and stores submitted values keyed by `name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Storage key for the submitted value.
    pub name: String,
    /// Label shown next to the input.
    pub friendly_name: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub required: bool,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, friendly_name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            friendly_name: friendly_name.into(),
            kind,
            description: String::new(),
            placeholder: None,
            required: false,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// One selectable option for a [`FieldKind::Dynamic`] field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicOption {
    /// Opaque value stored by the host when the option is selected.
    pub id: String,
    /// Display label.
    pub name: String,
    /// Secondary descriptive text, may be empty.
    #[serde(default)]
    pub description: String,
}
