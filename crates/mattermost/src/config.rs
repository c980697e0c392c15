use {
    herald_notify::Error,
    secrecy::{ExposeSecret, Secret},
    serde::{Deserialize, Serialize},
};

/// Connection settings for a Mattermost bot account.
///
/// Rebuilt by the host from stored configuration on every invocation;
/// nothing here is cached between calls.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionSettings {
    /// Mattermost domain name, without protocol or slashes.
    pub domain: String,

    /// Bot account username, typically "whmcs".
    pub bot_username: String,

    /// Bot access token, generated in the Integrations tab of Mattermost.
    #[serde(serialize_with = "serialize_secret")]
    pub bot_token: Secret<String>,
}

impl ConnectionSettings {
    /// Fail with a missing-settings error unless all three fields are
    /// non-empty. Runs before any API client is built, so incomplete
    /// settings never produce a network call.
    pub fn require_complete(&self) -> Result<(), Error> {
        if self.domain.is_empty()
            || self.bot_username.is_empty()
            || self.bot_token.expose_secret().is_empty()
        {
            return Err(Error::missing_settings(
                "Please provide the Mattermost domain name, bot username, and bot access token.",
            ));
        }
        Ok(())
    }
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            domain: String::new(),
            bot_username: String::new(),
            bot_token: Secret::new(String::new()),
        }
    }
}

impl std::fmt::Debug for ConnectionSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionSettings")
            .field("domain", &self.domain)
            .field("bot_username", &self.bot_username)
            .field("bot_token", &"[REDACTED]")
            .finish()
    }
}

fn serialize_secret<S: serde::Serializer>(
    secret: &Secret<String>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(secret.expose_secret())
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> ConnectionSettings {
        ConnectionSettings {
            domain: "chat.example.com".into(),
            bot_username: "whmcs".into(),
            bot_token: Secret::new("s3cret-value".into()),
        }
    }

    #[test]
    fn complete_settings_pass() {
        assert!(complete().require_complete().is_ok());
    }

    #[test]
    fn each_missing_field_fails() {
        for patch in [
            |s: &mut ConnectionSettings| s.domain.clear(),
            |s: &mut ConnectionSettings| s.bot_username.clear(),
            |s: &mut ConnectionSettings| s.bot_token = Secret::new(String::new()),
        ] {
            let mut settings = complete();
            patch(&mut settings);
            let err = settings.require_complete().unwrap_err();
            assert!(matches!(err, Error::MissingSettings { .. }));
        }
    }

    #[test]
    fn debug_redacts_token() {
        let rendered = format!("{:?}", complete());
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("s3cret-value"));
    }

    #[test]
    fn deserializes_with_missing_fields_defaulted() {
        let settings: ConnectionSettings =
            serde_json::from_value(serde_json::json!({ "domain": "chat.example.com" })).unwrap();
        assert_eq!(settings.domain, "chat.example.com");
        assert!(settings.bot_username.is_empty());
        assert!(settings.require_complete().is_err());
    }
}
