use std::time::Duration;

use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::{domain::EmailAddress, email_client::EmailClient};

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
    pub contact: ContactSettings,
}

#[derive(Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub site_name: String,
}

#[derive(Deserialize, Clone)]
pub struct EmailClientSettings {
    pub base_url: String,
    pub sender_email: String,
    pub authorization_token: Secret<String>,
    pub timeout_milliseconds: Option<u64>,
}

#[derive(Deserialize, Clone)]
pub struct ContactSettings {
    pub recipient_email: String,
}

/// The possible runtime environments of the application.
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}

pub fn get_environment() -> Environment {
    std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .unwrap_or(Environment::Local)
}

/// Every configuration layer, in precedence order, ready to be built.
pub fn configuration_builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let base_path = std::env::current_dir().map_err(|e| {
        ConfigError::Message(format!("Failed to determine the current directory: {e}"))
    })?;
    let configuration_directory = base_path.join("configuration");
    let environment_filename = format!("{}.yaml", get_environment().as_str());

    config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        // E.g. `APP_EMAIL_CLIENT__SENDER_EMAIL=hello@example.com` sets `Settings.email_client.sender_email`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .set_override_option(
            "email_client.authorization_token",
            std::env::var("RESEND_API_KEY").ok(),
        )?
        .set_override_option(
            "email_client.sender_email",
            std::env::var("RESEND_FROM_EMAIL").ok(),
        )?
        .set_override_option(
            "contact.recipient_email",
            std::env::var("RESEND_TO_EMAIL").ok(),
        )
}

/// Fails when the provider credential, the sender or the recipient is absent.
pub fn get_configuration() -> Result<Settings, ConfigError> {
    configuration_builder()?.build()?.try_deserialize()
}

impl EmailClientSettings {
    pub fn sender(&self) -> Result<EmailAddress, String> {
        EmailAddress::parse(self.sender_email.clone())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_milliseconds.map(Duration::from_millis)
    }

    /// Builds the provider client, refusing an empty credential or an invalid sender.
    pub fn client(&self) -> Result<EmailClient, anyhow::Error> {
        if self.authorization_token.expose_secret().trim().is_empty() {
            anyhow::bail!("The email provider authorization token is not configured.");
        }
        let sender = self
            .sender()
            .map_err(|e| anyhow::anyhow!("Invalid sender email address: {}", e))?;
        EmailClient::new(
            self.base_url.clone(),
            sender,
            self.authorization_token.clone(),
            self.timeout(),
        )
    }
}

impl ContactSettings {
    pub fn recipient(&self) -> Result<EmailAddress, String> {
        EmailAddress::parse(self.recipient_email.clone())
    }
}
