use contact_mailer::startup::Application;
use secrecy::Secret;
use wiremock::MockServer;

use crate::helpers::test_configuration;

#[tokio::test]
async fn the_application_refuses_to_start_without_a_provider_credential() {
    let email_server = MockServer::start().await;
    let mut configuration = test_configuration(&email_server);
    configuration.email_client.authorization_token = Secret::new("".into());

    assert!(Application::build(configuration).await.is_err());
}

#[tokio::test]
async fn the_application_refuses_to_start_without_a_sender() {
    let email_server = MockServer::start().await;
    let mut configuration = test_configuration(&email_server);
    configuration.email_client.sender_email = "".into();

    assert!(Application::build(configuration).await.is_err());
}

#[tokio::test]
async fn the_application_refuses_to_start_without_a_recipient() {
    let email_server = MockServer::start().await;
    let mut configuration = test_configuration(&email_server);
    configuration.contact.recipient_email = "".into();

    assert!(Application::build(configuration).await.is_err());
}
