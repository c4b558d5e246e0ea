use claims::{assert_err, assert_none, assert_ok};
use contact_mailer::contact_client::{ContactApiClient, ContactApiError};
use contact_mailer::domain::ContactSubmission;
use contact_mailer::form::{ContactForm, ContactFormData, FormField, SubmitError};
use wiremock::{
    matchers::{any, method, path},
    Mock, MockServer, ResponseTemplate,
};

use crate::helpers::spawn_app;

fn fill(form: &mut ContactForm, name: &str, email: &str, subject: &str, message: &str) {
    form.update(FormField::Name, name);
    form.update(FormField::Email, email);
    form.update(FormField::Subject, subject);
    form.update(FormField::Message, message);
}

#[tokio::test]
async fn a_delivered_submission_resets_the_form() {
    let app = spawn_app().await;
    Mock::given(path("/emails"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "1"})))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let mut form = ContactForm::new();
    fill(
        &mut form,
        "Jan Kowalski",
        "jan@example.com",
        "Pożyczka",
        "Proszę o kontakt w sprawie pożyczki.",
    );

    let outcome = form.submit(&app.contact_client()).await;

    assert_eq!(assert_ok!(outcome), serde_json::json!({"id": "1"}));
    assert_eq!(form.data(), &ContactFormData::default());
    assert!(form.errors().is_empty());
}

#[tokio::test]
async fn an_invalid_form_never_reaches_the_network() {
    let contact_endpoint = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&contact_endpoint)
        .await;
    let client = ContactApiClient::new(contact_endpoint.uri());

    let mut form = ContactForm::new();
    fill(&mut form, "Jan Kowalski", "jan@example.com", "Pożyczka", "short");

    let outcome = form.submit(&client).await;

    assert!(matches!(assert_err!(outcome), SubmitError::Invalid(_)));
    assert_eq!(
        form.errors().get(FormField::Message),
        Some("Wiadomość musi mieć co najmniej 10 znaków")
    );
    assert_none!(form.errors().get(FormField::Name));
    assert_eq!(form.data().message, "short");
}

#[tokio::test]
async fn a_failed_delivery_keeps_the_fields_populated() {
    let app = spawn_app().await;
    Mock::given(path("/emails"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let mut form = ContactForm::new();
    fill(
        &mut form,
        "Jan Kowalski",
        "jan@example.com",
        "Finansowanie korporacyjne",
        "Proszę o kontakt w sprawie finansowania.",
    );
    let before = form.data().clone();

    let outcome = form.submit(&app.contact_client()).await;

    let error = assert_err!(outcome);
    assert_eq!(error.description(), "Please try again later");
    assert!(matches!(error, SubmitError::Delivery(_)));
    assert_eq!(form.data(), &before);
    assert!(form.errors().is_empty());
}

#[tokio::test]
async fn the_server_error_message_is_surfaced_to_the_form() {
    let app = spawn_app().await;
    Mock::given(path("/emails"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "1"})))
        .expect(0)
        .mount(&app.email_server)
        .await;

    // Bypass the form schema to reach the server's presence check.
    let submission = ContactSubmission {
        name: "".into(),
        email: "a@b.com".into(),
        subject: "Test subject".into(),
        message: "Long enough message".into(),
    };
    let outcome = app.contact_client().send_submission(&submission).await;

    match assert_err!(outcome) {
        ContactApiError::Rejected { status, message } => {
            assert_eq!(status.as_u16(), 400);
            assert_eq!(message, "All fields are required");
        }
        other => panic!("Unexpected error: {:?}", other),
    }
}
