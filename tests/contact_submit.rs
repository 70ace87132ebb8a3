use httpmock::prelude::*;
use portfolio_site::contact::{
    ContactClient, ContactError, ContactFlow, ContactForm, SubmitState, FAILURE_MESSAGE,
};

fn filled_flow() -> ContactFlow {
    ContactFlow {
        form: ContactForm {
            name: "Grace Hopper".to_string(),
            email: "grace@example.com".to_string(),
            message: "Let's build a compiler.".to_string(),
            honeypot: String::new(),
        },
        state: SubmitState::Idle,
    }
}

#[tokio::test]
async fn test_successful_submission_clears_form() {
    let server = MockServer::start();
    let form_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/f/test")
            .header("accept", "application/json")
            .header("content-type", "application/x-www-form-urlencoded")
            .body_contains("name=Grace+Hopper")
            .body_contains("email=grace%40example.com")
            .body_contains("_subject=")
            .body_contains("_gotcha=");
        then.status(200)
            .json_body(serde_json::json!({ "next": "/thanks", "ok": true }));
    });

    let client = ContactClient::new(&server.url("/f/test")).unwrap();
    let mut flow = filled_flow();
    let submission = flow.begin_submit().unwrap();
    assert!(flow.is_submitting());

    let result = client.submit(&submission).await;
    assert!(result.is_ok());
    flow.complete(result);

    form_mock.assert();
    assert!(flow.show_success());
    assert_eq!(flow.form, ContactForm::default());

    flow.dismiss_success();
    assert_eq!(flow.state, SubmitState::Idle);
}

#[tokio::test]
async fn test_server_error_keeps_form_and_reports_failure() {
    let server = MockServer::start();
    let form_mock = server.mock(|when, then| {
        when.method(POST).path("/f/test");
        then.status(500).body("upstream unavailable");
    });

    let client = ContactClient::new(&server.url("/f/test")).unwrap();
    let mut flow = filled_flow();
    let submission = flow.begin_submit().unwrap();

    let result = client.submit(&submission).await;
    form_mock.assert();
    assert!(matches!(
        result,
        Err(ContactError::Rejected(status)) if status.as_u16() == 500
    ));

    flow.complete(result);
    assert_eq!(flow.error(), Some(FAILURE_MESSAGE));
    assert_eq!(flow.form.name, "Grace Hopper");
    assert!(!flow.show_success());
}

#[tokio::test]
async fn test_unreachable_service_is_a_transport_error() {
    // nothing listens on the discard port
    let client = ContactClient::new("http://127.0.0.1:9/f/test").unwrap();
    let submission = filled_flow().form.validate().unwrap();

    let err = client.submit(&submission).await.unwrap_err();
    assert!(matches!(err, ContactError::Transport(_)));
    assert_eq!(err.user_message(), FAILURE_MESSAGE);
}

#[tokio::test]
async fn test_honeypot_is_forwarded() {
    let server = MockServer::start();
    let form_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/f/test")
            .body_contains("_gotcha=i-am-a-bot");
        then.status(200);
    });

    let client = ContactClient::new(&server.url("/f/test")).unwrap();
    let mut flow = filled_flow();
    flow.form.honeypot = "i-am-a-bot".to_string();
    let submission = flow.begin_submit().unwrap();

    client.submit(&submission).await.unwrap();
    form_mock.assert();
}

#[test]
fn test_invalid_endpoint_is_rejected_up_front() {
    let err = ContactClient::new("not a url").unwrap_err();
    assert!(matches!(err, ContactError::Endpoint(_)));
    assert!(!err.is_validation());
}
