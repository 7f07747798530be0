use dmart_mailer::transport::{FailingTransport, LogTransport, RecordingTransport};
use dmart_mailer::{Email, Mailer, MailerError};
use std::sync::Arc;

#[tokio::test]
async fn recording_transport_captures_envelopes() {
    let transport = Arc::new(RecordingTransport::default());
    let mailer = Mailer::from_arc(transport.clone());

    let receipt = mailer
        .send(Email::new("buyer@drukmart.bt", "Order update", "Your order shipped"))
        .await
        .unwrap();

    assert_eq!(receipt.message_id, "recorded-1");
    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "buyer@drukmart.bt");
}

#[tokio::test]
async fn empty_fields_are_rejected_before_the_transport() {
    let transport = Arc::new(RecordingTransport::default());
    let mailer = Mailer::from_arc(transport.clone());

    let err = mailer.send(Email::new("", "subject", "text")).await.unwrap_err();
    assert!(matches!(err, MailerError::IncompleteEnvelope { missing: "to" }));

    let err = mailer.send(Email::new("a@b.bt", "  ", "text")).await.unwrap_err();
    assert!(matches!(err, MailerError::IncompleteEnvelope { missing: "subject" }));

    assert!(transport.sent().is_empty());
}

#[tokio::test]
async fn delivery_failure_display_hides_provider_detail() {
    let mailer = Mailer::new(FailingTransport::new("550 5.1.1 relay upstream-smtp-17 denied"));

    let err = mailer.send(Email::new("a@b.bt", "s", "t")).await.unwrap_err();

    let shown = err.to_string();
    assert!(!shown.contains("upstream-smtp-17"), "display must stay sanitized: {shown}");
    assert!(err.provider_detail().contains("upstream-smtp-17"));
}

#[tokio::test]
async fn log_transport_mints_unambiguous_message_ids() {
    let mailer = Mailer::new(LogTransport);
    let receipt = mailer.send(Email::new("a@b.bt", "s", "t")).await.unwrap();

    let id = receipt.message_id.strip_prefix("log-").expect("log- prefix");
    assert_eq!(id.len(), 16);
    assert!(
        id.chars().all(|c| dmart_domain::constants::SAFE_ALPHABET.contains(&c)),
        "message id outside the safe alphabet: {id}"
    );
}
