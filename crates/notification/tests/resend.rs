use std::time::Duration;

use exon_notification::{EmailMessage, Mailer, MailerError, ResendMailer};
use httpmock::prelude::*;
use serde_json::json;

fn email() -> EmailMessage {
    EmailMessage {
        from: "Exon Enterprise <contact@exonenterprise.com>".to_owned(),
        to: "owner@exon.localhost".to_owned(),
        subject: "New Contact Form Submission from Ava".to_owned(),
        html: "<p>Hi</p>".to_owned(),
        text: "Hi".to_owned(),
    }
}

#[tokio::test]
async fn test_send_posts_email_with_bearer_key() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/emails")
                .header("authorization", "Bearer re_test")
                .json_body(json!({
                    "from": "Exon Enterprise <contact@exonenterprise.com>",
                    "to": ["owner@exon.localhost"],
                    "subject": "New Contact Form Submission from Ava",
                    "html": "<p>Hi</p>",
                    "text": "Hi"
                }));
            then.status(200).json_body(json!({ "id": "49a3999c-0ce1-4ea6-ab68-afcd6dc2e794" }));
        })
        .await;

    let mailer = ResendMailer::new(&server.base_url(), "re_test", Duration::from_secs(5))?;
    mailer.send(&email()).await?;

    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn test_send_reports_rejection() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/emails");
            then.status(403).json_body(json!({
                "statusCode": 403,
                "name": "validation_error",
                "message": "The exonenterprise.com domain is not verified."
            }));
        })
        .await;

    let mailer = ResendMailer::new(&server.base_url(), "re_test", Duration::from_secs(5))?;
    let err = mailer.send(&email()).await.unwrap_err();

    mock.assert_hits_async(1).await;
    match err {
        MailerError::Rejected { status, body } => {
            assert_eq!(status, 403);
            assert!(body.contains("not verified"));
        }
        other => panic!("unexpected error: {other}"),
    }

    Ok(())
}

#[tokio::test]
async fn test_send_fails_when_service_unreachable() -> anyhow::Result<()> {
    let mailer = ResendMailer::new("http://127.0.0.1:9", "re_test", Duration::from_secs(1))?;
    let err = mailer.send(&email()).await.unwrap_err();

    assert!(matches!(err, MailerError::Http(_)));

    Ok(())
}
