use askama::Template;

use crate::{EmailMessage, MailerError};

#[derive(Template)]
#[template(path = "contact-submission.html")]
pub struct ContactSubmissionHtmlTemplate<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub message: &'a str,
}

#[derive(Template)]
#[template(path = "contact-submission.txt")]
pub struct ContactSubmissionPlainTemplate<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub message: &'a str,
}

pub fn subject(name: &str) -> String {
    format!("New Contact Form Submission from {name}")
}

/// Render the notification sent to the site owner for one contact submission
///
/// The HTML part is escaped by the template engine, the plain-text part
/// carries the submitted values verbatim.
pub fn contact_notification(
    from: &str,
    to: &str,
    name: &str,
    email: &str,
    message: &str,
) -> Result<EmailMessage, MailerError> {
    let html = ContactSubmissionHtmlTemplate {
        name,
        email,
        message,
    }
    .render()?;

    let text = ContactSubmissionPlainTemplate {
        name,
        email,
        message,
    }
    .render()?;

    Ok(EmailMessage {
        from: from.to_owned(),
        to: to.to_owned(),
        subject: subject(name),
        html,
        text,
    })
}
