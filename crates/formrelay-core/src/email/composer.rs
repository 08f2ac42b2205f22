/// Notification composer
use crate::constants::NOTIFICATION_INTRO;
use crate::models::{NotificationEmail, Submission};
use crate::utils::sanitization::escape_html;

/// Builds the notification for a submission
///
/// `to` is the inbox that receives it, which is not necessarily the resolved
/// target of the route.
pub fn compose_notification(submission: &Submission, from: &str, to: &str) -> NotificationEmail {
    NotificationEmail {
        from: from.to_string(),
        to: to.to_string(),
        reply_to: submission.submitter_email.clone(),
        subject: submission.subject.clone(),
        html_body: html_body(submission),
        text_body: text_body(submission),
    }
}

/// HTML part. Every user-supplied field is escaped.
pub fn html_body(submission: &Submission) -> String {
    format!(
        "<body style='font-size: 16px;'>\
         <p>{intro}</p>\
         <ul style='list-style-type:none; margin: 0; padding: 0;'>\
         <li><strong>From:</strong> {from}</li>\
         <li><strong>Subject:</strong> {subject}</li>\
         <li><strong>Message:</strong> {message}</li>\
         </ul></body>",
        intro = NOTIFICATION_INTRO,
        from = escape_html(&submission.submitter_email),
        subject = escape_html(&submission.subject),
        message = escape_html(&submission.message),
    )
}

/// Plain text part. text/plain is not interpreted, so fields go in verbatim.
pub fn text_body(submission: &Submission) -> String {
    format!(
        "{} From: {} | Subject: {} | Message: {}",
        NOTIFICATION_INTRO, submission.submitter_email, submission.subject, submission.message
    )
}
