/// Notification composed from a submission, ready for dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationEmail {
    pub from: String,
    pub to: String,
    /// Submitter address, as typed into the form
    pub reply_to: String,
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
}
