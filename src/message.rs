use serde::Serialize;

pub const MESSAGE_SUBJECT: &str = "Notification from Lambda";
pub const BODY_PREFIX: &str = "This is a message sent on behalf of ";

/// Subject label attached to the SNS publish call itself, which email
/// subscribers see as the mail subject.
pub const PUBLISH_SUBJECT: &str = "Lambda Notification";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationMessage {
    pub subject: String,
    pub body: String,
}

impl NotificationMessage {
    pub fn on_behalf_of(sender_name: &str) -> Self {
        Self {
            subject: MESSAGE_SUBJECT.to_string(),
            body: format!("{}{}", BODY_PREFIX, sender_name),
        }
    }
}
