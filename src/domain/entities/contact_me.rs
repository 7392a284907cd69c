use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserContact {
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialMediaLink {
    pub id: u64,
    pub platform: String,
    pub link: String,
    /// Server-side icon hint. Lookup is done on `platform`.
    #[serde(default)]
    pub icon: Option<String>,
}

/// Payload for `POST /contact`. Never kept after a successful send.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ContactFormSubmission {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "A valid email address is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

impl ContactFormSubmission {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        ContactFormSubmission {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}
