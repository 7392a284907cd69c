use std::sync::Arc;

use parking_lot::Mutex;
use validator::Validate;

use crate::entities::contact_me::ContactFormSubmission;
use crate::errors::ContactError;
use crate::repositories::portfolio_api::PortfolioApi;

pub const SENT_MESSAGE: &str = "Message sent successfully!";
pub const FAILED_MESSAGE: &str = "Failed to send message. Please try again.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Sent,
    Failed,
}

impl SubmitStatus {
    /// Banner text shown under the form, if any.
    pub fn banner(self) -> Option<&'static str> {
        match self {
            SubmitStatus::Sent => Some(SENT_MESSAGE),
            SubmitStatus::Failed => Some(FAILED_MESSAGE),
            _ => None,
        }
    }
}

#[derive(Default)]
struct FormInner {
    fields: ContactFormSubmission,
    status: SubmitStatus,
}

pub struct ContactForm<A>
where
    A: PortfolioApi,
{
    pub api: Arc<A>,
    inner: Mutex<FormInner>,
}

impl<A> ContactForm<A>
where
    A: PortfolioApi,
{
    pub fn new(api: Arc<A>) -> Self {
        ContactForm { api, inner: Mutex::new(FormInner::default()) }
    }

    pub fn set_name(&self, name: impl Into<String>) {
        self.inner.lock().fields.name = name.into();
    }

    pub fn set_email(&self, email: impl Into<String>) {
        self.inner.lock().fields.email = email.into();
    }

    pub fn set_message(&self, message: impl Into<String>) {
        self.inner.lock().fields.message = message.into();
    }

    pub fn fields(&self) -> ContactFormSubmission {
        self.inner.lock().fields.clone()
    }

    pub fn status(&self) -> SubmitStatus {
        self.inner.lock().status
    }

    /// Validates the current fields and posts them.
    ///
    /// Fields are cleared only after the server accepts the message; on failure
    /// they are kept so the visitor can retry.
    pub async fn submit(&self) -> Result<(), ContactError> {
        let submission = {
            let mut inner = self.inner.lock();
            if inner.status == SubmitStatus::Submitting {
                return Err(ContactError::InFlight);
            }
            inner.fields.validate()?;
            inner.status = SubmitStatus::Submitting;
            inner.fields.clone()
        };

        let outcome = self.api.submit_contact(&submission).await;

        let mut inner = self.inner.lock();
        match outcome {
            Ok(()) => {
                tracing::info!("Contact message sent");
                inner.fields = ContactFormSubmission::default();
                inner.status = SubmitStatus::Sent;
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Error submitting form");
                inner.status = SubmitStatus::Failed;
                Err(e.into())
            }
        }
    }
}
