use crate::config;
use crate::models::LeadForm;

/// Confirmation returned by a sink once it has accepted a lead
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ack {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("Lead rejected: {0}")]
    Rejected(String),
    #[error("Could not deliver lead: {0}")]
    Unavailable(String),
}

/// Where completed leads go. Retry and timeout policy belong to the
/// implementation, not to the form.
pub trait LeadSink {
    fn submit(&self, lead: &LeadForm) -> Result<Ack, SubmissionError>;
}

impl<S: LeadSink + ?Sized> LeadSink for &S {
    fn submit(&self, lead: &LeadForm) -> Result<Ack, SubmissionError> {
        (**self).submit(lead)
    }
}

/// Accepts every lead without any I/O and thanks the visitor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalAcknowledgement {
    pub contact_email: String,
}

impl Default for LocalAcknowledgement {
    fn default() -> Self {
        Self {
            contact_email: config::CONTACT_EMAIL.to_string(),
        }
    }
}

impl LeadSink for LocalAcknowledgement {
    fn submit(&self, lead: &LeadForm) -> Result<Ack, SubmissionError> {
        Ok(Ack {
            message: format!(
                "Thank you, {}! Your message has been sent to {}. I will reply as fast as I can.",
                lead.first_name, self.contact_email
            ),
        })
    }
}
