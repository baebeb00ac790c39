//! Contact form submission.
//!
//! The form posts url-encoded fields to an external form endpoint and maps
//! the outcome onto one of three user-facing messages. No retries.

use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::Serialize;
use tracing::{info, warn};

/// Fields of the contact form, in submission order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    /// Clear every field after a successful send.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Submission status shown under the form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    /// Nothing submitted yet; the status line is hidden
    #[default]
    Idle,
    Sending,
    Sent,
    /// The endpoint answered with a failure status
    Rejected,
    /// The request never completed
    NetworkError,
}

impl FormStatus {
    pub fn message(&self) -> &'static str {
        match self {
            FormStatus::Idle => "",
            FormStatus::Sending => "Sending...",
            FormStatus::Sent => "Message sent successfully!",
            FormStatus::Rejected => "Oops! There was a problem.",
            FormStatus::NetworkError => "Oops! There was a network error.",
        }
    }

    /// CSS class for the status line.
    pub fn class(&self) -> &'static str {
        match self {
            FormStatus::Idle | FormStatus::Sending => "",
            FormStatus::Sent => "form-success",
            FormStatus::Rejected | FormStatus::NetworkError => "form-error",
        }
    }

    pub fn is_visible(&self) -> bool {
        *self != FormStatus::Idle
    }

    /// A request is in flight.
    pub fn is_pending(&self) -> bool {
        *self == FormStatus::Sending
    }
}

/// Posts contact form submissions to the configured action URL.
#[derive(Clone, Debug)]
pub struct ContactClient {
    client: Client,
    action: String,
}

impl ContactClient {
    pub fn new(action: impl Into<String>) -> Self {
        Self::with_client(Client::new(), action)
    }

    pub fn with_client(client: Client, action: impl Into<String>) -> Self {
        Self {
            client,
            action: action.into(),
        }
    }

    /// Submit `fields` and report the resulting status.
    pub async fn submit(&self, fields: &ContactFields) -> FormStatus {
        let result = self
            .client
            .post(&self.action)
            .header(ACCEPT, "application/json")
            .form(fields)
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => {
                info!("Contact form sent");
                FormStatus::Sent
            }
            Ok(response) => {
                warn!(status = %response.status(), "Contact form rejected");
                FormStatus::Rejected
            }
            Err(e) => {
                warn!("Contact form request failed: {}", e);
                FormStatus::NetworkError
            }
        }
    }
}
