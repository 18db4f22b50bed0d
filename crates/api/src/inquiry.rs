//! Inquiry submission
//!
//! Packages a chosen model code into a form payload and POSTs it to the
//! configured endpoint. One submission per explicit user action: no
//! automatic retry, no cancellation of an in-flight request. A non-empty
//! decoy field drops the submission silently before any transport happens.

use crate::throttle::{InteractionTracker, MIN_INTERACTIONS_SUBMIT};
use ptcat_core::{Error, Result};
use reqwest::header::ACCEPT;
use serde::Serialize;
use uuid::Uuid;

/// Inquiry form payload
///
/// `website` is the decoy field: it is invisible to users, so anything
/// filling it in is automation and the submission is discarded.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InquiryForm {
    /// Model code the inquiry is about
    pub model_code: String,
    /// Requester name
    pub name: String,
    /// Requester email
    pub email: String,
    /// Requester company
    pub company: String,
    /// Free-text message
    pub message: String,
    /// Decoy field; must stay empty
    pub website: String,
}

impl InquiryForm {
    /// Form for a model code with all other fields blank
    pub fn for_model(model_code: impl Into<String>) -> Self {
        InquiryForm {
            model_code: model_code.into(),
            ..Default::default()
        }
    }

    /// Whether the decoy field was filled in
    pub fn decoy_tripped(&self) -> bool {
        !self.website.is_empty()
    }

    /// Clear every field (after a successful submission)
    pub fn reset(&mut self) {
        *self = InquiryForm::default();
    }
}

/// Result of a submission attempt that did not error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The backend accepted the inquiry
    Accepted(InquiryReceipt),
    /// The decoy field was set; nothing was sent
    Discarded,
}

/// Reference returned for an accepted inquiry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InquiryReceipt {
    /// Locally generated submission reference
    pub reference: Uuid,
    /// Model code that was submitted
    pub model_code: String,
}

/// Async client for the inquiry form backend
#[derive(Debug, Clone)]
pub struct InquiryClient {
    endpoint: String,
    http: reqwest::Client,
}

impl InquiryClient {
    /// Client posting to the given form-backend endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        InquiryClient {
            endpoint: endpoint.into(),
            http: reqwest::Client::new(),
        }
    }

    /// The configured endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit the form once
    ///
    /// `interaction_count` comes from the controller's tracker; below
    /// [`MIN_INTERACTIONS_SUBMIT`] the submission is refused as suspected
    /// automation. The payload is form-encoded and the request asks for a
    /// JSON-capable response; any non-success status is a failure.
    ///
    /// # Errors
    /// - [`Error::SuspectedAutomation`] below the interaction threshold
    /// - [`Error::SubmissionFailed`] on transport errors or non-2xx status
    pub async fn submit(
        &self,
        form: &InquiryForm,
        interaction_count: u32,
    ) -> Result<SubmitOutcome> {
        if form.decoy_tripped() {
            tracing::warn!(model_code = %form.model_code, "decoy field set, dropping submission");
            return Ok(SubmitOutcome::Discarded);
        }

        if interaction_count < MIN_INTERACTIONS_SUBMIT {
            tracing::warn!(interaction_count, "refusing submission: too few interactions");
            return Err(Error::SuspectedAutomation);
        }

        let response = self
            .http
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .form(form)
            .send()
            .await
            .map_err(|e| Error::SubmissionFailed {
                status: None,
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(status = status.as_u16(), "inquiry submission rejected");
            return Err(Error::SubmissionFailed {
                status: Some(status.as_u16()),
                message: status
                    .canonical_reason()
                    .unwrap_or("unexpected status")
                    .to_string(),
            });
        }

        let receipt = InquiryReceipt {
            reference: Uuid::new_v4(),
            model_code: form.model_code.clone(),
        };
        tracing::info!(reference = %receipt.reference, "inquiry submitted");
        Ok(SubmitOutcome::Accepted(receipt))
    }

    /// Submit with a live tracker instead of a raw count
    pub async fn submit_tracked(
        &self,
        form: &InquiryForm,
        interactions: &InteractionTracker,
    ) -> Result<SubmitOutcome> {
        self.submit(form, interactions.count()).await
    }
}
