//! Contact form submission: validation, the `Idle -> Sending -> Succeeded |
//! Failed` state machine, and the HTTP seam it posts through.

use futures::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::Request;
use log::{debug, info, warn};
use serde::Deserialize;
use thiserror::Error;

use crate::config;

pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Please fill out name, email, and message.")]
    MissingFields,
    #[error("{}", .message.as_deref().unwrap_or(GENERIC_FAILURE))]
    Rejected { status: u16, message: Option<String> },
    #[error("Network error. Please try again.")]
    Network,
}

/// Transport-level failure: no response at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("request failed: {0}")]
pub struct TransportError(pub String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostResponse {
    pub status: u16,
    pub body: String,
}

impl PostResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub trait FormTransport {
    fn post<'a>(&'a self, endpoint: &'a str, body: String) -> LocalBoxFuture<'a, Result<PostResponse, TransportError>>;
}

/// Browser `fetch` via gloo-net. No timeout beyond the browser's own.
pub struct GlooTransport;

impl FormTransport for GlooTransport {
    fn post<'a>(&'a self, endpoint: &'a str, body: String) -> LocalBoxFuture<'a, Result<PostResponse, TransportError>> {
        async move {
            let response = Request::post(endpoint)
                .header("Accept", "application/json")
                .header("Content-Type", "application/x-www-form-urlencoded")
                .body(body)
                .send()
                .await
                .map_err(|e| TransportError(e.to_string()))?;
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Ok(PostResponse { status, body })
        }
        .boxed_local()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Phone,
    Email,
    Message,
    /// Honeypot. Hidden from people; anything typed here marks the sender
    /// as a bot for the endpoint's spam filter.
    Gotcha,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
    pub gotcha: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Message => &self.message,
            Field::Gotcha => &self.gotcha,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Phone => &mut self.phone,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
            Field::Gotcha => &mut self.gotcha,
        }
    }

    fn has_required(&self) -> bool {
        [&self.name, &self.email, &self.message].iter().all(|v| !v.trim().is_empty())
    }

    /// `application/x-www-form-urlencoded` body, honeypot and metadata
    /// included.
    pub fn encode(&self) -> String {
        let pairs = [
            ("name", self.name.trim()),
            ("phone", self.phone.trim()),
            ("email", self.email.trim()),
            ("message", self.message.trim()),
            ("_gotcha", self.gotcha.as_str()),
            ("_subject", config::FORM_SUBJECT),
            ("source", config::FORM_SOURCE),
        ];
        pairs
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Sending,
    Succeeded,
    Failed(SubmitError),
}

impl SubmissionState {
    pub fn is_sending(&self) -> bool {
        matches!(self, SubmissionState::Sending)
    }

    pub fn error_message(&self) -> Option<String> {
        match self {
            SubmissionState::Failed(err) => Some(err.to_string()),
            _ => None,
        }
    }
}

/// A validated request, ready to hand to a [`FormTransport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub body: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactFields,
    state: SubmissionState,
}

impl ContactForm {
    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        *self.fields.slot(field) = value;
    }

    /// Moves to `Sending` and returns the request to issue. Returns `None`
    /// while a request is already in flight, and moves straight to `Failed`
    /// when a required field is blank.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        if self.state.is_sending() {
            debug!("submit ignored, request already in flight");
            return None;
        }
        if !self.fields.has_required() {
            self.state = SubmissionState::Failed(SubmitError::MissingFields);
            return None;
        }
        self.state = SubmissionState::Sending;
        Some(Submission { body: self.fields.encode() })
    }

    /// Applies the transport outcome. Ignored unless a request is in flight.
    pub fn finish(&mut self, outcome: Result<PostResponse, TransportError>) {
        if !self.state.is_sending() {
            return;
        }
        self.state = match outcome {
            Ok(response) if response.is_success() => {
                info!("contact form accepted ({})", response.status);
                self.fields = ContactFields::default();
                SubmissionState::Succeeded
            }
            Ok(response) => {
                warn!("contact form rejected with status {}", response.status);
                SubmissionState::Failed(SubmitError::Rejected {
                    status: response.status,
                    message: rejection_message(&response.body),
                })
            }
            Err(err) => {
                warn!("contact form transport failure: {}", err);
                SubmissionState::Failed(SubmitError::Network)
            }
        };
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ErrorEntry>,
}

#[derive(Deserialize)]
struct ErrorEntry {
    message: Option<String>,
}

/// `errors[0].message` from a JSON error body, if there is a non-empty one.
fn rejection_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed
        .errors
        .into_iter()
        .next()
        .and_then(|entry| entry.message)
        .filter(|message| !message.is_empty())
}

/// Issues the single POST for `submission`.
pub async fn deliver<T: FormTransport + ?Sized>(
    transport: &T,
    endpoint: &str,
    submission: Submission,
) -> Result<PostResponse, TransportError> {
    debug!("posting contact form to {}", endpoint);
    transport.post(endpoint, submission.body).await
}
