use std::fmt;

use http::{header::ACCEPT, StatusCode};
use serde::Serialize;
use thiserror::Error;
use url::Url;

pub const SUBMISSION_SUBJECT: &str = "New portfolio contact submission";
pub const FAILURE_MESSAGE: &str =
    "Message could not be sent right now. Please try again in a moment.";

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(Field),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Invalid form endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
    #[error("Form service rejected the submission with status {0}")]
    Rejected(StatusCode),
    #[error("Couldn't reach the form service: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ContactError {
    /// Text shown next to the form. Service failures all collapse to one
    /// retry message.
    pub fn user_message(&self) -> String {
        match self {
            ContactError::MissingField(_) | ContactError::InvalidEmail => self.to_string(),
            _ => FAILURE_MESSAGE.to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ContactError::MissingField(_) | ContactError::InvalidEmail
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const INPUTS: [Field; 2] = [Field::Name, Field::Email];

    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            Field::Email => "email",
            _ => "text",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Your name",
            Field::Email => "your@email.com",
            Field::Message => "Tell me about your project...",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub honeypot: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn validate(&self) -> Result<Submission, ContactError> {
        for field in [Field::Name, Field::Email, Field::Message] {
            if self.get(field).trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        let email = self.email.trim();
        if !is_plausible_email(email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(Submission {
            name: self.name.trim().to_string(),
            email: email.to_string(),
            message: self.message.trim().to_string(),
            honeypot: self.honeypot.clone(),
            subject: SUBMISSION_SUBJECT.to_string(),
        })
    }
}

fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Body posted to the form service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(rename = "_gotcha")]
    pub honeypot: String,
    #[serde(rename = "_subject")]
    pub subject: String,
}

#[derive(Debug, Clone)]
pub struct ContactClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl ContactClient {
    pub fn new(endpoint: &str) -> Result<Self, ContactError> {
        Ok(Self {
            client: reqwest::Client::new(),
            endpoint: Url::parse(endpoint)?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Posts the submission once. Any non-2xx answer is a failure.
    pub async fn submit(&self, submission: &Submission) -> Result<(), ContactError> {
        log::debug!("posting contact submission to {}", self.endpoint);
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(ACCEPT, "application/json")
            .form(submission)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            log::warn!("form service answered {status}");
            return Err(ContactError::Rejected(status));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

/// Form contents plus submission progress, as driven by the contact section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFlow {
    pub form: ContactForm,
    pub state: SubmitState,
}

impl ContactFlow {
    pub fn is_submitting(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            SubmitState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn show_success(&self) -> bool {
        self.state == SubmitState::Succeeded
    }

    /// Starts a submission. Returns `None` when one is already running or the
    /// form is invalid; in the latter case the state carries the reason.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        if self.is_submitting() {
            return None;
        }
        match self.form.validate() {
            Ok(submission) => {
                self.state = SubmitState::Submitting;
                Some(submission)
            }
            Err(e) => {
                self.state = SubmitState::Failed(e.user_message());
                None
            }
        }
    }

    pub fn complete(&mut self, result: Result<(), ContactError>) {
        match result {
            Ok(()) => {
                self.form.clear();
                self.state = SubmitState::Succeeded;
            }
            Err(e) => {
                log::warn!("contact submission failed: {e}");
                self.state = SubmitState::Failed(e.user_message());
            }
        }
    }

    pub fn dismiss_success(&mut self) {
        if self.state == SubmitState::Succeeded {
            self.state = SubmitState::Idle;
        }
    }
}
