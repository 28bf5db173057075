//! Multi-step contact form: field validation, step transitions and submission hand-off.
//!
//! The form walks through [`Step::Info`] (name, email), [`Step::Details`]
//! (subject, message) and [`Step::Review`]. Each forward move validates only
//! the fields owned by the current step. Submitting re-validates everything,
//! fetches an anti-automation token on a best-effort basis, and hands the
//! record to a [`SubmissionSink`].

use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;
use std::pin::pin;
use std::str::FromStr;
use std::sync::LazyLock;

use futures::future::{select, Either};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const NAME_MIN: usize = 2;
pub const NAME_MAX: usize = 50;
pub const MESSAGE_MIN: usize = 10;
pub const MESSAGE_MAX: usize = 500;
pub const MESSAGE_MIN_WORDS: usize = 3;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContactSubject {
    Collaboration,
    JobOpportunity,
    Freelance,
    Question,
    Other,
}

impl ContactSubject {
    pub const ALL: [ContactSubject; 5] = [
        ContactSubject::Collaboration,
        ContactSubject::JobOpportunity,
        ContactSubject::Freelance,
        ContactSubject::Question,
        ContactSubject::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactSubject::Collaboration => "collaboration",
            ContactSubject::JobOpportunity => "job-opportunity",
            ContactSubject::Freelance => "freelance",
            ContactSubject::Question => "question",
            ContactSubject::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactSubject::Collaboration => "Collaboration",
            ContactSubject::JobOpportunity => "Job Opportunity",
            ContactSubject::Freelance => "Freelance Work",
            ContactSubject::Question => "General Question",
            ContactSubject::Other => "Other",
        }
    }
}

impl fmt::Display for ContactSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactSubject {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContactSubject::ALL
            .into_iter()
            .find(|subject| subject.as_str() == s)
            .ok_or(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    #[default]
    Info,
    Details,
    Review,
}

impl Step {
    pub const ALL: [Step; 3] = [Step::Info, Step::Details, Step::Review];

    pub fn index(self) -> usize {
        match self {
            Step::Info => 0,
            Step::Details => 1,
            Step::Review => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Step::Info => "Your Info",
            Step::Details => "Message",
            Step::Review => "Review",
        }
    }

    /// Fields validated before leaving this step.
    pub fn fields(self) -> &'static [Field] {
        match self {
            Step::Info => &[Field::Name, Field::Email],
            Step::Details => &[Field::Subject, Field::Message],
            Step::Review => &[],
        }
    }

    fn next(self) -> Self {
        match self {
            Step::Info => Step::Details,
            Step::Details | Step::Review => Step::Review,
        }
    }

    fn prev(self) -> Self {
        match self {
            Step::Info | Step::Details => Step::Info,
            Step::Review => Step::Details,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub subject: Option<ContactSubject>,
    pub message: String,
}

/// Human-readable validation messages keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }

    fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    fn remove(&mut self, field: Field) {
        self.0.remove(&field);
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages = self.0.values().map(String::as_str).collect::<Vec<_>>();
        f.write_str(&messages.join(" "))
    }
}

/// The validated record handed to the submission endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: ContactSubject,
    pub message: String,
    #[serde(default)]
    pub recaptcha_token: Option<String>,
}

impl ContactSubmission {
    /// Re-runs the full schema, e.g. on the receiving end of the hand-off.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let values = FormValues {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: Some(self.subject),
            message: self.message.clone(),
        };
        validate_all(&values).map(|_| ())
    }
}

fn validate_name(name: &str) -> Option<&'static str> {
    let len = name.chars().count();
    if len < NAME_MIN {
        Some("Name must be at least 2 characters.")
    } else if len > NAME_MAX {
        Some("Name must be at most 50 characters.")
    } else if name.trim().is_empty() {
        Some("Name cannot be only whitespace.")
    } else {
        None
    }
}

fn validate_email(email: &str) -> Option<&'static str> {
    if EMAIL_RE.is_match(email) {
        None
    } else {
        Some("Please enter a valid email address.")
    }
}

fn validate_subject(subject: Option<ContactSubject>) -> Option<&'static str> {
    match subject {
        Some(_) => None,
        None => Some("Please select a subject."),
    }
}

fn validate_message(message: &str) -> Option<&'static str> {
    let len = message.chars().count();
    if len < MESSAGE_MIN {
        Some("Message must be at least 10 characters.")
    } else if len > MESSAGE_MAX {
        Some("Message must be at most 500 characters.")
    } else if message.split_whitespace().count() < MESSAGE_MIN_WORDS {
        Some("Message must contain at least 3 words.")
    } else {
        None
    }
}

pub fn validate_field(values: &FormValues, field: Field) -> Option<&'static str> {
    match field {
        Field::Name => validate_name(&values.name),
        Field::Email => validate_email(&values.email),
        Field::Subject => validate_subject(values.subject),
        Field::Message => validate_message(&values.message),
    }
}

pub fn validate_step(values: &FormValues, step: Step) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for field in step.fields() {
        if let Some(message) = validate_field(values, *field) {
            errors.insert(*field, message);
        }
    }
    errors
}

/// Validates every field and builds the record to submit.
pub fn validate_all(values: &FormValues) -> Result<ContactSubmission, FieldErrors> {
    let mut errors = FieldErrors::default();
    for step in Step::ALL {
        errors.0.append(&mut validate_step(values, step).0);
    }
    match values.subject {
        Some(subject) if errors.is_empty() => Ok(ContactSubmission {
            name: values.name.clone(),
            email: values.email.clone(),
            subject,
            message: values.message.clone(),
            recaptcha_token: None,
        }),
        _ => Err(errors),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Editing,
    /// A hand-off is in flight; further submits are refused.
    Submitting,
    Submitted,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("verification service is not loaded")]
    Unavailable,
    #[error("verification service rejected the request: {0}")]
    Rejected(String),
    #[error("verification timed out")]
    TimedOut,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Your message couldn't be sent: {0}")]
    Rejected(String),
    #[error("Your message couldn't be sent. Please check your connection and try again.")]
    Network(String),
}

/// Source of one-time anti-automation tokens.
#[allow(async_fn_in_trait)]
pub trait TokenProvider {
    async fn token(&self, action: &str) -> Result<String, TokenError>;
}

/// Receiver of validated contact records.
#[allow(async_fn_in_trait)]
pub trait SubmissionSink {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), SubmitError>;
}

/// Races the provider against `timer`; whichever finishes first decides.
pub async fn obtain_token<P, T>(provider: &P, action: &str, timer: T) -> Result<String, TokenError>
where
    P: TokenProvider,
    T: Future<Output = ()>,
{
    let fetch = pin!(provider.token(action));
    let timer = pin!(timer);
    match select(fetch, timer).await {
        Either::Left((res, _)) => res,
        Either::Right(((), _)) => Err(TokenError::TimedOut),
    }
}

/// Attaches a token when one can be had, then hands the record to `sink`.
///
/// Token failures are logged and otherwise ignored.
pub async fn deliver<P, S, T>(
    mut submission: ContactSubmission,
    provider: &P,
    action: &str,
    sink: &S,
    timer: T,
) -> Result<(), SubmitError>
where
    P: TokenProvider,
    S: SubmissionSink,
    T: Future<Output = ()>,
{
    submission.recaptcha_token = match obtain_token(provider, action, timer).await {
        Ok(token) => Some(token),
        Err(e) => {
            log::warn!("continuing without verification token: {e}");
            None
        }
    };
    sink.send(&submission).await
}

/// State of one contact form instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    step: Step,
    values: FormValues,
    errors: FieldErrors,
    phase: Phase,
    submit_error: Option<String>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == Phase::Submitted
    }

    /// Error from the last failed hand-off, cleared on the next attempt.
    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    fn editable(&self) -> bool {
        self.phase == Phase::Editing
    }

    pub fn set_name(&mut self, name: String) {
        if self.editable() {
            self.values.name = name;
            self.errors.remove(Field::Name);
        }
    }

    pub fn set_email(&mut self, email: String) {
        if self.editable() {
            self.values.email = email;
            self.errors.remove(Field::Email);
        }
    }

    pub fn set_subject(&mut self, subject: ContactSubject) {
        if self.editable() {
            self.values.subject = Some(subject);
            self.errors.remove(Field::Subject);
        }
    }

    pub fn set_message(&mut self, message: String) {
        if self.editable() {
            self.values.message = message;
            self.errors.remove(Field::Message);
        }
    }

    /// Validates the current step and advances when it passes. Returns whether the step changed.
    pub fn next(&mut self) -> bool {
        if !self.editable() {
            return false;
        }
        let step_errors = validate_step(&self.values, self.step);
        for field in self.step.fields() {
            match step_errors.get(*field) {
                Some(message) => self.errors.insert(*field, message),
                None => self.errors.remove(*field),
            }
        }
        if !step_errors.is_empty() {
            return false;
        }
        let next = self.step.next();
        let moved = next != self.step;
        self.step = next;
        moved
    }

    pub fn back(&mut self) {
        if self.editable() {
            self.step = self.step.prev();
        }
    }

    /// Starts a submission from the review step.
    ///
    /// Returns the record to deliver, or `None` when the form isn't on the review
    /// step, a submission is already in flight, or validation fails. On failure the
    /// form returns to the first step holding an invalid field.
    pub fn begin_submit(&mut self) -> Option<ContactSubmission> {
        if self.step != Step::Review || !self.editable() {
            return None;
        }
        match validate_all(&self.values) {
            Ok(submission) => {
                self.errors = FieldErrors::default();
                self.submit_error = None;
                self.phase = Phase::Submitting;
                Some(submission)
            }
            Err(errors) => {
                if let Some(step) = Step::ALL
                    .into_iter()
                    .find(|s| s.fields().iter().any(|f| errors.contains(*f)))
                {
                    self.step = step;
                }
                self.errors = errors;
                None
            }
        }
    }

    /// Records the outcome of the hand-off started by [`ContactForm::begin_submit`].
    ///
    /// A failed hand-off leaves the form on the review step so it can be retried.
    pub fn finish_submit(&mut self, outcome: Result<(), SubmitError>) {
        if !self.is_submitting() {
            return;
        }
        match outcome {
            Ok(()) => self.phase = Phase::Submitted,
            Err(e) => {
                self.phase = Phase::Editing;
                self.submit_error = Some(e.to_string());
            }
        }
    }

    /// Clears all values and errors and returns to the first step.
    pub fn reset(&mut self) {
        if !self.is_submitting() {
            *self = Self::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;
    use futures::future::{pending, ready};

    use super::*;

    struct FixedToken(Result<String, TokenError>);

    impl TokenProvider for FixedToken {
        async fn token(&self, _action: &str) -> Result<String, TokenError> {
            self.0.clone()
        }
    }

    struct HangingToken;

    impl TokenProvider for HangingToken {
        async fn token(&self, _action: &str) -> Result<String, TokenError> {
            pending().await
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        sent: RefCell<Vec<ContactSubmission>>,
        fail_with: Option<SubmitError>,
    }

    impl SubmissionSink for RecordingSink {
        async fn send(&self, submission: &ContactSubmission) -> Result<(), SubmitError> {
            self.sent.borrow_mut().push(submission.clone());
            match &self.fail_with {
                Some(e) => Err(e.clone()),
                None => Ok(()),
            }
        }
    }

    fn valid_values() -> FormValues {
        FormValues {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            subject: Some(ContactSubject::Collaboration),
            message: "Let us build an engine together".to_string(),
        }
    }

    fn form_on_review() -> ContactForm {
        let values = valid_values();
        let mut form = ContactForm::new();
        form.set_name(values.name);
        form.set_email(values.email);
        assert!(form.next());
        form.set_subject(ContactSubject::Collaboration);
        form.set_message(values.message);
        assert!(form.next());
        assert_eq!(form.step(), Step::Review);
        form
    }

    fn submit_with<P: TokenProvider, T: Future<Output = ()>>(
        form: &mut ContactForm,
        provider: &P,
        sink: &RecordingSink,
        timer: T,
    ) {
        let submission = form.begin_submit().expect("form should be submittable");
        let outcome = block_on(deliver(submission, provider, "contact_form", sink, timer));
        form.finish_submit(outcome);
    }

    #[test]
    fn test_name_rules() {
        let mut values = valid_values();
        let check = |values: &FormValues| validate_field(values, Field::Name);

        values.name = "A".to_string();
        assert_eq!(check(&values), Some("Name must be at least 2 characters."));
        values.name = "x".repeat(51);
        assert_eq!(check(&values), Some("Name must be at most 50 characters."));
        values.name = "   ".to_string();
        assert_eq!(check(&values), Some("Name cannot be only whitespace."));
        values.name = "Jo".to_string();
        assert_eq!(check(&values), None);
        values.name = "Zoë".to_string();
        assert_eq!(check(&values), None);
    }

    #[test]
    fn test_email_rules() {
        let mut values = valid_values();
        for good in ["a@b.co", "first.last+tag@sub.example.org", "x_y%z@host-name.io"] {
            values.email = good.to_string();
            assert_eq!(validate_field(&values, Field::Email), None, "{good}");
        }
        for bad in ["", "plain", "a@b", "a@b.c", "a b@example.com", "@example.com"] {
            values.email = bad.to_string();
            assert_eq!(
                validate_field(&values, Field::Email),
                Some("Please enter a valid email address."),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_subject_rules() {
        let mut values = valid_values();
        values.subject = None;
        assert_eq!(
            validate_field(&values, Field::Subject),
            Some("Please select a subject.")
        );
        assert_eq!(
            "job-opportunity".parse::<ContactSubject>(),
            Ok(ContactSubject::JobOpportunity)
        );
        assert!("sales".parse::<ContactSubject>().is_err());
        assert_eq!(ContactSubject::Freelance.label(), "Freelance Work");
    }

    #[test]
    fn test_message_rules() {
        let mut values = valid_values();
        let check = |values: &FormValues| validate_field(values, Field::Message);

        values.message = "too short".to_string();
        assert_eq!(check(&values), Some("Message must be at least 10 characters."));
        values.message = "word ".repeat(101);
        assert_eq!(check(&values), Some("Message must be at most 500 characters."));
        values.message = "twowordsonly hereokay".to_string();
        assert_eq!(check(&values), Some("Message must contain at least 3 words."));
        values.message = "  three   small words ".to_string();
        assert_eq!(check(&values), None);
    }

    #[test]
    fn test_short_name_blocks_first_step() {
        let mut form = ContactForm::new();
        form.set_name("A".to_string());
        form.set_email("a@example.com".to_string());

        assert!(!form.next());
        assert_eq!(form.step(), Step::Info);
        assert_eq!(form.error(Field::Name), Some("Name must be at least 2 characters."));
        assert_eq!(form.error(Field::Email), None);
        assert!(!form.errors().contains(Field::Message));
    }

    #[test]
    fn test_step_validation_only_touches_own_fields() {
        let mut form = ContactForm::new();
        form.set_name("Ada".to_string());
        form.set_email("ada@example.com".to_string());
        assert!(form.next());

        assert!(!form.next());
        assert_eq!(form.step(), Step::Details);
        assert!(form.errors().contains(Field::Subject));
        assert!(form.errors().contains(Field::Message));
        assert_eq!(form.errors().len(), 2);
    }

    #[test]
    fn test_editing_clears_field_error() {
        let mut form = ContactForm::new();
        assert!(!form.next());
        assert!(form.errors().contains(Field::Name));
        assert!(form.errors().contains(Field::Email));

        form.set_name("Ada".to_string());
        assert!(!form.errors().contains(Field::Name));
        assert!(form.errors().contains(Field::Email));
    }

    #[test]
    fn test_back_keeps_values() {
        let mut form = form_on_review();
        form.back();
        assert_eq!(form.step(), Step::Details);
        form.back();
        assert_eq!(form.step(), Step::Info);
        form.back();
        assert_eq!(form.step(), Step::Info);
        assert_eq!(form.values(), &valid_values());
    }

    #[test]
    fn test_next_is_capped_at_review() {
        let mut form = form_on_review();
        assert!(!form.next());
        assert_eq!(form.step(), Step::Review);
    }

    #[test]
    fn test_submit_only_from_review() {
        let mut form = ContactForm::new();
        assert_eq!(form.begin_submit(), None);
        assert_eq!(form.phase(), Phase::Editing);
    }

    #[test]
    fn test_submit_reaches_submitted_with_token() {
        let mut form = form_on_review();
        let sink = RecordingSink::default();
        submit_with(&mut form, &FixedToken(Ok("tok".to_string())), &sink, pending());

        assert!(form.is_submitted());
        let sent = sink.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].recaptcha_token.as_deref(), Some("tok"));
        assert_eq!(sent[0].subject, ContactSubject::Collaboration);
    }

    #[test]
    fn test_submit_survives_token_failure() {
        let mut form = form_on_review();
        let sink = RecordingSink::default();
        submit_with(&mut form, &FixedToken(Err(TokenError::Unavailable)), &sink, pending());

        assert!(form.is_submitted());
        assert_eq!(sink.sent.borrow()[0].recaptcha_token, None);
    }

    #[test]
    fn test_submit_survives_token_timeout() {
        let mut form = form_on_review();
        let sink = RecordingSink::default();
        submit_with(&mut form, &HangingToken, &sink, ready(()));

        assert!(form.is_submitted());
        assert_eq!(sink.sent.borrow().len(), 1);
        assert_eq!(sink.sent.borrow()[0].recaptcha_token, None);
    }

    #[test]
    fn test_obtain_token_timeout() {
        let res = block_on(obtain_token(&HangingToken, "contact_form", ready(())));
        assert_eq!(res, Err(TokenError::TimedOut));
        let res = block_on(obtain_token(&FixedToken(Ok("t".to_string())), "x", pending()));
        assert_eq!(res, Ok("t".to_string()));
    }

    #[test]
    fn test_resubmit_refused_while_in_flight() {
        let mut form = form_on_review();
        assert!(form.begin_submit().is_some());
        assert!(form.is_submitting());
        assert_eq!(form.begin_submit(), None);

        form.set_name("Changed".to_string());
        form.back();
        form.reset();
        assert_eq!(form.values().name, "Ada Lovelace");
        assert_eq!(form.step(), Step::Review);
    }

    #[test]
    fn test_failed_hand_off_is_retryable() {
        let mut form = form_on_review();
        let sink = RecordingSink {
            fail_with: Some(SubmitError::Rejected("server down".to_string())),
            ..Default::default()
        };
        submit_with(&mut form, &FixedToken(Ok("tok".to_string())), &sink, pending());

        assert_eq!(form.phase(), Phase::Editing);
        assert_eq!(form.step(), Step::Review);
        assert_eq!(
            form.submit_error(),
            Some("Your message couldn't be sent: server down")
        );

        let ok_sink = RecordingSink::default();
        submit_with(&mut form, &FixedToken(Ok("tok".to_string())), &ok_sink, pending());
        assert!(form.is_submitted());
        assert_eq!(form.submit_error(), None);
    }

    #[test]
    fn test_invalid_record_on_review_returns_to_failing_step() {
        let mut form = form_on_review();
        form.back();
        form.set_message("short".to_string());
        // skip Details validation by jumping straight to review state
        form.step = Step::Review;

        assert_eq!(form.begin_submit(), None);
        assert_eq!(form.step(), Step::Details);
        assert!(form.errors().contains(Field::Message));
        assert_eq!(form.phase(), Phase::Editing);
    }

    #[test]
    fn test_reset_after_submitted() {
        let mut form = form_on_review();
        let sink = RecordingSink::default();
        submit_with(&mut form, &FixedToken(Ok("tok".to_string())), &sink, pending());
        assert!(form.is_submitted());

        form.set_name("ignored".to_string());
        assert_eq!(form.values().name, "Ada Lovelace");

        form.reset();
        assert_eq!(form, ContactForm::new());
    }

    #[test]
    fn test_submission_wire_format() {
        let submission = validate_all(&valid_values()).unwrap();
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["subject"], "collaboration");
        assert_eq!(json["recaptchaToken"], serde_json::Value::Null);
        assert!(submission.validate().is_ok());

        let mut bad = submission;
        bad.email = "nope".to_string();
        let errors = bad.validate().unwrap_err();
        assert_eq!(errors.to_string(), "Please enter a valid email address.");
    }
}
