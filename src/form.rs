//! Contact form: per-field validation mirroring the site's rules, plus the
//! submit flow (sending state, fire-and-forget delivery, timed banners).

use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, LazyLock};
use std::thread;

use regex::Regex;

use crate::constants::FEEDBACK_CLEAR_DELAY;
use crate::submit::{Payload, SubmitError, Submitter};
use crate::timer::Countdown;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").unwrap());

const MSG_REQUIRED: &str = "This field is required";
const MSG_EMAIL: &str = "Please enter a valid email address";
const MSG_PHONE: &str = "Please enter a valid phone number";
const MSG_SUCCESS: &str = "Thank you! Your message has been sent successfully.";
const MSG_FAILURE: &str = "Sorry, there was an error sending your message. Please try again.";

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Multiline,
}

pub struct Field {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub min_length: Option<usize>,
    pub value: String,
    pub error: Option<String>,
}

impl Field {
    fn new(
        name: &'static str,
        label: &'static str,
        kind: FieldKind,
        required: bool,
        min_length: Option<usize>,
    ) -> Self {
        Self {
            name,
            label,
            kind,
            required,
            min_length,
            value: String::new(),
            error: None,
        }
    }

    /// Re-run this field's rules, first failure wins. Returns validity.
    pub fn validate(&mut self) -> bool {
        self.error = None;
        let value = self.value.trim();

        if self.required && value.is_empty() {
            self.error = Some(MSG_REQUIRED.to_string());
            return false;
        }
        if self.kind == FieldKind::Email && !value.is_empty() && !EMAIL_RE.is_match(value) {
            self.error = Some(MSG_EMAIL.to_string());
            return false;
        }
        if self.kind == FieldKind::Tel && !value.is_empty() {
            let digits: String = value
                .chars()
                .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
                .collect();
            if !PHONE_RE.is_match(&digits) {
                self.error = Some(MSG_PHONE.to_string());
                return false;
            }
        }
        if let Some(min) = self.min_length {
            if value.len() < min {
                self.error = Some(format!("Minimum {min} characters required"));
                return false;
            }
        }
        true
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum FeedbackKind {
    Success,
    Error,
}

pub struct Feedback {
    pub kind: FeedbackKind,
    pub text: &'static str,
    ttl: Countdown,
}

#[derive(Debug, PartialEq, Clone, Copy)]
enum Status {
    Idle,
    Sending,
}

pub struct ContactForm {
    fields: Vec<Field>,
    status: Status,
    feedback: Option<Feedback>,
    submitter: Arc<dyn Submitter + Send + Sync>,
    outcome: Option<Receiver<Result<(), SubmitError>>>,
}

impl ContactForm {
    pub fn new(submitter: Arc<dyn Submitter + Send + Sync>) -> Self {
        Self {
            fields: vec![
                Field::new("name", "Name", FieldKind::Text, true, None),
                Field::new("email", "Email", FieldKind::Email, true, None),
                Field::new("phone", "Phone (optional)", FieldKind::Tel, false, None),
                Field::new("message", "Message", FieldKind::Multiline, true, Some(10)),
            ],
            status: Status::Idle,
            feedback: None,
            submitter,
            outcome: None,
        }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn sending(&self) -> bool {
        self.status == Status::Sending
    }

    pub fn submit_label(&self) -> &'static str {
        if self.sending() { "Sending..." } else { "Send Message" }
    }

    // --- Editing ---

    pub fn input(&mut self, index: usize, ch: char) {
        if let Some(field) = self.fields.get_mut(index) {
            if ch == '\n' && field.kind != FieldKind::Multiline {
                return;
            }
            field.value.push(ch);
            // Typing clears the field's error immediately
            field.error = None;
        }
    }

    pub fn backspace(&mut self, index: usize) {
        if let Some(field) = self.fields.get_mut(index) {
            field.value.pop();
            field.error = None;
        }
    }

    /// Leaving a field validates it in place.
    pub fn blur(&mut self, index: usize) {
        if let Some(field) = self.fields.get_mut(index) {
            field.validate();
        }
    }

    // --- Submission ---

    /// Validate the required fields and, if they pass, hand the payload to
    /// the submitter on a worker thread. Optional fields do not gate
    /// submission even when individually invalid.
    pub fn submit(&mut self) {
        if self.sending() {
            return;
        }

        let mut valid = true;
        for field in &mut self.fields {
            if field.required && !field.validate() {
                valid = false;
            }
        }
        if !valid {
            return;
        }

        let value = |name: &str| {
            self.fields
                .iter()
                .find(|f| f.name == name)
                .map(|f| f.value.clone())
                .unwrap_or_default()
        };
        let payload = Payload {
            name: value("name"),
            email: value("email"),
            phone: value("phone"),
            message: value("message"),
        };

        let (tx, rx) = mpsc::channel();
        let submitter = Arc::clone(&self.submitter);
        thread::spawn(move || {
            let _ = tx.send(submitter.submit(&payload));
        });

        self.status = Status::Sending;
        self.outcome = Some(rx);
    }

    /// Apply a delivery outcome: banner up, fields reset on success.
    pub fn finish(&mut self, result: Result<(), SubmitError>) {
        self.status = Status::Idle;
        self.outcome = None;
        match result {
            Ok(()) => {
                for field in &mut self.fields {
                    field.value.clear();
                    field.error = None;
                }
                self.feedback = Some(Feedback {
                    kind: FeedbackKind::Success,
                    text: MSG_SUCCESS,
                    ttl: Countdown::new(FEEDBACK_CLEAR_DELAY),
                });
            }
            Err(err) => {
                log::warn!("form submission failed: {err}");
                self.feedback = Some(Feedback {
                    kind: FeedbackKind::Error,
                    text: MSG_FAILURE,
                    ttl: Countdown::new(FEEDBACK_CLEAR_DELAY),
                });
            }
        }
    }

    pub fn tick(&mut self, dt: f32) {
        let delivered = self.outcome.as_ref().and_then(|rx| rx.try_recv().ok());
        if let Some(result) = delivered {
            self.finish(result);
        }
        if let Some(feedback) = &mut self.feedback {
            if feedback.ttl.tick(dt) {
                self.feedback = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::Duration;

    struct RecordingSubmitter {
        calls: Mutex<Vec<Payload>>,
        fail: bool,
    }

    impl RecordingSubmitter {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                fail,
            })
        }
    }

    impl Submitter for RecordingSubmitter {
        fn submit(&self, payload: &Payload) -> Result<(), SubmitError> {
            self.calls.lock().unwrap().push(payload.clone());
            if self.fail {
                Err(SubmitError::Status(reqwest::StatusCode::BAD_GATEWAY))
            } else {
                Ok(())
            }
        }
    }

    fn form_with(submitter: Arc<RecordingSubmitter>) -> ContactForm {
        ContactForm::new(submitter)
    }

    fn fill_valid(form: &mut ContactForm) {
        form.fields[0].value = "Ada Lovelace".into();
        form.fields[1].value = "ada@example.com".into();
        form.fields[3].value = "I would like a quote.".into();
    }

    // Field indices used throughout: 0 name, 1 email, 2 phone, 3 message
    impl ContactForm {
        fn field(&mut self, index: usize) -> &mut Field {
            &mut self.fields[index]
        }
    }

    #[test]
    fn required_field_rejects_blank_and_whitespace() {
        let mut form = form_with(RecordingSubmitter::new(false));
        form.blur(0);
        assert_eq!(form.fields()[0].error.as_deref(), Some(MSG_REQUIRED));
        form.field(0).value = "   ".into();
        form.blur(0);
        assert_eq!(form.fields()[0].error.as_deref(), Some(MSG_REQUIRED));
    }

    #[test]
    fn email_rule() {
        let mut form = form_with(RecordingSubmitter::new(false));
        for bad in ["plain", "a@b", "a b@c.com", "a@b c.com", "@x.com"] {
            form.field(1).value = bad.into();
            form.blur(1);
            assert_eq!(form.fields()[1].error.as_deref(), Some(MSG_EMAIL), "{bad}");
        }
        form.field(1).value = "ada@example.com".into();
        form.blur(1);
        assert_eq!(form.fields()[1].error, None);
    }

    #[test]
    fn phone_rule_strips_formatting() {
        let mut form = form_with(RecordingSubmitter::new(false));
        form.field(2).value = "+1 (555) 123-4567".into();
        form.blur(2);
        assert_eq!(form.fields()[2].error, None);

        form.field(2).value = "0123".into();
        form.blur(2);
        assert_eq!(form.fields()[2].error.as_deref(), Some(MSG_PHONE));

        // Optional: empty is fine
        form.field(2).value.clear();
        form.blur(2);
        assert_eq!(form.fields()[2].error, None);
    }

    #[test]
    fn min_length_rule() {
        let mut form = form_with(RecordingSubmitter::new(false));
        form.field(3).value = "too short".into();
        form.blur(3);
        assert_eq!(
            form.fields()[3].error.as_deref(),
            Some("Minimum 10 characters required")
        );
        form.field(3).value = "long enough now".into();
        form.blur(3);
        assert_eq!(form.fields()[3].error, None);
    }

    #[test]
    fn typing_clears_the_error() {
        let mut form = form_with(RecordingSubmitter::new(false));
        form.blur(0);
        assert!(form.fields()[0].error.is_some());
        form.input(0, 'A');
        assert!(form.fields()[0].error.is_none());
    }

    #[test]
    fn invalid_required_fields_block_submission() {
        let submitter = RecordingSubmitter::new(false);
        let mut form = form_with(Arc::clone(&submitter));
        form.submit();
        assert!(!form.sending());
        assert!(form.fields()[0].error.is_some());
        assert!(submitter.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn invalid_optional_phone_does_not_block_submission() {
        let submitter = RecordingSubmitter::new(false);
        let mut form = form_with(Arc::clone(&submitter));
        fill_valid(&mut form);
        form.field(2).value = "not-a-phone".into();
        form.submit();
        assert!(form.sending());
    }

    #[test]
    fn valid_submission_delivers_the_field_map() {
        let submitter = RecordingSubmitter::new(false);
        let mut form = form_with(Arc::clone(&submitter));
        fill_valid(&mut form);
        form.submit();
        assert!(form.sending());
        assert_eq!(form.submit_label(), "Sending...");

        // Worker thread delivery, observed through the normal poll path
        for _ in 0..200 {
            form.tick(0.0);
            if !form.sending() {
                break;
            }
            thread::sleep(Duration::from_millis(5));
        }
        assert!(!form.sending());

        let calls = submitter.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].name, "Ada Lovelace");
        assert_eq!(calls[0].email, "ada@example.com");
        assert_eq!(calls[0].phone, "");
        assert_eq!(calls[0].message, "I would like a quote.");
    }

    #[test]
    fn success_resets_fields_and_shows_banner() {
        let mut form = form_with(RecordingSubmitter::new(false));
        fill_valid(&mut form);
        form.finish(Ok(()));
        assert!(form.fields().iter().all(|f| f.value.is_empty()));
        let feedback = form.feedback().unwrap();
        assert_eq!(feedback.kind, FeedbackKind::Success);
        assert_eq!(feedback.text, MSG_SUCCESS);
    }

    #[test]
    fn failure_keeps_values_and_shows_banner() {
        let mut form = form_with(RecordingSubmitter::new(false));
        fill_valid(&mut form);
        form.finish(Err(SubmitError::Status(reqwest::StatusCode::BAD_GATEWAY)));
        assert_eq!(form.fields()[0].value, "Ada Lovelace");
        assert_eq!(form.feedback().unwrap().kind, FeedbackKind::Error);
    }

    #[test]
    fn banner_clears_after_the_delay() {
        let mut form = form_with(RecordingSubmitter::new(false));
        form.finish(Ok(()));
        form.tick(FEEDBACK_CLEAR_DELAY - 0.1);
        assert!(form.feedback().is_some());
        form.tick(0.2);
        assert!(form.feedback().is_none());
    }

    #[test]
    fn submit_while_sending_is_ignored() {
        let submitter = RecordingSubmitter::new(false);
        let mut form = form_with(Arc::clone(&submitter));
        fill_valid(&mut form);
        form.submit();
        form.submit();
        for _ in 0..200 {
            form.tick(0.0);
            if !form.sending() {
                break;
            }
            thread::sleep(Duration::from_millis(5));
        }
        assert_eq!(submitter.calls.lock().unwrap().len(), 1);
    }
}
