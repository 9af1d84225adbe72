//! Form definitions, state and validation.
//!
//! Validation only enforces required fields. Submissions are logged and
//! nothing is transmitted. Header modals clear their form after a submit;
//! page forms keep what was typed.

use std::collections::BTreeMap;

use leveling_observability::StructuredLogger;
use leveling_streaming::escape_html;
use serde::Serialize;

/// Errors raised by form handling.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Unknown field '{field}' for {form} form")]
    UnknownField { form: &'static str, field: String },

    #[error("Form '{0}' is not on this page")]
    NotOnPage(String),

    #[error("Form '{0}' was just submitted and has not reset yet")]
    AwaitingReset(String),

    #[error("Unknown form: {0}")]
    UnknownForm(String),
}

/// Which form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    Login,
    Signup,
    Help,
}

impl FormKind {
    /// Parse a form name.
    pub fn parse(name: &str) -> Result<Self, FormError> {
        match name {
            "login" => Ok(Self::Login),
            "signup" | "sign-up" => Ok(Self::Signup),
            "help" | "contact" => Ok(Self::Help),
            other => Err(FormError::UnknownForm(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Signup => "signup",
            Self::Help => "help",
        }
    }

    /// Fields in display order.
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            Self::Login => LOGIN_FIELDS,
            Self::Signup => SIGNUP_FIELDS,
            Self::Help => HELP_FIELDS,
        }
    }

    /// Fields of the header modal variant. The sign-up modal shows the
    /// terms as text instead of a checkbox.
    pub fn modal_fields(&self) -> &'static [FieldSpec] {
        match self {
            Self::Signup => MODAL_SIGNUP_FIELDS,
            other => other.fields(),
        }
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields().iter().find(|f| f.name == name)
    }

    fn submit_label(&self) -> &'static str {
        match self {
            Self::Login => "Sign In",
            Self::Signup => "Create Account",
            Self::Help => "Send Message",
        }
    }
}

/// Input control for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Password,
    Date,
    Checkbox,
    TextArea { rows: u32 },
    /// Options as (value, label); the first is the empty prompt.
    Select(&'static [(&'static str, &'static str)]),
}

impl InputKind {
    fn input_type(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::Date => "date",
            Self::Checkbox => "checkbox",
            _ => "text",
        }
    }
}

/// Static description of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub input: InputKind,
    pub placeholder: &'static str,
    pub required: bool,
}

impl FieldSpec {
    const fn new(name: &'static str, label: &'static str, input: InputKind, placeholder: &'static str) -> Self {
        Self {
            name,
            label,
            input,
            placeholder,
            required: true,
        }
    }

    /// Whether the value is withheld from logs.
    pub fn is_secret(&self) -> bool {
        matches!(self.input, InputKind::Password)
    }
}

const LOGIN_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("email", "Email Address", InputKind::Email, "name@example.com"),
    FieldSpec::new("password", "Password", InputKind::Password, "Enter your password"),
];

const SIGNUP_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("firstName", "First Name", InputKind::Text, "John"),
    FieldSpec::new("lastName", "Last Name", InputKind::Text, "Doe"),
    FieldSpec::new("email", "Email Address", InputKind::Email, "name@example.com"),
    FieldSpec::new("password", "Password", InputKind::Password, "At least 8 characters"),
    FieldSpec::new(
        "confirmPassword",
        "Confirm Password",
        InputKind::Password,
        "Confirm your password",
    ),
    FieldSpec::new("birthDate", "Date of Birth", InputKind::Date, ""),
    FieldSpec::new(
        "terms",
        "By entering this site, you agree to the Terms & Conditions and Privacy Policy",
        InputKind::Checkbox,
        "",
    ),
];

const MODAL_SIGNUP_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("firstName", "First Name", InputKind::Text, "John"),
    FieldSpec::new("lastName", "Last Name", InputKind::Text, "Doe"),
    FieldSpec::new("email", "Email Address", InputKind::Email, "name@example.com"),
    FieldSpec::new("password", "Password", InputKind::Password, "At least 8 characters"),
    FieldSpec::new(
        "confirmPassword",
        "Confirm Password",
        InputKind::Password,
        "Confirm your password",
    ),
    FieldSpec::new("birthDate", "Birth Date", InputKind::Date, ""),
];

/// Help form subjects as (value, label).
pub const SUBJECT_OPTIONS: &[(&str, &str)] = &[
    ("", "Select a subject"),
    ("shipping", "Shipping & Delivery"),
    ("returns", "Returns & Exchanges"),
    ("account", "Account Issues"),
    ("product", "Product Quality"),
    ("sizing", "Sizing Help"),
    ("other", "Other"),
];

const HELP_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("name", "Full Name", InputKind::Text, "John Doe"),
    FieldSpec::new("email", "Email Address", InputKind::Email, "name@example.com"),
    FieldSpec::new("subject", "Subject", InputKind::Select(SUBJECT_OPTIONS), ""),
    FieldSpec::new(
        "message",
        "Message",
        InputKind::TextArea { rows: 5 },
        "Tell us more about your inquiry...",
    ),
];

const INPUT_CLASS: &str = "w-full px-4 py-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-black focus:border-transparent";

/// Current values of a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    kind: FormKind,
    fields: &'static [FieldSpec],
    values: BTreeMap<&'static str, String>,
}

impl FormState {
    /// An empty form.
    pub fn new(kind: FormKind) -> Self {
        Self::with_fields(kind, kind.fields())
    }

    /// An empty form with the header modal's fields.
    pub fn for_modal(kind: FormKind) -> Self {
        Self::with_fields(kind, kind.modal_fields())
    }

    fn with_fields(kind: FormKind, fields: &'static [FieldSpec]) -> Self {
        Self {
            kind,
            fields,
            values: BTreeMap::new(),
        }
    }

    /// Fields in display order.
    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    /// Set a field value.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let field = self
            .fields
            .iter()
            .find(|f| f.name == name)
            .ok_or_else(|| FormError::UnknownField {
            form: self.kind.name(),
            field: name.to_string(),
        })?;
        self.values.insert(field.name, value.into());
        Ok(())
    }

    /// Get a field value, empty when unset.
    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    /// Whether every field is empty.
    pub fn is_empty(&self) -> bool {
        self.values.values().all(|v| v.is_empty())
    }

    /// Required fields that are still blank.
    pub fn missing(&self) -> Vec<&'static FieldSpec> {
        self.fields
            .iter()
            .filter(|f| f.required && self.get(f.name).trim().is_empty())
            .collect()
    }

    /// Check required fields.
    pub fn validate(&self) -> Result<(), FormError> {
        match self.missing().first() {
            Some(field) => Err(FormError::MissingField(field.label.to_string())),
            None => Ok(()),
        }
    }

    /// Clear every value.
    pub fn reset(&mut self) {
        self.values.clear();
    }

    /// Validate, log the submission, and return it. State is left untouched.
    pub fn submit(&self, logger: &StructuredLogger) -> Result<Submission, FormError> {
        self.validate()?;
        let submission = Submission::from_state(self);
        logger
            .info_builder("form submitted")
            .field("form", self.kind.name())
            .field_json("values", &submission.values)
            .emit();
        Ok(submission)
    }

    /// Render the fields and the submit button.
    pub fn render_fields(&self) -> String {
        let mut html = self.render_inputs();
        html.push_str(&self.render_submit());
        html
    }

    /// Render the fields alone.
    pub fn render_inputs(&self) -> String {
        self.fields.iter().map(|f| self.render_field(f)).collect()
    }

    pub fn render_submit(&self) -> String {
        format!(
            r#"<button type="submit" class="w-full bg-black text-white py-3 rounded-lg font-medium hover:bg-gray-800 transition duration-300 cursor-pointer">{}</button>"#,
            self.kind.submit_label()
        )
    }

    fn render_field(&self, field: &FieldSpec) -> String {
        let value = escape_html(self.get(field.name));
        let required = if field.required { " required" } else { "" };
        let label = format!(
            r#"<label for="{name}" class="block text-sm font-medium text-black mb-2">{label}</label>"#,
            name = field.name,
            label = escape_html(field.label)
        );

        match field.input {
            InputKind::Checkbox => format!(
                r#"<div class="flex items-start gap-3"><input type="checkbox" id="{name}" name="{name}" class="mt-1"{checked}{required}><label for="{name}" class="text-xs text-gray-600">{label}</label></div>"#,
                name = field.name,
                checked = if value.is_empty() { "" } else { " checked" },
                required = required,
                label = escape_html(field.label)
            ),
            InputKind::TextArea { rows } => format!(
                r#"<div>{label}<textarea id="{name}" name="{name}" rows="{rows}" placeholder="{placeholder}" class="{class} resize-none"{required}>{value}</textarea></div>"#,
                label = label,
                name = field.name,
                rows = rows,
                placeholder = escape_html(field.placeholder),
                class = INPUT_CLASS,
                required = required,
                value = value
            ),
            InputKind::Select(options) => {
                let current = self.get(field.name);
                let options: String = options
                    .iter()
                    .map(|(v, l)| {
                        format!(
                            r#"<option value="{}"{}>{}</option>"#,
                            v,
                            if *v == current { " selected" } else { "" },
                            escape_html(l)
                        )
                    })
                    .collect();
                format!(
                    r#"<div>{label}<select id="{name}" name="{name}" class="{class}"{required}>{options}</select></div>"#,
                    label = label,
                    name = field.name,
                    class = INPUT_CLASS,
                    required = required,
                    options = options
                )
            }
            input => format!(
                r#"<div>{label}<input type="{ty}" id="{name}" name="{name}" value="{value}" placeholder="{placeholder}" class="{class}"{required}></div>"#,
                label = label,
                ty = input.input_type(),
                name = field.name,
                value = if field.is_secret() { String::new() } else { value },
                placeholder = escape_html(field.placeholder),
                class = INPUT_CLASS,
                required = required
            ),
        }
    }
}

/// A validated submission. Secret values are masked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub form: FormKind,
    pub values: BTreeMap<&'static str, String>,
}

impl Submission {
    fn from_state(state: &FormState) -> Self {
        let values = state
            .fields
            .iter()
            .map(|f| {
                let value = if f.is_secret() {
                    "********".to_string()
                } else {
                    state.get(f.name).to_string()
                };
                (f.name, value)
            })
            .collect();
        Self {
            form: state.kind,
            values,
        }
    }
}

#[cfg(test)]
mod tests {
    use leveling_observability::{LogCapture, SessionId};

    use super::*;

    fn logger(capture: &LogCapture) -> StructuredLogger {
        StructuredLogger::new(SessionId::from_string("test")).with_capture(capture.clone())
    }

    fn filled_help() -> FormState {
        let mut form = FormState::new(FormKind::Help);
        form.set("name", "Jane Doe").unwrap();
        form.set("email", "jane@example.com").unwrap();
        form.set("subject", "returns").unwrap();
        form.set("message", "Wrong size").unwrap();
        form
    }

    #[test]
    fn test_missing_required_field_rejected() {
        let mut form = FormState::new(FormKind::Login);
        form.set("email", "jane@example.com").unwrap();

        assert_eq!(
            form.validate(),
            Err(FormError::MissingField("Password".to_string()))
        );
    }

    #[test]
    fn test_whitespace_counts_as_missing() {
        let mut form = filled_help();
        form.set("message", "   ").unwrap();

        assert_eq!(form.missing().len(), 1);
        assert_eq!(form.missing()[0].name, "message");
    }

    #[test]
    fn test_unknown_field() {
        let mut form = FormState::new(FormKind::Login);
        let err = form.set("username", "jane").unwrap_err();

        assert!(matches!(err, FormError::UnknownField { form: "login", .. }));
    }

    #[test]
    fn test_submit_logs_and_masks_passwords() {
        let capture = LogCapture::new();
        let mut form = FormState::new(FormKind::Login);
        form.set("email", "jane@example.com").unwrap();
        form.set("password", "hunter22").unwrap();

        let submission = form.submit(&logger(&capture)).unwrap();

        assert_eq!(submission.values["password"], "********");
        let entries = capture.with_message("form submitted");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].field("form"), Some(&serde_json::json!("login")));
        assert!(!entries[0].to_json().contains("hunter22"));
    }

    #[test]
    fn test_rejected_submit_not_logged() {
        let capture = LogCapture::new();
        let form = FormState::new(FormKind::Signup);

        assert!(form.submit(&logger(&capture)).is_err());
        assert!(capture.entries().is_empty());
    }

    #[test]
    fn test_reset() {
        let mut form = filled_help();
        form.reset();

        assert!(form.is_empty());
        assert_eq!(form.get("name"), "");
    }

    #[test]
    fn test_render_fields() {
        let form = filled_help();
        let html = form.render_fields();

        assert!(html.contains(r#"value="Jane Doe""#));
        assert!(html.contains(r#"<option value="returns" selected>"#));
        assert!(html.contains(">Wrong size</textarea>"));
        assert!(html.contains("Send Message"));
        assert_eq!(html.matches(" required").count(), 4);
    }

    #[test]
    fn test_password_never_rendered() {
        let mut form = FormState::new(FormKind::Login);
        form.set("password", "hunter22").unwrap();

        assert!(!form.render_fields().contains("hunter22"));
    }

    #[test]
    fn test_signup_terms_checkbox() {
        let mut form = FormState::new(FormKind::Signup);
        assert!(!form.render_fields().contains(" checked"));

        form.set("terms", "on").unwrap();
        assert!(form.render_fields().contains(" checked"));
    }

    #[test]
    fn test_modal_signup_has_no_terms_checkbox() {
        let mut form = FormState::for_modal(FormKind::Signup);

        assert_eq!(form.fields().len(), 6);
        assert!(form.set("terms", "on").is_err());
        assert!(!form.render_fields().contains(r#"type="checkbox""#));
        assert!(form.render_fields().contains("Birth Date"));
        assert_eq!(FormKind::Login.modal_fields(), FormKind::Login.fields());
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!(FormKind::parse("signup"), Ok(FormKind::Signup));
        assert!(FormKind::parse("checkout").is_err());
    }
}
