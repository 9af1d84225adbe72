//! Login and sign-up modals opened from the header.
//!
//! The two modals open and close independently. Submitting a modal logs the
//! submission, clears its form and closes it. The sign-up modal states the
//! terms as text; there is no checkbox to tick.

use leveling_observability::StructuredLogger;

use crate::forms::{FormError, FormKind, FormState, Submission};

const TERMS_NOTICE: &str = r#"<div class="pt-4 text-center"><p class="text-xs text-gray-600">By entering this site, you agree to the <a href="/terms" class="underline hover:text-black font-medium cursor-pointer">Terms &amp; Conditions</a> and <a href="/privacy" class="underline hover:text-black font-medium cursor-pointer">Privacy Policy</a></p></div>"#;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Modal {
    open: bool,
    form: FormState,
}

impl Modal {
    fn new(kind: FormKind) -> Self {
        Self {
            open: false,
            form: FormState::for_modal(kind),
        }
    }

    fn render_form(&self) -> String {
        let mut html = self.form.render_inputs();
        if self.form.kind() == FormKind::Signup {
            html.push_str(TERMS_NOTICE);
        }
        html.push_str(&self.form.render_submit());
        html
    }

    fn render(&self, title: &str, subtitle: &str) -> String {
        if !self.open {
            return String::new();
        }
        format!(
            r#"<div class="fixed inset-0 bg-black bg-opacity-50 z-50 flex items-center justify-center p-4" data-modal="{kind}" role="dialog" aria-modal="true"><div class="bg-white rounded-lg max-w-md w-full p-6 md:p-8 relative max-h-[90vh] overflow-y-auto"><button class="absolute top-4 right-4 text-gray-500 hover:text-black text-2xl cursor-pointer" aria-label="Close">&times;</button><div class="text-center mb-6"><h2 class="text-2xl md:text-3xl font-bold text-black mb-2">{title}</h2><p class="text-sm text-gray-600">{subtitle}</p></div><form class="space-y-4">{fields}</form></div></div>"#,
            kind = self.form.kind().name(),
            title = title,
            subtitle = subtitle,
            fields = self.render_form()
        )
    }
}

/// The header's login and sign-up modals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthModals {
    login: Modal,
    signup: Modal,
}

impl Default for AuthModals {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthModals {
    pub fn new() -> Self {
        Self {
            login: Modal::new(FormKind::Login),
            signup: Modal::new(FormKind::Signup),
        }
    }

    pub fn open_login(&mut self) {
        self.login.open = true;
    }

    pub fn open_signup(&mut self) {
        self.signup.open = true;
    }

    pub fn close_login(&mut self) {
        self.login.open = false;
    }

    pub fn close_signup(&mut self) {
        self.signup.open = false;
    }

    pub fn is_login_open(&self) -> bool {
        self.login.open
    }

    pub fn is_signup_open(&self) -> bool {
        self.signup.open
    }

    /// The form behind a modal.
    pub fn form(&self, kind: FormKind) -> Option<&FormState> {
        self.modal(kind).map(|m| &m.form)
    }

    /// Mutable access to the form behind a modal.
    pub fn form_mut(&mut self, kind: FormKind) -> Option<&mut FormState> {
        self.modal_mut(kind).map(|m| &mut m.form)
    }

    /// Submit an open modal. On success the form is cleared and the modal
    /// closed; on a validation error both stay as they are.
    pub fn submit(&mut self, kind: FormKind, logger: &StructuredLogger) -> Result<Submission, FormError> {
        let modal = self
            .modal_mut(kind)
            .ok_or_else(|| FormError::NotOnPage(kind.name().to_string()))?;
        if !modal.open {
            return Err(FormError::NotOnPage(kind.name().to_string()));
        }

        let submission = modal.form.submit(logger)?;
        modal.form.reset();
        modal.open = false;
        Ok(submission)
    }

    pub fn render(&self) -> String {
        let mut html = self
            .login
            .render("Your Account", "Sign in to access your Leveling account");
        html.push_str(
            &self
                .signup
                .render("Create Account", "Join Leveling to explore exclusive offers"),
        );
        html
    }

    fn modal(&self, kind: FormKind) -> Option<&Modal> {
        match kind {
            FormKind::Login => Some(&self.login),
            FormKind::Signup => Some(&self.signup),
            FormKind::Help => None,
        }
    }

    fn modal_mut(&mut self, kind: FormKind) -> Option<&mut Modal> {
        match kind {
            FormKind::Login => Some(&mut self.login),
            FormKind::Signup => Some(&mut self.signup),
            FormKind::Help => None,
        }
    }
}
