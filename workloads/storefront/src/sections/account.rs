//! Login and sign-up page bodies.

use leveling_deferred::Component;
use leveling_observability::StructuredLogger;

use crate::forms::{FormError, FormKind, FormState, Submission};

/// The account form on the login or sign-up page. Submitting logs the
/// values; the fields keep what was typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountForm {
    form: FormState,
    submissions: usize,
}

impl AccountForm {
    pub fn new(kind: FormKind) -> Self {
        Self {
            form: FormState::new(kind),
            submissions: 0,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    /// Successful submissions so far.
    pub fn submissions(&self) -> usize {
        self.submissions
    }

    pub fn submit(&mut self, logger: &StructuredLogger) -> Result<Submission, FormError> {
        let submission = self.form.submit(logger)?;
        self.submissions += 1;
        Ok(submission)
    }

    fn copy(&self) -> (&'static str, &'static str, String) {
        match self.form.kind() {
            FormKind::Signup => (
                "Create Account",
                "Join Leveling to explore exclusive offers",
                alternate("Already have an account?", "/login", "Sign In"),
            ),
            _ => (
                "Your Account",
                "Sign in to access your Leveling account",
                format!(
                    r#"{}<div class="mt-8 pt-6 border-t border-gray-200 text-center"><p class="text-xs text-gray-500 mb-4">By entering this site, you agree to the Terms &amp; Conditions and Privacy Policy</p><a href="/help" class="text-sm text-gray-600 hover:text-black cursor-pointer">Need help? Contact us</a></div>"#,
                    alternate("Don't have an account?", "/signup", "Create Account")
                ),
            ),
        }
    }
}

fn alternate(prompt: &str, href: &str, label: &str) -> String {
    format!(
        r#"<div class="text-center"><p class="text-gray-600 mb-4">{}</p><a href="{}" class="w-full block py-3 border-2 border-black text-black font-medium rounded-lg hover:bg-black hover:text-white transition duration-300 cursor-pointer text-center">{}</a></div>"#,
        prompt, href, label
    )
}

impl Component for AccountForm {
    fn render(&self) -> String {
        let (title, subtitle, footer) = self.copy();
        format!(
            r#"<div class="container py-12 md:py-20"><div class="max-w-md mx-auto"><div class="text-center mb-8"><h1 class="text-3xl md:text-4xl font-bold text-black mb-2">{title}</h1><p class="text-gray-600">{subtitle}</p></div><form class="space-y-4 mb-8" data-form="{kind}">{fields}</form>{footer}</div></div>"#,
            title = title,
            subtitle = subtitle,
            kind = self.form.kind().name(),
            fields = self.form.render_fields(),
            footer = footer
        )
    }
}
