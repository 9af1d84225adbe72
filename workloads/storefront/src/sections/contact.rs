//! Help page content: common questions, the contact form and support channels.

use leveling_core::TimerId;
use leveling_deferred::{Component, HostEvent, Lease, RenderContext, TimerHost};
use leveling_observability::StructuredLogger;
use leveling_streaming::escape_html;

use crate::data::{CONTACT_CHANNELS, HELP_TOPICS};
use crate::forms::{FormError, FormKind, FormState, Submission};

/// Help page contact form.
///
/// A successful submission swaps the form for a confirmation and starts a
/// reset timer. When the timer fires the form comes back empty. Dropping the
/// form cancels a pending reset.
#[derive(Debug)]
pub struct ContactForm {
    form: FormState,
    reset: Option<Lease<TimerId>>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            form: FormState::new(FormKind::Help),
            reset: None,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    /// Whether the confirmation is showing.
    pub fn is_submitted(&self) -> bool {
        self.reset.is_some()
    }

    /// Submit the form. Rejected while the confirmation is showing.
    pub fn submit(&mut self, cx: &RenderContext<'_>, logger: &StructuredLogger) -> Result<Submission, FormError> {
        if self.is_submitted() {
            return Err(FormError::AwaitingReset(FormKind::Help.name().to_string()));
        }
        let submission = self.form.submit(logger)?;
        self.reset = Some(cx.host.start_timer(cx.config.help_reset_delay()));
        Ok(submission)
    }
}

impl Component for ContactForm {
    fn render(&self) -> String {
        if self.is_submitted() {
            return r#"<div class="bg-green-50 border-2 border-green-500 rounded-lg p-6 text-center" data-form="help" data-submitted="true"><h3 class="text-lg font-bold text-green-700 mb-2">Message Sent!</h3><p class="text-green-600">Thank you for reaching out. We'll contact you soon.</p></div>"#
                .to_string();
        }
        format!(
            r#"<form class="space-y-4" data-form="help">{}</form>"#,
            self.form.render_fields()
        )
    }

    fn handle(&mut self, event: &HostEvent, _cx: &RenderContext<'_>) -> bool {
        let HostEvent::TimerFired { timer } = event else {
            return false;
        };
        if self.reset.as_ref().map(Lease::id) != Some(*timer) {
            return false;
        }
        self.reset = None;
        self.form.reset();
        tracing::debug!("contact form reset");
        true
    }
}

/// Render the "Common Questions" topic list.
pub fn render_help_topics() -> String {
    let topics: String = HELP_TOPICS
        .iter()
        .map(|topic| {
            format!(
                r#"<div class="p-4 border border-gray-200 rounded-lg hover:border-black transition cursor-pointer"><h3 class="font-semibold text-black mb-2">{}</h3><p class="text-sm text-gray-600">{}</p></div>"#,
                escape_html(topic.title),
                escape_html(topic.description)
            )
        })
        .collect();
    format!(
        r#"<div><h2 class="text-2xl md:text-3xl font-bold text-black mb-6">Common Questions</h2><div class="space-y-4">{}</div></div>"#,
        topics
    )
}

/// Render "Other Ways to Reach Us".
pub fn render_contact_channels() -> String {
    let channels: String = CONTACT_CHANNELS
        .iter()
        .map(|channel| {
            format!(
                r#"<div class="text-center p-6 bg-gray-50 rounded-lg"><div class="text-4xl mb-4">{}</div><h4 class="font-bold text-black mb-2">{}</h4><p class="text-gray-600 text-sm whitespace-pre-line">{}</p></div>"#,
                channel.icon,
                escape_html(channel.title),
                escape_html(&channel.lines.join("\n"))
            )
        })
        .collect();
    format!(
        r#"<div class="mt-16 pt-12 border-t border-gray-200"><h3 class="text-2xl font-bold text-black mb-8 text-center">Other Ways to Reach Us</h3><div class="grid grid-cols-1 md:grid-cols-3 gap-8">{}</div></div>"#,
        channels
    )
}
