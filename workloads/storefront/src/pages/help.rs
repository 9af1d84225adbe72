//! Help page: breadcrumbs, hero, common questions, contact form and channels.

use leveling_deferred::{Component, HostEvent, RenderContext, SectionList, Shared, StaticHtml};

use super::PageForm;
use crate::sections::{
    breadcrumbs_from_path, render_breadcrumbs, render_contact_channels, render_help_topics, ContactForm,
    Header,
};

/// Body of the help page around the contact form.
pub struct HelpContent {
    form: Shared<ContactForm>,
}

impl HelpContent {
    pub fn new(form: Shared<ContactForm>) -> Self {
        Self { form }
    }
}

impl Component for HelpContent {
    fn render(&self) -> String {
        format!(
            r#"<div class="container py-12 md:py-20"><div class="grid grid-cols-1 lg:grid-cols-2 gap-12">{topics}<div><h2 class="text-2xl md:text-3xl font-bold text-black mb-6">Contact Us</h2><p class="text-gray-600 mb-6">Couldn't find what you're looking for? Send us a message and we'll get back to you within 24 hours.</p>{form}</div></div>{channels}</div>"#,
            topics = render_help_topics(),
            form = self.form.render(),
            channels = render_contact_channels()
        )
    }

    fn handle(&mut self, event: &HostEvent, cx: &RenderContext<'_>) -> bool {
        self.form.handle(event, cx)
    }
}

pub(super) fn mount(sections: &mut SectionList, header: &Shared<Header>, path: &str) -> PageForm {
    sections.push_eager("header", header.clone());
    sections.push_eager(
        "breadcrumbs",
        StaticHtml::new(format!(
            r#"<div class="bg-gray-50 py-4"><div class="container">{}</div></div>"#,
            render_breadcrumbs(&breadcrumbs_from_path(path))
        )),
    );
    sections.push_eager(
        "help-hero",
        StaticHtml::new(
            r#"<div class="bg-black text-white py-12 md:py-20"><div class="container text-center"><h1 class="text-3xl md:text-4xl lg:text-5xl font-bold mb-4">How Can We Help?</h1><p class="text-gray-300 text-lg">We're here to support you. Get in touch with our team.</p></div></div>"#,
        ),
    );

    let form = Shared::new(ContactForm::new());
    sections.push_eager("help", HelpContent::new(form.clone()));
    PageForm::Contact(form)
}
