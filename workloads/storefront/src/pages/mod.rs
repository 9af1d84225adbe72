//! Page assembly.
//!
//! Each page is an ordered `SectionList`. Eager sections render at mount;
//! deferred sections show a fixed-height placeholder until their module is
//! ready. Pages keep handles to the pieces callers act on directly.

mod account;
mod help;
mod home;
mod not_found;

use leveling_deferred::{
    factory, Component, DeferredSection, HostEvent, RenderContext, SectionList, SectionPlaceholder,
    Shared, StaticHtml,
};
use leveling_observability::StructuredLogger;
use leveling_streaming::{swap_runtime_script, HeadContent, Shell};

use crate::forms::{FormError, FormKind, FormState, Submission};
use crate::router::{PageKind, Route};
use crate::sections::{render_footer, AccountForm, ContactForm, Header, ScrollToTop};

pub use help::HelpContent;

const DESCRIPTION: &str = "Shop the latest Leveling products";
const STYLESHEET: &str = "/styles/globals.css";

/// The form a page hosts in its body.
#[derive(Clone)]
pub enum PageForm {
    Account(Shared<AccountForm>),
    Contact(Shared<ContactForm>),
}

/// A mounted page.
pub struct Page {
    route: Route,
    sections: SectionList,
    header: Shared<Header>,
    form: Option<PageForm>,
    scroll_top: ScrollToTop,
}

impl Page {
    /// Mount the page for a route. `width` is the viewport width used to lay
    /// out observed regions.
    pub fn mount(cx: &RenderContext<'_>, route: Route, width: f64) -> Self {
        let header = Shared::new(Header::new());
        let mut sections = SectionList::new();
        let form = match route.kind {
            PageKind::Home => {
                home::mount(cx, &mut sections, &header, width);
                None
            }
            PageKind::Login => Some(account::mount(cx, &mut sections, &header, FormKind::Login)),
            PageKind::Signup => Some(account::mount(cx, &mut sections, &header, FormKind::Signup)),
            PageKind::Help => Some(help::mount(&mut sections, &header, &route.path)),
            PageKind::NotFound => {
                not_found::mount(&mut sections, &header, &route.path);
                None
            }
        };
        sections.push_deferred(footer(cx));
        tracing::debug!(page = route.kind.name(), sections = ?sections.names(), "page mounted");

        Self {
            route,
            sections,
            header,
            form,
            scroll_top: ScrollToTop::new(),
        }
    }

    pub fn kind(&self) -> PageKind {
        self.route.kind
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn sections(&self) -> &SectionList {
        &self.sections
    }

    pub fn sections_mut(&mut self) -> &mut SectionList {
        &mut self.sections
    }

    /// Handle to the site header.
    pub fn header(&self) -> Shared<Header> {
        self.header.clone()
    }

    pub fn form(&self) -> Option<&PageForm> {
        self.form.as_ref()
    }

    pub fn scroll_top(&self) -> &ScrollToTop {
        &self.scroll_top
    }

    /// Document shell for the page.
    pub fn shell(&self) -> Shell {
        let head = HeadContent::new(self.route.title.as_str())
            .with_meta("viewport", "width=device-width, initial-scale=1")
            .with_meta("description", DESCRIPTION)
            .with_stylesheet(STYLESHEET)
            .with_script(swap_runtime_script());
        Shell::new(head).with_body_class("antialiased bg-white text-black")
    }

    /// Update scroll-dependent state. Returns `true` if the page changed.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        self.scroll_top.on_scroll(scroll_y)
    }

    /// Fill and submit a form.
    ///
    /// The page's own form is used when it matches `kind`. Login and sign-up
    /// otherwise go through the header modal, which is opened first.
    pub fn submit(
        &mut self,
        kind: FormKind,
        values: &[(String, String)],
        cx: &RenderContext<'_>,
        logger: &StructuredLogger,
    ) -> Result<Submission, FormError> {
        match (&self.form, kind) {
            (Some(PageForm::Account(account)), _) if account.borrow().form().kind() == kind => {
                let mut account = account.borrow_mut();
                fill(account.form_mut(), values)?;
                account.submit(logger)
            }
            (Some(PageForm::Contact(contact)), FormKind::Help) => {
                let mut contact = contact.borrow_mut();
                fill(contact.form_mut(), values)?;
                contact.submit(cx, logger)
            }
            (_, FormKind::Login | FormKind::Signup) => {
                let mut header = self.header.borrow_mut();
                let modals = header.modals_mut();
                match kind {
                    FormKind::Login => modals.open_login(),
                    _ => modals.open_signup(),
                }
                if let Some(form) = modals.form_mut(kind) {
                    fill(form, values)?;
                }
                modals.submit(kind, logger)
            }
            (_, FormKind::Help) => Err(FormError::NotOnPage(kind.name().to_string())),
        }
    }
}

impl Component for Page {
    fn render(&self) -> String {
        let mut html = self.sections.render();
        html.push_str(&self.scroll_top.render());
        html
    }

    fn handle(&mut self, event: &HostEvent, cx: &RenderContext<'_>) -> bool {
        self.sections.handle(event, cx)
    }
}

fn fill(form: &mut FormState, values: &[(String, String)]) -> Result<(), FormError> {
    for (name, value) in values {
        form.set(name, value.as_str())?;
    }
    Ok(())
}

fn footer(cx: &RenderContext<'_>) -> DeferredSection {
    DeferredSection::mount(
        cx,
        "footer",
        SectionPlaceholder::new(cx.config.section_heights.footer, "h-40 bg-gray-100"),
        factory(|_| StaticHtml::new(render_footer())),
    )
}

/// Header mounted as a deferred section, used by the account pages.
fn deferred_header(cx: &RenderContext<'_>, header: &Shared<Header>) -> DeferredSection {
    let header = header.clone();
    DeferredSection::mount(
        cx,
        "header",
        SectionPlaceholder::new(cx.config.section_heights.header, "h-20 bg-gray-100"),
        factory(move |_| header),
    )
}
