//! Deferred page sections.
//!
//! A deferred section renders a fixed-height placeholder until the host has
//! loaded the module behind it, then mounts the real section in its place.
//! The swap is load-time driven, independent of scrolling, and happens once.

use leveling_core::{ElementId, LifecyclePhase, ModuleId};
use leveling_streaming::escape_html;

use crate::component::{Component, ComponentFactory};
use crate::host::{Host, HostEvent, Lease, ModuleHost, RenderContext};

/// Placeholder shown while a section's module loads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionPlaceholder {
    /// Height in pixels.
    pub height: u32,
    /// Utility classes, including the height class.
    pub class: String,
}

impl SectionPlaceholder {
    pub fn new(height: u32, class: impl Into<String>) -> Self {
        Self {
            height,
            class: class.into(),
        }
    }

    /// Render the placeholder for a named section.
    pub fn render(&self, section: &str) -> String {
        format!(
            r#"<div class="{} animate-pulse" style="min-height: {}px" data-section="{}" aria-busy="true"></div>"#,
            escape_html(&self.class),
            self.height,
            escape_html(section)
        )
    }
}

/// A section mounted once its module is ready.
pub struct DeferredSection {
    name: String,
    element: ElementId,
    placeholder: SectionPlaceholder,
    module: Option<Lease<ModuleId>>,
    factory: Option<ComponentFactory>,
    content: Option<Box<dyn Component>>,
}

impl DeferredSection {
    /// Mount the placeholder and request the section's module.
    pub fn mount(
        cx: &RenderContext<'_>,
        name: impl Into<String>,
        placeholder: SectionPlaceholder,
        factory: ComponentFactory,
    ) -> Self {
        let name = name.into();
        let element = cx.host.allocate_element();
        let module = cx.host.request_module(&name);
        cx.report(element, LifecyclePhase::Mounted);
        tracing::debug!(section = %name, %element, "deferred section mounted");

        Self {
            name,
            element,
            placeholder,
            module: Some(module),
            factory: Some(factory),
            content: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn element(&self) -> ElementId {
        self.element
    }

    /// Whether the real section has replaced the placeholder.
    pub fn is_swapped(&self) -> bool {
        self.content.is_some()
    }

    /// Render the placeholder regardless of state.
    pub fn render_placeholder(&self) -> String {
        self.placeholder.render(&self.name)
    }

    fn awaits(&self, module: ModuleId) -> bool {
        self.module.as_ref().map(Lease::id) == Some(module)
    }
}

impl Component for DeferredSection {
    fn render(&self) -> String {
        match &self.content {
            Some(section) => section.render(),
            None => self.render_placeholder(),
        }
    }

    fn handle(&mut self, event: &HostEvent, cx: &RenderContext<'_>) -> bool {
        if let HostEvent::ModuleReady { module } = event {
            if self.awaits(*module) {
                self.module = None;
                if let Some(factory) = self.factory.take() {
                    self.content = Some(factory(cx));
                }
                cx.report(self.element, LifecyclePhase::Swapped(self.name.clone()));
                return true;
            }
        }

        match self.content.as_mut() {
            Some(section) => section.handle(event, cx),
            None => false,
        }
    }
}

/// Status of a section in a `SectionList`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionStatus {
    /// Rendered at mount.
    Eager,
    /// Placeholder showing, module not yet ready.
    Pending,
    /// Swapped to the real section.
    Mounted,
}

impl SectionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Eager => "eager",
            Self::Pending => "pending",
            Self::Mounted => "mounted",
        }
    }
}

enum Entry {
    Eager {
        name: String,
        component: Box<dyn Component>,
    },
    Deferred(DeferredSection),
}

impl Entry {
    fn name(&self) -> &str {
        match self {
            Self::Eager { name, .. } => name,
            Self::Deferred(section) => section.name(),
        }
    }

    fn status(&self) -> SectionStatus {
        match self {
            Self::Eager { .. } => SectionStatus::Eager,
            Self::Deferred(section) if section.is_swapped() => SectionStatus::Mounted,
            Self::Deferred(_) => SectionStatus::Pending,
        }
    }

    fn component_mut(&mut self) -> &mut dyn Component {
        match self {
            Self::Eager { component, .. } => component.as_mut(),
            Self::Deferred(section) => section,
        }
    }

    fn component(&self) -> &dyn Component {
        match self {
            Self::Eager { component, .. } => component.as_ref(),
            Self::Deferred(section) => section,
        }
    }
}

/// Ordered sections of a page, some of them deferred.
///
/// Sections render in declaration order regardless of when their modules
/// become ready.
#[derive(Default)]
pub struct SectionList {
    entries: Vec<Entry>,
    announced: Vec<String>,
}

impl SectionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a section rendered at mount.
    pub fn push_eager(&mut self, name: impl Into<String>, component: impl Component + 'static) {
        self.entries.push(Entry::Eager {
            name: name.into(),
            component: Box::new(component),
        });
    }

    /// Append a deferred section.
    pub fn push_deferred(&mut self, section: DeferredSection) {
        self.entries.push(Entry::Deferred(section));
    }

    /// Section names in order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(Entry::name).collect()
    }

    /// Status of each section, in order.
    pub fn statuses(&self) -> Vec<(&str, SectionStatus)> {
        self.entries.iter().map(|e| (e.name(), e.status())).collect()
    }

    /// Status of one section.
    pub fn status(&self, name: &str) -> Option<SectionStatus> {
        self.entries
            .iter()
            .find(|e| e.name() == name)
            .map(Entry::status)
    }

    /// Whether no section is still waiting for its module.
    pub fn is_complete(&self) -> bool {
        self.entries
            .iter()
            .all(|e| e.status() != SectionStatus::Pending)
    }

    /// Render one section.
    pub fn render_section(&self, name: &str) -> Option<String> {
        self.entries
            .iter()
            .find(|e| e.name() == name)
            .map(|e| e.component().render())
    }

    /// Deferred sections swapped since the last call, in declaration order.
    pub fn take_swapped(&mut self) -> Vec<String> {
        let mut swapped = Vec::new();
        for entry in &self.entries {
            if entry.status() == SectionStatus::Mounted
                && !self.announced.iter().any(|name| name == entry.name())
            {
                swapped.push(entry.name().to_string());
            }
        }
        self.announced.extend(swapped.iter().cloned());
        swapped
    }
}

impl Component for SectionList {
    fn render(&self) -> String {
        self.entries.iter().map(|e| e.component().render()).collect()
    }

    fn handle(&mut self, event: &HostEvent, cx: &RenderContext<'_>) -> bool {
        self.entries
            .iter_mut()
            .fold(false, |changed, e| e.component_mut().handle(event, cx) || changed)
    }
}

#[cfg(test)]
mod tests {
    use leveling_core::DeferredConfig;

    use super::*;
    use crate::component::{factory, StaticHtml};
    use crate::sim::SimulatedHost;

    fn footer(cx: &RenderContext<'_>) -> DeferredSection {
        DeferredSection::mount(
            cx,
            "footer",
            SectionPlaceholder::new(160, "h-40 bg-gray-100"),
            factory(|_| StaticHtml::new("<footer>links</footer>")),
        )
    }

    #[test]
    fn test_placeholder_until_module_ready() {
        let host = SimulatedHost::default();
        let config = DeferredConfig::default();
        let cx = RenderContext::new(&host, &config);
        let section = footer(&cx);

        assert!(!section.is_swapped());
        let html = section.render();
        assert!(html.contains("h-40 bg-gray-100 animate-pulse"));
        assert!(html.contains("min-height: 160px"));
        assert_eq!(host.pending_modules(), vec!["footer".to_string()]);
    }

    #[test]
    fn test_swaps_once_and_never_reverts() {
        let host = SimulatedHost::default();
        let config = DeferredConfig::default();
        let cx = RenderContext::new(&host, &config);
        let mut section = footer(&cx);

        let ready = host.ready_modules();
        assert!(section.handle(&ready[0], &cx));
        assert!(section.is_swapped());
        assert_eq!(section.render(), "<footer>links</footer>");

        // Replaying the ready event does nothing.
        assert!(!section.handle(&ready[0], &cx));
        assert_eq!(section.render(), "<footer>links</footer>");
    }

    #[test]
    fn test_swap_independent_of_scroll() {
        let host = SimulatedHost::default();
        let config = DeferredConfig::default();
        let cx = RenderContext::new(&host, &config);
        let mut section = footer(&cx);

        for event in host.scroll_to(5000.0) {
            assert!(!section.handle(&event, &cx));
        }
        assert!(!section.is_swapped());
    }

    #[test]
    fn test_drop_before_ready_abandons_module() {
        let host = SimulatedHost::default();
        let config = DeferredConfig::default();
        let cx = RenderContext::new(&host, &config);
        drop(footer(&cx));

        assert!(host.ready_modules().is_empty());
        assert_eq!(host.stats().modules_abandoned, 1);
    }

    #[test]
    fn test_list_keeps_declaration_order() {
        let host = SimulatedHost::default();
        let config = DeferredConfig::default();
        let cx = RenderContext::new(&host, &config);
        let mut list = SectionList::new();
        list.push_eager("hero", StaticHtml::new("<section>hero</section>"));
        list.push_deferred(DeferredSection::mount(
            &cx,
            "featured",
            SectionPlaceholder::new(384, "h-96 bg-gray-50"),
            factory(|_| StaticHtml::new("<section>grid</section>")),
        ));
        list.push_deferred(footer(&cx));

        assert_eq!(list.names(), vec!["hero", "featured", "footer"]);
        assert!(!list.is_complete());
        assert_eq!(list.status("footer"), Some(SectionStatus::Pending));

        // Modules resolve in id order; the page still renders in declaration order.
        let mut events = host.ready_modules();
        events.reverse();
        for event in &events {
            list.handle(event, &cx);
        }

        assert!(list.is_complete());
        assert_eq!(
            list.render(),
            "<section>hero</section><section>grid</section><footer>links</footer>"
        );
        assert_eq!(list.take_swapped(), vec!["featured".to_string(), "footer".to_string()]);
        assert!(list.take_swapped().is_empty());
        assert_eq!(list.render_section("footer").as_deref(), Some("<footer>links</footer>"));
    }
}
