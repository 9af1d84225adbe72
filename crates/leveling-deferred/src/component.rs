//! Component trait shared by everything mounted on a page.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use crate::host::{HostEvent, RenderContext};

/// A mounted, stateful piece of markup.
///
/// Components acquire host resources when they are constructed and release
/// them when dropped. Between the two they consume host events and render
/// their current state.
pub trait Component {
    /// Render the current state to HTML.
    fn render(&self) -> String;

    /// Consume a host event. Returns `true` when the rendered output changed.
    fn handle(&mut self, _event: &HostEvent, _cx: &RenderContext<'_>) -> bool {
        false
    }
}

/// Deferred constructor for a component, run once its prerequisites are met.
pub type ComponentFactory = Box<dyn FnOnce(&RenderContext<'_>) -> Box<dyn Component>>;

/// Box a closure as a `ComponentFactory`.
pub fn factory<F, C>(build: F) -> ComponentFactory
where
    F: FnOnce(&RenderContext<'_>) -> C + 'static,
    C: Component + 'static,
{
    erase(move |cx| Box::new(build(cx)))
}

fn erase<F>(build: F) -> ComponentFactory
where
    F: FnOnce(&RenderContext<'_>) -> Box<dyn Component> + 'static,
{
    Box::new(build)
}

/// Markup that never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticHtml(pub String);

impl StaticHtml {
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }
}

impl Component for StaticHtml {
    fn render(&self) -> String {
        self.0.clone()
    }
}

impl<C: Component + ?Sized> Component for Box<C> {
    fn render(&self) -> String {
        (**self).render()
    }

    fn handle(&mut self, event: &HostEvent, cx: &RenderContext<'_>) -> bool {
        (**self).handle(event, cx)
    }
}

/// A component mounted in one place and driven from another.
///
/// The page keeps one handle to act on the component (submit a form, open a
/// modal) while the section tree holds another to render it and route events.
pub struct Shared<C>(Rc<RefCell<C>>);

impl<C> Shared<C> {
    pub fn new(component: C) -> Self {
        Self(Rc::new(RefCell::new(component)))
    }

    pub fn borrow(&self) -> Ref<'_, C> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, C> {
        self.0.borrow_mut()
    }
}

impl<C> Clone for Shared<C> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<C: Component> Component for Shared<C> {
    fn render(&self) -> String {
        self.0.borrow().render()
    }

    fn handle(&mut self, event: &HostEvent, cx: &RenderContext<'_>) -> bool {
        self.0.borrow_mut().handle(event, cx)
    }
}

/// Deliver an event to every child, returning whether any re-rendered.
///
/// Every child sees the event even after one has claimed it.
pub fn dispatch<C: Component>(children: &mut [C], event: &HostEvent, cx: &RenderContext<'_>) -> bool {
    children
        .iter_mut()
        .fold(false, |changed, child| child.handle(event, cx) || changed)
}

/// Render children in order.
pub fn render_all<C: Component>(children: &[C]) -> String {
    children.iter().map(Component::render).collect()
}
