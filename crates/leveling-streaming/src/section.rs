//! Section slots and placeholder swaps.

use crate::escape::escape_html;

/// A named slot in the page that holds either a placeholder or content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSlot {
    /// Slot name, unique within a page.
    pub name: String,
}

impl SectionSlot {
    /// Create a new slot.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Wrap HTML in the slot's container.
    pub fn wrap(&self, html: &str) -> String {
        format!(
            r#"<div data-slot="{}">{}</div>"#,
            escape_html(&self.name),
            html
        )
    }

    /// Render a swap chunk that replaces the slot's contents with `html`.
    ///
    /// The content travels in an inert `<template>` and is moved into the
    /// slot by the swap runtime.
    pub fn swap(&self, html: &str) -> String {
        let name = escape_html(&self.name);
        format!(
            r#"<template data-swap="{name}">{html}</template><script>window.__levelingSwap("{name}")</script>"#
        )
    }
}

/// Inline script defining the swap runtime used by swap chunks.
///
/// Must be emitted in the shell before any swap chunk.
pub fn swap_runtime_script() -> &'static str {
    r#"window.__levelingSwap = function (name) {
  var tpl = document.querySelector('template[data-swap="' + name + '"]');
  var slot = document.querySelector('[data-slot="' + name + '"]');
  if (!tpl || !slot) { return; }
  slot.replaceChildren(tpl.content.cloneNode(true));
  tpl.remove();
};"#
}
