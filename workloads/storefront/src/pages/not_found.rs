//! Fallback page for unknown paths.

use leveling_deferred::{SectionList, Shared, StaticHtml};
use leveling_streaming::escape_html;

use crate::sections::Header;

pub(super) fn mount(sections: &mut SectionList, header: &Shared<Header>, path: &str) {
    sections.push_eager("header", header.clone());
    sections.push_eager(
        "not-found",
        StaticHtml::new(format!(
            r#"<div class="container py-20 text-center" data-section="not-found"><h1 class="text-4xl md:text-5xl font-bold text-black mb-4">Page Not Found</h1><p class="text-gray-600 mb-8">We couldn't find <code>{}</code>.</p><a href="/" class="inline-block px-6 py-3 bg-black text-white rounded-full font-medium hover:bg-gray-800 transition duration-300 cursor-pointer">Back to Home</a></div>"#,
            escape_html(path)
        )),
    );
}
