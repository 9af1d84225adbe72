//! Logo and primary navigation.

use leveling_streaming::escape_html;

use crate::data::NAV_ITEMS;

/// Render the square "L" logo.
pub fn render_logo() -> String {
    r#"<div class="w-10 h-10 md:w-12 md:h-12 bg-black rounded-lg flex items-center justify-center text-white font-bold text-lg md:text-xl hover:opacity-80 transition">L</div>"#
        .to_string()
}

/// Render the navigation links, stacked on mobile.
pub fn render_nav_menu(mobile: bool) -> String {
    let (layout, text) = if mobile {
        ("flex-col gap-4", "text-lg")
    } else {
        ("gap-6 md:gap-8 lg:gap-10 items-center", "text-sm md:text-base")
    };

    let links: String = NAV_ITEMS
        .iter()
        .map(|item| {
            format!(
                r#"<a href="{}" class="{} font-medium text-gray-800 hover:text-black transition duration-200 cursor-pointer">{}</a>"#,
                item.href,
                text,
                escape_html(item.label)
            )
        })
        .collect();

    format!(r#"<div class="flex {}">{}</div>"#, layout, links)
}
