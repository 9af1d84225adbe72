//! Site footer with the newsletter signup.

use crate::data::{COPYRIGHT, FOOTER_LEGAL, FOOTER_SOCIAL};

/// Render the footer.
pub fn render_footer() -> String {
    let legal: String = FOOTER_LEGAL
        .iter()
        .map(|label| {
            format!(
                r##"<a href="#" class="text-gray-400 hover:text-white transition duration-200">{}</a>"##,
                label
            )
        })
        .collect();
    let social: String = FOOTER_SOCIAL
        .iter()
        .map(|(title, href)| {
            format!(
                r#"<a href="{}" title="{}" class="w-10 h-10 flex items-center justify-center bg-gray-900 rounded-full hover:bg-white hover:text-black transition duration-300 cursor-pointer">{}</a>"#,
                href, title, title
            )
        })
        .collect();

    format!(
        r#"<footer class="w-full bg-black text-white" data-section="footer"><div class="container py-8 md:py-10 border-b border-gray-800"><div class="grid grid-cols-1 md:grid-cols-2 gap-6 md:gap-8 items-center"><div><h3 class="text-xl md:text-2xl font-bold mb-2">BE IN THE LOOP</h3><p class="text-sm md:text-base text-gray-400">Sign up to hear about special offers, new arrivals, and more.</p></div><form class="flex flex-col sm:flex-row gap-3"><input type="email" placeholder="Enter your email" class="flex-1 px-4 py-2 md:py-3 bg-gray-900 text-white text-sm rounded-full focus:outline-none focus:ring-2 focus:ring-white"><button class="bg-black text-white hover:bg-white hover:text-black px-6 py-2 md:py-3 font-medium whitespace-nowrap rounded-full transition duration-300 cursor-pointer">Subscribe</button></form></div></div><div class="container py-6"><div class="flex flex-col md:flex-row justify-between items-center gap-4 text-sm"><p class="text-gray-400">{copyright}</p><div class="flex gap-6">{legal}</div><div class="flex gap-4">{social}</div></div></div></footer>"#,
        copyright = COPYRIGHT,
        legal = legal,
        social = social
    )
}
