//! Home page: header, hero, featured products and footer.

use leveling_deferred::{factory, DeferredSection, RenderContext, SectionList, SectionPlaceholder, Shared};

use crate::data::{featured_products, HERO};
use crate::layout::{hero_height, PageLayout, GRID_HEADING_HEIGHT, HEADER_HEIGHT, SECTION_PADDING};
use crate::sections::{FeaturedProducts, Header, Hero};

pub(super) fn mount(cx: &RenderContext<'_>, sections: &mut SectionList, header: &Shared<Header>, width: f64) {
    let mut layout = PageLayout::new(width);

    layout.take(HEADER_HEIGHT);
    sections.push_eager("header", header.clone());

    let hero = layout.take(hero_height(width));
    sections.push_eager("hero", Hero::mount(cx, HERO, hero));

    let products = featured_products();
    layout.skip(SECTION_PADDING + GRID_HEADING_HEIGHT);
    let regions = layout.take_grid(products.len());
    sections.push_deferred(DeferredSection::mount(
        cx,
        "featured",
        SectionPlaceholder::new(cx.config.section_heights.featured, "h-96 bg-gray-50"),
        factory(move |cx| FeaturedProducts::mount(cx, products, regions)),
    ));
}
