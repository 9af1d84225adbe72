//! Featured products section.

use leveling_deferred::{
    factory, Component, Gated, HostEvent, PlaceholderShape, PlaceholderSpec, Rect, RenderContext,
    SkeletonLoader,
};

use crate::data::Product;
use crate::sections::ProductGrid;

/// Featured products, shown as a skeleton grid until the content gate opens.
///
/// Cards are only mounted once the gate opens, so their images register
/// no observations while the skeleton is showing.
pub struct FeaturedProducts {
    gated: Gated,
    count: usize,
}

impl FeaturedProducts {
    /// Mount the section. `regions` are the card image regions in product order.
    pub fn mount(cx: &RenderContext<'_>, products: Vec<Product>, regions: Vec<Rect>) -> Self {
        let count = products.len();
        let skeleton = SkeletonLoader::new(PlaceholderSpec::new(PlaceholderShape::GridCard, count));
        let gated = Gated::mount(
            cx,
            skeleton,
            factory(move |cx| ProductGrid::mount(cx, products, &regions)),
        );
        tracing::debug!(products = count, "featured products mounted");
        Self { gated, count }
    }

    /// Whether the real grid is showing.
    pub fn is_ready(&self) -> bool {
        self.gated.gate().is_ready()
    }

    /// Number of products in the section.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl Component for FeaturedProducts {
    fn render(&self) -> String {
        format!(
            r#"<section class="w-full section-padding bg-white" data-section="featured"><div class="container"><div class="mb-12"><h2 class="text-3xl md:text-4xl lg:text-5xl font-bold text-black mb-4">Featured Products</h2><p class="text-gray-600 text-base md:text-lg">Discover our latest collection of premium Leveling shoes and apparel</p></div>{}</div></section>"#,
            self.gated.render()
        )
    }

    fn handle(&mut self, event: &HostEvent, cx: &RenderContext<'_>) -> bool {
        self.gated.handle(event, cx)
    }
}
