//! Product card for the featured grid.

use leveling_deferred::{
    dispatch, render_all, Component, DeferredMedia, HostEvent, MediaReference, ObjectFit, Rect,
    RenderContext,
};
use leveling_streaming::escape_html;

use crate::data::Product;

/// A product card. Cards with an image lazily mount it as they near the
/// viewport; cards without one show a static gradient.
#[derive(Debug)]
pub struct ProductCard {
    product: Product,
    media: Option<DeferredMedia>,
}

impl ProductCard {
    /// Mount a card whose image occupies `region`.
    pub fn mount(cx: &RenderContext<'_>, product: Product, region: Rect) -> Self {
        let media = product.image.as_deref().map(|src| {
            let reference = MediaReference::new(src, product.name.as_str())
                .with_size(400, 400)
                .with_fit(ObjectFit::Cover);
            DeferredMedia::mount(cx, reference, region).with_class("w-full rounded-lg")
        });
        Self { product, media }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn media(&self) -> Option<&DeferredMedia> {
        self.media.as_ref()
    }
}

impl Component for ProductCard {
    fn render(&self) -> String {
        let href = self.product.href();
        let badge = self
            .product
            .badge
            .as_deref()
            .map(|badge| {
                format!(
                    r#"<div class="absolute top-3 right-3 bg-black text-white px-3 py-1 rounded-full text-xs font-semibold z-10">{}</div>"#,
                    escape_html(badge)
                )
            })
            .unwrap_or_default();
        let image = match &self.media {
            Some(media) => media.render(),
            None => r#"<div class="absolute inset-0 flex items-center justify-center bg-gradient-to-br from-gray-300 to-gray-400"><span class="text-gray-600 font-medium">Shoe Image</span></div>"#.to_string(),
        };
        let color = self
            .product
            .color
            .as_deref()
            .map(|color| format!(r#"<p class="text-sm text-gray-500">{}</p>"#, escape_html(color)))
            .unwrap_or_default();

        format!(
            r#"<div class="group cursor-pointer block" data-product="{id}"><a href="{href}" target="_blank" rel="noopener noreferrer" class="block"><div class="relative w-full aspect-square rounded-lg overflow-hidden mb-4 group-hover:shadow-lg transition duration-300">{badge}{image}<div class="absolute bottom-0 left-0 right-0 bg-black text-white py-2 px-4 transform translate-y-full group-hover:translate-y-0 transition duration-300"><button class="w-full font-medium text-center cursor-pointer">Add to Cart</button></div></div></a><div class="space-y-2"><p class="text-sm text-gray-600">{category}</p><a href="{href}" target="_blank" rel="noopener noreferrer"><h3 class="text-base md:text-lg font-semibold text-black group-hover:text-gray-700 transition cursor-pointer">{name}</h3></a>{color}<p class="text-base md:text-lg font-semibold text-black pt-2">{price}</p></div></div>"#,
            id = self.product.id,
            href = href,
            badge = badge,
            image = image,
            category = escape_html(&self.product.category),
            name = escape_html(&self.product.name),
            color = color,
            price = self.product.display_price()
        )
    }

    fn handle(&mut self, event: &HostEvent, cx: &RenderContext<'_>) -> bool {
        match self.media.as_mut() {
            Some(media) => media.handle(event, cx),
            None => false,
        }
    }
}

/// The responsive grid of product cards.
#[derive(Debug)]
pub struct ProductGrid {
    cards: Vec<ProductCard>,
}

impl ProductGrid {
    /// Mount one card per product, pairing each with its image region.
    pub fn mount(cx: &RenderContext<'_>, products: Vec<Product>, regions: &[Rect]) -> Self {
        let cards = products
            .into_iter()
            .zip(regions.iter().copied())
            .map(|(product, region)| ProductCard::mount(cx, product, region))
            .collect();
        Self { cards }
    }

    pub fn cards(&self) -> &[ProductCard] {
        &self.cards
    }
}

impl Component for ProductGrid {
    fn render(&self) -> String {
        format!(
            r#"<div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6 md:gap-8">{}</div>"#,
            render_all(&self.cards)
        )
    }

    fn handle(&mut self, event: &HostEvent, cx: &RenderContext<'_>) -> bool {
        dispatch(&mut self.cards, event, cx)
    }
}
