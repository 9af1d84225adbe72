//! Hero banner.

use leveling_deferred::{Component, DeferredMedia, HostEvent, MediaReference, ObjectFit, Rect, RenderContext};

use crate::data::HeroContent;

/// Hero banner over a priority background image.
///
/// The image is above the fold, so it loads at mount without waiting for a
/// proximity signal.
#[derive(Debug)]
pub struct Hero {
    content: HeroContent,
    media: DeferredMedia,
}

impl Hero {
    pub fn mount(cx: &RenderContext<'_>, content: HeroContent, region: Rect) -> Self {
        let reference = MediaReference::new(content.image, content.image_alt)
            .with_size(content.image_width, content.image_height)
            .with_fit(ObjectFit::Cover)
            .with_priority(true);
        let media = DeferredMedia::mount(cx, reference, region).with_class("w-full h-full");
        Self { content, media }
    }

    pub fn media(&self) -> &DeferredMedia {
        &self.media
    }
}

impl Component for Hero {
    fn render(&self) -> String {
        format!(
            r#"<section class="relative w-full h-80 md:h-[500px] lg:h-[600px] bg-gray-900 overflow-hidden" data-section="hero"><div class="absolute inset-0">{media}<div class="absolute inset-0 bg-black bg-opacity-40"></div></div><div class="absolute inset-0 flex flex-col items-center justify-center z-10"><div class="text-center px-4"><p class="text-base md:text-2xl text-white font-light mb-4">{tagline}</p><h1 class="text-4xl md:text-7xl font-bold text-white mb-8 leading-tight">{headline}</h1><div class="flex flex-col sm:flex-row gap-4 justify-center mt-8"><button class="px-6 py-3 bg-white text-black hover:bg-black hover:text-white rounded-full font-medium transition duration-300 cursor-pointer">Shop</button><button class="px-6 py-3 bg-black text-white border border-white hover:bg-white hover:text-black rounded-full font-medium transition duration-300 cursor-pointer">Watch</button></div></div></div></section>"#,
            media = self.media.render(),
            tagline = self.content.tagline,
            headline = self.content.headline
        )
    }

    fn handle(&mut self, event: &HostEvent, cx: &RenderContext<'_>) -> bool {
        self.media.handle(event, cx)
    }
}
