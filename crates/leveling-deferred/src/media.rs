//! Lazily mounted media with a crossfade on load.

use std::fmt;

use leveling_core::{ElementId, LifecyclePhase, MediaRequestId};
use leveling_streaming::escape_html;
use serde::{Deserialize, Serialize};

use crate::component::Component;
use crate::geometry::Rect;
use crate::host::{Host, HostEvent, Lease, MediaHost, RenderContext};
use crate::visibility::VisibilityDetector;

const DEFAULT_SIZE: u32 = 400;
const RESPONSIVE_SIZES: &str = "(max-width: 768px) 100vw, (max-width: 1200px) 50vw, 33vw";

/// How media fills its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObjectFit {
    Contain,
    #[default]
    Cover,
    Fill,
    ScaleDown,
}

impl ObjectFit {
    /// CSS `object-fit` value.
    pub fn as_css(&self) -> &'static str {
        match self {
            Self::Contain => "contain",
            Self::Cover => "cover",
            Self::Fill => "fill",
            Self::ScaleDown => "scale-down",
        }
    }
}

/// Intrinsic aspect ratio in lowest terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AspectRatio {
    pub width: u32,
    pub height: u32,
}

impl AspectRatio {
    /// Reduce `width:height` to lowest terms.
    pub fn new(width: u32, height: u32) -> Self {
        let divisor = gcd(width, height).max(1);
        Self {
            width: width / divisor,
            height: height / divisor,
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// An image to display, fixed once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaReference {
    src: String,
    alt: String,
    width: u32,
    height: u32,
    fit: ObjectFit,
    priority: bool,
}

impl MediaReference {
    /// Create a 400x400 cover image loaded on demand.
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            fit: ObjectFit::default(),
            priority: false,
        }
    }

    /// Set the intrinsic size.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the fit mode.
    pub fn with_fit(mut self, fit: ObjectFit) -> Self {
        self.fit = fit;
        self
    }

    /// Mark as above the fold: mounted immediately, never observed.
    pub fn with_priority(mut self, priority: bool) -> Self {
        self.priority = priority;
        self
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn alt(&self) -> &str {
        &self.alt
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn fit(&self) -> ObjectFit {
        self.fit
    }

    pub fn priority(&self) -> bool {
        self.priority
    }

    /// Intrinsic aspect ratio.
    pub fn aspect_ratio(&self) -> AspectRatio {
        AspectRatio::new(self.width, self.height)
    }
}

/// Visibility and load progress of one media element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityState {
    pub has_become_visible: bool,
    pub has_finished_loading: bool,
}

/// Render phase of a media element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaPhase {
    /// Inert block sized to the aspect ratio.
    Placeholder,
    /// Real media mounted at opacity 0 under a pulsing overlay.
    Loading,
    /// Real media faded in.
    Loaded,
    /// Load failed; the block stays in place with a static overlay.
    Failed(String),
}

impl MediaPhase {
    fn attr(&self) -> &'static str {
        match self {
            Self::Placeholder => "placeholder",
            Self::Loading => "loading",
            Self::Loaded => "loaded",
            Self::Failed(_) => "failed",
        }
    }
}

/// Media that mounts its real element only once it nears the viewport.
#[derive(Debug)]
pub struct DeferredMedia {
    element: ElementId,
    reference: MediaReference,
    class: String,
    detector: VisibilityDetector,
    state: VisibilityState,
    request: Option<Lease<MediaRequestId>>,
    failure: Option<String>,
}

impl DeferredMedia {
    /// Mount media occupying `region`.
    pub fn mount(cx: &RenderContext<'_>, reference: MediaReference, region: Rect) -> Self {
        let element = cx.host.allocate_element();
        cx.report(element, LifecyclePhase::Mounted);
        let detector = VisibilityDetector::mount(cx, element, region, reference.priority());

        let mut media = Self {
            element,
            reference,
            class: String::new(),
            detector,
            state: VisibilityState::default(),
            request: None,
            failure: None,
        };
        if media.detector.is_visible() {
            media.begin_loading(cx);
        }
        media
    }

    /// Extra classes on the wrapper.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn element(&self) -> ElementId {
        self.element
    }

    pub fn reference(&self) -> &MediaReference {
        &self.reference
    }

    pub fn state(&self) -> VisibilityState {
        self.state
    }

    /// The outstanding load request, if any.
    pub fn request(&self) -> Option<MediaRequestId> {
        self.request.as_ref().map(Lease::id)
    }

    /// Current render phase.
    pub fn phase(&self) -> MediaPhase {
        if let Some(reason) = &self.failure {
            MediaPhase::Failed(reason.clone())
        } else if self.state.has_finished_loading {
            MediaPhase::Loaded
        } else if self.state.has_become_visible {
            MediaPhase::Loading
        } else {
            MediaPhase::Placeholder
        }
    }

    /// Tear down, reporting the unmount. Held leases are released.
    pub fn unmount(self, cx: &RenderContext<'_>) {
        cx.report(self.element, LifecyclePhase::Unmounted);
    }

    fn begin_loading(&mut self, cx: &RenderContext<'_>) {
        self.state.has_become_visible = true;
        self.request = Some(cx.host.load_media(self.reference.src()));
        cx.report(self.element, LifecyclePhase::Loading);
    }

    fn owns(&self, request: MediaRequestId) -> bool {
        self.request() == Some(request)
    }
}

impl Component for DeferredMedia {
    fn render(&self) -> String {
        let phase = self.phase();
        let mut html = format!(
            r#"<div class="relative bg-gray-100{}{}" style="aspect-ratio: {}/{}" data-media="{}">"#,
            if self.class.is_empty() { "" } else { " " },
            escape_html(&self.class),
            self.reference.width(),
            self.reference.height(),
            phase.attr(),
        );

        match phase {
            MediaPhase::Placeholder => {}
            MediaPhase::Loading | MediaPhase::Loaded => {
                let opacity = if phase == MediaPhase::Loaded {
                    "opacity-100"
                } else {
                    "opacity-0"
                };
                html.push_str(&format!(
                    r#"<img src="{}" alt="{}" sizes="{}" class="absolute inset-0 h-full w-full transition-opacity duration-300 {}" style="object-fit: {}"{}>"#,
                    escape_html(self.reference.src()),
                    escape_html(self.reference.alt()),
                    RESPONSIVE_SIZES,
                    opacity,
                    self.reference.fit().as_css(),
                    if self.reference.priority() {
                        r#" fetchpriority="high""#
                    } else {
                        ""
                    },
                ));
                if phase == MediaPhase::Loading {
                    html.push_str(r#"<div class="absolute inset-0 bg-gray-200 animate-pulse"></div>"#);
                }
            }
            MediaPhase::Failed(_) => {
                html.push_str(r#"<div class="absolute inset-0 bg-gray-200"></div>"#);
            }
        }

        html.push_str("</div>");
        html
    }

    fn handle(&mut self, event: &HostEvent, cx: &RenderContext<'_>) -> bool {
        match event {
            HostEvent::Proximity(_) => {
                if self.detector.handle(event, cx) {
                    self.begin_loading(cx);
                    return true;
                }
                false
            }
            HostEvent::MediaLoaded { request } if self.owns(*request) => {
                self.state.has_finished_loading = true;
                self.request = None;
                cx.report(self.element, LifecyclePhase::Loaded);
                true
            }
            HostEvent::MediaFailed { request, reason } if self.owns(*request) => {
                tracing::warn!(
                    element = %self.element,
                    src = self.reference.src(),
                    reason = reason.as_str(),
                    "media failed to load"
                );
                self.failure = Some(reason.clone());
                self.request = None;
                cx.report(self.element, LifecyclePhase::Failed(reason.clone()));
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use leveling_core::DeferredConfig;

    use super::*;
    use crate::geometry::Viewport;
    use crate::sim::SimulatedHost;

    fn setup() -> (SimulatedHost, DeferredConfig) {
        (
            SimulatedHost::new(Viewport::new(1000.0, 800.0)),
            DeferredConfig::default(),
        )
    }

    fn below_fold() -> Rect {
        Rect::new(0.0, 2000.0, 400.0, 400.0)
    }

    fn deliver(media: &mut DeferredMedia, events: Vec<HostEvent>, cx: &RenderContext<'_>) -> bool {
        events
            .iter()
            .fold(false, |changed, event| media.handle(event, cx) || changed)
    }

    #[test]
    fn test_reference_defaults() {
        let reference = MediaReference::new("/shoe.jpg", "Shoe");

        assert_eq!(reference.width(), 400);
        assert_eq!(reference.height(), 400);
        assert_eq!(reference.fit(), ObjectFit::Cover);
        assert!(!reference.priority());
    }

    #[test]
    fn test_aspect_ratio_reduced() {
        assert_eq!(AspectRatio::new(400, 400), AspectRatio::new(1, 1));
        assert_eq!(AspectRatio::new(1200, 600).to_string(), "2:1");
        assert_eq!(AspectRatio::new(0, 0), AspectRatio::new(0, 0));
    }

    #[test]
    fn test_square_placeholder_until_proximity() {
        let (host, config) = setup();
        let cx = RenderContext::new(&host, &config);
        let mut media = DeferredMedia::mount(&cx, MediaReference::new("/shoe.jpg", "Shoe"), below_fold());

        assert_eq!(media.reference().aspect_ratio(), AspectRatio::new(1, 1));
        assert_eq!(media.phase(), MediaPhase::Placeholder);
        let html = media.render();
        assert!(html.contains("aspect-ratio: 400/400"));
        assert!(!html.contains("<img"));
        assert!(host.pending_media().is_empty());

        // Initial check reports "not intersecting".
        assert!(!deliver(&mut media, host.check_proximity(), &cx));
        assert!(!media.render().contains("<img"));

        assert!(deliver(&mut media, host.scroll_to(1800.0), &cx));
        assert_eq!(media.phase(), MediaPhase::Loading);
        assert_eq!(host.pending_media().len(), 1);
        let html = media.render();
        assert!(html.contains("opacity-0"));
        assert!(html.contains("animate-pulse"));
    }

    #[test]
    fn test_crossfade_on_load() {
        let (host, config) = setup();
        let cx = RenderContext::new(&host, &config);
        let mut media = DeferredMedia::mount(&cx, MediaReference::new("/shoe.jpg", "Shoe"), below_fold());
        deliver(&mut media, host.scroll_to(1800.0), &cx);

        let loaded = host.complete_all_media();
        assert!(deliver(&mut media, loaded, &cx));

        assert_eq!(
            media.state(),
            VisibilityState {
                has_become_visible: true,
                has_finished_loading: true,
            }
        );
        let html = media.render();
        assert!(html.contains("opacity-100"));
        assert!(!html.contains("animate-pulse"));
        assert!(media.request().is_none());
    }

    #[test]
    fn test_load_event_before_visible_ignored() {
        let (host, config) = setup();
        let cx = RenderContext::new(&host, &config);
        let mut media = DeferredMedia::mount(&cx, MediaReference::new("/shoe.jpg", "Shoe"), below_fold());

        let stray = HostEvent::MediaLoaded {
            request: MediaRequestId::new(42),
        };
        assert!(!media.handle(&stray, &cx));
        assert!(!media.state().has_finished_loading);
        assert_eq!(media.phase(), MediaPhase::Placeholder);
    }

    #[test]
    fn test_priority_loads_at_mount() {
        let (host, config) = setup();
        let cx = RenderContext::new(&host, &config);
        let hero = MediaReference::new("/hero.jpg", "Hero")
            .with_size(1200, 600)
            .with_priority(true);
        let media = DeferredMedia::mount(&cx, hero, Rect::new(0.0, 0.0, 1000.0, 500.0));

        assert_eq!(media.phase(), MediaPhase::Loading);
        assert_eq!(host.active_observations(), 0);
        assert_eq!(host.pending_media().len(), 1);
        assert!(media.render().contains(r#"fetchpriority="high""#));
    }

    #[test]
    fn test_failure_is_terminal() {
        let (host, config) = setup();
        let cx = RenderContext::new(&host, &config);
        let hero = MediaReference::new("/missing.jpg", "Missing").with_priority(true);
        let mut media = DeferredMedia::mount(&cx, hero, Rect::new(0.0, 0.0, 400.0, 400.0));
        let request = media.request().unwrap();

        let failed = host.fail_media(request, "404").unwrap();
        assert!(media.handle(&failed, &cx));

        assert_eq!(media.phase(), MediaPhase::Failed("404".to_string()));
        let html = media.render();
        assert!(html.contains(r#"data-media="failed""#));
        assert!(!html.contains("<img"));
        assert!(!html.contains("animate-pulse"));

        // A late success for the same request changes nothing.
        let late = HostEvent::MediaLoaded { request };
        assert!(!media.handle(&late, &cx));
    }

    #[test]
    fn test_unmount_before_proximity_releases_observation() {
        let (host, config) = setup();
        let cx = RenderContext::new(&host, &config);
        let media = DeferredMedia::mount(&cx, MediaReference::new("/shoe.jpg", "Shoe"), below_fold());

        host.advance(std::time::Duration::from_millis(100));
        media.unmount(&cx);

        assert_eq!(host.active_observations(), 0);
        assert_eq!(host.stats().observations_released, 1);
        assert!(host.scroll_to(1800.0).is_empty());
        assert!(host.pending_media().is_empty());
    }

    #[test]
    fn test_unmount_while_loading_abandons_request() {
        let (host, config) = setup();
        let cx = RenderContext::new(&host, &config);
        let mut media = DeferredMedia::mount(&cx, MediaReference::new("/shoe.jpg", "Shoe"), below_fold());
        deliver(&mut media, host.scroll_to(1800.0), &cx);

        drop(media);

        assert!(host.complete_all_media().is_empty());
        assert_eq!(host.stats().media_abandoned, 1);
    }

    #[test]
    fn test_alt_text_escaped() {
        let (host, config) = setup();
        let cx = RenderContext::new(&host, &config);
        let reference = MediaReference::new("/a.jpg", "\"Quoted\" <alt>").with_priority(true);
        let media = DeferredMedia::mount(&cx, reference, Rect::new(0.0, 0.0, 10.0, 10.0));

        assert!(media.render().contains("alt=\"&quot;Quoted&quot; &lt;alt&gt;\""));
    }
}
