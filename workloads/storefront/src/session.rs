//! Page session driver.
//!
//! A `PageSession` mounts one page on a simulated host and drives it: it
//! turns user actions (scrolling, waiting, submitting) into host events,
//! delivers them to the page, and streams the result.

use std::time::Duration;

use futures::Sink;
use leveling_core::{DeferredConfig, RenderError};
use leveling_deferred::{
    Component, HostEvent, RenderContext, SectionStatus, SimulatedHost, TimerHost,
};
use leveling_observability::{
    ChunkKind, SessionRecorder, SessionRecording, StructuredLogger, TimingContext,
};
use leveling_streaming::{SectionSlot, StreamingSink};

use crate::forms::{FormError, FormKind, Submission};
use crate::pages::Page;
use crate::router::{Route, Router};

/// Upper bound on proximity re-checks after one delivery. Each round can
/// only be triggered by components mounted in the previous one.
const MAX_SETTLE_ROUNDS: usize = 16;

/// One page open on a simulated host.
pub struct PageSession {
    page: Page,
    host: SimulatedHost,
    config: DeferredConfig,
    logger: StructuredLogger,
    recorder: Option<SessionRecorder>,
}

fn context<'a>(
    host: &'a SimulatedHost,
    config: &'a DeferredConfig,
    recorder: Option<&'a SessionRecorder>,
) -> RenderContext<'a> {
    let cx = RenderContext::new(host, config);
    match recorder {
        Some(recorder) => cx.with_observer(recorder),
        None => cx,
    }
}

impl PageSession {
    /// Resolve `path` and mount its page on `host`.
    pub fn open(
        router: &Router,
        path: &str,
        host: SimulatedHost,
        config: DeferredConfig,
        logger: StructuredLogger,
        record: bool,
    ) -> Self {
        let route = router.resolve(path);
        let logger = logger.with_page(route.kind.name()).with_route(route.path.as_str());
        let recorder = record.then(|| SessionRecorder::new(logger.session_id().as_str(), route.path.as_str()));

        let page = {
            let cx = context(&host, &config, recorder.as_ref());
            Page::mount(&cx, route, host.viewport().width)
        };
        logger
            .info_builder("page opened")
            .field("title", page.route().title.as_str())
            .field_u64("sections", page.sections().names().len() as u64)
            .emit();

        let mut session = Self {
            page,
            host,
            config,
            logger,
            recorder,
        };
        let initial = session.host.check_proximity();
        session.deliver(initial);
        session
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn route(&self) -> &Route {
        self.page.route()
    }

    pub fn host(&self) -> &SimulatedHost {
        &self.host
    }

    pub fn logger(&self) -> &StructuredLogger {
        &self.logger
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.host.now()
    }

    /// Deliver host events to the page, then keep delivering proximity
    /// reports for anything the events mounted. Returns `true` if the page
    /// changed.
    pub fn deliver(&mut self, events: Vec<HostEvent>) -> bool {
        let mut changed = false;
        let mut queue = events;
        let mut rounds = 0;

        while !queue.is_empty() && rounds < MAX_SETTLE_ROUNDS {
            let cx = context(&self.host, &self.config, self.recorder.as_ref());
            for event in &queue {
                if let Some(recorder) = &self.recorder {
                    recorder.record_event(self.host.now(), event.label(), event);
                }
                changed |= self.page.handle(event, &cx);
            }
            queue = self.host.check_proximity();
            rounds += 1;
        }
        changed
    }

    /// Scroll the viewport to `scroll_y`.
    pub fn scroll_to(&mut self, scroll_y: f64) -> bool {
        let events = self.host.scroll_to(scroll_y);
        let scrolled = self.page.on_scroll(scroll_y);
        self.deliver(events) || scrolled
    }

    /// Advance the virtual clock, firing due timers. Each batch of timers is
    /// delivered with the clock at its deadline, so timers started while
    /// handling them also fire if they fall inside the window.
    pub fn advance(&mut self, by: Duration) -> bool {
        let target = self.host.now() + by;
        let mut changed = false;
        loop {
            let events = self.host.advance_to_next(target);
            if events.is_empty() {
                break;
            }
            changed |= self.deliver(events);
        }
        let rest = self.host.advance(target.saturating_sub(self.host.now()));
        changed | self.deliver(rest)
    }

    /// Make every requested section module ready.
    pub fn load_modules(&mut self) -> bool {
        let events = self.host.ready_modules();
        self.deliver(events)
    }

    /// Complete every outstanding media load.
    pub fn load_media(&mut self) -> bool {
        let events = self.host.complete_all_media();
        self.deliver(events)
    }

    /// Fail every outstanding media load with `reason`.
    pub fn fail_media(&mut self, reason: &str) -> bool {
        let events: Vec<HostEvent> = self
            .host
            .pending_media()
            .into_iter()
            .filter_map(|(request, _)| self.host.fail_media(request, reason))
            .collect();
        self.deliver(events)
    }

    /// Fill and submit a form on the page.
    pub fn submit(&mut self, kind: FormKind, values: &[(String, String)]) -> Result<Submission, FormError> {
        let cx = context(&self.host, &self.config, self.recorder.as_ref());
        let result = self.page.submit(kind, values, &cx, &self.logger);
        if let Err(err) = &result {
            self.logger
                .warn_builder("form rejected")
                .field("form", kind.name())
                .field("error", err.to_string())
                .emit();
        }
        result
    }

    /// Render the whole document in its current state.
    pub fn render(&self) -> String {
        let shell = self.page.shell();
        let mut html = shell.render_opening();
        html.push_str(&self.page.render());
        html.push_str(&shell.render_closing());
        html
    }

    /// Stream the shell and every section in its current state. Pending
    /// deferred sections go out as placeholders.
    pub async fn stream_initial<S, E>(&mut self, sink: &mut StreamingSink<S, E>) -> Result<(), RenderError>
    where
        S: Sink<Vec<u8>, Error = E> + Unpin,
        E: std::fmt::Display,
    {
        // Sections already swapped go out as content, not as swaps.
        self.page.sections_mut().take_swapped();

        sink.send_shell(&self.page.shell().render_opening()).await?;

        let sections: Vec<(String, SectionStatus)> = self
            .page
            .sections()
            .statuses()
            .into_iter()
            .map(|(name, status)| (name.to_string(), status))
            .collect();
        for (name, status) in sections {
            let html = self.section_html(&name)?;
            let slot = SectionSlot::new(name.as_str());
            let kind = if status == SectionStatus::Pending {
                sink.send_placeholder(&slot, &html).await?;
                ChunkKind::Placeholder
            } else {
                sink.send_section(&slot, &html).await?;
                ChunkKind::Content
            };
            self.record_section(&name, kind, html.len());
        }
        Ok(())
    }

    /// Stream swap chunks for sections that mounted since the last call.
    /// Returns the swapped section names.
    pub async fn stream_swaps<S, E>(&mut self, sink: &mut StreamingSink<S, E>) -> Result<Vec<String>, RenderError>
    where
        S: Sink<Vec<u8>, Error = E> + Unpin,
        E: std::fmt::Display,
    {
        let swapped = self.page.sections_mut().take_swapped();
        for name in &swapped {
            let html = self.section_html(name)?;
            sink.send_swap(&SectionSlot::new(name.as_str()), &html).await?;
            self.record_section(name, ChunkKind::Swap, html.len());
        }
        Ok(swapped)
    }

    /// Close the document.
    pub async fn complete<S, E>(&mut self, sink: &mut StreamingSink<S, E>) -> Result<(), RenderError>
    where
        S: Sink<Vec<u8>, Error = E> + Unpin,
        E: std::fmt::Display,
    {
        let mut closing = self.page.scroll_top().render();
        closing.push_str(&self.page.shell().render_closing());
        sink.complete(&closing).await
    }

    /// Section placeholder and swap timings, when recording.
    pub fn timing(&self) -> Option<TimingContext> {
        self.recorder.as_ref().map(SessionRecorder::timing)
    }

    /// End the session, returning the recording if one was kept.
    pub fn finish(self) -> Option<SessionRecording> {
        let at = self.host.now();
        let stats = self.host.stats();
        self.logger
            .info_builder("session finished")
            .duration_ms("virtual_ms", at)
            .field_u64("observations_released", stats.observations_released as u64)
            .field_u64("timers_cancelled", stats.timers_cancelled as u64)
            .emit();

        let Self { page, recorder, .. } = self;
        drop(page);
        recorder.map(|recorder| recorder.finish(at))
    }

    fn section_html(&self, name: &str) -> Result<String, RenderError> {
        self.page
            .sections()
            .render_section(name)
            .ok_or_else(|| RenderError::UnknownSection(name.to_string()))
    }

    fn record_section(&self, name: &str, kind: ChunkKind, bytes: usize) {
        if let Some(recorder) = &self.recorder {
            recorder.record_section(name, kind, self.host.now(), bytes);
        }
    }
}
