//! Run a browsing session on the simulated host.

use std::time::Duration;

use anyhow::{Context as _, Result};
use leveling_storefront::PageSession;
use serde::Serialize;

use super::SimulateArgs;
use crate::context::Context;
use crate::output::{format_bytes, status_badge};

/// Final state of a simulated session.
#[derive(Debug, Serialize)]
struct SimulationSummary {
    route: String,
    page: String,
    title: String,
    virtual_ms: u64,
    sections: Vec<SectionSummary>,
    images_loaded: usize,
    images_failed: usize,
    pending_media: usize,
    active_observations: usize,
    active_timers: usize,
    html_bytes: usize,
    #[serde(skip)]
    html: String,
}

#[derive(Debug, Serialize)]
struct SectionSummary {
    name: String,
    status: &'static str,
}

/// Run the simulate command.
pub async fn run(args: SimulateArgs, ctx: &Context) -> Result<()> {
    let host = ctx.host(args.width, args.height);
    let mut session = ctx.open(&args.path, host, args.record.is_some());

    session.load_modules();
    let wait = args
        .advance
        .map(Duration::from_millis)
        .unwrap_or_else(|| ctx.config.deferred.content_delay());
    session.advance(wait);
    if args.load_media {
        session.load_media();
    }

    for y in &args.scroll {
        ctx.output.debug(&format!("Scrolling to {}", y));
        session.scroll_to(*y);
        if args.load_media {
            session.load_media();
        }
    }

    if let Some(reason) = &args.fail_media {
        session.fail_media(reason);
    }

    let summary = summarize(&session);
    let recording = session.finish();

    if ctx.output.is_json() {
        ctx.output.json(&summary);
    } else {
        println!("{}", summary.html);
        print_summary(&summary, ctx);
    }

    if let (Some(path), Some(recording)) = (&args.record, recording) {
        let path = ctx.resolve_path(path);
        let json = recording.to_json()?;
        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write recording: {}", path.display()))?;
        ctx.output.success(&format!(
            "Recorded {} events to {}",
            recording.events.len(),
            path.display()
        ));
    }

    Ok(())
}

fn summarize(session: &PageSession) -> SimulationSummary {
    let html = session.render();
    let host = session.host();
    let route = session.route();

    SimulationSummary {
        route: route.path.clone(),
        page: route.kind.name().to_string(),
        title: route.title.clone(),
        virtual_ms: session.now().as_millis() as u64,
        sections: session
            .page()
            .sections()
            .statuses()
            .into_iter()
            .map(|(name, status)| SectionSummary {
                name: name.to_string(),
                status: status.label(),
            })
            .collect(),
        images_loaded: html.matches(r#"data-media="loaded""#).count(),
        images_failed: html.matches(r#"data-media="failed""#).count(),
        pending_media: host.pending_media().len(),
        active_observations: host.active_observations(),
        active_timers: host.active_timers(),
        html_bytes: html.len(),
        html,
    }
}

fn print_summary(summary: &SimulationSummary, ctx: &Context) {
    ctx.output.header(&format!("{} ({})", summary.route, summary.page));
    ctx.output.kv("Title", &summary.title);
    ctx.output.kv("Virtual time", &format!("{} ms", summary.virtual_ms));
    for section in &summary.sections {
        ctx.output.kv(&section.name, &status_badge(section.status));
    }
    ctx.output.kv("Images loaded", &summary.images_loaded.to_string());
    ctx.output.kv("Media pending", &summary.pending_media.to_string());
    ctx.output.kv("Observations", &summary.active_observations.to_string());
    ctx.output.kv("HTML", &format_bytes(summary.html_bytes as u64));

    if summary.images_failed > 0 {
        ctx.output
            .warn(&format!("{} images failed to load", summary.images_failed));
    }
}
