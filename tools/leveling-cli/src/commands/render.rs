//! Stream a page's initial HTML.

use anyhow::{Context as _, Result};
use leveling_streaming::StreamingSink;

use super::RenderArgs;
use crate::context::Context;
use crate::output::stdout_sink;

/// Run the render command.
pub async fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let mut session = ctx.open(&args.path, ctx.host(None, None), false);
    ctx.output.debug(&format!(
        "Rendering {} as {}",
        session.route().path,
        session.route().kind.name()
    ));

    let mut sink = StreamingSink::new(stdout_sink());
    session
        .stream_initial(&mut sink)
        .await
        .context("Failed to stream page")?;

    if args.swaps {
        session.load_modules();
        let swapped = session.stream_swaps(&mut sink).await?;
        ctx.output.debug(&format!("Swapped sections: {}", swapped.join(", ")));
    }

    session.complete(&mut sink).await?;
    ctx.output
        .debug(&format!("Sent sections: {}", sink.sections_sent().join(", ")));
    session.finish();

    Ok(())
}
