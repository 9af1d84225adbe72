//! List the route table.

use anyhow::Result;
use leveling_storefront::router::NOT_FOUND_TITLE;
use leveling_storefront::Router;

use crate::context::Context;

/// Run the routes command.
pub async fn run(ctx: &Context) -> Result<()> {
    let router = Router::default();
    let routes = router.table().routes();

    if ctx.output.is_json() {
        ctx.output.json(&routes);
        return Ok(());
    }

    ctx.output.header("Routes");
    let widths = [10, 10, 32];
    ctx.output.table_row(&["PATH", "PAGE", "TITLE"], &widths);
    for route in routes {
        ctx.output.table_row(
            &[route.pattern.as_str(), route.page.as_str(), route.title.as_str()],
            &widths,
        );
    }
    ctx.output.table_row(&["*", "not-found", NOT_FOUND_TITLE], &widths);

    Ok(())
}
