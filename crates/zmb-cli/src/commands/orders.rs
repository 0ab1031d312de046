use serde::Serialize;
use zmb_core::entities::Order;
use zmb_ui::{PageOutcome, Pager};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::OrdersCommands;
use crate::commands::shared::found::output_or_not_found;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct OrderListResponse {
    orders: Vec<Order>,
    pages_loaded: u32,
    /// No further pages exist.
    end_of_list: bool,
}

/// Handle `zmb orders`.
pub async fn handle(action: &OrdersCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        OrdersCommands::List { pages, limit } => list(*pages, *limit, ctx, flags).await,
        OrdersCommands::Get { id } => {
            let result = ctx.api.order(id).await;
            output_or_not_found(result, "order", id, flags)
        }
    }
}

/// Load up to `pages` pages the way the history list scrolls: one request at
/// a time, stopping at the end of the list or the first failure.
async fn list(pages: u32, limit: Option<u32>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut pager = Pager::<Order>::new(ctx.limit(limit, flags), ctx.notices.clone());
    let spinner = Progress::spinner(ctx.translator.t("nav.orders"));
    let mut pages_loaded = 0;

    while pages_loaded < pages.max(1) {
        let Some(request) = pager.begin_load() else {
            break;
        };
        spinner.set_message(&format!("{} ({})", ctx.translator.t("nav.orders"), request.page));
        let result = ctx.api.orders(request.page, request.limit).await;
        match pager.complete(request.token, result) {
            PageOutcome::Appended(count) => {
                tracing::debug!(page = request.page, count, "orders page loaded");
                pages_loaded += 1;
            }
            PageOutcome::Failed => break,
            PageOutcome::Stale => {}
        }
    }
    spinner.finish_clear();

    if pager.is_exhausted() && !flags.quiet {
        ctx.notices.info("order.end_of_list");
    }

    // A failed first page has nothing worth printing.
    if pages_loaded == 0 && !pager.is_exhausted() {
        anyhow::bail!("failed to load orders");
    }

    let end_of_list = pager.is_exhausted();
    output(
        &OrderListResponse {
            orders: pager.items().to_vec(),
            pages_loaded,
            end_of_list,
        },
        flags.format,
    )
}
