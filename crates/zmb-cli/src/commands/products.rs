use serde::Serialize;
use zmb_api::ProductQuery;
use zmb_core::entities::Product;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProductsCommands;
use crate::commands::shared::found::output_or_not_found;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct ProductListResponse {
    category: Option<String>,
    page: u32,
    total: u64,
    has_more: bool,
    products: Vec<Product>,
}

/// Handle `zmb products`.
pub async fn handle(
    action: &ProductsCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProductsCommands::List {
            category,
            search,
            page,
            limit,
        } => {
            let query = ProductQuery {
                category: category.clone(),
                search: search.clone(),
                page: *page,
                limit: ctx.limit(*limit, flags),
            };
            list(&query, ctx, flags).await
        }
        ProductsCommands::Get { id } => {
            let result = ctx.api.product(id).await;
            output_or_not_found(result, "product", id, flags)
        }
    }
}

async fn list(query: &ProductQuery, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let spinner = Progress::spinner(ctx.translator.t("nav.products"));
    let result = ctx.api.products(query).await;
    spinner.finish_clear();

    let page = result?;
    let has_more = page.has_more();
    output(
        &ProductListResponse {
            category: query.category.clone(),
            page: page.page,
            total: page.total,
            has_more,
            products: page.items,
        },
        flags.format,
    )
}
