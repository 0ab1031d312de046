mod browse;
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CategoriesCommands;
use crate::context::AppContext;

/// Handle `zmb categories`.
pub async fn handle(
    action: &CategoriesCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CategoriesCommands::List { parent } => list::run(parent.as_deref(), ctx, flags).await,
        CategoriesCommands::Browse { catalog_file } => {
            browse::run(catalog_file.as_deref(), ctx, flags).await
        }
    }
}
