use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Home(args) => commands::home::handle(&args, ctx, flags).await,
        Commands::Categories { action } => commands::categories::handle(&action, ctx, flags).await,
        Commands::Products { action } => commands::products::handle(&action, ctx, flags).await,
        Commands::Orders { action } => commands::orders::handle(&action, ctx, flags).await,
        Commands::Proof { action } => commands::proof::handle(&action, ctx, flags).await,
        Commands::Admin { action } => commands::admin::handle(&action, ctx, flags).await,
        Commands::Translate(args) => commands::translate::handle(&args, ctx, flags),
        Commands::Validate { action } => commands::validate::handle(&action, ctx, flags),
    }
}
