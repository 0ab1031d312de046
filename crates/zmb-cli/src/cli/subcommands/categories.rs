use clap::Subcommand;

/// Category catalog commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CategoriesCommands {
    /// List the children of a category (root level by default).
    List {
        /// Parent category ID.
        #[arg(long)]
        parent: Option<String>,
    },
    /// Drill through the category tree interactively.
    Browse {
        /// Browse a local JSON catalog instead of the live API.
        #[arg(long)]
        catalog_file: Option<String>,
    },
}
