use clap::Subcommand;

/// Product commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProductsCommands {
    /// List products, optionally within one category.
    List {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        search: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a product by ID.
    Get { id: String },
}
