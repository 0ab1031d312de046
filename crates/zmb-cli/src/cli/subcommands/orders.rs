use clap::Subcommand;

/// Order history commands (signed-in session required).
#[derive(Clone, Debug, Subcommand)]
pub enum OrdersCommands {
    /// List orders, loading pages the way the order history scrolls.
    List {
        /// Maximum number of pages to load.
        #[arg(long, default_value_t = 1)]
        pages: u32,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get an order by ID.
    Get { id: String },
}
