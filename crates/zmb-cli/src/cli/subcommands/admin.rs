use clap::{ArgGroup, Subcommand};

/// Back-office commands (admin session required).
#[derive(Clone, Debug, Subcommand)]
pub enum AdminCommands {
    /// Create a category.
    #[command(name = "category-create")]
    CategoryCreate {
        #[arg(long)]
        name: String,
        /// Defaults to a slug derived from the name.
        #[arg(long)]
        slug: Option<String>,
        #[arg(long)]
        parent: Option<String>,
        #[arg(long)]
        image: Option<String>,
    },
    /// Approve or reject a submitted payment proof.
    #[command(name = "proof-review")]
    #[command(group(ArgGroup::new("decision").required(true).args(["approve", "reject"])))]
    ProofReview {
        id: String,
        #[arg(long)]
        approve: bool,
        #[arg(long)]
        reject: bool,
        #[arg(long)]
        note: Option<String>,
    },
}
