use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    AdminCommands, CategoriesCommands, OrdersCommands, ProductsCommands, ProofCommands,
    ValidateCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Home page: root categories and rotating featured products.
    Home(HomeArgs),
    /// Category catalog.
    Categories {
        #[command(subcommand)]
        action: CategoriesCommands,
    },
    /// Products.
    Products {
        #[command(subcommand)]
        action: ProductsCommands,
    },
    /// Order history.
    Orders {
        #[command(subcommand)]
        action: OrdersCommands,
    },
    /// Payment proofs.
    Proof {
        #[command(subcommand)]
        action: ProofCommands,
    },
    /// Back office.
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },
    /// Look up an interface string.
    Translate(TranslateArgs),
    /// Validate form input without contacting the backend.
    Validate {
        #[command(subcommand)]
        action: ValidateCommands,
    },
}

/// Arguments for `zmb home`.
#[derive(Clone, Debug, Args)]
pub struct HomeArgs {
    /// Rotate the featured carousel this many times before exiting.
    #[arg(long, default_value_t = 0)]
    pub rotate: u32,
}

/// Arguments for `zmb translate`.
#[derive(Clone, Debug, Args)]
pub struct TranslateArgs {
    /// Dotted key, e.g. `nav.home`.
    pub key: Option<String>,
    /// List keys missing from the active language instead.
    #[arg(long, conflicts_with = "key")]
    pub missing: bool,
}
