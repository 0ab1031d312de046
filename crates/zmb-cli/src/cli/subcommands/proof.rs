use clap::Subcommand;

/// Payment proof commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProofCommands {
    /// Upload a receipt and attach it to an order awaiting payment.
    Upload {
        order_id: String,
        /// Receipt image or PDF.
        file: String,
    },
}
