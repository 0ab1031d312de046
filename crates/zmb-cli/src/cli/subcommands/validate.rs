use clap::Subcommand;

/// Offline input validation, as the storefront forms apply it.
#[derive(Clone, Debug, Subcommand)]
pub enum ValidateCommands {
    /// Validate and normalize an Ethiopian phone number.
    Phone { value: String },
    /// Check a one-time code the way the code input accepts it.
    Otp {
        value: String,
        /// Number of digits [default: general.otp_length]
        #[arg(long)]
        length: Option<usize>,
    },
}
