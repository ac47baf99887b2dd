use clap::Subcommand;

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Compute n! exactly
    Factorial {
        #[arg(allow_negative_numbers = true)]
        number: i64,
    },

    /// Check whether a number is prime
    Prime {
        #[arg(allow_negative_numbers = true)]
        number: i64,
    },

    /// Multiply two non-negative decimal integers of any length
    Multiply { a: String, b: String },
}
