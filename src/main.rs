use anyhow::Result;
use clap::{Parser, Subcommand};
mod auth;
use saltbox::DEFAULT_ROUNDS;

#[derive(Debug, Parser)]
#[command(name = "saltbox")]
#[command(
    version,
    about = "Simple, salted PBKDF2 password hashing and verification."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Hashes a password and prints the encoded record
    Hash {
        /// Rounds multiplier applied to the base iteration count (default: 10)
        #[arg(long, default_value_t = DEFAULT_ROUNDS)]
        rounds: u32,
    },

    /// Verifies a password against an encoded record
    #[command(arg_required_else_help = true)]
    Verify { record: String },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();
    let password = auth::read_password()?;
    match args.command {
        Commands::Hash { rounds } => {
            let record = saltbox::derive_with_rounds(&password, rounds)?;
            println!("{record}");
        }
        Commands::Verify { record } => {
            if saltbox::verify(&password, &record) {
                println!("password matches");
            } else {
                println!("password does not match");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
