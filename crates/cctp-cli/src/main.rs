//! cctp-inspect CLI - inspect sidechain CCTP data
//!
//! Decodes and validates field elements, proofs, verification keys and
//! certificate custom fields the way a node does when it accepts them.

mod commands;
mod config;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use commands::{bit_vector, certificate, check_library, field_element, hash, proof, vk};
use console::style;

/// CLI for inspecting sidechain CCTP objects
#[derive(Parser)]
#[command(name = "cctp-inspect")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Log validation details
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Common options shared across commands
#[derive(Args, Clone)]
pub struct CommonArgs {
    /// Output format (human, json)
    #[arg(long, env = "CCTP_OUTPUT")]
    pub output: Option<OutputFormat>,

    /// Quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Human,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare the library's object sizes with the compiled ones
    CheckLibrary(check_library::CheckLibraryArgs),

    /// Validate a serialized field element or a field element certificate slot
    FieldElement(field_element::FieldElementArgs),

    /// Compute the Merkle root of a compressed bit vector
    BitVector(bit_vector::BitVectorArgs),

    /// Poseidon hash of two field elements
    Hash(hash::HashArgs),

    /// Validate a serialized sidechain proof
    Proof(proof::ProofArgs),

    /// Validate a serialized verification key
    Vk(vk::VkArgs),

    /// Check certificate custom fields against a sidechain's configs
    Certificate(certificate::CertificateArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();

    let result = match cli.command {
        Commands::CheckLibrary(args) => {
            let config = config::Config::load(&args.common)?;
            check_library::run(&config, args)
        }
        Commands::FieldElement(args) => {
            let config = config::Config::load(&args.common)?;
            field_element::run(&config, args)
        }
        Commands::BitVector(args) => {
            let config = config::Config::load(&args.common)?;
            bit_vector::run(&config, args)
        }
        Commands::Hash(args) => {
            let config = config::Config::load(&args.common)?;
            hash::run(&config, args)
        }
        Commands::Proof(args) => {
            let config = config::Config::load(&args.common)?;
            proof::run(&config, args)
        }
        Commands::Vk(args) => {
            let config = config::Config::load(&args.common)?;
            vk::run(&config, args)
        }
        Commands::Certificate(args) => {
            let config = config::Config::load(&args.common)?;
            certificate::run(&config, args)
        }
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
