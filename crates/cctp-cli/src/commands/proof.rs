//! Proof command - validate a serialized sidechain proof

use super::{print_verdict, InputArgs};
use crate::config::Config;
use crate::CommonArgs;
use anyhow::Result;
use clap::Args;
use sc_cctp_core::constants::SC_PROOF_SIZE;
use sc_cctp_core::ScProof;

#[derive(Args)]
pub struct ProofArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub input: InputArgs,
}

pub fn run(config: &Config, args: ProofArgs) -> Result<()> {
    let lib = config.library()?;
    let proof = ScProof::from_bytes(args.input.read(SC_PROOF_SIZE, true)?);
    let valid = proof.is_valid(&lib);

    if config.json_output {
        println!("{}", serde_json::json!({ "valid": valid, "size": SC_PROOF_SIZE }));
    } else if !config.quiet {
        println!();
        print_verdict("Proof", valid);
    }

    if !valid {
        std::process::exit(2);
    }
    Ok(())
}
