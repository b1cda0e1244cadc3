//! Hash command - Poseidon hash of two field elements

use crate::config::Config;
use crate::CommonArgs;
use anyhow::{Context, Result};
use clap::Args;
use sc_cctp_core::constants::SC_FIELD_SIZE;
use sc_cctp_core::data::parse_sc_data;
use sc_cctp_core::FieldElement;

#[derive(Args)]
pub struct HashArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Left input, hex
    lhs: String,

    /// Right input, hex
    rhs: String,
}

fn parse_field_element(input: &str) -> Result<FieldElement> {
    let bytes = parse_sc_data(input.trim(), SC_FIELD_SIZE, true)
        .with_context(|| format!("Invalid field element {:?}", input))?;
    Ok(FieldElement::from_bytes(bytes))
}

pub fn run(config: &Config, args: HashArgs) -> Result<()> {
    let lib = config.library()?;
    let lhs = parse_field_element(&args.lhs)?;
    let rhs = parse_field_element(&args.rhs)?;

    let digest = FieldElement::compute_hash(&lib, &lhs, &rhs)?;

    if config.json_output {
        let report = serde_json::json!({ "hash": digest.to_string() });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", digest);
    }

    Ok(())
}
