//! Certificate command - check custom fields against a sidechain

use crate::config::Config;
use crate::CommonArgs;
use anyhow::{Context, Result};
use clap::Args;
use console::style;
use sc_cctp_core::constants::SC_FIELD_SIZE;
use sc_cctp_core::data::{parse_bit_vector, parse_custom_field_element};
use sc_cctp_core::{
    BitVectorCertificateField, CertificateCustomFields, FieldElementCertificateField,
};
use std::path::PathBuf;

#[derive(Args)]
pub struct CertificateArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Sidechain config TOML (falls back to CCTP_SIDECHAIN_CONFIG)
    #[arg(long)]
    pub sidechain: Option<PathBuf>,

    /// Field element slot, hex (repeat in slot order)
    #[arg(long = "field-element")]
    pub field_elements: Vec<String>,

    /// Compressed bit vector slot, hex (repeat in slot order)
    #[arg(long = "bit-vector")]
    pub bit_vectors: Vec<String>,
}

pub fn run(config: &Config, args: CertificateArgs) -> Result<()> {
    let lib = config.library()?;
    let configs = config.sidechain_configs(args.sidechain.as_deref())?;

    let field_elements = args
        .field_elements
        .iter()
        .enumerate()
        .map(|(i, hex)| {
            parse_custom_field_element(hex.trim(), SC_FIELD_SIZE)
                .map(FieldElementCertificateField::new)
                .with_context(|| format!("Invalid field element slot {}", i))
        })
        .collect::<Result<Vec<_>>>()?;

    let bit_vectors = args
        .bit_vectors
        .iter()
        .enumerate()
        .map(|(i, hex)| {
            parse_bit_vector(hex.trim())
                .map(BitVectorCertificateField::new)
                .with_context(|| format!("Invalid bit vector slot {}", i))
        })
        .collect::<Result<Vec<_>>>()?;

    let fields = CertificateCustomFields::new(field_elements, bit_vectors);
    let public_inputs = fields.check_against(&configs, &lib)?;

    if config.json_output {
        let report = serde_json::json!({
            "valid": true,
            "field_elements": public_inputs.iter().map(ToString::to_string).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if !config.quiet {
        println!(
            "{} Certificate custom fields match the sidechain",
            style("✓").green().bold()
        );
        for (i, fe) in public_inputs.iter().enumerate() {
            println!("  [{}] {}", i, fe);
        }
    }

    Ok(())
}
