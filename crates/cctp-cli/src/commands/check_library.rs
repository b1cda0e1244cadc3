//! Check-library command - startup size self-test

use crate::config::Config;
use crate::CommonArgs;
use anyhow::Result;
use clap::Args;
use console::style;
use sc_cctp_core::CctpLibrary;

#[derive(Args)]
pub struct CheckLibraryArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

pub fn run(config: &Config, _args: CheckLibraryArgs) -> Result<()> {
    let lib = config.library()?;

    if config.json_output {
        let report = serde_json::json!({
            "ok": true,
            "field_size": lib.field_size_in_bytes(),
            "proof_size": lib.sc_proof_size_in_bytes(),
            "vk_size": lib.sc_vk_size_in_bytes(),
            "bit_vector_size": lib.sc_bit_vector_size_in_bytes(),
            "custom_data_size": lib.sc_custom_data_size_in_bytes(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if !config.quiet {
        println!("{} CCTP library sizes match", style("✓").green().bold());
        println!("  Field element: {} bytes", lib.field_size_in_bytes());
        println!("  Proof:         {} bytes", lib.sc_proof_size_in_bytes());
        println!("  VK:            {} bytes", lib.sc_vk_size_in_bytes());
        println!("  Bit vector:    {} bytes", lib.sc_bit_vector_size_in_bytes());
        println!("  Custom data:   {} bytes", lib.sc_custom_data_size_in_bytes());
    }

    Ok(())
}
