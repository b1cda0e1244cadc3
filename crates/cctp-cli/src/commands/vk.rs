//! Vk command - validate a serialized verification key

use super::{print_verdict, InputArgs};
use crate::config::Config;
use crate::CommonArgs;
use anyhow::Result;
use clap::Args;
use sc_cctp_core::constants::SC_VK_SIZE;
use sc_cctp_core::ScVKey;

#[derive(Args)]
pub struct VkArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub input: InputArgs,
}

pub fn run(config: &Config, args: VkArgs) -> Result<()> {
    let lib = config.library()?;
    let vk = ScVKey::from_bytes(args.input.read(SC_VK_SIZE, true)?);
    let valid = vk.is_valid(&lib);

    if config.json_output {
        println!("{}", serde_json::json!({ "valid": valid, "size": SC_VK_SIZE }));
    } else if !config.quiet {
        println!();
        print_verdict("Verification key", valid);
    }

    if !valid {
        std::process::exit(2);
    }
    Ok(())
}
