//! Bit-vector command - Merkle root of a compressed bit vector

use super::{print_verdict, InputArgs};
use crate::config::Config;
use crate::CommonArgs;
use anyhow::Result;
use clap::Args;
use sc_cctp_core::constants::{
    MAX_CERT_BIT_VECTOR_INPUT_SIZE, MAX_COMPRESSED_SIZE_BYTES, SC_BV_SIZE_IN_BYTES,
};
use sc_cctp_core::{
    BitVectorCertificateField, BitVectorCertificateFieldConfig, CustomCertificateField,
    SizedByteObject,
};

#[derive(Args)]
pub struct BitVectorArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub input: InputArgs,

    /// Maximum compressed size accepted, in bytes
    #[arg(long, default_value_t = MAX_COMPRESSED_SIZE_BYTES)]
    pub max_compressed_size: i32,
}

pub fn run(config: &Config, args: BitVectorArgs) -> Result<()> {
    let lib = config.library()?;
    let raw = args.input.read(MAX_CERT_BIT_VECTOR_INPUT_SIZE, false)?;
    let compressed_size = raw.len();

    let cfg = BitVectorCertificateFieldConfig::new(
        (SC_BV_SIZE_IN_BYTES * 8) as i32,
        args.max_compressed_size,
    );
    let root = BitVectorCertificateField::new(raw).get_field_element(&cfg, &lib);

    if config.json_output {
        let report = serde_json::json!({
            "valid": !root.is_null(),
            "compressed_size": compressed_size,
            "merkle_root": (!root.is_null()).then(|| root.hex_repr()),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if !config.quiet {
        println!();
        print_verdict("Bit vector", !root.is_null());
        println!("  Compressed size: {} bytes", compressed_size);
        if !root.is_null() {
            println!("  Merkle root: {}", root);
        }
    }

    if root.is_null() {
        std::process::exit(2);
    }
    Ok(())
}
