//! Field-element command - validate a field element or a certificate slot

use super::{print_verdict, InputArgs};
use crate::config::Config;
use crate::CommonArgs;
use anyhow::{Context, Result};
use clap::Args;
use sc_cctp_core::constants::SC_FIELD_SIZE;
use sc_cctp_core::data::parse_custom_field_element;
use sc_cctp_core::{
    CustomCertificateField, CustomCertificateFieldConfig, FieldElement,
    FieldElementCertificateField, FieldElementCertificateFieldConfig, SizedByteObject,
};

#[derive(Args)]
pub struct FieldElementArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub input: InputArgs,

    /// Treat the input as a certificate slot with this many significant bits
    #[arg(long)]
    pub bits: Option<i32>,
}

pub fn run(config: &Config, args: FieldElementArgs) -> Result<()> {
    let lib = config.library()?;

    let (fe, slot_bits) = match args.bits {
        None => {
            let bytes = args.input.read(SC_FIELD_SIZE, true)?;
            (FieldElement::from_bytes(bytes), None)
        }
        Some(bits) => {
            let cfg = FieldElementCertificateFieldConfig::new(bits);
            if !cfg.is_valid() {
                anyhow::bail!("{} bits is not a valid field element config", bits);
            }
            let raw = match &args.input.hex {
                Some(hex) => parse_custom_field_element(hex.trim(), SC_FIELD_SIZE)
                    .context("Invalid custom field element")?,
                None => args.input.read(SC_FIELD_SIZE, false)?,
            };
            let field = FieldElementCertificateField::new(raw);
            (field.get_field_element(&cfg, &lib), Some(bits))
        }
    };

    let valid = !fe.is_null() && fe.is_valid(&lib);

    if config.json_output {
        let report = serde_json::json!({
            "valid": valid,
            "bits": slot_bits,
            "field_element": (!fe.is_null()).then(|| fe.hex_repr()),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if !config.quiet {
        println!();
        print_verdict("Field element", valid);
        if !fe.is_null() {
            println!("  Bytes: {}", fe);
        }
    }

    if !valid {
        std::process::exit(2);
    }
    Ok(())
}
