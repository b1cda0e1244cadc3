//! CLI commands

pub mod bit_vector;
pub mod certificate;
pub mod check_library;
pub mod field_element;
pub mod hash;
pub mod proof;
pub mod vk;

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use sc_cctp_core::data::parse_sc_data;
use std::{fs, path::PathBuf};

/// Hex on the command line or raw bytes from a file
#[derive(Args, Clone)]
#[group(required = true, multiple = false)]
pub struct InputArgs {
    /// Hex-encoded data
    #[arg(long)]
    pub hex: Option<String>,

    /// Read raw bytes from a file
    #[arg(long)]
    pub file: Option<PathBuf>,
}

impl InputArgs {
    /// Decoded bytes, at most `size` (exactly `size` when `strict`)
    pub fn read(&self, size: usize, strict: bool) -> Result<Vec<u8>> {
        match (&self.hex, &self.file) {
            (Some(hex), _) => {
                parse_sc_data(hex.trim(), size, strict).context("Invalid hex input")
            }
            (None, Some(path)) => {
                let bytes =
                    fs::read(path).with_context(|| format!("Failed to read {:?}", path))?;
                let hex = hex::encode(&bytes);
                parse_sc_data(&hex, size, strict)
                    .with_context(|| format!("Invalid content in {:?}", path))
            }
            (None, None) => anyhow::bail!("No input. Use --hex or --file"),
        }
    }
}

/// Print a validity verdict line in human mode
pub fn print_verdict(label: &str, valid: bool) {
    if valid {
        println!("  {}: {}", label, style("valid ✓").green());
    } else {
        println!("  {}: {}", label, style("invalid ✗").red());
    }
}
