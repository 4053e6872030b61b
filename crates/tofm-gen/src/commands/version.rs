use std::error::Error;

use clap::Args;
use serde::Serialize;
use tofm_core::{to_canonical_json_bytes, FormatVersion};

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Emit JSON including the targeted notebook format.
    #[arg(long)]
    pub long: bool,
}

#[derive(Debug, Serialize)]
struct VersionInfo {
    version: String,
    nbformat: FormatVersion,
}

pub fn run(args: &VersionArgs) -> Result<(), Box<dyn Error>> {
    if !args.long {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    let info = VersionInfo {
        version: env!("CARGO_PKG_VERSION").into(),
        nbformat: FormatVersion::default(),
    };
    let json = to_canonical_json_bytes(&info).map_err(|err| Box::new(err) as Box<dyn Error>)?;
    println!("{}", String::from_utf8(json)?);
    Ok(())
}
