use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use log::error;
use tofm_notebook::validate_file;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Notebook files to validate.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

pub fn run(args: &CheckArgs) -> Result<(), Box<dyn Error>> {
    for path in &args.files {
        if let Err(err) = validate_file(path) {
            error!("event=check_failed path={} error={}", path.display(), err);
            return Err(Box::new(err));
        }
        println!("ok {}", path.display());
    }
    Ok(())
}
