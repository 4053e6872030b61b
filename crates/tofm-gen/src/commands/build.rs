use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use tofm_lessons::{generate_all, generate_lesson, GenerateOptions, LessonCatalog};

use super::DEFAULT_CATALOG;

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Lesson catalog YAML; asset paths resolve relative to it.
    #[arg(long, default_value = DEFAULT_CATALOG)]
    pub catalog: PathBuf,
    /// Directory notebook outputs are written under.
    #[arg(long, default_value = ".")]
    pub out: PathBuf,
    /// Only generate the named lesson.
    #[arg(long)]
    pub lesson: Option<String>,
    /// Prepend the solver install/import cell to every notebook.
    #[arg(long)]
    pub with_setup: bool,
}

impl Default for BuildArgs {
    fn default() -> Self {
        Self {
            catalog: PathBuf::from(DEFAULT_CATALOG),
            out: PathBuf::from("."),
            lesson: None,
            with_setup: false,
        }
    }
}

pub fn run(args: &BuildArgs) -> Result<(), Box<dyn Error>> {
    let catalog = LessonCatalog::load(&args.catalog)?;
    let options = GenerateOptions {
        include_setup: args.with_setup,
    };
    let reports = match &args.lesson {
        Some(name) => vec![generate_lesson(
            &catalog,
            catalog.lesson(name)?,
            &args.out,
            options,
        )?],
        None => generate_all(&catalog, &args.out, options)?,
    };
    for report in &reports {
        println!(
            "wrote {} ({} cells, sha256 {})",
            report.output.display(),
            report.cells,
            report.sha256
        );
    }
    Ok(())
}
