use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use tofm_lessons::LessonCatalog;

use super::DEFAULT_CATALOG;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Lesson catalog YAML.
    #[arg(long, default_value = DEFAULT_CATALOG)]
    pub catalog: PathBuf,
}

pub fn run(args: &ListArgs) -> Result<(), Box<dyn Error>> {
    let catalog = LessonCatalog::load(&args.catalog)?;
    for lesson in &catalog.lessons {
        println!(
            "{}\t{}\t{} cells\t{}",
            lesson.name,
            lesson.output.display(),
            lesson.cells.len(),
            lesson.title
        );
    }
    Ok(())
}
