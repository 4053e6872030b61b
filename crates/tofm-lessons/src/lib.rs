//! Lesson definitions and the generation pipeline that turns them into notebooks.

pub mod assets;
pub mod catalog;
pub mod generate;

pub use assets::{inline_images, load_blocks, mime_for, read_text, GenerateOptions};
pub use catalog::{CellRef, LessonCatalog, LessonDef};
pub use generate::{generate_all, generate_lesson, GenerationReport};
