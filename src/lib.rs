pub mod console;
pub mod core;

pub use console::{InputReader, MenuController};
pub use crate::core::db::{Hours, Project, ProjectDb, ProjectRepository};
