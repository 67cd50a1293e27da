mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from projects for tests
pub use projects::console::{ConsoleError, InputReader, MenuController, SessionState};
pub use projects::core::db::{
    DbError, Hours, NewProject, Project, ProjectDb, ProjectRepository, ProjectUpdate,
};
