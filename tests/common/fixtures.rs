use std::{cell::Cell, io::Cursor};

use projects::{
    InputReader, MenuController,
    core::db::{DbResult, Hours, NewProject, Project, ProjectDb, ProjectRepository},
};

/// Opens a ProjectDb in a fresh temporary directory.
/// Returns both the database and the temp directory (which must be kept alive).
pub async fn create_test_db() -> (ProjectDb, tempfile::TempDir) {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("projects.db");
    let db = ProjectDb::open(&path)
        .await
        .expect("Failed to open test database");
    (db, dir)
}

/// Creates a NewProject with only a name set.
pub fn make_new_project(name: &str) -> NewProject {
    NewProject {
        name: name.to_string(),
        estimated_hours: None,
        actual_hours: None,
        difficulty: None,
        notes: None,
    }
}

/// Creates a NewProject with every field filled in.
pub fn make_full_project(name: &str, estimated: i64, actual: i64, difficulty: i32) -> NewProject {
    NewProject {
        name: name.to_string(),
        estimated_hours: Some(Hours::from_hundredths(estimated)),
        actual_hours: Some(Hours::from_hundredths(actual)),
        difficulty: Some(difficulty),
        notes: Some(format!("notes for {name}")),
    }
}

pub type ScriptedMenu<S> = MenuController<S, Cursor<Vec<u8>>, Vec<u8>>;

/// A menu session that reads `script` as its console input and records output.
pub fn scripted_menu<S: ProjectRepository>(store: S, script: &str) -> ScriptedMenu<S> {
    let input = InputReader::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
    MenuController::new(store, input)
}

pub fn output_of<S: ProjectRepository>(menu: ScriptedMenu<S>) -> String {
    String::from_utf8(menu.into_output()).expect("console output is utf-8")
}

/// Wraps a repository and counts every call made through it.
pub struct CountingStore<S> {
    inner: S,
    calls: Cell<usize>,
}

impl<S> CountingStore<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    fn bump(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}

impl<S: ProjectRepository> ProjectRepository for CountingStore<S> {
    async fn fetch_all_projects(&self) -> DbResult<Vec<Project>> {
        self.bump();
        self.inner.fetch_all_projects().await
    }

    async fn fetch_project_by_id(&self, id: i64) -> DbResult<Project> {
        self.bump();
        self.inner.fetch_project_by_id(id).await
    }

    async fn add_project(&self, project: &NewProject) -> DbResult<Project> {
        self.bump();
        self.inner.add_project(project).await
    }

    async fn modify_project_details(&self, project: &Project) -> DbResult<()> {
        self.bump();
        self.inner.modify_project_details(project).await
    }

    async fn delete_project(&self, id: i64) -> DbResult<()> {
        self.bump();
        self.inner.delete_project(id).await
    }
}
