use tracing::debug;

use crate::{
    console::{ConsoleError, ConsoleResult},
    core::db::{Project, ProjectRepository},
};

/// The project the session is currently working with, if any.
#[derive(Debug, Default)]
pub struct SelectionState {
    current: Option<Project>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Project> {
        self.current.as_ref()
    }

    pub fn require(&self) -> ConsoleResult<&Project> {
        self.current.as_ref().ok_or(ConsoleError::SelectionRequired)
    }

    pub fn clear(&mut self) {
        if let Some(project) = self.current.take() {
            debug!(id = project.id, "selection cleared");
        }
    }

    /// Make `id` the current project. An unknown id leaves nothing selected and
    /// is not an error; other store failures are returned after clearing.
    pub async fn select<S: ProjectRepository>(&mut self, store: &S, id: i64) -> ConsoleResult<()> {
        self.clear();
        match store.fetch_project_by_id(id).await {
            Ok(project) => {
                debug!(id, "project selected");
                self.current = Some(project);
                Ok(())
            }
            Err(e) if e.is_not_found() => {
                debug!(id, "no project with that id");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn refresh_after_update<S: ProjectRepository>(
        &mut self,
        store: &S,
        id: i64,
    ) -> ConsoleResult<()> {
        match store.fetch_project_by_id(id).await {
            Ok(project) => {
                self.current = Some(project);
                Ok(())
            }
            Err(e) => {
                if e.is_not_found() {
                    self.clear_if_matches(id);
                }
                Err(e.into())
            }
        }
    }

    pub fn clear_if_matches(&mut self, deleted_id: i64) {
        if self.current.as_ref().is_some_and(|p| p.id == deleted_id) {
            self.clear();
        }
    }
}
